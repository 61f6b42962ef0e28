#![deny(missing_docs)]

//! # Tables Command
//!
//! Converts one Swagger document into the grouped table JSON.

use crate::error::CliResult;
use crate::fetch::{read_file, read_raw, DocumentFetcher};
use std::fs;
use std::path::PathBuf;
use swagdoc_core::{parse_swagger_document_with_format, DocumentFormat, TableResult};

/// Input format accepted on the command line.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatArg {
    /// JSON document.
    Json,
    /// YAML document.
    Yaml,
}

impl From<FormatArg> for DocumentFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Json => DocumentFormat::Json,
            FormatArg::Yaml => DocumentFormat::Yaml,
        }
    }
}

/// Arguments for the tables command.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct TablesArgs {
    /// Path to a Swagger 2.0 document. Reads stdin when neither `--file` nor `--url` is given.
    #[clap(long, conflicts_with = "url")]
    pub file: Option<PathBuf>,

    /// URL of a Swagger 2.0 document (e.g. http://host/v2/api-docs).
    #[clap(long)]
    pub url: Option<String>,

    /// Input format. Defaults to YAML for `.yaml`/`.yml` files, JSON otherwise.
    #[clap(long, value_enum)]
    pub format: Option<FormatArg>,

    /// Output file. Defaults to stdout.
    #[clap(long)]
    pub output: Option<PathBuf>,

    /// Pretty-print the JSON output.
    #[clap(long)]
    pub pretty: bool,
}

impl TablesArgs {
    fn document_format(&self) -> DocumentFormat {
        if let Some(format) = self.format {
            return format.into();
        }
        self.file
            .as_ref()
            .and_then(|f| f.extension())
            .map(|ext| DocumentFormat::from_extension(&ext.to_string_lossy()))
            .unwrap_or_default()
    }
}

/// Loads and converts the document described by `args`.
///
/// # Arguments
///
/// * `args` - Command arguments.
/// * `fetcher` - Used when `--url` is given.
/// * `stdin` - Raw document source when no file or URL is given.
pub fn convert(
    args: &TablesArgs,
    fetcher: &dyn DocumentFetcher,
    stdin: impl std::io::Read,
) -> CliResult<TableResult> {
    let content = match (&args.file, &args.url) {
        (Some(path), _) => read_file(path)?,
        (None, Some(url)) => fetcher.fetch(url)?,
        (None, None) => read_raw(stdin)?,
    };

    let result = parse_swagger_document_with_format(&content, args.document_format())?;
    tracing::info!(
        groups = result.table_map.len(),
        operations = result.operation_count(),
        "document converted"
    );
    Ok(result)
}

/// Executes the tables command and writes the JSON output.
pub fn execute(args: &TablesArgs, fetcher: &dyn DocumentFetcher) -> CliResult<()> {
    let result = convert(args, fetcher, std::io::stdin().lock())?;

    let json = if args.pretty {
        serde_json::to_string_pretty(&result)
    } else {
        serde_json::to_string(&result)
    }
    .map_err(swagdoc_core::AppError::from)?;

    match &args.output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, json)?;
            eprintln!("Wrote tables to {:?}", path);
        }
        None => println!("{}", json),
    }

    Ok(())
}
