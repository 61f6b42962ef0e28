#![deny(missing_docs)]

//! # Document Retrieval
//!
//! Loads the raw Swagger document from one of the three supported sources:
//! a URL, a file on disk, or a raw string (stdin).
//!
//! URL retrieval is abstracted behind `DocumentFetcher` so it can be mocked in
//! tests without network access.

use crate::error::{CliError, CliResult};
use std::io::Read;
use std::path::Path;

/// Interface for retrieving a document over the network.
pub trait DocumentFetcher: Send + Sync {
    /// Fetches the document body as a string.
    fn fetch(&self, url: &str) -> CliResult<String>;
}

/// Fetcher backed by a blocking `ureq` GET.
#[cfg(feature = "client")]
pub struct HttpFetcher;

#[cfg(feature = "client")]
impl DocumentFetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> CliResult<String> {
        tracing::debug!(url, "fetching swagger document");
        ureq::get(url)
            .header("Accept", "application/json")
            .call()
            .map_err(|e| CliError::Fetch(format!("{}: {}", url, e)))?
            .body_mut()
            .read_to_string()
            .map_err(|e| CliError::Fetch(format!("{}: {}", url, e)))
    }
}

/// Fetcher used when the binary is built without the `client` feature.
#[cfg(any(test, not(feature = "client")))]
pub struct OfflineFetcher;

#[cfg(any(test, not(feature = "client")))]
impl DocumentFetcher for OfflineFetcher {
    fn fetch(&self, url: &str) -> CliResult<String> {
        Err(CliError::Fetch(format!(
            "{}: built without the `client` feature",
            url
        )))
    }
}

/// Returns the fetcher matching the enabled features.
pub fn default_fetcher() -> Box<dyn DocumentFetcher> {
    #[cfg(feature = "client")]
    {
        Box::new(HttpFetcher)
    }
    #[cfg(not(feature = "client"))]
    {
        Box::new(OfflineFetcher)
    }
}

/// Reads an uploaded / on-disk document. Invalid UTF-8 is replaced.
pub fn read_file(path: &Path) -> CliResult<String> {
    if !path.exists() {
        return Err(CliError::General(format!(
            "Swagger file not found: {:?}",
            path
        )));
    }
    let bytes = std::fs::read(path)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Reads a raw document string from a reader (stdin in the binary).
pub fn read_raw(mut reader: impl Read) -> CliResult<String> {
    let mut content = String::new();
    reader.read_to_string(&mut content)?;
    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_read_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("swagger.json");
        fs::write(&path, r#"{"swagger":"2.0"}"#).unwrap();
        assert_eq!(read_file(&path).unwrap(), r#"{"swagger":"2.0"}"#);
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempdir().unwrap();
        let err = read_file(&dir.path().join("missing.json")).unwrap_err();
        assert!(format!("{}", err).contains("Swagger file not found"));
    }

    #[test]
    fn test_read_raw() {
        let raw = read_raw("{\"paths\":{}}".as_bytes()).unwrap();
        assert_eq!(raw, "{\"paths\":{}}");
    }

    #[test]
    fn test_offline_fetcher_fails() {
        let err = OfflineFetcher.fetch("http://example.invalid").unwrap_err();
        assert!(matches!(err, CliError::Fetch(_)));
    }
}
