#![deny(missing_docs)]

//! # Serve Command
//!
//! Exposes the conversion over HTTP with the three entry points:
//!
//! - `POST /tables`: the request body is the raw document string.
//! - `POST /tables/upload`: the request body is an uploaded document file.
//! - `GET /tables?url=...`: the document is fetched from `url`.
//!
//! Every endpoint answers `200` with the table JSON. A document that cannot be
//! retrieved or decoded yields an empty result and an error log.

use crate::error::CliResult;
use crate::fetch::DocumentFetcher;
use actix_web::{get, post, web, App, HttpResponse, HttpServer};
use serde::Deserialize;
use std::net::TcpListener;
use std::sync::Arc;
use swagdoc_core::{parse_swagger_document_lenient, TableResult};

/// Largest accepted request body.
const MAX_DOCUMENT_BYTES: usize = 16 * 1024 * 1024;

/// Arguments for the serve command.
#[derive(clap::Args, Debug, Clone)]
pub struct ServeArgs {
    /// Address to bind.
    #[clap(long, env = "SWAGDOC_BIND", default_value = "127.0.0.1:8080")]
    pub bind: String,
}

#[derive(Debug, Deserialize)]
struct UrlQuery {
    url: String,
}

#[post("/tables")]
async fn tables_from_string(body: String) -> HttpResponse {
    HttpResponse::Ok().json(parse_swagger_document_lenient(&body))
}

#[post("/tables/upload")]
async fn tables_from_upload(body: web::Bytes) -> HttpResponse {
    let content = String::from_utf8_lossy(&body);
    HttpResponse::Ok().json(parse_swagger_document_lenient(&content))
}

#[get("/tables")]
async fn tables_from_url(
    query: web::Query<UrlQuery>,
    fetcher: web::Data<dyn DocumentFetcher>,
) -> HttpResponse {
    let url = query.into_inner().url;
    let fetcher = fetcher.into_inner();
    let fetched = web::block(move || fetcher.fetch(&url)).await;

    let result = match fetched {
        Ok(Ok(content)) => parse_swagger_document_lenient(&content),
        Ok(Err(e)) => {
            tracing::error!(error = %e, "parse error");
            TableResult::default()
        }
        Err(e) => {
            tracing::error!(error = %e, "fetch task failed");
            TableResult::default()
        }
    };
    HttpResponse::Ok().json(result)
}

/// Registers the table endpoints and shared state.
pub fn configure(fetcher: Arc<dyn DocumentFetcher>) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        cfg.app_data(web::Data::from(fetcher))
            .app_data(web::PayloadConfig::new(MAX_DOCUMENT_BYTES))
            .service(tables_from_string)
            .service(tables_from_upload)
            .service(tables_from_url);
    }
}

fn build_server(
    listener: TcpListener,
    fetcher: Arc<dyn DocumentFetcher>,
) -> std::io::Result<actix_web::dev::Server> {
    Ok(
        HttpServer::new(move || App::new().configure(configure(fetcher.clone())))
            .listen(listener)?
            .run(),
    )
}

/// Executes the serve command; blocks until the server stops.
pub fn execute(args: &ServeArgs, fetcher: Arc<dyn DocumentFetcher>) -> CliResult<()> {
    let listener = TcpListener::bind(&args.bind)?;
    tracing::info!(bind = %args.bind, "serving swagger tables");
    actix_web::rt::System::new().block_on(async move { build_server(listener, fetcher)?.await })?;
    Ok(())
}
