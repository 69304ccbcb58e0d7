//! Checks an html document for the presence of required tags and attributes.
//!
//! A run loads a list of selectors (the checks), gets the document from disk or over http,
//! and reports for every selector whether at least one element matches it.

use std::path::Path;

use bytes::Bytes;
use fetch::{FetchContext, Source};
use log::info;

mod check;
mod checks;
mod config;
mod document;
mod error;
pub mod logger;
pub mod report;
mod util;

pub use check::check;
pub use checks::Checks;
pub use config::{Config, DEFAULT_CHECKS_FILE};
pub use document::{Document, Query, QueryError};
pub use error::{ConfigReason, Error};
pub use report::Report;

/// Grades html that is already in memory.
pub fn grade(html: &[u8], checks: &Checks) -> Result<Report, Error> {
    let doc = Document::parse(html);
    Ok(check(&doc, checks)?)
}

/// Gets the document from `source` and grades it. For a url, nothing is parsed or checked
/// until the fetch (and any retry) has finished.
pub async fn run(cx: &FetchContext, checks: &Checks, source: &Source) -> Result<Report, Error> {
    let html = match source {
        Source::File(path) => read_input(path)?,
        Source::Url(url) => cx.fetch(url).await.map_err(Error::Fetch)?,
    };
    info!("grading {source} against {} checks", checks.len());
    grade(&html, checks)
}

/// [`run`] on a fresh single threaded runtime, for callers without one.
pub fn run_blocking(cx: &FetchContext, checks: &Checks, source: &Source) -> Result<Report, Error> {
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(Error::Runtime)?;
    rt.block_on(run(cx, checks, source))
}

fn read_input(path: &Path) -> Result<Bytes, Error> {
    if !path.exists() {
        return Err(Error::InputMissing {
            path: path.to_owned(),
            source: None,
        });
    }
    fetch::read_local(path).map_err(|e| Error::InputMissing {
        path: path.to_owned(),
        source: Some(e),
    })
}
