use std::path::PathBuf;

use crate::document::QueryError;

/// Everything that stops a run from producing a report.
#[derive(Debug)]
pub enum Error {
    /// checks file missing, unreadable, or not a JSON list of selectors
    Config { path: PathBuf, reason: ConfigReason },
    /// `--file` named a document that isn't there (or can't be read)
    InputMissing {
        path: PathBuf,
        source: Option<anyhow::Error>,
    },
    /// neither a file nor a url was given
    Usage,
    /// fetching the url failed, retries included
    Fetch(anyhow::Error),
    Query(QueryError),
    /// the report could not be written out
    Output(std::io::Error),
    /// the async runtime could not be started
    Runtime(std::io::Error),
}

#[derive(Debug)]
pub enum ConfigReason {
    Missing,
    Io(std::io::Error),
    Format(serde_json::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Config { path, reason } => match reason {
                ConfigReason::Missing => write!(f, "{} does not exist. Exiting.", path.display()),
                ConfigReason::Io(e) => write!(f, "could not read checks file {}: {e}", path.display()),
                ConfigReason::Format(e) => write!(
                    f,
                    "checks file {} is not a JSON list of selectors: {e}",
                    path.display()
                ),
            },
            Error::InputMissing { path, source: None } => {
                write!(f, "{} does not exist. Exiting.", path.display())
            }
            Error::InputMissing {
                path,
                source: Some(e),
            } => write!(f, "could not read {}: {e:#}", path.display()),
            Error::Usage => f.write_str("--file or --url not found. Please use one of them."),
            Error::Fetch(e) => write!(f, "could not fetch document: {e:#}"),
            Error::Query(e) => write!(f, "{e}"),
            Error::Output(e) => write!(f, "could not write report: {e}"),
            Error::Runtime(e) => write!(f, "could not start async runtime: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Config { reason, .. } => match reason {
                ConfigReason::Missing => None,
                ConfigReason::Io(e) => Some(e),
                ConfigReason::Format(e) => Some(e),
            },
            Error::InputMissing { source, .. } => source
                .as_ref()
                .map(|e| &**e as &(dyn std::error::Error + 'static)),
            Error::Usage => None,
            Error::Fetch(e) => Some(&**e),
            Error::Query(e) => Some(e),
            Error::Output(e) | Error::Runtime(e) => Some(e),
        }
    }
}

impl From<QueryError> for Error {
    fn from(value: QueryError) -> Self {
        Error::Query(value)
    }
}
