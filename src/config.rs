use std::path::PathBuf;

use fetch::{FetchContext, RetryPolicy};

use crate::Error;

pub const DEFAULT_CHECKS_FILE: &str = "checks.json";

/// Knobs for a grading run. The command line fills these in; tests construct them directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub checks_file: PathBuf,
    pub retry: RetryPolicy,
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            checks_file: DEFAULT_CHECKS_FILE.into(),
            retry: RetryPolicy::default(),
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_owned(),
        }
    }
}

impl Config {
    pub fn fetch_context(&self) -> Result<FetchContext, Error> {
        FetchContext::with_user_agent(&self.user_agent, self.retry).map_err(Error::Fetch)
    }
}
