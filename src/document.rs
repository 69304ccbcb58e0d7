//! parsed html and the selector queries run against it

use log::debug;
use scraper::{Html, Selector};

/// Something selectors can be run against.
pub trait Query {
    /// number of elements matching `selector`
    fn count(&self, selector: &str) -> Result<usize, QueryError>;

    /// if at least one element matches `selector`
    fn contains(&self, selector: &str) -> Result<bool, QueryError> {
        Ok(self.count(selector)? > 0)
    }
}

/// A selector the query engine could not parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryError {
    selector: String,
    message: String,
}

impl QueryError {
    pub fn new(selector: &str, message: impl Into<String>) -> Self {
        QueryError {
            selector: selector.to_owned(),
            message: message.into(),
        }
    }

    pub fn selector(&self) -> &str {
        &self.selector
    }
}

impl std::fmt::Display for QueryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid selector {:?}: {}", self.selector, self.message)
    }
}

impl std::error::Error for QueryError {}

/// An html document, parsed leniently the way a browser would.
pub struct Document {
    html: Html,
}

impl Document {
    /// Never fails; markup errors are recovered from. Invalid utf-8 is replaced.
    pub fn parse(bytes: &[u8]) -> Self {
        let text = String::from_utf8_lossy(bytes);
        let html = Html::parse_document(&text);
        if !html.errors.is_empty() {
            debug!("recovered from {} parse errors", html.errors.len());
        }
        Document { html }
    }

    fn selector(selector: &str) -> Result<Selector, QueryError> {
        Selector::parse(selector).map_err(|e| QueryError::new(selector, e.to_string()))
    }
}

impl Query for Document {
    fn count(&self, selector: &str) -> Result<usize, QueryError> {
        let sel = Self::selector(selector)?;
        Ok(self.html.select(&sel).count())
    }

    fn contains(&self, selector: &str) -> Result<bool, QueryError> {
        let sel = Self::selector(selector)?;
        Ok(self.html.select(&sel).next().is_some())
    }
}
