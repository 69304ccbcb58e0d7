//! the list of selectors a document is graded against

use std::path::Path;

use log::debug;
use serde::Deserialize;

use crate::error::{ConfigReason, Error};

/// Selectors to check, sorted and without duplicates.
///
/// The order only decides the order of the report, but it is normalized so the same checks
/// always produce the same output regardless of how the checks file lists them.
///
/// Sorting compares Unicode scalar values. A sort over UTF-16 code units orders characters
/// outside the Basic Multilingual Plane before U+E000..=U+FFFF instead of after them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "Vec<String>")]
pub struct Checks(Vec<String>);

impl From<Vec<String>> for Checks {
    fn from(mut value: Vec<String>) -> Self {
        value.sort();
        value.dedup();
        Checks(value)
    }
}

impl Checks {
    pub fn new<I, S>(selectors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        selectors
            .into_iter()
            .map(Into::into)
            .collect::<Vec<String>>()
            .into()
    }

    /// parses a JSON array of selector strings
    ///
    /// ```
    /// # use grader::Checks;
    /// let checks = Checks::from_json(r##"["title", "h1", "#profilelink", "h1"]"##).unwrap();
    /// assert_eq!(checks.as_slice(), ["#profilelink", "h1", "title"]);
    /// ```
    pub fn from_json(s: &str) -> serde_json::Result<Self> {
        serde_json::from_str(s)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let config_err = |reason| Error::Config {
            path: path.to_owned(),
            reason,
        };
        if !path.exists() {
            return Err(config_err(ConfigReason::Missing));
        }
        let text = std::fs::read_to_string(path).map_err(|e| config_err(ConfigReason::Io(e)))?;
        let checks = Self::from_json(&text).map_err(|e| config_err(ConfigReason::Format(e)))?;
        debug!("loaded {} checks from {}", checks.len(), path.display());
        Ok(checks)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a Checks {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
