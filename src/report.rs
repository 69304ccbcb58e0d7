//! selector presence results and their JSON form

use std::io::Write;

use serde::{ser::SerializeMap, Serialize, Serializer};
use serde_json::ser::PrettyFormatter;

const INDENT: &[u8] = b"    ";

/// Selector to presence, kept in the order the checks were run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    entries: Vec<(String, bool)>,
}

impl Report {
    pub(crate) fn with_capacity(cap: usize) -> Self {
        Report {
            entries: Vec::with_capacity(cap),
        }
    }

    pub(crate) fn push(&mut self, selector: String, present: bool) {
        self.entries.push((selector, present));
    }

    pub fn get(&self, selector: &str) -> Option<bool> {
        self.entries
            .iter()
            .find(|(s, _)| s == selector)
            .map(|&(_, present)| present)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.entries.iter().map(|(s, p)| (s.as_str(), *p))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// number of selectors that were found
    pub fn passed(&self) -> usize {
        self.entries.iter().filter(|(_, p)| *p).count()
    }

    pub fn all_present(&self) -> bool {
        self.passed() == self.len()
    }
}

impl Serialize for Report {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (selector, present) in &self.entries {
            map.serialize_entry(selector, present)?;
        }
        map.end()
    }
}

/// Writes the report as a JSON object indented by four spaces, plus a trailing newline.
pub fn write(report: &Report, mut out: impl Write) -> std::io::Result<()> {
    {
        let formatter = PrettyFormatter::with_indent(INDENT);
        let mut ser = serde_json::Serializer::with_formatter(&mut out, formatter);
        report.serialize(&mut ser)?;
    }
    out.write_all(b"\n")?;
    out.flush()
}

/// [`write`] into a string
pub fn to_json(report: &Report) -> std::io::Result<String> {
    let mut buf = Vec::new();
    write(report, &mut buf)?;
    String::from_utf8(buf).map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
}
