use log::debug;

use crate::{
    document::{Query, QueryError},
    report::Report,
    Checks,
};

/// Runs every check against `doc`. A selector with no matches is `false`; only a selector the
/// query engine rejects is an error.
pub fn check(doc: &impl Query, checks: &Checks) -> Result<Report, QueryError> {
    let mut report = Report::with_capacity(checks.len());
    for selector in checks {
        let present = doc.contains(selector)?;
        debug!("{selector:?} {}", if present { "present" } else { "missing" });
        report.push(selector.clone(), present);
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::Document;

    struct Counts(HashMap<&'static str, usize>);

    impl Query for Counts {
        fn count(&self, selector: &str) -> Result<usize, QueryError> {
            if selector.starts_with('!') {
                return Err(QueryError::new(selector, "unexpected token"));
            }
            Ok(self.0.get(selector).copied().unwrap_or(0))
        }
    }

    #[test]
    fn one_entry_per_check_in_order() {
        let q = Counts(HashMap::from([("p", 3), ("h1", 1)]));
        let checks = Checks::new(["p", "nonexistent-tag", "h1", "p"]);
        let r = check(&q, &checks).unwrap();
        let got: Vec<_> = r.iter().collect();
        assert_eq!(got, [("h1", true), ("nonexistent-tag", false), ("p", true)]);
    }

    #[test]
    fn invalid_selector_aborts() {
        let q = Counts(HashMap::new());
        let checks = Checks::new(["h1", "!bad"]);
        let err = check(&q, &checks).unwrap_err();
        assert_eq!(err.selector(), "!bad");
    }

    #[test]
    fn no_checks_no_entries() {
        let q = Counts(HashMap::new());
        assert!(check(&q, &Checks::default()).unwrap().is_empty());
    }

    #[test]
    fn against_parsed_document() {
        let doc = Document::parse(b"<html><body><h1>Hi</h1><p>text</p></body></html>");
        let checks = Checks::new(["h1", "p", "nonexistent-tag"]);
        let r = check(&doc, &checks).unwrap();
        assert_eq!(r.get("h1"), Some(true));
        assert_eq!(r.get("p"), Some(true));
        assert_eq!(r.get("nonexistent-tag"), Some(false));
    }
}
