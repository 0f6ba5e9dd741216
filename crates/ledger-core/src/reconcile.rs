//! Reconciliation of a ledger against a directory

use std::collections::BTreeSet;
use std::path::Path;

use serde::Serialize;

use crate::entry::LedgerEntry;

/// Differences between a ledger and the directory it describes.
///
/// Both lists are sorted and free of duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Reconciliation {
    /// Referenced by the ledger but absent from the directory
    pub missing: Vec<String>,
    /// Present in the directory but not referenced by the ledger
    pub extra: Vec<String>,
}

impl Reconciliation {
    /// True when the ledger and the directory agree.
    pub fn is_clean(&self) -> bool {
        self.missing.is_empty() && self.extra.is_empty()
    }
}

/// Set difference in both directions between `listed` and `actual` names.
pub fn reconcile<'a>(
    listed: impl IntoIterator<Item = &'a str>,
    actual: impl IntoIterator<Item = &'a str>,
) -> Reconciliation {
    let listed: BTreeSet<&str> = listed.into_iter().collect();
    let actual: BTreeSet<&str> = actual.into_iter().collect();

    Reconciliation {
        missing: listed.difference(&actual).map(|s| s.to_string()).collect(),
        extra: actual.difference(&listed).map(|s| s.to_string()).collect(),
    }
}

/// Compare ledger entries with the images currently in `images_dir`.
///
/// Page numbers play no part; a filename listed twice counts once.
pub fn verify(entries: &[LedgerEntry], images_dir: impl AsRef<Path>) -> Reconciliation {
    let actual = ledger_fs::list_images(images_dir);
    reconcile(
        entries.iter().map(|e| e.filename.as_str()),
        actual.iter().map(String::as_str),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn identical_sets_are_clean() {
        let result = reconcile(["a.png", "b.png"], ["b.png", "a.png"]);
        assert!(result.is_clean());
    }

    #[test]
    fn differences_are_sorted() {
        let result = reconcile(["z.png", "a.png", "m.png"], ["m.png", "y.png", "b.png"]);
        assert_eq!(
            result,
            Reconciliation {
                missing: vec!["a.png".into(), "z.png".into()],
                extra: vec!["b.png".into(), "y.png".into()],
            }
        );
    }

    #[test]
    fn duplicates_collapse() {
        let result = reconcile(["a.png", "a.png", "gone.png", "gone.png"], ["a.png"]);
        assert_eq!(result.missing, vec!["gone.png"]);
        assert!(result.extra.is_empty());
    }

    #[test]
    fn comparison_is_case_sensitive() {
        let result = reconcile(["P1.png"], ["p1.png"]);
        assert_eq!(result.missing, vec!["P1.png"]);
        assert_eq!(result.extra, vec!["p1.png"]);
    }

    #[test]
    fn serializes_missing_before_extra() {
        let result = reconcile(["a.png"], ["b.png"]);
        assert_eq!(
            serde_json::to_string(&result).unwrap(),
            r#"{"missing":["a.png"],"extra":["b.png"]}"#
        );
    }
}
