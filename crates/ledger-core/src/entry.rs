//! Ledger entries

use serde::Serialize;

/// One ledger row: a page number and the image file it refers to.
///
/// Pages written by the engine run densely from 1, but entries read from
/// disk keep whatever integer the row carried. The page is an `i128` so
/// that oversized hand-written numbers are still kept.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct LedgerEntry {
    pub page: i128,
    pub filename: String,
}

impl LedgerEntry {
    pub fn new(page: i128, filename: impl Into<String>) -> Self {
        Self {
            page,
            filename: filename.into(),
        }
    }

    /// Number `filenames` from 1 in order.
    pub fn numbered<I, S>(filenames: I) -> Vec<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        filenames
            .into_iter()
            .zip(1..)
            .map(|(filename, page)| Self::new(page, filename))
            .collect()
    }
}
