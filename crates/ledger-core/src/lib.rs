//! Ledger reconciliation engine for Image Ledger
//!
//! A ledger is an ordered CSV mapping of page numbers to image file names.
//! This crate builds ledgers from directory listings, reads them back,
//! reconciles them against the live directory, and exports the referenced
//! images into a zip archive. [`run_command`] drives all of it from a flat
//! token list and reports one tagged JSON line per invocation.

pub mod archive;
pub mod codec;
pub mod dispatch;
pub mod entry;
pub mod error;
pub mod output;
pub mod reconcile;

pub use archive::archive;
pub use codec::{
    LedgerReport, RowOutcome, SkipReason, SkippedRow, encode_ledger, parse_ledger, parse_row,
    read_ledger, read_ledger_report, write_ledger,
};
pub use dispatch::{CommandArgs, Flag, FlagValue, run_command};
pub use entry::LedgerEntry;
pub use error::{Error, Result};
pub use output::{Failure, OutputLine, Response, Tag};
pub use reconcile::{Reconciliation, reconcile, verify};
