//! Ledger CSV codec
//!
//! The persisted ledger is a UTF-8 CSV file with a `Page,Filename` header
//! followed by one `<page>,<filename>` record per entry.
//!
//! Reading is lenient: the header is dropped without inspection and every
//! later record goes through [`parse_row`], which either keeps it as an
//! entry or names the reason it is skipped. A skipped row is never an error.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Terminator, WriterBuilder};
use tracing::debug;

use crate::entry::LedgerEntry;
use crate::{Error, Result};

/// Header record written at the top of every ledger.
pub const HEADER: [&str; 2] = ["Page", "Filename"];

/// Why a ledger row was dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkipReason {
    /// The record has no fields
    Empty,
    /// The first field is not an integer
    BadPage,
    /// The page parsed but there is no filename field
    MissingFilename,
}

/// Per-row decision of the reader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowOutcome {
    Keep(LedgerEntry),
    Skip(SkipReason),
}

/// A skipped row and the 1-based physical line it started on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkippedRow {
    pub line: u64,
    pub reason: SkipReason,
}

/// Entries read from a ledger plus the rows that were dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LedgerReport {
    pub entries: Vec<LedgerEntry>,
    pub skipped: Vec<SkippedRow>,
}

/// Decide what to do with one data record.
///
/// Surrounding whitespace around the page number is tolerated; fields past
/// the second are ignored.
pub fn parse_row(record: &StringRecord) -> RowOutcome {
    let Some(raw_page) = record.get(0) else {
        return RowOutcome::Skip(SkipReason::Empty);
    };
    let Ok(page) = raw_page.trim().parse::<i128>() else {
        return RowOutcome::Skip(SkipReason::BadPage);
    };
    match record.get(1) {
        Some(filename) => RowOutcome::Keep(LedgerEntry::new(page, filename)),
        None => RowOutcome::Skip(SkipReason::MissingFilename),
    }
}

/// 1-based physical line of the record that starts at or after `offset`.
///
/// The reader reports a record's position as the end of the previous one,
/// which can sit before a trailing `\n` of a CRLF pair or before blank
/// lines. Those are stepped over before counting.
fn line_at(input: &[u8], offset: u64) -> u64 {
    let mut start = usize::try_from(offset).map_or(input.len(), |o| o.min(input.len()));
    while matches!(input.get(start), Some(b'\r' | b'\n')) {
        start += 1;
    }
    let newlines = input[..start].iter().filter(|&&b| b == b'\n').count();
    newlines as u64 + 1
}

/// Parse ledger CSV from any reader.
pub fn parse_ledger<R: Read>(mut reader: R) -> csv::Result<LedgerReport> {
    let mut input = Vec::new();
    reader.read_to_end(&mut input)?;

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(input.as_slice());

    let mut records = reader.records();
    // Header row, discarded unread.
    records.next().transpose()?;

    let mut report = LedgerReport::default();
    for record in records {
        let record = record?;
        match parse_row(&record) {
            RowOutcome::Keep(entry) => report.entries.push(entry),
            RowOutcome::Skip(reason) => {
                let line = record.position().map_or(0, |p| line_at(&input, p.byte()));
                debug!(line, ?reason, "Skipping ledger row");
                report.skipped.push(SkippedRow { line, reason });
            }
        }
    }
    Ok(report)
}

/// Read a ledger file, returning entries and skipped rows.
///
/// # Errors
///
/// A missing file is [`Error::LedgerIo`] with kind `NotFound`
/// (see [`Error::is_not_found`]); content the CSV reader rejects, such as
/// invalid UTF-8, is [`Error::Csv`].
pub fn read_ledger_report(path: impl AsRef<Path>) -> Result<LedgerReport> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| Error::LedgerIo {
        path: path.to_path_buf(),
        source,
    })?;
    let report = parse_ledger(file).map_err(|source| Error::Csv {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(
        path = %path.display(),
        entries = report.entries.len(),
        skipped = report.skipped.len(),
        "Read ledger"
    );
    Ok(report)
}

/// Read a ledger file into its entries, in file order.
pub fn read_ledger(path: impl AsRef<Path>) -> Result<Vec<LedgerEntry>> {
    read_ledger_report(path).map(|report| report.entries)
}

/// Serialize filenames as ledger CSV, numbering pages from 1.
pub fn encode_ledger<I, S>(filenames: I) -> csv::Result<Vec<u8>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut writer = WriterBuilder::new()
        .terminator(Terminator::CRLF)
        .from_writer(Vec::new());
    writer.write_record(HEADER)?;
    for (page, filename) in (1u64..).zip(filenames) {
        writer.write_record([page.to_string().as_str(), filename.as_ref()])?;
    }
    writer
        .into_inner()
        .map_err(|e| csv::Error::from(e.into_error()))
}

/// Write a ledger for `filenames` at `path`, replacing any existing file.
///
/// Parent directories are created as needed.
pub fn write_ledger<I, S>(path: impl AsRef<Path>, filenames: I) -> Result<()>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let path = path.as_ref();
    let content = encode_ledger(filenames).map_err(|source| Error::Csv {
        path: path.to_path_buf(),
        source,
    })?;
    ledger_fs::io::write_atomic(path, &content)?;
    debug!(path = %path.display(), bytes = content.len(), "Wrote ledger");
    Ok(())
}
