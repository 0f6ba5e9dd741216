//! Tagged output lines
//!
//! Every command produces exactly one line `<TAG> <json-object>`. The tag
//! tells the caller how to read the object: `INFO` for a completed
//! command, `AUDIT` for a reconciliation result, `ERROR` for a failure
//! carrying a `code`.

use std::fmt;
use std::io::{self, Write};

use serde::Serialize;

use crate::reconcile::Reconciliation;

/// Output line tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    Info,
    Error,
    Audit,
}

impl Tag {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "INFO",
            Self::Error => "ERROR",
            Self::Audit => "AUDIT",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "INFO" => Some(Self::Info),
            "ERROR" => Some(Self::Error),
            "AUDIT" => Some(Self::Audit),
            _ => None,
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured failure reported on an `ERROR` line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "code", rename_all = "snake_case")]
pub enum Failure {
    /// Empty invocation
    NoCommand,
    /// A required argument is missing; `hint` shows the usage
    BadArgs { hint: &'static str },
    /// The ledger path is absent or not a file; `None` when `-l` had no value
    LedgerNotFound { path: Option<String> },
    /// Command name not recognized
    UnknownCommand { cmd: String },
    /// Filesystem or codec failure that could not be recovered
    IoError { message: String },
}

impl Failure {
    /// The wire `code` of this failure.
    pub fn code(&self) -> &'static str {
        match self {
            Self::NoCommand => "no_command",
            Self::BadArgs { .. } => "bad_args",
            Self::LedgerNotFound { .. } => "ledger_not_found",
            Self::UnknownCommand { .. } => "unknown_command",
            Self::IoError { .. } => "io_error",
        }
    }
}

/// Result of one dispatched command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Response {
    Indexed { indexed: usize, ledger: String },
    Audited(Reconciliation),
    Exported { exported: usize, zip: String },
    Message { msg: &'static str },
    Failed(Failure),
}

impl Response {
    pub fn tag(&self) -> Tag {
        match self {
            Self::Audited(_) => Tag::Audit,
            Self::Failed(_) => Tag::Error,
            Self::Indexed { .. } | Self::Exported { .. } | Self::Message { .. } => Tag::Info,
        }
    }

    /// Process exit status: 0 on success, 1 on failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Failed(_) => 1,
            _ => 0,
        }
    }

    pub fn to_line(&self) -> serde_json::Result<OutputLine> {
        OutputLine::new(self.tag(), self)
    }
}

impl From<Failure> for Response {
    fn from(failure: Failure) -> Self {
        Self::Failed(failure)
    }
}

/// A rendered `<TAG> <json>` line.
///
/// The payload is compact JSON with non-ASCII text left as raw UTF-8.
/// Only its parsed value is stable: consumers must decode the JSON (see
/// [`OutputLine::parse`]) rather than compare lines byte for byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLine {
    pub tag: Tag,
    pub json: String,
}

impl OutputLine {
    pub fn new(tag: Tag, payload: &impl Serialize) -> serde_json::Result<Self> {
        Ok(Self {
            tag,
            json: serde_json::to_string(payload)?,
        })
    }

    /// Split a line back into its tag and JSON payload.
    ///
    /// Returns `None` for an unknown tag or a payload that is not valid JSON.
    pub fn parse(line: &str) -> Option<(Tag, serde_json::Value)> {
        let (tag, json) = line.trim_end().split_once(' ')?;
        let tag = Tag::parse(tag)?;
        let value = serde_json::from_str(json).ok()?;
        Some((tag, value))
    }

    /// Write the line and a newline, then flush.
    pub fn write_to(&self, out: &mut impl Write) -> io::Result<()> {
        writeln!(out, "{self}")?;
        out.flush()
    }
}

impl fmt::Display for OutputLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.tag, self.json)
    }
}
