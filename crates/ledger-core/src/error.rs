//! Error types for ledger-core

use std::path::PathBuf;

/// Result type for ledger-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in ledger-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Ledger file could not be opened or read
    #[error("Cannot read ledger at {path}: {source}")]
    LedgerIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Ledger content rejected by the CSV reader or writer
    #[error("Malformed ledger at {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Archive file or one of its sources could not be accessed
    #[error("Archive I/O error at {path}: {source}")]
    ArchiveIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Zip container error
    #[error("Archive error at {path}: {source}")]
    Zip {
        path: PathBuf,
        #[source]
        source: zip::result::ZipError,
    },

    // Transparent wrappers for underlying crate errors
    /// Filesystem error from ledger-fs
    #[error(transparent)]
    Fs(#[from] ledger_fs::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Whether this error means the ledger file does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::LedgerIo { source, .. } if source.kind() == std::io::ErrorKind::NotFound
        )
    }
}
