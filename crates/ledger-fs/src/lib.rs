//! Filesystem layer for Image Ledger
//!
//! Lists the image files of a flat directory, resolves the default paths
//! the ledger commands fall back to, and writes files atomically.

pub mod constants;
pub mod error;
pub mod io;
pub mod listing;
pub mod path;

pub use constants::{DEFAULT_LEDGER_FILE, ImageExtension};
pub use error::{Error, Result};
pub use listing::{ImageFilter, list_images, list_images_with};
