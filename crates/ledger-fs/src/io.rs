//! Atomic writes with file locking

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use fs2::FileExt;

use crate::{Error, Result};

/// Create the parent directory of `path` if it has one.
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))
        }
        _ => Ok(()),
    }
}

/// Removes a temp file unless the write it belongs to was committed.
struct TempFile {
    path: PathBuf,
    committed: bool,
}

impl Drop for TempFile {
    fn drop(&mut self) {
        if !self.committed {
            let _ = fs::remove_file(&self.path);
        }
    }
}

/// Write content atomically to a file with locking.
///
/// Writes to a temp file in the target's directory, then renames it over
/// the target. The temp file is removed on every failure path.
pub fn write_atomic(path: &Path, content: &[u8]) -> Result<()> {
    ensure_parent_dir(path)?;

    let temp_name = format!(
        ".{}.{}.tmp",
        path.file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default(),
        std::process::id()
    );
    let mut temp = TempFile {
        path: path.with_file_name(&temp_name),
        committed: false,
    };

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&temp.path)
        .map_err(|e| Error::io(&temp.path, e))?;

    file.lock_exclusive()
        .map_err(|_| Error::LockFailed { path: path.to_path_buf() })?;

    file.write_all(content)
        .map_err(|e| Error::io(&temp.path, e))?;
    file.sync_all()
        .map_err(|e| Error::io(&temp.path, e))?;

    file.unlock()
        .map_err(|_| Error::LockFailed { path: path.to_path_buf() })?;
    drop(file);

    fs::rename(&temp.path, path).map_err(|e| Error::io(path, e))?;
    temp.committed = true;

    Ok(())
}
