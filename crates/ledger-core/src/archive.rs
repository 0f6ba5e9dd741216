//! Zip export of the images a ledger references

use std::collections::HashSet;
use std::fs::File;
use std::io;
use std::path::Path;

use ledger_fs::path::is_bare_filename;
use tracing::{debug, info, warn};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::entry::LedgerEntry;
use crate::{Error, Result};

/// Copy the files referenced by `entries` from `images_dir` into a new zip
/// archive at `out_path`, returning how many were added.
///
/// Entries are visited in ledger order. Each present file is stored under
/// its bare name with Deflate compression. Entries whose file is absent, or
/// whose name is not a plain file name, are skipped. The zip format does not
/// allow two members with one name, so a repeated filename is added once.
///
/// Any existing file at `out_path` is replaced; parent directories are
/// created as needed.
pub fn archive(
    images_dir: impl AsRef<Path>,
    entries: &[LedgerEntry],
    out_path: impl AsRef<Path>,
) -> Result<usize> {
    let images_dir = images_dir.as_ref();
    let out_path = out_path.as_ref();

    ledger_fs::io::ensure_parent_dir(out_path)?;
    let file = File::create(out_path).map_err(|source| Error::ArchiveIo {
        path: out_path.to_path_buf(),
        source,
    })?;
    let mut zip = ZipWriter::new(file);
    let zip_err = |source: zip::result::ZipError| Error::Zip {
        path: out_path.to_path_buf(),
        source,
    };

    let mut written: HashSet<&str> = HashSet::new();
    for entry in entries {
        let name = entry.filename.as_str();
        if !is_bare_filename(name) {
            debug!(page = entry.page, name, "Skipping entry that is not a plain file name");
            continue;
        }

        let src = images_dir.join(name);
        let metadata = match src.metadata() {
            Ok(metadata) if metadata.is_file() => metadata,
            _ => {
                debug!(page = entry.page, src = %src.display(), "Skipping absent file");
                continue;
            }
        };

        if !written.insert(name) {
            warn!(page = entry.page, name, "Duplicate ledger entry; already archived");
            continue;
        }

        let mut source = File::open(&src).map_err(|source| Error::ArchiveIo {
            path: src.clone(),
            source,
        })?;
        let options = SimpleFileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .large_file(metadata.len() >= u64::from(u32::MAX));
        zip.start_file(name, options).map_err(zip_err)?;
        io::copy(&mut source, &mut zip).map_err(|source| Error::ArchiveIo {
            path: src.clone(),
            source,
        })?;
    }

    zip.finish().map_err(zip_err)?;

    let count = written.len();
    info!(out = %out_path.display(), count, "Archive written");
    Ok(count)
}
