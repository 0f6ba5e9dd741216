//! Image listing for a single flat directory.

use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::constants::ImageExtension;
use crate::path::extension;

/// The set of extensions the lister accepts.
///
/// The default filter accepts every [`ImageExtension`]. A filter is an
/// immutable value; narrower filters are built with [`ImageFilter::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFilter {
    extensions: Vec<ImageExtension>,
}

impl Default for ImageFilter {
    fn default() -> Self {
        Self::new(ImageExtension::ALL)
    }
}

impl ImageFilter {
    pub fn new(extensions: impl IntoIterator<Item = ImageExtension>) -> Self {
        let mut extensions: Vec<ImageExtension> = extensions.into_iter().collect();
        extensions.dedup();
        Self { extensions }
    }

    /// Accepted extensions.
    pub fn extensions(&self) -> &[ImageExtension] {
        &self.extensions
    }

    /// Whether a file name carries an accepted extension.
    pub fn accepts(&self, file_name: &str) -> bool {
        extension(file_name)
            .and_then(ImageExtension::from_extension)
            .is_some_and(|ext| self.extensions.contains(&ext))
    }
}

/// List the image files directly inside `directory` with the default filter.
pub fn list_images(directory: impl AsRef<Path>) -> Vec<String> {
    list_images_with(&ImageFilter::default(), directory)
}

/// List the regular files directly inside `directory` accepted by `filter`.
///
/// Names are sorted byte-wise. A path that does not exist, is not a
/// directory, or cannot be read yields an empty list.
pub fn list_images_with(filter: &ImageFilter, directory: impl AsRef<Path>) -> Vec<String> {
    let dir = directory.as_ref();
    if !dir.is_dir() {
        debug!(dir = %dir.display(), "Not a directory; nothing to list");
        return Vec::new();
    }

    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            warn!(dir = %dir.display(), error = %e, "Cannot read directory");
            return Vec::new();
        }
    };

    let mut names = Vec::new();
    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                debug!(dir = %dir.display(), error = %e, "Skipping unreadable entry");
                continue;
            }
        };
        // Follows symlinks, so a link to an image counts as the image.
        if !entry.path().is_file() {
            continue;
        }
        let name = match entry.file_name().into_string() {
            Ok(name) => name,
            Err(raw) => {
                debug!(name = ?raw, "Skipping non UTF-8 file name");
                continue;
            }
        };
        if filter.accepts(&name) {
            names.push(name);
        }
    }

    names.sort_unstable();
    debug!(dir = %dir.display(), count = names.len(), "Listed images");
    names
}
