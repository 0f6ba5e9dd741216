//! String path helpers for ledger commands.
//!
//! Paths handed to the commands are echoed back in their output, so these
//! helpers work on the caller's strings instead of canonicalizing them.

use std::path::{MAIN_SEPARATOR, is_separator};

use crate::constants::DEFAULT_LEDGER_FILE;

/// Join a directory and a file name without doubling a trailing separator.
///
/// An empty directory yields the bare file name.
pub fn join_file(dir: &str, file_name: &str) -> String {
    if dir.is_empty() {
        file_name.to_string()
    } else if dir.ends_with(is_separator) {
        format!("{dir}{file_name}")
    } else {
        format!("{dir}{MAIN_SEPARATOR}{file_name}")
    }
}

/// Ledger path used when `index` is not given `-o`.
pub fn default_ledger_path(dir: &str) -> String {
    join_file(dir, DEFAULT_LEDGER_FILE)
}

/// Directory containing `path`, or `"."` when the path has none.
///
/// Trailing separators of the directory part are dropped unless the
/// directory is the filesystem root.
pub fn parent_dir_or_current(path: &str) -> String {
    let Some(idx) = path.rfind(is_separator) else {
        return ".".to_string();
    };
    let head = &path[..=idx];
    let trimmed = head.trim_end_matches(is_separator);
    if trimmed.is_empty() {
        head.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Extension of a file name, without the dot.
///
/// Leading dots belong to the stem, so `.png` has no extension.
pub fn extension(file_name: &str) -> Option<&str> {
    let stem_start = file_name.len() - file_name.trim_start_matches('.').len();
    let rest = &file_name[stem_start..];
    let idx = rest.rfind('.')?;
    Some(&rest[idx + 1..])
}

/// Whether `name` is a single plain path component.
pub fn is_bare_filename(name: &str) -> bool {
    !name.is_empty() && name != "." && name != ".." && !name.contains(is_separator)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_file_adds_separator() {
        assert_eq!(join_file("imgs", "ledger.csv"), format!("imgs{MAIN_SEPARATOR}ledger.csv"));
    }

    #[test]
    fn join_file_keeps_single_trailing_separator() {
        assert_eq!(join_file("imgs/", "ledger.csv"), "imgs/ledger.csv");
    }

    #[test]
    fn join_file_empty_dir() {
        assert_eq!(join_file("", "ledger.csv"), "ledger.csv");
    }

    #[test]
    fn parent_of_bare_name_is_current_dir() {
        assert_eq!(parent_dir_or_current("ledger.csv"), ".");
    }

    #[test]
    fn parent_of_nested_path() {
        assert_eq!(parent_dir_or_current("a/b/ledger.csv"), "a/b");
        assert_eq!(parent_dir_or_current("a//ledger.csv"), "a");
    }

    #[test]
    fn parent_of_root_file_is_root() {
        assert_eq!(parent_dir_or_current("/ledger.csv"), "/");
    }

    #[test]
    fn extension_cases() {
        assert_eq!(extension("p1.png"), Some("png"));
        assert_eq!(extension("archive.tar.GZ"), Some("GZ"));
        assert_eq!(extension("trailing."), Some(""));
        assert_eq!(extension(".png"), None);
        assert_eq!(extension("..png"), None);
        assert_eq!(extension("README"), None);
    }

    #[test]
    fn bare_filename_rejects_paths() {
        assert!(is_bare_filename("p1.png"));
        assert!(is_bare_filename(".hidden.png"));
        assert!(!is_bare_filename(""));
        assert!(!is_bare_filename(".."));
        assert!(!is_bare_filename("sub/p1.png"));
        assert!(!is_bare_filename("../p1.png"));
    }
}
