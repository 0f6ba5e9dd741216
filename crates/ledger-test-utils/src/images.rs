//! [`TestImageDir`] builder for ledger test scenarios.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory of image files with helper methods for test setup
/// and assertion.
///
/// # Example
///
/// ```rust,no_run
/// use ledger_test_utils::TestImageDir;
///
/// let dir = TestImageDir::with_images(&["p1.png", "p2.jpg"]);
/// dir.touch("note.txt");
/// dir.assert_file_exists("p1.png");
/// ```
pub struct TestImageDir {
    temp_dir: TempDir,
}

impl Default for TestImageDir {
    fn default() -> Self {
        Self::new()
    }
}

impl TestImageDir {
    /// Create an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Create a temporary directory holding one small file per name.
    ///
    /// Each file's content is its own name, so archive members can be told
    /// apart by content.
    pub fn with_images(names: &[&str]) -> Self {
        let dir = Self::new();
        for name in names {
            dir.write(name, name.as_bytes());
        }
        dir
    }

    /// Return the root path of the temporary directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Root path as a string, for token-based command invocations.
    ///
    /// # Panics
    /// Panics if the temp path is not valid UTF-8.
    pub fn root_str(&self) -> &str {
        self.root()
            .to_str()
            .expect("TestImageDir: temp path is not UTF-8")
    }

    /// Absolute path of `name` inside the directory.
    pub fn path(&self, name: &str) -> PathBuf {
        self.root().join(name)
    }

    /// Absolute path of `name` inside the directory, as a string.
    pub fn path_string(&self, name: &str) -> String {
        self.path(name).to_string_lossy().into_owned()
    }

    /// Create an empty file, creating parent directories as needed.
    pub fn touch(&self, name: &str) {
        self.write(name, b"");
    }

    /// Write `content` to `name`, creating parent directories as needed.
    pub fn write(&self, name: &str, content: &[u8]) {
        let path = self.path(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .unwrap_or_else(|e| panic!("TestImageDir::write: {}: {e}", parent.display()));
        }
        fs::write(&path, content)
            .unwrap_or_else(|e| panic!("TestImageDir::write: {}: {e}", path.display()));
    }

    /// Create a subdirectory.
    pub fn mkdir(&self, name: &str) {
        fs::create_dir_all(self.path(name))
            .unwrap_or_else(|e| panic!("TestImageDir::mkdir: {name}: {e}"));
    }

    /// Delete a file.
    pub fn remove(&self, name: &str) {
        fs::remove_file(self.path(name))
            .unwrap_or_else(|e| panic!("TestImageDir::remove: {name}: {e}"));
    }

    /// Read a file as UTF-8 text.
    pub fn read(&self, name: &str) -> String {
        fs::read_to_string(self.path(name))
            .unwrap_or_else(|e| panic!("TestImageDir::read: {name}: {e}"))
    }

    /// Assert that `name` exists.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path does not exist.
    pub fn assert_file_exists(&self, name: &str) {
        let full_path = self.path(name);
        assert!(
            full_path.exists(),
            "Expected file to exist: {}",
            full_path.display()
        );
    }

    /// Assert that `name` does **not** exist.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path exists.
    pub fn assert_file_not_exists(&self, name: &str) {
        let full_path = self.path(name);
        assert!(
            !full_path.exists(),
            "Expected file NOT to exist: {}",
            full_path.display()
        );
    }
}
