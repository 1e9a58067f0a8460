use std::path::{Path, PathBuf};

use chrono::Utc;
use tracing::{debug, instrument};

use crate::error::VaultError;
use crate::slug::slugify;

/// Writes notes as Markdown files into a single vault directory.
///
/// The directory is created on the first write, not on construction.
#[derive(Clone, Debug)]
pub struct VaultWriter {
    dir: PathBuf,
}

impl VaultWriter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Write a new `<slug>-<unix seconds>.md` file and return its path.
    pub fn save_new(&self, title: &str, content: &str) -> Result<PathBuf, VaultError> {
        self.save_new_at(title, content, Utc::now().timestamp())
    }

    /// Overwrite `path` if it exists. Otherwise write a fresh timestamped file
    /// in the vault named after the old file stem (or the title slug).
    ///
    /// An existing `path` is overwritten wherever it lives; it is not
    /// confined to the vault directory.
    pub fn update(&self, path: &Path, title: &str, content: &str) -> Result<PathBuf, VaultError> {
        self.update_at(path, title, content, Utc::now().timestamp())
    }

    #[instrument(skip(self, content))]
    fn save_new_at(&self, title: &str, content: &str, timestamp: i64) -> Result<PathBuf, VaultError> {
        let path = self.dir.join(file_name(&slugify(title), timestamp));
        self.write(&path, title, content)?;
        Ok(path)
    }

    #[instrument(skip(self, content), fields(path = %path.display()))]
    fn update_at(
        &self,
        path: &Path,
        title: &str,
        content: &str,
        timestamp: i64,
    ) -> Result<PathBuf, VaultError> {
        if path.exists() {
            write_file(path, title, content)?;
            return Ok(path.to_path_buf());
        }

        let base = path
            .file_stem()
            .and_then(|s| s.to_str())
            .filter(|s| !s.is_empty())
            .map_or_else(|| slugify(title), str::to_string);
        debug!(base = %base, "original note file missing, writing a new one");

        let fresh = self.dir.join(file_name(&base, timestamp));
        self.write(&fresh, title, content)?;
        Ok(fresh)
    }

    fn write(&self, path: &Path, title: &str, content: &str) -> Result<(), VaultError> {
        std::fs::create_dir_all(&self.dir).map_err(|e| VaultError::io("create", &self.dir, e))?;
        write_file(path, title, content)
    }
}

/// File body: a level-one heading with the title, a blank line, then the content.
pub fn render(title: &str, content: &str) -> String {
    format!("# {title}\n\n{content}")
}

fn file_name(base: &str, timestamp: i64) -> String {
    format!("{base}-{timestamp}.md")
}

fn write_file(path: &Path, title: &str, content: &str) -> Result<(), VaultError> {
    std::fs::write(path, render(title, content)).map_err(|e| VaultError::io("write", path, e))?;
    debug!(path = %path.display(), "note file written");
    Ok(())
}
