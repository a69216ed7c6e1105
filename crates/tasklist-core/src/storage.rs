// Rust guideline compliant 2026-10-12

//! Storage module for the JSON task file.
//!
//! The whole collection is read and written at once as a pretty-printed JSON
//! array. Writes go through a temp file and a rename so readers never observe
//! a half-written file; concurrent writers are last-write-wins.

use crate::{Error, Result, Task};
use std::path::{Path, PathBuf};

/// Whole-collection persistence for tasks.
#[derive(Debug, Clone)]
pub struct Storage {
    /// Path to the JSON file.
    path: PathBuf,
}

impl Storage {
    /// Creates a new Storage instance.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the JSON file
    ///
    /// # Errors
    ///
    /// Returns an error if the path is empty.
    pub fn new(path: PathBuf) -> Result<Self> {
        Self::validate_path(&path)?;
        Ok(Self { path })
    }

    fn validate_path(path: &Path) -> Result<()> {
        if path.as_os_str().is_empty() {
            return Err(Error::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "Path cannot be empty",
            )));
        }
        Ok(())
    }

    /// Returns a reference to the JSON file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|name| name.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl Storage {
    /// Loads all tasks, treating a missing or unreadable file as empty.
    ///
    /// Failures are logged and swallowed; use [`Storage::try_load`] to see
    /// them.
    pub fn load(&self) -> Vec<Task> {
        match self.try_load() {
            Ok(tasks) => tasks,
            Err(err) => {
                tracing::warn!(path = %self.path.display(), error = %err, "unreadable task file, starting empty");
                Vec::new()
            }
        }
    }

    /// Loads all tasks.
    ///
    /// A missing file yields an empty collection.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be opened
    /// - The file is not a JSON array of tasks
    pub fn try_load(&self) -> Result<Vec<Task>> {
        use std::fs::File;
        use std::io::BufReader;

        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.path)?;
        let tasks: Vec<Task> = serde_json::from_reader(BufReader::new(file))?;
        tracing::debug!(path = %self.path.display(), count = tasks.len(), "loaded tasks");
        Ok(tasks)
    }

    /// Replaces the stored collection with `tasks`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The parent directory cannot be created
    /// - The temp file cannot be written
    /// - The rename fails
    pub fn save(&self, tasks: &[Task]) -> Result<()> {
        use std::fs::File;
        use std::io::{BufWriter, Write};

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let temp_path = self.temp_path();
        {
            let file = File::create(&temp_path)?;
            let mut writer = BufWriter::new(file);
            serde_json::to_writer_pretty(&mut writer, tasks)?;
            writer.write_all(b"\n")?;
            writer.flush()?;
            writer.get_ref().sync_all()?;
        }

        std::fs::rename(&temp_path, &self.path)?;
        tracing::debug!(path = %self.path.display(), count = tasks.len(), "saved tasks");
        Ok(())
    }
}

impl Storage {
    /// Executes a closure with an exclusive lock on the storage file.
    ///
    /// The lock is advisory and lives in a sibling `.lock` file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The lock is held elsewhere
    /// - The closure returns an error
    pub fn with_lock<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce() -> Result<T>,
    {
        use fs2::FileExt;
        use std::fs::OpenOptions;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let lock_path = self.path.with_extension("lock");
        let lock_file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&lock_path)?;

        lock_file.try_lock_exclusive().map_err(|e| {
            Error::Io(std::io::Error::new(
                std::io::ErrorKind::WouldBlock,
                format!("Failed to acquire lock: {}", e),
            ))
        })?;

        let result = f();

        let _ = lock_file.unlock();

        result
    }
}
