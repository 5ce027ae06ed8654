//! Append-only line writer with size-based rotation.
//!
//! When the trace file grows past its size limit it is renamed to
//! `<name>.<UTC timestamp>` and a fresh file is started. Only the newest
//! backups are kept.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Default size limit before rotation (10 MB).
pub const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Default number of rotated files kept next to the active one.
pub const MAX_BACKUP_FILES: usize = 3;

/// Rotating writer for JSON lines.
///
/// The file is opened lazily on the first write.
pub struct FileWriter {
    file_path: PathBuf,
    max_bytes: u64,
    max_backups: usize,
    file: Mutex<Option<File>>,
}

impl FileWriter {
    #[must_use]
    pub const fn new(file_path: PathBuf) -> Self {
        Self::with_limits(file_path, MAX_FILE_SIZE_BYTES, MAX_BACKUP_FILES)
    }

    #[must_use]
    pub const fn with_limits(file_path: PathBuf, max_bytes: u64, max_backups: usize) -> Self {
        Self {
            file_path,
            max_bytes,
            max_backups,
            file: Mutex::new(None),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    /// Appends `line` and a newline, rotating first if the file is too large.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be rotated, opened or written, or
    /// if a previous writer panicked while holding the lock.
    pub fn write_line(&self, line: &str) -> io::Result<()> {
        let mut guard = self
            .file
            .lock()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("writer lock poisoned: {e}")))?;

        let too_large = fs::metadata(&self.file_path).is_ok_and(|m| m.len() > self.max_bytes);
        if too_large {
            *guard = None;
            self.rotate()?;
        }

        if guard.is_none() {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.file_path)?;
            *guard = Some(file);
        }
        let Some(file) = guard.as_mut() else {
            return Err(io::Error::new(io::ErrorKind::Other, "trace file not open"));
        };

        writeln!(file, "{line}")?;
        file.flush()
    }

    fn rotate(&self) -> io::Result<()> {
        let stamp = chrono::Utc::now().format("%Y%m%dT%H%M%S%.6f");
        let mut backup = self.file_path.clone().into_os_string();
        backup.push(format!(".{stamp}"));
        fs::rename(&self.file_path, &backup)?;

        self.prune_backups()
    }

    /// Deletes all but the newest `max_backups` rotated files.
    fn prune_backups(&self) -> io::Result<()> {
        let (Some(dir), Some(name)) = (
            self.file_path.parent(),
            self.file_path.file_name().and_then(|n| n.to_str()),
        ) else {
            return Ok(());
        };
        let prefix = format!("{name}.");

        // Timestamps sort lexicographically, newest last.
        let mut backups: Vec<PathBuf> = fs::read_dir(dir)?
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| {
                path.file_name()
                    .and_then(|n| n.to_str())
                    .is_some_and(|n| n.starts_with(&prefix))
            })
            .collect();
        backups.sort();

        let excess = backups.len().saturating_sub(self.max_backups);
        for old in &backups[..excess] {
            let _ = fs::remove_file(old);
        }

        Ok(())
    }
}

impl std::fmt::Debug for FileWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileWriter")
            .field("file_path", &self.file_path)
            .field("max_bytes", &self.max_bytes)
            .field("max_backups", &self.max_backups)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn backups(dir: &Path) -> usize {
        fs::read_dir(dir)
            .unwrap()
            .filter_map(Result::ok)
            .filter(|e| e.file_name().to_string_lossy().starts_with("trace.json."))
            .count()
    }

    #[test]
    fn appends_lines() {
        let dir = tempfile::tempdir().unwrap();
        let writer = FileWriter::new(dir.path().join("trace.json"));

        writer.write_line("{\"a\":1}").unwrap();
        writer.write_line("{\"b\":2}").unwrap();

        let content = fs::read_to_string(writer.path()).unwrap();
        assert_eq!(content, "{\"a\":1}\n{\"b\":2}\n");
    }

    #[test]
    fn rotates_past_size_limit_and_prunes() {
        let dir = tempfile::tempdir().unwrap();
        let writer = FileWriter::with_limits(dir.path().join("trace.json"), 8, 2);

        for i in 0..6 {
            writer.write_line(&format!("line number {i}")).unwrap();
            std::thread::sleep(std::time::Duration::from_millis(2));
        }

        assert!(backups(dir.path()) <= 2);
        let active = fs::read_to_string(writer.path()).unwrap();
        assert_eq!(active, "line number 5\n");
    }
}
