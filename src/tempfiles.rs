use crate::verbose;
use std::io::ErrorKind;
use std::path::PathBuf;
use tempfile::TempPath;

/// Temp files owned by one run.
///
/// Every tracked file is removed when the set is dropped, so an early return
/// or panic in the pipeline cannot leave copies behind. `cleanup` does the
/// same thing eagerly and reports what happened.
#[derive(Debug, Default)]
pub struct TempFiles {
    paths: Vec<TempPath>,
}

impl TempFiles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes ownership of `path` and returns a plain copy of it for reading.
    pub fn track(&mut self, path: TempPath) -> PathBuf {
        let plain = path.to_path_buf();
        verbose!("Tracking temp file: {}", plain.display());
        self.paths.push(path);
        plain
    }

    pub fn paths(&self) -> Vec<PathBuf> {
        self.paths.iter().map(|p| p.to_path_buf()).collect()
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Removes every tracked file and returns how many were actually deleted.
    /// Files that are already gone are skipped; other failures are reported
    /// and do not stop the rest from being removed.
    pub fn cleanup(self) -> usize {
        let mut removed = 0;
        for path in self.paths {
            let display = path.to_path_buf();
            match path.close() {
                Ok(()) => {
                    verbose!("Removed temp file: {}", display.display());
                    removed += 1;
                }
                Err(e) if e.kind() == ErrorKind::NotFound => {
                    verbose!("Temp file already gone: {}", display.display());
                }
                Err(e) => {
                    crate::warn!("Failed to remove temp file {}: {}", display.display(), e);
                }
            }
        }
        removed
    }
}
