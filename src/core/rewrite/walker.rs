//! Lazy recursive discovery of Dart sources under a root directory.

use crate::error::{Error, Result};
use std::collections::VecDeque;
use std::fs;
use std::path::{Path, PathBuf};

/// File name suffix of candidate sources.
pub const SOURCE_SUFFIX: &str = ".dart";

/// Iterator over every `.dart` file below a root, in sorted order per directory.
///
/// Directories are read one at a time as the iterator advances. Files of a
/// directory come before the contents of its subdirectories. Symlinked
/// directories are not descended.
#[derive(Debug)]
pub struct SourceFiles {
    pending_dirs: Vec<PathBuf>,
    ready: VecDeque<PathBuf>,
}

impl SourceFiles {
    /// Start a walk at `root`. Fails if `root` is missing or not a directory.
    pub fn new(root: &Path) -> Result<Self> {
        if !root.exists() {
            return Err(Error::root_not_found(root.display().to_string()));
        }
        if !root.is_dir() {
            return Err(Error::validation_invalid_argument(
                "root",
                format!("'{}' is not a directory", root.display()),
            ));
        }

        Ok(SourceFiles {
            pending_dirs: vec![root.to_path_buf()],
            ready: VecDeque::new(),
        })
    }

    fn read_dir(&mut self, dir: &Path) -> Result<()> {
        let entries = fs::read_dir(dir).map_err(|e| {
            Error::internal_io(e.to_string(), Some(format!("read dir {}", dir.display())))
        })?;

        let mut paths = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| {
                Error::internal_io(e.to_string(), Some(format!("read dir {}", dir.display())))
            })?;
            let file_type = entry.file_type().map_err(|e| {
                Error::internal_io(
                    e.to_string(),
                    Some(format!("stat {}", entry.path().display())),
                )
            })?;
            paths.push((entry.path(), file_type));
        }
        paths.sort_by(|a, b| a.0.cmp(&b.0));

        let mut subdirs = Vec::new();
        for (path, file_type) in paths {
            if file_type.is_dir() {
                subdirs.push(path);
                continue;
            }
            // Symlink to a directory: listed, never followed
            if file_type.is_symlink() && path.is_dir() {
                continue;
            }
            if is_source_file(&path) {
                self.ready.push_back(path);
            }
        }

        // Stack pops from the end; push in reverse to visit in sorted order
        self.pending_dirs.extend(subdirs.into_iter().rev());
        Ok(())
    }
}

impl Iterator for SourceFiles {
    type Item = Result<PathBuf>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(path) = self.ready.pop_front() {
                return Some(Ok(path));
            }
            let dir = self.pending_dirs.pop()?;
            if let Err(e) = self.read_dir(&dir) {
                return Some(Err(e));
            }
        }
    }
}

/// Suffix check on the file name only.
pub fn is_source_file(path: &Path) -> bool {
    path.file_name()
        .map(|n| n.to_string_lossy().ends_with(SOURCE_SUFFIX))
        .unwrap_or(false)
}
