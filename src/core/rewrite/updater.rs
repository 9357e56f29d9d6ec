//! Read, rewrite and conditionally write back each source file.
//!
//! Any I/O or decode failure aborts the run; nothing is retried or skipped.

use crate::error::Result;
use crate::utils::io;
use std::path::{Path, PathBuf};

use super::rules::{rewrite_text, RuleHit};
use super::walker::SourceFiles;

/// What happened to one file.
#[derive(Debug, Clone)]
pub struct FileOutcome {
    pub path: PathBuf,
    pub updated: bool,
    pub replacements: Vec<RuleHit>,
}

/// Totals for a full run over a root directory.
#[derive(Debug, Clone, Default)]
pub struct RewriteSummary {
    pub root: String,
    pub files_scanned: usize,
    pub files_updated: Vec<String>,
}

/// Rewrite a single file in place if either rule changes it.
pub fn update_file(path: &Path) -> Result<FileOutcome> {
    let content = io::read_file(path, &format!("read {}", path.display()))?;
    let rewrite = rewrite_text(&content);

    if rewrite.changed {
        io::write_file(
            path,
            &rewrite.content,
            &format!("write {}", path.display()),
        )?;
    }

    Ok(FileOutcome {
        path: path.to_path_buf(),
        updated: rewrite.changed,
        replacements: rewrite.replacements,
    })
}

/// Walk `root` and rewrite every Dart source, calling `on_updated` for each
/// file that was written. Stops at the first error, including one returned
/// by `on_updated`.
pub fn rewrite_tree<F>(root: &Path, mut on_updated: F) -> Result<RewriteSummary>
where
    F: FnMut(&FileOutcome) -> Result<()>,
{
    let mut summary = RewriteSummary {
        root: root.display().to_string(),
        ..Default::default()
    };

    for path in SourceFiles::new(root)? {
        let outcome = update_file(&path?)?;
        summary.files_scanned += 1;

        if outcome.updated {
            on_updated(&outcome)?;
            summary
                .files_updated
                .push(outcome.path.display().to_string());
        }
    }

    Ok(summary)
}
