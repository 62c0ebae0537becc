use std::path::Path;

use anyhow::{Context, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use walkdir::WalkDir;

use revive_core::SourceFile;

use crate::config::DiscoveryConfig;

/// Collect the project's source files as analyzer input.
///
/// Names are paths relative to `root` with `/` separators, sorted so the
/// analysis does not depend on directory iteration order. Unreadable,
/// oversized and non-UTF-8 files are skipped with a warning. Excluded
/// directories are pruned without being descended into.
pub fn collect_files(root: &Path, config: &DiscoveryConfig) -> Result<Vec<SourceFile>> {
    if !root.is_dir() {
        anyhow::bail!("'{}' is not a directory", root.display());
    }
    let excludes = build_glob_set(&config.exclude_patterns)?;

    let walker = WalkDir::new(root).into_iter().filter_entry(|e| {
        e.depth() == 0
            || !is_excluded(&excludes, &relative_path(root, e.path()), e.file_type().is_dir())
    });

    let mut files = Vec::new();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!(error = %e, "failed to walk directory entry");
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        let rel_path = relative_path(root, path);

        let matches_ext = path.extension().is_some_and(|ext| {
            let ext = ext.to_string_lossy();
            config.extensions.iter().any(|e| e.eq_ignore_ascii_case(&ext))
        });
        if !matches_ext {
            continue;
        }

        match entry.metadata() {
            Ok(meta) if meta.len() > config.max_file_bytes => {
                tracing::warn!(file = %rel_path, bytes = meta.len(), "skipping oversized file");
                continue;
            }
            Ok(_) => {}
            Err(e) => {
                tracing::warn!(file = %rel_path, error = %e, "failed to stat file");
                continue;
            }
        }

        let bytes = match std::fs::read(path) {
            Ok(b) => b,
            Err(e) => {
                tracing::warn!(file = %rel_path, error = %e, "failed to read file");
                continue;
            }
        };
        match String::from_utf8(bytes) {
            Ok(content) => files.push(SourceFile::new(rel_path, content)),
            Err(_) => tracing::warn!(file = %rel_path, "skipping non-UTF-8 file"),
        }
    }

    files.sort_by(|a, b| a.name.cmp(&b.name));
    tracing::debug!(count = files.len(), root = %root.display(), "collected source files");
    Ok(files)
}

fn relative_path(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .replace('\\', "/")
}

/// Directories are also tried with a trailing `/`, so `**/name/**` prunes
/// `name` itself.
fn is_excluded(excludes: &GlobSet, rel_path: &str, is_dir: bool) -> bool {
    excludes.is_match(rel_path) || (is_dir && excludes.is_match(format!("{rel_path}/")))
}

fn build_glob_set(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = Glob::new(pattern)
            .with_context(|| format!("invalid exclude pattern '{pattern}'"))?;
        builder.add(glob);
    }
    builder.build().context("failed to build exclude pattern set")
}
