use std::{
    cmp::Ordering,
    fs, io,
    path::{Path, PathBuf},
};

use glob::Pattern;
use walkdir::{DirEntry, WalkDir};

use super::error::CollectError;

/// Default depth limit for [`TraversalPolicy::Bounded`].
pub const DEFAULT_MAX_DEPTH: usize = 3;

/// Which files below the root are considered.
///
/// Depth counts the directories between the root and a file: `root/en.yml`
/// is depth 0, `root/config/locales/en.yml` is depth 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraversalPolicy {
    /// Files at depth `0..=max_depth`.
    Bounded { max_depth: usize },
    /// Files at any depth.
    Unbounded,
}

impl Default for TraversalPolicy {
    fn default() -> Self {
        Self::Bounded {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Check if a pattern contains glob wildcards (* or ?).
/// Patterns without wildcards are treated as literal paths relative to the root.
fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?')
}

/// Ignore rules, split into literal path prefixes and glob patterns.
#[derive(Debug, Clone, Default)]
pub struct IgnoreRules {
    literal_paths: Vec<PathBuf>,
    glob_patterns: Vec<Pattern>,
}

impl IgnoreRules {
    /// Build ignore rules. Patterns are expected to be validated already
    /// (see `Config::validate`); invalid globs are returned as an error.
    pub fn new(patterns: &[String]) -> Result<Self, glob::PatternError> {
        let mut rules = Self::default();
        for p in patterns {
            if is_glob_pattern(p) {
                rules.glob_patterns.push(Pattern::new(p)?);
            } else {
                rules.literal_paths.push(PathBuf::from(p));
            }
        }
        Ok(rules)
    }

    /// `relative` is the entry's path relative to the scan root.
    pub fn is_ignored(&self, relative: &Path) -> bool {
        if self
            .literal_paths
            .iter()
            .any(|ignore_path| relative.starts_with(ignore_path))
        {
            return true;
        }
        let path_str = relative.to_string_lossy();
        self.glob_patterns.iter().any(|p| p.matches(&path_str))
    }
}

#[derive(Debug, Clone)]
pub struct ScanOptions {
    pub policy: TraversalPolicy,
    /// Recognized file extensions, without the leading dot.
    pub extensions: Vec<String>,
    pub ignores: IgnoreRules,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            policy: TraversalPolicy::default(),
            extensions: vec!["yml".to_string()],
            ignores: IgnoreRules::default(),
        }
    }
}

/// Find document files under `root`.
///
/// Files are returned depth by depth (all depth-0 files, then depth 1, ...),
/// sorted by path within each depth. Hidden entries are skipped.
pub fn scan_files(root: &Path, options: &ScanOptions) -> Result<Vec<PathBuf>, CollectError> {
    let metadata = fs::metadata(root).map_err(|e| CollectError::io(root, e))?;
    if !metadata.is_dir() {
        return Err(CollectError::io(
            root,
            io::Error::new(io::ErrorKind::NotADirectory, "not a directory"),
        ));
    }

    let mut walker = WalkDir::new(root).min_depth(1);
    if let TraversalPolicy::Bounded { max_depth } = options.policy {
        // A file at depth d is d + 1 entries below the root.
        walker = walker.max_depth(max_depth.saturating_add(1));
    }

    let mut found: Vec<(usize, PathBuf)> = Vec::new();
    let entries = walker
        .into_iter()
        .filter_entry(|entry| !is_hidden(entry) && !is_ignored(root, entry, &options.ignores));

    for entry in entries {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(root).to_path_buf();
            CollectError::io(path, e.into())
        })?;
        let path = entry.path();

        if path.is_file() && has_extension(path, &options.extensions) {
            found.push((entry.depth() - 1, path.to_path_buf()));
        }
    }

    found.sort_by(|(depth_a, a), (depth_b, b)| match depth_a.cmp(depth_b) {
        Ordering::Equal => a.cmp(b),
        other => other,
    });

    Ok(found.into_iter().map(|(_, path)| path).collect())
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| name.starts_with('.'))
}

fn is_ignored(root: &Path, entry: &DirEntry, ignores: &IgnoreRules) -> bool {
    entry
        .path()
        .strip_prefix(root)
        .is_ok_and(|relative| ignores.is_ignored(relative))
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| extensions.iter().any(|allowed| allowed == ext))
}
