//! Discover YAML files and merge their key-paths.

use std::path::{Path, PathBuf};

use super::{
    error::CollectError,
    file_scanner::{ScanOptions, scan_files},
    flatten::flatten,
    keys::KeyPaths,
    parsers::yaml::{namespace_value, read_document},
};

/// Result of a successful collection run.
#[derive(Debug, Default)]
pub struct Collection {
    /// All key-paths, in first-seen order across files.
    pub keys: KeyPaths,
    /// Files that were merged, in processing order.
    pub files: Vec<PathBuf>,
}

/// Per-file progress callback, invoked after a file has been merged.
pub trait CollectObserver {
    fn file_merged(&mut self, path: &Path, file_keys: usize);
}

impl CollectObserver for () {
    fn file_merged(&mut self, _path: &Path, _file_keys: usize) {}
}

#[derive(Debug, Clone, Default)]
pub struct Collector {
    options: ScanOptions,
}

impl Collector {
    pub fn new(options: ScanOptions) -> Self {
        Self { options }
    }

    pub fn discover(&self, root: &Path) -> Result<Vec<PathBuf>, CollectError> {
        scan_files(root, &self.options)
    }

    pub fn run(&self, root: &Path) -> Result<Collection, CollectError> {
        self.run_with(root, &mut ())
    }

    /// Collect keys from every file under `root`.
    ///
    /// Stops at the first file that cannot be read, parsed or flattened.
    pub fn run_with(
        &self,
        root: &Path,
        observer: &mut impl CollectObserver,
    ) -> Result<Collection, CollectError> {
        let files = self.discover(root)?;

        let keys = files.iter().try_fold(KeyPaths::new(), |acc, path| {
            let file_keys = keys_for_file(path)?;
            observer.file_merged(path, file_keys.len());
            Ok::<_, CollectError>(merge(acc, file_keys))
        })?;

        Ok(Collection { keys, files })
    }
}

/// Union one file's keys into the accumulator.
pub fn merge(acc: KeyPaths, file_keys: KeyPaths) -> KeyPaths {
    acc.union(file_keys)
}

/// Flattened keys under the first top-level value of the file at `path`.
pub fn keys_for_file(path: &Path) -> Result<KeyPaths, CollectError> {
    let document = read_document(path)?;
    let namespace = namespace_value(&document).map_err(|e| CollectError::shape(path, e))?;
    flatten(namespace).map_err(|e| CollectError::shape(path, e))
}
