use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use glob::Pattern;
use serde::Deserialize;

use crate::core::{DEFAULT_MAX_DEPTH, IgnoreRules, ScanOptions, TraversalPolicy};

pub const CONFIG_FILE_NAME: &str = ".flatkeysrc.json";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
    /// Scan every nesting level; `maxDepth` is ignored when set.
    #[serde(default)]
    pub recursive: bool,
    #[serde(default)]
    pub ignores: Vec<String>,
}

fn default_extensions() -> Vec<String> {
    vec!["yml".to_string()]
}

fn default_max_depth() -> usize {
    DEFAULT_MAX_DEPTH
}

impl Default for Config {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            max_depth: default_max_depth(),
            recursive: false,
            ignores: Vec::new(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if `extensions` is empty or any `ignores` pattern is not a valid glob.
    pub fn validate(&self) -> Result<()> {
        if self.extensions.is_empty() {
            bail!("'extensions' must list at least one file extension");
        }

        for ext in &self.extensions {
            if ext.is_empty() || ext.starts_with('.') {
                bail!(
                    "Invalid extension in 'extensions': \"{}\" (use e.g. \"yml\", without the dot)",
                    ext
                );
            }
        }

        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        Ok(())
    }

    pub fn traversal_policy(&self) -> TraversalPolicy {
        if self.recursive {
            TraversalPolicy::Unbounded
        } else {
            TraversalPolicy::Bounded {
                max_depth: self.max_depth,
            }
        }
    }

    pub fn scan_options(&self) -> Result<ScanOptions> {
        let ignores =
            IgnoreRules::new(&self.ignores).context("Invalid glob pattern in 'ignores'")?;
        Ok(ScanOptions {
            policy: self.traversal_policy(),
            extensions: self.extensions.clone(),
            ignores,
        })
    }
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
#[derive(Debug)]
pub struct ConfigLoadResult {
    pub config: Config,
    /// Path of the config file, `None` if using defaults.
    pub path: Option<PathBuf>,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config
                .validate()
                .with_context(|| format!("Invalid config file: {:?}", path))?;
            Ok(ConfigLoadResult {
                config,
                path: Some(path),
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            path: None,
        }),
    }
}
