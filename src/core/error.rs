//! Error types for key collection.
//!
//! Every error is fatal for a run: collection stops at the first failing
//! file and no partial key list is produced.

use std::{io, path::PathBuf};

use thiserror::Error;

/// A document whose structure cannot be flattened.
#[derive(Debug, Error)]
pub enum ShapeError {
    /// The document's top level is not a mapping (scalar, sequence, empty file).
    #[error("top level of the document is not a mapping")]
    NotAMapping,

    /// The top-level mapping has no entries, so there is no namespace value.
    #[error("top-level mapping is empty")]
    EmptyDocument,

    /// The first top-level value is not itself a mapping.
    #[error("value of top-level key '{key}' is not a mapping")]
    NamespaceNotAMapping { key: String },

    /// A mapping key is a sequence or mapping and has no path segment form.
    #[error("unsupported non-scalar key under '{parent}'")]
    UnsupportedKey { parent: String },
}

#[derive(Debug, Error)]
pub enum CollectError {
    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("unexpected document shape in {}", path.display())]
    Shape {
        path: PathBuf,
        #[source]
        source: ShapeError,
    },
}

impl CollectError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn parse(path: impl Into<PathBuf>, source: serde_yaml::Error) -> Self {
        Self::Parse {
            path: path.into(),
            source,
        }
    }

    pub fn shape(path: impl Into<PathBuf>, source: ShapeError) -> Self {
        Self::Shape {
            path: path.into(),
            source,
        }
    }

    /// Path of the file or directory the error refers to.
    pub fn path(&self) -> &PathBuf {
        match self {
            Self::Io { path, .. } | Self::Parse { path, .. } | Self::Shape { path, .. } => path,
        }
    }
}
