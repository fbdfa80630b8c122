//! Core collection engine.
//!
//! Collection runs as a single sequential pipeline:
//!
//! 1. **Scan**: find document files under the root (`file_scanner`)
//! 2. **Decode**: parse each file and take its first top-level value (`parsers`)
//! 3. **Flatten**: turn that mapping into dotted key-paths (`flatten`)
//! 4. **Merge**: fold every file's keys into one ordered set (`collector`, `keys`)

pub mod collector;
pub mod error;
pub mod file_scanner;
pub mod flatten;
pub mod keys;
pub mod parsers;

pub use collector::{CollectObserver, Collection, Collector, keys_for_file, merge};
pub use error::{CollectError, ShapeError};
pub use file_scanner::{DEFAULT_MAX_DEPTH, IgnoreRules, ScanOptions, TraversalPolicy};
pub use flatten::flatten;
pub use keys::KeyPaths;
