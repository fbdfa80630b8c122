//! flatkeys - list the dotted key-paths of YAML locale files
//!
//! flatkeys is a CLI tool and library that scans a directory for YAML
//! documents (typically Rails-style locale files nested under a single
//! `en:` key), flattens each file's first top-level value into dotted
//! key-paths, and merges them into one ordered, deduplicated list.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, output, exit status)
//! - `config`: Configuration file loading and parsing
//! - `core`: Discovery, decoding, flattening and merging

pub mod cli;
pub mod config;
pub mod core;
