//! Document parsers.
//!
//! - `yaml`: YAML locale/config file decoder

pub mod yaml;
