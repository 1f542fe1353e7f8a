//! Realm config - split a `realm.json` into per-section YAML files and merge
//! them back.
//!
//! The combined document holds a `log` section and an ordered list of
//! `endpoints`. Splitting writes `log.yaml` plus one
//! `endpoint_<position>_<remote>.yaml` per endpoint into a section directory;
//! merging reads that directory back into a single JSON document.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use realm_config::{merge_config, split_config, Settings};
//!
//! let settings = Settings::new("realm_configs");
//! split_config(Path::new("realm.json"), &settings)?;
//! merge_config(Path::new("realm.json"), &settings)?;
//! # Ok::<(), realm_config::RealmConfigError>(())
//! ```
//!
//! # Architecture
//!
//! - [`types`]: Configuration, LogSettings, EndpointSettings
//! - [`codec`]: JSON (combined) and YAML (section) encoding
//! - [`naming`]: Section file names and merge ordering
//! - [`config`]: Constants and runtime settings
//! - [`files`]: Filesystem helpers
//! - [`split`] / [`merge`]: The two transformations
//! - [`error`]: Error types and Result alias
//! - [`cli`]: Command-line interface

pub mod cli;
pub mod codec;
pub mod config;
pub mod error;
pub mod files;
pub mod merge;
pub mod naming;
pub mod split;
pub mod types;

// Re-export main functions
pub use merge::{merge_config, read_sections, MergeReport, Sections};
pub use split::{split_config, write_sections, SplitReport};

// Re-export commonly used items
pub use codec::Format;
pub use config::{SectionOrder, Settings};
pub use error::{CodecError, RealmConfigError, Result};
pub use types::{Configuration, EndpointSettings, LogSettings};
