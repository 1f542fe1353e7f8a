//! Configuration constants and runtime settings for realm-config.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use clap::ValueEnum;

use crate::naming::log_file_name;

/// Combined document used when no file is given on the command line.
pub const DEFAULT_COMBINED_FILE: &str = "realm.json";

/// Section directory used when none is configured.
pub const DEFAULT_CONFIG_DIR: &str = "realm_configs";

/// File extension of section documents.
pub const SECTION_EXTENSION: &str = "yaml";

/// Reserved section name of the log file. Never produced for an endpoint.
pub const LOG_SECTION: &str = "log";

/// Prefix shared by all endpoint section files.
pub const ENDPOINT_PREFIX: &str = "endpoint_";

/// Environment variable overriding the section directory.
pub const CONFIG_DIR_ENV: &str = "REALM_CONFIG_DIR";

/// Environment variable overriding the merge ordering.
pub const ORDER_ENV: &str = "REALM_CONFIG_ORDER";

/// How merge orders endpoint section files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum SectionOrder {
    /// Plain string ordering of file names.
    ///
    /// Positions are not zero-padded, so from ten endpoints on
    /// `endpoint_10_*` sorts before `endpoint_2_*`.
    #[default]
    Lexicographic,

    /// Order by the position embedded in the file name.
    Position,
}

impl SectionOrder {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lexicographic => "lexicographic",
            Self::Position => "position",
        }
    }
}

impl fmt::Display for SectionOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "lexicographic" => Ok(Self::Lexicographic),
            "position" => Ok(Self::Position),
            other => Err(format!("unknown section order: '{other}'")),
        }
    }
}

/// Runtime settings shared by split and merge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Directory holding the section files.
    pub config_dir: PathBuf,

    /// Ordering of endpoint files on merge.
    pub order: SectionOrder,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            config_dir: PathBuf::from(DEFAULT_CONFIG_DIR),
            order: SectionOrder::default(),
        }
    }
}

impl Settings {
    pub fn new(config_dir: impl Into<PathBuf>) -> Self {
        Self {
            config_dir: config_dir.into(),
            ..Self::default()
        }
    }

    /// Read settings from `REALM_CONFIG_DIR` and `REALM_CONFIG_ORDER`.
    ///
    /// Unset variables keep their defaults. An unrecognized order is logged
    /// and ignored.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut settings = Self::default();

        if let Some(dir) = lookup(CONFIG_DIR_ENV).filter(|v| !v.trim().is_empty()) {
            settings.config_dir = PathBuf::from(dir);
        }

        if let Some(order) = lookup(ORDER_ENV) {
            match order.parse() {
                Ok(order) => settings.order = order,
                Err(e) => tracing::warn!("{ORDER_ENV}: {e}, using {}", settings.order),
            }
        }

        settings
    }

    pub fn with_config_dir(mut self, config_dir: impl Into<PathBuf>) -> Self {
        self.config_dir = config_dir.into();
        self
    }

    pub fn with_order(mut self, order: SectionOrder) -> Self {
        self.order = order;
        self
    }

    /// Path of the reserved log section file.
    #[must_use]
    pub fn log_file(&self) -> PathBuf {
        self.section_path(&log_file_name())
    }

    /// Path of a section file called `file_name` inside the config directory.
    #[must_use]
    pub fn section_path(&self, file_name: &str) -> PathBuf {
        self.config_dir.join(file_name)
    }

    #[must_use]
    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }
}
