//! Merge section files back into a combined document.

use std::fs;
use std::path::{Path, PathBuf};

use crate::codec::{decode, encode, Format};
use crate::config::Settings;
use crate::error::{RealmConfigError, Result};
use crate::files::{ensure_dir, read_file, write_atomic};
use crate::naming::{is_endpoint_file, sort_section_files};
use crate::types::{Configuration, EndpointSettings, LogSettings};

/// Files consumed by a merge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeReport {
    /// Combined document that was written.
    pub output: PathBuf,

    /// The log section file, if one was present.
    pub log_file: Option<PathBuf>,

    /// Endpoint files in merge order.
    pub endpoint_files: Vec<PathBuf>,
}

/// Contents of a section directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sections {
    pub config: Configuration,

    /// The log section file, if one was present.
    pub log_file: Option<PathBuf>,

    /// Endpoint files in the order they were applied.
    pub endpoint_files: Vec<PathBuf>,
}

/// Merge the section directory from `settings` into the combined document
/// at `output`.
pub fn merge_config(output: &Path, settings: &Settings) -> Result<MergeReport> {
    let Sections {
        config,
        log_file,
        endpoint_files,
    } = read_sections(settings)?;

    let content = encode(&config, Format::Json).map_err(|source| RealmConfigError::Encode {
        what: "combined configuration".to_string(),
        source,
    })?;

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        ensure_dir(parent)?;
    }
    write_atomic(output, &content)?;
    tracing::info!(
        output = %output.display(),
        endpoints = config.endpoints.len(),
        "Saved combined configuration"
    );

    Ok(MergeReport {
        output: output.to_path_buf(),
        log_file,
        endpoint_files,
    })
}

/// Load the section directory into a `Configuration`.
///
/// A missing log file leaves the log settings empty.
pub fn read_sections(settings: &Settings) -> Result<Sections> {
    let config_dir = settings.config_dir();
    if !config_dir.is_dir() {
        return Err(RealmConfigError::DirectoryMissing(config_dir.to_path_buf()));
    }

    let mut config = Configuration::default();

    let log_path = settings.log_file();
    let log_file = if log_path.is_file() {
        config.log = decode_section::<LogSettings>(&log_path)?;
        tracing::info!(file = %log_path.display(), "Loaded log settings");
        Some(log_path)
    } else {
        tracing::debug!(file = %log_path.display(), "No log settings, using defaults");
        None
    };

    let endpoint_files = list_endpoint_files(settings)?;
    for path in &endpoint_files {
        let endpoint = decode_section::<EndpointSettings>(path)?;
        tracing::info!(file = %path.display(), "Loaded endpoint");
        config.endpoints.push(endpoint);
    }

    Ok(Sections {
        config,
        log_file,
        endpoint_files,
    })
}

/// Endpoint section files in the directory, in merge order.
pub fn list_endpoint_files(settings: &Settings) -> Result<Vec<PathBuf>> {
    let config_dir = settings.config_dir();
    let entries =
        fs::read_dir(config_dir).map_err(|e| RealmConfigError::io("list", config_dir, e))?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| RealmConfigError::io("list", config_dir, e))?;
        let Some(name) = entry.file_name().to_str().map(str::to_string) else {
            tracing::warn!(file = ?entry.path(), "Skipping non UTF-8 file name");
            continue;
        };
        if is_endpoint_file(&name) && entry.path().is_file() {
            names.push(name);
        }
    }

    sort_section_files(&mut names, settings.order);
    Ok(names.iter().map(|name| settings.section_path(name)).collect())
}

fn decode_section<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let bytes = read_file(path)?;
    decode(&bytes, Format::Yaml).map_err(|source| RealmConfigError::Decode {
        path: path.to_path_buf(),
        source,
    })
}
