//! Split a combined document into section files.

use std::path::{Path, PathBuf};

use crate::codec::{decode, encode, Format};
use crate::config::Settings;
use crate::error::{RealmConfigError, Result};
use crate::files::{ensure_dir, read_file, write_atomic};
use crate::naming::endpoint_file_name;
use crate::types::Configuration;

/// Files produced by a split, in the order they were written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitReport {
    /// Section directory that received the files.
    pub config_dir: PathBuf,

    /// Whether the section directory was created by this split.
    pub created_dir: bool,

    /// The log section file.
    pub log_file: PathBuf,

    /// One file per endpoint, in endpoint order.
    pub endpoint_files: Vec<PathBuf>,
}

impl SplitReport {
    /// All written files, log first.
    pub fn files(&self) -> impl Iterator<Item = &Path> {
        std::iter::once(self.log_file.as_path()).chain(self.endpoint_files.iter().map(PathBuf::as_path))
    }
}

/// Read the combined document at `input` and split it into the section
/// directory from `settings`.
///
/// Existing files with the same names are overwritten. Nothing is rolled
/// back on failure: files written before the error stay on disk.
pub fn split_config(input: &Path, settings: &Settings) -> Result<SplitReport> {
    let bytes = read_file(input)?;
    let config: Configuration = decode(&bytes, Format::Json).map_err(|source| RealmConfigError::Decode {
        path: input.to_path_buf(),
        source,
    })?;
    tracing::debug!(
        input = %input.display(),
        endpoints = config.endpoints.len(),
        "Decoded combined document"
    );

    write_sections(&config, settings)
}

/// Write `config` as section files into the section directory.
pub fn write_sections(config: &Configuration, settings: &Settings) -> Result<SplitReport> {
    let config_dir = settings.config_dir().to_path_buf();
    let created_dir = ensure_dir(&config_dir)?;
    if created_dir {
        tracing::info!(dir = %config_dir.display(), "Created config directory");
    }

    let log_file = settings.log_file();
    let content = encode(&config.log, Format::Yaml).map_err(|source| RealmConfigError::Encode {
        what: "log settings".to_string(),
        source,
    })?;
    write_atomic(&log_file, &content)?;
    tracing::info!(file = %log_file.display(), "Saved log settings");

    let mut endpoint_files = Vec::with_capacity(config.endpoints.len());
    for (index, endpoint) in config.endpoints.iter().enumerate() {
        let position = index + 1;
        let path = settings.section_path(&endpoint_file_name(position, &endpoint.remote));

        let content = encode(endpoint, Format::Yaml).map_err(|source| RealmConfigError::Encode {
            what: format!("endpoint {position}"),
            source,
        })?;
        write_atomic(&path, &content)?;
        tracing::info!(file = %path.display(), position, "Saved endpoint");

        endpoint_files.push(path);
    }

    Ok(SplitReport {
        config_dir,
        created_dir,
        log_file,
        endpoint_files,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{EndpointSettings, LogSettings};
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_write_sections_names_files() {
        let dir = tempdir().unwrap();
        let settings = Settings::new(dir.path().join("realm_configs"));
        let config = Configuration {
            log: LogSettings::default(),
            endpoints: vec![
                EndpointSettings::new("0.0.0.0:1", "a.example:80"),
                EndpointSettings::new("0.0.0.0:2", "a.example:80"),
            ],
        };

        let report = write_sections(&config, &settings).unwrap();

        assert!(report.created_dir);
        assert_eq!(report.files().count(), 3);
        assert!(report.log_file.ends_with("log.yaml"));
        assert!(report.endpoint_files[0].ends_with("endpoint_1_a_example_80.yaml"));
        assert!(report.endpoint_files[1].ends_with("endpoint_2_a_example_80.yaml"));
        for file in report.files() {
            assert!(file.is_file(), "{} missing", file.display());
        }
    }

    #[test]
    fn test_split_reuses_existing_directory() {
        let dir = tempdir().unwrap();
        let settings = Settings::new(dir.path());
        fs::write(dir.path().join("log.yaml"), "stale").unwrap();

        let report = write_sections(&Configuration::default(), &settings).unwrap();

        assert!(!report.created_dir);
        assert!(report.endpoint_files.is_empty());
        let log = fs::read_to_string(dir.path().join("log.yaml")).unwrap();
        assert_ne!(log, "stale");
    }

    #[test]
    fn test_split_rejects_malformed_document() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("realm.json");
        fs::write(&input, "{\"endpoints\": [{\"listen\": \"0.0.0.0:1\"}]}").unwrap();
        let settings = Settings::new(dir.path().join("realm_configs"));

        let err = split_config(&input, &settings).unwrap_err();

        assert!(matches!(err, RealmConfigError::Decode { .. }));
        assert!(!settings.config_dir().exists());
    }

    #[test]
    fn test_split_missing_input() {
        let dir = tempdir().unwrap();
        let settings = Settings::new(dir.path().join("realm_configs"));

        let err = split_config(&dir.path().join("nope.json"), &settings).unwrap_err();
        assert!(matches!(err, RealmConfigError::Io { action: "read", .. }));
    }
}
