//! Conversion between the in-memory model and the two document formats.
//!
//! The combined document is JSON, section documents are YAML. Both carry the
//! same field names, so any value representable in one is representable in
//! the other.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::CodecError;

/// Document format family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Combined document (`realm.json`).
    Json,

    /// Per-section document (`realm_configs/*.yaml`).
    Yaml,
}

/// Decode `bytes` as a value of type `T`.
///
/// Fails when the bytes are not well-formed for `format` or when a required
/// field is missing. Unknown fields and YAML comments are ignored.
pub fn decode<T: DeserializeOwned>(bytes: &[u8], format: Format) -> Result<T, CodecError> {
    let value = match format {
        Format::Json => serde_json::from_slice(bytes)?,
        Format::Yaml => serde_yaml_ng::from_slice(bytes)?,
    };
    Ok(value)
}

/// Encode `value` as a complete document, ending in a newline.
pub fn encode<T: Serialize>(value: &T, format: Format) -> Result<Vec<u8>, CodecError> {
    match format {
        Format::Json => {
            let mut bytes = serde_json::to_vec_pretty(value)?;
            bytes.push(b'\n');
            Ok(bytes)
        }
        Format::Yaml => {
            let yaml = serde_yaml_ng::to_string(value)?;
            Ok(finish_yaml_document(&yaml).into_bytes())
        }
    }
}

/// Add the document start marker and clean up trailing whitespace.
fn finish_yaml_document(yaml: &str) -> String {
    let body = yaml.strip_prefix("---\n").unwrap_or(yaml);
    let lines: Vec<&str> = body.lines().map(str::trim_end).collect();
    format!("---\n{}\n", lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Configuration, EndpointSettings, LogSettings};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_encode_section_endpoint() {
        let endpoint = EndpointSettings::new("0.0.0.0:1234", "example.com:5678");
        let yaml = String::from_utf8(encode(&endpoint, Format::Yaml).unwrap()).unwrap();

        assert!(yaml.starts_with("---\n"));
        assert!(yaml.ends_with('\n'));
        assert!(yaml.contains("listen:"));
        assert!(yaml.contains("remote:"));
        assert!(!yaml.contains("---\n---"));
    }

    #[test]
    fn test_encode_section_empty_log_has_no_keys() {
        let yaml = String::from_utf8(encode(&LogSettings::default(), Format::Yaml).unwrap()).unwrap();

        assert!(!yaml.contains("level"));
        assert!(!yaml.contains("output"));

        let decoded: LogSettings = decode(yaml.as_bytes(), Format::Yaml).unwrap();
        assert!(decoded.is_empty());
    }

    #[test]
    fn test_decode_section_ignores_comments() {
        let yaml = "# edited by hand\nlevel: debug # noisy\noutput: /var/log/realm.log\n";
        let log: LogSettings = decode(yaml.as_bytes(), Format::Yaml).unwrap();

        assert_eq!(log.level.as_deref(), Some("debug"));
        assert_eq!(log.output.as_deref(), Some("/var/log/realm.log"));
    }

    #[test]
    fn test_decode_section_missing_required_field() {
        let yaml = "---\nlisten: 0.0.0.0:1234\n";
        let result: Result<EndpointSettings, _> = decode(yaml.as_bytes(), Format::Yaml);
        assert!(matches!(result, Err(CodecError::Yaml(_))));
    }

    #[test]
    fn test_decode_combined_defaults_missing_sections() {
        let config: Configuration = decode(b"{}", Format::Json).unwrap();
        assert_eq!(config, Configuration::default());
    }

    #[test]
    fn test_decode_combined_null_sections() {
        let config: Configuration =
            decode(br#"{"log": null, "endpoints": []}"#, Format::Json).unwrap();
        assert_eq!(config, Configuration::default());

        let config: Configuration =
            decode(br#"{"log": {"level": "info"}, "endpoints": null}"#, Format::Json).unwrap();
        assert_eq!(config.log.level.as_deref(), Some("info"));
        assert!(config.endpoints.is_empty());
    }

    #[test]
    fn test_decode_combined_malformed() {
        let result: Result<Configuration, _> = decode(b"{\"log\": ", Format::Json);
        assert!(matches!(result, Err(CodecError::Json(_))));
    }

    #[test]
    fn test_encode_combined_field_order_and_absence() {
        let config = Configuration {
            log: LogSettings {
                level: Some("info".to_string()),
                output: None,
            },
            endpoints: vec![EndpointSettings::new("0.0.0.0:1", "a:2")],
        };
        let json = String::from_utf8(encode(&config, Format::Json).unwrap()).unwrap();

        let log_pos = json.find("\"log\"").unwrap();
        let endpoints_pos = json.find("\"endpoints\"").unwrap();
        assert!(log_pos < endpoints_pos);
        assert!(!json.contains("output"));
        assert!(json.contains("\n  \"log\": {"));
        assert!(json.ends_with("}\n"));
    }

    #[test]
    fn test_formats_are_equivalent() {
        let config = Configuration {
            log: LogSettings {
                level: Some("warn".to_string()),
                output: Some("/tmp/out.log".to_string()),
            },
            endpoints: vec![EndpointSettings::new("[::]:80", "10.0.0.1:8080")],
        };

        let yaml = encode(&config, Format::Yaml).unwrap();
        let from_yaml: Configuration = decode(&yaml, Format::Yaml).unwrap();
        assert_eq!(from_yaml, config);
    }

    #[test]
    fn test_finish_yaml_document() {
        assert_eq!(finish_yaml_document("a: 1   \nb: 2\n"), "---\na: 1\nb: 2\n");
        assert_eq!(finish_yaml_document("---\na: 1\n"), "---\na: 1\n");
    }
}
