//! Generator configuration
//!
//! Settings come from three layers, later ones winning: built-in defaults, an
//! optional JSON config file, and command line flags. Every layer is a
//! [`ConfigFile`] of optional values. [`GeneratorSettings::resolve`] turns the
//! merged result into concrete settings.
//!
//! ```json
//! {
//!   "namespace": "Game",
//!   "outputDirectory": "Assets/Scripts/Generated",
//!   "maxIdentifierLength": 24,
//!   "verifySyntax": true
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};

use crate::error::{GeneratorResult, IoContext, JsonContext};
use crate::naming::sanitize_free_text;

/// Namespace used when none is configured or the configured one sanitizes to nothing
pub const DEFAULT_NAMESPACE: &str = "UIToolKitStrings";
/// Project relative output folder used when none is configured
pub const DEFAULT_OUTPUT_DIRECTORY: &str = "Assets/UI Toolkit/StringLibrary/";
pub const DEFAULT_MAX_IDENTIFIER_LENGTH: usize = 20;
/// Config file picked up from the working directory when `--config` is not given
pub const DEFAULT_CONFIG_FILE: &str = "uitk-string-gen.json";

/// One layer of optional settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default)]
    pub namespace: Option<String>,
    #[serde(default)]
    pub output_directory: Option<PathBuf>,
    #[serde(default)]
    pub max_identifier_length: Option<usize>,
    #[serde(default)]
    pub verify_syntax: Option<bool>,
    #[serde(default)]
    pub log_file: Option<PathBuf>,
}

impl ConfigFile {
    /// Load a config file
    pub fn load(path: &Path) -> GeneratorResult<Self> {
        let content = fs::read_to_string(path)
            .with_io_context(&format!("Failed to read config file {}", path.display()))?;
        let config: Self = serde_json::from_str(&content)
            .with_json_context(&format!("Failed to parse config file {}", path.display()))?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load `explicit` if given, otherwise [`DEFAULT_CONFIG_FILE`] from
    /// `working_directory` if it exists, otherwise an empty layer.
    pub fn discover(explicit: Option<&Path>, working_directory: &Path) -> GeneratorResult<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let default_path = working_directory.join(DEFAULT_CONFIG_FILE);
        if default_path.is_file() {
            Self::load(&default_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Layer `overrides` on top of `self`; values set in `overrides` win
    pub fn merge(self, overrides: ConfigFile) -> ConfigFile {
        ConfigFile {
            namespace: overrides.namespace.or(self.namespace),
            output_directory: overrides.output_directory.or(self.output_directory),
            max_identifier_length: overrides.max_identifier_length.or(self.max_identifier_length),
            verify_syntax: overrides.verify_syntax.or(self.verify_syntax),
            log_file: overrides.log_file.or(self.log_file),
        }
    }
}

/// Fully resolved settings for a generation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorSettings {
    /// Sanitized namespace, never empty
    pub namespace: String,
    pub output_directory: PathBuf,
    pub max_identifier_length: usize,
    pub verify_syntax: bool,
}

impl GeneratorSettings {
    /// Apply defaults and sanitize the namespace
    pub fn resolve(config: &ConfigFile) -> Self {
        let namespace = config
            .namespace
            .as_deref()
            .map(|ns| sanitize_free_text(ns, false))
            .filter(|ns| !ns.is_empty())
            .unwrap_or_else(|| DEFAULT_NAMESPACE.to_string());

        let output_directory = config
            .output_directory
            .clone()
            .filter(|dir| !dir.as_os_str().to_string_lossy().trim().is_empty())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIRECTORY));

        Self {
            namespace,
            output_directory,
            max_identifier_length: config
                .max_identifier_length
                .unwrap_or(DEFAULT_MAX_IDENTIFIER_LENGTH),
            verify_syntax: config.verify_syntax.unwrap_or(true),
        }
    }
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self::resolve(&ConfigFile::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GeneratorError;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let settings = GeneratorSettings::default();
        assert_eq!(settings.namespace, "UIToolKitStrings");
        assert_eq!(settings.output_directory, PathBuf::from("Assets/UI Toolkit/StringLibrary/"));
        assert_eq!(settings.max_identifier_length, 20);
        assert!(settings.verify_syntax);
    }

    #[test]
    fn test_namespace_is_sanitized_with_fallback() {
        let config = ConfigFile {
            namespace: Some("My Game.UI".to_string()),
            ..Default::default()
        };
        assert_eq!(GeneratorSettings::resolve(&config).namespace, "MyGameUI");

        let config = ConfigFile {
            namespace: Some("  42 !! ".to_string()),
            ..Default::default()
        };
        assert_eq!(GeneratorSettings::resolve(&config).namespace, DEFAULT_NAMESPACE);
    }

    #[test]
    fn test_blank_output_directory_falls_back() {
        let config = ConfigFile {
            output_directory: Some(PathBuf::from("  ")),
            ..Default::default()
        };
        assert_eq!(
            GeneratorSettings::resolve(&config).output_directory,
            PathBuf::from(DEFAULT_OUTPUT_DIRECTORY)
        );
    }

    #[test]
    fn test_merge_prefers_overrides() {
        let file = ConfigFile {
            namespace: Some("FromFile".to_string()),
            max_identifier_length: Some(30),
            verify_syntax: Some(false),
            ..Default::default()
        };
        let flags = ConfigFile {
            namespace: Some("FromFlags".to_string()),
            ..Default::default()
        };

        let merged = file.merge(flags);
        assert_eq!(merged.namespace.as_deref(), Some("FromFlags"));
        assert_eq!(merged.max_identifier_length, Some(30));
        assert_eq!(merged.verify_syntax, Some(false));
    }

    #[test]
    fn test_load_camel_case_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        fs::write(
            &path,
            r#"{ "namespace": "Game.UI", "outputDirectory": "Assets/Generated", "maxIdentifierLength": 24 }"#,
        )
        .unwrap();

        let config = ConfigFile::load(&path).unwrap();
        assert_eq!(config.namespace.as_deref(), Some("Game.UI"));
        assert_eq!(config.output_directory, Some(PathBuf::from("Assets/Generated")));
        assert_eq!(config.max_identifier_length, Some(24));
        assert_eq!(config.verify_syntax, None);
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        fs::write(&path, r#"{ "nameSpace": "Typo" }"#).unwrap();

        let err = ConfigFile::load(&path).unwrap_err();
        assert!(matches!(err, GeneratorError::Json { .. }));
    }

    #[test]
    fn test_discover() {
        let temp_dir = TempDir::new().unwrap();
        assert_eq!(ConfigFile::discover(None, temp_dir.path()).unwrap(), ConfigFile::default());

        fs::write(temp_dir.path().join(DEFAULT_CONFIG_FILE), r#"{ "namespace": "Found" }"#).unwrap();
        let config = ConfigFile::discover(None, temp_dir.path()).unwrap();
        assert_eq!(config.namespace.as_deref(), Some("Found"));

        let missing = temp_dir.path().join("missing.json");
        assert!(ConfigFile::discover(Some(&missing), temp_dir.path()).is_err());
    }
}
