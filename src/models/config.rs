use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::ConvertError;

/// Environment variable naming a configuration file.
pub const CONFIG_ENV: &str = "MONODITHER_CONFIG";

/// Application configuration loaded from a YAML file
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// Error diffusion settings
    #[serde(default)]
    pub dither: DitherConfig,

    /// Grayscale conversion settings
    #[serde(default)]
    pub gray: GrayConfig,

    /// Plain threshold settings
    #[serde(default)]
    pub threshold: ThresholdConfig,
}

/// Settings for the `dither` command
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct DitherConfig {
    /// Registry name or alias of the diffusion kernel
    #[serde(default = "default_algorithm")]
    pub algorithm: String,

    /// Fixed quantization level; Otsu when absent
    #[serde(default)]
    pub threshold: Option<u8>,
}

fn default_algorithm() -> String {
    "floyd-steinberg".to_string()
}

impl Default for DitherConfig {
    fn default() -> Self {
        Self {
            algorithm: default_algorithm(),
            threshold: None,
        }
    }
}

/// Settings for the `gray` command
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct GrayConfig {
    #[serde(default = "default_policy")]
    pub policy: String,
}

fn default_policy() -> String {
    "luminosity".to_string()
}

impl Default for GrayConfig {
    fn default() -> Self {
        Self {
            policy: default_policy(),
        }
    }
}

/// Settings for the `threshold` command
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ThresholdConfig {
    /// `static` or `otsu`
    #[serde(default = "default_threshold_algorithm")]
    pub algorithm: String,

    /// Level for the static algorithm (0 means the built-in default)
    #[serde(default)]
    pub level: Option<u8>,

    #[serde(default)]
    pub invert: bool,
}

fn default_threshold_algorithm() -> String {
    "otsu".to_string()
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            algorithm: default_threshold_algorithm(),
            level: None,
            invert: false,
        }
    }
}

impl AppConfig {
    /// Parse configuration from YAML text.
    ///
    /// An empty document yields the defaults.
    pub fn from_yaml_str(content: &str) -> Result<Self, ConvertError> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    /// Load configuration from an explicit path, else from the file named by
    /// `MONODITHER_CONFIG`, else use defaults.
    ///
    /// A file that cannot be read or parsed logs a warning and falls back to
    /// defaults.
    pub fn load(explicit: Option<&Path>) -> Self {
        let env_path = std::env::var_os(CONFIG_ENV).map(PathBuf::from);
        match resolve_path(explicit, env_path) {
            Some(path) => Self::load_file(&path),
            None => {
                tracing::debug!("No configuration file, using defaults");
                Self::default()
            }
        }
    }

    /// Load one file, falling back to defaults on any problem.
    pub fn load_file(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_yaml_str(&content) {
                Ok(config) => {
                    tracing::info!(
                        path = %path.display(),
                        algorithm = %config.dither.algorithm,
                        "Loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(%e, path = %path.display(), "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(%e, path = %path.display(), "Failed to read config, using defaults");
                Self::default()
            }
        }
    }
}

/// Explicit path wins over the environment.
fn resolve_path(explicit: Option<&Path>, env_path: Option<PathBuf>) -> Option<PathBuf> {
    explicit
        .map(Path::to_path_buf)
        .or(env_path.filter(|p| !p.as_os_str().is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.dither.algorithm, "floyd-steinberg");
        assert_eq!(config.dither.threshold, None);
        assert_eq!(config.gray.policy, "luminosity");
        assert_eq!(config.threshold.algorithm, "otsu");
        assert_eq!(config.threshold.level, None);
        assert!(!config.threshold.invert);
    }

    #[test]
    fn test_deserialize_config() {
        let yaml = r#"
dither:
  algorithm: atkinson
  threshold: 100
gray:
  policy: average
threshold:
  algorithm: static
  level: 155
  invert: true
"#;

        let config = AppConfig::from_yaml_str(yaml).unwrap();

        assert_eq!(config.dither.algorithm, "atkinson");
        assert_eq!(config.dither.threshold, Some(100));
        assert_eq!(config.gray.policy, "average");
        assert_eq!(config.threshold.algorithm, "static");
        assert_eq!(config.threshold.level, Some(155));
        assert!(config.threshold.invert);
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = AppConfig::from_yaml_str("dither:\n  algorithm: jjn\n").unwrap();

        assert_eq!(config.dither.algorithm, "jjn");
        assert_eq!(config.gray, GrayConfig::default());
        assert_eq!(config.threshold, ThresholdConfig::default());
    }

    #[test]
    fn test_empty_config_is_default() {
        assert_eq!(AppConfig::from_yaml_str("").unwrap(), AppConfig::default());
        assert_eq!(AppConfig::from_yaml_str("  \n").unwrap(), AppConfig::default());
    }

    #[test]
    fn test_out_of_range_level_is_error() {
        let result = AppConfig::from_yaml_str("threshold:\n  level: 300\n");
        assert!(matches!(result, Err(ConvertError::Config(_))));
    }

    #[test]
    fn test_load_file_falls_back_on_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "dither: [unclosed").unwrap();

        assert_eq!(AppConfig::load_file(file.path()), AppConfig::default());
    }

    #[test]
    fn test_load_file_falls_back_when_missing() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load_file(&dir.path().join("missing.yaml"));
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_load_file_reads_values() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "gray:\n  policy: lightness").unwrap();

        let config = AppConfig::load_file(file.path());
        assert_eq!(config.gray.policy, "lightness");
    }

    #[test]
    fn test_resolve_path_precedence() {
        let explicit = Path::new("cli.yaml");
        let env = Some(PathBuf::from("env.yaml"));

        assert_eq!(
            resolve_path(Some(explicit), env.clone()),
            Some(PathBuf::from("cli.yaml"))
        );
        assert_eq!(resolve_path(None, env), Some(PathBuf::from("env.yaml")));
        assert_eq!(resolve_path(None, Some(PathBuf::new())), None);
        assert_eq!(resolve_path(None, None), None);
    }
}
