//! Tool configuration with TOML file support.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

use yottaflux_types::{Network, VersionByte};
use yottaflux_utils::LogFormat;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Configuration for the burn-address tool.
///
/// Every field has a default, so an empty file is a valid configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BurnToolConfig {
    /// Network whose version byte is used when none is given explicitly.
    #[serde(default)]
    pub network: Network,

    /// Explicit version byte, overriding `network`.
    #[serde(default)]
    pub version: Option<u8>,

    /// Log level filter: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Log format: "human" or "json".
    #[serde(default)]
    pub log_format: LogFormat,

    /// Additional burn purposes (name → prefix) generated after the
    /// built-in table.
    #[serde(default)]
    pub extra_prefixes: BTreeMap<String, String>,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl BurnToolConfig {
    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Serialize the configuration to a TOML string.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Resolve the version byte: explicit byte, then configured byte, then
    /// the network default (a network given on the command line wins over
    /// the configured one).
    pub fn resolve_version(
        &self,
        cli_version: Option<u8>,
        cli_network: Option<Network>,
    ) -> VersionByte {
        cli_version
            .or(self.version)
            .map(VersionByte::new)
            .unwrap_or_else(|| cli_network.unwrap_or(self.network).version_byte())
    }
}

impl Default for BurnToolConfig {
    fn default() -> Self {
        Self {
            network: Network::default(),
            version: None,
            log_level: default_log_level(),
            log_format: LogFormat::default(),
            extra_prefixes: BTreeMap::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_config_round_trips_through_toml() {
        let mut config = BurnToolConfig::default();
        config
            .extra_prefixes
            .insert("strCustomBurnAddress".into(), "YcustomBurn".into());
        let toml_str = config.to_toml_string().expect("should serialize");
        let parsed = BurnToolConfig::from_toml_str(&toml_str).expect("should parse");
        assert_eq!(parsed, config);
    }

    #[test]
    fn minimal_toml_uses_defaults() {
        let config = BurnToolConfig::from_toml_str("").expect("empty toml should use defaults");
        assert_eq!(config.network, Network::Mainnet);
        assert_eq!(config.version, None);
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.log_format, LogFormat::Human);
        assert!(config.extra_prefixes.is_empty());
    }

    #[test]
    fn partial_toml_overrides() {
        let toml = r#"
            network = "testnet"
            log_format = "json"

            [extra_prefixes]
            strCustomBurnAddress = "YcustomBurn"
        "#;
        let config = BurnToolConfig::from_toml_str(toml).expect("should parse");
        assert_eq!(config.network, Network::Testnet);
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.log_level, "warn"); // default
        assert_eq!(
            config.extra_prefixes.get("strCustomBurnAddress").map(String::as_str),
            Some("YcustomBurn")
        );
    }

    #[test]
    fn invalid_network_is_parse_error() {
        let err = BurnToolConfig::from_toml_str("network = \"regtest\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn version_resolution_order() {
        let mut config = BurnToolConfig::default();
        assert_eq!(config.resolve_version(None, None), VersionByte::MAINNET);
        assert_eq!(
            config.resolve_version(None, Some(Network::Testnet)),
            VersionByte::TESTNET
        );

        config.version = Some(60);
        assert_eq!(
            config.resolve_version(None, Some(Network::Testnet)),
            VersionByte(60)
        );
        assert_eq!(config.resolve_version(Some(5), None), VersionByte(5));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "version = 111").unwrap();
        let config = BurnToolConfig::from_toml_file(file.path()).expect("should load");
        assert_eq!(config.version, Some(111));
    }

    #[test]
    fn missing_file_returns_read_error() {
        let err = BurnToolConfig::from_toml_file("/nonexistent/yottaflux-burn.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
