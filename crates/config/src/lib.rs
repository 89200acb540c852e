// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

mod decode;
mod error;
mod log;

pub use decode::{DecodeConfig, UnknownMarkerPolicy};
pub use error::ConfigError;
pub use log::LogConfig;

use serde::Deserialize;
use std::path::Path;

/// Prefix shared by every environment variable this crate reads.
pub const ENV_PREFIX: &str = "CALLDATA_";

/// Flat view of the `CALLDATA_*` variables, as envy sees them.
#[derive(Debug, Deserialize)]
struct EnvSource {
    #[serde(default = "log::default_level")]
    log_level: String,

    #[serde(default)]
    log_json: bool,

    #[serde(default)]
    log_strip_ansi: bool,

    #[serde(default)]
    decode_unknown_marker: UnknownMarkerPolicy,
}

impl From<EnvSource> for CodecConfig {
    fn from(source: EnvSource) -> Self {
        Self {
            log: LogConfig {
                level: source.log_level,
                json: source.log_json,
                strip_ansi: source.log_strip_ansi,
            },
            decode: DecodeConfig {
                unknown_marker: source.decode_unknown_marker,
            },
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodecConfig {
    pub log: LogConfig,
    pub decode: DecodeConfig,
}

impl CodecConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let source = envy::prefixed(ENV_PREFIX).from_env::<EnvSource>()?;
        Self::build(source)
    }

    /// Load variables from a `.env` file into the process environment, then
    /// read the configuration. Variables already set take precedence.
    pub fn from_env_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        dotenv::from_path(path).map_err(|source| ConfigError::EnvFileError {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_env()
    }

    /// Read the configuration from explicit `(name, value)` pairs using the
    /// same variable names as [`CodecConfig::from_env`].
    pub fn from_vars<I>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let source = envy::prefixed(ENV_PREFIX).from_iter::<_, EnvSource>(vars)?;
        Self::build(source)
    }

    fn build(source: EnvSource) -> Result<Self, ConfigError> {
        let config = Self::from(source);
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        self.log.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_default_config() {
        let config = CodecConfig::default();
        assert_eq!(config.log.level, "info");
        assert_eq!(config.decode.unknown_marker, UnknownMarkerPolicy::Reject);
    }

    #[test]
    fn test_from_vars_empty_uses_defaults() {
        let config = CodecConfig::from_vars(vars(&[])).unwrap();
        assert_eq!(config, CodecConfig::default());
    }

    #[test]
    fn test_from_vars_reads_all_fields() {
        let config = CodecConfig::from_vars(vars(&[
            ("CALLDATA_LOG_LEVEL", "debug"),
            ("CALLDATA_LOG_JSON", "true"),
            ("CALLDATA_LOG_STRIP_ANSI", "true"),
            ("CALLDATA_DECODE_UNKNOWN_MARKER", "empty"),
        ]))
        .unwrap();

        assert_eq!(config.log.level, "debug");
        assert!(config.log.json);
        assert!(config.log.strip_ansi);
        assert_eq!(
            config.decode.unknown_marker,
            UnknownMarkerPolicy::TreatAsEmpty
        );
    }

    #[test]
    fn test_from_vars_ignores_other_prefixes() {
        let config = CodecConfig::from_vars(vars(&[("SAS_LOG_LEVEL", "trace")])).unwrap();
        assert_eq!(config.log.level, "info");
    }

    #[test]
    fn test_from_vars_invalid_level() {
        let result = CodecConfig::from_vars(vars(&[("CALLDATA_LOG_LEVEL", "loud")]));
        assert!(matches!(result, Err(ConfigError::ValidateError(_))));
    }

    #[test]
    fn test_from_vars_invalid_marker_policy() {
        let result = CodecConfig::from_vars(vars(&[("CALLDATA_DECODE_UNKNOWN_MARKER", "skip")]));
        assert!(matches!(result, Err(ConfigError::EnvError(_))));
    }

    #[test]
    fn test_from_vars_invalid_bool() {
        let result = CodecConfig::from_vars(vars(&[("CALLDATA_LOG_JSON", "sometimes")]));
        assert!(result.is_err());
    }

    #[test]
    #[serial]
    fn test_from_env_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "CALLDATA_LOG_LEVEL=warn").unwrap();
        writeln!(file, "CALLDATA_DECODE_UNKNOWN_MARKER=legacy").unwrap();

        let config = CodecConfig::from_env_file(file.path()).unwrap();
        assert_eq!(config.log.level, "warn");
        assert_eq!(
            config.decode.unknown_marker,
            UnknownMarkerPolicy::TreatAsEmpty
        );
    }

    #[test]
    #[serial]
    fn test_from_env_file_missing() {
        let result = CodecConfig::from_env_file("/nonexistent/calldata.env");
        assert!(matches!(result, Err(ConfigError::EnvFileError { .. })));
    }
}
