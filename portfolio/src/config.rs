//! Page configuration.
//!
//! The host page may embed a JSON block:
//!
//! ```html
//! <script id="portfolio-config" type="application/json">
//!   { "probeLine": 100, "logLevel": "info" }
//! </script>
//! ```
//!
//! Every field is optional. A missing block means defaults; a broken block
//! means defaults plus an error for the caller to log.

use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

use crate::error::ConfigError;
use crate::tracker::{DEFAULT_PROBE_LINE, TrackerConfig};

/// DOM id of the embedded config block.
pub const CONFIG_ELEMENT_ID: &str = "portfolio-config";

/// Default `tracing` filter directive.
pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PortfolioConfig {
    /// Probe line offset from the viewport top, in CSS pixels.
    pub probe_line: f64,
    /// `tracing` filter directive, e.g. `"debug"` or `"portfolio=trace"`.
    pub log_level: String,
}

impl Default for PortfolioConfig {
    fn default() -> Self {
        Self {
            probe_line: DEFAULT_PROBE_LINE,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl PortfolioConfig {
    /// Parse and validate a JSON config block.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.probe_line.is_finite() || self.probe_line < 0.0 {
            return Err(ConfigError::ProbeLine(self.probe_line));
        }
        self.log_filter()?;
        Ok(())
    }

    pub fn tracker(&self) -> TrackerConfig {
        TrackerConfig {
            probe_line: self.probe_line,
        }
    }

    pub fn log_filter(&self) -> Result<EnvFilter, ConfigError> {
        Ok(EnvFilter::try_new(&self.log_level)?)
    }
}

/// Read the config block from the current document.
///
/// Always yields a usable config; the error, if any, describes why the
/// embedded block was ignored.
pub fn load() -> (PortfolioConfig, Option<ConfigError>) {
    let text = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|element| element.text_content());

    match text {
        Some(text) => resolve(&text),
        None => (PortfolioConfig::default(), None),
    }
}

/// Parse `text`, falling back to defaults on error.
pub fn resolve(text: &str) -> (PortfolioConfig, Option<ConfigError>) {
    if text.trim().is_empty() {
        return (PortfolioConfig::default(), None);
    }
    match PortfolioConfig::from_json(text) {
        Ok(config) => (config, None),
        Err(err) => (PortfolioConfig::default(), Some(err)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_object_yields_defaults() {
        let config = PortfolioConfig::from_json("{}").unwrap();
        assert_eq!(config, PortfolioConfig::default());
        assert_eq!(config.tracker(), TrackerConfig::default());
    }

    #[test]
    fn camel_case_fields_are_read() {
        let config =
            PortfolioConfig::from_json(r#"{ "probeLine": 64, "logLevel": "debug" }"#).unwrap();
        assert_eq!(config.probe_line, 64.0);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn negative_probe_line_is_rejected() {
        let err = PortfolioConfig::from_json(r#"{ "probeLine": -1 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::ProbeLine(v) if v == -1.0));
    }

    #[test]
    fn bad_log_directive_is_rejected() {
        let err = PortfolioConfig::from_json(r#"{ "logLevel": "portfolio=loud" }"#).unwrap_err();
        assert!(matches!(err, ConfigError::LogFilter(_)));
    }

    #[test]
    fn resolve_falls_back_on_garbage() {
        let (config, err) = resolve("{ not json");
        assert_eq!(config, PortfolioConfig::default());
        assert!(matches!(err, Some(ConfigError::Parse(_))));
    }

    #[test]
    fn resolve_treats_blank_block_as_absent() {
        let (config, err) = resolve("  \n ");
        assert_eq!(config, PortfolioConfig::default());
        assert!(err.is_none());
    }
}
