//! Front-end configuration.
//!
//! Groups the matcher and detector parameter blocks into one
//! deserializable structure so callers can load both from a single config
//! document and validate them before wiring up the front-end.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::tracking::detector::DetectorParams;
use crate::tracking::matcher::MatcherParams;

/// Combined configuration for one sensor's perception front-end.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FrontendConfig {
    pub matcher: MatcherParams,
    pub detector: DetectorParams,
}

impl FrontendConfig {
    /// Parse and validate a JSON config document.
    pub fn from_json(data: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(data).context("failed to parse front-end config")?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.matcher.validate().context("matcher config")?;
        self.detector.validate().context("detector config")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(FrontendConfig::default().validate().is_ok());
    }

    #[test]
    fn test_round_trip() {
        let mut config = FrontendConfig::default();
        config.matcher.meas_std = 0.5;
        config.detector.hierarchy_level = 5;

        let json = serde_json::to_string(&config).unwrap();
        let back = FrontendConfig::from_json(&json).unwrap();

        assert_eq!(back.matcher.meas_std, 0.5);
        assert_eq!(back.detector.hierarchy_level, 5);
    }

    #[test]
    fn test_partial_document_fills_defaults() {
        let config = FrontendConfig::from_json(r#"{"matcher": {"low_innov": 2.5}}"#).unwrap();
        assert_eq!(config.matcher.low_innov, 2.5);
        assert_eq!(config.matcher.threshold, MatcherParams::default().threshold);
        assert_eq!(
            config.detector.hierarchy_level,
            DetectorParams::default().hierarchy_level
        );
    }

    #[test]
    fn test_invalid_values_rejected() {
        let result = FrontendConfig::from_json(r#"{"detector": {"meas_std": -2.0}}"#);
        assert!(result.is_err());
    }
}
