//! Sampler configuration.

use serde::{Deserialize, Serialize};

use crate::error::{PrimitiveError, Result};
use crate::random::{BoundedSampler, MAX_LONG_VALUE};

/// Configuration for the bounded sampler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplerConfig {
    /// Inclusive upper bound of sampled values.
    pub max_long_value: i64,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            max_long_value: MAX_LONG_VALUE,
        }
    }
}

impl SamplerConfig {
    /// Parse from JSON. Missing fields take their defaults.
    pub fn from_json(s: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject a negative bound.
    pub fn validate(&self) -> Result<()> {
        if self.max_long_value < 0 {
            return Err(PrimitiveError::InvalidConfig(format!(
                "max_long_value must be non-negative, got {}",
                self.max_long_value
            )));
        }
        Ok(())
    }

    /// Build a sampler for the configured bound.
    pub fn sampler(&self) -> Result<BoundedSampler> {
        BoundedSampler::new(self.max_long_value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bound() {
        let config = SamplerConfig::default();
        assert_eq!(config.max_long_value, MAX_LONG_VALUE);
        assert!(config.validate().is_ok());
        assert_eq!(config.sampler().unwrap().max(), MAX_LONG_VALUE);
    }

    #[test]
    fn test_from_json() {
        let config = SamplerConfig::from_json(r#"{"max_long_value": 7}"#).unwrap();
        assert_eq!(config.max_long_value, 7);
        assert!(config.sampler().unwrap().is_masked());
    }

    #[test]
    fn test_from_json_missing_field_uses_default() {
        let config = SamplerConfig::from_json("{}").unwrap();
        assert_eq!(config, SamplerConfig::default());
    }

    #[test]
    fn test_from_json_negative_bound() {
        let err = SamplerConfig::from_json(r#"{"max_long_value": -1}"#).unwrap_err();
        assert!(matches!(err, PrimitiveError::InvalidConfig(_)));
        assert!(!err.is_invalid_input());
    }

    #[test]
    fn test_from_json_malformed() {
        let err = SamplerConfig::from_json("not json").unwrap_err();
        assert!(matches!(err, PrimitiveError::InvalidConfig(_)));
    }

    #[test]
    fn test_sampler_rejects_negative_field() {
        let config = SamplerConfig { max_long_value: -8 };
        assert_eq!(config.sampler(), Err(PrimitiveError::NegativeBound(-8)));
    }

    #[test]
    fn test_serialize_roundtrip() {
        let config = SamplerConfig { max_long_value: 1023 };
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(json, r#"{"max_long_value":1023}"#);
    }
}
