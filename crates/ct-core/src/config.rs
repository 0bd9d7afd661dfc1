//! Bridge configuration

use crate::{codec::Framing, BridgeError, BridgeResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Largest batch the one-byte count field can describe
pub const MAX_BATCH_LIMIT: usize = u8::MAX as usize;

/// Default batch cap, matching the historical per-transaction output limit
pub const DEFAULT_MAX_BATCH: usize = 16;

/// Bit widths the range proof math accepts
pub const SUPPORTED_RANGE_BITS: [usize; 4] = [8, 16, 32, 64];

/// Tunables shared by both bridges
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BridgeConfig {
    /// Largest number of commitments a single range proof may cover
    pub max_batch: usize,
    /// Width of the proven range, `[0, 2^range_bits)`
    pub range_bits: usize,
    /// Wire framing for encoded proofs
    pub framing: Framing,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            max_batch: DEFAULT_MAX_BATCH,
            range_bits: 64,
            framing: Framing::LengthPrefixed,
        }
    }
}

impl BridgeConfig {
    /// Parse and validate a JSON configuration
    pub fn from_json(json: &str) -> BridgeResult<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| BridgeError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON configuration file
    pub fn from_path(path: impl AsRef<Path>) -> BridgeResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            BridgeError::InvalidConfig(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::from_json(&json)
    }

    pub fn validate(&self) -> BridgeResult<()> {
        if self.max_batch == 0 || self.max_batch > MAX_BATCH_LIMIT {
            return Err(BridgeError::InvalidConfig(format!(
                "max_batch must be in 1..={}, got {}",
                MAX_BATCH_LIMIT, self.max_batch
            )));
        }
        if !SUPPORTED_RANGE_BITS.contains(&self.range_bits) {
            return Err(BridgeError::InvalidConfig(format!(
                "range_bits must be one of {:?}, got {}",
                SUPPORTED_RANGE_BITS, self.range_bits
            )));
        }
        Ok(())
    }

    /// Batch size after padding to a power of two
    pub fn padded_max_batch(&self) -> usize {
        self.max_batch.next_power_of_two()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = BridgeConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.padded_max_batch(), 16);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = BridgeConfig::from_json(r#"{ "framing": "raw", "max_batch": 255 }"#).unwrap();
        assert_eq!(config.framing, Framing::Raw);
        assert_eq!(config.max_batch, 255);
        assert_eq!(config.range_bits, 64);
        assert_eq!(config.padded_max_batch(), 256);
    }

    #[test]
    fn test_invalid_values_rejected() {
        for json in [
            r#"{ "max_batch": 0 }"#,
            r#"{ "max_batch": 256 }"#,
            r#"{ "range_bits": 12 }"#,
            r#"{ "framing": "chunked" }"#,
            r#"{ "unknown": 1 }"#,
            "not json",
        ] {
            assert!(
                matches!(BridgeConfig::from_json(json), Err(BridgeError::InvalidConfig(_))),
                "{}",
                json
            );
        }
    }

    #[test]
    fn test_missing_file() {
        let result = BridgeConfig::from_path("/nonexistent/ct-bridge.json");
        assert!(matches!(result, Err(BridgeError::InvalidConfig(_))));
    }
}
