use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{RecordError, Result};

pub const DEFAULT_SIZE: usize = 20;
pub const DEFAULT_NKEYS: usize = 18;
pub const DEFAULT_SEED: u64 = 42;

/// Parameters of one replay session: table size, number of demo keys and
/// the shuffle seed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReplayConfig {
    pub size: usize,
    pub nkeys: usize,
    pub seed: u64,
}

impl Default for ReplayConfig {
    fn default() -> Self {
        Self { size: DEFAULT_SIZE, nkeys: DEFAULT_NKEYS, seed: DEFAULT_SEED }
    }
}

impl ReplayConfig {
    /// Missing fields fall back to their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let data = fs::read(path)?;
        Ok(serde_json::from_slice(&data)?)
    }

    pub fn validate(&self) -> Result<()> {
        if self.size == 0 {
            return Err(RecordError::InvalidSize { size: self.size });
        }
        if self.nkeys > self.size {
            return Err(RecordError::CapacityExceeded { step_number: self.size + 1, size: self.size });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let cfg: ReplayConfig = serde_json::from_str(r#"{ "size": 12 }"#).unwrap();
        assert_eq!(cfg, ReplayConfig { size: 12, nkeys: DEFAULT_NKEYS, seed: DEFAULT_SEED });
    }

    #[test]
    fn defaults_are_valid() {
        ReplayConfig::default().validate().unwrap();
    }

    #[test]
    fn rejects_zero_size_and_overfull_tables() {
        let zero = ReplayConfig { size: 0, ..ReplayConfig::default() };
        assert!(matches!(zero.validate(), Err(RecordError::InvalidSize { size: 0 })));

        let over = ReplayConfig { size: 4, nkeys: 5, seed: 1 };
        assert!(matches!(
            over.validate(),
            Err(RecordError::CapacityExceeded { step_number: 5, size: 4 })
        ));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = ReplayConfig::from_json_file(Path::new("/nonexistent/replay.json")).unwrap_err();
        assert!(matches!(err, RecordError::Io(_)));
    }
}
