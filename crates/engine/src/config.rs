//! Engine configuration via `versus.toml`
//!
//! Every field has a default, so an empty file is a valid configuration.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;
use versus_core::{VersusError, VersusResult};
use versus_ranking::MemoryRankStore;

/// Config file name looked up by callers that keep one next to their data.
pub const CONFIG_FILE_NAME: &str = "versus.toml";

/// Comparison settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonConfig {
    /// Evaluate characteristics on the rayon thread pool
    #[serde(default)]
    pub parallel: bool,
}

/// Rank list settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankingConfig {
    /// Longest wait, in milliseconds, for a characteristic's rank lock
    #[serde(default = "default_lock_timeout_ms")]
    pub lock_timeout_ms: u64,
}

fn default_lock_timeout_ms() -> u64 {
    1000
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            lock_timeout_ms: default_lock_timeout_ms(),
        }
    }
}

impl RankingConfig {
    /// Lock timeout as a `Duration`
    pub fn lock_timeout(&self) -> Duration {
        Duration::from_millis(self.lock_timeout_ms)
    }
}

/// Configuration loaded from `versus.toml`.
///
/// # Example
///
/// ```toml
/// [comparison]
/// parallel = false
///
/// [ranking]
/// lock_timeout_ms = 1000
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersusConfig {
    /// Comparison settings
    #[serde(default)]
    pub comparison: ComparisonConfig,
    /// Rank list settings
    #[serde(default)]
    pub ranking: RankingConfig,
}

impl VersusConfig {
    /// Reject settings that parse but cannot work.
    ///
    /// # Errors
    ///
    /// Returns an error if `ranking.lock_timeout_ms` is zero.
    pub fn validate(&self) -> VersusResult<()> {
        if self.ranking.lock_timeout_ms == 0 {
            return Err(VersusError::config(
                "ranking.lock_timeout_ms must be greater than 0",
            ));
        }
        Ok(())
    }

    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# versus configuration

[comparison]
# Evaluate a product's characteristics in parallel (default: false).
# Results keep the category's declared order either way.
parallel = false

[ranking]
# Longest wait for another transaction to release a characteristic's
# rank list, in milliseconds (default: 1000). A timeout is reported as a
# concurrent rank conflict and may be retried by the caller.
lock_timeout_ms = 1000
"#
    }

    /// Read and parse config from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn from_file(path: &Path) -> VersusResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            VersusError::config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        content.parse().map_err(|e: VersusError| {
            VersusError::config(format!("In '{}': {}", path.display(), e))
        })
    }

    /// Serialize this config to TOML and write it to the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn write_to_file(&self, path: &Path) -> VersusResult<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| VersusError::config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, content).map_err(|e| {
            VersusError::config(format!(
                "Failed to write config file '{}': {}",
                path.display(),
                e
            ))
        })
    }

    /// Build an empty rank store honouring the lock timeout
    pub fn rank_store(&self) -> MemoryRankStore {
        MemoryRankStore::with_lock_timeout(self.ranking.lock_timeout())
    }
}

impl FromStr for VersusConfig {
    type Err = VersusError;

    fn from_str(s: &str) -> VersusResult<Self> {
        let config: VersusConfig = toml::from_str(s)
            .map_err(|e| VersusError::config(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }
}
