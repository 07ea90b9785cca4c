use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level configuration for a ledger process.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct AttestConfig {
    #[serde(default)]
    pub ledger: LedgerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct LedgerConfig {
    /// Starting ledger time in seconds since the epoch. `None` starts at the current wall-clock time.
    pub genesis_timestamp: Option<u64>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct LoggingConfig {
    /// env_logger filter string, e.g. "info" or "attest_verification=debug".
    /// `RUST_LOG` takes precedence when set.
    pub filter: Option<String>,
}

impl AttestConfig {
    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        toml::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse TOML config: {}", e))
    }
}

// Basic config loader
pub fn load_config<P: AsRef<Path>>(path: P) -> anyhow::Result<AttestConfig> {
    let path = path.as_ref();
    let config_content = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config file from {}: {}", path.display(), e))?;
    toml::from_str(&config_content)
        .map_err(|e| anyhow::anyhow!("Failed to parse TOML config from {}: {}", path.display(), e))
}

// Example config file:
/*
[ledger]
genesis_timestamp = 1700000000

[logging]
filter = "info"
*/
