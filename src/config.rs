use crate::analysis::{DustHeuristic, DEFAULT_DUST_VALUE_SATS, DEFAULT_NON_DUST_OUTPUTS};
use crate::decoder::ChecksumPolicy;
use crate::errors::{ForensicsError, ForensicsResult};
use bitcoin::Network;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;
use std::str::FromStr;

/// Configuration loaded from config.toml and environment variables
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    pub analysis: AnalysisConfig,
    pub bitcoin_rpc: BitcoinRpcConfig,
}

/// Parameters of the extraction and analysis functions
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnalysisConfig {
    /// Network profile used for address encoding ("bitcoin", "testnet", "signet", "regtest")
    pub network: String,
    /// Exact output value (sats) treated as dust by the suspicious-output check
    pub dust_value_sats: u64,
    /// Outputs allowed to carry real value in a suspicious transaction
    pub non_dust_outputs: usize,
    /// Whether embedded payload checksums are enforced
    pub checksum_policy: ChecksumPolicy,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            network: "bitcoin".to_string(),
            dust_value_sats: DEFAULT_DUST_VALUE_SATS,
            non_dust_outputs: DEFAULT_NON_DUST_OUTPUTS,
            checksum_policy: ChecksumPolicy::Verify,
        }
    }
}

impl AnalysisConfig {
    /// Parse the configured network
    ///
    /// Accepts rust-bitcoin names ("bitcoin", "testnet") and Bitcoin Core's
    /// `-chain` names ("main", "test").
    pub fn network(&self) -> ForensicsResult<Network> {
        Network::from_str(&self.network)
            .or_else(|_| Network::from_core_arg(&self.network))
            .map_err(|_| ForensicsError::Config(format!("Unknown network: {}", self.network)))
    }

    pub fn dust_heuristic(&self) -> DustHeuristic {
        DustHeuristic {
            dust_value_sats: self.dust_value_sats,
            non_dust_outputs: self.non_dust_outputs,
        }
    }
}

/// Bitcoin Core RPC configuration for the RPC lookup collaborator
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BitcoinRpcConfig {
    pub url: String,
    pub username: String,
    pub password: String,
    pub max_retries: usize,
    pub initial_backoff_ms: u64,
    pub backoff_multiplier: f64,
    pub max_backoff_seconds: u64,
}

impl Default for BitcoinRpcConfig {
    fn default() -> Self {
        Self {
            url: "http://localhost:8332".to_string(),
            username: "bitcoin".to_string(),
            password: "password".to_string(),
            max_retries: 10,
            initial_backoff_ms: 100,
            backoff_multiplier: 2.0,
            max_backoff_seconds: 30,
        }
    }
}

impl AppConfig {
    /// Load configuration from an optional ./config.toml and environment variables
    /// Environment variables take precedence over file configuration
    pub fn load() -> ForensicsResult<Self> {
        let builder = Self::with_defaults()?.add_source(File::with_name("config").required(false));
        Self::finish(builder)
    }

    /// Load configuration from a specific TOML file, then environment variables
    pub fn load_from(path: &Path) -> ForensicsResult<Self> {
        let builder = Self::with_defaults()?.add_source(File::from(path).format(FileFormat::Toml));
        Self::finish(builder)
    }

    fn with_defaults() -> Result<ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        let analysis = AnalysisConfig::default();
        let rpc = BitcoinRpcConfig::default();
        Config::builder()
            .set_default("analysis.network", analysis.network)?
            .set_default("analysis.dust_value_sats", analysis.dust_value_sats)?
            .set_default("analysis.non_dust_outputs", analysis.non_dust_outputs as u64)?
            .set_default("analysis.checksum_policy", "verify")?
            .set_default("bitcoin_rpc.url", rpc.url)?
            .set_default("bitcoin_rpc.username", rpc.username)?
            .set_default("bitcoin_rpc.password", rpc.password)?
            .set_default("bitcoin_rpc.max_retries", rpc.max_retries as u64)?
            .set_default("bitcoin_rpc.initial_backoff_ms", rpc.initial_backoff_ms)?
            .set_default("bitcoin_rpc.backoff_multiplier", rpc.backoff_multiplier)?
            .set_default("bitcoin_rpc.max_backoff_seconds", rpc.max_backoff_seconds)
    }

    fn finish(
        builder: ConfigBuilder<config::builder::DefaultState>,
    ) -> ForensicsResult<Self> {
        let config = builder
            // FORENSICS_ANALYSIS__DUST_VALUE_SATS=546 overrides analysis.dust_value_sats
            .add_source(
                config::Environment::with_prefix("FORENSICS")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        let mut app_config: AppConfig = config.try_deserialize()?;

        // Check for specific environment variables with custom names
        if let Ok(network) = env::var("FORENSICS_NETWORK") {
            app_config.analysis.network = network;
        }
        if let Ok(url) = env::var("BITCOIN_RPC_URL") {
            app_config.bitcoin_rpc.url = url;
        }
        if let Ok(username) = env::var("BITCOIN_RPC_USERNAME") {
            app_config.bitcoin_rpc.username = username;
        }
        if let Ok(password) = env::var("BITCOIN_RPC_PASSWORD") {
            app_config.bitcoin_rpc.password = password;
        }

        // Surface a bad network name at load time rather than on first use
        app_config.analysis.network()?;

        Ok(app_config)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            analysis: AnalysisConfig::default(),
            bitcoin_rpc: BitcoinRpcConfig::default(),
        }
    }
}
