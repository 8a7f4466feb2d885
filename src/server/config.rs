use std::{path::PathBuf, time::Duration};

use crate::server::error::config::ConfigError;

static DEFAULT_SUPPORTED_TICKER: &str = "B1T";
static DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:5679";
static DEFAULT_CONSTRUCTOR_SCRIPT_DIR: &str = "./bitcore-libs/b1t";
static DEFAULT_CONSTRUCTOR_MINT_SCRIPT: &str = "getOrdTxsB1T.js";
static DEFAULT_CONSTRUCTOR_TRANSFER_SCRIPT: &str = "generateTxHexWrapper.js";
const DEFAULT_NODE_RPC_TIMEOUT_SECS: u64 = 30;

pub struct Config {
    pub database_url: String,
    pub node_rpc_url: String,
    pub node_rpc_user: String,
    pub node_rpc_password: String,
    /// Wallet path appended to the RPC url as `/wallet/<name>`
    pub node_rpc_wallet: Option<String>,
    pub node_rpc_timeout: Duration,
    pub supported_ticker: String,
    pub constructor_script_dir: PathBuf,
    pub constructor_mint_script: String,
    pub constructor_transfer_script: String,
    pub bind_address: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let node_rpc_timeout_secs = match optional("NODE_RPC_TIMEOUT_SECS") {
            Some(value) => value
                .parse::<u64>()
                .map_err(|e| ConfigError::InvalidEnvValue {
                    var: "NODE_RPC_TIMEOUT_SECS".to_string(),
                    reason: e.to_string(),
                })?,
            None => DEFAULT_NODE_RPC_TIMEOUT_SECS,
        };

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            node_rpc_url: required("NODE_RPC_URL")?,
            node_rpc_user: required("NODE_RPC_USER")?,
            node_rpc_password: required("NODE_RPC_PASSWORD")?,
            node_rpc_wallet: optional("NODE_RPC_WALLET"),
            node_rpc_timeout: Duration::from_secs(node_rpc_timeout_secs),
            supported_ticker: optional("SUPPORTED_TICKER")
                .unwrap_or_else(|| DEFAULT_SUPPORTED_TICKER.to_string())
                .to_uppercase(),
            constructor_script_dir: optional("CONSTRUCTOR_SCRIPT_DIR")
                .unwrap_or_else(|| DEFAULT_CONSTRUCTOR_SCRIPT_DIR.to_string())
                .into(),
            constructor_mint_script: optional("CONSTRUCTOR_MINT_SCRIPT")
                .unwrap_or_else(|| DEFAULT_CONSTRUCTOR_MINT_SCRIPT.to_string()),
            constructor_transfer_script: optional("CONSTRUCTOR_TRANSFER_SCRIPT")
                .unwrap_or_else(|| DEFAULT_CONSTRUCTOR_TRANSFER_SCRIPT.to_string()),
            bind_address: optional("BIND_ADDRESS")
                .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
        })
    }
}

fn required(var: &str) -> Result<String, ConfigError> {
    std::env::var(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
}

/// Unset and empty variables are both treated as absent
fn optional(var: &str) -> Option<String> {
    std::env::var(var).ok().filter(|value| !value.trim().is_empty())
}
