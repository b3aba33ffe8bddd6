use anyhow::{anyhow, Context};
use serde::Deserialize;
use std::env;

use crate::middleware::DEFAULT_WEB_ORIGIN;
use crate::service::soroban_service::NetworkConfig;
use crate::soroban::wasm_spec::SpecMinerConfig;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub stellar: StellarConfig,
    pub spec_miner: SpecMinerConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
    pub rust_log: String,
    /// Only browser origin allowed by CORS
    pub web_origin: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StellarConfig {
    pub network: NetworkConfig,
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from any variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, anyhow::Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string());
        let port: u16 = match lookup("PORT") {
            Some(port) => port.parse().context("PORT must be a valid port number")?,
            None => 8080,
        };
        let rust_log =
            lookup("RUST_LOG").unwrap_or_else(|| "devconsole_backend=info,actix_web=info".to_string());

        let web_origin = lookup("WEB_ORIGIN").unwrap_or_else(|| DEFAULT_WEB_ORIGIN.to_string());

        let network = Self::network_from_lookup(&lookup)?;

        let mut spec_miner = SpecMinerConfig::default();
        if let Some(section) = lookup("WASM_SPEC_SECTION") {
            spec_miner.section_name = section;
        }
        if let Some(words) = lookup("WASM_SPEC_RESERVED_WORDS") {
            spec_miner.reserved_words = words
                .split(',')
                .map(|w| w.trim().to_string())
                .filter(|w| !w.is_empty())
                .collect();
        }

        Ok(Config {
            server: ServerConfig {
                port,
                host,
                rust_log,
                web_origin,
            },
            stellar: StellarConfig { network },
            spec_miner,
        })
    }

    fn network_from_lookup<F>(lookup: &F) -> Result<NetworkConfig, anyhow::Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let name = lookup("STELLAR_NETWORK").unwrap_or_else(|| "testnet".to_string());
        let rpc_url = lookup("STELLAR_RPC_URL");

        if name.eq_ignore_ascii_case("custom") {
            let rpc_url = rpc_url.context("STELLAR_RPC_URL is required for a custom network")?;
            let passphrase = lookup("STELLAR_NETWORK_PASSPHRASE")
                .context("STELLAR_NETWORK_PASSPHRASE is required for a custom network")?;
            let mut network = NetworkConfig::custom(rpc_url, passphrase);
            if let Some(horizon_url) = lookup("HORIZON_URL") {
                network.horizon_url = horizon_url;
            }
            return Ok(network);
        }

        let mut network = NetworkConfig::preset(&name)
            .ok_or_else(|| anyhow!("Unknown STELLAR_NETWORK: {}", name))?;
        if let Some(rpc_url) = rpc_url {
            network.rpc_url = rpc_url;
        }
        if let Some(horizon_url) = lookup("HORIZON_URL") {
            network.horizon_url = horizon_url;
        }
        Ok(network)
    }
}
