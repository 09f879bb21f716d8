use anyhow::{anyhow, Context};
use serde::{Deserialize, Serialize};
use std::env;
use url::Url;

/// ChainGPT news token id for ETH.
const ETH_NEWS_TOKEN_ID: u32 = 80;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub chaingpt: ChainGptConfig,
    pub ledger: LedgerConfig,
    pub server: ServerConfig,
    /// Asset the news feed and the sentiment prompt are about.
    pub asset: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ChainGptConfig {
    pub api_key: String,
    pub chat_url: String,
    pub news_url: String,
    pub news_token_id: u32,
    pub news_limit: u32,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LedgerConfig {
    pub rpc_url: String,
    pub private_key: String,
    pub contract_address: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    pub bind_addr: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from any key/value source; `from_env` passes the
    /// process environment.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .ok_or_else(|| anyhow!("Missing required environment variable {}", key))
        };

        let rpc_url = required("RPC_URL")?;
        Url::parse(&rpc_url).with_context(|| format!("RPC_URL is not a valid URL: {}", rpc_url))?;

        // The news feed is filtered by token id, so it must follow the asset.
        // Only ETH has a built-in id.
        let asset = lookup("ORACLE_ASSET").unwrap_or_else(|| "ETH".to_string());
        let news_token_id = match lookup("NEWS_TOKEN_ID").and_then(|v| v.parse::<u32>().ok()) {
            Some(id) => id,
            None if asset.eq_ignore_ascii_case("ETH") => ETH_NEWS_TOKEN_ID,
            None => anyhow::bail!("NEWS_TOKEN_ID must be set when ORACLE_ASSET is {}", asset),
        };

        let chaingpt = ChainGptConfig {
            api_key: required("CHAINGPT_API_KEY")?,
            chat_url: lookup("CHAINGPT_CHAT_URL")
                .unwrap_or_else(|| "https://api.chaingpt.org/chat/stream".to_string()),
            news_url: lookup("CHAINGPT_NEWS_URL")
                .unwrap_or_else(|| "https://api.chaingpt.org/news".to_string()),
            news_token_id,
            news_limit: lookup("NEWS_LIMIT")
                .unwrap_or_else(|| "3".to_string())
                .parse()
                .unwrap_or(3),
            timeout_secs: lookup("HTTP_TIMEOUT_SECS")
                .and_then(|v| v.parse::<u64>().ok())
                .filter(|secs| *secs > 0)
                .unwrap_or(30),
        };

        let ledger = LedgerConfig {
            rpc_url,
            private_key: required("PRIVATE_KEY")?,
            contract_address: required("CONTRACT_ADDRESS")?,
        };

        let server = ServerConfig {
            bind_addr: lookup("BIND_ADDR").unwrap_or_else(|| "0.0.0.0:3000".to_string()),
        };

        Ok(Config {
            chaingpt,
            ledger,
            server,
            asset,
        })
    }
}
