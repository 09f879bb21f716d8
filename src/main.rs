use anyhow::Result;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ai_news_oracle::config::Config;
use ai_news_oracle::engine::OracleEngine;
use ai_news_oracle::execution::ExecutionGateway;
use ai_news_oracle::ledger::EthersLedger;
use ai_news_oracle::llm::ChainGptChatClient;
use ai_news_oracle::news::ChainGptNewsClient;
use ai_news_oracle::oracle::{self, OracleService};
use ai_news_oracle::strategies::NewsSentimentStrategy;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ai_news_oracle=debug,info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    print_banner(&config);

    let news = Arc::new(ChainGptNewsClient::new(&config.chaingpt));
    let llm = Arc::new(ChainGptChatClient::new(&config.chaingpt));
    let ledger = Arc::new(EthersLedger::new(&config.ledger).await?);

    let service = OracleService::new(
        news,
        OracleEngine::new(llm),
        ExecutionGateway::new(ledger),
        NewsSentimentStrategy::new(config.asset.clone()),
    );

    info!("✅ Oracle pipeline wired");

    // Serves until the process is stopped
    oracle::run_server(Arc::new(service), &config.server.bind_addr).await
}

fn print_banner(config: &Config) {
    println!("\n╔═══════════════════════════════════════════════════════════╗");
    println!("║              AI News Oracle (ChainGPT + EVM)              ║");
    println!("╚═══════════════════════════════════════════════════════════╝");
    println!();
    println!("🧠 Strategy: News Sentiment ({})", config.asset);
    println!(
        "📰 News: token {} | last {} items",
        config.chaingpt.news_token_id, config.chaingpt.news_limit
    );
    println!("🔗 RPC: {}", config.ledger.rpc_url);
    println!("📜 Contract: {}", config.ledger.contract_address);
    println!("🌐 Endpoint: POST http://{}/oracle/news", config.server.bind_addr);
    println!("═══════════════════════════════════════════════════════════");
    println!();
}
