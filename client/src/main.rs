use anyhow::{Context, Result};
use metamon_battle::{AutoBattler, TokioPacer};
use metamon_client::{Config, HttpGameClient, Wallet};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env()?;
    let wallet = Wallet::from_hex(&config.private_key).context("Failed to load wallet")?;
    tracing::info!(address = %wallet.address(), "Login wallet address");

    let client = HttpGameClient::new(&config.api_url, config.http_timeout)?;
    let session = client.login(&wallet).await?;

    let mut battler = AutoBattler::new(
        &client,
        &session,
        TokioPacer,
        StdRng::from_entropy(),
        config.run_options(),
    );
    let report = battler.run().await?;

    for summary in report.summaries.iter().filter(|s| s.battles > 0) {
        println!("{}", summary);
    }
    println!(
        "team enrollments: {}, eggs minted: {}, failed mints: {}",
        report.team_enrollments, report.mint.issued, report.mint.failed
    );

    Ok(())
}
