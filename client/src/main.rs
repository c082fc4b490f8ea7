use anyhow::Result;
use clap::Parser;

use xai_client::{SmokeConfig, SmokeRunner};

/// Send the program's `initialize` instruction once and print the
/// resulting transaction signature.
#[derive(Parser)]
#[command(version, about)]
struct Opts {
    /// Cluster URL or moniker (localnet, devnet, mainnet, ...).
    #[arg(long, env = "ANCHOR_PROVIDER_URL")]
    provider_url: String,

    /// Path to the payer keypair file.
    #[arg(long, env = "ANCHOR_WALLET")]
    wallet: String,

    /// Withdrawal authority to record; defaults to the payer.
    #[arg(long, env = "MIGRATION_ACCOUNT")]
    migration_account: Option<String>,

    /// Fee sink to record; defaults to the payer.
    #[arg(long, env = "FEE_RECEIVER_ACCOUNT")]
    fee_receiver_account: Option<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let opts = Opts::parse();

    let config = SmokeConfig::new(
        &opts.provider_url,
        &opts.wallet,
        opts.migration_account.as_deref(),
        opts.fee_receiver_account.as_deref(),
    )?;
    let signature = SmokeRunner::from_config(&config)?.run()?;

    println!("Your transaction signature {signature}");
    Ok(())
}
