use anyhow::Result;
use solana_sdk::native_token::{lamports_to_sol, sol_to_lamports};
use tracing::{info, warn};

use crate::cli::BidArgs;
use crate::config::Config;

pub async fn run(config: &Config, args: BidArgs) -> Result<()> {
    let amount = match (args.lamports, args.sol) {
        (Some(lamports), _) => lamports,
        (None, Some(sol)) => sol_to_lamports(sol),
        (None, None) => anyhow::bail!("a bid amount is required (--lamports or --sol)"),
    };

    let (fee_payer, bidder) = super::signers(config, None)?;
    let client = super::client(config);

    info!(spot_id = %args.spot_id, amount, "placing bid");
    let signature = client
        .place_bid(&fee_payer, &bidder, &args.spot_id, amount)
        .await?;

    println!(
        "bid of {} SOL ({amount} lamports) placed on spot `{}`",
        lamports_to_sol(amount),
        args.spot_id
    );
    println!("signature: {signature}");

    match client.transaction_events(&signature).await {
        Ok(events) => super::print_events(&events),
        Err(err) => warn!(%err, "could not fetch transaction events"),
    }
    Ok(())
}
