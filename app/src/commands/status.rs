use anyhow::Result;
use chrono::{DateTime, Utc};
use solana_sdk::native_token::lamports_to_sol;
use spotlight_client::state::{calculate_payout, validate_spot_id};
use spotlight_client::{pda, Error};

use crate::cli::StatusArgs;
use crate::config::Config;

pub async fn run(config: &Config, args: StatusArgs) -> Result<()> {
    validate_spot_id(&args.spot_id)?;
    let client = super::client(config);
    let (spot_address, _) = pda::derive_spot_state(&args.spot_id, &config.program_id);
    let (vault_address, _) = pda::derive_escrow_vault(&args.spot_id, &config.program_id);

    let spot = client.get_spot_state(&args.spot_id).await?;

    println!("spot `{}` on {} ({})", spot.spot_id, config.network.name(), spot_address);
    println!("  admin:        {}", spot.admin);
    println!(
        "  window:       {} -> {}",
        format_timestamp(spot.auction_start_time),
        format_timestamp(spot.auction_end_time)
    );
    let now = Utc::now().timestamp();
    if spot.is_settled {
        println!("  settled:      yes");
    } else if spot.has_ended(now) {
        println!("  settled:      no (auction ended, awaiting settlement)");
    } else {
        println!(
            "  settled:      no ({} seconds of bidding left)",
            spot.auction_end_time - now
        );
    }
    match spot.current_bidder {
        Some(bidder) => println!(
            "  current bid:  {} SOL ({} lamports) by {bidder}",
            lamports_to_sol(spot.current_bid),
            spot.current_bid
        ),
        None => println!("  current bid:  none"),
    }
    println!(
        "  total bids:   {} ({} SOL refunded to outbid bidders)",
        spot.total_bids,
        lamports_to_sol(spot.total_refunded)
    );
    if !spot.name.is_empty() {
        println!("  name:         {}", spot.name);
    }
    if !spot.url.is_empty() {
        println!("  url:          {}", spot.url);
    }

    // The vault account may already be gone after settlement cleanup;
    // report what is still visible.
    match client.get_escrow_vault(&args.spot_id).await {
        Ok(vault) => {
            let balance = client.get_escrow_balance(&args.spot_id).await?;
            println!("escrow vault ({vault_address})");
            println!(
                "  deposited:    {} SOL, withdrawn: {} SOL, balance: {} SOL",
                lamports_to_sol(vault.total_deposited),
                lamports_to_sol(vault.total_withdrawn),
                lamports_to_sol(balance)
            );
            if !spot.is_settled {
                let split = calculate_payout(vault.total_deposited);
                println!(
                    "  payout on settle: dao {} SOL / contributor {} SOL / core team {} SOL",
                    lamports_to_sol(split.dao),
                    lamports_to_sol(split.contributor),
                    lamports_to_sol(split.core_team)
                );
            }
        }
        Err(Error::AccountNotFound { address }) => {
            println!("escrow vault {address} not found");
        }
        Err(err) => return Err(err.into()),
    }
    Ok(())
}

fn format_timestamp(unix: i64) -> String {
    DateTime::<Utc>::from_timestamp(unix, 0)
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S UTC").to_string())
        .unwrap_or_else(|| format!("t={unix}"))
}
