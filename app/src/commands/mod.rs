//! Command handlers, one module per subcommand.

pub mod addresses;
pub mod init_spot;
pub mod place_bid;
pub mod settle;
pub mod status;

use std::path::Path;

use anyhow::{anyhow, Result};
use solana_sdk::signature::{read_keypair_file, Keypair};
use spotlight_client::events::SpotlightEvent;
use spotlight_client::SpotlightClient;

use crate::cli::Commands;
use crate::config::Config;

pub async fn run(config: &Config, command: Commands) -> Result<()> {
    match command {
        Commands::InitSpot(args) => init_spot::run(config, args).await,
        Commands::Bid(args) => place_bid::run(config, args).await,
        Commands::Settle(args) => settle::run(config, args).await,
        Commands::Status(args) => status::run(config, args).await,
        Commands::Addresses(args) => addresses::run(config, args),
    }
}

fn client(config: &Config) -> SpotlightClient {
    SpotlightClient::new(config.rpc_url.clone(), config.program_id)
}

fn load_keypair(path: &Path) -> Result<Keypair> {
    read_keypair_file(path)
        .map_err(|err| anyhow!("failed to read keypair {}: {err}", path.display()))
}

/// Load the fee payer and the role signer (admin or bidder). The role
/// signer is the configured wallet unless the command overrides it; the
/// fee payer falls back to that same wallet.
fn signers(config: &Config, role_override: Option<&Path>) -> Result<(Keypair, Keypair)> {
    let role_path = role_override.unwrap_or(&config.keypair_path);
    let role = load_keypair(role_path)?;
    let fee_payer = match &config.fee_payer_path {
        Some(path) => load_keypair(path)?,
        None => load_keypair(role_path)?,
    };
    Ok((fee_payer, role))
}

/// Echo the program events a confirmed transaction emitted.
fn print_events(events: &[SpotlightEvent]) {
    for event in events {
        match event {
            SpotlightEvent::BidPlaced(e) => {
                println!("event: bid of {} lamports placed by {}", e.amount, e.bidder);
            }
            SpotlightEvent::BidRefunded(e) => {
                println!("event: {} lamports refunded to {}", e.amount, e.bidder);
            }
            SpotlightEvent::SpotSettled(e) => match e.winner {
                Some(winner) => println!(
                    "event: spot `{}` settled, winner {}, {} lamports distributed",
                    e.spot_id, winner, e.total_amount
                ),
                None => println!("event: spot `{}` settled with no bids", e.spot_id),
            },
        }
    }
}
