//! Command-line interface definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Command-line front-end for the Sendo Spotlight auction program
#[derive(Parser, Debug)]
#[command(name = "spotlight")]
#[command(version)]
pub struct Cli {
    /// RPC endpoint; overrides SPOTLIGHT_RPC_URL and the network mapping
    #[arg(long, global = true)]
    pub rpc_url: Option<String>,

    /// Program address; overrides SPOTLIGHT_PROGRAM_ID
    #[arg(long, global = true)]
    pub program_id: Option<String>,

    /// Signing keypair path; overrides SPOTLIGHT_KEYPAIR
    #[arg(long, global = true)]
    pub keypair: Option<PathBuf>,

    /// Increase output verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands. Each one is a single round trip to the cluster.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Open a new auction spot (admin)
    InitSpot(InitSpotArgs),

    /// Place a bid on a spot
    Bid(BidArgs),

    /// Settle an ended auction and distribute the escrowed funds (admin)
    Settle(SettleArgs),

    /// Show a spot's on-chain state and escrow balance
    Status(StatusArgs),

    /// Print the derived program addresses for a spot
    Addresses(AddressesArgs),
}

#[derive(Args, Debug)]
pub struct InitSpotArgs {
    /// Spot identifier (e.g. "A" or "B")
    pub spot_id: String,

    /// Auction duration in seconds
    #[arg(long)]
    pub duration_secs: u64,

    /// Admin keypair path; defaults to the signing wallet
    #[arg(long)]
    pub admin: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct BidArgs {
    /// Spot identifier
    pub spot_id: String,

    /// Bid amount in lamports
    #[arg(long, required_unless_present = "sol", conflicts_with = "sol")]
    pub lamports: Option<u64>,

    /// Bid amount in SOL
    #[arg(long)]
    pub sol: Option<f64>,
}

#[derive(Args, Debug)]
pub struct SettleArgs {
    /// Spot identifier
    pub spot_id: String,

    /// Admin keypair path; defaults to the signing wallet
    #[arg(long)]
    pub admin: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct StatusArgs {
    /// Spot identifier
    pub spot_id: String,
}

#[derive(Args, Debug)]
pub struct AddressesArgs {
    /// Spot identifier
    pub spot_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_init_spot() {
        let cli = Cli::try_parse_from(["spotlight", "init-spot", "A", "--duration-secs", "3600"])
            .unwrap();
        match cli.command {
            Commands::InitSpot(args) => {
                assert_eq!(args.spot_id, "A");
                assert_eq!(args.duration_secs, 3600);
                assert!(args.admin.is_none());
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_bid_requires_an_amount() {
        assert!(Cli::try_parse_from(["spotlight", "bid", "A"]).is_err());
        assert!(Cli::try_parse_from(["spotlight", "bid", "A", "--lamports", "1"]).is_ok());
        assert!(Cli::try_parse_from(["spotlight", "bid", "A", "--sol", "1.5"]).is_ok());
        assert!(Cli::try_parse_from([
            "spotlight",
            "bid",
            "A",
            "--lamports",
            "1",
            "--sol",
            "1.5"
        ])
        .is_err());
    }

    #[test]
    fn test_global_overrides_after_subcommand() {
        let cli = Cli::try_parse_from([
            "spotlight",
            "status",
            "A",
            "--rpc-url",
            "http://127.0.0.1:8899",
        ])
        .unwrap();
        assert_eq!(cli.rpc_url.as_deref(), Some("http://127.0.0.1:8899"));
    }
}
