//! Environment configuration
//!
//! The app is configured through `SPOTLIGHT_*` environment variables
//! (a `.env` file is honored), with CLI flags taking precedence. Invalid
//! optional values fall back to defaults with a logged warning instead of
//! aborting; only values that cannot be guessed (a malformed program id,
//! a missing wallet) are hard errors.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use solana_sdk::pubkey::Pubkey;
use tracing::warn;

use crate::cli::Cli;

pub const ENV_PROGRAM_ID: &str = "SPOTLIGHT_PROGRAM_ID";
pub const ENV_NETWORK: &str = "SPOTLIGHT_NETWORK";
pub const ENV_RPC_URL: &str = "SPOTLIGHT_RPC_URL";
pub const ENV_KEYPAIR: &str = "SPOTLIGHT_KEYPAIR";
pub const ENV_FEE_PAYER: &str = "SPOTLIGHT_FEE_PAYER";

/// Cluster selection, resolved to a public RPC endpoint unless an explicit
/// URL overrides it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Network {
    MainnetBeta,
    Testnet,
    Devnet,
    #[default]
    Localnet,
}

impl Network {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "mainnet-beta" => Some(Self::MainnetBeta),
            "testnet" => Some(Self::Testnet),
            "devnet" => Some(Self::Devnet),
            "localnet" => Some(Self::Localnet),
            _ => None,
        }
    }

    pub fn rpc_url(self) -> &'static str {
        match self {
            Self::MainnetBeta => "https://api.mainnet-beta.solana.com",
            Self::Testnet => "https://api.testnet.solana.com",
            Self::Devnet => "https://api.devnet.solana.com",
            Self::Localnet => "http://127.0.0.1:8899",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::MainnetBeta => "mainnet-beta",
            Self::Testnet => "testnet",
            Self::Devnet => "devnet",
            Self::Localnet => "localnet",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub program_id: Pubkey,
    pub network: Network,
    pub rpc_url: String,
    /// Wallet used as the role signer (admin or bidder)
    pub keypair_path: PathBuf,
    /// Separate fee payer wallet, when set
    pub fee_payer_path: Option<PathBuf>,
}

impl Config {
    /// Resolve configuration from the process environment plus CLI flags.
    pub fn load(cli: &Cli) -> Result<Self> {
        let env: HashMap<String, String> = std::env::vars().collect();
        Self::resolve(
            &env,
            cli.program_id.as_deref(),
            cli.rpc_url.as_deref(),
            cli.keypair.clone(),
        )
    }

    fn resolve(
        env: &HashMap<String, String>,
        program_id_override: Option<&str>,
        rpc_url_override: Option<&str>,
        keypair_override: Option<PathBuf>,
    ) -> Result<Self> {
        let program_id = match program_id_override
            .map(str::to_owned)
            .or_else(|| env.get(ENV_PROGRAM_ID).cloned())
        {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("invalid program id `{raw}`"))?,
            None => spotlight_client::PROGRAM_ID,
        };

        let network = match env.get(ENV_NETWORK) {
            Some(raw) => Network::parse(raw).unwrap_or_else(|| {
                warn!("unknown {ENV_NETWORK} value `{raw}`, falling back to localnet");
                Network::Localnet
            }),
            None => Network::default(),
        };

        let rpc_url = rpc_url_override
            .map(str::to_owned)
            .or_else(|| env.get(ENV_RPC_URL).cloned())
            .unwrap_or_else(|| network.rpc_url().to_owned());

        let keypair_path = keypair_override
            .or_else(|| env.get(ENV_KEYPAIR).map(PathBuf::from))
            .or_else(|| default_keypair_path(env))
            .with_context(|| format!("no signing wallet: set {ENV_KEYPAIR} or pass --keypair"))?;

        let fee_payer_path = env.get(ENV_FEE_PAYER).map(PathBuf::from);

        Ok(Self {
            program_id,
            network,
            rpc_url,
            keypair_path,
            fee_payer_path,
        })
    }
}

fn default_keypair_path(env: &HashMap<String, String>) -> Option<PathBuf> {
    env.get("HOME")
        .map(|home| Path::new(home).join(".config/solana/id.json"))
}
