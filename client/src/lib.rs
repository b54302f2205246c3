//! Rust client for the Sendo Spotlight auction program.
//!
//! Spotlight sells ad spots through on-chain auctions: an admin opens a
//! spot, bidders escrow SOL against it, and after the deadline the admin
//! settles and the program distributes the escrowed funds. All of that
//! logic lives in the deployed program; this crate only derives the
//! program's deterministic account addresses, builds and submits its three
//! instructions, and decodes its accounts, errors, and events.
//!
//! ```rust,ignore
//! use spotlight_client::{SpotlightClient, PROGRAM_ID};
//!
//! let client = SpotlightClient::new("http://127.0.0.1:8899", PROGRAM_ID);
//! let spot = client.get_spot_state("A").await?;
//! println!("current bid: {} lamports", spot.current_bid);
//! ```

pub mod error;
pub mod events;
pub mod instruction;
pub mod pda;
pub mod rpc;
pub mod state;

use solana_sdk::pubkey::Pubkey;

pub use error::{Error, Result, SpotlightProgramError};
pub use rpc::SpotlightClient;

/// Address of the deployed spotlight program.
pub const PROGRAM_ID: Pubkey = solana_sdk::pubkey!("7DYhVLgmNUY4Lk27pZtZSghoixPG2ueCzBVarHHSF6ud");
