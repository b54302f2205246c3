//! Account layouts owned by the on-chain program
//!
//! The program allocates its accounts at fixed sizes with an 8-byte Anchor
//! discriminator in front of the borsh body. This module mirrors those
//! layouts for read access; no invariants on the contents are enforced
//! here, the program owns them.

use borsh::{BorshDeserialize, BorshSerialize};
use solana_sdk::pubkey::Pubkey;

use crate::error::{Error, Result};

/// Spot ids are used verbatim as a PDA seed element, which caps them at
/// 32 bytes.
pub const MAX_SPOT_ID_LEN: usize = 32;

/// Settlement split in percent of the escrowed total.
pub const DAO_SHARE_PCT: u64 = 15;
pub const CONTRIBUTOR_SHARE_PCT: u64 = 50;
pub const CORE_TEAM_SHARE_PCT: u64 = 35;

/// Fixed settlement recipients baked into the program.
pub const DAO_WALLET: Pubkey = solana_sdk::pubkey!("5FzC7gETJdwwKL71w1VkCKEmFSTzhvtTAUPQsxYEHDTp");
pub const CONTRIBUTOR_WALLET: Pubkey =
    solana_sdk::pubkey!("J9LT87vTYGpPCrr795PSYSwqXUfu6RmULj4hq5UzswHD");
pub const CORE_TEAM_WALLET: Pubkey =
    solana_sdk::pubkey!("2zB6ySzH2PFKX3f9XZLUKJfP44fwyn69Bp6YaD6LEsqP");

/// Reject spot ids the program (or PDA derivation) would refuse.
pub fn validate_spot_id(spot_id: &str) -> Result<()> {
    if spot_id.is_empty() {
        return Err(Error::EmptySpotId);
    }
    if spot_id.len() > MAX_SPOT_ID_LEN {
        return Err(Error::SpotIdTooLong(spot_id.to_owned()));
    }
    Ok(())
}

/// One auction spot
///
/// The metadata strings at the tail are prototype fields the program
/// zero-initializes on creation; they stay empty unless written on-chain.
#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, PartialEq)]
pub struct SpotState {
    pub spot_id: String,
    /// Admin who opened the spot; the only signer allowed to settle it
    pub admin: Pubkey,
    pub auction_start_time: i64,
    pub auction_end_time: i64,
    /// Current highest bid in lamports
    pub current_bid: u64,
    pub current_bidder: Option<Pubkey>,
    pub total_bids: u64,
    /// Lamports returned to outbid bidders over the spot's lifetime
    pub total_refunded: u64,
    pub is_settled: bool,
    /// PDA bump seed
    pub bump: u8,
    pub logo: String,
    pub url: String,
    pub description: String,
    pub name: String,
}

impl SpotState {
    /// `sha256("account:SpotState")[..8]`
    pub const DISCRIMINATOR: [u8; 8] = [0xea, 0xf6, 0xce, 0x3a, 0x59, 0x8e, 0x5f, 0xfb];

    /// Seed prefix for PDA derivation
    pub const SEED: &'static [u8] = b"spot_state";

    /// Max serialized size excluding the discriminator
    pub const LEN: usize = (4 + 32) + 32 + 8 + 8 + 8 + (1 + 32) + 8 + 8 + 1 + 1 + 4 * (4 + 32); // 287 bytes

    /// Allocated account space
    pub const SPACE: usize = 8 + Self::LEN;

    /// Decode a spot state account fetched from the cluster.
    pub fn unpack(data: &[u8]) -> Result<Self> {
        let mut body = strip_discriminator(data, &Self::DISCRIMINATOR, "SpotState")?;
        // Accounts are allocated at full SPACE; anything after the last
        // field is zero padding, so borsh must not be asked to consume
        // the whole slice.
        Self::deserialize(&mut body).map_err(|source| Error::AccountData {
            account: "SpotState",
            source,
        })
    }

    /// Whether the auction window has passed at `unix_now`.
    pub fn has_ended(&self, unix_now: i64) -> bool {
        unix_now > self.auction_end_time
    }
}

/// Escrow vault holding the active bids for one spot
#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, PartialEq)]
pub struct EscrowVault {
    pub spot_id: String,
    pub total_deposited: u64,
    pub total_withdrawn: u64,
    /// PDA bump seed
    pub bump: u8,
}

impl EscrowVault {
    /// `sha256("account:EscrowVault")[..8]`
    pub const DISCRIMINATOR: [u8; 8] = [0x36, 0x54, 0x29, 0x95, 0xa0, 0xb5, 0x55, 0x72];

    /// Seed prefix for PDA derivation
    pub const SEED: &'static [u8] = b"escrow_vault";

    /// Max serialized size excluding the discriminator
    pub const LEN: usize = (4 + 32) + 8 + 8 + 1; // 53 bytes

    /// Allocated account space
    pub const SPACE: usize = 8 + Self::LEN;

    /// Decode an escrow vault account fetched from the cluster.
    pub fn unpack(data: &[u8]) -> Result<Self> {
        let mut body = strip_discriminator(data, &Self::DISCRIMINATOR, "EscrowVault")?;
        Self::deserialize(&mut body).map_err(|source| Error::AccountData {
            account: "EscrowVault",
            source,
        })
    }
}

fn strip_discriminator<'a>(
    data: &'a [u8],
    expected: &[u8; 8],
    account: &'static str,
) -> Result<&'a [u8]> {
    if data.len() < 8 || &data[..8] != expected {
        return Err(Error::UnexpectedDiscriminator { account });
    }
    Ok(&data[8..])
}

/// Settlement distribution of the escrowed total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PayoutSplit {
    pub dao: u64,
    pub contributor: u64,
    pub core_team: u64,
}

/// Calculate the settlement split the program will pay out.
pub fn calculate_payout(total: u64) -> PayoutSplit {
    let share = |pct: u64| (total as u128 * pct as u128 / 100u128) as u64;
    PayoutSplit {
        dao: share(DAO_SHARE_PCT),
        contributor: share(CONTRIBUTOR_SHARE_PCT),
        core_team: share(CORE_TEAM_SHARE_PCT),
    }
}
