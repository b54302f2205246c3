//! Program instructions
//!
//! The external program is Anchor-based: instruction data starts with an
//! 8-byte method discriminator (`sha256("global:<name>")[..8]`) followed by
//! the borsh-serialized arguments in declaration order.

use borsh::BorshSerialize;
use solana_sdk::{
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
    system_program,
};

use crate::error::{Error, Result};
use crate::pda;
use crate::state::{validate_spot_id, CONTRIBUTOR_WALLET, CORE_TEAM_WALLET, DAO_WALLET};

/// `sha256("global:init_spot")[..8]`
pub const INIT_SPOT_DISCRIMINATOR: [u8; 8] = [0xf2, 0x7d, 0xf4, 0x54, 0xc6, 0xde, 0xb5, 0x92];
/// `sha256("global:place_bid")[..8]`
pub const PLACE_BID_DISCRIMINATOR: [u8; 8] = [0xee, 0x4d, 0x94, 0x5b, 0xc8, 0x97, 0x5c, 0x92];
/// `sha256("global:settle")[..8]`
pub const SETTLE_DISCRIMINATOR: [u8; 8] = [0xaf, 0x2a, 0xb9, 0x57, 0x90, 0x83, 0x66, 0xd4];

/// Spotlight program instructions
#[derive(Debug, Clone, PartialEq)]
pub enum SpotlightInstruction {
    /// Initialize a new auction spot
    /// Accounts:
    /// 0. `[writable, signer]` Fee payer
    /// 1. `[writable]` Spot state PDA
    /// 2. `[writable]` Escrow vault PDA
    /// 3. `[signer]` Admin opening the spot
    /// 4. `[]` System program
    InitSpot {
        spot_id: String,
        /// Auction duration in seconds
        auction_duration: u64,
    },

    /// Place a bid on an auction spot
    /// Accounts:
    /// 0. `[writable, signer]` Fee payer
    /// 1. `[writable]` Spot state PDA
    /// 2. `[writable]` Escrow vault PDA
    /// 3. `[writable, signer]` Bidder (lamports move into escrow)
    /// 4. `[]` System program
    PlaceBid {
        spot_id: String,
        /// Bid in lamports
        amount: u64,
    },

    /// Settle an ended auction and distribute the escrowed funds
    /// Accounts:
    /// 0. `[writable, signer]` Fee payer
    /// 1. `[writable]` Spot state PDA
    /// 2. `[writable]` Escrow vault PDA
    /// 3. `[signer]` Admin who opened the spot
    /// 4. `[writable]` DAO wallet (15%)
    /// 5. `[writable]` Contributor wallet (50%)
    /// 6. `[writable]` Core team wallet (35%)
    /// 7. `[]` System program
    Settle { spot_id: String },
}

impl SpotlightInstruction {
    /// Method discriminator for this instruction.
    pub fn discriminator(&self) -> [u8; 8] {
        match self {
            Self::InitSpot { .. } => INIT_SPOT_DISCRIMINATOR,
            Self::PlaceBid { .. } => PLACE_BID_DISCRIMINATOR,
            Self::Settle { .. } => SETTLE_DISCRIMINATOR,
        }
    }

    /// Serialize to the wire format the program consumes.
    pub fn pack(&self) -> Result<Vec<u8>> {
        let mut data = self.discriminator().to_vec();
        match self {
            Self::InitSpot {
                spot_id,
                auction_duration,
            } => {
                spot_id.serialize(&mut data).map_err(Error::Encode)?;
                auction_duration.serialize(&mut data).map_err(Error::Encode)?;
            }
            Self::PlaceBid { spot_id, amount } => {
                spot_id.serialize(&mut data).map_err(Error::Encode)?;
                amount.serialize(&mut data).map_err(Error::Encode)?;
            }
            Self::Settle { spot_id } => {
                spot_id.serialize(&mut data).map_err(Error::Encode)?;
            }
        }
        Ok(data)
    }
}

/// Build an `init_spot` instruction. PDAs are derived from `spot_id`.
pub fn init_spot(
    program_id: &Pubkey,
    fee_payer: &Pubkey,
    admin: &Pubkey,
    spot_id: &str,
    auction_duration: u64,
) -> Result<Instruction> {
    validate_spot_id(spot_id)?;
    let (spot_state, _) = pda::derive_spot_state(spot_id, program_id);
    let (escrow_vault, _) = pda::derive_escrow_vault(spot_id, program_id);
    let data = SpotlightInstruction::InitSpot {
        spot_id: spot_id.to_owned(),
        auction_duration,
    }
    .pack()?;

    Ok(Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new(*fee_payer, true),
            AccountMeta::new(spot_state, false),
            AccountMeta::new(escrow_vault, false),
            AccountMeta::new_readonly(*admin, true),
            AccountMeta::new_readonly(system_program::id(), false),
        ],
        data,
    })
}

/// Build a `place_bid` instruction. PDAs are derived from `spot_id`.
pub fn place_bid(
    program_id: &Pubkey,
    fee_payer: &Pubkey,
    bidder: &Pubkey,
    spot_id: &str,
    amount: u64,
) -> Result<Instruction> {
    validate_spot_id(spot_id)?;
    let (spot_state, _) = pda::derive_spot_state(spot_id, program_id);
    let (escrow_vault, _) = pda::derive_escrow_vault(spot_id, program_id);
    let data = SpotlightInstruction::PlaceBid {
        spot_id: spot_id.to_owned(),
        amount,
    }
    .pack()?;

    Ok(Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new(*fee_payer, true),
            AccountMeta::new(spot_state, false),
            AccountMeta::new(escrow_vault, false),
            AccountMeta::new(*bidder, true),
            AccountMeta::new_readonly(system_program::id(), false),
        ],
        data,
    })
}

/// Build a `settle` instruction. PDAs are derived from `spot_id`; the three
/// payout wallets are the fixed recipients the program verifies.
pub fn settle(
    program_id: &Pubkey,
    fee_payer: &Pubkey,
    admin: &Pubkey,
    spot_id: &str,
) -> Result<Instruction> {
    validate_spot_id(spot_id)?;
    let (spot_state, _) = pda::derive_spot_state(spot_id, program_id);
    let (escrow_vault, _) = pda::derive_escrow_vault(spot_id, program_id);
    let data = SpotlightInstruction::Settle {
        spot_id: spot_id.to_owned(),
    }
    .pack()?;

    Ok(Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new(*fee_payer, true),
            AccountMeta::new(spot_state, false),
            AccountMeta::new(escrow_vault, false),
            AccountMeta::new_readonly(*admin, true),
            AccountMeta::new(DAO_WALLET, false),
            AccountMeta::new(CONTRIBUTOR_WALLET, false),
            AccountMeta::new(CORE_TEAM_WALLET, false),
            AccountMeta::new_readonly(system_program::id(), false),
        ],
        data,
    })
}
