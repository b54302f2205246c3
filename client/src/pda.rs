//! Deterministic account address derivation
//!
//! Every spot owns two program-derived addresses, keyed by a fixed seed
//! prefix plus the spot id string.

use solana_sdk::pubkey::Pubkey;

use crate::state::{EscrowVault, SpotState};

/// Derive the spot state address and bump for `spot_id`.
///
/// Panics if `spot_id` exceeds the 32 byte seed limit; callers go through
/// [`crate::state::validate_spot_id`] first.
pub fn derive_spot_state(spot_id: &str, program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[SpotState::SEED, spot_id.as_bytes()], program_id)
}

/// Derive the escrow vault address and bump for `spot_id`.
///
/// Panics if `spot_id` exceeds the 32 byte seed limit; callers go through
/// [`crate::state::validate_spot_id`] first.
pub fn derive_escrow_vault(spot_id: &str, program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[EscrowVault::SEED, spot_id.as_bytes()], program_id)
}
