//! Offline checks of the transactions this client submits: account lists,
//! signer sets, and wire bytes, assembled exactly as the RPC path does it.
//! The program's own behavior is exercised against a live cluster, not
//! here.

use spotlight_client::instruction::{
    self, INIT_SPOT_DISCRIMINATOR, PLACE_BID_DISCRIMINATOR, SETTLE_DISCRIMINATOR,
};
use spotlight_client::state::{CONTRIBUTOR_WALLET, CORE_TEAM_WALLET, DAO_WALLET};
use spotlight_client::{pda, PROGRAM_ID};

use solana_sdk::hash::Hash;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Keypair;
use solana_sdk::signer::Signer;
use solana_sdk::system_program;
use solana_sdk::transaction::Transaction;

fn signed(
    ix: solana_sdk::instruction::Instruction,
    fee_payer: &Keypair,
    signers: &[&Keypair],
) -> Transaction {
    Transaction::new_signed_with_payer(&[ix], Some(&fee_payer.pubkey()), signers, Hash::default())
}

#[test]
fn init_spot_transaction_signs_fee_payer_and_admin() {
    let fee_payer = Keypair::new();
    let admin = Keypair::new();
    let ix = instruction::init_spot(
        &PROGRAM_ID,
        &fee_payer.pubkey(),
        &admin.pubkey(),
        "TEST_SPOT_A",
        3600,
    )
    .unwrap();

    let tx = signed(ix, &fee_payer, &[&fee_payer, &admin]);

    assert_eq!(tx.signatures.len(), 2);
    assert_eq!(tx.message.header.num_required_signatures, 2);
    // Fee payer leads the account list
    assert_eq!(tx.message.account_keys[0], fee_payer.pubkey());
    assert!(tx.message.account_keys.contains(&admin.pubkey()));
    assert!(tx.message.account_keys.contains(&system_program::id()));
    assert!(tx.verify_with_results().iter().all(|ok| *ok));
}

#[test]
fn place_bid_wire_bytes() {
    let fee_payer = Keypair::new();
    let bidder = Keypair::new();
    let ix = instruction::place_bid(
        &PROGRAM_ID,
        &fee_payer.pubkey(),
        &bidder.pubkey(),
        "A",
        1_500_000_000,
    )
    .unwrap();

    let mut expected = PLACE_BID_DISCRIMINATOR.to_vec();
    expected.extend_from_slice(&1u32.to_le_bytes());
    expected.push(b'A');
    expected.extend_from_slice(&1_500_000_000u64.to_le_bytes());
    assert_eq!(ix.data, expected);

    let tx = signed(ix, &fee_payer, &[&fee_payer, &bidder]);
    assert_eq!(tx.message.header.num_required_signatures, 2);
    // Both signers are writable: fee payer pays fees, bidder funds the bid
    assert_eq!(tx.message.header.num_readonly_signed_accounts, 0);
}

#[test]
fn settle_transaction_carries_fixed_payout_wallets() {
    let fee_payer = Keypair::new();
    let admin = Keypair::new();
    let ix = instruction::settle(&PROGRAM_ID, &fee_payer.pubkey(), &admin.pubkey(), "A").unwrap();

    assert_eq!(&ix.data[..8], &SETTLE_DISCRIMINATOR);

    let tx = signed(ix, &fee_payer, &[&fee_payer, &admin]);
    // Message layout: writable signers, readonly signers, writable
    // non-signers, readonly non-signers. The payout wallets must land in
    // the writable non-signer range.
    let signers = tx.message.header.num_required_signatures as usize;
    let readonly_tail = tx.message.header.num_readonly_unsigned_accounts as usize;
    let writable_nonsigner = signers..tx.message.account_keys.len() - readonly_tail;
    for wallet in [DAO_WALLET, CONTRIBUTOR_WALLET, CORE_TEAM_WALLET] {
        let index = tx
            .message
            .account_keys
            .iter()
            .position(|k| *k == wallet)
            .expect("payout wallet in account list");
        assert!(writable_nonsigner.contains(&index));
    }
}

#[test]
fn same_spot_id_addresses_the_same_accounts_across_instructions() {
    let fee_payer = Keypair::new();
    let actor = Keypair::new();
    let (spot_state, _) = pda::derive_spot_state("TEST_SPOT_A", &PROGRAM_ID);
    let (escrow_vault, _) = pda::derive_escrow_vault("TEST_SPOT_A", &PROGRAM_ID);

    let init = instruction::init_spot(
        &PROGRAM_ID,
        &fee_payer.pubkey(),
        &actor.pubkey(),
        "TEST_SPOT_A",
        3600,
    )
    .unwrap();
    let bid = instruction::place_bid(
        &PROGRAM_ID,
        &fee_payer.pubkey(),
        &actor.pubkey(),
        "TEST_SPOT_A",
        1,
    )
    .unwrap();
    let settle =
        instruction::settle(&PROGRAM_ID, &fee_payer.pubkey(), &actor.pubkey(), "TEST_SPOT_A")
            .unwrap();

    for ix in [&init, &bid, &settle] {
        assert_eq!(ix.accounts[1].pubkey, spot_state);
        assert_eq!(ix.accounts[2].pubkey, escrow_vault);
    }
    assert_eq!(&init.data[..8], &INIT_SPOT_DISCRIMINATOR);
}

#[test]
fn admin_doubling_as_fee_payer_needs_one_signature() {
    let admin = Keypair::new();
    let ix = instruction::init_spot(
        &PROGRAM_ID,
        &admin.pubkey(),
        &admin.pubkey(),
        "A",
        60,
    )
    .unwrap();

    let tx = Transaction::new_signed_with_payer(
        &[ix],
        Some(&admin.pubkey()),
        &[&admin],
        Hash::default(),
    );
    assert_eq!(tx.message.header.num_required_signatures, 1);
}

#[test]
fn instructions_target_the_program() {
    let payer = Pubkey::new_unique();
    let actor = Pubkey::new_unique();
    let ix = instruction::place_bid(&PROGRAM_ID, &payer, &actor, "A", 1).unwrap();
    assert_eq!(ix.program_id, PROGRAM_ID);
}
