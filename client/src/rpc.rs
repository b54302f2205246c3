//! RPC access to the spotlight program
//!
//! Thin wrapper over the nonblocking [`RpcClient`]: every call is a single
//! fire-and-await round trip relying on the client library's own
//! confirmation polling. No retry or backpressure policy lives here.

use solana_client::client_error::{ClientError, ClientErrorKind};
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_client::rpc_config::RpcTransactionConfig;
use solana_client::rpc_request::{RpcError, RpcResponseErrorData};
use solana_sdk::account::Account;
use solana_sdk::commitment_config::CommitmentConfig;
use solana_sdk::instruction::{Instruction, InstructionError};
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::{Keypair, Signature};
use solana_sdk::signer::Signer;
use solana_sdk::transaction::{Transaction, TransactionError};
use solana_transaction_status::UiTransactionEncoding;

use crate::error::{Error, Result, SpotlightProgramError};
use crate::events::{self, SpotlightEvent};
use crate::instruction;
use crate::pda;
use crate::state::{validate_spot_id, EscrowVault, SpotState};

/// Client for one spotlight program deployment.
pub struct SpotlightClient {
    rpc: RpcClient,
    program_id: Pubkey,
}

impl SpotlightClient {
    /// Connect with the default `confirmed` commitment.
    pub fn new(rpc_url: impl Into<String>, program_id: Pubkey) -> Self {
        Self::new_with_commitment(rpc_url, program_id, CommitmentConfig::confirmed())
    }

    pub fn new_with_commitment(
        rpc_url: impl Into<String>,
        program_id: Pubkey,
        commitment: CommitmentConfig,
    ) -> Self {
        Self {
            rpc: RpcClient::new_with_commitment(rpc_url.into(), commitment),
            program_id,
        }
    }

    pub fn program_id(&self) -> &Pubkey {
        &self.program_id
    }

    /// Underlying RPC client, for calls this wrapper does not cover.
    pub fn rpc(&self) -> &RpcClient {
        &self.rpc
    }

    /// Fetch and decode the spot state account for `spot_id`.
    pub async fn get_spot_state(&self, spot_id: &str) -> Result<SpotState> {
        validate_spot_id(spot_id)?;
        let (address, _) = pda::derive_spot_state(spot_id, &self.program_id);
        let account = self.fetch_account(&address).await?;
        SpotState::unpack(&account.data)
    }

    /// Fetch and decode the escrow vault account for `spot_id`.
    pub async fn get_escrow_vault(&self, spot_id: &str) -> Result<EscrowVault> {
        validate_spot_id(spot_id)?;
        let (address, _) = pda::derive_escrow_vault(spot_id, &self.program_id);
        let account = self.fetch_account(&address).await?;
        EscrowVault::unpack(&account.data)
    }

    /// Lamports currently held by the escrow vault PDA (deposits plus the
    /// vault's own rent reserve).
    pub async fn get_escrow_balance(&self, spot_id: &str) -> Result<u64> {
        validate_spot_id(spot_id)?;
        let (address, _) = pda::derive_escrow_vault(spot_id, &self.program_id);
        self.rpc.get_balance(&address).await.map_err(map_client_error)
    }

    /// Initialize a new auction spot. Signs with `fee_payer` and `admin`.
    pub async fn init_spot(
        &self,
        fee_payer: &Keypair,
        admin: &Keypair,
        spot_id: &str,
        auction_duration: u64,
    ) -> Result<Signature> {
        let ix = instruction::init_spot(
            &self.program_id,
            &fee_payer.pubkey(),
            &admin.pubkey(),
            spot_id,
            auction_duration,
        )?;
        self.send_instruction(ix, fee_payer, &[fee_payer, admin]).await
    }

    /// Place a bid on a spot. Signs with `fee_payer` and `bidder`.
    pub async fn place_bid(
        &self,
        fee_payer: &Keypair,
        bidder: &Keypair,
        spot_id: &str,
        amount: u64,
    ) -> Result<Signature> {
        let ix = instruction::place_bid(
            &self.program_id,
            &fee_payer.pubkey(),
            &bidder.pubkey(),
            spot_id,
            amount,
        )?;
        self.send_instruction(ix, fee_payer, &[fee_payer, bidder]).await
    }

    /// Settle an ended auction. Signs with `fee_payer` and `admin`.
    pub async fn settle(
        &self,
        fee_payer: &Keypair,
        admin: &Keypair,
        spot_id: &str,
    ) -> Result<Signature> {
        let ix = instruction::settle(
            &self.program_id,
            &fee_payer.pubkey(),
            &admin.pubkey(),
            spot_id,
        )?;
        self.send_instruction(ix, fee_payer, &[fee_payer, admin]).await
    }

    /// Log messages of a confirmed transaction.
    pub async fn transaction_logs(&self, signature: &Signature) -> Result<Vec<String>> {
        let config = RpcTransactionConfig {
            encoding: Some(UiTransactionEncoding::Json),
            commitment: Some(self.rpc.commitment()),
            max_supported_transaction_version: Some(0),
        };
        let tx = self
            .rpc
            .get_transaction_with_config(signature, config)
            .await
            .map_err(map_client_error)?;
        let logs = tx
            .transaction
            .meta
            .and_then(|meta| Option::<Vec<String>>::from(meta.log_messages))
            .unwrap_or_default();
        Ok(logs)
    }

    /// Spotlight events emitted by a confirmed transaction.
    pub async fn transaction_events(&self, signature: &Signature) -> Result<Vec<SpotlightEvent>> {
        let logs = self.transaction_logs(signature).await?;
        Ok(events::parse_events(&logs))
    }

    async fn fetch_account(&self, address: &Pubkey) -> Result<Account> {
        self.rpc
            .get_account_with_commitment(address, self.rpc.commitment())
            .await
            .map_err(map_client_error)?
            .value
            .ok_or(Error::AccountNotFound { address: *address })
    }

    async fn send_instruction(
        &self,
        instruction: Instruction,
        fee_payer: &Keypair,
        signers: &[&Keypair],
    ) -> Result<Signature> {
        let blockhash = self
            .rpc
            .get_latest_blockhash()
            .await
            .map_err(map_client_error)?;
        let tx = Transaction::new_signed_with_payer(
            &[instruction],
            Some(&fee_payer.pubkey()),
            signers,
            blockhash,
        );
        self.rpc
            .send_and_confirm_transaction(&tx)
            .await
            .map_err(map_client_error)
    }
}

/// Reformat an RPC failure: recognize the program's custom error codes and
/// keep whatever log lines the node returned, for display.
fn map_client_error(err: ClientError) -> Error {
    if let Some(TransactionError::InstructionError(_, InstructionError::Custom(code))) =
        err.get_transaction_error()
    {
        if let Some(program_err) = SpotlightProgramError::from_code(code) {
            return Error::Program {
                err: program_err,
                logs: preflight_logs(&err),
            };
        }
    }
    Error::Rpc(Box::new(err))
}

/// Simulation logs attached to a preflight failure, if present.
fn preflight_logs(err: &ClientError) -> Vec<String> {
    if let ClientErrorKind::RpcError(RpcError::RpcResponseError {
        data: RpcResponseErrorData::SendTransactionPreflightFailure(sim),
        ..
    }) = &err.kind
    {
        sim.logs.clone().unwrap_or_default()
    } else {
        Vec::new()
    }
}
