//! Client errors

use solana_client::client_error::ClientError;
use solana_sdk::pubkey::Pubkey;
use thiserror::Error;

/// Anchor adds this offset to custom error codes reported by the runtime.
pub const ERROR_CODE_OFFSET: u32 = 6000;

/// Errors defined by the on-chain spotlight program.
///
/// Variant order matches the program's error table; the runtime reports
/// them as custom error codes starting at [`ERROR_CODE_OFFSET`].
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum SpotlightProgramError {
    #[error("Invalid spot identifier")]
    InvalidSpotId,

    #[error("Auction is not currently active")]
    AuctionNotActive,

    #[error("Auction has already been settled")]
    AuctionAlreadySettled,

    #[error("Bid amount is insufficient")]
    InsufficientBid,

    #[error("Only admin can settle auctions")]
    InvalidAdmin,

    #[error("Auction has not ended yet")]
    AuctionNotEnded,

    #[error("Bid amount must be greater than zero")]
    InvalidBidAmount,
}

impl SpotlightProgramError {
    /// Map a runtime custom error code back to the program's error table.
    pub fn from_code(code: u32) -> Option<Self> {
        match code.checked_sub(ERROR_CODE_OFFSET)? {
            0 => Some(Self::InvalidSpotId),
            1 => Some(Self::AuctionNotActive),
            2 => Some(Self::AuctionAlreadySettled),
            3 => Some(Self::InsufficientBid),
            4 => Some(Self::InvalidAdmin),
            5 => Some(Self::AuctionNotEnded),
            6 => Some(Self::InvalidBidAmount),
            _ => None,
        }
    }

    /// Custom error code as reported by the runtime.
    pub fn code(self) -> u32 {
        ERROR_CODE_OFFSET + self as u32
    }
}

/// Client errors
#[derive(Error, Debug)]
pub enum Error {
    #[error("spot id must not be empty")]
    EmptySpotId,

    #[error("spot id `{0}` exceeds the 32 byte seed limit")]
    SpotIdTooLong(String),

    #[error("account {address} does not exist on this cluster")]
    AccountNotFound { address: Pubkey },

    #[error("account data does not look like a {account} account")]
    UnexpectedDiscriminator { account: &'static str },

    #[error("failed to decode {account} account: {source}")]
    AccountData {
        account: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode instruction: {0}")]
    Encode(#[source] std::io::Error),

    #[error("program rejected the transaction: {err}")]
    Program {
        err: SpotlightProgramError,
        /// Log lines captured from the failed submission, for display.
        logs: Vec<String>,
    },

    #[error("rpc request failed: {0}")]
    Rpc(#[from] Box<ClientError>),
}

impl Error {
    /// Program log lines attached to a failed submission, if any.
    pub fn program_logs(&self) -> Option<&[String]> {
        match self {
            Self::Program { logs, .. } if !logs.is_empty() => Some(logs),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
