//! Program event decoding
//!
//! The program reports bid and settlement activity through its transaction
//! logs: each event is a `Program data: <base64>` line whose payload is an
//! 8-byte event discriminator (`sha256("event:<Name>")[..8]`) followed by
//! the borsh-serialized body.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use borsh::{BorshDeserialize, BorshSerialize};
use solana_sdk::pubkey::Pubkey;

const EVENT_LOG_PREFIX: &str = "Program data: ";

/// `sha256("event:BidPlaced")[..8]`
pub const BID_PLACED_DISCRIMINATOR: [u8; 8] = [0x87, 0x35, 0xb0, 0x53, 0xc1, 0x45, 0x6c, 0x3d];
/// `sha256("event:BidRefunded")[..8]`
pub const BID_REFUNDED_DISCRIMINATOR: [u8; 8] = [0xc5, 0x64, 0x1f, 0xba, 0x43, 0x1c, 0x2e, 0x67];
/// `sha256("event:SpotSettled")[..8]`
pub const SPOT_SETTLED_DISCRIMINATOR: [u8; 8] = [0x15, 0x53, 0x38, 0x96, 0xfc, 0x0f, 0x45, 0xd2];

/// A new highest bid was escrowed.
#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, PartialEq)]
pub struct BidPlaced {
    pub spot_id: String,
    pub bidder: Pubkey,
    pub amount: u64,
}

/// An outbid bidder got their deposit back.
#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, PartialEq)]
pub struct BidRefunded {
    pub spot_id: String,
    pub bidder: Pubkey,
    pub amount: u64,
}

/// The auction was settled and funds were distributed.
#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, PartialEq)]
pub struct SpotSettled {
    pub spot_id: String,
    /// Winning bidder, or `None` when the spot received no bids
    pub winner: Option<Pubkey>,
    pub total_amount: u64,
}

/// Any event the spotlight program emits.
#[derive(Debug, Clone, PartialEq)]
pub enum SpotlightEvent {
    BidPlaced(BidPlaced),
    BidRefunded(BidRefunded),
    SpotSettled(SpotSettled),
}

/// Decode every spotlight event in a transaction's log messages.
///
/// Non-event lines, events from other programs, and undecodable payloads
/// are skipped.
pub fn parse_events(logs: &[String]) -> Vec<SpotlightEvent> {
    logs.iter().filter_map(|line| parse_event(line)).collect()
}

/// Decode a single log line, if it carries a spotlight event.
pub fn parse_event(line: &str) -> Option<SpotlightEvent> {
    let payload = line.strip_prefix(EVENT_LOG_PREFIX)?;
    let bytes = BASE64.decode(payload).ok()?;
    if bytes.len() < 8 {
        return None;
    }
    let (discriminator, body) = bytes.split_at(8);
    match <[u8; 8]>::try_from(discriminator).ok()? {
        BID_PLACED_DISCRIMINATOR => BidPlaced::try_from_slice(body)
            .ok()
            .map(SpotlightEvent::BidPlaced),
        BID_REFUNDED_DISCRIMINATOR => BidRefunded::try_from_slice(body)
            .ok()
            .map(SpotlightEvent::BidRefunded),
        SPOT_SETTLED_DISCRIMINATOR => SpotSettled::try_from_slice(body)
            .ok()
            .map(SpotlightEvent::SpotSettled),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event_log<T: BorshSerialize>(discriminator: &[u8; 8], event: &T) -> String {
        let mut payload = discriminator.to_vec();
        event.serialize(&mut payload).unwrap();
        format!("{EVENT_LOG_PREFIX}{}", BASE64.encode(payload))
    }

    #[test]
    fn test_event_discriminators() {
        use sha2::{Digest, Sha256};
        assert_eq!(
            Sha256::digest(b"event:BidPlaced")[..8],
            BID_PLACED_DISCRIMINATOR
        );
        assert_eq!(
            Sha256::digest(b"event:BidRefunded")[..8],
            BID_REFUNDED_DISCRIMINATOR
        );
        assert_eq!(
            Sha256::digest(b"event:SpotSettled")[..8],
            SPOT_SETTLED_DISCRIMINATOR
        );
    }

    #[test]
    fn test_parse_bid_placed() {
        let event = BidPlaced {
            spot_id: "A".to_owned(),
            bidder: Pubkey::new_unique(),
            amount: 1_000_000_000,
        };
        let line = event_log(&BID_PLACED_DISCRIMINATOR, &event);
        assert_eq!(parse_event(&line), Some(SpotlightEvent::BidPlaced(event)));
    }

    #[test]
    fn test_parse_settled_without_winner() {
        let event = SpotSettled {
            spot_id: "B".to_owned(),
            winner: None,
            total_amount: 0,
        };
        let line = event_log(&SPOT_SETTLED_DISCRIMINATOR, &event);
        assert_eq!(parse_event(&line), Some(SpotlightEvent::SpotSettled(event)));
    }

    #[test]
    fn test_unrelated_logs_are_skipped() {
        let refund = BidRefunded {
            spot_id: "A".to_owned(),
            bidder: Pubkey::new_unique(),
            amount: 500,
        };
        let logs = vec![
            "Program 7DYhVLgmNUY4Lk27pZtZSghoixPG2ueCzBVarHHSF6ud invoke [1]".to_owned(),
            "Program log: Instruction: PlaceBid".to_owned(),
            event_log(&BID_REFUNDED_DISCRIMINATOR, &refund),
            // Foreign event payload under an unknown discriminator
            format!("{EVENT_LOG_PREFIX}{}", BASE64.encode([0u8; 16])),
            // Not valid base64 at all
            format!("{EVENT_LOG_PREFIX}not-base64!!"),
            "Program data: ".to_owned(),
        ];
        assert_eq!(parse_events(&logs), vec![SpotlightEvent::BidRefunded(refund)]);
    }

    #[test]
    fn test_truncated_event_body_is_skipped() {
        let line = format!(
            "{EVENT_LOG_PREFIX}{}",
            BASE64.encode(&BID_PLACED_DISCRIMINATOR)
        );
        assert_eq!(parse_event(&line), None);
    }
}
