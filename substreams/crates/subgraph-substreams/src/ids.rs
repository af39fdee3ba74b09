//! Identifier derivation.
//!
//! Ids double as store keys and as join keys between relationship records, so every function
//! here is a pure function of its inputs. The component order of composite ids is part of the
//! schema: reordering changes every downstream id.

use substreams::scalar::BigInt;
use tiny_keccak::{Hasher, Keccak};

pub const NULL_ADDRESS: [u8; 20] = [0u8; 20];

/// `0x`-prefixed lowercase hex of raw bytes.
pub fn to_hex(bytes: &[u8]) -> String {
    format!("0x{}", hex::encode(bytes))
}

/// Parses `0x`-prefixed (or bare) hex back into bytes.
pub fn from_hex(value: &str) -> Result<Vec<u8>, hex::FromHexError> {
    hex::decode(value.trim_start_matches("0x"))
}

/// Id of a record keyed by a single contract or account address.
pub fn address_id(address: &[u8]) -> String {
    to_hex(address)
}

/// Id of a relationship record: the canonical bytes of each component, concatenated in order.
pub fn composite_id(parts: &[&[u8]]) -> String {
    to_hex(&parts.concat())
}

/// Id of a record keyed by an on-chain counter (proposal ids, chain ids).
pub fn numeric_id(value: &BigInt) -> String {
    value.to_string()
}

/// Id of a record keyed by the log that produced it.
pub fn event_id(tx_hash: &[u8], log_index: u32) -> String {
    format!("{}-{}", to_hex(tx_hash), log_index)
}

pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak::v256();
    let mut output = [0u8; 32];
    hasher.update(data);
    hasher.finalize(&mut output);
    output
}

/// First four bytes of the keccak-256 hash of a function signature such as `"foo(uint256)"`.
pub fn function_selector(signature: &str) -> [u8; 4] {
    let mut selector = [0u8; 4];
    selector.copy_from_slice(&keccak256(signature.as_bytes())[..4]);
    selector
}

pub fn is_null_address(address: &[u8]) -> bool {
    address.iter().all(|b| *b == 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    const MARKET: [u8; 20] = [0x11; 20];
    const ACCOUNT: [u8; 20] = [0x22; 20];

    #[test]
    fn test_composite_id_is_deterministic() {
        let first = composite_id(&[&MARKET, &ACCOUNT]);
        let second = composite_id(&[&MARKET, &ACCOUNT]);
        assert_eq!(first, second);
        assert_eq!(first.len(), 2 + 80);
        assert!(first.starts_with("0x1111"));
    }

    #[test]
    fn test_composite_id_depends_on_order() {
        assert_ne!(composite_id(&[&MARKET, &ACCOUNT]), composite_id(&[&ACCOUNT, &MARKET]));
    }

    #[test]
    fn test_address_id_round_trips_through_hex() {
        let id = address_id(&MARKET);
        assert_eq!(from_hex(&id).unwrap(), MARKET.to_vec());
    }

    #[test]
    fn test_numeric_id() {
        let id = BigInt::from_str("123456789012345678901234567890").unwrap();
        assert_eq!(numeric_id(&id), "123456789012345678901234567890");
    }

    #[test]
    fn test_event_id() {
        assert_eq!(event_id(&[0xab, 0xcd], 7), "0xabcd-7");
    }

    #[test]
    fn test_function_selector_matches_known_values() {
        assert_eq!(function_selector("transfer(address,uint256)"), [0xa9, 0x05, 0x9c, 0xbb]);
        assert_eq!(function_selector("balanceOf(address)"), [0x70, 0xa0, 0x82, 0x31]);
    }

    #[test]
    fn test_null_address() {
        assert!(is_null_address(&NULL_ADDRESS));
        assert!(!is_null_address(&MARKET));
    }
}
