//! Defaults for supplementary reads that revert.
//!
//! A handler that needs data the event does not carry reads it back from the emitting
//! contract. When the call reverts the handler keeps going with a sentinel value instead of
//! aborting.

use substreams::scalar::BigInt;

use crate::ids::NULL_ADDRESS;

/// Stored in place of an integer the contract could not provide.
pub fn not_available_int() -> BigInt {
    BigInt::from(-1i64)
}

pub fn int_or_not_available(value: Option<BigInt>) -> BigInt {
    value.unwrap_or_else(not_available_int)
}

pub fn address_or_not_available(value: Option<Vec<u8>>) -> Vec<u8> {
    value.unwrap_or_else(|| NULL_ADDRESS.to_vec())
}

pub fn bool_or_false(value: Option<bool>) -> bool {
    value.unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinels() {
        assert_eq!(int_or_not_available(None).to_string(), "-1");
        assert_eq!(int_or_not_available(Some(BigInt::from(5u64))).to_string(), "5");
        assert_eq!(address_or_not_available(None), vec![0u8; 20]);
        assert_eq!(address_or_not_available(Some(vec![1u8; 20])), vec![1u8; 20]);
        assert!(!bool_or_false(None));
        assert!(bool_or_false(Some(true)));
    }
}
