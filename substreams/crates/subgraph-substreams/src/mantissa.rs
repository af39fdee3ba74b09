//! Fixed-point helpers.
//!
//! Entities keep fixed-point values as base-10 integer strings ("mantissa"): the raw on-chain
//! integer, scaled by the precision the emitting contract declares. All arithmetic is exact
//! integer arithmetic and nothing is clamped at zero.

use std::str::FromStr;

use substreams::scalar::BigInt;

use crate::errors::HandlerError;

/// Precision of exchange rates, collateral factors and the like.
pub const MANTISSA_DECIMALS: u32 = 18;

pub fn zero() -> String {
    "0".to_string()
}

/// `10^decimals`.
pub fn exponent_to_big_int(decimals: u32) -> BigInt {
    BigInt::from(10u64).pow(decimals)
}

pub fn mantissa_factor() -> BigInt {
    exponent_to_big_int(MANTISSA_DECIMALS)
}

/// Parses a stored mantissa. The empty string is the prost default and reads as zero.
pub fn parse(field: &'static str, value: &str) -> Result<BigInt, HandlerError> {
    if value.is_empty() {
        return Ok(BigInt::zero());
    }
    BigInt::from_str(value)
        .map_err(|_| HandlerError::InvalidMantissa { field, value: value.to_string() })
}

/// `current + delta`, returned in storage form.
pub fn add(field: &'static str, current: &str, delta: &BigInt) -> Result<String, HandlerError> {
    Ok((parse(field, current)? + delta.clone()).to_string())
}

/// `current - delta`, returned in storage form. Negative results are kept as they are.
pub fn sub(field: &'static str, current: &str, delta: &BigInt) -> Result<String, HandlerError> {
    Ok((parse(field, current)? - delta.clone()).to_string())
}

/// Converts an amount of interest-bearing shares into the underlying asset using an
/// exchange rate scaled by 1e18. The division truncates, which keeps the result at the
/// underlying asset's own precision.
pub fn shares_to_underlying(shares: &BigInt, exchange_rate: &BigInt) -> BigInt {
    shares.clone() * exchange_rate.clone() / mantissa_factor()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(value: &str) -> BigInt {
        BigInt::from_str(value).unwrap()
    }

    #[test]
    fn test_parse_empty_is_zero() {
        assert!(parse("balance", "").unwrap().is_zero());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let err = parse("balance", "1.5").unwrap_err();
        assert!(matches!(err, HandlerError::InvalidMantissa { field: "balance", .. }));
    }

    #[test]
    fn test_add_is_exact() {
        let thousand = big("1000000000000000000000");
        assert_eq!(add("balance", "0", &thousand).unwrap(), "1000000000000000000000");
    }

    #[test]
    fn test_sub_is_not_clamped() {
        assert_eq!(sub("balance", "5", &BigInt::from(7u64)).unwrap(), "-2");
    }

    #[test]
    fn test_shares_to_underlying_truncates() {
        // 0.02 exchange rate, 8 decimal vToken into an 18 decimal underlying
        let rate = big("200000000000000000000000000");
        let shares = big("5000000000");
        assert_eq!(shares_to_underlying(&shares, &rate).to_string(), "1000000000000000000");

        // 1 share at a rate of 1.5e-18 truncates to 1
        assert_eq!(shares_to_underlying(&BigInt::from(1u64), &big("1500000000000000000")).to_string(), "1");
    }

    #[test]
    fn test_exponent() {
        assert_eq!(exponent_to_big_int(0).to_string(), "1");
        assert_eq!(mantissa_factor().to_string(), "1000000000000000000");
    }
}
