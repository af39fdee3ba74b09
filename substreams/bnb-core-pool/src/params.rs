use anyhow::{anyhow, Result};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct StringParams {
    comptroller: String,
}

impl StringParams {
    pub fn parse(input: &str) -> Result<Self> {
        serde_qs::from_str(input).map_err(|e| anyhow!("Failed to parse query params: {}", e))
    }
}

/// Static contract addresses of a core pool deployment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Params {
    pub comptroller: Vec<u8>,
}

impl Params {
    pub fn parse(input: &str) -> Result<Self> {
        let params = StringParams::parse(input)?;

        Ok(Self { comptroller: decode_addr(&params.comptroller)? })
    }
}

pub(crate) fn decode_addr(s: &str) -> Result<Vec<u8>> {
    let s = s.strip_prefix("0x").unwrap_or(s);
    if s.len() != 40 {
        return Err(anyhow!("address must be 20 bytes (40 hex chars), got len={}", s.len()));
    }
    Ok(hex::decode(s)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        let params = Params::parse("comptroller=0xfd36e2c2a6789db23113685031d7f16329158384").unwrap();
        assert_eq!(params.comptroller, hex::decode("fd36e2c2a6789db23113685031d7f16329158384").unwrap());
    }

    #[test]
    fn test_parse_rejects_short_address() {
        assert!(Params::parse("comptroller=0xfd36").is_err());
        assert!(Params::parse("").is_err());
    }
}
