use anyhow::{anyhow, Result};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct StringParams {
    converter_network: String,
    #[serde(default)]
    token_converters: String,
}

impl StringParams {
    pub fn parse(input: &str) -> Result<Self> {
        serde_qs::from_str(input).map_err(|e| anyhow!("Failed to parse query params: {}", e))
    }
}

/// The converter network plus the converters deployed before it registers them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Params {
    pub converter_network: Vec<u8>,
    pub token_converters: Vec<Vec<u8>>,
}

impl Params {
    pub fn parse(input: &str) -> Result<Self> {
        let params = StringParams::parse(input)?;

        Ok(Self {
            converter_network: decode_addr(&params.converter_network)?,
            token_converters: params
                .token_converters
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(decode_addr)
                .collect::<Result<Vec<_>>>()?,
        })
    }
}

fn decode_addr(s: &str) -> Result<Vec<u8>> {
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
    fn test_parse_converter_list() {
        let params = Params::parse(
            "converter_network=0xF7Caad5CeB0209165f2dFE71c92aDe14d0F15995\
             &token_converters=0xA5622D276CcbB8d9BBE3D1ffd1BB11a0032E53F0,0xD9f101AA67F3D72662609a2703387242452078C3",
        )
        .unwrap();
        assert_eq!(params.converter_network[0], 0xf7);
        assert_eq!(params.token_converters.len(), 2);
        assert_eq!(params.token_converters[1][0], 0xd9);
    }

    #[test]
    fn test_parse_without_converters() {
        let params = Params::parse("converter_network=0xF7Caad5CeB0209165f2dFE71c92aDe14d0F15995").unwrap();
        assert!(params.token_converters.is_empty());
    }

    #[test]
    fn test_parse_rejects_bad_converter() {
        assert!(Params::parse(
            "converter_network=0xF7Caad5CeB0209165f2dFE71c92aDe14d0F15995&token_converters=0x1234"
        )
        .is_err());
    }
}
