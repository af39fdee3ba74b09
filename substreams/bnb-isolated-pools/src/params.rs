use anyhow::{anyhow, Result};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct StringParams {
    pool_registry: String,
}

impl StringParams {
    pub fn parse(input: &str) -> Result<Self> {
        serde_qs::from_str(input).map_err(|e| anyhow!("Failed to parse query params: {}", e))
    }
}

/// Static contract addresses of an isolated pools deployment. Comptrollers and markets are
/// discovered through the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Params {
    pub pool_registry: Vec<u8>,
}

impl Params {
    pub fn parse(input: &str) -> Result<Self> {
        let params = StringParams::parse(input)?;

        Ok(Self { pool_registry: decode_addr(&params.pool_registry)? })
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
    fn test_parse() {
        let params = Params::parse("pool_registry=0x9F7b01A536aFA00EF10310A162877fd792cD0666").unwrap();
        assert_eq!(params.pool_registry.len(), 20);
        assert_eq!(params.pool_registry[0], 0x9f);
    }

    #[test]
    fn test_parse_rejects_missing_registry() {
        assert!(Params::parse("comptroller=0x9F7b01A536aFA00EF10310A162877fd792cD0666").is_err());
    }
}
