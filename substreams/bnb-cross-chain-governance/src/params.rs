use anyhow::{anyhow, Result};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct StringParams {
    executor: String,
    executor_owner: String,
    access_control_manager: String,
}

impl StringParams {
    pub fn parse(input: &str) -> Result<Self> {
        serde_qs::from_str(input).map_err(|e| anyhow!("Failed to parse query params: {}", e))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Params {
    pub executor: Vec<u8>,
    pub executor_owner: Vec<u8>,
    pub access_control_manager: Vec<u8>,
}

impl Params {
    pub fn parse(input: &str) -> Result<Self> {
        let params = StringParams::parse(input)?;

        Ok(Self {
            executor: decode_addr(&params.executor)?,
            executor_owner: decode_addr(&params.executor_owner)?,
            access_control_manager: decode_addr(&params.access_control_manager)?,
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
    fn test_parse() {
        let params = Params::parse(
            "executor=0xd70ffB56E4763078b8B814C0B48938F35D83bE0C\
             &executor_owner=0x87Ed3Fd3a25d157637b955991fb1B41B566916Ba\
             &access_control_manager=0x230058da2D23eb8836EC5DB7037ef7250c56E25E",
        )
        .unwrap();
        assert_eq!(params.executor[0], 0xd7);
        assert_eq!(params.executor_owner[19], 0xba);
        assert_eq!(params.access_control_manager.len(), 20);
    }

    #[test]
    fn test_parse_rejects_missing_owner() {
        assert!(Params::parse("executor=0xd70ffB56E4763078b8B814C0B48938F35D83bE0C").is_err());
    }
}
