use anyhow::{anyhow, Result};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct StringParams {
    governor_bravo: String,
    xvs_vault: String,
    xvs: String,
    omnichain_proposal_sender: String,
    access_control_manager: String,
}

impl StringParams {
    pub fn parse(input: &str) -> Result<Self> {
        serde_qs::from_str(input).map_err(|e| anyhow!("Failed to parse query params: {}", e))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Params {
    pub governor_bravo: Vec<u8>,
    pub xvs_vault: Vec<u8>,
    pub xvs: Vec<u8>,
    pub omnichain_proposal_sender: Vec<u8>,
    pub access_control_manager: Vec<u8>,
}

impl Params {
    pub fn parse(input: &str) -> Result<Self> {
        let params = StringParams::parse(input)?;

        Ok(Self {
            governor_bravo: decode_addr(&params.governor_bravo)?,
            xvs_vault: decode_addr(&params.xvs_vault)?,
            xvs: decode_addr(&params.xvs)?,
            omnichain_proposal_sender: decode_addr(&params.omnichain_proposal_sender)?,
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

    const INPUT: &str = "governor_bravo=0x2d56dC077072B53571b8252008C60e945108c75a\
        &xvs_vault=0x051100480289e704d20e9DB4804837068f3f9204\
        &xvs=0xcF6BB5389c92Bdda8a3747Ddb454cB7a64626C63\
        &omnichain_proposal_sender=0x36a69dE601381be7b0DcAc5D5dD058825505F8f6\
        &access_control_manager=0x4788629ABc6cFCA10F9f969efdEAa1cF70c23555";

    #[test]
    fn test_parse() {
        let params = Params::parse(INPUT).unwrap();
        assert_eq!(params.governor_bravo[0], 0x2d);
        assert_eq!(params.xvs[19], 0x63);
        assert_eq!(params.access_control_manager.len(), 20);
    }

    #[test]
    fn test_parse_rejects_short_address() {
        let input = INPUT.replace("0x051100480289e704d20e9DB4804837068f3f9204", "0x0511");
        let err = Params::parse(&input).unwrap_err();
        assert!(err.to_string().contains("got len=4"));
    }
}
