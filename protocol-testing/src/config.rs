use std::{
    collections::BTreeMap,
    fmt,
    path::{Path, PathBuf},
};

use clap::ValueEnum;
use figment::{
    providers::{Format, Yaml},
    Figment,
};
use miette::{miette, IntoDiagnostic, WrapErr};
use serde::{Deserialize, Serialize};
use tracing::info;

/// The subgraph packages of this repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Package {
    CorePool,
    IsolatedPools,
    Governance,
    CrossChainGovernance,
    ProtocolReserve,
}

impl Package {
    pub fn dir_name(&self) -> &'static str {
        match self {
            Package::CorePool => "bnb-core-pool",
            Package::IsolatedPools => "bnb-isolated-pools",
            Package::Governance => "bnb-governance",
            Package::CrossChainGovernance => "bnb-cross-chain-governance",
            Package::ProtocolReserve => "bnb-protocol-reserve",
        }
    }

    /// The package directory, resolved from this crate's manifest directory.
    pub fn path(&self) -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("..")
            .join("substreams")
            .join(self.dir_name())
    }
}

impl fmt::Display for Package {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

/// A deployed contract address, or the list of addresses of a contract deployed as a set.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum AddressValue {
    Single(String),
    List(Vec<String>),
}

impl AddressValue {
    pub fn addresses(&self) -> Vec<&str> {
        match self {
            AddressValue::Single(address) => vec![address.as_str()],
            AddressValue::List(addresses) => addresses.iter().map(String::as_str).collect(),
        }
    }

    /// Query-string form: lists are comma separated.
    pub fn to_param(&self) -> String {
        self.addresses().join(",")
    }
}

/// One row of a package's `networks.yaml`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NetworkConfig {
    pub start_block: u64,
    /// Network name understood by the substreams host, when it differs from the table key.
    #[serde(default)]
    pub substreams_network: Option<String>,
    pub addresses: BTreeMap<String, AddressValue>,
}

impl NetworkConfig {
    /// The package params, e.g. `comptroller=0xfd36...&xvs=0xcf6b...`. Keys are sorted.
    pub fn params(&self) -> String {
        self.addresses
            .iter()
            .map(|(name, value)| format!("{}={}", name, value.to_param()))
            .collect::<Vec<_>>()
            .join("&")
    }

    pub fn validate(&self) -> miette::Result<()> {
        for (name, value) in &self.addresses {
            for address in value.addresses() {
                if !is_address(address) {
                    return Err(miette!("address '{}' for '{}' is not a 0x-prefixed 20 byte hex string", address, name));
                }
            }
        }
        Ok(())
    }
}

fn is_address(s: &str) -> bool {
    s.strip_prefix("0x")
        .map(|hex| hex.len() == 40 && hex.chars().all(|c| c.is_ascii_hexdigit()))
        .unwrap_or(false)
}

/// Static table of addresses and start blocks, keyed by network name.
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct Networks(pub BTreeMap<String, NetworkConfig>);

impl Networks {
    pub fn load(path: &Path) -> miette::Result<Self> {
        info!("Networks YAML: {}", path.display());
        Figment::new()
            .merge(Yaml::file(path))
            .extract::<Networks>()
            .into_diagnostic()
            .wrap_err("Failed to load networks table:")
    }

    pub fn get(&self, network: &str) -> miette::Result<&NetworkConfig> {
        self.0.get(network).ok_or_else(|| {
            let known = self.0.keys().cloned().collect::<Vec<_>>().join(", ");
            miette!("unknown network '{}', expected one of: {}", network, known)
        })
    }
}

/// A recorded block range to replay through one package.
#[derive(Debug, Clone, Deserialize)]
pub struct ReplayFixture {
    pub package: Package,
    pub params: String,
    /// Base64 of protobuf encoded `sf.ethereum.type.v2.Block` messages, in chain order.
    pub blocks: Vec<String>,
    /// JSON snapshot the replay must produce, relative to the fixture file.
    #[serde(default)]
    pub expected: Option<PathBuf>,
}

impl ReplayFixture {
    pub fn load(path: &Path) -> miette::Result<Self> {
        info!("Replay fixture: {}", path.display());
        Figment::new()
            .merge(Yaml::file(path))
            .extract::<ReplayFixture>()
            .into_diagnostic()
            .wrap_err("Failed to load replay fixture:")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn networks() -> Networks {
        Networks::load(Path::new("src/assets/networks.yaml")).expect("Failed to load networks fixture")
    }

    #[test]
    fn test_params_sorted_and_lists_joined() {
        let networks = networks();
        let bsc = networks.get("bsc").unwrap();

        assert_eq!(
            bsc.params(),
            "converter_network=0xf7caad5ceb0209165f2dfe71c92ade14d0f15995\
             &token_converters=0xa5622d276ccbb8d9bbe3d1ffd1bb11a0032e53f0,0xd9f101aa67f3d72662609a2703387242452078c3"
        );
        assert!(bsc.validate().is_ok());
    }

    #[test]
    fn test_unknown_network_lists_known_ones() {
        let err = networks().get("polygon").unwrap_err();
        assert!(err.to_string().contains("bsc, bsctestnet"));
    }

    #[test]
    fn test_validate_rejects_short_address() {
        let config = NetworkConfig {
            start_block: 1,
            substreams_network: None,
            addresses: BTreeMap::from([("xvs".to_string(), AddressValue::Single("0x1234".to_string()))]),
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_package_paths() {
        let path = Package::CrossChainGovernance.path();
        assert!(path.is_absolute());
        assert!(path.ends_with("substreams/bnb-cross-chain-governance"));
        assert!(path.join("networks.yaml").is_file());
        assert_eq!(Package::CorePool.to_string(), "bnb-core-pool");
    }
}
