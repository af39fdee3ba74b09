use std::{fs, path::Path};

use figment::{
    providers::{Format, Yaml},
    value::{Tag, Value},
    Figment,
};
use miette::{miette, IntoDiagnostic, WrapErr};
use serde_json::json;
use tracing::info;

use crate::config::{AddressValue, NetworkConfig, Networks};

/// A manifest and constants file rendered for one network.
#[derive(Debug, Clone)]
pub struct Rendered {
    pub manifest: String,
    pub constants: serde_json::Value,
}

/// Fills a `subgraph.template.yaml` with the addresses, start block, network and params of
/// `network`.
pub fn render(template_path: &Path, networks: &Networks, network: &str) -> miette::Result<Rendered> {
    let config = networks.get(network)?;
    config.validate()?;

    let mut data: Value = Figment::new()
        .merge(Yaml::file(template_path))
        .extract()
        .into_diagnostic()
        .wrap_err("Failed to load manifest template:")?;

    let substreams_network = config
        .substreams_network
        .clone()
        .unwrap_or_else(|| network.to_string());
    set_data_sources(&mut data, config)?;
    set_network(&mut data, &substreams_network)?;
    set_params(&mut data, &config.params())?;

    let manifest = serde_yaml::to_string(&data).into_diagnostic()?;
    Ok(Rendered { manifest, constants: constants(network, config) })
}

/// Renders the package's manifest and constants next to its template.
pub fn render_package(package_dir: &Path, network: &str) -> miette::Result<()> {
    let networks = Networks::load(&package_dir.join("networks.yaml"))?;
    let rendered = render(&package_dir.join("subgraph.template.yaml"), &networks, network)?;

    let manifest_path = package_dir.join("subgraph.yaml");
    let constants_path = package_dir.join("constants.json");
    fs::write(&manifest_path, rendered.manifest).into_diagnostic()?;
    fs::write(
        &constants_path,
        serde_json::to_string_pretty(&rendered.constants).into_diagnostic()?,
    )
    .into_diagnostic()?;

    info!("Rendered {} and {}", manifest_path.display(), constants_path.display());
    Ok(())
}

fn constants(network: &str, config: &NetworkConfig) -> serde_json::Value {
    json!({
        "network": network,
        "startBlock": config.start_block,
        "addresses": config.addresses,
    })
}

/// Resolves each data source's `address` key against the network's address table and starts
/// it at the network's start block.
pub fn set_data_sources(data: &mut Value, config: &NetworkConfig) -> miette::Result<()> {
    let Value::Dict(_, dict) = data else {
        return Err(miette!("manifest template is not a mapping"));
    };
    let Some(Value::Array(_, sources)) = dict.get_mut("dataSources") else {
        return Err(miette!("manifest template has no dataSources"));
    };
    for source in sources.iter_mut() {
        let Value::Dict(_, source) = source else {
            return Err(miette!("data source is not a mapping"));
        };
        let name = source
            .get("name")
            .and_then(Value::as_str)
            .unwrap_or("<unnamed>")
            .to_string();
        let key = source
            .get("address")
            .and_then(Value::as_str)
            .ok_or_else(|| miette!("data source {name} has no address key"))?
            .to_string();
        let address = config
            .addresses
            .get(&key)
            .ok_or_else(|| miette!("data source {name} names unknown address '{key}'"))?;
        source.insert("address".to_string(), address_value(address));
        source.insert("startBlock".to_string(), Value::from(config.start_block));
    }
    Ok(())
}

fn address_value(address: &AddressValue) -> Value {
    match address {
        AddressValue::Single(address) => Value::from(address.clone()),
        AddressValue::List(addresses) => {
            Value::Array(Tag::Default, addresses.iter().cloned().map(Value::from).collect())
        }
    }
}

fn set_network(data: &mut Value, network: &str) -> miette::Result<()> {
    match data {
        Value::Dict(_, dict) => {
            dict.insert("network".to_string(), Value::from(network.to_string()));
            Ok(())
        }
        _ => Err(miette!("manifest template is not a mapping")),
    }
}

fn set_params(data: &mut Value, params: &str) -> miette::Result<()> {
    match data {
        Value::Dict(_, dict) => {
            dict.insert("params".to_string(), Value::from(params.to_string()));
            Ok(())
        }
        _ => Err(miette!("manifest template is not a mapping")),
    }
}

#[cfg(test)]
mod tests {
    use clap::ValueEnum;

    use super::*;
    use crate::config::Package;

    fn rendered(network: &str) -> Rendered {
        let networks = Networks::load(Path::new("src/assets/networks.yaml")).unwrap();
        render(Path::new("src/assets/subgraph_template.yaml"), &networks, network).unwrap()
    }

    fn manifest(rendered: &Rendered) -> serde_yaml::Value {
        serde_yaml::from_str(&rendered.manifest).unwrap()
    }

    #[test]
    fn test_render_fills_network_and_params() {
        let rendered = rendered("bsc");
        let manifest = manifest(&rendered);

        assert_eq!(manifest["network"].as_str(), Some("bsc"));
        let params = manifest["params"].as_str().unwrap();
        assert!(params.starts_with("converter_network=0xf7caad5ceb0209165f2dfe71c92ade14d0f15995&"));
        assert!(params.ends_with(",0xd9f101aa67f3d72662609a2703387242452078c3"));
        assert_eq!(manifest["package"]["name"].as_str(), Some("bnb_protocol_reserve"));
    }

    #[test]
    fn test_render_uses_substreams_network_name() {
        let rendered = rendered("bsctestnet");
        assert_eq!(manifest(&rendered)["network"].as_str(), Some("bsc-testnet"));
        assert_eq!(rendered.constants["network"], "bsctestnet");
        assert_eq!(rendered.constants["addresses"]["token_converters"], json!([]));
    }

    #[test]
    fn test_constants() {
        let rendered = rendered("bsc");
        assert_eq!(rendered.constants["startBlock"], 35140000);
        assert_eq!(
            rendered.constants["addresses"]["converter_network"],
            "0xf7caad5ceb0209165f2dfe71c92ade14d0f15995"
        );
        assert_eq!(rendered.constants["addresses"]["token_converters"][1], "0xd9f101aa67f3d72662609a2703387242452078c3");
    }

    #[test]
    fn test_set_data_sources() {
        let networks = Networks::load(Path::new("src/assets/networks.yaml")).unwrap();
        let manifest = manifest(&rendered("bsc"));
        let sources = manifest["dataSources"].as_sequence().unwrap();

        assert_eq!(sources.len(), 2);
        assert_eq!(sources[0]["name"].as_str(), Some("ConverterNetwork"));
        assert_eq!(
            sources[0]["address"].as_str(),
            Some("0xf7caad5ceb0209165f2dfe71c92ade14d0f15995")
        );
        let converters = sources[1]["address"].as_sequence().unwrap();
        assert_eq!(converters.len(), 2);
        assert_eq!(converters[0].as_str(), Some("0xa5622d276ccbb8d9bbe3d1ffd1bb11a0032e53f0"));
        for source in sources {
            assert_eq!(source["startBlock"].as_u64(), Some(35140000));
        }

        let mut data: Value = Figment::new()
            .merge(Yaml::file("src/assets/subgraph_template.yaml"))
            .extract()
            .unwrap();
        let mut config = networks.get("bsc").unwrap().clone();
        config.addresses.remove("token_converters");
        let err = set_data_sources(&mut data, &config).unwrap_err();
        assert!(err.to_string().contains("TokenConverter names unknown address 'token_converters'"));
    }

    #[test]
    fn test_set_data_sources_requires_data_sources() {
        let networks = Networks::load(Path::new("src/assets/networks.yaml")).unwrap();
        let mut data: Value = Figment::new()
            .merge(Yaml::string("network: bsc\nparams: \"\"\n"))
            .extract()
            .unwrap();
        let err = set_data_sources(&mut data, networks.get("bsc").unwrap()).unwrap_err();
        assert_eq!(err.to_string(), "manifest template has no dataSources");
    }

    #[test]
    fn test_every_package_renders_on_every_network() {
        for package in Package::value_variants() {
            let dir = package.path();
            let networks = Networks::load(&dir.join("networks.yaml")).unwrap();
            for network in networks.0.keys() {
                let rendered = render(&dir.join("subgraph.template.yaml"), &networks, network)
                    .unwrap_or_else(|e| panic!("{package} on {network}: {e}"));
                let manifest = manifest(&rendered);
                assert!(manifest.get("binaries").is_none());
                assert!(manifest.get("modules").is_none());
                for source in manifest["dataSources"].as_sequence().unwrap() {
                    assert!(!source["address"].is_null(), "{package}: {:?}", source["name"]);
                    assert_eq!(source["startBlock"].as_u64(), Some(networks.0[network].start_block));
                }
            }
        }
    }
}
