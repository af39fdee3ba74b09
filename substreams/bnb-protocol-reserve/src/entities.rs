use subgraph_substreams::{
    ids, mantissa,
    prelude::*,
    reverted::{address_or_not_available, bool_or_false},
};

use crate::{
    pb::subgraph::protocol_reserve::v1::{ConversionAccess, TokenConverter, TokenConverterConfig},
    reader::ConverterReader,
};

subgraph_substreams::entity!(
    TokenConverter => "TokenConverter",
    TokenConverterConfig => "TokenConverterConfig",
);

/// Builds a converter from its on-chain configuration.
pub fn new_token_converter<R: ConverterReader>(converter: &[u8], reader: &R) -> TokenConverter {
    let address = |value: Option<Vec<u8>>| ids::address_id(&address_or_not_available(value));

    TokenConverter {
        id: ids::address_id(converter),
        base_asset: address(reader.base_asset(converter)),
        destination_address: address(reader.destination_address(converter)),
        price_oracle: address(reader.price_oracle(converter)),
        converter_network: address(reader.converter_network(converter)),
        paused: bool_or_false(reader.conversion_paused(converter)),
        listed: false,
        active_config_count: 0,
    }
}

pub fn load_token_converter<S: EntityStore, R: ConverterReader>(
    store: &S,
    reader: &R,
    converter: &[u8],
) -> Result<TokenConverter, HandlerError> {
    Ok(get_or_create(store, &ids::address_id(converter), |_| new_token_converter(converter, reader))?.entity)
}

pub fn token_converter_config_id(converter: &[u8], token_in: &[u8], token_out: &[u8]) -> String {
    ids::composite_id(&[converter, token_in, token_out])
}

pub fn new_token_converter_config(
    converter: &[u8],
    token_in: &[u8],
    token_out: &[u8],
) -> TokenConverterConfig {
    TokenConverterConfig {
        id: token_converter_config_id(converter, token_in, token_out),
        token_converter: ids::address_id(converter),
        token_address_in: ids::address_id(token_in),
        token_address_out: ids::address_id(token_out),
        incentive_mantissa: mantissa::zero(),
        access: ConversionAccess::None as i32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use subgraph_substreams::testing::address;

    struct Configured;

    impl ConverterReader for Configured {
        fn base_asset(&self, _converter: &[u8]) -> Option<Vec<u8>> {
            Some(address(0xba))
        }

        fn conversion_paused(&self, _converter: &[u8]) -> Option<bool> {
            Some(true)
        }
    }

    #[test]
    fn test_new_converter_defaults_reverted_reads() {
        let converter = new_token_converter(&address(1), &Configured);
        assert_eq!(converter.base_asset, ids::address_id(&address(0xba)));
        assert_eq!(converter.destination_address, ids::address_id(&ids::NULL_ADDRESS));
        assert!(converter.paused);
        assert_eq!(converter.active_config_count, 0);
    }

    #[test]
    fn test_config_id_orders_converter_then_tokens() {
        let id = token_converter_config_id(&address(1), &address(2), &address(3));
        assert_eq!(id, format!("0x{}{}{}", "01".repeat(20), "02".repeat(20), "03".repeat(20)));
        assert_ne!(id, token_converter_config_id(&address(1), &address(3), &address(2)));
    }
}
