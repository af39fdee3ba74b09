use subgraph_substreams::{counters::track_flag, ids, prelude::*};

use crate::{
    abi::token_converter::events::{
        BaseAssetUpdated, ConversionConfigUpdated, ConversionPaused, ConversionResumed,
        ConverterNetworkAddressUpdated, DestinationAddressUpdated, PriceOracleUpdated,
    },
    entities::{load_token_converter, new_token_converter_config, token_converter_config_id},
    pb::subgraph::protocol_reserve::v1::{ConversionAccess, TokenConverter},
    reader::ConverterReader,
};

/// Loads the emitting converter, applies `mutate` and saves it.
fn update_converter<S, R, F>(store: &mut S, reader: &R, ctx: &EventContext, mutate: F) -> Result<(), HandlerError>
where
    S: EntityStore,
    R: ConverterReader,
    F: FnOnce(&mut TokenConverter),
{
    let mut converter = load_token_converter(store, reader, &ctx.address)?;
    mutate(&mut converter);
    store.save(&converter);
    Ok(())
}

/// Overwrites the pair's incentive and access. `active_config_count` follows the transitions
/// between NONE and any other access.
pub fn handle_conversion_config_updated<S: EntityStore, R: ConverterReader>(
    store: &mut S,
    reader: &R,
    ctx: &EventContext,
    event: &ConversionConfigUpdated,
) -> Result<(), HandlerError> {
    let mut converter = load_token_converter(store, reader, &ctx.address)?;
    let id = token_converter_config_id(&ctx.address, &event.token_address_in, &event.token_address_out);
    let mut config = get_or_create(store, &id, |_| {
        new_token_converter_config(&ctx.address, &event.token_address_in, &event.token_address_out)
    })?
    .entity;

    let access = event.new_access.to_i32();
    track_flag(
        &mut converter.active_config_count,
        config.access != ConversionAccess::None as i32,
        access != ConversionAccess::None as i32,
    );

    config.incentive_mantissa = event.new_incentive.to_string();
    config.access = access;
    store.save(&config);
    store.save(&converter);
    Ok(())
}

pub fn handle_conversion_paused<S: EntityStore, R: ConverterReader>(
    store: &mut S,
    reader: &R,
    ctx: &EventContext,
    _event: &ConversionPaused,
) -> Result<(), HandlerError> {
    update_converter(store, reader, ctx, |converter| converter.paused = true)
}

pub fn handle_conversion_resumed<S: EntityStore, R: ConverterReader>(
    store: &mut S,
    reader: &R,
    ctx: &EventContext,
    _event: &ConversionResumed,
) -> Result<(), HandlerError> {
    update_converter(store, reader, ctx, |converter| converter.paused = false)
}

pub fn handle_converter_network_address_updated<S: EntityStore, R: ConverterReader>(
    store: &mut S,
    reader: &R,
    ctx: &EventContext,
    event: &ConverterNetworkAddressUpdated,
) -> Result<(), HandlerError> {
    update_converter(store, reader, ctx, |converter| {
        converter.converter_network = ids::address_id(&event.converter_network)
    })
}

pub fn handle_destination_address_updated<S: EntityStore, R: ConverterReader>(
    store: &mut S,
    reader: &R,
    ctx: &EventContext,
    event: &DestinationAddressUpdated,
) -> Result<(), HandlerError> {
    update_converter(store, reader, ctx, |converter| {
        converter.destination_address = ids::address_id(&event.destination_address)
    })
}

pub fn handle_base_asset_updated<S: EntityStore, R: ConverterReader>(
    store: &mut S,
    reader: &R,
    ctx: &EventContext,
    event: &BaseAssetUpdated,
) -> Result<(), HandlerError> {
    update_converter(store, reader, ctx, |converter| {
        converter.base_asset = ids::address_id(&event.new_base_asset)
    })
}

pub fn handle_price_oracle_updated<S: EntityStore, R: ConverterReader>(
    store: &mut S,
    reader: &R,
    ctx: &EventContext,
    event: &PriceOracleUpdated,
) -> Result<(), HandlerError> {
    update_converter(store, reader, ctx, |converter| {
        converter.price_oracle = ids::address_id(&event.price_oracle)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pb::subgraph::protocol_reserve::v1::TokenConverterConfig;
    use subgraph_substreams::testing::{address, big, event_context};

    const CONVERTER: u8 = 0xa5;

    struct NoReads;

    impl ConverterReader for NoReads {}

    fn ctx() -> EventContext {
        event_context(&address(CONVERTER), 1)
    }

    fn config_updated(token_in: u8, token_out: u8, access: &str) -> ConversionConfigUpdated {
        ConversionConfigUpdated {
            token_address_in: address(token_in),
            token_address_out: address(token_out),
            old_incentive: big("0"),
            new_incentive: big("10000000000000000"),
            old_access: big("0"),
            new_access: big(access),
        }
    }

    fn converter(store: &MemoryStore) -> TokenConverter {
        load(store, &ids::address_id(&address(CONVERTER))).unwrap()
    }

    #[test]
    fn test_active_config_count_matches_configs() {
        let mut store = MemoryStore::new();
        handle_conversion_config_updated(&mut store, &NoReads, &ctx(), &config_updated(1, 9, "1")).unwrap();
        handle_conversion_config_updated(&mut store, &NoReads, &ctx(), &config_updated(2, 9, "2")).unwrap();
        handle_conversion_config_updated(&mut store, &NoReads, &ctx(), &config_updated(3, 9, "3")).unwrap();
        handle_conversion_config_updated(&mut store, &NoReads, &ctx(), &config_updated(2, 9, "1")).unwrap();
        handle_conversion_config_updated(&mut store, &NoReads, &ctx(), &config_updated(3, 9, "0")).unwrap();
        handle_conversion_config_updated(&mut store, &NoReads, &ctx(), &config_updated(4, 9, "0")).unwrap();

        let active = store
            .all::<TokenConverterConfig>()
            .unwrap()
            .iter()
            .filter(|config| config.access != ConversionAccess::None as i32)
            .count() as i64;
        assert_eq!(active, 2);
        assert_eq!(converter(&store).active_config_count, active);
        assert_eq!(store.count::<TokenConverterConfig>(), 4);
    }

    #[test]
    fn test_config_fields() {
        let mut store = MemoryStore::new();
        handle_conversion_config_updated(&mut store, &NoReads, &ctx(), &config_updated(1, 9, "2")).unwrap();

        let config: TokenConverterConfig =
            load(&store, &token_converter_config_id(&address(CONVERTER), &address(1), &address(9))).unwrap();
        assert_eq!(config.access, ConversionAccess::OnlyForConverters as i32);
        assert_eq!(config.incentive_mantissa, "10000000000000000");
        assert_eq!(config.token_converter, ids::address_id(&address(CONVERTER)));
    }

    #[test]
    fn test_pause_resume_and_addresses() {
        let mut store = MemoryStore::new();
        handle_conversion_paused(&mut store, &NoReads, &ctx(), &ConversionPaused { sender: address(7) }).unwrap();
        assert!(converter(&store).paused);

        handle_conversion_resumed(&mut store, &NoReads, &ctx(), &ConversionResumed { sender: address(7) }).unwrap();
        handle_destination_address_updated(
            &mut store,
            &NoReads,
            &ctx(),
            &DestinationAddressUpdated { old_destination_address: address(0), destination_address: address(0xde) },
        )
        .unwrap();
        handle_base_asset_updated(
            &mut store,
            &NoReads,
            &ctx(),
            &BaseAssetUpdated { old_base_asset: address(0), new_base_asset: address(0xba) },
        )
        .unwrap();

        let converter = converter(&store);
        assert!(!converter.paused);
        assert_eq!(converter.destination_address, ids::address_id(&address(0xde)));
        assert_eq!(converter.base_asset, ids::address_id(&address(0xba)));
        assert_eq!(converter.price_oracle, ids::address_id(&ids::NULL_ADDRESS));
    }
}
