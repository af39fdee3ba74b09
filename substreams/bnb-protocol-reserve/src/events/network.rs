use subgraph_substreams::{ids, prelude::*};

use crate::{
    abi::converter_network::events::{ConverterAdded, ConverterRemoved},
    entities::load_token_converter,
    pb::subgraph::protocol_reserve::v1::TokenConverter,
    reader::ConverterReader,
};

pub fn handle_converter_added<S: EntityStore, R: ConverterReader>(
    store: &mut S,
    reader: &R,
    event: &ConverterAdded,
) -> Result<(), HandlerError> {
    let mut converter = load_token_converter(store, reader, &event.converter)?;
    converter.listed = true;
    store.save(&converter);
    Ok(())
}

pub fn handle_converter_removed<S: EntityStore>(
    store: &mut S,
    event: &ConverterRemoved,
) -> Result<(), HandlerError> {
    update::<TokenConverter, _, _>(store, &ids::address_id(&event.converter), |converter| {
        converter.listed = false;
        Ok(())
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        abi::token_converter::events::ConversionConfigUpdated,
        events::converter::handle_conversion_config_updated,
    };
    use subgraph_substreams::testing::{address, big, event_context};

    const CONVERTER: u8 = 0xa5;

    struct NoReads;

    impl ConverterReader for NoReads {}

    fn converter(store: &MemoryStore) -> TokenConverter {
        load(store, &ids::address_id(&address(CONVERTER))).unwrap()
    }

    #[test]
    fn test_converter_added_lists_new_converter() {
        let mut store = MemoryStore::new();
        handle_converter_added(&mut store, &NoReads, &ConverterAdded { converter: address(CONVERTER) }).unwrap();

        let converter = converter(&store);
        assert!(converter.listed);
        assert_eq!(converter.active_config_count, 0);
        assert_eq!(store.count::<TokenConverter>(), 1);
    }

    #[test]
    fn test_add_and_remove_keep_existing_configs() {
        let mut store = MemoryStore::new();
        let config = ConversionConfigUpdated {
            token_address_in: address(1),
            token_address_out: address(9),
            old_incentive: big("0"),
            new_incentive: big("0"),
            old_access: big("0"),
            new_access: big("1"),
        };
        let ctx = event_context(&address(CONVERTER), 1);
        handle_conversion_config_updated(&mut store, &NoReads, &ctx, &config).unwrap();
        assert!(!converter(&store).listed);

        handle_converter_added(&mut store, &NoReads, &ConverterAdded { converter: address(CONVERTER) }).unwrap();
        assert!(converter(&store).listed);
        assert_eq!(converter(&store).active_config_count, 1);

        handle_converter_removed(&mut store, &ConverterRemoved { converter: address(CONVERTER) }).unwrap();
        let removed = converter(&store);
        assert!(!removed.listed);
        assert_eq!(removed.active_config_count, 1);
        assert_eq!(store.count::<TokenConverter>(), 1);
    }

    #[test]
    fn test_removing_unknown_converter_is_missing_entity() {
        let mut store = MemoryStore::new();
        let err = handle_converter_removed(&mut store, &ConverterRemoved { converter: address(CONVERTER) })
            .unwrap_err();
        assert!(matches!(err, HandlerError::MissingEntity { entity: "TokenConverter", .. }));
        assert!(store.is_empty());
    }
}
