use serde_json::{Map, Value};
use substreams_ethereum::pb::eth::v2::Log;
use subgraph_substreams::{ids, prelude::*, subgraph::snapshot_entities};

use crate::{
    events::{decode_converter_event, decode_network_event, EventType},
    params::Params,
    pb::subgraph::protocol_reserve::v1::{TokenConverter, TokenConverterConfig},
    reader::{ConverterReader, RpcReader},
};

/// The protocol reserve subgraph: token converters and their conversion pairs.
pub struct ProtocolReserve<R = RpcReader> {
    params: Params,
    reader: R,
}

impl ProtocolReserve<RpcReader> {
    pub fn from_params(params: &str) -> anyhow::Result<Self> {
        Ok(Self::new(Params::parse(params)?, RpcReader))
    }
}

impl<R: ConverterReader> ProtocolReserve<R> {
    pub fn new(params: Params, reader: R) -> Self {
        Self { params, reader }
    }

    fn is_converter<S: EntityStore>(&self, store: &S, address: &[u8]) -> bool {
        self.params
            .token_converters
            .iter()
            .any(|converter| converter.as_slice() == address)
            || store.has::<TokenConverter>(&ids::address_id(address))
    }
}

impl<R: ConverterReader> Subgraph for ProtocolReserve<R> {
    type Event = EventType;

    const NAME: &'static str = "bnb-protocol-reserve";

    fn decode<S: EntityStore>(&self, store: &S, log: &Log) -> Option<EventType> {
        if log.address == self.params.converter_network {
            return decode_network_event(log);
        }
        if self.is_converter(store, &log.address) {
            return decode_converter_event(log);
        }
        None
    }

    fn handle<S: EntityStore>(
        &self,
        store: &mut S,
        ctx: &EventContext,
        event: EventType,
    ) -> Result<(), HandlerError> {
        event.apply(store, &self.reader, ctx)
    }

    fn snapshot(&self, store: &MemoryStore) -> Result<Value, HandlerError> {
        let mut out = Map::new();
        snapshot_entities::<TokenConverter>(store, &mut out)?;
        snapshot_entities::<TokenConverterConfig>(store, &mut out)?;
        Ok(Value::Object(out))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::token_converter_config_id;
    use ethabi::Token;
    use subgraph_substreams::testing::{address, address_token, block, event_log, uint_token};

    const NETWORK: u8 = 0xf7;
    const CONFIGURED: u8 = 0xa5;
    const DISCOVERED: u8 = 0xd9;

    struct NoReads;

    impl ConverterReader for NoReads {}

    fn protocol_reserve() -> ProtocolReserve<NoReads> {
        ProtocolReserve::new(
            Params { converter_network: address(NETWORK), token_converters: vec![address(CONFIGURED)] },
            NoReads,
        )
    }

    fn config_updated(converter: u8, token_in: u8, access: &str) -> Log {
        event_log(
            &address(converter),
            "ConversionConfigUpdated(address,address,uint256,uint256,uint8,uint8)",
            vec![address_token(&address(token_in)), address_token(&address(0x99))],
            vec![uint_token("0"), uint_token("10000000000000000"), uint_token("0"), uint_token(access)],
        )
    }

    #[test]
    fn test_from_params() {
        let subgraph = ProtocolReserve::from_params(&format!(
            "converter_network=0x{}&token_converters=0x{}",
            hex::encode(address(NETWORK)),
            hex::encode(address(CONFIGURED))
        ))
        .unwrap();
        assert_eq!(subgraph.params.converter_network, address(NETWORK));
        assert_eq!(subgraph.params.token_converters, vec![address(CONFIGURED)]);
    }

    #[test]
    fn test_block_replay() {
        let subgraph = protocol_reserve();
        let mut store = MemoryStore::new();

        let logs = vec![
            // configured before the network lists it
            config_updated(CONFIGURED, 1, "1"),
            // not yet known, so not routed
            config_updated(DISCOVERED, 1, "1"),
            event_log(
                &address(NETWORK),
                "ConverterAdded(address)",
                vec![address_token(&address(CONFIGURED))],
                vec![],
            ),
            event_log(
                &address(NETWORK),
                "ConverterAdded(address)",
                vec![address_token(&address(DISCOVERED))],
                vec![],
            ),
            config_updated(DISCOVERED, 2, "3"),
            event_log(&address(DISCOVERED), "ConversionPaused(address)", vec![address_token(&address(7))], vec![]),
            event_log(
                &address(NETWORK),
                "ConverterRemoved(address)",
                vec![address_token(&address(CONFIGURED))],
                vec![],
            ),
        ];
        let report = process_block(&subgraph, &mut store, &block(5, logs));

        assert_eq!(report, BlockReport { block_number: 5, handled: 6, failed: 0 });

        let configured: TokenConverter = load(&store, &ids::address_id(&address(CONFIGURED))).unwrap();
        assert!(!configured.listed);
        assert_eq!(configured.active_config_count, 1);

        let discovered: TokenConverter = load(&store, &ids::address_id(&address(DISCOVERED))).unwrap();
        assert!(discovered.listed);
        assert!(discovered.paused);
        assert_eq!(discovered.active_config_count, 1);

        assert!(store.has::<TokenConverterConfig>(&token_converter_config_id(
            &address(DISCOVERED),
            &address(2),
            &address(0x99)
        )));
        assert_eq!(store.count::<TokenConverterConfig>(), 2);

        let snapshot = subgraph.snapshot(&store).unwrap();
        assert_eq!(snapshot["TokenConverter"][&discovered.id]["listed"], true);
    }

    #[test]
    fn test_removing_unknown_converter_fails() {
        let subgraph = protocol_reserve();
        let mut store = MemoryStore::new();

        let logs = vec![event_log(
            &address(NETWORK),
            "ConverterRemoved(address)",
            vec![address_token(&address(DISCOVERED))],
            vec![],
        )];
        let report = process_block(&subgraph, &mut store, &block(1, logs));

        assert_eq!(report.failed, 1);
        assert!(store.is_empty());
    }
}
