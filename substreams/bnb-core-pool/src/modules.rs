use serde_json::{Map, Value};
use substreams_ethereum::pb::eth::v2::Log;
use subgraph_substreams::{ids, prelude::*, subgraph::snapshot_entities};

use crate::{
    events::{decode_comptroller_event, decode_vtoken_event, EventType},
    params::Params,
    pb::subgraph::core_pool::v1::{Account, AccountVToken, Comptroller, Market, MarketAction},
    reader::{PoolReader, RpcReader},
};

/// The core pool subgraph: one comptroller plus every market it lists.
pub struct CorePool<R = RpcReader> {
    params: Params,
    reader: R,
}

impl CorePool<RpcReader> {
    pub fn from_params(params: &str) -> anyhow::Result<Self> {
        Ok(Self::new(Params::parse(params)?, RpcReader))
    }
}

impl<R: PoolReader> CorePool<R> {
    pub fn new(params: Params, reader: R) -> Self {
        Self { params, reader }
    }
}

impl<R: PoolReader> Subgraph for CorePool<R> {
    type Event = EventType;

    const NAME: &'static str = "bnb-core-pool";

    fn decode<S: EntityStore>(&self, store: &S, log: &Log) -> Option<EventType> {
        if log.address == self.params.comptroller {
            return decode_comptroller_event(log);
        }
        if store.has::<Market>(&ids::address_id(&log.address)) {
            return decode_vtoken_event(log);
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
        snapshot_entities::<Comptroller>(store, &mut out)?;
        snapshot_entities::<Market>(store, &mut out)?;
        snapshot_entities::<Account>(store, &mut out)?;
        snapshot_entities::<AccountVToken>(store, &mut out)?;
        snapshot_entities::<MarketAction>(store, &mut out)?;
        Ok(Value::Object(out))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{account_vtoken_id, market_action_id, COMPTROLLER_ID, NATIVE_SYMBOL};
    use ethabi::Token;
    use subgraph_substreams::testing::{address, address_token, block, event_log, uint_token};

    const COMPTROLLER: u8 = 0xc0;
    const VBNB: u8 = 0x0a;

    struct NoReads;

    impl PoolReader for NoReads {}

    fn core_pool() -> CorePool<NoReads> {
        CorePool::new(Params { comptroller: address(COMPTROLLER) }, NoReads)
    }

    #[test]
    fn test_from_params() {
        let pool = CorePool::from_params(&format!("comptroller=0x{}", hex::encode(address(COMPTROLLER)))).unwrap();
        assert_eq!(pool.params.comptroller, address(COMPTROLLER));
    }

    #[test]
    fn test_block_replay() {
        let subgraph = core_pool();
        let mut store = MemoryStore::new();

        let logs = vec![
            // vToken events before listing are not routed
            event_log(
                &address(VBNB),
                "Mint(address,uint256,uint256,uint256)",
                vec![],
                vec![address_token(&address(1)), uint_token("5"), uint_token("5"), uint_token("5")],
            ),
            event_log(&address(COMPTROLLER), "MarketListed(address)", vec![], vec![address_token(&address(VBNB))]),
            event_log(
                &address(COMPTROLLER),
                "MarketEntered(address,address)",
                vec![],
                vec![address_token(&address(VBNB)), address_token(&address(1))],
            ),
            event_log(
                &address(VBNB),
                "Mint(address,uint256,uint256,uint256)",
                vec![],
                vec![
                    address_token(&address(1)),
                    uint_token("1000000000000000000000"),
                    uint_token("5000000000000"),
                    uint_token("5000000000000"),
                ],
            ),
            event_log(
                &address(COMPTROLLER),
                "ActionPausedMarket(address,uint8,bool)",
                vec![address_token(&address(VBNB)), uint_token("2")],
                vec![Token::Bool(true)],
            ),
            event_log(
                &address(COMPTROLLER),
                "NewCloseFactor(uint256,uint256)",
                vec![],
                vec![uint_token("0"), uint_token("500000000000000000")],
            ),
        ];
        let report = process_block(&subgraph, &mut store, &block(7, logs));

        assert_eq!(report, BlockReport { block_number: 7, handled: 5, failed: 0 });

        let market: Market = load(&store, &ids::address_id(&address(VBNB))).unwrap();
        assert!(market.is_listed);
        assert_eq!(market.underlying_symbol, NATIVE_SYMBOL);
        assert_eq!(market.supplier_count, 1);

        let position: AccountVToken =
            load(&store, &account_vtoken_id(&address(VBNB), &address(1))).unwrap();
        assert!(position.entered_market);
        assert_eq!(position.total_underlying_supplied_mantissa, "1000000000000000000000");

        let action: MarketAction = load(&store, &market_action_id(&address(VBNB), 2)).unwrap();
        assert!(action.pause_state);

        let comptroller: Comptroller = load(&store, COMPTROLLER_ID).unwrap();
        assert_eq!(comptroller.close_factor_mantissa, "500000000000000000");

        let snapshot = subgraph.snapshot(&store).unwrap();
        assert_eq!(snapshot["Market"][&market.id]["supplier_count"], 1);
    }

    #[test]
    fn test_missing_market_is_logged_and_skipped() {
        let subgraph = core_pool();
        let mut store = MemoryStore::new();

        let logs = vec![event_log(
            &address(COMPTROLLER),
            "NewCollateralFactor(address,uint256,uint256)",
            vec![],
            vec![address_token(&address(VBNB)), uint_token("0"), uint_token("1")],
        )];
        let report = process_block(&subgraph, &mut store, &block(1, logs));

        assert_eq!(report.failed, 1);
        assert!(store.is_empty());
    }
}
