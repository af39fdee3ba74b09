use serde_json::{Map, Value};
use substreams_ethereum::pb::eth::v2::Log;
use subgraph_substreams::{ids, prelude::*, subgraph::snapshot_entities};

use crate::{
    events::{decode_comptroller_event, decode_registry_event, decode_vtoken_event, EventType},
    params::Params,
    pb::subgraph::isolated_pools::v1::{Account, AccountVToken, Market, MarketAction, Pool},
    reader::{PoolReader, RpcReader},
};

/// The isolated pools subgraph: every pool the registry announces, with its markets.
pub struct IsolatedPools<R = RpcReader> {
    params: Params,
    reader: R,
}

impl IsolatedPools<RpcReader> {
    pub fn from_params(params: &str) -> anyhow::Result<Self> {
        Ok(Self::new(Params::parse(params)?, RpcReader))
    }
}

impl<R: PoolReader> IsolatedPools<R> {
    pub fn new(params: Params, reader: R) -> Self {
        Self { params, reader }
    }
}

impl<R: PoolReader> Subgraph for IsolatedPools<R> {
    type Event = EventType;

    const NAME: &'static str = "bnb-isolated-pools";

    fn decode<S: EntityStore>(&self, store: &S, log: &Log) -> Option<EventType> {
        if log.address == self.params.pool_registry {
            return decode_registry_event(log);
        }

        let id = ids::address_id(&log.address);
        if store.has::<Pool>(&id) {
            return decode_comptroller_event(log);
        }
        if store.has::<Market>(&id) {
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
        snapshot_entities::<Pool>(store, &mut out)?;
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
    use crate::entities::{account_vtoken_id, market_action_id};
    use ethabi::Token;
    use subgraph_substreams::testing::{address, address_token, block, event_log, uint_token};

    const REGISTRY: u8 = 0x9f;
    const COMPTROLLER: u8 = 0xc1;
    const VTOKEN: u8 = 0x0b;

    struct NoReads;

    impl PoolReader for NoReads {}

    fn isolated_pools() -> IsolatedPools<NoReads> {
        IsolatedPools::new(Params { pool_registry: address(REGISTRY) }, NoReads)
    }

    fn pool_registered() -> Log {
        event_log(
            &address(REGISTRY),
            "PoolRegistered(address,(string,address,address,uint256,uint256))",
            vec![address_token(&address(COMPTROLLER))],
            vec![Token::Tuple(vec![
                Token::String("Stablecoins".to_string()),
                address_token(&address(0xaa)),
                address_token(&address(COMPTROLLER)),
                uint_token("29945000"),
                uint_token("1688000000"),
            ])],
        )
    }

    #[test]
    fn test_from_params() {
        let subgraph =
            IsolatedPools::from_params(&format!("pool_registry=0x{}", hex::encode(address(REGISTRY))))
                .unwrap();
        assert_eq!(subgraph.params.pool_registry, address(REGISTRY));
    }

    #[test]
    fn test_block_replay() {
        let subgraph = isolated_pools();
        let mut store = MemoryStore::new();

        let logs = vec![
            // comptroller events before registration are not routed
            event_log(
                &address(COMPTROLLER),
                "NewCloseFactor(uint256,uint256)",
                vec![],
                vec![uint_token("0"), uint_token("1")],
            ),
            pool_registered(),
            event_log(
                &address(REGISTRY),
                "PoolMetadataUpdated(address,(string,string,string),(string,string,string))",
                vec![address_token(&address(COMPTROLLER))],
                vec![
                    Token::Tuple(vec![
                        Token::String(String::new()),
                        Token::String(String::new()),
                        Token::String(String::new()),
                    ]),
                    Token::Tuple(vec![
                        Token::String("Stablecoins".to_string()),
                        Token::String("https://venus.io/stable.svg".to_string()),
                        Token::String("Stable pool".to_string()),
                    ]),
                ],
            ),
            event_log(
                &address(COMPTROLLER),
                "MarketSupported(address)",
                vec![],
                vec![address_token(&address(VTOKEN))],
            ),
            event_log(
                &address(REGISTRY),
                "MarketAdded(address,address)",
                vec![address_token(&address(COMPTROLLER)), address_token(&address(VTOKEN))],
                vec![],
            ),
            event_log(
                &address(COMPTROLLER),
                "NewCloseFactor(uint256,uint256)",
                vec![],
                vec![uint_token("0"), uint_token("500000000000000000")],
            ),
            event_log(
                &address(COMPTROLLER),
                "ActionPausedMarket(address,uint8,bool)",
                vec![],
                vec![address_token(&address(VTOKEN)), uint_token("1"), Token::Bool(true)],
            ),
            event_log(
                &address(VTOKEN),
                "Mint(address,uint256,uint256,uint256)",
                vec![address_token(&address(1))],
                vec![uint_token("1000"), uint_token("50"), uint_token("50")],
            ),
        ];
        let report = process_block(&subgraph, &mut store, &block(3, logs));

        assert_eq!(report, BlockReport { block_number: 3, handled: 7, failed: 0 });

        let pool: Pool = load(&store, &ids::address_id(&address(COMPTROLLER))).unwrap();
        assert_eq!(pool.name, "Stablecoins");
        assert_eq!(pool.creator, ids::address_id(&address(0xaa)));
        assert_eq!(pool.block_posted, 29945000);
        assert_eq!(pool.logo_url, "https://venus.io/stable.svg");
        assert_eq!(pool.close_factor_mantissa, "500000000000000000");

        let market: Market = load(&store, &ids::address_id(&address(VTOKEN))).unwrap();
        assert!(market.is_listed);
        assert_eq!(market.pool, pool.id);
        assert_eq!(market.supplier_count, 1);
        assert_eq!(store.count::<Market>(), 1);

        let position: AccountVToken =
            load(&store, &account_vtoken_id(&address(VTOKEN), &address(1))).unwrap();
        assert_eq!(position.v_token_balance_mantissa, "50");

        let action: MarketAction = load(&store, &market_action_id(&address(VTOKEN), 1)).unwrap();
        assert!(action.pause_state);

        let snapshot = subgraph.snapshot(&store).unwrap();
        assert_eq!(snapshot["Pool"][&pool.id]["name"], "Stablecoins");
    }

    #[test]
    fn test_market_added_for_unknown_pool_fails() {
        let subgraph = isolated_pools();
        let mut store = MemoryStore::new();

        let logs = vec![event_log(
            &address(REGISTRY),
            "MarketAdded(address,address)",
            vec![address_token(&address(COMPTROLLER)), address_token(&address(VTOKEN))],
            vec![],
        )];
        let report = process_block(&subgraph, &mut store, &block(1, logs));

        assert_eq!(report.failed, 1);
        assert!(store.is_empty());
    }
}
