use subgraph_substreams::{ids, prelude::*};

use crate::{
    abi::pool_registry::events::{MarketAdded, PoolMetadataUpdated, PoolNameSet, PoolRegistered},
    entities::{load_or_create_market, new_pool},
    pb::subgraph::isolated_pools::v1::Pool,
    reader::PoolReader,
};

pub fn handle_pool_registered<S: EntityStore, R: PoolReader>(
    store: &mut S,
    reader: &R,
    event: &PoolRegistered,
) -> Result<(), HandlerError> {
    let (name, creator, _comptroller, block_posted, timestamp_posted) = &event.pool;

    let mut pool = get_or_create(store, &ids::address_id(&event.comptroller), |_| {
        new_pool(&event.comptroller, reader)
    })?
    .entity;
    pool.name = name.clone();
    pool.creator = ids::address_id(creator);
    pool.block_posted = block_posted.to_u64();
    pool.timestamp_posted = timestamp_posted.to_u64();
    store.save(&pool);
    Ok(())
}

pub fn handle_pool_name_set<S: EntityStore>(
    store: &mut S,
    event: &PoolNameSet,
) -> Result<(), HandlerError> {
    update::<Pool, _, _>(store, &ids::address_id(&event.comptroller), |pool| {
        pool.name = event.new_name.clone();
        Ok(())
    })?;
    Ok(())
}

pub fn handle_pool_metadata_updated<S: EntityStore>(
    store: &mut S,
    event: &PoolMetadataUpdated,
) -> Result<(), HandlerError> {
    let (category, logo_url, description) = &event.new_metadata;

    update::<Pool, _, _>(store, &ids::address_id(&event.comptroller), |pool| {
        pool.category = category.clone();
        pool.logo_url = logo_url.clone();
        pool.description = description.clone();
        Ok(())
    })?;
    Ok(())
}

pub fn handle_market_added<S: EntityStore, R: PoolReader>(
    store: &mut S,
    reader: &R,
    event: &MarketAdded,
) -> Result<(), HandlerError> {
    load::<Pool, _>(store, &ids::address_id(&event.comptroller))?;

    let mut market = load_or_create_market(store, reader, &event.comptroller, &event.v_token_address)?;
    market.is_listed = true;
    store.save(&market);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pb::subgraph::isolated_pools::v1::Market;
    use subgraph_substreams::testing::{address, big};

    const POOL: u8 = 0xc1;
    const CREATOR: u8 = 0xcc;

    struct Reverts;

    impl PoolReader for Reverts {}

    fn registered() -> MemoryStore {
        let mut store = MemoryStore::new();
        let event = PoolRegistered {
            comptroller: address(POOL),
            pool: (
                "Pool DeFi".to_string(),
                address(CREATOR),
                address(POOL),
                big("29300100"),
                big("1687000000"),
            ),
        };
        handle_pool_registered(&mut store, &Reverts, &event).unwrap();
        store
    }

    fn pool(store: &MemoryStore) -> Pool {
        load(store, &ids::address_id(&address(POOL))).unwrap()
    }

    #[test]
    fn test_pool_registered() {
        let pool = pool(&registered());
        assert_eq!(pool.name, "Pool DeFi");
        assert_eq!(pool.creator, ids::address_id(&address(CREATOR)));
        assert_eq!(pool.block_posted, 29300100);
        assert_eq!(pool.timestamp_posted, 1687000000);
    }

    #[test]
    fn test_pool_name_set_keeps_other_fields() {
        let mut store = registered();
        let event = PoolNameSet {
            comptroller: address(POOL),
            old_name: "Pool DeFi".to_string(),
            new_name: "DeFi".to_string(),
        };
        handle_pool_name_set(&mut store, &event).unwrap();

        let pool = pool(&store);
        assert_eq!(pool.name, "DeFi");
        assert_eq!(pool.creator, ids::address_id(&address(CREATOR)));
        assert_eq!(pool.block_posted, 29300100);
    }

    #[test]
    fn test_pool_name_set_on_unknown_pool_is_missing_entity() {
        let mut store = MemoryStore::new();
        let event = PoolNameSet { comptroller: address(POOL), old_name: String::new(), new_name: "DeFi".to_string() };

        let err = handle_pool_name_set(&mut store, &event).unwrap_err();
        assert!(matches!(err, HandlerError::MissingEntity { entity: "Pool", .. }));
        assert!(store.is_empty());
    }

    #[test]
    fn test_pool_metadata_updated() {
        let mut store = registered();
        let event = PoolMetadataUpdated {
            comptroller: address(POOL),
            old_metadata: (String::new(), String::new(), String::new()),
            new_metadata: ("Stablecoins".to_string(), "https://logo".to_string(), "stable assets".to_string()),
        };
        handle_pool_metadata_updated(&mut store, &event).unwrap();

        let pool = pool(&store);
        assert_eq!(pool.category, "Stablecoins");
        assert_eq!(pool.logo_url, "https://logo");
        assert_eq!(pool.description, "stable assets");
        assert_eq!(pool.name, "Pool DeFi");
    }

    #[test]
    fn test_market_added_lists_market_under_pool() {
        let mut store = registered();
        let event = MarketAdded { comptroller: address(POOL), v_token_address: address(0x0b) };
        handle_market_added(&mut store, &Reverts, &event).unwrap();

        let market: Market = load(&store, &ids::address_id(&address(0x0b))).unwrap();
        assert!(market.is_listed);
        assert_eq!(market.pool, ids::address_id(&address(POOL)));

        let mut empty = MemoryStore::new();
        let err = handle_market_added(&mut empty, &Reverts, &event).unwrap_err();
        assert!(matches!(err, HandlerError::MissingEntity { entity: "Pool", .. }));
        assert_eq!(empty.count::<Market>(), 0);
    }
}
