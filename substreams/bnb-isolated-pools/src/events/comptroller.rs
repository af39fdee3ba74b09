use subgraph_substreams::{ids, prelude::*};

use crate::{
    abi::comptroller::events::{
        ActionPausedMarket, MarketEntered, MarketExited, MarketSupported, MarketUnlisted,
        NewBorrowCap, NewCloseFactor, NewCollateralFactor, NewLiquidationIncentive,
        NewLiquidationThreshold, NewMinLiquidatableCollateral, NewPriceOracle, NewSupplyCap,
    },
    entities::{
        load_or_create_market, load_position, market_action_id, new_market_action, touch_account,
    },
    pb::subgraph::isolated_pools::v1::{Market, MarketAction, Pool},
    reader::PoolReader,
};

fn update_pool<S, F>(store: &mut S, ctx: &EventContext, mutate: F) -> Result<(), HandlerError>
where
    S: EntityStore,
    F: FnOnce(&mut Pool),
{
    update::<Pool, _, _>(store, &ctx.address_id(), |pool| {
        mutate(pool);
        Ok(())
    })?;
    Ok(())
}

fn update_market<S, F>(store: &mut S, vtoken: &[u8], mutate: F) -> Result<(), HandlerError>
where
    S: EntityStore,
    F: FnOnce(&mut Market),
{
    update::<Market, _, _>(store, &ids::address_id(vtoken), |market| {
        mutate(market);
        Ok(())
    })?;
    Ok(())
}

pub fn handle_market_supported<S: EntityStore, R: PoolReader>(
    store: &mut S,
    reader: &R,
    ctx: &EventContext,
    event: &MarketSupported,
) -> Result<(), HandlerError> {
    let mut market = load_or_create_market(store, reader, &ctx.address, &event.v_token)?;
    market.is_listed = true;
    market.block_timestamp = ctx.block_timestamp;
    store.save(&market);
    Ok(())
}

pub fn handle_market_unlisted<S: EntityStore>(
    store: &mut S,
    event: &MarketUnlisted,
) -> Result<(), HandlerError> {
    update_market(store, &event.v_token, |market| market.is_listed = false)
}

fn set_entered<S: EntityStore>(
    store: &mut S,
    market: &[u8],
    account: &[u8],
    entered: bool,
) -> Result<(), HandlerError> {
    load::<Market, _>(store, &ids::address_id(market))?;
    touch_account(store, account)?;

    let mut position = load_position(store, market, account)?;
    position.entered_market = entered;
    store.save(&position);
    Ok(())
}

pub fn handle_market_entered<S: EntityStore>(
    store: &mut S,
    event: &MarketEntered,
) -> Result<(), HandlerError> {
    set_entered(store, &event.v_token, &event.account, true)
}

pub fn handle_market_exited<S: EntityStore>(
    store: &mut S,
    event: &MarketExited,
) -> Result<(), HandlerError> {
    set_entered(store, &event.v_token, &event.account, false)
}

pub fn handle_new_close_factor<S: EntityStore>(
    store: &mut S,
    ctx: &EventContext,
    event: &NewCloseFactor,
) -> Result<(), HandlerError> {
    update_pool(store, ctx, |pool| {
        pool.close_factor_mantissa = event
            .new_close_factor_mantissa
            .to_string()
    })
}

pub fn handle_new_liquidation_incentive<S: EntityStore>(
    store: &mut S,
    ctx: &EventContext,
    event: &NewLiquidationIncentive,
) -> Result<(), HandlerError> {
    update_pool(store, ctx, |pool| {
        pool.liquidation_incentive_mantissa = event
            .new_liquidation_incentive_mantissa
            .to_string()
    })
}

pub fn handle_new_price_oracle<S: EntityStore>(
    store: &mut S,
    ctx: &EventContext,
    event: &NewPriceOracle,
) -> Result<(), HandlerError> {
    update_pool(store, ctx, |pool| pool.price_oracle = ids::address_id(&event.new_price_oracle))
}

pub fn handle_new_min_liquidatable_collateral<S: EntityStore>(
    store: &mut S,
    ctx: &EventContext,
    event: &NewMinLiquidatableCollateral,
) -> Result<(), HandlerError> {
    update_pool(store, ctx, |pool| {
        pool.min_liquidatable_collateral_mantissa = event
            .new_min_liquidatable_collateral
            .to_string()
    })
}

pub fn handle_new_collateral_factor<S: EntityStore>(
    store: &mut S,
    event: &NewCollateralFactor,
) -> Result<(), HandlerError> {
    update_market(store, &event.v_token, |market| {
        market.collateral_factor_mantissa = event
            .new_collateral_factor_mantissa
            .to_string()
    })
}

pub fn handle_new_liquidation_threshold<S: EntityStore>(
    store: &mut S,
    event: &NewLiquidationThreshold,
) -> Result<(), HandlerError> {
    update_market(store, &event.v_token, |market| {
        market.liquidation_threshold_mantissa = event
            .new_liquidation_threshold_mantissa
            .to_string()
    })
}

pub fn handle_new_borrow_cap<S: EntityStore>(
    store: &mut S,
    event: &NewBorrowCap,
) -> Result<(), HandlerError> {
    update_market(store, &event.v_token, |market| {
        market.borrow_cap_mantissa = event.new_borrow_cap.to_string()
    })
}

pub fn handle_new_supply_cap<S: EntityStore>(
    store: &mut S,
    event: &NewSupplyCap,
) -> Result<(), HandlerError> {
    update_market(store, &event.v_token, |market| {
        market.supply_cap_mantissa = event.new_supply_cap.to_string()
    })
}

pub fn handle_action_paused_market<S: EntityStore>(
    store: &mut S,
    event: &ActionPausedMarket,
) -> Result<(), HandlerError> {
    let action = event.action.to_u64() as u8;
    let mut market_action = get_or_create::<MarketAction, _, _>(
        store,
        &market_action_id(&event.v_token, action),
        |_| new_market_action(&event.v_token, action),
    )?
    .entity;
    market_action.pause_state = event.pause_state;
    store.save(&market_action);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        entities::{account_vtoken_id, new_pool},
        pb::subgraph::isolated_pools::v1::AccountVToken,
    };
    use subgraph_substreams::testing::{address, big, event_context};

    const POOL: u8 = 0xc1;
    const MARKET: u8 = 0x0b;

    struct Reverts;

    impl PoolReader for Reverts {}

    fn ctx() -> EventContext {
        event_context(&address(POOL), 1)
    }

    fn registered_pool() -> MemoryStore {
        let mut store = MemoryStore::new();
        store.save(&new_pool(&address(POOL), &Reverts));
        handle_market_supported(&mut store, &Reverts, &ctx(), &MarketSupported { v_token: address(MARKET) })
            .unwrap();
        store
    }

    fn pool(store: &MemoryStore) -> Pool {
        load(store, &ids::address_id(&address(POOL))).unwrap()
    }

    fn market(store: &MemoryStore) -> Market {
        load(store, &ids::address_id(&address(MARKET))).unwrap()
    }

    #[test]
    fn test_market_supported_then_unlisted() {
        let mut store = registered_pool();
        let supported = market(&store);
        assert!(supported.is_listed);
        assert_eq!(supported.pool, ids::address_id(&address(POOL)));

        handle_market_unlisted(&mut store, &MarketUnlisted { v_token: address(MARKET) }).unwrap();

        let unlisted = market(&store);
        assert!(!unlisted.is_listed);
        assert_eq!(unlisted.pool, supported.pool);
        assert_eq!(store.count::<Market>(), 1);
    }

    #[test]
    fn test_unlisting_unknown_market_is_missing_entity() {
        let mut store = MemoryStore::new();
        let err = handle_market_unlisted(&mut store, &MarketUnlisted { v_token: address(MARKET) }).unwrap_err();
        assert!(matches!(err, HandlerError::MissingEntity { entity: "Market", .. }));
    }

    #[test]
    fn test_market_exited_clears_membership() {
        let mut store = registered_pool();
        let position_id = account_vtoken_id(&address(MARKET), &address(1));

        handle_market_entered(&mut store, &MarketEntered { v_token: address(MARKET), account: address(1) })
            .unwrap();
        assert!(load::<AccountVToken, _>(&store, &position_id).unwrap().entered_market);

        handle_market_exited(&mut store, &MarketExited { v_token: address(MARKET), account: address(1) })
            .unwrap();
        assert!(!load::<AccountVToken, _>(&store, &position_id).unwrap().entered_market);
    }

    #[test]
    fn test_market_risk_parameters() {
        let mut store = registered_pool();
        let collateral = NewCollateralFactor {
            v_token: address(MARKET),
            old_collateral_factor_mantissa: big("0"),
            new_collateral_factor_mantissa: big("700000000000000000"),
        };
        let threshold = NewLiquidationThreshold {
            v_token: address(MARKET),
            old_liquidation_threshold_mantissa: big("0"),
            new_liquidation_threshold_mantissa: big("750000000000000000"),
        };
        handle_new_collateral_factor(&mut store, &collateral).unwrap();
        handle_new_liquidation_threshold(&mut store, &threshold).unwrap();
        handle_new_supply_cap(&mut store, &NewSupplyCap { v_token: address(MARKET), new_supply_cap: big("9000") })
            .unwrap();
        handle_new_borrow_cap(&mut store, &NewBorrowCap { v_token: address(MARKET), new_borrow_cap: big("8000") })
            .unwrap();

        let market = market(&store);
        assert_eq!(market.collateral_factor_mantissa, "700000000000000000");
        assert_eq!(market.liquidation_threshold_mantissa, "750000000000000000");
        assert_eq!(market.supply_cap_mantissa, "9000");
        assert_eq!(market.borrow_cap_mantissa, "8000");
    }

    #[test]
    fn test_pool_parameters() {
        let mut store = registered_pool();
        assert_eq!(pool(&store).price_oracle, ids::address_id(&ids::NULL_ADDRESS));

        let oracle = NewPriceOracle { old_price_oracle: ids::NULL_ADDRESS.to_vec(), new_price_oracle: address(0x0e) };
        let collateral = NewMinLiquidatableCollateral {
            old_min_liquidatable_collateral: big("0"),
            new_min_liquidatable_collateral: big("100000000000000000000"),
        };
        let close = NewCloseFactor {
            old_close_factor_mantissa: big("0"),
            new_close_factor_mantissa: big("500000000000000000"),
        };
        let incentive = NewLiquidationIncentive {
            old_liquidation_incentive_mantissa: big("0"),
            new_liquidation_incentive_mantissa: big("1100000000000000000"),
        };
        handle_new_price_oracle(&mut store, &ctx(), &oracle).unwrap();
        handle_new_min_liquidatable_collateral(&mut store, &ctx(), &collateral).unwrap();
        handle_new_close_factor(&mut store, &ctx(), &close).unwrap();
        handle_new_liquidation_incentive(&mut store, &ctx(), &incentive).unwrap();

        let pool = pool(&store);
        assert_eq!(pool.price_oracle, ids::address_id(&address(0x0e)));
        assert_eq!(pool.min_liquidatable_collateral_mantissa, "100000000000000000000");
        assert_eq!(pool.close_factor_mantissa, "500000000000000000");
        assert_eq!(pool.liquidation_incentive_mantissa, "1100000000000000000");
    }

    #[test]
    fn test_pool_parameter_from_unregistered_pool_is_missing_entity() {
        let mut store = MemoryStore::new();
        let collateral = NewMinLiquidatableCollateral {
            old_min_liquidatable_collateral: big("0"),
            new_min_liquidatable_collateral: big("1"),
        };
        let err = handle_new_min_liquidatable_collateral(&mut store, &ctx(), &collateral).unwrap_err();
        assert!(matches!(err, HandlerError::MissingEntity { entity: "Pool", .. }));
        assert!(store.is_empty());
    }

    #[test]
    fn test_action_paused_market() {
        let mut store = registered_pool();
        let event = ActionPausedMarket { v_token: address(MARKET), action: big("7"), pause_state: true };
        handle_action_paused_market(&mut store, &event).unwrap();

        let action: MarketAction = load(&store, &market_action_id(&address(MARKET), 7)).unwrap();
        assert!(action.pause_state);
        assert_eq!(action.market, ids::address_id(&address(MARKET)));
    }
}
