use subgraph_substreams::{ids, prelude::*, reverted::address_or_not_available};

use crate::{
    abi::comptroller::events::{
        ActionPausedMarket, MarketEntered, MarketExited, MarketListed, NewBorrowCap,
        NewCloseFactor, NewCollateralFactor, NewLiquidationIncentive, NewPriceOracle,
        NewSupplyCap,
    },
    entities::{
        load_position, market_action_id, new_comptroller, new_market, new_market_action,
        touch_account, COMPTROLLER_ID,
    },
    pb::subgraph::core_pool::v1::{AccountVToken, Comptroller, Market, MarketAction},
    reader::PoolReader,
};

fn load_comptroller<S: EntityStore, R: PoolReader>(
    store: &S,
    reader: &R,
    ctx: &EventContext,
) -> Result<Comptroller, HandlerError> {
    Ok(get_or_create(store, COMPTROLLER_ID, |id| {
        let mut comptroller = new_comptroller(id);
        comptroller.price_oracle = ids::address_id(&address_or_not_available(reader.oracle(&ctx.address)));
        comptroller
    })?
    .entity)
}

pub fn handle_market_listed<S: EntityStore, R: PoolReader>(
    store: &mut S,
    reader: &R,
    ctx: &EventContext,
    event: &MarketListed,
) -> Result<(), HandlerError> {
    let comptroller = load_comptroller(store, reader, ctx)?;
    store.save(&comptroller);

    let mut market = get_or_create(store, &ids::address_id(&event.v_token), |_| {
        new_market(&event.v_token, reader)
    })?
    .entity;
    market.is_listed = true;
    market.block_timestamp = ctx.block_timestamp;
    store.save(&market);
    Ok(())
}

fn set_entered<S: EntityStore>(
    store: &mut S,
    market: &[u8],
    account: &[u8],
    entered: bool,
) -> Result<(), HandlerError> {
    // only listed markets can be entered
    load::<Market, _>(store, &ids::address_id(market))?;
    touch_account(store, account)?;

    let mut position: AccountVToken = load_position(store, market, account)?;
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

pub fn handle_new_collateral_factor<S: EntityStore>(
    store: &mut S,
    event: &NewCollateralFactor,
) -> Result<(), HandlerError> {
    update::<Market, _, _>(store, &ids::address_id(&event.v_token), |market| {
        market.collateral_factor_mantissa = event
            .new_collateral_factor_mantissa
            .to_string();
        Ok(())
    })?;
    Ok(())
}

pub fn handle_new_close_factor<S: EntityStore, R: PoolReader>(
    store: &mut S,
    reader: &R,
    ctx: &EventContext,
    event: &NewCloseFactor,
) -> Result<(), HandlerError> {
    let mut comptroller = load_comptroller(store, reader, ctx)?;
    comptroller.close_factor_mantissa = event
        .new_close_factor_mantissa
        .to_string();
    store.save(&comptroller);
    Ok(())
}

pub fn handle_new_liquidation_incentive<S: EntityStore, R: PoolReader>(
    store: &mut S,
    reader: &R,
    ctx: &EventContext,
    event: &NewLiquidationIncentive,
) -> Result<(), HandlerError> {
    let mut comptroller = load_comptroller(store, reader, ctx)?;
    comptroller.liquidation_incentive_mantissa = event
        .new_liquidation_incentive_mantissa
        .to_string();
    store.save(&comptroller);
    Ok(())
}

pub fn handle_new_price_oracle<S: EntityStore, R: PoolReader>(
    store: &mut S,
    reader: &R,
    ctx: &EventContext,
    event: &NewPriceOracle,
) -> Result<(), HandlerError> {
    let mut comptroller = load_comptroller(store, reader, ctx)?;
    comptroller.price_oracle = ids::address_id(&event.new_price_oracle);
    store.save(&comptroller);
    Ok(())
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

pub fn handle_new_borrow_cap<S: EntityStore>(
    store: &mut S,
    event: &NewBorrowCap,
) -> Result<(), HandlerError> {
    update::<Market, _, _>(store, &ids::address_id(&event.v_token), |market| {
        market.borrow_cap_mantissa = event.new_borrow_cap.to_string();
        Ok(())
    })?;
    Ok(())
}

pub fn handle_new_supply_cap<S: EntityStore>(
    store: &mut S,
    event: &NewSupplyCap,
) -> Result<(), HandlerError> {
    update::<Market, _, _>(store, &ids::address_id(&event.v_token), |market| {
        market.supply_cap_mantissa = event.new_supply_cap.to_string();
        Ok(())
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{entities::account_vtoken_id, pb::subgraph::core_pool::v1::Account};
    use subgraph_substreams::testing::{address, big, event_context};

    const COMPTROLLER: u8 = 0xc0;
    const MARKET: u8 = 0x0a;
    const ORACLE: u8 = 0x0f;

    struct Oracle(Option<Vec<u8>>);

    impl PoolReader for Oracle {
        fn oracle(&self, _comptroller: &[u8]) -> Option<Vec<u8>> {
            self.0.clone()
        }
    }

    fn ctx() -> EventContext {
        event_context(&address(COMPTROLLER), 1)
    }

    fn listed_market() -> MemoryStore {
        let mut store = MemoryStore::new();
        let event = MarketListed { v_token: address(MARKET) };
        handle_market_listed(&mut store, &Oracle(None), &ctx(), &event).unwrap();
        store
    }

    fn market(store: &MemoryStore) -> Market {
        load(store, &ids::address_id(&address(MARKET))).unwrap()
    }

    fn comptroller(store: &MemoryStore) -> Comptroller {
        load(store, COMPTROLLER_ID).unwrap()
    }

    fn entered(store: &MemoryStore, account: u8) -> bool {
        load::<AccountVToken, _>(store, &account_vtoken_id(&address(MARKET), &address(account)))
            .unwrap()
            .entered_market
    }

    #[test]
    fn test_market_listed_creates_comptroller_and_market() {
        let store = listed_market();

        let market = market(&store);
        assert!(market.is_listed);
        assert_eq!(market.collateral_factor_mantissa, "0");
        // native market, every metadata read reverted
        assert_eq!(market.underlying_symbol, "BNB");
        assert_eq!(market.decimals, -1);
        assert_eq!(comptroller(&store).price_oracle, ids::address_id(&ids::NULL_ADDRESS));
    }

    #[test]
    fn test_market_entered_then_exited_clears_membership() {
        let mut store = listed_market();
        let entered_event = MarketEntered { v_token: address(MARKET), account: address(1) };
        let exited_event = MarketExited { v_token: address(MARKET), account: address(1) };

        handle_market_entered(&mut store, &entered_event).unwrap();
        assert!(entered(&store, 1));
        assert!(store.has::<Account>(&ids::address_id(&address(1))));

        handle_market_exited(&mut store, &exited_event).unwrap();
        assert!(!entered(&store, 1));
        assert_eq!(store.count::<AccountVToken>(), 1);
    }

    #[test]
    fn test_entering_unlisted_market_is_missing_entity() {
        let mut store = MemoryStore::new();
        let event = MarketEntered { v_token: address(MARKET), account: address(1) };

        let err = handle_market_entered(&mut store, &event).unwrap_err();
        assert!(matches!(err, HandlerError::MissingEntity { entity: "Market", .. }));
        assert!(store.is_empty());
    }

    #[test]
    fn test_collateral_factor_and_caps() {
        let mut store = listed_market();
        let collateral = NewCollateralFactor {
            v_token: address(MARKET),
            old_collateral_factor_mantissa: big("0"),
            new_collateral_factor_mantissa: big("800000000000000000"),
        };
        handle_new_collateral_factor(&mut store, &collateral).unwrap();
        handle_new_supply_cap(&mut store, &NewSupplyCap { v_token: address(MARKET), new_supply_cap: big("5000") })
            .unwrap();
        handle_new_borrow_cap(&mut store, &NewBorrowCap { v_token: address(MARKET), new_borrow_cap: big("4000") })
            .unwrap();

        let market = market(&store);
        assert_eq!(market.collateral_factor_mantissa, "800000000000000000");
        assert_eq!(market.supply_cap_mantissa, "5000");
        assert_eq!(market.borrow_cap_mantissa, "4000");
    }

    #[test]
    fn test_cap_on_unknown_market_is_missing_entity() {
        let mut store = MemoryStore::new();
        let event = NewSupplyCap { v_token: address(MARKET), new_supply_cap: big("1") };

        let err = handle_new_supply_cap(&mut store, &event).unwrap_err();
        assert!(matches!(err, HandlerError::MissingEntity { entity: "Market", .. }));
    }

    #[test]
    fn test_price_oracle_and_comptroller_factors() {
        let mut store = MemoryStore::new();
        let reader = Oracle(Some(address(ORACLE)));

        let close = NewCloseFactor {
            old_close_factor_mantissa: big("0"),
            new_close_factor_mantissa: big("500000000000000000"),
        };
        handle_new_close_factor(&mut store, &reader, &ctx(), &close).unwrap();
        assert_eq!(comptroller(&store).price_oracle, ids::address_id(&address(ORACLE)));

        let oracle = NewPriceOracle { old_price_oracle: address(ORACLE), new_price_oracle: address(0x1f) };
        handle_new_price_oracle(&mut store, &reader, &ctx(), &oracle).unwrap();
        let incentive = NewLiquidationIncentive {
            old_liquidation_incentive_mantissa: big("0"),
            new_liquidation_incentive_mantissa: big("1100000000000000000"),
        };
        handle_new_liquidation_incentive(&mut store, &reader, &ctx(), &incentive).unwrap();

        let comptroller = comptroller(&store);
        assert_eq!(comptroller.id, COMPTROLLER_ID);
        assert_eq!(comptroller.price_oracle, ids::address_id(&address(0x1f)));
        assert_eq!(comptroller.close_factor_mantissa, "500000000000000000");
        assert_eq!(comptroller.liquidation_incentive_mantissa, "1100000000000000000");
        assert_eq!(store.count::<Comptroller>(), 1);
    }

    #[test]
    fn test_action_paused_market_toggles_one_record() {
        let mut store = listed_market();
        let mut event = ActionPausedMarket { v_token: address(MARKET), action: big("2"), pause_state: true };
        handle_action_paused_market(&mut store, &event).unwrap();
        event.pause_state = false;
        handle_action_paused_market(&mut store, &event).unwrap();

        let action: MarketAction = load(&store, &market_action_id(&address(MARKET), 2)).unwrap();
        assert_eq!(action.action, 2);
        assert!(!action.pause_state);
        assert_eq!(store.count::<MarketAction>(), 1);
    }
}
