use substreams::scalar::BigInt;
use subgraph_substreams::{
    ids, mantissa,
    prelude::*,
    reverted::{address_or_not_available, int_or_not_available},
};

use crate::{
    pb::subgraph::isolated_pools::v1::{Account, AccountVToken, Market, MarketAction, Pool},
    reader::PoolReader,
};

subgraph_substreams::entity!(
    Pool => "Pool",
    Market => "Market",
    Account => "Account",
    AccountVToken => "AccountVToken",
    MarketAction => "MarketAction",
);

pub fn new_pool<R: PoolReader>(comptroller: &[u8], reader: &R) -> Pool {
    Pool {
        id: ids::address_id(comptroller),
        name: String::new(),
        creator: ids::address_id(&ids::NULL_ADDRESS),
        block_posted: 0,
        timestamp_posted: 0,
        category: String::new(),
        logo_url: String::new(),
        description: String::new(),
        price_oracle: ids::address_id(&address_or_not_available(reader.oracle(comptroller))),
        close_factor_mantissa: mantissa::zero(),
        liquidation_incentive_mantissa: mantissa::zero(),
        min_liquidatable_collateral_mantissa: mantissa::zero(),
    }
}

/// Builds a market of `pool`, reading its token metadata from the chain.
pub fn new_market<R: PoolReader>(pool: &[u8], vtoken: &[u8], reader: &R) -> Market {
    let underlying = address_or_not_available(reader.underlying(vtoken));

    Market {
        id: ids::address_id(vtoken),
        pool: ids::address_id(pool),
        name: reader.name(vtoken).unwrap_or_default(),
        symbol: reader.symbol(vtoken).unwrap_or_default(),
        decimals: decimals(reader.decimals(vtoken)),
        underlying_address: ids::address_id(&underlying),
        underlying_name: reader.name(&underlying).unwrap_or_default(),
        underlying_symbol: reader.symbol(&underlying).unwrap_or_default(),
        underlying_decimals: decimals(reader.decimals(&underlying)),
        is_listed: false,
        collateral_factor_mantissa: mantissa::zero(),
        liquidation_threshold_mantissa: mantissa::zero(),
        reserve_factor_mantissa: int_or_not_available(reader.reserve_factor(vtoken)).to_string(),
        interest_rate_model_address: ids::address_id(&address_or_not_available(
            reader.interest_rate_model(vtoken),
        )),
        exchange_rate_mantissa: int_or_not_available(reader.exchange_rate(vtoken)).to_string(),
        supply_rate_mantissa: mantissa::zero(),
        borrow_rate_mantissa: mantissa::zero(),
        cash_mantissa: mantissa::zero(),
        borrow_index_mantissa: mantissa::zero(),
        total_borrows_mantissa: mantissa::zero(),
        reserves_mantissa: mantissa::zero(),
        bad_debt_mantissa: mantissa::zero(),
        underlying_price_mantissa: mantissa::zero(),
        borrow_cap_mantissa: mantissa::zero(),
        supply_cap_mantissa: mantissa::zero(),
        accrual_block_number: 0,
        block_timestamp: 0,
        supplier_count: 0,
        borrower_count: 0,
    }
}

fn decimals(value: Option<BigInt>) -> i32 {
    value.map_or(-1, |d| d.to_i32())
}

pub fn new_account(id: &str) -> Account {
    Account { id: id.to_string(), count_liquidated: 0, count_liquidator: 0, has_borrowed: false }
}

pub fn account_vtoken_id(market: &[u8], account: &[u8]) -> String {
    ids::composite_id(&[market, account])
}

pub fn new_account_vtoken(market: &[u8], account: &[u8]) -> AccountVToken {
    AccountVToken {
        id: account_vtoken_id(market, account),
        market: ids::address_id(market),
        account: ids::address_id(account),
        entered_market: false,
        v_token_balance_mantissa: mantissa::zero(),
        total_underlying_supplied_mantissa: mantissa::zero(),
        total_underlying_redeemed_mantissa: mantissa::zero(),
        stored_borrow_balance_mantissa: mantissa::zero(),
        borrow_index_mantissa: mantissa::zero(),
        total_underlying_borrowed_mantissa: mantissa::zero(),
        total_underlying_repaid_mantissa: mantissa::zero(),
        bad_debt_mantissa: mantissa::zero(),
        accrual_block_number: 0,
    }
}

pub fn market_action_id(market: &[u8], action: u8) -> String {
    ids::composite_id(&[market, &[action]])
}

pub fn new_market_action(market: &[u8], action: u8) -> MarketAction {
    MarketAction {
        id: market_action_id(market, action),
        market: ids::address_id(market),
        action: action as i32,
        pause_state: false,
    }
}

pub fn touch_account<S: EntityStore>(store: &mut S, account: &[u8]) -> Result<Account, HandlerError> {
    let loaded = get_or_create(store, &ids::address_id(account), new_account)?;
    if loaded.created {
        store.save(&loaded.entity);
    }
    Ok(loaded.entity)
}

pub fn load_position<S: EntityStore>(
    store: &S,
    market: &[u8],
    account: &[u8],
) -> Result<AccountVToken, HandlerError> {
    Ok(get_or_create(store, &account_vtoken_id(market, account), |_| {
        new_account_vtoken(market, account)
    })?
    .entity)
}

/// Loads the market of `vtoken`, creating it under `pool` on first sight.
pub fn load_or_create_market<S: EntityStore, R: PoolReader>(
    store: &S,
    reader: &R,
    pool: &[u8],
    vtoken: &[u8],
) -> Result<Market, HandlerError> {
    Ok(get_or_create(store, &ids::address_id(vtoken), |_| new_market(pool, vtoken, reader))?.entity)
}
