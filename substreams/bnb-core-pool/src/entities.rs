use subgraph_substreams::{
    ids, mantissa,
    prelude::*,
    reverted::{address_or_not_available, int_or_not_available},
};

use crate::{
    pb::subgraph::core_pool::v1::{Account, AccountVToken, Comptroller, Market, MarketAction},
    reader::PoolReader,
};

subgraph_substreams::entity!(
    Comptroller => "Comptroller",
    Market => "Market",
    Account => "Account",
    AccountVToken => "AccountVToken",
    MarketAction => "MarketAction",
);

/// Id of the comptroller singleton.
pub const COMPTROLLER_ID: &str = "1";

pub const NATIVE_SYMBOL: &str = "BNB";
pub const NATIVE_NAME: &str = "BNB";
pub const NATIVE_DECIMALS: i32 = 18;

pub fn new_comptroller(id: &str) -> Comptroller {
    Comptroller {
        id: id.to_string(),
        price_oracle: ids::address_id(&ids::NULL_ADDRESS),
        close_factor_mantissa: mantissa::zero(),
        liquidation_incentive_mantissa: mantissa::zero(),
    }
}

/// Builds a market, reading its token metadata and current rates from the chain.
///
/// A market without an `underlying()` getter wraps the native asset.
pub fn new_market<R: PoolReader>(vtoken: &[u8], reader: &R) -> Market {
    let underlying = reader
        .underlying(vtoken)
        .filter(|address| !ids::is_null_address(address));

    let (underlying_address, underlying_name, underlying_symbol, underlying_decimals) =
        match underlying {
            Some(address) => (
                ids::address_id(&address),
                reader.name(&address).unwrap_or_default(),
                reader.symbol(&address).unwrap_or_default(),
                decimals(reader.decimals(&address)),
            ),
            None => (
                ids::address_id(&ids::NULL_ADDRESS),
                NATIVE_NAME.to_string(),
                NATIVE_SYMBOL.to_string(),
                NATIVE_DECIMALS,
            ),
        };

    Market {
        id: ids::address_id(vtoken),
        name: reader.name(vtoken).unwrap_or_default(),
        symbol: reader.symbol(vtoken).unwrap_or_default(),
        decimals: decimals(reader.decimals(vtoken)),
        underlying_address,
        underlying_name,
        underlying_symbol,
        underlying_decimals,
        is_listed: false,
        collateral_factor_mantissa: mantissa::zero(),
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
        total_supply_mantissa: mantissa::zero(),
        reserves_mantissa: mantissa::zero(),
        underlying_price_mantissa: mantissa::zero(),
        borrow_cap_mantissa: mantissa::zero(),
        supply_cap_mantissa: mantissa::zero(),
        accrual_block_number: 0,
        block_timestamp: 0,
        supplier_count: 0,
        borrower_count: 0,
    }
}

fn decimals(value: Option<substreams::scalar::BigInt>) -> i32 {
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

/// Makes sure the account record exists.
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

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use substreams::scalar::BigInt;

    struct TokenReader;

    impl PoolReader for TokenReader {
        fn name(&self, token: &[u8]) -> Option<String> {
            Some(if token == [0x0a; 20] { "Venus USDT" } else { "Tether USD" }.to_string())
        }

        fn symbol(&self, token: &[u8]) -> Option<String> {
            Some(if token == [0x0a; 20] { "vUSDT" } else { "USDT" }.to_string())
        }

        fn decimals(&self, token: &[u8]) -> Option<BigInt> {
            Some(BigInt::from(if token == [0x0a; 20] { 8u64 } else { 18u64 }))
        }

        fn underlying(&self, vtoken: &[u8]) -> Option<Vec<u8>> {
            (vtoken == [0x0a; 20]).then(|| vec![0x0b; 20])
        }

        fn exchange_rate(&self, _vtoken: &[u8]) -> Option<BigInt> {
            Some(BigInt::from_str("200000000000000000000000000").unwrap())
        }
    }

    #[test]
    fn test_new_market_reads_metadata() {
        let market = new_market(&[0x0a; 20], &TokenReader);
        assert_eq!(market.symbol, "vUSDT");
        assert_eq!(market.decimals, 8);
        assert_eq!(market.underlying_symbol, "USDT");
        assert_eq!(market.underlying_decimals, 18);
        assert_eq!(market.underlying_address, ids::to_hex(&[0x0b; 20]));
        assert_eq!(market.exchange_rate_mantissa, "200000000000000000000000000");
        // reverted reads fall back to sentinels
        assert_eq!(market.reserve_factor_mantissa, "-1");
        assert_eq!(market.interest_rate_model_address, ids::to_hex(&ids::NULL_ADDRESS));
        assert_eq!(market.total_supply_mantissa, "0");
    }

    #[test]
    fn test_new_market_without_underlying_is_native() {
        let market = new_market(&[0x0c; 20], &TokenReader);
        assert_eq!(market.underlying_symbol, NATIVE_SYMBOL);
        assert_eq!(market.underlying_name, NATIVE_NAME);
        assert_eq!(market.underlying_decimals, NATIVE_DECIMALS);
        assert_eq!(market.underlying_address, ids::to_hex(&ids::NULL_ADDRESS));
    }

    #[test]
    fn test_relationship_ids() {
        let market = [0x0a; 20];
        let account = [0x0b; 20];
        assert_eq!(account_vtoken_id(&market, &account), new_account_vtoken(&market, &account).id);
        assert_ne!(account_vtoken_id(&market, &account), account_vtoken_id(&account, &market));
        assert_eq!(market_action_id(&market, 2), format!("{}02", ids::to_hex(&market)));
    }
}
