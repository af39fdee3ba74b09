use substreams::scalar::BigInt;
use subgraph_substreams::{
    counters::track_non_zero,
    ids,
    mantissa,
    prelude::*,
    reverted::int_or_not_available,
};
use tracing::debug;

use crate::{
    abi::vtoken::events::{
        AccrueInterest, BadDebtIncreased, BadDebtRecovered, Borrow, HealBorrow, LiquidateBorrow,
        Mint, NewMarketInterestRateModel, NewReserveFactor, Redeem, RepayBorrow, ReservesAdded,
        SpreadReservesReduced, Transfer,
    },
    entities::{load_position, touch_account},
    pb::subgraph::isolated_pools::v1::{Account, Market, Pool},
    reader::PoolReader,
};

/// How a supply event changes the vToken balance of a position.
enum Balance<'a> {
    /// The balance reported by the event after it was applied.
    Set(&'a BigInt),
    /// A signed change to the stored balance.
    Delta(BigInt),
}

fn load_market<S: EntityStore>(store: &S, ctx: &EventContext) -> Result<Market, HandlerError> {
    load(store, &ctx.address_id())
}

fn negated(value: &BigInt) -> BigInt {
    BigInt::zero() - value.clone()
}

fn move_supply<S: EntityStore>(
    store: &mut S,
    market: &mut Market,
    ctx: &EventContext,
    account: &[u8],
    balance: Balance,
    supplied: &BigInt,
    redeemed: &BigInt,
) -> Result<(), HandlerError> {
    touch_account(store, account)?;
    let mut position = load_position(store, &ctx.address, account)?;

    let before = mantissa::parse("v_token_balance_mantissa", &position.v_token_balance_mantissa)?;
    let after = match balance {
        Balance::Set(value) => value.clone(),
        Balance::Delta(delta) => before.clone() + delta,
    };
    track_non_zero(&mut market.supplier_count, &before, &after);

    position.v_token_balance_mantissa = after.to_string();
    position.total_underlying_supplied_mantissa = mantissa::add(
        "total_underlying_supplied_mantissa",
        &position.total_underlying_supplied_mantissa,
        supplied,
    )?;
    position.total_underlying_redeemed_mantissa = mantissa::add(
        "total_underlying_redeemed_mantissa",
        &position.total_underlying_redeemed_mantissa,
        redeemed,
    )?;
    position.accrual_block_number = ctx.block_number;
    store.save(&position);
    Ok(())
}

fn set_borrow<S: EntityStore>(
    store: &mut S,
    market: &mut Market,
    ctx: &EventContext,
    borrower: &[u8],
    account_borrows: &BigInt,
    borrowed: &BigInt,
    repaid: &BigInt,
) -> Result<(), HandlerError> {
    touch_account(store, borrower)?;
    let mut position = load_position(store, &ctx.address, borrower)?;

    let before = mantissa::parse(
        "stored_borrow_balance_mantissa",
        &position.stored_borrow_balance_mantissa,
    )?;
    track_non_zero(&mut market.borrower_count, &before, account_borrows);

    position.stored_borrow_balance_mantissa = account_borrows.to_string();
    position.borrow_index_mantissa = market.borrow_index_mantissa.clone();
    position.total_underlying_borrowed_mantissa = mantissa::add(
        "total_underlying_borrowed_mantissa",
        &position.total_underlying_borrowed_mantissa,
        borrowed,
    )?;
    position.total_underlying_repaid_mantissa = mantissa::add(
        "total_underlying_repaid_mantissa",
        &position.total_underlying_repaid_mantissa,
        repaid,
    )?;
    position.accrual_block_number = ctx.block_number;
    store.save(&position);
    Ok(())
}

pub fn handle_mint<S: EntityStore>(
    store: &mut S,
    ctx: &EventContext,
    event: &Mint,
) -> Result<(), HandlerError> {
    let mut market = load_market(store, ctx)?;
    move_supply(
        store,
        &mut market,
        ctx,
        &event.minter,
        Balance::Set(&event.account_balance),
        &event.mint_amount,
        &BigInt::zero(),
    )?;
    store.save(&market);
    Ok(())
}

pub fn handle_redeem<S: EntityStore>(
    store: &mut S,
    ctx: &EventContext,
    event: &Redeem,
) -> Result<(), HandlerError> {
    let mut market = load_market(store, ctx)?;
    move_supply(
        store,
        &mut market,
        ctx,
        &event.redeemer,
        Balance::Set(&event.account_balance),
        &BigInt::zero(),
        &event.redeem_amount,
    )?;
    store.save(&market);
    Ok(())
}

pub fn handle_borrow<S: EntityStore>(
    store: &mut S,
    ctx: &EventContext,
    event: &Borrow,
) -> Result<(), HandlerError> {
    let mut market = load_market(store, ctx)?;
    set_borrow(
        store,
        &mut market,
        ctx,
        &event.borrower,
        &event.account_borrows,
        &event.borrow_amount,
        &BigInt::zero(),
    )?;
    market.total_borrows_mantissa = event.total_borrows.to_string();
    store.save(&market);

    update::<Account, _, _>(store, &ids::address_id(&event.borrower), |account| {
        account.has_borrowed = true;
        Ok(())
    })?;
    Ok(())
}

pub fn handle_repay_borrow<S: EntityStore>(
    store: &mut S,
    ctx: &EventContext,
    event: &RepayBorrow,
) -> Result<(), HandlerError> {
    let mut market = load_market(store, ctx)?;
    set_borrow(
        store,
        &mut market,
        ctx,
        &event.borrower,
        &event.account_borrows,
        &BigInt::zero(),
        &event.repay_amount,
    )?;
    market.total_borrows_mantissa = event.total_borrows.to_string();
    store.save(&market);
    Ok(())
}

/// Healing writes off whatever the borrower still owed after the payer's repayment.
pub fn handle_heal_borrow<S: EntityStore>(
    store: &mut S,
    ctx: &EventContext,
    event: &HealBorrow,
) -> Result<(), HandlerError> {
    let mut market = load_market(store, ctx)?;
    set_borrow(
        store,
        &mut market,
        ctx,
        &event.borrower,
        &BigInt::zero(),
        &BigInt::zero(),
        &event.repay_amount,
    )?;
    store.save(&market);
    Ok(())
}

pub fn handle_liquidate_borrow<S: EntityStore>(
    store: &mut S,
    event: &LiquidateBorrow,
) -> Result<(), HandlerError> {
    let mut borrower = touch_account(store, &event.borrower)?;
    borrower.count_liquidated += 1;
    store.save(&borrower);

    let mut liquidator = touch_account(store, &event.liquidator)?;
    liquidator.count_liquidator += 1;
    store.save(&liquidator);
    Ok(())
}

pub fn handle_bad_debt_increased<S: EntityStore>(
    store: &mut S,
    ctx: &EventContext,
    event: &BadDebtIncreased,
) -> Result<(), HandlerError> {
    let mut market = load_market(store, ctx)?;
    market.bad_debt_mantissa = event.bad_debt_new.to_string();
    store.save(&market);

    touch_account(store, &event.borrower)?;
    let mut position = load_position(store, &ctx.address, &event.borrower)?;
    position.bad_debt_mantissa =
        mantissa::add("bad_debt_mantissa", &position.bad_debt_mantissa, &event.bad_debt_delta)?;
    position.accrual_block_number = ctx.block_number;
    store.save(&position);
    Ok(())
}

pub fn handle_bad_debt_recovered<S: EntityStore>(
    store: &mut S,
    ctx: &EventContext,
    event: &BadDebtRecovered,
) -> Result<(), HandlerError> {
    update::<Market, _, _>(store, &ctx.address_id(), |market| {
        market.bad_debt_mantissa = event.bad_debt_new.to_string();
        Ok(())
    })?;
    Ok(())
}

/// The price comes from the oracle configured on the market's pool.
pub fn handle_accrue_interest<S: EntityStore, R: PoolReader>(
    store: &mut S,
    reader: &R,
    ctx: &EventContext,
    event: &AccrueInterest,
) -> Result<(), HandlerError> {
    let market = load_market(store, ctx)?;
    let oracle = store
        .get::<Pool>(&market.pool)?
        .map(|pool| pool.price_oracle)
        .and_then(|oracle| ids::from_hex(&oracle).ok());

    update::<Market, _, _>(store, &ctx.address_id(), |market| {
        market.borrow_index_mantissa = event.borrow_index.to_string();
        market.total_borrows_mantissa = event.total_borrows.to_string();
        market.accrual_block_number = ctx.block_number;
        market.block_timestamp = ctx.block_timestamp;

        market.exchange_rate_mantissa = int_or_not_available(reader.exchange_rate(&ctx.address)).to_string();
        market.supply_rate_mantissa = int_or_not_available(reader.supply_rate(&ctx.address)).to_string();
        market.borrow_rate_mantissa = int_or_not_available(reader.borrow_rate(&ctx.address)).to_string();
        market.cash_mantissa = int_or_not_available(reader.cash(&ctx.address)).to_string();
        market.reserves_mantissa = int_or_not_available(reader.total_reserves(&ctx.address)).to_string();
        market.underlying_price_mantissa = int_or_not_available(
            oracle
                .as_deref()
                .and_then(|oracle| reader.underlying_price(oracle, &ctx.address)),
        )
        .to_string();
        Ok(())
    })?;
    Ok(())
}

pub fn handle_new_reserve_factor<S: EntityStore>(
    store: &mut S,
    ctx: &EventContext,
    event: &NewReserveFactor,
) -> Result<(), HandlerError> {
    update::<Market, _, _>(store, &ctx.address_id(), |market| {
        market.reserve_factor_mantissa = event
            .new_reserve_factor_mantissa
            .to_string();
        Ok(())
    })?;
    Ok(())
}

pub fn handle_new_market_interest_rate_model<S: EntityStore>(
    store: &mut S,
    ctx: &EventContext,
    event: &NewMarketInterestRateModel,
) -> Result<(), HandlerError> {
    update::<Market, _, _>(store, &ctx.address_id(), |market| {
        market.interest_rate_model_address =
            ids::address_id(&event.new_interest_rate_model);
        Ok(())
    })?;
    Ok(())
}

pub fn handle_reserves_added<S: EntityStore>(
    store: &mut S,
    ctx: &EventContext,
    event: &ReservesAdded,
) -> Result<(), HandlerError> {
    update::<Market, _, _>(store, &ctx.address_id(), |market| {
        market.reserves_mantissa = event.new_total_reserves.to_string();
        Ok(())
    })?;
    Ok(())
}

pub fn handle_spread_reserves_reduced<S: EntityStore>(
    store: &mut S,
    ctx: &EventContext,
    event: &SpreadReservesReduced,
) -> Result<(), HandlerError> {
    update::<Market, _, _>(store, &ctx.address_id(), |market| {
        market.reserves_mantissa = event.new_total_reserves.to_string();
        Ok(())
    })?;
    Ok(())
}

/// Moves vTokens between two positions, skipping the legs of a mint or redeem.
pub fn handle_transfer<S: EntityStore, R: PoolReader>(
    store: &mut S,
    reader: &R,
    ctx: &EventContext,
    event: &Transfer,
) -> Result<(), HandlerError> {
    if event.from == ctx.address || event.to == ctx.address {
        debug!(market = %ctx.address_id(), "skipping mint/redeem transfer leg");
        return Ok(());
    }

    let mut market = load_market(store, ctx)?;
    let exchange_rate = match reader.exchange_rate(&ctx.address) {
        Some(rate) => rate,
        None => mantissa::parse("exchange_rate_mantissa", &market.exchange_rate_mantissa)?,
    };
    let underlying = mantissa::shares_to_underlying(&event.amount, &exchange_rate);

    move_supply(
        store,
        &mut market,
        ctx,
        &event.from,
        Balance::Delta(negated(&event.amount)),
        &BigInt::zero(),
        &underlying,
    )?;
    move_supply(
        store,
        &mut market,
        ctx,
        &event.to,
        Balance::Delta(event.amount.clone()),
        &underlying,
        &BigInt::zero(),
    )?;
    store.save(&market);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        entities::{account_vtoken_id, new_market, new_pool},
        pb::subgraph::isolated_pools::v1::AccountVToken,
    };
    use subgraph_substreams::testing::{address, big, event_context};

    const POOL: u8 = 0xc1;
    const MARKET: u8 = 0x0b;
    const ORACLE: u8 = 0x0e;

    #[derive(Default)]
    struct Reads {
        rate: Option<BigInt>,
        price: Option<BigInt>,
    }

    impl PoolReader for Reads {
        fn exchange_rate(&self, _vtoken: &[u8]) -> Option<BigInt> {
            self.rate.clone()
        }

        fn underlying_price(&self, oracle: &[u8], _vtoken: &[u8]) -> Option<BigInt> {
            if oracle == address(ORACLE).as_slice() {
                self.price.clone()
            } else {
                None
            }
        }
    }

    fn listed_market() -> MemoryStore {
        let mut store = MemoryStore::new();
        let mut pool = new_pool(&address(POOL), &Reads::default());
        pool.price_oracle = ids::address_id(&address(ORACLE));
        store.save(&pool);

        let mut market = new_market(&address(POOL), &address(MARKET), &Reads::default());
        market.is_listed = true;
        market.exchange_rate_mantissa = "200000000000000000000000000".to_string();
        store.save(&market);
        store
    }

    fn ctx() -> EventContext {
        event_context(&address(MARKET), 1)
    }

    fn market(store: &MemoryStore) -> Market {
        load(store, &ids::address_id(&address(MARKET))).unwrap()
    }

    fn position(store: &MemoryStore, account: u8) -> AccountVToken {
        load(store, &account_vtoken_id(&address(MARKET), &address(account))).unwrap()
    }

    fn mint(account: u8, amount: &str, balance: &str) -> Mint {
        Mint {
            minter: address(account),
            mint_amount: big(amount),
            mint_tokens: big(balance),
            account_balance: big(balance),
        }
    }

    #[test]
    fn test_mint_and_redeem_take_reported_balance() {
        let mut store = listed_market();
        handle_mint(&mut store, &ctx(), &mint(1, "1000", "50")).unwrap();
        handle_mint(&mut store, &ctx(), &mint(1, "1000", "100")).unwrap();
        assert_eq!(position(&store, 1).v_token_balance_mantissa, "100");
        assert_eq!(position(&store, 1).total_underlying_supplied_mantissa, "2000");
        assert_eq!(market(&store).supplier_count, 1);

        let redeem = Redeem {
            redeemer: address(1),
            redeem_amount: big("2000"),
            redeem_tokens: big("100"),
            account_balance: BigInt::zero(),
        };
        handle_redeem(&mut store, &ctx(), &redeem).unwrap();

        let position = position(&store, 1);
        assert_eq!(position.v_token_balance_mantissa, "0");
        assert_eq!(position.total_underlying_redeemed_mantissa, "2000");
        assert_eq!(market(&store).supplier_count, 0);
    }

    #[test]
    fn test_heal_borrow_clears_position() {
        let mut store = listed_market();
        let borrow = Borrow {
            borrower: address(1),
            borrow_amount: big("300"),
            account_borrows: big("300"),
            total_borrows: big("300"),
        };
        handle_borrow(&mut store, &ctx(), &borrow).unwrap();
        assert_eq!(market(&store).borrower_count, 1);

        let heal = HealBorrow { payer: address(2), borrower: address(1), repay_amount: big("120") };
        handle_heal_borrow(&mut store, &ctx(), &heal).unwrap();

        let position = position(&store, 1);
        assert_eq!(position.stored_borrow_balance_mantissa, "0");
        assert_eq!(position.total_underlying_repaid_mantissa, "120");
        assert_eq!(market(&store).borrower_count, 0);
    }

    #[test]
    fn test_bad_debt_accumulates_on_position() {
        let mut store = listed_market();
        let increase = |delta: &str, old: &str, new: &str| BadDebtIncreased {
            borrower: address(1),
            bad_debt_delta: big(delta),
            bad_debt_old: big(old),
            bad_debt_new: big(new),
        };
        handle_bad_debt_increased(&mut store, &ctx(), &increase("40", "0", "40")).unwrap();
        handle_bad_debt_increased(&mut store, &ctx(), &increase("60", "40", "100")).unwrap();

        assert_eq!(position(&store, 1).bad_debt_mantissa, "100");
        assert_eq!(market(&store).bad_debt_mantissa, "100");

        let recovered = BadDebtRecovered { bad_debt_old: big("100"), bad_debt_new: big("25") };
        handle_bad_debt_recovered(&mut store, &ctx(), &recovered).unwrap();
        assert_eq!(market(&store).bad_debt_mantissa, "25");
        assert_eq!(position(&store, 1).bad_debt_mantissa, "100");
    }

    #[test]
    fn test_bad_debt_recovered_only_touches_market() {
        let mut store = listed_market();
        let recovered = BadDebtRecovered { bad_debt_old: big("0"), bad_debt_new: big("0") };
        handle_bad_debt_recovered(&mut store, &ctx(), &recovered).unwrap();

        assert_eq!(market(&store).bad_debt_mantissa, "0");
        assert_eq!(store.count::<AccountVToken>(), 0);

        let mut empty = MemoryStore::new();
        let err = handle_bad_debt_recovered(&mut empty, &ctx(), &recovered).unwrap_err();
        assert!(matches!(err, HandlerError::MissingEntity { entity: "Market", .. }));
    }

    #[test]
    fn test_accrue_interest_prices_with_pool_oracle() {
        let mut store = listed_market();
        let event = AccrueInterest {
            cash_prior: big("10"),
            interest_accumulated: big("1"),
            borrow_index: big("1000000000000000002"),
            total_borrows: big("900"),
        };
        let reads = Reads { rate: None, price: Some(big("300000000000000000000")) };
        handle_accrue_interest(&mut store, &reads, &ctx(), &event).unwrap();

        let market = market(&store);
        assert_eq!(market.underlying_price_mantissa, "300000000000000000000");
        assert_eq!(market.exchange_rate_mantissa, "-1");
        assert_eq!(market.borrow_index_mantissa, "1000000000000000002");
    }

    #[test]
    fn test_transfer_moves_balance_and_skips_legs() {
        let mut store = listed_market();
        handle_mint(&mut store, &ctx(), &mint(1, "40000000000000000000", "200000000000")).unwrap();

        let leg = Transfer { from: address(MARKET), to: address(1), amount: big("200000000000") };
        handle_transfer(&mut store, &Reads::default(), &ctx(), &leg).unwrap();
        assert_eq!(position(&store, 1).v_token_balance_mantissa, "200000000000");

        let transfer = Transfer { from: address(1), to: address(2), amount: big("100000000000") };
        handle_transfer(&mut store, &Reads::default(), &ctx(), &transfer).unwrap();

        assert_eq!(position(&store, 1).v_token_balance_mantissa, "100000000000");
        assert_eq!(position(&store, 2).total_underlying_supplied_mantissa, "20000000000000000000");
        assert_eq!(market(&store).supplier_count, 2);
    }

    #[test]
    fn test_spread_reserves_reduced_sets_reserves() {
        let mut store = listed_market();
        let event = SpreadReservesReduced {
            protocol_share_reserve: address(9),
            reduce_amount: big("5"),
            new_total_reserves: big("17"),
        };
        handle_spread_reserves_reduced(&mut store, &ctx(), &event).unwrap();
        assert_eq!(market(&store).reserves_mantissa, "17");
    }
}
