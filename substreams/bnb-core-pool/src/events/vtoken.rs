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
        AccrueInterest, Borrow, LiquidateBorrow, Mint, MintBehalf, NewMarketInterestRateModel,
        NewReserveFactor, Redeem, RepayBorrow, ReservesAdded, ReservesReduced, Transfer,
    },
    entities::{load_position, touch_account, COMPTROLLER_ID},
    pb::subgraph::core_pool::v1::{Account, Comptroller, Market},
    reader::PoolReader,
};

fn load_market<S: EntityStore>(store: &S, ctx: &EventContext) -> Result<Market, HandlerError> {
    load(store, &ctx.address_id())
}

fn negated(value: &BigInt) -> BigInt {
    BigInt::zero() - value.clone()
}

/// Applies a signed vToken delta to a position and accumulates the underlying amounts that
/// moved with it. Keeps `supplier_count` in line with the balance transition.
fn move_supply<S: EntityStore>(
    store: &mut S,
    market: &mut Market,
    ctx: &EventContext,
    account: &[u8],
    tokens: &BigInt,
    supplied: &BigInt,
    redeemed: &BigInt,
) -> Result<(), HandlerError> {
    touch_account(store, account)?;
    let mut position = load_position(store, &ctx.address, account)?;

    let before = mantissa::parse("v_token_balance_mantissa", &position.v_token_balance_mantissa)?;
    let after = before.clone() + tokens.clone();
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

/// Overwrites the stored borrow of a position with the balance reported by the event.
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
        &event.mint_tokens,
        &event.mint_amount,
        &BigInt::zero(),
    )?;
    market.total_supply_mantissa = event.total_supply.to_string();
    store.save(&market);
    Ok(())
}

pub fn handle_mint_behalf<S: EntityStore>(
    store: &mut S,
    ctx: &EventContext,
    event: &MintBehalf,
) -> Result<(), HandlerError> {
    let mut market = load_market(store, ctx)?;
    move_supply(
        store,
        &mut market,
        ctx,
        &event.receiver,
        &event.mint_tokens,
        &event.mint_amount,
        &BigInt::zero(),
    )?;
    market.total_supply_mantissa = event.total_supply.to_string();
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
        &negated(&event.redeem_tokens),
        &BigInt::zero(),
        &event.redeem_amount,
    )?;
    market.total_supply_mantissa = event.total_supply.to_string();
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

/// Seized collateral moves through a separate `Transfer`, so only the liquidation counters change
/// here.
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

pub fn handle_accrue_interest<S: EntityStore, R: PoolReader>(
    store: &mut S,
    reader: &R,
    ctx: &EventContext,
    event: &AccrueInterest,
) -> Result<(), HandlerError> {
    let oracle = store
        .get::<Comptroller>(COMPTROLLER_ID)?
        .map(|comptroller| comptroller.price_oracle)
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

pub fn handle_reserves_reduced<S: EntityStore>(
    store: &mut S,
    ctx: &EventContext,
    event: &ReservesReduced,
) -> Result<(), HandlerError> {
    update::<Market, _, _>(store, &ctx.address_id(), |market| {
        market.reserves_mantissa = event.new_total_reserves.to_string();
        Ok(())
    })?;
    Ok(())
}

/// Moves vTokens between two positions.
///
/// The legs a mint or redeem emits (from or to the market itself) are already accounted for by
/// `Mint` and `Redeem`. The underlying amount uses the live exchange rate, or the last stored
/// one when the read reverts.
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
        &negated(&event.amount),
        &BigInt::zero(),
        &underlying,
    )?;
    move_supply(store, &mut market, ctx, &event.to, &event.amount, &underlying, &BigInt::zero())?;
    store.save(&market);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        entities::{account_vtoken_id, new_market},
        pb::subgraph::core_pool::v1::AccountVToken,
    };
    use subgraph_substreams::testing::{address, big, event_context};

    const MARKET: u8 = 0x0a;
    // 0.02 underlying per vToken, 18 decimal underlying over an 8 decimal vToken
    const RATE: &str = "200000000000000000000000000";

    struct Rates(Option<BigInt>);

    impl PoolReader for Rates {
        fn exchange_rate(&self, _vtoken: &[u8]) -> Option<BigInt> {
            self.0.clone()
        }
    }

    fn listed_market() -> MemoryStore {
        let mut store = MemoryStore::new();
        let mut market = new_market(&address(MARKET), &Rates(None));
        market.is_listed = true;
        market.exchange_rate_mantissa = RATE.to_string();
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

    fn mint(account: u8, amount: &str, tokens: &str) -> Mint {
        Mint {
            minter: address(account),
            mint_amount: big(amount),
            mint_tokens: big(tokens),
            total_supply: big(tokens),
        }
    }

    fn redeem(account: u8, amount: &str, tokens: &str) -> Redeem {
        Redeem {
            redeemer: address(account),
            redeem_amount: big(amount),
            redeem_tokens: big(tokens),
            total_supply: BigInt::zero(),
        }
    }

    #[test]
    fn test_mint_into_empty_position_is_exact() {
        let mut store = listed_market();
        handle_mint(&mut store, &ctx(), &mint(1, "1000000000000000000000", "5000000000000")).unwrap();

        let position = position(&store, 1);
        assert_eq!(position.total_underlying_supplied_mantissa, "1000000000000000000000");
        assert_eq!(position.v_token_balance_mantissa, "5000000000000");
        assert_eq!(position.total_underlying_redeemed_mantissa, "0");

        let market = market(&store);
        assert_eq!(market.supplier_count, 1);
        assert_eq!(market.total_supply_mantissa, "5000000000000");
        assert!(store.has::<Account>(&ids::address_id(&address(1))));
    }

    #[test]
    fn test_supplier_count_matches_non_zero_positions() {
        let mut store = listed_market();
        for account in 1..=5 {
            handle_mint(&mut store, &ctx(), &mint(account, "100", "10")).unwrap();
        }
        handle_redeem(&mut store, &ctx(), &redeem(2, "100", "10")).unwrap();
        handle_redeem(&mut store, &ctx(), &redeem(4, "100", "10")).unwrap();
        handle_redeem(&mut store, &ctx(), &redeem(1, "50", "5")).unwrap();
        handle_mint(&mut store, &ctx(), &mint(3, "100", "10")).unwrap();

        let non_zero = store
            .all::<AccountVToken>()
            .unwrap()
            .iter()
            .filter(|position| position.v_token_balance_mantissa != "0")
            .count() as i64;
        assert_eq!(non_zero, 3);
        assert_eq!(market(&store).supplier_count, non_zero);
        assert_eq!(position(&store, 3).v_token_balance_mantissa, "20");
    }

    #[test]
    fn test_transfer_skips_mint_and_redeem_legs() {
        let mut store = listed_market();
        let mint_leg = Transfer { from: address(MARKET), to: address(1), amount: big("10") };
        let redeem_leg = Transfer { from: address(1), to: address(MARKET), amount: big("10") };

        handle_transfer(&mut store, &Rates(None), &ctx(), &mint_leg).unwrap();
        handle_transfer(&mut store, &Rates(None), &ctx(), &redeem_leg).unwrap();

        assert_eq!(store.count::<AccountVToken>(), 0);
    }

    #[test]
    fn test_transfer_moves_balance_and_underlying() {
        let mut store = listed_market();
        handle_mint(&mut store, &ctx(), &mint(1, "40000000000000000000", "200000000000")).unwrap();

        let transfer = Transfer { from: address(1), to: address(2), amount: big("100000000000") };
        handle_transfer(&mut store, &Rates(Some(big(RATE))), &ctx(), &transfer).unwrap();

        let sender = position(&store, 1);
        let receiver = position(&store, 2);
        assert_eq!(sender.v_token_balance_mantissa, "100000000000");
        assert_eq!(sender.total_underlying_redeemed_mantissa, "20000000000000000000");
        assert_eq!(receiver.v_token_balance_mantissa, "100000000000");
        assert_eq!(receiver.total_underlying_supplied_mantissa, "20000000000000000000");
        assert_eq!(market(&store).supplier_count, 2);

        handle_transfer(&mut store, &Rates(Some(big(RATE))), &ctx(), &transfer).unwrap();
        assert_eq!(position(&store, 1).v_token_balance_mantissa, "0");
        assert_eq!(market(&store).supplier_count, 1);
    }

    #[test]
    fn test_transfer_falls_back_to_stored_rate() {
        let mut store = listed_market();
        handle_mint(&mut store, &ctx(), &mint(1, "20000000000000000000", "100000000000")).unwrap();

        let transfer = Transfer { from: address(1), to: address(2), amount: big("100000000000") };
        handle_transfer(&mut store, &Rates(None), &ctx(), &transfer).unwrap();

        assert_eq!(position(&store, 2).total_underlying_supplied_mantissa, "20000000000000000000");
    }

    #[test]
    fn test_borrow_and_repay_track_borrowers() {
        let mut store = listed_market();
        let borrow = Borrow {
            borrower: address(1),
            borrow_amount: big("100"),
            account_borrows: big("100"),
            total_borrows: big("100"),
        };
        handle_borrow(&mut store, &ctx(), &borrow).unwrap();
        assert_eq!(market(&store).borrower_count, 1);
        assert!(
            load::<Account, _>(&store, &ids::address_id(&address(1)))
                .unwrap()
                .has_borrowed
        );

        let repay = RepayBorrow {
            payer: address(2),
            borrower: address(1),
            repay_amount: big("105"),
            account_borrows: BigInt::zero(),
            total_borrows: BigInt::zero(),
        };
        handle_repay_borrow(&mut store, &ctx(), &repay).unwrap();

        let position = position(&store, 1);
        assert_eq!(position.stored_borrow_balance_mantissa, "0");
        assert_eq!(position.total_underlying_borrowed_mantissa, "100");
        assert_eq!(position.total_underlying_repaid_mantissa, "105");
        assert_eq!(market(&store).borrower_count, 0);
        assert_eq!(market(&store).total_borrows_mantissa, "0");
    }

    #[test]
    fn test_accrue_interest_defaults_reverted_reads() {
        let mut store = listed_market();
        let event = AccrueInterest {
            cash_prior: big("10"),
            interest_accumulated: big("1"),
            borrow_index: big("1000000000000000001"),
            total_borrows: big("500"),
        };
        handle_accrue_interest(&mut store, &Rates(None), &ctx(), &event).unwrap();

        let market = market(&store);
        assert_eq!(market.borrow_index_mantissa, "1000000000000000001");
        assert_eq!(market.total_borrows_mantissa, "500");
        assert_eq!(market.exchange_rate_mantissa, "-1");
        assert_eq!(market.cash_mantissa, "-1");
        assert_eq!(market.underlying_price_mantissa, "-1");
        assert_eq!(market.accrual_block_number, 1);
    }

    #[test]
    fn test_liquidation_counters() {
        let mut store = listed_market();
        let event = LiquidateBorrow {
            liquidator: address(2),
            borrower: address(1),
            repay_amount: big("10"),
            v_token_collateral: address(MARKET),
            seize_tokens: big("1"),
        };
        handle_liquidate_borrow(&mut store, &event).unwrap();
        handle_liquidate_borrow(&mut store, &event).unwrap();

        let borrower: Account = load(&store, &ids::address_id(&address(1))).unwrap();
        let liquidator: Account = load(&store, &ids::address_id(&address(2))).unwrap();
        assert_eq!(borrower.count_liquidated, 2);
        assert_eq!(liquidator.count_liquidator, 2);
        assert_eq!(borrower.count_liquidator, 0);
    }

    #[test]
    fn test_mint_behalf_credits_receiver_not_payer() {
        let mut store = listed_market();
        let event = MintBehalf {
            payer: address(2),
            receiver: address(1),
            mint_amount: big("300"),
            mint_tokens: big("15"),
            total_supply: big("15"),
        };
        handle_mint_behalf(&mut store, &ctx(), &event).unwrap();

        let receiver = position(&store, 1);
        assert_eq!(receiver.v_token_balance_mantissa, "15");
        assert_eq!(receiver.total_underlying_supplied_mantissa, "300");
        assert!(!store.has::<AccountVToken>(&account_vtoken_id(&address(MARKET), &address(2))));
        assert_eq!(market(&store).supplier_count, 1);
        assert_eq!(market(&store).total_supply_mantissa, "15");
    }

    #[test]
    fn test_unknown_market_is_missing_entity() {
        let mut store = MemoryStore::new();
        let err = handle_mint(&mut store, &ctx(), &mint(1, "1", "1")).unwrap_err();
        assert!(matches!(err, HandlerError::MissingEntity { entity: "Market", .. }));
        assert!(store.is_empty());
    }
}
