use substreams_ethereum::{pb::eth::v2::Log, Event};
use subgraph_substreams::prelude::*;

use crate::{
    abi::{
        comptroller::events::{
            ActionPausedMarket, MarketEntered, MarketExited, MarketListed, NewBorrowCap,
            NewCloseFactor, NewCollateralFactor, NewLiquidationIncentive, NewPriceOracle,
            NewSupplyCap,
        },
        vtoken::events::{
            AccrueInterest, Borrow, LiquidateBorrow, Mint, MintBehalf, NewMarketInterestRateModel,
            NewReserveFactor, Redeem, RepayBorrow, ReservesAdded, ReservesReduced, Transfer,
        },
    },
    reader::PoolReader,
};

pub mod comptroller;
pub mod vtoken;

/// Every event the core pool subgraph handles.
pub enum EventType {
    MarketListed(MarketListed),
    MarketEntered(MarketEntered),
    MarketExited(MarketExited),
    NewCloseFactor(NewCloseFactor),
    NewCollateralFactor(NewCollateralFactor),
    NewLiquidationIncentive(NewLiquidationIncentive),
    NewPriceOracle(NewPriceOracle),
    ActionPausedMarket(ActionPausedMarket),
    NewBorrowCap(NewBorrowCap),
    NewSupplyCap(NewSupplyCap),
    Mint(Mint),
    MintBehalf(MintBehalf),
    Redeem(Redeem),
    Borrow(Borrow),
    RepayBorrow(RepayBorrow),
    LiquidateBorrow(LiquidateBorrow),
    AccrueInterest(AccrueInterest),
    NewReserveFactor(NewReserveFactor),
    NewMarketInterestRateModel(NewMarketInterestRateModel),
    ReservesAdded(ReservesAdded),
    ReservesReduced(ReservesReduced),
    Transfer(Transfer),
}

impl EventType {
    pub fn apply<S: EntityStore, R: PoolReader>(
        &self,
        store: &mut S,
        reader: &R,
        ctx: &EventContext,
    ) -> Result<(), HandlerError> {
        match self {
            EventType::MarketListed(e) => comptroller::handle_market_listed(store, reader, ctx, e),
            EventType::MarketEntered(e) => comptroller::handle_market_entered(store, e),
            EventType::MarketExited(e) => comptroller::handle_market_exited(store, e),
            EventType::NewCloseFactor(e) => {
                comptroller::handle_new_close_factor(store, reader, ctx, e)
            }
            EventType::NewCollateralFactor(e) => comptroller::handle_new_collateral_factor(store, e),
            EventType::NewLiquidationIncentive(e) => {
                comptroller::handle_new_liquidation_incentive(store, reader, ctx, e)
            }
            EventType::NewPriceOracle(e) => {
                comptroller::handle_new_price_oracle(store, reader, ctx, e)
            }
            EventType::ActionPausedMarket(e) => comptroller::handle_action_paused_market(store, e),
            EventType::NewBorrowCap(e) => comptroller::handle_new_borrow_cap(store, e),
            EventType::NewSupplyCap(e) => comptroller::handle_new_supply_cap(store, e),
            EventType::Mint(e) => vtoken::handle_mint(store, ctx, e),
            EventType::MintBehalf(e) => vtoken::handle_mint_behalf(store, ctx, e),
            EventType::Redeem(e) => vtoken::handle_redeem(store, ctx, e),
            EventType::Borrow(e) => vtoken::handle_borrow(store, ctx, e),
            EventType::RepayBorrow(e) => vtoken::handle_repay_borrow(store, ctx, e),
            EventType::LiquidateBorrow(e) => vtoken::handle_liquidate_borrow(store, e),
            EventType::AccrueInterest(e) => vtoken::handle_accrue_interest(store, reader, ctx, e),
            EventType::NewReserveFactor(e) => vtoken::handle_new_reserve_factor(store, ctx, e),
            EventType::NewMarketInterestRateModel(e) => {
                vtoken::handle_new_market_interest_rate_model(store, ctx, e)
            }
            EventType::ReservesAdded(e) => vtoken::handle_reserves_added(store, ctx, e),
            EventType::ReservesReduced(e) => vtoken::handle_reserves_reduced(store, ctx, e),
            EventType::Transfer(e) => vtoken::handle_transfer(store, reader, ctx, e),
        }
    }
}

/// Decodes a log emitted by the comptroller.
pub fn decode_comptroller_event(event: &Log) -> Option<EventType> {
    [
        MarketListed::match_and_decode(event).map(EventType::MarketListed),
        MarketEntered::match_and_decode(event).map(EventType::MarketEntered),
        MarketExited::match_and_decode(event).map(EventType::MarketExited),
        NewCloseFactor::match_and_decode(event).map(EventType::NewCloseFactor),
        NewCollateralFactor::match_and_decode(event).map(EventType::NewCollateralFactor),
        NewLiquidationIncentive::match_and_decode(event).map(EventType::NewLiquidationIncentive),
        NewPriceOracle::match_and_decode(event).map(EventType::NewPriceOracle),
        ActionPausedMarket::match_and_decode(event).map(EventType::ActionPausedMarket),
        NewBorrowCap::match_and_decode(event).map(EventType::NewBorrowCap),
        NewSupplyCap::match_and_decode(event).map(EventType::NewSupplyCap),
    ]
    .into_iter()
    .find_map(std::convert::identity)
}

/// Decodes a log emitted by a listed market.
pub fn decode_vtoken_event(event: &Log) -> Option<EventType> {
    [
        Mint::match_and_decode(event).map(EventType::Mint),
        MintBehalf::match_and_decode(event).map(EventType::MintBehalf),
        Redeem::match_and_decode(event).map(EventType::Redeem),
        Borrow::match_and_decode(event).map(EventType::Borrow),
        RepayBorrow::match_and_decode(event).map(EventType::RepayBorrow),
        LiquidateBorrow::match_and_decode(event).map(EventType::LiquidateBorrow),
        AccrueInterest::match_and_decode(event).map(EventType::AccrueInterest),
        NewReserveFactor::match_and_decode(event).map(EventType::NewReserveFactor),
        NewMarketInterestRateModel::match_and_decode(event)
            .map(EventType::NewMarketInterestRateModel),
        ReservesAdded::match_and_decode(event).map(EventType::ReservesAdded),
        ReservesReduced::match_and_decode(event).map(EventType::ReservesReduced),
        Transfer::match_and_decode(event).map(EventType::Transfer),
    ]
    .into_iter()
    .find_map(std::convert::identity)
}
