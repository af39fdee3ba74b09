use substreams_ethereum::{pb::eth::v2::Log, Event};
use subgraph_substreams::prelude::*;

use crate::{
    abi::{
        comptroller::events::{
            ActionPausedMarket, MarketEntered, MarketExited, MarketSupported, MarketUnlisted,
            NewBorrowCap, NewCloseFactor, NewCollateralFactor, NewLiquidationIncentive,
            NewLiquidationThreshold, NewMinLiquidatableCollateral, NewPriceOracle, NewSupplyCap,
        },
        pool_registry::events::{MarketAdded, PoolMetadataUpdated, PoolNameSet, PoolRegistered},
        vtoken::events::{
            AccrueInterest, BadDebtIncreased, BadDebtRecovered, Borrow, HealBorrow,
            LiquidateBorrow, Mint, NewMarketInterestRateModel, NewReserveFactor, Redeem,
            RepayBorrow, ReservesAdded, SpreadReservesReduced, Transfer,
        },
    },
    reader::PoolReader,
};

pub mod comptroller;
pub mod registry;
pub mod vtoken;

/// Every event the isolated pools subgraph handles.
pub enum EventType {
    PoolRegistered(PoolRegistered),
    PoolNameSet(PoolNameSet),
    PoolMetadataUpdated(PoolMetadataUpdated),
    MarketAdded(MarketAdded),
    MarketSupported(MarketSupported),
    MarketUnlisted(MarketUnlisted),
    MarketEntered(MarketEntered),
    MarketExited(MarketExited),
    NewCloseFactor(NewCloseFactor),
    NewCollateralFactor(NewCollateralFactor),
    NewLiquidationThreshold(NewLiquidationThreshold),
    NewLiquidationIncentive(NewLiquidationIncentive),
    NewPriceOracle(NewPriceOracle),
    NewMinLiquidatableCollateral(NewMinLiquidatableCollateral),
    ActionPausedMarket(ActionPausedMarket),
    NewBorrowCap(NewBorrowCap),
    NewSupplyCap(NewSupplyCap),
    Mint(Mint),
    Redeem(Redeem),
    Borrow(Borrow),
    RepayBorrow(RepayBorrow),
    HealBorrow(HealBorrow),
    LiquidateBorrow(LiquidateBorrow),
    BadDebtIncreased(BadDebtIncreased),
    BadDebtRecovered(BadDebtRecovered),
    AccrueInterest(AccrueInterest),
    NewReserveFactor(NewReserveFactor),
    NewMarketInterestRateModel(NewMarketInterestRateModel),
    ReservesAdded(ReservesAdded),
    SpreadReservesReduced(SpreadReservesReduced),
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
            EventType::PoolRegistered(e) => registry::handle_pool_registered(store, reader, e),
            EventType::PoolNameSet(e) => registry::handle_pool_name_set(store, e),
            EventType::PoolMetadataUpdated(e) => registry::handle_pool_metadata_updated(store, e),
            EventType::MarketAdded(e) => registry::handle_market_added(store, reader, e),
            EventType::MarketSupported(e) => {
                comptroller::handle_market_supported(store, reader, ctx, e)
            }
            EventType::MarketUnlisted(e) => comptroller::handle_market_unlisted(store, e),
            EventType::MarketEntered(e) => comptroller::handle_market_entered(store, e),
            EventType::MarketExited(e) => comptroller::handle_market_exited(store, e),
            EventType::NewCloseFactor(e) => comptroller::handle_new_close_factor(store, ctx, e),
            EventType::NewCollateralFactor(e) => comptroller::handle_new_collateral_factor(store, e),
            EventType::NewLiquidationThreshold(e) => {
                comptroller::handle_new_liquidation_threshold(store, e)
            }
            EventType::NewLiquidationIncentive(e) => {
                comptroller::handle_new_liquidation_incentive(store, ctx, e)
            }
            EventType::NewPriceOracle(e) => comptroller::handle_new_price_oracle(store, ctx, e),
            EventType::NewMinLiquidatableCollateral(e) => {
                comptroller::handle_new_min_liquidatable_collateral(store, ctx, e)
            }
            EventType::ActionPausedMarket(e) => comptroller::handle_action_paused_market(store, e),
            EventType::NewBorrowCap(e) => comptroller::handle_new_borrow_cap(store, e),
            EventType::NewSupplyCap(e) => comptroller::handle_new_supply_cap(store, e),
            EventType::Mint(e) => vtoken::handle_mint(store, ctx, e),
            EventType::Redeem(e) => vtoken::handle_redeem(store, ctx, e),
            EventType::Borrow(e) => vtoken::handle_borrow(store, ctx, e),
            EventType::RepayBorrow(e) => vtoken::handle_repay_borrow(store, ctx, e),
            EventType::HealBorrow(e) => vtoken::handle_heal_borrow(store, ctx, e),
            EventType::LiquidateBorrow(e) => vtoken::handle_liquidate_borrow(store, e),
            EventType::BadDebtIncreased(e) => vtoken::handle_bad_debt_increased(store, ctx, e),
            EventType::BadDebtRecovered(e) => vtoken::handle_bad_debt_recovered(store, ctx, e),
            EventType::AccrueInterest(e) => vtoken::handle_accrue_interest(store, reader, ctx, e),
            EventType::NewReserveFactor(e) => vtoken::handle_new_reserve_factor(store, ctx, e),
            EventType::NewMarketInterestRateModel(e) => {
                vtoken::handle_new_market_interest_rate_model(store, ctx, e)
            }
            EventType::ReservesAdded(e) => vtoken::handle_reserves_added(store, ctx, e),
            EventType::SpreadReservesReduced(e) => {
                vtoken::handle_spread_reserves_reduced(store, ctx, e)
            }
            EventType::Transfer(e) => vtoken::handle_transfer(store, reader, ctx, e),
        }
    }
}

/// Decodes a log emitted by the pool registry.
pub fn decode_registry_event(event: &Log) -> Option<EventType> {
    [
        PoolRegistered::match_and_decode(event).map(EventType::PoolRegistered),
        PoolNameSet::match_and_decode(event).map(EventType::PoolNameSet),
        PoolMetadataUpdated::match_and_decode(event).map(EventType::PoolMetadataUpdated),
        MarketAdded::match_and_decode(event).map(EventType::MarketAdded),
    ]
    .into_iter()
    .find_map(std::convert::identity)
}

/// Decodes a log emitted by the comptroller of a registered pool.
pub fn decode_comptroller_event(event: &Log) -> Option<EventType> {
    [
        MarketSupported::match_and_decode(event).map(EventType::MarketSupported),
        MarketUnlisted::match_and_decode(event).map(EventType::MarketUnlisted),
        MarketEntered::match_and_decode(event).map(EventType::MarketEntered),
        MarketExited::match_and_decode(event).map(EventType::MarketExited),
        NewCloseFactor::match_and_decode(event).map(EventType::NewCloseFactor),
        NewCollateralFactor::match_and_decode(event).map(EventType::NewCollateralFactor),
        NewLiquidationThreshold::match_and_decode(event).map(EventType::NewLiquidationThreshold),
        NewLiquidationIncentive::match_and_decode(event).map(EventType::NewLiquidationIncentive),
        NewPriceOracle::match_and_decode(event).map(EventType::NewPriceOracle),
        NewMinLiquidatableCollateral::match_and_decode(event)
            .map(EventType::NewMinLiquidatableCollateral),
        ActionPausedMarket::match_and_decode(event).map(EventType::ActionPausedMarket),
        NewBorrowCap::match_and_decode(event).map(EventType::NewBorrowCap),
        NewSupplyCap::match_and_decode(event).map(EventType::NewSupplyCap),
    ]
    .into_iter()
    .find_map(std::convert::identity)
}

/// Decodes a log emitted by a market of a registered pool.
pub fn decode_vtoken_event(event: &Log) -> Option<EventType> {
    [
        Mint::match_and_decode(event).map(EventType::Mint),
        Redeem::match_and_decode(event).map(EventType::Redeem),
        Borrow::match_and_decode(event).map(EventType::Borrow),
        RepayBorrow::match_and_decode(event).map(EventType::RepayBorrow),
        HealBorrow::match_and_decode(event).map(EventType::HealBorrow),
        LiquidateBorrow::match_and_decode(event).map(EventType::LiquidateBorrow),
        BadDebtIncreased::match_and_decode(event).map(EventType::BadDebtIncreased),
        BadDebtRecovered::match_and_decode(event).map(EventType::BadDebtRecovered),
        AccrueInterest::match_and_decode(event).map(EventType::AccrueInterest),
        NewReserveFactor::match_and_decode(event).map(EventType::NewReserveFactor),
        NewMarketInterestRateModel::match_and_decode(event)
            .map(EventType::NewMarketInterestRateModel),
        ReservesAdded::match_and_decode(event).map(EventType::ReservesAdded),
        SpreadReservesReduced::match_and_decode(event).map(EventType::SpreadReservesReduced),
        Transfer::match_and_decode(event).map(EventType::Transfer),
    ]
    .into_iter()
    .find_map(std::convert::identity)
}
