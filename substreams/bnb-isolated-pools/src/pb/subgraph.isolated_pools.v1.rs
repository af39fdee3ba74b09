// @generated
/// A comptroller registered in the pool registry.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(serde::Serialize, serde::Deserialize)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Pool {
    #[prost(string, tag="1")]
    pub id: ::prost::alloc::string::String,
    #[prost(string, tag="2")]
    pub name: ::prost::alloc::string::String,
    #[prost(string, tag="3")]
    pub creator: ::prost::alloc::string::String,
    #[prost(uint64, tag="4")]
    pub block_posted: u64,
    #[prost(uint64, tag="5")]
    pub timestamp_posted: u64,
    #[prost(string, tag="6")]
    pub category: ::prost::alloc::string::String,
    #[prost(string, tag="7")]
    pub logo_url: ::prost::alloc::string::String,
    #[prost(string, tag="8")]
    pub description: ::prost::alloc::string::String,
    #[prost(string, tag="9")]
    pub price_oracle: ::prost::alloc::string::String,
    #[prost(string, tag="10")]
    pub close_factor_mantissa: ::prost::alloc::string::String,
    #[prost(string, tag="11")]
    pub liquidation_incentive_mantissa: ::prost::alloc::string::String,
    #[prost(string, tag="12")]
    pub min_liquidatable_collateral_mantissa: ::prost::alloc::string::String,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(serde::Serialize, serde::Deserialize)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Market {
    /// vToken address
    #[prost(string, tag="1")]
    pub id: ::prost::alloc::string::String,
    #[prost(string, tag="2")]
    pub pool: ::prost::alloc::string::String,
    #[prost(string, tag="3")]
    pub name: ::prost::alloc::string::String,
    #[prost(string, tag="4")]
    pub symbol: ::prost::alloc::string::String,
    #[prost(int32, tag="5")]
    pub decimals: i32,
    #[prost(string, tag="6")]
    pub underlying_address: ::prost::alloc::string::String,
    #[prost(string, tag="7")]
    pub underlying_name: ::prost::alloc::string::String,
    #[prost(string, tag="8")]
    pub underlying_symbol: ::prost::alloc::string::String,
    #[prost(int32, tag="9")]
    pub underlying_decimals: i32,
    #[prost(bool, tag="10")]
    pub is_listed: bool,
    #[prost(string, tag="11")]
    pub collateral_factor_mantissa: ::prost::alloc::string::String,
    #[prost(string, tag="12")]
    pub liquidation_threshold_mantissa: ::prost::alloc::string::String,
    #[prost(string, tag="13")]
    pub reserve_factor_mantissa: ::prost::alloc::string::String,
    #[prost(string, tag="14")]
    pub interest_rate_model_address: ::prost::alloc::string::String,
    #[prost(string, tag="15")]
    pub exchange_rate_mantissa: ::prost::alloc::string::String,
    #[prost(string, tag="16")]
    pub supply_rate_mantissa: ::prost::alloc::string::String,
    #[prost(string, tag="17")]
    pub borrow_rate_mantissa: ::prost::alloc::string::String,
    #[prost(string, tag="18")]
    pub cash_mantissa: ::prost::alloc::string::String,
    #[prost(string, tag="19")]
    pub borrow_index_mantissa: ::prost::alloc::string::String,
    #[prost(string, tag="20")]
    pub total_borrows_mantissa: ::prost::alloc::string::String,
    #[prost(string, tag="21")]
    pub reserves_mantissa: ::prost::alloc::string::String,
    #[prost(string, tag="22")]
    pub bad_debt_mantissa: ::prost::alloc::string::String,
    #[prost(string, tag="23")]
    pub underlying_price_mantissa: ::prost::alloc::string::String,
    #[prost(string, tag="24")]
    pub borrow_cap_mantissa: ::prost::alloc::string::String,
    #[prost(string, tag="25")]
    pub supply_cap_mantissa: ::prost::alloc::string::String,
    #[prost(uint64, tag="26")]
    pub accrual_block_number: u64,
    #[prost(uint64, tag="27")]
    pub block_timestamp: u64,
    /// Positions with a non-zero vToken balance.
    #[prost(int64, tag="28")]
    pub supplier_count: i64,
    /// Positions with a non-zero stored borrow balance.
    #[prost(int64, tag="29")]
    pub borrower_count: i64,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(serde::Serialize, serde::Deserialize)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Account {
    #[prost(string, tag="1")]
    pub id: ::prost::alloc::string::String,
    #[prost(int64, tag="2")]
    pub count_liquidated: i64,
    #[prost(int64, tag="3")]
    pub count_liquidator: i64,
    #[prost(bool, tag="4")]
    pub has_borrowed: bool,
}
/// Position of an account in a market. Keyed by market ++ account.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(serde::Serialize, serde::Deserialize)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AccountVToken {
    #[prost(string, tag="1")]
    pub id: ::prost::alloc::string::String,
    #[prost(string, tag="2")]
    pub market: ::prost::alloc::string::String,
    #[prost(string, tag="3")]
    pub account: ::prost::alloc::string::String,
    #[prost(bool, tag="4")]
    pub entered_market: bool,
    #[prost(string, tag="5")]
    pub v_token_balance_mantissa: ::prost::alloc::string::String,
    #[prost(string, tag="6")]
    pub total_underlying_supplied_mantissa: ::prost::alloc::string::String,
    #[prost(string, tag="7")]
    pub total_underlying_redeemed_mantissa: ::prost::alloc::string::String,
    #[prost(string, tag="8")]
    pub stored_borrow_balance_mantissa: ::prost::alloc::string::String,
    #[prost(string, tag="9")]
    pub borrow_index_mantissa: ::prost::alloc::string::String,
    #[prost(string, tag="10")]
    pub total_underlying_borrowed_mantissa: ::prost::alloc::string::String,
    #[prost(string, tag="11")]
    pub total_underlying_repaid_mantissa: ::prost::alloc::string::String,
    #[prost(string, tag="12")]
    pub bad_debt_mantissa: ::prost::alloc::string::String,
    #[prost(uint64, tag="13")]
    pub accrual_block_number: u64,
}
/// Pause state of one action on one market. Keyed by market ++ action.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(serde::Serialize, serde::Deserialize)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MarketAction {
    #[prost(string, tag="1")]
    pub id: ::prost::alloc::string::String,
    #[prost(string, tag="2")]
    pub market: ::prost::alloc::string::String,
    #[prost(int32, tag="3")]
    pub action: i32,
    #[prost(bool, tag="4")]
    pub pause_state: bool,
}
// @@protoc_insertion_point(module)
