// @generated
/// Singleton describing the omnichain governance executor of this chain.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(serde::Serialize, serde::Deserialize)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Governance {
    #[prost(string, tag="1")]
    pub id: ::prost::alloc::string::String,
    #[prost(string, tag="2")]
    pub address: ::prost::alloc::string::String,
    #[prost(string, tag="3")]
    pub guardian: ::prost::alloc::string::String,
    #[prost(uint32, tag="4")]
    pub src_chain_id: u32,
    #[prost(string, tag="5")]
    pub max_daily_receive_limit_mantissa: ::prost::alloc::string::String,
    #[prost(int64, tag="6")]
    pub total_proposals: i64,
}
/// A proposal relayed from the governance chain.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(serde::Serialize, serde::Deserialize)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Proposal {
    /// proposal id as a decimal string
    #[prost(string, tag="1")]
    pub id: ::prost::alloc::string::String,
    #[prost(string, repeated, tag="2")]
    pub targets: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    #[prost(string, repeated, tag="3")]
    pub values: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    #[prost(string, repeated, tag="4")]
    pub signatures: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    #[prost(string, repeated, tag="5")]
    pub calldatas: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    #[prost(int32, tag="6")]
    pub proposal_type: i32,
    /// governance route handling this proposal type
    #[prost(string, tag="7")]
    pub route: ::prost::alloc::string::String,
    #[prost(uint64, tag="8")]
    pub received_block: u64,
    #[prost(string, tag="9")]
    pub received_tx_hash: ::prost::alloc::string::String,
    #[prost(bool, tag="10")]
    pub queued: bool,
    #[prost(string, tag="11")]
    pub queued_tx_hash: ::prost::alloc::string::String,
    #[prost(uint64, tag="12")]
    pub eta: u64,
    #[prost(bool, tag="13")]
    pub executed: bool,
    #[prost(string, tag="14")]
    pub executed_tx_hash: ::prost::alloc::string::String,
    #[prost(bool, tag="15")]
    pub canceled: bool,
    #[prost(string, tag="16")]
    pub canceled_tx_hash: ::prost::alloc::string::String,
}
/// Timelock executing proposals of one route type.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(serde::Serialize, serde::Deserialize)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GovernanceRoute {
    #[prost(string, tag="1")]
    pub id: ::prost::alloc::string::String,
    #[prost(int32, tag="2")]
    pub route_type: i32,
    #[prost(string, tag="3")]
    pub timelock_address: ::prost::alloc::string::String,
}
/// A function the executor owner may call, keyed by its selector.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(serde::Serialize, serde::Deserialize)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FunctionRegistry {
    #[prost(string, tag="1")]
    pub id: ::prost::alloc::string::String,
    #[prost(string, tag="2")]
    pub signature: ::prost::alloc::string::String,
}
// @@protoc_insertion_point(module)
