// @generated
#[derive(serde::Serialize, serde::Deserialize)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum VoteSupport {
    Against = 0,
    For = 1,
    Abstain = 2,
}
impl VoteSupport {
    /// String value of the enum field names used in the ProtoBuf definition.
    ///
    /// The values are not transformed in any way and thus are considered stable
    /// (if the ProtoBuf definition does not change) and safe for programmatic use.
    pub fn as_str_name(&self) -> &'static str {
        match self {
            VoteSupport::Against => "VOTE_SUPPORT_AGAINST",
            VoteSupport::For => "VOTE_SUPPORT_FOR",
            VoteSupport::Abstain => "VOTE_SUPPORT_ABSTAIN",
        }
    }
    /// Creates an enum from field names used in the ProtoBuf definition.
    pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
        match value {
            "VOTE_SUPPORT_AGAINST" => Some(Self::Against),
            "VOTE_SUPPORT_FOR" => Some(Self::For),
            "VOTE_SUPPORT_ABSTAIN" => Some(Self::Abstain),
            _ => None,
        }
    }
}
/// Singleton holding the protocol wide governance aggregates.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(serde::Serialize, serde::Deserialize)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Governance {
    #[prost(string, tag="1")]
    pub id: ::prost::alloc::string::String,
    #[prost(int64, tag="2")]
    pub total_proposals: i64,
    /// delegates with non-zero voting power
    #[prost(int64, tag="3")]
    pub total_delegates: i64,
    /// token holders ever seen
    #[prost(int64, tag="4")]
    pub total_token_holders: i64,
    /// token holders with a non-zero balance
    #[prost(int64, tag="5")]
    pub current_token_holders: i64,
    #[prost(string, tag="6")]
    pub guardian: ::prost::alloc::string::String,
    #[prost(string, tag="7")]
    pub admin: ::prost::alloc::string::String,
    #[prost(string, tag="8")]
    pub implementation: ::prost::alloc::string::String,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(serde::Serialize, serde::Deserialize)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Proposal {
    /// proposal id as a decimal string
    #[prost(string, tag="1")]
    pub id: ::prost::alloc::string::String,
    #[prost(string, tag="2")]
    pub proposer: ::prost::alloc::string::String,
    #[prost(string, repeated, tag="3")]
    pub targets: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    #[prost(string, repeated, tag="4")]
    pub values: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    #[prost(string, repeated, tag="5")]
    pub signatures: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    #[prost(string, repeated, tag="6")]
    pub calldatas: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    #[prost(uint64, tag="7")]
    pub start_block: u64,
    #[prost(uint64, tag="8")]
    pub end_block: u64,
    #[prost(string, tag="9")]
    pub description: ::prost::alloc::string::String,
    #[prost(int32, tag="10")]
    pub proposal_type: i32,
    #[prost(uint64, tag="11")]
    pub created_block: u64,
    #[prost(string, tag="12")]
    pub created_tx_hash: ::prost::alloc::string::String,
    #[prost(bool, tag="13")]
    pub queued: bool,
    #[prost(string, tag="14")]
    pub queued_tx_hash: ::prost::alloc::string::String,
    #[prost(uint64, tag="15")]
    pub eta: u64,
    #[prost(bool, tag="16")]
    pub executed: bool,
    #[prost(string, tag="17")]
    pub executed_tx_hash: ::prost::alloc::string::String,
    #[prost(bool, tag="18")]
    pub canceled: bool,
    #[prost(string, tag="19")]
    pub canceled_tx_hash: ::prost::alloc::string::String,
    #[prost(string, tag="20")]
    pub for_votes_mantissa: ::prost::alloc::string::String,
    #[prost(string, tag="21")]
    pub against_votes_mantissa: ::prost::alloc::string::String,
    #[prost(string, tag="22")]
    pub abstain_votes_mantissa: ::prost::alloc::string::String,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(serde::Serialize, serde::Deserialize)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Vote {
    /// voter address followed by the proposal id
    #[prost(string, tag="1")]
    pub id: ::prost::alloc::string::String,
    #[prost(string, tag="2")]
    pub proposal: ::prost::alloc::string::String,
    #[prost(string, tag="3")]
    pub voter: ::prost::alloc::string::String,
    #[prost(enumeration="VoteSupport", tag="4")]
    pub support: i32,
    #[prost(string, tag="5")]
    pub votes_mantissa: ::prost::alloc::string::String,
    #[prost(string, tag="6")]
    pub reason: ::prost::alloc::string::String,
    #[prost(uint64, tag="7")]
    pub block_number: u64,
    #[prost(string, tag="8")]
    pub tx_hash: ::prost::alloc::string::String,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(serde::Serialize, serde::Deserialize)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Delegate {
    #[prost(string, tag="1")]
    pub id: ::prost::alloc::string::String,
    #[prost(string, tag="2")]
    pub staked_xvs_mantissa: ::prost::alloc::string::String,
    #[prost(string, tag="3")]
    pub total_votes_mantissa: ::prost::alloc::string::String,
    /// account this delegate assigned its own votes to, null address if none
    #[prost(string, tag="4")]
    pub delegatee: ::prost::alloc::string::String,
    /// accounts currently delegating to this one
    #[prost(int64, tag="5")]
    pub delegator_count: i64,
    #[prost(int64, tag="6")]
    pub proposals_authored: i64,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(serde::Serialize, serde::Deserialize)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TokenHolder {
    #[prost(string, tag="1")]
    pub id: ::prost::alloc::string::String,
    #[prost(string, tag="2")]
    pub balance_mantissa: ::prost::alloc::string::String,
}
/// A proposal relayed to a remote chain by the omnichain proposal sender.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(serde::Serialize, serde::Deserialize)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RemoteProposal {
    #[prost(string, tag="1")]
    pub id: ::prost::alloc::string::String,
    #[prost(uint32, tag="2")]
    pub remote_chain_id: u32,
    #[prost(string, tag="3")]
    pub payload: ::prost::alloc::string::String,
    #[prost(string, tag="4")]
    pub adapter_params: ::prost::alloc::string::String,
    #[prost(string, tag="5")]
    pub value_mantissa: ::prost::alloc::string::String,
    #[prost(string, tag="6")]
    pub failure_reason: ::prost::alloc::string::String,
    #[prost(bool, tag="7")]
    pub executed: bool,
    #[prost(string, tag="8")]
    pub executed_tx_hash: ::prost::alloc::string::String,
    #[prost(bool, tag="9")]
    pub stored: bool,
    #[prost(string, tag="10")]
    pub stored_tx_hash: ::prost::alloc::string::String,
    #[prost(bool, tag="11")]
    pub cleared: bool,
    #[prost(string, tag="12")]
    pub cleared_tx_hash: ::prost::alloc::string::String,
    #[prost(string, tag="13")]
    pub execution_hash: ::prost::alloc::string::String,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(serde::Serialize, serde::Deserialize)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DestinationChain {
    #[prost(string, tag="1")]
    pub id: ::prost::alloc::string::String,
    #[prost(uint32, tag="2")]
    pub chain_id: u32,
    #[prost(string, tag="3")]
    pub trusted_remote: ::prost::alloc::string::String,
    #[prost(string, tag="4")]
    pub max_daily_limit_mantissa: ::prost::alloc::string::String,
}
// @@protoc_insertion_point(module)
