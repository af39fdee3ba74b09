// @generated
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(serde::Serialize, serde::Deserialize)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Permission {
    /// account ++ contract ++ function signature
    #[prost(string, tag="1")]
    pub id: ::prost::alloc::string::String,
    #[prost(string, tag="2")]
    pub account_address: ::prost::alloc::string::String,
    #[prost(string, tag="3")]
    pub contract_address: ::prost::alloc::string::String,
    #[prost(string, tag="4")]
    pub function_sig: ::prost::alloc::string::String,
    #[prost(enumeration="PermissionStatus", tag="5")]
    pub status: i32,
    /// Hash of the transaction that first granted the permission.
    #[prost(string, tag="6")]
    pub created_at: ::prost::alloc::string::String,
    #[prost(string, tag="7")]
    pub updated_at: ::prost::alloc::string::String,
}
#[derive(serde::Serialize, serde::Deserialize)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum PermissionStatus {
    Granted = 0,
    Revoked = 1,
}
impl PermissionStatus {
    /// String value of the enum field names used in the ProtoBuf definition.
    ///
    /// The values are not transformed in any way and thus are considered stable
    /// (if the ProtoBuf definition does not change) and safe for programmatic use.
    pub fn as_str_name(&self) -> &'static str {
        match self {
            PermissionStatus::Granted => "GRANTED",
            PermissionStatus::Revoked => "REVOKED",
        }
    }
    /// Creates an enum from field names used in the ProtoBuf definition.
    pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
        match value {
            "GRANTED" => Some(Self::Granted),
            "REVOKED" => Some(Self::Revoked),
            _ => None,
        }
    }
}
// @@protoc_insertion_point(module)
