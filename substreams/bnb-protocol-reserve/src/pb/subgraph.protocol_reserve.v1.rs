// @generated
#[derive(serde::Serialize, serde::Deserialize)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum ConversionAccess {
    None = 0,
    All = 1,
    OnlyForConverters = 2,
    OnlyForUsers = 3,
}
impl ConversionAccess {
    /// String value of the enum field names used in the ProtoBuf definition.
    ///
    /// The values are not transformed in any way and thus are considered stable
    /// (if the ProtoBuf definition does not change) and safe for programmatic use.
    pub fn as_str_name(&self) -> &'static str {
        match self {
            ConversionAccess::None => "CONVERSION_ACCESS_NONE",
            ConversionAccess::All => "CONVERSION_ACCESS_ALL",
            ConversionAccess::OnlyForConverters => "CONVERSION_ACCESS_ONLY_FOR_CONVERTERS",
            ConversionAccess::OnlyForUsers => "CONVERSION_ACCESS_ONLY_FOR_USERS",
        }
    }
    /// Creates an enum from field names used in the ProtoBuf definition.
    pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
        match value {
            "CONVERSION_ACCESS_NONE" => Some(Self::None),
            "CONVERSION_ACCESS_ALL" => Some(Self::All),
            "CONVERSION_ACCESS_ONLY_FOR_CONVERTERS" => Some(Self::OnlyForConverters),
            "CONVERSION_ACCESS_ONLY_FOR_USERS" => Some(Self::OnlyForUsers),
            _ => None,
        }
    }
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(serde::Serialize, serde::Deserialize)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TokenConverter {
    #[prost(string, tag="1")]
    pub id: ::prost::alloc::string::String,
    #[prost(string, tag="2")]
    pub base_asset: ::prost::alloc::string::String,
    #[prost(string, tag="3")]
    pub destination_address: ::prost::alloc::string::String,
    #[prost(string, tag="4")]
    pub price_oracle: ::prost::alloc::string::String,
    #[prost(string, tag="5")]
    pub converter_network: ::prost::alloc::string::String,
    #[prost(bool, tag="6")]
    pub paused: bool,
    /// registered in the converter network
    #[prost(bool, tag="7")]
    pub listed: bool,
    /// configs whose access is not NONE
    #[prost(int64, tag="8")]
    pub active_config_count: i64,
}
/// Conversion settings of one token pair on one converter.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(serde::Serialize, serde::Deserialize)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TokenConverterConfig {
    #[prost(string, tag="1")]
    pub id: ::prost::alloc::string::String,
    #[prost(string, tag="2")]
    pub token_converter: ::prost::alloc::string::String,
    #[prost(string, tag="3")]
    pub token_address_in: ::prost::alloc::string::String,
    #[prost(string, tag="4")]
    pub token_address_out: ::prost::alloc::string::String,
    #[prost(string, tag="5")]
    pub incentive_mantissa: ::prost::alloc::string::String,
    #[prost(enumeration="ConversionAccess", tag="6")]
    pub access: i32,
}
// @@protoc_insertion_point(module)
