use crate::abi::token_converter;

/// Read-back calls issued when a converter is first seen. `None` models a reverted call.
pub trait ConverterReader {
    fn base_asset(&self, _converter: &[u8]) -> Option<Vec<u8>> {
        None
    }

    fn destination_address(&self, _converter: &[u8]) -> Option<Vec<u8>> {
        None
    }

    fn price_oracle(&self, _converter: &[u8]) -> Option<Vec<u8>> {
        None
    }

    fn converter_network(&self, _converter: &[u8]) -> Option<Vec<u8>> {
        None
    }

    fn conversion_paused(&self, _converter: &[u8]) -> Option<bool> {
        None
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RpcReader;

impl ConverterReader for RpcReader {
    fn base_asset(&self, converter: &[u8]) -> Option<Vec<u8>> {
        token_converter::functions::BaseAsset {}.call(converter.to_vec())
    }

    fn destination_address(&self, converter: &[u8]) -> Option<Vec<u8>> {
        token_converter::functions::DestinationAddress {}.call(converter.to_vec())
    }

    fn price_oracle(&self, converter: &[u8]) -> Option<Vec<u8>> {
        token_converter::functions::PriceOracle {}.call(converter.to_vec())
    }

    fn converter_network(&self, converter: &[u8]) -> Option<Vec<u8>> {
        token_converter::functions::ConverterNetwork {}.call(converter.to_vec())
    }

    fn conversion_paused(&self, converter: &[u8]) -> Option<bool> {
        token_converter::functions::ConversionPaused {}.call(converter.to_vec())
    }
}
