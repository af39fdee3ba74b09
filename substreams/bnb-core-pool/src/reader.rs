use substreams::scalar::BigInt;

use crate::abi::{comptroller, erc20, price_oracle, vtoken};

/// Read-back calls issued by the core pool handlers.
///
/// Each method returns `None` when the call reverts. The default implementations behave like a
/// node on which every call reverts.
pub trait PoolReader {
    fn name(&self, _token: &[u8]) -> Option<String> {
        None
    }

    fn symbol(&self, _token: &[u8]) -> Option<String> {
        None
    }

    fn decimals(&self, _token: &[u8]) -> Option<BigInt> {
        None
    }

    fn underlying(&self, _vtoken: &[u8]) -> Option<Vec<u8>> {
        None
    }

    fn exchange_rate(&self, _vtoken: &[u8]) -> Option<BigInt> {
        None
    }

    fn supply_rate(&self, _vtoken: &[u8]) -> Option<BigInt> {
        None
    }

    fn borrow_rate(&self, _vtoken: &[u8]) -> Option<BigInt> {
        None
    }

    fn cash(&self, _vtoken: &[u8]) -> Option<BigInt> {
        None
    }

    fn total_reserves(&self, _vtoken: &[u8]) -> Option<BigInt> {
        None
    }

    fn reserve_factor(&self, _vtoken: &[u8]) -> Option<BigInt> {
        None
    }

    fn interest_rate_model(&self, _vtoken: &[u8]) -> Option<Vec<u8>> {
        None
    }

    fn oracle(&self, _comptroller: &[u8]) -> Option<Vec<u8>> {
        None
    }

    fn underlying_price(&self, _oracle: &[u8], _vtoken: &[u8]) -> Option<BigInt> {
        None
    }
}

/// Issues the reads as `eth_call`s at the block being processed.
#[derive(Debug, Clone, Copy, Default)]
pub struct RpcReader;

impl PoolReader for RpcReader {
    fn name(&self, token: &[u8]) -> Option<String> {
        erc20::functions::Name {}.call(token.to_vec())
    }

    fn symbol(&self, token: &[u8]) -> Option<String> {
        erc20::functions::Symbol {}.call(token.to_vec())
    }

    fn decimals(&self, token: &[u8]) -> Option<BigInt> {
        erc20::functions::Decimals {}.call(token.to_vec())
    }

    fn underlying(&self, vtoken: &[u8]) -> Option<Vec<u8>> {
        vtoken::functions::Underlying {}.call(vtoken.to_vec())
    }

    fn exchange_rate(&self, vtoken: &[u8]) -> Option<BigInt> {
        vtoken::functions::ExchangeRateStored {}.call(vtoken.to_vec())
    }

    fn supply_rate(&self, vtoken: &[u8]) -> Option<BigInt> {
        vtoken::functions::SupplyRatePerBlock {}.call(vtoken.to_vec())
    }

    fn borrow_rate(&self, vtoken: &[u8]) -> Option<BigInt> {
        vtoken::functions::BorrowRatePerBlock {}.call(vtoken.to_vec())
    }

    fn cash(&self, vtoken: &[u8]) -> Option<BigInt> {
        vtoken::functions::GetCash {}.call(vtoken.to_vec())
    }

    fn total_reserves(&self, vtoken: &[u8]) -> Option<BigInt> {
        vtoken::functions::TotalReserves {}.call(vtoken.to_vec())
    }

    fn reserve_factor(&self, vtoken: &[u8]) -> Option<BigInt> {
        vtoken::functions::ReserveFactorMantissa {}.call(vtoken.to_vec())
    }

    fn interest_rate_model(&self, vtoken: &[u8]) -> Option<Vec<u8>> {
        vtoken::functions::InterestRateModel {}.call(vtoken.to_vec())
    }

    fn oracle(&self, comptroller: &[u8]) -> Option<Vec<u8>> {
        comptroller::functions::Oracle {}.call(comptroller.to_vec())
    }

    fn underlying_price(&self, oracle: &[u8], vtoken: &[u8]) -> Option<BigInt> {
        price_oracle::functions::GetUnderlyingPrice { v_token: vtoken.to_vec() }.call(oracle.to_vec())
    }
}
