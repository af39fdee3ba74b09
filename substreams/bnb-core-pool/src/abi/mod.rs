#![allow(clippy::all)]

pub mod comptroller;
pub mod erc20;
pub mod price_oracle;
pub mod vtoken;
