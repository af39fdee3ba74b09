#![allow(clippy::all)]

pub mod converter_network;
pub mod token_converter;
