//! Builders for hand-made logs and blocks, used by the package tests.

use std::str::FromStr;

use ethabi::Token;
use substreams::scalar::BigInt;
use substreams_ethereum::pb::eth::v2::{self as eth};

use crate::{context::EventContext, ids};

pub fn address(byte: u8) -> Vec<u8> {
    vec![byte; 20]
}

pub fn big(value: &str) -> BigInt {
    BigInt::from_str(value).expect("decimal integer")
}

pub fn address_token(address: &[u8]) -> Token {
    Token::Address(ethabi::Address::from_slice(address))
}

pub fn uint_token(value: &str) -> Token {
    Token::Uint(ethabi::Uint::from_dec_str(value).expect("decimal integer"))
}

/// Builds a log whose first topic is the hash of `signature`.
///
/// `indexed` holds the indexed arguments in declaration order, `data` the rest.
pub fn event_log(address: &[u8], signature: &str, indexed: Vec<Token>, data: Vec<Token>) -> eth::Log {
    let mut topics = vec![ids::keccak256(signature.as_bytes()).to_vec()];
    topics.extend(
        indexed
            .into_iter()
            .map(|token| ethabi::encode(&[token])),
    );

    eth::Log { address: address.to_vec(), topics, data: ethabi::encode(&data), ..Default::default() }
}

/// A context for an event emitted by `address` in a transaction whose hash is `tx` repeated.
pub fn event_context(address: &[u8], tx: u8) -> EventContext {
    EventContext {
        block_number: 1,
        tx_hash: vec![tx; 32],
        tx_from: vec![0xee; 20],
        address: address.to_vec(),
        ..Default::default()
    }
}

/// A block holding one successful transaction per log, in order.
pub fn block(number: u64, logs: Vec<eth::Log>) -> eth::Block {
    let transaction_traces = logs
        .into_iter()
        .enumerate()
        .map(|(index, mut log)| {
            log.block_index = index as u32;
            eth::TransactionTrace {
                hash: vec![index as u8 + 1; 32],
                index: index as u32,
                status: eth::TransactionTraceStatus::Succeeded as i32,
                receipt: Some(eth::TransactionReceipt { logs: vec![log], ..Default::default() }),
                ..Default::default()
            }
        })
        .collect();

    eth::Block { number, transaction_traces, ..Default::default() }
}
