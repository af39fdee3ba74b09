use substreams_ethereum::pb::eth::v2::{self as eth};

use crate::ids;

/// Metadata of the log a handler is applied to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventContext {
    pub block_number: u64,
    pub block_timestamp: u64,
    pub tx_hash: Vec<u8>,
    /// Sender of the enclosing transaction.
    pub tx_from: Vec<u8>,
    pub log_index: u32,
    pub ordinal: u64,
    /// Contract that emitted the log.
    pub address: Vec<u8>,
}

impl EventContext {
    pub fn new(block: &eth::Block, tx: &eth::TransactionTrace, log: &eth::Log) -> Self {
        let block_timestamp = block
            .header
            .as_ref()
            .and_then(|header| header.timestamp.as_ref())
            .map(|timestamp| timestamp.seconds as u64)
            .unwrap_or_default();

        Self {
            block_number: block.number,
            block_timestamp,
            tx_hash: tx.hash.clone(),
            tx_from: tx.from.clone(),
            log_index: log.block_index,
            ordinal: log.ordinal,
            address: log.address.clone(),
        }
    }

    pub fn tx_hash_hex(&self) -> String {
        ids::to_hex(&self.tx_hash)
    }

    /// Id of the emitting contract.
    pub fn address_id(&self) -> String {
        ids::address_id(&self.address)
    }
}
