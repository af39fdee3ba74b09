use serde::Serialize;
use serde_json::{Map, Value};
use substreams_ethereum::pb::eth::v2::{self as eth};
use tracing::{debug, warn};

use crate::{
    context::EventContext,
    errors::HandlerError,
    store::{Entity, EntityStore, MemoryStore},
};

/// A set of handlers over a fixed group of contracts.
pub trait Subgraph {
    /// Decoded events this subgraph subscribes to.
    type Event;

    const NAME: &'static str;

    /// Decodes `log` if it was emitted by a contract this subgraph tracks.
    ///
    /// Statically configured contracts are matched by address. Contracts discovered at runtime
    /// (markets, pools, converters) are matched by looking them up in the store.
    fn decode<S: EntityStore>(&self, store: &S, log: &eth::Log) -> Option<Self::Event>;

    fn handle<S: EntityStore>(
        &self,
        store: &mut S,
        ctx: &EventContext,
        event: Self::Event,
    ) -> Result<(), HandlerError>;

    /// Renders every stored entity, keyed by entity name then id.
    fn snapshot(&self, store: &MemoryStore) -> Result<Value, HandlerError>;
}

/// Outcome of [`process_block`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BlockReport {
    pub block_number: u64,
    pub handled: usize,
    pub failed: usize,
}

/// Applies every matching log of a block, in block order.
///
/// Events are applied one at a time, so each handler observes the writes of the previous one.
/// A failing handler abandons its own event only.
pub fn process_block<G, S>(subgraph: &G, store: &mut S, block: &eth::Block) -> BlockReport
where
    G: Subgraph,
    S: EntityStore,
{
    let mut report = BlockReport { block_number: block.number, ..Default::default() };

    for trx in block.transactions() {
        let Some(receipt) = trx.receipt.as_ref() else {
            continue;
        };

        for log in &receipt.logs {
            let Some(event) = subgraph.decode(store, log) else {
                continue;
            };

            let ctx = EventContext::new(block, trx, log);
            match subgraph.handle(store, &ctx, event) {
                Ok(()) => report.handled += 1,
                Err(error) => {
                    warn!(
                        subgraph = G::NAME,
                        block = ctx.block_number,
                        tx = %ctx.tx_hash_hex(),
                        log_index = ctx.log_index,
                        %error,
                        "abandoning event"
                    );
                    report.failed += 1;
                }
            }
        }
    }

    debug!(subgraph = G::NAME, ?report, "processed block");
    report
}

/// Adds the records of one entity type to a snapshot.
pub fn snapshot_entities<E>(store: &MemoryStore, out: &mut Map<String, Value>) -> Result<(), HandlerError>
where
    E: Entity + Serialize,
{
    let rows = store
        .all::<E>()?
        .into_iter()
        .map(|entity| {
            let id = entity.id().to_string();
            // Plain data messages always serialize.
            let value = serde_json::to_value(&entity).unwrap_or(Value::Null);
            (id, value)
        })
        .collect::<Map<_, _>>();

    if !rows.is_empty() {
        out.insert(E::NAME.to_string(), Value::Object(rows));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        accessor::get_or_create,
        permissions::{self, PermissionChange},
        pb::subgraph::common::v1::{Permission, PermissionStatus},
    };

    struct Permissions {
        acm: Vec<u8>,
    }

    impl Subgraph for Permissions {
        type Event = (PermissionStatus, Vec<u8>);

        const NAME: &'static str = "permissions";

        fn decode<S: EntityStore>(&self, _store: &S, log: &eth::Log) -> Option<Self::Event> {
            if log.address != self.acm {
                return None;
            }
            let status = match log.topics.first()?.as_slice() {
                [0] => PermissionStatus::Granted,
                [1] => PermissionStatus::Revoked,
                _ => return None,
            };
            Some((status, log.data.clone()))
        }

        fn handle<S: EntityStore>(
            &self,
            store: &mut S,
            ctx: &EventContext,
            (status, account): Self::Event,
        ) -> Result<(), HandlerError> {
            if account.is_empty() {
                return Err(HandlerError::missing::<Permission>("empty account"));
            }
            permissions::apply(
                store,
                ctx,
                &PermissionChange {
                    status,
                    account,
                    contract: ctx.address.clone(),
                    function_sig: "foo()".to_string(),
                },
            )
        }

        fn snapshot(&self, store: &MemoryStore) -> Result<Value, HandlerError> {
            let mut out = Map::new();
            snapshot_entities::<Permission>(store, &mut out)?;
            Ok(Value::Object(out))
        }
    }

    fn log(address: &[u8], topic: u8, data: &[u8], index: u32) -> eth::Log {
        eth::Log {
            address: address.to_vec(),
            topics: vec![vec![topic]],
            data: data.to_vec(),
            block_index: index,
            ..Default::default()
        }
    }

    fn block(logs: Vec<eth::Log>) -> eth::Block {
        eth::Block {
            number: 42,
            transaction_traces: vec![eth::TransactionTrace {
                hash: vec![0xaa; 32],
                status: eth::TransactionTraceStatus::Succeeded as i32,
                receipt: Some(eth::TransactionReceipt { logs, ..Default::default() }),
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_process_block_applies_events_in_order() {
        let acm = vec![0x01; 20];
        let subgraph = Permissions { acm: acm.clone() };
        let mut store = MemoryStore::new();

        let report = process_block(
            &subgraph,
            &mut store,
            &block(vec![
                log(&acm, 0, &[0x22; 20], 0),
                log(&[0x09; 20], 0, &[0x33; 20], 1),
                log(&acm, 1, &[0x22; 20], 2),
            ]),
        );

        assert_eq!(report, BlockReport { block_number: 42, handled: 2, failed: 0 });
        let permissions = store.all::<Permission>().unwrap();
        assert_eq!(permissions.len(), 1);
        assert_eq!(permissions[0].status, PermissionStatus::Revoked as i32);
    }

    #[test]
    fn test_process_block_continues_after_failure() {
        let acm = vec![0x01; 20];
        let subgraph = Permissions { acm: acm.clone() };
        let mut store = MemoryStore::new();

        let report =
            process_block(&subgraph, &mut store, &block(vec![log(&acm, 0, &[], 0), log(&acm, 0, &[0x22; 20], 1)]));

        assert_eq!(report.failed, 1);
        assert_eq!(report.handled, 1);
        assert_eq!(store.count::<Permission>(), 1);
    }

    #[test]
    fn test_snapshot_is_keyed_by_entity_then_id() {
        let mut store = MemoryStore::new();
        let loaded = get_or_create(&store, "0x01", |id| Permission { id: id.to_string(), ..Default::default() })
            .unwrap();
        store.save(&loaded.entity);

        let snapshot = Permissions { acm: vec![] }
            .snapshot(&store)
            .unwrap();
        assert!(snapshot["Permission"]["0x01"].is_object());
    }

    #[test]
    fn test_failed_transactions_are_skipped() {
        let acm = vec![0x01; 20];
        let subgraph = Permissions { acm: acm.clone() };
        let mut store = MemoryStore::new();
        let mut block = block(vec![log(&acm, 0, &[0x22; 20], 0)]);
        block.transaction_traces[0].status = eth::TransactionTraceStatus::Reverted as i32;

        let report = process_block(&subgraph, &mut store, &block);
        assert_eq!(report.handled, 0);
        assert!(store.is_empty());
    }
}
