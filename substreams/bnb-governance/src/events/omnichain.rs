use substreams::scalar::BigInt;
use subgraph_substreams::{ids, prelude::*};

use crate::{
    abi::omnichain_proposal_sender::events::{
        ClearPayload, ExecuteRemoteProposal, SetMaxDailyLimit, SetTrustedRemoteAddress,
        StorePayload,
    },
    entities::{new_destination_chain, new_remote_proposal},
    pb::subgraph::governance::v1::{DestinationChain, RemoteProposal},
};

fn load_remote_proposal<S: EntityStore>(
    store: &S,
    proposal_id: &BigInt,
) -> Result<RemoteProposal, HandlerError> {
    Ok(get_or_create(store, &ids::numeric_id(proposal_id), new_remote_proposal)?.entity)
}

fn load_destination_chain<S: EntityStore>(
    store: &S,
    chain_id: &BigInt,
) -> Result<DestinationChain, HandlerError> {
    Ok(get_or_create(store, &ids::numeric_id(chain_id), |_| new_destination_chain(chain_id))?.entity)
}

pub fn handle_execute_remote_proposal<S: EntityStore>(
    store: &mut S,
    ctx: &EventContext,
    event: &ExecuteRemoteProposal,
) -> Result<(), HandlerError> {
    let mut proposal = load_remote_proposal(store, &event.proposal_id)?;
    proposal.remote_chain_id = event.remote_chain_id.to_u64() as u32;
    proposal.payload = ids::to_hex(&event.payload);
    proposal.executed = true;
    proposal.executed_tx_hash = ctx.tx_hash_hex();
    store.save(&proposal);
    Ok(())
}

/// A send that failed on the bridge is stored for a later retry, together with the failure reason.
pub fn handle_store_payload<S: EntityStore>(
    store: &mut S,
    ctx: &EventContext,
    event: &StorePayload,
) -> Result<(), HandlerError> {
    let mut proposal = load_remote_proposal(store, &event.proposal_id)?;
    proposal.remote_chain_id = event.remote_chain_id.to_u64() as u32;
    proposal.payload = ids::to_hex(&event.payload);
    proposal.adapter_params = ids::to_hex(&event.adapter_params);
    proposal.value_mantissa = event.value.to_string();
    proposal.failure_reason = ids::to_hex(&event.reason);
    proposal.stored = true;
    proposal.stored_tx_hash = ctx.tx_hash_hex();
    store.save(&proposal);
    Ok(())
}

pub fn handle_clear_payload<S: EntityStore>(
    store: &mut S,
    ctx: &EventContext,
    event: &ClearPayload,
) -> Result<(), HandlerError> {
    update::<RemoteProposal, _, _>(store, &ids::numeric_id(&event.proposal_id), |proposal| {
        proposal.cleared = true;
        proposal.cleared_tx_hash = ctx.tx_hash_hex();
        proposal.execution_hash = ids::to_hex(&event.execution_hash);
        Ok(())
    })?;
    Ok(())
}

pub fn handle_set_trusted_remote_address<S: EntityStore>(
    store: &mut S,
    event: &SetTrustedRemoteAddress,
) -> Result<(), HandlerError> {
    let mut chain = load_destination_chain(store, &event.remote_chain_id)?;
    chain.trusted_remote = ids::to_hex(&event.new_remote_address);
    store.save(&chain);
    Ok(())
}

pub fn handle_set_max_daily_limit<S: EntityStore>(
    store: &mut S,
    event: &SetMaxDailyLimit,
) -> Result<(), HandlerError> {
    let mut chain = load_destination_chain(store, &event.chain_id)?;
    chain.max_daily_limit_mantissa = event.new_max_limit.to_string();
    store.save(&chain);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use subgraph_substreams::testing::{address, big, event_context};

    const SENDER: u8 = 0x36;
    const ARBITRUM: &str = "110";

    fn ctx(tx: u8) -> EventContext {
        event_context(&address(SENDER), tx)
    }

    fn remote(store: &MemoryStore, id: &str) -> RemoteProposal {
        load(store, id).unwrap()
    }

    #[test]
    fn test_store_then_retry_then_clear() {
        let mut store = MemoryStore::new();
        let stored = StorePayload {
            proposal_id: big("12"),
            remote_chain_id: big(ARBITRUM),
            payload: vec![0x01, 0x02],
            adapter_params: vec![0x00, 0x01],
            value: big("5000"),
            reason: b"out of gas".to_vec(),
        };
        handle_store_payload(&mut store, &ctx(1), &stored).unwrap();

        let proposal = remote(&store, "12");
        assert!(proposal.stored);
        assert!(!proposal.executed);
        assert_eq!(proposal.remote_chain_id, 110);
        assert_eq!(proposal.failure_reason, ids::to_hex(b"out of gas"));

        let executed = ExecuteRemoteProposal {
            remote_chain_id: big(ARBITRUM),
            proposal_id: big("12"),
            payload: vec![0x01, 0x02],
        };
        handle_execute_remote_proposal(&mut store, &ctx(2), &executed).unwrap();
        handle_clear_payload(&mut store, &ctx(2), &ClearPayload { proposal_id: big("12"), execution_hash: [0x77; 32] })
            .unwrap();

        let proposal = remote(&store, "12");
        assert!(proposal.executed && proposal.stored && proposal.cleared);
        assert_eq!(proposal.stored_tx_hash, ids::to_hex(&[1; 32]));
        assert_eq!(proposal.cleared_tx_hash, ids::to_hex(&[2; 32]));
        assert_eq!(proposal.execution_hash, ids::to_hex(&[0x77; 32]));
        assert_eq!(store.count::<RemoteProposal>(), 1);
    }

    #[test]
    fn test_clear_unknown_payload_is_missing_entity() {
        let mut store = MemoryStore::new();
        let err = handle_clear_payload(&mut store, &ctx(1), &ClearPayload { proposal_id: big("1"), execution_hash: [0; 32] })
            .unwrap_err();
        assert!(matches!(err, HandlerError::MissingEntity { entity: "RemoteProposal", .. }));
    }

    #[test]
    fn test_destination_chain_configuration() {
        let mut store = MemoryStore::new();
        let trusted = SetTrustedRemoteAddress {
            remote_chain_id: big(ARBITRUM),
            old_remote_address: Vec::new(),
            new_remote_address: [address(0xaa), address(SENDER)].concat(),
        };
        handle_set_trusted_remote_address(&mut store, &trusted).unwrap();

        let limit = SetMaxDailyLimit { chain_id: big(ARBITRUM), old_max_limit: big("0"), new_max_limit: big("100") };
        handle_set_max_daily_limit(&mut store, &limit).unwrap();

        let chain: DestinationChain = load(&store, ARBITRUM).unwrap();
        assert_eq!(chain.chain_id, 110);
        assert_eq!(chain.trusted_remote, ids::to_hex(&[address(0xaa), address(SENDER)].concat()));
        assert_eq!(chain.max_daily_limit_mantissa, "100");
    }
}
