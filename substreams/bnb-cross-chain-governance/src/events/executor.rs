use subgraph_substreams::{ids, prelude::*};

use crate::{
    abi::omnichain_governance_executor::events::{
        NewGuardian, ProposalCanceled, ProposalExecuted, ProposalQueued, ProposalReceived,
        SetMaxDailyReceiveLimit, SetSrcChainId, TimelockAdded,
    },
    entities::{load_governance, new_governance_route, new_proposal, route_id},
    pb::subgraph::cross_chain_governance::v1::{GovernanceRoute, Proposal},
};

pub fn handle_proposal_received<S: EntityStore>(
    store: &mut S,
    ctx: &EventContext,
    event: &ProposalReceived,
) -> Result<(), HandlerError> {
    let loaded = get_or_create(store, &ids::numeric_id(&event.proposal_id), new_proposal)?;
    if loaded.created {
        let mut governance = load_governance(store, &ctx.address)?;
        governance.total_proposals += 1;
        store.save(&governance);
    }

    let mut proposal = loaded.entity;
    proposal.targets = event
        .targets
        .iter()
        .map(|target| ids::address_id(target))
        .collect();
    proposal.values = event
        .values
        .iter()
        .map(ToString::to_string)
        .collect();
    proposal.signatures = event.signatures.clone();
    proposal.calldatas = event
        .calldatas
        .iter()
        .map(|calldata| ids::to_hex(calldata))
        .collect();
    proposal.proposal_type = event.proposal_type.to_i32();
    proposal.route = route_id(proposal.proposal_type);
    proposal.received_block = ctx.block_number;
    proposal.received_tx_hash = ctx.tx_hash_hex();
    store.save(&proposal);
    Ok(())
}

pub fn handle_proposal_queued<S: EntityStore>(
    store: &mut S,
    ctx: &EventContext,
    event: &ProposalQueued,
) -> Result<(), HandlerError> {
    update::<Proposal, _, _>(store, &ids::numeric_id(&event.id), |proposal| {
        proposal.queued = true;
        proposal.eta = event.eta.to_u64();
        proposal.queued_tx_hash = ctx.tx_hash_hex();
        Ok(())
    })?;
    Ok(())
}

/// Marks the proposal executed whatever flags it carried before.
pub fn handle_proposal_executed<S: EntityStore>(
    store: &mut S,
    ctx: &EventContext,
    event: &ProposalExecuted,
) -> Result<(), HandlerError> {
    update::<Proposal, _, _>(store, &ids::numeric_id(&event.id), |proposal| {
        proposal.executed = true;
        proposal.executed_tx_hash = ctx.tx_hash_hex();
        Ok(())
    })?;
    Ok(())
}

pub fn handle_proposal_canceled<S: EntityStore>(
    store: &mut S,
    ctx: &EventContext,
    event: &ProposalCanceled,
) -> Result<(), HandlerError> {
    update::<Proposal, _, _>(store, &ids::numeric_id(&event.id), |proposal| {
        proposal.canceled = true;
        proposal.canceled_tx_hash = ctx.tx_hash_hex();
        Ok(())
    })?;
    Ok(())
}

pub fn handle_set_max_daily_receive_limit<S: EntityStore>(
    store: &mut S,
    ctx: &EventContext,
    event: &SetMaxDailyReceiveLimit,
) -> Result<(), HandlerError> {
    let mut governance = load_governance(store, &ctx.address)?;
    governance.max_daily_receive_limit_mantissa = event.new_max_limit.to_string();
    store.save(&governance);
    Ok(())
}

pub fn handle_new_guardian<S: EntityStore>(
    store: &mut S,
    ctx: &EventContext,
    event: &NewGuardian,
) -> Result<(), HandlerError> {
    let mut governance = load_governance(store, &ctx.address)?;
    governance.guardian = ids::address_id(&event.new_guardian);
    store.save(&governance);
    Ok(())
}

pub fn handle_set_src_chain_id<S: EntityStore>(
    store: &mut S,
    ctx: &EventContext,
    event: &SetSrcChainId,
) -> Result<(), HandlerError> {
    let mut governance = load_governance(store, &ctx.address)?;
    governance.src_chain_id = event.new_src_chain_id.to_u64() as u32;
    store.save(&governance);
    Ok(())
}

pub fn handle_timelock_added<S: EntityStore>(
    store: &mut S,
    event: &TimelockAdded,
) -> Result<(), HandlerError> {
    let route_type = event.route_type.to_i32();
    let mut route = get_or_create::<GovernanceRoute, _, _>(store, &route_id(route_type), |_| {
        new_governance_route(route_type)
    })?
    .entity;
    route.timelock_address = ids::address_id(&event.new_timelock);
    store.save(&route);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{entities::GOVERNANCE_ID, pb::subgraph::cross_chain_governance::v1::Governance};
    use substreams::scalar::BigInt;
    use subgraph_substreams::testing::{address, big, event_context};

    const EXECUTOR: u8 = 0xd7;

    fn ctx(tx: u8) -> EventContext {
        event_context(&address(EXECUTOR), tx)
    }

    fn received(id: &str, proposal_type: &str) -> ProposalReceived {
        ProposalReceived {
            proposal_id: big(id),
            targets: vec![address(0x30), address(0x31)],
            values: vec![BigInt::zero(), big("1")],
            signatures: vec!["setMaxDailyReceiveLimit(uint256)".to_string(), String::new()],
            calldatas: vec![vec![0x01], Vec::new()],
            proposal_type: big(proposal_type),
        }
    }

    fn proposal(store: &MemoryStore, id: &str) -> Proposal {
        load(store, id).unwrap()
    }

    #[test]
    fn test_received_proposal_counts_once() {
        let mut store = MemoryStore::new();
        handle_proposal_received(&mut store, &ctx(1), &received("5", "1")).unwrap();
        handle_proposal_received(&mut store, &ctx(2), &received("5", "1")).unwrap();

        let governance: Governance = load(&store, GOVERNANCE_ID).unwrap();
        assert_eq!(governance.total_proposals, 1);
        assert_eq!(governance.address, ids::address_id(&address(EXECUTOR)));

        let proposal = proposal(&store, "5");
        assert_eq!(proposal.route, "1");
        assert_eq!(proposal.values, vec!["0", "1"]);
        assert_eq!(proposal.calldatas, vec!["0x01", "0x"]);
        assert_eq!(proposal.received_tx_hash, ids::to_hex(&[2; 32]));
    }

    // Documented non-validation: transitions are recorded as they arrive.
    #[test]
    fn test_executed_without_queued_is_accepted() {
        let mut store = MemoryStore::new();
        handle_proposal_received(&mut store, &ctx(1), &received("6", "0")).unwrap();
        handle_proposal_executed(&mut store, &ctx(2), &ProposalExecuted { id: big("6") }).unwrap();

        let proposal = proposal(&store, "6");
        assert!(proposal.executed);
        assert!(!proposal.queued);
    }

    #[test]
    fn test_queue_cancel() {
        let mut store = MemoryStore::new();
        handle_proposal_received(&mut store, &ctx(1), &received("7", "2")).unwrap();
        handle_proposal_queued(&mut store, &ctx(2), &ProposalQueued { id: big("7"), eta: big("99") }).unwrap();
        handle_proposal_canceled(&mut store, &ctx(3), &ProposalCanceled { id: big("7") }).unwrap();

        let proposal = proposal(&store, "7");
        assert!(proposal.queued && proposal.canceled);
        assert_eq!(proposal.eta, 99);
        assert_eq!(proposal.canceled_tx_hash, ids::to_hex(&[3; 32]));
    }

    #[test]
    fn test_executor_configuration() {
        let mut store = MemoryStore::new();
        handle_set_max_daily_receive_limit(
            &mut store,
            &ctx(1),
            &SetMaxDailyReceiveLimit { old_max_limit: big("0"), new_max_limit: big("100") },
        )
        .unwrap();
        handle_set_src_chain_id(
            &mut store,
            &ctx(1),
            &SetSrcChainId { old_src_chain_id: big("0"), new_src_chain_id: big("102") },
        )
        .unwrap();
        handle_new_guardian(
            &mut store,
            &ctx(1),
            &NewGuardian { old_guardian: address(0), new_guardian: address(0x41) },
        )
        .unwrap();
        handle_timelock_added(
            &mut store,
            &TimelockAdded { route_type: big("2"), old_timelock: address(0), new_timelock: address(0x50) },
        )
        .unwrap();

        let governance: Governance = load(&store, GOVERNANCE_ID).unwrap();
        assert_eq!(governance.max_daily_receive_limit_mantissa, "100");
        assert_eq!(governance.src_chain_id, 102);
        assert_eq!(governance.guardian, ids::address_id(&address(0x41)));

        let route: GovernanceRoute = load(&store, "2").unwrap();
        assert_eq!(route.route_type, 2);
        assert_eq!(route.timelock_address, ids::address_id(&address(0x50)));
    }
}
