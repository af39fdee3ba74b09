use subgraph_substreams::{ids, mantissa, prelude::*};
use tracing::debug;

use crate::{
    abi::governor_bravo::events::{
        NewAdmin, NewGuardian, NewImplementation, ProposalCanceled, ProposalCreated,
        ProposalExecuted, ProposalQueued, VoteCast,
    },
    entities::{load_delegate, load_governance, new_proposal, new_vote, vote_id},
    pb::subgraph::governance::v1::{Proposal, VoteSupport},
};

pub fn handle_proposal_created<S: EntityStore>(
    store: &mut S,
    ctx: &EventContext,
    event: &ProposalCreated,
) -> Result<(), HandlerError> {
    let loaded = get_or_create(store, &ids::numeric_id(&event.id), new_proposal)?;
    let mut proposal = loaded.entity;

    if loaded.created {
        let mut governance = load_governance(store)?;
        governance.total_proposals += 1;
        store.save(&governance);

        let mut proposer = load_delegate(store, &event.proposer)?;
        proposer.proposals_authored += 1;
        store.save(&proposer);
    }

    proposal.proposer = ids::address_id(&event.proposer);
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
    proposal.start_block = event.start_block.to_u64();
    proposal.end_block = event.end_block.to_u64();
    proposal.description = event.description.clone();
    proposal.proposal_type = event.proposal_type.to_i32();
    proposal.created_block = ctx.block_number;
    proposal.created_tx_hash = ctx.tx_hash_hex();
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

pub fn handle_vote_cast<S: EntityStore>(
    store: &mut S,
    ctx: &EventContext,
    event: &VoteCast,
) -> Result<(), HandlerError> {
    let mut proposal: Proposal = load(store, &ids::numeric_id(&event.proposal_id))?;
    let proposal_id = event.proposal_id.to_u64();
    let support = event.support.to_i32();

    match VoteSupport::from_i32(support) {
        Some(VoteSupport::For) => {
            proposal.for_votes_mantissa =
                mantissa::add("for_votes_mantissa", &proposal.for_votes_mantissa, &event.votes)?
        }
        Some(VoteSupport::Against) => {
            proposal.against_votes_mantissa = mantissa::add(
                "against_votes_mantissa",
                &proposal.against_votes_mantissa,
                &event.votes,
            )?
        }
        Some(VoteSupport::Abstain) => {
            proposal.abstain_votes_mantissa = mantissa::add(
                "abstain_votes_mantissa",
                &proposal.abstain_votes_mantissa,
                &event.votes,
            )?
        }
        None => debug!(proposal = proposal_id, support, "vote with unknown support value"),
    }
    store.save(&proposal);

    let mut vote = get_or_create(store, &vote_id(&event.voter, proposal_id), |_| {
        new_vote(&event.voter, proposal_id)
    })?
    .entity;
    vote.support = support;
    vote.votes_mantissa = event.votes.to_string();
    vote.reason = event.reason.clone();
    vote.block_number = ctx.block_number;
    vote.tx_hash = ctx.tx_hash_hex();
    store.save(&vote);
    Ok(())
}

pub fn handle_new_guardian<S: EntityStore>(
    store: &mut S,
    event: &NewGuardian,
) -> Result<(), HandlerError> {
    let mut governance = load_governance(store)?;
    governance.guardian = ids::address_id(&event.new_guardian);
    store.save(&governance);
    Ok(())
}

pub fn handle_new_admin<S: EntityStore>(
    store: &mut S,
    event: &NewAdmin,
) -> Result<(), HandlerError> {
    let mut governance = load_governance(store)?;
    governance.admin = ids::address_id(&event.new_admin);
    store.save(&governance);
    Ok(())
}

pub fn handle_new_implementation<S: EntityStore>(
    store: &mut S,
    event: &NewImplementation,
) -> Result<(), HandlerError> {
    let mut governance = load_governance(store)?;
    governance.implementation = ids::address_id(&event.new_implementation);
    store.save(&governance);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        entities::GOVERNANCE_ID,
        pb::subgraph::governance::v1::{Delegate, Governance, Vote},
    };
    use substreams::scalar::BigInt;
    use subgraph_substreams::testing::{address, big, event_context};

    const GOVERNOR: u8 = 0x2d;
    const PROPOSER: u8 = 0x01;

    fn ctx(tx: u8) -> EventContext {
        event_context(&address(GOVERNOR), tx)
    }

    fn created(id: u64) -> ProposalCreated {
        ProposalCreated {
            id: BigInt::from(id),
            proposer: address(PROPOSER),
            targets: vec![address(0x30)],
            values: vec![BigInt::zero()],
            signatures: vec!["_setPendingAdmin(address)".to_string()],
            calldatas: vec![vec![0xab; 32]],
            start_block: big("100"),
            end_block: big("200"),
            description: "# Upgrade the comptroller".to_string(),
            proposal_type: big("1"),
        }
    }

    fn proposal(store: &MemoryStore, id: &str) -> Proposal {
        load(store, id).unwrap()
    }

    fn vote(voter: u8, id: u64, support: &str, votes: &str) -> VoteCast {
        VoteCast {
            voter: address(voter),
            proposal_id: BigInt::from(id),
            support: big(support),
            votes: big(votes),
            reason: String::new(),
        }
    }

    #[test]
    fn test_proposal_created_counts_once() {
        let mut store = MemoryStore::new();
        handle_proposal_created(&mut store, &ctx(1), &created(7)).unwrap();
        handle_proposal_created(&mut store, &ctx(2), &created(7)).unwrap();

        let governance: Governance = load(&store, GOVERNANCE_ID).unwrap();
        assert_eq!(governance.total_proposals, 1);

        let proposer: Delegate = load(&store, &ids::address_id(&address(PROPOSER))).unwrap();
        assert_eq!(proposer.proposals_authored, 1);

        let proposal = proposal(&store, "7");
        assert_eq!(proposal.targets, vec![ids::address_id(&address(0x30))]);
        assert_eq!(proposal.values, vec!["0"]);
        assert_eq!(proposal.calldatas, vec![ids::to_hex(&[0xab; 32])]);
        assert_eq!(proposal.end_block, 200);
        assert_eq!(proposal.proposal_type, 1);
    }

    #[test]
    fn test_queue_then_execute() {
        let mut store = MemoryStore::new();
        handle_proposal_created(&mut store, &ctx(1), &created(3)).unwrap();
        handle_proposal_queued(&mut store, &ctx(2), &ProposalQueued { id: big("3"), eta: big("1700000000") })
            .unwrap();
        handle_proposal_executed(&mut store, &ctx(3), &ProposalExecuted { id: big("3") }).unwrap();

        let proposal = proposal(&store, "3");
        assert!(proposal.queued);
        assert!(proposal.executed);
        assert_eq!(proposal.eta, 1700000000);
        assert_eq!(proposal.queued_tx_hash, ids::to_hex(&[2; 32]));
        assert_eq!(proposal.executed_tx_hash, ids::to_hex(&[3; 32]));
    }

    // Documented non-validation: transitions are recorded as they arrive.
    #[test]
    fn test_executed_without_queued_is_accepted() {
        let mut store = MemoryStore::new();
        handle_proposal_created(&mut store, &ctx(1), &created(4)).unwrap();
        handle_proposal_executed(&mut store, &ctx(2), &ProposalExecuted { id: big("4") }).unwrap();

        let proposal = proposal(&store, "4");
        assert!(proposal.executed);
        assert!(!proposal.queued);
        assert!(proposal.queued_tx_hash.is_empty());
    }

    #[test]
    fn test_cancel_after_execute_is_accepted() {
        let mut store = MemoryStore::new();
        handle_proposal_created(&mut store, &ctx(1), &created(5)).unwrap();
        handle_proposal_executed(&mut store, &ctx(2), &ProposalExecuted { id: big("5") }).unwrap();
        handle_proposal_canceled(&mut store, &ctx(3), &ProposalCanceled { id: big("5") }).unwrap();

        let proposal = proposal(&store, "5");
        assert!(proposal.executed);
        assert!(proposal.canceled);
    }

    #[test]
    fn test_transition_on_unknown_proposal_is_missing_entity() {
        let mut store = MemoryStore::new();
        let err = handle_proposal_queued(&mut store, &ctx(1), &ProposalQueued { id: big("9"), eta: big("1") })
            .unwrap_err();
        assert!(matches!(err, HandlerError::MissingEntity { entity: "Proposal", .. }));
    }

    #[test]
    fn test_votes_are_tallied_by_support() {
        let mut store = MemoryStore::new();
        handle_proposal_created(&mut store, &ctx(1), &created(8)).unwrap();
        handle_vote_cast(&mut store, &ctx(2), &vote(0x10, 8, "1", "600")).unwrap();
        handle_vote_cast(&mut store, &ctx(3), &vote(0x11, 8, "0", "250")).unwrap();
        handle_vote_cast(&mut store, &ctx(4), &vote(0x12, 8, "2", "5")).unwrap();
        handle_vote_cast(&mut store, &ctx(5), &vote(0x13, 8, "1", "400")).unwrap();

        let proposal = proposal(&store, "8");
        assert_eq!(proposal.for_votes_mantissa, "1000");
        assert_eq!(proposal.against_votes_mantissa, "250");
        assert_eq!(proposal.abstain_votes_mantissa, "5");

        let vote: Vote = load(&store, &vote_id(&address(0x11), 8)).unwrap();
        assert_eq!(vote.support, VoteSupport::Against as i32);
        assert_eq!(vote.votes_mantissa, "250");
        assert_eq!(vote.proposal, "8");
        assert_eq!(store.count::<Vote>(), 4);
    }

    #[test]
    fn test_guardian_admin_and_implementation() {
        let mut store = MemoryStore::new();
        handle_new_guardian(&mut store, &NewGuardian { old_guardian: address(0), new_guardian: address(0x41) })
            .unwrap();
        handle_new_admin(&mut store, &NewAdmin { old_admin: address(0), new_admin: address(0x42) }).unwrap();
        handle_new_implementation(
            &mut store,
            &NewImplementation { old_implementation: address(0), new_implementation: address(0x43) },
        )
        .unwrap();

        let governance: Governance = load(&store, GOVERNANCE_ID).unwrap();
        assert_eq!(governance.guardian, ids::address_id(&address(0x41)));
        assert_eq!(governance.admin, ids::address_id(&address(0x42)));
        assert_eq!(governance.implementation, ids::address_id(&address(0x43)));
    }
}
