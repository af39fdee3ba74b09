use substreams::scalar::BigInt;
use subgraph_substreams::{ids, mantissa, prelude::*};

use crate::pb::subgraph::governance::v1::{
    DestinationChain, Delegate, Governance, Proposal, RemoteProposal, TokenHolder, Vote,
    VoteSupport,
};

subgraph_substreams::entity!(
    Governance => "Governance",
    Proposal => "Proposal",
    Vote => "Vote",
    Delegate => "Delegate",
    TokenHolder => "TokenHolder",
    RemoteProposal => "RemoteProposal",
    DestinationChain => "DestinationChain",
);

pub const GOVERNANCE_ID: &str = "GOVERNANCE";

pub fn new_governance(id: &str) -> Governance {
    let null = ids::address_id(&ids::NULL_ADDRESS);
    Governance {
        id: id.to_string(),
        total_proposals: 0,
        total_delegates: 0,
        total_token_holders: 0,
        current_token_holders: 0,
        guardian: null.clone(),
        admin: null.clone(),
        implementation: null,
    }
}

pub fn load_governance<S: EntityStore>(store: &S) -> Result<Governance, HandlerError> {
    Ok(get_or_create(store, GOVERNANCE_ID, new_governance)?.entity)
}

pub fn new_proposal(id: &str) -> Proposal {
    Proposal {
        id: id.to_string(),
        proposer: ids::address_id(&ids::NULL_ADDRESS),
        for_votes_mantissa: mantissa::zero(),
        against_votes_mantissa: mantissa::zero(),
        abstain_votes_mantissa: mantissa::zero(),
        ..Default::default()
    }
}

pub fn vote_id(voter: &[u8], proposal_id: u64) -> String {
    ids::composite_id(&[voter, &proposal_id.to_be_bytes()])
}

pub fn new_vote(voter: &[u8], proposal_id: u64) -> Vote {
    Vote {
        id: vote_id(voter, proposal_id),
        proposal: proposal_id.to_string(),
        voter: ids::address_id(voter),
        support: VoteSupport::Against as i32,
        votes_mantissa: mantissa::zero(),
        ..Default::default()
    }
}

pub fn new_delegate(id: &str) -> Delegate {
    Delegate {
        id: id.to_string(),
        staked_xvs_mantissa: mantissa::zero(),
        total_votes_mantissa: mantissa::zero(),
        delegatee: ids::address_id(&ids::NULL_ADDRESS),
        delegator_count: 0,
        proposals_authored: 0,
    }
}

pub fn load_delegate<S: EntityStore>(store: &S, account: &[u8]) -> Result<Delegate, HandlerError> {
    Ok(get_or_create(store, &ids::address_id(account), new_delegate)?.entity)
}

/// A delegate that stakes nothing, holds no votes, has no delegators, delegates to no one and
/// authored nothing carries no state worth keeping.
pub fn is_empty_delegate(delegate: &Delegate) -> bool {
    delegate.staked_xvs_mantissa == "0"
        && delegate.total_votes_mantissa == "0"
        && delegate.delegator_count == 0
        && delegate.delegatee == ids::address_id(&ids::NULL_ADDRESS)
        && delegate.proposals_authored == 0
}

/// Saves `delegate`, or deletes its record once it is fully withdrawn.
pub fn save_or_prune_delegate<S: EntityStore>(store: &mut S, delegate: &Delegate) {
    if is_empty_delegate(delegate) {
        store.remove::<Delegate>(&delegate.id);
    } else {
        store.save(delegate);
    }
}

pub fn new_token_holder(id: &str) -> TokenHolder {
    TokenHolder { id: id.to_string(), balance_mantissa: mantissa::zero() }
}

pub fn new_remote_proposal(id: &str) -> RemoteProposal {
    RemoteProposal {
        id: id.to_string(),
        value_mantissa: mantissa::zero(),
        ..Default::default()
    }
}

pub fn new_destination_chain(chain_id: &BigInt) -> DestinationChain {
    DestinationChain {
        id: ids::numeric_id(chain_id),
        chain_id: chain_id.to_u64() as u32,
        trusted_remote: ids::address_id(&ids::NULL_ADDRESS),
        max_daily_limit_mantissa: mantissa::zero(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vote_id_is_voter_then_proposal() {
        let voter = [0x22; 20];
        let id = vote_id(&voter, 258);
        assert_eq!(id, format!("0x{}0000000000000102", "22".repeat(20)));
        assert_eq!(id, vote_id(&voter, 258));
    }

    #[test]
    fn test_delegate_emptiness() {
        let mut delegate = new_delegate("0x01");
        assert!(is_empty_delegate(&delegate));

        delegate.proposals_authored = 1;
        assert!(!is_empty_delegate(&delegate));

        delegate.proposals_authored = 0;
        delegate.staked_xvs_mantissa = "5".to_string();
        assert!(!is_empty_delegate(&delegate));
    }

    #[test]
    fn test_prune_removes_empty_delegate() {
        let mut store = MemoryStore::new();
        let mut delegate = new_delegate("0x01");
        delegate.total_votes_mantissa = "10".to_string();
        save_or_prune_delegate(&mut store, &delegate);
        assert_eq!(store.count::<Delegate>(), 1);

        delegate.total_votes_mantissa = "0".to_string();
        save_or_prune_delegate(&mut store, &delegate);
        assert_eq!(store.count::<Delegate>(), 0);
    }
}
