use subgraph_substreams::{counters::track_non_zero, ids, mantissa, prelude::*};
use tracing::debug;

use crate::{
    abi::xvs_vault::events::{
        DelegateChangedV2, DelegateVotesChangedV2, Deposit, RequestedWithdrawal,
    },
    entities::{load_delegate, load_governance, save_or_prune_delegate},
};

/// Only stakes in the XVS pool (reward token XVS, pool id 0) carry voting power.
fn is_xvs_pool(xvs: &[u8], reward_token: &[u8], pid: &substreams::scalar::BigInt) -> bool {
    reward_token == xvs && pid.is_zero()
}

pub fn handle_deposit<S: EntityStore>(
    store: &mut S,
    xvs: &[u8],
    event: &Deposit,
) -> Result<(), HandlerError> {
    if !is_xvs_pool(xvs, &event.reward_token, &event.pid) {
        debug!(pid = %event.pid, "skipping deposit outside the XVS pool");
        return Ok(());
    }

    let mut delegate = load_delegate(store, &event.user)?;
    delegate.staked_xvs_mantissa =
        mantissa::add("staked_xvs_mantissa", &delegate.staked_xvs_mantissa, &event.amount)?;
    save_or_prune_delegate(store, &delegate);
    Ok(())
}

pub fn handle_requested_withdrawal<S: EntityStore>(
    store: &mut S,
    xvs: &[u8],
    event: &RequestedWithdrawal,
) -> Result<(), HandlerError> {
    if !is_xvs_pool(xvs, &event.reward_token, &event.pid) {
        debug!(pid = %event.pid, "skipping withdrawal outside the XVS pool");
        return Ok(());
    }

    let mut delegate = load_delegate(store, &event.user)?;
    delegate.staked_xvs_mantissa =
        mantissa::sub("staked_xvs_mantissa", &delegate.staked_xvs_mantissa, &event.amount)?;
    save_or_prune_delegate(store, &delegate);
    Ok(())
}

fn adjust_delegators<S: EntityStore>(
    store: &mut S,
    account: &[u8],
    delta: i64,
) -> Result<(), HandlerError> {
    if ids::is_null_address(account) {
        return Ok(());
    }
    let mut delegate = load_delegate(store, account)?;
    delegate.delegator_count += delta;
    save_or_prune_delegate(store, &delegate);
    Ok(())
}

/// Points the delegator at its new delegate and moves one delegator between the two delegates.
/// Each record is loaded only after the previous one is saved.
pub fn handle_delegate_changed<S: EntityStore>(
    store: &mut S,
    event: &DelegateChangedV2,
) -> Result<(), HandlerError> {
    let mut delegator = load_delegate(store, &event.delegator)?;
    delegator.delegatee = ids::address_id(&event.to_delegate);
    save_or_prune_delegate(store, &delegator);

    adjust_delegators(store, &event.from_delegate, -1)?;
    adjust_delegators(store, &event.to_delegate, 1)
}

/// `total_delegates` follows the stored vote balance, not the event's previous balance.
pub fn handle_delegate_votes_changed<S: EntityStore>(
    store: &mut S,
    event: &DelegateVotesChangedV2,
) -> Result<(), HandlerError> {
    let mut governance = load_governance(store)?;
    let mut delegate = load_delegate(store, &event.delegate)?;

    let before = mantissa::parse("total_votes_mantissa", &delegate.total_votes_mantissa)?;
    track_non_zero(&mut governance.total_delegates, &before, &event.new_balance);
    store.save(&governance);

    delegate.total_votes_mantissa = event.new_balance.to_string();
    save_or_prune_delegate(store, &delegate);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        entities::GOVERNANCE_ID,
        pb::subgraph::governance::v1::{Delegate, Governance},
    };
    use substreams::scalar::BigInt;
    use subgraph_substreams::testing::{address, big};

    const XVS: u8 = 0xcf;

    fn delegate(store: &MemoryStore, account: u8) -> Option<Delegate> {
        store
            .get(&ids::address_id(&address(account)))
            .unwrap()
    }

    fn votes_changed(account: u8, previous: &str, new: &str) -> DelegateVotesChangedV2 {
        DelegateVotesChangedV2 {
            delegate: address(account),
            previous_balance: big(previous),
            new_balance: big(new),
        }
    }

    fn changed(delegator: u8, from: u8, to: u8) -> DelegateChangedV2 {
        DelegateChangedV2 {
            delegator: address(delegator),
            from_delegate: address(from),
            to_delegate: address(to),
        }
    }

    fn deposit(user: u8, reward_token: u8, pid: u64, amount: &str) -> Deposit {
        Deposit {
            user: address(user),
            reward_token: address(reward_token),
            pid: BigInt::from(pid),
            amount: big(amount),
        }
    }

    #[test]
    fn test_deposit_outside_xvs_pool_is_ignored() {
        let mut store = MemoryStore::new();
        handle_deposit(&mut store, &address(XVS), &deposit(1, 0x55, 0, "10")).unwrap();
        handle_deposit(&mut store, &address(XVS), &deposit(1, XVS, 1, "10")).unwrap();
        assert!(store.is_empty());

        handle_deposit(&mut store, &address(XVS), &deposit(1, XVS, 0, "10")).unwrap();
        assert_eq!(delegate(&store, 1).unwrap().staked_xvs_mantissa, "10");
    }

    #[test]
    fn test_full_withdrawal_deletes_delegate() {
        let mut store = MemoryStore::new();
        handle_deposit(&mut store, &address(XVS), &deposit(1, XVS, 0, "10")).unwrap();

        let withdrawal = RequestedWithdrawal {
            user: address(1),
            reward_token: address(XVS),
            pid: BigInt::zero(),
            amount: big("10"),
        };
        handle_requested_withdrawal(&mut store, &address(XVS), &withdrawal).unwrap();
        assert!(delegate(&store, 1).is_none());
    }

    #[test]
    fn test_delegation_moves_delegators() {
        let mut store = MemoryStore::new();
        handle_delegate_changed(&mut store, &changed(1, 0, 2)).unwrap();
        handle_delegate_changed(&mut store, &changed(3, 0, 2)).unwrap();
        assert_eq!(delegate(&store, 2).unwrap().delegator_count, 2);
        assert_eq!(delegate(&store, 1).unwrap().delegatee, ids::address_id(&address(2)));

        handle_delegate_changed(&mut store, &changed(1, 2, 4)).unwrap();
        assert_eq!(delegate(&store, 2).unwrap().delegator_count, 1);
        assert_eq!(delegate(&store, 4).unwrap().delegator_count, 1);

        // undelegating leaves nothing behind for account 3 or its former delegate
        handle_delegate_changed(&mut store, &changed(3, 2, 0)).unwrap();
        assert!(delegate(&store, 3).is_none());
        assert!(delegate(&store, 2).is_none());
    }

    #[test]
    fn test_self_delegation() {
        let mut store = MemoryStore::new();
        handle_delegate_changed(&mut store, &changed(1, 0, 1)).unwrap();

        let delegate = delegate(&store, 1).unwrap();
        assert_eq!(delegate.delegatee, ids::address_id(&address(1)));
        assert_eq!(delegate.delegator_count, 1);
    }

    #[test]
    fn test_total_delegates_counts_non_zero_votes() {
        let mut store = MemoryStore::new();
        for account in 1..=4 {
            handle_delegate_changed(&mut store, &changed(account, 0, account)).unwrap();
            handle_delegate_votes_changed(&mut store, &votes_changed(account, "0", "100")).unwrap();
        }
        handle_delegate_votes_changed(&mut store, &votes_changed(2, "100", "0")).unwrap();
        handle_delegate_votes_changed(&mut store, &votes_changed(3, "100", "40")).unwrap();
        handle_delegate_votes_changed(&mut store, &votes_changed(4, "100", "0")).unwrap();
        handle_delegate_votes_changed(&mut store, &votes_changed(4, "0", "0")).unwrap();

        let non_zero = store
            .all::<Delegate>()
            .unwrap()
            .iter()
            .filter(|delegate| delegate.total_votes_mantissa != "0")
            .count() as i64;
        let governance: Governance = load(&store, GOVERNANCE_ID).unwrap();
        assert_eq!(non_zero, 2);
        assert_eq!(governance.total_delegates, non_zero);
    }
}
