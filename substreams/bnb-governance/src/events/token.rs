use substreams::scalar::BigInt;
use subgraph_substreams::{counters::track_non_zero, ids, mantissa, prelude::*};

use crate::{
    abi::xvs::events::Transfer,
    entities::{load_governance, new_token_holder},
    pb::subgraph::governance::v1::{Governance, TokenHolder},
};

fn move_balance<S: EntityStore>(
    store: &mut S,
    governance: &mut Governance,
    account: &[u8],
    delta: BigInt,
) -> Result<(), HandlerError> {
    if ids::is_null_address(account) {
        return Ok(());
    }

    let loaded = get_or_create::<TokenHolder, _, _>(store, &ids::address_id(account), new_token_holder)?;
    if loaded.created {
        governance.total_token_holders += 1;
    }
    let mut holder = loaded.entity;

    let before = mantissa::parse("balance_mantissa", &holder.balance_mantissa)?;
    let after = before.clone() + delta;
    track_non_zero(&mut governance.current_token_holders, &before, &after);

    holder.balance_mantissa = after.to_string();
    store.save(&holder);
    Ok(())
}

/// Mints and burns touch a single holder; the null address is never tracked.
pub fn handle_transfer<S: EntityStore>(store: &mut S, event: &Transfer) -> Result<(), HandlerError> {
    let mut governance = load_governance(store)?;
    move_balance(store, &mut governance, &event.from, BigInt::zero() - event.amount.clone())?;
    move_balance(store, &mut governance, &event.to, event.amount.clone())?;
    store.save(&governance);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::GOVERNANCE_ID;
    use subgraph_substreams::testing::{address, big};

    fn transfer(from: u8, to: u8, amount: &str) -> Transfer {
        Transfer { from: address(from), to: address(to), amount: big(amount) }
    }

    fn governance(store: &MemoryStore) -> Governance {
        load(store, GOVERNANCE_ID).unwrap()
    }

    #[test]
    fn test_holder_creation_counts_once() {
        let mut store = MemoryStore::new();
        handle_transfer(&mut store, &transfer(0, 1, "100")).unwrap();
        handle_transfer(&mut store, &transfer(0, 1, "100")).unwrap();

        let governance = governance(&store);
        assert_eq!(governance.total_token_holders, 1);
        assert_eq!(governance.current_token_holders, 1);
        assert_eq!(store.count::<TokenHolder>(), 1);
    }

    #[test]
    fn test_current_holders_match_non_zero_balances() {
        let mut store = MemoryStore::new();
        for account in 1..=5 {
            handle_transfer(&mut store, &transfer(0, account, "100")).unwrap();
        }
        handle_transfer(&mut store, &transfer(1, 2, "100")).unwrap();
        handle_transfer(&mut store, &transfer(3, 0, "100")).unwrap();
        handle_transfer(&mut store, &transfer(4, 6, "30")).unwrap();
        handle_transfer(&mut store, &transfer(5, 5, "100")).unwrap();

        let non_zero = store
            .all::<TokenHolder>()
            .unwrap()
            .iter()
            .filter(|holder| holder.balance_mantissa != "0")
            .count() as i64;

        let governance = governance(&store);
        assert_eq!(non_zero, 4);
        assert_eq!(governance.current_token_holders, non_zero);
        assert_eq!(governance.total_token_holders, 6);
        assert!(!store.has::<TokenHolder>(&ids::address_id(&ids::NULL_ADDRESS)));
    }
}
