//! Access control permissions, shared by every package that indexes an access control manager.

use crate::{
    accessor::get_or_create,
    context::EventContext,
    errors::HandlerError,
    ids,
    pb::subgraph::common::v1::{Permission, PermissionStatus},
    store::EntityStore,
};

crate::entity!(Permission => "Permission");

/// A `PermissionGranted` or `PermissionRevoked` event, tagged by the dispatcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermissionChange {
    pub status: PermissionStatus,
    pub account: Vec<u8>,
    pub contract: Vec<u8>,
    pub function_sig: String,
}

pub fn permission_id(account: &[u8], contract: &[u8], function_sig: &str) -> String {
    ids::composite_id(&[account, contract, function_sig.as_bytes()])
}

/// Upserts the permission of `account` over `contract.function_sig`.
pub fn apply<S: EntityStore>(
    store: &mut S,
    ctx: &EventContext,
    change: &PermissionChange,
) -> Result<(), HandlerError> {
    let id = permission_id(&change.account, &change.contract, &change.function_sig);
    let tx_hash = ctx.tx_hash_hex();

    let mut permission = get_or_create(store, &id, |id| Permission {
        id: id.to_string(),
        account_address: ids::address_id(&change.account),
        contract_address: ids::address_id(&change.contract),
        function_sig: change.function_sig.clone(),
        status: PermissionStatus::Granted as i32,
        created_at: tx_hash.clone(),
        updated_at: tx_hash.clone(),
    })?
    .entity;

    permission.status = change.status as i32;
    permission.updated_at = tx_hash;
    store.save(&permission);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{accessor::load, store::MemoryStore};

    const ACCOUNT: [u8; 20] = [0x22; 20];
    const CONTRACT: [u8; 20] = [0x33; 20];

    fn ctx(tx: u8) -> EventContext {
        EventContext { tx_hash: vec![tx; 32], ..Default::default() }
    }

    fn change(status: PermissionStatus) -> PermissionChange {
        PermissionChange {
            status,
            account: ACCOUNT.to_vec(),
            contract: CONTRACT.to_vec(),
            function_sig: "setCollateralFactor(address,uint256,uint256)".to_string(),
        }
    }

    #[test]
    fn test_grant_then_revoke_twice() {
        let mut store = MemoryStore::new();
        apply(&mut store, &ctx(1), &change(PermissionStatus::Granted)).unwrap();
        apply(&mut store, &ctx(2), &change(PermissionStatus::Revoked)).unwrap();
        apply(&mut store, &ctx(3), &change(PermissionStatus::Revoked)).unwrap();

        assert_eq!(store.count::<Permission>(), 1);
        let id = permission_id(&ACCOUNT, &CONTRACT, "setCollateralFactor(address,uint256,uint256)");
        let permission: Permission = load(&store, &id).unwrap();
        assert_eq!(permission.status, PermissionStatus::Revoked as i32);
        assert_eq!(permission.created_at, ids::to_hex(&[1; 32]));
        assert_eq!(permission.updated_at, ids::to_hex(&[3; 32]));
        assert_eq!(permission.account_address, ids::to_hex(&ACCOUNT));
    }

    #[test]
    fn test_distinct_signatures_are_distinct_records() {
        let mut store = MemoryStore::new();
        let mut other = change(PermissionStatus::Granted);
        other.function_sig = "setMarketBorrowCaps(address[],uint256[])".to_string();

        apply(&mut store, &ctx(1), &change(PermissionStatus::Granted)).unwrap();
        apply(&mut store, &ctx(1), &other).unwrap();

        assert_eq!(store.count::<Permission>(), 2);
    }
}
