use subgraph_substreams::prelude::*;

use crate::{
    abi::omnichain_executor_owner::events::FunctionRegistryChanged,
    entities::{function_registry_id, new_function_registry},
    pb::subgraph::cross_chain_governance::v1::FunctionRegistry,
};

/// Registers a function on activation and deletes its record on deactivation.
pub fn handle_function_registry_changed<S: EntityStore>(
    store: &mut S,
    event: &FunctionRegistryChanged,
) -> Result<(), HandlerError> {
    if event.active {
        let entry = get_or_create(store, &function_registry_id(&event.signature), |_| {
            new_function_registry(&event.signature)
        })?
        .entity;
        store.save(&entry);
    } else {
        store.remove::<FunctionRegistry>(&function_registry_id(&event.signature));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn changed(signature: &str, active: bool) -> FunctionRegistryChanged {
        FunctionRegistryChanged { signature: signature.to_string(), active }
    }

    #[test]
    fn test_activate_then_deactivate() {
        let mut store = MemoryStore::new();
        handle_function_registry_changed(&mut store, &changed("setGuardian(address)", true)).unwrap();
        handle_function_registry_changed(&mut store, &changed("setGuardian(address)", true)).unwrap();
        handle_function_registry_changed(&mut store, &changed("pause()", true)).unwrap();
        assert_eq!(store.count::<FunctionRegistry>(), 2);

        handle_function_registry_changed(&mut store, &changed("setGuardian(address)", false)).unwrap();
        assert_eq!(store.count::<FunctionRegistry>(), 1);
        assert!(store.has::<FunctionRegistry>(&function_registry_id("pause()")));
    }

    #[test]
    fn test_deactivating_unknown_function_is_a_no_op() {
        let mut store = MemoryStore::new();
        handle_function_registry_changed(&mut store, &changed("pause()", false)).unwrap();
        assert!(store.is_empty());
    }
}
