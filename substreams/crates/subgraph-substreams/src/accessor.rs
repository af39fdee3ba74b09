use crate::{
    errors::HandlerError,
    store::{Entity, EntityStore},
};

/// Result of [`get_or_create`].
#[derive(Debug, Clone, PartialEq)]
pub struct Loaded<E> {
    pub entity: E,
    /// `true` only when no record existed for the id. Creation side effects (parent counters)
    /// must be gated on this flag.
    pub created: bool,
}

/// Loads the record stored under `id`, or builds a fresh one with `factory`.
///
/// A freshly built record is not committed; the caller saves it once its fields are set.
pub fn get_or_create<E, S, F>(store: &S, id: &str, factory: F) -> Result<Loaded<E>, HandlerError>
where
    E: Entity,
    S: EntityStore,
    F: FnOnce(&str) -> E,
{
    Ok(match store.get::<E>(id)? {
        Some(entity) => Loaded { entity, created: false },
        None => Loaded { entity: factory(id), created: true },
    })
}

/// Loads a record that an earlier event must have created.
pub fn load<E, S>(store: &S, id: &str) -> Result<E, HandlerError>
where
    E: Entity,
    S: EntityStore,
{
    store
        .get::<E>(id)?
        .ok_or_else(|| HandlerError::missing::<E>(id))
}

/// Loads a required record, applies `mutate` and commits it.
pub fn update<E, S, F>(store: &mut S, id: &str, mutate: F) -> Result<E, HandlerError>
where
    E: Entity,
    S: EntityStore,
    F: FnOnce(&mut E) -> Result<(), HandlerError>,
{
    let mut entity = load::<E, S>(store, id)?;
    mutate(&mut entity)?;
    store.save(&entity);
    Ok(entity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{pb::subgraph::common::v1::Permission, store::MemoryStore};

    fn new_permission(id: &str) -> Permission {
        Permission { id: id.to_string(), ..Default::default() }
    }

    #[test]
    fn test_get_or_create_flags_creation_once() {
        let mut store = MemoryStore::new();
        let mut creations = 0;

        for _ in 0..2 {
            let loaded = get_or_create(&store, "0xab", new_permission).unwrap();
            if loaded.created {
                creations += 1;
            }
            store.save(&loaded.entity);
        }

        assert_eq!(creations, 1);
        assert_eq!(store.count::<Permission>(), 1);
    }

    #[test]
    fn test_get_or_create_returns_stored_state() {
        let mut store = MemoryStore::new();
        let mut permission = new_permission("0xab");
        permission.function_sig = "foo()".to_string();
        store.save(&permission);

        let loaded = get_or_create(&store, "0xab", new_permission).unwrap();
        assert!(!loaded.created);
        assert_eq!(loaded.entity.function_sig, "foo()");
    }

    #[test]
    fn test_load_missing_entity() {
        let store = MemoryStore::new();
        let err = load::<Permission, _>(&store, "0xab").unwrap_err();
        assert!(matches!(
            err,
            HandlerError::MissingEntity { entity: "Permission", ref id } if id == "0xab"
        ));
    }

    #[test]
    fn test_update_commits_mutation() {
        let mut store = MemoryStore::new();
        store.save(&new_permission("0xab"));

        update::<Permission, _, _>(&mut store, "0xab", |p| {
            p.updated_at = "0x01".to_string();
            Ok(())
        })
        .unwrap();

        let stored: Permission = load(&store, "0xab").unwrap();
        assert_eq!(stored.updated_at, "0x01");
    }
}
