use std::collections::BTreeMap;

use crate::errors::HandlerError;

/// A keyed record persisted by the indexing host.
///
/// Entities are prost messages so the store can hold them as raw bytes, the same way
/// `StoreSetProto` keeps its values.
pub trait Entity: prost::Message + Default + Clone {
    /// Entity type name, used as the store namespace.
    const NAME: &'static str;

    fn id(&self) -> &str;
}

/// Implements [`Entity`] for prost messages carrying a `string id` field.
#[macro_export]
macro_rules! entity {
    ($($ty:ty => $name:literal),* $(,)?) => {
        $(
            impl $crate::store::Entity for $ty {
                const NAME: &'static str = $name;

                fn id(&self) -> &str {
                    &self.id
                }
            }
        )*
    };
}

/// Key-value view of the entity store injected into every handler.
///
/// Implementors only provide the raw operations; typed access is layered on top.
pub trait EntityStore {
    fn get_raw(&self, entity: &str, id: &str) -> Option<Vec<u8>>;

    fn set_raw(&mut self, entity: &str, id: &str, value: Vec<u8>);

    /// Removes a record, returning whether it existed.
    fn delete_raw(&mut self, entity: &str, id: &str) -> bool;

    fn get<E: Entity>(&self, id: &str) -> Result<Option<E>, HandlerError>
    where
        Self: Sized,
    {
        self.get_raw(E::NAME, id)
            .map(|raw| {
                E::decode(raw.as_slice()).map_err(|source| HandlerError::Decode {
                    entity: E::NAME,
                    id: id.to_string(),
                    source,
                })
            })
            .transpose()
    }

    fn has<E: Entity>(&self, id: &str) -> bool
    where
        Self: Sized,
    {
        self.get_raw(E::NAME, id).is_some()
    }

    fn save<E: Entity>(&mut self, entity: &E)
    where
        Self: Sized,
    {
        self.set_raw(E::NAME, entity.id(), entity.encode_to_vec());
    }

    fn remove<E: Entity>(&mut self, id: &str) -> bool
    where
        Self: Sized,
    {
        self.delete_raw(E::NAME, id)
    }
}

/// In-memory store, ordered by entity type then id so snapshots are deterministic.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    tables: BTreeMap<String, BTreeMap<String, Vec<u8>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records of the given entity type.
    pub fn count<E: Entity>(&self) -> usize {
        self.tables
            .get(E::NAME)
            .map_or(0, BTreeMap::len)
    }

    /// Decodes every record of the given entity type, ordered by id.
    pub fn all<E: Entity>(&self) -> Result<Vec<E>, HandlerError> {
        self.tables
            .get(E::NAME)
            .into_iter()
            .flat_map(|table| table.iter())
            .map(|(id, raw)| {
                E::decode(raw.as_slice()).map_err(|source| HandlerError::Decode {
                    entity: E::NAME,
                    id: id.clone(),
                    source,
                })
            })
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.tables
            .values()
            .all(BTreeMap::is_empty)
    }
}

impl EntityStore for MemoryStore {
    fn get_raw(&self, entity: &str, id: &str) -> Option<Vec<u8>> {
        self.tables
            .get(entity)
            .and_then(|table| table.get(id))
            .cloned()
    }

    fn set_raw(&mut self, entity: &str, id: &str, value: Vec<u8>) {
        self.tables
            .entry(entity.to_string())
            .or_default()
            .insert(id.to_string(), value);
    }

    fn delete_raw(&mut self, entity: &str, id: &str) -> bool {
        self.tables
            .get_mut(entity)
            .and_then(|table| table.remove(id))
            .is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pb::subgraph::common::v1::Permission;

    fn permission(id: &str) -> Permission {
        Permission { id: id.to_string(), function_sig: "foo()".to_string(), ..Default::default() }
    }

    #[test]
    fn test_save_then_get_returns_same_record() {
        let mut store = MemoryStore::new();
        store.save(&permission("0x01"));

        let loaded: Permission = store
            .get("0x01")
            .unwrap()
            .unwrap();
        assert_eq!(loaded, permission("0x01"));
        assert_eq!(store.count::<Permission>(), 1);
    }

    #[test]
    fn test_remove_is_explicit_and_reports_existence() {
        let mut store = MemoryStore::new();
        store.save(&permission("0x01"));

        assert!(store.remove::<Permission>("0x01"));
        assert!(!store.remove::<Permission>("0x01"));
        assert!(store.get::<Permission>("0x01").unwrap().is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn test_all_is_ordered_by_id() {
        let mut store = MemoryStore::new();
        store.save(&permission("0x02"));
        store.save(&permission("0x01"));

        let ids: Vec<String> = store
            .all::<Permission>()
            .unwrap()
            .into_iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec!["0x01", "0x02"]);
    }

    #[test]
    fn test_corrupt_record_is_a_decode_error() {
        let mut store = MemoryStore::new();
        store.set_raw("Permission", "0x01", vec![0xff, 0xff, 0xff]);

        let err = store
            .get::<Permission>("0x01")
            .unwrap_err();
        assert!(matches!(err, HandlerError::Decode { entity: "Permission", .. }));
    }
}
