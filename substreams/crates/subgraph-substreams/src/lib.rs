pub mod accessor;
pub mod context;
pub mod counters;
pub mod errors;
pub mod ids;
pub mod mantissa;
pub mod pb;
pub mod permissions;
pub mod reverted;
pub mod store;
pub mod subgraph;

#[cfg(feature = "testing")]
pub mod testing;

pub mod prelude {
    pub use super::{
        accessor::{get_or_create, load, update, Loaded},
        context::EventContext,
        errors::HandlerError,
        store::{Entity, EntityStore, MemoryStore},
        subgraph::{process_block, BlockReport, Subgraph},
    };
}
