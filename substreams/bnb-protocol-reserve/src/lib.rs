mod abi;
pub mod entities;
pub mod events;
mod modules;
pub mod params;
pub mod pb;
pub mod reader;

pub use modules::ProtocolReserve;
