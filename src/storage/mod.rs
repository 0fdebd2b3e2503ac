//! Storage implementations for different backends

pub mod in_memory;
#[cfg(feature = "postgres")]
pub mod postgres;
pub mod stores;

pub use in_memory::InMemoryDataService;
#[cfg(feature = "postgres")]
pub use postgres::PostgresDataService;
pub use stores::Stores;
