pub mod connection_pool;
pub mod local_store;
mod mapper;
mod queries;

pub use connection_pool::ConnectionPool;
pub use local_store::SqliteLocalStore;
