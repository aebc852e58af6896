//! itemsvc: a small JSON-over-HTTP service for an in-memory item collection.

pub mod config;
pub mod protocol;
pub mod server;
pub mod store;

pub use config::Config;
pub use server::Server;
pub use store::{Item, ItemStore};
