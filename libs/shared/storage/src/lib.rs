pub mod crypto;
pub mod keys;
pub mod store;

pub use store::{StorageError, Store};
