/// Key-value storage backends and the JSON codec over them
pub mod storage;

/// Session persistence
pub mod store;

pub use storage::{FileStorage, JsonStorage, KeyValueStorage, MemoryStorage, StoredValue};
pub use store::SessionStore;
