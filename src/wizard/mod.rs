pub mod state;
pub mod storage;

#[cfg(test)]
mod storage_tests;

pub use state::*;
pub use storage::{FileStore, KeyValueStore, MemoryStore};
