//! # Storage Module
//!
//! Handles all persistence for the hub app configuration flow.
//!
//! The domain layer only sees the traits in [`traits`]; the adapters here can be
//! swapped (memory, files, a remote document API) without touching domain code.
//!
//! ## Adapters
//!
//! - **Local cache**: [`MemoryKeyValueStore`], [`FileKeyValueStore`]
//! - **Remote document store**: [`HttpDocumentStore`], [`InMemoryDocumentStore`]
//! - **Config tiers**: [`RemoteConfigSource`], [`StaticConfigDirectory`]

pub mod file_cache;
pub mod memory;
pub mod remote;
pub mod static_files;
pub mod traits;

#[cfg(test)]
pub mod test_utils;

pub use file_cache::FileKeyValueStore;
pub use memory::{InMemoryDocumentStore, MemoryKeyValueStore};
pub use remote::{HttpDocumentStore, RemoteConfigSource, CONFIG_COLLECTION};
pub use static_files::StaticConfigDirectory;
pub use traits::{ConfigSource, DocumentStore, KeyValueStorage};
