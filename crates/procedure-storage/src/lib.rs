//! Pluggable document storage
//!
//! Persists generated documents on local disk, AWS S3, or Google Cloud
//! Storage behind one save/get/exists interface. The provider is chosen
//! once at startup (see [`StorageConfig::from_env`]) and injected into
//! [`DocumentStore`]; there is no runtime switching or global state.

pub mod config;
pub mod store;

pub use config::{StorageConfig, StorageProvider};
pub use store::{DocumentStore, StorageError};
