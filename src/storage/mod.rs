//! Persistent storage
//!
//! Each collection lives as one JSON blob under a fixed string key in a
//! [`KeyValueStore`] backend. [`DataStore`] layers typed CRUD, id generation
//! and a one-time schema migration on top.

pub mod backend;
pub mod log;
pub mod migrate;
pub mod store;

use std::path::PathBuf;

pub use backend::{FileStore, KeyValueStore, MemoryStore};
pub use log::{Operation, OperationLogEntry};
pub use store::{DataStore, Stored};

/// Storage keys, one physical record per key
pub mod keys {
    pub const ONBOARDING: &str = "ceo-ai-onboarding";
    pub const USER_PROFILE: &str = "ceo-ai-user-profile";
    pub const BUSINESS_PLANS: &str = "ceo-ai-business-plans";
    pub const CONTACTS: &str = "ceo-ai-contacts";
    pub const FINANCIAL_RECORDS: &str = "ceo-ai-financial-records";
    pub const DOCUMENTS: &str = "ceo-ai-documents";
    pub const CONTRACTS: &str = "ceo-ai-contracts";
    pub const GOALS: &str = "ceo-ai-goals";
    pub const LOGS: &str = "ceo-ai-logs";
    pub const SCHEMA_VERSION: &str = "ceo-ai-schema-version";
}

/// Error type for storage operations
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Could not determine the application data directory")]
    DataDir,
}

/// Get the platform data directory for on-disk storage
///
/// Windows: %APPDATA%/CeoDesk, Linux: ~/.local/share/CeoDesk,
/// macOS: ~/Library/Application Support/CeoDesk.
pub fn get_data_dir() -> Result<PathBuf, StorageError> {
    directories::ProjectDirs::from("com", "CeoDesk", "CeoDesk")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or(StorageError::DataDir)
}
