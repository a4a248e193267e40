//! Schema migrations
//!
//! Run once by [`DataStore::open`](crate::storage::DataStore::open), guarded
//! by a version key. Each migration rewrites a collection blob in place and
//! only writes when something actually changed.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{json, Value};

use crate::storage::{keys, KeyValueStore, StorageError};

/// Current schema version; bump when adding a migration
pub const SCHEMA_VERSION: u32 = 1;

/// Matches `Profile: <url>` left in contact notes by early versions
static PROFILE_URL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Profile:\s*(\S+)").expect("valid regex"));

/// Run all pending migrations against the backend
pub fn run(backend: &dyn KeyValueStore) -> Result<(), StorageError> {
    let current = stored_version(backend)?;
    if current >= SCHEMA_VERSION {
        return Ok(());
    }

    if current < 1 {
        migrate_contacts_v1(backend)?;
    }

    backend.set(keys::SCHEMA_VERSION, &SCHEMA_VERSION.to_string())?;
    tracing::info!("Store schema migrated from v{} to v{}", current, SCHEMA_VERSION);
    Ok(())
}

fn stored_version(backend: &dyn KeyValueStore) -> Result<u32, StorageError> {
    Ok(backend
        .get(keys::SCHEMA_VERSION)?
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(0))
}

/// v1: contacts gained `relationshipType`, `profileUrl` and a mandatory
/// `projects` array
///
/// - records missing `relationshipType` default to `client`
/// - `Profile: <url>` embedded in notes moves into `profileUrl`
/// - missing `projects` becomes an empty array
fn migrate_contacts_v1(backend: &dyn KeyValueStore) -> Result<(), StorageError> {
    let Some(raw) = backend.get(keys::CONTACTS)? else {
        return Ok(());
    };

    let mut contacts: Vec<Value> = serde_json::from_str(&raw)?;
    let mut changed = false;

    for contact in &mut contacts {
        let Some(obj) = contact.as_object_mut() else {
            continue;
        };

        if !obj.contains_key("relationshipType") {
            obj.insert("relationshipType".to_string(), json!("client"));
            changed = true;
        }

        if !obj.contains_key("projects") {
            obj.insert("projects".to_string(), json!([]));
            changed = true;
        }

        let has_profile_url = obj
            .get("profileUrl")
            .and_then(Value::as_str)
            .is_some_and(|s| !s.is_empty());
        if !has_profile_url {
            let extracted = obj
                .get("notes")
                .and_then(Value::as_str)
                .and_then(|notes| PROFILE_URL_RE.captures(notes))
                .map(|caps| caps[1].to_string());
            if let Some(url) = extracted {
                obj.insert("profileUrl".to_string(), json!(url));
                changed = true;
            }
        }
    }

    if changed {
        backend.set(keys::CONTACTS, &serde_json::to_string(&contacts)?)?;
        tracing::info!("Migrated {} stored contacts to schema v1", contacts.len());
    }

    Ok(())
}
