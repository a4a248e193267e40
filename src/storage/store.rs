//! The record store
//!
//! Typed CRUD over whole-collection JSON blobs. List collections share one
//! generic engine via the [`Stored`] trait; contacts additionally expose
//! embedded-project operations, and the profile/onboarding records are
//! singletons under their own keys.
//!
//! Read-modify-write here is last-writer-wins: there is no cross-process
//! coordination, matching the single-user dashboard it backs.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;
use uuid::Uuid;

use crate::storage::log::{Operation, OperationLogEntry, MAX_LOG_ENTRIES};
use crate::storage::{keys, migrate, FileStore, KeyValueStore, MemoryStore, StorageError};
use crate::types::{
    BusinessPlan, Contact, ContractItem, DocumentItem, FinancialRecord, Goal, OnboardingData,
    Project, ProjectWithClient, UserProfile,
};

/// Make a fresh record id, `<prefix>_<uuid>`
pub(crate) fn generate_id(prefix: &str) -> String {
    format!("{}_{}", prefix, Uuid::new_v4().simple())
}

/// A record type the generic engine knows how to persist
pub trait Stored: Serialize + DeserializeOwned + Clone {
    /// Storage key of the collection blob
    const KEY: &'static str;
    /// Prefix for generated ids
    const ID_PREFIX: &'static str;

    fn id(&self) -> &str;
    fn assign_id(&mut self, id: String);
    /// Stamp both timestamps at creation
    fn set_created(&mut self, now: DateTime<Utc>);
    /// Refresh `updated_at` after a mutation
    fn touch(&mut self, now: DateTime<Utc>);
}

macro_rules! impl_stored {
    ($ty:ty, $key:expr, $prefix:expr) => {
        impl Stored for $ty {
            const KEY: &'static str = $key;
            const ID_PREFIX: &'static str = $prefix;

            fn id(&self) -> &str {
                &self.id
            }

            fn assign_id(&mut self, id: String) {
                self.id = id;
            }

            fn set_created(&mut self, now: DateTime<Utc>) {
                self.created_at = now;
                self.updated_at = now;
            }

            fn touch(&mut self, now: DateTime<Utc>) {
                self.updated_at = now;
            }
        }
    };
}

impl_stored!(Contact, keys::CONTACTS, "contact");
impl_stored!(BusinessPlan, keys::BUSINESS_PLANS, "plan");
impl_stored!(FinancialRecord, keys::FINANCIAL_RECORDS, "financial");
impl_stored!(DocumentItem, keys::DOCUMENTS, "doc");
impl_stored!(ContractItem, keys::CONTRACTS, "contract");
impl_stored!(Goal, keys::GOALS, "goal");

/// The typed record store
///
/// Construct with [`DataStore::open`]; pending schema migrations run once
/// before the store is handed back.
pub struct DataStore {
    backend: Box<dyn KeyValueStore>,
}

impl DataStore {
    /// Open a store over any backend, running pending migrations first
    pub fn open(backend: impl KeyValueStore + 'static) -> Result<Self, StorageError> {
        migrate::run(&backend)?;
        Ok(Self {
            backend: Box::new(backend),
        })
    }

    /// Open over a fresh in-memory backend
    pub fn open_in_memory() -> Result<Self, StorageError> {
        Self::open(MemoryStore::new())
    }

    /// Open over the platform data directory
    pub fn open_on_disk() -> Result<Self, StorageError> {
        Self::open(FileStore::new()?)
    }

    fn read_list<T: Stored>(&self) -> Result<Vec<T>, StorageError> {
        match self.backend.get(T::KEY)? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(Vec::new()),
        }
    }

    fn write_list<T: Stored>(&self, items: &[T]) -> Result<(), StorageError> {
        let raw = serde_json::to_string(items)?;
        self.backend.set(T::KEY, &raw)
    }

    /// All records of a collection; empty when nothing is stored yet
    pub fn list<T: Stored>(&self) -> Result<Vec<T>, StorageError> {
        self.read_list()
    }

    /// Find one record by id
    pub fn find<T: Stored>(&self, id: &str) -> Result<Option<T>, StorageError> {
        Ok(self.read_list::<T>()?.into_iter().find(|r| r.id() == id))
    }

    /// Append a record, assigning a fresh id and creation timestamps
    pub fn insert<T: Stored>(&self, mut record: T) -> Result<T, StorageError> {
        let mut items = self.read_list::<T>()?;
        record.assign_id(generate_id(T::ID_PREFIX));
        record.set_created(Utc::now());
        items.push(record.clone());
        self.write_list(&items)?;
        self.track(T::KEY, Operation::Save, record.id());
        tracing::debug!("Inserted {} into {}", record.id(), T::KEY);
        Ok(record)
    }

    /// Apply `f` to the record with the given id and refresh its `updated_at`
    ///
    /// Returns `Ok(None)` without touching storage when the id is absent.
    pub fn update<T: Stored>(
        &self,
        id: &str,
        f: impl FnOnce(&mut T),
    ) -> Result<Option<T>, StorageError> {
        let mut items = self.read_list::<T>()?;
        let Some(item) = items.iter_mut().find(|r| r.id() == id) else {
            tracing::debug!("Update of {} skipped, not found in {}", id, T::KEY);
            return Ok(None);
        };
        f(item);
        item.touch(Utc::now());
        let updated = item.clone();
        self.write_list(&items)?;
        self.track(T::KEY, Operation::Update, id);
        Ok(Some(updated))
    }

    /// Remove a record by id; `Ok(false)` when it was not there (idempotent)
    pub fn remove<T: Stored>(&self, id: &str) -> Result<bool, StorageError> {
        let mut items = self.read_list::<T>()?;
        let before = items.len();
        items.retain(|r| r.id() != id);
        if items.len() == before {
            return Ok(false);
        }
        self.write_list(&items)?;
        self.track(T::KEY, Operation::Remove, id);
        tracing::debug!("Removed {} from {}", id, T::KEY);
        Ok(true)
    }

    // --- contacts and embedded projects ---

    /// Stamp a project id and push it into the contact's embedded list
    ///
    /// Returns the stored project, or `Ok(None)` when the contact is absent.
    pub fn add_project_to_contact(
        &self,
        contact_id: &str,
        mut project: Project,
    ) -> Result<Option<Project>, StorageError> {
        let mut contacts = self.read_list::<Contact>()?;
        let Some(contact) = contacts.iter_mut().find(|c| c.id == contact_id) else {
            tracing::debug!("Cannot add project, contact {} not found", contact_id);
            return Ok(None);
        };
        project.id = generate_id("project");
        contact.projects.push(project.clone());
        contact.updated_at = Utc::now();
        self.write_list(&contacts)?;
        self.track(keys::CONTACTS, Operation::Update, contact_id);
        Ok(Some(project))
    }

    /// Apply `f` to one embedded project; touches the owning contact
    pub fn update_project(
        &self,
        contact_id: &str,
        project_id: &str,
        f: impl FnOnce(&mut Project),
    ) -> Result<Option<Project>, StorageError> {
        let mut contacts = self.read_list::<Contact>()?;
        let Some(contact) = contacts.iter_mut().find(|c| c.id == contact_id) else {
            return Ok(None);
        };
        let Some(project) = contact.projects.iter_mut().find(|p| p.id == project_id) else {
            return Ok(None);
        };
        f(project);
        let updated = project.clone();
        contact.updated_at = Utc::now();
        self.write_list(&contacts)?;
        self.track(keys::CONTACTS, Operation::Update, contact_id);
        Ok(Some(updated))
    }

    /// Remove one embedded project; `Ok(false)` when contact or project is absent
    pub fn remove_project(
        &self,
        contact_id: &str,
        project_id: &str,
    ) -> Result<bool, StorageError> {
        let mut contacts = self.read_list::<Contact>()?;
        let Some(contact) = contacts.iter_mut().find(|c| c.id == contact_id) else {
            return Ok(false);
        };
        let before = contact.projects.len();
        contact.projects.retain(|p| p.id != project_id);
        if contact.projects.len() == before {
            return Ok(false);
        }
        contact.updated_at = Utc::now();
        self.write_list(&contacts)?;
        self.track(keys::CONTACTS, Operation::Update, contact_id);
        Ok(true)
    }

    /// Every project across all contacts, annotated with its owner
    pub fn all_projects(&self) -> Result<Vec<ProjectWithClient>, StorageError> {
        let contacts = self.read_list::<Contact>()?;
        Ok(contacts
            .into_iter()
            .flat_map(|contact| {
                let client_id = contact.id;
                let client_name = contact.name;
                contact
                    .projects
                    .into_iter()
                    .map(move |project| ProjectWithClient {
                        client_id: client_id.clone(),
                        client_name: client_name.clone(),
                        project,
                    })
            })
            .collect())
    }

    // --- singletons ---

    /// The stored user profile, if one has been saved
    pub fn user_profile(&self) -> Result<Option<UserProfile>, StorageError> {
        match self.backend.get(keys::USER_PROFILE)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    /// Store the profile, assigning a fresh id and creation timestamps
    pub fn save_user_profile(&self, mut profile: UserProfile) -> Result<UserProfile, StorageError> {
        profile.id = generate_id("user");
        let now = Utc::now();
        profile.created_at = now;
        profile.updated_at = now;
        self.backend
            .set(keys::USER_PROFILE, &serde_json::to_string(&profile)?)?;
        self.track(keys::USER_PROFILE, Operation::Save, &profile.id);
        Ok(profile)
    }

    /// Apply `f` to the stored profile (nested preferences included) and
    /// refresh `updated_at`; `Ok(None)` when no profile has been saved
    pub fn update_user_profile(
        &self,
        f: impl FnOnce(&mut UserProfile),
    ) -> Result<Option<UserProfile>, StorageError> {
        let Some(mut profile) = self.user_profile()? else {
            tracing::debug!("Profile update skipped, no profile stored");
            return Ok(None);
        };
        f(&mut profile);
        profile.updated_at = Utc::now();
        self.backend
            .set(keys::USER_PROFILE, &serde_json::to_string(&profile)?)?;
        self.track(keys::USER_PROFILE, Operation::Update, &profile.id);
        Ok(Some(profile))
    }

    /// The onboarding snapshot, if onboarding has been completed
    pub fn onboarding(&self) -> Result<Option<OnboardingData>, StorageError> {
        match self.backend.get(keys::ONBOARDING)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    /// Store the onboarding snapshot, stamping `completed_at`
    pub fn save_onboarding(
        &self,
        mut data: OnboardingData,
    ) -> Result<OnboardingData, StorageError> {
        data.completed_at = Utc::now();
        self.backend
            .set(keys::ONBOARDING, &serde_json::to_string(&data)?)?;
        self.track(keys::ONBOARDING, Operation::Save, &data.business_name);
        Ok(data)
    }

    // --- operation log ---

    /// The diagnostic operation log, oldest first
    pub fn operation_log(&self) -> Result<Vec<OperationLogEntry>, StorageError> {
        match self.backend.get(keys::LOGS)? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(Vec::new()),
        }
    }

    /// Record a mutation in the operation log. Diagnostics only: a failure
    /// here is logged and swallowed, never surfaced to the mutation.
    fn track(&self, collection: &str, operation: Operation, record_id: &str) {
        if let Err(e) = self.append_log_entry(collection, operation, record_id) {
            tracing::warn!("Failed to write operation log entry: {}", e);
        }
    }

    fn append_log_entry(
        &self,
        collection: &str,
        operation: Operation,
        record_id: &str,
    ) -> Result<(), StorageError> {
        let mut entries = self.operation_log().unwrap_or_default();
        entries.push(OperationLogEntry::new(collection, operation, record_id));
        if entries.len() > MAX_LOG_ENTRIES {
            let excess = entries.len() - MAX_LOG_ENTRIES;
            entries.drain(..excess);
        }
        self.backend
            .set(keys::LOGS, &serde_json::to_string(&entries)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{FinancialKind, GoalStatus, ProjectStatus, RelationshipType};

    fn open_empty() -> DataStore {
        DataStore::open_in_memory().unwrap()
    }

    #[test]
    fn test_list_empty_collection_returns_empty_vec() {
        let store = open_empty();
        let contacts = store.list::<Contact>().unwrap();
        assert!(contacts.is_empty());
    }

    #[test]
    fn test_insert_then_list_contains_exactly_the_record() {
        let store = open_empty();
        let saved = store.insert(Contact::new("Acme Corp")).unwrap();

        assert!(saved.id.starts_with("contact_"));
        let contacts = store.list::<Contact>().unwrap();
        assert_eq!(contacts, vec![saved]);
    }

    #[test]
    fn test_insert_assigns_distinct_ids() {
        let store = open_empty();
        let a = store.insert(Goal::new("A")).unwrap();
        let b = store.insert(Goal::new("B")).unwrap();
        assert_ne!(a.id, b.id);
        assert_eq!(store.list::<Goal>().unwrap().len(), 2);
    }

    #[test]
    fn test_update_changes_only_touched_fields_and_refreshes_updated_at() {
        let store = open_empty();
        let saved = store
            .insert(FinancialRecord::new(FinancialKind::Invoice, 1200.0, "EUR"))
            .unwrap();

        let updated = store
            .update::<FinancialRecord>(&saved.id, |r| r.amount = 1500.0)
            .unwrap()
            .unwrap();

        assert_eq!(updated.amount, 1500.0);
        assert_eq!(updated.currency, "EUR");
        assert_eq!(updated.created_at, saved.created_at);
        assert!(updated.updated_at > saved.updated_at);
    }

    #[test]
    fn test_update_missing_id_is_a_noop() {
        let store = open_empty();
        let saved = store.insert(Goal::new("Reach 10k MRR")).unwrap();

        let result = store
            .update::<Goal>("goal_missing", |g| g.progress = 50)
            .unwrap();

        assert!(result.is_none());
        assert_eq!(store.list::<Goal>().unwrap(), vec![saved]);
    }

    #[test]
    fn test_remove_then_list_never_contains_the_id() {
        let store = open_empty();
        let keep = store.insert(Goal::new("Keep")).unwrap();
        let drop = store.insert(Goal::new("Drop")).unwrap();

        assert!(store.remove::<Goal>(&drop.id).unwrap());
        let goals = store.list::<Goal>().unwrap();
        assert_eq!(goals, vec![keep]);
        assert!(!goals.iter().any(|g| g.id == drop.id));
    }

    #[test]
    fn test_remove_missing_id_is_idempotent() {
        let store = open_empty();
        let saved = store.insert(Goal::new("Only")).unwrap();

        assert!(!store.remove::<Goal>("goal_missing").unwrap());
        assert!(store.remove::<Goal>(&saved.id).unwrap());
        assert!(!store.remove::<Goal>(&saved.id).unwrap());
    }

    #[test]
    fn test_legacy_contact_migrated_on_open() {
        // Seed a legacy record directly, bypassing the store
        let backend = MemoryStore::new();
        backend
            .set(
                keys::CONTACTS,
                r#"[{"id":"contact_1","name":"Acme Corp","notes":"",
                    "createdAt":"2024-01-01T00:00:00Z","updatedAt":"2024-01-01T00:00:00Z"}]"#,
            )
            .unwrap();

        let store = DataStore::open(backend).unwrap();
        let contacts = store.list::<Contact>().unwrap();

        assert_eq!(contacts.len(), 1);
        assert_eq!(contacts[0].name, "Acme Corp");
        assert_eq!(contacts[0].relationship_type, RelationshipType::Client);
        assert!(contacts[0].projects.is_empty());
    }

    #[test]
    fn test_reading_twice_after_migration_is_stable() {
        let backend = MemoryStore::new();
        backend
            .set(
                keys::CONTACTS,
                r#"[{"id":"contact_1","name":"Acme Corp","notes":"Profile: https://x.test/a",
                    "createdAt":"2024-01-01T00:00:00Z","updatedAt":"2024-01-01T00:00:00Z"}]"#,
            )
            .unwrap();

        let store = DataStore::open(backend).unwrap();
        let first = store.list::<Contact>().unwrap();
        let second = store.list::<Contact>().unwrap();

        assert_eq!(first, second);
        assert_eq!(first[0].profile_url.as_deref(), Some("https://x.test/a"));
    }

    #[test]
    fn test_add_project_then_all_projects_has_client_annotation() {
        let store = open_empty();
        let contact = store.insert(Contact::new("Acme Corp")).unwrap();

        let project = store
            .add_project_to_contact(&contact.id, Project::new("Rebrand", ProjectStatus::Proposed))
            .unwrap()
            .unwrap();
        assert!(project.id.starts_with("project_"));

        let all = store.all_projects().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].client_id, contact.id);
        assert_eq!(all[0].client_name, "Acme Corp");
        assert_eq!(all[0].project, project);
    }

    #[test]
    fn test_add_project_to_missing_contact_is_a_noop() {
        let store = open_empty();
        let result = store
            .add_project_to_contact(
                "contact_missing",
                Project::new("Rebrand", ProjectStatus::Proposed),
            )
            .unwrap();
        assert!(result.is_none());
        assert!(store.all_projects().unwrap().is_empty());
    }

    #[test]
    fn test_update_project_touches_owning_contact() {
        let store = open_empty();
        let contact = store.insert(Contact::new("Acme Corp")).unwrap();
        let project = store
            .add_project_to_contact(&contact.id, Project::new("Rebrand", ProjectStatus::Proposed))
            .unwrap()
            .unwrap();

        let updated = store
            .update_project(&contact.id, &project.id, |p| {
                p.status = ProjectStatus::InProgress;
                p.value = 8000.0;
            })
            .unwrap()
            .unwrap();

        assert_eq!(updated.status, ProjectStatus::InProgress);
        let reread = store.find::<Contact>(&contact.id).unwrap().unwrap();
        assert_eq!(reread.project(&project.id).unwrap().value, 8000.0);
        assert!(reread.updated_at > contact.updated_at);
    }

    #[test]
    fn test_removing_contact_removes_its_projects() {
        let store = open_empty();
        let contact = store.insert(Contact::new("Acme Corp")).unwrap();
        store
            .add_project_to_contact(&contact.id, Project::new("Rebrand", ProjectStatus::Proposed))
            .unwrap();

        assert!(store.remove::<Contact>(&contact.id).unwrap());
        assert!(store.all_projects().unwrap().is_empty());
    }

    #[test]
    fn test_remove_project_leaves_contact_in_place() {
        let store = open_empty();
        let contact = store.insert(Contact::new("Acme Corp")).unwrap();
        let project = store
            .add_project_to_contact(&contact.id, Project::new("Rebrand", ProjectStatus::Proposed))
            .unwrap()
            .unwrap();

        assert!(store.remove_project(&contact.id, &project.id).unwrap());
        assert!(!store.remove_project(&contact.id, &project.id).unwrap());
        assert!(store.find::<Contact>(&contact.id).unwrap().is_some());
    }

    #[test]
    fn test_profile_save_then_partial_update() {
        let store = open_empty();
        let mut profile = UserProfile::new("Ada");
        profile.last_name = "Lovelace".to_string();
        profile.company = "Analytical Engines".to_string();
        let saved = store.save_user_profile(profile).unwrap();
        assert!(saved.id.starts_with("user_"));

        let updated = store
            .update_user_profile(|p| p.first_name = "Jane".to_string())
            .unwrap()
            .unwrap();

        assert_eq!(updated.first_name, "Jane");
        assert_eq!(updated.last_name, "Lovelace");
        assert_eq!(updated.company, "Analytical Engines");
        assert_eq!(updated.preferences, saved.preferences);
        assert!(updated.updated_at > saved.updated_at);

        let reread = store.user_profile().unwrap().unwrap();
        assert_eq!(reread, updated);
    }

    #[test]
    fn test_profile_nested_preferences_update() {
        let store = open_empty();
        store.save_user_profile(UserProfile::new("Ada")).unwrap();

        let updated = store
            .update_user_profile(|p| p.preferences.currency = "GBP".to_string())
            .unwrap()
            .unwrap();

        assert_eq!(updated.preferences.currency, "GBP");
        // Untouched preference fields keep their values
        assert_eq!(updated.preferences.theme, "dark");
    }

    #[test]
    fn test_update_profile_without_one_stored_is_a_noop() {
        let store = open_empty();
        let result = store
            .update_user_profile(|p| p.first_name = "Jane".to_string())
            .unwrap();
        assert!(result.is_none());
        assert!(store.user_profile().unwrap().is_none());
    }

    #[test]
    fn test_onboarding_save_stamps_completed_at() {
        let store = open_empty();
        assert!(store.onboarding().unwrap().is_none());

        let mut data = OnboardingData::new("Acme Corp");
        data.completed_at = DateTime::<Utc>::UNIX_EPOCH;
        let saved = store.save_onboarding(data).unwrap();

        assert!(saved.completed_at > DateTime::<Utc>::UNIX_EPOCH);
        assert_eq!(store.onboarding().unwrap().unwrap(), saved);
    }

    #[test]
    fn test_mutations_are_tracked_in_operation_log() {
        let store = open_empty();
        let goal = store.insert(Goal::new("Reach 10k MRR")).unwrap();
        store
            .update::<Goal>(&goal.id, |g| g.progress = 10)
            .unwrap();
        store.remove::<Goal>(&goal.id).unwrap();

        let log = store.operation_log().unwrap();
        assert_eq!(log.len(), 3);
        assert_eq!(log[0].operation, Operation::Save);
        assert_eq!(log[1].operation, Operation::Update);
        assert_eq!(log[2].operation, Operation::Remove);
        assert!(log.iter().all(|e| e.record_id == goal.id));
        assert!(log.iter().all(|e| e.collection == keys::GOALS));
    }

    #[test]
    fn test_noop_mutations_are_not_tracked() {
        let store = open_empty();
        store.remove::<Goal>("goal_missing").unwrap();
        store
            .update::<Goal>("goal_missing", |g| g.progress = 10)
            .unwrap();
        assert!(store.operation_log().unwrap().is_empty());
    }

    #[test]
    fn test_operation_log_is_capped() {
        let store = open_empty();
        let goal = store.insert(Goal::new("Churner")).unwrap();
        for i in 0..(MAX_LOG_ENTRIES + 10) {
            store
                .update::<Goal>(&goal.id, |g| g.progress = (i % 100) as u8)
                .unwrap();
        }

        let log = store.operation_log().unwrap();
        assert_eq!(log.len(), MAX_LOG_ENTRIES);
        // Oldest entries (including the initial save) were dropped
        assert!(log.iter().all(|e| e.operation == Operation::Update));
    }

    #[test]
    fn test_malformed_blob_surfaces_serde_error() {
        let backend = MemoryStore::new();
        backend.set(keys::SCHEMA_VERSION, "1").unwrap();
        backend.set(keys::GOALS, "{not json").unwrap();

        let store = DataStore::open(backend).unwrap();
        assert!(matches!(
            store.list::<Goal>(),
            Err(StorageError::Serde(_))
        ));
    }

    #[test]
    fn test_collections_are_isolated() {
        let store = open_empty();
        store.insert(Goal::new("A goal")).unwrap();
        store.insert(BusinessPlan::new("A plan")).unwrap();
        store
            .insert(DocumentItem::new("w9.pdf", "data:application/pdf;base64,JVBERi0="))
            .unwrap();
        store
            .insert(ContractItem::new("NDA", "This agreement..."))
            .unwrap();

        assert_eq!(store.list::<Goal>().unwrap().len(), 1);
        assert_eq!(store.list::<BusinessPlan>().unwrap().len(), 1);
        assert_eq!(store.list::<DocumentItem>().unwrap().len(), 1);
        assert_eq!(store.list::<ContractItem>().unwrap().len(), 1);
        assert!(store.list::<Contact>().unwrap().is_empty());
    }

    #[test]
    fn test_store_persists_across_reopen_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let saved = {
            let store = DataStore::open(FileStore::with_dir(dir.path()).unwrap()).unwrap();
            store.insert(Goal::new("Survive restart")).unwrap()
        };

        let store = DataStore::open(FileStore::with_dir(dir.path()).unwrap()).unwrap();
        assert_eq!(store.list::<Goal>().unwrap(), vec![saved]);
    }

    #[test]
    fn test_goal_status_survives_round_trip_through_store() {
        let store = open_empty();
        let mut goal = Goal::new("Ship v1");
        goal.status = GoalStatus::Achieved;
        goal.progress = 100;
        let saved = store.insert(goal).unwrap();

        let reread = store.find::<Goal>(&saved.id).unwrap().unwrap();
        assert_eq!(reread, saved);
    }
}
