//! Contact types
//!
//! A contact is a client, collaborator, vendor or partner, and owns its
//! projects inline. Projects have no lifecycle of their own: removing the
//! contact removes them.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// How a contact relates to the business
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelationshipType {
    /// Paying client (default for legacy records that predate the field)
    #[default]
    Client,
    Collaborator,
    Vendor,
    Partner,
}

/// Delivery status of a project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    Completed,
    InProgress,
    OnHold,
    Proposed,
}

/// Payment status of a project
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    #[default]
    Unpaid,
    Partial,
    Paid,
}

/// A project embedded in a contact
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Free-form type label, e.g. "web design" or "consulting"
    #[serde(default)]
    pub project_type: String,
    pub status: ProjectStatus,
    /// Agreed value in currency units
    #[serde(default)]
    pub value: f64,
    /// Amount collected so far
    #[serde(default)]
    pub amount_collected: f64,
    #[serde(default)]
    pub payment_status: PaymentStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_date: Option<NaiveDate>,
}

impl Project {
    /// Create a project with a status and everything else empty
    pub fn new(name: impl Into<String>, status: ProjectStatus) -> Self {
        Self {
            id: String::new(),
            name: name.into(),
            description: String::new(),
            project_type: String::new(),
            status,
            value: 0.0,
            amount_collected: 0.0,
            payment_status: PaymentStatus::Unpaid,
            completed_date: None,
        }
    }
}

/// A contact record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_person: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    /// Defaults to `Client` when a stored record predates the field
    #[serde(default)]
    pub relationship_type: RelationshipType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_url: Option<String>,
    /// Always present, empty when the contact has no projects
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub notes: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Contact {
    /// Create a contact with just a name; the store assigns the id on insert
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: String::new(),
            name: name.into(),
            contact_person: None,
            email: None,
            phone: None,
            company: None,
            industry: None,
            relationship_type: RelationshipType::Client,
            profile_url: None,
            projects: Vec::new(),
            notes: String::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Look up an embedded project by id
    pub fn project(&self, project_id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == project_id)
    }
}

/// A project annotated with its owning contact, as returned by
/// [`DataStore::all_projects`](crate::storage::DataStore::all_projects)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectWithClient {
    pub client_id: String,
    pub client_name: String,
    #[serde(flatten)]
    pub project: Project,
}
