//! Shared type definitions
//!
//! Record shapes for every collection the store persists. Field names
//! serialize in camelCase so the blobs stay readable by the dashboard UI.

pub mod contact;
pub mod document;
pub mod finance;
pub mod goal;
pub mod plan;
pub mod profile;

pub use contact::{
    Contact, PaymentStatus, Project, ProjectStatus, ProjectWithClient, RelationshipType,
};
pub use document::{ContractItem, ContractStatus, DocumentItem};
pub use finance::{FinancialKind, FinancialRecord, RecordStatus};
pub use goal::{Goal, GoalStatus};
pub use plan::{BusinessPlan, Milestone, MilestoneStatus, PlanBudget, PlanStatus, Priority};
pub use profile::{OnboardingData, Preferences, UserProfile};
