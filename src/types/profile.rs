//! User profile and onboarding types
//!
//! Both are singletons: one record per store, not a list.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Per-user preferences nested inside the profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    #[serde(default = "default_true")]
    pub email_notifications: bool,
    #[serde(default)]
    pub push_notifications: bool,
    /// "dark" or "light"
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_true() -> bool {
    true
}

fn default_theme() -> String {
    "dark".to_string()
}

fn default_language() -> String {
    "en".to_string()
}

fn default_currency() -> String {
    "USD".to_string()
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            email_notifications: true,
            push_notifications: false,
            theme: default_theme(),
            language: default_language(),
            currency: default_currency(),
        }
    }
}

/// The single user profile record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub company: String,
    /// Role within the company, e.g. "founder"
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub preferences: Preferences,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserProfile {
    pub fn new(first_name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: String::new(),
            first_name: first_name.into(),
            last_name: String::new(),
            email: String::new(),
            company: String::new(),
            role: String::new(),
            preferences: Preferences::default(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// Snapshot of the setup questionnaire, written once when onboarding finishes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingData {
    pub business_name: String,
    #[serde(default)]
    pub industry: String,
    /// e.g. "idea", "early", "growth"
    #[serde(default)]
    pub stage: String,
    #[serde(default)]
    pub team_size: u32,
    #[serde(default)]
    pub primary_goals: Vec<String>,
    pub completed_at: DateTime<Utc>,
}

impl OnboardingData {
    pub fn new(business_name: impl Into<String>) -> Self {
        Self {
            business_name: business_name.into(),
            industry: String::new(),
            stage: String::new(),
            team_size: 0,
            primary_goals: Vec::new(),
            completed_at: Utc::now(),
        }
    }
}
