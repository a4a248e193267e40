//! Document and contract types
//!
//! Documents carry their content inline as a base64 data URL; contracts carry
//! generated text. Both are metadata-plus-payload records with no links to
//! other collections.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An uploaded document, content embedded as a data URL
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentItem {
    pub id: String,
    pub name: String,
    /// Free-form category, e.g. "tax" or "legal"
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub mime_type: String,
    /// `data:<mime>;base64,<payload>` as produced by the uploader
    pub data_url: String,
    /// Original file size in bytes
    #[serde(default)]
    pub size: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl DocumentItem {
    pub fn new(name: impl Into<String>, data_url: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: String::new(),
            name: name.into(),
            category: String::new(),
            mime_type: String::new(),
            data_url: data_url.into(),
            size: 0,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Lifecycle of a contract
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContractStatus {
    #[default]
    Draft,
    Sent,
    Signed,
    Expired,
}

/// A generated contract with its full text inline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractItem {
    pub id: String,
    pub title: String,
    /// The other party named in the contract
    #[serde(default)]
    pub counterparty: String,
    /// What the contract is for, e.g. "service agreement"
    #[serde(default)]
    pub purpose: String,
    /// Generated contract text
    pub content: String,
    #[serde(default)]
    pub status: ContractStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ContractItem {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: String::new(),
            title: title.into(),
            counterparty: String::new(),
            purpose: String::new(),
            content: content.into(),
            status: ContractStatus::Draft,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_round_trip() {
        let mut doc = DocumentItem::new("w9.pdf", "data:application/pdf;base64,JVBERi0=");
        doc.category = "tax".to_string();
        doc.mime_type = "application/pdf".to_string();
        doc.size = 8;

        let json = serde_json::to_string(&doc).unwrap();
        let back: DocumentItem = serde_json::from_str(&json).unwrap();
        assert_eq!(doc, back);
    }

    #[test]
    fn test_contract_round_trip() {
        let mut contract = ContractItem::new("NDA - Acme", "This agreement is made...");
        contract.counterparty = "Acme Corp".to_string();
        contract.status = ContractStatus::Sent;

        let json = serde_json::to_string(&contract).unwrap();
        let back: ContractItem = serde_json::from_str(&json).unwrap();
        assert_eq!(contract, back);
    }
}
