//! Request and response types of the PayFlow API

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Placeholder the server returns instead of a stored Odoo password.
///
/// Sending it back on save leaves the stored password unchanged.
pub const MASKED_PASSWORD: &str = "••••••••";

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub password: String,
}

/// Generic `{"status": ...}` answer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginResponse {
    pub status: String,
}

/// Answer to a write with a human-readable message
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusResponse {
    pub status: String,
    #[serde(default)]
    pub message: String,
}

/// One synchronisation run as recorded by the server
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LogEntry {
    #[serde(default)]
    pub client_doc_id: String,
    #[serde(default)]
    pub client_name: Option<String>,
    #[serde(default)]
    pub period: String,
    /// ISO-8601 timestamp as sent by the server
    #[serde(default)]
    pub execution_time: Option<String>,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub message: String,
}

impl LogEntry {
    /// Whether the run ended in a success status (`SUCCESS`, `MANUAL_SUCCESS_EMPTY`, ...)
    pub fn is_success(&self) -> bool {
        self.status.contains("SUCCESS")
    }
}

/// A payroll client synchronised from Silae into Odoo
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClientProfile {
    pub nom: String,
    pub numero_dossier_silae: String,
    pub jour_transfert: i32,
    pub odoo_host: String,
    pub database_odoo: String,
    pub odoo_login: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub odoo_password: Option<String>,
    pub journal_paie_odoo: String,
    pub odoo_company_id: i64,
}

/// Configured clients keyed by document id
pub type ClientDirectory = BTreeMap<String, ClientProfile>;

/// Odoo connection fields to verify
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct OdooTestRequest {
    pub odoo_host: String,
    pub database_odoo: String,
    pub odoo_login: String,
    pub odoo_password: String,
}

impl From<&ClientProfile> for OdooTestRequest {
    fn from(profile: &ClientProfile) -> Self {
        Self {
            odoo_host: profile.odoo_host.clone(),
            database_odoo: profile.database_odoo.clone(),
            odoo_login: profile.odoo_login.clone(),
            odoo_password: profile.odoo_password.clone().unwrap_or_default(),
        }
    }
}

/// Accounting journal visible to the Odoo user
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OdooJournal {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub code: String,
    /// Odoo many2one: `[id, name]`, or `false` when unset
    #[serde(default)]
    pub company_id: serde_json::Value,
}

/// Result of an Odoo connection test
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OdooTestResponse {
    pub status: String,
    /// Company name by id
    #[serde(default)]
    pub companies: BTreeMap<String, String>,
    #[serde(default)]
    pub journals: Vec<OdooJournal>,
}

/// Manual import of one client over several months
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ManualImportRequest {
    pub client_doc_id: String,
    /// Months as `YYYY-MM`
    pub periods: Vec<String>,
}

/// Outcome of one imported month
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PeriodResult {
    pub period: String,
    pub status: String,
    #[serde(default)]
    pub message: String,
}

impl PeriodResult {
    pub fn is_success(&self) -> bool {
        self.status == "success"
    }
}

/// Manual import answer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ManualImportResponse {
    pub results: Vec<PeriodResult>,
}
