//! Typed records for the CMS directory entities (clients, contadores,
//! processes) and the static role-permission matrix that gates the
//! dashboard's screens.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Roles and permissions
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Contador,
    Cliente,
    Dashboard,
}

/// The protected screens of the dashboard. Serde names match the route
/// keys the front end stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Resource {
    #[serde(rename = "dashboard")]
    Dashboard,
    #[serde(rename = "usuarios")]
    Users,
    #[serde(rename = "contadores")]
    Contadores,
    #[serde(rename = "clientes")]
    Clients,
    #[serde(rename = "contactos")]
    Contacts,
    #[serde(rename = "asignacion-contadores")]
    ContadorAssignment,
    #[serde(rename = "asignacion-contactos")]
    ContactAssignment,
    #[serde(rename = "procesos")]
    Processes,
    #[serde(rename = "regimenes-fiscales")]
    TaxRegimes,
    #[serde(rename = "asignar-procesos")]
    ProcessAssignment,
    #[serde(rename = "historico-procesos")]
    ProcessHistory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    View,
    Create,
    Edit,
    Delete,
}

/// Static permission matrix. Admins hold every permission; contadores work
/// their own clients and process assignments with read access to the firm
/// catalogs; clientes only consult their process history; the dashboard
/// role is a read-only indicator view.
pub fn has_permission(role: Role, resource: Resource, action: Action) -> bool {
    match role {
        Role::Admin => true,
        Role::Contador => match resource {
            Resource::Dashboard
            | Resource::Clients
            | Resource::ProcessAssignment
            | Resource::ProcessHistory => true,
            Resource::Contadores
            | Resource::ContadorAssignment
            | Resource::Processes
            | Resource::TaxRegimes => action == Action::View,
            Resource::Users | Resource::Contacts | Resource::ContactAssignment => false,
        },
        Role::Cliente => resource == Resource::ProcessHistory && action == Action::View,
        Role::Dashboard => resource == Resource::Dashboard && action == Action::View,
    }
}

// ---------------------------------------------------------------------------
// Entities
// ---------------------------------------------------------------------------

/// Legal personality of a client under Mexican tax law.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClientKind {
    Fisica,
    Moral,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClientStatus {
    Active,
    Inactive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    Active,
    Inactive,
}

/// Abbreviated contador reference embedded in a client record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContadorRef {
    pub id: String,
    pub name: String,
    pub email: String,
}

/// Abbreviated contact reference embedded in a client record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRef {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: String,
    pub company: String,
    #[serde(rename = "type")]
    pub kind: ClientKind,
    pub status: ClientStatus,
    pub regimen_fiscal_id: String,
    pub contador: Option<ContadorRef>,
    pub contacto: Option<ContactRef>,
    pub is_assigned: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contador {
    pub id: String,
    pub name: String,
    pub email: String,
    pub status: UserStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_login: Option<DateTime<Utc>>,
    /// Ids of the clients this contador manages.
    pub clients: Vec<String>,
}

impl Contador {
    pub fn client_count(&self) -> usize {
        self.clients.len()
    }
}

// ---------------------------------------------------------------------------
// Processes
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProcessStatus {
    Active,
    Inactive,
}

/// Delivery posture of a process relative to its due date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DeliveryStatus {
    OnTime,
    AtRisk,
    Delayed,
    Completed,
}

/// Days before the due date at which a pending process turns at-risk.
const AT_RISK_WINDOW_DAYS: i64 = 3;

/// A recurring fiscal deliverable (tax filing, payroll run, DIOT, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Process {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub status: ProcessStatus,
    /// Completion percentage, 0-100.
    pub progress: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commitment_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Process {
    /// Classify the delivery posture as of the given date. A finished
    /// process is Completed regardless of its due date; a process without
    /// a due date is always OnTime.
    pub fn delivery_status_on(&self, as_of: NaiveDate) -> DeliveryStatus {
        if self.progress >= 100 {
            return DeliveryStatus::Completed;
        }
        match self.due_date {
            None => DeliveryStatus::OnTime,
            Some(due) if due < as_of => DeliveryStatus::Delayed,
            Some(due) if (due - as_of).num_days() <= AT_RISK_WINDOW_DAYS => DeliveryStatus::AtRisk,
            Some(_) => DeliveryStatus::OnTime,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
