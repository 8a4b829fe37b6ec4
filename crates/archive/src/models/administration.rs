//! Administration and executive member models.

use aluta_core::taxonomy::AdministrationStatus;
use aluta_core::types::{RecordId, Timestamp};
use serde::{Deserialize, Serialize};

/// A row from the `administrations` resource.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Administration {
    pub id: RecordId,
    /// Academic session, e.g. `"2024/2025"`. Unique per administration.
    pub session: String,
    pub president: String,
    /// The president's popular alias.
    pub alias: String,
    /// Regime name or campaign motto.
    pub motto: String,
    pub notable_events: String,
    pub status: AdministrationStatus,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A row from the `executive_members` resource. Belongs to exactly one
/// administration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutiveMember {
    pub id: RecordId,
    pub administration_id: RecordId,
    /// Office held, e.g. `"General Secretary"`.
    pub role: String,
    pub name: String,
    pub alias: Option<String>,
    pub created_at: Timestamp,
}

/// An administration together with its executive council.
#[derive(Debug, Clone, Serialize)]
pub struct AdministrationWithMembers {
    pub administration: Administration,
    pub members: Vec<ExecutiveMember>,
}

/// Payload for inserting an administration.
#[derive(Debug, Clone, Serialize)]
pub struct CreateAdministration {
    pub session: String,
    pub president: String,
    pub alias: String,
    pub motto: String,
    pub notable_events: String,
    pub status: AdministrationStatus,
}

/// Payload for inserting an executive member. The owning
/// administration's id is stamped on by the repository.
#[derive(Debug, Clone, Serialize)]
pub struct CreateExecutiveMember {
    pub role: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
}
