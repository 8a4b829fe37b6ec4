//! Hall of residence models.

use aluta_core::taxonomy::HallType;
use aluta_core::types::{RecordId, Timestamp};
use serde::{Deserialize, Serialize};

/// A row from the `halls` resource.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hall {
    pub id: RecordId,
    pub name: String,
    /// The hall's popular name, e.g. `"Katanga"`.
    pub alias: String,
    pub motto: String,
    pub description: String,
    /// Notable alumni, in display order.
    pub notable_alumni: Vec<String>,
    /// Display accent color.
    pub color: String,
    #[serde(rename = "type")]
    pub hall_type: HallType,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Payload for inserting a hall.
#[derive(Debug, Clone, Serialize)]
pub struct CreateHall {
    pub name: String,
    pub alias: String,
    pub motto: String,
    pub description: String,
    pub notable_alumni: Vec<String>,
    pub color: String,
    #[serde(rename = "type")]
    pub hall_type: HallType,
}
