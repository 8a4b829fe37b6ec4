//! Student club models.

use aluta_core::taxonomy::ClubCategory;
use aluta_core::types::{RecordId, Timestamp};
use serde::{Deserialize, Serialize};

/// A row from the `clubs` resource.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Club {
    pub id: RecordId,
    pub name: String,
    pub acronym: Option<String>,
    pub category: ClubCategory,
    /// Founding year or era, kept as authored text (e.g. `"1957"`).
    pub founded: String,
    pub motto: String,
    pub description: String,
    /// Regular activities, in display order.
    pub activities: Vec<String>,
    pub president: Option<String>,
    /// Display accent color, e.g. `"#B91C1C"`.
    pub color: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Payload for inserting a club.
#[derive(Debug, Clone, Serialize)]
pub struct CreateClub {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acronym: Option<String>,
    pub category: ClubCategory,
    pub founded: String,
    pub motto: String,
    pub description: String,
    pub activities: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub president: Option<String>,
    pub color: String,
}
