//! Archived document models.

use aluta_core::taxonomy::DocumentType;
use aluta_core::types::{RecordId, Timestamp};
use serde::{Deserialize, Serialize};

/// A row from the `documents` resource.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub id: RecordId,
    pub title: String,
    /// Year the document was produced, the collection's sort key.
    pub year: i32,
    #[serde(rename = "type")]
    pub doc_type: DocumentType,
    /// Human-readable size, e.g. `"2.4 MB"`.
    pub size: String,
    pub description: String,
    pub file_url: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Payload for inserting a document.
#[derive(Debug, Clone, Serialize)]
pub struct CreateDocument {
    pub title: String,
    pub year: i32,
    #[serde(rename = "type")]
    pub doc_type: DocumentType,
    pub size: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_url: Option<String>,
}
