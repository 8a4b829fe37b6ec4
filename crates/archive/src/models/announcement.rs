//! Union announcement models.

use aluta_core::taxonomy::AnnouncementCategory;
use aluta_core::types::{RecordId, Timestamp};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A row from the `announcements` resource.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Announcement {
    pub id: RecordId,
    pub title: String,
    /// Publication date, the collection's sort key.
    pub date: NaiveDate,
    pub category: AnnouncementCategory,
    /// One-line teaser shown in listings.
    pub summary: String,
    pub content: String,
    pub author: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Payload for inserting an announcement.
#[derive(Debug, Clone, Serialize)]
pub struct CreateAnnouncement {
    pub title: String,
    pub date: NaiveDate,
    pub category: AnnouncementCategory,
    pub summary: String,
    pub content: String,
    pub author: String,
}
