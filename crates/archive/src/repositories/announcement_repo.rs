//! Repository for the `announcements` resource.

use aluta_core::taxonomy::AnnouncementCategory;
use aluta_core::types::RecordId;
use aluta_store::{ArchiveStore, SelectQuery, StoreResult};

use crate::models::announcement::{Announcement, CreateAnnouncement};
use crate::repositories::{fetch_list, fetch_one, insert_returning};

const RESOURCE: &str = "announcements";

/// Read/write operations for union announcements.
pub struct AnnouncementRepo;

impl AnnouncementRepo {
    /// List every announcement, newest first.
    pub async fn list_all(store: &dyn ArchiveStore) -> StoreResult<Vec<Announcement>> {
        fetch_list(store, SelectQuery::new(RESOURCE).order_desc("date")).await
    }

    /// List announcements in one category, newest first.
    pub async fn list_by_category(
        store: &dyn ArchiveStore,
        category: AnnouncementCategory,
    ) -> StoreResult<Vec<Announcement>> {
        fetch_list(
            store,
            SelectQuery::new(RESOURCE)
                .eq("category", category.as_str())
                .order_desc("date"),
        )
        .await
    }

    /// Fetch one announcement by id. Unknown ids are `Ok(None)`.
    pub async fn find_by_id(
        store: &dyn ArchiveStore,
        id: RecordId,
    ) -> StoreResult<Option<Announcement>> {
        fetch_one(store, SelectQuery::new(RESOURCE).eq("id", id.to_string())).await
    }

    /// Insert an announcement and return the stored record.
    pub async fn create(
        store: &dyn ArchiveStore,
        input: &CreateAnnouncement,
    ) -> StoreResult<Announcement> {
        insert_returning(store, RESOURCE, input).await
    }
}
