//! Repository for the `clubs` resource.

use aluta_core::taxonomy::ClubCategory;
use aluta_core::types::RecordId;
use aluta_store::{ArchiveStore, SelectQuery, StoreResult};

use crate::models::club::{Club, CreateClub};
use crate::repositories::{fetch_list, fetch_one, insert_returning};

const RESOURCE: &str = "clubs";

/// Read/write operations for student clubs.
pub struct ClubRepo;

impl ClubRepo {
    /// List every club, alphabetically.
    pub async fn list_all(store: &dyn ArchiveStore) -> StoreResult<Vec<Club>> {
        fetch_list(store, SelectQuery::new(RESOURCE).order_asc("name")).await
    }

    /// List clubs in one category, alphabetically.
    pub async fn list_by_category(
        store: &dyn ArchiveStore,
        category: ClubCategory,
    ) -> StoreResult<Vec<Club>> {
        fetch_list(
            store,
            SelectQuery::new(RESOURCE)
                .eq("category", category.as_str())
                .order_asc("name"),
        )
        .await
    }

    /// Fetch one club by id. Unknown ids are `Ok(None)`.
    pub async fn find_by_id(store: &dyn ArchiveStore, id: RecordId) -> StoreResult<Option<Club>> {
        fetch_one(store, SelectQuery::new(RESOURCE).eq("id", id.to_string())).await
    }

    /// Insert a club and return the stored record.
    pub async fn create(store: &dyn ArchiveStore, input: &CreateClub) -> StoreResult<Club> {
        insert_returning(store, RESOURCE, input).await
    }
}
