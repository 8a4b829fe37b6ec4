//! Repository for the `halls` resource.

use aluta_core::taxonomy::HallType;
use aluta_core::types::RecordId;
use aluta_store::{ArchiveStore, SelectQuery, StoreResult};

use crate::models::hall::{CreateHall, Hall};
use crate::repositories::{fetch_list, fetch_one, insert_returning};

const RESOURCE: &str = "halls";

/// Read/write operations for halls of residence.
pub struct HallRepo;

impl HallRepo {
    /// List every hall, alphabetically.
    pub async fn list_all(store: &dyn ArchiveStore) -> StoreResult<Vec<Hall>> {
        fetch_list(store, SelectQuery::new(RESOURCE).order_asc("name")).await
    }

    /// List halls of one residency type, alphabetically.
    pub async fn list_by_type(
        store: &dyn ArchiveStore,
        hall_type: HallType,
    ) -> StoreResult<Vec<Hall>> {
        fetch_list(
            store,
            SelectQuery::new(RESOURCE)
                .eq("type", hall_type.as_str())
                .order_asc("name"),
        )
        .await
    }

    /// Fetch one hall by id. Unknown ids are `Ok(None)`.
    pub async fn find_by_id(store: &dyn ArchiveStore, id: RecordId) -> StoreResult<Option<Hall>> {
        fetch_one(store, SelectQuery::new(RESOURCE).eq("id", id.to_string())).await
    }

    /// Insert a hall and return the stored record.
    pub async fn create(store: &dyn ArchiveStore, input: &CreateHall) -> StoreResult<Hall> {
        insert_returning(store, RESOURCE, input).await
    }
}
