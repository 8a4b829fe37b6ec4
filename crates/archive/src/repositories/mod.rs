//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async operations
//! that accept `&dyn ArchiveStore` as the first argument. The shared
//! select/decode plumbing lives here; repositories keep only their
//! resource names, sort keys, and insert payloads.

use serde::de::DeserializeOwned;
use serde::Serialize;

use aluta_store::{ArchiveStore, SelectQuery, StoreResult};

pub mod administration_repo;
pub mod announcement_repo;
pub mod club_repo;
pub mod document_repo;
pub mod hall_repo;

pub use administration_repo::AdministrationRepo;
pub use announcement_repo::AnnouncementRepo;
pub use club_repo::ClubRepo;
pub use document_repo::DocumentRepo;
pub use hall_repo::HallRepo;

/// Run a select and decode every row into `T`.
pub(crate) async fn fetch_list<T: DeserializeOwned>(
    store: &dyn ArchiveStore,
    query: SelectQuery<'_>,
) -> StoreResult<Vec<T>> {
    tracing::debug!(resource = query.resource, "select");
    let rows = store.select(query).await?;
    rows.into_iter()
        .map(|row| serde_json::from_value(row).map_err(Into::into))
        .collect()
}

/// Run a single-row fetch and decode the row into `T`, if any.
pub(crate) async fn fetch_one<T: DeserializeOwned>(
    store: &dyn ArchiveStore,
    query: SelectQuery<'_>,
) -> StoreResult<Option<T>> {
    tracing::debug!(resource = query.resource, "select one");
    match store.select_one(query).await? {
        Some(row) => Ok(Some(serde_json::from_value(row)?)),
        None => Ok(None),
    }
}

/// Insert `payload` into `resource` and decode the stored row
/// (server-assigned id and timestamps included) into `T`.
pub(crate) async fn insert_returning<T, P>(
    store: &dyn ArchiveStore,
    resource: &str,
    payload: &P,
) -> StoreResult<T>
where
    T: DeserializeOwned,
    P: Serialize,
{
    tracing::debug!(resource, "insert");
    let row = store.insert(resource, serde_json::to_value(payload)?).await?;
    Ok(serde_json::from_value(row)?)
}
