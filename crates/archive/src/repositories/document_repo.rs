//! Repository for the `documents` resource.

use aluta_core::taxonomy::DocumentType;
use aluta_core::types::RecordId;
use aluta_store::{ArchiveStore, SelectQuery, StoreResult};

use crate::models::document::{CreateDocument, Document};
use crate::repositories::{fetch_list, fetch_one, insert_returning};

const RESOURCE: &str = "documents";

/// Read/write operations for archived documents.
pub struct DocumentRepo;

impl DocumentRepo {
    /// List every document, most recent year first.
    pub async fn list_all(store: &dyn ArchiveStore) -> StoreResult<Vec<Document>> {
        fetch_list(store, SelectQuery::new(RESOURCE).order_desc("year")).await
    }

    /// List documents of one type, most recent year first.
    pub async fn list_by_type(
        store: &dyn ArchiveStore,
        doc_type: DocumentType,
    ) -> StoreResult<Vec<Document>> {
        fetch_list(
            store,
            SelectQuery::new(RESOURCE)
                .eq("type", doc_type.as_str())
                .order_desc("year"),
        )
        .await
    }

    /// Fetch one document by id. Unknown ids are `Ok(None)`.
    pub async fn find_by_id(
        store: &dyn ArchiveStore,
        id: RecordId,
    ) -> StoreResult<Option<Document>> {
        fetch_one(store, SelectQuery::new(RESOURCE).eq("id", id.to_string())).await
    }

    /// Insert a document and return the stored record.
    pub async fn create(
        store: &dyn ArchiveStore,
        input: &CreateDocument,
    ) -> StoreResult<Document> {
        insert_returning(store, RESOURCE, input).await
    }
}
