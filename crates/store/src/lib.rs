//! The store boundary: resource-oriented access to the hosted backend.
//!
//! Every persisted collection (documents, announcements, administrations,
//! executive_members, clubs, halls) is a named *resource* supporting
//! select (optionally filtered, optionally ordered), single-row fetch,
//! and insert. [`ArchiveStore`] is that surface as an object-safe trait;
//! [`PostgrestStore`] speaks to the hosted backend over its REST
//! interface, and [`MemoryStore`] is an in-memory substitute for tests
//! and local development.
//!
//! Rows cross this boundary as raw [`serde_json::Value`] objects; typing
//! them is the query service's job. No caching, no retries, no timeouts
//! of this layer's own.

use async_trait::async_trait;
use serde_json::Value;

pub mod config;
pub mod error;
pub mod memory;
pub mod postgrest;

pub use config::StoreConfig;
pub use error::{StoreError, StoreResult};
pub use memory::MemoryStore;
pub use postgrest::PostgrestStore;

/// A single select against one resource.
///
/// At most one equality filter and one order key, which is all the
/// archive's access patterns need.
#[derive(Debug, Clone)]
pub struct SelectQuery<'a> {
    /// Resource (collection) name, e.g. `"documents"`.
    pub resource: &'a str,
    /// Optional single-column equality filter.
    pub filter: Option<Filter<'a>>,
    /// Optional order key.
    pub order: Option<OrderBy<'a>>,
}

/// Equality filter on one column.
#[derive(Debug, Clone)]
pub struct Filter<'a> {
    pub column: &'a str,
    pub value: String,
}

/// Order key for a select.
#[derive(Debug, Clone)]
pub struct OrderBy<'a> {
    pub column: &'a str,
    pub descending: bool,
}

impl<'a> SelectQuery<'a> {
    /// Select every row of `resource`, unfiltered and unordered.
    pub fn new(resource: &'a str) -> Self {
        Self {
            resource,
            filter: None,
            order: None,
        }
    }

    /// Keep only rows where `column` equals `value`.
    pub fn eq(mut self, column: &'a str, value: impl Into<String>) -> Self {
        self.filter = Some(Filter {
            column,
            value: value.into(),
        });
        self
    }

    /// Order ascending by `column`.
    pub fn order_asc(mut self, column: &'a str) -> Self {
        self.order = Some(OrderBy {
            column,
            descending: false,
        });
        self
    }

    /// Order descending by `column`.
    pub fn order_desc(mut self, column: &'a str) -> Self {
        self.order = Some(OrderBy {
            column,
            descending: true,
        });
        self
    }
}

/// The resource-oriented store surface.
///
/// Implementations are passed explicitly to every query-service
/// operation; nothing in this workspace holds a process-wide store
/// singleton.
#[async_trait]
pub trait ArchiveStore: Send + Sync {
    /// Fetch the rows matching `query`, in the requested order.
    async fn select(&self, query: SelectQuery<'_>) -> StoreResult<Vec<Value>>;

    /// Fetch at most one row matching `query`.
    ///
    /// Zero matches is `Ok(None)`, never an error. More than one match
    /// on a fetch the caller expected to be unique is
    /// [`StoreError::MultipleRows`].
    async fn select_one(&self, query: SelectQuery<'_>) -> StoreResult<Option<Value>> {
        let resource = query.resource;
        let mut rows = self.select(query).await?;
        match rows.len() {
            0 => Ok(None),
            1 => Ok(Some(rows.remove(0))),
            count => Err(StoreError::MultipleRows {
                resource: resource.to_string(),
                count,
            }),
        }
    }

    /// Insert one row and return the stored representation, including
    /// the server-assigned id and timestamps.
    async fn insert(&self, resource: &str, row: Value) -> StoreResult<Value>;

    /// Insert several rows in one round trip, returning the stored
    /// representations in input order. An empty slice is a no-op.
    async fn insert_many(&self, resource: &str, rows: Vec<Value>) -> StoreResult<Vec<Value>>;
}
