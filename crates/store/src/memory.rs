//! In-memory [`ArchiveStore`] for tests and local development.
//!
//! Holds every resource as a plain `Vec` of JSON rows and evaluates
//! equality filters and order keys over them. Inserts mimic the hosted
//! backend: a UUID `id` and RFC 3339 `created_at`/`updated_at` stamps
//! are assigned when the payload does not carry them, so create-path
//! tests can assert on server-populated fields.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::StoreResult;
use crate::{ArchiveStore, SelectQuery};

/// An in-memory store, safe to share across tasks.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<HashMap<String, Vec<Value>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed `resource` with `rows` (builder style, for tests).
    pub fn with_rows(self, resource: &str, rows: Vec<Value>) -> Self {
        self.tables
            .write()
            .expect("memory store lock poisoned")
            .entry(resource.to_string())
            .or_default()
            .extend(rows);
        self
    }

    /// Number of rows currently held for `resource`.
    pub fn row_count(&self, resource: &str) -> usize {
        self.tables
            .read()
            .expect("memory store lock poisoned")
            .get(resource)
            .map_or(0, Vec::len)
    }

    /// Assign the server-side fields a hosted insert would.
    fn stamp(row: &mut Value) {
        let Some(object) = row.as_object_mut() else {
            return;
        };
        if !object.contains_key("id") {
            object.insert("id".to_string(), Value::String(uuid::Uuid::new_v4().to_string()));
        }
        let now = chrono::Utc::now().to_rfc3339();
        for key in ["created_at", "updated_at"] {
            if !object.contains_key(key) {
                object.insert(key.to_string(), Value::String(now.clone()));
            }
        }
    }
}

/// Loose equality between a row field and a filter value string,
/// matching how the wire protocol encodes filters as text.
fn field_matches(field: Option<&Value>, wanted: &str) -> bool {
    match field {
        Some(Value::String(s)) => s == wanted,
        Some(Value::Number(n)) => n.to_string() == wanted,
        Some(Value::Bool(b)) => b.to_string() == wanted,
        _ => false,
    }
}

/// Order two JSON scalars: strings lexicographically, numbers
/// numerically. Mixed or non-scalar values compare equal.
fn compare_fields(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    match (a, b) {
        (Some(Value::String(x)), Some(Value::String(y))) => x.cmp(y),
        (Some(Value::Number(x)), Some(Value::Number(y))) => x
            .as_f64()
            .partial_cmp(&y.as_f64())
            .unwrap_or(Ordering::Equal),
        _ => Ordering::Equal,
    }
}

#[async_trait]
impl ArchiveStore for MemoryStore {
    async fn select(&self, query: SelectQuery<'_>) -> StoreResult<Vec<Value>> {
        let tables = self.tables.read().expect("memory store lock poisoned");
        let mut rows: Vec<Value> = tables
            .get(query.resource)
            .map(|rows| rows.as_slice())
            .unwrap_or_default()
            .iter()
            .filter(|row| match &query.filter {
                Some(filter) => field_matches(row.get(filter.column), &filter.value),
                None => true,
            })
            .cloned()
            .collect();

        if let Some(order) = &query.order {
            rows.sort_by(|a, b| {
                let ordering = compare_fields(a.get(order.column), b.get(order.column));
                if order.descending {
                    ordering.reverse()
                } else {
                    ordering
                }
            });
        }
        Ok(rows)
    }

    async fn insert(&self, resource: &str, mut row: Value) -> StoreResult<Value> {
        Self::stamp(&mut row);
        self.tables
            .write()
            .expect("memory store lock poisoned")
            .entry(resource.to_string())
            .or_default()
            .push(row.clone());
        Ok(row)
    }

    async fn insert_many(&self, resource: &str, rows: Vec<Value>) -> StoreResult<Vec<Value>> {
        let mut stored = rows;
        for row in &mut stored {
            Self::stamp(row);
        }
        self.tables
            .write()
            .expect("memory store lock poisoned")
            .entry(resource.to_string())
            .or_default()
            .extend(stored.iter().cloned());
        Ok(stored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use serde_json::json;

    use crate::StoreError;

    #[tokio::test]
    async fn select_filters_on_string_equality() {
        let store = MemoryStore::new().with_rows(
            "halls",
            vec![
                json!({"name": "Mellanby", "type": "male"}),
                json!({"name": "Queens", "type": "female"}),
            ],
        );
        let rows = store
            .select(SelectQuery::new("halls").eq("type", "female"))
            .await
            .unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["name"], "Queens");
    }

    #[tokio::test]
    async fn select_orders_numbers_descending() {
        let store = MemoryStore::new().with_rows(
            "documents",
            vec![
                json!({"title": "a", "year": 1999}),
                json!({"title": "b", "year": 2024}),
                json!({"title": "c", "year": 1960}),
            ],
        );
        let rows = store
            .select(SelectQuery::new("documents").order_desc("year"))
            .await
            .unwrap();
        let years: Vec<i64> = rows.iter().map(|r| r["year"].as_i64().unwrap()).collect();
        assert_eq!(years, vec![2024, 1999, 1960]);
    }

    #[tokio::test]
    async fn select_on_unknown_resource_is_empty() {
        let store = MemoryStore::new();
        let rows = store.select(SelectQuery::new("documents")).await.unwrap();
        assert!(rows.is_empty());
    }

    #[tokio::test]
    async fn insert_assigns_id_and_timestamps() {
        let store = MemoryStore::new();
        let row = store
            .insert("clubs", json!({"name": "Literary and Debating Society"}))
            .await
            .unwrap();
        assert!(row["id"].is_string());
        assert!(row["created_at"].is_string());
        assert!(row["updated_at"].is_string());
        assert_eq!(store.row_count("clubs"), 1);
    }

    #[tokio::test]
    async fn insert_keeps_caller_supplied_id() {
        let store = MemoryStore::new();
        let row = store
            .insert("clubs", json!({"id": "fixed", "name": "Press Club"}))
            .await
            .unwrap();
        assert_eq!(row["id"], "fixed");
    }

    #[tokio::test]
    async fn select_one_rejects_ambiguous_matches() {
        let store = MemoryStore::new().with_rows(
            "administrations",
            vec![
                json!({"session": "2024/2025", "president": "A"}),
                json!({"session": "2024/2025", "president": "B"}),
            ],
        );
        let err = store
            .select_one(SelectQuery::new("administrations").eq("session", "2024/2025"))
            .await
            .unwrap_err();
        assert_matches!(
            err,
            StoreError::MultipleRows { resource, count: 2 } => {
                assert_eq!(resource, "administrations");
            }
        );
    }

    #[tokio::test]
    async fn select_one_zero_rows_is_none() {
        let store = MemoryStore::new();
        let row = store
            .select_one(SelectQuery::new("halls").eq("id", "nope"))
            .await
            .unwrap();
        assert!(row.is_none());
    }
}
