//! REST client for the hosted store's PostgREST-style interface.
//!
//! Selects become `GET /{resource}?select=*&column=eq.value&order=col.dir`;
//! inserts become `POST /{resource}` with `Prefer: return=representation`
//! so the stored rows (server-assigned id and timestamps included) come
//! back in the response. Wire-level behavior beyond that -- auth, row
//! constraints, ordering -- belongs to the backend.

use async_trait::async_trait;
use serde_json::Value;

use crate::config::StoreConfig;
use crate::error::{StoreError, StoreResult};
use crate::{ArchiveStore, SelectQuery};

/// HTTP client for one hosted store.
pub struct PostgrestStore {
    client: reqwest::Client,
    config: StoreConfig,
}

impl PostgrestStore {
    /// Create a client for the store described by `config`.
    pub fn new(config: StoreConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Create a client reusing an existing [`reqwest::Client`] (useful
    /// for connection pooling across stores).
    pub fn with_client(client: reqwest::Client, config: StoreConfig) -> Self {
        Self { client, config }
    }

    /// Create a client from [`StoreConfig::from_env`].
    pub fn from_env() -> StoreResult<Self> {
        Ok(Self::new(StoreConfig::from_env()?))
    }

    fn resource_url(&self, resource: &str) -> String {
        format!("{}/{}", self.config.base_url.trim_end_matches('/'), resource)
    }

    /// Translate a [`SelectQuery`] into PostgREST query parameters.
    fn query_params(query: &SelectQuery<'_>) -> Vec<(String, String)> {
        let mut params = vec![("select".to_string(), "*".to_string())];
        if let Some(filter) = &query.filter {
            params.push((filter.column.to_string(), format!("eq.{}", filter.value)));
        }
        if let Some(order) = &query.order {
            let direction = if order.descending { "desc" } else { "asc" };
            params.push(("order".to_string(), format!("{}.{}", order.column, direction)));
        }
        params
    }

    /// Attach the access key headers every request carries.
    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        request
            .header("apikey", &self.config.api_key)
            .bearer_auth(&self.config.api_key)
    }

    /// Ensure the response has a success status code, otherwise surface
    /// the status and body as [`StoreError::Api`].
    async fn ensure_success(response: reqwest::Response) -> StoreResult<reqwest::Response> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(StoreError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }
}

#[async_trait]
impl ArchiveStore for PostgrestStore {
    async fn select(&self, query: SelectQuery<'_>) -> StoreResult<Vec<Value>> {
        let request = self
            .client
            .get(self.resource_url(query.resource))
            .query(&Self::query_params(&query));
        let response = self.authorize(request).send().await?;
        let rows = Self::ensure_success(response).await?.json().await?;
        Ok(rows)
    }

    async fn insert(&self, resource: &str, row: Value) -> StoreResult<Value> {
        let mut rows = self.insert_many(resource, vec![row]).await?;
        if rows.is_empty() {
            return Err(StoreError::EmptyRepresentation {
                resource: resource.to_string(),
            });
        }
        Ok(rows.remove(0))
    }

    async fn insert_many(&self, resource: &str, rows: Vec<Value>) -> StoreResult<Vec<Value>> {
        if rows.is_empty() {
            return Ok(Vec::new());
        }
        let request = self
            .client
            .post(self.resource_url(resource))
            .header("Prefer", "return=representation")
            .json(&rows);
        let response = self.authorize(request).send().await?;
        let stored = Self::ensure_success(response).await?.json().await?;
        Ok(stored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> PostgrestStore {
        PostgrestStore::new(StoreConfig::new(
            "https://example.test/rest/v1/",
            "service-key",
        ))
    }

    #[test]
    fn resource_url_joins_without_duplicate_slash() {
        assert_eq!(
            store().resource_url("documents"),
            "https://example.test/rest/v1/documents"
        );
    }

    #[test]
    fn bare_query_selects_everything() {
        let params = PostgrestStore::query_params(&SelectQuery::new("halls"));
        assert_eq!(params, vec![("select".to_string(), "*".to_string())]);
    }

    #[test]
    fn filter_and_order_become_postgrest_params() {
        let query = SelectQuery::new("announcements")
            .eq("category", "News")
            .order_desc("date");
        let params = PostgrestStore::query_params(&query);
        assert_eq!(
            params,
            vec![
                ("select".to_string(), "*".to_string()),
                ("category".to_string(), "eq.News".to_string()),
                ("order".to_string(), "date.desc".to_string()),
            ]
        );
    }

    #[test]
    fn ascending_order_param() {
        let query = SelectQuery::new("clubs").order_asc("name");
        let params = PostgrestStore::query_params(&query);
        assert_eq!(params[1], ("order".to_string(), "name.asc".to_string()));
    }
}
