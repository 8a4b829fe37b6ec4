//! Repository for the `administrations` resource and its executive
//! members.
//!
//! The create path is the one two-step write in the system: the
//! administration row first, then its members stamped with the new id.
//! The steps are not transactional -- see [`AdministrationRepo::create_with_members`].

use std::collections::HashMap;

use serde_json::Value;

use aluta_core::types::RecordId;
use aluta_store::{ArchiveStore, SelectQuery, StoreResult};

use crate::models::administration::{
    Administration, AdministrationWithMembers, CreateAdministration, CreateExecutiveMember,
    ExecutiveMember,
};
use crate::repositories::{fetch_list, fetch_one, insert_returning};

const RESOURCE: &str = "administrations";
const MEMBERS_RESOURCE: &str = "executive_members";

/// Read/write operations for past and present administrations.
pub struct AdministrationRepo;

impl AdministrationRepo {
    /// List every administration with its executive council, most
    /// recent session first. Two round trips: rows, then members.
    pub async fn list_all(store: &dyn ArchiveStore) -> StoreResult<Vec<AdministrationWithMembers>> {
        let administrations: Vec<Administration> =
            fetch_list(store, SelectQuery::new(RESOURCE).order_desc("session")).await?;
        let members: Vec<ExecutiveMember> =
            fetch_list(store, SelectQuery::new(MEMBERS_RESOURCE)).await?;

        let mut by_administration: HashMap<RecordId, Vec<ExecutiveMember>> = HashMap::new();
        for member in members {
            by_administration
                .entry(member.administration_id)
                .or_default()
                .push(member);
        }

        Ok(administrations
            .into_iter()
            .map(|administration| {
                let members = by_administration
                    .remove(&administration.id)
                    .unwrap_or_default();
                AdministrationWithMembers {
                    administration,
                    members,
                }
            })
            .collect())
    }

    /// Fetch one administration by its unique session string, with its
    /// executive council. Unknown sessions are `Ok(None)`.
    pub async fn find_by_session(
        store: &dyn ArchiveStore,
        session: &str,
    ) -> StoreResult<Option<AdministrationWithMembers>> {
        let Some(administration) =
            fetch_one::<Administration>(store, SelectQuery::new(RESOURCE).eq("session", session))
                .await?
        else {
            return Ok(None);
        };
        let members = Self::members_of(store, administration.id).await?;
        Ok(Some(AdministrationWithMembers {
            administration,
            members,
        }))
    }

    /// Fetch one administration by id, with its executive council.
    /// Unknown ids are `Ok(None)`.
    pub async fn find_by_id(
        store: &dyn ArchiveStore,
        id: RecordId,
    ) -> StoreResult<Option<AdministrationWithMembers>> {
        let Some(administration) =
            fetch_one::<Administration>(store, SelectQuery::new(RESOURCE).eq("id", id.to_string()))
                .await?
        else {
            return Ok(None);
        };
        let members = Self::members_of(store, administration.id).await?;
        Ok(Some(AdministrationWithMembers {
            administration,
            members,
        }))
    }

    /// Insert an administration, then its executive members stamped
    /// with the new administration's id.
    ///
    /// Not transactional: if the member insert fails, the
    /// administration row already exists in the store and no rollback
    /// is attempted -- the error propagates and the administration
    /// stands with zero members. An empty `members` slice skips the
    /// second round trip entirely.
    pub async fn create_with_members(
        store: &dyn ArchiveStore,
        input: &CreateAdministration,
        members: &[CreateExecutiveMember],
    ) -> StoreResult<AdministrationWithMembers> {
        let administration: Administration = insert_returning(store, RESOURCE, input).await?;

        if members.is_empty() {
            return Ok(AdministrationWithMembers {
                administration,
                members: Vec::new(),
            });
        }

        let rows = members
            .iter()
            .map(|member| {
                let mut row = serde_json::to_value(member)?;
                if let Value::Object(object) = &mut row {
                    object.insert(
                        "administration_id".to_string(),
                        Value::String(administration.id.to_string()),
                    );
                }
                Ok(row)
            })
            .collect::<StoreResult<Vec<Value>>>()?;

        let stored = match store.insert_many(MEMBERS_RESOURCE, rows).await {
            Ok(stored) => stored,
            Err(err) => {
                tracing::warn!(
                    administration_id = %administration.id,
                    session = %administration.session,
                    error = %err,
                    "member insert failed after administration was created; \
                     the administration row persists with no members"
                );
                return Err(err);
            }
        };

        let members = stored
            .into_iter()
            .map(|row| serde_json::from_value(row).map_err(Into::into))
            .collect::<StoreResult<Vec<ExecutiveMember>>>()?;

        Ok(AdministrationWithMembers {
            administration,
            members,
        })
    }

    async fn members_of(
        store: &dyn ArchiveStore,
        administration_id: RecordId,
    ) -> StoreResult<Vec<ExecutiveMember>> {
        fetch_list(
            store,
            SelectQuery::new(MEMBERS_RESOURCE)
                .eq("administration_id", administration_id.to_string()),
        )
        .await
    }
}
