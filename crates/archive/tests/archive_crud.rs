//! Integration tests for the archive query service.
//!
//! Exercises the repository layer against the in-memory store:
//! - List ordering per collection sort key
//! - Filtered lists
//! - Single-record fetches (present and absent)
//! - Create paths, including the two-step administration write and its
//!   partial-failure behavior

use assert_matches::assert_matches;
use async_trait::async_trait;
use serde_json::Value;

use aluta_archive::models::{
    CreateAdministration, CreateAnnouncement, CreateClub, CreateDocument, CreateExecutiveMember,
    CreateHall,
};
use aluta_archive::repositories::{
    AdministrationRepo, AnnouncementRepo, ClubRepo, DocumentRepo, HallRepo,
};
use aluta_core::taxonomy::{
    AdministrationStatus, AnnouncementCategory, ClubCategory, DocumentType, HallType,
};
use aluta_store::{ArchiveStore, MemoryStore, SelectQuery, StoreError, StoreResult};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_document(title: &str, year: i32) -> CreateDocument {
    CreateDocument {
        title: title.to_string(),
        year,
        doc_type: DocumentType::Report,
        size: "1.2 MB".to_string(),
        description: "test fixture".to_string(),
        file_url: None,
    }
}

fn new_announcement(title: &str, date: &str, category: AnnouncementCategory) -> CreateAnnouncement {
    CreateAnnouncement {
        title: title.to_string(),
        date: date.parse().unwrap(),
        category,
        summary: "summary".to_string(),
        content: "content".to_string(),
        author: "General Secretary".to_string(),
    }
}

fn new_administration(session: &str, president: &str) -> CreateAdministration {
    CreateAdministration {
        session: session.to_string(),
        president: president.to_string(),
        alias: "alias".to_string(),
        motto: "motto".to_string(),
        notable_events: "events".to_string(),
        status: AdministrationStatus::Completed,
    }
}

fn new_member(role: &str, name: &str) -> CreateExecutiveMember {
    CreateExecutiveMember {
        role: role.to_string(),
        name: name.to_string(),
        alias: None,
    }
}

fn new_hall(name: &str, hall_type: HallType) -> CreateHall {
    CreateHall {
        name: name.to_string(),
        alias: "alias".to_string(),
        motto: "motto".to_string(),
        description: "description".to_string(),
        notable_alumni: vec!["First Alumnus".to_string()],
        color: "#B91C1C".to_string(),
        hall_type,
    }
}

// ---------------------------------------------------------------------------
// Documents
// ---------------------------------------------------------------------------

#[tokio::test]
async fn documents_list_in_descending_year_order() {
    let store = MemoryStore::new();
    for (title, year) in [("old", 1999), ("new", 2024), ("ancient", 1960)] {
        DocumentRepo::create(&store, &new_document(title, year))
            .await
            .unwrap();
    }

    let documents = DocumentRepo::list_all(&store).await.unwrap();
    let years: Vec<i32> = documents.iter().map(|d| d.year).collect();
    assert_eq!(years, vec![2024, 1999, 1960]);
}

#[tokio::test]
async fn document_create_returns_server_assigned_fields() {
    let store = MemoryStore::new();
    let document = DocumentRepo::create(&store, &new_document("Constitution draft", 1981))
        .await
        .unwrap();

    // The caller never supplied these; the store did.
    assert!(!document.id.is_nil());
    assert_eq!(document.created_at, document.updated_at);
    assert_eq!(document.title, "Constitution draft");
    assert_eq!(document.doc_type, DocumentType::Report);
}

#[tokio::test]
async fn documents_filter_by_type() {
    let store = MemoryStore::new();
    let mut speech = new_document("Book of Life", 2017);
    speech.doc_type = DocumentType::Speech;
    DocumentRepo::create(&store, &speech).await.unwrap();
    DocumentRepo::create(&store, &new_document("Annual report", 2018))
        .await
        .unwrap();

    let speeches = DocumentRepo::list_by_type(&store, DocumentType::Speech)
        .await
        .unwrap();
    assert_eq!(speeches.len(), 1);
    assert_eq!(speeches[0].title, "Book of Life");
}

#[tokio::test]
async fn document_find_by_id_round_trips() {
    let store = MemoryStore::new();
    let created = DocumentRepo::create(&store, &new_document("Manifesto", 1994))
        .await
        .unwrap();

    let found = DocumentRepo::find_by_id(&store, created.id)
        .await
        .unwrap()
        .expect("created document should be retrievable");
    assert_eq!(found.id, created.id);
    assert_eq!(found.year, 1994);
}

// ---------------------------------------------------------------------------
// Announcements
// ---------------------------------------------------------------------------

#[tokio::test]
async fn announcements_list_newest_first_and_filter_by_category() {
    let store = MemoryStore::new();
    for (title, date, category) in [
        ("Congress", "2024-03-10", AnnouncementCategory::Event),
        ("Fee update", "2024-06-01", AnnouncementCategory::Urgent),
        ("Election results", "2024-04-22", AnnouncementCategory::News),
    ] {
        AnnouncementRepo::create(&store, &new_announcement(title, date, category))
            .await
            .unwrap();
    }

    let all = AnnouncementRepo::list_all(&store).await.unwrap();
    let titles: Vec<&str> = all.iter().map(|a| a.title.as_str()).collect();
    assert_eq!(titles, vec!["Fee update", "Election results", "Congress"]);

    let urgent = AnnouncementRepo::list_by_category(&store, AnnouncementCategory::Urgent)
        .await
        .unwrap();
    assert_eq!(urgent.len(), 1);
    assert_eq!(urgent[0].title, "Fee update");
}

// ---------------------------------------------------------------------------
// Clubs
// ---------------------------------------------------------------------------

fn new_club(name: &str, category: ClubCategory) -> CreateClub {
    CreateClub {
        name: name.to_string(),
        acronym: None,
        category,
        founded: "1957".to_string(),
        motto: "motto".to_string(),
        description: "description".to_string(),
        activities: vec!["Weekly meeting".to_string(), "Annual congress".to_string()],
        president: None,
        color: "#1D4ED8".to_string(),
    }
}

#[tokio::test]
async fn clubs_list_alphabetically_and_filter_by_category() {
    let store = MemoryStore::new();
    for (name, category) in [
        ("Sigma Club", ClubCategory::Sociocultural),
        ("Press Club", ClubCategory::Press),
        ("Debating Society", ClubCategory::Academic),
    ] {
        ClubRepo::create(&store, &new_club(name, category))
            .await
            .unwrap();
    }

    let clubs = ClubRepo::list_all(&store).await.unwrap();
    let names: Vec<&str> = clubs.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Debating Society", "Press Club", "Sigma Club"]);
    assert_eq!(clubs[0].activities.len(), 2);

    let press = ClubRepo::list_by_category(&store, ClubCategory::Press)
        .await
        .unwrap();
    assert_eq!(press.len(), 1);
    assert_eq!(press[0].name, "Press Club");
}

// ---------------------------------------------------------------------------
// Halls
// ---------------------------------------------------------------------------

#[tokio::test]
async fn hall_find_by_unknown_id_is_none_not_an_error() {
    let store = MemoryStore::new();
    let found = HallRepo::find_by_id(&store, uuid::Uuid::new_v4()).await.unwrap();
    assert!(found.is_none());
}

#[tokio::test]
async fn halls_list_alphabetically_and_filter_by_type() {
    let store = MemoryStore::new();
    for (name, hall_type) in [
        ("Mellanby", HallType::Male),
        ("Queens", HallType::Female),
        ("Independence", HallType::Male),
    ] {
        HallRepo::create(&store, &new_hall(name, hall_type))
            .await
            .unwrap();
    }

    let halls = HallRepo::list_all(&store).await.unwrap();
    let names: Vec<&str> = halls.iter().map(|h| h.name.as_str()).collect();
    assert_eq!(names, vec!["Independence", "Mellanby", "Queens"]);

    let male = HallRepo::list_by_type(&store, HallType::Male).await.unwrap();
    assert_eq!(male.len(), 2);
    assert!(male.iter().all(|h| h.hall_type == HallType::Male));
}

// ---------------------------------------------------------------------------
// Administrations
// ---------------------------------------------------------------------------

#[tokio::test]
async fn administration_create_with_empty_members_is_ok() {
    let store = MemoryStore::new();
    let created = AdministrationRepo::create_with_members(
        &store,
        &new_administration("2019/2020", "Akeju Olusegun"),
        &[],
    )
    .await
    .unwrap();

    assert_eq!(created.administration.session, "2019/2020");
    assert!(created.members.is_empty());
    // No second round trip happened.
    assert_eq!(store.row_count("executive_members"), 0);
}

#[tokio::test]
async fn administration_members_are_stamped_with_the_new_id() {
    let store = MemoryStore::new();
    let created = AdministrationRepo::create_with_members(
        &store,
        &new_administration("2021/2022", "Adewole Adeyinka"),
        &[
            new_member("General Secretary", "First Member"),
            new_member("Treasurer", "Second Member"),
        ],
    )
    .await
    .unwrap();

    assert_eq!(created.members.len(), 2);
    for member in &created.members {
        assert_eq!(member.administration_id, created.administration.id);
        assert!(!member.id.is_nil());
    }
}

#[tokio::test]
async fn administrations_list_with_members_grouped_and_sessions_descending() {
    let store = MemoryStore::new();
    AdministrationRepo::create_with_members(
        &store,
        &new_administration("2014/2015", "Odesola Victor"),
        &[new_member("PRO", "Spokesperson")],
    )
    .await
    .unwrap();
    AdministrationRepo::create_with_members(
        &store,
        &new_administration("2023/2024", "Samuel Samson Tobiloba"),
        &[],
    )
    .await
    .unwrap();

    let all = AdministrationRepo::list_all(&store).await.unwrap();
    let sessions: Vec<&str> = all
        .iter()
        .map(|a| a.administration.session.as_str())
        .collect();
    assert_eq!(sessions, vec!["2023/2024", "2014/2015"]);
    assert!(all[0].members.is_empty());
    assert_eq!(all[1].members.len(), 1);
    assert_eq!(all[1].members[0].role, "PRO");
}

#[tokio::test]
async fn administration_find_by_session() {
    let store = MemoryStore::new();
    AdministrationRepo::create_with_members(
        &store,
        &new_administration("1978/1979", "Segun Okeowo"),
        &[new_member("Speaker", "House Speaker")],
    )
    .await
    .unwrap();

    let found = AdministrationRepo::find_by_session(&store, "1978/1979")
        .await
        .unwrap()
        .expect("session should exist");
    assert_eq!(found.administration.president, "Segun Okeowo");
    assert_eq!(found.members.len(), 1);

    let absent = AdministrationRepo::find_by_session(&store, "1900/1901")
        .await
        .unwrap();
    assert!(absent.is_none());
}

// ---------------------------------------------------------------------------
// Partial failure on the two-step write
// ---------------------------------------------------------------------------

/// Store double whose bulk insert always fails, to exercise the
/// administration-then-members failure path.
struct BulkInsertFails {
    inner: MemoryStore,
}

#[async_trait]
impl ArchiveStore for BulkInsertFails {
    async fn select(&self, query: SelectQuery<'_>) -> StoreResult<Vec<Value>> {
        self.inner.select(query).await
    }

    async fn insert(&self, resource: &str, row: Value) -> StoreResult<Value> {
        self.inner.insert(resource, row).await
    }

    async fn insert_many(&self, _resource: &str, _rows: Vec<Value>) -> StoreResult<Vec<Value>> {
        Err(StoreError::Api {
            status: 500,
            body: "simulated member insert failure".to_string(),
        })
    }
}

#[tokio::test]
async fn member_insert_failure_leaves_the_administration_behind() {
    let store = BulkInsertFails {
        inner: MemoryStore::new(),
    };

    let err = AdministrationRepo::create_with_members(
        &store,
        &new_administration("1994/1995", "Sowore Omoyele"),
        &[new_member("General Secretary", "Someone")],
    )
    .await
    .unwrap_err();
    assert_matches!(err, StoreError::Api { status: 500, .. });

    // The first step committed: the administration row exists with no
    // members. Known inconsistency, per the stated policy.
    let orphaned = AdministrationRepo::list_all(&store.inner).await.unwrap();
    assert_eq!(orphaned.len(), 1);
    assert_eq!(orphaned[0].administration.session, "1994/1995");
    assert!(orphaned[0].members.is_empty());
}
