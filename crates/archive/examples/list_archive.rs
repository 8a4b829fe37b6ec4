//! Connects to the hosted store and prints a quick survey of the
//! archive, then runs a local search over the curated roll.
//!
//! Requires `ARCHIVE_STORE_URL` and `ARCHIVE_STORE_KEY` (a `.env` file
//! works). Optional first argument: a roll search term.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use aluta_archive::repositories::{
    AdministrationRepo, AnnouncementRepo, ClubRepo, DocumentRepo, HallRepo,
};
use aluta_core::roll::{filter_roll, PAST_ADMINISTRATIONS};
use aluta_store::PostgrestStore;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Missing configuration is fatal at startup.
    let store = PostgrestStore::from_env()
        .expect("ARCHIVE_STORE_URL and ARCHIVE_STORE_KEY must be set");

    let documents = DocumentRepo::list_all(&store)
        .await
        .expect("failed to list documents");
    tracing::info!(count = documents.len(), "documents");
    for document in &documents {
        println!("{}  {}  ({})", document.year, document.title, document.doc_type);
    }

    let announcements = AnnouncementRepo::list_all(&store)
        .await
        .expect("failed to list announcements");
    tracing::info!(count = announcements.len(), "announcements");

    let administrations = AdministrationRepo::list_all(&store)
        .await
        .expect("failed to list administrations");
    for entry in &administrations {
        println!(
            "{}  {}  [{} members]",
            entry.administration.session,
            entry.administration.president,
            entry.members.len()
        );
    }

    let clubs = ClubRepo::list_all(&store).await.expect("failed to list clubs");
    tracing::info!(count = clubs.len(), "clubs");

    let halls = HallRepo::list_all(&store).await.expect("failed to list halls");
    tracing::info!(count = halls.len(), "halls");

    // Local search over the curated roll, no store round trip.
    let term = std::env::args().nth(1).unwrap_or_default();
    let hits = filter_roll(PAST_ADMINISTRATIONS, &term);
    if hits.is_empty() {
        println!("No records found matching \"{term}\"");
    } else {
        for entry in hits {
            println!(
                "{}  {} \"{}\"  -- {}",
                entry.session, entry.president, entry.alias, entry.status
            );
        }
    }
}
