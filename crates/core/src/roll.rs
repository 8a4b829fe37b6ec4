//! The curated roll of past administrations.
//!
//! A hand-maintained historical list, small enough to search locally
//! instead of querying the store. Entries are authored in
//! reverse-chronological session order and that order is preserved by
//! [`filter_roll`].

use crate::taxonomy::AdministrationStatus;

/// One administration on the curated roll.
///
/// Mirrors a subset of the stored `administrations` record but lives as
/// static data, independent of the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RollEntry {
    /// Academic session, e.g. `"2024/2025"`.
    pub session: &'static str,
    pub president: &'static str,
    /// The president's popular alias.
    pub alias: &'static str,
    /// Regime name or campaign motto.
    pub motto: &'static str,
    pub notable_events: &'static str,
    pub status: AdministrationStatus,
}

/// Past administrations, most recent first.
pub const PAST_ADMINISTRATIONS: &[RollEntry] = &[
    RollEntry {
        session: "2024/2025",
        president: "Aweda Bolaji",
        alias: "Oloye",
        motto: "Team inclusive",
        notable_events: "Current administration focusing on inclusivity and student welfare amid rising costs.",
        status: AdministrationStatus::Active,
    },
    RollEntry {
        session: "2023/2024",
        president: "Samuel Samson Tobiloba",
        alias: "Host",
        motto: "Team Reform",
        notable_events: "Focused on reforming union processes and digitalizing the secretariat.",
        status: AdministrationStatus::Completed,
    },
    RollEntry {
        session: "2021/2022",
        president: "Adewole Adeyinka",
        alias: "Mascot",
        motto: "Team Restoration",
        notable_events: "Restored the union after a long period of suspension and caretaker committees.",
        status: AdministrationStatus::Completed,
    },
    RollEntry {
        session: "2019/2020",
        president: "Akeju Olusegun",
        alias: "Akeju",
        motto: "Unification",
        notable_events: "Managed student affairs during the COVID-19 pandemic transition.",
        status: AdministrationStatus::Completed,
    },
    RollEntry {
        session: "2017/2018",
        president: "Ojo Aderemi",
        alias: "Patriotic Intelligentsia",
        motto: "Patriotic Intelligentsia",
        notable_events: "Historically suspended for leading a protest against ID card fees. Famous 'Book of Life' speech.",
        status: AdministrationStatus::Suspended,
    },
    RollEntry {
        session: "2014/2015",
        president: "Odesola Victor",
        alias: "Odesola",
        motto: "Redemption",
        notable_events: "Advocated for better hostel facilities.",
        status: AdministrationStatus::Completed,
    },
    RollEntry {
        session: "2011/2012",
        president: "Edet Tokunbo",
        alias: "Tokunbo",
        motto: "Transformation",
        notable_events: "Led protests against fee hikes.",
        status: AdministrationStatus::Completed,
    },
    RollEntry {
        session: "1994/1995",
        president: "Sowore Omoyele",
        alias: "Sowore",
        motto: "Anti-Military",
        notable_events: "Led fierce anti-military protests during the Abacha regime. Expelled/Suspended multiple times.",
        status: AdministrationStatus::Suspended,
    },
    RollEntry {
        session: "1978/1979",
        president: "Segun Okeowo",
        alias: "Okeowo",
        motto: "Ali Must Go",
        notable_events: "Led the nationwide 'Ali Must Go' protests against the commercialization of education.",
        status: AdministrationStatus::Impeached,
    },
    RollEntry {
        session: "1970/1971",
        president: "Speaker (Acting)",
        alias: "Kunle Adepeju Era",
        motto: "Welfare",
        notable_events: "Kunle Adepeju was shot by police during a peaceful protest, becoming the first student martyr.",
        status: AdministrationStatus::Completed,
    },
];

/// Filter roll entries whose president, session, or alias contains `term`
/// as a case-insensitive substring.
///
/// Term and fields are lower-cased before comparison; whitespace and
/// diacritics are not normalized. An empty term matches every entry.
/// Relative order of the input is preserved.
pub fn filter_roll<'a>(entries: &'a [RollEntry], term: &str) -> Vec<&'a RollEntry> {
    let needle = term.to_lowercase();
    entries
        .iter()
        .filter(|entry| {
            entry.president.to_lowercase().contains(&needle)
                || entry.session.to_lowercase().contains(&needle)
                || entry.alias.to_lowercase().contains(&needle)
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
