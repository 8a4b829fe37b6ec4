//! Fixed category/status taxonomies shared by every archive entity.
//!
//! Each taxonomy is a closed set of TEXT values enforced by the store.
//! The wire string is the single source of truth: serde, `as_str`, and
//! `FromStr` all agree on it exactly (no case folding).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A string did not name any variant of the taxonomy it was parsed as.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized {taxonomy}: {value}")]
pub struct ParseTaxonomyError {
    /// Human-readable taxonomy name, e.g. `"document type"`.
    pub taxonomy: &'static str,
    /// The rejected input.
    pub value: String,
}

macro_rules! define_taxonomy {
    (
        $(#[$meta:meta])*
        $name:ident ($label:literal) {
            $( $(#[$vmeta:meta])* $variant:ident => $wire:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
        pub enum $name {
            $( $(#[$vmeta])* #[serde(rename = $wire)] $variant ),+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[ $( $name::$variant ),+ ];

            /// The exact string the store persists for this variant.
            pub fn as_str(self) -> &'static str {
                match self { $( $name::$variant => $wire ),+ }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = ParseTaxonomyError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $wire => Ok($name::$variant), )+
                    other => Err(ParseTaxonomyError {
                        taxonomy: $label,
                        value: other.to_string(),
                    }),
                }
            }
        }
    };
}

define_taxonomy! {
    /// Kind of archived document.
    DocumentType ("document type") {
        Constitution => "Constitution",
        Bill => "Bill",
        Manifesto => "Manifesto",
        Speech => "Speech",
        Report => "Report",
        Memo => "Memo",
    }
}

define_taxonomy! {
    /// Category of a union announcement.
    AnnouncementCategory ("announcement category") {
        News => "News",
        Event => "Event",
        Memo => "Memo",
        Urgent => "Urgent",
    }
}

define_taxonomy! {
    /// How an administration's term ended (or that it is ongoing).
    AdministrationStatus ("administration status") {
        Active => "Active",
        Completed => "Completed",
        Suspended => "Suspended",
        Impeached => "Impeached",
    }
}

define_taxonomy! {
    /// Category of a registered student club.
    ClubCategory ("club category") {
        Sociocultural => "Sociocultural",
        Academic => "Academic",
        Religious => "Religious",
        Press => "Press",
        Tech => "Tech",
        Sports => "Sports",
        Politics => "Politics",
    }
}

define_taxonomy! {
    /// Residency type of a hall.
    HallType ("hall type") {
        Male => "male",
        Female => "female",
        Mixed => "mixed",
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
