//! Record structs and create DTOs.
//!
//! Each submodule contains:
//! - A `Deserialize` + `Serialize` record struct matching the stored row
//! - A `Serialize` create DTO excluding the server-assigned id and
//!   timestamps

pub mod administration;
pub mod announcement;
pub mod club;
pub mod document;
pub mod hall;

pub use administration::{
    Administration, AdministrationWithMembers, CreateAdministration, CreateExecutiveMember,
    ExecutiveMember,
};
pub use announcement::{Announcement, CreateAnnouncement};
pub use club::{Club, CreateClub};
pub use document::{CreateDocument, Document};
pub use hall::{CreateHall, Hall};
