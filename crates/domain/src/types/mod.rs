//! Domain types and models

pub mod profile;
pub mod user;

pub use profile::{TalentFields, TalentProfile};
pub use user::{AccountFields, FlatUser};
