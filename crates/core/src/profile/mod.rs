//! Talent profile management
//!
//! The manager owns the list of talent profiles, the currently active
//! profile, and the projection of the active profile onto the flat
//! editable user record. All I/O goes through the port traits in
//! [`ports`].

pub mod manager;
pub mod migration;
pub mod ports;
pub mod projection;
pub mod wire;
