//! Flat user record types
//!
//! The editable on-screen record is a flat projection: account-level
//! fields plus a full copy of the active talent profile's fields under
//! their original names, so form inputs built in the single-profile era
//! keep reading and writing through unchanged field names.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::normalize;
use crate::types::profile::TalentFields;

/// Account-level fields owned by the user record itself, untouched by
/// profile selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AccountFields {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub agency_name: String,
    pub agency_contact: String,
    pub website: String,
    pub instagram: String,
    pub youtube: String,
}

impl AccountFields {
    /// Extract account fields from a loosely typed user object
    pub fn from_raw(raw: &Value) -> Self {
        let mut account = Self::default();
        if let Some(obj) = raw.as_object() {
            for (key, value) in obj {
                account.set_field(key, value);
            }
        }
        account
    }

    /// Apply a single wire-named account field; returns `false` for
    /// names this struct does not own.
    pub fn set_field(&mut self, name: &str, value: &Value) -> bool {
        match name {
            "name" => self.name = normalize::string_from_value(value),
            "email" => self.email = normalize::string_from_value(value),
            "phone" => self.phone = normalize::string_from_value(value),
            "location" => self.location = normalize::string_from_value(value),
            "agencyName" => self.agency_name = normalize::string_from_value(value),
            "agencyContact" => self.agency_contact = normalize::string_from_value(value),
            "website" => self.website = normalize::string_from_value(value),
            "instagram" => self.instagram = normalize::string_from_value(value),
            "youtube" => self.youtube = normalize::string_from_value(value),
            _ => return false,
        }
        true
    }
}

/// The flat editable user record: account fields plus the active
/// profile's fields spread on top.
///
/// Built only by the projection function in `stagelink-core`, which is
/// the single place the profile-field copy is produced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FlatUser {
    #[serde(flatten)]
    pub account: AccountFields,
    /// Mirrors the active profile's `profileType`
    pub user_category_type: String,
    #[serde(flatten)]
    pub talent: TalentFields,
}
