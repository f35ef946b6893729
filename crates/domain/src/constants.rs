//! Domain constants
//!
//! Centralized location for the talent-profile field set and the
//! session cache key shared across the application.

use std::collections::HashSet;

use once_cell::sync::Lazy;

/// Session cache key under which the last-fetched user object is stored
pub const SESSION_CACHE_KEY: &str = "stagelink.me";

/// Wire names of every talent-profile field that participates in
/// projection onto the flat user record and in update routing.
///
/// Update routing and save serialization both consult this list, so the
/// two cannot drift. `profileId` and `isPrimary` are deliberately
/// absent: they identify a profile rather than describe it and are
/// never routed through field updates.
pub const TALENT_PROFILE_FIELDS: &[&str] = &[
    // Identity labels
    "profileType",
    "displayName",
    "title",
    // Acting
    "height",
    "weight",
    "eyeColor",
    "hairColor",
    "bodyType",
    "ageRange",
    "actingExperience",
    "specialSkills",
    "languages",
    // Music
    "instruments",
    "genres",
    "vocalRange",
    "musicExperience",
    "recordingExperience",
    "livePerformanceExperience",
    // Visual art
    "artMediums",
    "artStyles",
    "artExperience",
    "exhibitions",
    "artEducation",
    // Technical
    "technicalSkills",
    "software",
    "equipment",
    "certifications",
    "technicalExperience",
    // Common professional
    "bio",
    "education",
    "portfolioUrl",
    "availability",
    "dayRate",
    "projectRate",
    "awards",
    "resumeUrl",
    "profileImageUrl",
    "coverImageUrl",
];

static PROFILE_FIELD_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| TALENT_PROFILE_FIELDS.iter().copied().collect());

/// Check whether a wire field name belongs to the talent-profile field set
pub fn is_profile_field(name: &str) -> bool {
    PROFILE_FIELD_SET.contains(name)
}
