//! Talent profile types
//!
//! A user holds one or more talent profiles (Actor, Musician, Visual
//! Artist, ...), each with overlapping but category-specific fields and
//! exactly one designated primary. Profiles arrive from the
//! user-directory API in a loosely typed shape and are normalized here;
//! legacy single-profile users carry the same fields flat on the user
//! object and are migrated through [`TalentProfile::from_legacy`].

use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::normalize;

/// The describable fields of a talent profile, shared verbatim with the
/// flat user record so single-profile-era form inputs keep working.
///
/// List fields are always deduplicated ordered lists of non-empty
/// trimmed strings; scalars default to empty string; bools to false.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TalentFields {
    // Identity labels
    pub display_name: String,
    pub title: String,

    // Acting
    pub height: String,
    pub weight: String,
    pub eye_color: String,
    pub hair_color: String,
    pub body_type: String,
    pub age_range: String,
    pub acting_experience: String,
    pub special_skills: Vec<String>,
    pub languages: Vec<String>,

    // Music
    pub instruments: Vec<String>,
    pub genres: Vec<String>,
    pub vocal_range: String,
    pub music_experience: String,
    pub recording_experience: bool,
    pub live_performance_experience: bool,

    // Visual art
    pub art_mediums: Vec<String>,
    pub art_styles: Vec<String>,
    pub art_experience: String,
    pub exhibitions: String,
    pub art_education: String,

    // Technical
    pub technical_skills: Vec<String>,
    pub software: Vec<String>,
    pub equipment: Vec<String>,
    pub certifications: Vec<String>,
    pub technical_experience: String,

    // Common professional
    pub bio: String,
    pub education: String,
    pub portfolio_url: String,
    pub availability: String,
    pub day_rate: String,
    pub project_rate: String,
    pub awards: String,
    pub resume_url: String,
    pub profile_image_url: String,
    pub cover_image_url: String,
}

impl TalentFields {
    /// Apply a single wire-named field from a loosely typed JSON value.
    ///
    /// Returns `false` when the name is not a known talent field; the
    /// value is coerced per field kind (list, scalar, bool).
    pub fn set_field(&mut self, name: &str, value: &Value) -> bool {
        match name {
            "displayName" => self.display_name = normalize::string_from_value(value),
            "title" => self.title = normalize::string_from_value(value),
            "height" => self.height = normalize::string_from_value(value),
            "weight" => self.weight = normalize::string_from_value(value),
            "eyeColor" => self.eye_color = normalize::string_from_value(value),
            "hairColor" => self.hair_color = normalize::string_from_value(value),
            "bodyType" => self.body_type = normalize::string_from_value(value),
            "ageRange" => self.age_range = normalize::string_from_value(value),
            "actingExperience" => self.acting_experience = normalize::string_from_value(value),
            "specialSkills" => self.special_skills = normalize::list_from_value(value),
            "languages" => self.languages = normalize::list_from_value(value),
            "instruments" => self.instruments = normalize::list_from_value(value),
            "genres" => self.genres = normalize::list_from_value(value),
            "vocalRange" => self.vocal_range = normalize::string_from_value(value),
            "musicExperience" => self.music_experience = normalize::string_from_value(value),
            "recordingExperience" => {
                self.recording_experience = normalize::bool_from_value(value);
            }
            "livePerformanceExperience" => {
                self.live_performance_experience = normalize::bool_from_value(value);
            }
            "artMediums" => self.art_mediums = normalize::list_from_value(value),
            "artStyles" => self.art_styles = normalize::list_from_value(value),
            "artExperience" => self.art_experience = normalize::string_from_value(value),
            "exhibitions" => self.exhibitions = normalize::string_from_value(value),
            "artEducation" => self.art_education = normalize::string_from_value(value),
            "technicalSkills" => self.technical_skills = normalize::list_from_value(value),
            "software" => self.software = normalize::list_from_value(value),
            "equipment" => self.equipment = normalize::list_from_value(value),
            "certifications" => self.certifications = normalize::list_from_value(value),
            "technicalExperience" => {
                self.technical_experience = normalize::string_from_value(value);
            }
            "bio" => self.bio = normalize::string_from_value(value),
            "education" => self.education = normalize::string_from_value(value),
            "portfolioUrl" => self.portfolio_url = normalize::string_from_value(value),
            "availability" => self.availability = normalize::string_from_value(value),
            "dayRate" => self.day_rate = normalize::string_from_value(value),
            "projectRate" => self.project_rate = normalize::string_from_value(value),
            "awards" => self.awards = normalize::string_from_value(value),
            "resumeUrl" => self.resume_url = normalize::string_from_value(value),
            "profileImageUrl" => self.profile_image_url = normalize::string_from_value(value),
            "coverImageUrl" => self.cover_image_url = normalize::string_from_value(value),
            _ => return false,
        }
        true
    }

    /// Re-clean every list field. Idempotent; scalars and bools are
    /// already canonical by construction.
    pub fn normalize_lists(&mut self) {
        self.special_skills = normalize::clean_list(&self.special_skills);
        self.languages = normalize::clean_list(&self.languages);
        self.instruments = normalize::clean_list(&self.instruments);
        self.genres = normalize::clean_list(&self.genres);
        self.art_mediums = normalize::clean_list(&self.art_mediums);
        self.art_styles = normalize::clean_list(&self.art_styles);
        self.technical_skills = normalize::clean_list(&self.technical_skills);
        self.software = normalize::clean_list(&self.software);
        self.equipment = normalize::clean_list(&self.equipment);
        self.certifications = normalize::clean_list(&self.certifications);
    }
}

/// One talent persona belonging to a user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TalentProfile {
    /// Opaque unique identifier, generated client-side when absent
    pub profile_id: String,
    /// Free-text category label ("Actor", "Musician", ...); drives
    /// which category-specific field groups are shown
    pub profile_type: String,
    /// Exactly one profile in a user's list is primary at any time
    pub is_primary: bool,
    #[serde(flatten)]
    pub fields: TalentFields,
}

impl TalentProfile {
    /// Create a fresh, empty profile of the given type with a generated id
    pub fn new(profile_type: &str) -> Self {
        let mut profile = Self {
            profile_id: Uuid::new_v4().to_string(),
            profile_type: profile_type.trim().to_string(),
            is_primary: false,
            fields: TalentFields::default(),
        };
        profile.default_labels();
        profile
    }

    /// Normalize a loosely typed stored profile record.
    ///
    /// Unknown keys are ignored; a missing `profileId` (e.g. a record
    /// predating client-side ids) gets a generated one.
    pub fn from_raw(raw: &Value) -> Self {
        let mut profile = Self::default();
        if let Some(obj) = raw.as_object() {
            for (key, value) in obj {
                match key.as_str() {
                    "profileId" => profile.profile_id = normalize::string_from_value(value),
                    "profileType" => profile.profile_type = normalize::string_from_value(value),
                    "isPrimary" => profile.is_primary = normalize::bool_from_value(value),
                    name => {
                        profile.fields.set_field(name, value);
                    }
                }
            }
        }
        if profile.profile_id.is_empty() {
            profile.profile_id = Uuid::new_v4().to_string();
        }
        profile.default_labels();
        profile
    }

    /// Synthesize a single primary profile from a legacy (pre-multi-
    /// profile) user object whose talent fields live flat on the record.
    pub fn from_legacy(raw: &Value) -> Self {
        let mut profile = Self::default();
        if let Some(obj) = raw.as_object() {
            for (key, value) in obj {
                if key == "userCategoryType" {
                    profile.profile_type = normalize::string_from_value(value);
                } else {
                    profile.fields.set_field(key, value);
                }
            }
        }
        profile.profile_id = Uuid::new_v4().to_string();
        profile.is_primary = true;
        profile.default_labels();
        profile
    }

    /// Apply a wire-named field; `profileType` is accepted here in
    /// addition to the describable fields.
    pub fn set_field(&mut self, name: &str, value: &Value) -> bool {
        if name == "profileType" {
            self.profile_type = normalize::string_from_value(value);
            return true;
        }
        self.fields.set_field(name, value)
    }

    /// Re-normalize list fields; idempotent
    pub fn normalized(mut self) -> Self {
        self.fields.normalize_lists();
        self
    }

    /// Default the human labels to the profile type when unset
    fn default_labels(&mut self) {
        if self.fields.display_name.is_empty() {
            self.fields.display_name = self.profile_type.clone();
        }
        if self.fields.title.is_empty() {
            self.fields.title = self.profile_type.clone();
        }
    }
}
