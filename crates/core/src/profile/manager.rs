//! Talent profile manager - core business logic
//!
//! Maintains two invariants across every mutation:
//! - exactly one profile in a non-empty list is primary
//! - the flat record's talent fields equal the active profile's fields
//!
//! All operations run synchronously against in-memory state except
//! [`TalentProfileManager::load`] and [`TalentProfileManager::save`],
//! which go through the injected ports.

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::{Map, Value};
use stagelink_domain::{
    is_profile_field, AccountFields, FlatUser, Result, StagelinkError, TalentFields,
    TalentProfile, SESSION_CACHE_KEY,
};
use tracing::{debug, info, warn};

use super::migration;
use super::ports::{SessionCache, UserDirectoryApi};
use super::projection::project;
use super::wire::{SavePayload, SaveResponse};

/// Snapshot of the manager's mutable state; cloned wholesale for the
/// cancel baseline.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileState {
    pub profiles: Vec<TalentProfile>,
    pub active_profile_id: Option<String>,
    pub record: FlatUser,
}

/// Which asset field an uploaded URL lands on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadSlot {
    ProfileImage,
    CoverImage,
    Resume,
}

/// Uploaded asset URLs captured for one profile since the last save
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadedAssets {
    pub profile_image_url: Option<String>,
    pub cover_image_url: Option<String>,
    pub resume_url: Option<String>,
}

impl UploadedAssets {
    fn apply(&self, fields: &mut TalentFields) {
        if let Some(url) = &self.profile_image_url {
            fields.profile_image_url = url.clone();
        }
        if let Some(url) = &self.cover_image_url {
            fields.cover_image_url = url.clone();
        }
        if let Some(url) = &self.resume_url {
            fields.resume_url = url.clone();
        }
    }
}

/// Talent profile manager
pub struct TalentProfileManager {
    api: Arc<dyn UserDirectoryApi>,
    cache: Arc<dyn SessionCache>,
    state: ProfileState,
    original: ProfileState,
    pending_uploads: HashMap<String, UploadedAssets>,
}

impl TalentProfileManager {
    /// Create a manager with empty state; call [`Self::load`] or
    /// [`Self::initialize`] before use.
    pub fn new(api: Arc<dyn UserDirectoryApi>, cache: Arc<dyn SessionCache>) -> Self {
        Self {
            api,
            cache,
            state: ProfileState::default(),
            original: ProfileState::default(),
            pending_uploads: HashMap::new(),
        }
    }

    /// Fetch the raw user from the directory API, falling back to the
    /// session cache when the network is unavailable, then initialize.
    pub async fn load(&mut self) -> Result<()> {
        match self.api.fetch_me().await {
            Ok(raw) => {
                self.cache.put(SESSION_CACHE_KEY, raw.clone());
                self.initialize(&raw);
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "fetch_me failed, trying session cache");
                match self.cache.get(SESSION_CACHE_KEY) {
                    Some(raw) => {
                        self.initialize(&raw);
                        Ok(())
                    }
                    None => Err(err),
                }
            }
        }
    }

    /// Build the full state tree from a loosely typed user object.
    ///
    /// Normalizes stored profiles (or synthesizes one from legacy flat
    /// fields), resolves the active profile, projects it onto the flat
    /// record, and establishes the snapshot that [`Self::cancel`]
    /// restores. Pending uploads are cleared.
    pub fn initialize(&mut self, raw: &Value) {
        let profiles = migration::profiles_from_raw(raw);
        let active_profile_id = migration::resolve_active_id(raw, &profiles);
        let account = AccountFields::from_raw(raw);

        let record = match active_profile_id
            .as_ref()
            .and_then(|id| profiles.iter().find(|p| &p.profile_id == id))
        {
            Some(active) => project(&account, active),
            // Empty profile list: a display-level "profile unavailable"
            // state, not expected given the synthesis rule.
            None => FlatUser { account, ..FlatUser::default() },
        };

        self.state = ProfileState { profiles, active_profile_id, record };
        self.original = self.state.clone();
        self.pending_uploads.clear();

        info!(
            profiles = self.state.profiles.len(),
            active = self.state.active_profile_id.as_deref().unwrap_or("none"),
            "initialized talent profile state"
        );
    }

    /// Switch the active profile. An unknown id silently falls back to
    /// the first profile. Unsaved edits to talent fields are overwritten
    /// by the new projection; account-field edits are preserved.
    pub fn select_profile(&mut self, profile_id: &str) {
        if self.state.profiles.is_empty() {
            return;
        }
        let idx = self
            .state
            .profiles
            .iter()
            .position(|p| p.profile_id == profile_id)
            .unwrap_or_else(|| {
                debug!(requested = profile_id, "profile not found, falling back to first");
                0
            });
        self.state.active_profile_id = Some(self.state.profiles[idx].profile_id.clone());
        self.reproject();
    }

    /// Append a fresh profile of the given type and make it active.
    ///
    /// Returns the new profile id. The first profile in an empty list is
    /// always primary regardless of `is_primary`.
    pub fn create_profile(
        &mut self,
        profile_type: &str,
        display_name: Option<&str>,
        is_primary: bool,
    ) -> Result<String> {
        let trimmed = profile_type.trim();
        if trimmed.is_empty() {
            return Err(StagelinkError::Validation("profile type is required".to_string()));
        }

        if is_primary {
            for profile in &mut self.state.profiles {
                profile.is_primary = false;
            }
        }

        let mut profile = TalentProfile::new(trimmed);
        if let Some(name) = display_name {
            if !name.trim().is_empty() {
                profile.fields.display_name = name.trim().to_string();
            }
        }
        profile.is_primary = is_primary || self.state.profiles.is_empty();

        let id = profile.profile_id.clone();
        self.state.profiles.push(profile);
        self.state.active_profile_id = Some(id.clone());
        self.reproject();

        info!(profile_id = %id, profile_type = trimmed, "created talent profile");
        Ok(id)
    }

    /// Remove the active profile and promote a replacement.
    ///
    /// Rejected when only one profile remains. The replacement is the
    /// remaining primary profile, or the first remaining one, promoted
    /// to primary if it was not already.
    pub fn remove_active_profile(&mut self) -> Result<()> {
        if self.state.profiles.len() <= 1 {
            return Err(StagelinkError::Validation(
                "at least one talent profile is required".to_string(),
            ));
        }

        let idx = self.active_index().unwrap_or(0);
        let removed = self.state.profiles.remove(idx);

        let next = self.state.profiles.iter().position(|p| p.is_primary).unwrap_or(0);
        self.state.profiles[next].is_primary = true;
        self.state.active_profile_id = Some(self.state.profiles[next].profile_id.clone());
        self.reproject();

        info!(removed = %removed.profile_id, "removed talent profile");
        Ok(())
    }

    /// Make the active profile the sole primary one. No-op when it
    /// already is, or when no profile is active.
    pub fn set_active_primary(&mut self) {
        let Some(active_id) = self.state.active_profile_id.clone() else { return };
        for profile in &mut self.state.profiles {
            profile.is_primary = profile.profile_id == active_id;
        }
    }

    /// Merge a partial set of talent-field key/value pairs into the
    /// active profile and mirror them onto the flat record.
    ///
    /// Every key must belong to the declared profile-field set;
    /// account-level fields are routed through
    /// [`Self::update_account_fields`] instead.
    pub fn update_active_profile_fields(&mut self, partial: &Map<String, Value>) -> Result<()> {
        for key in partial.keys() {
            if !is_profile_field(key) {
                return Err(StagelinkError::Validation(format!(
                    "{key} is not a talent profile field"
                )));
            }
        }

        let idx = self
            .active_index()
            .ok_or_else(|| StagelinkError::NotFound("no active profile".to_string()))?;
        {
            let profile = &mut self.state.profiles[idx];
            for (key, value) in partial {
                profile.set_field(key, value);
            }
            profile.fields.normalize_lists();
        }
        self.reproject();
        Ok(())
    }

    /// Update account-level fields on the flat record only.
    ///
    /// Keys from the profile-field set are rejected here; unknown keys
    /// are ignored with a debug log, matching the lenient inbound shape.
    pub fn update_account_fields(&mut self, partial: &Map<String, Value>) -> Result<()> {
        for key in partial.keys() {
            if is_profile_field(key) {
                return Err(StagelinkError::Validation(format!(
                    "{key} must be routed through the talent profile update"
                )));
            }
        }
        for (key, value) in partial {
            if !self.state.record.account.set_field(key, value) {
                debug!(field = %key, "ignoring unknown account field");
            }
        }
        Ok(())
    }

    /// Stash an uploaded asset URL for a profile until the next save
    pub fn record_upload(&mut self, profile_id: &str, slot: UploadSlot, url: String) {
        let entry = self.pending_uploads.entry(profile_id.to_string()).or_default();
        match slot {
            UploadSlot::ProfileImage => entry.profile_image_url = Some(url),
            UploadSlot::CoverImage => entry.cover_image_url = Some(url),
            UploadSlot::Resume => entry.resume_url = Some(url),
        }
    }

    /// Persist the full state tree through the user-directory API.
    ///
    /// Pending upload URLs are overlaid per profile and every profile is
    /// re-normalized before sending. Failure leaves local state
    /// untouched so the user can retry; success re-initializes from the
    /// server's canonical user object and clears pending uploads.
    pub async fn save(&mut self) -> Result<()> {
        let active_profile_id = self
            .state
            .active_profile_id
            .clone()
            .ok_or_else(|| StagelinkError::Validation("no active profile to save".to_string()))?;

        let talent_profiles: Vec<TalentProfile> = self
            .state
            .profiles
            .iter()
            .cloned()
            .map(|mut profile| {
                if let Some(uploads) = self.pending_uploads.get(&profile.profile_id) {
                    uploads.apply(&mut profile.fields);
                }
                profile.normalized()
            })
            .collect();

        let payload = SavePayload {
            talent_profiles: talent_profiles.clone(),
            active_profile_id,
            record: self.state.record.clone(),
        };

        let response: SaveResponse = self.api.update_profile(&payload).await?;
        if !response.success {
            let message =
                response.message.unwrap_or_else(|| "profile update rejected".to_string());
            warn!(message = %message, "save rejected by user directory");
            return Err(StagelinkError::Api(message));
        }

        match response.user {
            Some(user) => {
                // The server's canonical record wins, including its
                // choice of activeProfileId.
                self.cache.put(SESSION_CACHE_KEY, user.clone());
                self.initialize(&user);
            }
            None => {
                // Acknowledged without a canonical record: commit the
                // normalized payload locally as the new baseline.
                self.state.profiles = talent_profiles;
                self.reproject();
                self.original = self.state.clone();
                self.pending_uploads.clear();
            }
        }

        info!("talent profiles saved");
        Ok(())
    }

    /// Discard all in-memory edits by restoring the last-saved snapshot
    pub fn cancel(&mut self) {
        self.state = self.original.clone();
        self.pending_uploads.clear();
        debug!("discarded unsaved profile edits");
    }

    /// The current profile list
    pub fn profiles(&self) -> &[TalentProfile] {
        &self.state.profiles
    }

    /// The active profile, if one is resolvable
    pub fn active_profile(&self) -> Option<&TalentProfile> {
        self.active_index().map(|idx| &self.state.profiles[idx])
    }

    /// The active profile id
    pub fn active_profile_id(&self) -> Option<&str> {
        self.state.active_profile_id.as_deref()
    }

    /// The flat editable user record
    pub fn record(&self) -> &FlatUser {
        &self.state.record
    }

    /// Number of profiles with uploads pending the next save
    pub fn pending_upload_count(&self) -> usize {
        self.pending_uploads.len()
    }

    fn active_index(&self) -> Option<usize> {
        let id = self.state.active_profile_id.as_ref()?;
        self.state.profiles.iter().position(|p| &p.profile_id == id)
    }

    fn reproject(&mut self) {
        let Some(idx) = self.active_index() else { return };
        let profile = self.state.profiles[idx].clone();
        self.state.record = project(&self.state.record.account, &profile);
    }
}
