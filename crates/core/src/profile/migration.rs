//! Legacy-shape migration and active-profile resolution
//!
//! Users from the pre-multi-profile era carry their talent fields flat
//! on the user object with no `talentProfiles` list. The single entry
//! point here synthesizes exactly one primary profile from that shape,
//! so the rest of the system only ever sees the multi-profile model.

use serde_json::Value;
use stagelink_domain::{normalize, TalentProfile};

/// Normalize every stored profile record, or synthesize one primary
/// profile from legacy flat fields when the list is empty or absent.
///
/// Always yields at least one profile.
pub fn profiles_from_raw(raw: &Value) -> Vec<TalentProfile> {
    match raw.get("talentProfiles").and_then(Value::as_array) {
        Some(stored) if !stored.is_empty() => stored.iter().map(TalentProfile::from_raw).collect(),
        _ => vec![TalentProfile::from_legacy(raw)],
    }
}

/// Resolve the active profile id: the record's explicit
/// `activeProfileId` when it references a known profile, else the
/// profile marked primary, else the first profile in the list.
///
/// Returns `None` only for an empty list.
pub fn resolve_active_id(raw: &Value, profiles: &[TalentProfile]) -> Option<String> {
    let requested = raw.get("activeProfileId").map(normalize::string_from_value);
    if let Some(id) = requested {
        if profiles.iter().any(|p| p.profile_id == id) {
            return Some(id);
        }
    }
    profiles
        .iter()
        .find(|p| p.is_primary)
        .or_else(|| profiles.first())
        .map(|p| p.profile_id.clone())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_stored_profiles_are_normalized() {
        let raw = json!({
            "talentProfiles": [
                { "profileId": "tp-1", "profileType": "Actor", "isPrimary": true },
                { "profileType": "Musician", "instruments": "Guitar, Piano" }
            ]
        });
        let profiles = profiles_from_raw(&raw);
        assert_eq!(profiles.len(), 2);
        assert_eq!(profiles[0].profile_id, "tp-1");
        assert!(!profiles[1].profile_id.is_empty());
        assert_eq!(profiles[1].fields.instruments, vec!["Guitar", "Piano"]);
    }

    #[test]
    fn test_legacy_user_yields_one_primary_profile() {
        let raw = json!({
            "name": "Asha Rao",
            "userCategoryType": "Actor",
            "height": "5'8",
            "instruments": ["Guitar"]
        });
        let profiles = profiles_from_raw(&raw);
        assert_eq!(profiles.len(), 1);
        assert!(profiles[0].is_primary);
        assert_eq!(profiles[0].profile_type, "Actor");
        assert_eq!(profiles[0].fields.height, "5'8");
        assert_eq!(profiles[0].fields.instruments, vec!["Guitar"]);
    }

    #[test]
    fn test_empty_stored_list_falls_back_to_legacy() {
        let raw = json!({ "talentProfiles": [], "userCategoryType": "Musician" });
        let profiles = profiles_from_raw(&raw);
        assert_eq!(profiles.len(), 1);
        assert_eq!(profiles[0].profile_type, "Musician");
    }

    #[test]
    fn test_active_id_prefers_explicit_then_primary_then_first() {
        let profiles = vec![
            TalentProfile::from_raw(&json!({ "profileId": "a", "profileType": "Actor" })),
            TalentProfile::from_raw(&json!({
                "profileId": "b", "profileType": "Musician", "isPrimary": true
            })),
        ];

        let explicit = json!({ "activeProfileId": "a" });
        assert_eq!(resolve_active_id(&explicit, &profiles), Some("a".to_string()));

        let unknown = json!({ "activeProfileId": "zzz" });
        assert_eq!(resolve_active_id(&unknown, &profiles), Some("b".to_string()));

        let silent = json!({});
        assert_eq!(resolve_active_id(&silent, &profiles), Some("b".to_string()));

        let no_primary = vec![profiles[0].clone()];
        assert_eq!(resolve_active_id(&silent, &no_primary), Some("a".to_string()));

        assert_eq!(resolve_active_id(&silent, &[]), None);
    }
}
