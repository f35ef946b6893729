//! Projection of the active profile onto the flat user record
//!
//! Every mutation that changes which profile is active, or what the
//! active profile contains, goes through [`project`]. Keeping the
//! projection in one function is what makes the consistency invariant
//! (flat record == active profile for every talent field) enforceable.

use stagelink_domain::{AccountFields, FlatUser, TalentProfile};

/// Build the flat editable record from account fields and the active
/// profile. `userCategoryType` mirrors the profile's type; the talent
/// block is a normalized copy, never a reference.
pub fn project(account: &AccountFields, profile: &TalentProfile) -> FlatUser {
    let mut talent = profile.fields.clone();
    talent.normalize_lists();
    FlatUser {
        account: account.clone(),
        user_category_type: profile.profile_type.clone(),
        talent,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_projection_mirrors_profile_fields() {
        let profile = TalentProfile::from_raw(&json!({
            "profileId": "tp-1",
            "profileType": "Musician",
            "instruments": ["Guitar", "Piano"],
            "vocalRange": "Tenor"
        }));
        let mut account = AccountFields::default();
        account.name = "Asha Rao".to_string();

        let record = project(&account, &profile);
        assert_eq!(record.user_category_type, "Musician");
        assert_eq!(record.talent, profile.fields);
        assert_eq!(record.account.name, "Asha Rao");
    }

    #[test]
    fn test_projection_copies_rather_than_references() {
        let profile = TalentProfile::from_raw(&json!({
            "profileType": "Musician",
            "instruments": ["Guitar"]
        }));
        let account = AccountFields::default();
        let mut record = project(&account, &profile);
        record.talent.instruments.push("Sitar".to_string());
        // the source profile is unaffected
        assert_eq!(profile.fields.instruments, vec!["Guitar"]);
    }

    #[test]
    fn test_projection_normalizes_on_the_way_through() {
        let mut profile = TalentProfile::new("Technical");
        profile.fields.software = vec!["Blender".to_string(), " Blender ".to_string()];
        let record = project(&AccountFields::default(), &profile);
        assert_eq!(record.talent.software, vec!["Blender"]);
    }
}
