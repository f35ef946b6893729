//! Wire types exchanged with the user-directory and upload APIs

use serde::{Deserialize, Serialize};
use serde_json::Value;
use stagelink_domain::{FlatUser, TalentProfile};

/// Outbound save payload: the full normalized profile list, the active
/// profile id, and the flat record's fields spread at the top level for
/// backward compatibility with the single-profile era.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavePayload {
    pub talent_profiles: Vec<TalentProfile>,
    pub active_profile_id: String,
    #[serde(flatten)]
    pub record: FlatUser,
}

/// Response from the update-profile call
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SaveResponse {
    pub success: bool,
    /// Canonical user object; same shape as the inbound `/me` record
    #[serde(default)]
    pub user: Option<Value>,
    #[serde(default)]
    pub message: Option<String>,
}

/// One uploaded asset as returned by the upload collaborator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedAsset {
    pub url: String,
    pub key: String,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_save_payload_flattens_record() {
        let mut record = FlatUser::default();
        record.account.name = "Asha Rao".to_string();
        record.user_category_type = "Actor".to_string();
        let payload = SavePayload {
            talent_profiles: vec![TalentProfile::new("Actor")],
            active_profile_id: "tp-1".to_string(),
            record,
        };
        let value = serde_json::to_value(&payload).expect("serialize");
        assert_eq!(value["activeProfileId"], "tp-1");
        assert_eq!(value["name"], "Asha Rao");
        assert_eq!(value["userCategoryType"], "Actor");
        assert!(value["talentProfiles"].is_array());
    }

    #[test]
    fn test_save_response_defaults_optional_fields() {
        let response: SaveResponse =
            serde_json::from_value(json!({ "success": true })).expect("deserialize");
        assert!(response.success);
        assert!(response.user.is_none());
        assert!(response.message.is_none());
    }
}
