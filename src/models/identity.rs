use serde::{Deserialize, Serialize};
use std::fmt;

/// Account roles. Closed set: anything else on the wire is a decode error.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Hustler,
    Student,
    Seller,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Hustler => "hustler",
            Role::Student => "student",
            Role::Seller => "seller",
        }
    }

    /// Dashboard route for this role.
    pub fn dashboard(&self) -> String {
        format!("/dashboard/{}", self.as_str())
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The authenticated user as resolved from `/auth/profile`.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub picture: Option<String>,
    pub is_profile_complete: bool,
    #[serde(default)]
    pub role: Option<Role>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub sub_category: Option<String>,
    #[serde(default)]
    pub category_id: Option<String>,
    #[serde(default)]
    pub sub_category_id: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub intro_video: Option<String>,
    #[serde(default)]
    pub pricing: Option<f64>,
}

/// Payload for `POST /auth/setup`. Category fields are only sent for
/// hustlers; names and ids travel together because the server stores both.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct SetupProfile {
    pub role: Option<Role>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_category_id: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SetupResponse {
    pub redirect_to: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    #[serde(default)]
    pub message: Option<String>,
    pub access_token: String,
    #[serde(default)]
    pub user: Option<Identity>,
    #[serde(default)]
    pub redirect_to: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_round_trips_lowercase() {
        let json = serde_json::to_string(&Role::Hustler).unwrap();
        assert_eq!(json, "\"hustler\"");
        let back: Role = serde_json::from_str("\"seller\"").unwrap();
        assert_eq!(back, Role::Seller);
    }

    #[test]
    fn unknown_role_is_rejected() {
        assert!(serde_json::from_str::<Role>("\"admin\"").is_err());
    }

    #[test]
    fn setup_profile_omits_unset_category_fields() {
        let payload = SetupProfile {
            role: Some(Role::Student),
            ..Default::default()
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json, serde_json::json!({ "role": "student" }));
    }
}
