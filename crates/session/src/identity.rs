//! The authenticated user's identity and profile.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Role asserted by the server inside the session payload.
///
/// The client never computes this; it only echoes what the server said.
/// The distinction gates UI affordances, nothing more — the server
/// re-enforces authorization on every request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    Admin,
    User,
}

impl Role {
    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Role::Admin => f.write_str("ADMIN"),
            Role::User => f.write_str("USER"),
        }
    }
}

/// The resident session identity.
///
/// Valid from a successful login until an explicit logout. The client
/// performs no expiry check, so an Identity may be stale relative to the
/// server's token lifetime; the server answers 401 in that case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    pub username: String,
    pub role: Role,
    pub token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Identity {
    /// True when this identity can be attached to a request.
    pub fn has_token(&self) -> bool {
        !self.token.trim().is_empty()
    }
}

/// Extended identity fields served by `GET /profile`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    pub role: Role,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Sparse profile update. Omitted fields are left unchanged server-side;
/// in particular an omitted password means "do not change the password".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfilePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_deserializes_from_wire_strings() {
        let role: Role = serde_json::from_str("\"ADMIN\"").unwrap();
        assert!(role.is_admin());

        let role: Role = serde_json::from_str("\"USER\"").unwrap();
        assert!(!role.is_admin());
    }

    #[test]
    fn identity_parses_login_response_shape() {
        let wire = r#"{"token":"abc.def.ghi","username":"alice","role":"ADMIN","type":"Bearer"}"#;
        let identity: Identity = serde_json::from_str(wire).unwrap();
        assert_eq!(identity.username, "alice");
        assert!(identity.role.is_admin());
        assert!(identity.has_token());
    }

    #[test]
    fn blank_token_is_not_attachable() {
        let identity = Identity {
            username: "bob".to_string(),
            role: Role::User,
            token: "  ".to_string(),
            email: None,
            created_at: None,
        };
        assert!(!identity.has_token());
    }

    #[test]
    fn patch_omits_unset_fields() {
        let patch = ProfilePatch {
            email: Some("a@example.com".to_string()),
            password: None,
        };
        let json = serde_json::to_string(&patch).unwrap();
        assert!(json.contains("email"));
        assert!(!json.contains("password"));
    }
}
