use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Account roles recognized across the platform.
///
/// The role decides which dashboard a user lands on and which protected
/// routes the client will render; the backend re-checks it on every call.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Student,
    Employer,
    College,
    Admin,
    ContentWriter,
}

impl UserRole {
    /// Return the canonical string representation expected by the backend.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Employer => "employer",
            Self::College => "college",
            Self::Admin => "admin",
            Self::ContentWriter => "content_writer",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = &'static str;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "student" => Ok(Self::Student),
            "employer" => Ok(Self::Employer),
            "college" => Ok(Self::College),
            "admin" => Ok(Self::Admin),
            "content_writer" => Ok(Self::ContentWriter),
            _ => Err("unknown user role"),
        }
    }
}

/// The authenticated user's profile as returned by `GET /users/me`.
///
/// Immutable on the client except through the explicit profile-update flow,
/// which re-fetches and overwrites the whole object.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Profile {
    /// Unique identifier for the user.
    pub id: uuid::Uuid,

    /// The user's display name.
    pub name: String,

    /// The user's email address.
    pub email: String,

    /// The user's platform role.
    pub role: UserRole,
}

/// Credentials submitted from the auth page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    /// The user's email address.
    pub email: String,

    /// The user's password.
    pub password: String,

    /// The auth tab the credentials were entered on.
    pub role_tab: UserRole,
}

/// Successful authentication payload: a bearer token plus the profile.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginResponse {
    /// Opaque bearer token; validity is enforced server-side.
    pub token: String,

    /// The authenticated user's profile.
    pub user: Profile,
}

/// Partial profile update sent to `PATCH /users/me`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdateProfileRequest {
    /// New display name, if changing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// New email address, if changing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn user_role_roundtrip() {
        for (text, role) in [
            ("student", UserRole::Student),
            ("employer", UserRole::Employer),
            ("college", UserRole::College),
            ("admin", UserRole::Admin),
            ("content_writer", UserRole::ContentWriter),
        ] {
            assert_eq!(role.as_str(), text);
            assert_eq!(role.to_string(), text);
            assert_eq!(UserRole::from_str(text).unwrap(), role);
        }
    }

    #[test]
    fn user_role_invalid() {
        assert!(UserRole::from_str("guest").is_err());
        assert!(UserRole::from_str("").is_err());
    }

    #[test]
    fn user_role_serde_uses_snake_case() {
        let json = serde_json::to_string(&UserRole::ContentWriter).unwrap();
        assert_eq!(json, "\"content_writer\"");
        let role: UserRole = serde_json::from_str("\"employer\"").unwrap();
        assert_eq!(role, UserRole::Employer);
    }

    #[test]
    fn profile_serialization_roundtrip() {
        let profile = Profile {
            id: Uuid::parse_str("f47ac10b-58cc-4372-a567-0e02b2c3d479").unwrap(),
            name: "Asha Nair".to_string(),
            email: "asha@example.com".to_string(),
            role: UserRole::Student,
        };

        let serialized = serde_json::to_string(&profile).unwrap();
        let deserialized: Profile = serde_json::from_str(&serialized).unwrap();

        assert_eq!(deserialized, profile);
        assert_eq!(deserialized.role, UserRole::Student);
    }

    #[test]
    fn login_response_carries_token_and_profile() {
        let response = LoginResponse {
            token: "tok-123".to_string(),
            user: Profile {
                id: Uuid::new_v4(),
                name: "Dev Patel".to_string(),
                email: "dev@example.com".to_string(),
                role: UserRole::Employer,
            },
        };

        assert!(!response.token.is_empty());
        assert_eq!(response.user.role, UserRole::Employer);
    }

    #[test]
    fn update_profile_request_skips_unset_fields() {
        let request = UpdateProfileRequest {
            name: Some("New Name".to_string()),
            email: None,
        };
        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("name"));
        assert!(!json.contains("email"));
    }
}
