use gloo_storage::{LocalStorage, Storage};
use shared::models::Profile;

const TOKEN_KEY: &str = "campusbridge.token";
const USER_KEY: &str = "campusbridge.user";

/// The persisted authentication state: a bearer token paired with the
/// owner's profile. Token and user are always both present or both absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    pub token: Option<String>,
    pub user: Option<Profile>,
}

impl Session {
    /// A session with neither token nor profile.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Enforce the both-or-neither invariant on values read back from
    /// storage. A token without a parsable profile (or the reverse) is
    /// treated as logged out.
    pub fn normalize(token: Option<String>, user: Option<Profile>) -> Self {
        match (token, user) {
            (Some(token), Some(user)) => Self {
                token: Some(token),
                user: Some(user),
            },
            _ => Self::anonymous(),
        }
    }

    /// Build a session from raw storage values, failing closed when the
    /// profile JSON does not parse.
    pub fn from_parts(token: Option<String>, user_json: Option<&str>) -> Self {
        let user = user_json.and_then(|json| serde_json::from_str::<Profile>(json).ok());
        Self::normalize(token, user)
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some() && self.user.is_some()
    }
}

/// Single source of truth for "is someone logged in, and as what role."
///
/// Callers read fresh on every relevant event instead of caching: storage is
/// mutated by login/logout elsewhere in the tab and must be reflected
/// immediately.
#[derive(Debug)]
pub struct SessionStore;

impl SessionStore {
    /// Read the current session from durable storage. Never throws: a
    /// missing key or a profile that fails to parse yields the anonymous
    /// session.
    pub fn load() -> Session {
        let token = LocalStorage::get::<String>(TOKEN_KEY).ok();
        let user_json = LocalStorage::raw().get_item(USER_KEY).ok().flatten();
        Session::from_parts(token, user_json.as_deref())
    }

    /// Persist both halves of the session. Readers after this call observe
    /// either the full new session or, on a storage failure, none of it.
    pub fn store(token: &str, user: &Profile) {
        if LocalStorage::set(TOKEN_KEY, token).is_err()
            || LocalStorage::set(USER_KEY, user).is_err()
        {
            // Half-written state would break the invariant; roll back.
            Self::clear();
            log::error!("session storage write failed; staying logged out");
        }
    }

    /// Remove both keys.
    pub fn clear() {
        LocalStorage::delete(TOKEN_KEY);
        LocalStorage::delete(USER_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::UserRole;
    use uuid::Uuid;

    fn profile_json() -> String {
        format!(
            r#"{{"id":"{}","name":"Asha Nair","email":"asha@example.com","role":"student"}}"#,
            Uuid::new_v4()
        )
    }

    #[test]
    fn from_parts_with_both_halves_is_authenticated() {
        let json = profile_json();
        let session = Session::from_parts(Some("tok".to_string()), Some(&json));
        assert!(session.is_authenticated());
        assert_eq!(session.token.as_deref(), Some("tok"));
        assert_eq!(session.user.unwrap().role, UserRole::Student);
    }

    #[test]
    fn from_parts_fails_closed_on_missing_token() {
        let json = profile_json();
        let session = Session::from_parts(None, Some(&json));
        assert_eq!(session, Session::anonymous());
    }

    #[test]
    fn from_parts_fails_closed_on_missing_profile() {
        let session = Session::from_parts(Some("tok".to_string()), None);
        assert_eq!(session, Session::anonymous());
    }

    #[test]
    fn from_parts_fails_closed_on_garbage_profile() {
        let session = Session::from_parts(Some("tok".to_string()), Some("{not json"));
        assert_eq!(session, Session::anonymous());
        assert!(!session.is_authenticated());
    }

    #[test]
    fn normalize_drops_lone_halves() {
        assert_eq!(
            Session::normalize(Some("tok".to_string()), None),
            Session::anonymous()
        );
        let user: Profile = serde_json::from_str(&profile_json()).unwrap();
        assert_eq!(Session::normalize(None, Some(user)), Session::anonymous());
    }
}
