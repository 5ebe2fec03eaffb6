//! Role-based access gate for protected views.
//!
//! Purely a UX convenience: the backend verifies the caller's role on every
//! endpoint independently of what the client chooses to render.

use crate::components::loading::Loading;
use crate::routes::{AuthQuery, Route};
use crate::session::{Session, SessionStore};
use shared::models::UserRole;
use yew::prelude::*;
use yew_router::prelude::*;

/// Outcome of the synchronous access check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    /// Render the wrapped view.
    Grant,
    /// Not logged in (or session unreadable): send to the auth view.
    RedirectAuth,
    /// Logged in but under-privileged: send home.
    RedirectHome,
}

/// Decide access from the session and the route's declared role.
///
/// A missing token or profile always redirects to auth, regardless of the
/// required role. A declared role that does not match the profile redirects
/// home. A route without a declared role admits any authenticated session.
pub fn evaluate_access(session: &Session, required_role: Option<UserRole>) -> AccessDecision {
    if !session.is_authenticated() {
        return AccessDecision::RedirectAuth;
    }
    match (required_role, session.user.as_ref()) {
        (Some(role), Some(user)) if user.role != role => AccessDecision::RedirectHome,
        _ => AccessDecision::Grant,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GuardState {
    Checking,
    Authorized,
    Unauthorized,
}

#[derive(Properties, PartialEq)]
pub struct RouteGuardProps {
    /// Role the wrapped view requires; `None` admits any authenticated user.
    #[prop_or_default]
    pub required_role: Option<UserRole>,
    /// Rendered while the check runs; defaults to the loading indicator.
    #[prop_or_default]
    pub placeholder: Option<Html>,
    pub children: Children,
}

/// A guard decision is only valid for the role it was computed against; a
/// reused guard whose required role changed is back to checking until the
/// effect re-evaluates.
fn effective_state(
    checked_role: Option<UserRole>,
    required_role: Option<UserRole>,
    state: GuardState,
) -> GuardState {
    if checked_role == required_role {
        state
    } else {
        GuardState::Checking
    }
}

/// Wraps a protected view. The check runs on mount and again only when the
/// required role changes; redirects are issued as a reaction to entering
/// `Unauthorized`, never during render, so navigation cannot loop.
#[function_component(RouteGuard)]
pub fn route_guard(props: &RouteGuardProps) -> Html {
    // The decision is stored together with the role it was computed for so
    // a role change never renders children under a stale grant.
    let state = use_state(|| (props.required_role, GuardState::Checking));
    let navigator = use_navigator();
    // The concrete location path, not the matched pattern: a wildcard route
    // would otherwise turn "/admin/students" into "/admin/*".
    let attempted = use_location().map(|location| location.path().to_string());

    {
        let state = state.clone();
        use_effect_with(props.required_role, move |required_role| {
            let session = SessionStore::load();
            match evaluate_access(&session, *required_role) {
                AccessDecision::Grant => {
                    state.set((*required_role, GuardState::Authorized));
                }
                AccessDecision::RedirectAuth => {
                    state.set((*required_role, GuardState::Unauthorized));
                    if let Some(navigator) = navigator {
                        let query = AuthQuery {
                            tab: None,
                            redirect: attempted,
                        };
                        if navigator.push_with_query(&Route::Auth, &query).is_err() {
                            navigator.push(&Route::Auth);
                        }
                    }
                }
                AccessDecision::RedirectHome => {
                    state.set((*required_role, GuardState::Unauthorized));
                    if let Some(navigator) = navigator {
                        navigator.push(&Route::Home);
                    }
                }
            }
            || ()
        });
    }

    let (checked_role, checked_state) = *state;
    match effective_state(checked_role, props.required_role, checked_state) {
        GuardState::Checking => props
            .placeholder
            .clone()
            .unwrap_or_else(|| html! { <Loading /> }),
        GuardState::Authorized => html! { <>{ props.children.clone() }</> },
        // Navigation away is the only recovery path.
        GuardState::Unauthorized => Html::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::Profile;
    use uuid::Uuid;

    fn session_with_role(role: UserRole) -> Session {
        Session {
            token: Some("tok".to_string()),
            user: Some(Profile {
                id: Uuid::new_v4(),
                name: "Asha Nair".to_string(),
                email: "asha@example.com".to_string(),
                role,
            }),
        }
    }

    #[test]
    fn anonymous_session_always_redirects_to_auth() {
        let session = Session::anonymous();
        for required in [
            None,
            Some(UserRole::Student),
            Some(UserRole::Employer),
            Some(UserRole::College),
            Some(UserRole::Admin),
            Some(UserRole::ContentWriter),
        ] {
            assert_eq!(
                evaluate_access(&session, required),
                AccessDecision::RedirectAuth
            );
        }
    }

    #[test]
    fn role_mismatch_redirects_home() {
        let session = session_with_role(UserRole::Employer);
        assert_eq!(
            evaluate_access(&session, Some(UserRole::Admin)),
            AccessDecision::RedirectHome
        );
        assert_eq!(
            evaluate_access(&session, Some(UserRole::Student)),
            AccessDecision::RedirectHome
        );
    }

    #[test]
    fn matching_role_is_granted() {
        let session = session_with_role(UserRole::College);
        assert_eq!(
            evaluate_access(&session, Some(UserRole::College)),
            AccessDecision::Grant
        );
    }

    #[test]
    fn no_required_role_admits_any_authenticated_session() {
        for role in [
            UserRole::Student,
            UserRole::Employer,
            UserRole::College,
            UserRole::Admin,
            UserRole::ContentWriter,
        ] {
            let session = session_with_role(role);
            assert_eq!(evaluate_access(&session, None), AccessDecision::Grant);
        }
    }

    #[test]
    fn lone_token_without_profile_redirects_to_auth() {
        let session = Session {
            token: Some("tok".to_string()),
            user: None,
        };
        assert_eq!(
            evaluate_access(&session, Some(UserRole::Student)),
            AccessDecision::RedirectAuth
        );
    }

    /// A grant computed for one role must not carry over when the guard is
    /// reused for a route requiring a different role: until the re-check
    /// runs, the guard is back to checking and renders no children.
    #[test]
    fn grant_for_another_role_does_not_carry_over() {
        assert_eq!(
            effective_state(
                Some(UserRole::Student),
                Some(UserRole::Admin),
                GuardState::Authorized
            ),
            GuardState::Checking
        );
        assert_eq!(
            effective_state(None, Some(UserRole::Admin), GuardState::Authorized),
            GuardState::Checking
        );
        assert_eq!(
            effective_state(Some(UserRole::Admin), None, GuardState::Authorized),
            GuardState::Checking
        );
    }

    #[test]
    fn decision_for_the_same_role_stands() {
        for state in [
            GuardState::Checking,
            GuardState::Authorized,
            GuardState::Unauthorized,
        ] {
            assert_eq!(
                effective_state(Some(UserRole::Admin), Some(UserRole::Admin), state),
                state
            );
            assert_eq!(effective_state(None, None, state), state);
        }
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use shared::models::Profile;
    use uuid::Uuid;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn stored_session_grants_its_own_role() {
        let profile = Profile {
            id: Uuid::new_v4(),
            name: "Admin".to_string(),
            email: "admin@example.com".to_string(),
            role: UserRole::Admin,
        };
        SessionStore::store("tok", &profile);
        let decision = evaluate_access(&SessionStore::load(), Some(UserRole::Admin));
        SessionStore::clear();
        assert_eq!(decision, AccessDecision::Grant);
    }

    #[wasm_bindgen_test]
    fn cleared_storage_redirects_to_auth() {
        SessionStore::clear();
        assert_eq!(
            evaluate_access(&SessionStore::load(), None),
            AccessDecision::RedirectAuth
        );
        assert_eq!(
            evaluate_access(&SessionStore::load(), Some(UserRole::Student)),
            AccessDecision::RedirectAuth
        );
    }
}
