//! Navigation state derived from the location fragment.
//!
//! The hash is parsed exactly once per navigation event into a small value
//! type; views receive the parsed form instead of re-splitting the hash.

use yew::hook;
use yew_router::hooks::use_location;

/// The routing state for the current navigation event: the path used for
/// route lookup plus the query pairs, passed through to views unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationState {
    pub path: String,
    pub params: Vec<(String, String)>,
}

impl NavigationState {
    /// Parse a raw fragment such as `#/auth?tab=student&redirect=/admin`.
    ///
    /// The fragment is split on the first `?`; only the left half takes part
    /// in route lookup. A fragment without a leading `/` is malformed and
    /// resolves to the home path.
    pub fn parse(fragment: &str) -> Self {
        let raw = fragment.strip_prefix('#').unwrap_or(fragment);
        let (path, query) = match raw.split_once('?') {
            Some((path, query)) => (path, query),
            None => (raw, ""),
        };
        let path = if path.starts_with('/') {
            path.to_string()
        } else {
            "/".to_string()
        };
        Self {
            path,
            params: parse_query(query),
        }
    }

    /// Build from an already-split path and query string.
    pub fn from_parts(path: &str, query: &str) -> Self {
        Self {
            path: path.to_string(),
            params: parse_query(query),
        }
    }

    /// First value for `key`, if present.
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value.as_str())
    }
}

/// Decode the raw query string into ordered pairs. Values are
/// percent-decoded with the same codec the navigator encodes with, so a
/// `redirect=%2Fdashboard%2Fstudent` written by `push_with_query` reads
/// back as `/dashboard/student`. An undecodable query yields no pairs.
fn parse_query(query: &str) -> Vec<(String, String)> {
    serde_urlencoded::from_str(query).unwrap_or_default()
}

/// Current [`NavigationState`], recomputed whenever the location changes.
#[hook]
pub fn use_navigation_state() -> NavigationState {
    use_location().map_or_else(NavigationState::default, |location| {
        NavigationState::from_parts(location.path(), location.query_str())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::AuthQuery;

    #[test]
    fn parse_splits_path_and_query() {
        let state = NavigationState::parse("#/auth?tab=student&redirect=/dashboard/student");
        assert_eq!(state.path, "/auth");
        assert_eq!(state.param("tab"), Some("student"));
        assert_eq!(state.param("redirect"), Some("/dashboard/student"));
    }

    #[test]
    fn parse_without_query_has_no_params() {
        let state = NavigationState::parse("#/courses");
        assert_eq!(state.path, "/courses");
        assert!(state.params.is_empty());
    }

    #[test]
    fn query_is_passed_through_unchanged() {
        let state = NavigationState::parse("#/blog/detail?id=7&draft");
        assert_eq!(state.path, "/blog/detail");
        assert_eq!(state.params[0], ("id".to_string(), "7".to_string()));
        assert_eq!(state.params[1], ("draft".to_string(), String::new()));
    }

    #[test]
    fn only_the_first_question_mark_splits() {
        let state = NavigationState::parse("#/search?q=a?b");
        assert_eq!(state.path, "/search");
        assert_eq!(state.param("q"), Some("a?b"));
    }

    #[test]
    fn malformed_fragment_resolves_to_home() {
        assert_eq!(NavigationState::parse("#oops").path, "/");
        assert_eq!(NavigationState::parse("").path, "/");
        assert_eq!(NavigationState::parse("#").path, "/");
    }

    #[test]
    fn missing_param_is_none() {
        let state = NavigationState::parse("#/courses?category=workshop");
        assert_eq!(state.param("search"), None);
        assert_eq!(state.param("category"), Some("workshop"));
    }

    /// A redirect target written by the navigator is percent-encoded; the
    /// auth view must read back the original path.
    #[test]
    fn encoded_redirect_value_decodes_to_the_original_path() {
        let query = serde_urlencoded::to_string(AuthQuery {
            tab: None,
            redirect: Some("/dashboard/student".to_string()),
        })
        .unwrap();
        assert!(query.contains("%2F"), "query: {query}");

        let state = NavigationState::from_parts("/auth", &query);
        let redirect = state.param("redirect").unwrap();
        assert_eq!(redirect, "/dashboard/student");
        assert_eq!(
            NavigationState::parse(redirect).path,
            "/dashboard/student"
        );
    }

    /// A redirect target that carries its own query survives the encode,
    /// decode, and re-parse round trip with its parameters intact.
    #[test]
    fn encoded_redirect_with_query_recovers_inner_params() {
        let target = "/courses/syllabus?id=5f2b0c1a-9d3e-4f6a-8b7c-012345678901";
        let query = serde_urlencoded::to_string([("redirect", target)]).unwrap();

        let state = NavigationState::from_parts("/auth", &query);
        let inner = NavigationState::parse(state.param("redirect").unwrap());
        assert_eq!(inner.path, "/courses/syllabus");
        assert_eq!(
            inner.param("id"),
            Some("5f2b0c1a-9d3e-4f6a-8b7c-012345678901")
        );
    }
}
