//! Tests for the routing system
//!
//! Validates route recognition, the not-found fallback to the home view,
//! and the static role annotations consumed by the access guard.

#[cfg(test)]
mod tests {
    use crate::routes::{AdminRoute, AppRoute, Route};
    use shared::models::UserRole;
    use strum::IntoEnumIterator;
    use yew_router::prelude::Routable;

    /// Unknown paths resolve to the home view, never to nothing.
    #[test]
    fn unknown_paths_fall_back_to_home() {
        for path in [
            "/nonexistent",
            "/courses/unknown-section",
            "/dashboard",
            "/dashboard/unknown",
            "/blog/detail/extra",
            "/totally/made/up",
        ] {
            assert_eq!(Route::recognize(path), Some(Route::Home), "path: {path}");
        }
    }

    #[test]
    fn known_paths_recognize_their_route() {
        assert_eq!(Route::recognize("/"), Some(Route::Home));
        assert_eq!(Route::recognize("/courses"), Some(Route::Courses));
        assert_eq!(
            Route::recognize("/courses/certifications"),
            Some(Route::CourseCertifications)
        );
        assert_eq!(
            Route::recognize("/courses/placement"),
            Some(Route::CoursePlacement)
        );
        assert_eq!(
            Route::recognize("/courses/workshops"),
            Some(Route::CourseWorkshops)
        );
        assert_eq!(
            Route::recognize("/courses/syllabus"),
            Some(Route::CourseSyllabus)
        );
        assert_eq!(Route::recognize("/auth"), Some(Route::Auth));
        assert_eq!(
            Route::recognize("/dashboard/student"),
            Some(Route::DashboardStudent)
        );
        assert_eq!(Route::recognize("/admin"), Some(Route::AdminRoot));
        assert_eq!(Route::recognize("/admin/students"), Some(Route::Admin));
        assert_eq!(Route::recognize("/refund"), Some(Route::Refund));
    }

    #[test]
    fn admin_subroutes_recognize_their_section() {
        assert_eq!(AdminRoute::recognize("/admin"), Some(AdminRoute::Overview));
        assert_eq!(
            AdminRoute::recognize("/admin/students"),
            Some(AdminRoute::Students)
        );
        assert_eq!(
            AdminRoute::recognize("/admin/submissions"),
            Some(AdminRoute::Submissions)
        );
        assert_eq!(
            AdminRoute::recognize("/admin/unknown"),
            Some(AdminRoute::NotFound)
        );
    }

    /// Public routes carry no role; each dashboard and all admin paths do.
    #[test]
    fn role_annotations_match_the_route_table() {
        assert_eq!(Route::Home.required_role(), None);
        assert_eq!(Route::Courses.required_role(), None);
        assert_eq!(Route::Auth.required_role(), None);
        assert_eq!(Route::Blog.required_role(), None);
        assert_eq!(
            Route::DashboardStudent.required_role(),
            Some(UserRole::Student)
        );
        assert_eq!(
            Route::DashboardEmployer.required_role(),
            Some(UserRole::Employer)
        );
        assert_eq!(
            Route::DashboardCollege.required_role(),
            Some(UserRole::College)
        );
        assert_eq!(
            Route::DashboardContent.required_role(),
            Some(UserRole::ContentWriter)
        );
        assert_eq!(Route::AdminRoot.required_role(), Some(UserRole::Admin));
        assert_eq!(Route::Admin.required_role(), Some(UserRole::Admin));
    }

    #[test]
    fn every_role_has_a_dashboard() {
        assert_eq!(
            Route::dashboard_for(UserRole::Student),
            Route::DashboardStudent
        );
        assert_eq!(
            Route::dashboard_for(UserRole::Employer),
            Route::DashboardEmployer
        );
        assert_eq!(
            Route::dashboard_for(UserRole::College),
            Route::DashboardCollege
        );
        assert_eq!(
            Route::dashboard_for(UserRole::ContentWriter),
            Route::DashboardContent
        );
        assert_eq!(Route::dashboard_for(UserRole::Admin), Route::AdminRoot);
    }

    /// A role's own dashboard always passes its route's annotation.
    #[test]
    fn dashboards_admit_their_own_role() {
        for role in [
            UserRole::Student,
            UserRole::Employer,
            UserRole::College,
            UserRole::ContentWriter,
            UserRole::Admin,
        ] {
            let dashboard = Route::dashboard_for(role);
            assert_eq!(dashboard.required_role(), Some(role));
        }
    }

    #[test]
    fn app_route_paths_match_wrapped_routes() {
        assert_eq!(AppRoute::Main(Route::Courses).to_path(), "/courses");
        assert_eq!(
            AppRoute::Admin(AdminRoute::Students).to_path(),
            "/admin/students"
        );
        assert_eq!(AppRoute::default(), AppRoute::Main(Route::Home));
    }

    #[test]
    fn route_conversion_into_app_route() {
        let main: AppRoute = Route::Faq.into();
        assert_eq!(main, AppRoute::Main(Route::Faq));
        let admin: AppRoute = AdminRoute::Blogs.into();
        assert_eq!(admin, AppRoute::Admin(AdminRoute::Blogs));
    }

    /// Recognition round-trips for every fixed-path variant.
    #[test]
    fn to_path_round_trips_for_fixed_routes() {
        for route in Route::iter() {
            // The wildcard admin variant cannot round-trip through a literal.
            if route == Route::Admin {
                continue;
            }
            let path = route.to_path();
            assert_eq!(Route::recognize(&path), Some(route), "path: {path}");
        }
    }
}
