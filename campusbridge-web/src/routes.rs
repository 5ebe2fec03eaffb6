use crate::{containers::layout::Layout, guard::RouteGuard, pages::*};
use serde::{Deserialize, Serialize};
use shared::models::UserRole;
use strum::{EnumIter, IntoEnumIterator};
use wasm_bindgen::prelude::*;
use yew::prelude::*;
use yew_router::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

/// The main routes. `Home` doubles as the not-found target: any unknown or
/// malformed fragment resolves to the home view instead of erroring.
#[derive(Debug, Clone, PartialEq, Eq, Routable, EnumIter)]
pub enum Route {
    #[not_found]
    #[at("/")]
    Home,
    #[at("/courses")]
    Courses,
    #[at("/courses/certifications")]
    CourseCertifications,
    #[at("/courses/placement")]
    CoursePlacement,
    #[at("/courses/workshops")]
    CourseWorkshops,
    #[at("/courses/syllabus")]
    CourseSyllabus,
    #[at("/internships")]
    Internships,
    #[at("/employers")]
    Employers,
    #[at("/auth")]
    Auth,
    #[at("/dashboard/student")]
    DashboardStudent,
    #[at("/dashboard/employer")]
    DashboardEmployer,
    #[at("/dashboard/college")]
    DashboardCollege,
    #[at("/dashboard/content")]
    DashboardContent,
    #[at("/admin")]
    AdminRoot,
    #[at("/admin/*")]
    Admin,
    #[at("/about")]
    About,
    #[at("/blog")]
    Blog,
    #[at("/blog/detail")]
    BlogDetail,
    #[at("/contact")]
    Contact,
    #[at("/terms")]
    Terms,
    #[at("/privacy")]
    Privacy,
    #[at("/refund")]
    Refund,
    #[at("/faq")]
    Faq,
    #[at("/careers")]
    Careers,
}

/// The admin routes.
#[derive(Debug, Clone, PartialEq, Eq, Routable, EnumIter)]
pub enum AdminRoute {
    #[at("/admin")]
    Overview,
    #[at("/admin/students")]
    Students,
    #[at("/admin/employers")]
    Employers,
    #[at("/admin/colleges")]
    Colleges,
    #[at("/admin/courses")]
    Courses,
    #[at("/admin/blogs")]
    Blogs,
    #[at("/admin/submissions")]
    Submissions,
    #[at("/admin/internships")]
    Internships,
    #[not_found]
    #[at("/admin/404")]
    NotFound,
}

/// The app routes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppRoute {
    Main(Route),
    Admin(AdminRoute),
}

impl Default for AppRoute {
    fn default() -> Self {
        AppRoute::Main(Route::Home)
    }
}

impl From<AdminRoute> for AppRoute {
    fn from(route: AdminRoute) -> Self {
        AppRoute::Admin(route)
    }
}

impl From<Route> for AppRoute {
    fn from(route: Route) -> Self {
        AppRoute::Main(route)
    }
}

impl AppRoute {
    /// Path string for the wrapped route; keys the view transition.
    pub fn to_path(&self) -> String {
        match self {
            AppRoute::Main(route) => route.to_path(),
            AppRoute::Admin(route) => route.to_path(),
        }
    }
}

impl Route {
    /// Static access annotation consumed by the route guard. Routes without
    /// a declared role are public.
    #[must_use]
    pub fn required_role(&self) -> Option<UserRole> {
        match self {
            Route::DashboardStudent => Some(UserRole::Student),
            Route::DashboardEmployer => Some(UserRole::Employer),
            Route::DashboardCollege => Some(UserRole::College),
            Route::DashboardContent => Some(UserRole::ContentWriter),
            Route::AdminRoot | Route::Admin => Some(UserRole::Admin),
            _ => None,
        }
    }

    /// The dashboard a freshly authenticated user of `role` lands on.
    #[must_use]
    pub fn dashboard_for(role: UserRole) -> Route {
        match role {
            UserRole::Student => Route::DashboardStudent,
            UserRole::Employer => Route::DashboardEmployer,
            UserRole::College => Route::DashboardCollege,
            UserRole::ContentWriter => Route::DashboardContent,
            UserRole::Admin => Route::AdminRoot,
        }
    }
}

/// Query parameters understood by the auth view.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthQuery {
    /// Pre-selected credentials tab: student, employer, or college.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tab: Option<String>,
    /// Path to return to after a successful login.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect: Option<String>,
}

fn page_for(route: &Route) -> Html {
    match route {
        Route::Home => html! { <HomePage /> },
        Route::Courses => html! { <CoursesPage /> },
        Route::CourseCertifications => {
            html! { <CoursesPage category={shared::models::CourseCategory::Certification} /> }
        }
        Route::CoursePlacement => {
            html! { <CoursesPage category={shared::models::CourseCategory::Placement} /> }
        }
        Route::CourseWorkshops => {
            html! { <CoursesPage category={shared::models::CourseCategory::Workshop} /> }
        }
        Route::CourseSyllabus => html! { <SyllabusPage /> },
        Route::Internships => html! { <InternshipsPage /> },
        Route::Employers => html! { <EmployersPage /> },
        Route::Auth => html! { <AuthPage /> },
        Route::DashboardStudent => html! { <StudentDashboardPage /> },
        Route::DashboardEmployer => html! { <EmployerDashboardPage /> },
        Route::DashboardCollege => html! { <CollegeDashboardPage /> },
        Route::DashboardContent => html! { <ContentDashboardPage /> },
        Route::About => html! { <AboutPage /> },
        Route::Blog => html! { <BlogPage /> },
        Route::BlogDetail => html! { <BlogDetailPage /> },
        Route::Contact => html! { <ContactPage /> },
        Route::Terms => html! { <TermsPage /> },
        Route::Privacy => html! { <PrivacyPage /> },
        Route::Refund => html! { <RefundPage /> },
        Route::Faq => html! { <FaqPage /> },
        Route::Careers => html! { <CareersPage /> },
        // Admin paths are dispatched to their own switch in `switch`.
        Route::AdminRoot | Route::Admin => Html::default(),
    }
}

/// Switch function for the main routes.
pub fn switch(route: Route) -> Html {
    log(std::format!("Switching to route: {route:?}").as_str());
    match route {
        Route::AdminRoot | Route::Admin => html! {
            <RouteGuard required_role={UserRole::Admin}>
                <Switch<AdminRoute> render={switch_admin} />
            </RouteGuard>
        },
        other => {
            let page = page_for(&other);
            let guarded = match other.required_role() {
                Some(role) => html! {
                    <RouteGuard required_role={role}>
                        {page}
                    </RouteGuard>
                },
                None => page,
            };
            html! {
                <Layout current_route={AppRoute::Main(other)}>
                    {guarded}
                </Layout>
            }
        }
    }
}

/// Switch function for the admin routes.
fn switch_admin(route: AdminRoute) -> Html {
    log(std::format!("Switching to admin route: {route:?}").as_str());
    let header_routes = AdminRoute::iter()
        .filter(|route| route != &AdminRoute::NotFound)
        .map(AppRoute::Admin)
        .collect::<Vec<_>>();
    match route {
        AdminRoute::NotFound => html! { <Redirect<Route> to={Route::Home} /> },
        section => html! {
            <Layout {header_routes} current_route={AppRoute::Admin(section.clone())}>
                <AdminSectionPage {section} />
            </Layout>
        },
    }
}
