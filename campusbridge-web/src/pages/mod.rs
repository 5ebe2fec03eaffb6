mod admin;
mod auth;
mod blog;
mod blog_detail;
mod courses;
mod dashboards;
mod home;
mod internships;
mod statics;
mod syllabus;

pub use admin::AdminSectionPage;
pub use auth::AuthPage;
pub use blog::BlogPage;
pub use blog_detail::BlogDetailPage;
pub use courses::CoursesPage;
pub use dashboards::{
    CollegeDashboardPage, ContentDashboardPage, EmployerDashboardPage, StudentDashboardPage,
};
pub use home::HomePage;
pub use internships::InternshipsPage;
pub use statics::{
    AboutPage, CareersPage, ContactPage, EmployersPage, FaqPage, PrivacyPage, RefundPage,
    TermsPage,
};
pub use syllabus::SyllabusPage;
