use crate::routes::AdminRoute;
use yew::prelude::*;
use yew_router::prelude::Routable;

#[derive(Properties, PartialEq)]
pub struct AdminSectionPageProps {
    pub section: AdminRoute,
}

fn section_copy(section: &AdminRoute) -> (&'static str, &'static str) {
    match section {
        AdminRoute::Students => ("Students", "Accounts, batches, and enrollment history."),
        AdminRoute::Employers => ("Employers", "Partner companies and hiring contacts."),
        AdminRoute::Colleges => ("Colleges", "Affiliated institutions and coordinators."),
        AdminRoute::Courses => ("Courses", "Catalog entries, pricing, and syllabi."),
        AdminRoute::Blogs => ("Blogs", "Posts awaiting review and published articles."),
        AdminRoute::Submissions => ("Submissions", "Contact-form and career submissions."),
        AdminRoute::Internships => ("Internships", "Open listings and applications."),
        AdminRoute::Overview | AdminRoute::NotFound => {
            ("Overview", "Platform activity at a glance.")
        }
    }
}

/// One admin management section. The tables themselves are driven by the
/// backend's admin endpoints and render once those land in the gateway.
#[function_component(AdminSectionPage)]
pub fn admin_section_page(props: &AdminSectionPageProps) -> Html {
    let (title, description) = section_copy(&props.section);

    html! {
        <div class="space-y-4">
            <h1 class="text-2xl font-bold">{title}</h1>
            <p class="text-base-content/70">{description}</p>
            if props.section == AdminRoute::Overview {
                <div class="stats stats-vertical sm:stats-horizontal w-full gap-4">
                    <div class="stat bg-base-100 shadow rounded-box">
                        <div class="stat-title">{"Students"}</div>
                        <div class="stat-value text-primary">{"—"}</div>
                    </div>
                    <div class="stat bg-base-100 shadow rounded-box">
                        <div class="stat-title">{"Employers"}</div>
                        <div class="stat-value text-primary">{"—"}</div>
                    </div>
                    <div class="stat bg-base-100 shadow rounded-box">
                        <div class="stat-title">{"Colleges"}</div>
                        <div class="stat-value text-primary">{"—"}</div>
                    </div>
                </div>
            } else {
                <div class="card bg-base-100 shadow p-6">
                    <p>{ format!("Management table for {} lives here.", props.section.to_path()) }</p>
                </div>
            }
        </div>
    }
}
