//! Static content pages: policies, company pages, and FAQ.

use crate::routes::Route;
use yew::prelude::*;
use yew_router::prelude::Link;

fn static_page(title: &str, body: Html) -> Html {
    html! {
        <div class="max-w-2xl mx-auto space-y-4">
            <h1 class="text-2xl font-bold">{title.to_string()}</h1>
            {body}
        </div>
    }
}

#[function_component(AboutPage)]
pub fn about_page() -> Html {
    static_page(
        "About CampusBridge",
        html! {
            <>
                <p>
                    {"CampusBridge is an education and placement marketplace connecting \
                      students with industry certifications, colleges with workshop \
                      partners, and employers with placement-ready talent."}
                </p>
                <p>
                    {"Courses are delivered with partner institutions; hiring happens \
                      directly between students and employers on the platform."}
                </p>
            </>
        },
    )
}

#[function_component(EmployersPage)]
pub fn employers_page() -> Html {
    static_page(
        "For employers",
        html! {
            <>
                <p>
                    {"Post internships, browse placement-ready candidates, and run \
                      campus drives with partner colleges."}
                </p>
                <Link<Route> to={Route::Auth} classes="btn btn-primary">
                    {"Create an employer account"}
                </Link<Route>>
            </>
        },
    )
}

#[function_component(ContactPage)]
pub fn contact_page() -> Html {
    static_page(
        "Contact us",
        html! {
            <p>
                {"Write to support@campusbridge.example or call +91 00000 00000 \
                  between 9am and 6pm IST, Monday to Saturday."}
            </p>
        },
    )
}

#[function_component(TermsPage)]
pub fn terms_page() -> Html {
    static_page(
        "Terms of service",
        html! {
            <p>
                {"Use of the platform constitutes acceptance of these terms. \
                  Enrollment seats are allocated first-come, first-served."}
            </p>
        },
    )
}

#[function_component(PrivacyPage)]
pub fn privacy_page() -> Html {
    static_page(
        "Privacy policy",
        html! {
            <p>
                {"Profile data is shared with employers only after you apply to a \
                  listing. We never sell personal information."}
            </p>
        },
    )
}

#[function_component(RefundPage)]
pub fn refund_page() -> Html {
    static_page(
        "Refund policy",
        html! {
            <p>
                {"Paid enrollments are refundable within seven days of purchase, \
                  provided less than one module has been completed."}
            </p>
        },
    )
}

#[function_component(FaqPage)]
pub fn faq_page() -> Html {
    static_page(
        "Frequently asked questions",
        html! {
            <div class="space-y-2">
                <div class="collapse collapse-arrow bg-base-100 shadow">
                    <input type="checkbox" />
                    <div class="collapse-title font-medium">
                        {"Do certifications include placement support?"}
                    </div>
                    <div class="collapse-content">
                        <p>{"Yes — every certification includes placement training."}</p>
                    </div>
                </div>
                <div class="collapse collapse-arrow bg-base-100 shadow">
                    <input type="checkbox" />
                    <div class="collapse-title font-medium">
                        {"Can colleges host workshops on campus?"}
                    </div>
                    <div class="collapse-content">
                        <p>{"Partner colleges can schedule on-campus workshops each term."}</p>
                    </div>
                </div>
            </div>
        },
    )
}

#[function_component(CareersPage)]
pub fn careers_page() -> Html {
    static_page(
        "Careers at CampusBridge",
        html! {
            <p>
                {"We hire instructors, placement coordinators, and engineers. \
                  Send your resume to careers@campusbridge.example."}
            </p>
        },
    )
}
