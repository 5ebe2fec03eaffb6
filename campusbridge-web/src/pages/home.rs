use crate::api::CampusBridgeClient;
use crate::routes::Route;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_hooks::use_is_mounted;
use yew_router::prelude::Link;

#[function_component(HomePage)]
pub fn home_page() -> Html {
    let backend_up = use_state(|| None::<bool>);
    let is_mounted = use_is_mounted();

    {
        let backend_up = backend_up.clone();
        use_effect_with((), move |()| {
            spawn_local(async move {
                let client = CampusBridgeClient::shared();
                let response = client.health().await;
                if !is_mounted() {
                    return;
                }
                backend_up.set(Some(response.success));
            });
            || ()
        });
    }

    let status = match *backend_up {
        Some(true) => html! { <span class="badge badge-success">{"All systems go"}</span> },
        Some(false) => html! { <span class="badge badge-warning">{"Backend waking up"}</span> },
        None => html! {},
    };

    html! {
        <div class="space-y-8">
            <section class="hero bg-base-200 rounded-box py-16">
                <div class="hero-content text-center">
                    <div class="max-w-xl">
                        <h1 class="text-4xl font-bold">{"Learn. Get certified. Get placed."}</h1>
                        <p class="py-4">
                            {"CampusBridge connects students, colleges, and employers with \
                              industry certifications, placement training, and internships."}
                        </p>
                        <div class="flex justify-center gap-3">
                            <Link<Route> to={Route::Courses} classes="btn btn-primary">
                                {"Explore courses"}
                            </Link<Route>>
                            <Link<Route> to={Route::Internships} classes="btn btn-outline">
                                {"Find internships"}
                            </Link<Route>>
                        </div>
                        <div class="mt-4">{status}</div>
                    </div>
                </div>
            </section>
            <section class="grid gap-4 sm:grid-cols-3">
                <Link<Route> to={Route::CourseCertifications} classes="card bg-base-100 shadow p-6">
                    <h2 class="card-title">{"Certifications"}</h2>
                    <p>{"Industry-recognized certificates with hands-on projects."}</p>
                </Link<Route>>
                <Link<Route> to={Route::CoursePlacement} classes="card bg-base-100 shadow p-6">
                    <h2 class="card-title">{"Placement training"}</h2>
                    <p>{"Aptitude, interviews, and company-specific preparation."}</p>
                </Link<Route>>
                <Link<Route> to={Route::CourseWorkshops} classes="card bg-base-100 shadow p-6">
                    <h2 class="card-title">{"Workshops"}</h2>
                    <p>{"Short, focused sessions run with partner colleges."}</p>
                </Link<Route>>
            </section>
        </div>
    }
}
