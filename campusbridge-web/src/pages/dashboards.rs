use crate::api::CampusBridgeClient;
use crate::models::notifications::Notifications;
use crate::session::SessionStore;
use shared::models::{BlogPost, UpdateProfileRequest};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_hooks::use_is_mounted;
use yewdux::prelude::use_store;

fn stat(title: &str, value: &str, description: &str) -> Html {
    html! {
        <div class="stat bg-base-100 shadow rounded-box">
            <div class="stat-title">{title.to_string()}</div>
            <div class="stat-value text-primary">{value.to_string()}</div>
            <div class="stat-desc">{description.to_string()}</div>
        </div>
    }
}

fn greeting() -> String {
    SessionStore::load()
        .user
        .map_or_else(|| "there".to_string(), |user| user.name)
}

/// Account settings card: edits go through the explicit update flow, and
/// the stored profile is overwritten wholesale with the server's copy.
#[function_component(ProfileSettings)]
fn profile_settings() -> Html {
    let session = SessionStore::load();
    let name = use_state(|| {
        session
            .user
            .as_ref()
            .map_or_else(String::new, |user| user.name.clone())
    });
    let saving = use_state(|| false);
    let (_, notifications) = use_store::<Notifications>();

    let on_name_change = {
        let name = name.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                name.set(input.value());
            }
        })
    };

    let on_save = {
        let name = name.clone();
        let saving = saving.clone();
        let notifications = notifications.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let request = UpdateProfileRequest {
                name: Some((*name).clone()),
                email: None,
            };
            saving.set(true);
            let saving = saving.clone();
            let notifications = notifications.clone();
            spawn_local(async move {
                let client = CampusBridgeClient::shared();
                let updated = client.update_profile(&request).await.into_result();
                match updated {
                    Ok(profile) => {
                        if let Some(token) = SessionStore::load().token {
                            SessionStore::store(&token, &profile);
                        }
                    }
                    Err(message) => notifications.reduce_mut(|state| state.push(message)),
                }
                saving.set(false);
            });
        })
    };

    html! {
        <form class="card bg-base-100 shadow p-4 space-y-2" onsubmit={on_save}>
            <h2 class="card-title">{"Account"}</h2>
            <div class="form-control">
                <label class="label" for="display-name">
                    <span class="label-text">{"Display name"}</span>
                </label>
                <input
                    id="display-name"
                    class="input input-bordered"
                    value={(*name).clone()}
                    oninput={on_name_change}
                />
            </div>
            <button class="btn btn-primary btn-sm self-start" type="submit" disabled={*saving}>
                {if *saving { "Saving..." } else { "Save" }}
            </button>
        </form>
    }
}

#[function_component(StudentDashboardPage)]
pub fn student_dashboard_page() -> Html {
    html! {
        <div class="space-y-4">
            <h1 class="text-2xl font-bold">{ format!("Welcome back, {}", greeting()) }</h1>
            <div class="stats stats-vertical sm:stats-horizontal w-full gap-4">
                { stat("Active courses", "—", "Enrollments appear here") }
                { stat("Certificates", "—", "Issued after completion") }
                { stat("Applications", "—", "Internships you applied to") }
            </div>
            <ProfileSettings />
        </div>
    }
}

#[function_component(EmployerDashboardPage)]
pub fn employer_dashboard_page() -> Html {
    html! {
        <div class="space-y-4">
            <h1 class="text-2xl font-bold">{ format!("Welcome back, {}", greeting()) }</h1>
            <div class="stats stats-vertical sm:stats-horizontal w-full gap-4">
                { stat("Open positions", "—", "Listings you are hiring for") }
                { stat("Candidates", "—", "Placement-ready students") }
                { stat("Shortlists", "—", "Awaiting your review") }
            </div>
        </div>
    }
}

#[function_component(CollegeDashboardPage)]
pub fn college_dashboard_page() -> Html {
    html! {
        <div class="space-y-4">
            <h1 class="text-2xl font-bold">{ format!("Welcome back, {}", greeting()) }</h1>
            <div class="stats stats-vertical sm:stats-horizontal w-full gap-4">
                { stat("Enrolled students", "—", "Across all batches") }
                { stat("Workshops", "—", "Scheduled this term") }
                { stat("Placement rate", "—", "Last academic year") }
            </div>
        </div>
    }
}

/// Content-writer view: the published posts they maintain.
#[function_component(ContentDashboardPage)]
pub fn content_dashboard_page() -> Html {
    let posts = use_state(Vec::<BlogPost>::new);
    let is_mounted = use_is_mounted();
    let (_, notifications) = use_store::<Notifications>();

    {
        let posts = posts.clone();
        let notifications = notifications.clone();
        use_effect_with((), move |()| {
            spawn_local(async move {
                let client = CampusBridgeClient::shared();
                let response = client.list_blog_posts().await;
                if !is_mounted() {
                    return;
                }
                match response.into_result() {
                    Ok(list) => posts.set(list),
                    Err(message) => notifications.reduce_mut(|state| state.push(message)),
                }
            });
            || ()
        });
    }

    html! {
        <div class="space-y-4">
            <h1 class="text-2xl font-bold">{ format!("Welcome back, {}", greeting()) }</h1>
            <h2 class="text-xl font-semibold">{"Published posts"}</h2>
            <ul class="menu bg-base-100 rounded-box shadow">
                { for posts.iter().map(|post| html! {
                    <li key={post.id.to_string()}>
                        <span>{ format!("{} — {}", post.title, post.author) }</span>
                    </li>
                }) }
            </ul>
        </div>
    }
}
