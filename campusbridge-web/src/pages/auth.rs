use crate::api::CampusBridgeClient;
use crate::navigation::{NavigationState, use_navigation_state};
use crate::routes::Route;
use crate::session::SessionStore;
use shared::models::{LoginRequest, UserRole};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::hooks::use_navigator;
use yew_router::prelude::Routable;

const TABS: [(UserRole, &str); 3] = [
    (UserRole::Student, "Student"),
    (UserRole::Employer, "Employer"),
    (UserRole::College, "College"),
];

/// Login view with role tabs. Honors `?tab=` for the initial tab and
/// `?redirect=` for where to land after a successful login; on failure the
/// form keeps its state so the user can correct and resubmit.
#[function_component(AuthPage)]
pub fn auth_page() -> Html {
    let navigation = use_navigation_state();
    let initial_tab = navigation
        .param("tab")
        .and_then(|tab| tab.parse::<UserRole>().ok())
        .filter(|role| TABS.iter().any(|(tab, _)| tab == role))
        .unwrap_or(UserRole::Student);
    let redirect = navigation.param("redirect").map(ToString::to_string);

    let tab = use_state(|| initial_tab);
    let email = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(|| None::<String>);
    let loading = use_state(|| false);
    let navigator = use_navigator();

    let onsubmit = {
        let tab = tab.clone();
        let email_handle = email.clone();
        let password_handle = password.clone();
        let error_handle = error.clone();
        let loading_handle = loading.clone();
        let navigator = navigator;
        let redirect = redirect.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let request = LoginRequest {
                email: (*email_handle).clone(),
                password: (*password_handle).clone(),
                role_tab: *tab,
            };
            loading_handle.set(true);
            error_handle.set(None);
            let loading_ref = loading_handle.clone();
            let error_ref = error_handle.clone();
            let navigator_handle = navigator.clone();
            let redirect = redirect.clone();
            spawn_local(async move {
                let client = CampusBridgeClient::shared();
                match client.login(&request).await.into_result() {
                    Ok(response) => {
                        SessionStore::store(&response.token, &response.user);
                        if let Some(ref nav) = navigator_handle {
                            let parsed = redirect.as_deref().map(NavigationState::parse);
                            match parsed.and_then(|state| {
                                Route::recognize(&state.path).map(|route| (route, state.params))
                            }) {
                                Some((route, params)) if !params.is_empty() => {
                                    if nav.push_with_query(&route, &params).is_err() {
                                        nav.push(&route);
                                    }
                                }
                                Some((route, _)) => nav.push(&route),
                                None => nav.push(&Route::dashboard_for(response.user.role)),
                            }
                        }
                    }
                    Err(message) => {
                        // Form state is left untouched so nothing is lost.
                        error_ref.set(Some(message));
                    }
                }
                loading_ref.set(false);
            });
        })
    };

    let on_email_change = {
        let email = email.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                email.set(input.value());
            }
        })
    };

    let on_password_change = {
        let password = password.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                password.set(input.value());
            }
        })
    };

    let is_busy = *loading;
    let disable_submit = (*email).is_empty() || (*password).is_empty() || is_busy;

    html! {
        <div class="flex items-center justify-center min-h-screen bg-base-200">
            <div class="card w-full max-w-md shadow-lg bg-base-100">
                <form class="card-body" onsubmit={onsubmit}>
                    <h2 class="card-title text-2xl">{"Sign in"}</h2>
                    <div role="tablist" class="tabs tabs-boxed">
                        { for TABS.iter().map(|(role, label)| {
                            let tab_handle = tab.clone();
                            let role = *role;
                            let active = if *tab_handle == role { "tab-active" } else { "" };
                            let onclick = Callback::from(move |event: MouseEvent| {
                                event.prevent_default();
                                tab_handle.set(role);
                            });
                            html! {
                                <a role="tab" class={classes!("tab", active)} {onclick}>
                                    {*label}
                                </a>
                            }
                        }) }
                    </div>
                    if let Some(message) = &*error {
                        <div class="alert alert-error">
                            <span>{message.clone()}</span>
                        </div>
                    }
                    <div class="form-control">
                        <label class="label" for="email">
                            <span class="label-text">{"Email"}</span>
                        </label>
                        <input
                            id="email"
                            class="input input-bordered"
                            type="email"
                            required=true
                            value={(*email).clone()}
                            oninput={on_email_change}
                        />
                    </div>
                    <div class="form-control">
                        <label class="label" for="password">
                            <span class="label-text">{"Password"}</span>
                        </label>
                        <input
                            id="password"
                            class="input input-bordered"
                            type="password"
                            required=true
                            value={(*password).clone()}
                            oninput={on_password_change}
                        />
                    </div>
                    <div class="form-control mt-6">
                        <button class="btn btn-primary" type="submit" disabled={disable_submit}>
                            {if is_busy { "Signing in..." } else { "Sign in" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
