use crate::api::CampusBridgeClient;
use crate::components::loading::Loading;
use crate::models::notifications::Notifications;
use shared::models::Internship;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_hooks::use_is_mounted;
use yewdux::prelude::use_store;

#[function_component(InternshipsPage)]
pub fn internships_page() -> Html {
    let listings = use_state(Vec::<Internship>::new);
    let loading = use_state(|| true);
    let is_mounted = use_is_mounted();
    let (_, notifications) = use_store::<Notifications>();

    {
        let listings = listings.clone();
        let loading = loading.clone();
        let notifications = notifications.clone();
        use_effect_with((), move |()| {
            spawn_local(async move {
                let client = CampusBridgeClient::shared();
                let response = client.list_internships().await;
                if !is_mounted() {
                    return;
                }
                match response.into_result() {
                    Ok(list) => listings.set(list),
                    Err(message) => notifications.reduce_mut(|state| state.push(message)),
                }
                loading.set(false);
            });
            || ()
        });
    }

    if *loading {
        return html! { <Loading /> };
    }

    html! {
        <div class="space-y-4">
            <h1 class="text-2xl font-bold">{"Internships"}</h1>
            if listings.is_empty() {
                <p class="text-base-content/70">{"No open listings right now. Check back soon."}</p>
            } else {
                <div class="grid gap-4 sm:grid-cols-2">
                    { for listings.iter().map(|listing| html! {
                        <div class="card bg-base-100 shadow p-4" key={listing.id.to_string()}>
                            <h2 class="card-title">{ listing.title.clone() }</h2>
                            <p class="text-sm text-base-content/70">
                                { format!("{} · {}", listing.company, listing.location) }
                            </p>
                            <p>{ format!("₹{}/month", listing.stipend_inr) }</p>
                        </div>
                    }) }
                </div>
            }
        </div>
    }
}
