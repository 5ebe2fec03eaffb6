use crate::api::CampusBridgeClient;
use crate::components::loading::Loading;
use crate::models::notifications::Notifications;
use crate::navigation::use_navigation_state;
use shared::models::BlogPost;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_hooks::use_is_mounted;
use yewdux::prelude::use_store;

#[function_component(BlogDetailPage)]
pub fn blog_detail_page() -> Html {
    let navigation = use_navigation_state();
    let post_id = navigation.param("id").and_then(|id| id.parse::<u64>().ok());

    let post = use_state(|| None::<BlogPost>);
    let loading = use_state(|| true);
    let is_mounted = use_is_mounted();
    let (_, notifications) = use_store::<Notifications>();

    {
        let post = post.clone();
        let loading = loading.clone();
        let notifications = notifications.clone();
        use_effect_with(post_id, move |post_id| {
            if let Some(id) = *post_id {
                spawn_local(async move {
                    let client = CampusBridgeClient::shared();
                    let response = client.get_blog_post(id).await;
                    if !is_mounted() {
                        return;
                    }
                    match response.into_result() {
                        Ok(found) => post.set(Some(found)),
                        Err(message) => notifications.reduce_mut(|state| state.push(message)),
                    }
                    loading.set(false);
                });
            } else {
                loading.set(false);
            }
            || ()
        });
    }

    if *loading {
        return html! { <Loading /> };
    }

    match (*post).clone() {
        None => html! {
            <div class="alert">
                <span>{"Post not found."}</span>
            </div>
        },
        Some(post) => html! {
            <article class="max-w-2xl mx-auto space-y-4">
                <h1 class="text-3xl font-bold">{ post.title.clone() }</h1>
                <p class="text-sm text-base-content/70">
                    { format!("{} · {}", post.author, post.published_at.format("%-d %b %Y")) }
                </p>
                <div class="prose">{ post.body.clone() }</div>
            </article>
        },
    }
}
