use crate::api::CampusBridgeClient;
use crate::components::loading::Loading;
use crate::models::notifications::Notifications;
use crate::routes::Route;
use shared::models::BlogPost;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_hooks::use_is_mounted;
use yew_router::prelude::use_navigator;
use yewdux::prelude::use_store;

#[function_component(BlogPage)]
pub fn blog_page() -> Html {
    let posts = use_state(Vec::<BlogPost>::new);
    let loading = use_state(|| true);
    let is_mounted = use_is_mounted();
    let navigator = use_navigator();
    let (_, notifications) = use_store::<Notifications>();

    {
        let posts = posts.clone();
        let loading = loading.clone();
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
                loading.set(false);
            });
            || ()
        });
    }

    if *loading {
        return html! { <Loading /> };
    }

    html! {
        <div class="max-w-2xl mx-auto space-y-4">
            <h1 class="text-2xl font-bold">{"Blog"}</h1>
            { for posts.iter().map(|post| {
                let navigator = navigator.clone();
                let id = post.id;
                let on_read = Callback::from(move |event: MouseEvent| {
                    event.prevent_default();
                    if let Some(navigator) = navigator.as_ref() {
                        let query = [("id", id.to_string())];
                        if navigator
                            .push_with_query(&Route::BlogDetail, &query)
                            .is_err()
                        {
                            navigator.push(&Route::BlogDetail);
                        }
                    }
                });
                html! {
                    <article class="card bg-base-100 shadow p-4" key={post.id.to_string()}>
                        <h2 class="card-title">{ post.title.clone() }</h2>
                        <p class="text-sm text-base-content/70">
                            { format!("{} · {}", post.author, post.published_at.format("%-d %b %Y")) }
                        </p>
                        <div class="card-actions justify-end">
                            <button class="btn btn-ghost btn-sm" onclick={on_read}>
                                {"Read more"}
                            </button>
                        </div>
                    </article>
                }
            }) }
        </div>
    }
}
