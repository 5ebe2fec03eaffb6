use crate::routes::Route;
use yew::prelude::*;
use yew_router::prelude::Link;

/// Fixed promotional strip shown on the home route only. Dismissal lives in
/// component state for the current mount; it is not persisted.
#[function_component(PromoBanner)]
pub fn promo_banner() -> Html {
    let dismissed = use_state(|| false);

    if *dismissed {
        return html! {};
    }

    let on_dismiss = {
        let dismissed = dismissed.clone();
        Callback::from(move |_: MouseEvent| dismissed.set(true))
    };

    html! {
        <div class="fixed top-16 inset-x-0 z-40 bg-primary text-primary-content px-4 py-2 flex items-center justify-between shadow">
            <span>
                {"Placement-season workshops are open for enrollment — limited seats."}
            </span>
            <div class="flex items-center gap-2">
                <Link<Route> to={Route::CourseWorkshops} classes="btn btn-sm btn-secondary">
                    {"Browse workshops"}
                </Link<Route>>
                <button class="btn btn-sm btn-ghost" aria-label="Dismiss" onclick={on_dismiss}>
                    {"✕"}
                </button>
            </div>
        </div>
    }
}
