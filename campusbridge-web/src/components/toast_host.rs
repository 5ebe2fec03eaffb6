use crate::models::notifications::Notifications;
use yew::prelude::*;
use yewdux::prelude::use_store;

/// Renders the toast queue in a fixed stack; each toast is dismissible and
/// none of them block interaction with the page underneath.
#[function_component(ToastHost)]
pub fn toast_host() -> Html {
    let (notifications, dispatch) = use_store::<Notifications>();

    if notifications.toasts.is_empty() {
        return html! {};
    }

    html! {
        <div class="toast toast-end z-50">
            { for notifications.toasts.iter().map(|toast| {
                let id = toast.id;
                let dispatch = dispatch.clone();
                let on_dismiss = Callback::from(move |_: MouseEvent| {
                    dispatch.reduce_mut(|state| state.dismiss(id));
                });
                html! {
                    <div class="alert alert-error shadow-lg" key={toast.id.to_string()}>
                        <span>{toast.message.clone()}</span>
                        <button class="btn btn-xs btn-ghost" aria-label="Dismiss" onclick={on_dismiss}>
                            {"✕"}
                        </button>
                    </div>
                }
            }) }
        </div>
    }
}
