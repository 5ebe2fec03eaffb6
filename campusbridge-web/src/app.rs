use crate::routes::{Route, switch};
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    // Canonicalize the fragment before routing: an empty or malformed hash
    // (anything not starting with "#/") becomes the root path.
    use_effect_with((), |()| {
        if let Some(window) = web_sys::window() {
            let location = window.location();
            let hash = location.hash().unwrap_or_default();
            if !hash.starts_with("#/") {
                let _ = location.set_hash("#/");
            }
        }
        || ()
    });

    html! {
        <HashRouter>
            <Switch<Route> render={switch} />
        </HashRouter>
    }
}
