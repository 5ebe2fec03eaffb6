use crate::{routes::Route, session::SessionStore};
use shared::models::Profile;
use yew::prelude::*;
use yew_router::hooks::use_navigator;

#[derive(yew::Properties, PartialEq)]
pub struct UserDropdownProps {
    pub user: Profile,
}

#[function_component(UserDropdown)]
pub fn user_dropdown(props: &UserDropdownProps) -> Html {
    let navigator = use_navigator().unwrap();
    let user = &props.user;

    let dashboard_button = {
        let dashboard_navigator = navigator.clone();
        let dashboard = Route::dashboard_for(user.role);
        let onclick = Callback::from(move |event: yew::MouseEvent| {
            event.prevent_default();
            dashboard_navigator.push(&dashboard);
        });
        html! {
            <li><a {onclick}>{"Dashboard"}</a></li>
        }
    };

    let logout_button = {
        let navigator = navigator;
        let onclick = Callback::from(move |event: yew::MouseEvent| {
            event.prevent_default();
            // Clearing the store first means every component that re-reads
            // it after the navigation sees the logged-out state.
            SessionStore::clear();
            navigator.push(&Route::Home);
        });
        html! {
            <li><a {onclick}>{"Logout"}</a></li>
        }
    };

    html! {
        <div class="dropdown dropdown-end">
            <div tabindex="0" role="button" class="btn btn-ghost btn-circle mb-1">
                <i class="fa-solid fa-user text-lg"></i>
            </div>
            <ul tabIndex={0} class="dropdown-content z-[1] menu p-2 shadow bg-base-200 rounded-box w-52">
                <li class="px-2 py-1 text-left">
                    <div class="text-sm font-semibold text-base-content">{ user.name.clone() }</div>
                    <div class="text-xs text-base-content/70">{ &user.email }</div>
                </li>
                <div class="divider my-0"></div>
                {dashboard_button}
                <div class="divider my-0"></div>
                {logout_button}
            </ul>
        </div>
    }
}
