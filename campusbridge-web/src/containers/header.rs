use crate::{
    components::{header_nav_item::HeaderNavItem, user_dropdown::UserDropdown},
    routes::{AdminRoute, AppRoute, Route},
    session::SessionStore,
};
use yew::prelude::*;
use yew_router::prelude::Link;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    #[prop_or_default]
    pub current_route: Option<AppRoute>,
    #[prop_or_default]
    pub header_routes: Option<Vec<AppRoute>>,
}

/// Persistent navigation shell. Reads the session store fresh on every
/// render so a same-tab login or logout is reflected immediately; whether
/// the logged-in chrome shows depends on session presence alone.
#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let session = SessionStore::load();

    let render_routes = |routes: &[AppRoute]| -> Html {
        html! {
            { for routes.iter().map(|route| match route {
                AppRoute::Admin(admin_route) => html! {
                    <HeaderNavItem<AdminRoute>
                        current_route={props.current_route.clone()}
                        route={admin_route.clone()}
                    />
                },
                AppRoute::Main(main_route) => html! {
                    <HeaderNavItem<Route>
                        current_route={props.current_route.clone()}
                        route={main_route.clone()}
                    />
                },
            }) }
        }
    };

    let account_actions = match session.user.as_ref() {
        Some(user) => {
            let dashboard = Route::dashboard_for(user.role);
            html! {
                <>
                    <Link<Route> to={dashboard} classes="btn btn-ghost btn-sm">
                        {"Dashboard"}
                    </Link<Route>>
                    <UserDropdown user={user.clone()} />
                </>
            }
        }
        None => html! {
            <Link<Route> to={Route::Auth} classes="btn btn-primary btn-sm">
                {"Login"}
            </Link<Route>>
        },
    };

    html! {
        <nav class="navbar justify-between bg-base-300">
            <a class="btn btn-ghost text-lg">
                <Link<Route> to={Route::Home} classes="text-lg">
                    {"CampusBridge"}
                </Link<Route>>
            </a>
            <ul class="hidden menu sm:menu-horizontal">
                <HeaderNavItem<Route> current_route={props.current_route.clone()} route={Route::Courses} />
                <HeaderNavItem<Route> current_route={props.current_route.clone()} route={Route::Internships} />
                <HeaderNavItem<Route> current_route={props.current_route.clone()} route={Route::Employers} />
                <HeaderNavItem<Route> current_route={props.current_route.clone()} route={Route::Blog} />
                <HeaderNavItem<Route> current_route={props.current_route.clone()} route={Route::About} />
                {
                    props
                        .header_routes
                        .as_ref()
                        .map_or_else(|| html! {}, |routes| render_routes(routes))
                }
            </ul>
            <div class="flex items-center gap-2">
                {account_actions}
            </div>
        </nav>
    }
}
