use yew::{Html, Properties, classes, function_component, html};
use yew_router::prelude::{Link, Routable};

use crate::routes::AppRoute;

#[derive(Properties, PartialEq, Eq)]
pub struct HeaderNavItemProps<R: Routable + Clone + Eq + Into<AppRoute> + 'static> {
    pub route: R,
    pub current_route: Option<AppRoute>,
}

/// Derive a display label from the last path segment, e.g.
/// `/admin/submissions` → "Submissions" and `/admin` → "Overview".
pub(crate) fn label_for_path(path: &str) -> String {
    let segment = path.trim_end_matches('/').rsplit('/').next().unwrap_or("");
    let segment = match segment {
        "" | "admin" => "overview",
        other => other,
    };
    let mut chars = segment.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().collect::<String>() + chars.as_str()
    })
}

#[function_component(HeaderNavItem)]
pub fn header_nav_item<R: Routable + Clone + PartialEq + Eq + Into<AppRoute> + 'static>(
    props: &HeaderNavItemProps<R>,
) -> Html {
    let route = props.route.clone();
    let route_name = label_for_path(&route.to_path());

    // Convert R to AppRoute for comparison
    let app_route: AppRoute = props.route.clone().into();
    let active_route_class = if props.current_route.as_ref() == Some(&app_route) {
        "btn-soft"
    } else {
        ""
    };

    html! {
      <li>
          <Link<R> to={props.route.clone()} classes={classes!("btn", "btn-ghost", "gap-2", active_route_class)}>
              {route_name}
          </Link<R>>
      </li>
    }
}
