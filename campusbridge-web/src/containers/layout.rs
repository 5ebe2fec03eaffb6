use crate::components::promo_banner::PromoBanner;
use crate::components::toast_host::ToastHost;
use crate::containers::header::Header;
use crate::containers::page_content::PageContent;
use crate::routes::{AppRoute, Route};
use yew::{Children, Html, Properties, function_component, html};

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
    #[prop_or_default]
    pub current_route: Option<AppRoute>,
    #[prop_or_default]
    pub header_routes: Option<Vec<AppRoute>>,
}

#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    let current_route = props.current_route.clone().unwrap_or_default();
    let route_key = current_route.to_path();
    // The promotional banner is gated on the root path and nothing else.
    let show_banner = current_route == AppRoute::Main(Route::Home);
    let header_routes = props.header_routes.clone();

    html! {
        <>
            <Header {header_routes} current_route={props.current_route.clone()} />
            if show_banner {
                <PromoBanner />
            }
            <div class="min-h-screen bg-base-100 flex flex-col">
                <main class="flex-grow p-4">
                    <PageContent route_key={route_key.clone()} key={route_key}>
                        {props.children.clone()}
                    </PageContent>
                </main>
                <footer class="footer footer-center p-4 border-t border-base-300 text-base-content">
                    <div>
                        <p>{"© 2025 CampusBridge · Courses, internships, and campus hiring"}</p>
                    </div>
                </footer>
            </div>
            <ToastHost />
        </>
    }
}
