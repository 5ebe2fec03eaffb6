use gloo_timers::callback::Timeout;
use web_sys::{ScrollBehavior, ScrollToOptions};
use yew::{
    Children, Html, Properties, classes, function_component, html, use_effect_with, use_state,
};

/// Delay before the incoming view is made visible, giving the browser one
/// frame to apply the hidden state so the CSS transition can play.
const TRANSITION_DELAY_MS: u32 = 30;

#[derive(Properties, PartialEq)]
pub struct PageContentProps {
    /// Current path; the parent also uses it as the component key, so a
    /// path change remounts this container and replays the transition.
    pub route_key: String,
    pub children: Children,
}

/// Transition container for the active view: children mount hidden, flip
/// visible after a short fixed delay, and the window scrolls back to the
/// top of the document on every navigation.
#[function_component(PageContent)]
pub fn page_content(props: &PageContentProps) -> Html {
    let visible = use_state(|| false);

    {
        let visible = visible.clone();
        use_effect_with(props.route_key.clone(), move |_| {
            if let Some(window) = web_sys::window() {
                let options = ScrollToOptions::new();
                options.set_top(0.0);
                options.set_behavior(ScrollBehavior::Smooth);
                window.scroll_to_with_scroll_to_options(&options);
            }
            let timeout = Timeout::new(TRANSITION_DELAY_MS, move || visible.set(true));
            move || {
                timeout.cancel();
            }
        });
    }

    let state_classes = if *visible {
        classes!("opacity-100", "translate-y-0")
    } else {
        classes!("opacity-0", "translate-y-2")
    };

    html! {
        <div class={classes!("transition-all", "duration-300", "ease-out", state_classes)}>
            {props.children.clone()}
        </div>
    }
}
