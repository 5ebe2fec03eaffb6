use crate::api::CampusBridgeClient;
use crate::components::course_card::CourseCard;
use crate::components::loading::Loading;
use crate::models::notifications::Notifications;
use shared::models::{Course, CourseCategory, CourseFilter};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_hooks::use_is_mounted;
use yewdux::prelude::use_store;

#[derive(Properties, PartialEq)]
pub struct CoursesPageProps {
    /// Restrict the catalog to one section; `None` shows everything.
    #[prop_or_default]
    pub category: Option<CourseCategory>,
}

#[function_component(CoursesPage)]
pub fn courses_page(props: &CoursesPageProps) -> Html {
    let courses = use_state(Vec::<Course>::new);
    let search = use_state(String::new);
    let loading = use_state(|| true);
    let is_mounted = use_is_mounted();
    let (_, notifications) = use_store::<Notifications>();

    {
        let courses = courses.clone();
        let loading = loading.clone();
        let notifications = notifications.clone();
        use_effect_with(props.category, move |category| {
            let filter = CourseFilter {
                category: *category,
                search: None,
            };
            spawn_local(async move {
                let client = CampusBridgeClient::shared();
                let response = client.list_courses(&filter).await;
                // A late response for a view we navigated away from is dropped.
                if !is_mounted() {
                    return;
                }
                match response.into_result() {
                    Ok(list) => courses.set(list),
                    Err(message) => notifications.reduce_mut(|state| state.push(message)),
                }
                loading.set(false);
            });
            || ()
        });
    }

    let on_search = {
        let search = search.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                search.set(input.value());
            }
        })
    };

    let needle = search.to_lowercase();
    let visible: Vec<Course> = courses
        .iter()
        .filter(|course| {
            needle.is_empty()
                || course.title.to_lowercase().contains(&needle)
                || course.summary.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect();

    let heading = props
        .category
        .map_or_else(|| "All courses".to_string(), |category| match category {
            CourseCategory::Certification => "Certifications".to_string(),
            CourseCategory::Placement => "Placement training".to_string(),
            CourseCategory::Workshop => "Workshops".to_string(),
        });

    html! {
        <div class="space-y-4">
            <div class="flex items-center justify-between flex-wrap gap-2">
                <h1 class="text-2xl font-bold">{heading}</h1>
                <input
                    class="input input-bordered w-full max-w-xs"
                    type="search"
                    placeholder="Search courses"
                    value={(*search).clone()}
                    oninput={on_search}
                />
            </div>
            if *loading {
                <Loading />
            } else if visible.is_empty() {
                <p class="text-base-content/70">{"No courses match your search."}</p>
            } else {
                <div class="grid gap-4 sm:grid-cols-2 lg:grid-cols-3">
                    { for visible.into_iter().map(|course| {
                        let key = course.id.to_string();
                        html! { <CourseCard {course} key={key} /> }
                    }) }
                </div>
            }
        </div>
    }
}
