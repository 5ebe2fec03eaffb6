use crate::routes::Route;
use shared::models::Course;
use yew::prelude::*;
use yew_router::hooks::use_navigator;

#[derive(Properties, PartialEq)]
pub struct CourseCardProps {
    pub course: Course,
}

#[function_component(CourseCard)]
pub fn course_card(props: &CourseCardProps) -> Html {
    let navigator = use_navigator();
    let course = &props.course;

    let on_view = {
        let course_id = course.id;
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            if let Some(navigator) = navigator.as_ref() {
                let query = [("id", course_id.to_string())];
                if navigator
                    .push_with_query(&Route::CourseSyllabus, &query)
                    .is_err()
                {
                    navigator.push(&Route::CourseSyllabus);
                }
            }
        })
    };

    let price = if course.price_inr == 0 {
        "Free".to_string()
    } else {
        format!("₹{}", course.price_inr)
    };

    html! {
        <div class="card bg-base-100 shadow-md">
            <div class="card-body">
                <h3 class="card-title">{ course.title.clone() }</h3>
                <div class="flex gap-2 text-sm text-base-content/70">
                    <span class="badge badge-outline">{ course.category.to_string() }</span>
                    <span>{ format!("{} weeks", course.duration_weeks) }</span>
                    <span>{ price }</span>
                </div>
                <p>{ course.summary.clone() }</p>
                <div class="card-actions justify-end">
                    <button class="btn btn-primary btn-sm" onclick={on_view}>
                        {"View syllabus"}
                    </button>
                </div>
            </div>
        </div>
    }
}
