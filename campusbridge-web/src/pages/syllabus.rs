use crate::api::CampusBridgeClient;
use crate::checkout::{CheckoutOptions, CheckoutPrefill, open_checkout};
use crate::components::loading::Loading;
use crate::models::notifications::Notifications;
use crate::navigation::use_navigation_state;
use crate::routes::{AuthQuery, Route};
use crate::session::SessionStore;
use shared::models::{
    Course, CreateOrderRequest, LineItem, PaymentResult, VerifyPaymentRequest,
};
use uuid::Uuid;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_hooks::use_is_mounted;
use yew_router::prelude::use_navigator;
use yewdux::prelude::use_store;

/// Course detail and purchase flow: enroll, open the checkout widget for
/// paid courses, then verify the payment with the backend.
#[function_component(SyllabusPage)]
pub fn syllabus_page() -> Html {
    let navigation = use_navigation_state();
    let course_id = navigation.param("id").and_then(|id| Uuid::parse_str(id).ok());

    let course = use_state(|| None::<Course>);
    let loading = use_state(|| true);
    let enrolled = use_state(|| false);
    let is_mounted = use_is_mounted();
    let navigator = use_navigator();
    let (_, notifications) = use_store::<Notifications>();

    {
        let course = course.clone();
        let loading = loading.clone();
        let notifications = notifications.clone();
        let is_mounted = is_mounted.clone();
        use_effect_with(course_id, move |course_id| {
            if let Some(id) = *course_id {
                spawn_local(async move {
                    let client = CampusBridgeClient::shared();
                    let response = client.get_course(&id).await;
                    if !is_mounted() {
                        return;
                    }
                    match response.into_result() {
                        Ok(found) => course.set(Some(found)),
                        Err(message) => notifications.reduce_mut(|state| state.push(message)),
                    }
                    loading.set(false);
                });
            } else {
                loading.set(false);
            }
            || ()
        });
    }

    let on_enroll = {
        let course = course.clone();
        let enrolled = enrolled.clone();
        let notifications = notifications.clone();
        let navigator = navigator.clone();
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            let Some(course) = (*course).clone() else {
                return;
            };
            let session = SessionStore::load();
            let Some(user) = session.user else {
                // Not logged in: send to auth and come back here afterwards.
                if let Some(navigator) = navigator.as_ref() {
                    let query = AuthQuery {
                        tab: Some("student".to_string()),
                        redirect: Some(format!("/courses/syllabus?id={}", course.id)),
                    };
                    if navigator.push_with_query(&Route::Auth, &query).is_err() {
                        navigator.push(&Route::Auth);
                    }
                }
                return;
            };

            let enrolled = enrolled.clone();
            let notifications = notifications.clone();
            spawn_local(async move {
                let client = CampusBridgeClient::shared();
                let response = client.enroll(&course.id).await;
                if let Err(message) = response.into_result() {
                    notifications.reduce_mut(|state| state.push(message));
                    return;
                }

                if course.price_inr == 0 {
                    enrolled.set(true);
                    return;
                }

                let order = match client
                    .create_payment_order(&CreateOrderRequest {
                        course_id: course.id,
                    })
                    .await
                    .into_result()
                {
                    Ok(order) => order,
                    Err(message) => {
                        notifications.reduce_mut(|state| state.push(message));
                        return;
                    }
                };

                let line_items = vec![LineItem {
                    label: course.title.clone(),
                    amount: order.amount,
                }];
                let options = CheckoutOptions {
                    order,
                    description: course.title.clone(),
                    line_items,
                    prefill: CheckoutPrefill {
                        name: user.name.clone(),
                        email: user.email.clone(),
                    },
                };

                let verify_notifications = notifications.clone();
                let on_success = Callback::from(move |result: PaymentResult| {
                    let enrolled = enrolled.clone();
                    let notifications = verify_notifications.clone();
                    spawn_local(async move {
                        let client = CampusBridgeClient::shared();
                        let response = client
                            .verify_payment(&VerifyPaymentRequest::from(result))
                            .await;
                        match response.into_result() {
                            Ok(outcome) if outcome.verified => enrolled.set(true),
                            Ok(_) => notifications.reduce_mut(|state| {
                                state.push("payment could not be verified");
                            }),
                            Err(message) => {
                                notifications.reduce_mut(|state| state.push(message));
                            }
                        }
                    });
                });
                let error_notifications = notifications.clone();
                let on_error = Callback::from(move |message: String| {
                    error_notifications.reduce_mut(|state| state.push(message));
                });
                open_checkout(&options, on_success, on_error);
            });
        })
    };

    if *loading {
        return html! { <Loading /> };
    }

    match (*course).clone() {
        None => html! {
            <div class="alert">
                <span>{"Course not found. Browse the catalog for current offerings."}</span>
            </div>
        },
        Some(course) => {
            let price = if course.price_inr == 0 {
                "Free".to_string()
            } else {
                format!("₹{}", course.price_inr)
            };
            html! {
                <div class="max-w-2xl mx-auto space-y-4">
                    <h1 class="text-3xl font-bold">{ course.title.clone() }</h1>
                    <div class="flex gap-3 text-sm text-base-content/70">
                        <span class="badge badge-outline">{ course.category.to_string() }</span>
                        <span>{ format!("{} weeks", course.duration_weeks) }</span>
                        <span>{ price }</span>
                    </div>
                    <p>{ course.summary.clone() }</p>
                    if *enrolled {
                        <div class="alert alert-success">
                            <span>{"You're enrolled. See your dashboard for next steps."}</span>
                        </div>
                    } else {
                        <button class="btn btn-primary" onclick={on_enroll}>
                            {"Enroll now"}
                        </button>
                    }
                </div>
            }
        }
    }
}
