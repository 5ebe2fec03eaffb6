//! Bridge to the hosted payment-checkout widget.
//!
//! The widget owns its modal lifecycle and calls exactly one of the two
//! callbacks it is given. The client never retries a failed payment on its
//! own; failures surface to the user as a dismissible notification.

use js_sys::{Array, Object, Reflect};
use shared::models::{LineItem, PaymentOrder, PaymentResult};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use yew::Callback;

#[wasm_bindgen]
extern "C" {
    /// Entry point exposed by the checkout script loaded in index.html.
    #[wasm_bindgen(js_name = openCheckout)]
    fn open_checkout_widget(options: &JsValue);
}

/// Identity pre-filled into the payment sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutPrefill {
    pub name: String,
    pub email: String,
}

/// Everything the widget needs to present an order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutOptions {
    pub order: PaymentOrder,
    pub description: String,
    pub line_items: Vec<LineItem>,
    pub prefill: CheckoutPrefill,
}

/// Open the checkout modal. `on_success` receives the settled payment;
/// `on_error` receives a display-ready message. The widget guarantees that
/// exactly one of the two fires.
pub fn open_checkout(
    options: &CheckoutOptions,
    on_success: Callback<PaymentResult>,
    on_error: Callback<String>,
) {
    let object = Object::new();
    set(&object, "orderId", &options.order.order_id.as_str().into());
    #[allow(clippy::cast_precision_loss)]
    set(&object, "amount", &(options.order.amount as f64).into());
    set(&object, "currency", &options.order.currency.as_str().into());
    set(&object, "description", &options.description.as_str().into());

    let items = Array::new();
    for item in &options.line_items {
        let entry = Object::new();
        set(&entry, "label", &item.label.as_str().into());
        #[allow(clippy::cast_precision_loss)]
        set(&entry, "amount", &(item.amount as f64).into());
        items.push(&entry);
    }
    set(&object, "lineItems", &items.into());

    let prefill = Object::new();
    set(&prefill, "name", &options.prefill.name.as_str().into());
    set(&prefill, "email", &options.prefill.email.as_str().into());
    set(&object, "prefill", &prefill.into());

    let parse_error = on_error.clone();
    let success = Closure::once_into_js(move |value: JsValue| match parse_payment_result(&value) {
        Some(result) => on_success.emit(result),
        None => parse_error.emit("payment succeeded but the result was unreadable".to_string()),
    });
    set(&object, "onSuccess", &success);

    let failure = Closure::once_into_js(move |value: JsValue| {
        let message = value
            .as_string()
            .or_else(|| string_field(&value, "message"))
            .unwrap_or_else(|| "payment failed".to_string());
        on_error.emit(message);
    });
    set(&object, "onError", &failure);

    open_checkout_widget(&object);
}

fn parse_payment_result(value: &JsValue) -> Option<PaymentResult> {
    Some(PaymentResult {
        order_id: string_field(value, "orderId")?,
        payment_id: string_field(value, "paymentId")?,
        signature: string_field(value, "signature")?,
    })
}

fn string_field(value: &JsValue, key: &str) -> Option<String> {
    Reflect::get(value, &JsValue::from_str(key))
        .ok()
        .and_then(|field| field.as_string())
}

fn set(target: &Object, key: &str, value: &JsValue) {
    // Reflect::set only fails on non-objects, which we construct ourselves.
    let _ = Reflect::set(target, &JsValue::from_str(key), value);
}
