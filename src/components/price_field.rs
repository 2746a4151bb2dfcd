//! Price input with live bounds validation and blur-time formatting.
//!
//! Validation failures set the input's native custom validity (blocking form
//! submission) and raise a warning toast; they never block further typing.

use leptos::prelude::*;

use crate::components::toast_stack::show_toast;
use crate::state::toasts::{Severity, ToastState};
use crate::util::price::{self, PriceValidity};

/// Numeric price field bound to `value`.
#[component]
pub fn PriceField(value: RwSignal<String>) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    let on_input = move |ev: leptos::ev::Event| {
        let raw = event_target_value(&ev);
        let validity = price::validate(&raw);
        set_field_validity(&ev, validity);
        if !validity.is_valid() {
            show_toast(toasts, format!("{}!", validity.message()), Severity::Warning);
        }
        value.set(raw);
    };

    let on_blur = move |_| {
        if let Some(formatted) = price::format_on_blur(&value.get_untracked()) {
            value.set(formatted);
        }
    };

    view! {
        <input
            id="price"
            class="price-field"
            type="number"
            step="0.01"
            placeholder="0.00"
            prop:value=move || value.get()
            on:input=on_input
            on:blur=on_blur
        />
    }
}

fn set_field_validity(ev: &leptos::ev::Event, validity: PriceValidity) {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        if let Some(input) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok()) {
            input.set_custom_validity(validity.message());
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (ev, validity);
    }
}
