//! Stacked transient notifications.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders the live toasts from [`ToastState`] and drives their lifecycle
//! with fire-and-forget timer tasks. Each toast's chain re-checks the state
//! at every step, so an early dismissal (click) simply strands the rest of
//! the chain as no-ops. Toasts are uncapped and independent; rapid callers
//! get overlapping toasts, not a queue.

use leptos::prelude::*;

use crate::state::toasts::{Severity, ToastState};
#[cfg(feature = "hydrate")]
use crate::state::toasts::{ENTER_DELAY_MS, LEAVE_MS, ToastPhase, VISIBLE_MS};

/// Show a toast and schedule its enter/hold/leave transitions.
pub fn show_toast(toasts: RwSignal<ToastState>, message: impl Into<String>, severity: Severity) {
    let message = message.into();
    let Some(id) = toasts.try_update(|s| s.push(message, severity)) else {
        return;
    };
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_millis(ENTER_DELAY_MS)).await;
            if toasts.try_update(|s| s.advance(id, ToastPhase::Entering)) != Some(true) {
                return;
            }
            gloo_timers::future::sleep(std::time::Duration::from_millis(VISIBLE_MS)).await;
            if toasts.try_update(|s| s.advance(id, ToastPhase::Visible)) != Some(true) {
                return;
            }
            gloo_timers::future::sleep(std::time::Duration::from_millis(LEAVE_MS)).await;
            let _ = toasts.try_update(|s| s.remove(id));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
    }
}

/// Dismiss a toast ahead of schedule: fade it out now and remove it after
/// the leave transition. The toast's original timer chain stops on its own.
fn dismiss_toast(toasts: RwSignal<ToastState>, id: u64) {
    if toasts.try_update(|s| s.dismiss(id)) != Some(true) {
        return;
    }
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_millis(LEAVE_MS)).await;
            let _ = toasts.try_update(|s| s.remove(id));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = toasts.try_update(|s| s.remove(id));
    }
}

/// Fixed-position stack of live toasts. Click a toast to dismiss it early.
#[component]
pub fn ToastStack() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-stack">
            {move || {
                toasts
                    .get()
                    .toasts()
                    .iter()
                    .map(|toast| {
                        let id = toast.id;
                        let class = format!("toast {} {}", toast.severity.css_class(), toast.phase.css_class());
                        let message = toast.message.clone();
                        view! {
                            <div class=class on:click=move |_| dismiss_toast(toasts, id)>
                                {message}
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
