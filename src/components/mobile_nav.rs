//! Slide-in mobile navigation drawer.
//!
//! SYSTEM CONTEXT
//! ==============
//! Projects [`NavState`] onto the sidebar/overlay CSS classes, the toggle
//! glyph, and the body scroll lock. State transitions come from the toggle
//! button, the overlay tap, viewport resizes past the desktop breakpoint,
//! and the page-level swipe gesture handlers exported here.

#[cfg(test)]
#[path = "mobile_nav_test.rs"]
mod mobile_nav_test;

use leptos::prelude::*;

use crate::state::nav::NavState;
#[cfg(feature = "hydrate")]
use crate::state::nav::HAPTIC_PULSE_MS;

fn sidebar_class(nav: &NavState) -> &'static str {
    if nav.is_open() { "sidebar active" } else { "sidebar" }
}

fn overlay_class(nav: &NavState) -> &'static str {
    if nav.is_open() { "sidebar-overlay active" } else { "sidebar-overlay" }
}

/// Toggle button, sidebar panel, and backdrop overlay.
#[component]
pub fn MobileNav() -> impl IntoView {
    let nav = expect_context::<RwSignal<NavState>>();

    // Lock body scrolling exactly while the drawer is open; this also
    // releases the lock when a resize forces the drawer closed.
    Effect::new(move || {
        set_body_scroll_lock(nav.get().is_open());
    });

    #[cfg(feature = "hydrate")]
    {
        let handle = window_event_listener(leptos::ev::resize, move |_| {
            if let Some(width) = viewport_width() {
                nav.update(|n| n.handle_resize(width));
            }
        });
        on_cleanup(move || handle.remove());
    }

    let on_toggle = move |_| {
        nav.update(|n| {
            n.toggle();
        });
        pulse_haptics();
    };
    let on_overlay = move |_| nav.update(|n| n.close());

    view! {
        <button class="mobile-nav-toggle" on:click=on_toggle title="Toggle navigation">
            {move || nav.get().toggle_glyph()}
        </button>
        <aside class=move || sidebar_class(&nav.get())>
            <nav class="sidebar__links">
                <a href="/">"Products"</a>
                <a href="/login">"Account"</a>
            </nav>
        </aside>
        <div class=move || overlay_class(&nav.get()) on:click=on_overlay></div>
    }
}

/// Record the starting X coordinate of a page-level touch gesture.
pub fn record_touch_start(nav: RwSignal<NavState>, ev: &leptos::ev::TouchEvent) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(x) = changed_touch_x(ev) {
            nav.update(|n| n.touch_start(x));
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (nav, ev);
    }
}

/// Complete a page-level touch gesture; an open drawer closes on a long
/// enough leftward swipe.
pub fn finish_touch_gesture(nav: RwSignal<NavState>, ev: &leptos::ev::TouchEvent) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(x) = changed_touch_x(ev) {
            nav.update(|n| {
                n.touch_end(x);
            });
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (nav, ev);
    }
}

#[cfg(feature = "hydrate")]
fn changed_touch_x(ev: &leptos::ev::TouchEvent) -> Option<f64> {
    ev.changed_touches().get(0).map(|touch| f64::from(touch.screen_x()))
}

#[cfg(feature = "hydrate")]
fn viewport_width() -> Option<f64> {
    web_sys::window().and_then(|w| w.inner_width().ok()).and_then(|v| v.as_f64())
}

fn set_body_scroll_lock(locked: bool) {
    #[cfg(feature = "hydrate")]
    {
        let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) else {
            return;
        };
        let style = body.style();
        if locked {
            let _ = style.set_property("overflow", "hidden");
        } else {
            let _ = style.remove_property("overflow");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = locked;
    }
}

fn pulse_haptics() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.navigator().vibrate_with_duration(HAPTIC_PULSE_MS);
        }
    }
}
