//! Login landing page.
//!
//! Authentication is owned by the backend; this page hosts the classic
//! server-posted credential form so the session-expiry redirect has an
//! in-app destination.

use leptos::prelude::*;

#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Storefront"</h1>
                <p class="login-card__subtitle">"Sign in to continue"</p>
                <form class="login-form" method="post" action="/login">
                    <input
                        class="login-input"
                        type="text"
                        name="username"
                        placeholder="Username"
                        autocomplete="username"
                    />
                    <input
                        class="login-input"
                        type="password"
                        name="password"
                        placeholder="Password"
                        autocomplete="current-password"
                    />
                    <button class="login-button" type="submit">"Sign In"</button>
                </form>
            </div>
        </div>
    }
}
