//! Shared HTTP client with session-expiry interception.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every component holds this client via context instead of reaching for an
//! ambient fetch, so the cross-cutting behaviors live in exactly one place:
//! cookies are always sent same-origin, and a 401 on any request sends the
//! user to the login page after a short alert, whatever the caller does with
//! the response.
//!
//! ERROR HANDLING
//! ==============
//! A 401 response is still handed back to the caller unchanged, so callers
//! that inspect statuses themselves run their own error path as well; the
//! redirect fires regardless.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

#[cfg(feature = "hydrate")]
use gloo_net::http::{Request, Response};
#[cfg(feature = "hydrate")]
use serde::Serialize;

/// Where an expired session lands.
pub const LOGIN_REDIRECT: &str = "/login";

/// Delay before the session-expired alert and redirect fire.
pub const UNAUTHORIZED_DELAY_MS: u64 = 100;

#[cfg(any(test, feature = "hydrate"))]
fn is_unauthorized(status: u16) -> bool {
    status == 401
}

#[cfg(any(test, feature = "hydrate"))]
fn session_expired_alert() -> &'static str {
    "Your session has expired. Please log in again."
}

/// HTTP client injected into every component via Leptos context.
///
/// Stateless; the value exists so callers go through the interception point
/// rather than building requests ad hoc.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpClient;

#[cfg(feature = "hydrate")]
impl HttpClient {
    /// `GET` a path with same-origin credentials.
    ///
    /// # Errors
    ///
    /// Returns an error string on transport failure.
    pub async fn get(self, path: &str) -> Result<Response, String> {
        let resp = Request::get(path)
            .credentials(web_sys::RequestCredentials::SameOrigin)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        Ok(intercept(resp))
    }

    /// `POST` a JSON body to a path with same-origin credentials.
    ///
    /// # Errors
    ///
    /// Returns an error string if the body fails to serialize or on
    /// transport failure.
    pub async fn post_json<B: Serialize>(self, path: &str, body: &B) -> Result<Response, String> {
        let resp = Request::post(path)
            .credentials(web_sys::RequestCredentials::SameOrigin)
            .json(body)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        Ok(intercept(resp))
    }
}

/// Inspect a response for session expiry before handing it to the caller.
#[cfg(feature = "hydrate")]
fn intercept(resp: Response) -> Response {
    if is_unauthorized(resp.status()) {
        log::warn!("401 Unauthorized - session expired, redirecting to {LOGIN_REDIRECT}");
        schedule_login_redirect();
    }
    resp
}

/// After the fixed delay, alert the user and navigate to the login page.
#[cfg(feature = "hydrate")]
fn schedule_login_redirect() {
    leptos::task::spawn_local(async {
        gloo_timers::future::sleep(std::time::Duration::from_millis(UNAUTHORIZED_DELAY_MS)).await;
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(session_expired_alert());
            let _ = window.location().set_href(LOGIN_REDIRECT);
        }
    });
}
