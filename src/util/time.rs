//! Wall-clock access for timestamping persisted records.

/// Current time as an ISO-8601 string, matching the format persisted cart
/// entries have always carried. Empty on the server, where no cart mutation
/// can originate.
#[must_use]
pub fn now_iso() -> String {
    #[cfg(feature = "hydrate")]
    {
        String::from(js_sys::Date::new_0().to_iso_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}
