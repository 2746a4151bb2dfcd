//! Mobile-friendly horizontal scrolling for data tables.
//!
//! Wraps every `<table>` on the page in a scroll container so wide tables
//! pan instead of overflowing the viewport on small screens. Safe to call
//! more than once: already-wrapped tables are skipped.

/// Marker class carried by the scroll container.
pub const RESPONSIVE_WRAPPER_CLASS: &str = "table-responsive";

/// Wrap every unwrapped table in a horizontally scrollable container.
pub fn enable_responsive_tables() {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let Ok(tables) = document.query_selector_all("table") else {
            return;
        };
        for index in 0..tables.length() {
            let Some(table) = tables.item(index).and_then(|n| n.dyn_into::<web_sys::Element>().ok()) else {
                continue;
            };
            let Some(parent) = table.parent_element() else {
                continue;
            };
            if parent.class_list().contains(RESPONSIVE_WRAPPER_CLASS) {
                continue;
            }
            let Ok(wrapper) = document.create_element("div") else {
                continue;
            };
            wrapper.set_class_name(RESPONSIVE_WRAPPER_CLASS);
            let _ = parent.insert_before(&wrapper, Some(table.as_ref()));
            let _ = wrapper.append_child(&table);
        }
    }
}
