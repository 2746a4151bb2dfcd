//! Storefront page: product inventory, cart actions, totals, and mobile
//! chrome.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the landing route. It loads the persisted cart and the product
//! collection once the page is live, and wires every interactive surface
//! (add-to-cart, calculate-total, the new-product form, the swipe-aware
//! drawer) to the shared state contexts. Failed requests surface as error
//! toasts and are never retried.

#[cfg(test)]
#[path = "storefront_test.rs"]
mod storefront_test;

use leptos::prelude::*;

use crate::components::mobile_nav::{MobileNav, finish_touch_gesture, record_touch_start};
use crate::components::price_field::PriceField;
use crate::components::toast_stack::{ToastStack, show_toast};
use crate::net::http::HttpClient;
use crate::net::types::{NewProduct, Product};
use crate::state::cart::CartState;
use crate::state::nav::NavState;
use crate::state::toasts::{Severity, ToastState};

fn product_count_label(count: usize) -> String {
    format!("Total: {count} products")
}

fn format_total_amount(total: f64) -> String {
    format!("${total:.2}")
}

/// Validate the new-product form fields into a request payload.
fn parse_new_product(name: &str, price: &str) -> Result<NewProduct, &'static str> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Enter a product name first.");
    }
    let price: f64 = price.trim().parse().map_err(|_| "Enter a valid price first.")?;
    if !(0.0..=crate::util::price::PRICE_CEILING).contains(&price) {
        return Err("Price is out of bounds.");
    }
    Ok(NewProduct { name: name.to_owned(), price })
}

/// Storefront landing page.
#[component]
pub fn StorefrontPage() -> impl IntoView {
    let http = expect_context::<HttpClient>();
    let cart = expect_context::<RwSignal<CartState>>();
    let nav = expect_context::<RwSignal<NavState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let products = RwSignal::new(Vec::<Product>::new());
    let product_count = RwSignal::new(None::<usize>);
    let total = RwSignal::new(None::<f64>);
    let new_name = RwSignal::new(String::new());
    let new_price = RwSignal::new(String::new());

    // One-shot page init: restore the cart, make tables scrollable, and
    // request the product collection.
    Effect::new(move || {
        cart.set(CartState::load());
        crate::util::tables::enable_responsive_tables();
        load_products(http, products, product_count, toasts);
    });

    let on_add_to_cart = move |product_id: i64| {
        cart.update(|c| {
            c.add(product_id, crate::util::time::now_iso());
            c.persist();
        });
        show_toast(toasts, "Product added to cart!", Severity::Success);
    };

    let on_calculate = move |_| request_total(http, total, toasts);

    let on_create = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match parse_new_product(&new_name.get_untracked(), &new_price.get_untracked()) {
            Ok(payload) => {
                submit_new_product(http, payload, products, product_count, toasts);
                new_name.set(String::new());
                new_price.set(String::new());
            }
            Err(message) => show_toast(toasts, message, Severity::Warning),
        }
    };

    let on_touch_start = move |ev: leptos::ev::TouchEvent| record_touch_start(nav, &ev);
    let on_touch_end = move |ev: leptos::ev::TouchEvent| finish_touch_gesture(nav, &ev);

    view! {
        <div class="storefront-page" on:touchstart=on_touch_start on:touchend=on_touch_end>
            <MobileNav/>

            <header class="storefront-page__header toolbar">
                <span class="toolbar__title">"Storefront"</span>
                <span class="toolbar__spacer"></span>
                <span class="cart-count" title="Items in cart">{move || cart.get().total_items()}</span>
            </header>

            <p class="product-count">
                {move || product_count.get().map_or_else(|| "Loading products...".to_owned(), product_count_label)}
            </p>

            <button class="btn" on:click=on_calculate>"Calculate Total"</button>
            <Show when=move || total.get().is_some()>
                <div id="total-display" class="total-display">
                    "Grand total: "
                    <span id="total-amount">
                        {move || total.get().map(format_total_amount).unwrap_or_default()}
                    </span>
                </div>
            </Show>

            <div class="storefront-page__products">
                <table>
                    <thead>
                        <tr>
                            <th>"Name"</th>
                            <th>"Price"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            products
                                .get()
                                .into_iter()
                                .map(|p| {
                                    let id = p.id;
                                    view! {
                                        <tr>
                                            <td>{p.name}</td>
                                            <td>{format_total_amount(p.price)}</td>
                                            <td>
                                                <button class="btn btn--primary" on:click=move |_| on_add_to_cart(id)>
                                                    "Add to cart"
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </tbody>
                </table>
            </div>

            <form class="storefront-page__new-product" on:submit=on_create>
                <input
                    class="storefront-page__name-input"
                    type="text"
                    placeholder="Product name"
                    prop:value=move || new_name.get()
                    on:input=move |ev| new_name.set(event_target_value(&ev))
                />
                <PriceField value=new_price/>
                <button class="btn btn--primary" type="submit">"Add Product"</button>
            </form>

            <ToastStack/>
        </div>
    }
}

fn load_products(
    http: HttpClient,
    products: RwSignal<Vec<Product>>,
    product_count: RwSignal<Option<usize>>,
    toasts: RwSignal<ToastState>,
) {
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_products(http).await {
                Ok(list) => {
                    log::info!("loaded {} products", list.len());
                    product_count.set(Some(list.len()));
                    products.set(list);
                }
                Err(err) => {
                    log::error!("failed to load products: {err}");
                    show_toast(toasts, "Failed to load products!", Severity::Error);
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (http, products, product_count, toasts);
    }
}

fn request_total(http: HttpClient, total: RwSignal<Option<f64>>, toasts: RwSignal<ToastState>) {
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            match crate::net::api::calculate_total(http).await {
                Ok(resp) => {
                    log::info!("exact total (decimal): {}", resp.precision);
                    total.set(Some(resp.total_value));
                    show_toast(toasts, "Total calculated!", Severity::Success);
                }
                Err(err) => {
                    log::error!("failed to calculate total: {err}");
                    show_toast(toasts, "Failed to calculate total!", Severity::Error);
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (http, total, toasts);
    }
}

fn submit_new_product(
    http: HttpClient,
    payload: NewProduct,
    products: RwSignal<Vec<Product>>,
    product_count: RwSignal<Option<usize>>,
    toasts: RwSignal<ToastState>,
) {
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            match crate::net::api::create_product(http, &payload).await {
                Ok(created) => {
                    log::info!("created product {}", created.id);
                    products.update(|list| list.push(created));
                    product_count.set(Some(products.get_untracked().len()));
                    show_toast(toasts, "Product created!", Severity::Success);
                }
                Err(err) => {
                    log::error!("failed to create product: {err}");
                    show_toast(toasts, "Failed to create product!", Severity::Error);
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (http, payload, products, product_count, toasts);
    }
}
