//! Cart Page
//!
//! The cart lives client-side until checkout. Placing an order replaces the
//! backend cart with the client lines and turns it into an order.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use crate::api;
use crate::components::ErrorBanner;
use crate::context::use_session;
use crate::lifecycle::MountGuard;
use crate::models::{AppRoute, CartLine};
use crate::store::{
    AppStateStoreFields, store_adjust_cart, store_clear_cart, store_remove_from_cart, use_app_store,
};

/// Replace the backend cart with `lines` and place an order from it
async fn checkout(token: Option<String>, lines: Vec<CartLine>) -> rms_domain::ApiResult<()> {
    let token = api::require_token(token.as_deref())?.to_string();
    api::clear_server_cart(Some(&token)).await?;
    for line in &lines {
        api::push_cart_line(Some(&token), line).await?;
    }
    api::place_order(Some(&token)).await
}

#[component]
pub fn CartPage() -> impl IntoView {
    let store = use_app_store();
    let session = use_session();
    let guard = MountGuard::new();
    let (error, set_error) = signal(None::<String>);
    let (placing, set_placing) = signal(false);
    let (placed, set_placed) = signal(false);

    let is_empty = move || store.cart().read().is_empty();
    let total = move || store.cart().read().total().to_string();

    let place_order = Callback::new(move |_: ()| {
        if placing.get_untracked() {
            return;
        }
        let lines = store.cart().read_untracked().lines().to_vec();
        if lines.is_empty() {
            return;
        }
        set_error.set(None);
        set_placing.set(true);
        let token = session.token_value();
        let guard = guard.clone();
        spawn_local(async move {
            let result = checkout(token, lines).await;
            if !guard.check("checkout") {
                return;
            }
            match result {
                Ok(()) => {
                    log::info!("[CART] Order placed");
                    store_clear_cart(&store);
                    set_placed.set(true);
                }
                // Cart is kept so the user can retry
                Err(e) => set_error.set(Some(e.to_string())),
            }
            set_placing.set(false);
        });
    });

    view! {
        <div class="container py-4">
            <h1 class="mb-4">"Cart"</h1>

            <ErrorBanner error=error set_error=set_error />

            <Show when=move || placed.get()>
                <div class="alert alert-success">
                    "Your order was placed. "
                    <A href=AppRoute::Orders.path()>"View orders"</A>
                </div>
            </Show>

            <Show
                when=move || !is_empty()
                fallback=|| view! { <p class="text-muted">"Your cart is empty."</p> }
            >
                <table class="table align-middle">
                    <thead>
                        <tr>
                            <th>"Item"</th>
                            <th>"Price"</th>
                            <th>"Quantity"</th>
                            <th>"Total"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || store.cart().read().lines().to_vec()
                            key=|line| (line.menu_item_id, line.quantity)
                            children=move |line| {
                                let id = line.menu_item_id;
                                view! {
                                    <tr>
                                        <td>{line.title.clone()}</td>
                                        <td>{line.unit_price.to_string()}</td>
                                        <td>
                                            <div class="btn-group btn-group-sm">
                                                <button
                                                    class="btn btn-outline-secondary"
                                                    on:click=move |_| store_adjust_cart(&store, id, -1)
                                                >
                                                    "-"
                                                </button>
                                                <span class="btn btn-light disabled">{line.quantity}</span>
                                                <button
                                                    class="btn btn-outline-secondary"
                                                    on:click=move |_| store_adjust_cart(&store, id, 1)
                                                >
                                                    "+"
                                                </button>
                                            </div>
                                        </td>
                                        <td>{line.line_total().to_string()}</td>
                                        <td>
                                            <button
                                                class="btn btn-sm btn-outline-danger"
                                                on:click=move |_| store_remove_from_cart(&store, id)
                                            >
                                                "Remove"
                                            </button>
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>

                <div class="d-flex justify-content-between align-items-center">
                    <button class="btn btn-outline-secondary" on:click=move |_| store_clear_cart(&store)>
                        "Clear cart"
                    </button>
                    <div class="d-flex align-items-center gap-3">
                        <span class="fs-5 fw-bold">"Total: " {total}</span>
                        <Show
                            when=move || session.is_logged_in()
                            fallback=|| view! {
                                <A href=AppRoute::Login.path() attr:class="btn btn-dark">"Login to order"</A>
                            }
                        >
                            <button
                                class="btn btn-dark"
                                prop:disabled=move || placing.get()
                                on:click=move |_| place_order.run(())
                            >
                                {move || if placing.get() { "Placing order..." } else { "Place order" }}
                            </button>
                        </Show>
                    </div>
                </div>
            </Show>
        </div>
    }
}
