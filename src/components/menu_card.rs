//! Menu Card Component

use leptos::prelude::*;

use crate::models::MenuItem;
use crate::store::{AppStateStoreFields, category_title, store_add_to_cart, use_app_store};

/// One menu item with an "Add to cart" button
///
/// # Arguments
/// * `item` - Menu item to show
/// * `on_added` - Called with the item title after it went into the cart
#[component]
pub fn MenuCard(item: MenuItem, #[prop(into)] on_added: Callback<String>) -> impl IntoView {
    let store = use_app_store();
    let id = item.id;
    let category = category_title(&store, item.category);
    let in_cart = move || store.cart().read().quantity_of(id);
    let image = item.image.clone();
    let title = item.title.clone();

    let add = {
        let item = item.clone();
        move |_| {
            store_add_to_cart(&store, &item);
            on_added.run(item.title.clone());
        }
    };

    view! {
        <div class="col">
            <div class="card h-100 shadow-sm menu-card">
                {image.map(|src| view! {
                    <img class="card-img-top" src=src alt=title.clone() />
                })}
                <div class="card-body d-flex flex-column">
                    <h5 class="card-title">
                        {item.title.clone()}
                        {item.featured.then(|| view! {
                            <span class="badge bg-warning text-dark ms-2">"Featured"</span>
                        })}
                    </h5>
                    {category.map(|c| view! { <p class="card-subtitle text-muted mb-2">{c}</p> })}
                    <p class="card-text fs-5 mt-auto">{item.price.to_string()}</p>
                    <button class="btn btn-dark" on:click=add>
                        "Add to cart"
                        {move || in_cart().map(|qty| view! {
                            <span class="badge bg-light text-dark ms-2">{qty}</span>
                        })}
                    </button>
                </div>
            </div>
        </div>
    }
}
