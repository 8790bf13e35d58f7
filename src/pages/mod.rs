//! Routed Pages
//!
//! One component per route in `AppRoute`.

mod menu;
mod cart;
mod login;
mod orders;
mod not_found;
pub mod admin;

pub use menu::MenuPage;
pub use cart::CartPage;
pub use login::LoginPage;
pub use orders::OrdersPage;
pub use not_found::NotFound;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::lifecycle::MountGuard;
use crate::store::{AppStore, store_set_categories, store_set_menu_items};

/// Fetch categories and menu items into the shared store.
/// Errors land in `set_error`; the previous cache keeps rendering.
pub(crate) fn load_menu(store: AppStore, guard: MountGuard, set_error: WriteSignal<Option<String>>) {
    spawn_local(async move {
        let categories = api::list_categories().await;
        let items = api::list_menu_items().await;
        if !guard.check("menu") {
            return;
        }
        match categories {
            Ok(list) => store_set_categories(&store, list),
            Err(e) => log::warn!("[MENU] Categories unavailable: {}", e),
        }
        match items {
            Ok(list) => {
                log::debug!("[MENU] Loaded {} menu items", list.len());
                store_set_menu_items(&store, list);
            }
            Err(e) => set_error.set(Some(e.to_string())),
        }
    });
}
