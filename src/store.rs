//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.
//! Holds the client-side cart and the menu cache shared by the public menu,
//! the cart and the menu manager.

use leptos::prelude::*;
use reactive_stores::Store;

use rms_domain::{Cart, Category, MenuItem, remove_by_id, replace_by_id};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Client-side cart
    pub cart: Cart,
    /// Last fetched menu items
    pub menu_items: Vec<MenuItem>,
    /// Last fetched categories
    pub categories: Vec<Category>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Add one unit of a menu item to the cart
pub fn store_add_to_cart(store: &AppStore, item: &MenuItem) {
    store.cart().write().add(item);
}

/// Change a cart line's quantity by `delta` (dropping below 1 removes it)
pub fn store_adjust_cart(store: &AppStore, menu_item_id: u32, delta: i64) {
    store.cart().write().adjust(menu_item_id, delta);
}

/// Remove a line from the cart
pub fn store_remove_from_cart(store: &AppStore, menu_item_id: u32) {
    store.cart().write().remove(menu_item_id);
}

pub fn store_clear_cart(store: &AppStore) {
    store.cart().write().clear();
}

/// Replace the cached menu after a fetch
pub fn store_set_menu_items(store: &AppStore, items: Vec<MenuItem>) {
    *store.menu_items().write() = items;
}

pub fn store_set_categories(store: &AppStore, categories: Vec<Category>) {
    *store.categories().write() = categories;
}

/// Add a freshly created menu item
pub fn store_add_menu_item(store: &AppStore, item: MenuItem) {
    store.menu_items().write().push(item);
}

/// Update a menu item in the store by ID
pub fn store_update_menu_item(store: &AppStore, updated: MenuItem) {
    let field = store.menu_items();
    let mut items = field.write();
    replace_by_id(items.as_mut_slice(), updated);
}

/// Remove a menu item from the store by ID
pub fn store_remove_menu_item(store: &AppStore, id: u32) {
    let field = store.menu_items();
    let mut items = field.write();
    remove_by_id(&mut *items, id);
}

/// Category title for display, if known
pub fn category_title(store: &AppStore, id: Option<u32>) -> Option<String> {
    let id = id?;
    store
        .categories()
        .read()
        .iter()
        .find(|c| c.id == id)
        .map(|c| c.title.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rms_domain::Money;

    fn dish(id: u32, featured: bool) -> MenuItem {
        MenuItem {
            id,
            title: format!("Dish {}", id),
            price: Money::from_cents(900),
            category: Some(1),
            featured,
            image: None,
        }
    }

    #[test]
    fn test_menu_cache_helpers() {
        let owner = Owner::new();
        owner.with(|| {
            let store = Store::new(AppState::default());
            store_set_menu_items(&store, vec![dish(1, false), dish(2, false)]);
            store_add_menu_item(&store, dish(3, false));

            store_update_menu_item(&store, dish(2, true));
            store_remove_menu_item(&store, 1);

            let items = store.menu_items().get_untracked();
            let ids: Vec<u32> = items.iter().map(|m| m.id).collect();
            assert_eq!(ids, vec![2, 3]);
            assert!(items[0].featured);
        });
    }

    #[test]
    fn test_cart_helpers() {
        let owner = Owner::new();
        owner.with(|| {
            let store = Store::new(AppState::default());
            store_add_to_cart(&store, &dish(4, false));
            store_add_to_cart(&store, &dish(4, false));
            store_adjust_cart(&store, 4, -1);
            assert_eq!(store.cart().read_untracked().quantity_of(4), Some(1));

            store_remove_from_cart(&store, 4);
            assert!(store.cart().read_untracked().is_empty());
        });
    }
}
