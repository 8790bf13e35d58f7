//! Menu Manager
//!
//! Create, feature and delete menu items. The shared menu cache is patched
//! only after the backend accepted a write.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{DeleteConfirmButton, ErrorBanner};
use crate::context::use_session;
use crate::lifecycle::MountGuard;
use crate::models::{MenuItem, Money, NewMenuItem};
use crate::pages::load_menu;
use crate::store::{
    AppStateStoreFields, category_title, store_add_menu_item, store_remove_menu_item,
    store_update_menu_item, use_app_store,
};

/// Raw form input
#[derive(Debug, Clone, Default)]
struct MenuItemForm {
    title: String,
    price: String,
    category: String,
    featured: bool,
}

impl MenuItemForm {
    /// Parse and validate into a create request
    fn to_request(&self) -> Result<NewMenuItem<'_>, String> {
        let price = Money::parse(&self.price).ok_or_else(|| "Price must be a number like 12.50.".to_string())?;
        let category = self
            .category
            .parse::<u32>()
            .map_err(|_| "Choose a category.".to_string())?;
        let request = NewMenuItem {
            title: self.title.trim(),
            price,
            category,
            featured: self.featured,
        };
        request.validate()?;
        Ok(request)
    }
}

/// Featured flag of a cached item
fn featured_in(items: &[MenuItem], id: u32) -> Option<bool> {
    items.iter().find(|m| m.id == id).map(|m| m.featured)
}

/// Value a toggle click asks the backend for, from the cache rather than
/// the checkbox state
fn next_featured(items: &[MenuItem], id: u32) -> Option<bool> {
    featured_in(items, id).map(|featured| !featured)
}

#[component]
pub fn MenuManager() -> impl IntoView {
    let session = use_session();
    let store = use_app_store();
    let guard = MountGuard::new();
    let (error, set_error) = signal(None::<String>);
    let (form, set_form) = signal(MenuItemForm::default());
    let (saving, set_saving) = signal(false);
    // Item with a featured/delete request in flight
    let (busy_id, set_busy_id) = signal(None::<u32>);
    // Bumped when a toggle click was ignored or failed, so checkboxes
    // snap back to the cached value
    let (checkbox_resets, set_checkbox_resets) = signal(0u32);

    load_menu(store, guard.clone(), set_error);

    let on_create = {
        let guard = guard.clone();
        move |ev: web_sys::SubmitEvent| {
            ev.prevent_default();
            if saving.get_untracked() {
                return;
            }
            let input = form.get_untracked();
            // Validate before touching the network
            if let Err(message) = input.to_request() {
                set_error.set(Some(message));
                return;
            }
            set_error.set(None);
            set_saving.set(true);
            let token = session.token_value();
            let guard = guard.clone();
            spawn_local(async move {
                let result = match input.to_request() {
                    Ok(request) => api::create_menu_item(token.as_deref(), &request).await,
                    Err(message) => Err(rms_domain::ApiError::Decode(message)),
                };
                if !guard.check("create menu item") {
                    return;
                }
                match result {
                    Ok(created) => {
                        log::info!("[MENU] Created menu item #{}", created.id);
                        store_add_menu_item(&store, created);
                        set_form.set(MenuItemForm::default());
                    }
                    Err(e) => set_error.set(Some(e.to_string())),
                }
                set_saving.set(false);
            });
        }
    };

    let toggle_featured = {
        let guard = guard.clone();
        Callback::new(move |id: u32| {
            let featured = next_featured(&store.menu_items().read_untracked(), id);
            let Some(featured) = featured.filter(|_| busy_id.get_untracked().is_none()) else {
                set_checkbox_resets.update(|n| *n += 1);
                return;
            };
            set_busy_id.set(Some(id));
            let token = session.token_value();
            let guard = guard.clone();
            spawn_local(async move {
                let result = api::set_featured(token.as_deref(), id, featured).await;
                if !guard.check("toggle featured") {
                    return;
                }
                match result {
                    Ok(updated) => store_update_menu_item(&store, updated),
                    Err(e) => {
                        set_error.set(Some(e.to_string()));
                        set_checkbox_resets.update(|n| *n += 1);
                    }
                }
                set_busy_id.set(None);
            });
        })
    };

    let delete_item = Callback::new(move |id: u32| {
        if busy_id.get_untracked().is_some() {
            return;
        }
        set_busy_id.set(Some(id));
        let token = session.token_value();
        let guard = guard.clone();
        spawn_local(async move {
            let result = api::delete_menu_item(token.as_deref(), id).await;
            if !guard.check("delete menu item") {
                return;
            }
            match result {
                Ok(()) => {
                    log::info!("[MENU] Deleted menu item #{}", id);
                    store_remove_menu_item(&store, id);
                }
                Err(e) => set_error.set(Some(e.to_string())),
            }
            set_busy_id.set(None);
        });
    });

    let can_manage = move || session.role().is_some_and(|r| r.can_manage_menu());

    view! {
        <h2 class="mb-4">"Menu Manager"</h2>

        <ErrorBanner error=error set_error=set_error />

        <Show when=can_manage>
            <form class="row g-2 align-items-end mb-4" on:submit=on_create.clone()>
                <div class="col-md-4">
                    <label class="form-label">"Title"</label>
                    <input
                        class="form-control"
                        type="text"
                        prop:value=move || form.with(|f| f.title.clone())
                        on:input=move |ev| set_form.update(|f| f.title = event_target_value(&ev))
                    />
                </div>
                <div class="col-md-2">
                    <label class="form-label">"Price"</label>
                    <input
                        class="form-control"
                        type="text"
                        inputmode="decimal"
                        placeholder="0.00"
                        prop:value=move || form.with(|f| f.price.clone())
                        on:input=move |ev| set_form.update(|f| f.price = event_target_value(&ev))
                    />
                </div>
                <div class="col-md-3">
                    <label class="form-label">"Category"</label>
                    <select
                        class="form-select"
                        prop:value=move || form.with(|f| f.category.clone())
                        on:change=move |ev| set_form.update(|f| f.category = event_target_value(&ev))
                    >
                        <option value="">"Choose..."</option>
                        <For
                            each=move || store.categories().get()
                            key=|c| c.id
                            children=|c| view! { <option value=c.id.to_string()>{c.title}</option> }
                        />
                    </select>
                </div>
                <div class="col-md-1 form-check ms-2">
                    <input
                        id="featured"
                        class="form-check-input"
                        type="checkbox"
                        prop:checked=move || form.with(|f| f.featured)
                        on:change=move |ev| set_form.update(|f| f.featured = event_target_checked(&ev))
                    />
                    <label class="form-check-label" for="featured">"Featured"</label>
                </div>
                <div class="col-md-auto">
                    <button class="btn btn-dark" type="submit" prop:disabled=move || saving.get()>
                        {move || if saving.get() { "Saving..." } else { "Add item" }}
                    </button>
                </div>
            </form>
        </Show>

        <Show
            when=move || !store.menu_items().read().is_empty()
            fallback=|| view! { <p class="text-muted">"No menu items found."</p> }
        >
            <table class="table table-striped align-middle">
                <thead>
                    <tr>
                        <th>"ID"</th>
                        <th>"Title"</th>
                        <th>"Category"</th>
                        <th>"Price"</th>
                        <th>"Featured"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || store.menu_items().get()
                        key=|item| (item.id, item.featured)
                        children=move |item| {
                            let id = item.id;
                            let row_busy = Signal::derive(move || busy_id.get() == Some(id));
                            let checked = move || {
                                checkbox_resets.track();
                                featured_in(&store.menu_items().read(), id).unwrap_or(false)
                            };
                            view! {
                                <tr>
                                    <td>{id}</td>
                                    <td>{item.title.clone()}</td>
                                    <td>{category_title(&store, item.category).unwrap_or_default()}</td>
                                    <td>{item.price.to_string()}</td>
                                    <td>
                                        <input
                                            class="form-check-input"
                                            type="checkbox"
                                            prop:checked=checked
                                            prop:disabled=move || row_busy.get() || !can_manage()
                                            on:change=move |_| toggle_featured.run(id)
                                        />
                                    </td>
                                    <td class="text-end">
                                        <Show when=can_manage>
                                            <DeleteConfirmButton
                                                label="Delete"
                                                on_confirm=move |_| delete_item.run(id)
                                                disabled=row_busy
                                            />
                                        </Show>
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(title: &str, price: &str, category: &str) -> MenuItemForm {
        MenuItemForm {
            title: title.to_string(),
            price: price.to_string(),
            category: category.to_string(),
            featured: true,
        }
    }

    #[test]
    fn test_valid_form() {
        let input = form("  Lasagna ", "12.50", "3");
        let request = input.to_request().unwrap();
        assert_eq!(request.title, "Lasagna");
        assert_eq!(request.price, Money::from_cents(1250));
        assert_eq!(request.category, 3);
        assert!(request.featured);
    }

    #[test]
    fn test_invalid_price() {
        assert!(form("Lasagna", "abc", "3").to_request().is_err());
        assert!(form("Lasagna", "0", "3").to_request().is_err());
    }

    #[test]
    fn test_missing_fields() {
        assert!(form("", "12.50", "3").to_request().is_err());
        assert!(form("Lasagna", "12.50", "").to_request().is_err());
    }

    fn dish(id: u32, featured: bool) -> MenuItem {
        MenuItem {
            id,
            title: format!("Dish {}", id),
            price: Money::from_cents(1000),
            category: Some(1),
            featured,
            image: None,
        }
    }

    #[test]
    fn test_toggle_asks_for_inverse_of_cached_flag() {
        let items = vec![dish(1, false), dish(2, true)];
        assert_eq!(next_featured(&items, 1), Some(true));
        assert_eq!(next_featured(&items, 2), Some(false));
        assert_eq!(next_featured(&items, 9), None);
    }

    #[test]
    fn test_repeated_toggle_follows_cache_not_clicks() {
        // A failed toggle leaves the cache alone, so a retry asks for the same value
        let items = vec![dish(5, false)];
        assert_eq!(next_featured(&items, 5), Some(true));
        assert_eq!(next_featured(&items, 5), Some(true));
        assert_eq!(featured_in(&items, 5), Some(false));
    }
}
