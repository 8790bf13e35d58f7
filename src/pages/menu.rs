//! Menu Page
//!
//! Public menu with category chips. Filtering is client-side.

use std::time::Duration;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{ErrorBanner, MenuCard};
use crate::lifecycle::MountGuard;
use crate::models::MenuItem;
use crate::pages::load_menu;
use crate::store::{AppStateStoreFields, use_app_store};

/// How long the "added to cart" notice stays up
const NOTICE_TIMEOUT: Duration = Duration::from_millis(2500);

/// Items in the selected category, all of them when none is selected
fn filter_by_category(items: &[MenuItem], category: Option<u32>) -> Vec<MenuItem> {
    items
        .iter()
        .filter(|item| category.is_none() || item.category == category)
        .cloned()
        .collect()
}

#[component]
pub fn MenuPage() -> impl IntoView {
    let store = use_app_store();
    let guard = MountGuard::new();
    let (error, set_error) = signal(None::<String>);
    let (category, set_category) = signal(None::<u32>);
    let (notice, set_notice) = signal(None::<String>);
    // Bumped per notice so an older timer doesn't hide a newer one
    let (notice_seq, set_notice_seq) = signal(0u32);

    load_menu(store, guard.clone(), set_error);

    let visible = move || filter_by_category(&store.menu_items().read(), category.get());

    let on_added = Callback::new(move |title: String| {
        set_notice.set(Some(format!("{} added to cart", title)));
        set_notice_seq.update(|n| *n += 1);
        let seq = notice_seq.get_untracked();
        let guard = guard.clone();
        spawn_local(async move {
            gloo_timers::future::sleep(NOTICE_TIMEOUT).await;
            if guard.is_mounted() && notice_seq.get_untracked() == seq {
                set_notice.set(None);
            }
        });
    });

    view! {
        <div class="container py-4">
            <h1 class="mb-4">"Menu"</h1>

            <ErrorBanner error=error set_error=set_error />

            {move || notice.get().map(|text| view! {
                <div class="alert alert-success py-2">{text}</div>
            })}

            <div class="d-flex flex-wrap gap-2 mb-4">
                <button
                    class=move || if category.get().is_none() { "btn btn-dark btn-sm" } else { "btn btn-outline-dark btn-sm" }
                    on:click=move |_| set_category.set(None)
                >
                    "All"
                </button>
                <For
                    each=move || store.categories().get()
                    key=|c| c.id
                    children=move |c| {
                        let id = c.id;
                        view! {
                            <button
                                class=move || if category.get() == Some(id) { "btn btn-dark btn-sm" } else { "btn btn-outline-dark btn-sm" }
                                on:click=move |_| set_category.set(Some(id))
                            >
                                {c.title}
                            </button>
                        }
                    }
                />
            </div>

            <Show
                when=move || !visible().is_empty()
                fallback=|| view! { <p class="text-muted">"No menu items found."</p> }
            >
                <div class="row row-cols-1 row-cols-md-3 g-4">
                    <For
                        each=visible
                        key=|item| (item.id, item.featured)
                        children=move |item| view! { <MenuCard item=item on_added=on_added /> }
                    />
                </div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    fn item(id: u32, category: Option<u32>) -> MenuItem {
        MenuItem {
            id,
            title: format!("Dish {}", id),
            price: Money::from_cents(500),
            category,
            featured: false,
            image: None,
        }
    }

    #[test]
    fn test_no_category_shows_everything() {
        let items = vec![item(1, Some(1)), item(2, Some(2)), item(3, None)];
        assert_eq!(filter_by_category(&items, None).len(), 3);
    }

    #[test]
    fn test_category_filter() {
        let items = vec![item(1, Some(1)), item(2, Some(2)), item(3, Some(1)), item(4, None)];
        let ids: Vec<u32> = filter_by_category(&items, Some(1)).iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert!(filter_by_category(&items, Some(9)).is_empty());
    }
}
