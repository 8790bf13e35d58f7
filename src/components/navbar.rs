//! Navigation Bar Component
//!
//! Links depend on the session: login/register when signed out, username,
//! admin and logout when signed in.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::{use_location, use_navigate};

use crate::context::use_session;
use crate::models::AppRoute;
use crate::store::{AppStateStoreFields, use_app_store};

/// Pages served by the backend site, outside the router. Linked with
/// `rel="external"` so the click does a full page load.
const RESERVATION_URL: &str = "/reservation";
const REGISTER_URL: &str = "/register";

#[component]
pub fn Navbar() -> impl IntoView {
    let session = use_session();
    let store = use_app_store();
    let navigate = use_navigate();
    let pathname = use_location().pathname;

    // Cookie presence is re-checked on every navigation
    Effect::new(move |_| {
        pathname.track();
        session.resync();
    });

    let cart_count = move || store.cart().read().item_count();
    let in_admin = move || AppRoute::resolve(&pathname.get()).is_admin();
    let can_open_admin = move || session.role().is_some_and(|r| r.can_edit_orders());

    let on_logout = move |_| {
        session.sign_out();
        navigate(AppRoute::Login.path(), Default::default());
    };

    view! {
        <nav class="navbar navbar-expand-lg navbar-dark bg-dark shadow-sm">
            <div class="container">
                <A href=AppRoute::Menu.path() attr:class="navbar-brand text-light fs-3 fw-bold">"RMS"</A>
                <ul class="navbar-nav ms-auto d-flex align-items-center gap-3">
                    <li class="nav-item">
                        <A href=AppRoute::Menu.path() attr:class="nav-link text-light">"Menu"</A>
                    </li>
                    <li class="nav-item">
                        <a class="nav-link text-light" href=RESERVATION_URL rel="external">"Reservation"</a>
                    </li>
                    <Show when=move || !session.is_logged_in()>
                        <li class="nav-item">
                            <A href=AppRoute::Login.path() attr:class="nav-link text-light">"Login"</A>
                        </li>
                        <li class="nav-item">
                            <a class="nav-link text-light" href=REGISTER_URL rel="external">"Register"</a>
                        </li>
                    </Show>
                    <li class="nav-item">
                        <A href=AppRoute::Cart.path() attr:class="nav-link text-light">
                            "🧺"
                            <Show when=move || { cart_count() > 0 }>
                                <span class="badge bg-light text-dark ms-1">{cart_count}</span>
                            </Show>
                        </A>
                    </li>
                    <Show when=move || session.is_logged_in()>
                        <Show when=can_open_admin>
                            <li class="nav-item">
                                <A
                                    href="/admin"
                                    attr:class=move || if in_admin() { "nav-link text-light fw-bold" } else { "nav-link text-light" }
                                >
                                    "Admin"
                                </A>
                            </li>
                        </Show>
                        <li class="nav-item">
                            <A href=AppRoute::Orders.path() attr:class="nav-link text-light">
                                {move || session.username().unwrap_or_default()}
                            </A>
                        </li>
                        <li class="nav-item">
                            <button class="btn btn-outline-light" on:click=on_logout.clone()>
                                "Logout"
                            </button>
                        </li>
                    </Show>
                </ul>
            </div>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_external_links_are_not_app_routes() {
        // The router would render NotFound for these, hence the full page load
        assert_eq!(AppRoute::resolve(RESERVATION_URL), AppRoute::NotFound);
        assert_eq!(AppRoute::resolve(REGISTER_URL), AppRoute::NotFound);
    }

    #[test]
    fn test_admin_link_highlight() {
        assert!(AppRoute::resolve("/admin").is_admin());
        assert!(AppRoute::resolve("/admin/menu").is_admin());
        assert!(!AppRoute::resolve("/orders").is_admin());
    }
}
