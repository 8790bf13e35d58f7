//! Admin Layout
//!
//! Sidebar plus the nested route outlet.

use leptos::prelude::*;
use leptos_router::components::{A, Outlet};
use leptos_router::hooks::use_location;

use crate::context::use_session;
use crate::models::AppRoute;

const SECTIONS: [AppRoute; 3] = [AppRoute::AdminDashboard, AppRoute::AdminMenu, AppRoute::AdminOrders];

#[component]
pub fn AdminLayout() -> impl IntoView {
    let session = use_session();
    let location = use_location();
    let current = move || AppRoute::resolve(&location.pathname.get());

    view! {
        <div class="container-fluid">
            <div class="row">
                <aside class="col-md-2 bg-light border-end min-vh-100 py-4">
                    <h6 class="text-uppercase text-muted px-3">"Admin"</h6>
                    <ul class="nav flex-column">
                        {SECTIONS.iter().map(|route| {
                            let route = *route;
                            view! {
                                <li class="nav-item">
                                    <A
                                        href=route.path()
                                        attr:class=move || if current() == route { "nav-link active fw-bold" } else { "nav-link text-dark" }
                                    >
                                        {route.title()}
                                    </A>
                                </li>
                            }
                        }).collect_view()}
                    </ul>
                </aside>
                <main class="col-md-10 py-4">
                    <Show
                        when=move || session.is_logged_in()
                        fallback=|| view! {
                            <div class="alert alert-warning">
                                "Please log in to use the admin area."
                            </div>
                        }
                    >
                        <Outlet />
                    </Show>
                </main>
            </div>
        </div>
    }
}
