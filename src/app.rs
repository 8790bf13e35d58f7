//! RMS Frontend App
//!
//! Root component: provides the session and store, then routes.

use leptos::prelude::*;
use leptos_router::components::{ParentRoute, Redirect, Route, Router, Routes};
use leptos_router::path;
use reactive_stores::Store;

use crate::components::{Footer, Navbar};
use crate::context::SessionContext;
use crate::models::AppRoute;
use crate::pages::admin::{AdminDashboard, AdminLayout, AdminOrders, MenuManager};
use crate::pages::{CartPage, LoginPage, MenuPage, NotFound, OrdersPage};
use crate::store::AppState;

#[component]
pub fn App() -> impl IntoView {
    // Provide context to all children
    let session = SessionContext::from_document();
    provide_context(session);
    provide_context(Store::new(AppState::default()));

    // A cookie left over from an earlier visit still needs its profile
    session.refresh_profile();

    view! {
        <Router>
            <div class="d-flex flex-column min-vh-100">
                <Navbar />
                <main class="flex-grow-1">
                    <Routes fallback=|| view! { <NotFound /> }>
                        <Route path=path!("/") view=MenuPage />
                        <Route path=path!("/cart") view=CartPage />
                        <Route path=path!("/loginform") view=LoginPage />
                        <Route path=path!("/orders") view=OrdersPage />
                        <ParentRoute path=path!("/admin") view=AdminLayout>
                            <Route path=path!("") view=|| view! { <Redirect path=AppRoute::ADMIN_INDEX.path() /> } />
                            <Route path=path!("dashboard") view=AdminDashboard />
                            <Route path=path!("menu") view=MenuManager />
                            <Route path=path!("orders") view=AdminOrders />
                        </ParentRoute>
                    </Routes>
                </main>
                <Footer />
            </div>
        </Router>
    }
}
