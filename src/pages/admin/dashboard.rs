//! Admin Dashboard
//!
//! Order and menu counts computed from one fetch of each collection.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{ErrorBanner, OrderStatusBadge};
use crate::context::use_session;
use crate::lifecycle::MountGuard;
use crate::models::{DashboardStats, Order};
use crate::pages::load_menu;
use crate::store::{AppStateStoreFields, use_app_store};

#[component]
pub fn AdminDashboard() -> impl IntoView {
    let session = use_session();
    let store = use_app_store();
    let guard = MountGuard::new();
    let (orders, set_orders) = signal(Vec::<Order>::new());
    let (error, set_error) = signal(None::<String>);

    load_menu(store, guard.clone(), set_error);

    Effect::new(move |_| {
        let token = session.token.get();
        let guard = guard.clone();
        spawn_local(async move {
            let result = api::list_orders(token.as_deref()).await;
            if !guard.check("dashboard orders") {
                return;
            }
            match result {
                Ok(list) => set_orders.set(list),
                Err(e) => set_error.set(Some(e.to_string())),
            }
        });
    });

    let stats = Memo::new(move |_| {
        orders.with(|orders| DashboardStats::compute(orders, &store.menu_items().read()))
    });

    view! {
        <h2 class="mb-4">"Dashboard"</h2>

        <ErrorBanner error=error set_error=set_error />

        <div class="row g-3 mb-4">
            <StatCard label="Total orders" value=Signal::derive(move || stats.get().total_orders.to_string()) />
            <StatCard label="Revenue (delivered)" value=Signal::derive(move || stats.get().delivered_revenue.to_string()) />
            <StatCard label="Menu items" value=Signal::derive(move || stats.get().menu_items.to_string()) />
            <StatCard label="Featured items" value=Signal::derive(move || stats.get().featured_items.to_string()) />
        </div>

        <h5>"Orders by status"</h5>
        <table class="table table-sm w-auto">
            <tbody>
                {move || stats.get().by_status().into_iter()
                    .filter(|(_, count)| *count > 0)
                    .map(|(status, count)| view! {
                        <tr>
                            <td><OrderStatusBadge status=status /></td>
                            <td class="ps-4">{count}</td>
                        </tr>
                    })
                    .collect_view()}
            </tbody>
        </table>
    }
}

#[component]
fn StatCard(label: &'static str, value: Signal<String>) -> impl IntoView {
    view! {
        <div class="col-sm-6 col-lg-3">
            <div class="card shadow-sm">
                <div class="card-body">
                    <div class="text-muted small">{label}</div>
                    <div class="fs-3 fw-bold">{move || value.get()}</div>
                </div>
            </div>
        </div>
    }
}
