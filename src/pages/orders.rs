//! Orders Page

use leptos::prelude::*;

use crate::components::OrderList;

#[component]
pub fn OrdersPage() -> impl IntoView {
    view! {
        <div class="container py-4">
            <OrderList title="Orders" />
        </div>
    }
}
