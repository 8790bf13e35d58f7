use leptos::prelude::*;

use crate::components::OrderList;

#[component]
pub fn AdminOrders() -> impl IntoView {
    view! { <OrderList title="Order List" /> }
}
