//! Order Status Badge

use leptos::prelude::*;

use crate::models::OrderStatus;

/// Colored badge for an order status; unknown values show "UNKNOWN"
#[component]
pub fn OrderStatusBadge(status: OrderStatus) -> impl IntoView {
    let badge = status.badge();
    view! {
        <span class=badge.tone.css_class() data-tone=badge.tone.color_name()>
            {badge.label}
        </span>
    }
}
