//! Order Endpoints

use serde::Serialize;

use rms_domain::{ApiResult, Listing, Order, OrderStatus};
use super::{Verb, get_json, require_token, send_empty, send_json};

#[derive(Serialize)]
struct StatusArgs {
    status: OrderStatus,
}

pub async fn list_orders(token: Option<&str>) -> ApiResult<Vec<Order>> {
    let token = require_token(token)?;
    let listing: Listing<Order> = get_json("/api/orders", Some(token), "Failed to fetch orders.").await?;
    Ok(listing.into_vec())
}

/// Set one order's status. The response body is not used.
pub async fn update_order_status(token: Option<&str>, order_id: u32, status: OrderStatus) -> ApiResult<()> {
    let token = require_token(token)?;
    let path = format!("/api/orders/{}", order_id);
    send_json(Verb::Put, &path, Some(token), &StatusArgs { status }, "Failed to update status.").await?;
    Ok(())
}

/// Turn the caller's server-side cart into an order
pub async fn place_order(token: Option<&str>) -> ApiResult<()> {
    let token = require_token(token)?;
    send_empty(Verb::Post, "/api/orders", Some(token), "Failed to place order.").await?;
    Ok(())
}
