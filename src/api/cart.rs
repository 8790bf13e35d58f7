//! Server Cart Endpoints
//!
//! The cart lives in the browser; it is only pushed to the backend when an
//! order is placed.

use serde::Serialize;

use rms_domain::{ApiResult, CartLine};
use super::{Verb, require_token, send_empty, send_json};

#[derive(Serialize)]
struct CartLineArgs {
    menuitem_id: u32,
    quantity: u32,
}

/// Drop whatever a previous session left in the server cart
pub async fn clear_server_cart(token: Option<&str>) -> ApiResult<()> {
    let token = require_token(token)?;
    send_empty(Verb::Delete, "/api/cart/menu-items", Some(token), "Failed to reset cart.").await?;
    Ok(())
}

pub async fn push_cart_line(token: Option<&str>, line: &CartLine) -> ApiResult<()> {
    let token = require_token(token)?;
    let args = CartLineArgs {
        menuitem_id: line.menu_item_id,
        quantity: line.quantity,
    };
    send_json(Verb::Post, "/api/cart/menu-items", Some(token), &args, "Failed to add item to cart.").await?;
    Ok(())
}
