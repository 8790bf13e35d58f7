//! Menu Endpoints

use rms_domain::{ApiResult, Category, FeaturedPatch, Listing, MenuItem, NewMenuItem};
use super::{Verb, decode, get_json, require_token, send_empty, send_json};

pub async fn list_menu_items() -> ApiResult<Vec<MenuItem>> {
    let listing: Listing<MenuItem> = get_json("/api/menu-items", None, "Failed to fetch menu.").await?;
    Ok(listing.into_vec())
}

pub async fn list_categories() -> ApiResult<Vec<Category>> {
    let listing: Listing<Category> = get_json("/api/categories", None, "Failed to fetch categories.").await?;
    Ok(listing.into_vec())
}

pub async fn create_menu_item(token: Option<&str>, item: &NewMenuItem<'_>) -> ApiResult<MenuItem> {
    let token = require_token(token)?;
    let response = send_json(Verb::Post, "/api/menu-items", Some(token), item, "Failed to create menu item.").await?;
    decode(response).await
}

pub async fn set_featured(token: Option<&str>, id: u32, featured: bool) -> ApiResult<MenuItem> {
    let token = require_token(token)?;
    let path = format!("/api/menu-items/{}", id);
    let response = send_json(Verb::Patch, &path, Some(token), &FeaturedPatch { featured }, "Failed to update menu item.").await?;
    decode(response).await
}

pub async fn delete_menu_item(token: Option<&str>, id: u32) -> ApiResult<()> {
    let token = require_token(token)?;
    let path = format!("/api/menu-items/{}", id);
    send_empty(Verb::Delete, &path, Some(token), "Failed to delete menu item.").await?;
    Ok(())
}
