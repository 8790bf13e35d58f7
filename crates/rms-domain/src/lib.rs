//! RMS Domain Layer
//!
//! Entities mirrored from the restaurant backend and the pure rules the UI
//! applies to them: role resolution, status badges, cart arithmetic, cookie
//! handling and the route table.
//! No browser or Leptos dependencies, so everything here runs under `cargo test`.

mod entity;
mod error;
mod money;
mod order;
mod profile;
mod menu;
mod cart;
mod session;
mod route;
mod listing;
mod stats;

pub use entity::{Entity, remove_by_id, replace_by_id};
pub use error::{ApiError, ApiResult};
pub use money::Money;
pub use order::{BadgeTone, MenuItemRef, Order, OrderItem, OrderStatus, OrderUser, StatusBadge, patch_status};
pub use profile::{Profile, Role};
pub use menu::{Category, FeaturedPatch, MenuItem, NewMenuItem};
pub use cart::{Cart, CartLine};
pub use session::{SESSION_COOKIE, auth_header, expired_session_cookie, is_logged_in, session_cookie, token_from_cookies};
pub use route::AppRoute;
pub use listing::Listing;
pub use stats::DashboardStats;
