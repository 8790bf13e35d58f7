//! UI Components
//!
//! Reusable Leptos components.

mod navbar;
mod footer;
mod error_banner;
mod status_badge;
mod order_list;
mod order_detail_modal;
mod menu_card;
mod delete_confirm_button;

pub use navbar::Navbar;
pub use footer::Footer;
pub use error_banner::ErrorBanner;
pub use status_badge::OrderStatusBadge;
pub use order_list::OrderList;
pub use order_detail_modal::OrderDetailModal;
pub use menu_card::MenuCard;
pub use delete_confirm_button::DeleteConfirmButton;
