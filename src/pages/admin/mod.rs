//! Admin Pages
//!
//! Nested under `/admin`, sharing the sidebar layout.

mod layout;
mod dashboard;
mod menu_manager;
mod orders;

pub use layout::AdminLayout;
pub use dashboard::AdminDashboard;
pub use menu_manager::MenuManager;
pub use orders::AdminOrders;
