//! Frontend Models
//!
//! Data structures matching backend entities. They live in `rms-domain` so
//! the rules around them can be tested natively; views import them from here.

pub use rms_domain::{
    AppRoute, CartLine, DashboardStats, MenuItem, Money, NewMenuItem, Order, OrderStatus, Role,
};
