//! Order Entity
//!
//! Orders are owned by the backend. The UI only ever changes one field
//! locally: `status`, after the backend accepted the change.

use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};

use super::entity::Entity;
use super::money::Money;

/// Backend date format for `Order.date`
const BACKEND_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
/// Display format, close to `toLocaleString` in en-US
const DISPLAY_DATE_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

/// Order status. Anything the UI doesn't know about becomes `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderStatus {
    Pending,
    Ready,
    Delivered,
    Cancelled,
    #[default]
    Unknown,
}

impl OrderStatus {
    /// Values offered in the edit dropdown, in display order
    pub const SETTABLE: [OrderStatus; 4] = [
        OrderStatus::Pending,
        OrderStatus::Ready,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "PENDING",
            OrderStatus::Ready => "READY",
            OrderStatus::Delivered => "DELIVERED",
            OrderStatus::Cancelled => "CANCELLED",
            OrderStatus::Unknown => "UNKNOWN",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "PENDING" => OrderStatus::Pending,
            "READY" => OrderStatus::Ready,
            "DELIVERED" => OrderStatus::Delivered,
            "CANCELLED" => OrderStatus::Cancelled,
            _ => OrderStatus::Unknown,
        }
    }

    pub fn badge(&self) -> StatusBadge {
        let tone = match self {
            OrderStatus::Ready | OrderStatus::Delivered => BadgeTone::Success,
            OrderStatus::Cancelled => BadgeTone::Danger,
            OrderStatus::Pending => BadgeTone::Warning,
            OrderStatus::Unknown => BadgeTone::Secondary,
        };
        StatusBadge { tone, label: self.as_str() }
    }
}

impl<'de> Deserialize<'de> for OrderStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Older backends send a boolean here
        Ok(match serde_json::Value::deserialize(deserializer)? {
            serde_json::Value::String(s) => OrderStatus::from_str(&s),
            _ => OrderStatus::Unknown,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeTone {
    Success,
    Danger,
    Warning,
    Secondary,
}

impl BadgeTone {
    pub fn css_class(&self) -> &'static str {
        match self {
            BadgeTone::Success => "badge bg-success",
            BadgeTone::Danger => "badge bg-danger",
            BadgeTone::Warning => "badge bg-warning text-dark",
            BadgeTone::Secondary => "badge bg-secondary",
        }
    }

    pub fn color_name(&self) -> &'static str {
        match self {
            BadgeTone::Success => "green",
            BadgeTone::Danger => "red",
            BadgeTone::Warning => "yellow",
            BadgeTone::Secondary => "grey",
        }
    }
}

/// What a status looks like in the order table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusBadge {
    pub tone: BadgeTone,
    pub label: &'static str,
}

/// Menu item as embedded in an order line (only what the UI reads)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItemRef {
    pub id: u32,
    pub title: String,
}

/// One line of an order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    #[serde(rename = "menuitem")]
    pub menu_item: MenuItemRef,
    pub quantity: u32,
    pub price: Money,
}

/// The ordering user, when the backend nests it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderUser {
    pub username: String,
}

/// Order data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: u32,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub user: Option<OrderUser>,
    #[serde(default)]
    pub total: Money,
    #[serde(default)]
    pub status: OrderStatus,
    #[serde(default, rename = "orderitem")]
    pub items: Vec<OrderItem>,
}

impl Order {
    /// Customer shown in the table: explicit name first, then the user
    pub fn customer(&self) -> &str {
        self.customer_name
            .as_deref()
            .or(self.user.as_ref().map(|u| u.username.as_str()))
            .unwrap_or("Unknown")
    }

    /// Date as shown in the table. Unparseable values are shown verbatim.
    pub fn display_date(&self) -> String {
        let Some(raw) = self.date.as_deref() else {
            return String::new();
        };
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, BACKEND_DATE_FORMAT) {
            return dt.format(DISPLAY_DATE_FORMAT).to_string();
        }
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return dt.naive_local().format(DISPLAY_DATE_FORMAT).to_string();
        }
        raw.to_string()
    }
}

impl Entity for Order {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// Patch the status of exactly one cached order after a successful write.
/// Returns false (and touches nothing) if the order is not cached.
pub fn patch_status(orders: &mut [Order], order_id: u32, status: OrderStatus) -> bool {
    match orders.iter_mut().find(|o| o.id == order_id) {
        Some(order) => {
            order.status = status;
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_order(id: u32, status: OrderStatus) -> Order {
        Order {
            id,
            date: None,
            customer_name: Some(format!("Customer {}", id)),
            user: None,
            total: Money::from_cents(1000),
            status,
            items: Vec::new(),
        }
    }

    #[test]
    fn test_badge_mapping() {
        assert_eq!(OrderStatus::Ready.badge().tone, BadgeTone::Success);
        assert_eq!(OrderStatus::Delivered.badge().tone, BadgeTone::Success);
        assert_eq!(OrderStatus::Cancelled.badge().tone, BadgeTone::Danger);
        assert_eq!(OrderStatus::Pending.badge().tone, BadgeTone::Warning);
        assert_eq!(OrderStatus::Pending.badge().tone.color_name(), "yellow");

        let unknown = OrderStatus::from_str("COOKING").badge();
        assert_eq!(unknown.tone, BadgeTone::Secondary);
        assert_eq!(unknown.tone.color_name(), "grey");
        assert_eq!(unknown.label, "UNKNOWN");
    }

    #[test]
    fn test_status_decoding_falls_back_to_unknown() {
        let ready: OrderStatus = serde_json::from_str(r#""READY""#).unwrap();
        let odd: OrderStatus = serde_json::from_str(r#""ready""#).unwrap();
        let legacy: OrderStatus = serde_json::from_str("false").unwrap();
        assert_eq!(ready, OrderStatus::Ready);
        assert_eq!(odd, OrderStatus::Unknown);
        assert_eq!(legacy, OrderStatus::Unknown);
    }

    #[test]
    fn test_status_serializes_uppercase() {
        assert_eq!(serde_json::to_string(&OrderStatus::Delivered).unwrap(), r#""DELIVERED""#);
    }

    #[test]
    fn test_order_from_backend_json() {
        let json = r#"{
            "id": 7,
            "user": {"id": 3, "username": "ana"},
            "delivery_crew": null,
            "status": "PENDING",
            "date": "2024-03-05 18:30:00",
            "total": "24.00",
            "orderitem": [
                {"order": 7, "menuitem": {"id": 1, "title": "Pizza", "price": "12.00"}, "quantity": 2, "price": "24.00"}
            ]
        }"#;
        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.id, 7);
        assert_eq!(order.customer(), "ana");
        assert_eq!(order.total, Money::from_cents(2400));
        assert_eq!(order.items.len(), 1);
        assert_eq!(order.items[0].menu_item.title, "Pizza");
        assert_eq!(order.display_date(), "3/5/2024, 6:30:00 PM");
    }

    #[test]
    fn test_display_date_passthrough() {
        let mut order = make_order(1, OrderStatus::Pending);
        order.date = Some("yesterday".to_string());
        assert_eq!(order.display_date(), "yesterday");
    }

    #[test]
    fn test_patch_status_touches_only_target() {
        let mut orders = vec![
            make_order(1, OrderStatus::Pending),
            make_order(2, OrderStatus::Pending),
            make_order(3, OrderStatus::Ready),
        ];
        assert!(patch_status(&mut orders, 2, OrderStatus::Delivered));
        assert_eq!(orders[0].status, OrderStatus::Pending);
        assert_eq!(orders[1].status, OrderStatus::Delivered);
        assert_eq!(orders[2].status, OrderStatus::Ready);
    }

    #[test]
    fn test_patch_status_missing_order() {
        let mut orders = vec![make_order(1, OrderStatus::Pending)];
        let before = orders.clone();
        assert!(!patch_status(&mut orders, 42, OrderStatus::Cancelled));
        assert_eq!(orders, before);
    }
}
