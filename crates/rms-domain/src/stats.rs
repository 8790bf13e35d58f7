//! Dashboard Statistics

use super::menu::MenuItem;
use super::money::Money;
use super::order::{Order, OrderStatus};

/// Summary shown on the admin dashboard
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardStats {
    pub total_orders: usize,
    pub pending: usize,
    pub ready: usize,
    pub delivered: usize,
    pub cancelled: usize,
    pub unknown: usize,
    /// Sum of totals of delivered orders
    pub delivered_revenue: Money,
    pub menu_items: usize,
    pub featured_items: usize,
}

impl DashboardStats {
    pub fn compute(orders: &[Order], menu: &[MenuItem]) -> Self {
        let mut stats = DashboardStats {
            total_orders: orders.len(),
            menu_items: menu.len(),
            featured_items: menu.iter().filter(|m| m.featured).count(),
            ..Default::default()
        };
        for order in orders {
            match order.status {
                OrderStatus::Pending => stats.pending += 1,
                OrderStatus::Ready => stats.ready += 1,
                OrderStatus::Delivered => {
                    stats.delivered += 1;
                    stats.delivered_revenue = stats.delivered_revenue + order.total;
                }
                OrderStatus::Cancelled => stats.cancelled += 1,
                OrderStatus::Unknown => stats.unknown += 1,
            }
        }
        stats
    }

    /// (status, count) pairs for the status breakdown
    pub fn by_status(&self) -> [(OrderStatus, usize); 5] {
        [
            (OrderStatus::Pending, self.pending),
            (OrderStatus::Ready, self.ready),
            (OrderStatus::Delivered, self.delivered),
            (OrderStatus::Cancelled, self.cancelled),
            (OrderStatus::Unknown, self.unknown),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_order(id: u32, status: OrderStatus, cents: i64) -> Order {
        Order {
            id,
            date: None,
            customer_name: None,
            user: None,
            total: Money::from_cents(cents),
            status,
            items: Vec::new(),
        }
    }

    #[test]
    fn test_compute() {
        let orders = vec![
            make_order(1, OrderStatus::Delivered, 1000),
            make_order(2, OrderStatus::Delivered, 550),
            make_order(3, OrderStatus::Pending, 9999),
            make_order(4, OrderStatus::Unknown, 100),
        ];
        let menu = vec![
            MenuItem { id: 1, title: "A".into(), price: Money::from_cents(100), category: None, featured: true, image: None },
            MenuItem { id: 2, title: "B".into(), price: Money::from_cents(100), category: None, featured: false, image: None },
        ];
        let stats = DashboardStats::compute(&orders, &menu);

        assert_eq!(stats.total_orders, 4);
        assert_eq!(stats.delivered, 2);
        assert_eq!(stats.pending, 1);
        assert_eq!(stats.unknown, 1);
        assert_eq!(stats.delivered_revenue, Money::from_cents(1550));
        assert_eq!(stats.menu_items, 2);
        assert_eq!(stats.featured_items, 1);
    }

    #[test]
    fn test_empty() {
        assert_eq!(DashboardStats::compute(&[], &[]), DashboardStats::default());
    }
}
