//! Route Table
//!
//! Mirrors the router's path-to-view mapping so links and redirects can be
//! checked without a browser.

/// Views reachable by URL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppRoute {
    Menu,
    Cart,
    Login,
    Orders,
    AdminDashboard,
    AdminMenu,
    AdminOrders,
    NotFound,
}

impl AppRoute {
    /// Where the admin index redirects
    pub const ADMIN_INDEX: AppRoute = AppRoute::AdminDashboard;

    pub fn path(&self) -> &'static str {
        match self {
            AppRoute::Menu => "/",
            AppRoute::Cart => "/cart",
            AppRoute::Login => "/loginform",
            AppRoute::Orders => "/orders",
            AppRoute::AdminDashboard => "/admin/dashboard",
            AppRoute::AdminMenu => "/admin/menu",
            AppRoute::AdminOrders => "/admin/orders",
            AppRoute::NotFound => "/404",
        }
    }

    /// Resolve a URL path, following the admin index redirect.
    /// Trailing slashes and query strings are ignored.
    pub fn resolve(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or("");
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" => AppRoute::Menu,
            "/cart" => AppRoute::Cart,
            "/loginform" => AppRoute::Login,
            "/orders" => AppRoute::Orders,
            "/admin" => AppRoute::ADMIN_INDEX,
            "/admin/dashboard" => AppRoute::AdminDashboard,
            "/admin/menu" => AppRoute::AdminMenu,
            "/admin/orders" => AppRoute::AdminOrders,
            _ => AppRoute::NotFound,
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, AppRoute::AdminDashboard | AppRoute::AdminMenu | AppRoute::AdminOrders)
    }

    pub fn title(&self) -> &'static str {
        match self {
            AppRoute::Menu => "Menu",
            AppRoute::Cart => "Cart",
            AppRoute::Login => "Login",
            AppRoute::Orders => "Orders",
            AppRoute::AdminDashboard => "Dashboard",
            AppRoute::AdminMenu => "Menu Manager",
            AppRoute::AdminOrders => "Order List",
            AppRoute::NotFound => "Not Found",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_routes() {
        assert_eq!(AppRoute::resolve("/"), AppRoute::Menu);
        assert_eq!(AppRoute::resolve(""), AppRoute::Menu);
        assert_eq!(AppRoute::resolve("/cart"), AppRoute::Cart);
        assert_eq!(AppRoute::resolve("/cart/"), AppRoute::Cart);
        assert_eq!(AppRoute::resolve("/loginform?next=/cart"), AppRoute::Login);
    }

    #[test]
    fn test_admin_index_redirects_to_dashboard() {
        assert_eq!(AppRoute::resolve("/admin"), AppRoute::AdminDashboard);
        assert_eq!(AppRoute::resolve("/admin/"), AppRoute::AdminDashboard);
        assert_eq!(AppRoute::resolve("/admin/menu"), AppRoute::AdminMenu);
        assert_eq!(AppRoute::resolve("/admin/orders"), AppRoute::AdminOrders);
    }

    #[test]
    fn test_unknown_paths() {
        assert_eq!(AppRoute::resolve("/admin/users"), AppRoute::NotFound);
        assert_eq!(AppRoute::resolve("/menu/extra"), AppRoute::NotFound);
    }

    #[test]
    fn test_paths_resolve_to_themselves() {
        for route in [
            AppRoute::Menu,
            AppRoute::Cart,
            AppRoute::Login,
            AppRoute::Orders,
            AppRoute::AdminDashboard,
            AppRoute::AdminMenu,
            AppRoute::AdminOrders,
        ] {
            assert_eq!(AppRoute::resolve(route.path()), route);
        }
    }
}
