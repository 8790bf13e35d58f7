//! User Profile & Role
//!
//! The role is derived client-side and only gates UI controls. The backend
//! is still the one enforcing permissions.

use serde::{Deserialize, Deserializer, Serialize};

const MANAGER_GROUP: &str = "Manager";
const DELIVERY_CREW_GROUP: &str = "Delivery Crew";

/// Client-derived classification of the signed-in user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Manager,
    DeliveryCrew,
    Admin,
    User,
}

impl Role {
    /// Precedence: Manager > Delivery Crew > staff flag (Admin) > User
    pub fn resolve<S: AsRef<str>>(groups: &[S], is_staff: bool) -> Self {
        let in_group = |name: &str| groups.iter().any(|g| g.as_ref() == name);
        if in_group(MANAGER_GROUP) {
            Role::Manager
        } else if in_group(DELIVERY_CREW_GROUP) {
            Role::DeliveryCrew
        } else if is_staff {
            Role::Admin
        } else {
            Role::User
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Manager => "Manager",
            Role::DeliveryCrew => "Delivery Crew",
            Role::Admin => "Admin",
            Role::User => "User",
        }
    }

    /// Whether the status edit control is shown
    pub fn can_edit_orders(&self) -> bool {
        matches!(self, Role::Admin | Role::Manager | Role::DeliveryCrew)
    }

    /// Whether the menu manager is offered
    pub fn can_manage_menu(&self) -> bool {
        matches!(self, Role::Admin | Role::Manager)
    }
}

/// Profile returned by `/auth/users/me`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub username: String,
    #[serde(default, deserialize_with = "group_names")]
    pub groups: Vec<String>,
    #[serde(default)]
    pub is_staff: bool,
}

impl Profile {
    pub fn role(&self) -> Role {
        Role::resolve(&self.groups, self.is_staff)
    }
}

/// Keep named groups only; some serializers emit numeric group ids
fn group_names<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    let raw = Vec::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .filter_map(|v| match v {
            serde_json::Value::String(s) => Some(s),
            serde_json::Value::Object(mut map) => match map.remove("name") {
                Some(serde_json::Value::String(s)) => Some(s),
                _ => None,
            },
            _ => None,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_precedence() {
        assert_eq!(Role::resolve(&["Manager", "Delivery Crew"], true), Role::Manager);
        assert_eq!(Role::resolve(&["Delivery Crew", "Manager"], false), Role::Manager);
        assert_eq!(Role::resolve(&["Delivery Crew"], true), Role::DeliveryCrew);
        assert_eq!(Role::resolve::<&str>(&[], true), Role::Admin);
        assert_eq!(Role::resolve::<&str>(&[], false), Role::User);
        assert_eq!(Role::resolve(&["Chefs"], false), Role::User);
    }

    #[test]
    fn test_group_names_are_exact() {
        assert_eq!(Role::resolve(&["manager"], false), Role::User);
        assert_eq!(Role::resolve(&["Delivery"], false), Role::User);
    }

    #[test]
    fn test_edit_permission() {
        assert!(Role::Admin.can_edit_orders());
        assert!(Role::Manager.can_edit_orders());
        assert!(Role::DeliveryCrew.can_edit_orders());
        assert!(!Role::User.can_edit_orders());
        assert!(!Role::DeliveryCrew.can_manage_menu());
    }

    #[test]
    fn test_profile_from_json() {
        let json = r#"{"id": 4, "username": "sam", "email": "", "is_staff": false, "groups": ["Delivery Crew", 2]}"#;
        let profile: Profile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.username, "sam");
        assert_eq!(profile.groups, vec!["Delivery Crew".to_string()]);
        assert_eq!(profile.role(), Role::DeliveryCrew);
    }

    #[test]
    fn test_profile_missing_groups() {
        let profile: Profile = serde_json::from_str(r#"{"username": "root", "is_staff": true}"#).unwrap();
        assert_eq!(profile.role(), Role::Admin);
    }
}
