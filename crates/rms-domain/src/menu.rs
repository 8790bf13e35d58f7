//! Menu Entities

use serde::{Deserialize, Serialize};

use super::entity::Entity;
use super::money::Money;

/// Menu item data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: u32,
    pub title: String,
    pub price: Money,
    #[serde(default)]
    pub category: Option<u32>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub image: Option<String>,
}

impl Entity for MenuItem {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// Category data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub slug: String,
}

impl Entity for Category {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// Body for creating a menu item
#[derive(Debug, Serialize)]
pub struct NewMenuItem<'a> {
    pub title: &'a str,
    pub price: Money,
    pub category: u32,
    pub featured: bool,
}

impl NewMenuItem<'_> {
    /// Reason the form can't be submitted yet, if any
    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("Title is required.".to_string());
        }
        if self.price <= Money::ZERO {
            return Err("Price must be greater than zero.".to_string());
        }
        Ok(())
    }
}

/// Partial update toggling the featured flag
#[derive(Debug, Serialize)]
pub struct FeaturedPatch {
    pub featured: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_item_from_json() {
        let json = r#"{"id": 3, "title": "Soup", "price": "4.75", "category": 2, "featured": true, "image": "/media/soup.jpg"}"#;
        let item: MenuItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.price, Money::from_cents(475));
        assert_eq!(item.category, Some(2));
        assert!(item.featured);
    }

    #[test]
    fn test_new_menu_item_validation() {
        let ok = NewMenuItem { title: "Tea", price: Money::from_cents(200), category: 1, featured: false };
        assert!(ok.validate().is_ok());

        let blank = NewMenuItem { title: "  ", ..ok };
        assert_eq!(blank.validate(), Err("Title is required.".to_string()));

        let free = NewMenuItem { title: "Tea", price: Money::ZERO, category: 1, featured: false };
        assert!(free.validate().is_err());
    }

    #[test]
    fn test_new_menu_item_body() {
        let body = NewMenuItem { title: "Tea", price: Money::from_cents(250), category: 1, featured: true };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["price"], "2.50");
        assert_eq!(json["category"], 1);
    }
}
