//! Core Entity Trait
//!
//! Every backend-owned record cached by the UI has a stable id. The helpers
//! below patch a cached list in place after the backend confirmed a write.

/// Core trait for all cached backend entities
pub trait Entity: Sized + Clone {
    /// The type of the entity's unique identifier
    type Id: Copy + Eq + std::hash::Hash;

    /// Returns the entity's unique identifier
    fn id(&self) -> Self::Id;
}

/// Replace the entity with the same id. Returns false if it is not cached.
pub fn replace_by_id<T: Entity>(list: &mut [T], updated: T) -> bool {
    match list.iter_mut().find(|e| e.id() == updated.id()) {
        Some(slot) => {
            *slot = updated;
            true
        }
        None => false,
    }
}

/// Remove the entity with the given id. Returns false if it is not cached.
pub fn remove_by_id<T: Entity>(list: &mut Vec<T>, id: T::Id) -> bool {
    let before = list.len();
    list.retain(|e| e.id() != id);
    list.len() != before
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: u32,
        name: &'static str,
    }

    impl Entity for Row {
        type Id = u32;

        fn id(&self) -> u32 {
            self.id
        }
    }

    #[test]
    fn test_replace_by_id() {
        let mut rows = vec![Row { id: 1, name: "a" }, Row { id: 2, name: "b" }];
        assert!(replace_by_id(&mut rows, Row { id: 2, name: "c" }));
        assert_eq!(rows[1].name, "c");
        assert_eq!(rows[0].name, "a");
        assert!(!replace_by_id(&mut rows, Row { id: 9, name: "z" }));
    }

    #[test]
    fn test_remove_by_id() {
        let mut rows = vec![Row { id: 1, name: "a" }, Row { id: 2, name: "b" }];
        assert!(remove_by_id(&mut rows, 1));
        assert_eq!(rows, vec![Row { id: 2, name: "b" }]);
        assert!(!remove_by_id(&mut rows, 1));
    }
}
