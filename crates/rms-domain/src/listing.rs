//! List Envelope
//!
//! Paginated endpoints answer `{"count": .., "results": [...]}`, plain ones a
//! bare array. A missing `results` is treated as an empty list.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum Listing<T> {
    Plain(Vec<T>),
    Paged {
        #[serde(default = "Vec::new")]
        results: Vec<T>,
    },
}

impl<T> Listing<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Listing::Plain(items) => items,
            Listing::Paged { results } => results,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paged_envelope() {
        let listing: Listing<u32> = serde_json::from_str(r#"{"count": 2, "next": null, "results": [1, 2]}"#).unwrap();
        assert_eq!(listing.into_vec(), vec![1, 2]);
    }

    #[test]
    fn test_bare_array() {
        let listing: Listing<u32> = serde_json::from_str("[3]").unwrap();
        assert_eq!(listing.into_vec(), vec![3]);
    }

    #[test]
    fn test_missing_results_is_empty() {
        let listing: Listing<u32> = serde_json::from_str(r#"{"message": "nothing"}"#).unwrap();
        assert!(listing.into_vec().is_empty());
    }
}
