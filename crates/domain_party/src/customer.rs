//! Customer master records
//!
//! A customer is identified by GSTIN, which is unique across the
//! collection and otherwise treated as an opaque key. Customers are
//! created either manually or automatically the first time a bill is
//! generated for an unknown GSTIN.

use core_kernel::RecordKey;
use serde::{Deserialize, Serialize};

/// A customer master record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    /// Store key, absent until first persisted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordKey>,
    pub name: String,
    #[serde(default)]
    pub address: String,
    pub gstin: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub state_code: String,
    #[serde(default)]
    pub contact: String,
    /// Creation time, epoch milliseconds
    #[serde(default)]
    pub timestamp: i64,
}

impl Customer {
    /// True when name, GSTIN, or address contains the lowercased needle
    ///
    /// This is the suggestion-search match used while typing a customer
    /// name into a bill.
    pub fn matches_search(&self, needle_lower: &str) -> bool {
        self.name.to_lowercase().contains(needle_lower)
            || self.gstin.to_lowercase().contains(needle_lower)
            || self.address.to_lowercase().contains(needle_lower)
    }

    /// True when name or GSTIN contains the lowercased needle
    ///
    /// The narrower match used by the customer management listing.
    pub fn matches_listing(&self, needle_lower: &str) -> bool {
        self.name.to_lowercase().contains(needle_lower)
            || self.gstin.to_lowercase().contains(needle_lower)
    }

    /// Duplicate check: exact GSTIN match, never substring
    pub fn is_same_record(&self, other: &Customer) -> bool {
        self.gstin == other.gstin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn customer() -> Customer {
        Customer {
            id: None,
            name: "Acme Traders".to_string(),
            address: "14 Market Road, Pune".to_string(),
            gstin: "27AAEPM1234C1ZV".to_string(),
            state: "Maharashtra".to_string(),
            state_code: "27".to_string(),
            contact: "9822000000".to_string(),
            timestamp: 1_700_000_000_000,
        }
    }

    #[test]
    fn test_matches_search_on_any_field() {
        let c = customer();
        assert!(c.matches_search("acme"));
        assert!(c.matches_search("27aaepm"));
        assert!(c.matches_search("market road"));
        assert!(!c.matches_search("globex"));
    }

    #[test]
    fn test_matches_listing_excludes_address() {
        let c = customer();
        assert!(c.matches_listing("acme"));
        assert!(!c.matches_listing("market road"));
    }

    #[test]
    fn test_is_same_record_exact_gstin() {
        let a = customer();
        let mut b = customer();
        b.name = "Renamed Traders".to_string();
        assert!(a.is_same_record(&b));

        b.gstin = "27AAEPM1234C1Z".to_string();
        assert!(!a.is_same_record(&b));
    }

    #[test]
    fn test_serde_field_names() {
        let json = serde_json::to_value(customer()).unwrap();
        assert!(json.get("stateCode").is_some());
        assert!(json.get("gstin").is_some());
        assert!(json.get("id").is_none());
    }
}
