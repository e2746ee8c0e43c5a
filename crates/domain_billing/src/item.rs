//! Reusable item master records

use serde::{Deserialize, Serialize};

use core_kernel::RecordKey;

/// A saved item description, reusable across bills
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordKey>,
    pub desc: String,
    #[serde(default)]
    pub hsn: String,
    #[serde(default)]
    pub per: String,
    #[serde(default)]
    pub rate: String,
    #[serde(default)]
    pub timestamp: i64,
}

impl Item {
    /// True when description or HSN code contains the lowercased needle
    pub fn matches_search(&self, needle_lower: &str) -> bool {
        self.desc.to_lowercase().contains(needle_lower)
            || self.hsn.to_lowercase().contains(needle_lower)
    }

    /// Duplicate rule: same description and HSN code
    ///
    /// Rate is excluded on purpose; the same item at a new price is still
    /// the same item.
    pub fn is_same_record(&self, other: &Item) -> bool {
        self.desc == other.desc && self.hsn == other.hsn
    }
}
