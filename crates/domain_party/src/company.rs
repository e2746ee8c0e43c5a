//! Company information singleton
//!
//! One record per installation, stored under a fixed key. Carries the
//! identity and banking details printed on every invoice.

use core_kernel::RecordKey;
use serde::{Deserialize, Serialize};

/// The fixed key of the company information record
pub const COMPANY_RECORD_KEY: RecordKey = RecordKey::new(1);

/// Company identity and banking details
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CompanyInfo {
    pub name: String,
    pub address: String,
    pub gst: String,
    pub mobile: String,
    pub email: String,
    pub account_holder: String,
    pub account_number: String,
    pub ifsc_code: String,
    pub branch: String,
    pub bank_name: String,
}
