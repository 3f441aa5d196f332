use serde::{Deserialize, Serialize};

/// One vendor directory entry as returned by the remote procedure.
///
/// The server-side contract does not guarantee field completeness, so every
/// field defaults to an empty string when absent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VendorRecord {
    #[serde(default)]
    pub vendor_name: String,
    #[serde(default, rename = "type")]
    pub vendor_type: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub description: String,
}

impl VendorRecord {
    /// "Active" is the only status with special treatment; every other value
    /// (including empty) gets the secondary badge.
    pub fn is_active(&self) -> bool {
        self.status == "Active"
    }
}
