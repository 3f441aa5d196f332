use serde::Deserialize;

use super::vendor::VendorRecord;

/// Envelope returned by the remote procedure: `{"message": [...]}`.
#[derive(Debug, Deserialize)]
pub struct VendorListResponse {
    #[serde(default)]
    pub message: Option<Vec<VendorRecord>>,
}

impl VendorListResponse {
    /// Collapses `null`, an absent key, and an empty list into one predicate,
    /// so the view has a single empty-state branch.
    pub fn is_empty_or_absent(&self) -> bool {
        self.message.as_ref().is_none_or(|records| records.is_empty())
    }

    /// Records in response order. No sorting or dedup happens client-side.
    pub fn into_records(self) -> Vec<VendorRecord> {
        self.message.unwrap_or_default()
    }
}
