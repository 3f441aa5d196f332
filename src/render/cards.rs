//! View-model shaped for the directory card markup.

use crate::models::VendorRecord;

/// Visual variant of the status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeVariant {
    Success,
    Secondary,
}

impl BadgeVariant {
    pub fn css_class(self) -> &'static str {
        match self {
            BadgeVariant::Success => "success",
            BadgeVariant::Secondary => "secondary",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VendorCard {
    pub title: String,
    pub vendor_type: String,
    pub email: String,
    pub phone: String,
    pub status_label: String,
    pub badge: BadgeVariant,
    /// Shown as a muted line when non-empty; the server returns this field
    /// even though most records leave it blank.
    pub description: Option<String>,
}

impl From<&VendorRecord> for VendorCard {
    fn from(record: &VendorRecord) -> Self {
        let badge = if record.is_active() {
            BadgeVariant::Success
        } else {
            BadgeVariant::Secondary
        };

        Self {
            title: record.vendor_name.clone(),
            vendor_type: record.vendor_type.clone(),
            email: record.email.clone(),
            phone: record.phone.clone(),
            status_label: record.status.clone(),
            badge,
            description: if record.description.is_empty() {
                None
            } else {
                Some(record.description.clone())
            },
        }
    }
}

/// One card per record, in record order.
pub fn cards_from_records(records: &[VendorRecord]) -> Vec<VendorCard> {
    records.iter().map(VendorCard::from).collect()
}
