mod response;
mod vendor;

pub use response::VendorListResponse;
pub use vendor::VendorRecord;
