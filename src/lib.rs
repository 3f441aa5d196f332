pub mod clients;
pub mod config;
pub mod error;
pub mod models;
pub mod page;
pub mod render;
pub mod services;
pub mod view;

pub use error::{Error, Result};
pub use models::VendorRecord;
pub use view::VendorDirectoryView;
