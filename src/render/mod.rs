pub mod cards;
pub mod html;

pub use cards::{BadgeVariant, VendorCard};
pub use html::{render_cards, render_empty, render_error};
