//! HTML assembly for the three view states.
//!
//! Every interpolated field goes through [`escape`]; the markup itself is
//! fixed, so the output for a given card list is deterministic.

use std::fmt::Write;

use super::cards::VendorCard;

pub const EMPTY_STATE: &str = r#"<p class="text-muted p-3">No vendors found.</p>"#;
pub const ERROR_STATE: &str = r#"<p class="text-danger p-3">Error loading vendors.</p>"#;

fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn write_card(out: &mut String, card: &VendorCard) {
    let _ = write!(
        out,
        concat!(
            r#"<div class="card p-3 m-2 shadow-sm" style="border-left: 4px solid #007bff">"#,
            r#"<h4 class="mb-2">{title}</h4>"#,
            r#"<p class="mb-1"><strong>Type:</strong> {vendor_type}</p>"#,
            r#"<p class="mb-1"><strong>Email:</strong> {email}</p>"#,
            r#"<p class="mb-1"><strong>Phone:</strong> {phone}</p>"#,
        ),
        title = escape(&card.title),
        vendor_type = escape(&card.vendor_type),
        email = escape(&card.email),
        phone = escape(&card.phone),
    );

    if let Some(description) = &card.description {
        let _ = write!(
            out,
            r#"<p class="mb-1 text-muted">{}</p>"#,
            escape(description)
        );
    }

    let _ = write!(
        out,
        r#"<span class="badge bg-{}">{}</span></div>"#,
        card.badge.css_class(),
        escape(&card.status_label),
    );
}

/// Populated state: one card per entry, concatenated in order.
pub fn render_cards(cards: &[VendorCard]) -> String {
    let mut out = String::new();
    for card in cards {
        write_card(&mut out, card);
    }
    out
}

pub fn render_empty() -> &'static str {
    EMPTY_STATE
}

pub fn render_error() -> &'static str {
    ERROR_STATE
}
