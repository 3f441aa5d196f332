//! View-level scenarios: populated, empty, and error renders through the
//! page shell, driven by a canned vendor source.

use async_trait::async_trait;
use http::StatusCode;

use vendor_directory::error::{Error, Result};
use vendor_directory::models::VendorListResponse;
use vendor_directory::page::{HtmlBuffer, Region};
use vendor_directory::services::VendorSource;
use vendor_directory::view::{PAGE_TITLE, VendorDirectoryView};

/// Replays a fixed JSON envelope, or fails when `body` is `None`.
struct CannedSource {
    body: Option<&'static str>,
}

impl CannedSource {
    fn ok(body: &'static str) -> Self {
        Self { body: Some(body) }
    }

    fn failing() -> Self {
        Self { body: None }
    }
}

#[async_trait]
impl VendorSource for CannedSource {
    async fn get_vendors(&self) -> Result<VendorListResponse> {
        match self.body {
            Some(body) => Ok(serde_json::from_str(body)?),
            None => Err(Error::UnexpectedStatus(StatusCode::INTERNAL_SERVER_ERROR)),
        }
    }
}

const ACME_ACTIVE: &str = r#"{"message": [
    {"vendor_name": "Acme", "type": "Supplier", "email": "a@x.com", "phone": "555", "status": "Active"}
]}"#;

#[tokio::test]
async fn populated_response_renders_one_card_with_success_badge() {
    let view = VendorDirectoryView::new(CannedSource::ok(ACME_ACTIVE));
    let page = view.activate(HtmlBuffer::new()).await;

    assert_eq!(page.title(), PAGE_TITLE);
    assert!(page.is_single_column());

    let html = page.body.content();
    assert_eq!(html.matches("<div class=\"card").count(), 1);
    assert!(html.contains(r#"<h4 class="mb-2">Acme</h4>"#));
    assert!(html.contains(r#"<span class="badge bg-success">Active</span>"#));
}

#[tokio::test]
async fn inactive_vendor_gets_secondary_badge() {
    let view = VendorDirectoryView::new(CannedSource::ok(
        r#"{"message": [{"vendor_name": "Acme", "status": "Inactive"}]}"#,
    ));
    let page = view.activate(HtmlBuffer::new()).await;
    assert!(page.body.content().contains(r#"<span class="badge bg-secondary">Inactive</span>"#));
}

#[tokio::test]
async fn empty_list_renders_empty_state() {
    let view = VendorDirectoryView::new(CannedSource::ok(r#"{"message": []}"#));
    let page = view.activate(HtmlBuffer::new()).await;
    assert_eq!(
        page.body.content(),
        r#"<p class="text-muted p-3">No vendors found.</p>"#
    );
}

#[tokio::test]
async fn null_message_renders_empty_state() {
    let view = VendorDirectoryView::new(CannedSource::ok(r#"{"message": null}"#));
    let page = view.activate(HtmlBuffer::new()).await;
    assert_eq!(
        page.body.content(),
        r#"<p class="text-muted p-3">No vendors found.</p>"#
    );
}

#[tokio::test]
async fn failed_call_renders_error_state() {
    let view = VendorDirectoryView::new(CannedSource::failing());
    let page = view.activate(HtmlBuffer::new()).await;
    assert_eq!(
        page.body.content(),
        r#"<p class="text-danger p-3">Error loading vendors.</p>"#
    );
}

#[tokio::test]
async fn error_render_leaves_no_residue_from_prior_content() {
    let mut container = HtmlBuffer::new();
    container.set_content("<div>stale cards</div>");

    let view = VendorDirectoryView::new(CannedSource::failing());
    let page = view.activate(container).await;
    assert_eq!(
        page.body.content(),
        r#"<p class="text-danger p-3">Error loading vendors.</p>"#
    );
}

#[tokio::test]
async fn card_count_and_order_follow_the_response() {
    let view = VendorDirectoryView::new(CannedSource::ok(
        r#"{"message": [
            {"vendor_name": "Zulu", "status": "Active"},
            {"vendor_name": "Acme", "status": "Inactive"},
            {"vendor_name": "Mango"}
        ]}"#,
    ));
    let page = view.activate(HtmlBuffer::new()).await;
    let html = page.body.content();

    assert_eq!(html.matches("<div class=\"card").count(), 3);
    let zulu = html.find("Zulu").unwrap();
    let acme = html.find("Acme").unwrap();
    let mango = html.find("Mango").unwrap();
    assert!(zulu < acme && acme < mango);
}

#[tokio::test]
async fn reactivation_with_identical_response_is_byte_identical() {
    let view = VendorDirectoryView::new(CannedSource::ok(ACME_ACTIVE));

    let first = view.activate(HtmlBuffer::new()).await;
    let second = view.activate(HtmlBuffer::new()).await;

    assert_eq!(first.body.content(), second.body.content());
}

#[tokio::test]
async fn record_fields_are_escaped_before_rendering() {
    let view = VendorDirectoryView::new(CannedSource::ok(
        r#"{"message": [{"vendor_name": "<img src=x onerror=alert(1)>", "status": "Active"}]}"#,
    ));
    let page = view.activate(HtmlBuffer::new()).await;
    let html = page.body.content();

    assert!(!html.contains("<img"));
    assert!(html.contains("&lt;img src=x onerror=alert(1)&gt;"));
}
