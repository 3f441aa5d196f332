//! The vendor directory view: one fetch, one render.

use tracing::{debug, warn};

use crate::page::{Page, PageConfig, Region, make_app_page};
use crate::render::cards::{VendorCard, cards_from_records};
use crate::render::html;
use crate::services::VendorSource;

pub const PAGE_TITLE: &str = "Vendors Directory";

/// Terminal render state of one activation. Exactly one of these is produced
/// per activation; a fresh activation starts over from scratch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
    Populated(Vec<VendorCard>),
    Empty,
    Error,
}

impl ViewState {
    pub fn render(&self) -> String {
        match self {
            ViewState::Populated(cards) => html::render_cards(cards),
            ViewState::Empty => html::render_empty().to_string(),
            ViewState::Error => html::render_error().to_string(),
        }
    }
}

pub struct VendorDirectoryView<S> {
    source: S,
}

impl<S: VendorSource> VendorDirectoryView<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Builds the page shell, awaits the single vendor list call, and writes
    /// the rendered fragment into the page body. Replacing the body content
    /// is the only side effect; failures never propagate past this method.
    pub async fn activate<R: Region>(&self, container: R) -> Page<R> {
        let mut page = make_app_page(container, PageConfig::single_column(PAGE_TITLE));
        let state = self.load().await;
        page.body.set_content(&state.render());
        page
    }

    async fn load(&self) -> ViewState {
        match self.source.get_vendors().await {
            Ok(response) if response.is_empty_or_absent() => {
                debug!("Vendor list is empty");
                ViewState::Empty
            }
            Ok(response) => {
                let records = response.into_records();
                debug!(count = records.len(), "Rendering vendor list");
                ViewState::Populated(cards_from_records(&records))
            }
            Err(e) => {
                warn!(error = %e, "Failed to load vendor list");
                ViewState::Error
            }
        }
    }
}
