use async_trait::async_trait;
use http::StatusCode;
use tracing::{debug, error};

use crate::clients::HttpClient;
use crate::error::{Error, Result};
use crate::models::VendorListResponse;

/// Fully-qualified name of the whitelisted server-side method.
const GET_VENDORS_METHOD: &str = "lexicon.lexicon.page.vendors.vendors.get_vendors";

/// The remote procedure supplying vendor records. The view only depends on
/// this trait, so tests can substitute a canned source.
#[async_trait]
pub trait VendorSource {
    async fn get_vendors(&self) -> Result<VendorListResponse>;
}

pub struct ApiService {
    client: HttpClient,
    base_url: String,
}

impl ApiService {
    pub fn new(client: HttpClient, base_url: String) -> Self {
        Self { client, base_url }
    }
}

#[async_trait]
impl VendorSource for ApiService {
    /// One parameterless call. No timeout, no retry: it either resolves with
    /// an envelope or fails exactly once.
    async fn get_vendors(&self) -> Result<VendorListResponse> {
        let url = format!(
            "{}/api/method/{}",
            self.base_url.trim_end_matches('/'),
            GET_VENDORS_METHOD
        );

        debug!(url = %url, "Fetching vendor list");

        let request = self.client.get(&url);
        let response = self.client.send(request).await?;
        let status = response.status();

        if status != StatusCode::OK {
            error!(status = status.as_u16(), url = %url, "Vendor list request failed");
            return Err(Error::UnexpectedStatus(status));
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|e| {
            let body_str = String::from_utf8_lossy(&body);
            error!(
                error = %e,
                body = %body_str,
                "Failed to parse vendor list response"
            );
            Error::from(e)
        })
    }
}
