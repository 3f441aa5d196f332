use http::header::{HeaderMap, HeaderName, HeaderValue};
use rquest::{Client, RequestBuilder, Response};
use rquest_util::Emulation;
use tracing::{debug, error};

use crate::config::ServerConfig;
use crate::error::Result;

pub struct HttpClient {
    client: Client,
    headers: HeaderMap,
}

impl HttpClient {
    pub fn new(server: &ServerConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();

        for (key, value) in server.headers.iter() {
            if let (Ok(header_name), Ok(header_value)) = (
                HeaderName::from_bytes(key.as_bytes()),
                HeaderValue::from_str(value),
            ) {
                headers.insert(header_name, header_value);
            } else {
                error!(
                    header_key = key,
                    header_value = value,
                    "Invalid header value"
                );
            }
        }

        let client = Client::builder()
            .emulation(Emulation::Chrome133)
            .build()?;

        Ok(Self { client, headers })
    }

    pub fn get(&self, url: &str) -> RequestBuilder {
        let mut request = self.client.get(url);

        for (key, value) in self.headers.iter() {
            request = request.header(key, value);
        }

        request
    }

    pub async fn send(&self, request: RequestBuilder) -> Result<Response> {
        let response = request.send().await?;

        debug!(
            status = response.status().as_u16(),
            url = %response.url(),
            "Response received"
        );

        Ok(response)
    }
}
