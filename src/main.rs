use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use vendor_directory::clients::HttpClient;
use vendor_directory::config::Settings;
use vendor_directory::page::HtmlBuffer;
use vendor_directory::services::ApiService;
use vendor_directory::view::VendorDirectoryView;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let settings = Settings::new()?;
    info!(base_url = %settings.server.base_url, "Starting vendor directory");

    let client = HttpClient::new(&settings.server)?;
    let api = ApiService::new(client, settings.server.base_url.clone());
    let view = VendorDirectoryView::new(api);

    let page = view.activate(HtmlBuffer::new()).await;

    println!("{}", page.body.content());

    Ok(())
}
