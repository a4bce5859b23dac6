use crate::error::ClientError;
use crate::models::ActivityCatalog;
use log::{debug, error, info};
use reqwest::Client;
use url::Url;

use super::endpoint;

pub async fn get_activities(
    client: &Client,
    base_url: &Url,
) -> Result<ActivityCatalog, ClientError> {
    let url = endpoint(base_url, &["activities"])?;
    debug!("Fetching activities from {}", url);
    let resp = client.get(url).send().await?;

    if resp.status().is_success() {
        let catalog = resp.json::<ActivityCatalog>().await?;
        info!("Fetched {} activities", catalog.len());
        Ok(catalog)
    } else {
        error!("Failed to fetch activities: {}", resp.status());
        Err(ClientError::ListingUnavailable {
            status: resp.status(),
        })
    }
}
