//! Single-request download step shared by the index and detail fetches.

use crate::ProviderError;
use reqwest::StatusCode;

/// Fetch `url` and return the response body as text.
///
/// Anything other than a 200 is a [`ProviderError::Download`]; transport
/// failures come through as [`ProviderError::Fetch`]. No retries, no timeouts
/// beyond the client defaults.
pub async fn download(client: &reqwest::Client, url: &str) -> Result<String, ProviderError> {
    let res = client.get(url).send().await?;

    if res.status() != StatusCode::OK {
        return Err(ProviderError::Download {
            url: url.to_string(),
            status: res.status(),
        });
    }

    Ok(res.text().await?)
}
