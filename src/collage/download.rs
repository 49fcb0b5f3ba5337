use futures::future::try_join_all;
use image::RgbaImage;
use reqwest::Client;

use crate::error::DecodeError;

/// Downloads and decodes every image in `urls`, keeping their order.
///
/// All downloads are started at once and the call completes only when every
/// one of them has finished. `None` entries stay `None` without a request.
/// The first download or decode failure aborts the whole batch.
///
/// # Errors
///
/// - [`DecodeError::Http`] if an image cannot be fetched
/// - [`DecodeError::Image`] if the bytes are not a supported image
pub async fn download_images(
    urls: &[Option<String>],
) -> Result<Vec<Option<RgbaImage>>, DecodeError> {
    let client = Client::new();

    let downloads = urls.iter().map(|url| {
        let client = client.clone();
        async move {
            match url {
                Some(url) => download_image(&client, url).await.map(Some),
                None => Ok(None),
            }
        }
    });

    try_join_all(downloads).await
}

async fn download_image(client: &Client, url: &str) -> Result<RgbaImage, DecodeError> {
    let http_err = |source: reqwest::Error| DecodeError::Http {
        url: url.to_string(),
        source,
    };

    let bytes = client
        .get(url)
        .send()
        .await
        .and_then(|r| r.error_for_status())
        .map_err(http_err)?
        .bytes()
        .await
        .map_err(http_err)?;

    let decoded = image::load_from_memory(&bytes).map_err(|source| DecodeError::Image {
        url: url.to_string(),
        source,
    })?;

    tracing::debug!(
        url,
        width = decoded.width(),
        height = decoded.height(),
        "decoded artist image"
    );
    Ok(decoded.to_rgba8())
}
