use reqwest::Client;

use crate::{
    config::Config,
    error::FetchError,
    types::{ArtistEntry, LastFmErrorResponse, TimeRange, TopArtistsResponse},
    utils,
};

/// Retrieves the top artists of `username` for `time_range`.
///
/// Issues a single `user.gettopartists` request for the first page with a
/// page size of `count`. The result keeps the ranking order of the API and
/// never holds more than `count` entries, even if Last.fm sends more.
///
/// # Arguments
///
/// * `config` - API key and endpoint
/// * `username` - Last.fm user whose statistics are read
/// * `time_range` - Statistical window
/// * `count` - Number of artists wanted, the tile count of the collage
///
/// # Errors
///
/// - [`FetchError::Api`] if Last.fm reports an error document
/// - [`FetchError::Status`] for non-success responses without such a document
/// - [`FetchError::Http`] for transport failures
/// - [`FetchError::Json`] if the body is not a top-artists document
/// - [`FetchError::Empty`] if the user has no artists in the window
///
/// # Example
///
/// ```
/// let artists = get_top_artists(&config, "testuser", TimeRange::Overall, 9).await?;
/// ```
pub async fn get_top_artists(
    config: &Config,
    username: &str,
    time_range: TimeRange,
    count: usize,
) -> Result<Vec<ArtistEntry>, FetchError> {
    let limit = count.to_string();

    tracing::debug!(
        username,
        period = time_range.as_period(),
        limit = count,
        url = %config.lastfm_api_url,
        "requesting top artists"
    );

    let client = Client::new();
    let response = client
        .get(&config.lastfm_api_url)
        .query(&[
            ("method", "user.gettopartists"),
            ("user", username),
            ("period", time_range.as_period()),
            ("page", "1"),
            ("limit", limit.as_str()),
            ("api_key", config.lastfm_api_key.as_str()),
            ("format", "json"),
        ])
        .send()
        .await?;

    let status = response.status();
    let body = response.text().await?;

    if let Ok(err) = serde_json::from_str::<LastFmErrorResponse>(&body) {
        return Err(FetchError::Api {
            code: err.error,
            message: err.message,
        });
    }
    if !status.is_success() {
        return Err(FetchError::Status(status));
    }

    let res: TopArtistsResponse = serde_json::from_str(&body)?;
    let artists = into_entries(res, count);
    if artists.is_empty() {
        return Err(FetchError::Empty);
    }

    Ok(artists)
}

fn into_entries(res: TopArtistsResponse, count: usize) -> Vec<ArtistEntry> {
    res.topartists
        .artist
        .into_iter()
        .take(count)
        .map(|a| ArtistEntry {
            image_url: utils::pick_image_url(&a.image),
            play_count: utils::parse_play_count(&a.playcount),
            name: a.name,
        })
        .collect()
}
