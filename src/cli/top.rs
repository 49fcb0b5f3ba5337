use tabled::Table;

use crate::{
    cli::progress::SpinnerReporter,
    config::Config,
    error, lastfm,
    management::{STATUS_FETCHING_TOP_ARTISTS, StatusReporter},
    types::{ArtistTableRow, GridSize, TimeRange},
    warning,
};

/// Lists the artists that would fill a collage, without building it.
///
/// # Example Usage
///
/// ```bash
/// collagecli top testuser --period 1month --size 5
/// ```
pub async fn top(username: String, time_range: TimeRange, grid_size: GridSize) {
    let config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => error!("Cannot load configuration. Err: {}", e),
    };

    let reporter = SpinnerReporter::new();
    reporter.status(STATUS_FETCHING_TOP_ARTISTS);
    let result =
        lastfm::artists::get_top_artists(&config, &username, time_range, grid_size.tile_count())
            .await;
    reporter.finish();

    let artists = match result {
        Ok(artists) => artists,
        Err(e) => error!("Error while fetching top artists. Err: {}", e),
    };

    if artists.len() < grid_size.tile_count() {
        warning!(
            "Only {} of {} tiles can be filled for {}.",
            artists.len(),
            grid_size.tile_count(),
            grid_size
        );
    }

    let table_rows: Vec<ArtistTableRow> = artists
        .into_iter()
        .enumerate()
        .map(|(i, a)| ArtistTableRow {
            rank: i + 1,
            name: a.name,
            plays: a.play_count,
            image: if a.image_url.is_some() { "yes" } else { "no" }.to_string(),
        })
        .collect();

    let table = Table::new(table_rows);
    println!(
        "Top artists of {user} ({period})\n{table}",
        user = username,
        period = time_range,
        table = table
    );
}
