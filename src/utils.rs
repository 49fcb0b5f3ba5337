use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

use crate::types::{ArtistEntry, GridSize, LastFmImage, TimeRange};

/// Image sizes Last.fm offers, largest first.
const IMAGE_SIZES: [&str; 5] = ["mega", "extralarge", "large", "medium", "small"];

pub fn parse_time_range(s: &str) -> Result<TimeRange, String> {
    let value = s.trim().to_ascii_lowercase().replace(['-', '_', ' '], "");
    if value.is_empty() {
        return Err("time range cannot be empty".into());
    }

    match value.as_str() {
        "overall" | "all" | "alltime" => Ok(TimeRange::Overall),
        "7day" | "7days" | "week" => Ok(TimeRange::SevenDay),
        "1month" | "month" => Ok(TimeRange::OneMonth),
        "3month" | "3months" => Ok(TimeRange::ThreeMonth),
        "6month" | "6months" => Ok(TimeRange::SixMonth),
        "12month" | "12months" | "year" => Ok(TimeRange::TwelveMonth),
        _ => Err(format!(
            "invalid value '{}'. Allowed: overall, 7day, 1month, 3month, 6month, 12month",
            s.trim()
        )),
    }
}

pub fn parse_grid_size(s: &str) -> Result<GridSize, String> {
    let value = s.trim().to_ascii_lowercase();
    match value.as_str() {
        "3" | "3x3" => Ok(GridSize::Three),
        "4" | "4x4" => Ok(GridSize::Four),
        "5" | "5x5" => Ok(GridSize::Five),
        "" => Err("grid size cannot be empty".into()),
        _ => Err(format!(
            "invalid value '{}'. Allowed: 3, 4, 5",
            s.trim()
        )),
    }
}

/// Picks the image used for a tile, preferring `extralarge`.
///
/// Last.fm sends empty strings for sizes it has no image for, those count as
/// missing.
pub fn pick_image_url(images: &[LastFmImage]) -> Option<String> {
    let find = |size: &str| {
        images
            .iter()
            .find(|i| i.size == size && !i.url.trim().is_empty())
            .map(|i| i.url.trim().to_string())
    };

    find("extralarge").or_else(|| IMAGE_SIZES.iter().find_map(|size| find(*size)))
}

/// Parses Last.fm's string play count. Malformed counts are logged and
/// shown as zero.
pub fn parse_play_count(raw: &str) -> u64 {
    match raw.trim().parse() {
        Ok(count) => count,
        Err(e) => {
            tracing::warn!(playcount = raw, error = %e, "malformed play count");
            0
        }
    }
}

pub fn label_text(artist: &ArtistEntry) -> String {
    format!("{}\nPlays: {}", artist.name, artist.play_count)
}

/// Pixel origin of the tile at `index`, filled row by row.
pub fn tile_origin(index: usize, grid: GridSize, cell: (u32, u32)) -> (u32, u32) {
    let side = grid.side() as usize;
    let col = (index % side) as u32;
    let row = (index / side) as u32;
    (col * cell.0, row * cell.1)
}

/// Greedy word wrap of `text` so every line measures at most `max_width`.
///
/// Explicit newlines are kept. A single word wider than `max_width` gets a
/// line of its own and is left to be clipped by the caller.
pub fn wrap_label<F>(text: &str, max_width: u32, measure: F) -> Vec<String>
where
    F: Fn(&str) -> u32,
{
    let mut lines = Vec::new();

    for paragraph in text.lines() {
        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            if current.is_empty() {
                current.push_str(word);
                continue;
            }

            let candidate = format!("{current} {word}");
            if measure(&candidate) <= max_width {
                current = candidate;
            } else {
                lines.push(std::mem::take(&mut current));
                current.push_str(word);
            }
        }
        lines.push(current);
    }

    lines
}

/// Resolves where `--save` writes the PNG.
///
/// A directory gets a generated file name, anything else is used verbatim.
pub fn output_path(target: &Path, username: &str, now: DateTime<Utc>) -> PathBuf {
    if target.is_dir() {
        let user: String = username
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
            .collect();
        target.join(format!(
            "collage-{user}-{stamp}.png",
            stamp = now.format("%Y%m%d-%H%M%S")
        ))
    } else {
        target.to_path_buf()
    }
}
