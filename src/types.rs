use std::fmt;

use serde::{Deserialize, Serialize};
use tabled::Tabled;

/// Statistical window over which Last.fm ranks the top artists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TimeRange {
    #[default]
    Overall,
    SevenDay,
    OneMonth,
    ThreeMonth,
    SixMonth,
    TwelveMonth,
}

impl TimeRange {
    pub const ALL: [TimeRange; 6] = [
        TimeRange::Overall,
        TimeRange::SevenDay,
        TimeRange::OneMonth,
        TimeRange::ThreeMonth,
        TimeRange::SixMonth,
        TimeRange::TwelveMonth,
    ];

    /// Value of the `period` query parameter.
    pub fn as_period(&self) -> &'static str {
        match self {
            TimeRange::Overall => "overall",
            TimeRange::SevenDay => "7day",
            TimeRange::OneMonth => "1month",
            TimeRange::ThreeMonth => "3month",
            TimeRange::SixMonth => "6month",
            TimeRange::TwelveMonth => "12month",
        }
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_period())
    }
}

/// Side length of the collage grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GridSize {
    #[default]
    Three = 3,
    Four = 4,
    Five = 5,
}

impl GridSize {
    pub const ALL: [GridSize; 3] = [GridSize::Three, GridSize::Four, GridSize::Five];

    pub fn side(&self) -> u32 {
        *self as u32
    }

    /// Number of tiles, and therefore number of artists requested.
    pub fn tile_count(&self) -> usize {
        let side = self.side() as usize;
        side * side
    }
}

impl fmt::Display for GridSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{side}x{side}", side = self.side())
    }
}

/// Everything needed to build one collage. Not modified once a run starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollageRequest {
    pub username: String,
    pub time_range: TimeRange,
    pub grid_size: GridSize,
}

impl CollageRequest {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            time_range: TimeRange::default(),
            grid_size: GridSize::default(),
        }
    }

    pub fn with_time_range(mut self, time_range: TimeRange) -> Self {
        self.time_range = time_range;
        self
    }

    pub fn with_grid_size(mut self, grid_size: GridSize) -> Self {
        self.grid_size = grid_size;
        self
    }
}

/// One ranked artist. Position in the returned list is the tile position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtistEntry {
    pub name: String,
    pub play_count: u64,
    pub image_url: Option<String>,
}

/// Shareable link returned by the image host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadResult {
    pub link: String,
}

#[derive(Tabled)]
pub struct ArtistTableRow {
    pub rank: usize,
    pub name: String,
    pub plays: u64,
    pub image: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopArtistsResponse {
    pub topartists: TopArtistsContainer,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopArtistsContainer {
    #[serde(default)]
    pub artist: Vec<LastFmArtist>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LastFmArtist {
    pub name: String,
    pub playcount: String,
    #[serde(default)]
    pub image: Vec<LastFmImage>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LastFmImage {
    #[serde(rename = "#text")]
    pub url: String,
    pub size: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LastFmErrorResponse {
    pub error: u32,
    pub message: String,
}
