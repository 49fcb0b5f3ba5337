pub const STATUS_FETCHING_TOP_ARTISTS: &str = "Fetching top artists...";
pub const STATUS_GETTING_ARTIST_IMAGES: &str = "Getting artist images...";
pub const STATUS_DOWNLOADING_IMAGES: &str = "Downloading images...";
pub const STATUS_UPLOADING_IMAGE: &str = "Uploading image...";
pub const STATUS_SUCCESS: &str = "Successfully created collage";

/// Receives the human readable progress lines of a collage run.
///
/// Any `Fn(&str)` closure is a reporter, which keeps presentation layers and
/// tests free to collect or display the lines however they like.
pub trait StatusReporter {
    fn status(&self, message: &str);
}

impl<F> StatusReporter for F
where
    F: Fn(&str),
{
    fn status(&self, message: &str) {
        self(message)
    }
}
