mod controls;
mod creator;
mod opener;
mod status;

pub use controls::Controls;
pub use controls::ControlsGuard;
pub use creator::CollageCreator;
pub use creator::CollageOutput;
pub use opener::BrowserOpener;
pub use opener::LinkOpener;
pub use opener::NoopOpener;
pub use status::STATUS_DOWNLOADING_IMAGES;
pub use status::STATUS_FETCHING_TOP_ARTISTS;
pub use status::STATUS_GETTING_ARTIST_IMAGES;
pub use status::STATUS_SUCCESS;
pub use status::STATUS_UPLOADING_IMAGE;
pub use status::StatusReporter;
