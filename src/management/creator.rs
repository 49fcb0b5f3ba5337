use ab_glyph::FontArc;
use image::RgbaImage;

use crate::{
    collage::{self, Tile},
    config::Config,
    error::{CollageError, DecodeError, UploadError},
    imgur,
    lastfm,
    management::{
        BrowserOpener, Controls, LinkOpener, StatusReporter,
        status::{
            STATUS_DOWNLOADING_IMAGES, STATUS_FETCHING_TOP_ARTISTS, STATUS_GETTING_ARTIST_IMAGES,
            STATUS_SUCCESS, STATUS_UPLOADING_IMAGE,
        },
    },
    types::{CollageRequest, UploadResult},
};

/// Result of a successful collage run.
#[derive(Debug, Clone)]
pub struct CollageOutput {
    pub upload: UploadResult,
    /// The uploaded PNG.
    pub png: Vec<u8>,
}

/// Runs the collage workflow: fetch, download, composite, encode, upload and
/// open the link.
///
/// One creator runs at most one collage at a time. While a run is in
/// progress its [`Controls`] are disabled and a second call fails with
/// [`CollageError::Busy`]. The controls are enabled again when the run ends,
/// whatever the outcome.
pub struct CollageCreator {
    config: Config,
    controls: Controls,
    opener: Box<dyn LinkOpener>,
    font: Option<FontArc>,
}

impl CollageCreator {
    pub fn new(config: Config) -> Self {
        let font = collage::load_font(config.font_path.as_deref());
        if font.is_none() {
            tracing::warn!("no usable font found, tiles will not be labelled");
        }

        Self {
            config,
            controls: Controls::new(),
            opener: Box::new(BrowserOpener),
            font,
        }
    }

    pub fn with_opener(mut self, opener: impl LinkOpener + 'static) -> Self {
        self.opener = Box::new(opener);
        self
    }

    pub fn with_font(mut self, font: Option<FontArc>) -> Self {
        self.font = font;
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn controls(&self) -> &Controls {
        &self.controls
    }

    /// Builds the collage, uploads it and hands the link to the opener.
    ///
    /// Every phase is announced on `status`. Failures are reported there as
    /// a single line and returned; nothing is retried and no partial result
    /// is kept. A link that cannot be opened is only logged.
    pub async fn create<S>(
        &self,
        request: &CollageRequest,
        status: &S,
    ) -> Result<CollageOutput, CollageError>
    where
        S: StatusReporter + ?Sized,
    {
        let _guard = self.controls.try_disable().ok_or(CollageError::Busy)?;
        let result = self.create_and_upload(request, status).await;
        finish(result, status)
    }

    /// Builds the collage canvas without uploading it.
    pub async fn render<S>(
        &self,
        request: &CollageRequest,
        status: &S,
    ) -> Result<RgbaImage, CollageError>
    where
        S: StatusReporter + ?Sized,
    {
        let _guard = self.controls.try_disable().ok_or(CollageError::Busy)?;
        let result = self.compose_canvas(request, status).await;
        finish(result, status)
    }

    async fn create_and_upload<S>(
        &self,
        request: &CollageRequest,
        status: &S,
    ) -> Result<CollageOutput, CollageError>
    where
        S: StatusReporter + ?Sized,
    {
        let canvas = self.compose_canvas(request, status).await?;

        status.status(STATUS_UPLOADING_IMAGE);
        let png = tokio::task::spawn_blocking(move || collage::encode_png(&canvas))
            .await?
            .map_err(UploadError::Encode)?;
        let upload = imgur::upload_image(&self.config, &png).await?;

        if let Err(e) = self.opener.open(&upload.link) {
            tracing::warn!(link = %upload.link, error = %e, "failed to open link");
        }

        Ok(CollageOutput { upload, png })
    }

    async fn compose_canvas<S>(
        &self,
        request: &CollageRequest,
        status: &S,
    ) -> Result<RgbaImage, CollageError>
    where
        S: StatusReporter + ?Sized,
    {
        status.status(STATUS_FETCHING_TOP_ARTISTS);
        let artists = lastfm::artists::get_top_artists(
            &self.config,
            &request.username,
            request.time_range,
            request.grid_size.tile_count(),
        )
        .await?;

        status.status(STATUS_GETTING_ARTIST_IMAGES);
        let urls: Vec<Option<String>> = artists.iter().map(|a| a.image_url.clone()).collect();

        status.status(STATUS_DOWNLOADING_IMAGES);
        let images = collage::download_images(&urls).await?;
        let cell = collage::cell_size(&images).ok_or(DecodeError::NoImages)?;

        tracing::debug!(
            artists = artists.len(),
            cell_width = cell.0,
            cell_height = cell.1,
            grid = %request.grid_size,
            "compositing collage"
        );

        let grid = request.grid_size;
        let font = self.font.clone();
        let canvas = tokio::task::spawn_blocking(move || {
            let tiles: Vec<Tile<'_>> = artists
                .iter()
                .zip(images.iter())
                .map(|(artist, image)| Tile {
                    image: image.as_ref(),
                    artist,
                })
                .collect();
            collage::compose(grid, cell, &tiles, font.as_ref())
        })
        .await?;

        Ok(canvas)
    }
}

fn finish<T, S>(result: Result<T, CollageError>, status: &S) -> Result<T, CollageError>
where
    S: StatusReporter + ?Sized,
{
    match &result {
        Ok(_) => status.status(STATUS_SUCCESS),
        Err(err) => {
            tracing::debug!(error = %err, "collage run failed");
            status.status(&err.status_message());
        }
    }
    result
}
