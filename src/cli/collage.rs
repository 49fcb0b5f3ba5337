use std::path::PathBuf;

use chrono::Utc;

use crate::{
    cli::progress::SpinnerReporter,
    collage::encode_png,
    config::Config,
    error,
    error::CollageError,
    management::{CollageCreator, NoopOpener},
    success,
    types::{CollageRequest, GridSize, TimeRange},
    utils, warning,
};

/// Options of the `create` command.
#[derive(Debug, Clone)]
pub struct CreateOptions {
    pub username: String,
    pub time_range: TimeRange,
    pub grid_size: GridSize,
    pub save: Option<PathBuf>,
    pub open: bool,
    pub upload: bool,
}

/// Builds a collage for the given user and shares it.
///
/// Runs the whole workflow with a spinner showing the current phase. On
/// success the Imgur link is printed and, unless disabled, opened in the
/// default browser. `--save` additionally writes the PNG to disk and
/// `--no-upload` stops after rendering.
///
/// # Example Usage
///
/// ```bash
/// collagecli create testuser --period 7day --size 4
/// collagecli create testuser --no-upload --save ~/Pictures
/// ```
pub async fn create(opts: CreateOptions) {
    let config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => error!("Cannot load configuration. Err: {}", e),
    };

    let mut creator = CollageCreator::new(config);
    if !opts.open {
        creator = creator.with_opener(NoopOpener);
    }

    let request = CollageRequest::new(opts.username.clone())
        .with_time_range(opts.time_range)
        .with_grid_size(opts.grid_size);

    let reporter = SpinnerReporter::new();

    let png = if opts.upload {
        let result = creator.create(&request, &reporter).await;
        reporter.finish();
        match result {
            Ok(output) => {
                success!("Successfully created collage: {}", output.upload.link);
                output.png
            }
            Err(e) => error!("{}", e.status_message()),
        }
    } else {
        let result = creator.render(&request, &reporter).await;
        reporter.finish();
        let png = result.and_then(|canvas| {
            encode_png(&canvas).map_err(|e| CollageError::Generic(e.to_string()))
        });
        match png {
            Ok(png) => {
                success!("Successfully created collage");
                png
            }
            Err(e) => error!("{}", e.status_message()),
        }
    };

    let Some(target) = opts.save else {
        if !opts.upload {
            warning!("Nothing to do with the collage, pass --save to keep it.");
        }
        return;
    };

    let path = utils::output_path(&target, &opts.username, Utc::now());
    match async_fs::write(&path, png).await {
        Ok(()) => success!("Saved collage to {}", path.display()),
        Err(e) => error!("Failed to save collage to {}. Err: {}", path.display(), e),
    }
}
