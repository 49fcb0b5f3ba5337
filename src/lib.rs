//! Top Artist Collage CLI Library
//!
//! This library builds a square collage of a user's most played artists from
//! Last.fm, labels every tile with the artist name and play count, and shares
//! the resulting PNG through Imgur.
//!
//! # Modules
//!
//! - `cli` - Command-line interface implementations
//! - `collage` - Image download, compositing and PNG encoding
//! - `config` - Configuration management and environment variables
//! - `error` - Error taxonomy for every phase of the workflow
//! - `imgur` - Imgur upload client
//! - `lastfm` - Last.fm statistics client
//! - `management` - Workflow orchestration, status reporting and control state
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers
//!
//! # Example
//!
//! ```
//! use collagecli::{config, management::CollageCreator, types::CollageRequest};
//!
//! #[tokio::main]
//! async fn main() -> collagecli::Res<()> {
//!     config::load_env().await?;
//!     let creator = CollageCreator::new(config::Config::from_env()?);
//!     let request = CollageRequest::new("testuser");
//!     let output = creator.create(&request, &|msg: &str| println!("{msg}")).await?;
//!     println!("{}", output.upload.link);
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod collage;
pub mod config;
pub mod error;
pub mod imgur;
pub mod lastfm;
pub mod management;
pub mod types;
pub mod utils;

/// A convenient Result type alias for operations that may fail.
///
/// Used by the command-line glue where the concrete error type does not
/// matter anymore and only needs to be printed.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// The line starts with a blue "o". Used for progress the user should see
/// but that needs no reaction, such as which user and period are fetched.
///
/// # Arguments
///
/// Same arguments as `println!`: a format string followed by its values.
///
/// # Example
///
/// ```
/// info!("Fetching top artists for {}", username);
/// info!("Collage written to {}", path.display());
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// The line starts with a green "✓" and marks a finished command.
///
/// # Arguments
///
/// Same arguments as `println!`: a format string followed by its values.
///
/// # Example
///
/// ```
/// success!("Collage uploaded to {}", link);
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Only meant for unrecoverable errors in the command-line layer. Library
/// code returns errors instead.
///
/// # Arguments
///
/// Same arguments as `println!`: a format string followed by its values.
///
/// # Behavior
///
/// Exits with code 1 right after printing.
///
/// # Example
///
/// ```
/// error!("Missing required environment variable: {}", var_name);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// The line starts with a yellow "!". Used when a command can go on, for
/// example when the grid cannot be filled or the browser does not start.
///
/// # Arguments
///
/// Same arguments as `println!`: a format string followed by its values.
///
/// # Example
///
/// ```
/// warning!("Failed to open browser, visit {} manually", link);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
