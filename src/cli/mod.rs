//! # CLI Module
//!
//! Command-line layer of the collage tool. Each command loads the
//! configuration, drives the library, shows progress on a spinner and prints
//! the outcome with the colored output macros.
//!
//! ## Commands
//!
//! - [`create`] - Builds a collage of a user's top artists, uploads it to
//!   Imgur and opens the link
//! - [`top`] - Lists the ranked artists a collage would contain
//!
//! ## Data Flow
//!
//! ```text
//! CLI Layer (arguments, spinner, output)
//!     ↓
//! Management Layer (CollageCreator, controls, status)
//!     ↓
//! Service Layer (lastfm, collage, imgur)
//!     ↓
//! Network Layer (reqwest)
//! ```
//!
//! ## Error Handling
//!
//! Library errors are turned into one status line and printed with
//! `error!`, which ends the process with exit code 1.

mod collage;
mod progress;
mod top;

pub use collage::CreateOptions;
pub use collage::create;
pub use progress::SpinnerReporter;
pub use top::top;
