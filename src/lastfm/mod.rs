//! # Last.fm Integration Module
//!
//! Thin client for the parts of the Last.fm web API the collage needs. All
//! requests go to the endpoint configured in [`crate::config::Config`] and are
//! signed with the configured API key only; no user authentication is
//! required to read public listening statistics.
//!
//! ## API Coverage
//!
//! - `user.gettopartists` - ranked artists of a user for a time range
//!
//! ## Error Handling
//!
//! Last.fm reports failures as a JSON document `{"error": <code>, "message":
//! <text>}`, sometimes with a 200 status. Both that document and non-success
//! HTTP statuses become a [`crate::error::FetchError`]. There is no retry.

pub mod artists;
