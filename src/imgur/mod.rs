//! # Imgur Integration Module
//!
//! Anonymous image upload to Imgur. The collage is sent base64 encoded as a
//! form post and the XML flavour of the upload endpoint is used, so the
//! shareable link is read from the first `<link>` element of the response.
//!
//! The client id comes from [`crate::config::Config`] and is sent as
//! `Authorization: Client-ID <id>`. Uploads are not retried or resumed.

pub mod upload;

pub use upload::{parse_link, upload_image};
