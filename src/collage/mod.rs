//! # Collage Module
//!
//! Turns a ranked artist list into the final PNG.
//!
//! ```text
//! image URLs ──download──> decoded tiles ──compose──> canvas ──encode──> PNG / base64
//! ```
//!
//! - [`download`] fetches and decodes every artist image concurrently and
//!   only returns once all of them are done.
//! - [`compositor`] lays the tiles out on the grid and draws the labels.
//! - [`font`] locates the font used for labels, falling back to the bundled one.
//! - [`encode`] serializes the canvas for upload.

pub mod compositor;
pub mod download;
pub mod encode;
pub mod font;

pub use compositor::{Tile, cell_size, compose};
pub use download::download_images;
pub use encode::{encode_png, to_base64};
pub use font::{bundled_font, load_font};
