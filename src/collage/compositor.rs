use ab_glyph::{Font, FontArc, PxScale, ScaleFont};
use image::{Rgba, RgbaImage, imageops};
use imageproc::drawing::{draw_text_mut, text_size};

use crate::{
    types::{ArtistEntry, GridSize},
    utils,
};

pub const FONT_SIZE: f32 = 14.0;

const SHADOW_COLOR: Rgba<u8> = Rgba([0, 0, 0, 255]);
const TEXT_COLOR: Rgba<u8> = Rgba([255, 255, 255, 255]);
const SHADOW_OFFSET: i32 = 1;

/// One grid cell: the artist and, if it has one, its decoded image.
#[derive(Debug, Clone, Copy)]
pub struct Tile<'a> {
    pub image: Option<&'a RgbaImage>,
    pub artist: &'a ArtistEntry,
}

/// Cell size of the collage, taken from the first decoded image.
pub fn cell_size(images: &[Option<RgbaImage>]) -> Option<(u32, u32)> {
    images.iter().flatten().next().map(|i| i.dimensions())
}

/// Lays `tiles` out on a `grid` of `cell` sized cells, row by row.
///
/// The canvas is `side * cell` in both directions and starts fully
/// transparent. Images are drawn unscaled at the cell origin and cropped to
/// the cell. Tiles beyond the grid are ignored, missing tiles leave their
/// cells transparent. Labels are only drawn when a font is available.
pub fn compose(
    grid: GridSize,
    cell: (u32, u32),
    tiles: &[Tile<'_>],
    font: Option<&FontArc>,
) -> RgbaImage {
    let side = grid.side();
    let mut canvas = RgbaImage::new(side * cell.0, side * cell.1);

    for (index, tile) in tiles.iter().take(grid.tile_count()).enumerate() {
        let (x, y) = utils::tile_origin(index, grid, cell);
        let rendered = render_tile(tile, cell, font);
        imageops::replace(&mut canvas, &rendered, x as i64, y as i64);
    }

    canvas
}

fn render_tile(
    tile: &Tile<'_>,
    (width, height): (u32, u32),
    font: Option<&FontArc>,
) -> RgbaImage {
    let mut cell = RgbaImage::new(width, height);

    if let Some(image) = tile.image {
        let visible = imageops::crop_imm(
            image,
            0,
            0,
            width.min(image.width()),
            height.min(image.height()),
        )
        .to_image();
        imageops::replace(&mut cell, &visible, 0, 0);
    }

    if let Some(font) = font {
        draw_label(&mut cell, font, &utils::label_text(tile.artist));
    }

    cell
}

/// Draws `text` into the top left corner of `cell` with a drop shadow.
///
/// The whole label is drawn twice: dark at (+1, +1) first, then light at
/// (0, 0) on top of it.
fn draw_label(cell: &mut RgbaImage, font: &FontArc, text: &str) {
    let scale = PxScale::from(FONT_SIZE);
    let scaled = font.as_scaled(scale);
    let line_height = (scaled.height() + scaled.line_gap()).ceil().max(1.0) as u32;

    let lines: Vec<(i32, String)> =
        utils::wrap_label(text, cell.width(), |line| text_size(scale, font, line).0)
            .into_iter()
            .enumerate()
            .map(|(i, line)| (i as u32 * line_height, line))
            .take_while(|(top, _)| top + line_height <= cell.height())
            .filter(|(_, line)| !line.is_empty())
            .map(|(top, line)| (top as i32, line))
            .collect();

    for (top, line) in &lines {
        draw_text_mut(
            cell,
            SHADOW_COLOR,
            SHADOW_OFFSET,
            top + SHADOW_OFFSET,
            scale,
            font,
            line,
        );
    }
    for (top, line) in &lines {
        draw_text_mut(cell, TEXT_COLOR, 0, *top, scale, font, line);
    }
}
