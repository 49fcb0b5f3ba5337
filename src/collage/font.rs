use std::path::Path;

use ab_glyph::FontArc;

/// DejaVu Sans, used when neither the configured nor a system font loads.
static BUNDLED_FONT: &[u8] = include_bytes!("../../assets/fonts/DejaVuSans.ttf");

/// Fonts tried when no font is configured, in order.
fn candidate_font_paths() -> &'static [&'static str] {
    &[
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/TTF/DejaVuSans.ttf",
        "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
        "/usr/share/fonts/liberation/LiberationSans-Regular.ttf",
        "/usr/share/fonts/noto/NotoSans-Regular.ttf",
        "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
        "/System/Library/Fonts/Supplemental/Verdana.ttf",
        "/Library/Fonts/Arial.ttf",
        "C:\\Windows\\Fonts\\verdana.ttf",
        "C:\\Windows\\Fonts\\arial.ttf",
    ]
}

/// Loads the label font.
///
/// `override_path` wins when it points to a readable font. Otherwise the
/// first usable system font is taken, and the bundled DejaVu Sans after
/// that. `None` only if the bundled font fails to parse.
pub fn load_font(override_path: Option<&Path>) -> Option<FontArc> {
    if let Some(path) = override_path {
        match read_font(path) {
            Some(font) => return Some(font),
            None => tracing::warn!(path = %path.display(), "configured font is not usable"),
        }
    }

    candidate_font_paths()
        .iter()
        .find_map(|p| read_font(Path::new(p)))
        .or_else(bundled_font)
}

/// The font compiled into the binary.
pub fn bundled_font() -> Option<FontArc> {
    match FontArc::try_from_slice(BUNDLED_FONT) {
        Ok(font) => {
            tracing::debug!("loaded bundled label font");
            Some(font)
        }
        Err(e) => {
            tracing::error!(error = %e, "bundled font is not usable");
            None
        }
    }
}

fn read_font(path: &Path) -> Option<FontArc> {
    let bytes = std::fs::read(path).ok()?;
    let font = FontArc::try_from_vec(bytes).ok()?;
    tracing::debug!(path = %path.display(), "loaded label font");
    Some(font)
}
