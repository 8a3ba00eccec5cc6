// File: crates/chart-core/src/text.rs
// Summary: Caller-supplied font loading and simple text placement on a Skia canvas.

use std::path::Path;

use skia_safe as skia;
use tracing::{info, warn};

use crate::error::RenderError;

/// A typeface loaded once per run and shared read-only by every chart.
///
/// Chart text (titles, captions, tick labels) often uses scripts the default
/// system face lacks, so every string is drawn with this typeface.
#[derive(Clone)]
pub struct FontResource {
    typeface: skia::Typeface,
    origin: String,
}

impl FontResource {
    /// Load a TTF/OTF file from disk.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, RenderError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| RenderError::FontRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_bytes(&bytes, path.display().to_string())
    }

    /// Load a typeface from in-memory font data. `origin` names the data in
    /// errors and logs.
    pub fn from_bytes(bytes: &[u8], origin: impl Into<String>) -> Result<Self, RenderError> {
        let origin = origin.into();
        let typeface = skia::FontMgr::new()
            .new_from_bytes(bytes, None::<u32>)
            .ok_or_else(|| RenderError::FontLoad { origin: origin.clone() })?;
        info!(family = %typeface.family_name(), %origin, "font loaded");
        Ok(Self { typeface, origin })
    }

    /// Wrap an already created typeface.
    pub fn from_typeface(typeface: skia::Typeface, origin: impl Into<String>) -> Self {
        Self { typeface, origin: origin.into() }
    }

    /// The platform's default face, if the machine has any fonts installed.
    pub fn system_default() -> Option<Self> {
        let typeface = skia::FontMgr::new().legacy_make_typeface(None::<&str>, skia::FontStyle::normal())?;
        Some(Self::from_typeface(typeface, "system default"))
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn family_name(&self) -> String {
        self.typeface.family_name()
    }

    pub fn font(&self, size: f32) -> skia::Font {
        skia::Font::from_typeface(self.typeface.clone(), size.max(1.0))
    }

    /// True when every character of `text` maps to a real glyph.
    pub fn covers(&self, text: &str) -> bool {
        self.font(12.0).str_to_glyphs_vec(text).iter().all(|&g| g != 0)
    }
}

impl std::fmt::Debug for FontResource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontResource").field("origin", &self.origin).finish()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
    Right,
}

/// Size at which text measuring `width` at `size` fits in `available` pixels.
/// Never grows the text.
pub fn fit_font_size(width: f32, size: f32, available: f32) -> f32 {
    if width <= available || width <= 0.0 {
        size
    } else {
        size * (available.max(0.0) / width)
    }
}

/// Draws strings with one `FontResource` at baseline-relative positions.
pub struct TextPainter<'a> {
    font: &'a FontResource,
}

impl<'a> TextPainter<'a> {
    pub fn new(font: &'a FontResource) -> Self {
        Self { font }
    }

    pub fn measure_width(&self, text: &str, size: f32) -> f32 {
        let (width, _) = self.font.font(size).measure_str(text, None);
        width
    }

    /// Draw `text` with its baseline at `y`, anchored at `x` per `align`.
    pub fn draw(&self, canvas: &skia::Canvas, text: &str, x: f32, y: f32, size: f32, color: skia::Color, align: Align) {
        let font = self.font.font(size);
        let (width, _) = font.measure_str(text, None);
        let left = match align {
            Align::Left => x,
            Align::Center => x - width * 0.5,
            Align::Right => x - width,
        };
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_color(color);
        canvas.draw_str(text, (left, y), &font, &paint);
    }

    /// Draw `text` rotated 90 degrees counter-clockwise, centered on `(x, y)`.
    pub fn draw_vertical(&self, canvas: &skia::Canvas, text: &str, x: f32, y: f32, size: f32, color: skia::Color) {
        canvas.save();
        canvas.rotate(-90.0, Some(skia::Point::new(x, y)));
        // Baseline sits a third of the size below center so the glyphs straddle (x, y).
        self.draw(canvas, text, x, y + size * 0.35, size, color, Align::Center);
        canvas.restore();
    }

    /// Log once per string when the font would draw boxes instead of glyphs.
    pub fn warn_if_uncovered(&self, text: &str) {
        if !self.font.covers(text) {
            warn!(font = %self.font.origin(), text, "font lacks glyphs for text; it will render as boxes");
        }
    }
}
