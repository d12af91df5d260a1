// File: crates/figure-core/src/text.rs
// Summary: Text shaper/renderer using Skia textlayout, with anchoring and rotation for axis labels.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HAlign {
    Left,
    Center,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VAlign {
    Top,
    Middle,
    Bottom,
}

/// How a text box is placed relative to its anchor point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextPlacement {
    pub h: HAlign,
    pub v: VAlign,
    /// Counter-clockwise rotation around the anchor, in degrees.
    pub rotation: f32,
    pub bold: bool,
}

impl TextPlacement {
    pub const fn new(h: HAlign, v: VAlign) -> Self {
        Self { h, v, rotation: 0.0, bold: false }
    }
    pub const fn rotated(mut self, degrees: f32) -> Self {
        self.rotation = degrees;
        self
    }
    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }
}

pub struct TextShaper {
    fonts: FontCollection,
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(size: f32, color: skia::Color, bold: bool) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        ts.set_font_families(&["DejaVu Sans", "Arial", "Helvetica", "Segoe UI", "Roboto", "sans-serif"]);
        if bold {
            ts.set_font_style(skia::FontStyle::bold());
        }
        ts
    }

    pub fn layout(&self, text: &str, size: f32, color: skia::Color, bold: bool) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        let style = Self::make_style(size, color, bold);
        builder.push_style(&style);
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    pub fn measure_width(&self, text: &str, size: f32) -> f32 {
        let p = self.layout(text, size, skia::Color::from_argb(0, 0, 0, 0), false);
        // width of the longest line
        p.longest_line()
    }

    /// Draw `text` placed against the anchor `(x, y)`.
    pub fn draw(&self, canvas: &skia::Canvas, text: &str, x: f32, y: f32, size: f32, color: skia::Color, place: TextPlacement) {
        if text.is_empty() {
            return;
        }
        let mut p = self.layout(text, size, color, place.bold);
        let w = p.longest_line();
        let h = p.height();
        let dx = match place.h {
            HAlign::Left => 0.0,
            HAlign::Center => -w * 0.5,
            HAlign::Right => -w,
        };
        let dy = match place.v {
            VAlign::Top => 0.0,
            VAlign::Middle => -h * 0.5,
            VAlign::Bottom => -h,
        };
        if place.rotation == 0.0 {
            p.paint(canvas, (x + dx, y + dy));
            return;
        }
        canvas.save();
        canvas.translate((x, y));
        // skia rotates clockwise for positive angles in y-down space
        canvas.rotate(-place.rotation, None);
        p.paint(canvas, (dx, dy));
        canvas.restore();
    }

    pub fn draw_left(&self, canvas: &skia::Canvas, text: &str, x: f32, y: f32, size: f32, color: skia::Color) {
        self.draw(canvas, text, x, y, size, color, TextPlacement::new(HAlign::Left, VAlign::Middle));
    }

    pub fn draw_centered(&self, canvas: &skia::Canvas, text: &str, x: f32, y: f32, size: f32, color: skia::Color) {
        self.draw(canvas, text, x, y, size, color, TextPlacement::new(HAlign::Center, VAlign::Middle));
    }
}

impl Default for TextShaper {
    fn default() -> Self {
        Self::new()
    }
}
