// File: crates/figure-core/src/figure.rs
// Summary: Figure (grid of panels) and the headless PNG rendering pipeline using Skia CPU raster surfaces.

use std::io::Cursor;
use std::path::Path;

use log::debug;
use skia_safe as skia;

use crate::error::{FigureError, Result};
use crate::geometry::RectF;
use crate::panel::Panel;
use crate::render::draw_panel;
use crate::text::{HAlign, TextPlacement, TextShaper, VAlign};
use crate::theme::Theme;
use crate::types::{Insets, HEIGHT, SUPTITLE_HEIGHT, WIDTH};

#[derive(Clone, Copy, Debug)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    /// Base margins between each grid cell and its plot area.
    pub insets: Insets,
}

impl RenderOptions {
    pub fn sized(width: i32, height: i32) -> Self {
        Self { width, height, ..Self::default() }
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
        }
    }
}

/// A drawing surface description: size, style and a `rows x cols` grid of panels.
pub struct Figure {
    pub options: RenderOptions,
    pub theme: Theme,
    pub suptitle: Option<String>,
    rows: usize,
    cols: usize,
    panels: Vec<Panel>,
}

impl Figure {
    /// Figure with a single panel.
    pub fn new(options: RenderOptions, theme: Theme) -> Self {
        Self { options, theme, suptitle: None, rows: 1, cols: 1, panels: vec![Panel::new()] }
    }

    /// Figure with `rows * cols` panels, indexed row-major from 0.
    pub fn subplots(options: RenderOptions, theme: Theme, rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(FigureError::invalid(format!("subplot grid {rows}x{cols} has no cells")));
        }
        if options.width <= 0 || options.height <= 0 {
            return Err(FigureError::invalid(format!(
                "figure size {}x{} must be positive",
                options.width, options.height
            )));
        }
        let panels = (0..rows * cols).map(|_| Panel::new()).collect();
        Ok(Self { options, theme, suptitle: None, rows, cols, panels })
    }

    pub fn grid(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn panel(&self, index: usize) -> Result<&Panel> {
        let count = self.panels.len();
        self.panels.get(index).ok_or(FigureError::Layout { index, count })
    }

    pub fn panel_mut(&mut self, index: usize) -> Result<&mut Panel> {
        let count = self.panels.len();
        self.panels.get_mut(index).ok_or(FigureError::Layout { index, count })
    }

    pub fn set_suptitle(&mut self, title: impl Into<String>) -> &mut Self {
        self.suptitle = Some(title.into());
        self
    }

    /// Pixel rect of grid cell `index`.
    pub fn cell_rect(&self, index: usize) -> RectF {
        let top_band = if self.suptitle.is_some() { SUPTITLE_HEIGHT } else { 0.0 };
        let cell_w = self.options.width as f32 / self.cols as f32;
        let cell_h = (self.options.height as f32 - top_band) / self.rows as f32;
        let (row, col) = (index / self.cols, index % self.cols);
        RectF::from_ltwh(col as f32 * cell_w, top_band + row as f32 * cell_h, cell_w, cell_h)
    }

    /// Render into a raster surface and read it back as RGBA8 (unpremultiplied).
    /// Returns `(pixels, width, height, stride)`.
    pub fn render_to_rgba8(&self) -> Result<(Vec<u8>, i32, i32, usize)> {
        let (w, h) = (self.options.width, self.options.height);
        let mut surface = skia::surfaces::raster_n32_premul((w, h))
            .ok_or(FigureError::Surface { width: w, height: h })?;
        {
            let canvas = surface.canvas();
            canvas.clear(self.theme.background);
            let text = TextShaper::new();
            for (i, panel) in self.panels.iter().enumerate() {
                draw_panel(canvas, &text, &self.theme, panel, self.cell_rect(i), &self.options.insets);
            }
            if let Some(title) = &self.suptitle {
                text.draw(
                    canvas,
                    title,
                    w as f32 * 0.5,
                    SUPTITLE_HEIGHT * 0.5,
                    self.theme.title_size * 1.15,
                    self.theme.title,
                    TextPlacement::new(HAlign::Center, VAlign::Middle).bold(),
                );
            }
        }

        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let stride = w as usize * 4;
        let mut pixels = vec![0u8; stride * h as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            return Err(FigureError::Readback);
        }
        Ok((pixels, w, h, stride))
    }

    /// Render and encode as PNG in memory.
    pub fn render_to_png_bytes(&self) -> Result<Vec<u8>> {
        let (pixels, w, h, _) = self.render_to_rgba8()?;
        let img = image::RgbaImage::from_raw(w as u32, h as u32, pixels).ok_or(FigureError::Readback)?;
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)?;
        Ok(bytes)
    }

    /// Render to a PNG at `path` and release the figure. The parent directory
    /// must already exist. Returns the number of bytes written.
    pub fn save_png(self, path: impl AsRef<Path>) -> Result<u64> {
        let path = path.as_ref();
        let bytes = self.render_to_png_bytes()?;
        std::fs::write(path, &bytes).map_err(|source| FigureError::Io { path: path.to_path_buf(), source })?;
        debug!("wrote {} ({} bytes)", path.display(), bytes.len());
        Ok(bytes.len() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subplots_rejects_empty_grid() {
        assert!(Figure::subplots(RenderOptions::default(), Theme::classic(), 0, 2).is_err());
        assert!(Figure::subplots(RenderOptions::sized(0, 10), Theme::classic(), 1, 1).is_err());
    }

    #[test]
    fn panel_index_out_of_range() {
        let mut fig = Figure::subplots(RenderOptions::default(), Theme::classic(), 1, 2).unwrap();
        assert!(fig.panel_mut(1).is_ok());
        assert!(matches!(fig.panel_mut(2), Err(FigureError::Layout { index: 2, count: 2 })));
    }

    #[test]
    fn cells_tile_the_figure_below_the_title() {
        let mut fig = Figure::subplots(RenderOptions::sized(1000, 544), Theme::classic(), 2, 2).unwrap();
        fig.set_suptitle("t");
        let c = fig.cell_rect(3);
        assert_eq!(c.left, 500.0);
        assert_eq!(c.right, 1000.0);
        assert_eq!(c.top, SUPTITLE_HEIGHT + 250.0);
        assert_eq!(c.bottom, 544.0);
    }
}
