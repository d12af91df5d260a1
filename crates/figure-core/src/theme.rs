// File: crates/figure-core/src/theme.rs
// Summary: Figure styles (background, grid, text colours, categorical palette) applied to every panel.

use skia_safe as skia;

/// Number of colours in a theme's categorical palette.
pub const PALETTE_LEN: usize = 8;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub plot_background: skia::Color,
    pub grid: skia::Color,
    pub show_grid: bool,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub tick: skia::Color,
    pub title: skia::Color,
    pub legend_background: skia::Color,
    pub legend_border: skia::Color,
    pub palette: [skia::Color; PALETTE_LEN],
    pub title_size: f32,
    pub label_size: f32,
    pub tick_size: f32,
}

impl Theme {
    /// Plain white style with the tab10 palette and no grid.
    pub fn classic() -> Self {
        Self {
            name: "classic",
            background: skia::Color::from_argb(255, 255, 255, 255),
            plot_background: skia::Color::from_argb(255, 255, 255, 255),
            grid: skia::Color::from_argb(255, 176, 176, 176),
            show_grid: false,
            axis_line: skia::Color::from_argb(255, 0, 0, 0),
            axis_label: skia::Color::from_argb(255, 0, 0, 0),
            tick: skia::Color::from_argb(255, 0, 0, 0),
            title: skia::Color::from_argb(255, 0, 0, 0),
            legend_background: skia::Color::from_argb(204, 255, 255, 255),
            legend_border: skia::Color::from_argb(255, 204, 204, 204),
            palette: [
                skia::Color::from_argb(255, 0x1f, 0x77, 0xb4), // blue
                skia::Color::from_argb(255, 0xff, 0x7f, 0x0e), // orange
                skia::Color::from_argb(255, 0x2c, 0xa0, 0x2c), // green
                skia::Color::from_argb(255, 0xd6, 0x27, 0x28), // red
                skia::Color::from_argb(255, 0x94, 0x67, 0xbd), // purple
                skia::Color::from_argb(255, 0x8c, 0x56, 0x4b), // brown
                skia::Color::from_argb(255, 0xe3, 0x77, 0xc2), // pink
                skia::Color::from_argb(255, 0x7f, 0x7f, 0x7f), // grey
            ],
            title_size: 18.0,
            label_size: 14.0,
            tick_size: 12.0,
        }
    }

    /// White background with a light grid and the muted "deep" palette.
    pub fn whitegrid() -> Self {
        Self {
            name: "whitegrid",
            background: skia::Color::from_argb(255, 255, 255, 255),
            plot_background: skia::Color::from_argb(255, 255, 255, 255),
            grid: skia::Color::from_argb(255, 0xde, 0xde, 0xde),
            show_grid: true,
            axis_line: skia::Color::from_argb(255, 0xcc, 0xcc, 0xcc),
            axis_label: skia::Color::from_argb(255, 0x26, 0x26, 0x26),
            tick: skia::Color::from_argb(255, 0x26, 0x26, 0x26),
            title: skia::Color::from_argb(255, 0x26, 0x26, 0x26),
            legend_background: skia::Color::from_argb(220, 255, 255, 255),
            legend_border: skia::Color::from_argb(255, 0xcc, 0xcc, 0xcc),
            palette: [
                skia::Color::from_argb(255, 0x4c, 0x72, 0xb0),
                skia::Color::from_argb(255, 0xdd, 0x84, 0x52),
                skia::Color::from_argb(255, 0x55, 0xa8, 0x68),
                skia::Color::from_argb(255, 0xc4, 0x4e, 0x52),
                skia::Color::from_argb(255, 0x81, 0x72, 0xb3),
                skia::Color::from_argb(255, 0x93, 0x78, 0x60),
                skia::Color::from_argb(255, 0xda, 0x8b, 0xc3),
                skia::Color::from_argb(255, 0x8c, 0x8c, 0x8c),
            ],
            title_size: 20.0,
            label_size: 15.0,
            tick_size: 12.0,
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            plot_background: skia::Color::from_argb(255, 24, 24, 28),
            grid: skia::Color::from_argb(255, 40, 40, 45),
            show_grid: true,
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            axis_label: skia::Color::from_argb(255, 235, 235, 245),
            tick: skia::Color::from_argb(255, 150, 150, 160),
            title: skia::Color::from_argb(255, 235, 235, 245),
            legend_background: skia::Color::from_argb(220, 30, 30, 34),
            legend_border: skia::Color::from_argb(255, 70, 70, 80),
            palette: [
                skia::Color::from_argb(255, 64, 160, 255),
                skia::Color::from_argb(255, 255, 170, 60),
                skia::Color::from_argb(255, 40, 200, 120),
                skia::Color::from_argb(255, 220, 80, 80),
                skia::Color::from_argb(255, 180, 130, 255),
                skia::Color::from_argb(255, 255, 230, 70),
                skia::Color::from_argb(255, 96, 220, 220),
                skia::Color::from_argb(255, 170, 170, 180),
            ],
            title_size: 18.0,
            label_size: 14.0,
            tick_size: 12.0,
        }
    }

    /// Palette colour for the `index`-th series, cycling.
    pub fn color(&self, index: usize) -> skia::Color {
        self.palette[index % PALETTE_LEN]
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::classic()
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::classic(), Theme::whitegrid(), Theme::dark()]
}

/// Find a preset by its `name` (case-insensitive).
pub fn find(name: &str) -> Option<Theme> {
    presets().into_iter().find(|t| t.name.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_is_case_insensitive() {
        assert_eq!(find("WhiteGrid").map(|t| t.name), Some("whitegrid"));
        assert!(find("nope").is_none());
    }

    #[test]
    fn palette_cycles() {
        let t = Theme::classic();
        assert_eq!(t.color(0), t.color(PALETTE_LEN));
        assert_ne!(t.color(0), t.color(1));
    }
}
