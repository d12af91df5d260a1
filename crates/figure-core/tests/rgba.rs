// File: crates/figure-core/tests/rgba.rs
// Purpose: Validate RGBA rendering buffer shape and a few pixels.

use figure_core::{Axis, Figure, RenderOptions, Series, Theme};

#[test]
fn render_rgba8_buffer() {
    let mut fig = Figure::new(RenderOptions::sized(200, 150), Theme::dark());
    {
        let panel = fig.panel_mut(0).unwrap();
        panel.set_x_axis(Axis::new("", 0.0, 4.0));
        panel.set_y_axis(Axis::new("", 0.0, 4.0));
        panel.add_series(Series::line(vec![(0.0, 0.0), (4.0, 4.0)]));
    }

    let (px, w, h, stride) = fig.render_to_rgba8().expect("rgba render");
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);

    // Top-left pixel is figure background (RGBA)
    let bg = Theme::dark().background;
    assert_eq!(&px[0..4], &[bg.r(), bg.g(), bg.b(), 255]);
}

#[test]
fn heatmap_cells_use_colormap() {
    use figure_core::{Colormap, Heatmap};

    let mut fig = Figure::new(RenderOptions::sized(300, 300), Theme::classic());
    let hm = Heatmap::new(vec![vec![0.0, 1.0], vec![1.0, 0.0]]).unwrap().with_colormap(Colormap::Viridis);
    fig.panel_mut(0).unwrap().set_heatmap(hm, ["a", "b"], ["c", "d"]);
    let (px, _, _, stride) = fig.render_to_rgba8().expect("rgba render");

    // Plot area is roughly x 80..272, y 22..240; (230, 190) sits well inside
    // the lower-right cell, which holds 0.0.
    let at = 190 * stride + 230 * 4;
    let want = Colormap::Viridis.sample(0.0);
    assert_eq!(&px[at..at + 3], &[want.r(), want.g(), want.b()]);
}
