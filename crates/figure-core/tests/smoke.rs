// File: crates/figure-core/tests/smoke.rs
// Purpose: Basic end-to-end render smoke test writing a PNG.

use figure_core::{Axis, Figure, RenderOptions, Series, Theme};

#[test]
fn render_smoke_png() {
    // Minimal data: tiny line series
    let mut fig = Figure::new(RenderOptions::sized(480, 320), Theme::classic());
    {
        let panel = fig.panel_mut(0).unwrap();
        panel.set_title("smoke");
        panel.set_x_axis(Axis::new("X", 0.0, 4.0));
        panel.set_y_axis(Axis::new("Y", 0.0, 4.0));
        panel.add_series(Series::line(vec![(0.0, 0.0), (1.0, 2.0), (2.0, 1.0), (3.0, 3.5), (4.0, 2.5)]));
    }

    // In-memory API first; save_png consumes the figure.
    let bytes = fig.render_to_png_bytes().expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");

    let out = std::path::PathBuf::from("target/test_out/smoke.png");
    std::fs::create_dir_all(out.parent().unwrap()).unwrap();
    let written = fig.save_png(&out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");
    assert_eq!(meta.len(), written);
}

#[test]
fn save_into_missing_directory_is_io_error() {
    let fig = Figure::new(RenderOptions::sized(64, 64), Theme::classic());
    let err = fig
        .save_png("target/test_out/does/not/exist/out.png")
        .expect_err("parent directory is missing");
    assert!(err.is_io(), "unexpected error: {err}");
}
