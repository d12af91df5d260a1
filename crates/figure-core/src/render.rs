// File: crates/figure-core/src/render.rs
// Summary: Draws one panel onto a Skia canvas: grid, primitives, heatmap, frame, ticks, labels, legend, colorbar.

use skia_safe as skia;

use crate::annotation::Annotation;
use crate::axis::Axis;
use crate::colormap::contrast_text;
use crate::geometry::RectF;
use crate::grid::{format_tick, nice_step, nice_ticks};
use crate::heatmap::Heatmap;
use crate::panel::{Colorbar, LegendPosition, Panel, PanelAxes};
use crate::scale::LinearScale;
use crate::series::{AxisSide, Orientation, Series, SeriesKind};
use crate::stats::min_max;
use crate::text::{HAlign, TextPlacement, TextShaper, VAlign};
use crate::theme::Theme;
use crate::types::Insets;

const X_TICKS: usize = 8;
const Y_TICKS: usize = 7;
const TICK_LEN: f32 = 5.0;
const TICK_PAD: f32 = 4.0;
const COLORBAR_GAP: f32 = 18.0;
const COLORBAR_WIDTH: f32 = 18.0;

struct Tick {
    value: f64,
    label: String,
}

struct AxisTicks {
    ticks: Vec<Tick>,
    max_label_w: f32,
    rotation: f32,
}

impl AxisTicks {
    fn measure(text: &TextShaper, axis: &Axis, max_ticks: usize, size: f32) -> Self {
        let ticks = axis_ticks(axis, max_ticks);
        let max_label_w = ticks
            .iter()
            .map(|t| text.measure_width(&t.label, size))
            .fold(0.0f32, f32::max);
        Self { ticks, max_label_w, rotation: axis.tick_rotation }
    }

    /// Space the labels take perpendicular to a horizontal axis.
    fn horizontal_extent(&self, size: f32) -> f32 {
        let line_h = size * 1.3;
        if self.rotation == 0.0 {
            return line_h;
        }
        let r = self.rotation.to_radians();
        self.max_label_w * r.sin().abs() + line_h * r.cos().abs()
    }

    /// Space the labels take perpendicular to a vertical axis.
    fn vertical_extent(&self, size: f32) -> f32 {
        if self.rotation == 0.0 {
            return self.max_label_w;
        }
        let r = self.rotation.to_radians();
        self.max_label_w * r.cos().abs() + size * 1.3 * r.sin().abs()
    }
}

fn axis_ticks(axis: &Axis, max_ticks: usize) -> Vec<Tick> {
    if let Some(categories) = &axis.categories {
        return categories
            .iter()
            .enumerate()
            .map(|(i, c)| Tick { value: i as f64 + 0.5, label: c.clone() })
            .collect();
    }
    let (lo, hi) = (axis.min.min(axis.max), axis.min.max(axis.max));
    let step = nice_step(lo, hi, max_ticks);
    nice_ticks(lo, hi, max_ticks)
        .into_iter()
        .map(|value| Tick { value, label: format_tick(value, step) })
        .collect()
}

// ---- paints -----------------------------------------------------------------

fn stroke_paint(color: skia::Color, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint.set_color(color);
    paint
}

fn fill_paint(color: skia::Color) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(color);
    paint
}

fn fade(color: skia::Color, alpha: f32) -> skia::Color {
    color.with_a((color.a() as f32 * alpha).round().clamp(0.0, 255.0) as u8)
}

fn sorted_rect(x0: f32, y0: f32, x1: f32, y1: f32) -> skia::Rect {
    skia::Rect::from_ltrb(x0.min(x1), y0.min(y1), x0.max(x1), y0.max(y1))
}

// ---- panel ------------------------------------------------------------------

struct PanelTicks {
    x: AxisTicks,
    y: AxisTicks,
    secondary_x: Option<AxisTicks>,
    secondary_y: Option<AxisTicks>,
    colorbar: Option<AxisTicks>,
}

fn colorbar_axis(cb: &Colorbar) -> Axis {
    Axis::new(cb.label.clone(), cb.vmin, cb.vmax)
}

/// Insets for a panel so tick labels, axis labels and side decorations fit.
fn panel_insets(base: &Insets, theme: &Theme, panel: &Panel, ticks: &PanelTicks) -> Insets {
    let label_band = theme.label_size * 1.5 + 8.0;
    let left = TICK_LEN + TICK_PAD + ticks.y.vertical_extent(theme.tick_size) + label_band;
    let bottom = TICK_LEN + TICK_PAD + ticks.x.horizontal_extent(theme.tick_size) + label_band;
    let mut right = 0.0f32;
    if let Some(sy) = &ticks.secondary_y {
        right += TICK_LEN + TICK_PAD + sy.vertical_extent(theme.tick_size) + label_band;
    }
    if let Some(cb) = &ticks.colorbar {
        right += COLORBAR_GAP + COLORBAR_WIDTH + TICK_LEN + TICK_PAD + cb.max_label_w + label_band;
    }
    let mut top = 0.0f32;
    if let Some(sx) = &ticks.secondary_x {
        top += TICK_LEN + TICK_PAD + sx.horizontal_extent(theme.tick_size) + label_band;
    }
    if panel.title.is_none() && top == 0.0 {
        top = -(base.top as f32) * 0.5;
    }
    Insets::new(
        (base.left as f32).max(left) as u32,
        (base.right as f32 + right) as u32,
        (base.top as f32 + top).max(8.0) as u32,
        (base.bottom as f32).max(bottom) as u32,
    )
}

/// Draw `panel` inside the grid cell `cell`.
pub(crate) fn draw_panel(
    canvas: &skia::Canvas,
    text: &TextShaper,
    theme: &Theme,
    panel: &Panel,
    cell: RectF,
    base: &Insets,
) {
    let axes: PanelAxes = panel.resolved_axes();
    let size = theme.tick_size;
    let ticks = PanelTicks {
        x: AxisTicks::measure(text, &axes.x, X_TICKS, size),
        y: AxisTicks::measure(text, &axes.y, Y_TICKS, size),
        secondary_x: axes.secondary_x.as_ref().map(|a| AxisTicks::measure(text, a, X_TICKS, size)),
        secondary_y: axes.secondary_y.as_ref().map(|a| AxisTicks::measure(text, a, Y_TICKS, size)),
        colorbar: panel.colorbar.as_ref().map(|cb| AxisTicks::measure(text, &colorbar_axis(cb), 6, size)),
    };
    let insets = panel_insets(base, theme, panel, &ticks);
    let plot = cell.inset(&insets);

    let xs = LinearScale::horizontal(&plot, &axes.x);
    let ys = LinearScale::vertical(&plot, &axes.y);
    let sxs = axes.secondary_x.as_ref().map(|a| LinearScale::horizontal(&plot, a)).unwrap_or(xs);
    let sys = axes.secondary_y.as_ref().map(|a| LinearScale::vertical(&plot, a)).unwrap_or(ys);

    canvas.draw_rect(plot.to_skia(), &fill_paint(theme.plot_background));
    if panel.grid.unwrap_or(theme.show_grid) {
        draw_grid(canvas, theme, &plot, &xs, &ys, &ticks);
    }

    // Data layers are clipped to the plot area.
    canvas.save();
    canvas.clip_rect(plot.to_skia(), skia::ClipOp::Intersect, true);
    if let Some(hm) = &panel.heatmap {
        draw_heatmap(canvas, text, theme, hm, &xs, &ys);
    }
    for (i, s) in panel.series.iter().enumerate() {
        let (sx, sy) = match s.axes {
            AxisSide::Primary => (&xs, &ys),
            AxisSide::Secondary => (&sxs, &sys),
        };
        draw_series(canvas, theme, s, i, sx, sy);
    }
    canvas.restore();

    draw_frame(canvas, theme, &plot);
    draw_bottom_axis(canvas, text, theme, &plot, &xs, &ticks.x, &axes.x.label);
    draw_left_axis(canvas, text, theme, &plot, &ys, &ticks.y, &axes.y.label);
    let mut title_y = plot.top - 10.0;
    if let (Some(sx_ticks), Some(sx_axis)) = (&ticks.secondary_x, &axes.secondary_x) {
        title_y -= draw_top_axis(canvas, text, theme, &plot, &sxs, sx_ticks, &sx_axis.label);
    }
    let mut right_used = 0.0f32;
    if let (Some(sy_ticks), Some(sy_axis)) = (&ticks.secondary_y, &axes.secondary_y) {
        right_used = draw_right_axis(canvas, text, theme, &plot, &sys, sy_ticks, &sy_axis.label);
    }
    if let Some(title) = &panel.title {
        text.draw(
            canvas,
            title,
            plot.center_x(),
            title_y,
            theme.title_size,
            theme.title,
            TextPlacement::new(HAlign::Center, VAlign::Bottom).bold(),
        );
    }

    for a in &panel.annotations {
        draw_annotation(canvas, text, theme, a, &xs, &ys);
    }
    if let Some(pos) = panel.legend {
        draw_legend(canvas, text, theme, panel, &plot, pos);
    }
    if let (Some(cb), Some(cb_ticks)) = (&panel.colorbar, &ticks.colorbar) {
        draw_colorbar(canvas, text, theme, cb, cb_ticks, &plot, right_used);
    }
}

fn draw_grid(canvas: &skia::Canvas, theme: &Theme, plot: &RectF, xs: &LinearScale, ys: &LinearScale, ticks: &PanelTicks) {
    let paint = stroke_paint(theme.grid, 1.0);
    for t in &ticks.x.ticks {
        let x = xs.to_px(t.value);
        canvas.draw_line((x, plot.top), (x, plot.bottom), &paint);
    }
    for t in &ticks.y.ticks {
        let y = ys.to_px(t.value);
        canvas.draw_line((plot.left, y), (plot.right, y), &paint);
    }
}

fn draw_frame(canvas: &skia::Canvas, theme: &Theme, plot: &RectF) {
    canvas.draw_rect(plot.to_skia(), &stroke_paint(theme.axis_line, 1.0));
}

fn draw_bottom_axis(
    canvas: &skia::Canvas,
    text: &TextShaper,
    theme: &Theme,
    plot: &RectF,
    xs: &LinearScale,
    ticks: &AxisTicks,
    label: &str,
) {
    let tick_paint = stroke_paint(theme.tick, 1.0);
    let place = if ticks.rotation == 0.0 {
        TextPlacement::new(HAlign::Center, VAlign::Top)
    } else {
        TextPlacement::new(HAlign::Right, VAlign::Top).rotated(ticks.rotation)
    };
    for t in &ticks.ticks {
        let x = xs.to_px(t.value);
        canvas.draw_line((x, plot.bottom), (x, plot.bottom + TICK_LEN), &tick_paint);
        text.draw(canvas, &t.label, x, plot.bottom + TICK_LEN + TICK_PAD, theme.tick_size, theme.tick, place);
    }
    let y = plot.bottom + TICK_LEN + TICK_PAD + ticks.horizontal_extent(theme.tick_size) + 6.0;
    text.draw(
        canvas,
        label,
        plot.center_x(),
        y,
        theme.label_size,
        theme.axis_label,
        TextPlacement::new(HAlign::Center, VAlign::Top),
    );
}

fn draw_left_axis(
    canvas: &skia::Canvas,
    text: &TextShaper,
    theme: &Theme,
    plot: &RectF,
    ys: &LinearScale,
    ticks: &AxisTicks,
    label: &str,
) {
    let tick_paint = stroke_paint(theme.tick, 1.0);
    let place = TextPlacement::new(HAlign::Right, VAlign::Middle).rotated(ticks.rotation);
    for t in &ticks.ticks {
        let y = ys.to_px(t.value);
        canvas.draw_line((plot.left - TICK_LEN, y), (plot.left, y), &tick_paint);
        text.draw(canvas, &t.label, plot.left - TICK_LEN - TICK_PAD, y, theme.tick_size, theme.tick, place);
    }
    let x = plot.left - TICK_LEN - TICK_PAD - ticks.vertical_extent(theme.tick_size) - 6.0;
    text.draw(
        canvas,
        label,
        x,
        plot.center_y(),
        theme.label_size,
        theme.axis_label,
        TextPlacement::new(HAlign::Center, VAlign::Bottom).rotated(90.0),
    );
}

/// Returns the height used above the plot.
fn draw_top_axis(
    canvas: &skia::Canvas,
    text: &TextShaper,
    theme: &Theme,
    plot: &RectF,
    xs: &LinearScale,
    ticks: &AxisTicks,
    label: &str,
) -> f32 {
    let tick_paint = stroke_paint(theme.tick, 1.0);
    let place = TextPlacement::new(HAlign::Center, VAlign::Bottom);
    for t in &ticks.ticks {
        let x = xs.to_px(t.value);
        canvas.draw_line((x, plot.top - TICK_LEN), (x, plot.top), &tick_paint);
        text.draw(canvas, &t.label, x, plot.top - TICK_LEN - TICK_PAD, theme.tick_size, theme.tick, place);
    }
    let used = TICK_LEN + TICK_PAD + ticks.horizontal_extent(theme.tick_size) + 4.0;
    if label.is_empty() {
        return used;
    }
    text.draw(canvas, label, plot.center_x(), plot.top - used, theme.label_size, theme.axis_label, place);
    used + theme.label_size * 1.5
}

/// Returns the width used right of the plot.
fn draw_right_axis(
    canvas: &skia::Canvas,
    text: &TextShaper,
    theme: &Theme,
    plot: &RectF,
    ys: &LinearScale,
    ticks: &AxisTicks,
    label: &str,
) -> f32 {
    let tick_paint = stroke_paint(theme.tick, 1.0);
    let place = TextPlacement::new(HAlign::Left, VAlign::Middle).rotated(ticks.rotation);
    for t in &ticks.ticks {
        let y = ys.to_px(t.value);
        canvas.draw_line((plot.right, y), (plot.right + TICK_LEN, y), &tick_paint);
        text.draw(canvas, &t.label, plot.right + TICK_LEN + TICK_PAD, y, theme.tick_size, theme.tick, place);
    }
    let used = TICK_LEN + TICK_PAD + ticks.vertical_extent(theme.tick_size) + 6.0;
    if label.is_empty() {
        return used;
    }
    text.draw(
        canvas,
        label,
        plot.right + used,
        plot.center_y(),
        theme.label_size,
        theme.axis_label,
        TextPlacement::new(HAlign::Center, VAlign::Top).rotated(90.0),
    );
    used + theme.label_size * 1.5
}

// ---- primitives -------------------------------------------------------------

fn draw_series(canvas: &skia::Canvas, theme: &Theme, series: &Series, index: usize, xs: &LinearScale, ys: &LinearScale) {
    let color = series.color_or(theme, index);
    match &series.kind {
        SeriesKind::Line { fill_to } => draw_line_series(canvas, series, color, *fill_to, xs, ys),
        SeriesKind::Scatter { radius, values, colormap } => {
            let range = values.as_deref().and_then(min_max);
            let edge = series.edge_color.map(|c| stroke_paint(fade(c, series.alpha), 0.8));
            for (i, &(x, y)) in series.data_xy.iter().enumerate() {
                if !x.is_finite() || !y.is_finite() {
                    continue;
                }
                let c = match (values, range) {
                    (Some(v), Some((lo, hi))) => colormap.map(v[i], lo, hi),
                    _ => color,
                };
                let center = (xs.to_px(x), ys.to_px(y));
                canvas.draw_circle(center, *radius, &fill_paint(fade(c, series.alpha)));
                if let Some(p) = &edge {
                    canvas.draw_circle(center, *radius, p);
                }
            }
        }
        SeriesKind::Histogram { hist, orientation } => {
            let body = fill_paint(fade(color, series.alpha));
            let edge = series.edge_color.map(|c| stroke_paint(c, 0.8));
            for (lo, hi, count) in hist.bars() {
                let rect = match orientation {
                    Orientation::Vertical => {
                        sorted_rect(xs.to_px(lo), ys.to_px(count as f64), xs.to_px(hi), ys.to_px(0.0))
                    }
                    Orientation::Horizontal => {
                        sorted_rect(xs.to_px(0.0), ys.to_px(hi), xs.to_px(count as f64), ys.to_px(lo))
                    }
                };
                canvas.draw_rect(rect, &body);
                if let Some(p) = &edge {
                    canvas.draw_rect(rect, p);
                }
            }
        }
    }
}

fn draw_line_series(
    canvas: &skia::Canvas,
    series: &Series,
    color: skia::Color,
    fill_to: Option<f64>,
    xs: &LinearScale,
    ys: &LinearScale,
) {
    let mut path = skia::Path::new();
    let mut pen_down = false;
    let mut run: Vec<(f32, f32)> = Vec::with_capacity(series.data_xy.len());
    for &(x, y) in &series.data_xy {
        if !x.is_finite() || !y.is_finite() {
            pen_down = false;
            continue;
        }
        let p = (xs.to_px(x), ys.to_px(y));
        if pen_down {
            path.line_to(p);
        } else {
            path.move_to(p);
            pen_down = true;
        }
        run.push(p);
    }
    if run.len() < 2 {
        return;
    }

    if let Some(baseline) = fill_to {
        let base_px = ys.to_px(baseline);
        let mut area = skia::Path::new();
        area.move_to((run[0].0, base_px));
        for &p in &run {
            area.line_to(p);
        }
        area.line_to((run[run.len() - 1].0, base_px));
        area.close();
        canvas.draw_path(&area, &fill_paint(fade(color, series.alpha * 0.3)));
    }

    let mut stroke = stroke_paint(fade(color, series.alpha), series.width);
    stroke.set_stroke_join(skia::paint::Join::Round);
    if let Some(dash) = series.dash {
        stroke.set_path_effect(skia::PathEffect::dash(&dash, 0.0));
    }
    canvas.draw_path(&path, &stroke);
}

fn draw_heatmap(canvas: &skia::Canvas, text: &TextShaper, theme: &Theme, hm: &Heatmap, xs: &LinearScale, ys: &LinearScale) {
    let border = stroke_paint(theme.background, 1.0);
    for r in 0..hm.rows() {
        for c in 0..hm.cols() {
            let (x0, x1) = (xs.to_px(c as f64), xs.to_px(c as f64 + 1.0));
            let (y0, y1) = (ys.to_px(r as f64), ys.to_px(r as f64 + 1.0));
            let rect = sorted_rect(x0, y0, x1, y1);
            let color = hm.cell_color(r, c);
            canvas.draw_rect(rect, &fill_paint(color));
            canvas.draw_rect(rect, &border);
            if let Some(label) = hm.cell_label(r, c) {
                text.draw_centered(canvas, &label, (x0 + x1) * 0.5, (y0 + y1) * 0.5, theme.label_size, contrast_text(color));
            }
        }
    }
}

// ---- decorations ------------------------------------------------------------

fn draw_annotation(canvas: &skia::Canvas, text: &TextShaper, theme: &Theme, a: &Annotation, xs: &LinearScale, ys: &LinearScale) {
    match a {
        Annotation::Text { text: s, at, size } => {
            text.draw_left(canvas, s, xs.to_px(at.0), ys.to_px(at.1), size.unwrap_or(theme.label_size), theme.axis_label);
        }
        Annotation::Arrow { text: s, text_at, target } => {
            let (tx, ty) = (xs.to_px(text_at.0), ys.to_px(text_at.1));
            let (ax, ay) = (xs.to_px(target.0), ys.to_px(target.1));
            text.draw_centered(canvas, s, tx, ty, theme.label_size, theme.axis_label);

            let (dx, dy) = (ax - tx, ay - ty);
            let len = (dx * dx + dy * dy).sqrt();
            if len < 1.0 {
                return;
            }
            let (ux, uy) = (dx / len, dy / len);
            // leave the label readable
            let gap = (len * 0.5).min(theme.label_size * 1.2);
            let head = 10.0f32.min(len * 0.5);
            let start = (tx + ux * gap, ty + uy * gap);
            let base = (ax - ux * head, ay - uy * head);
            canvas.draw_line(start, base, &stroke_paint(theme.axis_label, 1.5));

            let mut tip = skia::Path::new();
            tip.move_to((ax, ay));
            tip.line_to((base.0 - uy * head * 0.5, base.1 + ux * head * 0.5));
            tip.line_to((base.0 + uy * head * 0.5, base.1 - ux * head * 0.5));
            tip.close();
            canvas.draw_path(&tip, &fill_paint(theme.axis_label));
        }
    }
}

fn draw_legend(canvas: &skia::Canvas, text: &TextShaper, theme: &Theme, panel: &Panel, plot: &RectF, pos: LegendPosition) {
    let entries: Vec<(usize, &Series)> = panel.legend_entries().collect();
    if entries.is_empty() {
        return;
    }
    let size = theme.tick_size;
    let row_h = size * 1.7;
    let swatch_w = 26.0f32;
    let pad = 8.0f32;
    let label_w = entries
        .iter()
        .filter_map(|(_, s)| s.label.as_deref())
        .map(|l| text.measure_width(l, size))
        .fold(0.0f32, f32::max);
    let w = pad * 3.0 + swatch_w + label_w;
    let h = pad * 2.0 + row_h * entries.len() as f32;
    let margin = 10.0f32;
    let (x, y) = match pos {
        LegendPosition::UpperLeft => (plot.left + margin, plot.top + margin),
        LegendPosition::UpperRight => (plot.right - margin - w, plot.top + margin),
        LegendPosition::LowerLeft => (plot.left + margin, plot.bottom - margin - h),
        LegendPosition::LowerRight => (plot.right - margin - w, plot.bottom - margin - h),
    };
    let frame = skia::Rect::from_xywh(x, y, w, h);
    canvas.draw_rect(frame, &fill_paint(theme.legend_background));
    canvas.draw_rect(frame, &stroke_paint(theme.legend_border, 1.0));

    for (row, (index, s)) in entries.iter().enumerate() {
        let cy = y + pad + row_h * (row as f32 + 0.5);
        let sx = x + pad;
        let color = s.color_or(theme, *index);
        match &s.kind {
            SeriesKind::Line { fill_to } => {
                if fill_to.is_some() {
                    let patch = skia::Rect::from_ltrb(sx, cy - size * 0.45, sx + swatch_w, cy + size * 0.45);
                    canvas.draw_rect(patch, &fill_paint(fade(color, s.alpha * 0.3)));
                }
                let mut stroke = stroke_paint(fade(color, s.alpha), s.width);
                if let Some(dash) = s.dash {
                    stroke.set_path_effect(skia::PathEffect::dash(&dash, 0.0));
                }
                canvas.draw_line((sx, cy), (sx + swatch_w, cy), &stroke);
            }
            SeriesKind::Scatter { radius, values, colormap } => {
                let c = if values.is_some() { colormap.sample(0.5) } else { color };
                canvas.draw_circle((sx + swatch_w * 0.5, cy), *radius, &fill_paint(fade(c, s.alpha)));
            }
            SeriesKind::Histogram { .. } => {
                let patch = skia::Rect::from_ltrb(sx + 3.0, cy - size * 0.45, sx + swatch_w - 3.0, cy + size * 0.45);
                canvas.draw_rect(patch, &fill_paint(fade(color, s.alpha)));
            }
        }
        if let Some(label) = s.label.as_deref() {
            text.draw_left(canvas, label, sx + swatch_w + pad, cy, size, theme.axis_label);
        }
    }
}

fn draw_colorbar(
    canvas: &skia::Canvas,
    text: &TextShaper,
    theme: &Theme,
    cb: &Colorbar,
    ticks: &AxisTicks,
    plot: &RectF,
    right_used: f32,
) {
    let left = plot.right + right_used + COLORBAR_GAP;
    let right = left + COLORBAR_WIDTH;
    let (top, bottom) = (plot.top, plot.bottom);
    let steps = ((bottom - top) as usize).clamp(2, 256);
    let slice = (bottom - top) / steps as f32;
    for i in 0..steps {
        let y1 = bottom - slice * i as f32;
        let y0 = y1 - slice;
        let color = cb.colormap.sample((i as f64 + 0.5) / steps as f64);
        // overlap by half a pixel so slices don't leave seams
        canvas.draw_rect(skia::Rect::from_ltrb(left, y0 - 0.5, right, y1), &fill_paint(color));
    }
    canvas.draw_rect(skia::Rect::from_ltrb(left, top, right, bottom), &stroke_paint(theme.axis_line, 1.0));

    let scale = LinearScale::new(bottom, top, cb.vmin, cb.vmax);
    let tick_paint = stroke_paint(theme.tick, 1.0);
    for t in &ticks.ticks {
        let y = scale.to_px(t.value);
        canvas.draw_line((right, y), (right + TICK_LEN, y), &tick_paint);
        text.draw_left(canvas, &t.label, right + TICK_LEN + TICK_PAD, y, theme.tick_size, theme.tick);
    }
    if !cb.label.is_empty() {
        text.draw(
            canvas,
            &cb.label,
            right + TICK_LEN + TICK_PAD + ticks.max_label_w + 6.0,
            (top + bottom) * 0.5,
            theme.label_size,
            theme.axis_label,
            TextPlacement::new(HAlign::Center, VAlign::Top).rotated(90.0),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categorical_ticks_sit_at_cell_centres() {
        let axis = Axis::categorical("", ["a", "b"]);
        let ticks = axis_ticks(&axis, 8);
        assert_eq!(ticks.len(), 2);
        assert_eq!(ticks[0].value, 0.5);
        assert_eq!(ticks[1].label, "b");
    }

    #[test]
    fn numeric_ticks_are_labelled_with_step_precision() {
        let axis = Axis::new("", 0.0, 1.0);
        let ticks = axis_ticks(&axis, 6);
        let labels: Vec<&str> = ticks.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, vec!["0.0", "0.2", "0.4", "0.6", "0.8", "1.0"]);
    }

    #[test]
    fn fade_scales_alpha() {
        let c = skia::Color::from_argb(200, 1, 2, 3);
        assert_eq!(fade(c, 0.5).a(), 100);
        assert_eq!(fade(c, 1.0), c);
    }
}
