// File: crates/figure-core/src/panel.rs
// Summary: One coordinate sub-region of a figure: axes, series, heatmap, annotations, legend and colorbar.

use crate::annotation::Annotation;
use crate::axis::Axis;
use crate::colormap::Colormap;
use crate::heatmap::Heatmap;
use crate::series::{AxisSide, Series};
use crate::view::{ViewState, AUTOSCALE_MARGIN};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LegendPosition {
    UpperLeft,
    UpperRight,
    LowerLeft,
    LowerRight,
}

/// Vertical colour scale drawn to the right of the plot area.
#[derive(Clone, Debug, PartialEq)]
pub struct Colorbar {
    pub colormap: Colormap,
    pub vmin: f64,
    pub vmax: f64,
    pub label: String,
}

/// Axes after autoscale, as used for drawing.
#[derive(Clone, Debug, PartialEq)]
pub struct PanelAxes {
    pub x: Axis,
    pub y: Axis,
    pub secondary_x: Option<Axis>,
    pub secondary_y: Option<Axis>,
}

#[derive(Clone, Debug, Default)]
pub struct Panel {
    pub title: Option<String>,
    pub x_axis: Axis,
    pub y_axis: Axis,
    /// Drawn along the top edge; used by series on [`AxisSide::Secondary`].
    pub secondary_x: Option<Axis>,
    /// Drawn along the right edge; used by series on [`AxisSide::Secondary`].
    pub secondary_y: Option<Axis>,
    pub series: Vec<Series>,
    pub annotations: Vec<Annotation>,
    pub heatmap: Option<Heatmap>,
    pub colorbar: Option<Colorbar>,
    pub legend: Option<LegendPosition>,
    /// Overrides the theme's grid setting.
    pub grid: Option<bool>,
}

impl Panel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_title(&mut self, title: impl Into<String>) -> &mut Self {
        self.title = Some(title.into());
        self
    }

    pub fn set_x_axis(&mut self, axis: Axis) -> &mut Self {
        self.x_axis = axis;
        self
    }

    pub fn set_y_axis(&mut self, axis: Axis) -> &mut Self {
        self.y_axis = axis;
        self
    }

    /// Add a series; secondary series get auto-ranged secondary axes if none are set.
    pub fn add_series(&mut self, series: Series) -> &mut Self {
        if series.axes == AxisSide::Secondary {
            self.secondary_x.get_or_insert_with(|| Axis::auto(""));
            self.secondary_y.get_or_insert_with(|| Axis::auto(""));
        }
        self.series.push(series);
        self
    }

    pub fn annotate(&mut self, annotation: Annotation) -> &mut Self {
        self.annotations.push(annotation);
        self
    }

    /// Install a heatmap layer and switch both axes to its cell grid.
    /// `x_labels` name the columns, `y_labels` the rows (row 0 on top).
    pub fn set_heatmap<S: Into<String>>(
        &mut self,
        heatmap: Heatmap,
        x_labels: impl IntoIterator<Item = S>,
        y_labels: impl IntoIterator<Item = S>,
    ) -> &mut Self {
        let x_label = std::mem::take(&mut self.x_axis.label);
        let y_label = std::mem::take(&mut self.y_axis.label);
        let mut x = Axis::categorical(x_label, x_labels);
        let mut y = Axis::categorical(y_label, y_labels).inverted();
        x.set_range(0.0, heatmap.cols() as f64);
        y.set_range(0.0, heatmap.rows() as f64);
        x.tick_rotation = self.x_axis.tick_rotation;
        y.tick_rotation = self.y_axis.tick_rotation;
        self.x_axis = x;
        self.y_axis = y;
        self.grid = Some(false);
        self.heatmap = Some(heatmap);
        self
    }

    pub fn set_colorbar(&mut self, colormap: Colormap, vmin: f64, vmax: f64, label: impl Into<String>) -> &mut Self {
        self.colorbar = Some(Colorbar { colormap, vmin, vmax, label: label.into() });
        self
    }

    pub fn show_legend(&mut self, position: LegendPosition) -> &mut Self {
        self.legend = Some(position);
        self
    }

    pub fn primary_series(&self) -> impl Iterator<Item = &Series> {
        self.series.iter().filter(|s| s.axes == AxisSide::Primary)
    }

    pub fn secondary_series(&self) -> impl Iterator<Item = &Series> {
        self.series.iter().filter(|s| s.axes == AxisSide::Secondary)
    }

    /// Axes with data-driven ranges filled in; pinned axes are returned as-is.
    pub fn resolved_axes(&self) -> PanelAxes {
        let mut axes = PanelAxes {
            x: self.x_axis.clone(),
            y: self.y_axis.clone(),
            secondary_x: self.secondary_x.clone(),
            secondary_y: self.secondary_y.clone(),
        };
        if let Some(mut view) = ViewState::from_series(self.primary_series()) {
            for a in &self.annotations {
                for (x, y) in a.anchors() {
                    view.include_point(x, y);
                }
            }
            view.with_margin(AUTOSCALE_MARGIN).apply_to(&mut axes.x, &mut axes.y);
        }
        if let Some(view) = ViewState::from_series(self.secondary_series()) {
            let view = view.with_margin(AUTOSCALE_MARGIN);
            if let Some(sx) = axes.secondary_x.as_mut() { view.apply_x(sx); }
            if let Some(sy) = axes.secondary_y.as_mut() { view.apply_y(sy); }
        }
        axes
    }

    /// Fix the data-driven ranges into the panel's own axes.
    pub fn autoscale(&mut self) {
        let resolved = self.resolved_axes();
        self.x_axis = resolved.x;
        self.y_axis = resolved.y;
        self.secondary_x = resolved.secondary_x;
        self.secondary_y = resolved.secondary_y;
    }

    /// Series that get a legend entry, paired with their palette index.
    pub fn legend_entries(&self) -> impl Iterator<Item = (usize, &Series)> {
        self.series.iter().enumerate().filter(|(_, s)| s.label.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::Orientation;

    #[test]
    fn secondary_series_creates_secondary_axes() {
        let mut p = Panel::new();
        p.add_series(Series::histogram(&[1.0, 2.0], 2, Orientation::Horizontal).unwrap().on_secondary());
        assert!(p.secondary_x.is_some());
        assert!(p.secondary_y.is_some());
        let axes = p.resolved_axes();
        let sy = axes.secondary_y.unwrap();
        assert!(sy.min < 1.0 && sy.max > 2.0);
    }

    #[test]
    fn heatmap_switches_to_categorical_axes() {
        let mut p = Panel::new();
        let h = Heatmap::new(vec![vec![1.0, 0.5, 0.2], vec![0.5, 1.0, 0.3]]).unwrap();
        p.set_heatmap(h, ["a", "b", "c"], ["r1", "r2"]);
        assert_eq!((p.x_axis.min, p.x_axis.max), (0.0, 3.0));
        assert_eq!((p.y_axis.min, p.y_axis.max), (0.0, 2.0));
        assert!(p.y_axis.inverted);
        assert_eq!(p.grid, Some(false));
    }

    #[test]
    fn autoscale_keeps_annotations_visible() {
        let mut p = Panel::new();
        p.add_series(Series::line(vec![(0.0, 0.0), (1.0, 1.0)]));
        p.annotate(Annotation::arrow("peak", (3.0, 2.0), (1.0, 1.0)));
        p.autoscale();
        assert!(p.x_axis.max > 3.0);
        assert!(p.y_axis.max > 2.0);
    }

    #[test]
    fn legend_entries_skip_unlabeled() {
        let mut p = Panel::new();
        p.add_series(Series::line(vec![(0.0, 0.0)]).with_label("a"));
        p.add_series(Series::line(vec![(0.0, 0.0)]));
        p.add_series(Series::line(vec![(0.0, 0.0)]).with_label("c"));
        let idx: Vec<usize> = p.legend_entries().map(|(i, _)| i).collect();
        assert_eq!(idx, vec![0, 2]);
    }
}
