// File: crates/figure-core/tests/autoscale.rs
// Purpose: Validate autoscale over mixed primitives and secondary axes.

use figure_core::{Annotation, Axis, Orientation, Panel, Series};

#[test]
fn autoscale_mixed_series() {
    let mut panel = Panel::new();
    panel.set_x_axis(Axis::auto("x"));
    panel.set_y_axis(Axis::auto("y"));

    panel.add_series(Series::line(vec![(0.0, 1.0), (5.0, 3.0)]));
    panel.add_series(Series::scatter(vec![(2.0, 6.0), (3.0, -1.0)]));

    panel.autoscale();

    // X spans 0..5 from the line vs 2..3 from the scatter => expect ~0..5 plus margin
    assert!(panel.x_axis.min < 0.0);
    assert!(panel.x_axis.max > 5.0);

    // Y from scatter low (-1) and high (6)
    assert!(panel.y_axis.min < -1.0);
    assert!(panel.y_axis.max > 6.0);
}

#[test]
fn secondary_histogram_does_not_move_primary_axes() {
    let mut panel = Panel::new();
    panel.set_x_axis(Axis::auto("value"));
    panel.set_y_axis(Axis::auto("count"));
    panel.add_series(Series::histogram(&[10.0, 20.0, 20.0, 30.0], 4, Orientation::Vertical).unwrap());
    panel.add_series(
        Series::histogram(&[100.0, 150.0, 200.0], 3, Orientation::Horizontal)
            .unwrap()
            .on_secondary(),
    );

    panel.autoscale();

    assert!(panel.x_axis.min < 10.0 && panel.x_axis.max > 30.0);
    assert_eq!(panel.y_axis.min, 0.0);
    let sx = panel.secondary_x.as_ref().unwrap();
    let sy = panel.secondary_y.as_ref().unwrap();
    assert_eq!(sx.min, 0.0);
    assert!(sy.min < 100.0 && sy.max > 200.0);
}

#[test]
fn pinned_range_survives_autoscale() {
    let mut panel = Panel::new();
    panel.set_x_axis(Axis::new("x", 0.0, 1.0));
    panel.set_y_axis(Axis::auto("y"));
    panel.add_series(Series::line(vec![(0.0, 0.0), (10.0, 10.0)]));
    panel.autoscale();
    assert_eq!((panel.x_axis.min, panel.x_axis.max), (0.0, 1.0));
    assert!(panel.y_axis.max > 10.0);
}

#[test]
fn annotations_stay_inside_the_view() {
    let mut panel = Panel::new();
    panel.add_series(Series::line(vec![(0.0, 0.0), (1.0, 1.0)]));
    panel.annotate(Annotation::text("note", (3.0, 0.5)));
    panel.annotate(Annotation::arrow("peak", (0.5, 2.0), (1.0, 1.0)));
    panel.autoscale();
    assert!(panel.x_axis.max > 3.0);
    assert!(panel.y_axis.max > 2.0);
}
