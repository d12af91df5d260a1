// File: crates/figure-core/src/annotation.rs
// Summary: Text callouts placed in data coordinates, optionally with an arrow to a target point.

#[derive(Clone, Debug, PartialEq)]
pub enum Annotation {
    /// Text anchored (left, vertically centred) at a data coordinate.
    Text { text: String, at: (f64, f64), size: Option<f32> },
    /// Text centred at `text_at` with an arrow pointing at `target`.
    Arrow { text: String, text_at: (f64, f64), target: (f64, f64) },
}

impl Annotation {
    pub fn text(text: impl Into<String>, at: (f64, f64)) -> Self {
        Annotation::Text { text: text.into(), at, size: None }
    }

    pub fn arrow(text: impl Into<String>, text_at: (f64, f64), target: (f64, f64)) -> Self {
        Annotation::Arrow { text: text.into(), text_at, target }
    }

    /// Data points the annotation touches; autoscale keeps them visible.
    pub fn anchors(&self) -> Vec<(f64, f64)> {
        match self {
            Annotation::Text { at, .. } => vec![*at],
            Annotation::Arrow { text_at, target, .. } => vec![*text_at, *target],
        }
    }
}
