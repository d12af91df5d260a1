// File: crates/figure-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math.

use skia_safe as skia;

use crate::types::Insets;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RectF {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl RectF {
    pub const fn from_ltrb(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self { left, top, right, bottom }
    }
    pub fn from_ltwh(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self { left, top, right: left + width, bottom: top + height }
    }
    pub fn width(&self) -> f32 { self.right - self.left }
    pub fn height(&self) -> f32 { self.bottom - self.top }
    pub fn center_x(&self) -> f32 { (self.left + self.right) * 0.5 }
    pub fn center_y(&self) -> f32 { (self.top + self.bottom) * 0.5 }

    /// Shrink by `insets`, never producing a negative width or height.
    pub fn inset(&self, insets: &Insets) -> Self {
        let left = self.left + insets.left as f32;
        let top = self.top + insets.top as f32;
        let right = (self.right - insets.right as f32).max(left + 1.0);
        let bottom = (self.bottom - insets.bottom as f32).max(top + 1.0);
        Self { left, top, right, bottom }
    }

    pub fn to_skia(&self) -> skia::Rect {
        skia::Rect::from_ltrb(self.left, self.top, self.right, self.bottom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inset_keeps_positive_extent() {
        let r = RectF::from_ltwh(0.0, 0.0, 50.0, 40.0).inset(&Insets::new(40, 40, 30, 30));
        assert!(r.width() >= 1.0);
        assert!(r.height() >= 1.0);
        assert_eq!(r.left, 40.0);
    }
}
