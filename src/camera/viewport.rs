//! Window geometry and pixel-coordinate conversion.

use glam::DVec2;

/// Window size in physical pixels. Both dimensions are at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Viewport {
    /// Create a viewport, clamping zero dimensions to 1.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width.max(1),
            height: height.max(1),
        }
    }

    /// Width over height.
    #[must_use]
    pub fn aspect(&self) -> f64 {
        f64::from(self.width) / f64::from(self.height)
    }

    /// Convert a window position (origin top-left, y down) to the
    /// bottom-left origin used for mouse deltas: `y' = height − y − 1`.
    #[must_use]
    pub fn to_bottom_left(&self, x: f64, y: f64) -> DVec2 {
        DVec2::new(x, f64::from(self.height) - y - 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_dimensions_clamp_to_one() {
        let v = Viewport::new(0, 0);
        assert_eq!((v.width, v.height), (1, 1));
    }

    #[test]
    fn y_axis_flips_to_bottom_left() {
        let v = Viewport::new(512, 512);
        assert_eq!(v.to_bottom_left(10.0, 0.0), DVec2::new(10.0, 511.0));
        assert_eq!(v.to_bottom_left(10.0, 511.0), DVec2::new(10.0, 0.0));
    }

    #[test]
    fn aspect_is_width_over_height() {
        assert_eq!(Viewport::new(1024, 512).aspect(), 2.0);
    }
}
