use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Outer spacing between the surface edge and the plot area, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margins {
    #[must_use]
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }
}

impl Default for Margins {
    fn default() -> Self {
        Self::new(20.0, 50.0, 100.0, 75.0)
    }
}

/// Inner drawing region where marks live.
///
/// `left`/`top` locate the plot origin on the surface; marks and axes are
/// computed in plot-local coordinates and shifted by this origin when the
/// frame is assembled.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    #[must_use]
    pub fn from_viewport(viewport: Viewport, margins: Margins) -> Self {
        Self {
            left: margins.left,
            top: margins.top,
            width: f64::from(viewport.width) - margins.left - margins.right,
            height: f64::from(viewport.height) - margins.top - margins.bottom,
        }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    /// Pixel range for the horizontal axis: `[0, width]`.
    #[must_use]
    pub fn x_range(self) -> (f64, f64) {
        (0.0, self.width)
    }

    /// Pixel range for the vertical axis: `[height, 0]`, larger values sit higher.
    #[must_use]
    pub fn y_range(self) -> (f64, f64) {
        (self.height, 0.0)
    }

    /// Converts plot-local coordinates to surface coordinates.
    #[must_use]
    pub fn to_surface(self, x: f64, y: f64) -> (f64, f64) {
        (self.left + x, self.top + y)
    }

    /// Converts surface coordinates to plot-local coordinates.
    #[must_use]
    pub fn to_local(self, x: f64, y: f64) -> (f64, f64) {
        (x - self.left, y - self.top)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_layout_inner_area() {
        let area = PlotArea::from_viewport(Viewport::new(680, 500), Margins::default());
        assert_eq!(area.width, 555.0);
        assert_eq!(area.height, 380.0);
        assert_eq!(area.to_surface(0.0, 0.0), (75.0, 20.0));
    }
}
