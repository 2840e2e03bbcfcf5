use eframe::egui::{Rect, Vec2};

// ---------------------------------------------------------------------------
// Chart layout – canvas size, margins, derived chart area
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margin {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

/// Fixed pixel geometry of the chart surface. An explicit value passed to
/// the renderer rather than a set of ambient globals. The bottom margin is
/// oversized to leave room for the clickable axis-label stack.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartLayout {
    pub canvas: Vec2,
    pub margin: Margin,
}

impl Default for ChartLayout {
    fn default() -> Self {
        Self {
            canvas: Vec2::new(960.0, 500.0),
            margin: Margin {
                top: 20.0,
                right: 40.0,
                bottom: 130.0,
                left: 100.0,
            },
        }
    }
}

impl ChartLayout {
    /// Width of the plotting area inside the margins.
    pub fn chart_width(&self) -> f32 {
        self.canvas.x - self.margin.left - self.margin.right
    }

    /// Height of the plotting area inside the margins.
    pub fn chart_height(&self) -> f32 {
        self.canvas.y - self.margin.top - self.margin.bottom
    }

    /// The plotting area in screen coordinates, given where the canvas was
    /// allocated.
    pub fn chart_rect(&self, canvas: Rect) -> Rect {
        Rect::from_min_size(
            canvas.min + Vec2::new(self.margin.left, self.margin.top),
            Vec2::new(self.chart_width(), self.chart_height()),
        )
    }
}

// ---------------------------------------------------------------------------
