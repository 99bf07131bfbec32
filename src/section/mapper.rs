//! Domain to canvas coordinate mapping.
//!
//! Horizontal position comes from a borehole's ordinal in the section, not
//! from its geographic location. Depth maps linearly from the top margin
//! (depth 0) to the bottom margin (the section's maximum depth).

use crate::config::SectionConfig;
use crate::geometry::Rect;
use crate::model::Borehole;

/// Pure mapping from (ordinal, depth) to canvas pixels. Rebuild it for
/// every render; it captures canvas size and dataset extent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateMapper {
    width: f64,
    height: f64,
    margin: f64,
    column_width: f64,
    count: usize,
    max_depth: f64,
}

impl CoordinateMapper {
    #[must_use]
    pub fn new(config: &SectionConfig, count: usize, max_depth: f64) -> Self {
        Self {
            width: config.width,
            height: config.height,
            margin: config.margin,
            column_width: config.column_width,
            count,
            max_depth,
        }
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.count
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    #[must_use]
    pub fn margin(&self) -> f64 {
        self.margin
    }

    #[must_use]
    pub fn column_width(&self) -> f64 {
        self.column_width
    }

    /// Maximum depth as given, before the zero-depth fallback.
    #[must_use]
    pub fn max_depth(&self) -> f64 {
        self.max_depth
    }

    /// A flat (or non-finite) dataset is scaled as if it were 1 unit deep.
    #[must_use]
    pub fn has_degenerate_depth(&self) -> bool {
        !(self.max_depth.is_finite() && self.max_depth > 0.0)
    }

    /// Depth used for scaling.
    #[must_use]
    pub fn effective_max_depth(&self) -> f64 {
        if self.has_degenerate_depth() {
            1.0
        } else {
            self.max_depth
        }
    }

    /// Center x of the column at `index`.
    ///
    /// `count` slots are spread evenly between the margins, the first on
    /// the left margin and the last on the right one. With fewer than two
    /// slots the column sits in the middle.
    #[must_use]
    pub fn x_for_index(&self, index: usize) -> f64 {
        if self.count < 2 {
            return self.width * 0.5;
        }
        let t = index as f64 / (self.count - 1) as f64;
        self.margin + (self.width - 2.0 * self.margin) * t
    }

    /// Canvas y for a depth. Negative or non-finite depths clamp to 0.
    #[must_use]
    pub fn y_for_depth(&self, depth: f64) -> f64 {
        let depth = if depth.is_finite() { depth.max(0.0) } else { 0.0 };
        self.margin + self.drawable_height() * (depth / self.effective_max_depth())
    }

    /// Inverse of [`Self::y_for_depth`] for points below the top margin.
    #[must_use]
    pub fn depth_for_y(&self, y: f64) -> f64 {
        ((y - self.margin) / self.drawable_height() * self.effective_max_depth()).max(0.0)
    }

    /// Horizontal extent `[left, right]` of the column at `index`.
    #[must_use]
    pub fn column_span(&self, index: usize) -> (f64, f64) {
        let x = self.x_for_index(index);
        let half = self.column_width * 0.5;
        (x - half, x + half)
    }

    /// Rectangle covering `[top, bottom]` of the column at `index`.
    #[must_use]
    pub fn column_rect(&self, index: usize, top: f64, bottom: f64) -> Rect {
        let (left, right) = self.column_span(index);
        Rect::from_edges(left, self.y_for_depth(top), right, self.y_for_depth(bottom))
    }

    fn drawable_height(&self) -> f64 {
        self.height - 2.0 * self.margin
    }
}

/// Deepest finite `bottom_depth` among the given boreholes, `0.0` if none.
#[must_use]
pub fn max_depth<'a, I>(boreholes: I) -> f64
where
    I: IntoIterator<Item = &'a Borehole>,
{
    boreholes
        .into_iter()
        .flat_map(|borehole| borehole.layers.iter())
        .map(|layer| layer.bottom_depth)
        .filter(|depth| depth.is_finite())
        .fold(0.0, f64::max)
}
