use std::ops::{Add, Sub};

use serde::Serialize;

// ─────────────────────────────────────────────────────────────────────────────
// Point2
// ─────────────────────────────────────────────────────────────────────────────

/// A point in canvas pixel space. `y` grows downwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    pub const ORIGIN: Self = Self::new(0.0, 0.0);

    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Linear interpolation. Returns `self * (1 - t) + rhs * t`.
    #[must_use]
    pub fn lerp(self, rhs: Self, t: f64) -> Self {
        Self::new(self.x + (rhs.x - self.x) * t, self.y + (rhs.y - self.y) * t)
    }
}

impl Add for Point2 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point2 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl From<[f64; 2]> for Point2 {
    fn from(arr: [f64; 2]) -> Self {
        Self::new(arr[0], arr[1])
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Rect
// ─────────────────────────────────────────────────────────────────────────────

/// Axis-aligned rectangle given by origin and size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle spanning `[left, right] x [top, bottom]`.
    #[must_use]
    pub fn from_edges(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self::new(left, top, right - left, bottom - top)
    }

    #[must_use]
    pub fn right(self) -> f64 {
        self.x + self.width
    }

    #[must_use]
    pub fn bottom(self) -> f64 {
        self.y + self.height
    }

    #[must_use]
    pub fn center(self) -> Point2 {
        Point2::new(self.x + self.width * 0.5, self.y + self.height * 0.5)
    }

    /// Closed containment: points on the edges are inside.
    #[must_use]
    pub fn contains(self, point: Point2) -> bool {
        point.x >= self.x && point.x <= self.right() && point.y >= self.y && point.y <= self.bottom()
    }

    /// Corners in drawing order, starting top-left, clockwise on screen.
    #[must_use]
    pub fn corners(self) -> [Point2; 4] {
        [
            Point2::new(self.x, self.y),
            Point2::new(self.right(), self.y),
            Point2::new(self.right(), self.bottom()),
            Point2::new(self.x, self.bottom()),
        ]
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Polygon containment
// ─────────────────────────────────────────────────────────────────────────────

/// Even-odd point-in-polygon test. Points on an edge count as inside.
#[must_use]
pub fn polygon_contains(points: &[Point2], p: Point2, eps: f64) -> bool {
    if points.len() < 3 || !p.is_finite() {
        return false;
    }

    for i in 0..points.len() {
        let a = points[i];
        let b = points[(i + 1) % points.len()];
        if point_on_segment(p, a, b, eps) {
            return true;
        }
    }

    let mut inside = false;
    for i in 0..points.len() {
        let a = points[i];
        let b = points[(i + 1) % points.len()];

        let intersects = (a.y > p.y) != (b.y > p.y);
        if !intersects {
            continue;
        }

        let denom = b.y - a.y;
        if denom == 0.0 {
            continue;
        }

        let t = (p.y - a.y) / denom;
        let x = a.x + t * (b.x - a.x);
        if p.x <= x + eps {
            inside = !inside;
        }
    }

    inside
}

fn point_on_segment(p: Point2, a: Point2, b: Point2, eps: f64) -> bool {
    let ab = b - a;
    let ap = p - a;
    let cross = ab.x * ap.y - ab.y * ap.x;
    let len = (ab.x * ab.x + ab.y * ab.y).sqrt();
    if len <= eps {
        let dist = (ap.x * ap.x + ap.y * ap.y).sqrt();
        return dist <= eps;
    }
    if cross.abs() > eps * len {
        return false;
    }
    let dot = ap.x * ab.x + ap.y * ab.y;
    dot >= -eps && dot <= len * len + eps
}
