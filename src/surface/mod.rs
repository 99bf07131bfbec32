//! Tekenoppervlak-abstractie voor de doorsnede-renderer.
//!
//! The renderer only talks to [`Surface`]. [`RecordingSurface`] keeps a
//! display list of [`DrawCommand`]s, which tests assert on and which the
//! engine hands to JavaScript. On `wasm32` a browser canvas implementation
//! lives in [`canvas`].

#[cfg(target_arch = "wasm32")]
pub mod canvas;

use serde::Serialize;
use thiserror::Error;

use crate::geometry::{Point2, Rect};

/// Result type for surface operations.
pub type SurfaceResult<T> = Result<T, SurfaceError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SurfaceError {
    /// The drawing backend rejected a call.
    #[error("tekenoppervlak weigerde de opdracht: {0}")]
    Backend(String),
}

/// Horizontal anchoring of text relative to its position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

impl TextAlign {
    #[must_use]
    pub fn as_css(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        }
    }
}

/// Outline style. An empty `dash` draws a solid line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stroke {
    pub color: String,
    pub width: f64,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub dash: Vec<f64>,
}

impl Stroke {
    #[must_use]
    pub fn solid(color: impl Into<String>, width: f64) -> Self {
        Self {
            color: color.into(),
            width,
            dash: Vec::new(),
        }
    }

    #[must_use]
    pub fn dashed(color: impl Into<String>, width: f64, dash: Vec<f64>) -> Self {
        Self {
            color: color.into(),
            width,
            dash,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextStyle {
    pub color: String,
    pub font: String,
    pub align: TextAlign,
}

/// The fixed-size 2D drawing context the renderer needs.
pub trait Surface {
    /// Canvas size in pixels.
    fn size(&self) -> (f64, f64);

    fn clear(&mut self, rect: Rect) -> SurfaceResult<()>;

    fn fill_rect(&mut self, rect: Rect, color: &str) -> SurfaceResult<()>;

    fn stroke_rect(&mut self, rect: Rect, stroke: &Stroke) -> SurfaceResult<()>;

    /// Fills a closed polygon.
    fn fill_polygon(&mut self, points: &[Point2], color: &str) -> SurfaceResult<()>;

    /// Strokes a closed polygon.
    fn stroke_polygon(&mut self, points: &[Point2], stroke: &Stroke) -> SurfaceResult<()>;

    fn line(&mut self, from: Point2, to: Point2, stroke: &Stroke) -> SurfaceResult<()>;

    fn text(&mut self, text: &str, at: Point2, style: &TextStyle) -> SurfaceResult<()>;
}

/// One recorded drawing primitive.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum DrawCommand {
    Clear {
        rect: Rect,
    },
    FillRect {
        rect: Rect,
        color: String,
    },
    StrokeRect {
        rect: Rect,
        stroke: Stroke,
    },
    FillPolygon {
        points: Vec<Point2>,
        color: String,
    },
    StrokePolygon {
        points: Vec<Point2>,
        stroke: Stroke,
    },
    Line {
        from: Point2,
        to: Point2,
        stroke: Stroke,
    },
    Text {
        text: String,
        at: Point2,
        style: TextStyle,
    },
}

/// In-memory surface that logs every primitive.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordingSurface {
    width: f64,
    height: f64,
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
        }
    }

    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    #[must_use]
    pub fn into_commands(self) -> Vec<DrawCommand> {
        self.commands
    }

    /// Every polygon fill, in drawing order.
    pub fn polygon_fills(&self) -> impl Iterator<Item = (&[Point2], &str)> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::FillPolygon { points, color } => Some((points.as_slice(), color.as_str())),
            _ => None,
        })
    }

    /// Every rectangle fill, in drawing order.
    pub fn rect_fills(&self) -> impl Iterator<Item = (Rect, &str)> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::FillRect { rect, color } => Some((*rect, color.as_str())),
            _ => None,
        })
    }

    /// Every text string, in drawing order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    fn clear(&mut self, rect: Rect) -> SurfaceResult<()> {
        // A full clear makes everything recorded so far invisible.
        if rect.x <= 0.0 && rect.y <= 0.0 && rect.right() >= self.width && rect.bottom() >= self.height {
            self.commands.clear();
        }
        self.commands.push(DrawCommand::Clear { rect });
        Ok(())
    }

    fn fill_rect(&mut self, rect: Rect, color: &str) -> SurfaceResult<()> {
        self.commands.push(DrawCommand::FillRect {
            rect,
            color: color.to_owned(),
        });
        Ok(())
    }

    fn stroke_rect(&mut self, rect: Rect, stroke: &Stroke) -> SurfaceResult<()> {
        self.commands.push(DrawCommand::StrokeRect {
            rect,
            stroke: stroke.clone(),
        });
        Ok(())
    }

    fn fill_polygon(&mut self, points: &[Point2], color: &str) -> SurfaceResult<()> {
        self.commands.push(DrawCommand::FillPolygon {
            points: points.to_vec(),
            color: color.to_owned(),
        });
        Ok(())
    }

    fn stroke_polygon(&mut self, points: &[Point2], stroke: &Stroke) -> SurfaceResult<()> {
        self.commands.push(DrawCommand::StrokePolygon {
            points: points.to_vec(),
            stroke: stroke.clone(),
        });
        Ok(())
    }

    fn line(&mut self, from: Point2, to: Point2, stroke: &Stroke) -> SurfaceResult<()> {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            stroke: stroke.clone(),
        });
        Ok(())
    }

    fn text(&mut self, text: &str, at: Point2, style: &TextStyle) -> SurfaceResult<()> {
        self.commands.push(DrawCommand::Text {
            text: text.to_owned(),
            at,
            style: style.clone(),
        });
        Ok(())
    }
}
