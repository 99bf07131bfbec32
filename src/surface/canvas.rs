//! Browser canvas implementation of [`Surface`].

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::{Stroke, Surface, SurfaceError, SurfaceResult, TextStyle};
use crate::geometry::{Point2, Rect};

/// Draws straight onto a `CanvasRenderingContext2d`.
pub struct CanvasSurface<'a> {
    ctx: &'a CanvasRenderingContext2d,
    width: f64,
    height: f64,
}

impl<'a> CanvasSurface<'a> {
    /// Uses the backing canvas resolution when the context has one,
    /// otherwise the given fallback size.
    #[must_use]
    pub fn new(ctx: &'a CanvasRenderingContext2d, fallback: (f64, f64)) -> Self {
        let (width, height) = ctx
            .canvas()
            .map(|canvas| (f64::from(canvas.width()), f64::from(canvas.height())))
            .unwrap_or(fallback);
        Self { ctx, width, height }
    }

    fn apply_stroke(&self, stroke: &Stroke) -> SurfaceResult<()> {
        self.ctx.set_stroke_style_str(&stroke.color);
        self.ctx.set_line_width(stroke.width);
        let dash = serde_wasm_bindgen::to_value(&stroke.dash).map_err(|err| SurfaceError::Backend(err.to_string()))?;
        self.ctx.set_line_dash(&dash).map_err(backend_error)
    }

    fn trace_polygon(&self, points: &[Point2]) {
        self.ctx.begin_path();
        if let Some((first, rest)) = points.split_first() {
            self.ctx.move_to(first.x, first.y);
            for point in rest {
                self.ctx.line_to(point.x, point.y);
            }
            self.ctx.close_path();
        }
    }
}

impl Surface for CanvasSurface<'_> {
    fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    fn clear(&mut self, rect: Rect) -> SurfaceResult<()> {
        self.ctx.clear_rect(rect.x, rect.y, rect.width, rect.height);
        Ok(())
    }

    fn fill_rect(&mut self, rect: Rect, color: &str) -> SurfaceResult<()> {
        self.ctx.set_fill_style_str(color);
        self.ctx.fill_rect(rect.x, rect.y, rect.width, rect.height);
        Ok(())
    }

    fn stroke_rect(&mut self, rect: Rect, stroke: &Stroke) -> SurfaceResult<()> {
        self.apply_stroke(stroke)?;
        self.ctx.stroke_rect(rect.x, rect.y, rect.width, rect.height);
        Ok(())
    }

    fn fill_polygon(&mut self, points: &[Point2], color: &str) -> SurfaceResult<()> {
        self.trace_polygon(points);
        self.ctx.set_fill_style_str(color);
        self.ctx.fill();
        Ok(())
    }

    fn stroke_polygon(&mut self, points: &[Point2], stroke: &Stroke) -> SurfaceResult<()> {
        self.apply_stroke(stroke)?;
        self.trace_polygon(points);
        self.ctx.stroke();
        Ok(())
    }

    fn line(&mut self, from: Point2, to: Point2, stroke: &Stroke) -> SurfaceResult<()> {
        self.apply_stroke(stroke)?;
        self.ctx.begin_path();
        self.ctx.move_to(from.x, from.y);
        self.ctx.line_to(to.x, to.y);
        self.ctx.stroke();
        Ok(())
    }

    fn text(&mut self, text: &str, at: Point2, style: &TextStyle) -> SurfaceResult<()> {
        self.ctx.set_fill_style_str(&style.color);
        self.ctx.set_font(&style.font);
        self.ctx.set_text_align(style.align.as_css());
        self.ctx.fill_text(text, at.x, at.y).map_err(backend_error)
    }
}

fn backend_error(err: JsValue) -> SurfaceError {
    SurfaceError::Backend(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}
