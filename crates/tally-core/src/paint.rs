// File: crates/tally-core/src/paint.rs
// Summary: Renderer-agnostic drawing seam (Painter) and its Skia raster implementation.
// Notes:
// - Coordinates are logical pixels; the Skia canvas already carries the density scale.
// - Text `at` is the anchor: x per `Align`, y at the vertical middle of the line.

use skia_safe as skia;

use crate::geometry::Rect;
use crate::text::TextShaper;
use crate::theme::Theme;

pub type Color = skia::Color;
pub type Pt = (f32, f32);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextRole {
    Tick,
    Category,
    Value,
    Legend,
    Total,
    Placeholder,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    pub role: TextRole,
    pub size: f32,
    pub color: Color,
    pub align: Align,
    /// Degrees, clockwise; negative tilts the text up to the right.
    pub rotation: f32,
    pub bold: bool,
}

impl TextStyle {
    /// Default look for a role under `theme`.
    pub fn new(role: TextRole, theme: &Theme) -> Self {
        let (size, color, bold) = match role {
            TextRole::Tick => (10.0, theme.tick, false),
            TextRole::Category => (11.0, theme.axis_label, false),
            TextRole::Value => (10.0, theme.value_label, false),
            TextRole::Legend => (11.0, theme.axis_label, false),
            TextRole::Total => (20.0, theme.axis_label, true),
            TextRole::Placeholder => (13.0, theme.placeholder, false),
        };
        Self { role, size, color, align: Align::Center, rotation: 0.0, bold }
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    pub fn rotated(mut self, degrees: f32) -> Self {
        self.rotation = degrees;
        self
    }
}

/// Everything a renderer may ask of a drawing surface.
pub trait Painter {
    fn clear(&mut self, color: Color);
    fn fill_rect(&mut self, rect: Rect, color: Color);
    fn stroke_line(&mut self, from: Pt, to: Pt, width: f32, color: Color);
    fn stroke_polyline(&mut self, points: &[Pt], width: f32, color: Color);
    fn fill_circle(&mut self, center: Pt, radius: f32, color: Color);
    /// Pie wedge from `start_deg` sweeping `sweep_deg` clockwise (0° is 3 o'clock).
    fn fill_wedge(&mut self, center: Pt, radius: f32, start_deg: f32, sweep_deg: f32, color: Color);
    /// Start an offscreen layer; `punch_disc` inside it only removes the layer's own pixels.
    fn begin_layer(&mut self);
    /// Erase a disc (destination-out compositing).
    fn punch_disc(&mut self, center: Pt, radius: f32);
    fn end_layer(&mut self);
    fn text(&mut self, text: &str, at: Pt, style: &TextStyle);
}

/// Paints onto a Skia canvas whose matrix already maps logical to physical pixels.
pub struct SkiaPainter<'a> {
    canvas: &'a skia::Canvas,
    shaper: &'a TextShaper,
}

impl<'a> SkiaPainter<'a> {
    pub fn new(canvas: &'a skia::Canvas, shaper: &'a TextShaper) -> Self {
        Self { canvas, shaper }
    }

    fn fill(color: Color) -> skia::Paint {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_style(skia::paint::Style::Fill);
        paint.set_color(color);
        paint
    }

    fn stroke(width: f32, color: Color) -> skia::Paint {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_style(skia::paint::Style::Stroke);
        paint.set_stroke_width(width);
        paint.set_color(color);
        paint
    }
}

impl Painter for SkiaPainter<'_> {
    fn clear(&mut self, color: Color) {
        self.canvas.clear(color);
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.canvas.draw_rect(skia::Rect::from(rect), &Self::fill(color));
    }

    fn stroke_line(&mut self, from: Pt, to: Pt, width: f32, color: Color) {
        self.canvas.draw_line(from, to, &Self::stroke(width, color));
    }

    fn stroke_polyline(&mut self, points: &[Pt], width: f32, color: Color) {
        let Some((&first, rest)) = points.split_first() else { return };
        let mut path = skia::Path::new();
        path.move_to(first);
        for &p in rest {
            path.line_to(p);
        }
        let mut paint = Self::stroke(width, color);
        paint.set_stroke_join(skia::paint::Join::Round);
        self.canvas.draw_path(&path, &paint);
    }

    fn fill_circle(&mut self, center: Pt, radius: f32, color: Color) {
        self.canvas.draw_circle(center, radius, &Self::fill(color));
    }

    fn fill_wedge(&mut self, center: Pt, radius: f32, start_deg: f32, sweep_deg: f32, color: Color) {
        // arc_to cannot close a full turn; a lone slice is just the disc
        if sweep_deg >= 359.99 {
            self.fill_circle(center, radius, color);
            return;
        }
        let (cx, cy) = center;
        let oval = skia::Rect::from_xywh(cx - radius, cy - radius, radius * 2.0, radius * 2.0);
        let mut path = skia::Path::new();
        path.move_to(center);
        path.arc_to(oval, start_deg, sweep_deg, false);
        path.close();
        self.canvas.draw_path(&path, &Self::fill(color));
    }

    fn begin_layer(&mut self) {
        self.canvas.save_layer(&skia::canvas::SaveLayerRec::default());
    }

    fn punch_disc(&mut self, center: Pt, radius: f32) {
        let mut paint = Self::fill(Color::BLACK);
        paint.set_blend_mode(skia::BlendMode::DstOut);
        self.canvas.draw_circle(center, radius, &paint);
    }

    fn end_layer(&mut self) {
        self.canvas.restore();
    }

    fn text(&mut self, text: &str, at: Pt, style: &TextStyle) {
        if text.is_empty() {
            return;
        }
        let paragraph = self.shaper.layout(text, style.size, style.color, style.bold);
        let w = paragraph.longest_line();
        let h = paragraph.height();
        let dx = match style.align {
            Align::Left => 0.0,
            Align::Center => -w * 0.5,
            Align::Right => -w,
        };
        if style.rotation == 0.0 {
            paragraph.paint(self.canvas, (at.0 + dx, at.1 - h * 0.5));
            return;
        }
        self.canvas.save();
        self.canvas.translate(at);
        self.canvas.rotate(style.rotation, None);
        paragraph.paint(self.canvas, (dx, -h * 0.5));
        self.canvas.restore();
    }
}
