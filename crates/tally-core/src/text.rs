// File: crates/tally-core/src/text.rs
// Summary: Label truncation and number formatting, plus the Skia textlayout shaper used by the raster painter.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

/// Marker appended to cut labels.
pub const ELLIPSIS: char = '…';

/// Cut `text` to at most `budget` characters, ending in [`ELLIPSIS`] when cut.
/// At least one original character is always kept, so non-empty input never
/// comes back empty. `budget` must be at least 2 for the result to fit it;
/// below that a cut label is still `x…`. Every [`ChartKind`](crate::ChartKind)
/// budget is 10 or more.
pub fn truncate_label(text: &str, budget: usize) -> String {
    let count = text.chars().count();
    if count <= budget {
        return text.to_string();
    }
    let keep = budget.saturating_sub(1).max(1);
    let mut out: String = text.chars().take(keep).collect();
    out.push(ELLIPSIS);
    out
}

/// Tick and value labels: integers print bare, fractions lose trailing zeros.
pub fn format_value(v: f64) -> String {
    if !v.is_finite() {
        return "0".to_string();
    }
    if (v - v.round()).abs() < 1e-9 {
        return format!("{:.0}", v.round());
    }
    let s = format!("{v:.3}");
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Share of a total with one decimal place, e.g. `12.5%`.
pub fn format_percent(part: f64, total: f64) -> String {
    let pct = if total > 0.0 { part / total * 100.0 } else { 0.0 };
    format!("{pct:.1}%")
}

/// Rough advance width of a label in logical pixels; layout uses it before any font is loaded.
pub fn estimate_width(chars: usize, font_px: f32) -> f32 {
    chars as f32 * font_px * 0.6
}

pub struct TextShaper {
    fonts: FontCollection,
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(size: f32, color: skia::Color, bold: bool) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        ts.set_font_families(&["Segoe UI", "Arial", "Helvetica", "Roboto", "DejaVu Sans", "sans-serif"]);
        if bold {
            ts.set_font_style(skia::FontStyle::bold());
        }
        ts
    }

    pub fn layout(&self, text: &str, size: f32, color: skia::Color, bold: bool) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        let style = Self::make_style(size, color, bold);
        builder.push_style(&style);
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }
}

impl Default for TextShaper {
    fn default() -> Self { Self::new() }
}
