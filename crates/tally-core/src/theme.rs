// File: crates/tally-core/src/theme.rs
// Summary: Light/Dark theming and the shared categorical palette.

use skia_safe as skia;

/// Categorical fill colors (ARGB), cycled by `index % len`. Read-only and shared by every chart.
pub const PALETTE: [u32; 10] = [
    0xFF4E79A7, // blue
    0xFFF28E2B, // orange
    0xFFE15759, // red
    0xFF76B7B2, // teal
    0xFF59A14F, // green
    0xFFEDC948, // yellow
    0xFFB07AA1, // purple
    0xFFFF9DA7, // pink
    0xFF9C755F, // brown
    0xFFBAB0AC, // grey
];

/// Color for the `index`-th bar, slice or series.
pub fn palette_color(index: usize) -> skia::Color {
    skia::Color::new(PALETTE[index % PALETTE.len()])
}

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub grid: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub tick: skia::Color,
    pub value_label: skia::Color,
    pub placeholder: skia::Color,
}

impl Theme {
    /// White page, slate text; the report dashboard's look.
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::new(0xFFFFFFFF),
            grid: skia::Color::new(0xFFE5E7EB),
            axis_line: skia::Color::new(0xFF9CA3AF),
            axis_label: skia::Color::new(0xFF374151),
            tick: skia::Color::new(0xFF6B7280),
            value_label: skia::Color::new(0xFF111827),
            placeholder: skia::Color::new(0xFF9CA3AF),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::new(0xFF111827),
            grid: skia::Color::new(0xFF1F2937),
            axis_line: skia::Color::new(0xFF4B5563),
            axis_label: skia::Color::new(0xFFE5E7EB),
            tick: skia::Color::new(0xFF9CA3AF),
            value_label: skia::Color::new(0xFFF9FAFB),
            placeholder: skia::Color::new(0xFF6B7280),
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Self::light() }
}

/// Look a preset up by name (case-insensitive); unknown names get light.
pub fn find(name: &str) -> Theme {
    [Theme::light(), Theme::dark()]
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name.trim()))
        .unwrap_or_default()
}
