// File: crates/tally-core/tests/layout_text.rs
// Purpose: Layout rectangles per chart kind, label thinning, truncation and number formatting.

use tally_core::layout::{label_stride, layout_with, visible_labels, DONUT_SPLIT};
use tally_core::text::{format_percent, format_value, ELLIPSIS};
use tally_core::{layout, truncate_label, ChartKind};

#[test]
fn vertical_bar_padding_and_rotation() {
    // 3 wide slots: labels fit level
    let level = layout(ChartKind::VerticalBar, 600.0, 300.0, 3);
    assert!(!level.rotate_labels);
    assert_eq!(level.padding.left, 48.0);
    assert_eq!(level.padding.bottom, 32.0);
    assert_eq!(level.plot.left, 48.0);
    assert_eq!(level.plot.bottom(), 300.0 - 32.0);

    // 8 slots in a narrow chart: rotated, with more room below
    let crowded = layout(ChartKind::VerticalBar, 360.0, 300.0, 8);
    assert!(crowded.rotate_labels);
    assert_eq!(crowded.padding.bottom, 42.0);
    assert!(crowded.plot.height < level.plot.height);
}

#[test]
fn horizontal_bar_reserves_label_column() {
    let l = layout(ChartKind::HorizontalBar, 500.0, 300.0, 30);
    assert_eq!(l.padding.left, 160.0);
    assert_eq!(l.label_stride, 1, "rows are never thinned");
    assert!(!l.rotate_labels);
    assert_eq!(l.plot.width, 500.0 - l.padding.hsum());
}

#[test]
fn donut_splits_surface() {
    let l = layout(ChartKind::Donut, 400.0, 200.0, 4);
    assert_eq!(l.plot.width, 400.0);
    assert_eq!(l.plot.height, 200.0);
    let legend = l.legend.expect("donut has a legend");
    assert!((l.marks.width - 400.0 * DONUT_SPLIT).abs() < 1e-3);
    assert!((legend.left - l.marks.right()).abs() < 1e-3);
    assert!((legend.right() - 400.0).abs() < 1e-3);
}

#[test]
fn tiny_surfaces_keep_positive_plot() {
    for kind in [ChartKind::VerticalBar, ChartKind::HorizontalBar, ChartKind::Line, ChartKind::Donut] {
        let l = layout(kind, 10.0, 10.0, 5);
        assert!(l.plot.width >= 1.0 && l.plot.height >= 1.0, "{kind}");
    }
}

#[test]
fn thinning_caps_visible_labels() {
    assert_eq!(label_stride(5, 8), 1);
    assert_eq!(label_stride(8, 8), 1);
    assert_eq!(label_stride(9, 8), 2);
    assert_eq!(label_stride(20, 8), 3);
    for n in 0..100 {
        let stride = label_stride(n, 8);
        assert!(visible_labels(n, stride) <= 8, "n = {n}");
        let line = label_stride(n, 6);
        assert!(visible_labels(n, line) <= 6, "n = {n}");
    }
    let l = layout_with(ChartKind::Line, 600.0, 300.0, 24, 6);
    assert_eq!(l.label_stride, 4);
    assert!(!l.rotate_labels);
}

#[test]
fn truncation_respects_budget() {
    assert_eq!(truncate_label("Cardiology", 10), "Cardiology");
    assert_eq!(truncate_label("Internal Medicine", 10), "Internal …");
    assert_eq!(truncate_label("", 5), "");
    assert_eq!(truncate_label("abc", 1), format!("a{ELLIPSIS}"));
    // 2 is the smallest budget a cut label fits
    assert_eq!(truncate_label("abc", 2), format!("a{ELLIPSIS}"));
    assert_eq!(truncate_label("abc", 0).chars().count(), 2);

    let samples = ["x", "Orthopedics", "กุมารเวชกรรม", "Emergency Medicine Department", "ab"];
    for s in samples {
        for budget in 2..16 {
            let out = truncate_label(s, budget);
            assert!(!out.is_empty());
            assert!(out.chars().count() <= budget, "{s:?} @ {budget} -> {out:?}");
            if s.chars().count() > budget {
                assert!(out.ends_with(ELLIPSIS));
                assert!(out.chars().count() >= 2, "keeps an original character");
            } else {
                assert_eq!(out, s);
            }
        }
    }
}

#[test]
fn numbers_format_for_axes_and_legend() {
    assert_eq!(format_value(25.0), "25");
    assert_eq!(format_value(0.0), "0");
    assert_eq!(format_value(0.25), "0.25");
    assert_eq!(format_value(2.5), "2.5");
    assert_eq!(format_percent(1.0, 8.0), "12.5%");
    assert_eq!(format_percent(1.0, 3.0), "33.3%");
    assert_eq!(format_percent(1.0, 0.0), "0.0%");
}
