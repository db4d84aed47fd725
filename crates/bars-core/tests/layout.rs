// File: crates/bars-core/tests/layout.rs
// Purpose: Color parsing, grouped bar placement, axes, hatch lines and value label formatting.

use bars_core::chart::{value_label, LEGEND_FONT_PT};
use bars_core::geometry::RectF;
use bars_core::hatch::hatch_offsets;
use bars_core::legend::LegendMetrics;
use bars_core::types::SubplotParams;
use bars_core::{Axis, ChartError, GroupLayout, Rgb};

#[test]
fn hex_colors_parse() {
    let c = Rgb::from_hex("#AAAAAA").expect("hex");
    assert!((c.r - 170.0 / 255.0).abs() < 1e-12);
    assert_eq!(Rgb::from_hex("00e5ff").expect("hex").to_rgb8(), [0x00, 0xe5, 0xff]);
    for bad in ["#12345", "#GGGGGG", "", "#1234567", "#ééé"] {
        assert!(matches!(Rgb::from_hex(bad), Err(ChartError::InvalidColor(_))), "{bad}");
    }
}

#[test]
fn lerp_hits_endpoints() {
    let a = Rgb::new(0.0, 0.7, 0.8);
    let b = Rgb::new(0.6, 0.95, 1.0);
    assert_eq!(a.lerp(b, 0.0), a);
    let end = a.lerp(b, 1.0);
    assert!((end.r - b.r).abs() < 1e-12 && (end.g - b.g).abs() < 1e-12 && (end.b - b.b).abs() < 1e-12);
}

#[test]
fn five_bars_are_centered_on_the_group() {
    let l = GroupLayout::default();
    let centers: Vec<f64> = (0..5).map(|i| l.bar_center(1.0, i, 5)).collect();
    let want = [0.72, 0.86, 1.0, 1.14, 1.28];
    for (c, w) in centers.iter().zip(want) {
        assert!((c - w).abs() < 1e-12, "{c} vs {w}");
    }
    assert!((l.bar_left(0.0, 0, 5) - (-0.34)).abs() < 1e-12);
}

#[test]
fn axes_match_figure_limits() {
    let x = Axis::categories(&["GSM8K", "MATH500", "AIME 2025"], 0.6, 0.4);
    assert_eq!((x.min, x.max), (-0.6, 2.6));
    assert_eq!(x.ticks[2], (2.0, "AIME 2025".to_string()));

    let y = Axis::stepped(0.0, 110.0, 0.0, 100.0, 20.0);
    let labels: Vec<&str> = y.ticks.iter().map(|(_, s)| s.as_str()).collect();
    assert_eq!(labels, ["0", "20", "40", "60", "80", "100"]);
    assert_eq!(y.max, 110.0);
}

#[test]
fn value_labels_keep_fraction() {
    assert_eq!(value_label(94.2), "94.2");
    assert_eq!(value_label(21.0), "21.0");
    assert_eq!(value_label(12.7), "12.7");
}

#[test]
fn subplot_insets_at_72_dpi() {
    let i = SubplotParams::default().to_insets(1008, 576);
    assert_eq!((i.left, i.right, i.top, i.bottom), (101, 60, 127, 86));
    assert_eq!(i.hsum(), 161);
}

#[test]
fn hatch_lines_cover_rect() {
    let rect = RectF::from_ltrb(10.0, 20.0, 40.0, 100.0);
    let offs = hatch_offsets(rect, 12.5);
    assert!(offs.first().copied().unwrap_or(f32::MAX) <= rect.left + rect.top);
    assert!(offs.last().copied().unwrap_or(f32::MIN) >= rect.right + rect.bottom);
    for pair in offs.windows(2) {
        assert!((pair[1] - pair[0] - 12.5).abs() < 1e-3);
    }
}

#[test]
fn legend_uses_default_ten_point_text() {
    assert_eq!(LEGEND_FONT_PT, 10.0);
    // At 300 dpi: 10 pt = 41.67 px, swatch 1.5 em.
    let m = LegendMetrics::new(bars_core::geometry::pt_to_px(LEGEND_FONT_PT, 300.0));
    assert!((m.font_px - 41.666_668).abs() < 1e-3);
    assert!((m.handle_length * m.font_px - 62.5).abs() < 1e-3);
}
