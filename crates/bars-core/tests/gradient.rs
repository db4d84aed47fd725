// File: crates/bars-core/tests/gradient.rs
// Purpose: Segment colors, extents and counts emitted by the gradient bar renderer.

use std::num::NonZeroUsize;

use bars_core::{draw_gradient_bar, BarSegment, GradientBar, Rgb, DEFAULT_SEGMENTS};

const EPS: f64 = 1e-9;

fn nz(n: usize) -> NonZeroUsize {
    NonZeroUsize::new(n).expect("non-zero")
}

fn collect(bar: &GradientBar, n: usize) -> Vec<BarSegment> {
    let mut out: Vec<BarSegment> = Vec::new();
    draw_gradient_bar(&mut out, bar, nz(n));
    out
}

fn bar(y: f64, height: f64, bottom: Rgb, top: Rgb) -> GradientBar {
    GradientBar { x: 0.25, y, width: 0.12, height, bottom, top }
}

#[test]
fn black_to_white_channels_equal_ratio() {
    for &n in &[1usize, 2, 7, 50, 128] {
        let segs = collect(&bar(0.0, 10.0, Rgb::BLACK, Rgb::WHITE), n);
        for (i, s) in segs.iter().enumerate() {
            let want = i as f64 / n as f64;
            assert!((s.color.r - want).abs() < EPS, "n={n} i={i} r={}", s.color.r);
            assert!((s.color.g - want).abs() < EPS, "n={n} i={i} g={}", s.color.g);
            assert!((s.color.b - want).abs() < EPS, "n={n} i={i} b={}", s.color.b);
        }
    }
}

#[test]
fn segments_tile_the_bar_without_gaps() {
    for &(y, h) in &[(0.0, 94.2), (3.5, 1.0), (-2.0, 12.7), (0.0, 0.0)] {
        for &n in &[1usize, 3, 50] {
            let segs = collect(&bar(y, h, Rgb::BLACK, Rgb::WHITE), n);
            assert!((segs[0].y - y).abs() < EPS);
            for pair in segs.windows(2) {
                assert!((pair[0].top() - pair[1].y).abs() < EPS, "gap/overlap at y={}", pair[1].y);
                assert!(pair[0].height >= 0.0);
            }
            let last = segs.last().expect("at least one segment");
            assert!((last.top() - (y + h)).abs() < EPS, "top {} != {}", last.top(), y + h);
            for s in &segs {
                assert_eq!(s.x, 0.25);
                assert_eq!(s.width, 0.12);
            }
        }
    }
}

#[test]
fn segment_count_is_independent_of_height() {
    for &h in &[0.0, 0.001, 23.7, 1e6] {
        let segs = collect(&bar(0.0, h, Rgb::BLACK, Rgb::WHITE), 50);
        assert_eq!(segs.len(), 50);
    }
}

#[test]
fn zero_height_emits_zero_height_segments() {
    let segs = collect(&bar(4.0, 0.0, Rgb::BLACK, Rgb::WHITE), 5);
    assert_eq!(segs.len(), 5);
    assert!(segs.iter().all(|s| s.height == 0.0 && s.y == 4.0));
}

#[test]
fn cyan_gradient_endpoints() {
    let bottom = Rgb::new(0.0, 0.7, 0.8);
    let top = Rgb::new(0.6, 0.95, 1.0);
    let segs = collect(&bar(0.0, 94.2, bottom, top), DEFAULT_SEGMENTS.get());
    assert_eq!(segs.len(), 50);

    assert_eq!(segs[0].color, bottom);

    // The top segment is evaluated at 49/50, one step short of `top`.
    let last = segs[49].color;
    assert!((last.r - 0.588).abs() < EPS, "r={}", last.r);
    assert!((last.g - 0.945).abs() < EPS, "g={}", last.g);
    assert!((last.b - 0.996).abs() < EPS, "b={}", last.b);
    assert_ne!(last, top);

    assert!((segs[0].height - 94.2 / 50.0).abs() < EPS);
}

#[test]
fn single_segment_spans_full_height_in_bottom_color() {
    let bottom = Rgb::new(0.1, 0.2, 0.3);
    let segs = collect(&bar(1.0, 42.0, bottom, Rgb::WHITE), 1);
    assert_eq!(segs.len(), 1);
    assert_eq!(segs[0].y, 1.0);
    assert_eq!(segs[0].height, 42.0);
    assert_eq!(segs[0].color, bottom);
}

#[test]
fn iterator_and_sink_agree() {
    let b = bar(0.0, 87.3, Rgb::new(0.0, 0.7, 0.8), Rgb::new(0.6, 0.95, 1.0));
    let via_iter: Vec<BarSegment> = b.segments(nz(17)).collect();
    assert_eq!(via_iter, collect(&b, 17));
}
