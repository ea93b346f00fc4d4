mod common;

use common::synthetic_image::{disks_rgb, with_stride};
use marker_detector::image::ImageRgb8;
use marker_detector::{
    Circle, CircleDetector, DetectError, DetectorParams, DistanceCalculator, SearchOutcome,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn assert_near(c: &Circle, x: i32, y: i32, r: u32) {
    assert!(
        (c.x - x).abs() <= 2 && (c.y - y).abs() <= 2 && c.r.abs_diff(r) <= 2,
        "circle {c:?} is not near ({x}, {y}, r={r})"
    );
}

#[test]
fn single_disk_is_detected() {
    init_logging();
    let (w, h) = (200usize, 200usize);
    let buffer = disks_rgb(w, h, &[(100, 100, 30)]);
    let image = ImageRgb8::packed(w, h, &buffer);

    let detector = CircleDetector::new(DetectorParams {
        min_radius: 25,
        max_radius: 35,
        expected_circles: 1,
        ..Default::default()
    });
    let report = detector
        .process_with_diagnostics(&image)
        .expect("valid input");

    assert_eq!(report.outcome, SearchOutcome::Converged, "{:?}", report.trace.attempts);
    assert_eq!(report.circles.len(), 1);
    assert_near(&report.circles[0], 100, 100, 30);
    assert!(report.circles[0].score >= 0.4);
    let last = report.trace.attempts.last().expect("at least one attempt");
    assert!(
        report.circles.iter().all(|c| last.window.contains(c.r)),
        "radius outside final window {:?}",
        last.window
    );
    assert!(report.trace.edges.linked > 0);
    assert!(report.trace.timings.total_ms >= 0.0);
}

#[test]
fn two_disks_are_detected_and_measured() {
    init_logging();
    let (w, h) = (200usize, 200usize);
    let buffer = disks_rgb(w, h, &[(50, 50, 20), (150, 150, 20)]);
    let image = ImageRgb8::packed(w, h, &buffer);

    let detector = CircleDetector::new(DetectorParams {
        min_radius: 18,
        max_radius: 22,
        expected_circles: 2,
        ..Default::default()
    });
    let report = detector.process_with_diagnostics(&image).unwrap();
    assert_eq!(report.outcome, SearchOutcome::Converged, "{:?}", report.trace.attempts);
    let last = report.trace.attempts.last().expect("at least one attempt");
    let mut circles = report.circles.clone();
    assert_eq!(circles.len(), 2);
    assert!(circles.iter().all(|c| last.window.contains(c.r)));
    let (p, q) = (circles[0], circles[1]);
    assert!(p.excludes_center(q.x, q.y), "{q:?} centred inside {p:?}");
    assert!(q.excludes_center(p.x, p.y), "{p:?} centred inside {q:?}");
    assert_eq!(detector.detect(&image).unwrap(), report.circles);

    circles.sort_by_key(|c| c.x);
    assert_near(&circles[0], 50, 50, 20);
    assert_near(&circles[1], 150, 150, 20);

    let radii: Vec<u32> = circles.iter().map(|c| c.r).collect();
    let calc = DistanceCalculator::new(40.0).with_radii(&radii).unwrap();
    let pairs = calc.pairwise(&circles);
    assert_eq!(pairs.len(), 1);
    // ~141.4 px apart, ~40 px diameter for 40 mm markers
    assert!(
        (pairs[0].distance_mm - 141.4).abs() < 12.0,
        "{}",
        pairs[0].distance_mm
    );
}

#[test]
fn unreachable_count_fails_after_widening() {
    init_logging();
    let (w, h) = (200usize, 200usize);
    let buffer = disks_rgb(w, h, &[(100, 100, 30)]);
    let image = ImageRgb8::packed(w, h, &buffer);

    let detector = CircleDetector::new(DetectorParams {
        min_radius: 25,
        max_radius: 35,
        expected_circles: 2,
        max_attempts: 4,
        ..Default::default()
    });
    let report = detector.process_with_diagnostics(&image).unwrap();
    assert_eq!(report.outcome, SearchOutcome::NonConverged);
    let attempts = &report.trace.attempts;
    assert_eq!(attempts.len(), 4);
    assert!(attempts[1].window.min < attempts[0].window.min);
    assert!(attempts[1].window.max > attempts[0].window.max);

    match detector.detect(&image) {
        Err(DetectError::NonConvergence {
            expected,
            attempts,
            last_circles,
        }) => {
            assert_eq!(expected, 2);
            assert_eq!(attempts, 4);
            assert_eq!(last_circles.len(), 1);
        }
        other => panic!("expected non-convergence, got {other:?}"),
    }
}

#[test]
fn uniform_image_has_no_edges() {
    init_logging();
    let (w, h) = (64usize, 48usize);
    let buffer = vec![128u8; 3 * w * h];
    let image = ImageRgb8::packed(w, h, &buffer);

    let detector = CircleDetector::new(DetectorParams::default());
    let report = detector.process_with_diagnostics(&image).unwrap();
    assert_eq!(report.outcome, SearchOutcome::NoEdges);
    assert_eq!(report.trace.attempts.len(), 1);
    assert!(detector.detect(&image).unwrap().is_empty());
}

#[test]
fn padded_rows_match_packed_input() {
    init_logging();
    let (w, h) = (120usize, 100usize);
    let packed = disks_rgb(w, h, &[(60, 50, 26)]);
    let padded = with_stride(&packed, w, h, 3 * w + 7);

    let detector = CircleDetector::new(DetectorParams {
        expected_circles: 1,
        ..Default::default()
    });
    let a = detector.detect(&ImageRgb8::packed(w, h, &packed)).unwrap();
    let b = detector
        .detect(&ImageRgb8 {
            w,
            h,
            stride: 3 * w + 7,
            data: &padded,
        })
        .unwrap();
    assert_eq!(a, b);
}

#[test]
fn malformed_input_is_rejected() {
    let detector = CircleDetector::new(DetectorParams::default());
    let short = vec![0u8; 10];
    let err = detector
        .detect(&ImageRgb8::packed(8, 8, &short))
        .unwrap_err();
    assert!(matches!(err, DetectError::InvalidInput { .. }), "{err}");
}
