use marker_detector::image::ImageRgb8;
use marker_detector::{CircleDetector, DetectorParams};

fn main() {
    env_logger::init();

    // Demo stub: draws two dark disks on a white canvas and runs the detector
    let (w, h) = (240usize, 160usize);
    let disks = [(70i64, 80i64, 30i64), (170, 80, 30)];
    let mut rgb = vec![255u8; 3 * w * h];
    for y in 0..h {
        for x in 0..w {
            let inside = disks.iter().any(|&(cx, cy, r)| {
                let (dx, dy) = (x as i64 - cx, y as i64 - cy);
                dx * dx + dy * dy <= r * r
            });
            if inside {
                rgb[3 * (y * w + x)..3 * (y * w + x) + 3].fill(0);
            }
        }
    }
    let img = ImageRgb8::packed(w, h, &rgb);

    let det = CircleDetector::new(DetectorParams {
        expected_circles: disks.len(),
        ..Default::default()
    });
    match det.process_with_diagnostics(&img) {
        Ok(report) => {
            println!(
                "outcome={:?} attempts={} latency_ms={:.3}",
                report.outcome,
                report.trace.attempts.len(),
                report.trace.timings.total_ms
            );
            for c in &report.circles {
                println!("circle x={} y={} r={} score={:.2}", c.x, c.y, c.r, c.score);
            }
        }
        Err(err) => eprintln!("Error: {err}"),
    }
}
