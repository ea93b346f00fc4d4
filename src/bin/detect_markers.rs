use marker_detector::config::detect;
use marker_detector::diagnostics::{DetectionReport, SearchOutcome};
use marker_detector::edges::EdgeDetection;
use marker_detector::image::annotate::annotate_circles;
use marker_detector::image::io::{
    load_rgb_image, save_grayscale_f32, save_rgb_image, write_json_file, write_text_file,
};
use marker_detector::{
    format_report, Circle, CircleDetector, DetectError, DistanceCalculator, MarkerLayout,
    PairDistance,
};
use serde::Serialize;
use std::env;
use std::path::Path;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = detect::load_config(Path::new(&config_path))?;

    let rgb = load_rgb_image(&config.input, config.max_input_width)?;
    let detector = CircleDetector::new(config.detector.clone());
    let (report, edges) = detector
        .process_with_edges(&rgb.as_view())
        .map_err(|e| format!("Detection failed: {e}"))?;
    print_text_summary(&report);

    if let Some(dir) = &config.output.debug_dir {
        save_debug_images(&edges, dir)?;
    }

    // layouts assume the full marker set
    let layout = if report.converged() {
        config.measurement.layout
    } else {
        MarkerLayout::Detection
    };
    let circles = layout
        .arrange(&report.circles)
        .map_err(|e| format!("Failed to arrange circles: {e}"))?;

    let calculator = match config.measurement.object_size_mm {
        Some(size) if !circles.is_empty() => {
            let radii: Vec<u32> = circles.iter().map(|c| c.r).collect();
            DistanceCalculator::new(size)
                .with_radii(&radii)
                .map_err(|e| format!("Failed to derive scale: {e}"))?
        }
        _ => DistanceCalculator::new(1.0),
    };
    let pairs = calculator.pairwise(&circles);

    if let Some(path) = &config.output.report_txt {
        write_text_file(path, &format_report(&pairs, config.measurement.index_base))?;
        println!("Distance report written to {}", path.display());
    }
    if let Some(path) = &config.output.annotated_image {
        let mut canvas = rgb.to_rgb_image()?;
        annotate_circles(&mut canvas, &circles, &pairs);
        save_rgb_image(&canvas, path)?;
        println!("Annotated image written to {}", path.display());
    }
    if let Some(path) = &config.output.result_json {
        let summary = DetectionSummary {
            layout,
            mm_per_px: calculator.mm_per_px(),
            circles: &circles,
            distances: &pairs,
            report: &report,
        };
        write_json_file(path, &summary)?;
        println!("JSON report written to {}", path.display());
    }

    if report.outcome == SearchOutcome::NonConverged {
        let err = DetectError::NonConvergence {
            expected: detector.params().expected_circles,
            attempts: report.trace.attempts.len(),
            last_circles: report.circles,
        };
        return Err(err.to_string());
    }
    Ok(())
}

fn save_debug_images(detection: &EdgeDetection, dir: &Path) -> Result<(), String> {
    save_grayscale_f32(&detection.grad.mag, &dir.join("gradient.png"))?;
    let mask = detection.edges.to_mask_image();
    save_grayscale_f32(&mask, &dir.join("edges.png"))?;
    println!(
        "Debug images written to {} ({} edge pixels)",
        dir.display(),
        mask.count_nonzero()
    );
    Ok(())
}

fn print_text_summary(report: &DetectionReport) {
    let trace = &report.trace;
    println!(
        "Input {}x{} expecting {} circles",
        trace.input.width, trace.input.height, trace.input.expected_circles
    );
    println!(
        "Edges: suppressed={} strong={} linked={} ({:.2} ms)",
        trace.edges.suppressed, trace.edges.strong, trace.edges.linked, trace.edges.elapsed_ms
    );
    for a in &trace.attempts {
        println!(
            "  attempt {} radii [{}, {}]: keys={} found={} ({:.2} ms)",
            a.index, a.window.min, a.window.max, a.accumulator_keys, a.circles_found, a.elapsed_ms
        );
    }
    println!(
        "Outcome: {:?}, {} circles, hough {:.2} ms, total {:.2} ms",
        report.outcome,
        report.circles.len(),
        trace.timings.sum_prefixed("hough."),
        trace.timings.total_ms
    );
    for (i, c) in report.circles.iter().enumerate() {
        println!(
            "  #{i}: x={} y={} r={} votes={} score={:.2}",
            c.x, c.y, c.r, c.votes, c.score
        );
    }
}

fn usage() -> String {
    "Usage: detect_markers <config.json>".to_string()
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DetectionSummary<'a> {
    layout: MarkerLayout,
    mm_per_px: f64,
    circles: &'a [Circle],
    distances: &'a [PairDistance],
    report: &'a DetectionReport,
}
