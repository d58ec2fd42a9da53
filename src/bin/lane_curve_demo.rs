use lane_curve::config::demo::load_config;
use lane_curve::render::{io, render_scene, RenderOptions};
use lane_curve::{extract_points, sample_curve, Interpolator, QuadraticKalman};
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
    let config = load_config(Path::new(&config_path))?;

    let segments = config.resolve_segments()?;
    if segments.is_empty() {
        return Err("No input segments".to_string());
    }
    let points = extract_points(&segments);

    let mut estimator = QuadraticKalman::new(
        config.estimator.process_noise,
        config.estimator.measurement_noise,
    )
    .map_err(|e| e.to_string())?;
    estimator.fit(&points).map_err(|e| e.to_string())?;

    let equation = estimator.describe();
    println!("Estimated curve: {equation}");

    let curve = sample_curve(
        &estimator,
        config.sampling.start,
        config.sampling.end,
        config.sampling.step,
    );
    if curve.is_empty() {
        return Err(format!(
            "Sampling range [{}, {}] with step {} produced no points",
            config.sampling.start, config.sampling.end, config.sampling.step
        ));
    }

    let options = RenderOptions {
        width: config.output.width,
        height: config.output.height,
        draw_points: config.output.draw_points,
        ..Default::default()
    };
    let canvas = render_scene(&segments, &curve, &points, &options);
    io::save_image(&canvas, &config.output.image)?;
    println!("Saved curve image to {}", config.output.image.display());

    if let Some(eq_path) = &config.output.equation {
        io::write_text_file(eq_path, &equation)?;
        println!("Saved equation to {}", eq_path.display());
    }

    Ok(())
}

fn usage() -> String {
    "Usage: lane_curve_demo <config.json>".to_string()
}
