use clap::Parser;
use std::path::PathBuf;

use gridframe::{DetectOptions, TableDetector};

#[derive(Parser)]
#[command(name = "gridframe")]
#[command(about = "Detect table cell boundaries in photographed documents")]
struct Cli {
    /// Path to input image file
    #[arg(value_name = "IMAGE")]
    image_path: PathBuf,

    /// Skip table boundary detection and rectification
    #[arg(long)]
    no_crop: bool,

    /// Remove a background watermark before grid detection
    #[arg(long)]
    remove_watermark: bool,

    /// Directory for the rectified image, annotated image, and box list
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    out_dir: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(
        if args.verbose { "debug" } else { "info" },
    ))
    .init();

    let bytes = std::fs::read(&args.image_path)?;

    let detector = TableDetector::new();
    let options = DetectOptions {
        crop: !args.no_crop,
        remove_watermark: args.remove_watermark,
    };
    let result = detector.detect(&bytes, &options)?;

    std::fs::create_dir_all(&args.out_dir)?;
    std::fs::write(args.out_dir.join("rectified.jpg"), &result.original_image)?;
    std::fs::write(args.out_dir.join("annotated.jpg"), &result.result_image)?;
    std::fs::write(
        args.out_dir.join("boxes.json"),
        serde_json::to_string_pretty(&result.bounding_boxes)?,
    )?;

    println!(
        "{} regions detected, outputs written to {}",
        result.bounding_boxes.len(),
        args.out_dir.display()
    );
    Ok(())
}
