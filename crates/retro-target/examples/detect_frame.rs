//! Run the detector on a single still frame and print the descriptor.
//!
//! Usage: `cargo run --example detect_frame -- <image> [params.json]`

use std::{env, fs};

use log::{info, LevelFilter};

use retro_target::{DetectorParams, TargetDetector};
use retro_target_core::init_with_level;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_with_level(LevelFilter::Info)?;

    let mut args = env::args().skip(1);
    let Some(image_path) = args.next() else {
        eprintln!("usage: detect_frame <image> [params.json]");
        std::process::exit(2);
    };

    let params = match args.next() {
        Some(path) => serde_json::from_str(&fs::read_to_string(&path)?)?,
        None => DetectorParams::default(),
    };

    let frame = image::ImageReader::open(&image_path)?.decode()?.to_rgb8();
    info!("loaded {} ({}x{})", image_path, frame.width(), frame.height());

    let detector = TargetDetector::new(params);
    match detector.detect_in_frame(&frame)? {
        Some(descriptor) => {
            info!(
                "target at ({:.1}, {:.1})",
                descriptor.centroid.x, descriptor.centroid.y
            );
            println!("{}", serde_json::to_string_pretty(&descriptor)?);
        }
        None => println!("no target in this frame"),
    }

    Ok(())
}
