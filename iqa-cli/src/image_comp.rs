//! Image comparison tool: analyzes differences between pairs of images in
//! test case folders.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use iqa_core::{DEFAULT_MIN_AREA, DiffMap, find_regions};
use iqa_io::cases::{self, RESULTS_DIR, TestCase};
use iqa_io::image::{GrayImage8, save_gray};
use iqa_io::report;

#[derive(Parser, Debug)]
#[command(
    name = "image-comp",
    version,
    about = "Analyze differences between pairs of images in test case folders"
)]
struct Args {
    /// Root folder containing test case subfolders, each with exactly two
    /// images to compare
    #[arg(short, long, default_value = "test_cases")]
    root: PathBuf,

    /// Threshold for significant differences (0-255); higher values keep
    /// only stronger changes
    #[arg(short, long, default_value_t = 50)]
    threshold: u8,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let results_folder = args.root.join(RESULTS_DIR);
    fs::create_dir_all(&results_folder).with_context(|| {
        format!(
            "failed to create results folder {}",
            results_folder.display()
        )
    })?;

    let cases = cases::discover(&args.root)
        .with_context(|| format!("failed to scan root folder {}", args.root.display()))?;
    if cases.is_empty() {
        log::warn!("no test case folders under {}", args.root.display());
    }

    for case in &cases {
        log::info!("processing test case {}", case.name());
        if let Err(err) = process_case(case, &results_folder, args.threshold) {
            log::error!("test case {} failed: {err:#}", case.name());
            println!("Error in test case {}: {err:#}\n", case.name());
        }
    }

    Ok(())
}

fn process_case(case: &TestCase, results_folder: &Path, threshold: u8) -> Result<()> {
    let (first, second) = case.image_pair()?;
    let img1 = GrayImage8::open(&first)?;
    let img2 = GrayImage8::open(&second)?;

    let map = DiffMap::compute(img1.pixels(), img2.pixels(), threshold)?;
    let regions = find_regions(&map, DEFAULT_MIN_AREA);

    let diff_path = results_folder.join(format!("{}_diff.png", case.name()));
    save_gray(&diff_path, map.values())?;

    let csv_path = results_folder.join(format!("{}_changes.csv", case.name()));
    report::write_regions_csv(&csv_path, &regions)?;

    println!("Results for test case: {}", case.name());
    println!(
        "Thresholded difference image saved as: {}",
        diff_path.display()
    );
    println!("Number of significant changes: {}", regions.len());
    println!("Per-change details saved in: {}\n", csv_path.display());
    Ok(())
}
