//! Overlapping ROIs tool: generate random ROIs and report which of them
//! overlap, as a single run or once per row of a parameter CSV.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use iqa_core::{RoiParams, pairwise};
use iqa_io::render;
use iqa_io::table;

#[derive(Parser, Debug)]
#[command(
    name = "overlap",
    version,
    about = "Generate random ROIs and report which of them overlap"
)]
struct Args {
    /// Number of ROIs to generate
    #[arg(short, long, default_value_t = 50)]
    num_rois: usize,

    /// Width of the canvas
    #[arg(long, visible_alias = "iw", default_value_t = 1000)]
    image_width: u32,

    /// Height of the canvas
    #[arg(long, visible_alias = "ih", default_value_t = 1000)]
    image_height: u32,

    /// Minimum ROI size
    #[arg(short, long, default_value_t = 10)]
    min_size: u32,

    /// Maximum ROI size
    #[arg(short = 'M', long, default_value_t = 100)]
    max_size: u32,

    /// CSV file of parameter rows
    /// (num_rois,image_width,image_height,min_size,max_size); runs once per
    /// row instead of a single run
    #[arg(short, long, alias = "csv_file")]
    csv_file: Option<PathBuf>,

    /// Fix the RNG seed for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    /// Save the ROI visualization PNG here (batch mode appends the row
    /// number to the file name)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    match &args.csv_file {
        Some(path) => run_batch(path, &args),
        None => {
            let params = build_params(
                args.num_rois,
                args.image_width,
                args.image_height,
                args.min_size,
                args.max_size,
                args.seed,
            )?;
            println!(
                "Running single test with parameters: {}",
                describe(&params)
            );
            run_once(&params, args.output.as_deref())
        }
    }
}

fn build_params(
    num_rois: usize,
    image_width: u32,
    image_height: u32,
    min_size: u32,
    max_size: u32,
    seed: Option<u64>,
) -> Result<RoiParams> {
    let mut params = RoiParams::new(num_rois, image_width, image_height, min_size, max_size)?;
    if let Some(seed) = seed {
        params = params.with_seed(seed);
    }
    Ok(params)
}

fn describe(params: &RoiParams) -> String {
    format!(
        "num_rois={}, image_width={}, image_height={}, min_size={}, max_size={}",
        params.count(),
        params.canvas_width(),
        params.canvas_height(),
        params.min_size(),
        params.max_size()
    )
}

fn run_once(params: &RoiParams, output: Option<&Path>) -> Result<()> {
    let rois = params.generate();
    let report = pairwise(&rois);

    println!("Generated {} ROIs", rois.len());
    println!("Number of overlapping ROIs: {}", report.overlapping_count());
    println!(
        "Number of non-overlapping ROIs: {}",
        report.non_overlapping_count()
    );
    println!("Overlapping pairs: {}", report.pair_count());
    if report.pair_count() > 0 {
        println!(
            "Overlap ratio: mean {:.3}, max {:.3}",
            report.mean_ratio(),
            report.max_ratio()
        );
    }

    if let Some(path) = output {
        render::save_rois(path, params, &rois, &report)
            .with_context(|| format!("failed to save visualization {}", path.display()))?;
        println!("Visualization saved as: {}", path.display());
    }
    println!();
    Ok(())
}

fn run_batch(path: &Path, args: &Args) -> Result<()> {
    let rows = table::read_batch(path)
        .with_context(|| format!("failed to read CSV file {}", path.display()))?;
    if rows.is_empty() {
        log::warn!("no parameter rows in {}", path.display());
    }

    for (row_number, row) in rows {
        let params = row
            .map_err(anyhow::Error::from)
            .and_then(|row| {
                build_params(
                    row.num_rois,
                    row.image_width,
                    row.image_height,
                    row.min_size,
                    row.max_size,
                    args.seed,
                )
            });

        match params {
            Ok(params) => {
                println!(
                    "Running test case {row_number} with parameters: {}",
                    describe(&params)
                );
                let output = args
                    .output
                    .as_deref()
                    .map(|base| numbered_output(base, row_number));
                run_once(&params, output.as_deref())?;
            }
            Err(err) => {
                log::warn!("row {row_number} of {}: {err:#}", path.display());
                println!("Invalid parameters in row {row_number}: {err:#}. Skipping this test case.\n");
            }
        }
    }
    Ok(())
}

/// `viz.png` becomes `viz_3.png` for row 3
fn numbered_output(base: &Path, row_number: usize) -> PathBuf {
    let stem = base
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let name = match base.extension() {
        Some(ext) => format!("{stem}_{row_number}.{}", ext.to_string_lossy()),
        None => format!("{stem}_{row_number}"),
    };
    base.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbered_output() {
        assert_eq!(
            numbered_output(Path::new("out/viz.png"), 3),
            PathBuf::from("out/viz_3.png")
        );
        assert_eq!(
            numbered_output(Path::new("viz"), 12),
            PathBuf::from("viz_12")
        );
    }

    #[test]
    fn test_build_params_rejects_inverted_range() {
        let result = build_params(10, 1000, 1000, 100, 10, None);
        assert!(result.is_err());
    }

    #[test]
    fn test_build_params_applies_seed() {
        let params = build_params(10, 1000, 1000, 10, 100, Some(9)).unwrap();
        assert_eq!(params.generate(), params.generate());
    }
}
