use std::path::Path;

use iqa_core::DiffRegion;
use serde::Serialize;

use crate::error::Result;

/// One CSV record of the per-case change report
#[derive(Debug, Serialize)]
struct RegionRecord {
    change_id: usize,
    x: usize,
    y: usize,
    width: usize,
    height: usize,
    pixels: usize,
    mean_diff: String,
}

/// Write one record per difference region, with 1-based change ids.
///
/// A header row is written even when there are no regions.
pub fn write_regions_csv<P: AsRef<Path>>(path: P, regions: &[DiffRegion]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;

    if regions.is_empty() {
        writer.write_record([
            "change_id",
            "x",
            "y",
            "width",
            "height",
            "pixels",
            "mean_diff",
        ])?;
    }

    for (index, region) in regions.iter().enumerate() {
        writer.serialize(RegionRecord {
            change_id: index + 1,
            x: region.x,
            y: region.y,
            width: region.width,
            height: region.height,
            pixels: region.pixels,
            mean_diff: format!("{:.2}", region.mean_diff),
        })?;
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn region(x: usize, y: usize, pixels: usize, mean_diff: f64) -> DiffRegion {
        DiffRegion {
            x,
            y,
            width: 10,
            height: 5,
            pixels,
            mean_diff,
        }
    }

    #[test]
    fn test_writes_header_and_numbered_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("changes.csv");

        let regions = vec![region(3, 4, 60, 120.0), region(40, 8, 55, 99.456)];
        write_regions_csv(&path, &regions).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "change_id,x,y,width,height,pixels,mean_diff");
        assert_eq!(lines[1], "1,3,4,10,5,60,120.00");
        assert_eq!(lines[2], "2,40,8,10,5,55,99.46");
    }

    #[test]
    fn test_empty_report_still_has_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("changes.csv");

        write_regions_csv(&path, &[]).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(
            content.trim_end(),
            "change_id,x,y,width,height,pixels,mean_diff"
        );
    }
}
