use std::path::Path;

use image::{Rgb, RgbImage};
use iqa_core::{OverlapReport, Roi, RoiParams};

use crate::error::{IoError, Result};

const OVERLAPPING_COLOR: Rgb<u8> = Rgb([220, 40, 40]);
const DISJOINT_COLOR: Rgb<u8> = Rgb([40, 80, 220]);
const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);

/// Rasterize ROI outlines on a white canvas.
///
/// ROIs that intersect another ROI are drawn red, the rest blue.
pub fn render_rois(params: &RoiParams, rois: &[Roi], report: &OverlapReport) -> RgbImage {
    let mut canvas = RgbImage::from_pixel(
        params.canvas_width(),
        params.canvas_height(),
        BACKGROUND,
    );

    for (index, roi) in rois.iter().enumerate() {
        let color = if report.is_overlapping(index) {
            OVERLAPPING_COLOR
        } else {
            DISJOINT_COLOR
        };
        draw_outline(&mut canvas, roi, color);
    }

    canvas
}

/// Render and save the visualization in one step
pub fn save_rois<P: AsRef<Path>>(
    path: P,
    params: &RoiParams,
    rois: &[Roi],
    report: &OverlapReport,
) -> Result<()> {
    let path = path.as_ref();
    render_rois(params, rois, report)
        .save(path)
        .map_err(|source| IoError::Encode {
            path: path.to_path_buf(),
            source,
        })
}

fn draw_outline(canvas: &mut RgbImage, roi: &Roi, color: Rgb<u8>) {
    if roi.width == 0 || roi.height == 0 {
        return;
    }

    for x in roi.x..roi.right() {
        canvas.put_pixel(x, roi.y, color);
        canvas.put_pixel(x, roi.bottom() - 1, color);
    }
    for y in roi.y..roi.bottom() {
        canvas.put_pixel(roi.x, y, color);
        canvas.put_pixel(roi.right() - 1, y, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iqa_core::pairwise;

    #[test]
    fn test_outline_colors() {
        let params = RoiParams::new(3, 100, 80, 5, 20).unwrap();
        let rois = vec![
            Roi::new(10, 10, 20, 20),
            Roi::new(25, 25, 20, 20),
            Roi::new(60, 50, 10, 10),
        ];
        let report = pairwise(&rois);

        let canvas = render_rois(&params, &rois, &report);
        assert_eq!(canvas.dimensions(), (100, 80));

        // First two ROIs overlap -> red outlines
        assert_eq!(*canvas.get_pixel(10, 10), OVERLAPPING_COLOR);
        assert_eq!(*canvas.get_pixel(25, 25), OVERLAPPING_COLOR);
        // Third is disjoint -> blue outline
        assert_eq!(*canvas.get_pixel(60, 50), DISJOINT_COLOR);
        // Interior pixels stay background
        assert_eq!(*canvas.get_pixel(65, 55), BACKGROUND);
        assert_eq!(*canvas.get_pixel(0, 0), BACKGROUND);
    }

    #[test]
    fn test_outline_touches_all_four_edges() {
        let params = RoiParams::new(1, 50, 50, 5, 20).unwrap();
        let rois = vec![Roi::new(5, 8, 10, 12)];
        let report = pairwise(&rois);

        let canvas = render_rois(&params, &rois, &report);
        assert_eq!(*canvas.get_pixel(5, 8), DISJOINT_COLOR); // top-left
        assert_eq!(*canvas.get_pixel(14, 8), DISJOINT_COLOR); // top-right
        assert_eq!(*canvas.get_pixel(5, 19), DISJOINT_COLOR); // bottom-left
        assert_eq!(*canvas.get_pixel(14, 19), DISJOINT_COLOR); // bottom-right
    }

    #[test]
    fn test_save_rois_writes_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rois.png");

        let params = RoiParams::new(2, 64, 64, 4, 16).unwrap().with_seed(3);
        let rois = params.generate();
        let report = pairwise(&rois);

        save_rois(&path, &params, &rois, &report).unwrap();
        assert!(path.is_file());

        let reopened = image::open(&path).unwrap();
        assert_eq!(reopened.width(), 64);
        assert_eq!(reopened.height(), 64);
    }
}
