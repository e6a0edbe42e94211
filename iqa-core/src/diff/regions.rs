use ndarray::Array2;

use super::map::DiffMap;

/// Connected components with at most this many pixels are dropped as noise
pub const DEFAULT_MIN_AREA: usize = 50;

/// A contiguous region where two images differ significantly
#[derive(Debug, Clone, PartialEq)]
pub struct DiffRegion {
    /// Bounding-box left edge (column)
    pub x: usize,
    /// Bounding-box top edge (row)
    pub y: usize,
    /// Bounding-box width
    pub width: usize,
    /// Bounding-box height
    pub height: usize,
    /// Number of pixels in the component
    pub pixels: usize,
    /// Mean absolute difference over the component's pixels
    pub mean_diff: f64,
}

/// Extract 8-connected components of nonzero difference pixels.
///
/// Components with `pixels <= min_area` are dropped. Regions come back in
/// raster-scan order of their first pixel.
pub fn find_regions(map: &DiffMap, min_area: usize) -> Vec<DiffRegion> {
    let values = map.values();
    let (height, width) = values.dim();

    let mut visited = Array2::<bool>::default((height, width));
    let mut regions = Vec::new();
    let mut stack = Vec::new();

    for row in 0..height {
        for col in 0..width {
            if values[[row, col]] == 0 || visited[[row, col]] {
                continue;
            }

            visited[[row, col]] = true;
            stack.push((row, col));

            let (mut min_row, mut max_row) = (row, row);
            let (mut min_col, mut max_col) = (col, col);
            let mut pixels = 0usize;
            let mut diff_sum = 0u64;

            while let Some((r, c)) = stack.pop() {
                pixels += 1;
                diff_sum += values[[r, c]] as u64;
                min_row = min_row.min(r);
                max_row = max_row.max(r);
                min_col = min_col.min(c);
                max_col = max_col.max(c);

                for (nr, nc) in neighbors8(r, c, height, width) {
                    if values[[nr, nc]] != 0 && !visited[[nr, nc]] {
                        visited[[nr, nc]] = true;
                        stack.push((nr, nc));
                    }
                }
            }

            if pixels > min_area {
                regions.push(DiffRegion {
                    x: min_col,
                    y: min_row,
                    width: max_col - min_col + 1,
                    height: max_row - min_row + 1,
                    pixels,
                    mean_diff: diff_sum as f64 / pixels as f64,
                });
            }
        }
    }

    regions
}

/// In-bounds 8-neighborhood of (row, col)
fn neighbors8(
    row: usize,
    col: usize,
    height: usize,
    width: usize,
) -> impl Iterator<Item = (usize, usize)> {
    const OFFSETS: [(isize, isize); 8] = [
        (-1, -1),
        (-1, 0),
        (-1, 1),
        (0, -1),
        (0, 1),
        (1, -1),
        (1, 0),
        (1, 1),
    ];

    OFFSETS.into_iter().filter_map(move |(dr, dc)| {
        let r = row.checked_add_signed(dr)?;
        let c = col.checked_add_signed(dc)?;
        (r < height && c < width).then_some((r, c))
    })
}
