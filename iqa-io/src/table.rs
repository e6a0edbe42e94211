use std::path::Path;

use serde::Deserialize;

use crate::error::{IoError, Result};

/// One row of a batch parameter table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct BatchRow {
    pub num_rois: usize,
    pub image_width: u32,
    pub image_height: u32,
    pub min_size: u32,
    pub max_size: u32,
}

/// Read all data rows of a batch CSV.
///
/// The first line is a header and is skipped without inspection, matching
/// the table format `num_rois,image_width,image_height,min_size,max_size`.
/// Each entry pairs the 1-based data row number with the parse outcome, so
/// callers can report malformed rows and keep going.
pub fn read_batch<P: AsRef<Path>>(path: P) -> Result<Vec<(usize, Result<BatchRow>)>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .trim(csv::Trim::All)
        .from_path(path)?;

    let mut rows = Vec::new();
    for (row_number, record) in reader.deserialize::<BatchRow>().enumerate().skip(1) {
        rows.push((row_number, record.map_err(IoError::from)));
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_reads_all_rows() {
        let file = write_csv(
            "num_rois,image_width,image_height,min_size,max_size\n\
             50,1000,1000,10,100\n\
             5, 200, 300, 1, 50\n",
        );

        let rows = read_batch(file.path()).unwrap();
        assert_eq!(rows.len(), 2);

        let (row_number, row) = &rows[0];
        assert_eq!(*row_number, 1);
        assert_eq!(
            *row.as_ref().unwrap(),
            BatchRow {
                num_rois: 50,
                image_width: 1000,
                image_height: 1000,
                min_size: 10,
                max_size: 100,
            }
        );

        let (row_number, row) = &rows[1];
        assert_eq!(*row_number, 2);
        assert_eq!(row.as_ref().unwrap().image_height, 300);
    }

    #[test]
    fn test_malformed_row_is_isolated() {
        let file = write_csv(
            "num_rois,image_width,image_height,min_size,max_size\n\
             50,1000,1000,10,100\n\
             oops,1000,1000,10,100\n\
             20,500,500,5,50\n",
        );

        let rows = read_batch(file.path()).unwrap();
        assert_eq!(rows.len(), 3);
        assert!(rows[0].1.is_ok());
        assert!(rows[1].1.is_err());
        assert!(rows[2].1.is_ok());
    }

    #[test]
    fn test_negative_value_is_malformed() {
        let file = write_csv(
            "num_rois,image_width,image_height,min_size,max_size\n\
             50,-1000,1000,10,100\n",
        );

        let rows = read_batch(file.path()).unwrap();
        assert_eq!(rows.len(), 1);
        assert!(rows[0].1.is_err());
    }

    #[test]
    fn test_header_only_file_yields_no_rows() {
        let file = write_csv("num_rois,image_width,image_height,min_size,max_size\n");
        let rows = read_batch(file.path()).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_missing_file() {
        let result = read_batch("no/such/table.csv");
        assert!(matches!(result, Err(IoError::Csv(_))));
    }
}
