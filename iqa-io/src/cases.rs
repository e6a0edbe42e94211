use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{IoError, Result};

/// Folder name reserved for tool output under the test-case root
pub const RESULTS_DIR: &str = "results";

const IMAGE_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

/// One test-case folder holding a pair of images to compare
#[derive(Debug, Clone)]
pub struct TestCase {
    name: String,
    folder: PathBuf,
}

/// List the test-case folders under `root`.
///
/// Every immediate subdirectory except the results folder is a test case.
/// Cases come back sorted by name.
pub fn discover<P: AsRef<Path>>(root: P) -> Result<Vec<TestCase>> {
    let root = root.as_ref();
    if !root.is_dir() {
        return Err(IoError::NotADirectory(root.to_path_buf()));
    }

    let mut cases = Vec::new();
    for entry in fs::read_dir(root)? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        if name == RESULTS_DIR {
            continue;
        }
        cases.push(TestCase { name, folder: path });
    }

    cases.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(cases)
}

impl TestCase {
    /// Folder name, used to label outputs and error messages
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn folder(&self) -> &Path {
        &self.folder
    }

    /// The two images to compare, in lexicographic file-name order.
    ///
    /// The folder must contain exactly two png/jpg/jpeg files; any other
    /// count is an error naming this case.
    pub fn image_pair(&self) -> Result<(PathBuf, PathBuf)> {
        let mut images = Vec::new();
        for entry in fs::read_dir(&self.folder)? {
            let path = entry?.path();
            if path.is_file() && has_image_extension(&path) {
                images.push(path);
            }
        }

        if images.len() != 2 {
            return Err(IoError::ImagePairCount {
                case: self.name.clone(),
                found: images.len(),
            });
        }

        images.sort();
        let second = images.pop().unwrap_or_default();
        let first = images.pop().unwrap_or_default();
        Ok((first, second))
    }
}

fn has_image_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
}
