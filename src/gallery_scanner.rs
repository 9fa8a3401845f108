// SPDX-License-Identifier: MPL-2.0
//! Gallery scanner module for finding and sorting image files.
//!
//! The scanner runs exactly once per gallery initialization: it collects the
//! supported image files sitting directly in a directory, sorts them by the
//! configured order, and hands the list to the gallery. Files dropped into
//! the directory afterwards are not picked up until the folder is opened
//! again.

use crate::config::SortOrder;
use crate::error::Result;
use crate::media;
use std::path::{Path, PathBuf};

/// The sorted list of image files found in a scanned directory.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ImageList {
    image_files: Vec<PathBuf>,
}

impl ImageList {
    /// Creates a new empty `ImageList`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Scans `directory` for supported image files and sorts them.
    ///
    /// Returns an error if the directory cannot be read. Subdirectories are
    /// not descended into.
    pub fn scan_directory(directory: &Path, sort_order: SortOrder) -> Result<Self> {
        let mut image_files = Vec::new();

        for entry in std::fs::read_dir(directory)? {
            let entry = entry?;
            let path = entry.path();

            if path.is_file() && media::is_supported_image(&path) {
                image_files.push(path);
            }
        }

        sort_image_files(&mut image_files, sort_order);

        Ok(Self { image_files })
    }

    /// Returns the scanned paths in sorted order.
    pub fn paths(&self) -> &[PathBuf] {
        &self.image_files
    }

    /// Consumes the list, yielding the sorted paths.
    pub fn into_paths(self) -> Vec<PathBuf> {
        self.image_files
    }

    /// Returns the total number of image files in the list.
    pub fn len(&self) -> usize {
        self.image_files.len()
    }

    /// Checks if the image list is empty.
    pub fn is_empty(&self) -> bool {
        self.image_files.is_empty()
    }
}

/// Sorts image file paths according to the specified sort order.
fn sort_image_files(image_files: &mut [PathBuf], sort_order: SortOrder) {
    match sort_order {
        SortOrder::Alphabetical => {
            image_files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        }
        SortOrder::ModifiedDate => {
            image_files.sort_by(|a, b| {
                let a_time = a
                    .metadata()
                    .and_then(|m| m.modified())
                    .unwrap_or(std::time::SystemTime::UNIX_EPOCH);
                let b_time = b
                    .metadata()
                    .and_then(|m| m.modified())
                    .unwrap_or(std::time::SystemTime::UNIX_EPOCH);
                a_time.cmp(&b_time)
            });
        }
        SortOrder::CreatedDate => {
            image_files.sort_by(|a, b| {
                let a_time = a
                    .metadata()
                    .and_then(|m| m.created())
                    .unwrap_or(std::time::SystemTime::UNIX_EPOCH);
                let b_time = b
                    .metadata()
                    .and_then(|m| m.created())
                    .unwrap_or(std::time::SystemTime::UNIX_EPOCH);
                a_time.cmp(&b_time)
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Write;
    use tempfile::tempdir;

    fn create_test_image(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        let mut file = fs::File::create(&path).expect("failed to create test file");
        file.write_all(b"fake image data")
            .expect("failed to write test file");
        path
    }

    #[test]
    fn scan_directory_finds_all_images() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        create_test_image(temp_dir.path(), "a.jpg");
        create_test_image(temp_dir.path(), "b.png");
        create_test_image(temp_dir.path(), "c.gif");
        create_test_image(temp_dir.path(), "not_image.txt");

        let list = ImageList::scan_directory(temp_dir.path(), SortOrder::Alphabetical)
            .expect("failed to scan directory");

        assert_eq!(list.len(), 3);
    }

    #[test]
    fn scan_directory_sorts_alphabetically() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let img_c = create_test_image(temp_dir.path(), "c.jpg");
        let img_a = create_test_image(temp_dir.path(), "a.jpg");
        let img_b = create_test_image(temp_dir.path(), "b.jpg");

        let list = ImageList::scan_directory(temp_dir.path(), SortOrder::Alphabetical)
            .expect("failed to scan directory");

        assert_eq!(list.paths(), &[img_a, img_b, img_c]);
    }

    #[test]
    fn scan_directory_sorts_by_modified_date() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let old = create_test_image(temp_dir.path(), "z_old.jpg");
        // Ensure a measurable mtime gap between the two files.
        let past = std::time::SystemTime::now() - std::time::Duration::from_secs(3600);
        let file = fs::File::options()
            .write(true)
            .open(&old)
            .expect("open test file");
        file.set_modified(past).expect("set mtime");
        let newer = create_test_image(temp_dir.path(), "a_new.jpg");

        let list = ImageList::scan_directory(temp_dir.path(), SortOrder::ModifiedDate)
            .expect("failed to scan directory");

        assert_eq!(list.paths(), &[old, newer]);
    }

    #[test]
    fn scan_directory_skips_subdirectories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        create_test_image(temp_dir.path(), "top.jpg");
        let nested = temp_dir.path().join("nested");
        fs::create_dir(&nested).expect("create nested dir");
        create_test_image(&nested, "hidden.jpg");

        let list = ImageList::scan_directory(temp_dir.path(), SortOrder::Alphabetical)
            .expect("failed to scan directory");

        assert_eq!(list.len(), 1);
    }

    #[test]
    fn scan_missing_directory_errors() {
        let result = ImageList::scan_directory(
            Path::new("/definitely/not/a/directory"),
            SortOrder::Alphabetical,
        );
        assert!(result.is_err());
    }

    #[test]
    fn empty_directory_yields_empty_list() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let list = ImageList::scan_directory(temp_dir.path(), SortOrder::Alphabetical)
            .expect("failed to scan directory");

        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
    }
}
