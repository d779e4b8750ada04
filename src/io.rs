// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! I/O utilities for saving shaded images.

use std::path::{Path, PathBuf};

use image::RgbImage;

use crate::error::Result;

/// File name prefix for shaded outputs.
pub const OUTPUT_PREFIX: &str = "shaded_";

/// Helper struct to write shaded images into an output directory.
///
/// Each output keeps the photo's file name and format, prefixed with
/// [`OUTPUT_PREFIX`].
#[derive(Debug, Clone)]
pub struct SaveResults {
    save_dir: PathBuf,
}

impl SaveResults {
    /// Create a new `SaveResults`.
    ///
    /// The directory is created on the first save.
    #[must_use]
    pub fn new<P: Into<PathBuf>>(save_dir: P) -> Self {
        Self {
            save_dir: save_dir.into(),
        }
    }

    /// Output directory.
    #[must_use]
    pub fn save_dir(&self) -> &Path {
        &self.save_dir
    }

    /// Output path for a photo file name.
    #[must_use]
    pub fn output_path(&self, file_name: &str) -> PathBuf {
        self.save_dir.join(format!("{OUTPUT_PREFIX}{file_name}"))
    }

    /// Save a shaded image under the photo's file name.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created or the image cannot be encoded.
    pub fn save(&self, file_name: &str, shaded: &RgbImage) -> Result<PathBuf> {
        if !self.save_dir.exists() {
            std::fs::create_dir_all(&self.save_dir)?;
        }

        let save_path = self.output_path(file_name);
        shaded.save(&save_path)?;
        Ok(save_path)
    }
}
