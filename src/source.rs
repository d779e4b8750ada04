// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Input dataset handling.
//!
//! A dataset root holds three sibling directories that share an image id:
//!
//! ```text
//! dataset/
//! ├── image/<id>.jpg
//! ├── human_parsing/<id>.png
//! └── pose_json/<id>_keypoints.json
//! ```
//!
//! The id is the image file name up to its first `.`.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use image::{DynamicImage, RgbImage};

use crate::config::ShadeConfig;
use crate::error::{Result, ShadeError};
use crate::keypoints::PoseDocument;
use crate::synthesizer::shade_document;

/// Directory holding the photos.
pub const IMAGE_DIR: &str = "image";
/// Directory holding the human-parsing segmentation images.
pub const PARSING_DIR: &str = "human_parsing";
/// Directory holding the pose keypoint documents.
pub const POSE_DIR: &str = "pose_json";

/// Load an image as RGB8.
///
/// JPEG files are decoded with `jpeg-decoder` first to bypass zune-jpeg stride issues,
/// falling back to `image::open` for everything else.
///
/// # Errors
///
/// Returns [`ShadeError::Io`] if the file cannot be read or [`ShadeError::Decode`] if it
/// is not a decodable image.
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<RgbImage> {
    let path = path.as_ref();
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase);

    if matches!(ext.as_deref(), Some("jpg" | "jpeg"))
        && let Some(img) = decode_jpeg(path)
    {
        return Ok(img.into_rgb8());
    }

    Ok(image::open(path)?.into_rgb8())
}

fn decode_jpeg(path: &Path) -> Option<DynamicImage> {
    let file = File::open(path).ok()?;
    let mut decoder = jpeg_decoder::Decoder::new(BufReader::new(file));
    let pixels = decoder.decode().ok()?;
    let info = decoder.info()?;
    let (width, height) = (u32::from(info.width), u32::from(info.height));

    match info.pixel_format {
        jpeg_decoder::PixelFormat::RGB24 => {
            image::ImageBuffer::from_raw(width, height, pixels).map(DynamicImage::ImageRgb8)
        }
        jpeg_decoder::PixelFormat::L8 => {
            image::ImageBuffer::from_raw(width, height, pixels).map(DynamicImage::ImageLuma8)
        }
        _ => None,
    }
}

/// Check if a path is an image file based on extension.
fn is_image_file(path: &Path) -> bool {
    path.extension().is_some_and(|ext| {
        let ext = ext.to_string_lossy().to_lowercase();
        matches!(
            ext.as_str(),
            "jpg" | "jpeg" | "png" | "bmp" | "gif" | "webp" | "tiff" | "tif"
        )
    })
}

/// A dataset root directory.
#[derive(Debug, Clone)]
pub struct Dataset {
    root: PathBuf,
}

impl Dataset {
    /// Create a dataset rooted at `root`.
    #[must_use]
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    /// Dataset root directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// List every image unit, sorted by photo path.
    ///
    /// Companion files are not checked here; a missing segmentation or keypoint document
    /// surfaces when that unit is loaded.
    ///
    /// # Errors
    ///
    /// Returns an error if the image directory cannot be read.
    pub fn units(&self) -> Result<Vec<ShadeUnit>> {
        let image_dir = self.root.join(IMAGE_DIR);
        if !image_dir.is_dir() {
            return Err(ShadeError::Config(format!(
                "Not a directory: {}",
                image_dir.display()
            )));
        }

        let mut paths: Vec<PathBuf> = std::fs::read_dir(&image_dir)?
            .filter_map(std::result::Result::ok)
            .map(|entry| entry.path())
            .filter(|path| is_image_file(path))
            .collect();
        paths.sort();

        Ok(paths.into_iter().map(|path| self.unit_for(path)).collect())
    }

    /// Build the unit for one photo path.
    #[must_use]
    pub fn unit_for(&self, image: PathBuf) -> ShadeUnit {
        let file_name = image
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_default();
        let id = file_name.split('.').next().unwrap_or_default().to_string();

        ShadeUnit {
            parsing: self.root.join(PARSING_DIR).join(format!("{id}.png")),
            pose: self.root.join(POSE_DIR).join(format!("{id}_keypoints.json")),
            image,
            id,
        }
    }
}

/// The three input files for one photo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShadeUnit {
    /// Image id shared by the three files.
    pub id: String,
    /// Photo path.
    pub image: PathBuf,
    /// Segmentation image path.
    pub parsing: PathBuf,
    /// Keypoint document path.
    pub pose: PathBuf,
}

/// Decoded inputs of a [`ShadeUnit`].
#[derive(Debug, Clone)]
pub struct LoadedUnit {
    /// Photo.
    pub photo: RgbImage,
    /// Segmentation image.
    pub segmentation: RgbImage,
    /// Keypoint document.
    pub document: PoseDocument,
}

impl ShadeUnit {
    /// Photo file name, used to name the output.
    #[must_use]
    pub fn file_name(&self) -> String {
        self.image
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_default()
    }

    /// Decode the photo, segmentation image and keypoint document.
    ///
    /// # Errors
    ///
    /// Returns an error if any file is missing or malformed.
    pub fn load(&self) -> Result<LoadedUnit> {
        Ok(LoadedUnit {
            photo: load_image(&self.image)?,
            segmentation: load_image(&self.parsing)?,
            document: PoseDocument::load(&self.pose)?,
        })
    }

    /// Load the unit and produce its shaded photo.
    ///
    /// # Errors
    ///
    /// Returns any loading error or any error of
    /// [`shade_document`](crate::synthesizer::shade_document).
    pub fn process(&self, config: &ShadeConfig) -> Result<RgbImage> {
        let unit = self.load()?;
        shade_document(&unit.photo, &unit.segmentation, &unit.document, config)
    }
}
