// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Error types for the shading library.

use std::fmt;

use crate::keypoints::Keypoint;

/// Result type alias for shading operations.
pub type Result<T> = std::result::Result<T, ShadeError>;

/// Main error type for the shading library.
///
/// Every variant is a per-image failure: the batch layer reports it for the
/// offending unit and carries on with the rest.
#[derive(Debug)]
pub enum ShadeError {
    /// The keypoint document contains no detected person.
    MissingPerson,
    /// Photo and segmentation image sizes differ, as `(width, height)`.
    DimensionMismatch {
        /// Photo size.
        photo: (u32, u32),
        /// Segmentation image size.
        segmentation: (u32, u32),
    },
    /// A keypoint lies outside the segmentation image.
    CoordinateOutOfRange {
        /// Offending keypoint.
        point: Keypoint,
        /// Segmentation width.
        width: u32,
        /// Segmentation height.
        height: u32,
    },
    /// Malformed image or keypoint document.
    Decode(String),
    /// Invalid configuration provided.
    Config(String),
    /// Wrapped `std::io::Error`
    Io(std::io::Error),
}

impl fmt::Display for ShadeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingPerson => write!(f, "Missing person: no detection in keypoint document"),
            Self::DimensionMismatch {
                photo,
                segmentation,
            } => write!(
                f,
                "Dimension mismatch: photo is {}x{} but segmentation is {}x{}",
                photo.0, photo.1, segmentation.0, segmentation.1
            ),
            Self::CoordinateOutOfRange {
                point,
                width,
                height,
            } => write!(
                f,
                "Coordinate out of range: ({}, {}) outside {width}x{height} segmentation",
                point.x, point.y
            ),
            Self::Decode(msg) => write!(f, "Decode error: {msg}"),
            Self::Config(msg) => write!(f, "Config error: {msg}"),
            Self::Io(err) => write!(f, "IO error: {err}"),
        }
    }
}

impl std::error::Error for ShadeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ShadeError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<image::ImageError> for ShadeError {
    fn from(err: image::ImageError) -> Self {
        match err {
            image::ImageError::IoError(e) => Self::Io(e),
            other => Self::Decode(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for ShadeError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}
