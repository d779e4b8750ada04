// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

#![allow(clippy::multiple_crate_versions)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! # Lower-Body Shade
//!
//! Synthesizes a highlighted lower-body region on photographs of clothed people and
//! composites it onto the photo. Each photo comes with two externally produced inputs:
//!
//! - an OpenPose-style keypoint document (`pose_keypoints_2d`, `hand_left_keypoints_2d`,
//!   `hand_right_keypoints_2d`)
//! - a human-parsing segmentation image of the same size, one flat color per class
//!
//! ## Pipeline
//!
//! 1. [`select_lower_body`] takes the leg-chain keypoints of the first person (hips,
//!    knees, ankles) and drops any that coincide with a hand keypoint.
//! 2. [`shade_lower_body`] reads the segmentation color under each selected keypoint,
//!    masks every pixel of those colors, takes the convex hull of the mask and fills it
//!    with [`HIGHLIGHT_COLOR`].
//! 3. The filled mask is blended onto the photo as
//!    `saturate(PHOTO_WEIGHT * photo + MASK_WEIGHT * mask + BLEND_GAMMA)`.
//!
//! Segmentation classes are matched by exact color. A keypoint at `(0, 0)` is the
//! pose estimator's "not detected" marker and still takes part in the color lookup.
//!
//! ## Quick Start (Library)
//!
//! ```no_run
//! use lower_body_shade::{PoseDocument, ShadeConfig, shade_document, source::load_image};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let photo = load_image("dataset/image/000001_0.jpg")?;
//!     let segmentation = load_image("dataset/human_parsing/000001_0.png")?;
//!     let document = PoseDocument::load("dataset/pose_json/000001_0_keypoints.json")?;
//!
//!     let shaded = shade_document(&photo, &segmentation, &document, &ShadeConfig::default())?;
//!     shaded.save("shaded_000001_0.jpg")?;
//!     Ok(())
//! }
//! ```
//!
//! ## CLI Usage
//!
//! ```bash
//! # Shade every photo under dataset/image into output/
//! lower-body-shade shade
//!
//! # Custom directories, batching and highlight
//! lower-body-shade shade -i data/ -o out/ --batch 32 --threads 4 --color 255,0,0
//! ```
//!
//! **CLI Options:**
//!
//! | Option | Short | Description | Default |
//! |--------|-------|-------------|---------|
//! | `--input` | `-i` | Dataset root | `dataset` |
//! | `--output` | `-o` | Output directory | `output` |
//! | `--batch` | | Images per parallel batch | `8` |
//! | `--threads` | | Worker threads (0 = all cores) | `0` |
//! | `--weight` | | Highlight blend weight | `5` |
//! | `--color` | | Highlight color `R,G,B` | `132,134,136` |
//! | `--verbose` | | Per-image output | `true` |
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`keypoints`] | Keypoint documents and decoded skeletons ([`PoseDocument`], [`Skeleton`]) |
//! | [`selector`] | Lower-body keypoint selection |
//! | [`synthesizer`] | Mask, hull, fill and blend |
//! | [`config`] | [`ShadeConfig`] and the named constants |
//! | [`source`] | Dataset layout ([`Dataset`], [`ShadeUnit`]) |
//! | [`batch`] | Parallel batch processing ([`BatchProcessor`]) |
//! | [`io`] | Saving outputs ([`SaveResults`]) |
//! | [`error`] | Error types ([`ShadeError`], [`Result`]) |
//!
//! ## License
//!
//! This project is licensed under [AGPL-3.0](https://ultralytics.com/license).

// Modules
pub mod batch;
pub mod cli;
pub mod config;
pub mod error;
pub mod io;
pub mod keypoints;
pub mod selector;
pub mod source;
pub mod synthesizer;
pub mod utils;

// Re-export main types for convenience
pub use batch::BatchProcessor;
pub use config::{BLEND_GAMMA, HIGHLIGHT_COLOR, LEG_CHAINS, MASK_WEIGHT, PHOTO_WEIGHT, ShadeConfig};
pub use error::{Result, ShadeError};
pub use io::SaveResults;
pub use keypoints::{Keypoint, PoseDocument, Skeleton};
pub use selector::select_lower_body;
pub use source::{Dataset, ShadeUnit};
pub use synthesizer::{shade_document, shade_lower_body};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name.
pub const NAME: &str = env!("CARGO_PKG_NAME");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(VERSION.contains('.'));
    }

    #[test]
    fn test_name() {
        assert_eq!(NAME, "lower-body-shade");
    }
}
