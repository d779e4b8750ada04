// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Shading configuration and structural constants.
//!
//! This module defines the [`ShadeConfig`] struct, which controls which skeleton indices
//! count as the lower body, the highlight color, the blend weights, and batch execution.

use std::ops::Range;

use image::Rgb;

use crate::error::{Result, ShadeError};

/// Body keypoint index ranges of the two leg chains (hip, knee, ankle).
pub const LEG_CHAINS: [Range<usize>; 2] = [8..11, 12..14];

/// Flat shading color filled into the lower-body hull.
///
/// Channels are in RGB order: red 132, green 134, blue 136. At the default
/// [`MASK_WEIGHT`] every channel saturates, so the order only shows with lower weights.
pub const HIGHLIGHT_COLOR: Rgb<u8> = Rgb([132, 134, 136]);

/// Weight of the original photo in the composite.
pub const PHOTO_WEIGHT: f32 = 1.0;

/// Weight of the filled mask in the composite.
///
/// Values above 1 saturate most channels inside the shaded region.
pub const MASK_WEIGHT: f32 = 5.0;

/// Scalar added to every composited channel.
pub const BLEND_GAMMA: f32 = 0.0;

/// Configuration for lower-body shading.
///
/// # Example
///
/// ```rust
/// use lower_body_shade::ShadeConfig;
/// use image::Rgb;
///
/// let config = ShadeConfig::new()
///     .with_highlight(Rgb([200, 0, 0]))
///     .with_weights(1.0, 0.5)
///     .with_batch(16);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ShadeConfig {
    /// Body keypoint index ranges treated as the lower body.
    pub leg_chains: [Range<usize>; 2],
    /// Color filled into the hull before compositing.
    pub highlight: Rgb<u8>,
    /// Weight of the original photo.
    pub photo_weight: f32,
    /// Weight of the filled mask.
    pub mask_weight: f32,
    /// Scalar added to every channel after weighting.
    pub gamma: f32,
    /// Number of image units processed per parallel batch.
    pub batch_size: usize,
    /// Worker threads for batch processing.
    /// Setting this to `0` lets rayon choose.
    pub num_threads: usize,
}

impl Default for ShadeConfig {
    fn default() -> Self {
        Self {
            leg_chains: LEG_CHAINS,
            highlight: HIGHLIGHT_COLOR,
            photo_weight: PHOTO_WEIGHT,
            mask_weight: MASK_WEIGHT,
            gamma: BLEND_GAMMA,
            batch_size: 8,
            num_threads: 0,
        }
    }
}

impl ShadeConfig {
    /// Create a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the body index ranges of the two leg chains.
    ///
    /// Useful for skeleton conventions other than the default 25-point body model.
    #[must_use]
    pub fn with_leg_chains(mut self, chains: [Range<usize>; 2]) -> Self {
        self.leg_chains = chains;
        self
    }

    /// Set the highlight color.
    #[must_use]
    pub const fn with_highlight(mut self, color: Rgb<u8>) -> Self {
        self.highlight = color;
        self
    }

    /// Set the photo and mask blend weights.
    ///
    /// # Arguments
    ///
    /// * `photo` - Weight of the original photo.
    /// * `mask` - Weight of the filled mask.
    #[must_use]
    pub const fn with_weights(mut self, photo: f32, mask: f32) -> Self {
        self.photo_weight = photo;
        self.mask_weight = mask;
        self
    }

    /// Set the scalar added after weighting.
    #[must_use]
    pub const fn with_gamma(mut self, gamma: f32) -> Self {
        self.gamma = gamma;
        self
    }

    /// Set the batch size.
    #[must_use]
    pub const fn with_batch(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    /// Set the number of worker threads. `0` lets rayon decide.
    #[must_use]
    pub const fn with_threads(mut self, threads: usize) -> Self {
        self.num_threads = threads;
        self
    }

    /// Check the configuration for values that cannot produce an image.
    ///
    /// # Errors
    ///
    /// Returns [`ShadeError::Config`] for a zero batch size or non-finite weights.
    pub fn validate(&self) -> Result<()> {
        if self.batch_size == 0 {
            return Err(ShadeError::Config("batch size must be at least 1".to_string()));
        }
        for (name, value) in [
            ("photo weight", self.photo_weight),
            ("mask weight", self.mask_weight),
            ("gamma", self.gamma),
        ] {
            if !value.is_finite() {
                return Err(ShadeError::Config(format!("{name} must be finite, got {value}")));
            }
        }
        Ok(())
    }
}
