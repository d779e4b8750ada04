// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Lower-body region synthesis and compositing.
//!
//! The segmentation image carries one flat color per garment or body-part class. The
//! colors found under the lower-body keypoints select the classes to shade; every pixel
//! of those classes is gathered into a masked image, the convex hull of the masked pixels
//! is filled with a flat highlight, and the result is blended onto the photo.
//!
//! Colors are compared by exact equality. Antialiased segmentation edges therefore fall
//! outside the mask.

use std::collections::BTreeSet;

use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_line_segment_mut, draw_polygon_mut};
use imageproc::geometry::convex_hull;
use imageproc::point::Point;
use ndarray::Array2;

use crate::config::ShadeConfig;
use crate::error::{Result, ShadeError};
use crate::keypoints::{Keypoint, PoseDocument};
use crate::selector::select_lower_body;

const BLACK: Rgb<u8> = Rgb([0, 0, 0]);

/// Ensure the photo and segmentation image share the same size.
///
/// # Errors
///
/// Returns [`ShadeError::DimensionMismatch`] if the sizes differ.
pub fn check_dimensions(photo: &RgbImage, segmentation: &RgbImage) -> Result<()> {
    if photo.dimensions() == segmentation.dimensions() {
        Ok(())
    } else {
        Err(ShadeError::DimensionMismatch {
            photo: photo.dimensions(),
            segmentation: segmentation.dimensions(),
        })
    }
}

/// Collect the distinct segmentation colors found under the given keypoints.
///
/// `(x, y)` is looked up as column `x`, row `y`.
///
/// # Errors
///
/// Returns [`ShadeError::CoordinateOutOfRange`] if a keypoint lies outside the image.
pub fn seed_colors<'a, I>(segmentation: &RgbImage, points: I) -> Result<BTreeSet<[u8; 3]>>
where
    I: IntoIterator<Item = &'a Keypoint>,
{
    let (width, height) = segmentation.dimensions();
    points
        .into_iter()
        .map(|point| {
            let x = u32::try_from(point.x).ok().filter(|&x| x < width);
            let y = u32::try_from(point.y).ok().filter(|&y| y < height);
            match (x, y) {
                (Some(x), Some(y)) => Ok(segmentation.get_pixel(x, y).0),
                _ => Err(ShadeError::CoordinateOutOfRange {
                    point: *point,
                    width,
                    height,
                }),
            }
        })
        .collect()
}

/// Build a boolean mask, indexed `[[y, x]]`, that is true wherever the segmentation
/// color exactly equals one of `seeds`.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn color_mask(segmentation: &RgbImage, seeds: &BTreeSet<[u8; 3]>) -> Array2<bool> {
    let (width, height) = segmentation.dimensions();
    Array2::from_shape_fn((height as usize, width as usize), |(y, x)| {
        seeds.contains(&segmentation.get_pixel(x as u32, y as u32).0)
    })
}

/// Copy the segmentation colors under `mask` onto a black canvas.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn masked_region(segmentation: &RgbImage, mask: &Array2<bool>) -> RgbImage {
    let (width, height) = segmentation.dimensions();
    RgbImage::from_fn(width, height, |x, y| {
        if mask[[y as usize, x as usize]] {
            *segmentation.get_pixel(x, y)
        } else {
            BLACK
        }
    })
}

/// Convex hull of every non-black pixel, as `(x, y)` points.
///
/// Only the outermost pixels of each row are handed to the hull routine; interior
/// pixels of a row can never be hull vertices.
#[must_use]
#[allow(clippy::cast_possible_wrap)]
pub fn hull_points(masked: &RgbImage) -> Vec<Point<i32>> {
    let mut extremes = Vec::new();
    for (y, row) in masked.rows().enumerate() {
        let mut lit = row
            .enumerate()
            .filter(|(_, pixel)| **pixel != BLACK)
            .map(|(x, _)| x);
        let Some(first) = lit.next() else {
            continue;
        };
        let last = lit.last().unwrap_or(first);

        extremes.push(Point::new(first as i32, y as i32));
        if last != first {
            extremes.push(Point::new(last as i32, y as i32));
        }
    }

    if extremes.is_empty() {
        return extremes;
    }
    convex_hull(extremes)
}

/// Fill the hull polygon on `canvas` with a flat color.
///
/// Hulls of one or two points degenerate to a pixel or a line segment.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn fill_hull(mut canvas: RgbImage, hull: &[Point<i32>], color: Rgb<u8>) -> RgbImage {
    match hull {
        [] => {}
        [p] => {
            if let (Ok(x), Ok(y)) = (u32::try_from(p.x), u32::try_from(p.y))
                && x < canvas.width()
                && y < canvas.height()
            {
                canvas.put_pixel(x, y, color);
            }
        }
        [a, b] => draw_line_segment_mut(
            &mut canvas,
            (a.x as f32, a.y as f32),
            (b.x as f32, b.y as f32),
            color,
        ),
        polygon => draw_polygon_mut(&mut canvas, polygon, color),
    }
    canvas
}

/// Weighted per-channel sum `photo * photo_weight + overlay * mask_weight + gamma`,
/// rounded and clamped to the `u8` range.
///
/// Both images must share the same dimensions.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn blend(photo: &RgbImage, overlay: &RgbImage, config: &ShadeConfig) -> RgbImage {
    let mut out = photo.clone();
    for (dst, src) in out.pixels_mut().zip(overlay.pixels()) {
        for (d, s) in dst.0.iter_mut().zip(src.0) {
            let value = f32::from(*d)
                .mul_add(config.photo_weight, f32::from(s) * config.mask_weight)
                + config.gamma;
            *d = value.round().clamp(0.0, 255.0) as u8;
        }
    }
    out
}

/// Composite a shaded lower-body region onto a photo.
///
/// # Arguments
///
/// * `photo` - Original photo.
/// * `points` - Lower-body keypoints, usually from [`select_lower_body`].
/// * `segmentation` - Human-parsing image of the same size as `photo`.
/// * `config` - Highlight color and blend weights.
///
/// # Returns
///
/// * A new image; the inputs are left untouched. With no keypoints the photo is
///   returned unchanged.
///
/// # Errors
///
/// Returns [`ShadeError::DimensionMismatch`] or [`ShadeError::CoordinateOutOfRange`].
pub fn shade_lower_body(
    photo: &RgbImage,
    points: &BTreeSet<Keypoint>,
    segmentation: &RgbImage,
    config: &ShadeConfig,
) -> Result<RgbImage> {
    check_dimensions(photo, segmentation)?;

    let seeds = seed_colors(segmentation, points)?;
    let mask = color_mask(segmentation, &seeds);
    let masked = masked_region(segmentation, &mask);
    let hull = hull_points(&masked);
    let filled = fill_hull(masked, &hull, config.highlight);

    Ok(blend(photo, &filled, config))
}

/// Select the first person's lower-body keypoints and shade them onto the photo.
///
/// # Errors
///
/// Returns [`ShadeError::MissingPerson`] for an empty document, or any error of
/// [`shade_lower_body`].
pub fn shade_document(
    photo: &RgbImage,
    segmentation: &RgbImage,
    document: &PoseDocument,
    config: &ShadeConfig,
) -> Result<RgbImage> {
    let skeleton = document.first_person()?;
    let points = select_lower_body(&skeleton, &config.leg_chains);
    shade_lower_body(photo, &points, segmentation, config)
}
