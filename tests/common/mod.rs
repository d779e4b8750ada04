// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Shared dataset fixtures for integration tests.

#![allow(dead_code)]

use assert_fs::TempDir;
use assert_fs::prelude::*;
use image::{Rgb, RgbImage};

pub const PHOTO: Rgb<u8> = Rgb([100, 100, 100]);
pub const BACKGROUND: Rgb<u8> = Rgb([10, 10, 10]);
pub const TROUSERS: Rgb<u8> = Rgb([50, 50, 50]);

/// Whether `(x, y)` lies in the trousers square of [`segmentation`].
pub fn in_square(x: u32, y: u32) -> bool {
    (3..=6).contains(&x) && (3..=6).contains(&y)
}

/// 10x10 flat photo.
pub fn photo() -> RgbImage {
    RgbImage::from_pixel(10, 10, PHOTO)
}

/// 10x10 segmentation with a 4x4 trousers square at rows and columns 3..=6.
pub fn segmentation() -> RgbImage {
    RgbImage::from_fn(10, 10, |x, y| if in_square(x, y) { TROUSERS } else { BACKGROUND })
}

/// OpenPose document whose 15 body keypoints all sit inside the square.
pub fn pose_json() -> String {
    let body: Vec<String> = (0..15).map(|_| "4.0, 4.0, 0.9".to_string()).collect();
    format!(
        r#"{{"version": 1.3, "people": [{{"pose_keypoints_2d": [{}], "hand_left_keypoints_2d": [], "hand_right_keypoints_2d": []}}]}}"#,
        body.join(", ")
    )
}

/// Write one complete unit named `id` into the dataset at `root`.
pub fn write_unit(root: &TempDir, id: &str) {
    root.child("image").create_dir_all().unwrap();
    root.child("human_parsing").create_dir_all().unwrap();
    root.child("pose_json").create_dir_all().unwrap();

    photo()
        .save(root.child(format!("image/{id}.png")).path())
        .unwrap();
    segmentation()
        .save(root.child(format!("human_parsing/{id}.png")).path())
        .unwrap();
    root.child(format!("pose_json/{id}_keypoints.json"))
        .write_str(&pose_json())
        .unwrap();
}

/// Write one complete unit named `id` whose photo is a JPEG.
pub fn write_jpeg_unit(root: &TempDir, id: &str) {
    write_unit(root, id);
    std::fs::remove_file(root.child(format!("image/{id}.png")).path()).unwrap();
    photo()
        .save(root.child(format!("image/{id}.jpg")).path())
        .unwrap();
}

/// Write a photo with no companion files.
pub fn write_orphan(root: &TempDir, id: &str) {
    root.child("image").create_dir_all().unwrap();
    photo()
        .save(root.child(format!("image/{id}.png")).path())
        .unwrap();
}

/// Expected pixel of a shaded output.
pub fn expected(x: u32, y: u32) -> Rgb<u8> {
    if in_square(x, y) {
        Rgb([255, 255, 255])
    } else {
        PHOTO
    }
}
