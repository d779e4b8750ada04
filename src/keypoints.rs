// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Pose keypoint documents and coordinate types.
//!
//! Keypoints arrive as OpenPose-style JSON: one entry per detected person, each holding
//! flat `(x, y, confidence)` triplet streams for the body and both hands. Decoding drops
//! the confidence and truncates the coordinates to integer pixels.

use std::path::Path;

use serde::Deserialize;

use crate::error::{Result, ShadeError};

/// A 2D integer pixel coordinate.
///
/// Ordered by `x` then `y` so that keypoint sets iterate deterministically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Keypoint {
    /// Column.
    pub x: i32,
    /// Row.
    pub y: i32,
}

impl Keypoint {
    /// Create a new keypoint.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Keypoint {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// Decode a flat `(x, y, confidence)` triplet stream into keypoints.
///
/// Coordinates are truncated toward zero. Confidence is discarded, so undetected joints
/// reported as `(0, 0, 0)` survive as `(0, 0)`.
///
/// # Errors
///
/// Returns [`ShadeError::Decode`] if the stream length is not a multiple of three.
#[allow(clippy::cast_possible_truncation)]
pub fn decode_triplets(values: &[f64]) -> Result<Vec<Keypoint>> {
    if values.len() % 3 != 0 {
        return Err(ShadeError::Decode(format!(
            "keypoint stream length {} is not a multiple of 3",
            values.len()
        )));
    }

    Ok(values
        .chunks_exact(3)
        .map(|triplet| Keypoint::new(triplet[0] as i32, triplet[1] as i32))
        .collect())
}

/// Raw keypoint streams for one detected person.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PersonKeypoints {
    /// Body keypoints.
    #[serde(rename = "pose_keypoints_2d")]
    pub pose: Vec<f64>,
    /// Left hand keypoints. Empty when hand detection was disabled.
    #[serde(rename = "hand_left_keypoints_2d", default)]
    pub hand_left: Vec<f64>,
    /// Right hand keypoints. Empty when hand detection was disabled.
    #[serde(rename = "hand_right_keypoints_2d", default)]
    pub hand_right: Vec<f64>,
}

/// A keypoint document as written by the pose estimator.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PoseDocument {
    /// Detected people, in detector order.
    #[serde(default)]
    pub people: Vec<PersonKeypoints>,
}

impl PoseDocument {
    /// Parse a document from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`ShadeError::Decode`] if the JSON is malformed.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a document from disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Decode the first detected person.
    ///
    /// Further detections are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ShadeError::MissingPerson`] if the document has no people, or
    /// [`ShadeError::Decode`] if a keypoint stream is malformed.
    pub fn first_person(&self) -> Result<Skeleton> {
        let person = self.people.first().ok_or(ShadeError::MissingPerson)?;
        Skeleton::decode(person)
    }
}

/// Decoded keypoints for one person: the body sequence and the hand set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Skeleton {
    /// Body keypoints in pose-model index order.
    pub body: Vec<Keypoint>,
    /// Left hand keypoints followed by right hand keypoints.
    pub hands: Vec<Keypoint>,
}

impl Skeleton {
    /// Decode raw keypoint streams.
    ///
    /// # Errors
    ///
    /// Returns [`ShadeError::Decode`] if any stream is malformed.
    pub fn decode(person: &PersonKeypoints) -> Result<Self> {
        let body = decode_triplets(&person.pose)?;
        let mut hands = decode_triplets(&person.hand_left)?;
        hands.extend(decode_triplets(&person.hand_right)?);
        Ok(Self { body, hands })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_triplets_truncates() {
        let points = decode_triplets(&[1.9, 2.1, 0.8, 10.0, 20.99, 0.0, -0.5, 3.5, 0.1]).unwrap();
        assert_eq!(
            points,
            vec![
                Keypoint::new(1, 2),
                Keypoint::new(10, 20),
                Keypoint::new(0, 3),
            ]
        );
    }

    #[test]
    fn test_decode_triplets_rejects_partial() {
        let err = decode_triplets(&[1.0, 2.0]).unwrap_err();
        assert!(matches!(err, ShadeError::Decode(_)));
    }

    #[test]
    fn test_document_first_person() {
        let json = r#"{
            "version": 1.3,
            "people": [
                {
                    "person_id": [-1],
                    "pose_keypoints_2d": [1, 2, 0.9, 3, 4, 0.8],
                    "hand_left_keypoints_2d": [5, 6, 0.7],
                    "hand_right_keypoints_2d": [7, 8, 0.6]
                },
                {
                    "pose_keypoints_2d": [100, 100, 1.0]
                }
            ]
        }"#;
        let doc = PoseDocument::from_json(json).unwrap();
        assert_eq!(doc.people.len(), 2);

        let skeleton = doc.first_person().unwrap();
        assert_eq!(skeleton.body, vec![Keypoint::new(1, 2), Keypoint::new(3, 4)]);
        assert_eq!(skeleton.hands, vec![Keypoint::new(5, 6), Keypoint::new(7, 8)]);
    }

    #[test]
    fn test_document_without_hands() {
        let doc = PoseDocument::from_json(r#"{"people": [{"pose_keypoints_2d": [1, 2, 0.5]}]}"#)
            .unwrap();
        let skeleton = doc.first_person().unwrap();
        assert_eq!(skeleton.body.len(), 1);
        assert!(skeleton.hands.is_empty());
    }

    #[test]
    fn test_document_missing_person() {
        let doc = PoseDocument::from_json(r#"{"version": 1.3, "people": []}"#).unwrap();
        assert!(matches!(doc.first_person(), Err(ShadeError::MissingPerson)));

        let doc = PoseDocument::from_json("{}").unwrap();
        assert!(matches!(doc.first_person(), Err(ShadeError::MissingPerson)));
    }

    #[test]
    fn test_document_malformed() {
        assert!(matches!(
            PoseDocument::from_json(r#"{"people": [{"pose_keypoints_2d": "nope"}]}"#),
            Err(ShadeError::Decode(_))
        ));
    }
}
