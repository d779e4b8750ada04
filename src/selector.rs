// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Lower-body keypoint selection.

use std::collections::BTreeSet;
use std::ops::Range;

use crate::keypoints::{Keypoint, Skeleton};

/// Select the lower-body keypoints of a skeleton.
///
/// Takes the body keypoints in `leg_chains` and removes every coordinate that also
/// appears among the hand keypoints. Ranges that run past the end of the body sequence
/// are truncated. Duplicate coordinates collapse into one.
///
/// Undetected joints reported as `(0, 0)` are kept unless a hand keypoint also sits at
/// the origin.
#[must_use]
pub fn select_lower_body(skeleton: &Skeleton, leg_chains: &[Range<usize>]) -> BTreeSet<Keypoint> {
    let hands: BTreeSet<Keypoint> = skeleton.hands.iter().copied().collect();

    leg_chains
        .iter()
        .flat_map(|chain| chain_slice(&skeleton.body, chain))
        .filter(|point| !hands.contains(*point))
        .copied()
        .collect()
}

fn chain_slice<'a>(body: &'a [Keypoint], chain: &Range<usize>) -> &'a [Keypoint] {
    let end = chain.end.min(body.len());
    let start = chain.start.min(end);
    &body[start..end]
}
