//! Humanoid skeleton snapshots.
//!
//! Captures world-space bone positions from any [`ResolvePosition`]
//! source over the fixed [`HUMANOID`] hierarchy, relativizes each bone
//! against its parent, and moves the result around as JSON.

pub mod bone;
pub mod json;
pub mod pose;
pub mod snapshot;
pub mod topology;

pub use self::{
    bone::Bone,
    pose::{Pose, PoseError},
    snapshot::{capture, BoneSnapshot, ResolvePosition},
    topology::{Topology, HUMANOID},
};
