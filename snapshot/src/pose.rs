use {
    crate::{bone::Bone, snapshot::ResolvePosition},
    nalgebra as na,
    std::{collections::HashMap, path::Path},
};

/// World-space bone positions captured from a rig, loaded from a RON
/// pose file.
///
/// ```ron
/// (
///     origin: (0.0, 0.0, 0.0),
///     bones: {
///         Hips: (0.0, 1.0, 0.0),
///         Spine: (0.0, 1.2, 0.0),
///     },
/// )
/// ```
#[derive(Clone, Debug, Default, serde::Deserialize)]
pub struct Pose {
    /// Point the snapshot is captured relative to; usually the rig
    /// object's own world position.
    #[serde(default)]
    pub origin: [f32; 3],

    /// World positions keyed by bone. Unlisted bones are unmapped.
    #[serde(default)]
    pub bones: HashMap<Bone, [f32; 3]>,
}

#[derive(Debug, thiserror::Error)]
pub enum PoseError {
    #[error("failed to read pose file")]
    Io {
        #[from]
        source: std::io::Error,
    },

    #[error(transparent)]
    Ron {
        #[from]
        source: ron::de::Error,
    },
}

impl Pose {
    #[tracing::instrument]
    pub fn load(path: &Path) -> Result<Self, PoseError> {
        Ok(ron::de::from_reader(std::fs::File::open(path)?)?)
    }

    pub fn origin(&self) -> na::Point3<f32> {
        na::Point3::from(self.origin)
    }
}

impl ResolvePosition for Pose {
    fn resolve(&self, bone: Bone) -> Option<na::Point3<f32>> {
        self.bones.get(&bone).copied().map(na::Point3::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_listed_bones_only() {
        let pose: Pose = ron::de::from_str(
            "(
                origin: (0.0, 0.5, 0.0),
                bones: {
                    Hips: (0.0, 1.0, 0.0),
                },
            )",
        )
        .unwrap();

        assert_eq!(pose.origin(), na::Point3::new(0.0, 0.5, 0.0));
        assert_eq!(
            pose.resolve(Bone::Hips),
            Some(na::Point3::new(0.0, 1.0, 0.0)),
        );
        assert_eq!(pose.resolve(Bone::Jaw), None);
    }

    #[test]
    fn origin_defaults_to_zero() {
        let pose: Pose =
            ron::de::from_str("(bones: {})").unwrap();
        assert_eq!(pose.origin(), na::Point3::new(0.0, 0.0, 0.0));
    }
}
