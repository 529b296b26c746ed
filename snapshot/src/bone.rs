use std::fmt;

/// Bones of the humanoid rig covered by snapshots.
///
/// This is the closed set of mapping slots a humanoid avatar exposes.
/// Any individual bone may be left unmapped by a particular rig.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    serde::Serialize,
    serde::Deserialize,
)]
pub enum Bone {
    Hips,
    Spine,
    Chest,
    Neck,
    Head,
    LeftEye,
    RightEye,
    Jaw,
    LeftUpperArm,
    LeftLowerArm,
    LeftHand,
    RightUpperArm,
    RightLowerArm,
    RightHand,
    LeftUpperLeg,
    LeftLowerLeg,
    LeftFoot,
    LeftToes,
    RightUpperLeg,
    RightLowerLeg,
    RightFoot,
    RightToes,
}

impl Bone {
    /// Every covered bone, in declaration order.
    pub const ALL: [Bone; 22] = [
        Bone::Hips,
        Bone::Spine,
        Bone::Chest,
        Bone::Neck,
        Bone::Head,
        Bone::LeftEye,
        Bone::RightEye,
        Bone::Jaw,
        Bone::LeftUpperArm,
        Bone::LeftLowerArm,
        Bone::LeftHand,
        Bone::RightUpperArm,
        Bone::RightLowerArm,
        Bone::RightHand,
        Bone::LeftUpperLeg,
        Bone::LeftLowerLeg,
        Bone::LeftFoot,
        Bone::LeftToes,
        Bone::RightUpperLeg,
        Bone::RightLowerLeg,
        Bone::RightFoot,
        Bone::RightToes,
    ];

    /// Canonical name, emitted verbatim as the `name` value in
    /// snapshot JSON.
    pub fn name(&self) -> &'static str {
        match self {
            Bone::Hips => "Hips",
            Bone::Spine => "Spine",
            Bone::Chest => "Chest",
            Bone::Neck => "Neck",
            Bone::Head => "Head",
            Bone::LeftEye => "LeftEye",
            Bone::RightEye => "RightEye",
            Bone::Jaw => "Jaw",
            Bone::LeftUpperArm => "LeftUpperArm",
            Bone::LeftLowerArm => "LeftLowerArm",
            Bone::LeftHand => "LeftHand",
            Bone::RightUpperArm => "RightUpperArm",
            Bone::RightLowerArm => "RightLowerArm",
            Bone::RightHand => "RightHand",
            Bone::LeftUpperLeg => "LeftUpperLeg",
            Bone::LeftLowerLeg => "LeftLowerLeg",
            Bone::LeftFoot => "LeftFoot",
            Bone::LeftToes => "LeftToes",
            Bone::RightUpperLeg => "RightUpperLeg",
            Bone::RightLowerLeg => "RightLowerLeg",
            Bone::RightFoot => "RightFoot",
            Bone::RightToes => "RightToes",
        }
    }

    /// Reverse of [`Bone::name`].
    pub fn from_name(name: &str) -> Option<Self> {
        Bone::ALL.iter().copied().find(|bone| bone.name() == name)
    }
}

impl fmt::Display for Bone {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.write_str(self.name())
    }
}
