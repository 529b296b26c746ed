use crate::bone::Bone;

/// Node of the fixed humanoid hierarchy.
///
/// Pure data, fixed at definition time. Child order is significant and
/// preserved by every pass downstream.
#[derive(Debug)]
pub struct Topology {
    pub bone: Bone,
    pub children: &'static [Topology],
}

impl Topology {
    /// Number of nodes in this subtree, the node itself included.
    pub fn node_count(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(Topology::node_count)
            .sum::<usize>()
    }

    /// Pre-order walk over the subtree.
    pub fn visit(&self, visitor: &mut impl FnMut(&Topology)) {
        visitor(self);
        for child in self.children {
            child.visit(visitor);
        }
    }
}

const fn leaf(bone: Bone) -> Topology {
    Topology { bone, children: &[] }
}

/// The full humanoid hierarchy, rooted at the hips.
pub static HUMANOID: Topology = Topology {
    bone: Bone::Hips,
    children: &[
        Topology {
            bone: Bone::Spine,
            children: &[Topology {
                bone: Bone::Chest,
                children: &[
                    Topology {
                        bone: Bone::Neck,
                        children: &[Topology {
                            bone: Bone::Head,
                            children: &[
                                leaf(Bone::LeftEye),
                                leaf(Bone::RightEye),
                                leaf(Bone::Jaw),
                            ],
                        }],
                    },
                    Topology {
                        bone: Bone::LeftUpperArm,
                        children: &[Topology {
                            bone: Bone::LeftLowerArm,
                            // No finger bones.
                            children: &[leaf(Bone::LeftHand)],
                        }],
                    },
                    Topology {
                        bone: Bone::RightUpperArm,
                        children: &[Topology {
                            bone: Bone::RightLowerArm,
                            children: &[leaf(Bone::RightHand)],
                        }],
                    },
                ],
            }],
        },
        Topology {
            bone: Bone::LeftUpperLeg,
            children: &[Topology {
                bone: Bone::LeftLowerLeg,
                children: &[Topology {
                    bone: Bone::LeftFoot,
                    children: &[leaf(Bone::LeftToes)],
                }],
            }],
        },
        Topology {
            bone: Bone::RightUpperLeg,
            children: &[Topology {
                bone: Bone::RightLowerLeg,
                children: &[Topology {
                    bone: Bone::RightFoot,
                    children: &[leaf(Bone::RightToes)],
                }],
            }],
        },
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn covers_every_bone_once() {
        assert_eq!(HUMANOID.node_count(), Bone::ALL.len());

        let mut seen = Vec::new();
        HUMANOID.visit(&mut |node| seen.push(node.bone));
        for bone in Bone::ALL.iter() {
            assert_eq!(
                seen.iter().filter(|b| *b == bone).count(),
                1,
                "{} must appear exactly once",
                bone,
            );
        }
    }

    #[test]
    fn hips_children_order() {
        let order = HUMANOID
            .children
            .iter()
            .map(|child| child.bone)
            .collect::<Vec<_>>();
        assert_eq!(
            order,
            [Bone::Spine, Bone::LeftUpperLeg, Bone::RightUpperLeg],
        );
    }
}
