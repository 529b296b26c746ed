use {
    crate::{bone::Bone, topology::Topology},
    nalgebra as na,
    std::collections::HashMap,
};

/// Source of world-space bone positions for a particular rig.
pub trait ResolvePosition {
    /// World position of `bone`, or `None` when the rig leaves the
    /// bone unmapped.
    fn resolve(&self, bone: Bone) -> Option<na::Point3<f32>>;
}

impl ResolvePosition for HashMap<Bone, na::Point3<f32>> {
    fn resolve(&self, bone: Bone) -> Option<na::Point3<f32>> {
        self.get(&bone).copied()
    }
}

/// Captured bone node.
///
/// The tree mirrors the topology it was captured from: same arity,
/// same child order. Unmapped bones are recorded with `position:
/// None`, never pruned.
#[derive(Clone, Debug, PartialEq)]
pub struct BoneSnapshot {
    pub bone: Bone,
    /// Offset from the parent bone's world position, or from the
    /// capture origin for the root. `None` when the bone is unmapped.
    pub position: Option<na::Vector3<f32>>,
    pub children: Vec<BoneSnapshot>,
}

impl BoneSnapshot {
    /// Number of nodes in this subtree, the node itself included.
    pub fn node_count(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(BoneSnapshot::node_count)
            .sum::<usize>()
    }

    /// How many bones of this subtree the rig actually mapped.
    pub fn mapped_count(&self) -> usize {
        self.position.is_some() as usize
            + self
                .children
                .iter()
                .map(BoneSnapshot::mapped_count)
                .sum::<usize>()
    }

    /// Recovers world positions by accumulating relative offsets from
    /// `origin`, in pre-order. Unmapped bones are skipped; their
    /// descendants accumulate from the nearest mapped ancestor.
    pub fn absolute_positions(
        &self,
        origin: na::Point3<f32>,
    ) -> Vec<(Bone, na::Point3<f32>)> {
        let mut out = Vec::with_capacity(self.node_count());
        self.accumulate(origin, &mut out);
        out
    }

    fn accumulate(
        &self,
        reference: na::Point3<f32>,
        out: &mut Vec<(Bone, na::Point3<f32>)>,
    ) {
        let reference = match self.position {
            Some(offset) => {
                let world = reference + offset;
                out.push((self.bone, world));
                world
            }
            None => reference,
        };
        for child in &self.children {
            child.accumulate(reference, out);
        }
    }
}

/// Captures a snapshot of `topology` with positions from `resolver`.
///
/// Each bone's offset is relative to its parent's world position; the
/// root is relative to `origin`. When a bone is unmapped its
/// descendants stay relative to the nearest mapped ancestor, so a
/// partially mapped rig still yields the full-shape tree.
pub fn capture(
    topology: &Topology,
    resolver: &impl ResolvePosition,
    origin: na::Point3<f32>,
) -> BoneSnapshot {
    capture_node(topology, resolver, origin)
}

fn capture_node(
    node: &Topology,
    resolver: &impl ResolvePosition,
    reference: na::Point3<f32>,
) -> BoneSnapshot {
    let world = resolver.resolve(node.bone);

    // Unmapped bones pass the inherited reference through, keeping
    // descendants relative to the nearest mapped ancestor.
    let next = world.unwrap_or(reference);

    BoneSnapshot {
        bone: node.bone,
        position: world.map(|world| world - reference),
        children: node
            .children
            .iter()
            .map(|child| capture_node(child, resolver, next))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use {super::*, crate::topology::HUMANOID};

    fn point(x: f32, y: f32, z: f32) -> na::Point3<f32> {
        na::Point3::new(x, y, z)
    }

    fn assert_mirrors(snapshot: &BoneSnapshot, topology: &Topology) {
        assert_eq!(snapshot.bone, topology.bone);
        assert_eq!(snapshot.children.len(), topology.children.len());
        for (child, node) in
            snapshot.children.iter().zip(topology.children)
        {
            assert_mirrors(child, node);
        }
    }

    static CHAIN: Topology = Topology {
        bone: Bone::Hips,
        children: &[Topology {
            bone: Bone::Spine,
            children: &[Topology {
                bone: Bone::Chest,
                children: &[],
            }],
        }],
    };

    #[test]
    fn empty_rig_keeps_full_shape() {
        let rig = HashMap::<Bone, na::Point3<f32>>::new();
        let snapshot = capture(&HUMANOID, &rig, point(0.0, 0.0, 0.0));

        assert_mirrors(&snapshot, &HUMANOID);
        assert_eq!(snapshot.node_count(), HUMANOID.node_count());
        assert_eq!(snapshot.mapped_count(), 0);
    }

    #[test]
    fn root_is_relative_to_origin() {
        let mut rig = HashMap::new();
        rig.insert(Bone::Hips, point(2.0, 1.0, 3.0));

        let snapshot = capture(&CHAIN, &rig, point(2.0, 0.0, 3.0));
        assert_eq!(
            snapshot.position,
            Some(na::Vector3::new(0.0, 1.0, 0.0)),
        );
    }

    #[test]
    fn children_are_relative_to_parent() {
        let mut rig = HashMap::new();
        rig.insert(Bone::Hips, point(0.0, 1.0, 0.0));
        rig.insert(Bone::Spine, point(0.0, 1.5, 0.0));

        let snapshot = capture(&CHAIN, &rig, point(0.0, 0.0, 0.0));
        let spine = &snapshot.children[0];
        assert_eq!(
            spine.position,
            Some(na::Vector3::new(0.0, 0.5, 0.0)),
        );
    }

    #[test]
    fn absent_bone_passes_reference_to_descendants() {
        let mut rig = HashMap::new();
        rig.insert(Bone::Hips, point(0.0, 1.0, 0.0));
        // Spine unmapped, Chest mapped.
        rig.insert(Bone::Chest, point(0.0, 1.5, 0.25));

        let snapshot = capture(&CHAIN, &rig, point(0.0, 0.0, 0.0));
        let spine = &snapshot.children[0];
        let chest = &spine.children[0];

        assert_eq!(spine.position, None);
        assert_eq!(spine.children.len(), 1);
        // Relative to the hips, the nearest mapped ancestor.
        assert_eq!(
            chest.position,
            Some(na::Vector3::new(0.0, 0.5, 0.25)),
        );
    }

    #[test]
    fn absolute_positions_recover_the_rig() {
        let mut rig = HashMap::new();
        rig.insert(Bone::Hips, point(0.0, 1.0, 0.0));
        rig.insert(Bone::Chest, point(0.25, 1.75, 0.5));

        let origin = point(0.0, 0.0, 0.0);
        let snapshot = capture(&CHAIN, &rig, origin);
        let absolute = snapshot.absolute_positions(origin);

        assert_eq!(
            absolute,
            vec![
                (Bone::Hips, point(0.0, 1.0, 0.0)),
                (Bone::Chest, point(0.25, 1.75, 0.5)),
            ],
        );
    }
}
