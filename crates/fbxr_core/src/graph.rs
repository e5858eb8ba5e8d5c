//! Hierarchy reconstruction from flat parent indices.
//!
//! The native buffer encodes the object tree implicitly: each object
//! carries the `array_index` of its parent, with a sentinel for the root.
//! This module turns that flat relation into explicit child adjacency and
//! proves it is a single-rooted tree before any caller traverses it,
//! instead of every consumer re-deriving (and re-trusting) the relation.

use crate::scene::{Invariant, MalformedScene, SceneObject, ROOT_SENTINEL};

/// Validated tree structure derived from per-object parent indices.
#[derive(Clone, Debug)]
pub struct SceneGraph {
    root: u32,
    children: Vec<Vec<u32>>,
}

impl SceneGraph {
    /// Reconstruct and validate the hierarchy.
    ///
    /// Verifies, in order: `array_index` values are dense and in
    /// position, exactly one object carries the root sentinel, every
    /// non-root parent names an existing object other than itself, every
    /// parent chain reaches the root within `object_count` hops, and the
    /// root is object 0. Child lists come out in ascending `array_index`
    /// order regardless of native declaration order, so traversal is
    /// deterministic.
    pub fn build(objects: &[SceneObject]) -> Result<Self, MalformedScene> {
        let count = objects.len();

        for (position, object) in objects.iter().enumerate() {
            if object.array_index as usize != position {
                return Err(MalformedScene::new(
                    object.array_index,
                    Invariant::NonDenseArrayIndex {
                        found: object.array_index,
                        position: position as u32,
                    },
                ));
            }
        }

        let mut root: Option<u32> = None;
        let mut children: Vec<Vec<u32>> = vec![Vec::new(); count];

        for object in objects {
            let index = object.array_index;
            let parent = object.parent_index;

            if parent == ROOT_SENTINEL {
                match root {
                    None => root = Some(index),
                    Some(first_root) => {
                        return Err(MalformedScene::new(
                            index,
                            Invariant::MultipleRoots { first_root },
                        ));
                    }
                }
                continue;
            }

            if parent < 0 || parent as usize >= count {
                return Err(MalformedScene::new(index, Invariant::DanglingParent(parent)));
            }
            if parent as u32 == index {
                return Err(MalformedScene::new(index, Invariant::SelfParent));
            }

            // Objects are visited in ascending order, so each child list
            // is already sorted.
            children[parent as usize].push(index);
        }

        let root = match root {
            Some(root) => root,
            None => return Err(MalformedScene::new(0, Invariant::MissingRoot)),
        };

        // Every parent chain must reach the root within `count` hops;
        // anything longer means a cycle among non-root objects.
        for object in objects {
            let mut current = object.array_index;
            let mut hops = 0usize;
            while current != root {
                current = objects[current as usize].parent_index as u32;
                hops += 1;
                if hops > count {
                    return Err(MalformedScene::new(
                        object.array_index,
                        Invariant::ParentCycle,
                    ));
                }
            }
        }

        // Downstream integrations attach object 0 as the scene root; a
        // scene whose true root lives elsewhere is reported, not patched.
        if root != 0 {
            return Err(MalformedScene::new(root, Invariant::RootNotFirst { root }));
        }

        Ok(Self { root, children })
    }

    /// `array_index` of the discovered root.
    pub fn root(&self) -> u32 {
        self.root
    }

    /// Child indices of an object, ascending.
    pub fn children_of(&self, index: u32) -> &[u32] {
        &self.children[index as usize]
    }

    pub(crate) fn into_parts(self) -> (u32, Vec<Vec<u32>>) {
        (self.root, self.children)
    }
}
