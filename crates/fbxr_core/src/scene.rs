//! The decoded, immutable scene graph and its invariant-violation errors.

use thiserror::Error;

use crate::material::Material;
use crate::mesh::Mesh;

/// Parent-index value meaning "this object has no parent / is the root".
pub const ROOT_SENTINEL: i32 = -1;

/// A scene invariant that decode or graph validation found violated.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Invariant {
    #[error("index count {index_count} is not a multiple of 3")]
    IndexCountNotTriangles { index_count: u32 },

    #[error("vertex index {index} out of range for {vertex_count} vertices")]
    IndexOutOfRange { index: u32, vertex_count: u32 },

    #[error("declared texture count {declared} but {actual} texture-bearing properties")]
    TextureCountMismatch { declared: u32, actual: u32 },

    #[error("unknown material property tag {0}")]
    UnknownPropertyTag(i32),

    #[error("unknown material type tag {0}")]
    UnknownMaterialTag(i32),

    #[error("array index {found} stored at position {position}")]
    NonDenseArrayIndex { found: u32, position: u32 },

    #[error("parent index {0} does not name an existing object")]
    DanglingParent(i32),

    #[error("object is its own parent")]
    SelfParent,

    #[error("parent chain does not reach the root")]
    ParentCycle,

    #[error("second root found; first root was object {first_root}")]
    MultipleRoots { first_root: u32 },

    #[error("no object carries the root sentinel parent")]
    MissingRoot,

    #[error("root is object {root}, expected array index 0")]
    RootNotFirst { root: u32 },
}

/// Decode aborted: an invariant does not hold for the named object.
///
/// No partial scene is ever produced alongside this error; whole-graph
/// consistency wins over partial availability.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("malformed scene at object {array_index}: {invariant}")]
pub struct MalformedScene {
    /// `array_index` of the offending object. For whole-scene violations
    /// (missing root) this is 0.
    pub array_index: u32,

    /// The invariant that failed.
    pub invariant: Invariant,
}

impl MalformedScene {
    pub(crate) fn new(array_index: u32, invariant: Invariant) -> Self {
        Self {
            array_index,
            invariant,
        }
    }
}

/// One node of the decoded scene.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneObject {
    /// Node name from the FBX file (empty if the native parser gave none)
    pub name: String,

    /// This object's own position in the flat object array
    pub array_index: u32,

    /// Parent `array_index`, or [`ROOT_SENTINEL`]
    pub parent_index: i32,

    /// Declared child count from the native record
    pub child_count: u32,

    /// Geometry, absent for pure grouping nodes
    pub mesh: Option<Mesh>,

    /// Materials in native order
    pub materials: Vec<Material>,
}

impl SceneObject {
    /// True if this object carries the root sentinel parent.
    pub fn is_root(&self) -> bool {
        self.parent_index == ROOT_SENTINEL
    }

    /// Parent index as an option; `None` for the root.
    pub fn parent(&self) -> Option<u32> {
        if self.is_root() {
            None
        } else {
            Some(self.parent_index as u32)
        }
    }
}

/// The fully decoded, validated, immutable scene.
///
/// Produced atomically by one decode pass after a successful native load.
/// Holds no reference to native memory; it outlives the handle it was
/// decoded from.
#[derive(Clone, Debug)]
pub struct Scene {
    objects: Vec<SceneObject>,
    root_index: u32,
    children: Vec<Vec<u32>>,
}

impl Scene {
    /// Assemble a scene from validated parts. `children[i]` must be the
    /// ascending child indices of object `i` and `root_index` the unique
    /// sentinel-parent object, as produced by the graph builder.
    pub(crate) fn from_parts(
        objects: Vec<SceneObject>,
        root_index: u32,
        children: Vec<Vec<u32>>,
    ) -> Self {
        debug_assert_eq!(objects.len(), children.len());
        Self {
            objects,
            root_index,
            children,
        }
    }

    /// Number of objects.
    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// All objects, ordered by `array_index`.
    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    /// Look up an object by `array_index`.
    pub fn object(&self, index: u32) -> Option<&SceneObject> {
        self.objects.get(index as usize)
    }

    /// `array_index` of the root object.
    pub fn root_index(&self) -> u32 {
        self.root_index
    }

    /// The root object.
    pub fn root(&self) -> &SceneObject {
        &self.objects[self.root_index as usize]
    }

    /// Child indices of an object, ascending.
    pub fn children_of(&self, index: u32) -> &[u32] {
        &self.children[index as usize]
    }

    /// Depth-first traversal from the root. Children are visited in
    /// ascending `array_index` order.
    pub fn traverse(&self) -> impl Iterator<Item = &SceneObject> {
        Traverse {
            scene: self,
            stack: vec![self.root_index],
        }
    }

    /// Total triangle count across all meshes.
    pub fn total_triangle_count(&self) -> usize {
        self.objects
            .iter()
            .filter_map(|o| o.mesh.as_ref())
            .map(|m| m.triangle_count())
            .sum()
    }
}

struct Traverse<'a> {
    scene: &'a Scene,
    stack: Vec<u32>,
}

impl<'a> Iterator for Traverse<'a> {
    type Item = &'a SceneObject;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.stack.pop()?;
        // Reversed so the lowest child index is popped first
        self.stack
            .extend(self.scene.children_of(index).iter().rev());
        Some(&self.scene.objects[index as usize])
    }
}
