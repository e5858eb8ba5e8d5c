//! Raw record layouts and native loader bindings.
//!
//! These `#[repr(C)]` structs mirror, field for field, the flatly packed
//! records the native FBX utility exposes through its handle. Counted
//! arrays are (pointer, count) pairs; strings are null-terminated; all of
//! it lives in native memory owned by the handle. Nothing in this module
//! dereferences anything — decoding lives in [`super::decode`].

use std::os::raw::c_char;

use fbxr_math::{Vector2, Vector3, Vector4};

/// One material property slot as laid out in native memory.
#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct RawProperty {
    /// Property tag, see [`crate::material::PropertyKind`]
    pub tag: i32,
    /// Null-terminated relative texture file name, or null
    pub relative_path: *const c_char,
    /// Null-terminated absolute texture file path, or null
    pub absolute_path: *const c_char,
    /// RGBA color or scalar-in-x payload
    pub value: Vector4,
}

/// A material record: shading model tag plus a fixed-size slot table.
#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct RawMaterial {
    /// Shading model tag, see [`crate::material::MaterialKind`]
    pub tag: i32,
    /// Array of exactly [`crate::material::PROPERTY_SLOT_COUNT`] slots
    pub properties: *const RawProperty,
    /// Declared number of texture-bearing slots
    pub texture_count: u32,
}

/// A mesh record: three parallel vertex streams plus triangle indices.
#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct RawMesh {
    pub positions: *const Vector3,
    pub normals: *const Vector3,
    pub uvs: *const Vector2,
    pub indices: *const u32,
    /// Length of each of the three vertex streams
    pub vertex_count: u32,
    /// Length of the index array
    pub index_count: u32,
}

/// One scene object record.
#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct RawObject {
    /// Parent `array_index`, or [`crate::scene::ROOT_SENTINEL`]
    pub parent_index: i32,
    /// Child `array_index` values; redundant with the parent relation,
    /// the adjacency is rebuilt and validated from parents instead
    pub children: *const u32,
    /// Mesh record, or null for non-geometry nodes
    pub mesh: *const RawMesh,
    /// Array of `material_count` material records
    pub materials: *const RawMaterial,
    pub child_count: u32,
    pub material_count: u32,
    /// Null-terminated object name
    pub name: *const c_char,
    /// This object's position in the flat object array
    pub array_index: u32,
}

/// The scene record at the top of the native buffer.
#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct RawScene {
    pub objects: *const RawObject,
    pub object_count: u32,
}

/// The native handle struct. The pointer returned by `acquire` points
/// here; `scene` is populated only after a successful load.
#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct RawHandle {
    pub scene: *const RawScene,
}

/// Result kinds reported by the native `load` call.
#[repr(i32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadStatus {
    Success = 0,
    IncorrectFilePath,
    NoObjectsInScene,
    NodeNotGeometryType,
    RootNodeNotFound,
}

impl LoadStatus {
    /// Decode a native result code.
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(LoadStatus::Success),
            1 => Some(LoadStatus::IncorrectFilePath),
            2 => Some(LoadStatus::NoObjectsInScene),
            3 => Some(LoadStatus::NodeNotGeometryType),
            4 => Some(LoadStatus::RootNodeNotFound),
            _ => None,
        }
    }
}

#[cfg(feature = "native")]
pub(crate) mod native {
    use super::RawHandle;
    use std::os::raw::{c_char, c_int};

    #[link(name = "psychfbxutility")]
    extern "C" {
        /// Allocates native resources for one scene. Never fails
        /// observably; aborts the process on allocation failure.
        pub fn CreateFBXHandler() -> *mut RawHandle;

        /// Frees all native resources. Must be called exactly once per
        /// `CreateFBXHandler`; the handle and every view derived from it
        /// are invalid afterwards.
        pub fn DestroyFBXHandler(handler: *mut RawHandle);

        /// Parses the file at `path` into the handle's internal buffer.
        /// Returns a [`super::LoadStatus`] code.
        pub fn LoadFBXFile(handler: *mut RawHandle, path: *const c_char) -> c_int;
    }
}
