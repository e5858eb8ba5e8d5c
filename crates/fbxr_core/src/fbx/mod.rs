//! Native FBX interop: raw layouts, bounds-checked views, record
//! decoders, and the handle lifecycle.
//!
//! The decoding pipeline is strictly one-directional: the native library
//! parses a file into a flat buffer behind an opaque handle, one eager
//! decode pass copies and validates everything into owned scene types,
//! and the handle is released. Nothing decoded retains a pointer into
//! native memory.

mod decode;
mod ffi;
mod handle;
mod loader;
mod view;

#[cfg(test)]
pub(crate) mod fixtures;

pub use ffi::{
    LoadStatus, RawHandle, RawMaterial, RawMesh, RawObject, RawProperty, RawScene,
};
pub use handle::{FbxHandle, HandleState, SceneBackend};
pub use loader::{LoadError, LoadResult};

#[cfg(feature = "native")]
pub use handle::NativeBackend;
#[cfg(feature = "native")]
pub use loader::load_fbx;
