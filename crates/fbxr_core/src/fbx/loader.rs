//! High-level FBX scene loading.
//!
//! The main entry point acquires a native handle, asks the native
//! library to parse the file, decodes the resulting buffer into an owned
//! [`Scene`], and releases the handle before returning — callers never
//! see native memory at all.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::scene::{MalformedScene, Scene};

use super::ffi::LoadStatus;

/// Errors surfaced by loading and decoding a scene.
///
/// The first four mirror the native loader's non-success result kinds;
/// after any of them the handle is still `Allocated` and reusable.
/// `Malformed` means the native parse succeeded but the buffer violated
/// a scene invariant, and names the offending object.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("incorrect file path: {0}")]
    IncorrectFilePath(PathBuf),

    #[error("there were no objects in the scene")]
    NoObjectsInScene,

    #[error("a scene node was not a geometry type")]
    NodeNotGeometryType,

    #[error("the scene root node was not found")]
    RootNodeNotFound,

    #[error(transparent)]
    Malformed(#[from] MalformedScene),
}

impl LoadError {
    /// Map a non-success native status to its error.
    pub(crate) fn from_status(status: LoadStatus, path: &Path) -> Self {
        match status {
            LoadStatus::Success => unreachable!("Success is not an error"),
            LoadStatus::IncorrectFilePath => LoadError::IncorrectFilePath(path.to_path_buf()),
            LoadStatus::NoObjectsInScene => LoadError::NoObjectsInScene,
            LoadStatus::NodeNotGeometryType => LoadError::NodeNotGeometryType,
            LoadStatus::RootNodeNotFound => LoadError::RootNodeNotFound,
        }
    }
}

/// Result type for loading operations.
pub type LoadResult<T> = Result<T, LoadError>;

/// Load an FBX file through the native library and decode it.
///
/// # Example
///
/// ```ignore
/// use fbxr_core::fbx::load_fbx;
///
/// let scene = load_fbx("models/SM_PistolArnold.fbx")?;
/// println!("{} objects, {} triangles",
///     scene.object_count(),
///     scene.total_triangle_count());
/// ```
#[cfg(feature = "native")]
pub fn load_fbx<P: AsRef<Path>>(path: P) -> LoadResult<Scene> {
    use super::handle::{FbxHandle, NativeBackend};

    let path = path.as_ref();
    let mut handle = FbxHandle::acquire(NativeBackend);
    let scene = handle.import(path)?;

    log::info!(
        "loaded {}: {} objects, {} triangles",
        path.display(),
        scene.object_count(),
        scene.total_triangle_count()
    );

    Ok(scene)
}
