//! Scene handle lifecycle: acquisition, load, one decode, guaranteed
//! release.
//!
//! The native handle walks `Unallocated -> Allocated -> Loaded ->
//! Released`. Construction performs the acquire, so `Unallocated` never
//! exists as a value; `Drop` performs the release, so `Released` is
//! reached exactly once on every exit path. A failed load keeps the
//! handle `Allocated` and reusable for a retry with a different path.

use std::path::Path;
use std::ptr;

use crate::scene::{MalformedScene, Scene};

use super::decode::decode_scene;
use super::ffi::{LoadStatus, RawHandle};
use super::loader::LoadError;

/// The native loader contract consumed by [`FbxHandle`].
///
/// `acquire` never fails observably (the native library aborts rather
/// than report allocation failure). `release` must be safe to call
/// exactly once per acquire; the handle type enforces the "exactly once"
/// part.
pub trait SceneBackend {
    /// Allocate native resources for one scene.
    fn acquire(&mut self) -> *mut RawHandle;

    /// Parse the file at `path` into the handle's buffer.
    fn load(&mut self, handle: *mut RawHandle, path: &Path) -> LoadStatus;

    /// Free all native resources behind the handle.
    fn release(&mut self, handle: *mut RawHandle);
}

/// Lifecycle states of an acquired handle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HandleState {
    /// Acquired, nothing loaded yet (or the last load failed).
    Allocated,
    /// The last load succeeded; the native buffer is valid for decode.
    Loaded,
    /// Native resources have been freed.
    Released,
}

/// Exclusive owner of one native scene handle.
///
/// All native memory derived from the handle is invalid once it is
/// released; the decoded [`Scene`] is fully owned and unaffected.
pub struct FbxHandle<B: SceneBackend> {
    backend: B,
    raw: *mut RawHandle,
    state: HandleState,
}

impl<B: SceneBackend> FbxHandle<B> {
    /// Acquire a handle from the native loader.
    pub fn acquire(mut backend: B) -> Self {
        let raw = backend.acquire();
        Self {
            backend,
            raw,
            state: HandleState::Allocated,
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> HandleState {
        self.state
    }

    /// Ask the native loader to parse `path` into this handle.
    ///
    /// On failure the handle is `Allocated` and may be retried with a
    /// different path. A failed reload also drops a previous `Loaded`
    /// state: the native loader may have torn down the old buffer while
    /// rejecting the new file, so it must not be decoded again.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<(), LoadError> {
        assert_ne!(
            self.state,
            HandleState::Released,
            "load called on a released FBX handle"
        );

        let path = path.as_ref();
        match self.backend.load(self.raw, path) {
            LoadStatus::Success => {
                self.state = HandleState::Loaded;
                Ok(())
            }
            status => {
                log::warn!("native load of {} failed: {:?}", path.display(), status);
                self.state = HandleState::Allocated;
                Err(LoadError::from_status(status, path))
            }
        }
    }

    /// Decode the loaded native buffer into an owned, validated scene.
    ///
    /// Valid only in the `Loaded` state; calling it earlier or after
    /// release is a programming error and panics.
    pub fn decode(&self) -> Result<Scene, MalformedScene> {
        match self.state {
            HandleState::Loaded => {}
            HandleState::Allocated => panic!("decode called before a successful load"),
            HandleState::Released => panic!("decode called on a released FBX handle"),
        }

        let scene = unsafe { (*self.raw).scene };
        assert!(
            !scene.is_null(),
            "native loader reported success but the handle holds no scene"
        );

        unsafe { decode_scene(&*scene) }
    }

    /// Load and decode in one step.
    pub fn import(&mut self, path: impl AsRef<Path>) -> Result<Scene, LoadError> {
        self.load(path)?;
        Ok(self.decode()?)
    }

    /// Release the handle now instead of at scope exit.
    pub fn release(self) {
        // Drop does the work.
    }

    fn release_now(&mut self) {
        if self.state != HandleState::Released {
            self.backend.release(self.raw);
            self.raw = ptr::null_mut();
            self.state = HandleState::Released;
        }
    }
}

impl<B: SceneBackend> Drop for FbxHandle<B> {
    fn drop(&mut self) {
        self.release_now();
    }
}

/// [`SceneBackend`] implemented over the native FBX utility library.
#[cfg(feature = "native")]
#[derive(Debug, Default)]
pub struct NativeBackend;

#[cfg(feature = "native")]
impl SceneBackend for NativeBackend {
    fn acquire(&mut self) -> *mut RawHandle {
        unsafe { super::ffi::native::CreateFBXHandler() }
    }

    fn load(&mut self, handle: *mut RawHandle, path: &Path) -> LoadStatus {
        use std::ffi::CString;

        // Paths the native loader cannot even receive cannot name an
        // existing file.
        let Some(text) = path.to_str() else {
            return LoadStatus::IncorrectFilePath;
        };
        let Ok(c_path) = CString::new(text) else {
            return LoadStatus::IncorrectFilePath;
        };

        let code = unsafe { super::ffi::native::LoadFBXFile(handle, c_path.as_ptr()) };
        LoadStatus::from_code(code)
            .unwrap_or_else(|| panic!("native loader returned unknown result code {code}"))
    }

    fn release(&mut self, handle: *mut RawHandle) {
        unsafe { super::ffi::native::DestroyFBXHandler(handle) }
    }
}
