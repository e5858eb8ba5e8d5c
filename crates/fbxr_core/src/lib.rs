//! FBXR Core - Native FBX import and owned scene types.
//!
//! This crate provides:
//!
//! - **Scene types**: `Scene`, `SceneObject`, `Mesh`, `Material`
//! - **Native interop**: handle lifecycle and record decoding over the
//!   native FBX utility library (behind the `native` feature)
//! - **Texture resolution**: lenient image loading for material slots
//!
//! # Example
//!
//! ```ignore
//! use fbxr_core::fbx::load_fbx;
//!
//! // Load an FBX scene through the native library
//! let scene = load_fbx("models/SM_PistolArnold.fbx")?;
//! println!("Loaded {} objects, {} triangles",
//!     scene.object_count(),
//!     scene.total_triangle_count());
//! ```

pub mod fbx;
pub mod graph;
pub mod material;
pub mod mesh;
pub mod scene;
pub mod texture;

// Re-export commonly used types
pub use fbx::{FbxHandle, HandleState, LoadError, LoadResult, LoadStatus, SceneBackend};
pub use material::{Material, MaterialKind, MaterialProperty, PropertyKind, SlotBinding};
pub use mesh::Mesh;
pub use scene::{MalformedScene, Scene, SceneObject};
pub use texture::{Texture, TextureCache};

#[cfg(feature = "native")]
pub use fbx::load_fbx;
