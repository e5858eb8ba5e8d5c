// Re-export glam for convenience
pub use glam::*;

// FBXR math types
mod vector;
pub use vector::{Vector2, Vector3, Vector4};

mod aabb;
pub use aabb::Aabb;
