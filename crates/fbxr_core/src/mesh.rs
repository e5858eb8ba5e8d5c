//! Owned triangle-mesh geometry decoded from the native buffer.

use fbxr_math::{Aabb, Vec3, Vector2, Vector3};

use crate::scene::Invariant;

/// A decoded mesh: parallel per-vertex arrays plus triangle indices.
///
/// Unlike intermediate formats where normals or UVs may be absent, the
/// native parser always emits all three vertex streams at `vertex_count`
/// length, so they are not optional here. Geometry is fully owned; the
/// native buffer is never touched again after decode.
#[derive(Clone, Debug, PartialEq)]
pub struct Mesh {
    /// Vertex positions (one per vertex)
    pub positions: Vec<Vector3>,

    /// Vertex normals (one per vertex)
    pub normals: Vec<Vector3>,

    /// UV coordinates (one per vertex)
    pub uvs: Vec<Vector2>,

    /// Triangle indices (every 3 indices form a triangle)
    pub indices: Vec<u32>,

    /// Axis-aligned bounding box of the positions
    pub bounds: Aabb,
}

impl Mesh {
    /// Assemble a mesh and compute its bounds.
    pub fn new(
        positions: Vec<Vector3>,
        normals: Vec<Vector3>,
        uvs: Vec<Vector2>,
        indices: Vec<u32>,
    ) -> Self {
        let bounds = Aabb::from_iter(positions.iter().map(|&p| Vec3::from(p)));
        Self {
            positions,
            normals,
            uvs,
            indices,
            bounds,
        }
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of indices.
    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    /// Number of triangles.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Iterate triangles as index triples.
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }

    /// Check the index-stream invariants: the index count must be a
    /// multiple of 3 and every index must name an existing vertex.
    pub fn validate(&self) -> Result<(), Invariant> {
        let vertex_count = self.positions.len() as u32;

        if self.indices.len() % 3 != 0 {
            return Err(Invariant::IndexCountNotTriangles {
                index_count: self.indices.len() as u32,
            });
        }

        for &index in &self.indices {
            if index >= vertex_count {
                return Err(Invariant::IndexOutOfRange {
                    index,
                    vertex_count,
                });
            }
        }

        Ok(())
    }
}
