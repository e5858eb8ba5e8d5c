//! Record decoders: raw native records to owned, validated scene types.
//!
//! Decoding is eager and total. Every counted sub-array is copied into
//! owned storage here, in one pass, because the native memory is only
//! guaranteed to live as long as the handle — nothing downstream may ever
//! chase a pointer back into the buffer. Any invariant violation aborts
//! the whole decode; no partial scene escapes.

use crate::graph::SceneGraph;
use crate::material::{
    Material, MaterialKind, MaterialProperty, PropertyKind, PROPERTY_SLOT_COUNT,
};
use crate::mesh::Mesh;
use crate::scene::{Invariant, MalformedScene, Scene, SceneObject};

use super::ffi::{RawMaterial, RawMesh, RawObject, RawScene};
use super::view::{read_cstr, read_record, read_records};

/// Decode the whole scene record into a validated [`Scene`].
///
/// # Safety
///
/// `raw` must be the scene record of a successfully loaded native handle,
/// with every embedded pointer and count consistent with the native
/// layout, and the handle must stay alive for the duration of the call.
pub(crate) unsafe fn decode_scene(raw: &RawScene) -> Result<Scene, MalformedScene> {
    let raw_objects = read_records(raw.objects, raw.object_count);

    let mut objects = Vec::with_capacity(raw_objects.len());
    for raw_object in &raw_objects {
        objects.push(decode_object(raw_object)?);
    }

    let graph = SceneGraph::build(&objects)?;
    let (root_index, children) = graph.into_parts();

    log::debug!(
        "decoded scene: {} objects, root {}, {} triangles",
        objects.len(),
        root_index,
        objects
            .iter()
            .filter_map(|o| o.mesh.as_ref())
            .map(|m| m.triangle_count())
            .sum::<usize>()
    );

    Ok(Scene::from_parts(objects, root_index, children))
}

/// Decode one object record, including its mesh and materials.
unsafe fn decode_object(raw: &RawObject) -> Result<SceneObject, MalformedScene> {
    let array_index = raw.array_index;

    let name = read_cstr(raw.name).unwrap_or_default();

    // Non-geometry nodes surface either a null mesh pointer or an empty
    // mesh record; both decode to no mesh at all.
    let mesh = match read_record(raw.mesh) {
        Some(raw_mesh) if raw_mesh.vertex_count > 0 => {
            Some(decode_mesh(&raw_mesh, array_index)?)
        }
        _ => None,
    };

    let materials = read_records(raw.materials, raw.material_count)
        .iter()
        .map(|raw_material| decode_material(raw_material, array_index))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(SceneObject {
        name,
        array_index,
        parent_index: raw.parent_index,
        child_count: raw.child_count,
        mesh,
        materials,
    })
}

unsafe fn decode_mesh(raw: &RawMesh, array_index: u32) -> Result<Mesh, MalformedScene> {
    let mesh = Mesh::new(
        read_records(raw.positions, raw.vertex_count),
        read_records(raw.normals, raw.vertex_count),
        read_records(raw.uvs, raw.vertex_count),
        read_records(raw.indices, raw.index_count),
    );

    mesh.validate()
        .map_err(|invariant| MalformedScene::new(array_index, invariant))?;

    Ok(mesh)
}

unsafe fn decode_material(
    raw: &RawMaterial,
    array_index: u32,
) -> Result<Material, MalformedScene> {
    let kind = MaterialKind::from_tag(raw.tag)
        .ok_or_else(|| MalformedScene::new(array_index, Invariant::UnknownMaterialTag(raw.tag)))?;

    // The slot table always has exactly one record per property kind.
    // Slots are keyed by their decoded tag rather than trusted to arrive
    // in declaration order.
    let mut properties: Vec<MaterialProperty> = PropertyKind::ALL
        .iter()
        .map(|&kind| MaterialProperty::empty(kind))
        .collect();

    for raw_property in read_records(raw.properties, PROPERTY_SLOT_COUNT as u32) {
        let kind = PropertyKind::from_tag(raw_property.tag).ok_or_else(|| {
            MalformedScene::new(array_index, Invariant::UnknownPropertyTag(raw_property.tag))
        })?;

        properties[kind.tag() as usize] = MaterialProperty {
            kind,
            relative_path: read_cstr(raw_property.relative_path),
            absolute_path: read_cstr(raw_property.absolute_path),
            value: raw_property.value,
        };
    }

    let actual = properties.iter().filter(|p| p.has_texture()).count() as u32;
    if actual != raw.texture_count {
        return Err(MalformedScene::new(
            array_index,
            Invariant::TextureCountMismatch {
                declared: raw.texture_count,
                actual,
            },
        ));
    }

    Ok(Material {
        kind,
        properties,
        texture_count: raw.texture_count,
    })
}
