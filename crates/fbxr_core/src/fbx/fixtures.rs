//! Test fixtures: native-layout scene buffers built from Rust-owned
//! storage, plus an in-process stand-in for the native loader.
//!
//! `SceneFixture` assembles real `#[repr(C)]` records whose embedded
//! pointers target heap allocations owned by the fixture, so the decoder
//! runs against exactly the memory shape the native library produces —
//! including malformed shapes the specs can dial in.

use std::cell::RefCell;
use std::ffi::CString;
use std::os::raw::c_char;
use std::path::{Path, PathBuf};
use std::ptr;
use std::rc::Rc;

use fbxr_math::{Vector2, Vector3, Vector4};

use crate::material::{PropertyKind, PROPERTY_SLOT_COUNT};

use super::ffi::{
    LoadStatus, RawHandle, RawMaterial, RawMesh, RawObject, RawProperty, RawScene,
};
use super::handle::SceneBackend;

/// Path the stub backend answers with `Success`.
pub(crate) const GOOD_PATH: &str = "model.fbx";

/// Mesh contents for one object.
#[derive(Clone, Debug)]
pub(crate) struct MeshSpec {
    pub positions: Vec<Vector3>,
    pub normals: Vec<Vector3>,
    pub uvs: Vec<Vector2>,
    pub indices: Vec<u32>,
}

impl MeshSpec {
    /// A single valid triangle.
    pub fn triangle() -> Self {
        Self {
            positions: vec![
                Vector3::new(0.0, 0.0, 0.0),
                Vector3::new(1.0, 0.0, 0.0),
                Vector3::new(0.0, 1.0, 0.0),
            ],
            normals: vec![Vector3::new(0.0, 0.0, 1.0); 3],
            uvs: vec![
                Vector2::new(0.0, 0.0),
                Vector2::new(1.0, 0.0),
                Vector2::new(0.0, 1.0),
            ],
            indices: vec![0, 1, 2],
        }
    }

    /// A mesh record with zero counts, as the native parser emits for
    /// grouping nodes.
    pub fn empty() -> Self {
        Self {
            positions: Vec::new(),
            normals: Vec::new(),
            uvs: Vec::new(),
            indices: Vec::new(),
        }
    }
}

/// Material contents, one entry per property slot. Fields are public so
/// tests can produce malformed records (bad tags, wrong counts).
#[derive(Clone, Debug)]
pub(crate) struct MaterialSpec {
    pub tag: i32,
    pub texture_count: u32,
    pub property_tags: [i32; PROPERTY_SLOT_COUNT],
    pub relative_paths: [Option<String>; PROPERTY_SLOT_COUNT],
    pub absolute_paths: [Option<String>; PROPERTY_SLOT_COUNT],
    pub values: [Vector4; PROPERTY_SLOT_COUNT],
}

impl MaterialSpec {
    /// A Phong material with all slots empty.
    pub fn phong() -> Self {
        Self {
            tag: 0,
            texture_count: 0,
            property_tags: std::array::from_fn(|i| i as i32),
            relative_paths: std::array::from_fn(|_| None),
            absolute_paths: std::array::from_fn(|_| None),
            values: [Vector4::default(); PROPERTY_SLOT_COUNT],
        }
    }

    /// Attach both texture paths to a slot and bump the declared count.
    pub fn with_texture(mut self, kind: PropertyKind, relative: &str, absolute: &str) -> Self {
        let slot = kind.tag() as usize;
        self.relative_paths[slot] = Some(relative.to_string());
        self.absolute_paths[slot] = Some(absolute.to_string());
        self.texture_count += 1;
        self
    }

    /// Set the color/scalar payload of a slot.
    pub fn with_value(mut self, kind: PropertyKind, value: Vector4) -> Self {
        self.values[kind.tag() as usize] = value;
        self
    }
}

/// One object in the fixture scene.
#[derive(Clone, Debug)]
pub(crate) struct ObjectSpec {
    pub name: String,
    pub parent_index: i32,
    pub array_index: u32,
    pub child_count: u32,
    pub mesh: Option<MeshSpec>,
    pub materials: Vec<MaterialSpec>,
}

impl ObjectSpec {
    pub fn new(name: &str, parent_index: i32, array_index: u32) -> Self {
        Self {
            name: name.to_string(),
            parent_index,
            array_index,
            child_count: 0,
            mesh: None,
            materials: Vec::new(),
        }
    }

    pub fn with_mesh(mut self, mesh: MeshSpec) -> Self {
        self.mesh = Some(mesh);
        self
    }

    pub fn with_material(mut self, material: MaterialSpec) -> Self {
        self.materials.push(material);
        self
    }
}

/// A fully assembled native-layout scene buffer.
///
/// All embedded pointers target boxed allocations owned by this struct,
/// so they stay valid until the fixture is dropped — exactly the lifetime
/// contract of the native handle's buffer.
pub(crate) struct SceneFixture {
    scene: Box<RawScene>,
    _objects: Box<[RawObject]>,
    _meshes: Vec<Box<RawMesh>>,
    _materials: Vec<Box<[RawMaterial]>>,
    _properties: Vec<Box<[RawProperty]>>,
    _positions: Vec<Box<[Vector3]>>,
    _normals: Vec<Box<[Vector3]>>,
    _uvs: Vec<Box<[Vector2]>>,
    _indices: Vec<Box<[u32]>>,
    _strings: Vec<CString>,
}

impl SceneFixture {
    pub fn build(specs: Vec<ObjectSpec>) -> Self {
        let mut fixture = Self {
            scene: Box::new(RawScene {
                objects: ptr::null(),
                object_count: 0,
            }),
            _objects: Vec::new().into_boxed_slice(),
            _meshes: Vec::new(),
            _materials: Vec::new(),
            _properties: Vec::new(),
            _positions: Vec::new(),
            _normals: Vec::new(),
            _uvs: Vec::new(),
            _indices: Vec::new(),
            _strings: Vec::new(),
        };

        let mut raw_objects = Vec::with_capacity(specs.len());
        for spec in &specs {
            let name = fixture.intern(&spec.name);
            let mesh = match &spec.mesh {
                Some(mesh) => fixture.push_mesh(mesh),
                None => ptr::null(),
            };
            let materials = fixture.push_materials(&spec.materials);

            raw_objects.push(RawObject {
                parent_index: spec.parent_index,
                children: ptr::null(),
                mesh,
                materials,
                child_count: spec.child_count,
                material_count: spec.materials.len() as u32,
                name,
                array_index: spec.array_index,
            });
        }

        fixture._objects = raw_objects.into_boxed_slice();
        fixture.scene.objects = fixture._objects.as_ptr();
        fixture.scene.object_count = fixture._objects.len() as u32;
        fixture
    }

    /// The scene record, as the native handle would expose it.
    pub fn raw_scene(&self) -> *const RawScene {
        &*self.scene
    }

    fn intern(&mut self, text: &str) -> *const c_char {
        let owned = CString::new(text).expect("fixture strings must not contain NUL");
        let ptr = owned.as_ptr();
        self._strings.push(owned);
        ptr
    }

    fn push_mesh(&mut self, spec: &MeshSpec) -> *const RawMesh {
        let positions = spec.positions.clone().into_boxed_slice();
        let normals = spec.normals.clone().into_boxed_slice();
        let uvs = spec.uvs.clone().into_boxed_slice();
        let indices = spec.indices.clone().into_boxed_slice();

        let raw = Box::new(RawMesh {
            positions: positions.as_ptr(),
            normals: normals.as_ptr(),
            uvs: uvs.as_ptr(),
            indices: indices.as_ptr(),
            vertex_count: positions.len() as u32,
            index_count: indices.len() as u32,
        });
        let ptr = &*raw as *const RawMesh;

        self._positions.push(positions);
        self._normals.push(normals);
        self._uvs.push(uvs);
        self._indices.push(indices);
        self._meshes.push(raw);
        ptr
    }

    fn push_materials(&mut self, specs: &[MaterialSpec]) -> *const RawMaterial {
        if specs.is_empty() {
            return ptr::null();
        }

        let mut raws = Vec::with_capacity(specs.len());
        for spec in specs {
            let mut properties = Vec::with_capacity(PROPERTY_SLOT_COUNT);
            for slot in 0..PROPERTY_SLOT_COUNT {
                let relative_path = match &spec.relative_paths[slot] {
                    Some(path) => self.intern(path),
                    None => ptr::null(),
                };
                let absolute_path = match &spec.absolute_paths[slot] {
                    Some(path) => self.intern(path),
                    None => ptr::null(),
                };
                properties.push(RawProperty {
                    tag: spec.property_tags[slot],
                    relative_path,
                    absolute_path,
                    value: spec.values[slot],
                });
            }

            let properties = properties.into_boxed_slice();
            raws.push(RawMaterial {
                tag: spec.tag,
                properties: properties.as_ptr(),
                texture_count: spec.texture_count,
            });
            self._properties.push(properties);
        }

        let raws = raws.into_boxed_slice();
        let ptr = raws.as_ptr();
        self._materials.push(raws);
        ptr
    }
}

/// Shared observation log for [`StubBackend`] calls.
#[derive(Debug, Default)]
pub(crate) struct StubLog {
    pub acquires: u32,
    pub releases: u32,
    pub loads: Vec<PathBuf>,
}

/// In-process native loader stand-in.
///
/// Answers `Success` for [`GOOD_PATH`] (serving the configured fixture
/// through the handle, as the native library does on a successful parse)
/// and `IncorrectFilePath` for anything else, unless a fixed failure
/// status is configured.
pub(crate) struct StubBackend {
    handle: Box<RawHandle>,
    fixture: Option<SceneFixture>,
    forced_status: Option<LoadStatus>,
    log: Rc<RefCell<StubLog>>,
}

impl StubBackend {
    /// A backend that parses [`GOOD_PATH`] into the given fixture.
    pub fn serving(fixture: SceneFixture) -> Self {
        Self {
            handle: Box::new(RawHandle { scene: ptr::null() }),
            fixture: Some(fixture),
            forced_status: None,
            log: Rc::new(RefCell::new(StubLog::default())),
        }
    }

    /// A backend that fails every load with the given status.
    pub fn failing(status: LoadStatus) -> Self {
        assert_ne!(status, LoadStatus::Success);
        Self {
            handle: Box::new(RawHandle { scene: ptr::null() }),
            fixture: None,
            forced_status: Some(status),
            log: Rc::new(RefCell::new(StubLog::default())),
        }
    }

    /// Clone of the shared call log, for asserting after the backend has
    /// been consumed by a handle.
    pub fn log(&self) -> Rc<RefCell<StubLog>> {
        Rc::clone(&self.log)
    }
}

impl SceneBackend for StubBackend {
    fn acquire(&mut self) -> *mut RawHandle {
        self.log.borrow_mut().acquires += 1;
        self.handle.scene = ptr::null();
        &mut *self.handle
    }

    fn load(&mut self, handle: *mut RawHandle, path: &Path) -> LoadStatus {
        self.log.borrow_mut().loads.push(path.to_path_buf());

        let status = match self.forced_status {
            Some(status) => status,
            None if path == Path::new(GOOD_PATH) => LoadStatus::Success,
            None => LoadStatus::IncorrectFilePath,
        };

        if status == LoadStatus::Success {
            let scene = self
                .fixture
                .as_ref()
                .map(|f| f.raw_scene())
                .unwrap_or(ptr::null());
            unsafe { (*handle).scene = scene };
        }

        status
    }

    fn release(&mut self, handle: *mut RawHandle) {
        self.log.borrow_mut().releases += 1;
        unsafe { (*handle).scene = ptr::null() };
    }
}
