//! Material and material-property types decoded from the native buffer.
//!
//! A native material is a fixed table of property slots, one per
//! [`PropertyKind`]. A slot is "texture-bearing" when the native parser
//! attached at least one texture path to it; the owning material declares
//! how many of its slots are texture-bearing via `texture_count`, and the
//! decoder verifies that declaration.

use fbxr_math::Vector4;

/// Number of material property slots. Every decoded material carries
/// exactly this many properties, in tag order.
pub const PROPERTY_SLOT_COUNT: usize = 11;

/// Material property slot tags, in native declaration order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum PropertyKind {
    Emissive = 0,
    Ambient,
    Diffuse,
    Normal,
    Bump,
    Transparency,
    Displacement,
    VectorDisplacement,
    Specular,
    Shininess,
    Reflection,
}

impl PropertyKind {
    /// All slot kinds in tag order.
    pub const ALL: [PropertyKind; PROPERTY_SLOT_COUNT] = [
        PropertyKind::Emissive,
        PropertyKind::Ambient,
        PropertyKind::Diffuse,
        PropertyKind::Normal,
        PropertyKind::Bump,
        PropertyKind::Transparency,
        PropertyKind::Displacement,
        PropertyKind::VectorDisplacement,
        PropertyKind::Specular,
        PropertyKind::Shininess,
        PropertyKind::Reflection,
    ];

    /// Decode a native tag. Returns `None` for values outside the table.
    pub fn from_tag(tag: i32) -> Option<Self> {
        Self::ALL.get(usize::try_from(tag).ok()?).copied()
    }

    /// The native integer tag for this kind.
    pub fn tag(self) -> i32 {
        self as i32
    }
}

/// Shading model reported by the native parser.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(i32)]
pub enum MaterialKind {
    Phong = 0,
    Lambert,
}

impl MaterialKind {
    pub fn from_tag(tag: i32) -> Option<Self> {
        match tag {
            0 => Some(MaterialKind::Phong),
            1 => Some(MaterialKind::Lambert),
            _ => None,
        }
    }
}

/// One decoded property slot.
///
/// Path fields are fully owned copies of the native strings; after decode
/// nothing here refers back to the native buffer.
#[derive(Clone, Debug, PartialEq)]
pub struct MaterialProperty {
    /// Which slot this is.
    pub kind: PropertyKind,

    /// Texture file name relative to the scene file, if any.
    pub relative_path: Option<String>,

    /// Absolute texture file path, if any.
    pub absolute_path: Option<String>,

    /// RGBA color, or a scalar in `x` depending on the slot semantics.
    pub value: Vector4,
}

impl MaterialProperty {
    /// An empty slot of the given kind.
    pub fn empty(kind: PropertyKind) -> Self {
        Self {
            kind,
            relative_path: None,
            absolute_path: None,
            value: Vector4::default(),
        }
    }

    /// True if the native parser attached a texture path to this slot.
    pub fn has_texture(&self) -> bool {
        self.relative_path.is_some() || self.absolute_path.is_some()
    }

    /// The scalar payload for slots that carry one (shininess, bump scale).
    pub fn scalar(&self) -> f32 {
        self.value.x
    }
}

/// A decoded material: a shading model plus one property per slot kind.
#[derive(Clone, Debug, PartialEq)]
pub struct Material {
    pub kind: MaterialKind,

    /// Exactly [`PROPERTY_SLOT_COUNT`] properties, indexed by tag.
    pub properties: Vec<MaterialProperty>,

    /// Number of texture-bearing slots, as declared by the native parser
    /// and verified at decode time.
    pub texture_count: u32,
}

impl Material {
    /// Look up a property slot by kind.
    pub fn property(&self, kind: PropertyKind) -> &MaterialProperty {
        &self.properties[kind.tag() as usize]
    }

    /// Iterate the texture-bearing slots in tag order.
    pub fn textured_properties(&self) -> impl Iterator<Item = &MaterialProperty> {
        self.properties.iter().filter(|p| p.has_texture())
    }
}

/// How a property slot maps onto engine shader inputs.
///
/// This replaces the enum-keyed switch of a hand-rolled integration: the
/// rendering side walks a material's texture-bearing slots and applies
/// whatever the binding for that slot prescribes. Slots with an
/// all-`None` binding are parsed and preserved but not wired to a shader
/// input.
#[derive(Clone, Copy, Debug)]
pub struct SlotBinding {
    pub kind: PropertyKind,

    /// Shader keyword to enable when the slot is texture-bearing.
    pub keyword: Option<&'static str>,

    /// Texture sampler slot name.
    pub texture_slot: Option<&'static str>,

    /// Color uniform name, fed from the slot's RGBA value.
    pub color_slot: Option<&'static str>,

    /// Scalar uniform name, fed from the slot value's scalar lane
    /// (see [`MaterialProperty::scalar`]).
    pub scalar_slot: Option<&'static str>,
}

/// Binding table, indexed by property tag.
pub const SLOT_BINDINGS: [SlotBinding; PROPERTY_SLOT_COUNT] = [
    SlotBinding {
        kind: PropertyKind::Emissive,
        keyword: Some("_EMISSION"),
        texture_slot: Some("_EmissionMap"),
        color_slot: Some("_EmissionColor"),
        scalar_slot: None,
    },
    SlotBinding {
        kind: PropertyKind::Ambient,
        keyword: None,
        texture_slot: None,
        color_slot: None,
        scalar_slot: None,
    },
    SlotBinding {
        kind: PropertyKind::Diffuse,
        keyword: Some("_MainTex"),
        texture_slot: Some("_MainTex"),
        color_slot: Some("_Color"),
        scalar_slot: None,
    },
    SlotBinding {
        kind: PropertyKind::Normal,
        keyword: Some("_BumpMap"),
        texture_slot: Some("_BumpMap"),
        color_slot: None,
        scalar_slot: Some("_BumpScale"),
    },
    SlotBinding {
        kind: PropertyKind::Bump,
        keyword: Some("_BumpMap"),
        texture_slot: Some("_BumpMap"),
        color_slot: None,
        scalar_slot: Some("_BumpScale"),
    },
    SlotBinding {
        kind: PropertyKind::Transparency,
        keyword: None,
        texture_slot: None,
        color_slot: None,
        scalar_slot: None,
    },
    SlotBinding {
        kind: PropertyKind::Displacement,
        keyword: None,
        texture_slot: None,
        color_slot: None,
        scalar_slot: None,
    },
    SlotBinding {
        kind: PropertyKind::VectorDisplacement,
        keyword: None,
        texture_slot: None,
        color_slot: None,
        scalar_slot: None,
    },
    SlotBinding {
        kind: PropertyKind::Specular,
        keyword: Some("_METALLICGLOSSMAP"),
        texture_slot: Some("_MetallicGlossMap"),
        color_slot: None,
        scalar_slot: Some("_Metallic"),
    },
    SlotBinding {
        kind: PropertyKind::Shininess,
        keyword: None,
        texture_slot: None,
        color_slot: None,
        scalar_slot: None,
    },
    SlotBinding {
        kind: PropertyKind::Reflection,
        keyword: Some("_Glossiness"),
        texture_slot: None,
        color_slot: None,
        scalar_slot: Some("_Glossiness"),
    },
];

/// Look up the shader binding for a property kind.
pub fn slot_binding(kind: PropertyKind) -> &'static SlotBinding {
    &SLOT_BINDINGS[kind.tag() as usize]
}
