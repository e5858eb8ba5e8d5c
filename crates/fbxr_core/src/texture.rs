//! Texture loading for material property slots.
//!
//! The image decoder is a lenient collaborator: a missing or unreadable
//! file is an absent texture, never an error, because imported scenes
//! routinely reference paths that only existed on the authoring machine.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::material::{Material, PropertyKind};

/// A decoded texture in RGBA8 form.
#[derive(Clone, Debug)]
pub struct Texture {
    /// Width in pixels
    pub width: u32,

    /// Height in pixels
    pub height: u32,

    /// Pixel data, `[r, g, b, a]` per pixel, row-major
    pub pixels: Vec<[u8; 4]>,

    /// Source file path (for debugging)
    pub path: PathBuf,
}

/// Decode an image file, or `None` if the path does not exist or the
/// content is unreadable.
pub fn load_image(path: &Path) -> Option<Texture> {
    let image = match image::open(path) {
        Ok(image) => image.into_rgba8(),
        Err(err) => {
            log::debug!("texture {} not decodable: {}", path.display(), err);
            return None;
        }
    };

    let (width, height) = image.dimensions();
    let pixels = image.pixels().map(|p| p.0).collect();

    Some(Texture {
        width,
        height,
        pixels,
        path: path.to_path_buf(),
    })
}

/// Path-keyed cache over [`load_image`].
///
/// Imported materials frequently share textures across objects; the
/// cache keeps one decoded copy per path, including a negative entry for
/// paths that failed to decode so they are not retried per material.
#[derive(Debug, Default)]
pub struct TextureCache {
    textures: HashMap<PathBuf, Option<Arc<Texture>>>,
}

impl TextureCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch a texture, decoding it on first use.
    pub fn get_or_load(&mut self, path: &Path) -> Option<Arc<Texture>> {
        self.textures
            .entry(path.to_path_buf())
            .or_insert_with(|| load_image(path).map(Arc::new))
            .clone()
    }

    /// Resolve the textures of a material's texture-bearing slots.
    ///
    /// Returns one entry per texture-bearing slot in tag order. The
    /// absolute path is preferred; the relative path is a fallback for
    /// scenes moved between machines. A material with `texture_count`
    /// of 0 performs no lookups at all.
    pub fn material_textures(
        &mut self,
        material: &Material,
    ) -> Vec<(PropertyKind, Option<Arc<Texture>>)> {
        material
            .textured_properties()
            .map(|property| {
                let path = property
                    .absolute_path
                    .as_deref()
                    .or(property.relative_path.as_deref());
                let texture = path.and_then(|p| self.get_or_load(Path::new(p)));
                (property.kind, texture)
            })
            .collect()
    }

    /// Number of cached entries, including negative ones.
    pub fn len(&self) -> usize {
        self.textures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }
}
