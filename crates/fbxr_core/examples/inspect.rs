//! Example: Load and inspect an FBX file through the native library.
//!
//! Run with: cargo run --example inspect --features native -- models/SM_PistolArnold.fbx

use std::env;

use fbxr_core::fbx::load_fbx;
use fbxr_core::scene::Scene;
use fbxr_core::texture::TextureCache;

fn depth(scene: &Scene, index: u32) -> usize {
    let mut depth = 0;
    let mut current = index;
    while let Some(parent) = scene.object(current).and_then(|o| o.parent()) {
        depth += 1;
        current = parent;
    }
    depth
}

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        println!("Usage: inspect <path-to-fbx-file>");
        println!("\nExample:");
        println!("  cargo run --example inspect --features native -- models/SM_PistolArnold.fbx");
        return;
    }

    let path = &args[1];
    println!("Loading FBX file: {}", path);

    match load_fbx(path) {
        Ok(scene) => {
            println!("\n=== Scene ===");
            println!("Objects: {}", scene.object_count());
            println!("Total triangles: {}", scene.total_triangle_count());

            println!("\n--- Hierarchy ---");
            let mut cache = TextureCache::new();
            for object in scene.traverse() {
                let indent = "  ".repeat(depth(&scene, object.array_index) + 1);

                match &object.mesh {
                    Some(mesh) => {
                        println!(
                            "{}[{}] {} - {} vertices, {} triangles",
                            indent,
                            object.array_index,
                            object.name,
                            mesh.vertex_count(),
                            mesh.triangle_count()
                        );
                        println!(
                            "{}     Bounds: ({:.2}, {:.2}, {:.2}) to ({:.2}, {:.2}, {:.2})",
                            indent,
                            mesh.bounds.min.x,
                            mesh.bounds.min.y,
                            mesh.bounds.min.z,
                            mesh.bounds.max.x,
                            mesh.bounds.max.y,
                            mesh.bounds.max.z
                        );
                    }
                    None => {
                        println!("{}[{}] {} - group", indent, object.array_index, object.name);
                    }
                }

                for material in &object.materials {
                    println!(
                        "{}     Material: {:?}, {} textures",
                        indent, material.kind, material.texture_count
                    );
                    for (kind, texture) in cache.material_textures(material) {
                        match texture {
                            Some(texture) => println!(
                                "{}       {:?}: {}x{} ({})",
                                indent,
                                kind,
                                texture.width,
                                texture.height,
                                texture.path.display()
                            ),
                            None => println!("{}       {:?}: unresolved", indent, kind),
                        }
                    }
                }
            }
        }
        Err(e) => {
            eprintln!("Error loading FBX file: {}", e);
        }
    }
}
