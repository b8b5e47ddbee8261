//! Geometry resolution: object names in, renderable meshes out.
//!
//! The viewer itself performs no geometric computation. A step only names
//! the objects it wants on screen; a [`GeometryResolver`] turns those names
//! into renderable mesh primitives. The shipped [`MeshLibrary`] resolves
//! names against mesh files on disk, but the seam is a trait so tests (and
//! future import backends) can substitute their own resolver.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Fixed lighting profile applied to every resolved mesh.
///
/// All steps render with the same material appearance; the values mirror
/// the renderer's lighting model directly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Lighting {
    /// Ambient light contribution.
    pub ambient: f32,
    /// Diffuse reflection intensity.
    pub diffuse: f32,
    /// Surface roughness.
    pub roughness: f32,
    /// Specular highlight intensity.
    pub specular: f32,
    /// Fresnel term.
    pub fresnel: f32,
    /// Face-normal perturbation epsilon.
    pub facenormalsepsilon: f32,
    /// Vertex-normal perturbation epsilon.
    pub vertexnormalsepsilon: f32,
}

impl Lighting {
    /// The uniform profile used for every mesh in every step.
    pub const fn uniform() -> Self {
        Self {
            ambient: 0.8,
            diffuse: 1.0,
            roughness: 0.5,
            specular: 0.2,
            fresnel: 0.0,
            facenormalsepsilon: 0.0,
            vertexnormalsepsilon: 0.0,
        }
    }
}

impl Default for Lighting {
    fn default() -> Self {
        Self::uniform()
    }
}

/// One renderable mesh, annotated with its display name and lighting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeshObject {
    /// Display name shown in the scene legend (the object name).
    pub name: String,
    /// Vertex positions.
    pub vertices: Vec<[f32; 3]>,
    /// Triangle vertex indices.
    pub triangles: Vec<[u32; 3]>,
    /// Base color of the mesh surface.
    pub color: String,
    /// Lighting profile (uniform across all steps).
    pub lighting: Lighting,
}

/// Errors raised while resolving object names to meshes.
///
/// These are surfaced to the caller unchanged; the viewer has no recovery
/// path for missing geometry.
#[derive(Debug, thiserror::Error)]
pub enum GeometryError {
    /// No mesh exists for the requested object name.
    #[error("no mesh found for object '{name}'")]
    MissingGeometry {
        /// The unresolvable object name.
        name: String,
    },

    /// The mesh file exists but could not be read.
    #[error("failed to read mesh for object '{name}' from {}: {source}", path.display())]
    Unreadable {
        /// The object name being resolved.
        name: String,
        /// Path of the mesh file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The mesh file is not a valid mesh payload.
    #[error("invalid mesh data for object '{name}': {source}")]
    InvalidMesh {
        /// The object name being resolved.
        name: String,
        /// Underlying decode error.
        #[source]
        source: serde_json::Error,
    },
}

/// Converts an ordered list of object names into renderable meshes.
pub trait GeometryResolver {
    /// Resolves every name to one mesh, preserving input order.
    fn resolve(&self, object_names: &[String]) -> Result<Vec<MeshObject>, GeometryError>;
}

/// On-disk mesh payload, one JSON file per object name.
#[derive(Debug, Deserialize)]
struct MeshFile {
    vertices: Vec<[f32; 3]>,
    triangles: Vec<[u32; 3]>,
    #[serde(default = "default_mesh_color")]
    color: String,
}

fn default_mesh_color() -> String {
    "#C8C8C8".to_string()
}

/// File-backed resolver: `<models_dir>/<object name>.json` per object.
#[derive(Debug, Clone)]
pub struct MeshLibrary {
    models_dir: PathBuf,
}

impl MeshLibrary {
    /// Creates a library rooted at the given models directory.
    pub fn new(models_dir: impl Into<PathBuf>) -> Self {
        Self {
            models_dir: models_dir.into(),
        }
    }

    /// Path of the mesh file for one object name.
    fn mesh_path(&self, name: &str) -> PathBuf {
        self.models_dir.join(format!("{name}.json"))
    }

    /// Returns the subset of `names` that have no mesh file.
    ///
    /// Used at startup to report steps referencing unresolvable objects.
    pub fn missing_objects(&self, names: &[String]) -> Vec<String> {
        names
            .iter()
            .filter(|name| !self.mesh_path(name).exists())
            .cloned()
            .collect()
    }

    /// Resolves one object name to a mesh.
    fn resolve_one(&self, name: &str) -> Result<MeshObject, GeometryError> {
        let path = self.mesh_path(name);
        if !path.exists() {
            return Err(GeometryError::MissingGeometry {
                name: name.to_string(),
            });
        }

        let content = std::fs::read_to_string(&path).map_err(|source| GeometryError::Unreadable {
            name: name.to_string(),
            path: path.clone(),
            source,
        })?;

        let mesh: MeshFile =
            serde_json::from_str(&content).map_err(|source| GeometryError::InvalidMesh {
                name: name.to_string(),
                source,
            })?;

        Ok(MeshObject {
            name: name.to_string(),
            vertices: mesh.vertices,
            triangles: mesh.triangles,
            color: mesh.color,
            lighting: Lighting::uniform(),
        })
    }
}

impl GeometryResolver for MeshLibrary {
    fn resolve(&self, object_names: &[String]) -> Result<Vec<MeshObject>, GeometryError> {
        object_names
            .iter()
            .map(|name| self.resolve_one(name))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn write_mesh(dir: &Path, name: &str) {
        let payload = serde_json::json!({
            "vertices": [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
            "triangles": [[0, 1, 2]],
            "color": "#8B5A2B",
        });
        fs::write(dir.join(format!("{name}.json")), payload.to_string()).unwrap();
    }

    #[test]
    fn test_resolve_preserves_order_and_annotates() {
        let dir = TempDir::new().unwrap();
        write_mesh(dir.path(), "body");
        write_mesh(dir.path(), "head");

        let library = MeshLibrary::new(dir.path());
        let meshes = library
            .resolve(&["head".to_string(), "body".to_string()])
            .unwrap();

        assert_eq!(meshes.len(), 2);
        assert_eq!(meshes[0].name, "head");
        assert_eq!(meshes[1].name, "body");
        assert_eq!(meshes[0].lighting, Lighting::uniform());
        assert_eq!(meshes[0].color, "#8B5A2B");
    }

    #[test]
    fn test_resolve_missing_mesh() {
        let dir = TempDir::new().unwrap();
        let library = MeshLibrary::new(dir.path());

        let err = library.resolve(&["ghost".to_string()]).unwrap_err();
        assert!(matches!(err, GeometryError::MissingGeometry { name } if name == "ghost"));
    }

    #[test]
    fn test_resolve_invalid_mesh_payload() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("bad.json"), "not json").unwrap();

        let library = MeshLibrary::new(dir.path());
        let err = library.resolve(&["bad".to_string()]).unwrap_err();
        assert!(matches!(err, GeometryError::InvalidMesh { name, .. } if name == "bad"));
    }

    #[test]
    fn test_missing_objects() {
        let dir = TempDir::new().unwrap();
        write_mesh(dir.path(), "body");

        let library = MeshLibrary::new(dir.path());
        let missing =
            library.missing_objects(&["body".to_string(), "ghost".to_string()]);
        assert_eq!(missing, vec!["ghost"]);
    }

    #[test]
    fn test_default_color_applied() {
        let dir = TempDir::new().unwrap();
        let payload = serde_json::json!({
            "vertices": [[0.0, 0.0, 0.0]],
            "triangles": [],
        });
        fs::write(dir.path().join("plain.json"), payload.to_string()).unwrap();

        let library = MeshLibrary::new(dir.path());
        let meshes = library.resolve(&["plain".to_string()]).unwrap();
        assert_eq!(meshes[0].color, "#C8C8C8");
    }
}
