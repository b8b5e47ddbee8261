//! Shared test fixtures for integration tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use std::fs;
use std::path::Path;

use tempfile::TempDir;

use stepview::config::Config;

/// Steps catalog used by most tests: three steps in row order, the middle
/// one carrying a notification and a tool image.
pub const STEPS_CSV: &str = "\
key;name;description;tools;tools_img_path;notifications;object_names
step1;Base plate;Place the base plate;None;;;base
step2;Glue legs;Glue the legs to the body;Wood glue;glue.png;Ensure good ventilation;body, leg_fl ,leg_fr
step3;Attach head;Push the head onto the neck;Mallet;;;body,head
";

/// Parts catalog with two categories.
pub const MATERIALS_CSV: &str = "\
key;name;category;color
comp1;Wooden cube;Wooden parts;#8B5A2B
comp2;Wooden cylinder;Wooden parts;#A0522D
comp3;Connector S;Connectors;#D9D9D9
";

/// Writes both catalogs and a mesh file per referenced object name into
/// `dir`, mirroring the layout of a real data directory.
pub fn write_datasets(dir: &Path) {
    fs::write(dir.join("materials.csv"), MATERIALS_CSV).expect("Failed to write materials.csv");
    fs::write(dir.join("steps.csv"), STEPS_CSV).expect("Failed to write steps.csv");

    let models = dir.join("models");
    fs::create_dir_all(&models).expect("Failed to create models dir");
    for name in ["base", "body", "leg_fl", "leg_fr", "head"] {
        write_mesh(&models, name);
    }
}

/// Writes one minimal triangle mesh for an object name.
pub fn write_mesh(models_dir: &Path, name: &str) {
    let payload = serde_json::json!({
        "vertices": [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
        "triangles": [[0, 1, 2]],
        "color": "#8B5A2B",
    });
    fs::write(models_dir.join(format!("{name}.json")), payload.to_string())
        .expect("Failed to write mesh file");
}

/// Creates a populated temporary data directory and a config pointing at it.
pub fn test_config() -> (Config, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    write_datasets(temp_dir.path());

    let mut config = Config::default();
    config.paths.data_dir = Some(temp_dir.path().to_path_buf());

    (config, temp_dir)
}
