//! Typed loading of the parts and steps catalogs.

use std::path::{Path, PathBuf};

use crate::dataset::delimited::Records;
use crate::dataset::DatasetLoadError;
use crate::models::{Part, Step, Table};

/// File name of the parts/materials catalog inside the data directory.
pub const PARTS_FILE: &str = "materials.csv";

/// File name of the steps catalog inside the data directory.
pub const STEPS_FILE: &str = "steps.csv";

/// Loads the dataset files from a data directory.
#[derive(Debug, Clone)]
pub struct DatasetLoader {
    data_dir: PathBuf,
}

impl DatasetLoader {
    /// Creates a loader rooted at the given data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Loads the parts catalog into a keyed table.
    pub fn load_parts(&self) -> Result<Table<Part>, DatasetLoadError> {
        let content = self.read(PARTS_FILE)?;
        let records = Records::parse(PARTS_FILE, &content)?;

        let key = records.require_column(PARTS_FILE, "key")?;
        let name = records.require_column(PARTS_FILE, "name")?;
        let category = records.require_column(PARTS_FILE, "category")?;
        let color = records.require_column(PARTS_FILE, "color")?;

        let parts = records
            .rows()
            .iter()
            .map(|row| Part {
                key: row[key].clone(),
                name: row[name].clone(),
                category: row[category].clone(),
                color: row[color].clone(),
            })
            .collect();

        Table::from_rows(parts).map_err(|source| DatasetLoadError::InvalidKeys {
            file: PARTS_FILE.to_string(),
            source,
        })
    }

    /// Loads the steps catalog into a keyed table.
    ///
    /// The `object_names` column is post-processed into an ordered list;
    /// empty `tools_img_path` and `notifications` values become `None`.
    pub fn load_steps(&self) -> Result<Table<Step>, DatasetLoadError> {
        let content = self.read(STEPS_FILE)?;
        let records = Records::parse(STEPS_FILE, &content)?;

        let key = records.require_column(STEPS_FILE, "key")?;
        let name = records.require_column(STEPS_FILE, "name")?;
        let description = records.require_column(STEPS_FILE, "description")?;
        let tools = records.require_column(STEPS_FILE, "tools")?;
        let tools_img_path = records.require_column(STEPS_FILE, "tools_img_path")?;
        let notifications = records.require_column(STEPS_FILE, "notifications")?;
        let object_names = records.require_column(STEPS_FILE, "object_names")?;

        let steps: Vec<Step> = records
            .rows()
            .iter()
            .map(|row| Step {
                key: row[key].clone(),
                name: row[name].clone(),
                description: row[description].clone(),
                tools: row[tools].clone(),
                tools_img_path: optional(&row[tools_img_path]),
                notifications: optional(&row[notifications]),
                object_names: Step::parse_object_names(&row[object_names]),
            })
            .collect();

        if steps.is_empty() {
            return Err(DatasetLoadError::Empty {
                file: STEPS_FILE.to_string(),
            });
        }

        Table::from_rows(steps).map_err(|source| DatasetLoadError::InvalidKeys {
            file: STEPS_FILE.to_string(),
            source,
        })
    }

    /// Reads a dataset file into a UTF-8 string.
    fn read(&self, file: &str) -> Result<String, DatasetLoadError> {
        let path = self.data_dir.join(file);
        if !path.exists() {
            return Err(DatasetLoadError::FileNotFound { path });
        }

        let bytes = std::fs::read(&path).map_err(|source| DatasetLoadError::Io {
            path: path.clone(),
            source,
        })?;

        String::from_utf8(bytes).map_err(|_| DatasetLoadError::Encoding { path })
    }
}

/// Both catalogs, loaded together and shared read-only afterwards.
#[derive(Debug, Clone)]
pub struct Datasets {
    /// Parts/materials catalog.
    pub parts: Table<Part>,
    /// Steps catalog; row order defines navigation order.
    pub steps: Table<Step>,
}

impl Datasets {
    /// Loads both catalogs from the data directory.
    pub fn load(data_dir: &Path) -> Result<Self, DatasetLoadError> {
        let loader = DatasetLoader::new(data_dir);
        Ok(Self {
            parts: loader.load_parts()?,
            steps: loader.load_steps()?,
        })
    }

    /// Returns every object name referenced by any step, in step order,
    /// without duplicates.
    pub fn referenced_object_names(&self) -> Vec<String> {
        let mut seen = std::collections::HashSet::new();
        let mut names = Vec::new();
        for step in &self.steps {
            for name in &step.object_names {
                if seen.insert(name.clone()) {
                    names.push(name.clone());
                }
            }
        }
        names
    }
}

/// Maps an empty field to `None`.
fn optional(field: &str) -> Option<String> {
    if field.is_empty() {
        None
    } else {
        Some(field.to_string())
    }
}
