//! Dataset collaborator: the ordered countries and their places.
//!
//! The carousel core assumes at least one group and at least one item per
//! group. Files are validated here, at the load boundary, so the core never
//! sees an empty dataset.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::app::types::{Group, Item};

pub trait Dataset {
    /// Title shown above the carousels.
    fn region(&self) -> &str;
    fn groups(&self) -> &[Group];
}

#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid TOML dataset: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid JSON dataset: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported dataset extension `{0}` (expected .toml or .json)")]
    UnsupportedFormat(String),

    #[error("dataset contains no countries")]
    Empty,

    #[error("country `{0}` has no places")]
    EmptyGroup(String),
}

fn default_region() -> String {
    "Asia".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaticDataset {
    #[serde(default = "default_region")]
    pub region: String,
    #[serde(alias = "countries")]
    pub groups: Vec<Group>,
}

impl StaticDataset {
    pub fn new(region: impl Into<String>, groups: Vec<Group>) -> Result<Self, DatasetError> {
        let ds = StaticDataset {
            region: region.into(),
            groups,
        };
        ds.validate()?;
        Ok(ds)
    }

    /// Load by extension: `.toml` or `.json`.
    pub fn from_path(path: &Path) -> Result<Self, DatasetError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        let text = fs::read_to_string(path)?;
        let ds = match ext.as_str() {
            "toml" => Self::from_toml_str(&text)?,
            "json" => Self::from_json_str(&text)?,
            other => return Err(DatasetError::UnsupportedFormat(other.to_string())),
        };
        tracing::info!(path = %path.display(), countries = ds.groups.len(), "loaded dataset");
        Ok(ds)
    }

    pub fn from_toml_str(s: &str) -> Result<Self, DatasetError> {
        let ds: StaticDataset = toml::from_str(s)?;
        ds.validate()?;
        Ok(ds)
    }

    pub fn from_json_str(s: &str) -> Result<Self, DatasetError> {
        let ds: StaticDataset = serde_json::from_str(s)?;
        ds.validate()?;
        Ok(ds)
    }

    pub fn validate(&self) -> Result<(), DatasetError> {
        if self.groups.is_empty() {
            return Err(DatasetError::Empty);
        }
        if let Some(g) = self.groups.iter().find(|g| g.items.is_empty()) {
            return Err(DatasetError::EmptyGroup(g.name.clone()));
        }
        Ok(())
    }

    pub fn place_count(&self) -> usize {
        self.groups.iter().map(|g| g.items.len()).sum()
    }

    /// One-line description used by the `check` command.
    pub fn summary(&self) -> String {
        format!(
            "{}: {} countries, {} places",
            self.region,
            self.groups.len(),
            self.place_count()
        )
    }

    /// Built-in dataset used when no file is given.
    pub fn demo() -> Self {
        let place = |id: u32, name: &str, desc: &str, rating: f32, tags: &[&str]| Item {
            id,
            name: name.to_string(),
            description: desc.to_string(),
            image: format!("images/{}.jpg", name.to_lowercase().replace(' ', "_")),
            rating: Some(rating),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        };
        let country = |id: u32, name: &str, items: Vec<Item>| Group {
            id,
            name: name.to_string(),
            image: format!("icons/{}.png", name.to_lowercase().replace(' ', "_")),
            items,
        };
        StaticDataset {
            region: default_region(),
            groups: vec![
                country(
                    1,
                    "Japan",
                    vec![
                        place(101, "Kyoto", "Old capital of wooden temples, moss gardens and quiet lanes lit by paper lanterns.", 4.8, &["temples", "gardens"]),
                        place(102, "Mount Fuji", "Snow-capped volcano circled by five lakes and hiking trails.", 4.7, &["hiking", "views"]),
                        place(103, "Hokkaido", "Northern island of powder snow, hot springs and lavender fields.", 4.6, &["ski", "onsen"]),
                    ],
                ),
                country(
                    2,
                    "Thailand",
                    vec![
                        place(201, "Bangkok", "Floating markets, golden spires and street food that never sleeps.", 4.5, &["food", "markets"]),
                        place(202, "Chiang Mai", "Mountain city of night bazaars and hill-top wats.", 4.6, &["culture"]),
                    ],
                ),
                country(
                    3,
                    "South Korea",
                    vec![
                        place(301, "Seoul", "Palaces beside neon districts, with mountains at the city edge.", 4.6, &["city", "palaces"]),
                        place(302, "Jeju Island", "Volcanic island of lava tubes, tangerine farms and black-sand beaches.", 4.7, &["beach", "hiking"]),
                        place(303, "Busan", "Port city of hillside villages and seafood markets.", 4.4, &["seafood", "beach"]),
                    ],
                ),
                country(
                    4,
                    "Vietnam",
                    vec![
                        place(401, "Ha Long Bay", "Emerald water scattered with thousands of limestone islets.", 4.8, &["cruise", "views"]),
                        place(402, "Hoi An", "Lantern-lit old town of tailors and riverside cafes.", 4.7, &["old town", "food"]),
                    ],
                ),
            ],
        }
    }
}

impl Dataset for StaticDataset {
    fn region(&self) -> &str {
        &self.region
    }

    fn groups(&self) -> &[Group] {
        &self.groups
    }
}
