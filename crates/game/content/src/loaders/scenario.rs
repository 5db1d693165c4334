//! Starting layout loader.
//!
//! Layouts list knights and items with flat coordinates so the same shape
//! reads naturally in both RON and TOML.

use std::path::Path;

use arena_core::{ItemSpec, KnightSpec, Position, Scenario};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

#[derive(Debug, Clone, Serialize, Deserialize)]
struct KnightEntry {
    color: String,
    row: i32,
    col: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ItemEntry {
    name: String,
    #[serde(default)]
    attack: u32,
    #[serde(default)]
    defense: u32,
    row: i32,
    col: i32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct ScenarioData {
    #[serde(default)]
    knights: Vec<KnightEntry>,
    #[serde(default)]
    items: Vec<ItemEntry>,
}

impl From<ScenarioData> for Scenario {
    fn from(data: ScenarioData) -> Self {
        let knights = data
            .knights
            .into_iter()
            .map(|knight| KnightSpec::new(knight.color, Position::new(knight.row, knight.col)))
            .collect();
        let items = data
            .items
            .into_iter()
            .map(|item| {
                ItemSpec::new(
                    item.name,
                    item.attack,
                    item.defense,
                    Position::new(item.row, item.col),
                )
            })
            .collect();

        Scenario::new(knights, items)
    }
}

/// Supported layout file formats.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScenarioFormat {
    Ron,
    Toml,
}

impl ScenarioFormat {
    /// Picks the format from the file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            ext if ext.eq_ignore_ascii_case("ron") => Some(Self::Ron),
            ext if ext.eq_ignore_ascii_case("toml") => Some(Self::Toml),
            _ => None,
        }
    }
}

/// Loader for starting layouts.
pub struct ScenarioLoader;

impl ScenarioLoader {
    /// Load a layout from a `.ron` or `.toml` file.
    ///
    /// Positions are not validated here; that happens when the layout is
    /// turned into a game state.
    pub fn load(path: &Path) -> LoadResult<Scenario> {
        let format = ScenarioFormat::from_path(path).ok_or_else(|| {
            anyhow::anyhow!(
                "Unsupported scenario file {}: expected .ron or .toml",
                path.display()
            )
        })?;
        let content = read_file(path)?;
        let scenario = Self::parse(&content, format)?;

        tracing::debug!(
            path = %path.display(),
            knights = scenario.knights.len(),
            items = scenario.items.len(),
            "loaded scenario"
        );
        Ok(scenario)
    }

    pub fn parse(content: &str, format: ScenarioFormat) -> LoadResult<Scenario> {
        let data: ScenarioData = match format {
            ScenarioFormat::Ron => ron::from_str(content)
                .map_err(|e| anyhow::anyhow!("Failed to parse scenario RON: {}", e))?,
            ScenarioFormat::Toml => toml::from_str(content)
                .map_err(|e| anyhow::anyhow!("Failed to parse scenario TOML: {}", e))?,
        };

        Ok(data.into())
    }
}
