//! Host-side dataset contracts consumed by the traversal panel.
//!
//! Everything here is read-only from the panel's perspective: the dataset
//! metadata (samples plus the brain method runs computed over them) and the
//! shared sample selection. The panel never mutates the dataset; it only
//! reads the qualifying similarity runs and the most recent selection.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub mod selection;
pub use selection::SelectionState;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetDefinition {
    pub name: String,
    pub description: String,
    pub samples: Vec<SampleDefinition>,
    #[serde(default)]
    pub brain_methods: Vec<BrainMethodDefinition>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SampleDefinition {
    pub id: String,
    pub filepath: String,
}

/// One brain method run recorded on the dataset, identified by key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrainMethodDefinition {
    pub key: String,
    pub config: BrainMethodConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrainMethodConfig {
    /// Class name of the run's configuration, e.g. "SklearnSimilarityConfig".
    pub cls: String,
    #[serde(default)]
    pub supports_prompts: bool,
}

#[derive(thiserror::Error, Debug)]
pub enum DatasetError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl DatasetDefinition {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, DatasetError> {
        let data = fs::read(path)?;
        Ok(serde_json::from_slice(&data)?)
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), DatasetError> {
        let data = serde_json::to_vec_pretty(self)?;
        fs::write(path, data)?;
        Ok(())
    }

    pub fn sample(&self, id: &str) -> Option<&SampleDefinition> {
        self.samples.iter().find(|sample| sample.id == id)
    }
}

/// Keys of the brain method runs the traversal operator can use: the run's
/// config class name must contain "Similarity" and the run must support
/// text prompts.
pub fn valid_similarity_runs(dataset: &DatasetDefinition) -> Vec<String> {
    dataset
        .brain_methods
        .iter()
        .filter(|method| {
            method.config.cls.contains("Similarity") && method.config.supports_prompts
        })
        .map(|method| method.key.clone())
        .collect()
}

/// The panel is only offered for datasets with at least one qualifying run.
pub fn panel_available(dataset: &DatasetDefinition) -> bool {
    dataset.brain_methods.iter().any(|method| {
        method.config.cls.contains("Similarity") && method.config.supports_prompts
    })
}
