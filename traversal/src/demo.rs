//! Built-in demo dataset and the executors backing the standalone binary.
//!
//! The demo traverser stands in for a real similarity index: scores are a
//! stable hash of the request and the candidate sample, so repeated runs rank
//! identically without any model behind them.

use dataset::{BrainMethodConfig, BrainMethodDefinition, DatasetDefinition, SampleDefinition};
use operator::{spawn_operator, OperatorHandle};
use std::time::Duration;
use traversal_core::{
    MediaLookup, MediaUrl, TraversalOperator, TraverseMatch, TraverseRequest, TraverseResult,
};

pub fn load_or_default(path: &str) -> DatasetDefinition {
    match DatasetDefinition::load_from_file(path) {
        Ok(dataset) => dataset,
        Err(err) => {
            log::warn!("could not load dataset from {path}: {err}; using the built-in demo");
            builtin_dataset()
        }
    }
}

pub fn builtin_dataset() -> DatasetDefinition {
    let samples = (1..=8)
        .map(|i| SampleDefinition {
            id: format!("s{i}"),
            filepath: format!("/tmp/traversal-demo/s{i}.jpg"),
        })
        .collect();
    DatasetDefinition {
        name: "traversal-demo".to_string(),
        description: "Synthetic samples for exercising the panel".to_string(),
        samples,
        brain_methods: vec![
            BrainMethodDefinition {
                key: "clip_sim".to_string(),
                config: BrainMethodConfig {
                    cls: "SklearnSimilarityConfig".to_string(),
                    supports_prompts: true,
                },
            },
            BrainMethodDefinition {
                key: "img_sim".to_string(),
                config: BrainMethodConfig {
                    cls: "SklearnSimilarityConfig".to_string(),
                    supports_prompts: false,
                },
            },
            BrainMethodDefinition {
                key: "uniqueness".to_string(),
                config: BrainMethodConfig {
                    cls: "UniquenessConfig".to_string(),
                    supports_prompts: false,
                },
            },
        ],
    }
}

pub struct DemoTraverser {
    dataset: DatasetDefinition,
}

impl DemoTraverser {
    pub fn new(dataset: DatasetDefinition) -> Self {
        Self { dataset }
    }
}

impl TraversalOperator for DemoTraverser {
    fn execute(&self, request: &TraverseRequest) -> OperatorHandle<TraverseResult> {
        let dataset = self.dataset.clone();
        let request = request.clone();
        spawn_operator(move || {
            std::thread::sleep(Duration::from_millis(300));
            if dataset.sample(&request.sample).is_none() {
                return Err(format!("unknown sample: {}", request.sample));
            }
            let mut matches: Vec<TraverseMatch> = dataset
                .samples
                .iter()
                .filter(|sample| sample.id != request.sample)
                .map(|sample| TraverseMatch {
                    sample_id: sample.id.clone(),
                    score: demo_score(&request, &sample.id),
                })
                .collect();
            matches.sort_by(|a, b| b.score.total_cmp(&a.score));
            Ok(TraverseResult { matches })
        })
    }
}

pub struct DemoMedia {
    dataset: DatasetDefinition,
}

impl DemoMedia {
    pub fn new(dataset: DatasetDefinition) -> Self {
        Self { dataset }
    }
}

impl MediaLookup for DemoMedia {
    fn sample_url(&self, sample_id: &str) -> OperatorHandle<MediaUrl> {
        match self.dataset.sample(sample_id) {
            Some(sample) => OperatorHandle::settled(Ok(MediaUrl {
                url: format!("file://{}", sample.filepath),
            })),
            None => OperatorHandle::settled(Err(format!("unknown sample: {sample_id}"))),
        }
    }
}

/// FNV over the request and candidate id, mapped into [0, 1).
fn demo_score(request: &TraverseRequest, sample_id: &str) -> f64 {
    let mut key = format!("{}|{}|{}", request.index, sample_id, request.text_scale);
    for entry in &request.concepts {
        key.push_str(&format!("|{}={}", entry.concept, entry.strength));
    }
    let mut hash: u64 = 0xcbf29ce484222325;
    for byte in key.bytes() {
        hash ^= u64::from(byte);
        hash = hash.wrapping_mul(0x0000_0100_0000_01b3);
    }
    (hash >> 11) as f64 / (1u64 << 53) as f64
}
