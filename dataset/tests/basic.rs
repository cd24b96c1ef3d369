use dataset::{
    panel_available, valid_similarity_runs, BrainMethodConfig, BrainMethodDefinition,
    DatasetDefinition, SampleDefinition, SelectionState,
};

fn method(key: &str, cls: &str, supports_prompts: bool) -> BrainMethodDefinition {
    BrainMethodDefinition {
        key: key.to_string(),
        config: BrainMethodConfig {
            cls: cls.to_string(),
            supports_prompts,
        },
    }
}

fn demo_dataset() -> DatasetDefinition {
    DatasetDefinition {
        name: "demo".to_string(),
        description: "desc".to_string(),
        samples: vec![
            SampleDefinition {
                id: "s1".to_string(),
                filepath: "/data/s1.jpg".to_string(),
            },
            SampleDefinition {
                id: "s2".to_string(),
                filepath: "/data/s2.jpg".to_string(),
            },
        ],
        brain_methods: vec![
            method("clip_sim", "SklearnSimilarityConfig", true),
            method("uniqueness", "UniquenessConfig", true),
            method("hash_sim", "SklearnSimilarityConfig", false),
        ],
    }
}

#[test]
fn save_and_load_dataset() {
    let temp = tempfile::tempdir().expect("tempdir");
    let path = temp.path().join("dataset.json");

    let dataset = demo_dataset();
    dataset.save_to_file(&path).unwrap();
    let loaded = DatasetDefinition::load_from_file(&path).unwrap();

    assert_eq!(loaded.name, dataset.name);
    assert_eq!(loaded.samples.len(), 2);
    assert_eq!(loaded.brain_methods.len(), 3);
    assert_eq!(loaded.sample("s2").unwrap().filepath, "/data/s2.jpg");
    assert!(loaded.sample("missing").is_none());
}

#[test]
fn load_rejects_malformed_file() {
    let temp = tempfile::tempdir().expect("tempdir");
    let path = temp.path().join("broken.json");
    std::fs::write(&path, b"{ not json").unwrap();
    assert!(DatasetDefinition::load_from_file(&path).is_err());
}

#[test]
fn similarity_runs_require_class_name_and_prompt_support() {
    let dataset = demo_dataset();
    assert_eq!(valid_similarity_runs(&dataset), vec!["clip_sim".to_string()]);
    assert!(panel_available(&dataset));
}

#[test]
fn panel_unavailable_without_qualifying_run() {
    let mut dataset = demo_dataset();
    dataset.brain_methods = vec![
        method("uniqueness", "UniquenessConfig", true),
        method("hash_sim", "SklearnSimilarityConfig", false),
    ];
    assert!(valid_similarity_runs(&dataset).is_empty());
    assert!(!panel_available(&dataset));
}

#[test]
fn supports_prompts_defaults_to_false() {
    let json = r#"{
        "name": "d",
        "description": "",
        "samples": [],
        "brain_methods": [
            { "key": "k", "config": { "cls": "SklearnSimilarityConfig" } }
        ]
    }"#;
    let dataset: DatasetDefinition = serde_json::from_str(json).unwrap();
    assert!(!panel_available(&dataset));
}

#[test]
fn selection_tracks_insertion_order() {
    let mut selection = SelectionState::new();
    assert!(selection.latest().is_none());

    selection.select("s1");
    selection.select("s2");
    assert_eq!(selection.latest(), Some("s2"));

    // Re-selecting does not move a sample to the back.
    selection.select("s1");
    assert_eq!(selection.latest(), Some("s2"));
    assert_eq!(selection.len(), 2);

    selection.deselect("s2");
    assert_eq!(selection.latest(), Some("s1"));

    selection.toggle("s1");
    assert!(selection.is_empty());
    selection.toggle("s3");
    assert_eq!(selection.latest(), Some("s3"));
}
