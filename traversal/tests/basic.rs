use std::process::Command;

#[test]
fn indexes_lists_only_prompt_capable_runs() {
    let exe = env!("CARGO_BIN_EXE_traversal");
    let output = Command::new(exe)
        .args(["indexes"])
        .output()
        .expect("run traversal indexes");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("clip_sim"));
    assert!(!stdout.contains("img_sim"));
    assert!(!stdout.contains("uniqueness"));
}

#[test]
fn traverse_prints_ranked_matches_excluding_the_origin() {
    let exe = env!("CARGO_BIN_EXE_traversal");
    let output = Command::new(exe)
        .args([
            "traverse", "--sample", "s1", "--concept", "cat=0.8", "--scale", "50",
        ])
        .output()
        .expect("run traversal traverse");
    assert!(output.status.success());
    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("matches as json");
    let matches = value["matches"].as_array().expect("matches array");
    assert_eq!(matches.len(), 7);
    assert!(matches.iter().all(|entry| entry["sample_id"] != "s1"));
    let scores: Vec<f64> = matches
        .iter()
        .map(|entry| entry["score"].as_f64().unwrap())
        .collect();
    assert!(scores.windows(2).all(|pair| pair[0] >= pair[1]));
}

#[test]
fn traverse_rejects_zero_weight_concepts() {
    let exe = env!("CARGO_BIN_EXE_traversal");
    let output = Command::new(exe)
        .args(["traverse", "--sample", "s1", "--concept", "cat=0"])
        .output()
        .expect("run traversal traverse");
    assert!(!output.status.success());
}

#[test]
fn traverse_fails_for_unknown_sample() {
    let exe = env!("CARGO_BIN_EXE_traversal");
    let output = Command::new(exe)
        .args(["traverse", "--sample", "nope", "--concept", "cat=0.8"])
        .output()
        .expect("run traversal traverse");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unknown sample"));
}

#[test]
fn dataset_flag_overrides_the_builtin() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("ds.json");
    let dataset = serde_json::json!({
        "name": "custom",
        "description": "",
        "samples": [{ "id": "a1", "filepath": "/data/a1.jpg" }],
        "brain_methods": [
            { "key": "my_sim", "config": { "cls": "SklearnSimilarityConfig", "supports_prompts": true } }
        ]
    });
    std::fs::write(&path, dataset.to_string()).expect("write dataset");

    let exe = env!("CARGO_BIN_EXE_traversal");
    let output = Command::new(exe)
        .args(["--dataset", path.to_str().unwrap(), "indexes"])
        .output()
        .expect("run traversal indexes");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("my_sim"));
    assert!(!stdout.contains("clip_sim"));
}
