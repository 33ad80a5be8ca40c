//! Integration tests for the nightingale binary
//!
//! Runs the built executable and checks what lands on disk and stdout.

use std::process::{Command, Output};
use tempfile::tempdir;

fn nightingale(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_nightingale"))
        .args(args)
        .output()
        .expect("Failed to run nightingale")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("stdout is not UTF-8")
}

#[test]
fn test_presets_lists_every_preset() {
    let output = nightingale(&["presets"]);
    assert!(output.status.success());
    let text = stdout(&output);
    for name in ["sculpture", "v4", "v5", "v6", "v7"] {
        assert!(text.lines().any(|l| l.starts_with(name)), "missing {name}");
    }
}

#[test]
fn test_export_writes_obj_and_mtl() {
    let dir = tempdir().expect("Failed to create temp dir");
    let obj_path = dir.path().join("bird.obj");

    let output = nightingale(&[
        "export",
        "--preset",
        "v6",
        "--time",
        "1.5",
        "-o",
        obj_path.to_str().unwrap(),
    ]);
    assert!(output.status.success(), "nightingale export failed");

    let obj = std::fs::read_to_string(&obj_path).expect("OBJ should exist");
    assert!(obj.lines().any(|l| l.starts_with("v ")));
    assert!(obj.lines().any(|l| l.starts_with("f ")));
    assert!(obj.contains("mtllib bird.mtl"));

    let mtl = std::fs::read_to_string(dir.path().join("bird.mtl")).expect("MTL should exist");
    assert!(mtl.contains("newmtl body"));
}

#[test]
fn test_pose_prints_json_lines() {
    let output = nightingale(&["pose", "--preset", "sculpture", "--end", "1", "--fps", "10"]);
    assert!(output.status.success());

    let text = stdout(&output);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 11);
    assert!(lines[0].starts_with('{'));
    assert!(lines[0].contains("\"time\":0.0"));
    assert!(lines[10].contains("\"time\":1.0"));
}

#[test]
fn test_dump_then_describe_from_config() {
    let dir = tempdir().expect("Failed to create temp dir");
    let toml_path = dir.path().join("v5.toml");

    let output = nightingale(&["dump", "--preset", "v5", "-o", toml_path.to_str().unwrap()]);
    assert!(output.status.success(), "nightingale dump failed");
    assert!(toml_path.exists());

    let from_file = nightingale(&["describe", "--config", toml_path.to_str().unwrap()]);
    let from_preset = nightingale(&["describe", "--preset", "v5"]);
    assert!(from_file.status.success());
    assert_eq!(stdout(&from_file), stdout(&from_preset));
    assert!(stdout(&from_file).starts_with("scene/"));
}

#[test]
fn test_broken_config_fails() {
    let dir = tempdir().expect("Failed to create temp dir");
    let toml_path = dir.path().join("broken.toml");
    std::fs::write(&toml_path, "name = 3\n").expect("Failed to write config");

    let output = nightingale(&["describe", "--config", toml_path.to_str().unwrap()]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("broken.toml"), "{stderr}");
}

#[test]
fn test_preset_and_config_conflict() {
    let output = nightingale(&["describe", "--preset", "v4", "--config", "scene.toml"]);
    assert!(!output.status.success());
}

#[test]
fn test_pose_rejects_unbounded_ranges() {
    for end in ["1e30", "inf", "NaN"] {
        let output = nightingale(&["pose", "--preset", "v7", "--end", end]);
        assert!(!output.status.success(), "--end {end} succeeded");
        assert!(output.stdout.is_empty());
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(!stderr.contains("panicked"), "{stderr}");
    }
}
