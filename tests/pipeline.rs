use std::{
    io::Write,
    path::Path,
    process::{Command, Stdio},
};

fn quaero_bin() -> &'static str {
    env!("CARGO_BIN_EXE_quaero")
}

fn setup_corpus(dir: &Path) {
    std::fs::write(
        dir.join("astronomy.txt"),
        "Comets are icy bodies that orbit the sun.\n\
         They develop glowing tails when they approach the sun. \
         Asteroids are rocky instead.\n",
    )
    .unwrap();
    std::fs::write(
        dir.join("cooking.txt"),
        "Boil the water before adding pasta. Salt the water generously.\n",
    )
    .unwrap();
    std::fs::write(
        dir.join("history.txt"),
        "The printing press changed Europe. Books spread quickly after.\n",
    )
    .unwrap();
    // Non-corpus files must be ignored.
    std::fs::write(dir.join("README.md"), "Not part of the corpus.").unwrap();
}

#[test]
fn answers_with_the_best_sentence() {
    let tmp = tempfile::tempdir().unwrap();
    setup_corpus(tmp.path());

    let output = Command::new(quaero_bin())
        .arg(tmp.path())
        .args(["--query", "glowing tails"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(
        stdout.trim(),
        "They develop glowing tails when they approach the sun."
    );
}

#[test]
fn reads_query_from_stdin() {
    let tmp = tempfile::tempdir().unwrap();
    setup_corpus(tmp.path());

    let mut child = Command::new(quaero_bin())
        .arg(tmp.path())
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"glowing tails\n")
        .unwrap();

    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("Query: "));
    assert!(
        stdout.contains("They develop glowing tails when they approach the sun.")
    );
}

#[test]
fn show_files_prints_stage_one_results() {
    let tmp = tempfile::tempdir().unwrap();
    setup_corpus(tmp.path());

    let output = Command::new(quaero_bin())
        .arg(tmp.path())
        .args(["--query", "glowing tails", "--show-files"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines[0], "astronomy.txt");
    assert_eq!(
        lines[1],
        "They develop glowing tails when they approach the sun."
    );
}

#[test]
fn json_output_carries_scores() {
    let tmp = tempfile::tempdir().unwrap();
    setup_corpus(tmp.path());

    let output = Command::new(quaero_bin())
        .arg(tmp.path())
        .args(["--query", "glowing tails", "--json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).unwrap();

    assert_eq!(value["query_terms"][0], "glowing");
    assert_eq!(value["query_terms"][1], "tails");
    assert_eq!(value["files"][0], "astronomy.txt");

    let top = &value["sentences"][0];
    assert_eq!(
        top["text"],
        "They develop glowing tails when they approach the sun."
    );
    assert!(top["idf_sum"].as_f64().unwrap() >= 0.0);
    let density = top["density"].as_f64().unwrap();
    assert!((0.0..=1.0).contains(&density));
}

#[test]
fn sentence_count_clamps_to_available() {
    let tmp = tempfile::tempdir().unwrap();
    setup_corpus(tmp.path());

    let output = Command::new(quaero_bin())
        .arg(tmp.path())
        .args(["--query", "water pasta", "-n", "100"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    // cooking.txt has exactly two sentences.
    assert_eq!(stdout.lines().count(), 2);
}

#[test]
fn missing_argument_is_a_usage_error() {
    let output = Command::new(quaero_bin()).output().unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Usage"));
}

#[test]
fn missing_directory_is_fatal() {
    let tmp = tempfile::tempdir().unwrap();
    let output = Command::new(quaero_bin())
        .arg(tmp.path().join("does-not-exist"))
        .args(["--query", "anything"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("not a readable directory"));
}

#[test]
fn corpus_without_txt_files_is_fatal() {
    let tmp = tempfile::tempdir().unwrap();
    std::fs::write(tmp.path().join("only.md"), "Markdown only.").unwrap();

    let output = Command::new(quaero_bin())
        .arg(tmp.path())
        .args(["--query", "anything"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("EmptyCollection"));
}

#[test]
fn empty_stdin_query_is_fatal() {
    let tmp = tempfile::tempdir().unwrap();
    setup_corpus(tmp.path());

    let mut child = Command::new(quaero_bin())
        .arg(tmp.path())
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    drop(child.stdin.take());

    let output = child.wait_with_output().unwrap();
    assert!(!output.status.success());
}
