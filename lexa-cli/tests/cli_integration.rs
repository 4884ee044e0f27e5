//! Integration tests for the lexa CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn fixture_path(name: &str) -> String {
    format!("tests/fixtures/{name}")
}

fn lexa() -> Command {
    let mut cmd = Command::cargo_bin("lexa").unwrap();
    cmd.env_remove("LEXA_CONFIG");
    cmd
}

fn write_input(dir: &TempDir, name: &str, content: &str) -> String {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path.to_string_lossy().into_owned()
}

#[test]
fn test_sentences_english_text() {
    lexa()
        .args(["sentences", "-i", &fixture_path("english-sample.txt")])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dr. Smith went to the store.\n"))
        .stdout(predicate::str::contains("He bought some milk and eggs!\n"))
        .stdout(predicate::str::contains("Was it enough?\n"));
}

#[test]
fn test_sentences_json_output() {
    lexa()
        .args(["sentences", "-i", &fixture_path("english-sample.txt"), "-f", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"source\""))
        .stdout(predicate::str::contains("\"kind\": \"sentence\""))
        .stdout(predicate::str::contains("\"index\": 2"));
}

#[test]
fn test_sentences_markdown_output() {
    lexa()
        .args([
            "sentences",
            "-i",
            &fixture_path("english-sample.txt"),
            "-f",
            "markdown",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("1. Dr. Smith went to the store."))
        .stdout(predicate::str::contains("---"))
        .stdout(predicate::str::contains("*Total items: 3*"));
}

#[test]
fn test_stem_command() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "words.txt", "running cats generously");

    lexa()
        .args(["stem", "-i", &input])
        .assert()
        .success()
        .stdout(predicate::str::contains("running\trun\n"))
        .stdout(predicate::str::contains("cats\tcat\n"))
        .stdout(predicate::str::contains("generously\tgenerous\n"));
}

#[test]
fn test_syllables_command() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "words.txt", "justification");

    lexa()
        .args(["syllables", "-i", &input])
        .assert()
        .success()
        .stdout(predicate::str::contains("justification\tjus-ti-fi-ca-tion"));
}

#[test]
fn test_stats_command() {
    lexa()
        .args(["stats", "-i", &fixture_path("english-sample.txt")])
        .assert()
        .success()
        .stdout(predicate::str::contains("words: 15\n"))
        .stdout(predicate::str::contains("sentences: 3\n"))
        .stdout(predicate::str::contains("reading ease: "));
}

#[test]
fn test_stats_empty_file_has_no_scores() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "empty.txt", "");

    lexa()
        .args(["stats", "-i", &input])
        .assert()
        .success()
        .stdout(predicate::str::contains("reading ease: n/a"));
}

#[test]
fn test_output_to_file() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("sentences.out");

    lexa()
        .args([
            "sentences",
            "-i",
            &fixture_path("english-sample.txt"),
            "-o",
            output.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let written = fs::read_to_string(&output).unwrap();
    assert_eq!(
        written,
        "Dr. Smith went to the store.\nHe bought some milk and eggs!\nWas it enough?\n"
    );
}

#[test]
fn test_glob_pattern() {
    let dir = TempDir::new().unwrap();
    write_input(&dir, "a.txt", "First file.");
    write_input(&dir, "b.txt", "Second file.");
    let pattern = dir.path().join("*.txt").to_string_lossy().into_owned();

    lexa()
        .args(["sentences", "-q", "-i", &pattern, "-f", "markdown"])
        .assert()
        .success()
        .stdout(predicate::str::contains("a.txt"))
        .stdout(predicate::str::contains("b.txt"))
        .stdout(predicate::str::contains("*Total items: 2*"));
}

#[test]
fn test_missing_input() {
    lexa()
        .args(["sentences", "-i", "nonexistent-file.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No files found"));
}

#[test]
fn test_help_command() {
    lexa()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("stem"))
        .stdout(predicate::str::contains("syllables"))
        .stdout(predicate::str::contains("sentences"));
}

#[test]
fn test_list_languages() {
    lexa()
        .args(["list", "languages"])
        .assert()
        .success()
        .stdout(predicate::str::contains("en"))
        .stdout(predicate::str::contains("English"));
}

#[test]
fn test_list_formats() {
    lexa()
        .args(["list", "formats"])
        .assert()
        .success()
        .stdout(predicate::str::contains("json"))
        .stdout(predicate::str::contains("markdown"));
}

#[test]
fn test_generate_then_validate() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("english.toml");
    let config = config.to_str().unwrap();

    lexa()
        .args(["generate-config", "-o", config])
        .assert()
        .success();

    lexa()
        .args(["validate", "-c", config])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid"))
        .stdout(predicate::str::contains("Language code: en"));
}

#[test]
fn test_validate_invalid_config() {
    let dir = TempDir::new().unwrap();
    let config = write_input(&dir, "bad.toml", "[metadata]\ncode = \"xx\"\n");

    lexa()
        .args(["validate", "-c", &config])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Configuration is invalid"));
}

#[test]
fn test_external_language_config_adds_abbreviation() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "talk.txt", "Prof. Lee spoke. Everyone listened.");
    let config = dir.path().join("rules.toml");

    lexa()
        .args(["generate-config", "-o", config.to_str().unwrap()])
        .assert()
        .success();
    let content = fs::read_to_string(&config).unwrap();
    fs::write(
        &config,
        content.replace("titles = [", "academic = [\"Prof.\"]\ntitles = ["),
    )
    .unwrap();

    lexa()
        .args(["sentences", "-i", &input])
        .assert()
        .success()
        .stdout(predicate::str::contains("Prof.\nLee spoke.\n"));

    lexa()
        .args([
            "sentences",
            "-i",
            &input,
            "--language-config",
            config.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Prof. Lee spoke.\nEveryone listened.\n"));
}

#[test]
fn test_cli_config_sets_default_format() {
    let dir = TempDir::new().unwrap();
    let config = write_input(
        &dir,
        "lexa.toml",
        "[output]\ndefault_format = \"json\"\npretty_json = false\n",
    );

    lexa()
        .args([
            "sentences",
            "-i",
            &fixture_path("english-sample.txt"),
            "--config",
            &config,
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"kind\":\"sentence\""));
}

#[test]
fn test_unsupported_language_rejected() {
    lexa()
        .args(["sentences", "-i", &fixture_path("english-sample.txt"), "-l", "klingon"])
        .assert()
        .failure();
}
