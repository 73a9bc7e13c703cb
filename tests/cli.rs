use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn vowelscan() -> Command {
    let mut cmd = Command::cargo_bin("vowelscan").expect("Failed to find vowelscan binary");
    cmd.env_remove("VOWELSCAN_FILE");
    cmd
}

fn write_file(path: &Path, content: &[u8]) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

fn stdout_lines(stdout: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(stdout)
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn prints_content_then_filtered_words() {
    let temp = tempdir().unwrap();
    let file = temp.path().join("input.txt");
    write_file(&file, b"aei o u aeiou uoiea bcd fgh");

    let assert = vowelscan().arg(&file).assert().success();
    let lines = stdout_lines(&assert.get_output().stdout);

    assert_eq!(
        lines,
        vec![
            "File Content:",
            "aei o u aeiou uoiea bcd fgh",
            "Filtered Words:",
            "aei",
            "o",
            "u",
            "aeiou",
            "uoiea",
        ]
    );
}

#[test]
fn keeps_case_distinct_words_in_first_seen_order() {
    let temp = tempdir().unwrap();
    let file = temp.path().join("input.txt");
    write_file(&file, b"AEI aei\n(oi) oi, AEI");

    let assert = vowelscan().arg(&file).assert().success();
    let lines = stdout_lines(&assert.get_output().stdout);

    let words: Vec<_> = lines
        .iter()
        .skip_while(|l| l.as_str() != "Filtered Words:")
        .skip(1)
        .cloned()
        .collect();
    assert_eq!(words, vec!["AEI", "aei", "oi"]);
}

#[test]
fn missing_file_is_reported_with_zero_exit() {
    let temp = tempdir().unwrap();
    let file = temp.path().join("absent.txt");

    vowelscan()
        .arg(&file)
        .assert()
        .success()
        .stdout(format!("File does not exist: {}\n", file.display()));
}

#[test]
fn file_path_from_environment() {
    let temp = tempdir().unwrap();
    let file = temp.path().join("from_env.txt");
    write_file(&file, b"ea");

    vowelscan()
        .env("VOWELSCAN_FILE", &file)
        .assert()
        .success()
        .stdout("File Content:\nea\nFiltered Words:\nea\n");
}

#[test]
fn default_file_is_input_txt_in_working_dir() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("input.txt"), b"io bcd");

    vowelscan()
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::ends_with("Filtered Words:\nio\n"));
}

#[test]
fn oversized_file_is_a_read_error() {
    let temp = tempdir().unwrap();
    let file = temp.path().join("big.txt");
    write_file(&file, b"aeiou aeiou aeiou");

    vowelscan()
        .arg(&file)
        .arg("--max-bytes")
        .arg("4")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Unable to read the file: "))
        .stdout(predicate::str::contains("File Content:").not());
}

#[test]
fn strict_utf8_rejects_invalid_bytes() {
    let temp = tempdir().unwrap();
    let file = temp.path().join("latin1.txt");
    write_file(&file, &[0x61, 0x20, 0xE9, 0x20, 0x6F]);

    vowelscan()
        .arg(&file)
        .arg("--strict-utf8")
        .assert()
        .success()
        .stdout("Unable to read the file: File contains invalid UTF-8 at byte 2\n");

    let assert = vowelscan().arg(&file).assert().success();
    let lines = stdout_lines(&assert.get_output().stdout);
    assert_eq!(lines[lines.len() - 2..], ["a", "o"]);
}

#[test]
fn json_format_emits_single_report() {
    let temp = tempdir().unwrap();
    let file = temp.path().join("input.txt");
    write_file(&file, b"ou ou bcd EA");

    let assert = vowelscan()
        .arg(&file)
        .arg("--format")
        .arg("json")
        .assert()
        .success();

    let value: Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(value["content"], "ou ou bcd EA");
    assert_eq!(value["words"], serde_json::json!(["ou", "EA"]));
    assert_eq!(value["stats"]["tokens"], 4);
    assert_eq!(value["stats"]["vowel_words"], 3);
}

#[test]
fn jsonl_format_emits_one_line_per_word() {
    let temp = tempdir().unwrap();
    let file = temp.path().join("input.txt");
    write_file(&file, b"a-e=i");

    let assert = vowelscan()
        .arg(&file)
        .arg("--format")
        .arg("jsonl")
        .assert()
        .success();

    let words: Vec<String> = stdout_lines(&assert.get_output().stdout)
        .iter()
        .map(|l| serde_json::from_str::<Value>(l).unwrap())
        .map(|v| v["word"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(words, vec!["a", "e", "i"]);
}

#[test]
fn json_error_carries_code() {
    let temp = tempdir().unwrap();
    let file = temp.path().join("absent.txt");

    let assert = vowelscan()
        .arg(&file)
        .arg("--format")
        .arg("json")
        .assert()
        .success();

    let value: Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(value["error"]["code"], "MISSING_FILE");
}

#[test]
fn verbose_diagnostics_go_to_stderr() {
    let temp = tempdir().unwrap();
    let file = temp.path().join("input.txt");
    write_file(&file, b"ae");

    vowelscan()
        .arg(&file)
        .arg("--verbose")
        .arg("--no-color")
        .assert()
        .success()
        .stdout("File Content:\nae\nFiltered Words:\nae\n")
        .stderr(predicate::str::contains("[vowelscan] read 2 bytes"));
}

#[test]
fn unknown_format_fails() {
    vowelscan()
        .arg("input.txt")
        .arg("--format")
        .arg("yaml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown format: yaml"));
}
