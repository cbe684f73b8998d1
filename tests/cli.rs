//! 端到端测试：用 shell 脚本充当外部标注工具。

#![cfg(unix)]

use assert_cmd::Command;
use predicates::str::contains;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// 复制输入目录中的非隐藏文件，输出中已存在的跳过
const COPY_IF_ABSENT: &str = r#"#!/bin/sh
while [ "$#" -gt 2 ]; do shift; done
for f in "$1"/*; do
  [ -f "$f" ] || continue
  name=$(basename "$f")
  [ -e "$2/$name" ] || cp "$f" "$2/$name"
done
"#;

/// 复制文件，同时在 stderr 报告一条诊断并以 0 退出
const WARNS_ON_SUCCESS: &str = r#"#!/bin/sh
while [ "$#" -gt 2 ]; do shift; done
for f in "$1"/*; do
  [ -f "$f" ] || continue
  name=$(basename "$f")
  [ -e "$2/$name" ] || cp "$f" "$2/$name"
done
echo "processed files from $1"
echo "b.jpg: could not read metadata, skipped" >&2
exit 0
"#;

/// 成功退出但不写任何文件
const WRITES_NOTHING: &str = r#"#!/bin/sh
exit 0
"#;

/// 输出错误信息并以非零状态退出
const FAILING: &str = r#"#!/bin/sh
echo "cannot read media" >&2
exit 7
"#;

struct Env {
    tmp: TempDir,
    input: PathBuf,
    output: PathBuf,
}

impl Env {
    fn new(inputs: &[&str]) -> Self {
        let tmp = TempDir::new().unwrap();
        let input = tmp.path().join("in");
        let output = tmp.path().join("out");
        fs::create_dir(&input).unwrap();
        fs::create_dir(&output).unwrap();
        for name in inputs {
            fs::write(input.join(name), name.as_bytes()).unwrap();
        }
        Self { tmp, input, output }
    }

    fn script(&self, name: &str, body: &str) -> PathBuf {
        let path = self.tmp.path().join(name);
        fs::write(&path, body).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    fn cmd(&self, annotator: &Path) -> Command {
        let mut cmd = Command::cargo_bin("timestampmaker").unwrap();
        cmd.arg("--annotator")
            .arg(annotator)
            .arg(&self.input)
            .arg(&self.output);
        cmd
    }
}

fn listing(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    names.sort();
    names
}

#[test]
fn stamps_all_new_files() {
    let env = Env::new(&["a.jpg", "b.jpg", "c.jpg"]);
    let annotator = env.script("fake-timestamp", COPY_IF_ABSENT);

    env.cmd(&annotator)
        .assert()
        .success()
        .stdout(contains("3 new, 0 already stamped"));

    assert_eq!(listing(&env.output), vec!["a.jpg", "b.jpg", "c.jpg"]);
}

#[test]
fn existing_output_left_untouched() {
    let env = Env::new(&["a.jpg", "b.jpg"]);
    let annotator = env.script("fake-timestamp", COPY_IF_ABSENT);
    let existing = env.output.join("a.jpg");
    fs::write(&existing, b"original").unwrap();
    let before = fs::metadata(&existing).unwrap().modified().unwrap();

    env.cmd(&annotator)
        .assert()
        .success()
        .stdout(contains("1 new, 1 already stamped"));

    assert_eq!(fs::read(&existing).unwrap(), b"original");
    assert_eq!(fs::metadata(&existing).unwrap().modified().unwrap(), before);
    assert_eq!(listing(&env.output), vec!["a.jpg", "b.jpg"]);
}

#[test]
fn missing_input_directory() {
    let env = Env::new(&[]);
    let annotator = env.script("fake-timestamp", COPY_IF_ABSENT);

    Command::cargo_bin("timestampmaker")
        .unwrap()
        .arg("--annotator")
        .arg(&annotator)
        .arg("/does/not/exist")
        .arg(&env.output)
        .assert()
        .code(1)
        .stderr(contains("Directory not found: /does/not/exist"));
}

#[test]
fn equal_colors_rejected_before_io() {
    let env = Env::new(&["a.jpg"]);
    let annotator = env.script("fake-timestamp", COPY_IF_ABSENT);

    env.cmd(&annotator)
        .args(["--font-color", "white", "--background-color", "white"])
        .assert()
        .code(1)
        .stderr(contains(
            "Background color can not be the same as the foreground color",
        ));

    assert!(listing(&env.output).is_empty());
}

#[test]
fn dry_run_prints_command_only() {
    let env = Env::new(&["a.jpg"]);
    let annotator = env.script("fake-timestamp", COPY_IF_ABSENT);

    env.cmd(&annotator)
        .args(["--dry-run", "--time-zone", "UTC"])
        .assert()
        .success()
        .stdout(contains("--time-zone UTC"))
        .stdout(contains("Dry run: 1 files would be stamped"));

    assert!(listing(&env.output).is_empty());
}

#[test]
fn annotator_exit_status_is_forwarded() {
    let env = Env::new(&["a.jpg"]);
    let annotator = env.script("broken-timestamp", FAILING);

    env.cmd(&annotator)
        .arg("--quiet")
        .assert()
        .code(7)
        .stderr(contains("exit status 7"))
        .stderr(contains("cannot read media"));
}

#[test]
fn annotator_diagnostics_shown_on_success() {
    let env = Env::new(&["a.jpg"]);
    let annotator = env.script("chatty-timestamp", WARNS_ON_SUCCESS);

    env.cmd(&annotator)
        .assert()
        .success()
        .stdout(contains("processed files from"))
        .stderr(contains("b.jpg: could not read metadata, skipped"));

    assert_eq!(listing(&env.output), vec!["a.jpg"]);
}

#[test]
fn summary_counts_files_actually_written() {
    let env = Env::new(&["a.jpg", "b.jpg"]);
    let annotator = env.script("silent-timestamp", WRITES_NOTHING);

    env.cmd(&annotator)
        .assert()
        .success()
        .stdout(contains("2 of 2 new files did not appear"))
        .stdout(contains("Stamped 0 new files"));
}

#[test]
fn quiet_dry_run_still_prints_command() {
    let env = Env::new(&["a.jpg"]);
    let annotator = env.script("fake-timestamp", COPY_IF_ABSENT);

    env.cmd(&annotator)
        .args(["--quiet", "--dry-run"])
        .assert()
        .success()
        .stdout(contains("[DRY]"))
        .stdout(contains("--format"));

    assert!(listing(&env.output).is_empty());
}
