#![allow(dead_code)]

use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

pub const TEST_COLS: &str = "120";
pub const TEST_ROWS: &str = "80";

pub fn holofetch_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("holofetch"));
    for var in [
        "HOLOFETCH_COLS",
        "HOLOFETCH_ROWS",
        "HOLOFETCH_AVATAR_MIN_ROWS",
        "HOLOFETCH_HEADER_MIN_ROWS",
        "HOLOFETCH_LOG",
        "RUST_LOG",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

/// Scratch directory holding the files a run reads.
pub struct Fixture {
    dir: TempDir,
}

impl Fixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("create temp dir"),
        }
    }

    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, contents).expect("write fixture");
        path
    }

    /// `height` lines of `width` placeholder glyphs.
    pub fn avatar(&self, width: usize, height: usize) -> PathBuf {
        let line = "#".repeat(width);
        let art: String = (0..height).map(|_| format!("{line}\n")).collect();
        self.write("avatar.txt", &art)
    }

    pub fn sections(&self) -> PathBuf {
        self.write(
            "sections.json",
            r#"[{"header": "Info", "properties": [["CPU", "X"]]}]"#,
        )
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }
}
