use std::fs;

use assert_cmd::Command;
use tempfile::TempDir;

mod audit;
mod generate;
mod init;

/// A scratch project directory with helpers for driving the envdoc binary.
pub struct CliTest {
    dir: TempDir,
}

impl CliTest {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("create temp dir"),
        }
    }

    pub fn write_file(&self, path: &str, content: &str) {
        let full = self.dir.path().join(path);
        if let Some(parent) = full.parent() {
            fs::create_dir_all(parent).expect("create parent dirs");
        }
        fs::write(full, content).expect("write file");
    }

    pub fn read_file(&self, path: &str) -> String {
        fs::read_to_string(self.dir.path().join(path)).expect("read file")
    }

    pub fn exists(&self, path: &str) -> bool {
        self.dir.path().join(path).exists()
    }

    /// A command running in the scratch directory.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("envdoc").expect("binary builds");
        cmd.current_dir(self.dir.path());
        cmd
    }
}
