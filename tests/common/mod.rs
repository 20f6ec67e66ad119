//! Shared testing utilities for vprompt CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated data directory for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        Self { root }
    }

    /// Directory passed to the binary as `VPROMPT_HOME`.
    pub fn data_dir(&self) -> PathBuf {
        self.root.path().join("data")
    }

    /// Emulated `$HOME`, kept separate from the data directory.
    pub fn home(&self) -> &Path {
        self.root.path()
    }

    /// Build a command for invoking the compiled `vprompt` binary.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("vprompt").expect("Failed to locate vprompt binary");
        cmd.current_dir(self.root.path())
            .env("HOME", self.home())
            .env("VPROMPT_HOME", self.data_dir())
            .env_remove("RUST_LOG");
        cmd
    }

    /// Path to the key-value storage file.
    pub fn storage_path(&self) -> PathBuf {
        self.data_dir().join("storage.json")
    }

    /// Write raw content to the storage file.
    pub fn write_storage(&self, content: &str) {
        fs::create_dir_all(self.data_dir()).expect("Failed to create data directory");
        fs::write(self.storage_path(), content).expect("Failed to write storage file");
    }

    /// Write `config.toml` into the data directory.
    pub fn write_config(&self, content: &str) {
        fs::create_dir_all(self.data_dir()).expect("Failed to create data directory");
        fs::write(self.data_dir().join("config.toml"), content)
            .expect("Failed to write config file");
    }

    /// Parse the storage file as a JSON object.
    pub fn read_storage(&self) -> serde_json::Value {
        let content = fs::read_to_string(self.storage_path()).expect("Failed to read storage");
        serde_json::from_str(&content).expect("storage should be a JSON object")
    }

    /// Parse the user preset collection stored under `key`.
    pub fn stored_presets(&self, key: &str) -> Vec<serde_json::Value> {
        let storage = self.read_storage();
        let raw = storage[key].as_str().expect("preset entry should be a string");
        serde_json::from_str(raw).expect("preset entry should be a JSON array")
    }

    /// Run `generate` with the given arguments and parse stdout as JSON.
    pub fn generate_json(&self, args: &[&str]) -> serde_json::Value {
        let output = self.cli().arg("generate").args(args).output().expect("run generate");
        assert!(output.status.success(), "generate failed: {:?}", output);
        serde_json::from_slice(&output.stdout).expect("generate should print JSON")
    }
}
