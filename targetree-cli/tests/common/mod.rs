//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with temporary directories
//! - Command builder helpers isolated from the user's configuration
//! - Fixture helpers for directory layouts and target files

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Environment variables the CLI reads.
const TARGETREE_VARS: [&str; 6] = [
    "TARGETREE_CONFIG",
    "TARGETREE_SYNTAX",
    "TARGETREE_OUTPUT_FORMAT",
    "TARGETREE_TARGETS",
    "TARGETREE_ANCESTOR_POLICY",
    "TARGETREE_LOG_MODE",
];

/// Test environment with an isolated working directory.
///
/// This struct provides an isolated test environment with:
/// - A temporary directory used as the working directory
/// - An empty user configuration file, so `~/.targetree` is never read
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
    /// Path to the user configuration file
    pub user_config: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        let user_config = temp_path.join("user-config.yaml");
        std::fs::write(&user_config, "{}\n").expect("Failed to write user config");

        Self {
            temp_dir,
            temp_path,
            user_config,
        }
    }

    /// Get a bare command builder without pre-configured flags.
    ///
    /// The working directory is the test directory and every `TARGETREE_*`
    /// variable is removed.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("targetree").expect("Failed to find targetree binary");
        cmd.current_dir(&self.temp_path);
        for var in TARGETREE_VARS {
            cmd.env_remove(var);
        }
        cmd
    }

    /// Get a command builder with `--config` pointing at the test user
    /// configuration.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--config").arg(&self.user_config);
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Create a subdirectory in the test environment.
    pub fn create_dir(&self, name: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        std::fs::create_dir_all(&path).expect("Failed to create test directory");
        path
    }

    /// Create a file with the given contents, creating parent directories.
    pub fn create_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&path, contents).expect("Failed to write test file");
        path
    }

    /// Overwrite the user configuration file.
    pub fn write_user_config(&self, contents: &str) {
        std::fs::write(&self.user_config, contents).expect("Failed to write user config");
    }

    /// Run `resolve --format json` with `args` and parse the output.
    pub fn resolve_json(&self, args: &[&str]) -> serde_json::Value {
        let output = self
            .command()
            .arg("resolve")
            .arg("--format")
            .arg("json")
            .args(args)
            .output()
            .expect("Failed to run targetree");
        assert!(
            output.status.success(),
            "resolve failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        serde_json::from_slice(&output.stdout).expect("resolve output is not JSON")
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
