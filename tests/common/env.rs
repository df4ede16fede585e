//! Test environment builder for isolated asset-stager testing.
//!
//! Provides `TestEnv` - a temp project directory with an optional
//! `node_modules/` tree and `stager.toml`, plus helpers to run the CLI.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Result of running an asset-stager command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Check if command succeeded
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Non-empty stdout lines
    pub fn stdout_lines(&self) -> Vec<&str> {
        self.stdout.lines().filter(|l| !l.trim().is_empty()).collect()
    }

    /// Parse every stdout line as JSON
    pub fn json_events(&self) -> Vec<serde_json::Value> {
        self.stdout_lines()
            .into_iter()
            .map(|l| {
                serde_json::from_str(l)
                    .unwrap_or_else(|e| panic!("stdout line is not JSON ({}): {}", e, l))
            })
            .collect()
    }
}

/// Isolated project directory
pub struct TestEnv {
    /// Temporary directory for the project
    pub project_root: TempDir,
    /// Path to the asset-stager binary
    bin: PathBuf,
}

impl TestEnv {
    /// Create a new TestEnvBuilder
    pub fn builder() -> TestEnvBuilder {
        TestEnvBuilder::default()
    }

    /// Get path relative to project root
    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    /// Run asset-stager with the project root as working directory
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_from_with_env(self.project_root.path(), args, &[])
    }

    /// Run asset-stager with extra env vars
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        self.run_from_with_env(self.project_root.path(), args, env_vars)
    }

    /// Run asset-stager from a specific directory
    pub fn run_from(&self, cwd: &Path, args: &[&str]) -> TestResult {
        self.run_from_with_env(cwd, args, &[])
    }

    fn run_from_with_env(&self, cwd: &Path, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(cwd)
            .args(args)
            .env("NO_COLOR", "1")
            .env("TERM", "dumb")
            .env_remove("RUST_LOG")
            .env_remove("ASSET_STAGER_DEPS_DIR")
            .env_remove("ASSET_STAGER_STATIC_DIR");

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute asset-stager");

        Self::output_to_result(output)
    }

    fn output_to_result(output: Output) -> TestResult {
        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }

    /// Write a file into the project (creating parents)
    pub fn write_project_file(&self, relative_path: &str, content: &[u8]) {
        let full_path = self.project_path(relative_path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
    }

    /// Files directly under `static/js`, sorted
    pub fn staged_js_files(&self) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(self.project_path("static/js"))
            .map(|entries| {
                entries
                    .flatten()
                    .map(|e| e.file_name().to_string_lossy().into_owned())
                    .collect()
            })
            .unwrap_or_default();
        names.sort();
        names
    }
}

/// Builder for TestEnv with fluent API
#[derive(Default)]
pub struct TestEnvBuilder {
    files: Vec<(String, Vec<u8>)>,
    config: Option<String>,
}

impl TestEnvBuilder {
    /// Add a library (or any file) at a project-relative path
    pub fn with_file(mut self, relative_path: &str, content: impl AsRef<[u8]>) -> Self {
        self.files
            .push((relative_path.to_string(), content.as_ref().to_vec()));
        self
    }

    /// Add all three default libraries
    pub fn with_all_libraries(self) -> Self {
        use super::fixtures::*;
        self.with_file(PLOTLY_SRC, PLOTLY_JS)
            .with_file(TAILWIND_SRC, TAILWIND_JS)
            .with_file(LUCIDE_SRC, LUCIDE_JS)
    }

    /// Write `stager.toml` in the project root
    pub fn with_config(mut self, content: &str) -> Self {
        self.config = Some(content.to_string());
        self
    }

    pub fn build(self) -> TestEnv {
        let env = TestEnv {
            project_root: TempDir::new().expect("Failed to create temp project"),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_asset-stager")),
        };

        for (path, content) in &self.files {
            env.write_project_file(path, content);
        }
        if let Some(config) = &self.config {
            env.write_project_file("stager.toml", config.as_bytes());
        }

        env
    }
}
