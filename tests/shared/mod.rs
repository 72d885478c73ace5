use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempdir::TempDir;

pub struct SelfTestRun {
    pub output: Output,
    pub stdout: String,
    pub stderr: String,
}

/// Runs `matscratch-selftest` inside a fresh temp directory.
///
/// `config` (if any) is written to `config.yaml` in that directory first.
pub fn run_selftest(config: Option<&str>, args: &[&str]) -> (TempDir, SelfTestRun) {
    let dir = TempDir::new("matscratch").unwrap();
    let mut cmd = Command::new(binary());
    cmd.current_dir(dir.path());
    if let Some(config) = config {
        fs::write(dir.path().join("config.yaml"), config).unwrap();
        cmd.arg("-c").arg("config.yaml");
    }
    cmd.args(args);

    let output = cmd.output().unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
    (dir, SelfTestRun { output, stdout, stderr })
}

pub fn binary() -> PathBuf {
    Path::new(env!("CARGO_BIN_EXE_matscratch-selftest")).to_owned()
}
