// Test utility module for awaremap integration tests
#![allow(dead_code)]

use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

// Binary execution result for tests that need to verify CLI behavior
#[derive(Debug)]
pub struct BinaryResult {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
}

impl BinaryResult {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Run the awaremap binary in `dir`, optionally feeding `stdin`.
pub fn run_awaremap(dir: &Path, args: &[&str], stdin: Option<&str>) -> BinaryResult {
    let mut child = Command::new(env!("CARGO_BIN_EXE_awaremap"))
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .env_remove("AWAREMAP_NARRATOR")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn awaremap");

    {
        let mut pipe = child.stdin.take().expect("stdin is piped");
        if let Some(input) = stdin {
            pipe.write_all(input.as_bytes()).expect("Failed to write stdin");
        }
    }

    let output = child.wait_with_output().expect("Failed to wait for awaremap");
    BinaryResult {
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        exit_code: output.status.code().unwrap_or(-1),
    }
}

/// JSON object answering every standard question with `value`.
pub fn uniform_submission(value: u8) -> serde_json::Value {
    let map: serde_json::Map<String, serde_json::Value> = (1..=43)
        .map(|q| (format!("q{q}"), serde_json::Value::String(value.to_string())))
        .collect();
    serde_json::Value::Object(map)
}
