//! Test harness for list-files integration tests

#![allow(dead_code)]

use std::path::Path;
use std::process::Command;

pub use list_files::test_utils::TestRepo;

pub fn run_list_files(dir: &Path, args: &[&str]) -> (String, String, bool) {
    let binary = env!("CARGO_BIN_EXE_list-files");
    let output = Command::new(binary)
        .args(args)
        .current_dir(dir)
        .output()
        .expect("Failed to run list-files");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let success = output.status.success();

    (stdout, stderr, success)
}

/// Output lines, in order.
pub fn lines(stdout: &str) -> Vec<&str> {
    stdout.lines().collect()
}

/// Sorted output lines, for assertions that do not depend on listing order.
pub fn sorted_lines(stdout: &str) -> Vec<&str> {
    let mut lines = lines(stdout);
    lines.sort_unstable();
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_harness_creates_temp_dir() {
        let repo = TestRepo::new();
        assert!(repo.path().exists());
    }

    #[test]
    fn test_harness_git_init() {
        let repo = TestRepo::with_git();
        assert!(repo.path().join(".git").exists());
    }

    #[test]
    fn test_harness_add_file() {
        let repo = TestRepo::new();
        let file_path = repo.add_file("nested/test.txt", "content");
        assert!(file_path.exists());
    }
}
