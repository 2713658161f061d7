// outputs.rs — Step outputs.
//
// On a runner, outputs are appended to the file named by GITHUB_OUTPUT using
// the multi-line heredoc form:
//
//   name<<ghadelimiter_<uuid>
//   value
//   ghadelimiter_<uuid>
//
// Outside a runner they are only logged.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::error::{ActionError, Result};

/// Destination for the pass's step outputs.
pub trait StepOutputs {
    fn set_output(&mut self, name: &str, value: &str) -> Result<()>;
}

/// Appends outputs to the runner's `GITHUB_OUTPUT` file.
pub struct GithubOutputFile {
    path: PathBuf,
}

impl GithubOutputFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StepOutputs for GithubOutputFile {
    fn set_output(&mut self, name: &str, value: &str) -> Result<()> {
        let record = heredoc(name, value, &format!("ghadelimiter_{}", Uuid::new_v4()))?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|source| ActionError::Output {
                name: name.to_string(),
                source,
            })?;
        file.write_all(record.as_bytes())
            .map_err(|source| ActionError::Output {
                name: name.to_string(),
                source,
            })?;

        tracing::debug!("set output {} ({} bytes)", name, value.len());
        Ok(())
    }
}

/// Logs outputs instead of publishing them; used when `GITHUB_OUTPUT` is unset.
#[derive(Debug, Default)]
pub struct LoggedOutputs;

impl StepOutputs for LoggedOutputs {
    fn set_output(&mut self, name: &str, value: &str) -> Result<()> {
        tracing::info!("output {}={}", name, value);
        Ok(())
    }
}

fn heredoc(name: &str, value: &str, delimiter: &str) -> Result<String> {
    if name.contains(delimiter) || value.contains(delimiter) {
        return Err(ActionError::OutputDelimiter(name.to_string()));
    }
    Ok(format!("{name}<<{delimiter}\n{value}\n{delimiter}\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heredoc_wraps_multiline_values() {
        let record = heredoc("artifact_list", "[1,\n2]", "EOF_X").unwrap();
        assert_eq!(record, "artifact_list<<EOF_X\n[1,\n2]\nEOF_X\n");
    }

    #[test]
    fn heredoc_rejects_delimiter_in_value() {
        let result = heredoc("artifact_id", "x EOF_X y", "EOF_X");
        assert!(matches!(result, Err(ActionError::OutputDelimiter(name)) if name == "artifact_id"));
    }

    #[test]
    fn output_file_appends_records() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("github_output");
        std::fs::write(&path, "previous<<D\nkeep\nD\n").unwrap();

        let mut outputs = GithubOutputFile::new(&path);
        outputs.set_output("artifact_id", "11").unwrap();
        outputs.set_output("artifact_url", "").unwrap();

        let content = std::fs::read_to_string(outputs.path()).unwrap();
        assert!(content.starts_with("previous<<D\nkeep\nD\n"));

        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 3 + 3 + 3);
        assert!(lines[3].starts_with("artifact_id<<ghadelimiter_"));
        assert_eq!(lines[4], "11");
        assert_eq!(lines[5], &lines[3]["artifact_id<<".len()..]);
        assert!(lines[6].starts_with("artifact_url<<ghadelimiter_"));
        assert_eq!(lines[7], "");
    }

    #[test]
    fn output_file_in_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let mut outputs = GithubOutputFile::new(dir.path().join("no/such/dir/out"));
        assert!(matches!(
            outputs.set_output("artifact_id", "1"),
            Err(ActionError::Output { .. })
        ));
    }
}
