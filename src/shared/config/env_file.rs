// Discovery and parsing of the optional `.env` file.
//
// Purpose
// - Find at most one `KEY=VALUE` file and turn it into ordered key/value pairs.
//
// Boundaries
// - Knows nothing about which keys are valid. The resolver filters unknown keys.

use std::path::{Path, PathBuf};

use crate::shared::config::environment::Environment;

/// Environment variable naming an explicit env file path.
pub const ENV_FILE_VAR: &str = "ENV_FILE";
pub const ENV_FILE_NAME: &str = ".env";

#[derive(Debug, Clone)]
pub struct EnvFileLocator {
    install_dir: Option<PathBuf>,
    working_dir: PathBuf,
}

impl EnvFileLocator {
    pub fn new(install_dir: Option<PathBuf>, working_dir: impl Into<PathBuf>) -> Self {
        Self {
            install_dir,
            working_dir: working_dir.into(),
        }
    }

    /// Looks next to the running executable and in the current working directory.
    pub fn from_process() -> Self {
        let install_dir = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf));
        Self::new(install_dir, ".")
    }

    /// Candidate paths in priority order: `ENV_FILE`, install dir, working dir.
    pub fn candidates(&self, environment: &impl Environment) -> Vec<PathBuf> {
        let mut candidates = Vec::with_capacity(3);
        if let Some(explicit) = environment.var(ENV_FILE_VAR).filter(|p| !p.is_empty()) {
            candidates.push(PathBuf::from(explicit));
        }
        if let Some(install_dir) = &self.install_dir {
            candidates.push(install_dir.join(ENV_FILE_NAME));
        }
        candidates.push(self.working_dir.join(ENV_FILE_NAME));
        candidates
    }

    /// The first candidate that exists. Later candidates are never merged in.
    pub fn locate(&self, environment: &impl Environment) -> Option<PathBuf> {
        self.candidates(environment)
            .into_iter()
            .find(|candidate| candidate.exists())
    }
}

/// Strips one pair of matching surrounding `"` or `'` quotes.
pub fn unquote(value: &str) -> &str {
    let bytes = value.as_bytes();
    match (bytes.first(), bytes.last()) {
        (Some(b'"'), Some(b'"')) | (Some(b'\''), Some(b'\'')) if value.len() >= 2 => {
            &value[1..value.len() - 1]
        }
        _ => value,
    }
}

/// `None` for blank lines, comments and lines without `=`.
pub fn parse_line(line: &str) -> Option<(&str, &str)> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    let (key, value) = line.split_once('=')?;
    Some((key.trim(), unquote(value.trim())))
}

pub fn parse(contents: &str) -> Vec<(String, String)> {
    contents
        .lines()
        .filter_map(parse_line)
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect()
}
