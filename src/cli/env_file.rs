//! In-place editing of `KEY=value` lines in a `.env` file.
//! Comments, blank lines and ordering are preserved.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::AppError;

pub struct EnvFile {
    path: PathBuf,
    lines: Vec<String>,
}

/// `(previous value, new value)` of an edited key.
pub type KeyChange = (Option<String>, String);

impl EnvFile {
    /// Read `path`; a missing file starts out empty and is created on save.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, AppError> {
        let path = path.into();
        let lines = match fs::read_to_string(&path) {
            Ok(text) => text.lines().map(str::to_string).collect(),
            Err(e) if e.kind() == ErrorKind::NotFound => Vec::new(),
            Err(e) => return Err(e.into()),
        };
        Ok(Self { path, lines })
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.lines
            .iter()
            .find_map(|line| split_line(line).filter(|(k, _)| *k == key).map(|(_, v)| unquote(v)))
    }

    /// Replace the first `key=` line or append one. Returns the previous value.
    pub fn set(&mut self, key: &str, value: &str) -> Option<String> {
        let rendered = format!("{}={}", key, quote(value));
        let position = self
            .lines
            .iter()
            .position(|line| split_line(line).is_some_and(|(k, _)| k == key));
        match position {
            Some(i) => {
                let previous = split_line(&self.lines[i]).map(|(_, v)| unquote(v));
                self.lines[i] = rendered;
                previous
            }
            None => {
                self.lines.push(rendered);
                None
            }
        }
    }

    pub fn save(&self) -> Result<(), AppError> {
        let mut text = self.lines.join("\n");
        text.push('\n');
        fs::write(&self.path, text)?;
        Ok(())
    }
}

/// Open, set one key, save.
pub fn edit_key(path: &Path, key: &str, value: &str) -> Result<KeyChange, AppError> {
    let mut file = EnvFile::open(path)?;
    let previous = file.set(key, value);
    file.save()?;
    tracing::debug!(path = %path.display(), key, "env key updated");
    Ok((previous, value.to_string()))
}

fn split_line(line: &str) -> Option<(&str, &str)> {
    let trimmed = line.trim_start();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return None;
    }
    let trimmed = trimmed.strip_prefix("export ").unwrap_or(trimmed);
    let (key, value) = trimmed.split_once('=')?;
    Some((key.trim(), value.trim()))
}

fn unquote(value: &str) -> String {
    for q in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(q) && value.ends_with(q) {
            return value[1..value.len() - 1].to_string();
        }
    }
    value.to_string()
}

/// Single quotes keep the value literal for dotenv parsers (no `$` expansion).
fn quote(value: &str) -> String {
    let plain = value
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.' | '/' | ':'));
    if plain && !value.is_empty() {
        value.to_string()
    } else {
        format!("'{}'", value)
    }
}
