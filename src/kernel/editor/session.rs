use compact_str::CompactString;
use ropey::Rope;
use serde::Serialize;
use std::fmt;

use super::template::default_content;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorError {
    EmptyPath,
    NotFound(String),
    InvalidActiveFile(String),
}

impl fmt::Display for EditorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditorError::EmptyPath => write!(f, "path is empty"),
            EditorError::NotFound(path) => write!(f, "file is not open: {}", path),
            EditorError::InvalidActiveFile(path) => {
                write!(f, "cannot activate a file that is not open: {}", path)
            }
        }
    }
}

impl std::error::Error for EditorError {}

#[derive(Debug, Clone)]
pub struct OpenFile {
    path: CompactString,
    name: CompactString,
    content: Rope,
    dirty: bool,
}

impl OpenFile {
    fn new(path: &str) -> Self {
        let name = file_name(path);
        Self {
            path: CompactString::from(path),
            name: CompactString::from(name),
            content: Rope::from_str(&default_content(name)),
            dirty: false,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn text(&self) -> &Rope {
        &self.content
    }

    pub fn content(&self) -> String {
        self.content.to_string()
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }
}

/// Last path segment; a trailing slash leaves the whole path as the name.
fn file_name(path: &str) -> &str {
    match path.rsplit('/').next() {
        Some(name) if !name.is_empty() => name,
        _ => path,
    }
}

/// Open files in open order plus the active one.
///
/// `active` indexes into `files`, so it can only ever point at an open file.
#[derive(Debug, Default)]
pub struct EditorSession {
    files: Vec<OpenFile>,
    active: Option<usize>,
}

impl EditorSession {
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, path: &str) -> Option<usize> {
        self.files.iter().position(|f| f.path.as_str() == path)
    }

    /// Opens `path`, or just activates it when it is already open.
    pub fn open_file(&mut self, path: &str) -> Result<bool, EditorError> {
        if path.is_empty() {
            return Err(EditorError::EmptyPath);
        }

        if let Some(index) = self.position(path) {
            let changed = self.active != Some(index);
            self.active = Some(index);
            return Ok(changed);
        }

        self.files.push(OpenFile::new(path));
        self.active = Some(self.files.len() - 1);
        tracing::debug!(path, open = self.files.len(), "file opened");
        Ok(true)
    }

    /// Closes `path`. When it was active, the first remaining file takes over.
    pub fn close_file(&mut self, path: &str) -> Result<(), EditorError> {
        let index = self
            .position(path)
            .ok_or_else(|| EditorError::NotFound(path.to_string()))?;

        self.files.remove(index);
        self.active = match self.active {
            _ if self.files.is_empty() => None,
            Some(active) if active == index => Some(0),
            Some(active) if active > index => Some(active - 1),
            other => other,
        };
        tracing::debug!(path, active = ?self.active_file(), "file closed");
        Ok(())
    }

    pub fn set_active_file(&mut self, path: &str) -> Result<bool, EditorError> {
        let index = self
            .position(path)
            .ok_or_else(|| EditorError::InvalidActiveFile(path.to_string()))?;
        let changed = self.active != Some(index);
        self.active = Some(index);
        Ok(changed)
    }

    /// Replaces the buffer wholesale. Marks the file dirty even if the text is unchanged.
    pub fn update_file_content(&mut self, path: &str, content: &str) -> Result<(), EditorError> {
        let file = self
            .files
            .iter_mut()
            .find(|f| f.path.as_str() == path)
            .ok_or_else(|| EditorError::NotFound(path.to_string()))?;
        file.content = Rope::from_str(content);
        file.dirty = true;
        Ok(())
    }

    pub fn open_files(&self) -> &[OpenFile] {
        &self.files
    }

    pub fn active(&self) -> Option<&OpenFile> {
        self.active.and_then(|index| self.files.get(index))
    }

    pub fn active_file(&self) -> Option<&str> {
        self.active().map(OpenFile::path)
    }

    pub fn get(&self, path: &str) -> Option<&OpenFile> {
        self.files.iter().find(|f| f.path.as_str() == path)
    }

    pub fn is_open(&self, path: &str) -> bool {
        self.position(path).is_some()
    }

    pub fn snapshot(&self) -> EditorSnapshot {
        EditorSnapshot {
            open_files: self
                .files
                .iter()
                .map(|f| OpenFileSnapshot {
                    path: f.path.to_string(),
                    name: f.name.to_string(),
                    content: f.content(),
                    is_dirty: f.dirty,
                })
                .collect(),
            active_file: self.active_file().map(str::to_string),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenFileSnapshot {
    pub path: String,
    pub name: String,
    pub content: String,
    pub is_dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorSnapshot {
    pub open_files: Vec<OpenFileSnapshot>,
    pub active_file: Option<String>,
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/editor/session.rs"]
mod tests;
