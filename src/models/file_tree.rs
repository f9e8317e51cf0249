//! 文件树数据模型

use compact_str::{format_compact, CompactString};
use rustc_hash::FxHashMap;
use serde::Serialize;
use slotmap::{new_key_type, SlotMap};
use std::fmt;

new_key_type! { pub struct NodeId; }

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    File,
    Folder,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileTreeError {
    InvalidName(String),
    NotFound(String),
    NotAFolder(String),
    AlreadyExists(String),
}

impl fmt::Display for FileTreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileTreeError::InvalidName(name) => write!(f, "invalid name: {:?}", name),
            FileTreeError::NotFound(path) => write!(f, "no such file or folder: {}", path),
            FileTreeError::NotAFolder(path) => write!(f, "not a folder: {}", path),
            FileTreeError::AlreadyExists(path) => write!(f, "already exists: {}", path),
        }
    }
}

impl std::error::Error for FileTreeError {}

#[derive(Debug, Clone)]
pub struct Node {
    kind: NodeKind,
    name: CompactString,
    path: CompactString,
    parent: Option<NodeId>,
    children: Option<Vec<NodeId>>,
    expanded: bool,
}

impl Node {
    fn new(kind: NodeKind, name: &str, path: CompactString, parent: Option<NodeId>) -> Self {
        Self {
            kind,
            name: CompactString::from(name),
            path,
            parent,
            children: matches!(kind, NodeKind::Folder).then(Vec::new),
            expanded: false,
        }
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Full slash-delimited path, fixed when the node was created.
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn is_folder(&self) -> bool {
        self.kind == NodeKind::Folder
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }
}

/// Hierarchical namespace of files and folders, addressed by path.
///
/// Nodes live in an arena keyed by [`NodeId`]; `id_by_path` is kept in step
/// with every insert and delete, so path lookups never walk the tree.
#[derive(Debug, Default)]
pub struct FileTree {
    arena: SlotMap<NodeId, Node>,
    roots: Vec<NodeId>,
    id_by_path: FxHashMap<CompactString, NodeId>,
}

const SAMPLE_ENTRIES: &[(&str, &str, NodeKind)] = &[
    ("", "src", NodeKind::Folder),
    ("src", "components", NodeKind::Folder),
    ("src/components", "App.tsx", NodeKind::File),
    ("src/components", "Header.tsx", NodeKind::File),
    ("src", "index.tsx", NodeKind::File),
    ("src", "App.css", NodeKind::File),
    ("", "public", NodeKind::Folder),
    ("public", "index.html", NodeKind::File),
    ("", "package.json", NodeKind::File),
    ("", "README.md", NodeKind::File),
];

impl FileTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starter project shown when a workspace opens without content.
    pub fn sample() -> Self {
        let mut tree = Self::new();
        for &(parent, name, kind) in SAMPLE_ENTRIES {
            if let Err(e) = tree.insert(parent, name, kind) {
                tracing::error!(parent, name, error = %e, "sample tree entry rejected");
            }
        }
        if let Some(node) = tree.find("src").and_then(|id| tree.arena.get_mut(id)) {
            node.expanded = true;
        }
        tree
    }

    pub fn create_file(&mut self, parent_path: &str, name: &str) -> Result<NodeId, FileTreeError> {
        self.insert(parent_path, name, NodeKind::File)
    }

    pub fn create_folder(
        &mut self,
        parent_path: &str,
        name: &str,
    ) -> Result<NodeId, FileTreeError> {
        self.insert(parent_path, name, NodeKind::Folder)
    }

    fn insert(
        &mut self,
        parent_path: &str,
        name: &str,
        kind: NodeKind,
    ) -> Result<NodeId, FileTreeError> {
        if name.is_empty() || name.contains('/') {
            return Err(FileTreeError::InvalidName(name.to_string()));
        }

        let parent = if parent_path.is_empty() {
            None
        } else {
            let id = self
                .find(parent_path)
                .ok_or_else(|| FileTreeError::NotFound(parent_path.to_string()))?;
            if !self.arena.get(id).is_some_and(Node::is_folder) {
                return Err(FileTreeError::NotAFolder(parent_path.to_string()));
            }
            Some(id)
        };

        let path = join_path(parent_path, name);
        if self.id_by_path.contains_key(path.as_str()) {
            return Err(FileTreeError::AlreadyExists(path.to_string()));
        }

        let id = self.arena.insert(Node::new(kind, name, path.clone(), parent));
        match parent {
            Some(parent_id) => {
                if let Some(children) = self
                    .arena
                    .get_mut(parent_id)
                    .and_then(|n| n.children.as_mut())
                {
                    children.push(id);
                }
            }
            None => self.roots.push(id),
        }

        tracing::debug!(path = %path, ?kind, "file tree node created");
        self.id_by_path.insert(path, id);
        Ok(id)
    }

    /// Removes the node at `path` together with everything below it.
    /// Returns the number of nodes removed.
    pub fn delete(&mut self, path: &str) -> Result<usize, FileTreeError> {
        let id = self
            .find(path)
            .ok_or_else(|| FileTreeError::NotFound(path.to_string()))?;

        match self.arena.get(id).and_then(|n| n.parent) {
            Some(parent_id) => {
                if let Some(children) = self
                    .arena
                    .get_mut(parent_id)
                    .and_then(|n| n.children.as_mut())
                {
                    children.retain(|&child| child != id);
                }
            }
            None => self.roots.retain(|&root| root != id),
        }

        let removed = self.remove_subtree(id);
        tracing::debug!(path, removed, "file tree node deleted");
        Ok(removed)
    }

    fn remove_subtree(&mut self, id: NodeId) -> usize {
        let mut removed = 0;
        let mut stack = vec![id];
        while let Some(node_id) = stack.pop() {
            if let Some(node) = self.arena.remove(node_id) {
                self.id_by_path.remove(node.path.as_str());
                if let Some(children) = node.children {
                    stack.extend(children);
                }
                removed += 1;
            }
        }
        removed
    }

    /// Flips the expanded flag of a folder and returns the new value.
    pub fn toggle_folder(&mut self, path: &str) -> Result<bool, FileTreeError> {
        let node = self
            .find(path)
            .and_then(|id| self.arena.get_mut(id))
            .ok_or_else(|| FileTreeError::NotFound(path.to_string()))?;
        if !node.is_folder() {
            return Err(FileTreeError::NotAFolder(path.to_string()));
        }
        node.expanded = !node.expanded;
        Ok(node.expanded)
    }

    pub fn find(&self, path: &str) -> Option<NodeId> {
        self.id_by_path.get(path).copied()
    }

    pub fn get(&self, path: &str) -> Option<&Node> {
        self.find(path).and_then(|id| self.arena.get(id))
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.arena.get(id)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.id_by_path.contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.arena
            .get(id)
            .and_then(|n| n.children.as_deref())
            .unwrap_or(&[])
    }
}

fn join_path(parent_path: &str, name: &str) -> CompactString {
    if parent_path.is_empty() {
        CompactString::from(name)
    } else {
        format_compact!("{}/{}", parent_path, name)
    }
}

/// Owned copy of a subtree, handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileNodeSnapshot {
    pub name: String,
    pub path: String,
    pub kind: NodeKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expanded: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<FileNodeSnapshot>>,
}

#[derive(Debug, Clone)]
pub struct FileTreeRow {
    pub id: NodeId,
    pub depth: u16,
    pub name: CompactString,
    pub is_folder: bool,
    pub is_expanded: bool,
}

impl FileTree {
    pub fn snapshot(&self) -> Vec<FileNodeSnapshot> {
        self.roots
            .iter()
            .filter_map(|&id| self.snapshot_node(id))
            .collect()
    }

    fn snapshot_node(&self, id: NodeId) -> Option<FileNodeSnapshot> {
        let node = self.arena.get(id)?;
        Some(FileNodeSnapshot {
            name: node.name.to_string(),
            path: node.path.to_string(),
            kind: node.kind,
            expanded: node.is_folder().then_some(node.expanded),
            children: node.children.as_ref().map(|children| {
                children
                    .iter()
                    .filter_map(|&child| self.snapshot_node(child))
                    .collect()
            }),
        })
    }

    /// Visible rows in display order; children of collapsed folders are skipped.
    pub fn rows(&self) -> Vec<FileTreeRow> {
        let mut result = Vec::new();
        let mut stack: Vec<(NodeId, u16)> = self.roots.iter().rev().map(|&id| (id, 0)).collect();

        while let Some((id, depth)) = stack.pop() {
            let Some(node) = self.arena.get(id) else {
                continue;
            };
            result.push(FileTreeRow {
                id,
                depth,
                name: node.name.clone(),
                is_folder: node.is_folder(),
                is_expanded: node.expanded,
            });

            if node.expanded {
                if let Some(children) = &node.children {
                    for &child in children.iter().rev() {
                        stack.push((child, depth.saturating_add(1)));
                    }
                }
            }
        }

        result
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/file_tree.rs"]
mod tests;
