use serde::Serialize;

use super::editor::{EditorSession, EditorSnapshot};
use super::git::{GitSnapshot, GitState};
use super::services::settings::Settings;
use crate::models::{FileNodeSnapshot, FileTree};

/// Everything one workspace session owns. The stores never reach into each other.
#[derive(Debug)]
pub struct AppState {
    pub tree: FileTree,
    pub editor: EditorSession,
    pub git: GitState,
}

impl AppState {
    pub fn new(settings: &Settings) -> Self {
        let tree = if settings.workspace.seed_sample_tree {
            FileTree::sample()
        } else {
            FileTree::new()
        };
        Self::with_tree(tree, settings)
    }

    pub fn with_tree(tree: FileTree, settings: &Settings) -> Self {
        Self {
            tree,
            editor: EditorSession::new(),
            git: GitState::new(settings.git.clone()),
        }
    }

    pub fn snapshot(&self) -> WorkspaceSnapshot {
        WorkspaceSnapshot {
            file_tree: self.tree.snapshot(),
            editor: self.editor.snapshot(),
            git: self.git.snapshot(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceSnapshot {
    pub file_tree: Vec<FileNodeSnapshot>,
    pub editor: EditorSnapshot,
    pub git: GitSnapshot,
}
