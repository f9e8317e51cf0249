//! Replays a JSON command script against a [`Store`].
//!
//! A script is an array of steps tagged by `op`:
//!
//! ```json
//! [
//!   { "op": "create_folder", "parent": "", "name": "src" },
//!   { "op": "open_file", "path": "src/index.ts" },
//!   { "op": "git_push" },
//!   { "op": "wait", "ms": 100 }
//! ]
//! ```

use serde::Deserialize;
use std::time::{Duration, Instant};

use crate::kernel::{Action, Effect, Store};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum ScriptStep {
    CreateFile {
        #[serde(default)]
        parent: String,
        name: String,
    },
    CreateFolder {
        #[serde(default)]
        parent: String,
        name: String,
    },
    Delete {
        path: String,
    },
    ToggleFolder {
        path: String,
    },
    OpenFile {
        path: String,
    },
    CloseFile {
        path: String,
    },
    SetActiveFile {
        path: String,
    },
    UpdateFileContent {
        path: String,
        content: String,
    },
    GitCommitMessage {
        message: String,
    },
    GitStage {
        path: String,
    },
    GitUnstage {
        path: String,
    },
    GitCreateBranch {
        name: String,
    },
    GitSwitchBranch {
        name: String,
    },
    GitCommit,
    GitPull,
    GitPush,
    GitCancel,
    Wait {
        ms: u64,
    },
}

impl ScriptStep {
    /// `Wait` has no action of its own; the runner sleeps and ticks instead.
    pub fn into_action(self, now: Instant) -> Option<Action> {
        let action = match self {
            ScriptStep::CreateFile { parent, name } => Action::CreateFile { parent, name },
            ScriptStep::CreateFolder { parent, name } => Action::CreateFolder { parent, name },
            ScriptStep::Delete { path } => Action::DeletePath { path },
            ScriptStep::ToggleFolder { path } => Action::ToggleFolder { path },
            ScriptStep::OpenFile { path } => Action::OpenFile { path },
            ScriptStep::CloseFile { path } => Action::CloseFile { path },
            ScriptStep::SetActiveFile { path } => Action::SetActiveFile { path },
            ScriptStep::UpdateFileContent { path, content } => {
                Action::UpdateFileContent { path, content }
            }
            ScriptStep::GitCommitMessage { message } => Action::GitSetCommitMessage { message },
            ScriptStep::GitStage { path } => Action::GitStage { path },
            ScriptStep::GitUnstage { path } => Action::GitUnstage { path },
            ScriptStep::GitCreateBranch { name } => Action::GitCreateBranch { name },
            ScriptStep::GitSwitchBranch { name } => Action::GitSwitchBranch { name },
            ScriptStep::GitCommit => Action::GitCommit { now },
            ScriptStep::GitPull => Action::GitPull { now },
            ScriptStep::GitPush => Action::GitPush { now },
            ScriptStep::GitCancel => Action::GitCancel,
            ScriptStep::Wait { .. } => return None,
        };
        Some(action)
    }
}

pub fn parse_script(source: &str) -> serde_json::Result<Vec<ScriptStep>> {
    serde_json::from_str(source)
}

/// Runs every step in order, then waits out any deferred work still pending.
/// Returns all effects produced along the way.
pub async fn replay(store: &mut Store, steps: Vec<ScriptStep>) -> Vec<Effect> {
    let mut effects = Vec::new();

    for step in steps {
        match step {
            ScriptStep::Wait { ms } => {
                tokio::time::sleep(Duration::from_millis(ms)).await;
                let result = store.dispatch(Action::Tick {
                    now: Instant::now(),
                });
                effects.extend(result.effects);
            }
            step => {
                tracing::debug!(?step, "replaying step");
                if let Some(action) = step.into_action(Instant::now()) {
                    effects.extend(store.dispatch(action).effects);
                }
            }
        }
    }

    while let Some(deadline) = store.next_deadline() {
        tokio::time::sleep_until(tokio::time::Instant::from_std(deadline)).await;
        let result = store.dispatch(Action::Tick {
            now: Instant::now(),
        });
        effects.extend(result.effects);
    }

    effects
}
