use std::fmt;
use std::time::Instant;

use super::{Action, AppState, Effect, Notification, WorkspaceSnapshot};

mod editor;
mod explorer;
mod git;

pub struct DispatchResult {
    pub effects: Vec<Effect>,
    pub state_changed: bool,
}

impl DispatchResult {
    fn unchanged() -> Self {
        Self {
            effects: Vec::new(),
            state_changed: false,
        }
    }

    fn changed(state_changed: bool) -> Self {
        Self {
            effects: Vec::new(),
            state_changed,
        }
    }

    /// A rejected action leaves state untouched and tells the user why.
    fn rejected(error: &impl fmt::Display) -> Self {
        tracing::warn!(error = %error, "action rejected");
        Self {
            effects: vec![Effect::Notify(Notification::warning(error.to_string()))],
            state_changed: false,
        }
    }

    fn from_result<E: fmt::Display>(result: Result<bool, E>) -> Self {
        match result {
            Ok(state_changed) => Self::changed(state_changed),
            Err(e) => Self::rejected(&e),
        }
    }
}

pub struct Store {
    state: AppState,
}

impl Store {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn snapshot(&self) -> WorkspaceSnapshot {
        self.state.snapshot()
    }

    /// Earliest instant at which a `Tick` has work to do.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.state.git.next_deadline()
    }

    pub fn dispatch(&mut self, action: Action) -> DispatchResult {
        match action {
            action @ (Action::CreateFile { .. }
            | Action::CreateFolder { .. }
            | Action::DeletePath { .. }
            | Action::ToggleFolder { .. }) => self.reduce_explorer_action(action),
            action @ (Action::OpenFile { .. }
            | Action::CloseFile { .. }
            | Action::SetActiveFile { .. }
            | Action::UpdateFileContent { .. }) => self.reduce_editor_action(action),
            Action::Tick { now } => self.tick(now),
            action => self.reduce_git_action(action),
        }
    }

    fn tick(&mut self, now: Instant) -> DispatchResult {
        let completed = self.state.git.poll(now);
        if completed.is_empty() {
            return DispatchResult::unchanged();
        }

        let mut effects: Vec<Effect> = completed
            .iter()
            .map(|op| Effect::Notify(Notification::info(format!("git {} finished", op.label()))))
            .collect();
        if let Some(at) = self.state.git.next_deadline() {
            effects.push(Effect::ScheduleTick { at });
        }
        DispatchResult {
            effects,
            state_changed: true,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/store.rs"]
mod tests;
