//! Headless workspace core (state/action/effect).

pub mod action;
pub mod deferred;
pub mod editor;
pub mod effect;
pub mod git;
pub mod services;
pub mod state;
pub mod store;

pub use action::Action;
pub use deferred::{DeferredQueue, TaskHandle};
pub use editor::{EditorError, EditorSession, OpenFile};
pub use effect::{Effect, Notification, NotificationLevel};
pub use git::{GitError, GitOp, GitStarted, GitState};
pub use state::{AppState, WorkspaceSnapshot};
pub use store::{DispatchResult, Store};
