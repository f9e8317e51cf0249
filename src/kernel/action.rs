use std::time::Instant;

#[derive(Debug, Clone)]
pub enum Action {
    CreateFile {
        parent: String,
        name: String,
    },
    CreateFolder {
        parent: String,
        name: String,
    },
    DeletePath {
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
    GitSetCommitMessage {
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
    GitCommit {
        now: Instant,
    },
    GitPull {
        now: Instant,
    },
    GitPush {
        now: Instant,
    },
    GitCancel,
    Tick {
        now: Instant,
    },
}
