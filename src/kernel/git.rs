//! Source-control panel state backed by a simulated repository.
//!
//! Commit, pull and push complete after a configured latency. Only one of
//! them is in flight at a time: starting another cancels the pending one.

use rustc_hash::FxHasher;
use serde::Serialize;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::time::{Duration, Instant};

use super::deferred::{DeferredQueue, TaskHandle};
use super::services::settings::GitSettings;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GitFileStatus {
    Modified,
    Added,
    Deleted,
    Renamed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GitFile {
    pub path: String,
    pub status: GitFileStatus,
}

impl GitFile {
    fn new(path: &str, status: GitFileStatus) -> Self {
        Self {
            path: path.to_string(),
            status,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GitCommit {
    pub hash: String,
    pub message: String,
    pub author: String,
    pub date: String,
}

impl GitCommit {
    fn new(hash: &str, message: &str, date: &str) -> Self {
        Self {
            hash: hash.to_string(),
            message: message.to_string(),
            author: AUTHOR.to_string(),
            date: date.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GitOp {
    /// `files` are the staged paths the commit took when it started.
    Commit { message: String, files: Vec<String> },
    Pull,
    Push,
}

impl GitOp {
    pub fn label(&self) -> &'static str {
        match self {
            GitOp::Commit { .. } => "commit",
            GitOp::Pull => "pull",
            GitOp::Push => "push",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GitError {
    NotFound(String),
    AlreadyExists(String),
    InvalidName(String),
    EmptyCommitMessage,
    NothingStaged,
}

impl fmt::Display for GitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GitError::NotFound(what) => write!(f, "not found: {}", what),
            GitError::AlreadyExists(name) => write!(f, "branch already exists: {}", name),
            GitError::InvalidName(name) => write!(f, "invalid branch name: {:?}", name),
            GitError::EmptyCommitMessage => write!(f, "commit message is empty"),
            GitError::NothingStaged => write!(f, "no staged changes to commit"),
        }
    }
}

impl std::error::Error for GitError {}

const AUTHOR: &str = "Developer";

/// Outcome of starting a deferred operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitStarted {
    pub op: &'static str,
    pub at: Instant,
    /// The operation that was in flight and got cancelled by this one.
    pub superseded: Option<GitOp>,
}

#[derive(Debug)]
pub struct GitState {
    current_branch: String,
    branches: Vec<String>,
    staged: Vec<GitFile>,
    unstaged: Vec<GitFile>,
    commits: Vec<GitCommit>,
    commit_message: String,
    latency: GitSettings,
    queue: DeferredQueue<GitOp>,
    pending: Option<TaskHandle>,
    commit_serial: u64,
}

impl GitState {
    pub fn new(latency: GitSettings) -> Self {
        Self {
            current_branch: "main".to_string(),
            branches: ["main", "develop", "feature/new-ui"]
                .into_iter()
                .map(str::to_string)
                .collect(),
            staged: Vec::new(),
            unstaged: vec![
                GitFile::new("src/components/IDE.tsx", GitFileStatus::Modified),
                GitFile::new("src/styles/global.css", GitFileStatus::Modified),
                GitFile::new("src/utils/helpers.ts", GitFileStatus::Added),
            ],
            commits: vec![
                GitCommit::new("a1b2c3d4", "Add AI assistant integration", "2 hours ago"),
                GitCommit::new("e5f6a7b8", "Implement live collaboration features", "1 day ago"),
                GitCommit::new("c9d0e1f2", "Enhanced debugging capabilities", "2 days ago"),
            ],
            commit_message: String::new(),
            latency,
            queue: DeferredQueue::new(),
            pending: None,
            commit_serial: 0,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    pub fn current_branch(&self) -> &str {
        &self.current_branch
    }

    pub fn branches(&self) -> &[String] {
        &self.branches
    }

    pub fn staged(&self) -> &[GitFile] {
        &self.staged
    }

    pub fn unstaged(&self) -> &[GitFile] {
        &self.unstaged
    }

    /// Newest first.
    pub fn commits(&self) -> &[GitCommit] {
        &self.commits
    }

    pub fn commit_message(&self) -> &str {
        &self.commit_message
    }

    pub fn set_commit_message(&mut self, message: &str) -> bool {
        if self.commit_message == message {
            return false;
        }
        self.commit_message = message.to_string();
        true
    }

    pub fn stage_file(&mut self, path: &str) -> Result<(), GitError> {
        move_entry(&mut self.unstaged, &mut self.staged, path)
    }

    pub fn unstage_file(&mut self, path: &str) -> Result<(), GitError> {
        move_entry(&mut self.staged, &mut self.unstaged, path)
    }

    pub fn create_branch(&mut self, name: &str) -> Result<(), GitError> {
        let name = name.trim();
        if name.is_empty() || name.contains(char::is_whitespace) {
            return Err(GitError::InvalidName(name.to_string()));
        }
        if self.branches.iter().any(|b| b == name) {
            return Err(GitError::AlreadyExists(name.to_string()));
        }
        self.branches.push(name.to_string());
        tracing::debug!(branch = name, "git branch created");
        Ok(())
    }

    pub fn switch_branch(&mut self, name: &str) -> Result<bool, GitError> {
        if !self.branches.iter().any(|b| b == name) {
            return Err(GitError::NotFound(format!("branch {}", name)));
        }
        if self.current_branch == name {
            return Ok(false);
        }
        self.current_branch = name.to_string();
        Ok(true)
    }

    /// Starts a commit of the staged changes with the current message.
    pub fn commit(&mut self, now: Instant) -> Result<GitStarted, GitError> {
        let message = self.commit_message.trim();
        if message.is_empty() {
            return Err(GitError::EmptyCommitMessage);
        }
        if self.staged.is_empty() {
            return Err(GitError::NothingStaged);
        }
        let op = GitOp::Commit {
            message: message.to_string(),
            files: self.staged.iter().map(|f| f.path.clone()).collect(),
        };
        Ok(self.begin(now, self.latency.commit_latency(), op))
    }

    pub fn pull(&mut self, now: Instant) -> GitStarted {
        self.begin(now, self.latency.pull_latency(), GitOp::Pull)
    }

    pub fn push(&mut self, now: Instant) -> GitStarted {
        self.begin(now, self.latency.push_latency(), GitOp::Push)
    }

    fn begin(&mut self, now: Instant, delay: Duration, op: GitOp) -> GitStarted {
        let label = op.label();
        let superseded = self.take_pending();
        if let Some(old) = &superseded {
            tracing::info!(op = label, superseded = old.label(), "pending git operation cancelled");
        }
        let delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        tracing::debug!(op = label, delay_ms, "git operation started");
        self.pending = Some(self.queue.schedule(now, delay, op));
        GitStarted {
            op: label,
            at: now.checked_add(delay).unwrap_or(now),
            superseded,
        }
    }

    /// Drops the in-flight operation, if any, so its completion never applies.
    pub fn cancel_pending(&mut self) -> bool {
        self.take_pending().is_some()
    }

    fn take_pending(&mut self) -> Option<GitOp> {
        let handle = self.pending.take()?;
        self.queue.cancel(handle)
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.queue.next_deadline()
    }

    /// Applies every operation whose latency has elapsed and returns them.
    pub fn poll(&mut self, now: Instant) -> Vec<GitOp> {
        let due = self.queue.take_due(now);
        let mut completed = Vec::with_capacity(due.len());
        for (handle, op) in due {
            if self.pending == Some(handle) {
                self.pending = None;
            }
            self.complete(&op);
            completed.push(op);
        }
        completed
    }

    fn complete(&mut self, op: &GitOp) {
        match op {
            GitOp::Commit { message, files } => {
                let hash = self.next_commit_hash(message);
                // Anything staged or typed while the commit was pending stays.
                self.staged.retain(|f| !files.contains(&f.path));
                if self.commit_message.trim() == message.as_str() {
                    self.commit_message.clear();
                }
                self.commits.insert(0, GitCommit::new(&hash, message, "just now"));
                tracing::info!(hash = %hash, files = files.len(), "git commit completed");
            }
            GitOp::Pull | GitOp::Push => {
                tracing::info!(op = op.label(), branch = %self.current_branch, "git operation completed");
            }
        }
    }

    fn next_commit_hash(&mut self, message: &str) -> String {
        self.commit_serial = self.commit_serial.wrapping_add(1);
        let mut hasher = FxHasher::default();
        self.commit_serial.hash(&mut hasher);
        message.hash(&mut hasher);
        self.current_branch.hash(&mut hasher);
        format!("{:08x}", hasher.finish() as u32)
    }

    pub fn snapshot(&self) -> GitSnapshot {
        GitSnapshot {
            current_branch: self.current_branch.clone(),
            branches: self.branches.clone(),
            staged: self.staged.clone(),
            unstaged: self.unstaged.clone(),
            commits: self.commits.clone(),
            commit_message: self.commit_message.clone(),
            is_loading: self.is_loading(),
        }
    }
}

fn move_entry(from: &mut Vec<GitFile>, to: &mut Vec<GitFile>, path: &str) -> Result<(), GitError> {
    let index = from
        .iter()
        .position(|f| f.path == path)
        .ok_or_else(|| GitError::NotFound(path.to_string()))?;
    to.push(from.remove(index));
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GitSnapshot {
    pub current_branch: String,
    pub branches: Vec<String>,
    pub staged: Vec<GitFile>,
    pub unstaged: Vec<GitFile>,
    pub commits: Vec<GitCommit>,
    pub commit_message: String,
    pub is_loading: bool,
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/git.rs"]
mod tests;
