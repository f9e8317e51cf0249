use crate::kernel::{Action, Effect, GitError, GitStarted, Notification};

impl super::Store {
    pub(super) fn reduce_git_action(&mut self, action: Action) -> super::DispatchResult {
        let git = &mut self.state.git;
        match action {
            Action::GitSetCommitMessage { message } => {
                super::DispatchResult::changed(git.set_commit_message(&message))
            }
            Action::GitStage { path } => {
                super::DispatchResult::from_result(git.stage_file(&path).map(|()| true))
            }
            Action::GitUnstage { path } => {
                super::DispatchResult::from_result(git.unstage_file(&path).map(|()| true))
            }
            Action::GitCreateBranch { name } => {
                super::DispatchResult::from_result(git.create_branch(&name).map(|()| true))
            }
            Action::GitSwitchBranch { name } => {
                super::DispatchResult::from_result(git.switch_branch(&name))
            }
            Action::GitCommit { now } => started(git.commit(now)),
            Action::GitPull { now } => started(Ok(git.pull(now))),
            Action::GitPush { now } => started(Ok(git.push(now))),
            Action::GitCancel => super::DispatchResult::changed(git.cancel_pending()),
            _ => super::DispatchResult::unchanged(),
        }
    }
}

fn started(result: Result<GitStarted, GitError>) -> super::DispatchResult {
    let started = match result {
        Ok(started) => started,
        Err(e) => return super::DispatchResult::rejected(&e),
    };

    let mut effects = Vec::with_capacity(2);
    if let Some(old) = &started.superseded {
        effects.push(Effect::Notify(Notification::warning(format!(
            "git {} cancelled by {}",
            old.label(),
            started.op
        ))));
    }
    effects.push(Effect::ScheduleTick { at: started.at });
    super::DispatchResult {
        effects,
        state_changed: true,
    }
}
