use super::*;

fn fast() -> GitSettings {
    GitSettings {
        commit_latency_ms: 10,
        pull_latency_ms: 20,
        push_latency_ms: 30,
    }
}

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

#[test]
fn seeded_state_mirrors_sample_repository() {
    let git = GitState::new(GitSettings::default());
    assert_eq!(git.current_branch(), "main");
    assert_eq!(git.branches(), vec!["main", "develop", "feature/new-ui"]);
    assert!(git.staged().is_empty());
    assert_eq!(git.unstaged().len(), 3);
    assert_eq!(git.commits().len(), 3);
    assert!(!git.is_loading());
}

#[test]
fn stage_and_unstage_move_entries_to_the_end() {
    let mut git = GitState::new(fast());
    git.stage_file("src/styles/global.css").unwrap();
    assert_eq!(git.staged().len(), 1);
    assert_eq!(git.unstaged().len(), 2);

    git.unstage_file("src/styles/global.css").unwrap();
    assert!(git.staged().is_empty());
    assert_eq!(git.unstaged().last().unwrap().path, "src/styles/global.css");
    assert_eq!(git.unstaged().last().unwrap().status, GitFileStatus::Modified);
}

#[test]
fn staging_unknown_path_is_not_found() {
    let mut git = GitState::new(fast());
    assert_eq!(
        git.stage_file("nope.ts"),
        Err(GitError::NotFound("nope.ts".to_string()))
    );
    assert_eq!(
        git.unstage_file("src/components/IDE.tsx"),
        Err(GitError::NotFound("src/components/IDE.tsx".to_string()))
    );
}

#[test]
fn commit_requires_message_and_staged_changes() {
    let start = Instant::now();
    let mut git = GitState::new(fast());

    git.stage_file("src/components/IDE.tsx").unwrap();
    git.set_commit_message("   ");
    assert_eq!(git.commit(start), Err(GitError::EmptyCommitMessage));

    git.unstage_file("src/components/IDE.tsx").unwrap();
    git.set_commit_message("fix");
    assert_eq!(git.commit(start), Err(GitError::NothingStaged));
    assert!(!git.is_loading());
}

#[test]
fn commit_completes_after_latency() {
    let start = Instant::now();
    let mut git = GitState::new(fast());
    git.stage_file("src/utils/helpers.ts").unwrap();
    git.set_commit_message("  Add helpers ");

    let started = git.commit(start).unwrap();
    let deadline = started.at;
    assert_eq!(deadline, start + ms(10));
    assert_eq!(started.op, "commit");
    assert_eq!(started.superseded, None);
    assert!(git.is_loading());
    assert_eq!(git.next_deadline(), Some(deadline));

    assert!(git.poll(start + ms(9)).is_empty());
    assert_eq!(git.staged().len(), 1);

    let done = git.poll(deadline);
    assert_eq!(
        done,
        vec![GitOp::Commit {
            message: "Add helpers".to_string(),
            files: vec!["src/utils/helpers.ts".to_string()],
        }]
    );
    assert!(!git.is_loading());
    assert!(git.staged().is_empty());
    assert!(git.commit_message().is_empty());
    assert_eq!(git.commits().len(), 4);
    assert_eq!(git.commits()[0].message, "Add helpers");
    assert_eq!(git.commits()[0].hash.len(), 8);
}

#[test]
fn newer_operation_supersedes_pending_one() {
    let start = Instant::now();
    let mut git = GitState::new(fast());
    git.stage_file("src/utils/helpers.ts").unwrap();
    git.set_commit_message("first");
    git.commit(start).unwrap();

    let started = git.push(start + ms(1));
    assert_eq!(
        started.superseded,
        Some(GitOp::Commit {
            message: "first".to_string(),
            files: vec!["src/utils/helpers.ts".to_string()],
        })
    );
    let done = git.poll(start + ms(100));
    assert_eq!(done, vec![GitOp::Push]);
    assert_eq!(git.staged().len(), 1);
    assert_eq!(git.commits().len(), 3);
    assert!(!git.is_loading());
}

#[test]
fn rapid_repeated_commits_apply_once() {
    let start = Instant::now();
    let mut git = GitState::new(fast());
    git.stage_file("src/utils/helpers.ts").unwrap();
    git.set_commit_message("one");
    git.commit(start).unwrap();
    git.set_commit_message("two");
    git.commit(start + ms(2)).unwrap();

    let done = git.poll(start + ms(100));
    assert_eq!(done.len(), 1);
    assert_eq!(git.commits().len(), 4);
    assert_eq!(git.commits()[0].message, "two");
}

#[test]
fn commit_keeps_work_done_while_pending() {
    let start = Instant::now();
    let mut git = GitState::new(fast());
    git.stage_file("src/utils/helpers.ts").unwrap();
    git.set_commit_message("helpers");
    git.commit(start).unwrap();

    git.stage_file("src/styles/global.css").unwrap();
    git.set_commit_message("next message");
    assert_eq!(git.poll(start + ms(100)).len(), 1);

    let staged: Vec<&str> = git.staged().iter().map(|f| f.path.as_str()).collect();
    assert_eq!(staged, vec!["src/styles/global.css"]);
    let unstaged: Vec<&str> = git.unstaged().iter().map(|f| f.path.as_str()).collect();
    assert_eq!(unstaged, vec!["src/components/IDE.tsx"]);
    assert_eq!(git.commit_message(), "next message");
    assert_eq!(git.commits()[0].message, "helpers");
}

#[test]
fn commit_drops_files_unstaged_while_pending() {
    let start = Instant::now();
    let mut git = GitState::new(fast());
    git.stage_file("src/utils/helpers.ts").unwrap();
    git.stage_file("src/components/IDE.tsx").unwrap();
    git.set_commit_message("both");
    git.commit(start).unwrap();

    git.unstage_file("src/components/IDE.tsx").unwrap();
    git.poll(start + ms(100));

    assert!(git.staged().is_empty());
    assert!(git
        .unstaged()
        .iter()
        .any(|f| f.path == "src/components/IDE.tsx"));
    assert!(git.commit_message().is_empty());
}

#[test]
fn cancel_pending_clears_loading_and_drops_completion() {
    let start = Instant::now();
    let mut git = GitState::new(fast());
    git.pull(start);
    assert!(git.cancel_pending());
    assert!(!git.is_loading());
    assert!(!git.cancel_pending());
    assert!(git.poll(start + ms(100)).is_empty());
    assert_eq!(git.next_deadline(), None);
}

#[test]
fn branches_are_created_once_and_switchable() {
    let mut git = GitState::new(fast());
    git.create_branch("topic").unwrap();
    assert_eq!(
        git.create_branch("topic"),
        Err(GitError::AlreadyExists("topic".to_string()))
    );
    assert!(matches!(
        git.create_branch(" "),
        Err(GitError::InvalidName(_))
    ));

    assert_eq!(git.switch_branch("topic"), Ok(true));
    assert_eq!(git.switch_branch("topic"), Ok(false));
    assert!(matches!(
        git.switch_branch("missing"),
        Err(GitError::NotFound(_))
    ));
    assert_eq!(git.current_branch(), "topic");
}

#[test]
fn snapshot_serializes_camel_case() {
    let git = GitState::new(fast());
    let json = serde_json::to_value(git.snapshot()).unwrap();
    assert_eq!(json["currentBranch"], "main");
    assert_eq!(json["isLoading"], false);
    assert_eq!(json["unstaged"][2]["status"], "added");
}
