use super::*;

fn open_all(session: &mut EditorSession, paths: &[&str]) {
    for path in paths {
        session.open_file(path).unwrap();
    }
}

fn open_paths(session: &EditorSession) -> Vec<&str> {
    session.open_files().iter().map(OpenFile::path).collect()
}

fn assert_active_invariant(session: &EditorSession) {
    match session.active_file() {
        None => assert!(session.open_files().is_empty()),
        Some(active) => assert!(session.is_open(active)),
    }
}

#[test]
fn open_file_seeds_default_content() {
    let mut session = EditorSession::new();
    assert_eq!(session.open_file("src/index.ts"), Ok(true));

    let file = session.get("src/index.ts").unwrap();
    assert_eq!(file.name(), "index.ts");
    assert!(!file.is_dirty());
    assert_eq!(
        file.content(),
        "const message: string = 'Hello from index.ts';\nconsole.log(message);"
    );
    assert_eq!(session.active_file(), Some("src/index.ts"));
}

#[test]
fn reopen_activates_without_duplicating() {
    let mut session = EditorSession::new();
    session.open_file("a/b/c.tsx").unwrap();
    let first = session.get("a/b/c.tsx").unwrap().content();

    assert_eq!(session.open_file("a/b/c.tsx"), Ok(false));
    assert_eq!(session.open_files().len(), 1);
    assert_eq!(session.active_file(), Some("a/b/c.tsx"));
    assert_eq!(session.get("a/b/c.tsx").unwrap().content(), first);
}

#[test]
fn reopen_keeps_edited_content() {
    let mut session = EditorSession::new();
    open_all(&mut session, &["a.ts", "b.ts"]);
    session.update_file_content("a.ts", "edited").unwrap();

    assert_eq!(session.open_file("a.ts"), Ok(true));
    let file = session.get("a.ts").unwrap();
    assert_eq!(file.content(), "edited");
    assert!(file.is_dirty());
}

#[test]
fn name_without_slash_is_whole_path() {
    let mut session = EditorSession::new();
    session.open_file("readme").unwrap();
    let file = session.get("readme").unwrap();
    assert_eq!(file.name(), "readme");
    assert_eq!(file.content(), "# Welcome to readme\n\nStart coding here!");
}

#[test]
fn empty_path_is_rejected() {
    let mut session = EditorSession::new();
    assert_eq!(session.open_file(""), Err(EditorError::EmptyPath));
    assert!(session.open_files().is_empty());
}

#[test]
fn closing_active_file_activates_first_remaining() {
    let mut session = EditorSession::new();
    open_all(&mut session, &["a.ts", "b.ts", "c.ts"]);
    session.set_active_file("b.ts").unwrap();

    session.close_file("b.ts").unwrap();
    assert_eq!(open_paths(&session), vec!["a.ts", "c.ts"]);
    assert_eq!(session.active_file(), Some("a.ts"));
}

#[test]
fn closing_first_active_file_hands_over_to_next() {
    let mut session = EditorSession::new();
    open_all(&mut session, &["a.ts", "b.ts"]);
    session.set_active_file("a.ts").unwrap();

    session.close_file("a.ts").unwrap();
    assert_eq!(open_paths(&session), vec!["b.ts"]);
    assert_eq!(session.active_file(), Some("b.ts"));
}

#[test]
fn closing_inactive_file_keeps_active() {
    let mut session = EditorSession::new();
    open_all(&mut session, &["a.ts", "b.ts", "c.ts"]);

    session.close_file("a.ts").unwrap();
    assert_eq!(session.active_file(), Some("c.ts"));
    session.close_file("b.ts").unwrap();
    assert_eq!(session.active_file(), Some("c.ts"));
}

#[test]
fn closing_last_file_clears_active() {
    let mut session = EditorSession::new();
    session.open_file("a.ts").unwrap();
    session.close_file("a.ts").unwrap();
    assert_eq!(session.active_file(), None);
    assert!(session.active().is_none());
}

#[test]
fn close_unknown_file_is_not_found() {
    let mut session = EditorSession::new();
    session.open_file("a.ts").unwrap();
    assert_eq!(
        session.close_file("b.ts"),
        Err(EditorError::NotFound("b.ts".to_string()))
    );
    assert_eq!(open_paths(&session), vec!["a.ts"]);
}

#[test]
fn set_active_requires_open_file() {
    let mut session = EditorSession::new();
    session.open_file("a.ts").unwrap();
    assert_eq!(
        session.set_active_file("b.ts"),
        Err(EditorError::InvalidActiveFile("b.ts".to_string()))
    );
    assert_eq!(session.active_file(), Some("a.ts"));
}

#[test]
fn update_marks_dirty_even_for_same_text() {
    let mut session = EditorSession::new();
    session.open_file("a.js").unwrap();
    let original = session.get("a.js").unwrap().content();

    session.update_file_content("a.js", &original).unwrap();
    let file = session.get("a.js").unwrap();
    assert!(file.is_dirty());
    assert_eq!(file.content(), original);
}

#[test]
fn update_replaces_content_verbatim() {
    let mut session = EditorSession::new();
    session.open_file("src/index.ts").unwrap();
    session
        .update_file_content("src/index.ts", "let x = 1;\r\n\tlet y = 2;")
        .unwrap();
    assert_eq!(
        session.get("src/index.ts").unwrap().content(),
        "let x = 1;\r\n\tlet y = 2;"
    );
    assert_eq!(session.get("src/index.ts").unwrap().text().len_lines(), 2);
}

#[test]
fn update_unknown_file_is_not_found() {
    let mut session = EditorSession::new();
    assert_eq!(
        session.update_file_content("a.ts", "x"),
        Err(EditorError::NotFound("a.ts".to_string()))
    );
}

#[test]
fn active_file_invariant_holds_across_open_close_sequences() {
    let mut session = EditorSession::new();
    let script: &[(bool, &str)] = &[
        (true, "a"),
        (true, "b"),
        (true, "c"),
        (false, "c"),
        (true, "a"),
        (false, "a"),
        (true, "d"),
        (false, "b"),
        (false, "d"),
        (true, "e"),
        (false, "e"),
    ];

    for &(open, path) in script {
        if open {
            session.open_file(path).unwrap();
        } else {
            session.close_file(path).unwrap();
        }
        assert_active_invariant(&session);
    }
    assert!(session.open_files().is_empty());
    assert_eq!(session.active_file(), None);
}

#[test]
fn snapshot_reports_open_files_in_order() {
    let mut session = EditorSession::new();
    open_all(&mut session, &["a.md", "b.py"]);
    session.update_file_content("b.py", "print(1)").unwrap();

    let snapshot = session.snapshot();
    assert_eq!(snapshot.active_file.as_deref(), Some("b.py"));
    assert_eq!(snapshot.open_files.len(), 2);
    assert_eq!(snapshot.open_files[0].content, "# a\n\nWelcome to your new markdown file!");
    assert!(!snapshot.open_files[0].is_dirty);
    assert!(snapshot.open_files[1].is_dirty);

    let json = serde_json::to_value(&snapshot).unwrap();
    assert_eq!(json["activeFile"], "b.py");
    assert_eq!(json["openFiles"][1]["isDirty"], true);
}
