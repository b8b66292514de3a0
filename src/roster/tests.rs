use super::*;

#[test]
fn parse_reads_fighters_in_order() {
    let fighters = parse(
        r#"
[[fighter]]
name = "First"
art = "(o_o)"

[[fighter]]
name = "Second"
"#,
    )
    .unwrap();

    assert_eq!(
        fighters,
        vec![Fighter::new("First", "(o_o)"), Fighter::new("Second", "")]
    );
}

#[test]
fn parse_rejects_fighter_without_name() {
    assert!(parse("[[fighter]]\nart = \"x\"\n").is_err());
}

#[test]
fn load_rejects_empty_roster() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("roster.toml");
    std::fs::write(&path, "# nobody here\n").unwrap();
    assert!(matches!(load(&path), Err(RosterError::Empty { .. })));
}

#[test]
fn load_or_builtin_falls_back_on_missing_or_invalid_file() {
    let dir = tempfile::tempdir().unwrap();
    assert_eq!(load_or_builtin(None), builtin());
    assert_eq!(
        load_or_builtin(Some(&dir.path().join("missing.toml"))),
        builtin()
    );

    let bad = dir.path().join("bad.toml");
    std::fs::write(&bad, "[[fighter]\nname=").unwrap();
    assert_eq!(load_or_builtin(Some(&bad)), builtin());
}

#[test]
fn load_or_builtin_uses_file_when_valid() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("roster.toml");
    std::fs::write(&path, "[[fighter]]\nname = \"Solo\"\n").unwrap();
    assert_eq!(
        load_or_builtin(Some(&path)),
        vec![Fighter::new("Solo", "")]
    );
}

#[test]
fn builtin_roster_has_named_fighters() {
    let fighters = builtin();
    assert_eq!(fighters.len(), 8);
    assert!(fighters.iter().all(|f| !f.name.trim().is_empty()));
}
