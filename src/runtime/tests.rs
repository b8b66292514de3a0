use super::startup::build_app;
use crate::app::Input;
use crate::audio::TrackNo;
use crate::audio::fake::FakeOutput;
use crate::config::{PointerKind, Settings};
use crate::roster;

fn settings_in(dir: &std::path::Path) -> Settings {
    let mut s = Settings::default();
    s.audio.sounds_dir = dir.to_path_buf();
    s.audio.extension = "wav".to_string();
    s
}

#[test]
fn build_app_runs_silently_without_clips() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = build_app(&settings_in(dir.path()), FakeOutput::default());

    assert_eq!(app.fighters, roster::builtin());
    assert_eq!(app.board.track(), TrackNo::new(6).unwrap());

    app.handle(Input::Unlock);
    app.handle(Input::Click(0));
    assert!(app.board.is_started());
    assert!(app.overlay.active);
    assert!(app.board.player().active().is_empty());
    assert_eq!(app.board.player().output().started_count(), 0);
}

#[test]
fn build_app_applies_settings() {
    let dir = tempfile::tempdir().unwrap();
    let roster_path = dir.path().join("roster.toml");
    std::fs::write(
        &roster_path,
        "[[fighter]]\nname = \"A\"\n\n[[fighter]]\nname = \"B\"\n",
    )
    .unwrap();

    let mut s = settings_in(dir.path());
    s.audio.initial_track = 2;
    s.input.pointer = PointerKind::Coarse;
    s.ui.columns = 3;
    s.roster.path = Some(roster_path);

    let app = build_app(&s, FakeOutput::default());
    assert_eq!(app.fighters.len(), 2);
    assert_eq!(app.board.track(), TrackNo::new(2).unwrap());
    assert_eq!(app.pointer, PointerKind::Coarse);
    assert_eq!(app.columns, 3);
}
