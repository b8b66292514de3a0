use super::*;
use crate::audio::fake::{FakeOutput, full_store};
use crate::audio::{SoundPlayer, Soundboard, TrackNo};
use crate::config::PointerKind;
use crate::roster::Fighter;

fn fighters(n: usize) -> Vec<Fighter> {
    (0..n)
        .map(|i| Fighter::new(format!("F{i}"), format!("art {i}")))
        .collect()
}

fn app(pointer: PointerKind) -> App<FakeOutput> {
    let player = SoundPlayer::new(full_store(), FakeOutput::default(), 1.0);
    let board = Soundboard::new(player, TrackNo::new(6).unwrap());
    App::new(fighters(8), board, pointer, 4)
}

fn playing(app: &App<FakeOutput>) -> Vec<String> {
    let mut v: Vec<String> = app
        .board
        .player()
        .active()
        .clips()
        .map(str::to_string)
        .collect();
    v.sort();
    v
}

#[test]
fn click_shows_overlay_for_clicked_cell() {
    let mut a = app(PointerKind::Fine);
    a.handle(Input::Unlock);
    a.handle(Input::Click(5));

    assert!(a.overlay.active);
    assert_eq!(a.chosen().map(|f| f.name.as_str()), Some("F5"));
    assert_eq!(a.cursor, 5);
    assert_eq!(playing(&a), vec!["chosen-6", "click"]);
}

#[test]
fn click_before_unlock_unlocks_first() {
    let mut a = app(PointerKind::Fine);
    a.handle(Input::Click(0));
    assert!(a.board.is_started());
    assert!(a.overlay.active);
}

#[test]
fn hover_needs_unlock_and_fine_pointer() {
    let mut a = app(PointerKind::Fine);
    a.handle(Input::PointerEnter(1));
    assert!(a.board.player().active().is_empty());

    a.handle(Input::Unlock);
    a.handle(Input::PointerEnter(1));
    assert_eq!(playing(&a), vec!["hover", "select-6"]);

    let mut touch = app(PointerKind::Coarse);
    touch.handle(Input::Unlock);
    touch.handle(Input::PointerEnter(1));
    assert_eq!(playing(&touch), vec!["select-6"]);
}

#[test]
fn coarse_pointer_needs_two_taps_on_same_cell() {
    let mut a = app(PointerKind::Coarse);
    a.handle(Input::Unlock);

    a.handle(Input::Click(2));
    assert!(!a.overlay.active);
    assert_eq!(a.pending_tap, Some(2));
    assert_eq!(playing(&a), vec!["hover", "select-6"]);

    // Tapping another cell moves the preview instead of selecting.
    a.handle(Input::Click(3));
    assert!(!a.overlay.active);
    assert_eq!(a.pending_tap, Some(3));

    a.handle(Input::Click(3));
    assert!(a.overlay.active);
    assert_eq!(a.chosen().map(|f| f.name.as_str()), Some("F3"));
}

#[test]
fn track_key_switches_theme_and_hides_overlay() {
    let mut a = app(PointerKind::Fine);
    a.handle(Input::Unlock);
    a.handle(Input::Click(0));
    assert!(a.overlay.active);

    a.handle(Input::Track(TrackNo::new(2).unwrap()));
    assert!(!a.overlay.active);
    assert_eq!(a.board.track(), TrackNo::new(2).unwrap());
    assert_eq!(playing(&a), vec!["click", "select-2"]);
}

#[test]
fn same_track_leaves_everything_alone() {
    let mut a = app(PointerKind::Fine);
    a.handle(Input::Unlock);
    a.handle(Input::Click(0));
    let before = playing(&a);

    a.handle(Input::Track(TrackNo::new(6).unwrap()));
    assert!(a.overlay.active);
    assert_eq!(playing(&a), before);
}

#[test]
fn jingle_end_closes_overlay_and_resumes_theme() {
    let mut a = app(PointerKind::Fine);
    a.handle(Input::Unlock);
    a.handle(Input::Click(1));
    let jingle = a.board.player().output().last().unwrap();

    a.tick();
    assert!(a.overlay.active);

    jingle.finish();
    a.tick();
    assert!(!a.overlay.active);
    assert_eq!(playing(&a), vec!["click", "select-6"]);
}

#[test]
fn cursor_moves_within_grid_and_plays_hover() {
    let mut a = app(PointerKind::Coarse);
    a.handle(Input::Unlock);

    assert!(!a.move_cursor(Step::Left));
    assert!(!a.move_cursor(Step::Up));

    a.handle(Input::Cursor(Step::Right));
    assert_eq!(a.cursor, 1);
    assert_eq!(playing(&a), vec!["hover", "select-6"]);

    a.handle(Input::Cursor(Step::Down));
    assert_eq!(a.cursor, 5);
    assert!(!a.move_cursor(Step::Down));

    a.cursor = 3;
    assert!(!a.move_cursor(Step::Right));

    a.handle(Input::Confirm);
    assert_eq!(a.chosen().map(|f| f.name.as_str()), Some("F3"));
}

#[test]
fn cursor_stops_at_last_cell_of_partial_row() {
    let player = SoundPlayer::new(full_store(), FakeOutput::default(), 1.0);
    let board = Soundboard::new(player, TrackNo::new(1).unwrap());
    let mut a = App::new(fighters(6), board, PointerKind::Fine, 4);

    a.cursor = 5;
    assert!(!a.move_cursor(Step::Right));
    a.cursor = 1;
    assert!(a.move_cursor(Step::Down));
    assert_eq!(a.cursor, 5);
    a.cursor = 2;
    assert!(!a.move_cursor(Step::Down));
}

#[test]
fn dismiss_hides_overlay_and_quit_silences_everything() {
    let mut a = app(PointerKind::Fine);
    a.handle(Input::Unlock);
    a.handle(Input::Click(0));

    assert_eq!(a.handle(Input::Dismiss), Flow::Continue);
    assert!(!a.overlay.active);
    assert!(a.chosen().is_none());

    assert_eq!(a.handle(Input::Quit), Flow::Quit);
    assert!(a.board.player().active().is_empty());
}

#[test]
fn clicks_outside_roster_are_ignored() {
    let mut a = app(PointerKind::Fine);
    a.handle(Input::Click(42));
    assert!(!a.board.is_started());
    assert!(!a.overlay.active);
}
