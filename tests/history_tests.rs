use backdrop::background::{BackgroundConfig, Mutation};
use backdrop::history::History;

fn config_with_angle(angle: i32) -> BackgroundConfig {
    let mut config = BackgroundConfig::default();
    config.apply(&Mutation::Angle(angle));
    config
}

#[test]
fn test_undo_on_empty_past_is_noop() {
    let mut history = History::new();
    let current = BackgroundConfig::default();

    assert_eq!(history.undo(current.clone()), None);
    assert!(!history.can_undo());
    assert!(!history.can_redo());
}

#[test]
fn test_redo_on_empty_future_is_noop() {
    let mut history = History::new();
    history.record(BackgroundConfig::default());

    assert_eq!(history.redo(config_with_angle(45)), None);
    // The failed redo must not disturb the past stack
    assert!(history.can_undo());
    assert_eq!(history.depth(), 1);
}

#[test]
fn test_undo_returns_most_recent_snapshot() {
    let mut history = History::new();
    history.record(config_with_angle(10));
    history.record(config_with_angle(20));

    let restored = history.undo(config_with_angle(30)).unwrap();
    assert_eq!(restored.angle, 20);
    assert!(history.can_redo());
}

#[test]
fn test_undo_then_redo_round_trips() {
    let mut history = History::new();
    let before = config_with_angle(10);
    let current = config_with_angle(20);

    history.record(before.clone());
    let undone = history.undo(current.clone()).unwrap();
    assert_eq!(undone, before);

    // Redo restores the configuration bit-identically
    let redone = history.redo(undone).unwrap();
    assert_eq!(redone, current);
}

#[test]
fn test_fresh_record_clears_future() {
    let mut history = History::new();
    history.record(config_with_angle(10));

    let undone = history.undo(config_with_angle(20)).unwrap();
    assert!(history.can_redo());

    // A new mutation after undo makes redo unavailable
    history.record(undone);
    assert!(!history.can_redo());
    assert_eq!(history.redo(config_with_angle(99)), None);
}

#[test]
fn test_full_sequence_reconstructable() {
    let mut history = History::new();
    for angle in [10, 20, 30] {
        history.record(config_with_angle(angle));
    }
    let mut current = config_with_angle(40);

    // Walk all the way back
    for expected in [30, 20, 10] {
        current = history.undo(current).unwrap();
        assert_eq!(current.angle, expected);
    }
    assert!(!history.can_undo());

    // And all the way forward again
    for expected in [20, 30, 40] {
        current = history.redo(current).unwrap();
        assert_eq!(current.angle, expected);
    }
    assert!(!history.can_redo());
    assert_eq!(history.depth(), 3);
}
