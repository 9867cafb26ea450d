//! Tests for the render-facing view and the observer hook.

use std::cell::RefCell;
use std::rc::Rc;

use tictactoe_timeline::{GameView, Player, Position, Square, Timeline, Watched};

#[test]
fn test_view_after_win_carries_highlight() {
    let mut timeline = Timeline::new();
    for index in [0, 4, 1, 3, 2] {
        timeline.play(Position::from_index(index).expect("index in range"));
    }

    let view = timeline.view();
    assert_eq!(view.status, "Winner: X");
    assert_eq!(
        view.winning_line,
        Some([Position::TopLeft, Position::TopCenter, Position::TopRight])
    );
    assert_eq!(view.squares[0], Square::Occupied(Player::X));
    assert_eq!(view.moves.len(), 6);
}

#[test]
fn test_view_serializes_to_json() {
    let mut timeline = Timeline::new();
    timeline.play(Position::Center);

    let json = serde_json::to_value(timeline.view()).expect("view serializes");
    assert_eq!(json["status"], "Next player: O");
    assert_eq!(json["next_player"], "O");
    assert_eq!(json["moves"][0]["label"], "Go to game start");
    assert_eq!(json["moves"][1]["label"], "Go to move #1");
    assert_eq!(json["moves"][1]["is_current"], true);

    let back: GameView = serde_json::from_value(json).expect("view deserializes");
    assert_eq!(back, timeline.view());
}

#[test]
fn test_watched_renders_once_per_accepted_change() {
    let renders: Rc<RefCell<Vec<String>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&renders);

    let mut game = Watched::new(Timeline::new(), move |view: &GameView| {
        sink.borrow_mut().push(view.status.clone());
    });

    // Initial render happens on wrap.
    assert_eq!(renders.borrow().len(), 1);

    game.play(Position::Center);
    game.play(Position::Center); // ignored: occupied, no render
    game.play(Position::TopLeft);
    assert_eq!(renders.borrow().len(), 3);

    game.jump_to(0).expect("snapshot 0 exists");
    assert_eq!(renders.borrow().len(), 4);

    // Out-of-range jump does not render.
    assert!(game.jump_to(9).is_err());
    assert_eq!(renders.borrow().len(), 4);

    assert_eq!(
        renders.borrow().as_slice(),
        &[
            "Next player: X".to_string(),
            "Next player: O".to_string(),
            "Next player: X".to_string(),
            "Next player: X".to_string(),
        ]
    );
}

#[test]
fn test_watched_exposes_timeline() {
    let mut game = Watched::new(Timeline::new(), |_view: &GameView| {});
    game.play(Position::BottomRight);

    assert_eq!(game.timeline().len(), 2);

    let timeline = game.into_inner();
    assert_eq!(timeline.current_move(), 1);
}
