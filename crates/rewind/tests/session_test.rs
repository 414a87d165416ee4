//! Tests for the session loop driven by the script renderer.

use anyhow::Result;
use rewind::renderer::{OutputFormat, Renderer, ScriptRenderer, run_session};
use rewind_tictactoe::{GameHistory, GameView, Intent, Position};

fn replay(intents: Vec<Intent>) -> (GameHistory, ScriptRenderer) {
    let mut history = GameHistory::new();
    let mut renderer = ScriptRenderer::new(intents);
    run_session(&mut history, &mut renderer).expect("Session should finish");
    (history, renderer)
}

#[test]
fn test_renders_once_per_intent_plus_initial() {
    let (_, renderer) = replay(vec![Intent::CellClicked(0), Intent::CellClicked(4)]);
    assert_eq!(renderer.frames().len(), 3);
    assert_eq!(renderer.frames()[0], GameHistory::new().view());
}

#[test]
fn test_session_matches_direct_api() {
    let (history, renderer) = replay(vec![
        Intent::CellClicked(0),
        Intent::CellClicked(1),
        Intent::CellClicked(2),
        Intent::JumpTo(1),
        Intent::CellClicked(4),
    ]);

    let mut direct = GameHistory::new();
    for pos in [Position::TopLeft, Position::TopCenter, Position::TopRight] {
        direct.apply_move(pos).unwrap();
    }
    direct.jump_to(1).unwrap();
    direct.apply_move(Position::Center).unwrap();

    assert_eq!(history, direct);
    assert_eq!(renderer.last_frame(), Some(&direct.view()));
    assert_eq!(history.snapshots().len(), 3);
}

#[test]
fn test_rejected_moves_are_ignored() {
    let (history, renderer) = replay(vec![
        Intent::CellClicked(4),
        Intent::CellClicked(4), // occupied
        Intent::CellClicked(0),
    ]);

    assert_eq!(history.current_index(), 2);
    // The ignored intent still produces a frame, identical to the one before it.
    assert_eq!(renderer.frames()[1], renderer.frames()[2]);
}

#[test]
fn test_moves_after_win_are_ignored() {
    let (history, _) = replay(
        [0, 4, 1, 7, 2, 8]
            .into_iter()
            .map(Intent::CellClicked)
            .collect(),
    );
    assert_eq!(history.current_index(), 5);
    assert_eq!(history.view().status(), "Winner: X");
}

#[test]
fn test_out_of_range_jump_ends_session() {
    let mut history = GameHistory::new();
    let mut renderer = ScriptRenderer::new([Intent::CellClicked(0), Intent::JumpTo(5)]);

    let err = run_session(&mut history, &mut renderer).unwrap_err();
    assert!(err.to_string().contains("intent #2"));
    assert_eq!(history.current_index(), 1);
}

#[test]
fn test_out_of_range_cell_ends_session() {
    let mut history = GameHistory::new();
    let mut renderer = ScriptRenderer::new([Intent::CellClicked(9)]);

    assert!(run_session(&mut history, &mut renderer).is_err());
    assert_eq!(history, GameHistory::new());
}

#[test]
fn test_new_game_intent_resets() {
    let (history, renderer) = replay(vec![
        Intent::CellClicked(0),
        Intent::CellClicked(4),
        Intent::NewGame,
    ]);
    assert_eq!(history, GameHistory::new());
    assert_eq!(renderer.last_frame().unwrap().move_labels().len(), 1);
}

#[test]
fn test_json_output_has_view_fields() {
    let (_, renderer) = replay(vec![Intent::CellClicked(0), Intent::CellClicked(4)]);
    let json: serde_json::Value =
        serde_json::from_str(&renderer.output(OutputFormat::Json).unwrap()).unwrap();

    assert_eq!(json["status"], "Next player: X");
    assert_eq!(json["current_index"], 2);
    assert_eq!(json["to_move"], "X");
    assert_eq!(json["last_move"], "Center");
    assert_eq!(json["move_labels"].as_array().map(Vec::len), Some(3));
}

#[test]
fn test_script_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("intents.json");
    std::fs::write(
        &path,
        r#"[{"cell_clicked": 0}, {"cell_clicked": 4}, {"jump_to": 1}, "new_game", {"cell_clicked": 8}]"#,
    )
    .unwrap();

    let mut renderer = ScriptRenderer::from_file(&path).unwrap();
    let mut history = GameHistory::new();
    run_session(&mut history, &mut renderer).unwrap();

    assert_eq!(history.current_index(), 1);
    assert_eq!(history.move_at(1), Some(Position::BottomRight));
}

#[test]
fn test_malformed_script_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.json");
    std::fs::write(&path, r#"[{"teleport": 3}]"#).unwrap();

    let err = ScriptRenderer::from_file(&path).unwrap_err();
    assert!(err.to_string().contains("Failed to parse intent script"));
}

/// Renderer that quits immediately, for checking the loop contract.
struct QuitAtOnce {
    rendered: usize,
}

impl Renderer for QuitAtOnce {
    fn render(&mut self, _view: &GameView) -> Result<()> {
        self.rendered += 1;
        Ok(())
    }

    fn next_intent(&mut self) -> Result<Option<Intent>> {
        Ok(None)
    }
}

#[test]
fn test_initial_view_rendered_before_any_intent() {
    let mut history = GameHistory::new();
    let mut renderer = QuitAtOnce { rendered: 0 };
    run_session(&mut history, &mut renderer).unwrap();
    assert_eq!(renderer.rendered, 1);
}

#[test]
fn test_script_runs_before_cells() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("opening.json");
    std::fs::write(&path, r#"[{"cell_clicked": 0}, {"cell_clicked": 4}]"#).unwrap();

    let mut renderer = ScriptRenderer::from_sources(Some(path.as_path()), &[8]).unwrap();
    let mut history = GameHistory::new();
    run_session(&mut history, &mut renderer).unwrap();

    assert_eq!(history.current_index(), 3);
    assert_eq!(history.move_at(1), Some(Position::TopLeft));
    assert_eq!(history.move_at(2), Some(Position::Center));
    assert_eq!(history.move_at(3), Some(Position::BottomRight));
    assert_eq!(renderer.last_frame().unwrap().status(), "Next player: O");
}

#[test]
fn test_cells_alone_need_no_script() {
    let mut renderer = ScriptRenderer::from_sources(None, &[4, 0]).unwrap();
    let mut history = GameHistory::new();
    run_session(&mut history, &mut renderer).unwrap();

    assert_eq!(history.move_at(1), Some(Position::Center));
    assert_eq!(history.move_at(2), Some(Position::TopLeft));
}
