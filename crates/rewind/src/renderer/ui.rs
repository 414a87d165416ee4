//! Stateless UI rendering for the terminal renderer.

use super::input::Cursor;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};
use rewind_tictactoe::{GameView, Player, Position, Square, is_full};

const HELP: &str = "arrows/hjkl move  enter/1-9 play  [ ] step  home/end jump  n new  q quit";

/// Renders one frame: board with cursor, status, move list and key help.
pub fn draw(frame: &mut Frame, view: &GameView, cursor: Cursor, show_coordinates: bool) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(13),   // Board and moves
            Constraint::Length(3), // Status
            Constraint::Length(2), // Help
        ])
        .split(area);

    let title = Paragraph::new("Rewind - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(42), Constraint::Length(28)])
        .split(chunks[1]);

    draw_board(frame, body[0], view, cursor, show_coordinates);
    draw_moves(frame, body[1], view);

    let status = Paragraph::new(view.status().as_str())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    let footer = Paragraph::new(vec![
        Line::from(Span::styled(hint(view), Style::default().fg(Color::Magenta))),
        Line::from(Span::styled(HELP, Style::default().fg(Color::DarkGray))),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(footer, chunks[3]);
}

/// Extra guidance when no move can be played at the cursor.
fn hint(view: &GameView) -> &'static str {
    if view.winner().is_some() {
        "Game over here. Step back with [ or start over with n."
    } else if is_full(view.board()) {
        "No squares left. Step back with [ or start over with n."
    } else {
        ""
    }
}

fn draw_board(
    frame: &mut Frame,
    area: Rect,
    view: &GameView,
    cursor: Cursor,
    show_coordinates: bool,
) {
    let board_area = center_rect(area, 40, 11);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for (row, chunk) in [rows[0], rows[2], rows[4]].into_iter().enumerate() {
        draw_row(frame, chunk, view, cursor, row, show_coordinates);
    }
    draw_separator(frame, rows[1]);
    draw_separator(frame, rows[3]);
}

fn draw_row(
    frame: &mut Frame,
    area: Rect,
    view: &GameView,
    cursor: Cursor,
    row: usize,
    show_coordinates: bool,
) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area);

    for (col, chunk) in [cols[0], cols[2], cols[4]].into_iter().enumerate() {
        if let Some(pos) = Position::from_row_col(row, col) {
            draw_cell(frame, chunk, view, cursor, pos, show_coordinates);
        }
    }
    draw_separator_vertical(frame, cols[1]);
    draw_separator_vertical(frame, cols[3]);
}

fn draw_cell(
    frame: &mut Frame,
    area: Rect,
    view: &GameView,
    cursor: Cursor,
    pos: Position,
    show_coordinates: bool,
) {
    let (symbol, mut style) = match view.board().get(pos) {
        Square::Empty if show_coordinates => (
            format!(" {} ", pos.to_index() + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Empty => ("   ".to_string(), Style::default().fg(Color::DarkGray)),
        Square::Occupied(Player::X) => (
            " X ".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            " O ".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    if *view.last_move() == Some(pos) {
        style = style.add_modifier(Modifier::UNDERLINED);
    }
    if pos == cursor {
        style = style.bg(Color::White).fg(Color::Black);
    }

    // Vertically center within the 3-line cell.
    let paragraph = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(symbol, style)),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_moves(frame: &mut Frame, area: Rect, view: &GameView) {
    let current = *view.current_index();
    let items: Vec<ListItem> = view
        .move_labels()
        .iter()
        .enumerate()
        .map(|(index, label)| {
            if index == current {
                ListItem::new(format!("> {}", label))
                    .style(Style::default().fg(Color::Black).bg(Color::Yellow))
            } else {
                ListItem::new(format!("  {}", label))
            }
        })
        .collect();

    let list = List::new(items).block(Block::default().title("History").borders(Borders::ALL));
    frame.render_widget(list, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::from("│"), Line::from("│"), Line::from("│")])
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend};
    use rewind_tictactoe::{GameHistory, Intent};

    fn screen_text(view: &GameView) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal
            .draw(|frame| draw(frame, view, Position::Center, true))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_frame_shows_status_and_history() {
        let mut history = GameHistory::new();
        for cell in [0, 4, 1, 7, 2] {
            history.dispatch(Intent::CellClicked(cell)).unwrap();
        }

        let text = screen_text(&history.view());
        assert!(text.contains("Winner: X"));
        assert!(text.contains("Go to game start"));
        assert!(text.contains("Go to move #5"));
        assert!(text.contains("Game over here"));
    }

    #[test]
    fn test_full_board_hint_keeps_next_player_status() {
        let mut history = GameHistory::new();
        for cell in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
            history.dispatch(Intent::CellClicked(cell)).unwrap();
        }
        assert!(is_full(history.current_board()));
        assert_eq!(history.winner(), None);

        let text = screen_text(&history.view());
        assert!(text.contains("Next player: O"));
        assert!(text.contains("No squares left"));
        assert!(!text.contains("Game over here"));
    }

    #[test]
    fn test_empty_cells_show_coordinates() {
        let text = screen_text(&GameHistory::new().view());
        assert!(text.contains("Next player: X"));
        assert!(text.contains(" 9 "));
    }
}
