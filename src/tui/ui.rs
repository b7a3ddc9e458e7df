//! Stateless UI rendering for a game snapshot.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::games::tictactoe::{GameSnapshot, Mark, Position, Square};

const LEGEND: &str =
    "arrows/enter or 1-9: play   n: next round   r: reset scores   m: toggle mode   q: quit";

/// Renders the whole screen with the cursor highlighted.
pub fn draw(frame: &mut Frame, snapshot: &GameSnapshot, cursor: Position) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title + mode
            Constraint::Length(3), // Status
            Constraint::Length(3), // Scoreboard
            Constraint::Min(11),   // Board
            Constraint::Length(1), // Legend
        ])
        .split(area);

    let title = Paragraph::new(vec![
        Line::from(Span::styled(
            "Grid Clash",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(format!(
            "{} - {}",
            snapshot.mode.title(),
            snapshot.mode.description()
        )),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let status = Paragraph::new(snapshot.status_message.as_str())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[1]);

    draw_scoreboard(frame, chunks[2], snapshot);
    draw_board(frame, chunks[3], snapshot, cursor);

    let legend = Paragraph::new(LEGEND)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(legend, chunks[4]);
}

fn draw_scoreboard(frame: &mut Frame, area: Rect, snapshot: &GameSnapshot) {
    let line = Line::from(vec![
        Span::styled(snapshot.x_label.as_str(), mark_style(Mark::X)),
        Span::raw(format!(" {}", snapshot.scores.get(Mark::X))),
        Span::raw("   |   "),
        Span::styled(snapshot.o_label.as_str(), mark_style(Mark::O)),
        Span::raw(format!(" {}", snapshot.scores.get(Mark::O))),
    ]);
    let scoreboard = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Score"));
    frame.render_widget(scoreboard, area);
}

fn mark_style(mark: Mark) -> Style {
    let color = match mark {
        Mark::X => Color::Blue,
        Mark::O => Color::Red,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

fn draw_board(frame: &mut Frame, area: Rect, snapshot: &GameSnapshot, cursor: Position) {
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
        draw_row(frame, chunk, snapshot, cursor, row);
    }
    draw_separator(frame, rows[1]);
    draw_separator(frame, rows[3]);
}

fn draw_row(frame: &mut Frame, area: Rect, snapshot: &GameSnapshot, cursor: Position, row: usize) {
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
        if let Some(pos) = Position::from_index(row * 3 + col) {
            draw_cell(frame, chunk, snapshot, cursor, pos);
        }
    }
    draw_separator_vertical(frame, cols[1]);
    draw_separator_vertical(frame, cols[3]);
}

fn draw_cell(
    frame: &mut Frame,
    area: Rect,
    snapshot: &GameSnapshot,
    cursor: Position,
    pos: Position,
) {
    let (symbol, mut style) = match snapshot.board.get(pos) {
        Square::Empty => ("   ".to_string(), Style::default().fg(Color::DarkGray)),
        Square::Occupied(mark) => (format!(" {} ", mark), mark_style(mark)),
    };

    let winning = snapshot
        .winning_line
        .is_some_and(|line| line.contains(&pos.to_index()));
    if winning {
        style = style.bg(Color::Green).fg(Color::Black);
    }
    if pos == cursor {
        style = style.bg(Color::White).fg(Color::Black);
    }

    let paragraph =
        Paragraph::new(Line::from(Span::styled(symbol, style))).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("──────────────────────────────────────")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("│").style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}
