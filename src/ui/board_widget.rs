use crate::game::{Cell, GameState, COLS, ROWS};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Width of one board slot in terminal columns
pub const CELL_WIDTH: u16 = 3;
/// Columns to the left of the first slot ("  ║")
const LEFT_PAD: u16 = 3;
/// Full board width: padding, seven slots, and " ║"
pub const BOARD_WIDTH: u16 = LEFT_PAD + CELL_WIDTH * COLS as u16 + 2;
/// Label row, top border, six rows, bottom border, selector row
pub const BOARD_HEIGHT: u16 = ROWS as u16 + 4;

/// Center the board inside `area`.
pub fn board_rect(area: Rect) -> Rect {
    let width = BOARD_WIDTH.min(area.width);
    let height = BOARD_HEIGHT.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Map a screen position to the board column under it.
///
/// Anything outside the board rectangle or left/right of the slots maps to
/// `None`, so stray clicks never reach the game.
pub fn column_at(board: Rect, x: u16, y: u16) -> Option<usize> {
    if y < board.y || y >= board.y + board.height {
        return None;
    }
    let left = board.x + LEFT_PAD;
    if x < left {
        return None;
    }
    let col = ((x - left) / CELL_WIDTH) as usize;
    (col < COLS).then_some(col)
}

fn piece_style(cell: Cell) -> (&'static str, Color) {
    match cell {
        Cell::Empty => (" . ", Color::DarkGray),
        Cell::X => (" ● ", Color::Green),
        Cell::O => (" ● ", Color::Yellow),
    }
}

/// Render the board with column labels and the selector arrow into `area`.
/// The winning line, if any, is drawn reversed.
pub fn render_board(frame: &mut Frame, game_state: &GameState, selected_column: usize, area: Rect) {
    let board = game_state.board();
    let winning = game_state.winning_line();
    let mut lines = Vec::with_capacity(BOARD_HEIGHT as usize);

    // Column numbers with selection indicator
    let mut col_line = vec![Span::raw("   ")];
    for col in 0..COLS {
        let label = format!(" {} ", col + 1);
        if col == selected_column && !game_state.is_over() {
            col_line.push(Span::styled(
                label,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            col_line.push(Span::raw(label));
        }
    }
    lines.push(Line::from(col_line));

    let rule = "═".repeat((CELL_WIDTH as usize) * COLS + 1);
    lines.push(Line::from(format!("  ╔{rule}╗")));

    for row in 0..ROWS {
        let mut row_spans = vec![Span::raw("  ║")];
        for col in 0..COLS {
            let (symbol, color) = piece_style(board.get(row, col));
            let mut style = Style::default().fg(color);
            if winning.is_some_and(|line| line.contains(&(row, col))) {
                style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
            }
            row_spans.push(Span::styled(symbol, style));
        }
        row_spans.push(Span::raw(" ║"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from(format!("  ╚{rule}╝")));

    let mut indicator_line = vec![Span::raw("   ")];
    if !game_state.is_over() {
        for col in 0..COLS {
            if col == selected_column {
                indicator_line.push(Span::styled(" ▲ ", Style::default().fg(Color::Cyan)));
            } else {
                indicator_line.push(Span::raw("   "));
            }
        }
    }
    lines.push(Line::from(indicator_line));

    frame.render_widget(Paragraph::new(lines), area);
}
