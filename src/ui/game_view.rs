use crate::game::{GameOutcome, GameState, Player};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::board_widget::{self, BOARD_HEIGHT};

pub fn player_color(player: Player) -> Color {
    match player {
        Player::X => Color::Green,
        Player::O => Color::Yellow,
    }
}

/// Draw the whole game screen. Returns the area the board occupies so mouse
/// positions can be mapped back to columns.
pub fn render(
    frame: &mut Frame,
    game_state: &GameState,
    selected_column: usize,
    message: &Option<String>,
    mouse: bool,
) -> Rect {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),         // Header
            Constraint::Min(BOARD_HEIGHT), // Board
            Constraint::Length(3),         // Message
            Constraint::Length(3),         // Controls
        ])
        .split(frame.area());

    render_header(frame, game_state, chunks[0]);
    let board_area = board_widget::board_rect(chunks[1]);
    board_widget::render_board(frame, game_state, selected_column, board_area);
    render_message(frame, message, chunks[2]);
    render_controls(frame, mouse, chunks[3]);

    board_area
}

fn render_header(frame: &mut Frame, game_state: &GameState, area: Rect) {
    let (status, color) = match game_state.outcome() {
        Some(GameOutcome::Winner(player)) => (
            format!("Game Over  |  {} ({}) wins", player.name(), player.symbol()),
            player_color(player),
        ),
        Some(GameOutcome::Draw) => ("Game Over  |  Draw".to_string(), Color::White),
        None => {
            let player = game_state.current_player();
            (
                format!("Current Player: {} ({})", player.name(), player.symbol()),
                player_color(player),
            )
        }
    };

    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Connect Four"));

    frame.render_widget(header, area);
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, mouse: bool, area: Rect) {
    let line = if mouse {
        Line::from("←/→: Move  |  1-7/Enter/Click: Drop  |  R: Restart  |  Q: Quit")
    } else {
        Line::from("←/→: Move  |  1-7/Enter: Drop  |  R: Restart  |  Q: Quit")
    };

    let controls = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_render_shows_current_player() {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        let state = GameState::initial();
        let mut board_area = Rect::default();
        terminal
            .draw(|f| board_area = render(f, &state, 3, &None, true))
            .unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("Connect Four"));
        assert!(text.contains("Current Player: Player 1 (X)"));
        assert!(text.contains("Click: Drop"));
        assert_eq!(board_area.width, board_widget::BOARD_WIDTH);
        assert_eq!(board_area.height, BOARD_HEIGHT);
    }

    #[test]
    fn test_render_shows_winner_and_message() {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        let mut state = GameState::initial();
        for _ in 0..3 {
            state.play(0).unwrap();
            state.play(1).unwrap();
        }
        state.play(0).unwrap();
        let message = Some("Press R to restart".to_string());
        terminal
            .draw(|f| {
                render(f, &state, 0, &message, false);
            })
            .unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("Player 1 (X) wins"));
        assert!(text.contains("Press R to restart"));
        assert!(!text.contains("Click"));
    }
}
