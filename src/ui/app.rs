use crate::config::AppConfig;
use crate::game::{GameOutcome, GameState, COLS};
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{backend::Backend, layout::Rect, Terminal};
use std::io;
use std::time::Duration;

use super::board_widget;

pub struct App {
    game_state: GameState,
    selected_column: usize,
    start_column: usize,
    should_quit: bool,
    message: Option<String>,
    /// Where the board was last drawn, for mouse hit-testing
    board_area: Rect,
    tick_rate: Duration,
    mouse: bool,
}

impl App {
    pub fn new() -> Self {
        Self::with_config(&AppConfig::default())
    }

    pub fn with_config(config: &AppConfig) -> Self {
        App {
            game_state: GameState::new(config.game.first_player),
            selected_column: config.ui.start_column,
            start_column: config.ui.start_column,
            should_quit: false,
            message: None,
            board_area: Rect::default(),
            tick_rate: Duration::from_millis(config.ui.tick_rate_ms),
            mouse: config.ui.mouse,
        }
    }

    pub fn game_state(&self) -> &GameState {
        &self.game_state
    }

    pub fn selected_column(&self) -> usize {
        self.selected_column
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()>
    where
        B::Error: Into<io::Error>,
    {
        tracing::info!(
            first_player = %self.game_state.first_player().symbol(),
            mouse = self.mouse,
            "new game"
        );

        loop {
            if let Err(err) = terminal.draw(|f| self.render(f)) {
                return Err(err.into());
            }

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }

        tracing::info!(moves = self.game_state.moves_played(), "quit");
        Ok(())
    }

    /// Wait up to one tick for input and apply it
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(self.tick_rate)? {
            self.handle_event(event::read()?);
        }
        Ok(())
    }

    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
            Event::Mouse(mouse) if self.mouse => self.handle_mouse(mouse),
            _ => {}
        }
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.selected_column + 1 < COLS {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece(self.selected_column);
            }
            KeyCode::Char(c @ '1'..='7') => {
                let col = (c as u8 - b'1') as usize;
                self.selected_column = col;
                self.drop_piece(col);
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                self.restart();
            }
            _ => {}
        }
    }

    /// Hovering moves the selector; a left click drops into the column under
    /// the cursor. Positions off the board are ignored.
    fn handle_mouse(&mut self, mouse: MouseEvent) {
        let Some(col) = board_widget::column_at(self.board_area, mouse.column, mouse.row) else {
            return;
        };

        match mouse.kind {
            MouseEventKind::Moved => {
                self.selected_column = col;
            }
            MouseEventKind::Down(MouseButton::Left) => {
                self.message = None;
                self.selected_column = col;
                self.drop_piece(col);
            }
            _ => {}
        }
    }

    fn restart(&mut self) {
        self.game_state.reset();
        self.selected_column = self.start_column;
        self.message = Some("New game started!".to_string());
    }

    /// Drop the current player's piece in `col`
    fn drop_piece(&mut self, col: usize) {
        if self.game_state.is_over() {
            self.message = Some("Game over! Press 'r' to restart.".to_string());
            return;
        }

        match self.game_state.play(col) {
            Ok(result) => {
                // Check if game just ended
                if let Some(outcome) = result.outcome {
                    self.message = Some(match outcome {
                        GameOutcome::Winner(player) => format!(
                            "{} ({}) has won! Press R to restart",
                            player.name(),
                            player.symbol()
                        ),
                        GameOutcome::Draw => "It's a draw! Press R to restart".to_string(),
                    });
                }
            }
            Err(err) => {
                tracing::debug!(column = col, %err, "move rejected");
                self.message = Some(err.to_string());
            }
        }
    }

    /// Render the UI
    fn render(&mut self, frame: &mut ratatui::Frame) {
        self.board_area = super::game_view::render(
            frame,
            &self.game_state,
            self.selected_column,
            &self.message,
            self.mouse,
        );
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
