use super::{Board, Player, WinningLine};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

/// Whether moves are accepted. Only a reset leaves `GameOver`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Playing,
    GameOver,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("Column is full!")]
    ColumnFull,
    #[error("Invalid column!")]
    InvalidColumn,
    #[error("Game is over!")]
    GameOver,
}

/// What a successful drop did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveResult {
    pub player: Player,
    pub row: usize,
    pub col: usize,
    pub outcome: Option<GameOutcome>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameState {
    board: Board,
    first_player: Player,
    current_player: Player,
    phase: Phase,
    outcome: Option<GameOutcome>,
    winning_line: Option<WinningLine>,
}

impl GameState {
    /// Create a game where `first_player` moves first, now and after every reset
    pub fn new(first_player: Player) -> Self {
        GameState {
            board: Board::new(),
            first_player,
            current_player: first_player,
            phase: Phase::Playing,
            outcome: None,
            winning_line: None,
        }
    }

    /// Create initial game state
    pub fn initial() -> Self {
        Self::new(Player::X) // X starts
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn first_player(&self) -> Player {
        self.first_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Cells of the four-in-a-row that ended the game
    pub fn winning_line(&self) -> Option<WinningLine> {
        self.winning_line
    }

    /// Check if game is over
    pub fn is_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn moves_played(&self) -> usize {
        self.board.piece_count()
    }

    /// Drop the current player's marker into `column`.
    ///
    /// Only the player who just moved is checked for four in a row. A
    /// rejected move leaves board, turn and phase untouched.
    pub fn play(&mut self, column: usize) -> Result<MoveResult, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }

        let player = self.current_player;
        let row = self.board.drop_piece(column, player.to_cell())?;

        if let Some(line) = self.board.winning_line(player.to_cell()) {
            self.finish(GameOutcome::Winner(player));
            self.winning_line = Some(line);
        } else if self.board.is_full() {
            self.finish(GameOutcome::Draw);
        } else {
            self.current_player = player.other();
        }

        tracing::debug!(
            player = %player.symbol(),
            column,
            row,
            "piece dropped"
        );

        Ok(MoveResult {
            player,
            row,
            col: column,
            outcome: self.outcome,
        })
    }

    /// Clear the board and start over with the first player to move
    pub fn reset(&mut self) {
        self.board.clear();
        self.current_player = self.first_player;
        self.phase = Phase::Playing;
        self.outcome = None;
        self.winning_line = None;
        tracing::info!(first_player = %self.first_player.symbol(), "new game");
    }

    fn finish(&mut self, outcome: GameOutcome) {
        self.phase = Phase::GameOver;
        self.outcome = Some(outcome);
        match outcome {
            GameOutcome::Winner(player) => {
                tracing::info!(winner = %player.symbol(), moves = self.moves_played(), "game over")
            }
            GameOutcome::Draw => tracing::info!(moves = self.moves_played(), "game drawn"),
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}

#[cfg(test)]
mod tests {
    use super::super::{Cell, COLS, ROWS};
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = GameState::initial();
        assert_eq!(state.current_player(), Player::X);
        assert_eq!(state.phase(), Phase::Playing);
        assert!(!state.is_over());
        assert_eq!(state.outcome(), None);
        assert_eq!(state.moves_played(), 0);
    }

    #[test]
    fn test_play() {
        let mut state = GameState::initial();
        let result = state.play(3).unwrap();

        assert_eq!(
            result,
            MoveResult {
                player: Player::X,
                row: 5,
                col: 3,
                outcome: None
            }
        );
        assert_eq!(state.current_player(), Player::O);
        assert_eq!(state.board().get(5, 3), Cell::X);
    }

    #[test]
    fn test_turn_alternation() {
        let mut state = GameState::initial();
        state.play(0).unwrap();
        assert_eq!(state.current_player(), Player::O);
        state.play(1).unwrap();
        assert_eq!(state.current_player(), Player::X);
        assert_eq!(state.board().get(5, 1), Cell::O);
    }

    #[test]
    fn test_win_detection() {
        let mut state = GameState::initial();

        // X wins with horizontal line
        for col in 0..4 {
            state.play(col).unwrap(); // X
            if col < 3 {
                state.play(col).unwrap(); // O (row above)
            }
        }

        assert!(state.is_over());
        assert_eq!(state.outcome(), Some(GameOutcome::Winner(Player::X)));
        assert_eq!(
            state.winning_line(),
            Some([(5, 0), (5, 1), (5, 2), (5, 3)])
        );
        // Winner stays as current player; the turn does not pass on
        assert_eq!(state.current_player(), Player::X);
    }

    #[test]
    fn test_second_player_can_win() {
        let mut state = GameState::initial();
        // X scatters, O stacks column 6
        for col in [0, 1, 0] {
            state.play(col).unwrap(); // X
            state.play(6).unwrap(); // O
        }
        state.play(2).unwrap(); // X
        let result = state.play(6).unwrap(); // O
        assert_eq!(result.outcome, Some(GameOutcome::Winner(Player::O)));
        assert_eq!(state.outcome(), Some(GameOutcome::Winner(Player::O)));
    }

    #[test]
    fn test_move_after_game_over_rejected() {
        let mut state = GameState::initial();
        for _ in 0..3 {
            state.play(0).unwrap();
            state.play(1).unwrap();
        }
        state.play(0).unwrap();
        assert!(state.is_over());

        let before = state;
        assert_eq!(state.play(4), Err(MoveError::GameOver));
        assert_eq!(state, before);
    }

    #[test]
    fn test_full_column_changes_nothing() {
        let mut state = GameState::initial();
        // Alternating markers never make four vertically
        for _ in 0..ROWS {
            state.play(2).unwrap();
        }
        let before = state;
        assert_eq!(state.play(2), Err(MoveError::ColumnFull));
        assert_eq!(state, before);
        assert_eq!(state.current_player(), Player::X);
    }

    #[test]
    fn test_invalid_column_rejected() {
        let mut state = GameState::initial();
        assert_eq!(state.play(COLS), Err(MoveError::InvalidColumn));
        assert_eq!(state.current_player(), Player::X);
    }

    #[test]
    fn test_win_goes_to_mover() {
        let mut state = GameState::initial();
        // Both players build three in a column
        for col in [0, 1, 0, 1, 0, 1] {
            state.play(col).unwrap();
        }
        // X passes up the win, O completes its column
        state.play(5).unwrap();
        let result = state.play(1).unwrap();
        assert_eq!(result.player, Player::O);
        assert_eq!(state.outcome(), Some(GameOutcome::Winner(Player::O)));
        assert!(!state.board().has_four_in_a_row(Cell::X));
    }

    #[test]
    fn test_opponent_line_ignored_on_mover_turn() {
        let mut state = GameState::initial();
        // An O line already on the board, placed outside normal play
        for _ in 0..4 {
            state.board.drop_piece(6, Cell::O).unwrap();
        }
        assert!(state.board().has_four_in_a_row(Cell::O));

        let result = state.play(0).unwrap();
        assert_eq!(result.player, Player::X);
        assert_eq!(result.outcome, None);
        assert_eq!(state.phase(), Phase::Playing);
        assert_eq!(state.outcome(), None);
        assert_eq!(state.current_player(), Player::O);
    }

    #[test]
    fn test_reset() {
        let mut state = GameState::initial();
        for _ in 0..3 {
            state.play(0).unwrap();
            state.play(1).unwrap();
        }
        state.play(0).unwrap();
        assert!(state.is_over());

        state.reset();
        assert_eq!(state.phase(), Phase::Playing);
        assert_eq!(state.outcome(), None);
        assert_eq!(state.winning_line(), None);
        assert_eq!(state.current_player(), Player::X);
        for row in 0..ROWS {
            for col in 0..COLS {
                assert_eq!(state.board().get(row, col), Cell::Empty);
            }
        }
    }

    #[test]
    fn test_reset_uses_designated_first_player() {
        let mut state = GameState::new(Player::O);
        assert_eq!(state.current_player(), Player::O);
        state.play(3).unwrap();
        assert_eq!(state.board().get(5, 3), Cell::O);
        state.reset();
        assert_eq!(state.current_player(), Player::O);
        assert_eq!(state.first_player(), Player::O);
    }

    #[test]
    fn test_draw() {
        let mut state = GameState::initial();

        // Fill columns in pairs, shifting the pattern between column groups
        // so no line of four forms anywhere
        let pattern = [
            0, 1, 0, 1, 0, 1, 1, 0, 1, 0, 1, 0, //
            2, 3, 2, 3, 2, 3, 3, 2, 3, 2, 3, 2, //
            4, 5, 4, 5, 4, 5, 5, 4, 5, 4, 5, 4, //
            6, 6, 6, 6, 6, 6,
        ];

        for &col in &pattern {
            state.play(col).unwrap();
        }

        assert!(state.is_over());
        assert_eq!(state.outcome(), Some(GameOutcome::Draw));
        assert_eq!(state.winning_line(), None);
        assert_eq!(state.moves_played(), ROWS * COLS);
    }
}
