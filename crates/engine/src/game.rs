//! Game engine module - orchestrates board and piece across ticks
//!
//! The engine is a two-state machine: RUNNING and GAME_OVER. Commands are
//! validated against the board and either applied or silently rejected; none
//! of them can fail. GAME_OVER is entered the moment a freshly spawned piece
//! has no legal initial position, and only `Reset` leaves it.

use log::{debug, info};

use crate::config::GameConfig;
use crate::core::{calculate_line_score, fall_interval_ms, pick_random, Board, Piece, ShapeSource};
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::Command;

/// What a gravity step did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Game is over; nothing happened
    Idle,
    /// Piece moved down one row
    Fell,
    /// Piece landed, rows were cleared, and the next piece spawned
    Settled { lines_cleared: usize },
    /// Piece landed and the next piece could not be placed
    GameOver { lines_cleared: usize },
}

/// Complete game session
#[derive(Debug, Clone)]
pub struct GameEngine<S> {
    config: GameConfig,
    source: S,
    board: Board,
    /// None only after game over
    active: Option<Piece>,
    score: u32,
    lines: u32,
    pieces: u32,
    game_over: bool,
    fall_interval_ms: u32,
    fall_timer_ms: u32,
    elapsed_ms: u64,
}

impl<S: ShapeSource> GameEngine<S> {
    /// Create a session and spawn its first piece
    ///
    /// # Panics
    ///
    /// Panics if the configured board has a zero width or height.
    pub fn new(config: GameConfig, source: S) -> Self {
        let board = Board::with_size(config.width, config.height);
        let fall_interval_ms = config.fall_speed.base_ms;
        let mut engine = Self {
            config,
            source,
            board,
            active: None,
            score: 0,
            lines: 0,
            pieces: 0,
            game_over: false,
            fall_interval_ms,
            fall_timer_ms: 0,
            elapsed_ms: 0,
        };
        engine.spawn_piece();
        engine
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Direct board access for setting up scenarios.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn active(&self) -> Option<&Piece> {
        self.active.as_ref()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn pieces(&self) -> u32 {
        self.pieces
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn fall_interval_ms(&self) -> u32 {
        self.fall_interval_ms
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms
    }

    /// Spawn a new piece from the catalog.
    ///
    /// If it cannot be placed the session ends and no piece is active.
    fn spawn_piece(&mut self) -> bool {
        let (kind, shape, color) = pick_random(&mut self.source);
        let piece = Piece::spawn(kind, shape, color, self.board.width());

        if !self.board.can_place(piece.occupied_cells()) {
            info!(
                "game over: {} piece blocked at spawn (score {}, lines {})",
                kind.as_str(),
                self.score,
                self.lines
            );
            self.active = None;
            self.game_over = true;
            return false;
        }

        self.active = Some(piece);
        self.pieces = self.pieces.wrapping_add(1);
        true
    }

    /// Try to move the active piece by (dx, dy)
    pub fn try_move(&mut self, dx: i16, dy: i16) -> bool {
        if self.game_over {
            return false;
        }
        let Some(active) = self.active.as_ref() else {
            return false;
        };

        let candidate = active.shifted(dx, dy);
        if !self.board.can_place(candidate.occupied_cells()) {
            return false;
        }
        self.active = Some(candidate);
        true
    }

    /// Try to rotate the active piece clockwise. No wall kicks.
    pub fn try_rotate(&mut self) -> bool {
        if self.game_over {
            return false;
        }
        let Some(active) = self.active.as_ref() else {
            return false;
        };

        let candidate = active.rotated();
        if !self.board.can_place(candidate.occupied_cells()) {
            return false;
        }
        self.active = Some(candidate);
        true
    }

    /// One gravity step: fall a row, or settle, clear, score and respawn.
    pub fn tick(&mut self) -> TickOutcome {
        if self.game_over {
            return TickOutcome::Idle;
        }
        if self.try_move(0, 1) {
            return TickOutcome::Fell;
        }

        let lines_cleared = self.settle_active();
        if self.spawn_piece() {
            TickOutcome::Settled { lines_cleared }
        } else {
            TickOutcome::GameOver { lines_cleared }
        }
    }

    /// Lock the active piece, clear rows and update score and speed
    fn settle_active(&mut self) -> usize {
        let Some(piece) = self.active.take() else {
            return 0;
        };

        self.board.settle(&piece);
        let lines_cleared = self.board.clear_full_rows();
        if lines_cleared == 0 {
            return 0;
        }

        let points = calculate_line_score(self.config.scoring, lines_cleared);
        self.score = self.score.saturating_add(points);
        self.lines = self.lines.saturating_add(lines_cleared as u32);
        self.fall_interval_ms =
            fall_interval_ms(self.config.scoring, self.score, &self.config.fall_speed);

        debug!(
            "cleared {} line(s) for {} points; score {}, fall interval {}ms",
            lines_cleared, points, self.score, self.fall_interval_ms
        );
        lines_cleared
    }

    /// Start over with an empty board, keeping configuration and random source
    pub fn reset(&mut self) {
        debug!(
            "reset after {} piece(s), score {}",
            self.pieces, self.score
        );
        self.board.clear();
        self.active = None;
        self.score = 0;
        self.lines = 0;
        self.pieces = 0;
        self.game_over = false;
        self.fall_interval_ms = self.config.fall_speed.base_ms;
        self.fall_timer_ms = 0;
        self.elapsed_ms = 0;
        self.spawn_piece();
    }

    /// Apply a command. Returns true if the session changed.
    pub fn apply(&mut self, command: Command) -> bool {
        match command {
            Command::MoveLeft => self.try_move(-1, 0),
            Command::MoveRight => self.try_move(1, 0),
            Command::SoftDrop => self.try_move(0, 1),
            Command::RotateClockwise => self.try_rotate(),
            Command::Tick => self.tick() != TickOutcome::Idle,
            Command::Reset => {
                self.reset();
                true
            }
        }
    }

    /// Advance the play clock by `elapsed_ms`.
    ///
    /// Once the accumulated fall time reaches the fall interval a single
    /// gravity step runs and the fall timer restarts from zero. Returns the
    /// step's outcome if one ran.
    pub fn advance(&mut self, elapsed_ms: u32) -> Option<TickOutcome> {
        if self.game_over {
            return None;
        }

        self.elapsed_ms = self.elapsed_ms.saturating_add(elapsed_ms as u64);
        self.fall_timer_ms = self.fall_timer_ms.saturating_add(elapsed_ms);
        if self.fall_timer_ms < self.fall_interval_ms {
            return None;
        }

        self.fall_timer_ms = 0;
        Some(self.tick())
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.width = self.board.width();
        out.height = self.board.height();
        out.cells.clear();
        out.cells.extend_from_slice(self.board.cells());
        out.active = self.active.as_ref().map(ActiveSnapshot::from);
        out.score = self.score;
        out.lines = self.lines;
        out.pieces = self.pieces;
        out.game_over = self.game_over;
        out.fall_interval_ms = self.fall_interval_ms;
        out.elapsed_ms = self.elapsed_ms;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}
