// src/games/tictactoe.rs

//! Tic-tac-toe against a heuristic computer opponent.
//!
//! The human plays X and always moves first; every human move is answered
//! immediately by the computer playing O. Space restarts a finished game and
//! Escape restarts at any time.

use crate::audio::Sound;
use crate::color::Color;
use crate::game::Game;
use crate::keys::Key;
use crate::screen::Screen;
use anyhow::Result;
use log::*;

const SIZE: usize = 3;
const RESULT_TEXT_SIZE: u32 = 75;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mark {
    #[default]
    Empty,
    X,
    O,
}

impl Mark {
    fn opponent(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
            Mark::Empty => Mark::Empty,
        }
    }

    fn glyph(self) -> &'static str {
        match self {
            Mark::X => "X",
            Mark::O => "O",
            Mark::Empty => "",
        }
    }

    fn text_color(self) -> Color {
        match self {
            Mark::X => Color::Red,
            Mark::O => Color::Blue,
            Mark::Empty => Color::White,
        }
    }
}

/// Board indexed as `board[x][y]`.
type Board = [[Mark; SIZE]; SIZE];

#[derive(Debug, Default)]
pub struct TicTacToe {
    board: Board,
    stopped: bool,
    wins: i32,
}

impl TicTacToe {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mark(&self, x: usize, y: usize) -> Mark {
        self.board[x][y]
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    pub fn wins(&self) -> i32 {
        self.wins
    }

    fn restart(&mut self, screen: &mut Screen) -> Result<()> {
        debug!("TicTacToe: new game");
        self.board = Board::default();
        self.stopped = false;
        self.update_view(screen)
    }

    fn update_view(&self, screen: &mut Screen) -> Result<()> {
        for (x, column) in self.board.iter().enumerate() {
            for (y, mark) in column.iter().enumerate() {
                screen.set_cell_value_ex(
                    x,
                    y,
                    Color::White,
                    mark.glyph(),
                    Some(mark.text_color()),
                    None,
                )?;
            }
        }
        Ok(())
    }

    fn has_empty_cell(&self) -> bool {
        self.board.iter().flatten().any(|m| *m == Mark::Empty)
    }

    /// True if `mark` owns a full line through `(x, y)`.
    fn check_win(&self, x: usize, y: usize, mark: Mark) -> bool {
        let b = &self.board;
        let column = (0..SIZE).all(|i| b[x][i] == mark);
        let row = (0..SIZE).all(|i| b[i][y] == mark);
        let diagonal = x == y && (0..SIZE).all(|i| b[i][i] == mark);
        let anti_diagonal = x + y == SIZE - 1 && (0..SIZE).all(|i| b[i][SIZE - 1 - i] == mark);
        column || row || diagonal || anti_diagonal
    }

    /// Would placing `mark` on the empty cell `(x, y)` win?
    fn wins_if_placed(&mut self, x: usize, y: usize, mark: Mark) -> bool {
        if self.board[x][y] != Mark::Empty {
            return false;
        }
        self.board[x][y] = mark;
        let win = self.check_win(x, y, mark);
        self.board[x][y] = Mark::Empty;
        win
    }

    fn cells() -> impl Iterator<Item = (usize, usize)> {
        (0..SIZE).flat_map(|x| (0..SIZE).map(move |y| (x, y)))
    }

    /// Centre first, then a winning move, then a block, then the first
    /// free cell in x-major order.
    fn choose_move(&mut self, mark: Mark) -> Option<(usize, usize)> {
        if self.board[1][1] == Mark::Empty {
            return Some((1, 1));
        }
        if let Some(cell) = Self::cells().find(|&(x, y)| self.wins_if_placed(x, y, mark)) {
            return Some(cell);
        }
        let opponent = mark.opponent();
        if let Some(cell) = Self::cells().find(|&(x, y)| self.wins_if_placed(x, y, opponent)) {
            return Some(cell);
        }
        Self::cells().find(|&(x, y)| self.board[x][y] == Mark::Empty)
    }

    fn place_and_check(&mut self, screen: &mut Screen, x: usize, y: usize, mark: Mark) -> Result<()> {
        self.board[x][y] = mark;
        self.update_view(screen)?;

        if self.check_win(x, y, mark) {
            self.stopped = true;
            match mark {
                Mark::X => {
                    info!("TicTacToe: human wins");
                    self.wins += 1;
                    screen.set_score(self.wins);
                    screen.play_sound(Sound::Score);
                    screen.show_message_dialog(Color::None, "You Win!", Color::Green, RESULT_TEXT_SIZE);
                }
                Mark::O | Mark::Empty => {
                    info!("TicTacToe: computer wins");
                    screen.play_sound(Sound::Lose);
                    screen.show_message_dialog(Color::None, "Game Over", Color::Red, RESULT_TEXT_SIZE);
                }
            }
            return Ok(());
        }

        if !self.has_empty_cell() {
            info!("TicTacToe: draw");
            self.stopped = true;
            screen.show_message_dialog(Color::None, " Draw!", Color::Blue, RESULT_TEXT_SIZE);
        }
        Ok(())
    }

    fn computer_turn(&mut self, screen: &mut Screen) -> Result<()> {
        if let Some((x, y)) = self.choose_move(Mark::O) {
            debug!("TicTacToe: computer plays ({}, {})", x, y);
            self.place_and_check(screen, x, y, Mark::O)?;
        }
        Ok(())
    }
}

impl Game for TicTacToe {
    fn initialize(&mut self, screen: &mut Screen) -> Result<()> {
        screen.configure_screen(SIZE, SIZE);
        self.restart(screen)
    }

    fn on_mouse_left_click(&mut self, screen: &mut Screen, x: usize, y: usize) -> Result<()> {
        if self.stopped {
            return Ok(());
        }
        if self.board[x][y] != Mark::Empty {
            trace!("TicTacToe: ({}, {}) already taken", x, y);
            screen.play_sound(Sound::Collision);
            return Ok(());
        }
        self.place_and_check(screen, x, y, Mark::X)?;
        if !self.stopped {
            self.computer_turn(screen)?;
        }
        Ok(())
    }

    fn on_key_press(&mut self, screen: &mut Screen, key: Key) -> Result<()> {
        if (key == Key::Space && self.stopped) || key == Key::Escape {
            self.restart(screen)?;
        }
        Ok(())
    }
}
