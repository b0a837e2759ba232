// src/games/mod.rs

//! Games built on the engine.

pub mod tictactoe;

pub use tictactoe::TicTacToe;
