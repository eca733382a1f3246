//! Error types shared by the library and the console driver.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The viewport is empty or inverted on at least one axis.
    #[error("invalid viewport [{x1}, {x2}) x [{y1}, {y2}): upper bounds must exceed lower bounds")]
    InvalidViewport { x1: i32, y1: i32, x2: i32, y2: i32 },

    /// Alive and dead glyphs that cannot be told apart in a rendered block.
    #[error("invalid glyphs {alive:?} / {dead:?}: both must be non-empty, distinct and equally wide")]
    InvalidGlyphs { alive: String, dead: String },

    #[error("generation count must not be negative (got {0})")]
    NegativeGenerations(i64),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
