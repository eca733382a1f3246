//! Sparse Conway's Game of Life on an unbounded grid.
//!
//! A [`WorldState`] stores only alive cells. [`next_generation`] visits
//! those cells and their dead neighbours, never the whole grid, and
//! [`render`] draws any rectangular window of a state as text.

pub mod cell;
pub mod enc;
pub mod engine;
pub mod error;
pub mod render;
pub mod world;

pub use cell::{Cell, neighbors};
pub use enc::{PlainText, PositionEncoder};
pub use engine::{
    Engine, Evolution, candidate_dead_cells, evolve, next_generation, next_generation_parallel,
};
pub use error::{Error, Result};
pub use render::{Glyphs, Renderer, Viewport, render};
pub use world::{WorldState, alive_neighbor_count};
