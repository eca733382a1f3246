//! Sparse world representation.
//!
//! Only alive cells are stored; every cell absent from the set is dead.

use crate::{Cell, render::Viewport};
use rustc_hash::FxHashSet;
use std::fmt;

/// An immutable snapshot of every alive cell
///
/// A [`WorldState`] is never mutated once built. Transitions in
/// [`crate::engine`] always produce a new value.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct WorldState {
    alive: FxHashSet<Cell>,
}

impl WorldState {
    #[inline]
    pub fn empty() -> Self {
        Self::default()
    }

    #[inline]
    pub(crate) fn from_set(alive: FxHashSet<Cell>) -> Self {
        Self { alive }
    }

    #[inline]
    pub(crate) fn cells(&self) -> &FxHashSet<Cell> {
        &self.alive
    }

    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        self.alive.contains(&cell)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.alive.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.alive.is_empty()
    }

    /// Iterates alive cells in no particular order
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = Cell> + '_ {
        self.alive.iter().copied()
    }

    /// All alive cells, sorted row by row (see [`Cell`]'s ordering)
    pub fn sorted(&self) -> Vec<Cell> {
        let mut cells: Vec<Cell> = self.iter().collect();
        cells.sort_unstable();
        cells
    }

    /// Inclusive `(min, max)` corners of the alive cells, `None` when empty
    pub fn bounding_box(&self) -> Option<(Cell, Cell)> {
        let mut cells = self.iter();
        let first = cells.next()?;
        Some(cells.fold((first, first), |(min, max), c| {
            (
                Cell::new(min.x.min(c.x), min.y.min(c.y)),
                Cell::new(max.x.max(c.x), max.y.max(c.y)),
            )
        }))
    }

    /// The alive cells that fall inside `viewport`
    pub fn within(&self, viewport: &Viewport) -> WorldState {
        self.iter().filter(|&c| viewport.contains(c)).collect()
    }

    /// Number of alive cells adjacent to `cell`, in `0..=8`
    #[inline]
    pub fn alive_neighbor_count(&self, cell: Cell) -> u8 {
        alive_neighbor_count(cell, self)
    }
}

/// Counts the members of `cell`'s neighbourhood present in `state`
pub fn alive_neighbor_count(cell: Cell, state: &WorldState) -> u8 {
    cell.neighbors()
        .into_iter()
        .filter(|n| state.alive.contains(n))
        .count() as u8
}

impl FromIterator<Cell> for WorldState {
    fn from_iter<I: IntoIterator<Item = Cell>>(iter: I) -> Self {
        Self {
            alive: iter.into_iter().collect(),
        }
    }
}

impl fmt::Debug for WorldState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // sorted so that failing assertions print comparable output
        f.debug_set().entries(self.sorted()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(cells: &[(i32, i32)]) -> WorldState {
        cells.iter().map(|&c| Cell::from(c)).collect()
    }

    #[test]
    fn equality_is_set_equality() {
        let a = state(&[(0, 0), (1, 2), (1, 2)]);
        let b = state(&[(1, 2), (0, 0)]);

        assert_eq!(a, b);
        assert_eq!(a.len(), 2);
        assert_ne!(a, state(&[(0, 0)]));
    }

    #[test]
    fn counts_alive_neighbors() {
        let block = state(&[(0, 0), (1, 0), (0, 1), (1, 1)]);

        assert_eq!(block.alive_neighbor_count(Cell::new(0, 0)), 3);
        assert_eq!(alive_neighbor_count(Cell::new(2, 2), &block), 1);
        assert_eq!(alive_neighbor_count(Cell::new(5, 5), &block), 0);
        assert_eq!(alive_neighbor_count(Cell::new(0, 2), &block), 2);
    }

    #[test]
    fn full_neighborhood_counts_eight() {
        let ring: WorldState = Cell::origin().neighbors().into_iter().collect();

        assert_eq!(ring.alive_neighbor_count(Cell::origin()), 8);
    }

    #[test]
    fn bounding_box_covers_negative_coordinates() {
        let s = state(&[(-3, 4), (2, -1), (0, 0)]);

        assert_eq!(s.bounding_box(), Some((Cell::new(-3, -1), Cell::new(2, 4))));
        assert_eq!(WorldState::empty().bounding_box(), None);
    }

    #[test]
    fn sorted_and_within() {
        let s = state(&[(3, 1), (-1, 0), (0, 1), (10, 10)]);
        let viewport = Viewport::new(-1, 0, 4, 2).unwrap();

        assert_eq!(
            s.sorted(),
            vec![Cell::new(-1, 0), Cell::new(0, 1), Cell::new(3, 1), Cell::new(10, 10)]
        );
        assert_eq!(s.within(&viewport), state(&[(3, 1), (-1, 0), (0, 1)]));
    }
}
