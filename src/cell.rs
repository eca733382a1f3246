use std::{
    cmp::Ordering,
    fmt,
    ops::{Add, Neg, Sub},
};

/// Offsets of the 8 cells at Chebyshev distance 1, row by row from the bottom
const NEIGHBOR_OFFSETS: [Cell; 8] = [
    Cell::new(-1, -1),
    Cell::new(0, -1),
    Cell::new(1, -1),
    Cell::new(-1, 0),
    Cell::new(1, 0),
    Cell::new(-1, 1),
    Cell::new(0, 1),
    Cell::new(1, 1),
];

/// A single position on the unbounded grid
///
/// `x` grows to the right and `y` grows upward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}
impl Cell {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
    #[inline]
    pub const fn origin() -> Self {
        Self::new(0, 0)
    }

    /// The 8 cells surrounding this one
    ///
    /// Independent of any world state and defined for every coordinate.
    #[inline]
    pub fn neighbors(self) -> [Cell; 8] {
        NEIGHBOR_OFFSETS.map(|offset| self + offset)
    }

    /// Chebyshev (king move) distance between two cells
    #[inline]
    pub fn chebyshev(self, other: Cell) -> u32 {
        self.x.abs_diff(other.x).max(self.y.abs_diff(other.y))
    }
}

/// Free-standing form of [`Cell::neighbors`]
#[inline]
pub fn neighbors(cell: Cell) -> [Cell; 8] {
    cell.neighbors()
}

impl Default for Cell {
    #[inline]
    fn default() -> Self {
        Self::origin()
    }
}
impl From<(i32, i32)> for Cell {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}
impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
impl PartialOrd for Cell {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for Cell {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        // y first so sorted cells read row by row
        Ord::cmp(&self.y, &other.y).then(Ord::cmp(&self.x, &other.x))
    }
}
impl Neg for Cell {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        Self::new(-self.x, -self.y)
    }
}
impl Add for Cell {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}
impl Sub for Cell {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn neighbors_are_eight_distinct_adjacent_cells() {
        for cell in [
            Cell::origin(),
            Cell::new(-7, 3),
            Cell::new(1_000_000, -1_000_000),
        ] {
            let around = neighbors(cell);
            let distinct: HashSet<Cell> = around.iter().copied().collect();

            assert_eq!(distinct.len(), 8);
            assert!(!distinct.contains(&cell));
            assert!(around.iter().all(|&n| cell.chebyshev(n) == 1));
        }
    }

    #[test]
    fn orders_by_row_then_column() {
        let mut cells = vec![Cell::new(2, 1), Cell::new(-1, 1), Cell::new(5, 0)];
        cells.sort();

        assert_eq!(cells, vec![Cell::new(5, 0), Cell::new(-1, 1), Cell::new(2, 1)]);
    }

    #[test]
    fn arithmetic() {
        let a = Cell::new(3, -2);
        let b = Cell::from((1, 4));

        assert_eq!(a + b, Cell::new(4, 2));
        assert_eq!(a - b, Cell::new(2, -6));
        assert_eq!(-a, Cell::new(-3, 2));
        assert_eq!(a.to_string(), "(3, -2)");
    }
}
