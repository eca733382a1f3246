use crate::{Cell, Result, WorldState, render::Viewport};
use std::{fs, path::Path};

pub trait PositionEncoder {
    fn encode(&self, state: &WorldState) -> String;
    fn decode(&self, value: &str) -> WorldState;
}

/// Running min/max of the alive cells seen while decoding
#[derive(Debug, Default)]
struct Extent {
    bounds: Option<(Cell, Cell)>,
}
impl Extent {
    fn include(&mut self, cell: Cell) {
        let (min, max) = self.bounds.get_or_insert((cell, cell));
        // each bound is checked on its own; a cell can move both ends of an axis
        if cell.x < min.x {
            min.x = cell.x;
        }
        if cell.x > max.x {
            max.x = cell.x;
        }
        if cell.y < min.y {
            min.y = cell.y;
        }
        if cell.y > max.y {
            max.y = cell.y;
        }
    }

    /// Translation that puts the middle of the extent on the origin
    fn center_offset(&self) -> Cell {
        match self.bounds {
            Some((min, max)) => -Cell::new(
                min.x + (max.x - min.x) / 2,
                min.y + (max.y - min.y) / 2,
            ),
            None => Cell::origin(),
        }
    }
}

/// A grid of characters, one line per row
///
/// The last line of the text is `y = 0` and `y` grows towards the top of the
/// file. Only the `alive` character marks alive cells; every other character,
/// and anything past the end of a short line, is dead.
#[derive(Debug, Clone)]
pub struct PlainText {
    alive: char,
    dead: char,
    center: bool,
}
impl PlainText {
    pub fn with_alive(mut self, alive: char) -> Self {
        self.alive = alive;
        self
    }

    pub fn with_dead(mut self, dead: char) -> Self {
        self.dead = dead;
        self
    }

    /// Whether decoded patterns are shifted so their bounding box sits on the origin
    pub fn centered(mut self, center: bool) -> Self {
        self.center = center;
        self
    }

    pub fn read_file<P: AsRef<Path>>(&self, path: P) -> Result<WorldState> {
        let text = fs::read_to_string(path)?;
        Ok(self.decode(&text))
    }

    pub fn write_file<P: AsRef<Path>>(&self, path: P, state: &WorldState) -> Result<()> {
        fs::write(path, self.encode(state))?;
        Ok(())
    }
}
impl Default for PlainText {
    fn default() -> Self {
        Self {
            alive: 'O',
            dead: '.',
            center: true,
        }
    }
}

impl PositionEncoder for PlainText {
    /// Writes the bounding box of `state`, top row first
    fn encode(&self, state: &WorldState) -> String {
        let Some(viewport) = Viewport::covering(state) else {
            return String::new();
        };

        let mut out = String::with_capacity((viewport.width() + 1) * viewport.height());
        for y in viewport.rows() {
            for x in viewport.columns() {
                out.push(if state.contains(Cell::new(x, y)) {
                    self.alive
                } else {
                    self.dead
                });
            }
            out.push('\n');
        }
        out
    }

    fn decode(&self, value: &str) -> WorldState {
        let rows: Vec<&str> = value.lines().collect();
        let top = rows.len() as i32 - 1;

        let mut alive = Vec::new();
        let mut extent = Extent::default();
        for (i, row) in rows.iter().enumerate() {
            let y = top - i as i32;
            for (x, ch) in row.chars().enumerate() {
                if ch == self.alive {
                    let cell = Cell::new(x as i32, y);
                    extent.include(cell);
                    alive.push(cell);
                }
            }
        }

        let offset = if self.center {
            extent.center_offset()
        } else {
            Cell::origin()
        };
        alive.into_iter().map(|cell| cell + offset).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(cells: &[(i32, i32)]) -> WorldState {
        cells.iter().map(|&c| Cell::from(c)).collect()
    }

    #[test]
    fn last_line_is_bottom_row() {
        let codec = PlainText::default().centered(false);
        let decoded = codec.decode(".O.\n..O\nOOO\n");

        assert_eq!(decoded, state(&[(1, 2), (2, 1), (0, 0), (1, 0), (2, 0)]));
    }

    #[test]
    fn centers_bounding_box_on_origin() {
        let decoded = PlainText::default().decode(".O.\n..O\nOOO\n");

        assert_eq!(decoded, state(&[(0, 1), (1, 0), (-1, -1), (0, -1), (1, -1)]));
    }

    #[test]
    fn even_span_rounds_toward_min() {
        let decoded = PlainText::default().decode("....\n.OO.\n");

        // x spans 1..=2, so the shift is -(1 + 1 / 2) = -1
        assert_eq!(decoded, state(&[(0, 0), (1, 0)]));
    }

    #[test]
    fn single_cell_centers_on_origin() {
        // a lone cell is both the minimum and the maximum on each axis
        let decoded = PlainText::default().decode("...\n..O\n...\n...\n");

        assert_eq!(decoded, state(&[(0, 0)]));
    }

    #[test]
    fn unknown_chars_and_ragged_lines_are_dead() {
        let codec = PlainText::default().with_alive('#').centered(false);
        let decoded = codec.decode("#x#\r\n\n? #####\n#");

        assert_eq!(
            decoded,
            state(&[(0, 3), (2, 3), (2, 1), (3, 1), (4, 1), (5, 1), (6, 1), (0, 0)])
        );
    }

    #[test]
    fn empty_input_is_empty_world() {
        assert!(PlainText::default().decode("").is_empty());
        assert!(PlainText::default().decode("...\n...\n").is_empty());
        assert_eq!(PlainText::default().encode(&WorldState::empty()), "");
    }

    #[test]
    fn encodes_bounding_box_top_down() {
        let glider = state(&[(1, 0), (2, -1), (0, -2), (1, -2), (2, -2)]);

        assert_eq!(PlainText::default().encode(&glider), ".O.\n..O\nOOO\n");
        assert_eq!(
            PlainText::default().with_alive('*').with_dead(' ').encode(&glider),
            " * \n  *\n***\n"
        );
    }

    #[test]
    fn decode_recovers_encoded_shape() {
        let s = state(&[(-4, 7), (-2, 5), (0, 6), (-3, 5)]);
        let codec = PlainText::default().centered(false);
        let decoded = codec.decode(&codec.encode(&s));

        // translated so the bounding box starts at the origin
        let (min, _) = s.bounding_box().unwrap();
        let expected: WorldState = s.iter().map(|c| c - min).collect();
        assert_eq!(decoded, expected);
    }

    #[test]
    fn file_round_trip_and_missing_file() {
        let path = std::env::temp_dir().join(format!("lifeset-enc-{}.txt", std::process::id()));
        let codec = PlainText::default();
        let blinker = state(&[(-1, 0), (0, 0), (1, 0)]);

        codec.write_file(&path, &blinker).unwrap();
        assert_eq!(codec.read_file(&path).unwrap(), blinker);
        std::fs::remove_file(&path).unwrap();

        assert!(matches!(codec.read_file(&path), Err(crate::Error::Io(_))));
    }
}
