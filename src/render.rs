//! Text-art projection of a [`WorldState`] onto a rectangular viewport.
//!
//! Rows are emitted top to bottom, i.e. from the largest `y` down to the
//! smallest, and the block is framed by a `#` border above and below.

use crate::{Cell, Error, Result, WorldState};
use std::{fmt, ops::Range};

/// A half-open window `[x1, x2) x [y1, y2)` onto the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Viewport {
    x1: i32,
    y1: i32,
    x2: i32,
    y2: i32,
}

impl Viewport {
    /// Fails with [`Error::InvalidViewport`] when either range is empty or inverted
    pub fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Result<Self> {
        if x2 <= x1 || y2 <= y1 {
            return Err(Error::InvalidViewport { x1, y1, x2, y2 });
        }
        Ok(Self { x1, y1, x2, y2 })
    }

    /// Smallest viewport covering every alive cell, `None` for an empty world
    pub fn covering(state: &WorldState) -> Option<Self> {
        let (min, max) = state.bounding_box()?;
        Some(Self {
            x1: min.x,
            y1: min.y,
            x2: max.x + 1,
            y2: max.y + 1,
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.x1.abs_diff(self.x2) as usize
    }
    #[inline]
    pub fn height(&self) -> usize {
        self.y1.abs_diff(self.y2) as usize
    }

    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        self.columns().contains(&cell.x) && (self.y1..self.y2).contains(&cell.y)
    }

    #[inline]
    pub fn columns(&self) -> Range<i32> {
        self.x1..self.x2
    }

    /// Row coordinates in output order, from `y2 - 1` down to `y1`
    #[inline]
    pub fn rows(&self) -> impl Iterator<Item = i32> {
        (self.y1..self.y2).rev()
    }
}

/// Strings drawn for alive cells, dead cells and between adjacent cells
///
/// The alive and dead glyphs are non-empty, distinct and equally wide, so
/// every row has the same width and a rendered block can be read back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Glyphs {
    alive: String,
    dead: String,
    fill: String,
}

impl Glyphs {
    /// Fails with [`Error::InvalidGlyphs`] unless both glyphs are non-empty,
    /// differ, and have the same width in chars
    pub fn new<A: Into<String>, D: Into<String>>(alive: A, dead: D) -> Result<Self> {
        let (alive, dead) = (alive.into(), dead.into());
        let width = alive.chars().count();
        if width == 0 || width != dead.chars().count() || alive == dead {
            return Err(Error::InvalidGlyphs { alive, dead });
        }
        Ok(Self {
            alive,
            dead,
            fill: String::new(),
        })
    }

    pub fn with_fill<F: Into<String>>(mut self, fill: F) -> Self {
        self.fill = fill.into();
        self
    }

    #[inline]
    pub fn alive(&self) -> &str {
        &self.alive
    }
    #[inline]
    pub fn dead(&self) -> &str {
        &self.dead
    }
    #[inline]
    pub fn fill(&self) -> &str {
        &self.fill
    }

    /// Width in chars of one cell
    fn cell_width(&self) -> usize {
        self.alive.chars().count()
    }
}

impl Default for Glyphs {
    fn default() -> Self {
        Self {
            alive: "██".to_owned(),
            dead: "  ".to_owned(),
            fill: String::new(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Renderer {
    glyphs: Glyphs,
}

impl Renderer {
    pub fn new(glyphs: Glyphs) -> Self {
        Self { glyphs }
    }

    /// Width in chars of a rendered row, which is also the border length
    pub fn row_width(&self, viewport: &Viewport) -> usize {
        let cells = viewport.width();
        cells * self.glyphs.cell_width() + (cells - 1) * self.glyphs.fill.chars().count()
    }

    pub fn window<'a>(&'a self, state: &'a WorldState, viewport: Viewport) -> Window<'a> {
        Window {
            renderer: self,
            state,
            viewport,
        }
    }

    pub fn render(&self, state: &WorldState, viewport: &Viewport) -> String {
        self.window(state, *viewport).to_string()
    }

    /// Reads back a block produced by [`Renderer::render`] for the same viewport
    ///
    /// The first line is taken as the top border. Glyphs that match neither
    /// the alive nor the dead glyph count as dead.
    pub fn parse(&self, text: &str, viewport: &Viewport) -> WorldState {
        let Glyphs { alive, dead, fill } = &self.glyphs;
        let width = self.glyphs.cell_width();

        let mut cells = Vec::new();
        for (y, line) in viewport.rows().zip(text.lines().skip(1)) {
            let mut rest = line;
            for x in viewport.columns() {
                if x != viewport.x1 {
                    rest = rest.strip_prefix(fill.as_str()).unwrap_or(rest);
                }
                if let Some(after) = rest.strip_prefix(alive.as_str()) {
                    cells.push(Cell::new(x, y));
                    rest = after;
                } else if let Some(after) = rest.strip_prefix(dead.as_str()) {
                    rest = after;
                } else {
                    rest = skip_chars(rest, width);
                }
            }
        }
        cells.into_iter().collect()
    }
}

fn skip_chars(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((i, _)) => &s[i..],
        None => "",
    }
}

/// Renders `state` over `[x1, x2) x [y1, y2)` with the default glyphs
pub fn render(state: &WorldState, x1: i32, y1: i32, x2: i32, y2: i32) -> Result<String> {
    let viewport = Viewport::new(x1, y1, x2, y2)?;
    Ok(Renderer::default().render(state, &viewport))
}

/// A borrowed view of a state through a viewport, rendered via [`fmt::Display`]
pub struct Window<'a> {
    renderer: &'a Renderer,
    state: &'a WorldState,
    viewport: Viewport,
}

impl fmt::Display for Window<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let glyphs = &self.renderer.glyphs;
        let border = "#".repeat(self.renderer.row_width(&self.viewport));

        writeln!(f, "{border}")?;
        for y in self.viewport.rows() {
            for x in self.viewport.columns() {
                if x != self.viewport.x1 {
                    f.write_str(&glyphs.fill)?;
                }
                let glyph = if self.state.contains(Cell::new(x, y)) {
                    &glyphs.alive
                } else {
                    &glyphs.dead
                };
                f.write_str(glyph)?;
            }
            writeln!(f)?;
        }
        writeln!(f, "{border}")
    }
}
