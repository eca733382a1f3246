use std::time::Duration;

use anyhow::{Context, bail};
use lifeset::{Cell, Engine, Glyphs, PlainText, Viewport, WorldState};

/// Names of the four viewport bounds, in `Viewport::new` argument order
pub const BOUNDS: [&str; 4] = ["x1", "y1", "x2", "y2"];

pub struct Args {
    matches: getopts::Matches,
}

impl Args {
    fn new<T: AsRef<str>>(args: &[T]) -> anyhow::Result<Option<Self>> {
        let mut opts = getopts::Options::new();
        opts.optflag("", "help", "print this help menu");
        opts.optflag("c", "console", "animate the generations in the terminal");
        opts.optflag("t", "threads", "compute generations on the rayon thread pool");
        opts.optopt("i", "input", "plaintext grid to load", "FILE");
        opts.optopt("o", "output", "write the last generation as a plaintext grid", "FILE");
        opts.optopt("a", "alive", "character marking alive cells in grid files", "CHAR");
        opts.optopt("f", "fill", "pattern to use without an input file", "TYPE");
        opts.optopt("x", "x1", "left edge of the viewport (inclusive)", "X");
        opts.optopt("y", "y1", "bottom edge of the viewport (inclusive)", "Y");
        opts.optopt("X", "x2", "right edge of the viewport (exclusive)", "X");
        opts.optopt("Y", "y2", "top edge of the viewport (exclusive)", "Y");
        opts.optopt("g", "gens", "number of generations to compute", "COUNT");
        opts.optopt(
            "s",
            "sleep",
            "the amount of time to sleep between generations",
            "MILLIS",
        );
        opts.optopt("", "alive-glyph", "text drawn for an alive cell", "TEXT");
        opts.optopt("", "dead-glyph", "text drawn for a dead cell", "TEXT");
        opts.optopt("", "fill-char", "text drawn between neighbouring cells", "TEXT");

        let matches = opts.parse(args.iter().map(T::as_ref))?;
        if matches.opt_present("help") {
            println!("{}", opts.usage("usage: lifeset [options]"));
            Ok(None)
        } else {
            Ok(Some(Self { matches }))
        }
    }
    pub fn from_env() -> anyhow::Result<Option<Self>> {
        let env = std::env::args().collect::<Vec<_>>();
        Self::new(&env[1..])
    }

    /// Viewport bounds given on the command line, `None` where absent
    pub fn bounds(&self) -> anyhow::Result<[Option<i32>; 4]> {
        let mut bounds = [None; 4];
        for (slot, name) in bounds.iter_mut().zip(BOUNDS) {
            *slot = self
                .matches
                .opt_get(name)
                .with_context(|| format!("invalid value for --{name}"))?;
        }
        Ok(bounds)
    }

    /// Signed so that a negative count reaches the engine and is rejected there
    pub fn generations(&self) -> anyhow::Result<Option<i64>> {
        self.matches.opt_get("gens").context("invalid value for --gens")
    }

    pub fn console(&self) -> bool {
        self.matches.opt_present("console")
    }
    pub fn engine(&self) -> Engine {
        if self.matches.opt_present("threads") {
            Engine::Parallel
        } else {
            Engine::Serial
        }
    }

    pub fn sleep(&self) -> anyhow::Result<Option<Duration>> {
        let millis: Option<u64> = self
            .matches
            .opt_get("sleep")
            .context("invalid value for --sleep")?;
        Ok(match millis {
            Some(millis) => Some(Duration::from_millis(millis)),
            None if self.console() => Some(Duration::from_millis(100)),
            None => None,
        })
    }

    pub fn glyphs(&self) -> anyhow::Result<Glyphs> {
        let defaults = Glyphs::default();
        let alive = self.matches.opt_str("alive-glyph");
        let dead = self.matches.opt_str("dead-glyph");
        let fill = self.matches.opt_str("fill-char");

        let glyphs = Glyphs::new(
            alive.as_deref().unwrap_or(defaults.alive()),
            dead.as_deref().unwrap_or(defaults.dead()),
        )?;
        Ok(glyphs.with_fill(fill.as_deref().unwrap_or(defaults.fill())))
    }

    pub fn codec(&self) -> anyhow::Result<PlainText> {
        let codec = PlainText::default();
        let Some(alive) = self.matches.opt_str("alive") else {
            return Ok(codec);
        };
        let mut chars = alive.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(codec.with_alive(c)),
            _ => bail!("--alive expects a single character, got {alive:?}"),
        }
    }

    pub fn fill_mode(&self) -> anyhow::Result<FillMode> {
        let mode_str = self.matches.opt_str("fill");
        let mode_str = mode_str.as_deref().unwrap_or("random");
        FillMode::new(mode_str).with_context(|| format!("unknown fill mode {mode_str:?}"))
    }

    pub fn output_file(&self) -> Option<String> {
        self.matches.opt_str("output")
    }
    pub fn input_file(&self) -> Option<String> {
        self.matches.opt_str("input")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillMode {
    Random,
    Alternating,
    All,
    Empty,
}
impl FillMode {
    fn new<S: AsRef<str>>(s: S) -> Option<Self> {
        match s.as_ref() {
            "random" => Some(Self::Random),
            "alternating" => Some(Self::Alternating),
            "all" => Some(Self::All),
            "empty" => Some(Self::Empty),
            _ => None,
        }
    }

    fn fill_cell<R: rand::Rng>(&self, cell: Cell, rng: &mut R) -> bool {
        match self {
            Self::Random => rng.random_bool(0.5),
            Self::Alternating => (cell.x + cell.y).rem_euclid(2) == 0,
            Self::All => true,
            Self::Empty => false,
        }
    }

    /// Fills every cell of `viewport` according to this mode
    pub fn create_alive(self, viewport: &Viewport) -> WorldState {
        if self == Self::Empty {
            return WorldState::empty();
        }

        let mut rng = rand::rng();
        viewport
            .rows()
            .flat_map(|y| viewport.columns().map(move |x| Cell::new(x, y)))
            .filter(|&cell| self.fill_cell(cell, &mut rng))
            .collect()
    }
}
