mod rule;

use crate::{Cell, Error, Result, WorldState};
use rayon::prelude::*;
use rustc_hash::FxHashSet;
use tracing::{debug, debug_span, trace};

/// Dead cells adjacent to at least one alive cell
///
/// These are the only dead cells that can be born in the next generation, so
/// the rest of the unbounded grid never has to be visited.
pub fn candidate_dead_cells(state: &WorldState) -> FxHashSet<Cell> {
    let alive = state.cells();
    let mut candidates = FxHashSet::default();
    for cell in alive {
        candidates.extend(cell.neighbors().into_iter().filter(|n| !alive.contains(n)));
    }
    candidates
}

/// Applies B3/S23 to `state`, returning the following generation
pub fn next_generation(state: &WorldState) -> WorldState {
    let survivors = state
        .iter()
        .filter(|&cell| rule::next_state(true, state.alive_neighbor_count(cell)));
    let births = candidate_dead_cells(state)
        .into_iter()
        .filter(|&cell| rule::next_state(false, state.alive_neighbor_count(cell)));

    survivors.chain(births).collect()
}

/// Same result as [`next_generation`], spread over the rayon thread pool
///
/// Workers only read the frozen input; candidates are gathered into
/// per-worker sets and merged before the rule is evaluated.
pub fn next_generation_parallel(state: &WorldState) -> WorldState {
    if state.is_empty() {
        return WorldState::empty();
    }

    let alive = state.cells();
    let candidates: FxHashSet<Cell> = alive
        .par_iter()
        .fold(
            FxHashSet::default,
            |mut acc: FxHashSet<Cell>, cell| {
                acc.extend(cell.neighbors().into_iter().filter(|n| !alive.contains(n)));
                acc
            },
        )
        .reduce(
            FxHashSet::default,
            |mut a, mut b| {
                // merge the smaller set into the larger one
                if a.len() < b.len() {
                    std::mem::swap(&mut a, &mut b);
                }
                a.extend(b);
                a
            },
        );

    let survivors = alive
        .par_iter()
        .copied()
        .filter(|&cell| rule::next_state(true, state.alive_neighbor_count(cell)));
    let births = candidates
        .into_par_iter()
        .filter(|&cell| rule::next_state(false, state.alive_neighbor_count(cell)));

    WorldState::from_set(survivors.chain(births).collect())
}

/// Produces `generations + 1` snapshots, starting with a copy of `initial`
pub fn evolve(initial: &WorldState, generations: i64) -> Result<Vec<WorldState>> {
    Engine::Serial.evolve(initial, generations)
}

/// Selects how a single transition is computed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Engine {
    #[default]
    Serial,
    Parallel,
}

impl Engine {
    #[inline]
    pub fn step(self, state: &WorldState) -> WorldState {
        match self {
            Self::Serial => next_generation(state),
            Self::Parallel => next_generation_parallel(state),
        }
    }

    /// Lazily yields `initial` followed by every later generation
    pub fn iter(self, initial: &WorldState) -> Evolution {
        Evolution::new(self, initial.clone())
    }

    pub fn evolve(self, initial: &WorldState, generations: i64) -> Result<Vec<WorldState>> {
        if generations < 0 {
            return Err(Error::NegativeGenerations(generations));
        }
        let count = usize::try_from(generations).unwrap_or(usize::MAX);

        let _span = debug_span!("evolve", generations, engine = ?self).entered();
        let states = self
            .iter(initial)
            .take(count.saturating_add(1))
            .enumerate()
            .inspect(|(index, state)| debug!(generation = index, alive = state.len()))
            .map(|(_, state)| state)
            .collect();
        Ok(states)
    }
}

/// An endless sequence of generations
///
/// Every yielded [`WorldState`] is an owned snapshot; advancing the iterator
/// never affects values handed out earlier.
#[derive(Debug, Clone)]
pub struct Evolution {
    engine: Engine,
    current: WorldState,
    generation: Option<usize>,
}

impl Evolution {
    pub fn new(engine: Engine, initial: WorldState) -> Self {
        Self {
            engine,
            current: initial,
            generation: None,
        }
    }

    /// Index of the most recently yielded generation
    #[inline]
    pub fn generation(&self) -> Option<usize> {
        self.generation
    }
}

impl Iterator for Evolution {
    type Item = WorldState;

    fn next(&mut self) -> Option<Self::Item> {
        let generation = match self.generation {
            None => 0,
            Some(prev) => {
                self.current = self.engine.step(&self.current);
                prev + 1
            }
        };
        self.generation = Some(generation);
        trace!(generation, alive = self.current.len(), "advanced");
        Some(self.current.clone())
    }
}
