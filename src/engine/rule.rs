use std::sync::OnceLock;

/// Possible alive-neighbour counts, `0..=8`
const COUNTS: usize = 9;
type RuleTable = [[bool; COUNTS]; 2];

/// Returns a Singleton lookup table for the B3/S23 ruleset
///
/// Equivalent to calling [`generate_rule_table`] once and storing the result
fn get_rule_table() -> &'static RuleTable {
    static CELL: OnceLock<RuleTable> = OnceLock::new();
    CELL.get_or_init(generate_rule_table)
}

/// Creates the lookup table for the Game of Life ruleset
///
/// The table is indexed first by the current state of a cell (0 dead, 1 alive)
/// and then by how many of its neighbours are alive.
fn generate_rule_table() -> RuleTable {
    let mut table = [[false; COUNTS]; 2];
    for (alive, row) in table.iter_mut().enumerate() {
        for (count, next) in row.iter_mut().enumerate() {
            *next = matches!((alive == 1, count), (true, 2) | (_, 3));
        }
    }
    table
}

/// Whether a cell is alive in the next generation
#[inline]
pub(super) fn next_state(alive: bool, neighbors: u8) -> bool {
    debug_assert!(usize::from(neighbors) < COUNTS, "more than 8 neighbours");
    get_rule_table()[usize::from(alive)][usize::from(neighbors)]
}
