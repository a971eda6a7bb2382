use log::trace;

use super::history::GenerationHistory;
use super::neighborhood::alive_count;

/// Conway's B3/S23 rule.
pub fn next_state(alive: bool, alive_neighbors: usize) -> bool {
    match (alive, alive_neighbors) {
        (true, 2) | (true, 3) => true, // survival
        (false, 3) => true,            // birth
        _ => false,                    // under/overpopulation, or stays dead
    }
}

/// Derive the generation after `current`, append it and move the cursor
/// onto it. Neighbor counts are only ever read from the source generation,
/// so the result does not depend on iteration order.
pub fn advance(history: &mut GenerationHistory) {
    let current = history.current();
    let source = history.get(current);
    let mut next = source.clone();

    for row in 0..source.rows() {
        for col in 0..source.cols() {
            let n = alive_count(source, row, col);
            if let (Some(cell), Some(target)) = (source.get(row, col), next.get_mut(row, col)) {
                target.set_alive(next_state(cell.is_alive(), n));
            }
        }
    }

    history.append(next);
    history.set_current(current + 1);
    trace!(
        "advanced to generation {} ({} alive, {} kept)",
        current + 1,
        history.current_generation().alive_count(),
        history.retained()
    );
}
