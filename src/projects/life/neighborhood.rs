use super::grid::Generation;
use crate::traits_and_structs::cell::Cell;

/// The eight Moore-neighborhood offsets as `(d_row, d_col)`.
const MOORE_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// `Some(n)` for non-negative `n`, `None` otherwise.
pub fn non_negative(n: isize) -> Option<usize> {
    usize::try_from(n).ok()
}

/// The neighbor at `(row + d_row, col + d_col)`, or `None` when that falls off
/// any edge of the board. Never wraps.
pub fn neighbor(
    generation: &Generation,
    row: usize,
    col: usize,
    (d_row, d_col): (isize, isize),
) -> Option<&Cell> {
    let row = non_negative(row as isize + d_row)?;
    let col = non_negative(col as isize + d_col)?;
    generation.get(row, col)
}

pub fn neighbors(generation: &Generation, row: usize, col: usize) -> impl Iterator<Item = &Cell> {
    MOORE_OFFSETS
        .iter()
        .filter_map(move |&offset| neighbor(generation, row, col, offset))
}

pub fn alive_count(generation: &Generation, row: usize, col: usize) -> usize {
    neighbors(generation, row, col)
        .filter(|cell| cell.is_alive())
        .count()
}

#[cfg(test)]
mod tests {
    use super::super::grid::test_support::generation_with;
    use super::*;

    #[test]
    fn non_negative_rejects_negatives() {
        assert_eq!(non_negative(-1), None);
        assert_eq!(non_negative(0), Some(0));
        assert_eq!(non_negative(7), Some(7));
    }

    #[test]
    fn candidate_counts_depend_on_position() {
        let generation = generation_with(5, 4, &[]);
        assert_eq!(neighbors(&generation, 0, 0).count(), 3);
        assert_eq!(neighbors(&generation, 4, 3).count(), 3);
        assert_eq!(neighbors(&generation, 0, 3).count(), 3);
        assert_eq!(neighbors(&generation, 0, 1).count(), 5);
        assert_eq!(neighbors(&generation, 2, 0).count(), 5);
        assert_eq!(neighbors(&generation, 4, 2).count(), 5);
        assert_eq!(neighbors(&generation, 2, 2).count(), 8);
    }

    #[test]
    fn full_board_counts() {
        let every: Vec<_> = (0..3).flat_map(|r| (0..3).map(move |c| (r, c))).collect();
        let generation = generation_with(3, 3, &every);
        assert_eq!(alive_count(&generation, 0, 0), 3);
        assert_eq!(alive_count(&generation, 0, 1), 5);
        assert_eq!(alive_count(&generation, 1, 1), 8);
    }

    #[test]
    fn edges_do_not_wrap() {
        let generation = generation_with(4, 4, &[(0, 3), (3, 0), (3, 3)]);
        assert_eq!(alive_count(&generation, 0, 0), 0);
    }

    #[test]
    fn center_cell_is_not_its_own_neighbor() {
        let generation = generation_with(3, 3, &[(1, 1), (0, 0)]);
        assert_eq!(alive_count(&generation, 1, 1), 1);
        assert_eq!(alive_count(&generation, 0, 1), 2);
    }
}
