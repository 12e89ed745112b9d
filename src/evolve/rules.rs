//! Rule table for B3/S23.

use crate::board::Cell;

/// Next state indexed by current state and live-neighbour count (0..=8).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuleTable {
    table: [[Cell; 9]; 2],
}

/// Conway's Life, B3/S23.
pub const CONWAY: RuleTable = RuleTable::conway();

impl RuleTable {
    pub const fn conway() -> Self {
        let mut table = [[Cell::Dead; 9]; 2];
        let mut neighbors = 0;
        while neighbors <= 8 {
            table[0][neighbors] = output_for(false, neighbors as u8);
            table[1][neighbors] = output_for(true, neighbors as u8);
            neighbors += 1;
        }
        Self { table }
    }

    #[inline(always)]
    pub fn next(&self, current: Cell, neighbors: u8) -> Cell {
        debug_assert!(neighbors <= 8);
        self.table[current as usize][neighbors as usize]
    }
}

const fn output_for(alive: bool, neighbors: u8) -> Cell {
    let next_alive = if alive {
        neighbors == 2 || neighbors == 3
    } else {
        neighbors == 3
    };
    if next_alive { Cell::Alive } else { Cell::Dead }
}

#[cfg(test)]
mod tests {
    use super::{CONWAY, Cell};

    fn expected_output(current: Cell, neighbors: u8) -> Cell {
        match (current, neighbors) {
            (Cell::Alive, 2) | (Cell::Alive, 3) => Cell::Alive,
            (Cell::Dead, 3) => Cell::Alive,
            _ => Cell::Dead,
        }
    }

    #[test]
    fn rule_table_matches_reference() {
        for current in [Cell::Dead, Cell::Alive] {
            for neighbors in 0..=8u8 {
                let expected = expected_output(current, neighbors);
                let got = CONWAY.next(current, neighbors);
                assert_eq!(
                    got, expected,
                    "{current:?} with {neighbors} neighbours: expected {expected:?} got {got:?}"
                );
            }
        }
    }
}
