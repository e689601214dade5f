//! The per-region check: is one region a permutation of the digits 1-9?

use crate::{Grid, RegionDescriptor};
use serde::{Deserialize, Serialize};

/// Outcome of checking a single region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegionOutcome {
    Valid,
    Invalid,
}

/// Check whether one region holds each digit 1-9 exactly once.
///
/// A single linear pass over the region's 9 cells with a digit bitmask.
/// The first out-of-range value or duplicate invalidates the region and
/// ends the scan. Never fails: a bad cell is an `Invalid` outcome, not an
/// error.
pub fn check_region(grid: &Grid, region: &RegionDescriptor) -> RegionOutcome {
    // bit v is set once digit v has been seen
    let mut seen = 0u16;
    for &pos in region.cells() {
        let value = grid.value(pos);
        if !(1..=9).contains(&value) {
            return RegionOutcome::Invalid;
        }
        let bit = 1u16 << value;
        if seen & bit != 0 {
            return RegionOutcome::Invalid;
        }
        seen |= bit;
    }
    RegionOutcome::Valid
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Position, RegionDescriptor};
    use proptest::prelude::*;

    /// Grid whose row 0 holds `values`; every other cell is 0.
    fn grid_with_row0(values: [u8; 9]) -> Grid {
        let mut cells = [[0u8; 9]; 9];
        cells[0] = values;
        Grid::from_rows(cells)
    }

    fn row0() -> RegionDescriptor {
        RegionDescriptor::all().into_iter().next().unwrap()
    }

    #[test]
    fn test_permutation_is_valid() {
        let grid = grid_with_row0([6, 2, 4, 5, 3, 9, 1, 8, 7]);
        assert_eq!(check_region(&grid, &row0()), RegionOutcome::Valid);
    }

    #[test]
    fn test_duplicate_is_invalid() {
        let grid = grid_with_row0([6, 2, 4, 5, 3, 9, 1, 8, 6]);
        assert_eq!(check_region(&grid, &row0()), RegionOutcome::Invalid);
    }

    #[test]
    fn test_zero_is_invalid() {
        let grid = grid_with_row0([6, 2, 4, 5, 0, 9, 1, 8, 7]);
        assert_eq!(check_region(&grid, &row0()), RegionOutcome::Invalid);
    }

    #[test]
    fn test_value_above_nine_is_invalid() {
        let grid = grid_with_row0([6, 2, 4, 5, 10, 9, 1, 8, 7]);
        assert_eq!(check_region(&grid, &row0()), RegionOutcome::Invalid);
    }

    #[test]
    fn test_checks_only_its_own_cells() {
        // Row 0 is a permutation; the rest of the grid is garbage (all 0s)
        let grid = grid_with_row0([1, 2, 3, 4, 5, 6, 7, 8, 9]);
        assert_eq!(check_region(&grid, &row0()), RegionOutcome::Valid);
    }

    fn permutation() -> impl Strategy<Value = Vec<u8>> {
        Just((1u8..=9).collect::<Vec<u8>>()).prop_shuffle()
    }

    proptest! {
        #[test]
        fn prop_any_permutation_is_valid(perm in permutation()) {
            let mut values = [0u8; 9];
            values.copy_from_slice(&perm);
            let grid = grid_with_row0(values);
            prop_assert_eq!(check_region(&grid, &row0()), RegionOutcome::Valid);
        }

        #[test]
        fn prop_any_duplicate_is_invalid(
            perm in permutation(),
            src in 0usize..9,
            dst in 0usize..9,
        ) {
            prop_assume!(src != dst);
            let mut values = [0u8; 9];
            values.copy_from_slice(&perm);
            values[dst] = values[src];
            let grid = grid_with_row0(values);
            prop_assert_eq!(check_region(&grid, &row0()), RegionOutcome::Invalid);
        }

        #[test]
        fn prop_any_out_of_range_value_is_invalid(
            perm in permutation(),
            cell in 0usize..9,
            bad in prop_oneof![Just(0u8), 10u8..=u8::MAX],
        ) {
            let mut values = [0u8; 9];
            values.copy_from_slice(&perm);
            values[cell] = bad;
            let grid = grid_with_row0(values);
            prop_assert_eq!(check_region(&grid, &row0()), RegionOutcome::Invalid);
        }
    }

    #[test]
    fn test_box_region_reads_box_cells() {
        // Bottom-right box holds 1..9; everything else is 0
        let mut cells = [[0u8; 9]; 9];
        let mut digit = 1u8;
        for row in 6..9 {
            for col in 6..9 {
                cells[row][col] = digit;
                digit += 1;
            }
        }
        let grid = Grid::from_rows(cells);
        let regions = RegionDescriptor::all();
        let bottom_right = &regions[26];
        assert_eq!(bottom_right.cells()[0], Position::new(6, 6));
        assert_eq!(check_region(&grid, bottom_right), RegionOutcome::Valid);
    }
}
