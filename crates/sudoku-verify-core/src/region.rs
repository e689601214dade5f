//! The 27 regions of a 9x9 grid, each one a list of 9 cell coordinates.
//!
//! Region index convention: 0..8 = rows, 9..17 = columns, 18..26 = boxes
//! (boxes in row-major order of their top-left corner). The index doubles
//! as the region's slot in the result board.

use crate::Position;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of regions: 9 rows + 9 columns + 9 boxes.
pub const REGION_COUNT: usize = 27;

pub const REGION_ROW_BASE: usize = 0;
pub const REGION_COL_BASE: usize = 9;
pub const REGION_BOX_BASE: usize = 18;

/// Which shape a region has. Reporting label only: validation treats every
/// region as a plain list of 9 cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegionKind {
    Row,
    Column,
    Box,
}

/// One of the 27 regions: a unique result-board index plus the 9 cells the
/// region covers, in scan order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionDescriptor {
    index: usize,
    kind: RegionKind,
    cells: [Position; 9],
}

impl RegionDescriptor {
    /// Enumerate all 27 region descriptors in index order.
    pub fn all() -> Vec<RegionDescriptor> {
        let mut regions = Vec::with_capacity(REGION_COUNT);

        for row in 0..9 {
            let mut cells = [Position::new(0, 0); 9];
            for (col, cell) in cells.iter_mut().enumerate() {
                *cell = Position::new(row, col);
            }
            regions.push(Self {
                index: REGION_ROW_BASE + row,
                kind: RegionKind::Row,
                cells,
            });
        }

        for col in 0..9 {
            let mut cells = [Position::new(0, 0); 9];
            for (row, cell) in cells.iter_mut().enumerate() {
                *cell = Position::new(row, col);
            }
            regions.push(Self {
                index: REGION_COL_BASE + col,
                kind: RegionKind::Column,
                cells,
            });
        }

        for band in 0..3 {
            for stack in 0..3 {
                let (top, left) = (band * 3, stack * 3);
                let mut cells = [Position::new(0, 0); 9];
                for (i, cell) in cells.iter_mut().enumerate() {
                    *cell = Position::new(top + i / 3, left + i % 3);
                }
                regions.push(Self {
                    index: REGION_BOX_BASE + band * 3 + stack,
                    kind: RegionKind::Box,
                    cells,
                });
            }
        }

        regions
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn kind(&self) -> RegionKind {
        self.kind
    }

    /// The 9 cells of this region, in scan order.
    pub fn cells(&self) -> &[Position; 9] {
        &self.cells
    }
}

impl fmt::Display for RegionDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            RegionKind::Row => write!(f, "row {}", self.index - REGION_ROW_BASE),
            RegionKind::Column => write!(f, "column {}", self.index - REGION_COL_BASE),
            RegionKind::Box => {
                let corner = self.cells[0];
                write!(f, "box ({}, {})", corner.row, corner.col)
            }
        }
    }
}
