//! Concurrent validation of completed Sudoku grids.
//!
//! A finished grid is carved into 27 regions (9 rows, 9 columns, 9 boxes).
//! Each region is checked for "every digit 1-9 exactly once" on its own
//! thread, and the per-region outcomes are collected into a write-once
//! result board and reduced to a single VALID/INVALID verdict.

mod board;
mod grid;
mod orchestrator;
mod region;
mod validator;

pub use board::{ResultBoard, SlotState, VerifyError};
pub use grid::{Grid, GridParseError, Position, SAMPLE_SOLUTION};
pub use orchestrator::{validate, validate_sequential, RegionReport, ValidationReport};
pub use region::{
    RegionDescriptor, RegionKind, REGION_BOX_BASE, REGION_COL_BASE, REGION_COUNT, REGION_ROW_BASE,
};
pub use validator::{check_region, RegionOutcome};
