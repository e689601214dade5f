//! Validation lifecycle: fan out 27 region checks, join them all, reduce.

use crate::{
    check_region, Grid, RegionDescriptor, RegionKind, RegionOutcome, ResultBoard, VerifyError,
};
use serde::Serialize;
use std::thread;

/// Per-region entry of the final report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegionReport {
    pub index: usize,
    pub kind: RegionKind,
    pub region: String,
    pub outcome: RegionOutcome,
}

/// Full outcome of one validation run: all 27 region outcomes in index
/// order plus the reduced verdict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub regions: Vec<RegionReport>,
    pub valid: bool,
}

impl ValidationReport {
    /// The one-line human-readable verdict.
    pub fn verdict_line(&self) -> &'static str {
        if self.valid {
            "Sudoku solution is VALID."
        } else {
            "Sudoku solution is INVALID."
        }
    }

    /// Outcome recorded for a region index.
    pub fn outcome(&self, index: usize) -> Option<RegionOutcome> {
        self.regions.get(index).map(|region| region.outcome)
    }

    /// Every invalid region, in index order.
    pub fn invalid_regions(&self) -> impl Iterator<Item = &RegionReport> {
        self.regions
            .iter()
            .filter(|region| region.outcome == RegionOutcome::Invalid)
    }
}

fn build_report(
    descriptors: &[RegionDescriptor],
    board: &ResultBoard,
) -> Result<ValidationReport, VerifyError> {
    let outcomes = board.outcomes()?;
    let regions = descriptors
        .iter()
        .map(|desc| RegionReport {
            index: desc.index(),
            kind: desc.kind(),
            region: desc.to_string(),
            outcome: outcomes[desc.index()],
        })
        .collect();
    let valid = outcomes
        .iter()
        .all(|outcome| *outcome == RegionOutcome::Valid);
    Ok(ValidationReport { regions, valid })
}

/// Validate a grid with one scoped thread per region.
///
/// The grid is shared read-only across all tasks. Each task hands its
/// outcome back through its join handle and only this function writes the
/// result board, so the single-writer-per-slot invariant holds by
/// construction. The join loop inside the scope is the barrier: no outcome
/// is consulted until every task has finished.
///
/// Grid content only ever yields a verdict; `Err` means the concurrency
/// machinery itself misbehaved (a task panicked or a slot never resolved).
pub fn validate(grid: &Grid) -> Result<ValidationReport, VerifyError> {
    let descriptors = RegionDescriptor::all();
    let mut board = ResultBoard::new();

    thread::scope(|scope| {
        let handles: Vec<_> = descriptors
            .iter()
            .map(|desc| (desc.index(), scope.spawn(move || check_region(grid, desc))))
            .collect();

        for (index, handle) in handles {
            let outcome = handle
                .join()
                .map_err(|_| VerifyError::RegionTaskFailed { index })?;
            board.record(index, outcome)?;
        }
        Ok::<(), VerifyError>(())
    })?;

    build_report(&descriptors, &board)
}

/// Validate a grid without spawning threads, in descriptor order.
///
/// Produces a board and verdict identical to [`validate`]: region checks
/// are pure and order-independent. Backs the `--sequential` CLI mode.
pub fn validate_sequential(grid: &Grid) -> Result<ValidationReport, VerifyError> {
    let descriptors = RegionDescriptor::all();
    let mut board = ResultBoard::new();
    for desc in &descriptors {
        board.record(desc.index(), check_region(grid, desc))?;
    }
    build_report(&descriptors, &board)
}
