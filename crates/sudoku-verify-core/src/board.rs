//! Write-once result board: one outcome slot per region index.

use crate::{RegionOutcome, REGION_COUNT};
use thiserror::Error;

/// Internal failure of the dispatch/join/bookkeeping machinery.
///
/// Grid content never produces one of these: a bad grid is an ordinary
/// `Invalid` outcome. Any of these aborts the run with a diagnostic naming
/// the offending region index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum VerifyError {
    /// A region task panicked or never delivered its outcome.
    #[error("region task {index} failed before delivering an outcome")]
    RegionTaskFailed { index: usize },
    /// A region index outside 0..27 reached the board.
    #[error("region index {index} is out of range")]
    RegionIndexOutOfRange { index: usize },
    /// Two outcomes were recorded for the same slot.
    #[error("result slot {index} was written twice")]
    SlotAlreadyResolved { index: usize },
    /// A slot was still unresolved after all tasks joined.
    #[error("result slot {index} unresolved after the join barrier")]
    UnresolvedRegion { index: usize },
}

/// One result-board slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotState {
    Unknown,
    Resolved(RegionOutcome),
}

/// Fixed-size outcome table, one slot per region index, each slot written
/// at most once. The orchestrator is the only writer: tasks hand their
/// outcomes back by value and never touch the board themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultBoard {
    slots: [SlotState; REGION_COUNT],
}

impl Default for ResultBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultBoard {
    /// Fresh board with every slot unknown.
    pub fn new() -> Self {
        Self {
            slots: [SlotState::Unknown; REGION_COUNT],
        }
    }

    /// Record the outcome for `index`. Each slot accepts exactly one write.
    pub fn record(&mut self, index: usize, outcome: RegionOutcome) -> Result<(), VerifyError> {
        let slot = self
            .slots
            .get_mut(index)
            .ok_or(VerifyError::RegionIndexOutOfRange { index })?;
        match slot {
            SlotState::Unknown => {
                *slot = SlotState::Resolved(outcome);
                Ok(())
            }
            SlotState::Resolved(_) => Err(VerifyError::SlotAlreadyResolved { index }),
        }
    }

    /// Slot state at `index`, if the index is in range.
    pub fn slot(&self, index: usize) -> Option<SlotState> {
        self.slots.get(index).copied()
    }

    /// All 27 outcomes in index order. An unresolved slot at this point is
    /// a defect in the dispatch/join logic, not a legitimate state.
    pub fn outcomes(&self) -> Result<[RegionOutcome; REGION_COUNT], VerifyError> {
        let mut outcomes = [RegionOutcome::Invalid; REGION_COUNT];
        for (index, slot) in self.slots.iter().enumerate() {
            match slot {
                SlotState::Resolved(outcome) => outcomes[index] = *outcome,
                SlotState::Unknown => return Err(VerifyError::UnresolvedRegion { index }),
            }
        }
        Ok(outcomes)
    }

    /// AND-reduce: true iff every slot resolved `Valid`.
    pub fn verdict(&self) -> Result<bool, VerifyError> {
        Ok(self
            .outcomes()?
            .iter()
            .all(|outcome| *outcome == RegionOutcome::Valid))
    }
}
