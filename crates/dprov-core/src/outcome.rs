//! Per-step reconciliation outcomes and the run report.
//!
//! Non-fatal failures are folded into these values instead of being
//! propagated; only authentication aborts a run, and that happens
//! before any of these outcomes exist.

use std::fmt;

/// Result of a create-if-absent step (collection, permission).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnsureOutcome {
    Created,
    AlreadyPresent,
    Failed(String),
}

impl EnsureOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

impl fmt::Display for EnsureOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Created => write!(f, "created"),
            Self::AlreadyPresent => write!(f, "already present"),
            Self::Failed(e) => write!(f, "failed: {e}"),
        }
    }
}

/// Result of the try-update-then-create step for one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldOutcome {
    Updated,
    Created,
    Failed(String),
}

impl FieldOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

impl fmt::Display for FieldOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Updated => write!(f, "updated"),
            Self::Created => write!(f, "created"),
            Self::Failed(e) => write!(f, "failed: {e}"),
        }
    }
}

/// Everything one reconciliation run observed, in execution order.
/// The run exits 0 whenever this report exists at all; recorded
/// failures are surfaced, not re-raised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub collection: String,
    pub collection_outcome: EnsureOutcome,
    pub fields: Vec<(String, FieldOutcome)>,
    pub permission_outcome: EnsureOutcome,
}

impl RunReport {
    pub fn failure_count(&self) -> usize {
        let mut count = 0;
        if self.collection_outcome.is_failure() {
            count += 1;
        }
        count += self.fields.iter().filter(|(_, o)| o.is_failure()).count();
        if self.permission_outcome.is_failure() {
            count += 1;
        }
        count
    }

    /// True when the remote schema fully matches the blueprint.
    pub fn is_converged(&self) -> bool {
        self.failure_count() == 0
    }
}
