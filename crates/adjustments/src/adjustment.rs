use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use pdv_core::{AdjustmentId, DomainError, DomainResult};

/// Adjustment batch lifecycle. `Processed` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdjustmentStatus {
    ToProcess,
    Processed,
}

/// Adjustment batch header.
///
/// Owns its lines: deleting a header cascades to them (see
/// [`crate::store::AdjustmentStore::delete`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Adjustment {
    id: AdjustmentId,
    status: AdjustmentStatus,
    observation: Option<String>,
    user: String,
    created_at: NaiveDate,
    processed_at: Option<NaiveDate>,
}

impl Adjustment {
    /// New open batch for the given responsible user.
    pub fn new(id: AdjustmentId, user: impl Into<String>, created_at: NaiveDate) -> Self {
        Self {
            id,
            status: AdjustmentStatus::ToProcess,
            observation: None,
            user: user.into(),
            created_at,
            processed_at: None,
        }
    }

    pub fn id(&self) -> AdjustmentId {
        self.id
    }

    pub fn status(&self) -> AdjustmentStatus {
        self.status
    }

    pub fn observation(&self) -> Option<&str> {
        self.observation.as_deref()
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    pub fn created_at(&self) -> NaiveDate {
        self.created_at
    }

    pub fn processed_at(&self) -> Option<NaiveDate> {
        self.processed_at
    }

    pub fn is_processed(&self) -> bool {
        matches!(self.status, AdjustmentStatus::Processed)
    }

    /// Gate shared by every mutating operation: once processed, a batch
    /// accepts no line changes, cannot be processed again and cannot be
    /// deleted.
    pub fn ensure_to_process(&self) -> DomainResult<()> {
        if self.is_processed() {
            return Err(DomainError::AlreadyProcessed);
        }
        Ok(())
    }

    /// Seal the batch: record the observation and the processing date.
    pub fn mark_processed(&mut self, observation: Option<String>, processed_at: NaiveDate) {
        self.status = AdjustmentStatus::Processed;
        self.observation = observation;
        self.processed_at = Some(processed_at);
    }
}
