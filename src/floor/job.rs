use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::TerminalError;
use crate::id::generate_job_id;

/// Lifecycle status of a production job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobStatus {
    Pending,
    InProgress,
    Completed,
    Halted,
}

/// A production job assigned to a machine.
///
/// `completed_quantity` is not constrained to stay at or below
/// `target_quantity`: overproduction is representable and reported as a
/// progress value above 100%.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: String,
    pub project_id: String,
    pub product_name: String,
    /// Quantity to produce. Always positive; `Job::new` refuses zero.
    pub target_quantity: u32,
    pub completed_quantity: u32,
    pub unit: String,
    pub status: JobStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_machine_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operator_notes: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

impl Job {
    /// Create a pending job with a fresh `JOB-` identifier.
    ///
    /// A zero target is rejected up front: such a job is meaningless and
    /// would make progress computation divide by zero downstream.
    pub fn new(
        project_id: impl Into<String>,
        product_name: impl Into<String>,
        target_quantity: u32,
        unit: impl Into<String>,
    ) -> Result<Self, TerminalError> {
        let id = generate_job_id();
        if target_quantity == 0 {
            return Err(TerminalError::InvalidJobTarget { job_id: id });
        }
        Ok(Self {
            id,
            project_id: project_id.into(),
            product_name: product_name.into(),
            target_quantity,
            completed_quantity: 0,
            unit: unit.into(),
            status: JobStatus::Pending,
            assigned_machine_id: None,
            operator_notes: None,
            created_at: Utc::now(),
            completed_at: None,
        })
    }

    pub fn assign_to(mut self, machine_id: impl Into<String>) -> Self {
        self.assigned_machine_id = Some(machine_id.into());
        self
    }
}
