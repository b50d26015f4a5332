//! Job progress computation and slider-driven quantity updates.
//!
//! Both entry points take the active job as an `Option`: "no active job" is
//! a normal transient state (between jobs), handled as 0% progress and a
//! silent no-op respectively, never as an error. Connectivity is deliberately
//! not consulted here; whether an update is applied optimistically against
//! local state is the update collaborator's concern.

use crate::error::TerminalError;
use crate::floor::job::Job;

/// Command handed to the job-store collaborator. The engine never mutates a
/// job directly; it describes the change and lets the caller persist it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuantityUpdate {
    pub job_id: String,
    /// Absolute completed quantity. Carried signed so out-of-range slider
    /// percentages propagate unmodified; clamping is the storage side's call.
    pub quantity: i64,
    pub is_complete: bool,
    pub operator_notes: Option<String>,
}

/// Completion percentage for the active job.
///
/// No active job reads as 0. Overproduction is a legitimate signal, not an
/// error, so the result is not clamped to 100. A zero target is a defect in
/// upstream job data and fails with [`TerminalError::InvalidJobTarget`].
pub fn compute_progress(active: Option<&Job>) -> Result<u32, TerminalError> {
    let Some(job) = active else {
        return Ok(0);
    };
    if job.target_quantity == 0 {
        return Err(TerminalError::InvalidJobTarget {
            job_id: job.id.clone(),
        });
    }
    let percent =
        (100.0 * f64::from(job.completed_quantity) / f64::from(job.target_quantity)).round();
    Ok(percent as u32)
}

/// Convert a slider position back into an absolute quantity and dispatch it.
///
/// With no active job this is a silent no-op. Otherwise `update` is invoked
/// exactly once with `is_complete = false`: completion is a distinct,
/// explicit action, never a side effect of dragging the slider. The percent
/// is not clamped: negative or >100 values pass through so non-interactive
/// callers (bulk corrections) stay supported; the slider widget owns its own
/// range limits.
pub fn apply_slider_change<F>(active: Option<&Job>, percent: i32, mut update: F)
where
    F: FnMut(QuantityUpdate),
{
    let Some(job) = active else {
        return;
    };
    let quantity = (f64::from(percent) / 100.0 * f64::from(job.target_quantity)).round() as i64;
    update(QuantityUpdate {
        job_id: job.id.clone(),
        quantity,
        is_complete: false,
        operator_notes: None,
    });
}
