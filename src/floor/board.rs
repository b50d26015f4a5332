use chrono::Utc;

use crate::floor::event::{EventType, FactoryEvent, Severity};
use crate::floor::job::{Job, JobStatus};
use crate::floor::progress::QuantityUpdate;

// Fallback event location for jobs with no assigned machine.
const SHOP_FLOOR: &str = "SHOP";

/// In-memory job store: the update collaborator behind the progress engine's
/// callback. Persistence and offline queuing live outside this core; this
/// board is what the binary and tests plug in.
#[derive(Debug, Default)]
pub struct JobBoard {
    jobs: Vec<Job>,
    events: Vec<FactoryEvent>,
}

impl JobBoard {
    pub fn new(jobs: Vec<Job>) -> Self {
        Self {
            jobs,
            events: Vec::new(),
        }
    }

    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    pub fn events(&self) -> &[FactoryEvent] {
        &self.events
    }

    pub fn get(&self, job_id: &str) -> Option<&Job> {
        self.jobs.iter().find(|j| j.id == job_id)
    }

    /// The single job currently in progress on the given machine, if any.
    pub fn active_for(&self, machine_id: &str) -> Option<&Job> {
        self.jobs.iter().find(|j| {
            j.assigned_machine_id.as_deref() == Some(machine_id)
                && j.status == JobStatus::InProgress
        })
    }

    pub fn push(&mut self, job: Job) {
        self.jobs.push(job);
    }

    pub fn start(&mut self, job_id: &str) {
        if let Some(job) = self.jobs.iter_mut().find(|j| j.id == job_id) {
            job.status = JobStatus::InProgress;
        }
    }

    /// Apply a quantity update coming out of the progress engine.
    ///
    /// Unknown job ids are ignored (the job may have been reassigned since
    /// the slider moved). Partial updates write the completed quantity,
    /// clamped at zero on this side: the engine stays permissive, storage
    /// does not hold negative production.
    pub fn apply(&mut self, update: QuantityUpdate) {
        let Some(job) = self.jobs.iter_mut().find(|j| j.id == update.job_id) else {
            return;
        };

        if update.is_complete {
            job.status = JobStatus::Completed;
            job.completed_at = Some(Utc::now());
            if update.operator_notes.is_some() {
                job.operator_notes = update.operator_notes;
            }
            let machine_id = job
                .assigned_machine_id
                .clone()
                .unwrap_or_else(|| SHOP_FLOOR.to_string());
            let description = format!("Finished: {}", job.product_name);
            self.events.push(FactoryEvent::new(
                machine_id,
                EventType::JobComplete,
                description,
                Severity::Info,
            ));
        } else {
            job.completed_quantity = u32::try_from(update.quantity.max(0)).unwrap_or(u32::MAX);
        }
    }

    /// Explicit completion action, distinct from slider-driven updates.
    pub fn complete(&mut self, job_id: &str, operator_notes: Option<String>) {
        self.apply(QuantityUpdate {
            job_id: job_id.to_string(),
            quantity: 0,
            is_complete: true,
            operator_notes,
        });
    }
}
