mod board;
mod event;
mod job;
mod machine;
mod progress;

pub use board::JobBoard;
pub use event::{EventType, FactoryEvent, Severity};
pub use job::{Job, JobStatus};
pub use machine::{Machine, MachineStatus};
pub use progress::{QuantityUpdate, apply_slider_change, compute_progress};
