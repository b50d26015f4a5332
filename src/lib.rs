//! Operator session and job-progress core for a small manufacturing floor.
//!
//! A worker authenticates with a 4-digit PIN, is bound to a machine, and
//! reports production progress against the machine's active job. The crate
//! covers session gating, machine binding and progress computation; rendering
//! and persistence stay behind collaborator traits and callbacks.

pub mod cli;
pub mod config;
pub mod connectivity;
pub mod debounce;
pub mod error;
pub mod floor;
pub mod id;
pub mod navigation;
pub mod session;
pub mod terminal;
pub mod ui;

pub use config::TerminalConfig;
pub use connectivity::{ConnectivityMonitor, ConnectivitySignal};
pub use debounce::Debouncer;
pub use error::{AuthError, TerminalError};
pub use floor::{
    Job, JobBoard, JobStatus, Machine, MachineStatus, QuantityUpdate, apply_slider_change,
    compute_progress,
};
pub use id::generate_id;
pub use navigation::{Destination, MachineSwitch, StationPause, resolve_selection, switch_machine};
pub use session::{Operator, OperatorDirectory, OperatorLookup, Role, Session, validate_pin_format};
pub use terminal::Terminal;
