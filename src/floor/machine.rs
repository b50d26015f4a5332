use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MachineStatus {
    Running,
    Idle,
    Maintenance,
    Error,
    Offline,
}

impl fmt::Display for MachineStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MachineStatus::Running => write!(f, "RUNNING"),
            MachineStatus::Idle => write!(f, "IDLE"),
            MachineStatus::Maintenance => write!(f, "MAINTENANCE"),
            MachineStatus::Error => write!(f, "ERROR"),
            MachineStatus::Offline => write!(f, "OFFLINE"),
        }
    }
}

/// A production station on the floor. Owned by the manufacturing domain; the
/// core reads it for navigation fallback and machine selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Machine {
    pub id: String,
    pub name: String,
    pub status: MachineStatus,
    #[serde(default)]
    pub current_job_id: Option<String>,
    /// Operators assigned to this station.
    #[serde(default)]
    pub operator_ids: Vec<String>,
    #[serde(default = "default_is_active")]
    pub is_active: bool,
}

fn default_is_active() -> bool {
    true
}

impl Machine {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            status: MachineStatus::Idle,
            current_job_id: None,
            operator_ids: Vec::new(),
            is_active: true,
        }
    }

    pub fn is_running(&self) -> bool {
        self.status == MachineStatus::Running
    }
}
