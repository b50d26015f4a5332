use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::id::generate_event_id;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventType {
    JobStart,
    JobComplete,
    CoilChange,
    ErrorLog,
    QualityCheck,
    Calibration,
    Cleaning,
    StageComplete,
    ScrapReport,
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            EventType::JobStart => "JOB_START",
            EventType::JobComplete => "JOB_COMPLETE",
            EventType::CoilChange => "COIL_CHANGE",
            EventType::ErrorLog => "ERROR_LOG",
            EventType::QualityCheck => "QUALITY_CHECK",
            EventType::Calibration => "CALIBRATION",
            EventType::Cleaning => "CLEANING",
            EventType::StageComplete => "STAGE_COMPLETE",
            EventType::ScrapReport => "SCRAP_REPORT",
        };
        write!(f, "{label}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Info,
    Warning,
    Critical,
}

/// A record in the floor event feed, stamped with an `EV-` identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FactoryEvent {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub machine_id: String,
    #[serde(rename = "type")]
    pub event_type: EventType,
    pub description: String,
    pub severity: Severity,
}

impl FactoryEvent {
    pub fn new(
        machine_id: impl Into<String>,
        event_type: EventType,
        description: impl Into<String>,
        severity: Severity,
    ) -> Self {
        Self {
            id: generate_event_id(),
            timestamp: Utc::now(),
            machine_id: machine_id.into(),
            event_type,
            description: description.into(),
            severity,
        }
    }
}
