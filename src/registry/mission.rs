use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::command::{Command, CommandStatus};

/// Tracks the lifecycle status of a mission.
///
/// Missions are created `Planned`, become `Active` when started, and end in
/// exactly one of the terminal states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissionStatus {
    Planned,
    Active,
    Completed,
    Aborted,
    Failed,
}

impl fmt::Display for MissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MissionStatus::Planned => write!(f, "planned"),
            MissionStatus::Active => write!(f, "active"),
            MissionStatus::Completed => write!(f, "completed"),
            MissionStatus::Aborted => write!(f, "aborted"),
            MissionStatus::Failed => write!(f, "failed"),
        }
    }
}

/// A single immutable sensor reading appended to a mission's history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Telemetry {
    pub timestamp: DateTime<Utc>,
    pub altitude: f64,
    pub velocity: f64,
    pub fuel_level: f64,
    pub system_health: String,
}

impl Telemetry {
    pub const NOMINAL: &'static str = "nominal";

    /// Create a reading stamped with the current time and nominal health.
    pub fn new(altitude: f64, velocity: f64, fuel_level: f64) -> Self {
        Self {
            timestamp: Utc::now(),
            altitude,
            velocity,
            fuel_level,
            system_health: Self::NOMINAL.to_string(),
        }
    }

    pub fn with_health(mut self, system_health: impl Into<String>) -> Self {
        self.system_health = system_health.into();
        self
    }
}

/// A tracked unit of work: lifecycle status, objectives, and the ordered
/// command and telemetry ledgers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Mission {
    pub id: String,
    pub name: String,
    pub status: MissionStatus,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub objectives: Vec<String>,
    pub telemetry: Vec<Telemetry>,
    pub commands: Vec<Command>,
}

impl Mission {
    pub fn new(id: impl Into<String>, name: impl Into<String>, objectives: Vec<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            status: MissionStatus::Planned,
            start_time: None,
            end_time: None,
            objectives,
            telemetry: Vec::new(),
            commands: Vec::new(),
        }
    }

    /// Allocate the next command id for this mission.
    ///
    /// Ids are zero-padded sequence numbers scoped to the mission
    /// (`cmd_0001`, `cmd_0002`, ...), so they stay unique and monotonic
    /// as long as commands are only ever appended.
    pub fn next_command_id(&self) -> String {
        format!("cmd_{:04}", self.commands.len() + 1)
    }

    pub fn find_command(&self, command_id: &str) -> Option<&Command> {
        self.commands.iter().find(|c| c.id == command_id)
    }

    pub fn find_command_mut(&mut self, command_id: &str) -> Option<&mut Command> {
        self.commands.iter_mut().find(|c| c.id == command_id)
    }

    /// Commands still in flight (Pending or Executing).
    pub fn active_commands(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c.status, CommandStatus::Pending | CommandStatus::Executing))
            .count()
    }

    pub fn completed_commands(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| c.status == CommandStatus::Completed)
            .count()
    }

    pub fn failed_commands(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| c.status == CommandStatus::Failed)
            .count()
    }

    pub fn latest_telemetry(&self) -> Option<&Telemetry> {
        self.telemetry.last()
    }
}
