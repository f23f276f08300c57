use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::error::{GroundtrackError, Result};

use super::command::{Command, CommandStatus, dispatch};
use super::mission::{Mission, MissionStatus, Telemetry};

/// Comprehensive status of a single mission: the full record plus derived
/// command counts and the most recent telemetry reading.
#[derive(Debug, Clone, Serialize)]
pub struct StatusReport {
    pub mission: Mission,
    pub active_commands: usize,
    pub completed_commands: usize,
    pub failed_commands: usize,
    pub latest_telemetry: Option<Telemetry>,
}

/// One line of the fleet listing.
#[derive(Debug, Clone, Serialize)]
pub struct MissionSummary {
    pub id: String,
    pub name: String,
    pub status: MissionStatus,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub commands_count: usize,
    pub telemetry_count: usize,
}

/// In-memory ledger of missions keyed by id.
///
/// Single-threaded and synchronous; every operation is an immediate
/// read/modify/write on the map. Missions are never deleted within a
/// session, so the insertion order kept for listings stays in sync with
/// the map.
#[derive(Debug, Default)]
pub struct MissionRegistry {
    missions: HashMap<String, Mission>,
    // Insertion order of mission ids, for list_all.
    order: Vec<String>,
    active_mission: Option<String>,
}

impl MissionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The mission most recently started and not yet completed or aborted.
    pub fn active_mission(&self) -> Option<&str> {
        self.active_mission.as_deref()
    }

    fn mission(&self, mission_id: &str) -> Result<&Mission> {
        self.missions
            .get(mission_id)
            .ok_or_else(|| GroundtrackError::MissionNotFound(mission_id.to_string()))
    }

    fn mission_mut(&mut self, mission_id: &str) -> Result<&mut Mission> {
        self.missions
            .get_mut(mission_id)
            .ok_or_else(|| GroundtrackError::MissionNotFound(mission_id.to_string()))
    }

    /// Register a new mission in the `Planned` state.
    pub fn create(
        &mut self,
        mission_id: impl Into<String>,
        name: impl Into<String>,
        objectives: Vec<String>,
    ) -> Result<&Mission> {
        let mission_id = mission_id.into();
        if self.missions.contains_key(&mission_id) {
            return Err(GroundtrackError::MissionExists(mission_id));
        }

        let mission = Mission::new(mission_id.clone(), name, objectives);
        self.order.push(mission_id.clone());
        self.missions.insert(mission_id.clone(), mission);
        Ok(&self.missions[&mission_id])
    }

    /// Start a `Planned` mission: stamp its start time, mark it `Active`,
    /// and point the registry's active-mission slot at it.
    ///
    /// Returns `Ok(false)` without touching anything if the mission exists
    /// but is not `Planned`.
    pub fn start(&mut self, mission_id: &str) -> Result<bool> {
        let mission = self.mission_mut(mission_id)?;
        if mission.status != MissionStatus::Planned {
            return Ok(false);
        }

        mission.status = MissionStatus::Active;
        mission.start_time = Some(Utc::now());
        self.active_mission = Some(mission_id.to_string());
        Ok(true)
    }

    /// Abort an `Active` mission. Returns `Ok(false)` if it is in any other
    /// state.
    pub fn abort(&mut self, mission_id: &str) -> Result<bool> {
        self.finish(mission_id, MissionStatus::Aborted)
    }

    /// Complete an `Active` mission successfully. Returns `Ok(false)` if it
    /// is in any other state.
    pub fn complete(&mut self, mission_id: &str) -> Result<bool> {
        self.finish(mission_id, MissionStatus::Completed)
    }

    fn finish(&mut self, mission_id: &str, terminal: MissionStatus) -> Result<bool> {
        let mission = self.mission_mut(mission_id)?;
        if mission.status != MissionStatus::Active {
            return Ok(false);
        }

        mission.status = terminal;
        mission.end_time = Some(Utc::now());

        // Only clear the pointer if it referenced this mission; another
        // mission may have been started since.
        if self.active_mission.as_deref() == Some(mission_id) {
            self.active_mission = None;
        }
        Ok(true)
    }

    /// Queue a command against an `Active` mission and return its id.
    pub fn send_command(
        &mut self,
        mission_id: &str,
        command_type: impl Into<String>,
        parameters: BTreeMap<String, Value>,
    ) -> Result<String> {
        let mission = self.mission_mut(mission_id)?;
        if mission.status != MissionStatus::Active {
            return Err(GroundtrackError::MissionInactive(mission_id.to_string()));
        }

        let command_id = mission.next_command_id();
        mission
            .commands
            .push(Command::new(command_id.clone(), command_type, parameters));
        Ok(command_id)
    }

    /// Execute a pending command, resolving it through the dispatch table.
    ///
    /// Returns `Ok(true)` iff the command resolved to `Completed`;
    /// `Ok(false)` if it was found but no longer `Pending`.
    pub fn execute_command(&mut self, mission_id: &str, command_id: &str) -> Result<bool> {
        let mission = self.mission_mut(mission_id)?;
        let Some(command) = mission.find_command_mut(command_id) else {
            return Err(GroundtrackError::CommandNotFound {
                mission: mission_id.to_string(),
                command: command_id.to_string(),
            });
        };

        if command.status != CommandStatus::Pending {
            return Ok(false);
        }

        command.status = CommandStatus::Executing;
        let (resolved, result) = dispatch(command);
        command.status = resolved;
        command.result = Some(result);
        Ok(resolved == CommandStatus::Completed)
    }

    /// Append a telemetry reading. Works in every mission state; telemetry
    /// keeps arriving whether or not the mission is active.
    pub fn add_telemetry(&mut self, mission_id: &str, reading: Telemetry) -> Result<()> {
        self.mission_mut(mission_id)?.telemetry.push(reading);
        Ok(())
    }

    pub fn status(&self, mission_id: &str) -> Result<StatusReport> {
        let mission = self.mission(mission_id)?;
        Ok(StatusReport {
            active_commands: mission.active_commands(),
            completed_commands: mission.completed_commands(),
            failed_commands: mission.failed_commands(),
            latest_telemetry: mission.latest_telemetry().cloned(),
            mission: mission.clone(),
        })
    }

    /// Summaries for every mission, in creation order.
    pub fn list_all(&self) -> Vec<MissionSummary> {
        self.order
            .iter()
            .map(|id| {
                let mission = &self.missions[id];
                MissionSummary {
                    id: mission.id.clone(),
                    name: mission.name.clone(),
                    status: mission.status,
                    start_time: mission.start_time,
                    end_time: mission.end_time,
                    commands_count: mission.commands.len(),
                    telemetry_count: mission.telemetry.len(),
                }
            })
            .collect()
    }
}
