mod command;
mod control;
mod mission;

pub use command::{Command, CommandStatus};
pub use control::{MissionRegistry, MissionSummary, StatusReport};
pub use mission::{Mission, MissionStatus, Telemetry};
