use thiserror::Error;

pub type Result<T> = std::result::Result<T, GroundtrackError>;

#[derive(Debug, Error)]
pub enum GroundtrackError {
    #[error("Mission already exists: {0}")]
    MissionExists(String),

    #[error("Mission not found: {0}")]
    MissionNotFound(String),

    #[error("Command {command} not found on mission {mission}")]
    CommandNotFound { mission: String, command: String },

    #[error("Cannot send commands to inactive mission {0}")]
    MissionInactive(String),
}
