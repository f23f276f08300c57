use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Tracks the execution status of a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommandStatus {
    Pending,
    Executing,
    Completed,
    Failed,
}

impl fmt::Display for CommandStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandStatus::Pending => write!(f, "pending"),
            CommandStatus::Executing => write!(f, "executing"),
            CommandStatus::Completed => write!(f, "completed"),
            CommandStatus::Failed => write!(f, "failed"),
        }
    }
}

/// A named directive issued to an active mission.
///
/// Created `Pending`; resolved exactly once to `Completed` or `Failed`
/// by [`dispatch`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Command {
    pub id: String,
    #[serde(rename = "type")]
    pub command_type: String,
    pub parameters: BTreeMap<String, Value>,
    pub status: CommandStatus,
    pub timestamp: DateTime<Utc>,
    pub result: Option<String>,
}

impl Command {
    pub fn new(
        id: impl Into<String>,
        command_type: impl Into<String>,
        parameters: BTreeMap<String, Value>,
    ) -> Self {
        Self {
            id: id.into(),
            command_type: command_type.into(),
            parameters,
            status: CommandStatus::Pending,
            timestamp: Utc::now(),
            result: None,
        }
    }

    /// Look up a string parameter, falling back to `"unknown"` the way the
    /// canned result templates expect.
    fn param_or_unknown(&self, key: &str) -> &str {
        self.parameters
            .get(key)
            .and_then(Value::as_str)
            .unwrap_or("unknown")
    }
}

type Handler = fn(&Command) -> String;

/// Dispatch table from command type to its canned result template.
const HANDLERS: &[(&str, Handler)] = &[
    ("ignition", ignite),
    ("adjust_course", adjust_course),
    ("collect_sample", collect_sample),
];

fn ignite(_cmd: &Command) -> String {
    "Engine ignited successfully".to_string()
}

fn adjust_course(cmd: &Command) -> String {
    format!("Course adjusted to {}", cmd.param_or_unknown("heading"))
}

fn collect_sample(cmd: &Command) -> String {
    format!("Sample collected at {}", cmd.param_or_unknown("location"))
}

/// Resolve a command synchronously: a known type produces its canned result
/// and `Completed`; an unknown type produces an error result and `Failed`.
/// Execution is a pure computation, no real effect happens anywhere.
pub fn dispatch(command: &Command) -> (CommandStatus, String) {
    match HANDLERS
        .iter()
        .find(|(t, _)| *t == command.command_type)
    {
        Some((_, handler)) => (CommandStatus::Completed, handler(command)),
        None => (
            CommandStatus::Failed,
            format!("Unknown command type: {}", command.command_type),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn params(pairs: &[(&str, &str)]) -> BTreeMap<String, Value> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), json!(v)))
            .collect()
    }

    #[test]
    fn command_creation_defaults() {
        let cmd = Command::new("cmd_0001", "ignition", BTreeMap::new());
        assert_eq!(cmd.status, CommandStatus::Pending);
        assert!(cmd.result.is_none());
        assert_eq!(cmd.command_type, "ignition");
    }

    #[test]
    fn dispatch_ignition() {
        let cmd = Command::new("cmd_0001", "ignition", BTreeMap::new());
        let (status, result) = dispatch(&cmd);
        assert_eq!(status, CommandStatus::Completed);
        assert!(result.contains("ignited"));
    }

    #[test]
    fn dispatch_adjust_course_reads_heading() {
        let cmd = Command::new(
            "cmd_0001",
            "adjust_course",
            params(&[("heading", "270 degrees")]),
        );
        let (status, result) = dispatch(&cmd);
        assert_eq!(status, CommandStatus::Completed);
        assert_eq!(result, "Course adjusted to 270 degrees");
    }

    #[test]
    fn dispatch_missing_parameter_falls_back_to_unknown() {
        let cmd = Command::new("cmd_0001", "collect_sample", BTreeMap::new());
        let (status, result) = dispatch(&cmd);
        assert_eq!(status, CommandStatus::Completed);
        assert_eq!(result, "Sample collected at unknown");
    }

    #[test]
    fn dispatch_unknown_type_fails_with_type_in_result() {
        let cmd = Command::new("cmd_0001", "self_destruct", BTreeMap::new());
        let (status, result) = dispatch(&cmd);
        assert_eq!(status, CommandStatus::Failed);
        assert_eq!(result, "Unknown command type: self_destruct");
    }

    #[test]
    fn command_serializes_type_field() {
        let cmd = Command::new("cmd_0001", "ignition", BTreeMap::new());
        let json = serde_json::to_value(&cmd).unwrap();
        assert_eq!(json["type"], "ignition");
        assert_eq!(json["status"], "pending");
        assert_eq!(json["result"], Value::Null);
    }

    #[test]
    fn non_string_parameter_values_read_as_unknown() {
        let mut parameters = BTreeMap::new();
        parameters.insert("heading".to_string(), json!(270));
        let cmd = Command::new("cmd_0001", "adjust_course", parameters);
        let (_, result) = dispatch(&cmd);
        assert_eq!(result, "Course adjusted to unknown");
    }
}
