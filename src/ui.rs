//! Terminal output — spinners and colored mission reporting.
//!
//! Uses `indicatif` for the command-execution spinner and `console` for
//! color styling. [`ControlRoom`] renders command results, telemetry lines,
//! fleet listings, and status reports.

use std::time::Duration;

use console::Style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::registry::{CommandStatus, MissionStatus, MissionSummary, StatusReport, Telemetry};

/// Renders registry activity on the terminal.
///
/// Command execution is shown with a short spinner and a green checkmark
/// or red cross; telemetry below the fuel threshold is flagged in yellow.
pub struct ControlRoom {
    green: Style,
    red: Style,
    yellow: Style,
    cyan: Style,
    /// Spinner duration per command. Presentation only.
    command_delay: Duration,
    fuel_warning_threshold: f64,
}

impl ControlRoom {
    pub fn new(command_delay_ms: u64, fuel_warning_threshold: f64) -> Self {
        Self {
            green: Style::new().green().bold(),
            red: Style::new().red().bold(),
            yellow: Style::new().yellow(),
            cyan: Style::new().cyan().bold(),
            command_delay: Duration::from_millis(command_delay_ms),
            fuel_warning_threshold,
        }
    }

    pub fn banner(&self, title: &str) {
        println!();
        println!("{}", self.cyan.apply_to(format!("─── {title} ───")));
    }

    /// Spin briefly while a command "executes", then print its outcome.
    pub fn command_executed(&self, command_type: &str, status: CommandStatus, result: &str) {
        if !self.command_delay.is_zero() {
            let pb = ProgressBar::new_spinner();
            pb.set_style(
                ProgressStyle::default_spinner()
                    .template("{spinner:.cyan} {msg}")
                    .expect("invalid template"),
            );
            pb.set_message(format!("Executing {command_type}"));
            pb.enable_steady_tick(Duration::from_millis(50));
            std::thread::sleep(self.command_delay);
            pb.finish_and_clear();
        }

        match status {
            CommandStatus::Completed => {
                println!("  {} {command_type}: {result}", self.green.apply_to("✓"));
            }
            _ => {
                println!("  {} {command_type}: {result}", self.red.apply_to("✗"));
            }
        }
    }

    /// Print one telemetry reading, flagging low fuel or off-nominal health.
    pub fn telemetry(&self, reading: &Telemetry) {
        let line = format!(
            "alt {:.1} m, vel {:.1} m/s, fuel {:.1}%, health {}",
            reading.altitude, reading.velocity, reading.fuel_level, reading.system_health
        );
        if reading.fuel_level < self.fuel_warning_threshold || reading.system_health == "critical" {
            println!("  {} {line}", self.yellow.apply_to("⚠"));
        } else {
            println!("  · {line}");
        }
    }

    pub fn info(&self, message: &str) {
        println!("  {message}");
    }

    pub fn success(&self, message: &str) {
        println!("  {} {message}", self.green.apply_to("✓"));
    }

    pub fn warning(&self, message: &str) {
        println!("  {} {message}", self.yellow.apply_to("⚠"));
    }

    pub fn failure(&self, message: &str) {
        println!("  {} {message}", self.red.apply_to("✗"));
    }

    /// One styled line per mission summary, in registry order.
    pub fn fleet(&self, summaries: &[MissionSummary]) {
        for summary in summaries {
            let status = summary.status.to_string();
            let styled = match status.as_str() {
                "completed" => self.green.apply_to(status),
                "aborted" | "failed" => self.red.apply_to(status),
                "active" => self.cyan.apply_to(status),
                _ => self.yellow.apply_to(status),
            };
            println!(
                "  {:<12} {:<32} {styled}  ({} commands, {} readings)",
                summary.id, summary.name, summary.commands_count, summary.telemetry_count
            );
        }
    }

    /// Print the condensed status summary, and the full report as pretty
    /// JSON when verbose.
    pub fn status_report(&self, report: &StatusReport, verbose: bool) {
        let status_style = match report.mission.status {
            MissionStatus::Completed => &self.green,
            MissionStatus::Aborted | MissionStatus::Failed => &self.red,
            _ => &self.yellow,
        };
        println!();
        println!(
            "{}",
            status_style.apply_to(format!("─── {} ({}) ───", report.mission.name, report.mission.status))
        );
        println!("  commands: {} active, {} completed, {} failed",
            report.active_commands, report.completed_commands, report.failed_commands
        );
        match &report.latest_telemetry {
            Some(reading) => self.telemetry(reading),
            None => println!("  · no telemetry recorded"),
        }

        if verbose {
            println!(
                "{}",
                serde_json::to_string_pretty(report).unwrap_or_default()
            );
        }
    }
}
