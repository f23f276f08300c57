//! clap-based command line interface.
//!
//! Defines the [`Cli`] struct with subcommands [`Command`] (demo, scenarios)
//! and the global `--verbose` flag.

use clap::{Parser, Subcommand, ValueEnum};

/// groundtrack — in-memory mission tracking and command-dispatch ledger.
#[derive(Debug, Parser)]
#[command(name = "groundtrack", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Print full status reports as pretty JSON after each scenario.
    #[arg(long, short, global = true, default_value_t = false)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run a scripted demo scenario against a fresh registry.
    Demo {
        /// Scenario to run; defaults to the configured scenario, `--all`
        /// runs every scenario in order.
        scenario: Option<ScenarioArg>,

        /// Run all scenarios in sequence.
        #[arg(long, conflicts_with = "scenario")]
        all: bool,
    },

    /// List the available demo scenarios.
    Scenarios,
}

/// The built-in demo scenarios.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ScenarioArg {
    /// Full Mars sample-collection mission lifecycle.
    Mars,
    /// Several missions managed side by side.
    Fleet,
    /// Mission abort after degrading telemetry.
    Abort,
    /// Mixed valid and unknown command types.
    Commands,
}

impl ScenarioArg {
    pub const ALL: &'static [ScenarioArg] = &[
        ScenarioArg::Mars,
        ScenarioArg::Fleet,
        ScenarioArg::Abort,
        ScenarioArg::Commands,
    ];

    /// Resolve a configured scenario name, used when the CLI gives none.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "mars" => Some(ScenarioArg::Mars),
            "fleet" => Some(ScenarioArg::Fleet),
            "abort" => Some(ScenarioArg::Abort),
            "commands" => Some(ScenarioArg::Commands),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ScenarioArg::Mars => "mars",
            ScenarioArg::Fleet => "fleet",
            ScenarioArg::Abort => "abort",
            ScenarioArg::Commands => "commands",
        }
    }

    pub fn describe(self) -> &'static str {
        match self {
            ScenarioArg::Mars => "Full Mars sample-collection mission lifecycle",
            ScenarioArg::Fleet => "Several missions managed side by side",
            ScenarioArg::Abort => "Mission abort after degrading telemetry",
            ScenarioArg::Commands => "Mixed valid and unknown command types",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_parses_demo_subcommand() {
        let cli = Cli::parse_from(["groundtrack", "demo", "mars"]);
        match cli.command {
            Command::Demo { scenario, all } => {
                assert_eq!(scenario, Some(ScenarioArg::Mars));
                assert!(!all);
            }
            _ => panic!("expected Demo command"),
        }
    }

    #[test]
    fn cli_parses_demo_all() {
        let cli = Cli::parse_from(["groundtrack", "demo", "--all"]);
        match cli.command {
            Command::Demo { scenario, all } => {
                assert!(scenario.is_none());
                assert!(all);
            }
            _ => panic!("expected Demo command"),
        }
    }

    #[test]
    fn cli_parses_global_verbose() {
        let cli = Cli::parse_from(["groundtrack", "--verbose", "scenarios"]);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Command::Scenarios));
    }

    #[test]
    fn scenario_names_roundtrip() {
        for scenario in ScenarioArg::ALL {
            assert_eq!(ScenarioArg::from_name(scenario.name()), Some(*scenario));
        }
        assert_eq!(ScenarioArg::from_name("orbit"), None);
    }

    #[test]
    fn cli_verify() {
        Cli::command().debug_assert();
    }
}
