mod cli;
mod config;
mod demo;
mod error;
mod registry;
mod ui;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Command, ScenarioArg};
use config::GroundtrackConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = GroundtrackConfig::load()?;

    match cli.command {
        Command::Demo { scenario, all } => {
            let scenarios: Vec<ScenarioArg> = if all {
                ScenarioArg::ALL.to_vec()
            } else {
                let chosen = scenario
                    .or_else(|| ScenarioArg::from_name(&config.default_scenario))
                    .unwrap_or(ScenarioArg::Mars);
                vec![chosen]
            };

            for scenario in scenarios {
                demo::run(scenario, &config, cli.verbose)?;
            }
        }
        Command::Scenarios => {
            for scenario in ScenarioArg::ALL {
                println!("  {:<10} {}", scenario.name(), scenario.describe());
            }
        }
    }

    Ok(())
}
