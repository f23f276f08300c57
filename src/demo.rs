//! Scripted demo scenarios run against a fresh in-memory registry.
//!
//! Each scenario drives a [`MissionRegistry`] through a full story —
//! creation, lifecycle transitions, command dispatch, telemetry — and
//! narrates it through [`ControlRoom`].

use std::collections::BTreeMap;

use anyhow::Result;
use serde_json::{Value, json};

use crate::cli::ScenarioArg;
use crate::config::GroundtrackConfig;
use crate::registry::{MissionRegistry, Telemetry};
use crate::ui::ControlRoom;

pub fn run(scenario: ScenarioArg, config: &GroundtrackConfig, verbose: bool) -> Result<()> {
    let room = ControlRoom::new(config.command_delay_ms, config.fuel_warning_threshold);
    match scenario {
        ScenarioArg::Mars => mars(&room, verbose),
        ScenarioArg::Fleet => fleet(&room, verbose),
        ScenarioArg::Abort => abort(&room, verbose),
        ScenarioArg::Commands => commands(&room, verbose),
    }
}

fn params(pairs: &[(&str, &str)]) -> BTreeMap<String, Value> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), json!(v)))
        .collect()
}

/// Send a command, execute it immediately, and narrate the result.
fn fire(
    registry: &mut MissionRegistry,
    room: &ControlRoom,
    mission_id: &str,
    command_type: &str,
    parameters: BTreeMap<String, Value>,
) -> Result<()> {
    let command_id = registry.send_command(mission_id, command_type, parameters)?;
    registry.execute_command(mission_id, &command_id)?;

    let report = registry.status(mission_id)?;
    let command = report
        .mission
        .find_command(&command_id)
        .expect("command was just appended");
    room.command_executed(
        command_type,
        command.status,
        command.result.as_deref().unwrap_or_default(),
    );
    Ok(())
}

fn log_telemetry(
    registry: &mut MissionRegistry,
    room: &ControlRoom,
    mission_id: &str,
    reading: Telemetry,
) -> Result<()> {
    room.telemetry(&reading);
    registry.add_telemetry(mission_id, reading)?;
    Ok(())
}

/// Complete Mars mission lifecycle: launch, cruise, surface operations,
/// return, completion.
fn mars(room: &ControlRoom, verbose: bool) -> Result<()> {
    room.banner("MARS SAMPLE COLLECTION MISSION");
    let mut registry = MissionRegistry::new();

    let id = "MARS_2024_001";
    registry.create(
        id,
        "Mars Sample Collection Mission",
        vec![
            "Launch from Earth".into(),
            "Navigate to Mars".into(),
            "Land on Mars surface".into(),
            "Collect geological samples".into(),
            "Return to Earth".into(),
        ],
    )?;
    registry.start(id)?;
    room.info("Mission started");

    fire(&mut registry, room, id, "ignition", BTreeMap::new())?;
    log_telemetry(&mut registry, room, id, Telemetry::new(0.0, 0.0, 100.0).with_health("pre_launch"))?;
    log_telemetry(&mut registry, room, id, Telemetry::new(1000.0, 100.0, 95.0).with_health("ascending"))?;
    log_telemetry(&mut registry, room, id, Telemetry::new(50000.0, 1500.0, 85.0).with_health("in_space"))?;

    fire(
        &mut registry,
        room,
        id,
        "adjust_course",
        params(&[("heading", "Mars trajectory")]),
    )?;
    log_telemetry(&mut registry, room, id, Telemetry::new(100000.0, 25000.0, 75.0).with_health("cruise"))?;

    fire(
        &mut registry,
        room,
        id,
        "collect_sample",
        params(&[("location", "Olympus Mons")]),
    )?;
    fire(
        &mut registry,
        room,
        id,
        "collect_sample",
        params(&[("location", "Valles Marineris")]),
    )?;
    log_telemetry(&mut registry, room, id, Telemetry::new(0.0, 0.0, 60.0).with_health("landed_mars"))?;

    fire(
        &mut registry,
        room,
        id,
        "adjust_course",
        params(&[("heading", "Earth trajectory")]),
    )?;
    log_telemetry(&mut registry, room, id, Telemetry::new(50000.0, 15000.0, 30.0).with_health("approaching_earth"))?;

    registry.complete(id)?;
    room.success("Mission completed");
    room.status_report(&registry.status(id)?, verbose);
    Ok(())
}

/// Several missions managed side by side, ending with the fleet listing.
fn fleet(room: &ControlRoom, verbose: bool) -> Result<()> {
    room.banner("MULTIPLE MISSION MANAGEMENT");
    let mut registry = MissionRegistry::new();

    registry.create(
        "LUNAR_001",
        "Lunar Base Setup",
        vec!["Land on Moon".into(), "Deploy equipment".into()],
    )?;
    registry.create(
        "SAT_001",
        "Communications Satellite",
        vec!["Deploy satellite".into(), "Test communications".into()],
    )?;
    registry.create(
        "ISS_001",
        "ISS Resupply",
        vec!["Dock with ISS".into(), "Transfer supplies".into()],
    )?;

    registry.start("LUNAR_001")?;
    fire(&mut registry, room, "LUNAR_001", "ignition", BTreeMap::new())?;
    log_telemetry(
        &mut registry,
        room,
        "LUNAR_001",
        Telemetry::new(25000.0, 800.0, 90.0).with_health("en_route_moon"),
    )?;

    registry.start("SAT_001")?;
    fire(&mut registry, room, "SAT_001", "ignition", BTreeMap::new())?;
    registry.complete("SAT_001")?;
    room.success("Satellite mission completed");

    fire(
        &mut registry,
        room,
        "LUNAR_001",
        "collect_sample",
        params(&[("location", "Sea of Tranquility")]),
    )?;

    registry.start("ISS_001")?;
    if let Some(active) = registry.active_mission() {
        room.info(&format!("Active mission: {active}"));
    }

    room.banner("FLEET STATUS");
    room.fleet(&registry.list_all());

    registry.complete("LUNAR_001")?;
    registry.complete("ISS_001")?;
    room.success("All missions completed");

    if verbose {
        room.status_report(&registry.status("LUNAR_001")?, verbose);
    }
    Ok(())
}

/// Mission abort after telemetry degrades from nominal to critical.
fn abort(room: &ControlRoom, verbose: bool) -> Result<()> {
    room.banner("MISSION ABORT SCENARIO");
    let mut registry = MissionRegistry::new();

    let id = "EMERGENCY_001";
    registry.create(
        id,
        "Deep Space Probe",
        vec!["Launch".into(), "Navigate to asteroid".into(), "Study asteroid".into()],
    )?;
    registry.start(id)?;

    fire(&mut registry, room, id, "ignition", BTreeMap::new())?;
    log_telemetry(&mut registry, room, id, Telemetry::new(45000.0, 2000.0, 88.0))?;
    log_telemetry(&mut registry, room, id, Telemetry::new(80000.0, 3500.0, 82.0))?;

    log_telemetry(&mut registry, room, id, Telemetry::new(85000.0, 3200.0, 78.0).with_health("warning"))?;
    room.warning("System warning detected");
    log_telemetry(&mut registry, room, id, Telemetry::new(82000.0, 2800.0, 75.0).with_health("critical"))?;
    room.failure("Critical system failure detected");

    registry.abort(id)?;
    room.failure("Mission aborted");
    room.status_report(&registry.status(id)?, verbose);
    Ok(())
}

/// Mixed valid and unknown command types, showing per-command results.
fn commands(room: &ControlRoom, verbose: bool) -> Result<()> {
    room.banner("COMMAND FAILURE HANDLING");
    let mut registry = MissionRegistry::new();

    let id = "TEST_001";
    registry.create(id, "Command Testing Mission", vec!["Test various commands".into()])?;
    registry.start(id)?;

    let batch: &[(&str, &[(&str, &str)])] = &[
        ("ignition", &[]),
        ("adjust_course", &[("heading", "90 degrees")]),
        ("unknown_command", &[]),
        ("collect_sample", &[("location", "Test Site")]),
        ("invalid_command_type", &[("param", "value")]),
    ];
    for (command_type, pairs) in batch {
        fire(&mut registry, room, id, command_type, params(pairs))?;
    }

    log_telemetry(
        &mut registry,
        room,
        id,
        Telemetry::new(15000.0, 500.0, 70.0).with_health("testing_complete"),
    )?;
    registry.complete(id)?;

    let report = registry.status(id)?;
    room.info(&format!(
        "Successful commands: {}, failed: {}",
        report.completed_commands, report.failed_commands
    ));
    room.status_report(&report, verbose);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiet_config() -> GroundtrackConfig {
        GroundtrackConfig {
            command_delay_ms: 0,
            ..Default::default()
        }
    }

    #[test]
    fn every_scenario_runs_clean() {
        let config = quiet_config();
        for scenario in ScenarioArg::ALL {
            run(*scenario, &config, false).unwrap();
        }
    }

    #[test]
    fn mars_scenario_ends_completed() -> Result<()> {
        // Re-drive the Mars story directly to assert on the final ledger.
        let room = ControlRoom::new(0, 25.0);
        let mut registry = MissionRegistry::new();
        registry.create("M1", "Mars", vec![])?;
        registry.start("M1")?;
        fire(&mut registry, &room, "M1", "ignition", BTreeMap::new())?;
        log_telemetry(&mut registry, &room, "M1", Telemetry::new(100.0, 10.0, 90.0))?;
        registry.complete("M1")?;

        let report = registry.status("M1")?;
        assert_eq!(report.completed_commands, 1);
        assert_eq!(report.failed_commands, 0);
        assert_eq!(report.latest_telemetry.unwrap().altitude, 100.0);
        Ok(())
    }
}
