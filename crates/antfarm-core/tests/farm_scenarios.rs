//! End-to-end scenarios for the farm tick engine.
//!
//! Each test drives a farm only through its public operations
//! (`spawn_colony`, `tick`, `summary`) and checks the rendered reports.

#![allow(clippy::unwrap_used)]

use antfarm_agents::Ant;
use antfarm_core::{AntFarm, FarmError, Meadow, SimulationConfig};
use antfarm_types::{ColonyId, Species};

#[test]
fn warrior_rests_on_first_tick() {
    let mut farm = AntFarm::new();
    let id = farm.spawn_colony(Species::Warrior, 1, 1).unwrap();
    assert_eq!(id, ColonyId(1));

    farm.tick(1);

    assert_eq!(
        farm.summary(id),
        "Species: Warrior\nHealth: 115\nActive Ticks: 0\nStatus: Alive\n"
    );
}

#[test]
fn summary_on_empty_farm() {
    let farm = Meadow::default().create_farm();
    assert_eq!(farm.summary(ColonyId(999)), "Colony not found.");
}

#[test]
fn killer_spawn_is_rejected_without_preset() {
    let mut farm = AntFarm::new();
    assert_eq!(
        farm.spawn_colony(Species::Killer, 1, 1),
        Err(FarmError::UnsupportedSpecies {
            species: Species::Killer
        })
    );
    assert_eq!(farm.summary(ColonyId(1)), "Colony not found.");
    assert_eq!(farm.spawn_colony(Species::Drone, 1, 1).unwrap(), ColonyId(1));
}

#[test]
fn killer_spawn_succeeds_with_configured_preset() {
    let config = SimulationConfig::parse(
        "presets:\n  Killer: { health: 50, attack: 30, defense: 0 }\n",
    )
    .unwrap();
    let mut farm = Meadow::new(config).create_farm();
    let id = farm.spawn_colony(Species::Killer, 0, 0).unwrap();
    let mut last = String::new();
    farm.tick_with(1, |line| line.clone_into(&mut last));
    assert_eq!(last, "Killer is idle. Health: 45");
    assert!(farm.summary(id).starts_with("Species: Killer\nHealth: 45\n"));
}

#[test]
fn colony_ids_are_never_reused_after_extinction() {
    let mut farm = AntFarm::new();
    let first = farm.spawn_colony(Species::Drone, 0, 0).unwrap();

    // 80 health at 5 per tick: dead and pruned on the 16th tick.
    let report = farm.tick(16);
    assert_eq!(report.pruned, 1);
    assert!(farm.room(first).unwrap().is_empty());
    assert_eq!(farm.summary(first), "");

    let second = farm.spawn_colony(Species::Drone, 0, 0).unwrap();
    assert!(second > first);
    assert_eq!(second, ColonyId(2));
}

#[test]
fn ids_strictly_increase() {
    let mut farm = AntFarm::new();
    let ids: Vec<ColonyId> = [Species::Queen, Species::Drone, Species::Warrior, Species::Queen]
        .into_iter()
        .map(|species| farm.spawn_colony(species, 0, 0).unwrap())
        .collect();
    assert_eq!(ids, vec![ColonyId(1), ColonyId(2), ColonyId(3), ColonyId(4)]);
}

#[test]
fn rooms_tick_in_creation_order() {
    let mut farm = AntFarm::new();
    farm.spawn_colony(Species::Queen, 0, 0).unwrap();
    farm.spawn_colony(Species::Drone, 0, 0).unwrap();
    let mut lines = Vec::new();
    farm.tick_with(1, |line| lines.push(line.to_owned()));
    assert_eq!(
        lines,
        vec![
            "Ant is resting. Health after resting: 195",
            "Queen is spawning an egg. Health: 195",
            "Ant is resting. Health after resting: 75",
            "Drone is looking for food. Health: 75",
        ]
    );
}

#[test]
fn alive_matches_health_throughout_a_long_run() {
    let mut farm = AntFarm::new();
    for species in [Species::Drone, Species::Warrior, Species::Queen] {
        farm.spawn_colony(species, 0, 0).unwrap();
    }
    for _ in 0..50 {
        farm.tick(1);
        for room in farm.rooms() {
            assert!(room.ants().iter().all(|ant| ant.is_alive() == (ant.health() > 0)));
            // Pruning leaves only living ants behind.
            assert!(room.ants().iter().all(Ant::is_alive));
        }
    }
    // Queen: 200 health lasts 40 ticks.
    assert_eq!(farm.population(), 0);
}

#[test]
fn multi_cycle_tick_reports_totals() {
    let mut farm = AntFarm::new();
    farm.spawn_colony(Species::Warrior, 0, 0).unwrap();
    let report = farm.tick(3);
    assert_eq!(report.cycles, 3);
    assert_eq!(report.rested, 3);
    assert_eq!(report.acted, 3);
    assert_eq!(
        farm.summary(ColonyId(1)),
        "Species: Warrior\nHealth: 105\nActive Ticks: 0\nStatus: Alive\n"
    );
}
