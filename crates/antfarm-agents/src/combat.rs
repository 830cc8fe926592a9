//! Two-sided battle resolution between ants.
//!
//! ## Combat flow
//!
//! 1. Refuse the fight if either participant is already dead
//! 2. Compute damage each way: `max(0, attack - defense)`
//! 3. Apply both hits at once (no initiative)
//! 4. Report whether each side fell

use tracing::debug;

use crate::ant::Ant;

/// The result of one exchange of blows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BattleOutcome {
    /// Damage the initiating ant dealt to its opponent.
    pub damage_to_opponent: i32,
    /// Damage the initiating ant took in return.
    pub damage_to_self: i32,
    /// Whether the opponent's health is now at or below zero.
    pub opponent_fell: bool,
    /// Whether the initiating ant's health is now at or below zero.
    pub self_fell: bool,
}

/// Damage a hit with `attack` does against `defense`. Never negative.
pub const fn damage(attack: i32, defense: i32) -> i32 {
    let raw = attack.saturating_sub(defense);
    if raw > 0 { raw } else { 0 }
}

/// Resolve a battle between `ant` and `opponent`.
///
/// Returns `None`, and mutates nothing, if either ant is dead.
pub fn resolve_battle(ant: &mut Ant, opponent: &mut Ant) -> Option<BattleOutcome> {
    if !ant.is_alive() || !opponent.is_alive() {
        return None;
    }

    let damage_to_opponent = damage(ant.attack(), opponent.defense());
    let damage_to_self = damage(opponent.attack(), ant.defense());

    opponent.take_damage(damage_to_opponent);
    ant.take_damage(damage_to_self);

    let outcome = BattleOutcome {
        damage_to_opponent,
        damage_to_self,
        opponent_fell: !opponent.is_alive(),
        self_fell: !ant.is_alive(),
    };
    debug!(
        ant_id = %ant.id(),
        opponent_id = %opponent.id(),
        damage_to_opponent,
        damage_to_self,
        opponent_fell = outcome.opponent_fell,
        "Battle resolved"
    );
    Some(outcome)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use antfarm_types::{AntStats, Species};

    use super::*;

    fn ant(species: Species, health: i32, attack: i32, defense: i32) -> Ant {
        Ant::new(species, AntStats::new(health, attack, defense))
    }

    #[test]
    fn damage_is_never_negative() {
        assert_eq!(damage(15, 8), 7);
        assert_eq!(damage(5, 15), 0);
        assert_eq!(damage(3, 3), 0);
    }

    #[test]
    fn both_sides_take_damage() {
        let mut warrior = ant(Species::Warrior, 120, 15, 8);
        let mut drone = ant(Species::Drone, 80, 5, 3);
        let outcome = resolve_battle(&mut warrior, &mut drone).unwrap();
        assert_eq!(outcome.damage_to_opponent, 12);
        assert_eq!(outcome.damage_to_self, 0);
        assert_eq!(drone.health(), 68);
        assert_eq!(warrior.health(), 120);
        assert!(!outcome.opponent_fell);
    }

    #[test]
    fn battle_is_symmetric_in_mutation() {
        let mut a = ant(Species::Queen, 200, 20, 15);
        let mut b = ant(Species::Warrior, 120, 30, 8);
        assert!(!a.battle(&mut b));
        assert_eq!(b.health(), 108);
        assert_eq!(a.health(), 185);
    }

    #[test]
    fn returns_true_when_opponent_falls() {
        let mut queen = ant(Species::Queen, 200, 20, 15);
        let mut drone = ant(Species::Drone, 17, 5, 3);
        assert!(queen.battle(&mut drone));
        assert_eq!(drone.health(), 0);
        assert!(!drone.is_alive());
    }

    #[test]
    fn overkill_leaves_health_negative() {
        let mut queen = ant(Species::Queen, 200, 20, 15);
        let mut drone = ant(Species::Drone, 5, 5, 3);
        assert!(queen.battle(&mut drone));
        assert_eq!(drone.health(), -12);
    }

    #[test]
    fn dead_opponent_is_refused() {
        let mut warrior = ant(Species::Warrior, 120, 15, 8);
        let mut corpse = ant(Species::Drone, 0, 5, 3);
        assert!(!warrior.battle(&mut corpse));
        assert_eq!(warrior.health(), 120);
        assert_eq!(corpse.health(), 0);
    }

    #[test]
    fn dead_attacker_is_refused() {
        let mut corpse = ant(Species::Warrior, -3, 15, 8);
        let mut drone = ant(Species::Drone, 80, 5, 3);
        assert!(resolve_battle(&mut corpse, &mut drone).is_none());
        assert_eq!(drone.health(), 80);
        assert_eq!(corpse.health(), -3);
    }

    #[test]
    fn mutual_knockout_reports_both() {
        let mut a = ant(Species::Warrior, 5, 20, 0);
        let mut b = ant(Species::Warrior, 5, 20, 0);
        let outcome = resolve_battle(&mut a, &mut b).unwrap();
        assert!(outcome.opponent_fell);
        assert!(outcome.self_fell);
    }
}
