//! Integration test: bundled data -> deploy -> fight until one side falls
//!
//! Drives the phase lifecycle with a scripted turn loop: every living
//! combatant uses the first ready skill that has a valid target.

use combat_core::config::{default_constants, default_roster, default_skills};
use combat_core::definitions::{Encounter, Roster, SkillDefinition};
use combat_core::prelude::*;
use combat_core::status::Cooldown;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashMap;

const MAX_TURNS: u32 = 200;

struct Battle {
    constants: CombatConstants,
    skills: HashMap<String, SkillDefinition>,
    field: Battlefield,
    loadouts: HashMap<CombatantId, Vec<String>>,
    cooldowns: HashMap<(CombatantId, String), Cooldown>,
    log: Vec<SkillResolution>,
}

impl Battle {
    fn new(roster: &Roster, party: &[&str], encounter: &Encounter) -> Self {
        let field = roster.deploy(party, encounter).unwrap();

        // Deployment assigns ids in order: party first, then the encounter
        let skill_lists = party
            .iter()
            .map(|id| roster.character(id).unwrap().skills.clone())
            .chain(
                encounter
                    .enemies
                    .iter()
                    .map(|id| roster.enemy(id).unwrap().skills.clone()),
            );
        let loadouts = field
            .combatants
            .iter()
            .map(|c| c.id)
            .zip(skill_lists)
            .collect();

        Battle {
            constants: default_constants(),
            skills: default_skills(),
            field,
            loadouts,
            cooldowns: HashMap::new(),
            log: Vec::new(),
        }
    }

    fn take_turn(&mut self, rng: &mut StdRng) {
        let order: Vec<CombatantId> = self.field.combatants.iter().map(|c| c.id).collect();

        for id in order {
            if self.field.outcome().is_some() {
                break;
            }
            if !self.field.get(id).map_or(false, |c| c.is_alive()) {
                continue;
            }

            for skill_id in &self.loadouts[&id] {
                let cooldown = self.cooldowns.entry((id, skill_id.clone())).or_default();
                if !cooldown.is_ready() {
                    continue;
                }
                let skill = &self.skills[skill_id];
                let resolution =
                    resolve_skill(&self.constants, &self.field, id, skill, None, rng).unwrap();
                if resolution.fizzled() {
                    continue;
                }

                cooldown.start(skill.cooldown(&self.constants));
                let (next, _) = apply_resolution(&self.field, &resolution);
                self.field = next;
                self.log.push(resolution);
                break;
            }
        }

        for cooldown in self.cooldowns.values_mut() {
            cooldown.tick();
        }
        self.field.tick_statuses();
    }

    fn run(&mut self, seed: u64) -> PhaseTracker {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut tracker = PhaseTracker::new();

        while !tracker.is_over() && tracker.turn < MAX_TURNS {
            if tracker.step(&self.field).unwrap() == CombatPhase::Execution {
                self.take_turn(&mut rng);
            }
        }
        tracker
    }
}

fn warren(roster: &Roster, index: usize) -> Encounter {
    roster.dungeon("goblin_warren").unwrap().encounters[index].clone()
}

#[test]
fn test_party_clears_first_encounter() {
    let roster = default_roster();
    let mut battle = Battle::new(&roster, &["brom", "sable", "wren", "ilse"], &warren(&roster, 0));

    let tracker = battle.run(7);

    assert_eq!(tracker.phase, CombatPhase::Victory);
    assert!(tracker.turn >= 1);
    assert!(battle.field.is_team_defeated(Team::Enemy));
    assert!(!battle.log.is_empty());

    // Every damage hit respects the floor
    for resolution in &battle.log {
        for hit in &resolution.hits {
            if hit.kind == combat_core::HitKind::Damage {
                assert!(hit.amount >= 1);
            }
        }
    }
}

#[test]
fn test_same_seed_same_battle() {
    let roster = default_roster();
    let party = ["brom", "sable", "wren", "ilse"];

    let mut first = Battle::new(&roster, &party, &warren(&roster, 1));
    let first_tracker = first.run(99);

    let mut second = Battle::new(&roster, &party, &warren(&roster, 1));
    let second_tracker = second.run(99);

    assert_eq!(first_tracker, second_tracker);
    assert_eq!(first.log, second.log);
    assert_eq!(first.field, second.field);
}

#[test]
fn test_area_skill_caps_at_five_targets() {
    let roster = default_roster();
    let skills = default_skills();
    let constants = default_constants();
    let encounter = warren(&roster, 2);
    assert_eq!(encounter.enemies.len(), 7);

    let field = roster.deploy(&["ilse"], &encounter).unwrap();
    let mut fireball = skills["fireball"].clone();
    fireball.can_crit = false;

    let first = resolve_skill(&constants, &field, CombatantId(1), &fireball, None, &mut StdRng::seed_from_u64(1)).unwrap();
    let second = resolve_skill(&constants, &field, CombatantId(1), &fireball, None, &mut StdRng::seed_from_u64(2)).unwrap();

    assert_eq!(first.hits.len(), 5);
    assert_eq!(first, second);

    // Front row first (brutes and goblins), then the first back-row slot
    let rows: Vec<RowPosition> = first
        .targets()
        .map(|id| field.get(id).unwrap().row)
        .collect();
    assert_eq!(
        rows,
        vec![
            RowPosition::Front,
            RowPosition::Front,
            RowPosition::Front,
            RowPosition::Front,
            RowPosition::Back
        ]
    );
}

#[test]
fn test_melee_cannot_reach_back_row() {
    let roster = default_roster();
    let skills = default_skills();
    let constants = default_constants();
    let mut field = roster.deploy(&["brom"], &warren(&roster, 0)).unwrap();

    // Knock out both front-row goblins, leaving the archer in the back
    for combatant in field.combatants.iter_mut() {
        if combatant.team == Team::Enemy && combatant.row == RowPosition::Front {
            combatant.current_health = 0;
        }
    }

    let cleave = &skills["cleave"];
    let targets = resolve_targets(&constants, &field, CombatantId(1), cleave.target_type, cleave.reach).unwrap();
    assert!(targets.is_empty());

    let basic = &skills["basic_attack"];
    let targets = resolve_targets(&constants, &field, CombatantId(1), basic.target_type, basic.reach).unwrap();
    assert_eq!(targets.len(), 1);
    assert_eq!(field.get(targets.targets[0]).unwrap().row, RowPosition::Back);
}
