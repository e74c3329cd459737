//! Skill resolution - targets, amounts and crits for one skill use

use super::result::{HealthChange, HitKind, HitOutcome, SkillResolution};
use crate::config::CombatConstants;
use crate::damage::{compute_damage, compute_healing, roll_with_constants};
use crate::definitions::SkillDefinition;
use crate::error::{check_multiplier, CombatError, CombatResult};
use crate::targeting::{resolve_targets, Battlefield, CombatantId};
use crate::types::SkillType;
use rand::Rng;

/// Resolve a skill cast by `caster_id` (pure API)
///
/// Works out who the skill reaches, then for each affected target:
/// 1. Damage skills: caster's scaling stat vs the target's defense
/// 2. Heal skills: caster's scaling stat, no mitigation
/// 3. Damage and heals that can crit draw exactly one crit roll, in target order
/// 4. The skill's status (if any) is attached with its resolved duration
///
/// `preferred` picks the target of single-target skills when eligible.
/// Nothing on the battlefield changes; see [`apply_resolution`].
pub fn resolve_skill(
    constants: &CombatConstants,
    battlefield: &Battlefield,
    caster_id: CombatantId,
    skill: &SkillDefinition,
    preferred: Option<CombatantId>,
    rng: &mut impl Rng,
) -> CombatResult<SkillResolution> {
    check_multiplier("skill.multiplier", skill.multiplier)?;

    let caster = battlefield.caster(caster_id)?;
    let targets = resolve_targets(constants, battlefield, caster_id, skill.target_type, skill.reach)?;
    let mut resolution = SkillResolution::new(caster_id, skill.id.as_str());

    let chosen = targets.choose(preferred);
    if chosen.is_empty() {
        tracing::debug!(caster = %caster_id, skill = %skill.id, "skill fizzled, no valid target");
        return Ok(resolution);
    }

    let scaling_stat = skill.scaling_stat.unwrap_or(caster.primary_stat);
    let stat = caster.stat(scaling_stat);

    for target_id in chosen {
        let target = battlefield
            .get(target_id)
            .ok_or(CombatError::UnknownCombatant(target_id))?;

        let (kind, base_amount) = match skill.skill_type {
            SkillType::Damage => (
                HitKind::Damage,
                compute_damage(constants, skill.damage_type, stat, target.defense(), skill.multiplier)?,
            ),
            SkillType::Heal => (HitKind::Heal, compute_healing(stat, skill.multiplier)?),
            SkillType::Buff | SkillType::Debuff => (HitKind::StatusOnly, 0),
        };

        let (amount, is_critical) = if kind != HitKind::StatusOnly && skill.can_crit {
            let roll = roll_with_constants(constants, base_amount, rng)?;
            (roll.amount, roll.is_critical)
        } else {
            (base_amount, false)
        };

        tracing::trace!(
            target = %target_id,
            ?kind,
            base_amount,
            amount,
            is_critical,
            "skill hit"
        );

        resolution.hits.push(HitOutcome {
            target: target_id,
            kind,
            base_amount,
            amount,
            is_critical,
            status: skill
                .status
                .as_ref()
                .map(|status| status.activate(constants, caster_id)),
        });
    }

    tracing::debug!(
        caster = %caster_id,
        skill = %skill.id,
        targets = resolution.hits.len(),
        damage = resolution.total_damage(),
        healing = resolution.total_healing(),
        "resolved skill"
    );

    Ok(resolution)
}

/// Apply a resolution to a battlefield (immutable API)
///
/// Returns the new battlefield and the health change of every hit target.
/// Damage saturates at zero health, healing caps at max health and never
/// revives. Statuses only stick to combatants still standing after the hit.
pub fn apply_resolution(
    battlefield: &Battlefield,
    resolution: &SkillResolution,
) -> (Battlefield, Vec<HealthChange>) {
    let mut next = battlefield.clone();
    let mut changes = Vec::with_capacity(resolution.hits.len());

    for hit in &resolution.hits {
        let Some(target) = next.get_mut(hit.target) else {
            continue;
        };

        let before = target.current_health;
        match hit.kind {
            HitKind::Damage => {
                target.take_damage(hit.amount);
            }
            HitKind::Heal => {
                target.heal(hit.amount);
            }
            HitKind::StatusOnly => {}
        }
        if let Some(status) = &hit.status {
            target.apply_status(status.clone());
        }

        changes.push(HealthChange {
            target: hit.target,
            before,
            after: target.current_health,
        });
    }

    (next, changes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::StatusApplication;
    use crate::targeting::{Combatant, StatLine};
    use crate::types::{DamageType, PrimaryStat, RowPosition, SkillReach, SkillTargetType, Team};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn make_test_rng() -> StdRng {
        StdRng::seed_from_u64(12345)
    }

    /// Crits disabled so amounts are exact
    fn no_crit() -> CombatConstants {
        let mut constants = CombatConstants::default();
        constants.crit.base_chance = 0.0;
        constants
    }

    fn battle() -> Battlefield {
        Battlefield::with_combatants(vec![
            Combatant::new(CombatantId(1), "Brom", Team::Party, RowPosition::Front, 0, StatLine::new(40, 10, 5, 20), 100),
            Combatant::new(CombatantId(2), "Ilse", Team::Party, RowPosition::Back, 0, StatLine::new(5, 8, 30, 10), 60)
                .with_primary_stat(PrimaryStat::Intelligence)
                .with_health(20),
            Combatant::new(CombatantId(10), "Goblin", Team::Enemy, RowPosition::Front, 0, StatLine::new(10, 10, 2, 50), 40),
            Combatant::new(CombatantId(11), "Archer", Team::Enemy, RowPosition::Back, 0, StatLine::new(5, 15, 2, 100), 30),
        ])
    }

    fn skill(id: &str) -> SkillDefinition {
        SkillDefinition {
            id: id.to_string(),
            name: id.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_basic_attack_hits_front_row() {
        let field = battle();
        let resolution = resolve_skill(
            &no_crit(),
            &field,
            CombatantId(1),
            &SkillDefinition::basic_attack(),
            None,
            &mut make_test_rng(),
        )
        .unwrap();

        assert_eq!(resolution.hits.len(), 1);
        let hit = &resolution.hits[0];
        assert_eq!(hit.target, CombatantId(10));
        // 40 - 50 * 0.10 = 35
        assert_eq!(hit.amount, 35);
        assert!(!hit.is_critical);
    }

    #[test]
    fn test_magical_all_enemies() {
        let fireball = SkillDefinition {
            target_type: SkillTargetType::AllEnemies,
            reach: SkillReach::RangedAny,
            damage_type: DamageType::Magical,
            multiplier: 2.0,
            ..skill("fireball")
        };
        let resolution = resolve_skill(&no_crit(), &battle(), CombatantId(2), &fireball, None, &mut make_test_rng()).unwrap();

        // Caster's primary stat is intelligence: 30 * 2 = 60
        assert_eq!(resolution.hit_on(CombatantId(10)).unwrap().amount, 58);
        assert_eq!(resolution.hit_on(CombatantId(11)).unwrap().amount, 55);
        assert_eq!(resolution.total_damage(), 113);
    }

    #[test]
    fn test_heal_targets_ally_of_choice() {
        let mend = SkillDefinition {
            skill_type: SkillType::Heal,
            target_type: SkillTargetType::SingleAlly,
            reach: SkillReach::AllyAny,
            scaling_stat: Some(PrimaryStat::Intelligence),
            multiplier: 1.5,
            ..skill("mend")
        };
        let field = battle();
        let resolution = resolve_skill(&no_crit(), &field, CombatantId(2), &mend, Some(CombatantId(2)), &mut make_test_rng()).unwrap();
        assert_eq!(resolution.hits[0].target, CombatantId(2));
        assert_eq!(resolution.hits[0].amount, 45);

        let (after, changes) = apply_resolution(&field, &resolution);
        assert_eq!(after.get(CombatantId(2)).unwrap().current_health, 60);
        assert_eq!(changes[0].before, 20);
        assert_eq!(changes[0].after, 60);
        // Original battlefield untouched
        assert_eq!(field.get(CombatantId(2)).unwrap().current_health, 20);
    }

    #[test]
    fn test_fizzle_is_not_an_error() {
        let mut field = battle();
        field.get_mut(CombatantId(10)).unwrap().current_health = 0;
        let cleave = SkillDefinition {
            target_type: SkillTargetType::AllEnemies,
            reach: SkillReach::MeleeFrontOnly,
            ..skill("cleave")
        };
        let resolution = resolve_skill(&no_crit(), &field, CombatantId(1), &cleave, None, &mut make_test_rng()).unwrap();
        assert!(resolution.fizzled());

        let (after, changes) = apply_resolution(&field, &resolution);
        assert_eq!(after, field);
        assert!(changes.is_empty());
    }

    #[test]
    fn test_guaranteed_crit() {
        let mut constants = CombatConstants::default();
        constants.crit.base_chance = 1.0;
        let resolution = resolve_skill(
            &constants,
            &battle(),
            CombatantId(1),
            &SkillDefinition::basic_attack(),
            None,
            &mut make_test_rng(),
        )
        .unwrap();
        let hit = &resolution.hits[0];
        assert!(hit.is_critical);
        assert_eq!(hit.base_amount, 35);
        // round(35 * 1.5) = 53
        assert_eq!(hit.amount, 53);
    }

    #[test]
    fn test_can_crit_false_skips_roll() {
        let mut constants = CombatConstants::default();
        constants.crit.base_chance = 1.0;
        let smite = SkillDefinition {
            damage_type: DamageType::True,
            reach: SkillReach::RangedAny,
            can_crit: false,
            ..skill("smite")
        };
        let resolution = resolve_skill(&constants, &battle(), CombatantId(1), &smite, Some(CombatantId(11)), &mut make_test_rng()).unwrap();
        let hit = &resolution.hits[0];
        assert!(!hit.is_critical);
        // True damage ignores the archer's 100 defense
        assert_eq!(hit.amount, 40);
    }

    #[test]
    fn test_debuff_applies_status() {
        let weaken = SkillDefinition {
            skill_type: SkillType::Debuff,
            reach: SkillReach::RangedAny,
            status: Some(StatusApplication::new("weakened")),
            ..skill("weaken")
        };
        let field = battle();
        let resolution = resolve_skill(&CombatConstants::default(), &field, CombatantId(2), &weaken, Some(CombatantId(11)), &mut make_test_rng()).unwrap();
        let hit = &resolution.hits[0];
        assert_eq!(hit.kind, HitKind::StatusOnly);
        assert_eq!(hit.amount, 0);
        let status = hit.status.as_ref().unwrap();
        assert_eq!(status.turns_remaining, 3);
        assert_eq!(status.source, CombatantId(2));

        let (after, changes) = apply_resolution(&field, &resolution);
        assert!(after.get(CombatantId(11)).unwrap().has_status("weakened"));
        assert_eq!(changes[0].before, changes[0].after);
    }

    #[test]
    fn test_killing_blow() {
        let mut field = battle();
        field.get_mut(CombatantId(10)).unwrap().current_health = 5;
        let resolution = resolve_skill(&no_crit(), &field, CombatantId(1), &SkillDefinition::basic_attack(), None, &mut make_test_rng()).unwrap();
        let (after, changes) = apply_resolution(&field, &resolution);
        assert!(changes[0].is_killing_blow());
        assert!(!after.get(CombatantId(10)).unwrap().is_alive());
    }

    #[test]
    fn test_seeded_resolution_reproduces() {
        let fireball = SkillDefinition {
            target_type: SkillTargetType::AllEnemies,
            reach: SkillReach::RangedAny,
            ..skill("volley")
        };
        let mut constants = CombatConstants::default();
        constants.crit.base_chance = 0.5;

        let first = resolve_skill(&constants, &battle(), CombatantId(1), &fireball, None, &mut make_test_rng()).unwrap();
        let second = resolve_skill(&constants, &battle(), CombatantId(1), &fireball, None, &mut make_test_rng()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_errors() {
        let field = battle();
        let mut rng = make_test_rng();
        let constants = CombatConstants::default();

        let err = resolve_skill(&constants, &field, CombatantId(42), &SkillDefinition::basic_attack(), None, &mut rng).unwrap_err();
        assert_eq!(err, CombatError::UnknownCombatant(CombatantId(42)));

        let broken = SkillDefinition {
            multiplier: f64::NAN,
            ..skill("broken")
        };
        let err = resolve_skill(&constants, &field, CombatantId(1), &broken, None, &mut rng).unwrap_err();
        assert!(matches!(err, CombatError::InvalidArgument { name: "skill.multiplier", .. }));
    }
}
