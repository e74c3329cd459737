//! Target resolution - side/cardinality filter intersected with row reach
//!
//! 1. [`SkillTargetType`] picks the candidate side(s) among living combatants.
//! 2. [`SkillReach`] picks the row-eligible combatants.
//! 3. The intersection is ordered (opposing side first, front row before
//!    back row, ascending slot, ascending id). Multi-target sets are capped
//!    at `constants.skills.max_targets`; single-target sets keep every
//!    eligible combatant so any of them can be picked.
//!
//! An empty result means the skill fizzles; it is not an error.

use super::battlefield::Battlefield;
use super::combatant::{Combatant, CombatantId};
use crate::config::CombatConstants;
use crate::error::CombatResult;
use crate::types::{RowPosition, SkillReach, SkillTargetType, Team};
use serde::{Deserialize, Serialize};

/// Ordered targets of one skill use
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetSet {
    /// Eligible targets in priority order
    pub targets: Vec<CombatantId>,
    /// Whether the skill hits a single chosen member of `targets`
    pub single: bool,
}

impl TargetSet {
    /// The skill has nothing to hit
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn contains(&self, id: CombatantId) -> bool {
        self.targets.contains(&id)
    }

    /// Combatants the skill actually affects
    ///
    /// Single-target skills take `preferred` when it is eligible, otherwise
    /// the highest-priority target. Multi-target skills take every target.
    pub fn choose(&self, preferred: Option<CombatantId>) -> Vec<CombatantId> {
        if !self.single {
            return self.targets.clone();
        }
        match preferred {
            Some(id) if self.contains(id) => vec![id],
            _ => self.targets.first().copied().into_iter().collect(),
        }
    }
}

/// Resolve the eligible targets of a skill cast by `caster_id`
pub fn resolve_targets(
    constants: &CombatConstants,
    battlefield: &Battlefield,
    caster_id: CombatantId,
    target_type: SkillTargetType,
    reach: SkillReach,
) -> CombatResult<TargetSet> {
    let caster = battlefield.caster(caster_id)?;
    let opposing_line = engaged_row(battlefield, caster.team.opponent());

    let mut eligible: Vec<&Combatant> = battlefield
        .living()
        .filter(|target| matches_target_type(caster, target, target_type))
        .filter(|target| within_reach(caster, target, reach, opposing_line))
        .collect();

    eligible.sort_by_key(|target| priority(caster, target));

    let found = eligible.len();
    let single = target_type.is_single();
    if !single {
        eligible.truncate(constants.skills.max_targets);
    }

    tracing::debug!(
        caster = %caster_id,
        ?target_type,
        ?reach,
        found,
        kept = eligible.len(),
        "resolved skill targets"
    );

    Ok(TargetSet {
        targets: eligible.into_iter().map(|target| target.id).collect(),
        single,
    })
}

fn matches_target_type(caster: &Combatant, target: &Combatant, target_type: SkillTargetType) -> bool {
    if target_type == SkillTargetType::SelfOnly {
        return target.id == caster.id;
    }
    if target.is_ally_of(caster) {
        target_type.includes_allies()
    } else {
        target_type.includes_opponents()
    }
}

fn within_reach(
    caster: &Combatant,
    target: &Combatant,
    reach: SkillReach,
    opposing_line: Option<RowPosition>,
) -> bool {
    let is_ally = target.is_ally_of(caster);
    match reach {
        SkillReach::AdjacentOnly => target.row == caster.row,
        SkillReach::MeleeFrontOnly => !is_ally && target.row == RowPosition::Front,
        SkillReach::MeleeFrontThenBack => !is_ally && Some(target.row) == opposing_line,
        SkillReach::RangedAny => true,
        SkillReach::AllySelf => target.id == caster.id,
        SkillReach::AllyAny => is_ally,
    }
}

/// Row a melee attacker engages: front while anyone stands there, then back
fn engaged_row(battlefield: &Battlefield, team: Team) -> Option<RowPosition> {
    RowPosition::all()
        .iter()
        .copied()
        .find(|row| battlefield.living_in_row(team, *row).next().is_some())
}

fn priority(caster: &Combatant, target: &Combatant) -> (bool, RowPosition, u8, CombatantId) {
    (target.is_ally_of(caster), target.row, target.slot, target.id)
}
