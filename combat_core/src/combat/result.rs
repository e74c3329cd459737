//! SkillResolution - outcome of one skill use

use crate::status::ActiveStatus;
use crate::targeting::CombatantId;
use serde::{Deserialize, Serialize};

/// What a hit does to its target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HitKind {
    Damage,
    Heal,
    /// Buffs and debuffs: no number, only a status
    StatusOnly,
}

/// Effect of a skill on one target
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HitOutcome {
    pub target: CombatantId,
    pub kind: HitKind,
    /// Amount before the critical roll
    pub base_amount: u32,
    /// Final amount to apply
    pub amount: u32,
    pub is_critical: bool,
    /// Status to put on the target, if the skill carries one
    pub status: Option<ActiveStatus>,
}

/// Result of resolving a skill against the battlefield
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillResolution {
    pub caster: CombatantId,
    pub skill_id: String,
    /// One entry per affected target, in target priority order
    pub hits: Vec<HitOutcome>,
}

impl SkillResolution {
    pub fn new(caster: CombatantId, skill_id: impl Into<String>) -> Self {
        SkillResolution {
            caster,
            skill_id: skill_id.into(),
            hits: Vec::new(),
        }
    }

    /// No valid target: the skill had no effect
    pub fn fizzled(&self) -> bool {
        self.hits.is_empty()
    }

    pub fn targets(&self) -> impl Iterator<Item = CombatantId> + '_ {
        self.hits.iter().map(|hit| hit.target)
    }

    pub fn hit_on(&self, target: CombatantId) -> Option<&HitOutcome> {
        self.hits.iter().find(|hit| hit.target == target)
    }

    pub fn total_damage(&self) -> u64 {
        self.total_of(HitKind::Damage)
    }

    pub fn total_healing(&self) -> u64 {
        self.total_of(HitKind::Heal)
    }

    pub fn critical_hits(&self) -> usize {
        self.hits.iter().filter(|hit| hit.is_critical).count()
    }

    fn total_of(&self, kind: HitKind) -> u64 {
        self.hits
            .iter()
            .filter(|hit| hit.kind == kind)
            .map(|hit| hit.amount as u64)
            .sum()
    }
}

/// Health change produced by applying a hit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthChange {
    pub target: CombatantId,
    pub before: u32,
    pub after: u32,
}

impl HealthChange {
    pub fn is_killing_blow(&self) -> bool {
        self.before > 0 && self.after == 0
    }
}
