//! Closed classifications shared by the calculator and the targeting rules

use crate::config::CombatConstants;
use serde::{Deserialize, Serialize};

/// Raw stat value (primary stat or defense). Must be >= 0.
pub type StatValue = i32;

/// What a skill does when it lands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillType {
    Damage,
    Heal,
    Buff,
    Debuff,
}

impl SkillType {
    /// Whether the skill produces a damage or healing number
    pub fn has_amount(self) -> bool {
        matches!(self, SkillType::Damage | SkillType::Heal)
    }
}

/// Side and cardinality filter for target selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillTargetType {
    SingleEnemy,
    SingleAlly,
    AllEnemies,
    AllAllies,
    /// Only the caster
    #[serde(rename = "self")]
    SelfOnly,
    SingleAny,
    AllAny,
}

impl SkillTargetType {
    pub fn all() -> &'static [SkillTargetType] {
        &[
            SkillTargetType::SingleEnemy,
            SkillTargetType::SingleAlly,
            SkillTargetType::AllEnemies,
            SkillTargetType::AllAllies,
            SkillTargetType::SelfOnly,
            SkillTargetType::SingleAny,
            SkillTargetType::AllAny,
        ]
    }

    /// Single-target skills hit one chosen member of the eligible set
    pub fn is_single(self) -> bool {
        matches!(
            self,
            SkillTargetType::SingleEnemy
                | SkillTargetType::SingleAlly
                | SkillTargetType::SelfOnly
                | SkillTargetType::SingleAny
        )
    }

    pub fn includes_opponents(self) -> bool {
        matches!(
            self,
            SkillTargetType::SingleEnemy
                | SkillTargetType::AllEnemies
                | SkillTargetType::SingleAny
                | SkillTargetType::AllAny
        )
    }

    pub fn includes_allies(self) -> bool {
        matches!(
            self,
            SkillTargetType::SingleAlly
                | SkillTargetType::AllAllies
                | SkillTargetType::SingleAny
                | SkillTargetType::AllAny
        )
    }
}

/// Damage category, selects the defense mitigation ratio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DamageType {
    Physical,
    Magical,
    /// Ignores defense entirely
    True,
}

impl DamageType {
    pub fn all() -> &'static [DamageType] {
        &[DamageType::Physical, DamageType::Magical, DamageType::True]
    }

    /// Fraction of the target's defense subtracted from raw damage
    pub fn defense_ratio(self, constants: &CombatConstants) -> f64 {
        match self {
            DamageType::Physical => constants.defense.physical_reduction_ratio,
            DamageType::Magical => constants.defense.magical_reduction_ratio,
            DamageType::True => 0.0,
        }
    }
}

/// Primary attribute a skill scales from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrimaryStat {
    Strength,
    Agility,
    Intelligence,
}

/// Turn lifecycle tag. Declaration order is the lifecycle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CombatPhase {
    Preparation,
    TurnStart,
    Action,
    Execution,
    TurnEnd,
    Victory,
    Defeat,
}

/// Battle row of a combatant
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RowPosition {
    Front,
    Back,
}

impl RowPosition {
    pub fn all() -> &'static [RowPosition] {
        &[RowPosition::Front, RowPosition::Back]
    }
}

/// Row eligibility filter, composed with [`SkillTargetType`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillReach {
    /// Targets sharing the caster's row, on either side
    AdjacentOnly,
    /// Opposing front row only
    MeleeFrontOnly,
    /// Opposing front row, or the back row once the front row is down
    MeleeFrontThenBack,
    RangedAny,
    AllySelf,
    AllyAny,
}

impl SkillReach {
    pub fn all() -> &'static [SkillReach] {
        &[
            SkillReach::AdjacentOnly,
            SkillReach::MeleeFrontOnly,
            SkillReach::MeleeFrontThenBack,
            SkillReach::RangedAny,
            SkillReach::AllySelf,
            SkillReach::AllyAny,
        ]
    }
}

/// Which side of the battle a combatant fights for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Team {
    Party,
    Enemy,
}

impl Team {
    pub fn opponent(self) -> Team {
        match self {
            Team::Party => Team::Enemy,
            Team::Enemy => Team::Party,
        }
    }
}
