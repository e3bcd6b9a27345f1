use serde::{Deserialize, Serialize};
use std::fmt;

/// The four lifelong behaviors a bird can follow.
///
/// Declaration order is significant: it defines the stable index used by the
/// payoff table and the column order of every [`crate::RoundRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum StrategyType {
    /// Fights whoever it meets ("Attacker")
    AlwaysAttack,

    /// Flees when attacked, fights a fleeing opponent ("Saver")
    RunAwayWhenAttacked,

    /// Flees unless the opponent also flees, then fights ("SaverAttacker")
    AttackOnlyForRebuff,

    /// Fights unless rebuffed, then flees ("AttackerSaver")
    AlwaysAttackButRunAwayOnRebuff,
}

impl StrategyType {
    /// Number of strategies
    pub const COUNT: usize = 4;

    /// Every strategy, in declaration order
    pub const ALL: [StrategyType; Self::COUNT] = [
        StrategyType::AlwaysAttack,
        StrategyType::RunAwayWhenAttacked,
        StrategyType::AttackOnlyForRebuff,
        StrategyType::AlwaysAttackButRunAwayOnRebuff,
    ];

    /// Stable index in `0..COUNT`
    pub fn index(self) -> usize {
        match self {
            StrategyType::AlwaysAttack => 0,
            StrategyType::RunAwayWhenAttacked => 1,
            StrategyType::AttackOnlyForRebuff => 2,
            StrategyType::AlwaysAttackButRunAwayOnRebuff => 3,
        }
    }

    /// Short human name
    pub fn name(self) -> &'static str {
        match self {
            StrategyType::AlwaysAttack => "Attacker",
            StrategyType::RunAwayWhenAttacked => "Saver",
            StrategyType::AttackOnlyForRebuff => "SaverAttacker",
            StrategyType::AlwaysAttackButRunAwayOnRebuff => "AttackerSaver",
        }
    }

    /// Column name in the serialized series
    pub fn column(self) -> &'static str {
        match self {
            StrategyType::AlwaysAttack => "attackers",
            StrategyType::RunAwayWhenAttacked => "savers",
            StrategyType::AttackOnlyForRebuff => "saverAttackers",
            StrategyType::AlwaysAttackButRunAwayOnRebuff => "attackerSavers",
        }
    }
}

impl fmt::Display for StrategyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
