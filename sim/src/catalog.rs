use crate::action::Action;
use shared::StrategyType;

/// A strategy and its payoff row: the action to apply against each opponent
#[derive(Debug, PartialEq, Eq)]
pub struct Strategy {
    pub kind: StrategyType,
    actions: [Action; StrategyType::COUNT],
}

impl Strategy {
    /// Action used when a bird of this strategy meets `opponent`
    pub fn action_against(&self, opponent: StrategyType) -> Action {
        self.actions[opponent.index()]
    }
}

const fn roll(win: i64, lose: i64) -> Action {
    Action::RandomizedSplit { win, lose }
}

const fn fixed(first_side_wins: bool, win: i64, lose: i64) -> Action {
    Action::DeterministicSplit {
        first_side_wins,
        win,
        lose,
    }
}

// Rows are indexed by own strategy, columns by opponent, both in
// `StrategyType::ALL` order.
static CATALOG: [Strategy; StrategyType::COUNT] = [
    Strategy {
        kind: StrategyType::AlwaysAttack,
        actions: [
            roll(50, 100),
            fixed(true, 50, 100),
            roll(50, 100),
            fixed(true, 50, 0),
        ],
    },
    Strategy {
        kind: StrategyType::RunAwayWhenAttacked,
        actions: [
            fixed(false, 50, 0),
            roll(50, 15),
            roll(50, 15),
            fixed(false, 50, 0),
        ],
    },
    Strategy {
        kind: StrategyType::AttackOnlyForRebuff,
        actions: [
            roll(50, 100),
            roll(50, 15),
            roll(50, 15),
            fixed(true, 50, 0),
        ],
    },
    Strategy {
        kind: StrategyType::AlwaysAttackButRunAwayOnRebuff,
        actions: [
            fixed(false, 50, 0),
            fixed(true, 50, 0),
            fixed(false, 50, 0),
            roll(50, 15),
        ],
    },
];

/// The singleton implementing `kind`
pub fn strategy(kind: StrategyType) -> &'static Strategy {
    &CATALOG[kind.index()]
}

/// Action applied when a bird of `own` strategy meets one of `opponent`
pub fn action_for(own: StrategyType, opponent: StrategyType) -> Action {
    strategy(own).action_against(opponent)
}
