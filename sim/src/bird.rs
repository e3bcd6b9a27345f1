use shared::StrategyType;

/// A single individual: a lifelong strategy and its accumulated DNA points.
///
/// Birds are plain values. A changed score is always a new `Bird`; the
/// strategy is carried over untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bird {
    pub strategy: StrategyType,
    pub score: i64,
}

impl Bird {
    /// Create a new bird with the given strategy and score
    pub fn new(strategy: StrategyType, score: i64) -> Self {
        Self { strategy, score }
    }

    /// Same bird with `amount` points added
    pub fn gain(self, amount: i64) -> Self {
        Self {
            score: self.score + amount,
            ..self
        }
    }

    /// Same bird with `amount` points removed (no floor)
    pub fn lose(self, amount: i64) -> Self {
        Self {
            score: self.score - amount,
            ..self
        }
    }
}

/// Two birds meeting in one round. Order matters: the first bird's
/// strategy table decides the action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirdPair {
    pub first: Bird,
    pub second: Bird,
}

impl BirdPair {
    pub fn new(first: Bird, second: Bird) -> Self {
        Self { first, second }
    }

    /// First bird gains `win`, second loses `lose`
    pub fn first_wins(self, win: i64, lose: i64) -> Self {
        Self::new(self.first.gain(win), self.second.lose(lose))
    }

    /// Second bird gains `win`, first loses `lose`
    pub fn second_wins(self, win: i64, lose: i64) -> Self {
        Self::new(self.first.lose(lose), self.second.gain(win))
    }
}

/// One entry of a paired-up population
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Pair(BirdPair),
    /// The unpaired last bird of an odd population
    Single(Bird),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bird_creation() {
        let bird = Bird::new(StrategyType::AlwaysAttack, 50);
        assert_eq!(bird.strategy, StrategyType::AlwaysAttack);
        assert_eq!(bird.score, 50);
    }

    #[test]
    fn test_score_can_go_negative() {
        let bird = Bird::new(StrategyType::RunAwayWhenAttacked, 10).lose(100);
        assert_eq!(bird.score, -90);
        assert_eq!(bird.strategy, StrategyType::RunAwayWhenAttacked);
    }

    #[test]
    fn test_pair_outcomes_keep_strategies() {
        let pair = BirdPair::new(
            Bird::new(StrategyType::AlwaysAttack, 50),
            Bird::new(StrategyType::AttackOnlyForRebuff, 50),
        );

        let first = pair.first_wins(50, 100);
        assert_eq!(first.first, Bird::new(StrategyType::AlwaysAttack, 100));
        assert_eq!(first.second, Bird::new(StrategyType::AttackOnlyForRebuff, -50));

        let second = pair.second_wins(50, 15);
        assert_eq!(second.first, Bird::new(StrategyType::AlwaysAttack, 35));
        assert_eq!(second.second, Bird::new(StrategyType::AttackOnlyForRebuff, 100));
    }
}
