use crate::bird::Bird;
use shared::{RoundRecord, StrategyType};

/// Sum of scores per strategy, indexed by [`StrategyType::index`].
/// A strategy with no birds sums to 0.
pub fn scores_by_strategy(population: &[Bird]) -> [i64; StrategyType::COUNT] {
    let mut totals = [0; StrategyType::COUNT];
    for bird in population {
        totals[bird.strategy.index()] += bird.score;
    }
    totals
}

/// Number of birds per strategy, indexed by [`StrategyType::index`]
pub fn strategy_counts(population: &[Bird]) -> [usize; StrategyType::COUNT] {
    let mut counts = [0; StrategyType::COUNT];
    for bird in population {
        counts[bird.strategy.index()] += 1;
    }
    counts
}

/// Series entry for `population` labelled `round`
pub fn record(round: u32, population: &[Bird]) -> RoundRecord {
    RoundRecord::from_totals(round, scores_by_strategy(population))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_sums_per_strategy() {
        let population = vec![
            Bird::new(StrategyType::AlwaysAttack, 50),
            Bird::new(StrategyType::AlwaysAttack, 30),
            Bird::new(StrategyType::RunAwayWhenAttacked, 10),
        ];

        let entry = record(7, &population);

        assert_eq!(entry.round, 7);
        assert_eq!(entry.attackers, 80);
        assert_eq!(entry.savers, 10);
        assert_eq!(entry.attacker_savers, 0);
        assert_eq!(entry.saver_attackers, 0);
    }

    #[test]
    fn test_negative_scores_are_summed() {
        let population = vec![
            Bird::new(StrategyType::AttackOnlyForRebuff, -40),
            Bird::new(StrategyType::AttackOnlyForRebuff, 15),
        ];

        assert_eq!(scores_by_strategy(&population), [0, 0, -25, 0]);
    }

    #[test]
    fn test_strategy_counts() {
        let population = vec![
            Bird::new(StrategyType::AlwaysAttackButRunAwayOnRebuff, 1),
            Bird::new(StrategyType::AlwaysAttack, 2),
            Bird::new(StrategyType::AlwaysAttackButRunAwayOnRebuff, 3),
        ];

        assert_eq!(strategy_counts(&population), [1, 0, 0, 2]);
    }
}
