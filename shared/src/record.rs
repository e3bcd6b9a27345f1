use crate::StrategyType;
use serde::{Deserialize, Serialize};

/// Per-strategy score totals after one round.
///
/// This is the whole contract between the simulation and whatever draws it:
/// a series of these, in increasing round order, starting at round 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundRecord {
    /// Round label; 0 is the starting population
    pub round: u32,

    /// Sum of scores of `AlwaysAttack` birds
    pub attackers: i64,

    /// Sum of scores of `RunAwayWhenAttacked` birds
    pub savers: i64,

    /// Sum of scores of `AlwaysAttackButRunAwayOnRebuff` birds
    pub attacker_savers: i64,

    /// Sum of scores of `AttackOnlyForRebuff` birds
    pub saver_attackers: i64,
}

impl RoundRecord {
    /// Build a record from totals indexed by [`StrategyType::index`]
    pub fn from_totals(round: u32, totals: [i64; StrategyType::COUNT]) -> Self {
        Self {
            round,
            attackers: totals[StrategyType::AlwaysAttack.index()],
            savers: totals[StrategyType::RunAwayWhenAttacked.index()],
            attacker_savers: totals[StrategyType::AlwaysAttackButRunAwayOnRebuff.index()],
            saver_attackers: totals[StrategyType::AttackOnlyForRebuff.index()],
        }
    }

    /// Total score held by birds of `strategy`
    pub fn score(&self, strategy: StrategyType) -> i64 {
        match strategy {
            StrategyType::AlwaysAttack => self.attackers,
            StrategyType::RunAwayWhenAttacked => self.savers,
            StrategyType::AttackOnlyForRebuff => self.saver_attackers,
            StrategyType::AlwaysAttackButRunAwayOnRebuff => self.attacker_savers,
        }
    }

    /// Totals indexed by [`StrategyType::index`]
    pub fn totals(&self) -> [i64; StrategyType::COUNT] {
        StrategyType::ALL.map(|strategy| self.score(strategy))
    }

    /// Score held by the whole population
    pub fn total(&self) -> i64 {
        self.totals().iter().sum()
    }
}

/// Digest of a finished series
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesSummary {
    /// Number of records in the series
    pub rounds: usize,

    /// Last record of the series
    pub last: RoundRecord,

    /// Strategy holding the highest final total
    pub leader: StrategyType,

    /// Lowest per-strategy total seen in any round
    pub lowest: i64,

    /// Highest per-strategy total seen in any round
    pub highest: i64,

    /// Whole-population score at round 0
    pub starting_total: i64,

    /// Whole-population score at the last round
    pub final_total: i64,
}

impl SeriesSummary {
    /// Summarize a series; `None` when it is empty
    pub fn from_series(series: &[RoundRecord]) -> Option<Self> {
        let first = series.first()?;
        let last = series.last()?;

        // Ties go to the earlier strategy
        let mut leader = StrategyType::ALL[0];
        for strategy in StrategyType::ALL {
            if last.score(strategy) > last.score(leader) {
                leader = strategy;
            }
        }

        let all_totals = series.iter().flat_map(|record| record.totals());
        let (lowest, highest) = all_totals.fold((i64::MAX, i64::MIN), |(lo, hi), value| {
            (lo.min(value), hi.max(value))
        });

        Some(Self {
            rounds: series.len(),
            last: *last,
            leader,
            lowest,
            highest,
            starting_total: first.total(),
            final_total: last.total(),
        })
    }

    /// Change of whole-population score over the run
    pub fn total_change(&self) -> i64 {
        self.final_total - self.starting_total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_serializes_with_chart_column_names() {
        let record = RoundRecord::from_totals(3, [1, 2, 3, 4]);
        let json = serde_json::to_value(record).unwrap();

        assert_eq!(json["round"], 3);
        assert_eq!(json["attackers"], 1);
        assert_eq!(json["savers"], 2);
        assert_eq!(json["saverAttackers"], 3);
        assert_eq!(json["attackerSavers"], 4);
    }

    #[test]
    fn test_score_uses_strategy_index() {
        let record = RoundRecord::from_totals(0, [10, 20, 30, 40]);
        for strategy in StrategyType::ALL {
            assert_eq!(
                record.score(strategy),
                (strategy.index() as i64 + 1) * 10
            );
        }
        assert_eq!(record.total(), 100);
    }

    #[test]
    fn test_summary_of_empty_series() {
        assert!(SeriesSummary::from_series(&[]).is_none());
    }

    #[test]
    fn test_summary_tracks_leader_and_extremes() {
        let series = vec![
            RoundRecord::from_totals(0, [500, 500, 500, 500]),
            RoundRecord::from_totals(1, [450, 600, -20, 470]),
            RoundRecord::from_totals(2, [400, 650, 10, 700]),
        ];

        let summary = SeriesSummary::from_series(&series).unwrap();

        assert_eq!(summary.rounds, 3);
        assert_eq!(summary.last.round, 2);
        assert_eq!(summary.leader, StrategyType::AlwaysAttackButRunAwayOnRebuff);
        assert_eq!(summary.lowest, -20);
        assert_eq!(summary.highest, 700);
        assert_eq!(summary.starting_total, 2000);
        assert_eq!(summary.final_total, 1760);
        assert_eq!(summary.total_change(), -240);
    }

    #[test]
    fn test_summary_leader_tie_goes_to_earlier_strategy() {
        let series = vec![RoundRecord::from_totals(0, [500, 500, 500, 500])];
        let summary = SeriesSummary::from_series(&series).unwrap();
        assert_eq!(summary.leader, StrategyType::AlwaysAttack);
    }
}
