use crate::aggregate;
use crate::bird::Bird;
use crate::error::ConfigError;
use crate::round;
use rand::seq::SliceRandom;
use rand::Rng;
use shared::{RoundRecord, SeriesSummary, StrategyType};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationConfig {
    /// DNA points every bird starts with
    pub start_score: i64,
    /// Birds seeded per strategy at round 0
    pub birds_per_strategy: usize,
    /// Records in the finished series, round 0 included
    pub rounds: u32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            start_score: shared::START_DNA_POINTS,
            birds_per_strategy: shared::BIRDS_PER_STRATEGY,
            rounds: shared::ROUNDS,
        }
    }
}

impl SimulationConfig {
    /// Reject settings that would leave a strategy empty or the series blank
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.birds_per_strategy == 0 {
            return Err(ConfigError::NoBirds);
        }
        if self.rounds == 0 {
            return Err(ConfigError::NoRounds);
        }
        Ok(())
    }

    pub fn population_size(&self) -> usize {
        self.birds_per_strategy * StrategyType::COUNT
    }
}

/// Build the round-0 population: `birds_per_strategy` birds of each
/// strategy at `start_score`, shuffled once.
pub fn initial_population<R: Rng>(config: &SimulationConfig, rng: &mut R) -> Vec<Bird> {
    let mut population: Vec<Bird> = StrategyType::ALL
        .iter()
        .flat_map(|&strategy| {
            std::iter::repeat(Bird::new(strategy, config.start_score))
                .take(config.birds_per_strategy)
        })
        .collect();
    population.shuffle(rng);
    population
}

/// Everything that changes between rounds
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SimulationState {
    pub population: Vec<Bird>,
    pub series: Vec<RoundRecord>,
}

impl SimulationState {
    /// Start a series with the round-0 record of `population`
    pub fn new(population: Vec<Bird>) -> Self {
        let series = vec![aggregate::record(0, &population)];
        Self { population, series }
    }

    /// Label of the latest record
    pub fn round(&self) -> u32 {
        self.series.last().map_or(0, |record| record.round)
    }

    /// Play one round and append its record
    pub fn step<R: Rng>(self, rng: &mut R) -> Self {
        let population = round::play_round(&self.population, rng);
        let record = aggregate::record(self.round() + 1, &population);

        tracing::debug!(
            round = record.round,
            attackers = record.attackers,
            savers = record.savers,
            attacker_savers = record.attacker_savers,
            saver_attackers = record.saver_attackers,
            "Round played"
        );

        let mut series = self.series;
        series.push(record);
        Self { population, series }
    }
}

/// One seeded run from the starting population to the last round
pub struct Simulation<R> {
    pub config: SimulationConfig,
    state: SimulationState,
    rng: R,
}

impl<R: Rng> Simulation<R> {
    /// Validate `config` and build the shuffled round-0 population
    pub fn new(config: SimulationConfig, mut rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        let population = initial_population(&config, &mut rng);

        Ok(Self {
            config,
            state: SimulationState::new(population),
            rng,
        })
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.series.len() >= self.config.rounds as usize
    }

    /// Advance by one round
    pub fn step(&mut self) {
        let state = std::mem::take(&mut self.state);
        self.state = state.step(&mut self.rng);
    }

    /// Play every remaining round and hand over the finished series
    pub fn run(mut self) -> Vec<RoundRecord> {
        tracing::info!(
            population = self.state.population.len(),
            rounds = self.config.rounds,
            start_score = self.config.start_score,
            "Starting simulation"
        );

        while !self.is_finished() {
            self.step();
        }

        if let Some(summary) = SeriesSummary::from_series(&self.state.series) {
            tracing::info!(
                rounds = summary.rounds,
                leader = %summary.leader,
                final_total = summary.final_total,
                total_change = summary.total_change(),
                "Simulation finished"
            );
        }

        self.state.series
    }
}
