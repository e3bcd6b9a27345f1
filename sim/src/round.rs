use crate::aggregate::strategy_counts;
use crate::bird::{Bird, BirdPair, Slot};
use crate::catalog;
use rand::Rng;

/// Group birds at even indices with their right neighbour.
///
/// An odd population leaves the last bird unpaired; it becomes a
/// [`Slot::Single`] and sits the round out.
pub fn pair_up(population: &[Bird]) -> Vec<Slot> {
    population
        .chunks(2)
        .map(|chunk| match *chunk {
            [first, second] => Slot::Pair(BirdPair::new(first, second)),
            [single] => Slot::Single(single),
            _ => unreachable!("chunks(2) yields one or two birds"),
        })
        .collect()
}

/// Resolve one slot: a pair plays the first bird's action against the
/// second bird's strategy, a single bird passes through.
pub fn resolve<R: Rng>(slot: Slot, rng: &mut R) -> Slot {
    match slot {
        Slot::Pair(pair) => {
            let action = catalog::action_for(pair.first.strategy, pair.second.strategy);
            Slot::Pair(action.apply(pair, rng))
        }
        Slot::Single(bird) => Slot::Single(bird),
    }
}

/// Expand slots back into a population, keeping slot order
pub fn flatten(slots: &[Slot]) -> Vec<Bird> {
    let mut population = Vec::with_capacity(slots.len() * 2);
    for slot in slots {
        match *slot {
            Slot::Pair(pair) => {
                population.push(pair.first);
                population.push(pair.second);
            }
            Slot::Single(bird) => population.push(bird),
        }
    }
    population
}

/// Play one round over `population` and return the next generation.
///
/// Panics if the round would change the population size; that can only be a
/// bug in pairing or flattening.
pub fn play_round<R: Rng>(population: &[Bird], rng: &mut R) -> Vec<Bird> {
    let resolved: Vec<Slot> = pair_up(population)
        .into_iter()
        .map(|slot| resolve(slot, rng))
        .collect();
    let next = flatten(&resolved);

    assert_eq!(
        next.len(),
        population.len(),
        "round changed population size"
    );
    debug_assert_eq!(
        strategy_counts(&next),
        strategy_counts(population),
        "round changed the strategy mix"
    );

    next
}

/// Change of total score the next round will apply to `population`.
///
/// Independent of the random draws: every pair moves by its action's
/// `win - lose` whichever side wins.
pub fn net_change(population: &[Bird]) -> i64 {
    pair_up(population)
        .iter()
        .map(|slot| match slot {
            Slot::Pair(pair) => catalog::action_for(pair.first.strategy, pair.second.strategy).net(),
            Slot::Single(_) => 0,
        })
        .sum()
}
