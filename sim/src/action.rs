use crate::bird::BirdPair;
use rand::Rng;

/// Payoff rule applied to a pair of birds.
///
/// Whichever side wins gains exactly `win` and the other loses exactly
/// `lose`. The two amounts are independent, so an action generally changes
/// the pair's combined score by `win - lose`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// A fair coin decides which side wins
    RandomizedSplit { win: i64, lose: i64 },

    /// The designated side always wins
    DeterministicSplit {
        first_side_wins: bool,
        win: i64,
        lose: i64,
    },
}

impl Action {
    /// Resolve `pair`, drawing from `rng` only for a randomized split
    pub fn apply<R: Rng>(&self, pair: BirdPair, rng: &mut R) -> BirdPair {
        match *self {
            Action::RandomizedSplit { win, lose } => {
                if rng.gen::<f64>() < 0.5 {
                    pair.first_wins(win, lose)
                } else {
                    pair.second_wins(win, lose)
                }
            }
            Action::DeterministicSplit {
                first_side_wins,
                win,
                lose,
            } => {
                if first_side_wins {
                    pair.first_wins(win, lose)
                } else {
                    pair.second_wins(win, lose)
                }
            }
        }
    }

    /// Points gained by the winning side
    pub fn win(&self) -> i64 {
        match *self {
            Action::RandomizedSplit { win, .. } | Action::DeterministicSplit { win, .. } => win,
        }
    }

    /// Points lost by the losing side
    pub fn lose(&self) -> i64 {
        match *self {
            Action::RandomizedSplit { lose, .. } | Action::DeterministicSplit { lose, .. } => lose,
        }
    }

    /// Change of the pair's combined score, independent of who wins
    pub fn net(&self) -> i64 {
        self.win() - self.lose()
    }
}
