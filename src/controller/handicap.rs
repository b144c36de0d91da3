use itertools::Itertools;
use log::debug;

use crate::config::HandicapConfig;
use crate::dto::{chronological, HandicapSnapshot, Round, WindowDifferential};

/// Only the most recent rounds count towards the index.
pub const WINDOW_SIZE: usize = 20;
/// Ratable rounds needed in the window before there is an index at all.
pub const MINIMUM_DIFFERENTIALS: usize = 3;

/// How many of the lowest differentials are averaged, given how many are available in the window.
pub const fn counting_differentials(available: usize) -> Option<usize> {
    match available {
        0..=2 => None,
        3..=5 => Some(1),
        6..=8 => Some(2),
        9..=11 => Some(3),
        12..=14 => Some(4),
        15..=16 => Some(5),
        17..=18 => Some(6),
        19 => Some(7),
        _ => Some(8),
    }
}

#[derive(Debug, Clone, Copy)]
pub struct HandicapEngine {
    multiplier: f64,
}

impl Default for HandicapEngine {
    fn default() -> Self {
        Self { multiplier: 1.0 }
    }
}

impl HandicapEngine {
    pub fn new(config: &HandicapConfig) -> Self {
        Self {
            multiplier: config.index_multiplier(),
        }
    }

    /// Handicap index over the most recent [`WINDOW_SIZE`] rounds.
    /// `None` with fewer than three ratable ones.
    pub fn compute_index(&self, rounds: &[Round]) -> Option<f64> {
        self.index_at(&chronological(rounds))
    }

    /// One snapshot per round, each computed from that round and the ones played before it.
    pub fn compute_history(&self, rounds: &[Round]) -> Vec<HandicapSnapshot> {
        let ordered = chronological(rounds);
        let history = (1..=ordered.len())
            .map(|played| HandicapSnapshot {
                date: ordered[played - 1].date,
                index: self.index_at(&ordered[..played]),
                round_count_at_time: played,
            })
            .collect_vec();
        debug!("Built handicap history over {} rounds", history.len());
        history
    }

    /// The ratable rounds of the current window, with the ones averaged into the index flagged.
    pub fn index_breakdown(&self, rounds: &[Round]) -> Vec<WindowDifferential> {
        let ordered = chronological(rounds);
        let rated = window(&ordered)
            .iter()
            .filter_map(|round| round.differential().map(|differential| (*round, differential)))
            .collect_vec();
        let counting = counting_differentials(rated.len()).unwrap_or(0);
        let counted = rated
            .iter()
            .enumerate()
            .sorted_by(|(_, (_, a)), (_, (_, b))| a.total_cmp(b))
            .take(counting)
            .map(|(position, _)| position)
            .collect_vec();

        rated
            .into_iter()
            .enumerate()
            .map(|(position, (round, differential))| WindowDifferential {
                round_id: round.id.clone(),
                date: round.date,
                differential,
                counted: counted.contains(&position),
            })
            .collect_vec()
    }

    /// Index for the last round of `ordered`, which must already be in chronological order.
    fn index_at(&self, ordered: &[&Round]) -> Option<f64> {
        let differentials = window(ordered)
            .iter()
            .filter_map(|round| round.differential())
            .sorted_by(f64::total_cmp)
            .collect_vec();
        let counting = counting_differentials(differentials.len())?;
        let best = &differentials[..counting];
        Some(best.iter().sum::<f64>() / counting as f64 * self.multiplier)
    }
}

fn window<'a, 'r>(ordered: &'a [&'r Round]) -> &'a [&'r Round] {
    &ordered[ordered.len().saturating_sub(WINDOW_SIZE)..]
}
