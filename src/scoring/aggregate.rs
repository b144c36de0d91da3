use itertools::Itertools;
use log::warn;

use crate::config::{HandicapConfig, InvalidParPolicy};
use crate::dto::{
    chronological, DistributionBucket, Hole, HoleAggregate, ParTypeAggregate, Round,
    RoundStatsSummary, ScoreToParPoint, ScoringSummary,
};
use crate::error::{Error, Result};
use crate::scoring::hole::{percentage, ratio, HoleStats};

/// Holes past the 18th are not aggregated.
pub const MAX_HOLES: usize = 18;
const PAR_TYPES: [u8; 3] = [3, 4, 5];

/// One point per round, oldest first.
pub fn score_to_par_trend(rounds: &[Round]) -> Vec<ScoreToParPoint> {
    chronological(rounds)
        .into_iter()
        .map(|round| ScoreToParPoint {
            date: round.date,
            score: round.total_score,
            par: round.course_par,
            score_to_par: round.score_to_par(),
        })
        .collect_vec()
}

/// Histogram of score to par from the lowest to the highest observed value, gaps included.
pub fn score_distribution(rounds: &[Round]) -> Vec<DistributionBucket> {
    let Some((low, high)) = rounds
        .iter()
        .map(Round::score_to_par)
        .minmax()
        .into_option()
    else {
        return vec![];
    };
    let counts = rounds.iter().map(Round::score_to_par).counts();
    let total = rounds.len();

    (low..=high)
        .map(|score_to_par| {
            let count = counts.get(&score_to_par).copied().unwrap_or(0);
            DistributionBucket {
                score_to_par,
                count,
                percentage: count as f64 * 100.0 / total as f64,
            }
        })
        .collect_vec()
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ScoringAggregator {
    policy: InvalidParPolicy,
}

impl ScoringAggregator {
    pub fn new(config: &HandicapConfig) -> Self {
        Self {
            policy: config.invalid_par_policy,
        }
    }

    pub fn with_policy(policy: InvalidParPolicy) -> Self {
        Self { policy }
    }

    pub fn summarize(&self, rounds: &[Round]) -> Result<ScoringSummary> {
        let per_hole_performance = self.per_hole_performance(rounds)?;
        Ok(ScoringSummary {
            score_to_par_trend: score_to_par_trend(rounds),
            score_distribution: score_distribution(rounds),
            best_hole: best_hole(&per_hole_performance),
            worst_hole: worst_hole(&per_hole_performance),
            per_hole_performance,
            per_par_type_stats: self.per_par_type_stats(rounds)?,
            round_stats: self.round_stats_summary(rounds)?,
        })
    }

    /// Aggregates for every hole number that has at least one recorded hole.
    pub fn per_hole_performance(&self, rounds: &[Round]) -> Result<Vec<HoleAggregate>> {
        let mut holes: [HoleStats; MAX_HOLES] = Default::default();
        for round in rounds {
            for (number, hole) in self.valid_holes(round)? {
                holes[number as usize - 1].add(hole);
            }
        }
        Ok(holes
            .iter()
            .enumerate()
            .filter(|(_, stats)| stats.attempts() > 0)
            .map(|(i, stats)| stats.to_hole_aggregate(i as u8 + 1))
            .collect_vec())
    }

    /// Aggregates for par 3, 4 and 5, always in that order.
    pub fn per_par_type_stats(&self, rounds: &[Round]) -> Result<Vec<ParTypeAggregate>> {
        let mut pars: [HoleStats; 3] = Default::default();
        for round in rounds {
            for (_, hole) in self.valid_holes(round)? {
                pars[(hole.par - PAR_TYPES[0]) as usize].add(hole);
            }
        }
        Ok(PAR_TYPES
            .iter()
            .zip(pars.iter())
            .map(|(par, stats)| stats.to_par_aggregate(*par))
            .collect_vec())
    }

    pub fn best_hole(&self, rounds: &[Round]) -> Result<Option<u8>> {
        Ok(best_hole(&self.per_hole_performance(rounds)?))
    }

    pub fn worst_hole(&self, rounds: &[Round]) -> Result<Option<u8>> {
        Ok(worst_hole(&self.per_hole_performance(rounds)?))
    }

    /// Round level averages. Uses the stored round stats and falls back to hole detail.
    pub fn round_stats_summary(&self, rounds: &[Round]) -> Result<RoundStatsSummary> {
        if rounds.is_empty() {
            return Ok(RoundStatsSummary::default());
        }
        let mut fairways_hit = 0;
        let mut fairways_total = 0;
        let mut greens = Vec::new();
        let mut putts = Vec::new();
        let mut driving = Vec::new();

        for round in rounds {
            let holes = self.valid_holes(round)?;
            let stats = round.stats.clone().unwrap_or_default();

            match (stats.fairways_hit, stats.fairways_total) {
                (Some(hit), Some(total)) => {
                    fairways_hit += hit;
                    fairways_total += total;
                }
                _ => {
                    let attempted = holes.iter().filter(|(_, hole)| hole.fairway_attempted());
                    fairways_total += attempted.clone().count() as u32;
                    fairways_hit += attempted.filter(|(_, hole)| hole.fairway_hit).count() as u32;
                }
            }
            if let Some(gir) = stats
                .greens_in_regulation
                .or_else(|| (!holes.is_empty()).then(|| greens_from_holes(&holes)))
            {
                greens.push(gir as f64);
            }
            if let Some(total) = stats.total_putts.or_else(|| putts_from_holes(&holes)) {
                putts.push(total as f64);
            }
            if let Some(distance) = stats.average_driving_distance {
                driving.push(distance);
            }
        }

        let scores = rounds.iter().map(|round| round.total_score).collect_vec();
        Ok(RoundStatsSummary {
            rounds_played: rounds.len(),
            average_score: mean(scores.iter().map(|score| *score as f64)),
            best_score: scores.iter().min().copied(),
            worst_score: scores.iter().max().copied(),
            average_to_par: mean(rounds.iter().map(|round| round.score_to_par() as f64)),
            fairway_percentage: percentage(fairways_hit, fairways_total),
            average_greens_in_regulation: mean(greens),
            average_putts: mean(putts),
            average_driving_distance: mean(driving),
        })
    }

    /// Holes of `round` numbered from 1, with out of range pars handled per policy.
    fn valid_holes<'r>(&self, round: &'r Round) -> Result<Vec<(u8, &'r Hole)>> {
        if round.holes.len() > MAX_HOLES {
            warn!(
                "Round {} has {} holes, only the first {MAX_HOLES} are aggregated",
                round.id,
                round.holes.len()
            );
        }
        let mut holes = Vec::with_capacity(round.holes.len().min(MAX_HOLES));
        for (i, hole) in round.holes.iter().take(MAX_HOLES).enumerate() {
            let number = i as u8 + 1;
            if hole.has_valid_par() {
                holes.push((number, hole));
                continue;
            }
            match self.policy {
                InvalidParPolicy::Skip => warn!(
                    "Skipping hole {number} of round {}: par {} is not 3, 4 or 5",
                    round.id, hole.par
                ),
                InvalidParPolicy::Reject => {
                    return Err(Error::InvalidPar {
                        round_id: round.id.clone(),
                        hole: number,
                        par: hole.par,
                    })
                }
            }
        }
        Ok(holes)
    }
}

/// Lowest average to par, ties go to the lower hole number.
pub fn best_hole(holes: &[HoleAggregate]) -> Option<u8> {
    holes
        .iter()
        .filter_map(|hole| hole.average_to_par.map(|average| (hole.hole_number, average)))
        .min_by(|(_, a), (_, b)| a.total_cmp(b))
        .map(|(number, _)| number)
}

/// Highest average to par, ties go to the lower hole number.
pub fn worst_hole(holes: &[HoleAggregate]) -> Option<u8> {
    holes
        .iter()
        .rev()
        .filter_map(|hole| hole.average_to_par.map(|average| (hole.hole_number, average)))
        .max_by(|(_, a), (_, b)| a.total_cmp(b))
        .map(|(number, _)| number)
}

fn greens_from_holes(holes: &[(u8, &Hole)]) -> u32 {
    holes
        .iter()
        .filter(|(_, hole)| hole.green_in_regulation)
        .count() as u32
}

/// Only when every hole has its putts recorded.
fn putts_from_holes(holes: &[(u8, &Hole)]) -> Option<u32> {
    if holes.is_empty() {
        return None;
    }
    holes
        .iter()
        .map(|(_, hole)| hole.putts.map(u32::from))
        .sum()
}

fn mean(values: impl IntoIterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0u32), |(sum, count), value| (sum + value, count + 1));
    ratio(sum, count)
}
