pub use aggregate::{
    best_hole, score_distribution, score_to_par_trend, worst_hole, ScoringAggregator, MAX_HOLES,
};
pub use score::{format_to_par, ScoreType, ScoreTypeCounts};

mod aggregate;
mod hole;
mod score;
