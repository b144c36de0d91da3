use chrono::NaiveDate;
use log::info;

use crate::config::HandicapConfig;
use crate::controller::handicap::HandicapEngine;
use crate::controller::projection::project_potential;
use crate::controller::trend::classify_trend_with_threshold;
use crate::dto::{HandicapReport, Round};
use crate::error::Result;
use crate::scoring::ScoringAggregator;

/// Builds the full [`HandicapReport`] for one player's rounds.
#[derive(Debug, Clone, Copy)]
pub struct HandicapDashboard {
    engine: HandicapEngine,
    aggregator: ScoringAggregator,
    trend_threshold: f64,
}

impl Default for HandicapDashboard {
    fn default() -> Self {
        Self::new(&HandicapConfig::default())
    }
}

impl HandicapDashboard {
    pub fn new(config: &HandicapConfig) -> Self {
        Self {
            engine: HandicapEngine::new(config),
            aggregator: ScoringAggregator::new(config),
            trend_threshold: config.trend_threshold,
        }
    }

    pub fn engine(&self) -> &HandicapEngine {
        &self.engine
    }

    pub fn build(&self, rounds: &[Round], today: NaiveDate) -> Result<HandicapReport> {
        let history = self.engine.compute_history(rounds);
        let current_index = history.last().and_then(|snapshot| snapshot.index);
        let low_index = history
            .iter()
            .filter_map(|snapshot| snapshot.index)
            .min_by(f64::total_cmp);
        let report = HandicapReport {
            current_index,
            low_index,
            trend: classify_trend_with_threshold(&history, self.trend_threshold),
            potential_index: project_potential(&self.engine, rounds, current_index, today),
            window: self.engine.index_breakdown(rounds),
            scoring: self.aggregator.summarize(rounds)?,
            history,
        };
        info!(
            "Built handicap report over {} rounds, index {:?}",
            rounds.len(),
            report.current_index
        );
        Ok(report)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::config::InvalidParPolicy;
    use crate::controller::Trend;
    use crate::dto::Hole;
    use crate::error::Error;
    use crate::testing::{day, fake_rounds, round_with_differential, rounds_with_differentials};

    #[test]
    fn empty_rounds_give_an_empty_report() {
        let report = HandicapDashboard::default().build(&[], day(0)).unwrap();
        assert_eq!(report.current_index, None);
        assert_eq!(report.low_index, None);
        assert_eq!(report.trend, Trend::Stable);
        assert_eq!(report.potential_index, None);
        assert!(report.history.is_empty());
        assert!(report.scoring.score_distribution.is_empty());
    }

    #[test]
    fn improving_player() {
        let rounds = rounds_with_differentials(&[20, 20, 20, 18, 16, 14, 12, 10]);
        let report = HandicapDashboard::default().build(&rounds, day(30)).unwrap();
        // Eight rounds count the best two: (10 + 12) / 2.
        assert_eq!(report.current_index, Some(11.0));
        assert_eq!(report.low_index, Some(11.0));
        assert_eq!(report.trend, Trend::Improving);
        assert_eq!(report.history.len(), 8);
        assert_eq!(report.window.iter().filter(|entry| entry.counted).count(), 2);
        // 72 + 11 - 5 = 78 is a 6, nine rounds count the best three.
        let potential = report.potential_index.unwrap();
        assert!((potential - 28.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn trend_is_stable_once_the_index_is_gone() {
        let mut rounds = rounds_with_differentials(&[20, 20, 20, 18, 16, 14, 12, 10]);
        rounds.extend((8..26).map(|offset| Round {
            tee_box: None,
            ..round_with_differential(offset, 0)
        }));
        let report = HandicapDashboard::default().build(&rounds, day(30)).unwrap();
        assert_eq!(report.current_index, None);
        assert_eq!(report.trend, Trend::Stable);
        assert_eq!(report.potential_index, None);
        // Once fewer rounds are rated only the single best counts.
        assert_eq!(report.low_index, Some(10.0));
    }

    #[test]
    fn report_matches_engine() {
        let rounds = fake_rounds(17, 26);
        let dashboard = HandicapDashboard::default();
        let report = dashboard.build(&rounds, day(40)).unwrap();
        assert_eq!(report.current_index, dashboard.engine().compute_index(&rounds));
        assert_eq!(report.window.len(), 20);
        assert_eq!(report.scoring.round_stats.rounds_played, 26);
    }

    #[test]
    fn rejecting_config_fails_the_report() {
        let mut rounds = rounds_with_differentials(&[10, 12, 8]);
        rounds[0].holes = vec![Hole::new(7, 7)];
        let config = HandicapConfig {
            invalid_par_policy: InvalidParPolicy::Reject,
            ..Default::default()
        };
        let report = HandicapDashboard::new(&config).build(&rounds, day(5));
        assert!(matches!(report, Err(Error::InvalidPar { .. })));
    }

    #[test]
    fn report_serializes_camel_case() {
        let rounds = rounds_with_differentials(&[10, 12, 8]);
        let report = HandicapDashboard::default().build(&rounds, day(5)).unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["currentIndex"], 8.0);
        assert_eq!(json["trend"], "stable");
        assert_eq!(json["history"][0]["roundCountAtTime"], 1);
        assert!(json["history"][0]["index"].is_null());
    }
}
