use crate::dto::{Hole, HoleAggregate, ParTypeAggregate};
use crate::scoring::ScoreTypeCounts;

/// Running totals over every recorded attempt of a hole, or of every hole of one par.
#[derive(Debug, Clone, Default)]
pub(crate) struct HoleStats {
    attempts: u32,
    strokes: u32,
    to_par: i32,
    fairway_attempts: u32,
    fairway_hits: u32,
    greens_in_regulation: u32,
    putts: u32,
    holes_with_putts: u32,
    distribution: ScoreTypeCounts,
}

impl HoleStats {
    pub fn add(&mut self, hole: &Hole) {
        self.attempts += 1;
        self.strokes += hole.score as u32;
        self.to_par += hole.to_par();
        if hole.fairway_attempted() {
            self.fairway_attempts += 1;
            self.fairway_hits += hole.fairway_hit as u32;
        }
        self.greens_in_regulation += hole.green_in_regulation as u32;
        if let Some(putts) = hole.putts {
            self.putts += putts as u32;
            self.holes_with_putts += 1;
        }
        self.distribution.add(hole.score_type());
    }

    pub const fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn average_score(&self) -> Option<f64> {
        ratio(self.strokes as f64, self.attempts)
    }

    pub fn average_to_par(&self) -> Option<f64> {
        ratio(self.to_par as f64, self.attempts)
    }

    pub fn fairway_percentage(&self) -> Option<f64> {
        percentage(self.fairway_hits, self.fairway_attempts)
    }

    pub fn gir_percentage(&self) -> Option<f64> {
        percentage(self.greens_in_regulation, self.attempts)
    }

    pub fn average_putts(&self) -> Option<f64> {
        ratio(self.putts as f64, self.holes_with_putts)
    }

    pub fn to_hole_aggregate(&self, hole_number: u8) -> HoleAggregate {
        HoleAggregate {
            hole_number,
            attempts: self.attempts,
            average_score: self.average_score(),
            average_to_par: self.average_to_par(),
            fairway_percentage: self.fairway_percentage(),
            gir_percentage: self.gir_percentage(),
            average_putts: self.average_putts(),
            distribution: self.distribution,
        }
    }

    pub fn to_par_aggregate(&self, par: u8) -> ParTypeAggregate {
        ParTypeAggregate {
            par,
            attempts: self.attempts,
            average_score: self.average_score(),
            average_to_par: self.average_to_par(),
            fairway_percentage: self.fairway_percentage(),
            gir_percentage: self.gir_percentage(),
            average_putts: self.average_putts(),
            distribution: self.distribution,
        }
    }
}

/// `None` instead of dividing by zero.
pub(crate) fn ratio(numerator: f64, denominator: u32) -> Option<f64> {
    (denominator > 0).then(|| numerator / denominator as f64)
}

pub(crate) fn percentage(part: u32, whole: u32) -> Option<f64> {
    ratio(part as f64 * 100.0, whole)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn bogey_with_missed_fairway() {
        let mut stats = HoleStats::default();
        stats.add(&Hole::new(4, 5));
        assert_eq!(stats.fairway_attempts, 1);
        assert_eq!(stats.fairway_hits, 0);
        assert_eq!(stats.distribution.bogey, 1);
        assert_eq!(stats.fairway_percentage(), Some(0.0));
        assert_eq!(stats.average_to_par(), Some(1.0));
    }

    #[test]
    fn empty_stats_have_no_rates() {
        let stats = HoleStats::default();
        assert_eq!(stats.average_score(), None);
        assert_eq!(stats.fairway_percentage(), None);
        assert_eq!(stats.gir_percentage(), None);
        assert_eq!(stats.average_putts(), None);
    }

    #[test]
    fn par_three_has_no_fairway_rate() {
        let mut stats = HoleStats::default();
        stats.add(&Hole {
            green_in_regulation: true,
            ..Hole::new(3, 3)
        });
        assert_eq!(stats.fairway_percentage(), None);
        assert_eq!(stats.gir_percentage(), Some(100.0));
        assert_eq!(stats.average_putts(), None);
    }

    #[test]
    fn putts_average_over_holes_with_putts() {
        let mut stats = HoleStats::default();
        stats.add(&Hole {
            putts: Some(1),
            ..Hole::new(4, 4)
        });
        stats.add(&Hole {
            putts: Some(2),
            ..Hole::new(4, 4)
        });
        stats.add(&Hole::new(4, 4));
        assert_eq!(stats.average_putts(), Some(1.5));
    }
}
