use chrono::NaiveDate;
use itertools::Itertools;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::controller::compute_differential;
use crate::scoring::ScoreType;

/// Course rating and slope of the tee box a round was played from.
#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone, Copy, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TeeBox {
    pub rating: Option<f64>,
    pub slope: Option<i32>,
}

impl TeeBox {
    pub fn new(rating: f64, slope: i32) -> Self {
        Self {
            rating: Some(rating),
            slope: Some(slope),
        }
    }
}

/// Round level statistics as stored alongside the round, all optional.
#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RoundStats {
    pub fairways_hit: Option<u32>,
    pub fairways_total: Option<u32>,
    pub greens_in_regulation: Option<u32>,
    pub total_putts: Option<u32>,
    pub average_driving_distance: Option<f64>,
}

#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Hole {
    pub par: u8,
    pub score: u8,
    #[serde(default)]
    pub fairway_hit: bool,
    #[serde(default)]
    pub green_in_regulation: bool,
    #[serde(default)]
    pub putts: Option<u8>,
}

impl Hole {
    pub fn new(par: u8, score: u8) -> Self {
        Self {
            par,
            score,
            fairway_hit: false,
            green_in_regulation: false,
            putts: None,
        }
    }

    pub const fn has_valid_par(&self) -> bool {
        matches!(self.par, 3..=5)
    }

    pub const fn to_par(&self) -> i32 {
        self.score as i32 - self.par as i32
    }

    /// Fairways only count on par 4s and 5s.
    pub const fn fairway_attempted(&self) -> bool {
        self.par >= 4
    }

    pub const fn score_type(&self) -> ScoreType {
        ScoreType::new(self.score as i32, self.par as i32)
    }
}

#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Round {
    pub id: String,
    pub date: NaiveDate,
    pub total_score: i32,
    pub course_par: i32,
    #[serde(default)]
    pub tee_box: Option<TeeBox>,
    #[serde(default)]
    pub holes: Vec<Hole>,
    #[serde(default)]
    pub stats: Option<RoundStats>,
    #[serde(default)]
    pub course_name: Option<String>,
}

impl Round {
    pub fn new(id: impl Into<String>, date: NaiveDate, total_score: i32, course_par: i32) -> Self {
        Self {
            id: id.into(),
            date,
            total_score,
            course_par,
            tee_box: None,
            holes: vec![],
            stats: None,
            course_name: None,
        }
    }

    pub fn with_tee_box(mut self, rating: f64, slope: i32) -> Self {
        self.tee_box = Some(TeeBox::new(rating, slope));
        self
    }

    pub fn with_holes(mut self, holes: Vec<Hole>) -> Self {
        self.holes = holes;
        self
    }

    pub const fn score_to_par(&self) -> i32 {
        self.total_score - self.course_par
    }

    /// `None` when the tee box is missing or cannot be rated.
    pub fn differential(&self) -> Option<f64> {
        let tee_box = self.tee_box?;
        compute_differential(self.total_score, tee_box.rating, tee_box.slope)
    }

    pub fn is_ratable(&self) -> bool {
        self.differential().is_some()
    }
}

/// Rounds ordered by date. Rounds played on the same day keep the order they arrived in.
pub fn chronological(rounds: &[Round]) -> Vec<&Round> {
    rounds.iter().sorted_by_key(|round| round.date).collect_vec()
}

#[cfg(test)]
mod test {
    use super::*;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, day).unwrap()
    }

    #[test]
    fn rounds_on_the_same_day_keep_arrival_order() {
        let rounds = vec![
            Round::new("late", date(3), 80, 72),
            Round::new("first", date(1), 85, 72),
            Round::new("second", date(1), 90, 72),
        ];
        let ids = chronological(&rounds)
            .into_iter()
            .map(|round| round.id.as_str())
            .collect_vec();
        assert_eq!(ids, ["first", "second", "late"]);
    }

    #[test]
    fn differential_needs_tee_box() {
        let round = Round::new("a", date(1), 90, 72);
        assert_eq!(round.differential(), None);
        assert!(!round.is_ratable());
        let round = round.with_tee_box(72.0, 113);
        assert_eq!(round.score_to_par(), 18);
        assert_eq!(round.differential(), Some(18.0));
    }

    #[test]
    fn deserializes_camel_case_records() {
        let json = r#"{
            "id": "r1",
            "date": "2024-05-01",
            "totalScore": 88,
            "coursePar": 72,
            "teeBox": { "rating": 71.2, "slope": 128 },
            "holes": [{
                "par": 4, "score": 5, "fairwayHit": false, "greenInRegulation": false, "putts": 2
            }]
        }"#;
        let round: Round = serde_json::from_str(json).unwrap();
        assert_eq!(round.tee_box, Some(TeeBox::new(71.2, 128)));
        assert_eq!(round.holes[0].putts, Some(2));
        assert!(round.stats.is_none());
    }

    #[test]
    fn fairways_only_on_long_holes() {
        assert!(!Hole::new(3, 3).fairway_attempted());
        assert!(Hole::new(4, 3).fairway_attempted());
        assert!(!Hole::new(6, 6).has_valid_par());
    }
}
