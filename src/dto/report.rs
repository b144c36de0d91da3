use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::Serialize;

use crate::controller::Trend;
use crate::scoring::ScoreTypeCounts;

/// Handicap index as it stood right after a round was played.
#[derive(Serialize, JsonSchema, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HandicapSnapshot {
    pub date: NaiveDate,
    pub index: Option<f64>,
    pub round_count_at_time: usize,
}

/// A differential from the current window, `counted` when it is one of the best ones averaged.
#[derive(Serialize, JsonSchema, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WindowDifferential {
    pub round_id: String,
    pub date: NaiveDate,
    pub differential: f64,
    pub counted: bool,
}

#[derive(Serialize, JsonSchema, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScoreToParPoint {
    pub date: NaiveDate,
    pub score: i32,
    pub par: i32,
    pub score_to_par: i32,
}

#[derive(Serialize, JsonSchema, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DistributionBucket {
    pub score_to_par: i32,
    pub count: usize,
    pub percentage: f64,
}

#[derive(Serialize, JsonSchema, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HoleAggregate {
    pub hole_number: u8,
    pub attempts: u32,
    pub average_score: Option<f64>,
    pub average_to_par: Option<f64>,
    pub fairway_percentage: Option<f64>,
    pub gir_percentage: Option<f64>,
    pub average_putts: Option<f64>,
    pub distribution: ScoreTypeCounts,
}

#[derive(Serialize, JsonSchema, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ParTypeAggregate {
    pub par: u8,
    pub attempts: u32,
    pub average_score: Option<f64>,
    pub average_to_par: Option<f64>,
    pub fairway_percentage: Option<f64>,
    pub gir_percentage: Option<f64>,
    pub average_putts: Option<f64>,
    pub distribution: ScoreTypeCounts,
}

#[derive(Serialize, JsonSchema, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RoundStatsSummary {
    pub rounds_played: usize,
    pub average_score: Option<f64>,
    pub best_score: Option<i32>,
    pub worst_score: Option<i32>,
    pub average_to_par: Option<f64>,
    pub fairway_percentage: Option<f64>,
    pub average_greens_in_regulation: Option<f64>,
    pub average_putts: Option<f64>,
    pub average_driving_distance: Option<f64>,
}

#[derive(Serialize, JsonSchema, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScoringSummary {
    pub score_to_par_trend: Vec<ScoreToParPoint>,
    pub score_distribution: Vec<DistributionBucket>,
    pub per_hole_performance: Vec<HoleAggregate>,
    pub per_par_type_stats: Vec<ParTypeAggregate>,
    pub best_hole: Option<u8>,
    pub worst_hole: Option<u8>,
    pub round_stats: RoundStatsSummary,
}

/// Everything a handicap dashboard shows for one player.
#[derive(Serialize, JsonSchema, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HandicapReport {
    pub current_index: Option<f64>,
    pub low_index: Option<f64>,
    pub trend: Trend,
    pub potential_index: Option<f64>,
    pub history: Vec<HandicapSnapshot>,
    pub window: Vec<WindowDifferential>,
    pub scoring: ScoringSummary,
}
