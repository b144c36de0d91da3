use itertools::Itertools;
use schemars::JsonSchema;
use serde::Serialize;

use crate::dto::HandicapSnapshot;

/// Snapshots with an index needed before a trend is reported.
pub const TREND_LOOKBACK: usize = 5;
pub const DEFAULT_TREND_THRESHOLD: f64 = 0.5;

#[derive(Serialize, JsonSchema, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum Trend {
    /// The index dropped, a lower handicap is better.
    Improving,
    Declining,
    Stable,
}

pub fn classify_trend(history: &[HandicapSnapshot]) -> Trend {
    classify_trend_with_threshold(history, DEFAULT_TREND_THRESHOLD)
}

/// Compares the latest index with the oldest of the last [`TREND_LOOKBACK`] indexed snapshots.
/// Movements within `threshold` strokes are `Stable`, and so is a history whose latest snapshot
/// has no index.
pub fn classify_trend_with_threshold(history: &[HandicapSnapshot], threshold: f64) -> Trend {
    if history.last().map_or(true, |snapshot| snapshot.index.is_none()) {
        return Trend::Stable;
    }
    let indexes = history
        .iter()
        .filter_map(|snapshot| snapshot.index)
        .collect_vec();
    if indexes.len() < TREND_LOOKBACK {
        return Trend::Stable;
    }
    let current = indexes[indexes.len() - 1];
    let previous = indexes[indexes.len() - TREND_LOOKBACK];

    if current < previous - threshold {
        Trend::Improving
    } else if current > previous + threshold {
        Trend::Declining
    } else {
        Trend::Stable
    }
}
