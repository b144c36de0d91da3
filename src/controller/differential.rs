/// Slope of a course of standard difficulty.
pub const STANDARD_SLOPE: f64 = 113.0;

/// Score differential of a single round, `((score - rating) * 113) / slope`.
///
/// Returns `None` when the rating or slope is missing or not positive, such a round can't be rated.
/// The value is not rounded.
pub fn compute_differential(
    total_score: i32,
    course_rating: Option<f64>,
    slope_rating: Option<i32>,
) -> Option<f64> {
    let rating = course_rating.filter(|rating| *rating > 0.0)?;
    let slope = slope_rating.filter(|slope| *slope > 0)?;
    Some((total_score as f64 - rating) * STANDARD_SLOPE / slope as f64)
}
