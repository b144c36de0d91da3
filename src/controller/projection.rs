use chrono::{Local, NaiveDate};
use log::debug;

use crate::controller::handicap::{HandicapEngine, MINIMUM_DIFFERENTIALS};
use crate::dto::{chronological, Round};

/// Id of the synthetic round used for the projection.
pub const PROJECTED_ROUND_ID: &str = "projected";

/// Index the player would have after one excellent round played today.
pub fn project_potential_today(
    engine: &HandicapEngine,
    rounds: &[Round],
    current_index: Option<f64>,
) -> Option<f64> {
    project_potential(engine, rounds, current_index, Local::now().date_naive())
}

/// Recomputes the index with one synthetic round dated `today` added.
///
/// The synthetic round is played on the most recent round's course and tee box and scores
/// `max(par + floor(index) - 5, par - 3)`. `rounds` is left untouched.
pub fn project_potential(
    engine: &HandicapEngine,
    rounds: &[Round],
    current_index: Option<f64>,
    today: NaiveDate,
) -> Option<f64> {
    let current_index = current_index?;
    if rounds.len() < MINIMUM_DIFFERENTIALS {
        return None;
    }
    let latest = *chronological(rounds).last()?;

    let par = latest.course_par;
    let total_score = (par + current_index.floor() as i32 - 5).max(par - 3);
    let projected = Round {
        id: PROJECTED_ROUND_ID.to_string(),
        date: today,
        total_score,
        course_par: par,
        tee_box: latest.tee_box,
        holes: vec![],
        stats: None,
        course_name: latest.course_name.clone(),
    };
    debug!("Projecting potential index with a {total_score} on par {par}");

    let mut with_projection = rounds.to_vec();
    with_projection.push(projected);
    engine.compute_index(&with_projection)
}
