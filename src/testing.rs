//! Round fixtures shared by the unit tests.

use chrono::{Days, NaiveDate};
use fake::{Dummy, Fake, Faker};
use itertools::Itertools;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::dto::{Hole, Round};

#[derive(Debug, Dummy)]
pub struct TestingRound {
    #[dummy(faker = "(Faker, 18)")]
    holes: Vec<TestingHole>,
    #[dummy(faker = "670..760")]
    rating_tenths: i32,
    #[dummy(faker = "55..156")]
    slope: i32,
}

#[derive(Debug, Dummy)]
pub struct TestingHole {
    #[dummy(faker = "3..6")]
    par: u8,
    #[dummy(faker = "1..10")]
    score: u8,
    fairway_hit: bool,
    green_in_regulation: bool,
    #[dummy(faker = "0..5")]
    putts: u8,
}

impl From<TestingHole> for Hole {
    fn from(value: TestingHole) -> Self {
        Self {
            par: value.par,
            score: value.score,
            fairway_hit: value.fairway_hit && value.par >= 4,
            green_in_regulation: value.green_in_regulation,
            putts: Some(value.putts),
        }
    }
}

pub fn start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
}

pub fn day(offset: usize) -> NaiveDate {
    start().checked_add_days(Days::new(offset as u64)).unwrap()
}

/// Par 72 round on a 72.0/113 tee box, so the differential equals the score to par.
pub fn round_with_differential(offset: usize, differential: i32) -> Round {
    Round::new(format!("r{offset}"), day(offset), 72 + differential, 72).with_tee_box(72.0, 113)
}

pub fn rounds_with_differentials(differentials: &[i32]) -> Vec<Round> {
    differentials
        .iter()
        .enumerate()
        .map(|(offset, differential)| round_with_differential(offset, *differential))
        .collect_vec()
}

/// Full 18 hole rounds, one per day, generated from `seed`.
pub fn fake_rounds(seed: u64, count: usize) -> Vec<Round> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|offset| {
            let fake: TestingRound = Faker.fake_with_rng(&mut rng);
            let holes = fake.holes.into_iter().map(Hole::from).collect_vec();
            let total_score = holes.iter().map(|hole| hole.score as i32).sum();
            let course_par = holes.iter().map(|hole| hole.par as i32).sum();
            Round::new(format!("fake{offset}"), day(offset), total_score, course_par)
                .with_tee_box(fake.rating_tenths as f64 / 10.0, fake.slope)
                .with_holes(holes)
        })
        .collect_vec()
}
