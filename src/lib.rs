//! Handicap index, trend and scoring statistics computed from a golfer's recorded rounds.
//!
//! Everything here is pure computation over rounds already fetched through a
//! [`repository::RoundsRepository`].

pub mod config;
pub mod controller;
pub mod dto;
pub mod error;
pub mod repository;
pub mod scoring;

#[cfg(test)]
mod testing;

pub use config::{HandicapConfig, InvalidParPolicy};
pub use controller::{
    classify_trend, compute_differential, counting_differentials, project_potential,
    project_potential_today, HandicapDashboard, HandicapEngine, Trend,
};
pub use dto::{HandicapReport, HandicapSnapshot, Hole, Round, RoundStats, TeeBox};
pub use error::{Error, Result};
pub use repository::{InMemoryRounds, JsonFileRounds, RoundFilter, RoundsRepository};
pub use scoring::ScoringAggregator;
