use std::env;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// What to do with a hole whose par is not 3, 4 or 5.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum InvalidParPolicy {
    /// Leave the hole out of every aggregate.
    #[default]
    Skip,
    /// Fail the aggregation with [`Error::InvalidPar`].
    Reject,
}

impl FromStr for InvalidParPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "skip" => Ok(Self::Skip),
            "reject" => Ok(Self::Reject),
            other => Err(Error::InvalidConfig(format!(
                "unknown invalid par policy \"{other}\""
            ))),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct HandicapConfig {
    /// Multiply the averaged differentials by `bonus_multiplier`.
    pub apply_bonus_for_excellence: bool,
    pub bonus_multiplier: f64,
    /// Strokes the index has to move before a trend is reported.
    pub trend_threshold: f64,
    pub invalid_par_policy: InvalidParPolicy,
}

impl Default for HandicapConfig {
    fn default() -> Self {
        Self {
            apply_bonus_for_excellence: false,
            bonus_multiplier: 0.96,
            trend_threshold: 0.5,
            invalid_par_policy: InvalidParPolicy::Skip,
        }
    }
}

impl HandicapConfig {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let config: Self = serde_json::from_str(&fs::read_to_string(path)?)?;
        info!("Loaded handicap config from {}", path.display());
        config.validate()
    }

    /// Default config, or the file at `path`, with environment overrides applied on top.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.with_env_overrides()
    }

    pub fn with_env_overrides(mut self) -> Result<Self> {
        if let Some(apply) = try_load::<bool>("HANDICAP_BONUS_FOR_EXCELLENCE")? {
            self.apply_bonus_for_excellence = apply;
        }
        if let Some(threshold) = try_load::<f64>("HANDICAP_TREND_THRESHOLD")? {
            self.trend_threshold = threshold;
        }
        if let Some(policy) = try_load::<InvalidParPolicy>("HANDICAP_INVALID_PAR_POLICY")? {
            self.invalid_par_policy = policy;
        }
        self.validate()
    }

    pub fn validate(self) -> Result<Self> {
        if !self.trend_threshold.is_finite() || self.trend_threshold < 0.0 {
            return Err(Error::InvalidConfig(format!(
                "trend threshold must be a non-negative number, got {}",
                self.trend_threshold
            )));
        }
        if !(self.bonus_multiplier > 0.0 && self.bonus_multiplier <= 1.0) {
            return Err(Error::InvalidConfig(format!(
                "bonus multiplier must be in (0, 1], got {}",
                self.bonus_multiplier
            )));
        }
        Ok(self)
    }

    /// The factor applied to the averaged differentials.
    pub fn index_multiplier(&self) -> f64 {
        if self.apply_bonus_for_excellence {
            self.bonus_multiplier
        } else {
            1.0
        }
    }
}

fn try_load<T: FromStr>(key: &str) -> Result<Option<T>>
where
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(value) => value.trim().parse().map(Some).map_err(|e| {
            warn!("Invalid {key} value: {e}");
            Error::InvalidConfig(format!("{key}={value}: {e}"))
        }),
        Err(_) => Ok(None),
    }
}
