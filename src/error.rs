use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Unable to parse rounds: {0}")]
    Json(#[from] serde_json::Error),
    #[error("User: `{0}` not found")]
    UserNotFound(String),
    #[error("Round `{round_id}` has par {par} on hole {hole}. Expected 3, 4 or 5.")]
    InvalidPar { round_id: String, hole: u8, par: u8 },
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, Error>;
