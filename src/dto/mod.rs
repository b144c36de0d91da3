mod report;
mod rounds;

pub use report::*;
pub use rounds::{chronological, Hole, Round, RoundStats, TeeBox};
