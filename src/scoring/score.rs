use schemars::JsonSchema;
use serde::Serialize;

#[derive(Serialize, JsonSchema, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum ScoreType {
    EagleOrBetter,
    Birdie,
    Par,
    Bogey,
    DoubleBogey,
    TripleOrWorse,
}

impl ScoreType {
    pub const fn new(strokes: i32, par: i32) -> Self {
        match strokes - par {
            ..=-2 => Self::EagleOrBetter,
            -1 => Self::Birdie,
            0 => Self::Par,
            1 => Self::Bogey,
            2 => Self::DoubleBogey,
            3.. => Self::TripleOrWorse,
        }
    }

    pub const fn label(&self) -> &'static str {
        use ScoreType::*;
        match self {
            EagleOrBetter => "eagle or better",
            Birdie => "birdie",
            Par => "par",
            Bogey => "bogey",
            DoubleBogey => "double bogey",
            TripleOrWorse => "triple or worse",
        }
    }
}

/// How many holes fell into each [`ScoreType`].
#[derive(Serialize, JsonSchema, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ScoreTypeCounts {
    pub eagle_or_better: u32,
    pub birdie: u32,
    pub par: u32,
    pub bogey: u32,
    pub double_bogey: u32,
    pub triple_or_worse: u32,
}

impl ScoreTypeCounts {
    pub fn add(&mut self, score_type: ScoreType) {
        use ScoreType::*;
        let counter = match score_type {
            EagleOrBetter => &mut self.eagle_or_better,
            Birdie => &mut self.birdie,
            Par => &mut self.par,
            Bogey => &mut self.bogey,
            DoubleBogey => &mut self.double_bogey,
            TripleOrWorse => &mut self.triple_or_worse,
        };
        *counter += 1;
    }

    /// The score type recorded most often, the better one on a tie.
    pub fn most_common(&self) -> Option<ScoreType> {
        use ScoreType::*;
        [
            (EagleOrBetter, self.eagle_or_better),
            (Birdie, self.birdie),
            (Par, self.par),
            (Bogey, self.bogey),
            (DoubleBogey, self.double_bogey),
            (TripleOrWorse, self.triple_or_worse),
        ]
        .into_iter()
        .rev()
        .filter(|(_, count)| *count > 0)
        .max_by_key(|(_, count)| *count)
        .map(|(score_type, _)| score_type)
    }

    pub const fn total(&self) -> u32 {
        self.eagle_or_better
            + self.birdie
            + self.par
            + self.bogey
            + self.double_bogey
            + self.triple_or_worse
    }
}

/// Score relative to par the way a scorecard shows it: `E`, `+3`, `-2`.
pub fn format_to_par(score: i32) -> String {
    use std::cmp::Ordering;

    match score.cmp(&0) {
        Ordering::Less => format!("{}", score),
        Ordering::Equal => "E".to_string(),
        Ordering::Greater => format!("+{}", score),
    }
}
