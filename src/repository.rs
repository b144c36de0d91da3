use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use chrono::NaiveDate;
use itertools::Itertools;
use log::info;
use serde::Deserialize;

use crate::dto::Round;
use crate::error::{Error, Result};

/// Which of a player's rounds to fetch. Empty filter fetches everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoundFilter {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub course: Option<String>,
}

impl RoundFilter {
    pub fn matches(&self, round: &Round) -> bool {
        self.from.map_or(true, |from| round.date >= from)
            && self.to.map_or(true, |to| round.date <= to)
            && self.course.as_ref().map_or(true, |course| {
                round
                    .course_name
                    .as_ref()
                    .is_some_and(|name| name.eq_ignore_ascii_case(course))
            })
    }
}

/// Where rounds come from. Everything downstream works on the returned rounds only.
pub trait RoundsRepository {
    fn fetch_rounds(&self, user_id: &str, filter: &RoundFilter) -> Result<Vec<Round>>;
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryRounds {
    players: HashMap<String, Vec<Round>>,
}

impl InMemoryRounds {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, user_id: impl Into<String>, round: Round) {
        self.players.entry(user_id.into()).or_default().push(round);
    }
}

impl RoundsRepository for InMemoryRounds {
    fn fetch_rounds(&self, user_id: &str, filter: &RoundFilter) -> Result<Vec<Round>> {
        let rounds = self
            .players
            .get(user_id)
            .ok_or_else(|| Error::UserNotFound(user_id.to_string()))?;
        Ok(rounds
            .iter()
            .filter(|round| filter.matches(round))
            .cloned()
            .collect_vec())
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PlayerRounds {
    user_id: String,
    rounds: Vec<Round>,
}

/// Rounds exported to a JSON file: `[{ "userId": ..., "rounds": [...] }, ...]`.
#[derive(Debug, Clone)]
pub struct JsonFileRounds {
    path: PathBuf,
}

impl JsonFileRounds {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn load(&self) -> Result<InMemoryRounds> {
        let players: Vec<PlayerRounds> = serde_json::from_str(&fs::read_to_string(&self.path)?)?;
        let mut rounds = InMemoryRounds::new();
        for player in players {
            rounds
                .players
                .entry(player.user_id)
                .or_default()
                .extend(player.rounds);
        }
        Ok(rounds)
    }
}

impl RoundsRepository for JsonFileRounds {
    fn fetch_rounds(&self, user_id: &str, filter: &RoundFilter) -> Result<Vec<Round>> {
        let rounds = self.load()?.fetch_rounds(user_id, filter)?;
        info!(
            "Loaded {} rounds for {user_id} from {}",
            rounds.len(),
            self.path.display()
        );
        Ok(rounds)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::testing::{day, round_with_differential};
    use std::io::Write;

    fn named(offset: usize, course: &str) -> Round {
        Round {
            course_name: Some(course.to_string()),
            ..round_with_differential(offset, 10)
        }
    }

    fn repository() -> InMemoryRounds {
        let mut repository = InMemoryRounds::new();
        repository.insert("anna", named(0, "Links"));
        repository.insert("anna", named(5, "Parkland"));
        repository.insert("anna", named(9, "Links"));
        repository.insert("bo", named(1, "Links"));
        repository
    }

    #[test]
    fn unknown_user() {
        let result = repository().fetch_rounds("carl", &RoundFilter::default());
        assert!(matches!(result, Err(Error::UserNotFound(user)) if user == "carl"));
    }

    #[test]
    fn filters_by_date_and_course() {
        let repository = repository();
        assert_eq!(repository.fetch_rounds("anna", &RoundFilter::default()).unwrap().len(), 3);

        let window = RoundFilter {
            from: Some(day(1)),
            to: Some(day(9)),
            ..Default::default()
        };
        let ids = repository
            .fetch_rounds("anna", &window)
            .unwrap()
            .into_iter()
            .map(|round| round.id)
            .collect_vec();
        assert_eq!(ids, ["r5", "r9"]);

        let links = RoundFilter {
            course: Some("links".to_string()),
            ..Default::default()
        };
        assert_eq!(repository.fetch_rounds("anna", &links).unwrap().len(), 2);
    }

    #[test]
    fn reads_rounds_from_json_file() {
        let path =
            std::env::temp_dir().join(format!("handicap-rounds-{}.json", std::process::id()));
        let mut file = fs::File::create(&path).unwrap();
        write!(
            file,
            r#"[{{ "userId": "anna", "rounds": [
                {{ "id": "a", "date": "2024-05-01", "totalScore": 82, "coursePar": 72,
                   "teeBox": {{ "rating": 72.0, "slope": 113 }} }}
            ] }}]"#
        )
        .unwrap();

        let repository = JsonFileRounds::new(&path);
        let rounds = repository.fetch_rounds("anna", &RoundFilter::default()).unwrap();
        assert_eq!(rounds.len(), 1);
        assert_eq!(rounds[0].differential(), Some(10.0));
        assert!(matches!(
            repository.fetch_rounds("bo", &RoundFilter::default()),
            Err(Error::UserNotFound(_))
        ));
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn missing_file_is_io_error() {
        let repository = JsonFileRounds::new("/nonexistent/rounds.json");
        assert!(matches!(
            repository.fetch_rounds("anna", &RoundFilter::default()),
            Err(Error::Io(_))
        ));
    }
}
