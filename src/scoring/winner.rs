use std::cmp::Ordering;

use log::warn;

use crate::domain::models::{GameType, Participant};
use crate::errors::{Error, Result};

use super::time::FinishTime;

/// The outcome submitted to the score store's declare-winner operation.
#[derive(Debug, Clone, PartialEq)]
pub struct Winner {
    pub name: String,
    pub score: Option<i64>,
    pub time: Option<String>,
}

/// Pick the winner from one game's current participant list.
///
/// Ties resolve to the first-listed participant; organizers get a warning in
/// the log rather than a changed outcome, since the store's winner record
/// holds exactly one name.
pub fn resolve_winner(game_type: GameType, participants: &[Participant]) -> Result<Winner> {
    match game_type {
        GameType::Team => resolve_team(participants),
        GameType::Individual => resolve_individual(participants),
    }
}

/// Team events: highest cumulative score wins, first occurrence on a tie.
fn resolve_team(participants: &[Participant]) -> Result<Winner> {
    let mut best: Option<(&Participant, i64)> = None;
    let mut tied = false;

    for participant in participants {
        let score = participant.score.unwrap_or(0);
        match best {
            None => best = Some((participant, score)),
            Some((_, top)) if score > top => {
                best = Some((participant, score));
                tied = false;
            }
            Some((_, top)) if score == top => tied = true,
            Some(_) => {}
        }
    }

    let (winner, score) =
        best.ok_or_else(|| Error::validation("No participants to pick a winner from"))?;

    if tied {
        warn!(
            "Score tie at {score}; declaring first-listed participant \"{}\"",
            winner.name
        );
    }

    Ok(Winner {
        name: winner.name.clone(),
        score: Some(score),
        time: None,
    })
}

/// Individual events: lowest recorded time wins. Participants without a
/// time have not finished and sit out the comparison entirely.
fn resolve_individual(participants: &[Participant]) -> Result<Winner> {
    let mut best: Option<(&Participant, FinishTime)> = None;
    let mut tied = false;

    for participant in participants {
        let Some(text) = participant.recorded_time() else {
            continue;
        };
        let time = FinishTime::parse(text)?;

        match &best {
            None => best = Some((participant, time)),
            Some((_, fastest)) => match time.cmp_seconds(fastest) {
                Ordering::Less => {
                    best = Some((participant, time));
                    tied = false;
                }
                Ordering::Equal => tied = true,
                Ordering::Greater => {}
            },
        }
    }

    let (winner, time) =
        best.ok_or_else(|| Error::validation("At least one participant must have a time"))?;

    if tied {
        warn!(
            "Time tie at {time}; declaring first-listed participant \"{}\"",
            winner.name
        );
    }

    Ok(Winner {
        name: winner.name.clone(),
        score: None,
        time: winner.time.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn team_winner_is_the_first_occurrence_of_the_maximum() {
        let participants = vec![
            Participant::team("A", 10),
            Participant::team("B", 15),
            Participant::team("C", 15),
        ];

        let winner = resolve_winner(GameType::Team, &participants).expect("resolves");
        assert_eq!(winner.name, "B");
        assert_eq!(winner.score, Some(15));
        assert_eq!(winner.time, None);
    }

    #[test]
    fn team_resolution_needs_participants() {
        let err = resolve_winner(GameType::Team, &[]).expect_err("empty list");
        assert!(err.is_validation());
    }

    #[test]
    fn individual_winner_has_the_lowest_time_and_unfinished_runners_sit_out() {
        let participants = vec![
            Participant::runner("X", Some("11.2s")),
            Participant::runner("Y", Some("10.9s")),
            Participant::runner("Z", None),
        ];

        let winner = resolve_winner(GameType::Individual, &participants).expect("resolves");
        assert_eq!(winner.name, "Y");
        assert_eq!(winner.time.as_deref(), Some("10.9s"));
        assert_eq!(winner.score, None);
    }

    #[test]
    fn individual_resolution_fails_when_nobody_has_finished() {
        let participants = vec![
            Participant::runner("X", None),
            Participant::runner("Y", Some("")),
        ];

        let err = resolve_winner(GameType::Individual, &participants).expect_err("no times");
        assert!(err.is_validation());
    }

    #[test]
    fn individual_resolution_rejects_malformed_times_instead_of_misranking() {
        let participants = vec![
            Participant::runner("X", Some("12.5s")),
            Participant::runner("Y", Some("quick")),
        ];

        let err = resolve_winner(GameType::Individual, &participants).expect_err("bad time");
        assert!(err.is_validation());
    }

    #[test]
    fn equal_times_resolve_to_the_first_listed_runner() {
        let participants = vec![
            Participant::runner("X", Some("10.9s")),
            Participant::runner("Y", Some("10.9")),
        ];

        let winner = resolve_winner(GameType::Individual, &participants).expect("resolves");
        assert_eq!(winner.name, "X");
    }
}
