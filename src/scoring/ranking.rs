use crate::domain::models::Participant;
use crate::errors::Result;

use super::time::FinishTime;

/// One row of a team leaderboard.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamStanding {
    pub position: usize,
    pub name: String,
    pub score: i64,
}

/// Podium medal for the top three finishers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Medal {
    Gold,
    Silver,
    Bronze,
}

impl Medal {
    pub fn for_position(position: usize) -> Option<Medal> {
        match position {
            1 => Some(Medal::Gold),
            2 => Some(Medal::Silver),
            3 => Some(Medal::Bronze),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Medal::Gold => "gold",
            Medal::Silver => "silver",
            Medal::Bronze => "bronze",
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            Medal::Gold => "🥇",
            Medal::Silver => "🥈",
            Medal::Bronze => "🥉",
        }
    }
}

/// One row of an individual leaderboard.
#[derive(Debug, Clone, PartialEq)]
pub struct TimedStanding {
    pub position: usize,
    pub name: String,
    /// The stored time text, verbatim.
    pub time: String,
    pub medal: Option<Medal>,
}

/// Individual leaderboard: finishers ordered by time, everyone else waiting
/// in `pending`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IndividualLeaderboard {
    pub finished: Vec<TimedStanding>,
    pub pending: Vec<String>,
}

/// Rank team participants by descending score. Equal scores keep their
/// original relative order. Pure view over the snapshot, recomputed on
/// every refresh.
pub fn team_leaderboard(participants: &[Participant]) -> Vec<TeamStanding> {
    let mut rows: Vec<&Participant> = participants.iter().collect();
    rows.sort_by(|a, b| score_of(b).cmp(&score_of(a)));

    rows.into_iter()
        .enumerate()
        .map(|(index, participant)| TeamStanding {
            position: index + 1,
            name: participant.name.clone(),
            score: score_of(participant),
        })
        .collect()
}

fn score_of(participant: &Participant) -> i64 {
    participant.score.unwrap_or(0)
}

/// Rank individual participants by ascending parsed time; participants
/// without a recorded time are listed as pending in their original order.
/// A malformed stored time is a validation error, never a silent misrank.
pub fn individual_leaderboard(participants: &[Participant]) -> Result<IndividualLeaderboard> {
    let mut finished: Vec<(&Participant, FinishTime)> = Vec::new();
    let mut pending = Vec::new();

    for participant in participants {
        match participant.recorded_time() {
            Some(text) => finished.push((participant, FinishTime::parse(text)?)),
            None => pending.push(participant.name.clone()),
        }
    }

    finished.sort_by(|a, b| a.1.cmp_seconds(&b.1));

    let finished = finished
        .into_iter()
        .enumerate()
        .map(|(index, (participant, _))| TimedStanding {
            position: index + 1,
            name: participant.name.clone(),
            time: participant.time.clone().unwrap_or_default(),
            medal: Medal::for_position(index + 1),
        })
        .collect();

    Ok(IndividualLeaderboard { finished, pending })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn team_order_is_descending_and_stable_among_equals() {
        let participants = vec![
            Participant::team("A", 5),
            Participant::team("B", 20),
            Participant::team("C", 20),
        ];

        let board = team_leaderboard(&participants);
        let order: Vec<(&str, i64)> = board
            .iter()
            .map(|row| (row.name.as_str(), row.score))
            .collect();
        assert_eq!(order, vec![("B", 20), ("C", 20), ("A", 5)]);
        assert_eq!(board[0].position, 1);
        assert_eq!(board[2].position, 3);
    }

    #[test]
    fn individual_order_ascends_and_pending_keeps_original_order() {
        let participants = vec![
            Participant::runner("Slow", Some("14s")),
            Participant::runner("Late", None),
            Participant::runner("Fast", Some("9.8s")),
            Participant::runner("Later", Some("")),
        ];

        let board = individual_leaderboard(&participants).expect("ranks");
        let order: Vec<&str> = board.finished.iter().map(|row| row.name.as_str()).collect();
        assert_eq!(order, vec!["Fast", "Slow"]);
        assert_eq!(board.finished[0].medal, Some(Medal::Gold));
        assert_eq!(board.finished[0].time, "9.8s");
        assert_eq!(board.pending, vec!["Late", "Later"]);
    }

    #[test]
    fn medals_cover_exactly_the_podium() {
        let participants: Vec<Participant> = (1..=4)
            .map(|i| Participant::runner(format!("R{i}"), Some(format!("{i}.0s").as_str())))
            .collect();

        let board = individual_leaderboard(&participants).expect("ranks");
        let medals: Vec<Option<Medal>> = board.finished.iter().map(|row| row.medal).collect();
        assert_eq!(
            medals,
            vec![
                Some(Medal::Gold),
                Some(Medal::Silver),
                Some(Medal::Bronze),
                None
            ]
        );
    }

    #[test]
    fn malformed_stored_time_is_surfaced_not_sorted() {
        let participants = vec![Participant::runner("X", Some("oops"))];
        assert!(individual_leaderboard(&participants).is_err());
    }
}
