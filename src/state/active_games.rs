use std::sync::{Arc, Mutex};

use crate::domain::models::{ActiveGame, CurrentScores};

/// Explicitly-owned cache of the live active-game set plus the
/// selected-game pointer. The score store stays authoritative: every
/// successful response overwrites this copy wholesale, and local deltas are
/// never merged in.
#[derive(Debug, Default)]
pub struct ActiveGamesState {
    games: Vec<ActiveGame>,
    selected: Option<i64>,
}

/// Handle shared between the controller, the poller and the views.
pub type SharedActiveGames = Arc<Mutex<ActiveGamesState>>;

pub fn shared() -> SharedActiveGames {
    Arc::new(Mutex::new(ActiveGamesState::default()))
}

impl ActiveGamesState {
    /// Adopt a fresh server snapshot. A selection pointing at a game that
    /// is no longer active is dropped.
    pub fn replace_all(&mut self, games: Vec<ActiveGame>) {
        if let Some(id) = self.selected
            && !games.iter().any(|game| game.id == id)
        {
            self.selected = None;
        }
        self.games = games;
    }

    pub fn games(&self) -> &[ActiveGame] {
        &self.games
    }

    pub fn get(&self, game_id: i64) -> Option<&ActiveGame> {
        self.games.iter().find(|game| game.id == game_id)
    }

    pub fn contains(&self, game_id: i64) -> bool {
        self.get(game_id).is_some()
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    /// Point the detail view at one active game. Fails when the game is not
    /// in the active set.
    pub fn select(&mut self, game_id: i64) -> bool {
        if self.contains(game_id) {
            self.selected = Some(game_id);
            true
        } else {
            false
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// The selected game's current entry; the detail view reads through the
    /// pointer, so adopted scores show up here too.
    pub fn selected(&self) -> Option<&ActiveGame> {
        self.selected.and_then(|id| self.get(id))
    }

    /// Adopt the server's scores for one game. Returns false when the game
    /// is not in the active set.
    pub fn adopt_scores(&mut self, game_id: i64, scores: CurrentScores) -> bool {
        match self.games.iter_mut().find(|game| game.id == game_id) {
            Some(game) => {
                game.current_scores = scores;
                true
            }
            None => false,
        }
    }

    /// Remove a finished game. Clears a selection pointing at it.
    pub fn remove(&mut self, game_id: i64) -> bool {
        let before = self.games.len();
        self.games.retain(|game| game.id != game_id);
        if self.selected == Some(game_id) {
            self.selected = None;
        }
        self.games.len() != before
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::models::{Game, GameCategory, GameType, Participant};

    use super::*;

    fn active_game(id: i64, participants: Vec<Participant>) -> ActiveGame {
        ActiveGame {
            id,
            game: Game {
                id,
                icon: "🏏".to_string(),
                local_name: format!("Game {id}"),
                english_name: format!("Game {id}"),
                category: GameCategory::Main,
                created_at: None,
            },
            scheduled_time: "10:00".to_string(),
            date: "2026-08-01".to_string(),
            venue: "Main Ground".to_string(),
            game_type: GameType::Team,
            status: Default::default(),
            current_scores: CurrentScores { participants },
        }
    }

    #[test]
    fn adopt_scores_updates_the_selected_view_through_the_pointer() {
        let mut state = ActiveGamesState::default();
        state.replace_all(vec![active_game(1, vec![Participant::team("Red", 0)])]);
        assert!(state.select(1));

        let adopted = state.adopt_scores(
            1,
            CurrentScores {
                participants: vec![Participant::team("Red", 7)],
            },
        );
        assert!(adopted);

        let selected = state.selected().expect("selection intact");
        assert_eq!(selected.current_scores.participants[0].score, Some(7));
    }

    #[test]
    fn adopt_scores_for_unknown_game_changes_nothing() {
        let mut state = ActiveGamesState::default();
        state.replace_all(vec![active_game(1, vec![Participant::team("Red", 3)])]);

        assert!(!state.adopt_scores(99, CurrentScores::default()));
        assert_eq!(state.get(1).expect("still there").current_scores.participants.len(), 1);
    }

    #[test]
    fn remove_clears_matching_selection() {
        let mut state = ActiveGamesState::default();
        state.replace_all(vec![active_game(1, vec![]), active_game(2, vec![])]);
        state.select(2);

        assert!(state.remove(2));
        assert!(state.selected().is_none());
        assert_eq!(state.len(), 1);

        assert!(!state.remove(2));
    }

    #[test]
    fn replace_all_drops_stale_selection() {
        let mut state = ActiveGamesState::default();
        state.replace_all(vec![active_game(5, vec![])]);
        state.select(5);

        state.replace_all(vec![active_game(6, vec![])]);
        assert!(state.selected().is_none());

        state.select(6);
        state.replace_all(vec![active_game(6, vec![]), active_game(7, vec![])]);
        assert_eq!(state.selected().map(|g| g.id), Some(6));
    }
}
