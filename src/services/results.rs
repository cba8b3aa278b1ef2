use std::sync::Arc;

use anyhow::Result;
use colored::Colorize;

use crate::api::models::GameResultEntry;
use crate::api::results;
use crate::config::categories::get_category_filters;
use crate::domain::models::{GameCategory, GameType};
use crate::http::client::ApiClient;
use crate::pagination::{Page, paginate};

/// Parameters of one results-browsing request.
#[derive(Debug, Clone, Default)]
pub struct ResultsQuery {
    pub category: Option<GameCategory>,
    pub search: Option<String>,
    pub page: usize,
    pub page_size: usize,
}

/// Completed-results browsing, done the way the results view does it: fetch
/// the (optionally category-filtered) list, search it locally, slice one
/// page.
pub struct ResultsService {
    api: Arc<ApiClient>,
}

impl ResultsService {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    pub async fn browse(&self, query: &ResultsQuery) -> Result<Page<GameResultEntry>> {
        let entries = match query.category {
            Some(category) => results::list_by_category(&self.api, category).await?,
            None => results::list_all(&self.api).await?,
        };

        let filtered = filter_by_search(entries, query.search.as_deref());
        Ok(paginate(filtered, query.page.max(1), query.page_size))
    }

    pub async fn show(&self, query: &ResultsQuery) -> Result<()> {
        let page = self.browse(query).await?;

        render_filter_strip(query.category);
        if let Some(search) = query.search.as_deref() {
            println!(
                "Found {} result(s) for \"{search}\"",
                page.total_items.to_string().bold()
            );
        }

        if page.items.is_empty() {
            println!("{}", "No completed games yet".dimmed());
            return Ok(());
        }

        for entry in &page.items {
            render_result(entry);
        }
        render_page_strip(&page);

        Ok(())
    }

    pub async fn show_stats(&self) -> Result<()> {
        let stats = results::stats(&self.api).await?;

        println!("{}", "Festival statistics".bold());
        println!("   completed games:    {}", stats.total_games);
        println!("   team events:        {}", stats.team_events);
        println!("   individual events:  {}", stats.individual_events);
        println!("   total participants: {}", stats.total_participants);

        if !stats.by_category.is_empty() {
            let mut categories: Vec<_> = stats.by_category.iter().collect();
            categories.sort_by(|a, b| a.0.cmp(b.0));
            println!("   by category:");
            for (category, count) in categories {
                println!("      {category:<8} {count}");
            }
        }

        Ok(())
    }
}

/// Case-insensitive match on either name, like the search box.
fn filter_by_search(entries: Vec<GameResultEntry>, search: Option<&str>) -> Vec<GameResultEntry> {
    let Some(search) = search.map(str::to_lowercase).filter(|s| !s.is_empty()) else {
        return entries;
    };

    entries
        .into_iter()
        .filter(|entry| {
            entry.game.english_name.to_lowercase().contains(&search)
                || entry.game.local_name.to_lowercase().contains(&search)
        })
        .collect()
}

fn render_filter_strip(current: Option<GameCategory>) {
    let strip: Vec<String> = get_category_filters()
        .into_iter()
        .map(|filter| {
            if filter.category == current {
                format!("[{}]", filter.label).bold().to_string()
            } else {
                filter.label.dimmed().to_string()
            }
        })
        .collect();
    println!("{}\n", strip.join("  "));
}

fn render_result(entry: &GameResultEntry) {
    println!(
        "{} {} — {} · {}",
        entry.game.icon,
        entry.game.local_name.bold(),
        entry.date,
        entry.venue
    );

    match entry.game_type {
        GameType::Team => {
            if let Some(winner) = &entry.winner {
                println!("   🏆 {} ({})", winner.name.bold(), winner.score);
            }
            if let Some(runner_up) = &entry.runner_up {
                println!("   2nd {} ({})", runner_up.name, runner_up.score);
            }
        }
        GameType::Individual => {
            for row in entry.results.as_deref().unwrap_or_default() {
                let medal = match row.medal.as_deref() {
                    Some("gold") => "🥇",
                    Some("silver") => "🥈",
                    Some("bronze") => "🥉",
                    _ => "  ",
                };
                println!(
                    "   {} {:<22} {}",
                    medal,
                    row.name,
                    row.time.as_deref().unwrap_or("-")
                );
            }
        }
    }
    println!();
}

fn render_page_strip<T>(page: &Page<T>) {
    if page.total_pages <= 1 {
        return;
    }

    let mut parts = Vec::new();
    let mut previous = 0;
    for number in page.number_strip() {
        if number > previous + 1 {
            parts.push("…".to_string());
        }
        if number == page.page {
            parts.push(format!("[{number}]").bold().to_string());
        } else {
            parts.push(number.to_string());
        }
        previous = number;
    }

    println!("page {} of {}:  {}", page.page, page.total_pages, parts.join(" "));
}

#[cfg(test)]
mod tests {
    use crate::domain::models::{CurrentScores, Game};

    use super::*;

    fn entry(id: i64, local: &str, english: &str) -> GameResultEntry {
        GameResultEntry {
            id,
            scheduled_game_id: id,
            game: Game {
                id,
                icon: "🎯".to_string(),
                local_name: local.to_string(),
                english_name: english.to_string(),
                category: GameCategory::Fun,
                created_at: None,
            },
            date: "2026-08-01".to_string(),
            venue: "South Lawn".to_string(),
            game_type: GameType::Team,
            winner_data: None,
            current_scores: CurrentScores::default(),
            completed_at: None,
            winner: None,
            runner_up: None,
            results: None,
        }
    }

    #[test]
    fn search_matches_either_name_case_insensitively() {
        let entries = vec![
            entry(1, "Kabaddi", "Kabaddi"),
            entry(2, "Uriyadi", "Pot Breaking"),
            entry(3, "Vilayattu", "Sack Race"),
        ];

        let hits = filter_by_search(entries, Some("POT"));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 2);
    }

    #[test]
    fn empty_or_missing_search_keeps_everything() {
        let entries = vec![entry(1, "A", "A"), entry(2, "B", "B")];
        assert_eq!(filter_by_search(entries.clone(), None).len(), 2);
        assert_eq!(filter_by_search(entries, Some("")).len(), 2);
    }
}
