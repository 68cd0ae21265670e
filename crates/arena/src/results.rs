//! Result aggregation, persistence, and reporting.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Result of a single game.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameResult {
    Win,
    Loss,
    Draw,
}

/// Result of a match (multiple games) from the first player's perspective.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchResult {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
}

impl MatchResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, result: GameResult) {
        match result {
            GameResult::Win => self.wins += 1,
            GameResult::Loss => self.losses += 1,
            GameResult::Draw => self.draws += 1,
        }
    }

    pub fn total_games(&self) -> u32 {
        self.wins + self.losses + self.draws
    }

    /// Score in [0, 1]: 1 per win, 0.5 per draw.
    pub fn score(&self) -> f64 {
        let total = self.total_games() as f64;
        if total == 0.0 {
            return 0.5;
        }
        (self.wins as f64 + 0.5 * self.draws as f64) / total
    }

    /// The same result seen from the other player.
    pub fn flipped(&self) -> MatchResult {
        MatchResult {
            wins: self.losses,
            losses: self.wins,
            draws: self.draws,
        }
    }
}

/// A single pairing inside an arena run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchEntry {
    pub heuristic_a: String,
    pub heuristic_b: String,
    pub result: MatchResult,
}

/// Settings a run was produced with, stored alongside the results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSettings {
    pub games_per_match: u32,
    pub search_depth: u8,
    pub random_opening_plies: u32,
}

/// Complete results of an arena run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArenaResults {
    /// Name/description of the run
    pub name: String,
    /// Participating heuristics
    pub participants: Vec<String>,
    /// All match results
    pub matches: Vec<MatchEntry>,
    /// Configuration used
    pub settings: RunSettings,
}

impl ArenaResults {
    pub fn new(name: &str, participants: Vec<String>, settings: RunSettings) -> Self {
        Self {
            name: name.to_string(),
            participants,
            matches: Vec::new(),
            settings,
        }
    }

    pub fn add_match(&mut self, heuristic_a: &str, heuristic_b: &str, result: MatchResult) {
        self.matches.push(MatchEntry {
            heuristic_a: heuristic_a.to_string(),
            heuristic_b: heuristic_b.to_string(),
            result,
        });
    }

    /// Wins per heuristic across every pairing (draws count for neither).
    pub fn win_tally(&self) -> BTreeMap<String, u32> {
        let mut tally: BTreeMap<String, u32> = BTreeMap::new();
        for name in &self.participants {
            tally.insert(name.clone(), 0);
        }
        for entry in &self.matches {
            *tally.entry(entry.heuristic_a.clone()).or_default() += entry.result.wins;
            *tally.entry(entry.heuristic_b.clone()).or_default() += entry.result.losses;
        }
        tally
    }

    /// Save results to a JSON file.
    pub fn save(&self, path: &Path) -> Result<(), String> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize: {}", e))?;
        std::fs::write(path, json).map_err(|e| format!("Failed to write: {}", e))
    }

    /// Load results from a JSON file.
    pub fn load(path: &Path) -> Result<Self, String> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| format!("Failed to read: {}", e))?;
        serde_json::from_str(&contents).map_err(|e| format!("Failed to parse: {}", e))
    }

    /// Generate a text report.
    pub fn generate_report(&self) -> String {
        let mut report = String::new();
        report.push_str(&format!("=== Arena: {} ===\n\n", self.name));
        report.push_str(&format!("Participants: {}\n", self.participants.join(", ")));
        report.push_str(&format!(
            "Settings: {} games/match, depth {}\n\n",
            self.settings.games_per_match, self.settings.search_depth
        ));

        report.push_str("Matches:\n");
        report.push_str(&format!(
            "{:<12} vs {:<12} {:>4}-{:<4}-{:<4}\n",
            "Heuristic A", "Heuristic B", "W", "L", "D"
        ));
        report.push_str(&"-".repeat(44));
        report.push('\n');
        for entry in &self.matches {
            report.push_str(&format!(
                "{:<12} vs {:<12} {:>4}-{:<4}-{:<4}\n",
                entry.heuristic_a,
                entry.heuristic_b,
                entry.result.wins,
                entry.result.losses,
                entry.result.draws
            ));
        }

        report.push_str("\nTotal wins:\n");
        let mut tally: Vec<_> = self.win_tally().into_iter().collect();
        tally.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        for (name, wins) in tally {
            report.push_str(&format!("{:<12} {}\n", name, wins));
        }

        report
    }

    pub fn print_report(&self) {
        println!("{}", self.generate_report());
    }
}

#[cfg(test)]
#[path = "results_tests.rs"]
mod results_tests;
