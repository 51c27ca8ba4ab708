//! High-score persistence.
//!
//! A top-10 table kept strictly sorted by descending score and overwritten
//! whole on every save. Load failures of any kind start the table empty;
//! nothing here is ever fatal to the game.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Utc;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

pub const MAX_ENTRIES: usize = 10;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub score: u32,
    /// Whole kilometers.
    pub distance: u32,
    /// UTC epoch seconds at the moment the run ended.
    pub date: i64,
}

pub struct ScoreStore {
    path: PathBuf,
    entries: Vec<ScoreEntry>,
}

impl ScoreStore {
    /// Open the store at the platform data directory, falling back to the
    /// working directory when no home is available.
    pub fn open_default() -> Self {
        let path = ProjectDirs::from("", "", "road-fighter")
            .map(|dirs| dirs.data_dir().join("high_scores.json"))
            .unwrap_or_else(|| PathBuf::from("high_scores.json"));
        Self::at(path)
    }

    /// Open the store at an explicit path (tests point this at a temp file).
    pub fn at(path: PathBuf) -> Self {
        let entries = load_entries(&path);
        ScoreStore { path, entries }
    }

    pub fn entries(&self) -> &[ScoreEntry] {
        &self.entries
    }

    /// Highest stored score, 0 when the table is empty.
    pub fn best(&self) -> u32 {
        self.entries.first().map(|e| e.score).unwrap_or(0)
    }

    /// Would this score make the table?
    pub fn is_high_score(&self, score: u32) -> bool {
        if self.entries.len() < MAX_ENTRIES {
            return true;
        }
        score > self.entries[MAX_ENTRIES - 1].score
    }

    /// Insert a finished run, re-sort, truncate to the cap and rewrite the
    /// whole file.
    pub fn record(&mut self, score: u32, distance: u32) -> Result<()> {
        self.entries.push(ScoreEntry {
            score,
            distance,
            date: Utc::now().timestamp(),
        });
        // Stable sort: equal scores keep insertion order.
        self.entries.sort_by(|a, b| b.score.cmp(&a.score));
        self.entries.truncate(MAX_ENTRIES);
        self.save()
    }

    fn save(&self) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() {
                fs::create_dir_all(dir)
                    .with_context(|| format!("creating score dir {}", dir.display()))?;
            }
        }
        let json = serde_json::to_string_pretty(&self.entries)?;
        fs::write(&self.path, json)
            .with_context(|| format!("writing scores to {}", self.path.display()))?;
        Ok(())
    }
}

/// Missing or unreadable file, or unparseable JSON: start fresh.
fn load_entries(path: &Path) -> Vec<ScoreEntry> {
    fs::read_to_string(path)
        .ok()
        .and_then(|text| serde_json::from_str(&text).ok())
        .unwrap_or_default()
}
