use std::sync::Mutex;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use crate::services::report_store::ReportStore;
use crate::utils::compute_signature;

/// Application state shared across all handlers
pub struct AppState {
    pub dictionary: Vec<Word>,
    pub reports: ReportStore,
    pub rng: Mutex<StdRng>,
    pub default_min_length: usize,
}

/// A dictionary entry with precomputed filter data
#[derive(Debug, Clone)]
pub struct Word {
    pub text: String,
    pub len: usize,
    pub signature: u32,
}

impl Word {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        Word {
            len: text.chars().count(),
            signature: compute_signature(&text),
            text,
        }
    }
}

pub fn build_dictionary(words: Vec<String>) -> Vec<Word> {
    words.into_iter().map(Word::new).collect()
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DictionaryRequest {
    pub letters: Option<Vec<String>>,
    pub min_length: Option<i64>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DictionaryResponse {
    pub valid_words: Vec<String>,
    pub count: usize,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewGameQuery {
    pub min_length: Option<usize>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PuzzleStats {
    pub used_letter_count: usize,
    pub total_possible_score: usize,
    pub heuristic_score: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Puzzle {
    pub letters: Vec<char>,
    pub center_letter: char,
    pub valid_words: Vec<String>,
    pub stats: PuzzleStats,
}

#[derive(Deserialize)]
pub struct ReportRequest {
    pub word: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ReportsResponse {
    pub add: Vec<String>,
    pub remove: Vec<String>,
}
