use std::collections::HashSet;
use crate::models::{Puzzle, PuzzleStats, Word};
use crate::services::word_filter::{find_valid_words, LetterSet};
use rand::seq::SliceRandom;
use rand::Rng;
use log::{debug, info};

/// Sampling pool, most common letters first. The draw is a uniform shuffle.
pub const LETTER_POOL: [char; 26] = [
    'E', 'S', 'I', 'A', 'R', 'N', 'T', 'O', 'L', 'C', 'D', 'U', 'G',
    'P', 'M', 'H', 'B', 'Y', 'F', 'V', 'K', 'W', 'Z', 'X', 'Q', 'J',
];
pub const PUZZLE_SIZE: usize = 7;
pub const ATTEMPTS: usize = 10;

/// Score one (letters, center) pair against its valid words
pub fn score_candidate(valid_words: &[String], center: char, min_len: usize) -> PuzzleStats {
    let mut used_letters = HashSet::new();
    let mut total_possible_score = 0;

    for word in valid_words.iter().filter(|w| w.contains(center)) {
        used_letters.extend(word.chars());
        let len = word.chars().count();
        total_possible_score += if len == min_len { 1 } else { len };
    }

    let distance = (100.0 - total_possible_score as f64).abs();
    let heuristic_score = 20.0 * used_letters.len() as f64 + (100.0 - distance / 2.0).max(0.0);

    PuzzleStats {
        used_letter_count: used_letters.len(),
        total_possible_score,
        heuristic_score,
    }
}

/// Sample random letter sets and keep the best scoring (letters, center) pair.
/// Returns None only if nothing was ever scored.
pub fn generate_puzzle<R: Rng + ?Sized>(
    words: &[Word],
    min_len: usize,
    rng: &mut R,
) -> Option<Puzzle> {
    let mut best: Option<Puzzle> = None;
    let mut pool = LETTER_POOL;

    for attempt in 0..ATTEMPTS {
        pool.shuffle(rng);
        let letters: Vec<char> = pool[..PUZZLE_SIZE].to_vec();
        let letter_set = LetterSet::new(&letters);
        let valid_words = find_valid_words(words, &letter_set, min_len);

        for &center in &letters {
            let stats = score_candidate(&valid_words, center, min_len);
            debug!(
                "Attempt {} letters {:?} center {}: score {:.1}",
                attempt, letters, center, stats.heuristic_score
            );

            let better = best
                .as_ref()
                .map_or(true, |b| stats.heuristic_score > b.stats.heuristic_score);
            if better {
                best = Some(Puzzle {
                    letters: letters.clone(),
                    center_letter: center,
                    valid_words: valid_words.clone(),
                    stats,
                });
            }
        }
    }

    if let Some(puzzle) = &best {
        info!(
            "Generated puzzle {:?} center {} with {} words (score {:.1})",
            puzzle.letters,
            puzzle.center_letter,
            puzzle.valid_words.len(),
            puzzle.stats.heuristic_score
        );
    }
    best
}
