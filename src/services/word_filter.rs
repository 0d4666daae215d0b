use crate::models::Word;
use crate::utils::{compute_signature, uses_only_letters, EXTENDED_BIT};

/// Letters available for forming words, uppercase and deduplicated
#[derive(Debug, Clone)]
pub struct LetterSet {
    letters: Vec<char>,
    signature: u32,
}

impl LetterSet {
    pub fn new(letters: &[char]) -> Self {
        let mut unique: Vec<char> = Vec::with_capacity(letters.len());
        for ch in letters.iter().flat_map(|c| c.to_uppercase()) {
            if !unique.contains(&ch) {
                unique.push(ch);
            }
        }
        let text: String = unique.iter().collect();
        LetterSet {
            signature: compute_signature(&text),
            letters: unique,
        }
    }

    fn admits(&self, word: &Word) -> bool {
        // A word with bits the rack doesn't have can never match.
        if word.signature & !self.signature != 0 {
            return false;
        }
        if word.signature & EXTENDED_BIT == 0 {
            return true;
        }
        uses_only_letters(&word.text, &self.letters)
    }
}

/// Find dictionary words at least `min_len` long made only of the given letters.
/// Dictionary order is preserved.
pub fn find_valid_words(words: &[Word], letters: &LetterSet, min_len: usize) -> Vec<String> {
    words
        .iter()
        .filter(|word| word.len >= min_len && letters.admits(word))
        .map(|w| w.text.clone())
        .collect()
}
