use std::collections::HashSet;
use std::fs::File;
use std::io::{self, BufRead};
use std::path::Path;
use log::{info, warn};

/// Load words from a plain text file (one word per line).
/// Words are uppercased and only the first occurrence is kept.
pub fn load_words(file_path: &Path) -> io::Result<Vec<String>> {
    let file = File::open(file_path)?;
    let reader = io::BufReader::new(file);

    let mut seen = HashSet::new();
    let mut words = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let word = line.trim().to_uppercase();
        if !word.is_empty() && seen.insert(word.clone()) {
            words.push(word);
        }
    }

    Ok(words)
}

/// Load the lexicon and apply optional insertion and deletion overlays.
/// A missing lexicon leaves the service running with an empty dictionary.
pub fn load_dictionary(
    lexicon: &Path,
    insertions: Option<&Path>,
    deletions: Option<&Path>,
) -> Vec<String> {
    let mut words = load_words(lexicon).unwrap_or_else(|e| {
        warn!("Failed to load lexicon at {}: {}", lexicon.display(), e);
        Vec::new()
    });

    if let Some(path) = insertions {
        match load_words(path) {
            Ok(custom) => {
                let present: HashSet<String> = words.iter().cloned().collect();
                let added: Vec<String> =
                    custom.into_iter().filter(|w| !present.contains(w)).collect();
                info!("Inserted {} words from {}.", added.len(), path.display());
                words.extend(added);
            }
            Err(e) => warn!("Skipping insertions at {}: {}", path.display(), e),
        }
    }

    if let Some(path) = deletions {
        match load_words(path) {
            Ok(censored) => {
                let censored: HashSet<String> = censored.into_iter().collect();
                let before = words.len();
                words.retain(|w| !censored.contains(w));
                info!("Deleted {} words listed in {}.", before - words.len(), path.display());
            }
            Err(e) => warn!("Skipping deletions at {}: {}", path.display(), e),
        }
    }

    info!("Loaded {} words from dictionary", words.len());
    words
}
