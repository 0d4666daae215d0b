use std::collections::HashSet;

/// Bit set on a signature when the text holds anything outside A-Z
pub const EXTENDED_BIT: u32 = 1 << 26;

/// Normalize a submitted word: trim surrounding whitespace and uppercase it
pub fn normalize_word(word: &str) -> String {
    word.trim().to_uppercase()
}

/// Turn request letters into a deduplicated uppercase list.
/// Every entry must be exactly one alphabetic character.
pub fn normalize_letters(letters: &[String]) -> Result<Vec<char>, String> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();

    for entry in letters {
        let mut chars = entry.trim().chars();
        let ch = match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_alphabetic() => c,
            _ => return Err(format!("'{}' is not a single letter", entry)),
        };
        for upper in ch.to_uppercase() {
            if seen.insert(upper) {
                out.push(upper);
            }
        }
    }

    if out.is_empty() {
        return Err("letters must not be empty".to_string());
    }
    Ok(out)
}

/// Compute a letter bitmask for fast membership filtering
pub fn compute_signature(text: &str) -> u32 {
    let mut sig = 0u32;
    for ch in text.chars() {
        if ch.is_ascii_uppercase() {
            sig |= 1 << (ch as u8 - b'A');
        } else {
            sig |= EXTENDED_BIT;
        }
    }
    sig
}

/// Check that every character of `word` is one of `letters`.
/// Repeats are allowed, only membership counts.
pub fn uses_only_letters(word: &str, letters: &[char]) -> bool {
    word.chars().all(|ch| letters.contains(&ch))
}

/// True when the word is non-empty and made only of letters
pub fn is_alphabetic_word(word: &str) -> bool {
    !word.is_empty() && word.chars().all(char::is_alphabetic)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_normalize_word() {
        assert_eq!(normalize_word("  hello \n"), "HELLO");
        assert_eq!(normalize_word("Bee"), "BEE");
        assert_eq!(normalize_word("   "), "");
    }

    #[test]
    fn test_normalize_letters_uppercases_and_dedups() {
        let letters = normalize_letters(&strings(&["c", "A", "t", "a", " s "])).unwrap();
        assert_eq!(letters, vec!['C', 'A', 'T', 'S']);
    }

    #[test]
    fn test_normalize_letters_rejects_bad_entries() {
        assert!(normalize_letters(&[]).is_err());
        assert!(normalize_letters(&strings(&["ab"])).is_err());
        assert!(normalize_letters(&strings(&[""])).is_err());
        assert!(normalize_letters(&strings(&["1"])).is_err());
    }

    #[test]
    fn test_compute_signature() {
        assert_eq!(compute_signature("A"), 1);
        assert_eq!(compute_signature("CAB"), 0b111);
        assert_eq!(compute_signature("AAA"), 1);
        assert_ne!(compute_signature("ÉTÉ") & EXTENDED_BIT, 0);
        assert_eq!(compute_signature("ZEBRA") & EXTENDED_BIT, 0);
    }

    #[test]
    fn test_uses_only_letters() {
        let rack = ['C', 'A', 'T', 'S'];
        assert!(uses_only_letters("CAT", &rack));
        assert!(uses_only_letters("CATS", &rack));
        // repeats are fine, only membership matters
        assert!(uses_only_letters("TACTS", &rack));
        assert!(!uses_only_letters("DOG", &rack));
        assert!(!uses_only_letters("CART", &rack));
    }

    #[test]
    fn test_is_alphabetic_word() {
        assert!(is_alphabetic_word("HELLO"));
        assert!(is_alphabetic_word("NAÏVE"));
        assert!(!is_alphabetic_word(""));
        assert!(!is_alphabetic_word("HELLO WORLD"));
        assert!(!is_alphabetic_word("R2D2"));
    }
}
