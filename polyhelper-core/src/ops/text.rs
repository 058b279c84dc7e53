//! Text statistics

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Result of `analyze_text`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextAnalysis {
    pub character_count: usize,
    pub word_count: usize,
    pub unique_words: usize,
    pub uppercase_count: usize,
    pub lowercase_count: usize,
}

/// Count characters, whitespace-separated words and cased letters.
///
/// Characters are Unicode scalar values; word comparison is case-sensitive.
pub fn analyze_text(text: &str) -> TextAnalysis {
    let words: Vec<&str> = text.split_whitespace().collect();
    let unique: HashSet<&str> = words.iter().copied().collect();

    let mut analysis = TextAnalysis {
        character_count: 0,
        word_count: words.len(),
        unique_words: unique.len(),
        uppercase_count: 0,
        lowercase_count: 0,
    };

    for c in text.chars() {
        analysis.character_count += 1;
        if c.is_uppercase() {
            analysis.uppercase_count += 1;
        } else if c.is_lowercase() {
            analysis.lowercase_count += 1;
        }
    }

    analysis
}
