//! Punctuation normalization and word splitting

/// Sentence punctuation replaced before tokenizing
const PUNCTUATION: [char; 8] = ['.', ',', '!', '?', ':', ';', '¿', '¡'];

/// Replace sentence punctuation with spaces
pub fn normalize_punctuation(text: &str) -> String {
    text.chars()
        .map(|ch| if PUNCTUATION.contains(&ch) { ' ' } else { ch })
        .collect()
}

/// Split a text into words: maximal runs of non-whitespace characters
pub fn words(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace()
}
