//! Word mode — shuffles whitespace-delimited chunks into fixed slots.

use super::rng::RandomSource;
use super::shuffle::shuffle;
use super::tokenize::{tokenize, TokenKind};
use super::types::Intensity;

/// Scramble word order. Whitespace runs keep their exact positions and
/// content; punctuation attached to a word ("dog.") travels with it as one
/// unit.
pub fn scramble_words(text: &str, intensity: Intensity, source: &mut dyn RandomSource) -> String {
    // Regroup fine-grained tokens into alternating whitespace and
    // non-whitespace chunks, so word+punctuation clusters stay whole.
    let mut chunks: Vec<(bool, String)> = Vec::new();
    for token in tokenize(text) {
        let is_ws = token.kind == TokenKind::Whitespace;
        match chunks.last_mut() {
            Some((last_ws, chunk)) if *last_ws == is_ws => chunk.push_str(&token.text),
            _ => chunks.push((is_ws, token.text)),
        }
    }

    let slots: Vec<usize> = chunks
        .iter()
        .enumerate()
        .filter(|(_, (is_ws, _))| !is_ws)
        .map(|(i, _)| i)
        .collect();
    let words: Vec<String> = slots.iter().map(|&i| chunks[i].1.clone()).collect();
    let shuffled = shuffle(&words, intensity, source);
    for (&slot, word) in slots.iter().zip(&shuffled) {
        chunks[slot].1 = word.clone();
    }

    chunks.into_iter().map(|(_, chunk)| chunk).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::rng::{SequenceSource, SystemSource};

    fn word_multiset(s: &str) -> Vec<&str> {
        let mut words: Vec<&str> = s.split_whitespace().collect();
        words.sort_unstable();
        words
    }

    #[test]
    fn word_multiset_is_preserved() {
        let text = "the quick brown fox jumps over the lazy dog";
        let mut source = SystemSource::new();
        let out = scramble_words(text, Intensity::High, &mut source);
        assert_eq!(word_multiset(&out), word_multiset(text));
    }

    #[test]
    fn whitespace_pattern_is_untouched() {
        let text = "one  two\tthree\n four";
        let mut source = SystemSource::new();
        for _ in 0..20 {
            let out = scramble_words(text, Intensity::High, &mut source);
            let original_ws: Vec<char> = text.chars().filter(|c| c.is_whitespace()).collect();
            let scrambled_ws: Vec<char> = out.chars().filter(|c| c.is_whitespace()).collect();
            assert_eq!(original_ws, scrambled_ws);
            // Whitespace runs stay at the same chunk boundaries.
            assert_eq!(
                out.split_whitespace().count(),
                text.split_whitespace().count()
            );
        }
    }

    #[test]
    fn punctuation_travels_with_its_word() {
        let text = "wait... what?! really.";
        let mut source = SystemSource::new();
        let out = scramble_words(text, Intensity::Medium, &mut source);
        assert_eq!(word_multiset(&out), word_multiset(text));
    }

    #[test]
    fn two_words_low_intensity_has_two_outcomes() {
        let mut source = SystemSource::new();
        for _ in 0..30 {
            let out = scramble_words("Hello World", Intensity::Low, &mut source);
            assert!(
                out == "Hello World" || out == "World Hello",
                "unexpected permutation: {out:?}"
            );
        }
    }

    #[test]
    fn scripted_swap_exchanges_two_words() {
        // One Low pass over two words draws once; j=0 swaps them.
        let mut source = SequenceSource::new(vec![0]);
        assert_eq!(
            scramble_words("Hello World", Intensity::Low, &mut source),
            "World Hello"
        );
    }

    #[test]
    fn leading_and_trailing_whitespace_survive() {
        let text = "  padded out  ";
        let mut source = SystemSource::new();
        let out = scramble_words(text, Intensity::Medium, &mut source);
        assert!(out.starts_with("  "));
        assert!(out.ends_with("  "));
        assert_eq!(out.chars().count(), text.chars().count());
    }

    #[test]
    fn single_word_is_unchanged() {
        let mut source = SystemSource::new();
        assert_eq!(
            scramble_words("solitary", Intensity::High, &mut source),
            "solitary"
        );
    }
}
