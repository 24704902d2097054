//! Smart mode — keeps word shapes readable by pinning first and last letters.

use super::chars::{force_lower, force_upper};
use super::rng::RandomSource;
use super::shuffle::shuffle;
use super::tokenize::{tokenize, TokenKind};
use super::types::Intensity;

/// Scramble word interiors, leaving first and last letters and everything
/// between words untouched. Words of three characters or fewer pass through
/// unchanged.
///
/// With `preserve_case` unset, each word is normalized to lowercase before
/// scrambling and only a leading capital is restored afterwards; any other
/// case pattern inside the word is discarded.
pub fn scramble_smart(text: &str, preserve_case: bool, source: &mut dyn RandomSource) -> String {
    tokenize(text)
        .into_iter()
        .map(|token| {
            if token.kind == TokenKind::Word {
                scramble_word(&token.text, preserve_case, source)
            } else {
                token.text
            }
        })
        .collect()
}

fn scramble_word(word: &str, preserve_case: bool, source: &mut dyn RandomSource) -> String {
    if preserve_case {
        return shuffle_interior(word, source);
    }

    let leading_capital = word.chars().next().is_some_and(|c| c.is_uppercase());
    let lowered: String = word.chars().map(force_lower).collect();
    let scrambled = shuffle_interior(&lowered, source);
    if leading_capital {
        let mut chars: Vec<char> = scrambled.chars().collect();
        if let Some(first) = chars.first_mut() {
            *first = force_upper(*first);
        }
        chars.into_iter().collect()
    } else {
        scrambled
    }
}

/// Shuffle the characters between a word's first and last.
///
/// Interior shuffling always runs one Medium-intensity shuffle, independent
/// of the global intensity option.
fn shuffle_interior(word: &str, source: &mut dyn RandomSource) -> String {
    let chars: Vec<char> = word.chars().collect();
    if chars.len() <= 3 {
        return word.to_string();
    }
    let interior = &chars[1..chars.len() - 1];
    if interior.len() <= 1 {
        return word.to_string();
    }

    let shuffled = shuffle(interior, Intensity::Medium, source);
    let mut out = Vec::with_capacity(chars.len());
    out.push(chars[0]);
    out.extend(shuffled);
    out.push(chars[chars.len() - 1]);
    out.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::rng::SystemSource;

    fn sorted_chars(s: &str) -> Vec<char> {
        let mut chars: Vec<char> = s.chars().collect();
        chars.sort_unstable();
        chars
    }

    #[test]
    fn short_words_pass_through() {
        let mut source = SystemSource::new();
        for word in ["a", "at", "the", "abc"] {
            assert_eq!(scramble_smart(word, true, &mut source), word);
            assert_eq!(scramble_smart(word, false, &mut source), word);
        }
    }

    #[test]
    fn boundaries_are_pinned() {
        let mut source = SystemSource::new();
        for _ in 0..30 {
            let out = scramble_smart("testing", false, &mut source);
            assert!(out.starts_with('t'), "first letter moved: {out:?}");
            assert!(out.ends_with('g'), "last letter moved: {out:?}");
            assert_eq!(sorted_chars(&out), sorted_chars("testing"));
        }
    }

    #[test]
    fn interior_multiset_is_preserved() {
        let mut source = SystemSource::new();
        let out = scramble_smart("scrambler", true, &mut source);
        assert_eq!(out.chars().count(), 9);
        assert_eq!(sorted_chars(&out), sorted_chars("scrambler"));
    }

    #[test]
    fn non_word_runs_are_untouched() {
        let text = "well -- punctuated, text!";
        let mut source = SystemSource::new();
        for _ in 0..10 {
            let out = scramble_smart(text, true, &mut source);
            let original_rest: String = text.chars().filter(|c| !c.is_alphanumeric()).collect();
            let scrambled_rest: String = out.chars().filter(|c| !c.is_alphanumeric()).collect();
            assert_eq!(original_rest, scrambled_rest);
        }
    }

    #[test]
    fn leading_capital_is_restored_without_preserve_case() {
        let mut source = SystemSource::new();
        for _ in 0..20 {
            let out = scramble_smart("Reading", false, &mut source);
            assert!(out.starts_with('R'), "lost leading capital: {out:?}");
            assert!(out.ends_with('g'));
            // Everything past the first letter is lowercase.
            assert!(out.chars().skip(1).all(|c| !c.is_uppercase()));
        }
    }

    #[test]
    fn interior_case_is_normalized_without_preserve_case() {
        let mut source = SystemSource::new();
        let out = scramble_smart("ShOuTiNg", false, &mut source);
        assert_eq!(
            sorted_chars(&out.to_lowercase()),
            sorted_chars("shouting")
        );
        assert!(out.chars().skip(1).all(|c| !c.is_uppercase()));
    }

    #[test]
    fn preserve_case_keeps_original_letters() {
        let mut source = SystemSource::new();
        let out = scramble_smart("McDonald", true, &mut source);
        assert_eq!(sorted_chars(&out), sorted_chars("McDonald"));
        assert!(out.starts_with('M'));
        assert!(out.ends_with('d'));
    }

    #[test]
    fn sentences_keep_their_shape() {
        let text = "The quick brown fox jumps.";
        let mut source = SystemSource::new();
        let out = scramble_smart(text, false, &mut source);
        assert_eq!(out.chars().count(), text.chars().count());
        let words: Vec<&str> = out.split_whitespace().collect();
        assert_eq!(words.len(), 5);
        assert!(words[0].starts_with('T'));
        assert!(out.ends_with('.'));
    }
}
