//! Scrambling engine — pure text transforms behind one orchestrator.
//!
//! Nothing in this module touches the terminal, the filesystem, or shared
//! state: raw text plus a [`ScrambleOptions`] record goes in, a
//! [`ScrambleResult`] comes out. Randomness is injected through the
//! [`RandomSource`] seam so callers choose between fresh permutations and
//! reproducible ones.

pub mod chars;
pub mod lines;
pub mod rng;
pub mod shuffle;
pub mod smart;
pub mod tokenize;
pub mod types;
pub mod words;

pub use rng::{RandomSource, SeededSource, SequenceSource, SystemSource};
pub use types::{Intensity, ScrambleMode, ScrambleOptions, ScrambleResult};

/// Orchestrates mode dispatch over an injectable random source.
pub struct Scrambler {
    options: ScrambleOptions,
    source: Box<dyn RandomSource>,
}

impl Scrambler {
    /// Create a scrambler on the system RNG — a fresh permutation per call.
    pub fn new(options: ScrambleOptions) -> Self {
        Self::with_source(options, Box::new(SystemSource::new()))
    }

    /// Create a scrambler drawing from a caller-supplied source.
    pub fn with_source(options: ScrambleOptions, source: Box<dyn RandomSource>) -> Self {
        Self { options, source }
    }

    pub fn options(&self) -> &ScrambleOptions {
        &self.options
    }

    pub fn options_mut(&mut self) -> &mut ScrambleOptions {
        &mut self.options
    }

    pub fn set_options(&mut self, options: ScrambleOptions) {
        self.options = options;
    }

    /// Swap the random source (e.g. seeded vs. system) mid-session.
    pub fn set_source(&mut self, source: Box<dyn RandomSource>) {
        self.source = source;
    }

    /// Scramble `text` according to the current options.
    pub fn scramble(&mut self, text: &str) -> ScrambleResult {
        let options = self.options;
        scramble_with(text, &options, self.source.as_mut())
    }
}

/// One-shot convenience over a fresh system RNG.
pub fn scramble(text: &str, options: &ScrambleOptions) -> ScrambleResult {
    scramble_with(text, options, &mut SystemSource::new())
}

/// Scramble with an explicit random source.
///
/// Whitespace-only input short-circuits to an empty result with zero counts;
/// every other input is accepted as-is. This never fails.
pub fn scramble_with(
    text: &str,
    options: &ScrambleOptions,
    source: &mut dyn RandomSource,
) -> ScrambleResult {
    if text.trim().is_empty() {
        return ScrambleResult {
            original_text: text.to_string(),
            scrambled_text: String::new(),
            mode: options.mode,
            words_count: 0,
            characters_count: 0,
            lines_count: 0,
        };
    }

    let scrambled_text = match options.mode {
        ScrambleMode::Characters => chars::scramble_characters(
            text,
            options.preserve_spaces,
            options.preserve_punctuation,
            options.preserve_case,
            options.intensity,
            source,
        ),
        ScrambleMode::Words => words::scramble_words(text, options.intensity, source),
        ScrambleMode::Lines => lines::scramble_lines(text, options.intensity, source),
        ScrambleMode::Smart => smart::scramble_smart(text, options.preserve_case, source),
    };

    ScrambleResult {
        original_text: text.to_string(),
        scrambled_text,
        mode: options.mode,
        words_count: text.split_whitespace().count(),
        characters_count: text.chars().count(),
        lines_count: text.split('\n').count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_short_circuits() {
        for mode in ScrambleMode::ALL {
            let options = ScrambleOptions {
                mode,
                ..Default::default()
            };
            let result = scramble("", &options);
            assert_eq!(result.scrambled_text, "");
            assert_eq!(result.words_count, 0);
            assert_eq!(result.characters_count, 0);
            assert_eq!(result.lines_count, 0);
            assert_eq!(result.mode, mode);
        }
    }

    #[test]
    fn whitespace_only_input_short_circuits_but_echoes_original() {
        let result = scramble("   \n\t ", &ScrambleOptions::default());
        assert_eq!(result.original_text, "   \n\t ");
        assert_eq!(result.scrambled_text, "");
        assert_eq!(result.characters_count, 0);
    }

    #[test]
    fn counts_come_from_the_original_text() {
        let text = "one two three\nfour five";
        let result = scramble(text, &ScrambleOptions::default());
        assert_eq!(result.words_count, 5);
        assert_eq!(result.characters_count, text.chars().count());
        assert_eq!(result.lines_count, 2);
        assert_eq!(result.original_text, text);
    }

    #[test]
    fn result_echoes_selected_mode() {
        for mode in ScrambleMode::ALL {
            let options = ScrambleOptions {
                mode,
                ..Default::default()
            };
            assert_eq!(scramble("some text here", &options).mode, mode);
        }
    }

    #[test]
    fn scrambler_applies_option_changes() {
        let mut scrambler = Scrambler::new(ScrambleOptions::default());
        scrambler.options_mut().mode = ScrambleMode::Lines;
        let result = scrambler.scramble("a\nb");
        assert_eq!(result.mode, ScrambleMode::Lines);
    }

    #[test]
    fn seeded_scrambler_is_reproducible() {
        let options = ScrambleOptions {
            mode: ScrambleMode::Characters,
            preserve_spaces: false,
            preserve_punctuation: false,
            ..Default::default()
        };
        let mut a = Scrambler::with_source(options, Box::new(SeededSource::new(99)));
        let mut b = Scrambler::with_source(options, Box::new(SeededSource::new(99)));
        let text = "reproducible scrambling";
        assert_eq!(a.scramble(text), b.scramble(text));
    }

    #[test]
    fn system_scrambler_regenerates_new_permutations() {
        // With 20 characters in the pool, 40 identical draws in a row would
        // be astronomically unlikely.
        let options = ScrambleOptions {
            mode: ScrambleMode::Characters,
            preserve_spaces: false,
            preserve_punctuation: false,
            ..Default::default()
        };
        let mut scrambler = Scrambler::new(options);
        let text = "abcdefghijklmnopqrst";
        let first = scrambler.scramble(text).scrambled_text;
        let distinct = (0..40).any(|_| scrambler.scramble(text).scrambled_text != first);
        assert!(distinct, "40 scrambles never produced a new permutation");
    }
}
