//! Line mode — reorders lines, never their content.

use super::rng::RandomSource;
use super::shuffle::shuffle;
use super::types::Intensity;

/// Shuffle the order of `\n`-delimited lines and rejoin.
pub fn scramble_lines(text: &str, intensity: Intensity, source: &mut dyn RandomSource) -> String {
    let lines: Vec<&str> = text.split('\n').collect();
    shuffle(&lines, intensity, source).join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::rng::{SequenceSource, SystemSource};

    #[test]
    fn each_line_appears_exactly_once() {
        let text = "line1\nline2\nline3";
        let mut source = SystemSource::new();
        for _ in 0..20 {
            let out = scramble_lines(text, Intensity::High, &mut source);
            let mut lines: Vec<&str> = out.split('\n').collect();
            assert_eq!(lines.len(), 3);
            lines.sort_unstable();
            assert_eq!(lines, vec!["line1", "line2", "line3"]);
        }
    }

    #[test]
    fn line_count_is_preserved() {
        let text = "a\nb\nc\nd\ne";
        let mut source = SystemSource::new();
        let out = scramble_lines(text, Intensity::Medium, &mut source);
        assert_eq!(out.split('\n').count(), text.split('\n').count());
    }

    #[test]
    fn single_line_is_unchanged() {
        let mut source = SystemSource::new();
        assert_eq!(
            scramble_lines("just one line", Intensity::High, &mut source),
            "just one line"
        );
    }

    #[test]
    fn empty_lines_are_lines_too() {
        let text = "top\n\nbottom";
        let mut source = SystemSource::new();
        let out = scramble_lines(text, Intensity::Medium, &mut source);
        assert_eq!(out.split('\n').count(), 3);
        assert!(out.split('\n').any(|l| l.is_empty()));
    }

    #[test]
    fn scripted_shuffle_reorders_exactly() {
        // All-zero draws permute [a, b, c] -> swap(2,0)=[c,b,a],
        // swap(1,0)=[b,c,a].
        let mut source = SequenceSource::new(vec![0, 0]);
        assert_eq!(
            scramble_lines("a\nb\nc", Intensity::Low, &mut source),
            "b\nc\na"
        );
    }
}
