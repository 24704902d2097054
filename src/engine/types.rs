//! Core engine types — the options record going in and the result coming out.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Which scrambling strategy to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrambleMode {
    /// Shuffle individual characters.
    Characters,
    /// Shuffle whole words, leaving whitespace runs in place.
    Words,
    /// Reorder lines without touching their content.
    Lines,
    /// Keep each word's first and last letter, shuffle the interior.
    Smart,
}

impl ScrambleMode {
    /// All modes in display order.
    pub const ALL: [ScrambleMode; 4] = [
        Self::Characters,
        Self::Words,
        Self::Lines,
        Self::Smart,
    ];

    /// Cycle to the next mode, wrapping around.
    pub fn next(self) -> Self {
        match self {
            Self::Characters => Self::Words,
            Self::Words => Self::Lines,
            Self::Lines => Self::Smart,
            Self::Smart => Self::Characters,
        }
    }

    /// One-line description for UI display.
    pub fn description(self) -> &'static str {
        match self {
            Self::Characters => "scrambles individual characters randomly",
            Self::Words => "shuffles words while preserving word boundaries",
            Self::Lines => "randomly reorders lines of text",
            Self::Smart => "preserves first and last letters for readability",
        }
    }
}

impl fmt::Display for ScrambleMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Characters => "characters",
            Self::Words => "words",
            Self::Lines => "lines",
            Self::Smart => "smart",
        };
        write!(f, "{name}")
    }
}

impl FromStr for ScrambleMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "characters" | "chars" => Ok(Self::Characters),
            "words" => Ok(Self::Words),
            "lines" => Ok(Self::Lines),
            "smart" => Ok(Self::Smart),
            other => Err(format!(
                "unknown mode '{other}' (expected characters, words, lines, or smart)"
            )),
        }
    }
}

/// How aggressively to shuffle — maps to a Fisher–Yates pass count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intensity {
    Low,
    Medium,
    High,
}

impl Intensity {
    /// All intensities in display order.
    pub const ALL: [Intensity; 3] = [Self::Low, Self::Medium, Self::High];

    /// Number of independent full shuffle passes.
    pub fn passes(self) -> usize {
        match self {
            Self::Low => 1,
            Self::Medium => 3,
            Self::High => 5,
        }
    }

    /// Cycle to the next intensity, wrapping around.
    pub fn next(self) -> Self {
        match self {
            Self::Low => Self::Medium,
            Self::Medium => Self::High,
            Self::High => Self::Low,
        }
    }
}

impl fmt::Display for Intensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        };
        write!(f, "{name}")
    }
}

impl FromStr for Intensity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" | "med" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            other => Err(format!(
                "unknown intensity '{other}' (expected low, medium, or high)"
            )),
        }
    }
}

/// Full configuration for one scramble invocation.
///
/// The preserve flags only matter in character mode (`preserve_case` also in
/// smart mode); the other strategies ignore them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrambleOptions {
    pub mode: ScrambleMode,
    pub preserve_spaces: bool,
    pub preserve_punctuation: bool,
    pub preserve_case: bool,
    pub intensity: Intensity,
}

impl Default for ScrambleOptions {
    fn default() -> Self {
        Self {
            mode: ScrambleMode::Characters,
            preserve_spaces: true,
            preserve_punctuation: true,
            preserve_case: false,
            intensity: Intensity::Medium,
        }
    }
}

/// The outcome of one scramble invocation.
///
/// Counts are computed from `original_text`: whitespace-delimited tokens,
/// Unicode scalar values, and `\n`-delimited segments respectively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrambleResult {
    pub original_text: String,
    pub scrambled_text: String,
    pub mode: ScrambleMode,
    pub words_count: usize,
    pub characters_count: usize,
    pub lines_count: usize,
}
