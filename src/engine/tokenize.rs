//! Tokenizer — segments text into word, whitespace, and punctuation runs.
//!
//! Replaces regex-based splitting so word boundaries behave the same for
//! ASCII and non-ASCII input. Concatenating the token texts in order
//! reproduces the input exactly.

/// Classification of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Word,
    Whitespace,
    Punct,
}

/// A maximal run of same-class characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

/// Word characters: Unicode alphanumerics plus underscore.
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn classify(c: char) -> TokenKind {
    if c.is_whitespace() {
        TokenKind::Whitespace
    } else if is_word_char(c) {
        TokenKind::Word
    } else {
        TokenKind::Punct
    }
}

/// Split `text` into maximal same-class runs.
pub fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut kind: Option<TokenKind> = None;

    for c in text.chars() {
        let class = classify(c);
        if kind != Some(class) {
            if let Some(prev) = kind.take() {
                tokens.push(Token {
                    kind: prev,
                    text: std::mem::take(&mut current),
                });
            }
            kind = Some(class);
        }
        current.push(c);
    }
    if let Some(last) = kind {
        tokens.push(Token {
            kind: last,
            text: current,
        });
    }
    tokens
}
