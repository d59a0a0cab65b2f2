//! Word tokenization over extracted document text

use unicode_segmentation::UnicodeSegmentation;

/// A single word token carrying its literal surface text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
}

impl Token {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Splits raw text into word tokens using Unicode segmentation. Tokens keep
/// their original casing; consumers normalize as needed.
pub struct Tokenizer;

impl Tokenizer {
    pub fn new() -> Self {
        Self
    }

    pub fn tokenize(&self, text: &str) -> Vec<Token> {
        text.unicode_words().map(Token::new).collect()
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}
