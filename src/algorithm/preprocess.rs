use std::collections::HashMap;

use string_interner::{DefaultBackend, DefaultSymbol, StringInterner};

use super::{equivalence::comparison_key, DiffOptions, PartitionedText};

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum TokenClass {
    Ideograph,
    Word,
    Whitespace,
    Symbol,
}

pub fn is_ideograph(c: char) -> bool {
    ('\u{4e00}'..='\u{9fa5}').contains(&c)
}

/// The whitespace of JavaScript's `\s` and `String.prototype.trim`: Unicode
/// `White_Space` plus U+FEFF, without U+0085.
pub fn is_whitespace(c: char) -> bool {
    match c {
        '\u{feff}' => true,
        '\u{85}' => false,
        _ => c.is_whitespace(),
    }
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

impl TokenClass {
    pub fn of(c: char) -> TokenClass {
        if is_ideograph(c) {
            TokenClass::Ideograph
        } else if is_word_char(c) {
            TokenClass::Word
        } else if is_whitespace(c) {
            TokenClass::Whitespace
        } else {
            TokenClass::Symbol
        }
    }
}

/// Byte offsets of token boundaries: starts with 0, ends with `text.len()`.
///
/// Ideographs always get a token of their own; every other class extends the
/// current token while the class stays the same.
pub fn partition_into_tokens(text: &str) -> Vec<usize> {
    let mut token_bounds = vec![];
    let mut last_class = None;
    for (i, c) in text.char_indices() {
        let class = TokenClass::of(c);
        if class != TokenClass::Ideograph && last_class == Some(class) {
            continue;
        }
        last_class = Some(class);
        token_bounds.push(i);
    }
    token_bounds.push(text.len());
    token_bounds
}

pub fn tokenize(text: &str) -> Vec<&str> {
    let bounds = partition_into_tokens(text);
    bounds.windows(2).map(|w| &text[w[0]..w[1]]).collect()
}

pub fn classify_tokens(text: &str) -> Vec<(TokenClass, &str)> {
    tokenize(text)
        .into_iter()
        .map(|token| {
            // Tokens are never empty.
            let first = token.chars().next().unwrap_or_default();
            (TokenClass::of(first), token)
        })
        .collect()
}

/// Interns the comparison key of every token on both sides, so that two tokens are
/// equivalent under `options` exactly when their symbols are equal.
pub(super) fn internalize_parts(texts: &[PartitionedText; 2], options: DiffOptions) -> [Vec<DefaultSymbol>; 2] {
    let mut interner: StringInterner<DefaultBackend> = StringInterner::default();
    let mut symbols = [vec![], vec![]];
    for (side, side_text) in texts.iter().enumerate() {
        for i in 0..side_text.part_count() {
            let key = comparison_key(side_text.get_part(i), options);
            symbols[side].push(interner.get_or_intern(key));
        }
    }
    symbols
}

pub(super) fn class_histogram(text: &PartitionedText) -> HashMap<TokenClass, usize> {
    let mut result = HashMap::new();
    for i in 0..text.part_count() {
        if let Some(c) = text.get_part(i).chars().next() {
            *result.entry(TokenClass::of(c)).or_insert(0) += 1;
        }
    }
    result
}
