use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use super::preprocess::is_whitespace;

/// Normalization rules applied when comparing tokens. They never change how the
/// text is split into tokens.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DiffOptions {
    pub ignore_case: bool,
    pub ignore_whitespace: bool,
    pub ignore_punctuation: bool,
    pub ignore_newlines: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DiffOption {
    IgnoreCase,
    IgnoreWhitespace,
    IgnorePunctuation,
    IgnoreNewlines,
}

impl DiffOption {
    pub const ALL: [DiffOption; 4] = [
        DiffOption::IgnoreCase,
        DiffOption::IgnoreWhitespace,
        DiffOption::IgnorePunctuation,
        DiffOption::IgnoreNewlines,
    ];
}

impl DiffOptions {
    fn flag_mut(&mut self, option: DiffOption) -> &mut bool {
        match option {
            DiffOption::IgnoreCase => &mut self.ignore_case,
            DiffOption::IgnoreWhitespace => &mut self.ignore_whitespace,
            DiffOption::IgnorePunctuation => &mut self.ignore_punctuation,
            DiffOption::IgnoreNewlines => &mut self.ignore_newlines,
        }
    }

    pub fn get(&self, option: DiffOption) -> bool {
        match option {
            DiffOption::IgnoreCase => self.ignore_case,
            DiffOption::IgnoreWhitespace => self.ignore_whitespace,
            DiffOption::IgnorePunctuation => self.ignore_punctuation,
            DiffOption::IgnoreNewlines => self.ignore_newlines,
        }
    }

    pub fn set(self, option: DiffOption, value: bool) -> DiffOptions {
        let mut result = self;
        *result.flag_mut(option) = value;
        result
    }

    pub fn toggle(self, option: DiffOption) -> DiffOptions {
        self.set(option, !self.get(option))
    }

    /// Every combination of the four flags, starting with the default.
    pub fn all_combinations() -> impl Iterator<Item = DiffOptions> {
        (0..16u8).map(|bits| {
            DiffOption::ALL
                .iter()
                .enumerate()
                .fold(DiffOptions::default(), |options, (i, &option)| {
                    options.set(option, bits & (1 << i) != 0)
                })
        })
    }
}

pub fn is_punctuation(c: char) -> bool {
    matches!(
        c,
        '.' | ','
            | '/'
            | '#'
            | '!'
            | '$'
            | '%'
            | '^'
            | '&'
            | '*'
            | ';'
            | ':'
            | '{'
            | '}'
            | '='
            | '-'
            | '_'
            | '`'
            | '~'
            | '('
            | ')'
            | '"'
            | '\''
            | '?'
            | '。'
            | '，'
            | '、'
            | '；'
            | '：'
            | '？'
            | '！'
            | '…'
            | '—'
            | '·'
            | 'ˉ'
            | 'ˇ'
            | '¨'
            | '‘'
            | '’'
            | '“'
            | '”'
    )
}

fn strip_newlines(s: Cow<str>) -> Cow<str> {
    if s.contains('\n') {
        Cow::Owned(s.replace('\n', ""))
    } else {
        s
    }
}

fn trim_whitespace(s: Cow<str>) -> Cow<str> {
    match s {
        Cow::Borrowed(b) => Cow::Borrowed(b.trim_matches(is_whitespace)),
        Cow::Owned(o) => Cow::Owned(o.trim_matches(is_whitespace).to_owned()),
    }
}

fn strip_punctuation(s: Cow<str>) -> Cow<str> {
    if s.contains(is_punctuation) {
        Cow::Owned(s.chars().filter(|&c| !is_punctuation(c)).collect())
    } else {
        s
    }
}

fn lowercase(s: Cow<str>) -> Cow<str> {
    if s.is_ascii() && !s.bytes().any(|b| b.is_ascii_uppercase()) {
        s
    } else {
        Cow::Owned(s.to_lowercase())
    }
}

/// Decides whether two tokens count as equal once the enabled normalizations are
/// applied. Steps run in a fixed order: newlines, whitespace, punctuation, case.
/// If both sides become empty after one of the first three steps they are equal
/// right away.
pub fn tokens_equal(a: &str, b: &str, options: DiffOptions) -> bool {
    let mut s = [Cow::Borrowed(a), Cow::Borrowed(b)];

    let steps: [(bool, fn(Cow<str>) -> Cow<str>); 3] = [
        (options.ignore_newlines, strip_newlines),
        (options.ignore_whitespace, trim_whitespace),
        (options.ignore_punctuation, strip_punctuation),
    ];
    for (enabled, step) in steps {
        if !enabled {
            continue;
        }
        s = s.map(step);
        if s[0].is_empty() && s[1].is_empty() {
            return true;
        }
    }

    if options.ignore_case {
        s = s.map(lowercase);
    }
    s[0] == s[1]
}

/// The normalized form of a single token. `tokens_equal(a, b, options)` holds
/// exactly when `comparison_key(a, options) == comparison_key(b, options)`: a
/// string that became empty stays empty under every later step.
pub fn comparison_key(token: &str, options: DiffOptions) -> Cow<str> {
    let mut key = Cow::Borrowed(token);
    if options.ignore_newlines {
        key = strip_newlines(key);
    }
    if options.ignore_whitespace {
        key = trim_whitespace(key);
    }
    if options.ignore_punctuation {
        key = strip_punctuation(key);
    }
    if options.ignore_case {
        key = lowercase(key);
    }
    key
}
