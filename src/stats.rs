use serde::Serialize;

use crate::algorithm::preprocess::is_whitespace;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TextStats {
    pub chars: usize,
    pub words: usize,
    pub lines: usize,
}

impl TextStats {
    pub fn compute(text: &str) -> TextStats {
        TextStats {
            chars: text.encode_utf16().count(),
            words: text.split(is_whitespace).filter(|word| !word.is_empty()).count(),
            lines: text.split('\n').count(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn empty_text_has_one_line() {
        assert_eq!(
            TextStats::compute(""),
            TextStats {
                chars: 0,
                words: 0,
                lines: 1
            }
        );
    }

    #[test]
    fn counts() {
        let stats = TextStats::compute("  Hello   world \nsecond line\n");
        assert_eq!(stats.chars, 29);
        assert_eq!(stats.words, 4);
        assert_eq!(stats.lines, 3);
    }

    #[test]
    fn cjk_without_spaces_is_one_word() {
        let stats = TextStats::compute("清晨的城市还没完全醒来。");
        assert_eq!(stats.chars, 12);
        assert_eq!(stats.words, 1);
        assert_eq!(stats.lines, 1);
    }

    #[test]
    fn chars_are_utf16_code_units() {
        assert_eq!(TextStats::compute("a😀").chars, 3);
        assert_eq!(TextStats::compute("猫😀狗").chars, 4);
    }

    #[test]
    fn byte_order_mark_separates_words() {
        assert_eq!(TextStats::compute("a\u{feff}b").words, 2);
        assert_eq!(TextStats::compute("a\u{85}b").words, 1);
    }

    #[test]
    fn whitespace_only() {
        let stats = TextStats::compute(" \t\n ");
        assert_eq!(stats.words, 0);
        assert_eq!(stats.lines, 2);
    }
}
