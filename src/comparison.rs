use crate::{
    algorithm::{compute_diff, Diff, DiffOption, DiffOptions, DiffPart, DiffSummary},
    similarity::similarity,
    stats::TextStats,
};

/// A pair of texts together with the options they are compared under.
///
/// Every setter recomputes the diff and the similarity score before returning, so
/// the cached results always belong to the current inputs.
pub struct Comparison {
    texts: [String; 2],
    options: DiffOptions,
    diff: Diff,
    similarity: u8,
}

impl Comparison {
    pub fn new(original: impl Into<String>, modified: impl Into<String>, options: DiffOptions) -> Comparison {
        let texts = [original.into(), modified.into()];
        let diff = compute_diff(&texts[0], &texts[1], options);
        let similarity = similarity(&texts[0], &texts[1]);
        Comparison {
            texts,
            options,
            diff,
            similarity,
        }
    }

    fn refresh_diff(&mut self) {
        self.diff = compute_diff(&self.texts[0], &self.texts[1], self.options);
    }

    fn refresh_all(&mut self) {
        self.refresh_diff();
        self.similarity = similarity(&self.texts[0], &self.texts[1]);
    }

    pub fn set_original(&mut self, text: impl Into<String>) {
        self.texts[0] = text.into();
        self.refresh_all();
    }

    pub fn set_modified(&mut self, text: impl Into<String>) {
        self.texts[1] = text.into();
        self.refresh_all();
    }

    pub fn set_options(&mut self, options: DiffOptions) {
        if options != self.options {
            self.options = options;
            // The similarity score does not depend on the options.
            self.refresh_diff();
        }
    }

    pub fn toggle(&mut self, option: DiffOption) {
        self.set_options(self.options.toggle(option));
    }

    pub fn original(&self) -> &str {
        &self.texts[0]
    }

    pub fn modified(&self) -> &str {
        &self.texts[1]
    }

    pub fn options(&self) -> DiffOptions {
        self.options
    }

    pub fn diff(&self) -> &Diff {
        &self.diff
    }

    pub fn parts(&self) -> &[DiffPart] {
        &self.diff.parts
    }

    pub fn summary(&self) -> DiffSummary {
        self.diff.summary()
    }

    pub fn similarity(&self) -> u8 {
        self.similarity
    }

    pub fn stats(&self) -> [TextStats; 2] {
        [0, 1].map(|side| TextStats::compute(&self.texts[side]))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::algorithm::DiffKind;

    #[test]
    fn toggling_an_option_recomputes() {
        let mut comparison = Comparison::new("Hello World", "hello World", DiffOptions::default());
        assert_eq!(
            comparison.summary(),
            DiffSummary {
                additions: 1,
                deletions: 1
            }
        );

        comparison.toggle(DiffOption::IgnoreCase);
        assert!(comparison.options().ignore_case);
        assert_eq!(comparison.parts().len(), 1);
        assert_eq!(comparison.parts()[0].kind, DiffKind::Equal);
        assert_eq!(comparison.parts()[0].text, "hello World");

        comparison.toggle(DiffOption::IgnoreCase);
        assert_eq!(comparison.summary().additions, 1);
    }

    #[test]
    fn editing_a_text_recomputes() {
        let mut comparison = Comparison::new("猫追狗", "猫追狗", DiffOptions::default());
        assert!(comparison.diff().is_identical());
        assert_eq!(comparison.similarity(), 100);

        comparison.set_modified("猫追了狗");
        assert_eq!(
            comparison.summary(),
            DiffSummary {
                additions: 1,
                deletions: 0
            }
        );
        assert_eq!(comparison.similarity(), 75);

        comparison.set_original("");
        assert_eq!(comparison.parts().len(), 1);
        assert_eq!(comparison.parts()[0].kind, DiffKind::Insert);
        assert_eq!(comparison.similarity(), 0);
    }

    #[test]
    fn stats_of_both_sides() {
        let comparison = Comparison::new("a b\nc", "", DiffOptions::default());
        let [original, modified] = comparison.stats();
        assert_eq!(original.words, 3);
        assert_eq!(original.lines, 2);
        assert_eq!(modified.chars, 0);
        assert_eq!(modified.lines, 1);
        assert_eq!(comparison.original(), "a b\nc");
        assert_eq!(comparison.modified(), "");
    }
}
