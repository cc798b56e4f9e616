pub mod benchmark;
pub mod equivalence;
mod naive_dp;
mod postprocess;
pub mod preprocess;

pub use self::equivalence::{DiffOption, DiffOptions};

use self::{
    naive_dp::{backtrack, LcsTable},
    preprocess::{class_histogram, internalize_parts, partition_into_tokens},
};
use serde::Serialize;
use std::ops::Range;

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct Diff {
    /// One op per token, in left-to-right order.
    pub ops: Vec<DiffOp>,
    pub parts: Vec<DiffPart>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiffPart {
    pub kind: DiffKind,
    /// For `Equal` parts this is the text of the modified side.
    pub text: String,
    /// Byte ranges covered in the original (`[0]`) and modified (`[1]`) text.
    pub byte_ranges: [Range<usize>; 2],
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiffKind {
    Equal,
    Insert,
    Delete,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize)]
pub enum DiffOp {
    Match,
    Insert,
    Delete,
}

impl DiffOp {
    pub fn movement(&self) -> [usize; 2] {
        match self {
            DiffOp::Delete => [1, 0],
            DiffOp::Insert => [0, 1],
            DiffOp::Match => [1, 1],
        }
    }

    pub fn kind(&self) -> DiffKind {
        match self {
            DiffOp::Delete => DiffKind::Delete,
            DiffOp::Insert => DiffKind::Insert,
            DiffOp::Match => DiffKind::Equal,
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DiffSummary {
    pub additions: usize,
    pub deletions: usize,
}

impl DiffSummary {
    pub fn of_parts(parts: &[DiffPart]) -> DiffSummary {
        DiffSummary {
            additions: postprocess::count_kind(parts, DiffKind::Insert),
            deletions: postprocess::count_kind(parts, DiffKind::Delete),
        }
    }
}

impl Diff {
    pub fn summary(&self) -> DiffSummary {
        DiffSummary::of_parts(&self.parts)
    }

    pub fn is_identical(&self) -> bool {
        self.parts.iter().all(|part| part.kind == DiffKind::Equal)
    }

    /// Rebuilds the original text by reading `original` through the byte ranges,
    /// since `Equal` parts hold modified text. `None` if a range does not fit
    /// `original`, which happens when it is not the text this diff was computed from.
    pub fn reconstruct_original(&self, original: &str) -> Option<String> {
        let mut result = String::new();
        for part in &self.parts {
            if part.kind != DiffKind::Insert {
                result.push_str(original.get(part.byte_ranges[0].clone())?);
            }
        }
        Some(result)
    }

    pub fn reconstruct_modified(&self) -> String {
        self.parts
            .iter()
            .filter(|part| part.kind != DiffKind::Delete)
            .map(|part| part.text.as_str())
            .collect()
    }
}

#[derive(Default, Clone)]
struct PartitionedText<'a> {
    pub text: &'a str,
    pub part_bounds: &'a [usize],
}

impl<'a> PartitionedText<'a> {
    pub fn part_count(&self) -> usize {
        if self.part_bounds.is_empty() {
            0
        } else {
            self.part_bounds.len() - 1
        }
    }

    pub fn get_part(&self, index: usize) -> &'a str {
        &self.text[self.part_bounds[index]..self.part_bounds[index + 1]]
    }

    pub fn part_range(&self, index: usize) -> Range<usize> {
        self.part_bounds[index]..self.part_bounds[index + 1]
    }
}

/// Aligns the tokens of `original` and `modified` along a longest common
/// subsequence and returns both the per-token edit script and the merged parts.
///
/// Time and memory are `O(m * n)` in the token counts.
pub fn compute_diff(original: &str, modified: &str, options: DiffOptions) -> Diff {
    let token_bounds = [partition_into_tokens(original), partition_into_tokens(modified)];
    let texts = [
        PartitionedText {
            text: original,
            part_bounds: &token_bounds[0],
        },
        PartitionedText {
            text: modified,
            part_bounds: &token_bounds[1],
        },
    ];

    if log::log_enabled!(log::Level::Trace) {
        for (side, text) in texts.iter().enumerate() {
            log::trace!("side {side} token classes: {:?}", class_histogram(text));
        }
    }

    let symbols = internalize_parts(&texts, options);
    let table = LcsTable::compute(&symbols[0], &symbols[1]);
    log::trace!(
        "lcs table {}x{}, common tokens: {}",
        symbols[0].len() + 1,
        symbols[1].len() + 1,
        table.lcs_len()
    );

    let ops = backtrack(&table, &symbols[0], &symbols[1]);
    let parts = postprocess::build_parts(&texts, &ops);
    Diff { ops, parts }
}

pub fn diff(original: &str, modified: &str, options: DiffOptions) -> Vec<DiffPart> {
    compute_diff(original, modified, options).parts
}
