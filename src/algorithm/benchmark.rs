use std::time::{Duration, Instant};

use rand::{seq::SliceRandom, Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::{compute_diff, preprocess::partition_into_tokens, DiffOptions};
use crate::similarity::similarity;

const IDEOGRAPHS: &[char] = &['猫', '追', '了', '狗', '清', '晨', '城', '市', '醒', '来', '风', '很', '轻'];
const WORDS: &[&str] = &["the", "city", "wakes", "slowly", "Wind", "x_1", "42"];
const SEPARATORS: &[&str] = &[" ", "  ", "\n", "，", "。", ", ", ". ", "——"];

/// Appends roughly `approx_len` bytes of mixed CJK and Latin text.
pub fn random_text(rng: &mut impl Rng, approx_len: usize) -> String {
    let mut result = String::new();
    while result.len() < approx_len {
        match rng.gen_range(0..4) {
            0 | 1 => result.push(*IDEOGRAPHS.choose(rng).unwrap_or(&'猫')),
            2 => result.push_str(WORDS.choose(rng).unwrap_or(&"the")),
            _ => result.push_str(SEPARATORS.choose(rng).unwrap_or(&" ")),
        }
    }
    result
}

/// Copies `text` while replacing, dropping or inserting a random share of its tokens.
pub fn mutate(rng: &mut impl Rng, text: &str, change_percent: u32) -> String {
    let bounds = partition_into_tokens(text);
    let mut result = String::new();
    for w in bounds.windows(2) {
        let token = &text[w[0]..w[1]];
        if rng.gen_range(0..100) >= change_percent {
            result.push_str(token);
            continue;
        }
        match rng.gen_range(0..3) {
            0 => {}
            1 => result.push_str(&random_text(rng, 1)),
            _ => {
                result.push_str(token);
                result.push_str(&random_text(rng, 1));
            }
        }
    }
    result
}

pub struct Testcase {
    pub texts: [String; 2],
}

impl Testcase {
    pub fn generate(seed: u64, approx_len: usize, change_percent: u32) -> Testcase {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let old = random_text(&mut rng, approx_len);
        let new = mutate(&mut rng, &old, change_percent);
        Testcase { texts: [old, new] }
    }

    pub fn token_counts(&self) -> [usize; 2] {
        [0, 1].map(|side| partition_into_tokens(&self.texts[side]).len() - 1)
    }
}

pub struct Measurement {
    pub diff_time: Duration,
    pub similarity_time: Duration,
    pub parts: usize,
    pub similarity: u8,
}

pub fn measure(testcase: &Testcase, options: DiffOptions) -> Measurement {
    let start = Instant::now();
    let diff = compute_diff(&testcase.texts[0], &testcase.texts[1], options);
    let diff_time = start.elapsed();

    let start = Instant::now();
    let similarity = similarity(&testcase.texts[0], &testcase.texts[1]);
    let similarity_time = start.elapsed();

    Measurement {
        diff_time,
        similarity_time,
        parts: diff.parts.len(),
        similarity,
    }
}
