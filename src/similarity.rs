/// Levenshtein distance over Unicode scalar values, with unit costs for
/// substitution, insertion and deletion.
///
/// Only two rows of the table are kept, each as long as the shorter input.
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let (longer, shorter) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    if shorter.is_empty() {
        return longer.len();
    }

    let mut previous_row: Vec<usize> = (0..=shorter.len()).collect();
    let mut current_row = vec![0; shorter.len() + 1];
    for (i, &l) in longer.iter().enumerate() {
        current_row[0] = i + 1;
        for (j, &s) in shorter.iter().enumerate() {
            let cost = if l == s { 0 } else { 1 };
            current_row[j + 1] = (current_row[j] + 1)
                .min(previous_row[j + 1] + 1)
                .min(previous_row[j] + cost);
        }
        std::mem::swap(&mut previous_row, &mut current_row);
    }
    previous_row[shorter.len()]
}

/// Percentage of the longer text that survives the edit, `0..=100`, rounded half up.
///
/// Normalization options never apply here; the comparison is exact and
/// case-sensitive.
pub fn similarity(a: &str, b: &str) -> u8 {
    match (a.is_empty(), b.is_empty()) {
        (true, true) => return 100,
        (true, false) | (false, true) => return 0,
        (false, false) => {}
    }
    let longest = a.chars().count().max(b.chars().count());
    let distance = levenshtein_distance(a, b);
    percent_rounded(longest - distance, longest)
}

/// `round(100 * kept / total)` with halves rounded up, in integers.
fn percent_rounded(kept: usize, total: usize) -> u8 {
    debug_assert!(kept <= total && total > 0);
    let value = (200 * kept + total) / (2 * total);
    value as u8
}
