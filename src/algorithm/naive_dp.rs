use std::ops::Index;

use super::DiffOp;

/// Longest-common-subsequence lengths for every pair of prefixes, stored row-major
/// in one buffer of `(old_len + 1) * (new_len + 1)` cells.
pub(super) struct LcsTable {
    columns: usize,
    cells: Vec<u32>,
}

impl LcsTable {
    pub fn compute<T: Eq>(old: &[T], new: &[T]) -> LcsTable {
        let columns = new.len() + 1;
        let mut cells = vec![0u32; (old.len() + 1) * columns];
        for old_index in 1..=old.len() {
            let row = old_index * columns;
            let previous_row = row - columns;
            for new_index in 1..=new.len() {
                cells[row + new_index] = if old[old_index - 1] == new[new_index - 1] {
                    cells[previous_row + new_index - 1] + 1
                } else {
                    cells[previous_row + new_index].max(cells[row + new_index - 1])
                };
            }
        }
        LcsTable { columns, cells }
    }

    pub fn lcs_len(&self) -> usize {
        self.cells.last().copied().unwrap_or(0) as usize
    }

    pub fn sizes(&self) -> [usize; 2] {
        [self.cells.len() / self.columns - 1, self.columns - 1]
    }
}

impl Index<[usize; 2]> for LcsTable {
    type Output = u32;

    fn index(&self, [old_index, new_index]: [usize; 2]) -> &u32 {
        &self.cells[old_index * self.columns + new_index]
    }
}

/// Walks the table from the bottom-right corner back to the origin. Equal tokens
/// are matched greedily; otherwise an insertion is preferred whenever it keeps at
/// least as long a common subsequence as a deletion would.
pub(super) fn backtrack<T: Eq>(table: &LcsTable, old: &[T], new: &[T]) -> Vec<DiffOp> {
    let mut result = Vec::with_capacity(old.len() + new.len());
    let mut indices = table.sizes();
    while indices[0] > 0 || indices[1] > 0 {
        let [i, j] = indices;
        let op = if i > 0 && j > 0 && old[i - 1] == new[j - 1] {
            DiffOp::Match
        } else if j > 0 && (i == 0 || table[[i, j - 1]] >= table[[i - 1, j]]) {
            DiffOp::Insert
        } else {
            DiffOp::Delete
        };
        result.push(op);
        for side in 0..2 {
            indices[side] -= op.movement()[side];
        }
    }
    result.reverse();
    result
}
