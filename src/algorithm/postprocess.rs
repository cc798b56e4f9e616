use super::{DiffKind, DiffOp, DiffPart, PartitionedText};

/// Turns a per-token alignment into parts, merging runs of the same kind.
pub(super) fn build_parts(texts: &[PartitionedText; 2], alignment: &[DiffOp]) -> Vec<DiffPart> {
    let mut result: Vec<DiffPart> = vec![];
    let mut token_indices = [0, 0];

    for &op in alignment {
        let kind = op.kind();
        let movement = op.movement();
        let byte_ranges = [0, 1].map(|side| {
            let start = texts[side].part_bounds.get(token_indices[side]).copied().unwrap_or(0);
            if movement[side] == 0 {
                start..start
            } else {
                texts[side].part_range(token_indices[side])
            }
        });
        // Equal parts show the modified token.
        let shown_side = if op == DiffOp::Delete { 0 } else { 1 };
        let text = &texts[shown_side].text[byte_ranges[shown_side].clone()];

        for side in 0..2 {
            token_indices[side] += movement[side];
        }

        match result.last_mut() {
            Some(last) if last.kind == kind => {
                last.text.push_str(text);
                for side in 0..2 {
                    last.byte_ranges[side].end = byte_ranges[side].end;
                }
            }
            _ => result.push(DiffPart {
                kind,
                text: text.to_owned(),
                byte_ranges,
            }),
        }
    }

    result
}

pub(super) fn count_kind(parts: &[DiffPart], kind: DiffKind) -> usize {
    parts.iter().filter(|part| part.kind == kind).count()
}
