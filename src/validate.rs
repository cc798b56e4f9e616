use super::algorithm::{preprocess::partition_into_tokens, Diff, DiffKind};

pub fn validate(diff: &Diff, texts: [&str; 2]) -> Vec<String> {
    let mut errors = vec![];

    fn part_str(part_id: usize, side: usize) -> String {
        let side_name = ["Original", "Modified"][side];
        format!("{side_name} side of part {part_id}")
    }

    // Adjacent parts should never have the same kind.
    for (part_id, pair) in diff.parts.windows(2).enumerate() {
        if pair[0].kind == pair[1].kind {
            errors.push(format!(
                "Parts {} and {} are both {:?} and should have been merged",
                part_id,
                part_id + 1,
                pair[0].kind
            ));
        }
    }

    // Parts should never be empty.
    for (part_id, part) in diff.parts.iter().enumerate() {
        if part.text.is_empty() {
            errors.push(format!("Part {part_id} has empty text"));
        }
    }

    // The side a part doesn't touch should have an empty range, the other side a non-empty one.
    for (part_id, part) in diff.parts.iter().enumerate() {
        let used = match part.kind {
            DiffKind::Equal => [true, true],
            DiffKind::Insert => [false, true],
            DiffKind::Delete => [true, false],
        };
        for side in 0..2 {
            let range = &part.byte_ranges[side];
            if range.start > range.end {
                errors.push(format!("{} has a reversed range {range:?}", part_str(part_id, side)));
            } else if used[side] && range.is_empty() {
                errors.push(format!("{} is empty, but the part is {:?}", part_str(part_id, side), part.kind));
            } else if !used[side] && !range.is_empty() {
                errors.push(format!(
                    "{} is non-empty, but the part is {:?}",
                    part_str(part_id, side),
                    part.kind
                ));
            }
        }
    }

    // The parts of each side should exactly cover the text.
    for side in 0..2 {
        let side_name = ["original", "modified"][side];
        let mut current_offset = 0;
        for (part_id, part) in diff.parts.iter().enumerate() {
            let range = &part.byte_ranges[side];
            if range.start != current_offset {
                errors.push(format!("The {side_name} side of part {part_id} starts at offset {}, but it should start at offset {current_offset}", range.start));
            }
            current_offset = range.end.max(current_offset);
        }
        let text_size = texts[side].len();
        if current_offset != text_size {
            errors.push(format!(
                "The last part of the {side_name} side ends at offset {current_offset}, but the text is {text_size} bytes long"
            ));
        }
    }

    // The text of a part should be what its range covers: Equal and Insert show the
    // modified text, Delete shows the original text.
    for (part_id, part) in diff.parts.iter().enumerate() {
        let side = if part.kind == DiffKind::Delete { 0 } else { 1 };
        match texts[side].get(part.byte_ranges[side].clone()) {
            Some(expected) if expected == part.text => {}
            Some(_) => errors.push(format!("{} does not match the part text", part_str(part_id, side))),
            None => errors.push(format!(
                "{} has range {:?} outside of the text or not on a char boundary",
                part_str(part_id, side),
                part.byte_ranges[side]
            )),
        }
    }

    // The edit script should consume every token of both texts.
    for side in 0..2 {
        let token_count = partition_into_tokens(texts[side]).len() - 1;
        let consumed: usize = diff.ops.iter().map(|op| op.movement()[side]).sum();
        if consumed != token_count {
            errors.push(format!(
                "The ops consume {consumed} tokens of side {side}, but it has {token_count} tokens"
            ));
        }
    }

    // Ops and parts should agree on the sequence of kinds.
    let mut op_kinds: Vec<DiffKind> = diff.ops.iter().map(|op| op.kind()).collect();
    op_kinds.dedup();
    let part_kinds: Vec<DiffKind> = diff.parts.iter().map(|part| part.kind).collect();
    if op_kinds != part_kinds {
        errors.push(format!(
            "The ops produce the kinds {op_kinds:?}, but the parts have {part_kinds:?}"
        ));
    }

    errors
}

pub fn print_errors(errors: &[String]) {
    if !errors.is_empty() {
        log::error!("diff failed validation with {} errors", errors.len());
        eprintln!("Diff validation errors:");
        for error in errors {
            eprintln!("  {error}");
        }
    }
}
