use super::algorithm::{Diff, DiffKind, DiffOptions, DiffPart, DiffSummary};
use super::comparison::Comparison;
use super::config::{Style, Theme};
use super::stats::TextStats;
use crossterm::style::{Attribute, ContentStyle};
use serde::Serialize;
use std::error::Error;
use std::io;

type TheResult = Result<(), Box<dyn Error>>;

pub fn content_style(style: &Style) -> ContentStyle {
    let mut result = ContentStyle::new();
    result.foreground_color = style.fg;
    result.background_color = style.bg;
    let attributes = [
        (style.bold, Attribute::Bold),
        (style.underlined, Attribute::Underlined),
        (style.dim, Attribute::Dim),
        (style.italic, Attribute::Italic),
        (style.crossed_out, Attribute::CrossedOut),
    ];
    for (enabled, attribute) in attributes {
        if enabled == Some(true) {
            result.attributes.set(attribute);
        }
    }
    result
}

/// Writes `text` in `style`, or unstyled when `theme` is `None`.
///
/// Newlines are always written unstyled because terminals extend the background
/// color of a styled newline to the end of the line.
fn write_styled(output: &mut impl io::Write, style: Option<&Style>, text: &str) -> TheResult {
    let Some(style) = style else {
        write!(output, "{text}")?;
        return Ok(());
    };
    let style = content_style(style);
    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            writeln!(output)?;
        }
        if !line.is_empty() {
            write!(output, "{}", style.apply(line))?;
        }
    }
    Ok(())
}

fn similarity_style(theme: &Theme, similarity: u8) -> &Style {
    if similarity > 80 {
        &theme.similarity_high
    } else if similarity > 50 {
        &theme.similarity_medium
    } else {
        &theme.similarity_low
    }
}

/// Prints the modified text with the deleted text of the original in place.
///
/// With a theme the kinds are told apart by style, without one deletions are
/// wrapped in `[-...-]` and insertions in `{+...+}`.
pub fn print_inline(diff: &Diff, theme: Option<&Theme>, output: &mut impl io::Write) -> TheResult {
    for part in &diff.parts {
        match theme {
            Some(theme) => {
                let style = match part.kind {
                    DiffKind::Equal => &theme.equal,
                    DiffKind::Insert => &theme.insert,
                    DiffKind::Delete => &theme.delete,
                };
                write_styled(output, Some(style), &part.text)?;
            }
            None => match part.kind {
                DiffKind::Equal => write!(output, "{}", part.text)?,
                DiffKind::Insert => write!(output, "{{+{}+}}", part.text)?,
                DiffKind::Delete => write!(output, "[-{}-]", part.text)?,
            },
        }
    }
    let ends_with_newline = diff.parts.last().map_or(true, |part| part.text.ends_with('\n'));
    if !ends_with_newline {
        writeln!(output)?;
    }
    Ok(())
}

pub fn print_summary(
    summary: DiffSummary,
    similarity: u8,
    theme: Option<&Theme>,
    output: &mut impl io::Write,
) -> TheResult {
    write_styled(
        output,
        theme.map(|t| &t.additions),
        &format!("+{} additions", summary.additions),
    )?;
    write!(output, ", ")?;
    write_styled(
        output,
        theme.map(|t| &t.deletions),
        &format!("-{} deletions", summary.deletions),
    )?;
    write!(output, ", ")?;
    write_styled(output, theme.map(|t| &t.label), "similarity ")?;
    write_styled(
        output,
        theme.map(|t| similarity_style(t, similarity)),
        &format!("{similarity}%"),
    )?;
    writeln!(output)?;
    Ok(())
}

pub fn print_stats(comparison: &Comparison, theme: Option<&Theme>, output: &mut impl io::Write) -> TheResult {
    let [original, modified] = comparison.stats();
    let label = theme.map(|t| &t.label);
    write_styled(output, label, &format!("{:<12}{:>10}{:>10}", "", "original", "modified"))?;
    writeln!(output)?;
    let rows = [
        ("chars", original.chars, modified.chars),
        ("words", original.words, modified.words),
        ("lines", original.lines, modified.lines),
    ];
    for (name, original, modified) in rows {
        write_styled(output, label, &format!("{name:<12}"))?;
        writeln!(output, "{original:>10}{modified:>10}")?;
    }
    write_styled(output, label, &format!("{:<12}", "similarity"))?;
    let similarity = comparison.similarity();
    write_styled(
        output,
        theme.map(|t| similarity_style(t, similarity)),
        &format!("{:>10}", format!("{similarity}%")),
    )?;
    writeln!(output)?;
    Ok(())
}

#[derive(Serialize)]
struct JsonReport<'a> {
    options: DiffOptions,
    parts: &'a [DiffPart],
    summary: DiffSummary,
    similarity: u8,
    stats: [TextStats; 2],
}

pub fn print_json(comparison: &Comparison, output: &mut impl io::Write) -> TheResult {
    let report = JsonReport {
        options: comparison.options(),
        parts: comparison.parts(),
        summary: comparison.summary(),
        similarity: comparison.similarity(),
        stats: comparison.stats(),
    };
    serde_json::to_writer_pretty(&mut *output, &report)?;
    writeln!(output)?;
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::config::default_theme;

    fn render(f: impl FnOnce(&mut Vec<u8>) -> TheResult) -> String {
        let mut output = vec![];
        f(&mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn plain_inline_markers() {
        let comparison = Comparison::new("猫追狗。", "猫追了狗", DiffOptions::default());
        let text = render(|out| print_inline(comparison.diff(), None, out));
        assert_eq!(text, "猫追{+了+}狗[-。-]\n");
    }

    #[test]
    fn plain_inline_keeps_final_newline() {
        let comparison = Comparison::new("a\n", "b\n", DiffOptions::default());
        let text = render(|out| print_inline(comparison.diff(), None, out));
        assert_eq!(text, "[-a-]{+b+}\n");
    }

    #[test]
    fn empty_diff_prints_nothing() {
        let comparison = Comparison::new("", "", DiffOptions::default());
        assert_eq!(render(|out| print_inline(comparison.diff(), None, out)), "");
    }

    #[test]
    fn colored_inline_leaves_newlines_unstyled() {
        let comparison = Comparison::new("", "x\ny", DiffOptions::default());
        let theme = default_theme();
        let text = render(|out| print_inline(comparison.diff(), Some(&theme), out));
        assert!(text.contains('\x1b'));
        assert!(!text.contains("{+"));
        let first_line = text.split('\n').next().unwrap();
        assert!(first_line.ends_with("\x1b[0m"), "{text:?}");
    }

    #[test]
    fn plain_summary() {
        let comparison = Comparison::new("猫追狗", "猫追了狗", DiffOptions::default());
        let text = render(|out| print_summary(comparison.summary(), comparison.similarity(), None, out));
        assert_eq!(text, "+1 additions, -0 deletions, similarity 75%\n");
    }

    #[test]
    fn plain_stats() {
        let comparison = Comparison::new("a b\nc", "a b", DiffOptions::default());
        let text = render(|out| print_stats(&comparison, None, out));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[1], "chars                5         3");
        assert_eq!(lines[2], "words                3         2");
        assert_eq!(lines[3], "lines                2         1");
        assert_eq!(lines[4], "similarity         60%");
    }

    #[test]
    fn json_report() {
        let comparison = Comparison::new("猫追狗", "猫追了狗", DiffOptions::default());
        let text = render(|out| print_json(&comparison, out));
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["similarity"], 75);
        assert_eq!(value["summary"]["additions"], 1);
        assert_eq!(value["parts"][1]["kind"], "insert");
        assert_eq!(value["parts"][1]["text"], "了");
        assert_eq!(value["options"]["ignore_case"], false);
        assert_eq!(value["stats"][1]["chars"], 4);
    }
}
