use std::fmt::Write;

use crate::filter::FilterResult;

/// Build the header line:
/// `# Filter: "pattern" [mode] — N of M lines`
pub fn filter_header(result: &FilterResult) -> String {
    let hits = result.matches.len();
    let noun = if result.total_lines == 1 { "line" } else { "lines" };
    format!(
        "# Filter: \"{}\" [{}] — {hits} of {} {noun}",
        result.pattern, result.mode, result.total_lines
    )
}

/// Header plus one row per hit, line numbers right-aligned.
/// Find mode rows carry the span: `12:4-9  text`.
pub fn plain(result: &FilterResult) -> String {
    let mut out = filter_header(result);
    out.push('\n');

    let Some(last) = result.matches.last() else {
        return out;
    };
    let width = (last.line.max(1).ilog10() + 1) as usize;

    let labels: Vec<String> = result
        .matches
        .iter()
        .map(|m| match m.span {
            Some(span) => format!("{:>width$}:{span}", m.line),
            None => format!("{:>width$}", m.line),
        })
        .collect();
    let label_width = labels.iter().map(String::len).max().unwrap_or(0);

    for (label, m) in labels.iter().zip(&result.matches) {
        let _ = writeln!(out, "{label:<label_width$}  {}", m.text);
    }
    out
}

/// Pretty JSON form of the whole result.
pub fn json(result: &FilterResult) -> String {
    serde_json::to_string_pretty(result).expect("FilterResult is always serializable")
}
