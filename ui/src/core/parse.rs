//! Best-effort parsing of learner-pasted "label: value" lines.
//!
//! The pantry and plating exercises both accept small free-text datasets, one
//! data point per line. Colons, commas, and whitespace are all accepted as
//! separators (in any mix), which means a multi-word label keeps only its
//! first word; that limitation is part of the documented contract, so the
//! parser must not try to be smarter about it.

/// One parsed data line: first token as the label, last token as the value.
#[derive(Debug, Clone, PartialEq)]
pub struct DataPoint {
    pub label: String,
    pub value: f64,
}

/// Ordered parse output; input line order is preserved and duplicate labels
/// are kept as-is.
pub type Series = Vec<DataPoint>;

/// Parse raw multi-line text into a series.
///
/// Lines that cannot yield a `(label, value)` pair are dropped silently:
/// blank lines, lines with fewer than two tokens, and lines whose last token
/// is not a number. This is a lossy parse; it never fails.
pub fn parse(raw: &str) -> Series {
    let mut series = Series::new();

    for line in raw.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let tokens: Vec<&str> = line
            .split(|c: char| c == ':' || c == ',' || c.is_whitespace())
            .filter(|token| !token.is_empty())
            .collect();

        if tokens.len() < 2 {
            continue;
        }

        let Ok(value) = tokens[tokens.len() - 1].parse::<f64>() else {
            continue;
        };

        series.push(DataPoint {
            label: tokens[0].to_string(),
            value,
        });
    }

    series
}

/// Strip one leading and one trailing quote (single or double) from a
/// COUNTIF criteria, so both `돈까스` and `"돈까스"` compare equal.
pub fn strip_quotes(criteria: &str) -> &str {
    let mut stripped = criteria;
    if let Some(rest) = stripped
        .strip_prefix('"')
        .or_else(|| stripped.strip_prefix('\''))
    {
        stripped = rest;
    }
    if let Some(rest) = stripped
        .strip_suffix('"')
        .or_else(|| stripped.strip_suffix('\''))
    {
        stripped = rest;
    }
    stripped
}

/// COUNTIF-style exact counting: how many trimmed, non-empty lines of `data`
/// equal the (quote-stripped) criteria.
pub fn count_matching(data: &str, criteria: &str) -> usize {
    let needle = strip_quotes(criteria.trim());
    data.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter(|line| *line == needle)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(series: &Series) -> Vec<&str> {
        series.iter().map(|p| p.label.as_str()).collect()
    }

    #[test]
    fn well_formed_lines_parse_in_order() {
        let series = parse("국어: 15\n수학: 10\n사회: 20\n과학: 25\n체육: 30");
        assert_eq!(series.len(), 5);
        assert_eq!(labels(&series), ["국어", "수학", "사회", "과학", "체육"]);
        assert_eq!(series[0].value, 15.0);
        assert_eq!(series[4].value, 30.0);
    }

    #[test]
    fn malformed_lines_are_dropped_silently() {
        let series = parse("국어: 15\n수학: 10\nㅋㅋㅋ");
        assert_eq!(series.len(), 2);
        assert_eq!(labels(&series), ["국어", "수학"]);
    }

    #[test]
    fn non_numeric_value_drops_whole_line() {
        let series = parse("apples: ten\nbananas: 4");
        assert_eq!(series.len(), 1);
        assert_eq!(series[0].label, "bananas");
    }

    #[test]
    fn separators_mix_freely() {
        let series = parse("a,1\nb 2\nc: 3\nd ,: 4");
        assert_eq!(series.len(), 4);
        assert_eq!(
            series.iter().map(|p| p.value).collect::<Vec<_>>(),
            [1.0, 2.0, 3.0, 4.0]
        );
    }

    #[test]
    fn middle_tokens_are_discarded() {
        let series = parse("a: b: 5");
        assert_eq!(series.len(), 1);
        assert_eq!(series[0].label, "a");
        assert_eq!(series[0].value, 5.0);
    }

    #[test]
    fn duplicate_labels_are_kept_not_merged() {
        let series = parse("돈까스: 3\n돈까스: 7");
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].value, 3.0);
        assert_eq!(series[1].value, 7.0);
    }

    #[test]
    fn parse_is_idempotent() {
        let raw = "체육: 30\n수학 10\nnoise\n , :\n국어, 15";
        assert_eq!(parse(raw), parse(raw));
    }

    #[test]
    fn empty_input_yields_empty_series() {
        assert!(parse("").is_empty());
        assert!(parse("\n  \n\t\n").is_empty());
    }

    #[test]
    fn countif_matches_exact_lines() {
        let data = "돈까스\n스파게티\n돈까스";
        assert_eq!(count_matching(data, "돈까스"), 2);
        assert_eq!(count_matching(data, "스파게티"), 1);
        assert_eq!(count_matching(data, "피자"), 0);
    }

    #[test]
    fn countif_strips_surrounding_quotes() {
        let data = "돈까스\n스파게티\n돈까스";
        assert_eq!(count_matching(data, "\"돈까스\""), 2);
        assert_eq!(count_matching(data, "'돈까스'"), 2);
    }

    #[test]
    fn quote_stripping_is_single_layer_and_sided() {
        assert_eq!(strip_quotes("\"pasta\""), "pasta");
        assert_eq!(strip_quotes("'pasta"), "pasta");
        assert_eq!(strip_quotes("pasta'"), "pasta");
        assert_eq!(strip_quotes("\"\"pasta\"\""), "\"pasta\"");
    }
}
