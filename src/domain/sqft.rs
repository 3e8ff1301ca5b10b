// src/domain/sqft.rs

use tracing::trace;

/// A raw `total_sqft` value as it appears in a listing export.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AreaInput<'a> {
    Numeric(f64),
    Text(&'a str),
}

impl From<f64> for AreaInput<'_> {
    fn from(v: f64) -> Self {
        AreaInput::Numeric(v)
    }
}

impl<'a> From<&'a str> for AreaInput<'a> {
    fn from(s: &'a str) -> Self {
        AreaInput::Text(s)
    }
}

type Strategy = fn(&str) -> Option<f64>;

/// Tried in order; the first that succeeds wins.
const STRATEGIES: [(&str, Strategy); 3] = [
    ("exact", parse_exact),
    ("range", parse_range),
    ("longest number", parse_longest_number),
];

/// Normalize an area value to square feet.
///
/// Handles plain numbers (`"1200"`), ranges (`"2100 - 2850"`, averaged) and
/// unit-suffixed values (`"34.46Sq. Meter"`, suffix dropped). Returns `None`
/// when nothing numeric can be recovered; callers drop those rows.
pub fn normalize_sqft<'a>(input: impl Into<AreaInput<'a>>) -> Option<f64> {
    let text = match input.into() {
        AreaInput::Numeric(v) => return Some(v),
        AreaInput::Text(text) => text,
    };

    let cleaned: String = text.trim().chars().filter(|c| *c != ',').collect();
    if !cleaned.chars().any(|c| c.is_ascii_digit()) {
        return None;
    }

    STRATEGIES.iter().find_map(|(name, strategy)| {
        let value = strategy(&cleaned)?;
        trace!(strategy = *name, raw = text, value, "normalized sqft");
        Some(value)
    })
}

fn parse_finite(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

fn parse_exact(s: &str) -> Option<f64> {
    parse_finite(s)
}

fn parse_range(s: &str) -> Option<f64> {
    let (low, high) = s.split_once('-')?;
    let low = parse_finite(low)?;
    let high = parse_finite(high)?;
    Some((low + high) / 2.0)
}

/// Longest run of digits and decimal points that holds at least one digit.
/// A run glued to a word (`"abt.1200"`) loses its leading dots.
fn parse_longest_number(s: &str) -> Option<f64> {
    let is_num = |c: char| c.is_ascii_digit() || c == '.';

    let mut best: Option<&str> = None;
    let mut rest = s;
    while let Some(start) = rest.find(is_num) {
        let after_word = rest[..start]
            .chars()
            .next_back()
            .is_some_and(char::is_alphabetic);
        let tail = &rest[start..];
        let end = tail.find(|c: char| !is_num(c)).unwrap_or(tail.len());

        let mut run = &tail[..end];
        if after_word {
            run = run.trim_start_matches('.');
        }
        let has_digit = run.chars().any(|c| c.is_ascii_digit());
        if has_digit && best.map_or(true, |b| run.len() > b.len()) {
            best = Some(run);
        }

        rest = &tail[end..];
    }

    parse_finite(best?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_numbers() {
        assert_eq!(normalize_sqft("1200"), Some(1200.0));
        assert_eq!(normalize_sqft("  1056.5 "), Some(1056.5));
        assert_eq!(normalize_sqft("1,200"), Some(1200.0));
    }

    #[test]
    fn ranges_are_averaged() {
        assert_eq!(normalize_sqft("2100 - 2850"), Some(2475.0));
        assert_eq!(normalize_sqft("1133-1384"), Some(1258.5));
        assert_eq!(normalize_sqft("1,000 - 1,500"), Some(1250.0));
    }

    #[test]
    fn unit_suffixes_are_stripped() {
        assert_eq!(normalize_sqft("34.46Sq. Meter"), Some(34.46));
        assert_eq!(normalize_sqft("4125Perch"), Some(4125.0));
        assert_eq!(normalize_sqft("1000Sq. Yards"), Some(1000.0));
        assert_eq!(normalize_sqft("Approx. 1200 sqft"), Some(1200.0));
        assert_eq!(normalize_sqft("abt.1200Sq. Yards"), Some(1200.0));
        assert_eq!(normalize_sqft("Plot 3 of 2400.5 sqft"), Some(2400.5));
    }

    #[test]
    fn garbage_is_rejected() {
        assert_eq!(normalize_sqft("abc"), None);
        assert_eq!(normalize_sqft(""), None);
        assert_eq!(normalize_sqft("   "), None);
        assert_eq!(normalize_sqft("inf"), None);
        assert_eq!(normalize_sqft("NaN"), None);
        assert_eq!(normalize_sqft("-"), None);
        assert_eq!(normalize_sqft("1.2.3 sqft"), None);
    }

    #[test]
    fn numeric_input_is_returned_unchanged() {
        assert_eq!(normalize_sqft(1200.0), Some(1200.0));

        for raw in ["2100 - 2850", "1200", "34.46Sq. Meter"] {
            let once = normalize_sqft(raw).unwrap();
            assert_eq!(normalize_sqft(once), Some(once));
        }
    }
}
