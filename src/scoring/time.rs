use std::cmp::Ordering;
use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

use crate::errors::{Error, Result};

/// Finish times travel as free text like "12.5s". Accepted input is a
/// decimal number of seconds with an optional trailing `s`; everything else
/// is rejected at the boundary instead of leaking into the ranking.
fn time_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^\s*([0-9]+(?:\.[0-9]+)?)\s*s?\s*$").expect("time pattern compiles")
    })
}

/// A parsed finish time in seconds. Lower is better.
#[derive(Debug, Clone, PartialEq)]
pub struct FinishTime {
    raw: String,
    seconds: f64,
}

impl FinishTime {
    pub fn parse(text: &str) -> Result<Self> {
        let captures = time_pattern().captures(text).ok_or_else(|| {
            Error::validation(format!(
                "Invalid time \"{text}\": expected seconds like \"12.5s\""
            ))
        })?;

        let seconds: f64 = captures[1]
            .parse()
            .map_err(|_| Error::validation(format!("Invalid time \"{text}\"")))?;

        Ok(Self {
            raw: text.trim().to_string(),
            seconds,
        })
    }

    pub fn seconds(&self) -> f64 {
        self.seconds
    }

    /// The input as typed (trimmed); times are stored verbatim.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn cmp_seconds(&self, other: &Self) -> Ordering {
        self.seconds.total_cmp(&other.seconds)
    }
}

impl fmt::Display for FinishTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_the_suggested_convention() {
        let time = FinishTime::parse("12.5s").expect("parses");
        assert_eq!(time.seconds(), 12.5);
        assert_eq!(time.raw(), "12.5s");
    }

    #[test]
    fn suffix_and_padding_are_optional() {
        assert_eq!(FinishTime::parse("42").expect("bare number").seconds(), 42.0);
        assert_eq!(
            FinishTime::parse(" 9.01 s ").expect("spaced suffix").seconds(),
            9.01
        );
    }

    #[test]
    fn rejects_anything_else() {
        for bad in ["", "s", "fast", "12,5s", "-3s", "1.2.3", "12m"] {
            let err = FinishTime::parse(bad).expect_err("must be rejected");
            assert!(err.is_validation(), "{bad}: {err:?}");
        }
    }

    #[test]
    fn orders_by_parsed_seconds() {
        let a = FinishTime::parse("10.9s").expect("a");
        let b = FinishTime::parse("11.2s").expect("b");
        assert_eq!(a.cmp_seconds(&b), Ordering::Less);
        assert_eq!(b.cmp_seconds(&a), Ordering::Greater);
        assert_eq!(
            a.cmp_seconds(&FinishTime::parse("10.90").expect("c")),
            Ordering::Equal
        );
    }
}
