//! Trend report schema
//!
//! The analytics API answers with a deeply nested table:
//!
//! ```text
//! {"table": [section][row][group][value]}
//! ```
//!
//! Only two spots are read:
//! - section 1 lists one row per platform; the row's first group holds
//!   `[["linux", ...], [1234, ...]]`, i.e. the name list then the count list
//! - section 2, row 0, group 0, value 0 is the total
//!
//! Everything else is decoded loosely and ignored. A report whose shape
//! differs at one of the read spots yields a `TrendError`.

use crate::domain_models::PlatformStats;
use serde::Deserialize;
use std::collections::HashMap;

const PLATFORM_SECTION: usize = 1;
const TOTAL_SECTION: usize = 2;

/// A single leaf or nested list of the trend table
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum TrendValue {
    Number(f64),
    Text(String),
    List(Vec<TrendValue>),
    Null,
    Other(serde_json::Value),
}

pub type TrendGroup = Vec<TrendValue>;
pub type TrendRow = Vec<TrendGroup>;
pub type TrendSection = Vec<TrendRow>;

/// Body of the trend report endpoint
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TrendReport {
    pub table: Vec<TrendSection>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TrendError {
    #[error("Trend table has no section {0}")]
    MissingSection(usize),

    #[error("Trend table has no value at {0}")]
    MissingValue(String),

    #[error("Expected {expected} at {path} in trend table")]
    UnexpectedValue { path: String, expected: &'static str },
}

fn get<'a, T>(items: &'a [T], index: usize, path: &str) -> Result<&'a T, TrendError> {
    items
        .get(index)
        .ok_or_else(|| TrendError::MissingValue(format!("{}[{}]", path, index)))
}

fn as_list<'a>(value: &'a TrendValue, path: &str) -> Result<&'a [TrendValue], TrendError> {
    match value {
        TrendValue::List(values) => Ok(values),
        _ => Err(TrendError::UnexpectedValue {
            path: path.to_string(),
            expected: "a list",
        }),
    }
}

fn as_number(value: &TrendValue, path: &str) -> Result<f64, TrendError> {
    match value {
        TrendValue::Number(n) => Ok(*n),
        _ => Err(TrendError::UnexpectedValue {
            path: path.to_string(),
            expected: "a number",
        }),
    }
}

fn as_text<'a>(value: &'a TrendValue, path: &str) -> Result<&'a str, TrendError> {
    match value {
        TrendValue::Text(s) => Ok(s),
        _ => Err(TrendError::UnexpectedValue {
            path: path.to_string(),
            expected: "a string",
        }),
    }
}

impl TrendReport {
    fn section(&self, index: usize) -> Result<&TrendSection, TrendError> {
        self.table
            .get(index)
            .ok_or(TrendError::MissingSection(index))
    }

    /// Count per platform name from the platform section
    ///
    /// A platform listed twice keeps its last count.
    pub fn platform_counts(&self) -> Result<HashMap<String, f64>, TrendError> {
        let mut counts = HashMap::new();

        for (r, row) in self.section(PLATFORM_SECTION)?.iter().enumerate() {
            let row_path = format!("table[{}][{}]", PLATFORM_SECTION, r);
            let group = get(row, 0, &row_path)?;
            let group_path = format!("{}[0]", row_path);

            let names_path = format!("{}[0]", group_path);
            let names = as_list(get(group, 0, &group_path)?, &names_path)?;
            let name = as_text(get(names, 0, &names_path)?, &format!("{}[0]", names_path))?;

            let values_path = format!("{}[1]", group_path);
            let values = as_list(get(group, 1, &group_path)?, &values_path)?;
            let value = as_number(
                get(values, 0, &values_path)?,
                &format!("{}[0]", values_path),
            )?;

            counts.insert(name.to_string(), value);
        }

        Ok(counts)
    }

    /// Overall total from the total section
    pub fn total(&self) -> Result<f64, TrendError> {
        let section = self.section(TOTAL_SECTION)?;
        let path = format!("table[{}]", TOTAL_SECTION);
        let row = get(section, 0, &path)?;
        let path = format!("{}[0]", path);
        let group = get(row, 0, &path)?;
        let path = format!("{}[0]", path);
        let value = get(group, 0, &path)?;
        as_number(value, &format!("{}[0]", path))
    }
}

impl TryFrom<&TrendReport> for PlatformStats {
    type Error = TrendError;

    /// Extract `[linux, windows, darwin, total]`; absent platforms are zero
    fn try_from(report: &TrendReport) -> Result<Self, Self::Error> {
        let counts = report.platform_counts()?;
        let count = |platform: &str| counts.get(platform).copied().unwrap_or_default();

        Ok(PlatformStats {
            linux: count("linux"),
            windows: count("windows"),
            darwin: count("darwin"),
            total: report.total()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const REPORT: &str = r#"{
        "table": [
            [[["header"]]],
            [
                [[["linux", "Linux"], [1200, 0.5]], ["extra", true]],
                [[["windows"], [800.0]]],
                [[["darwin"], [400]]]
            ],
            [[[2400, null]]]
        ]
    }"#;

    fn report(json: &str) -> TrendReport {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_extract_stats() {
        let stats = PlatformStats::try_from(&report(REPORT)).unwrap();
        assert_eq!(stats.as_array(), [1200.0, 800.0, 400.0, 2400.0]);
    }

    #[test]
    fn test_missing_platform_is_zero() {
        let json = r#"{
            "table": [
                [],
                [
                    [[["linux"], [10]]],
                    [[["darwin"], [5]]]
                ],
                [[[15]]]
            ]
        }"#;
        let stats = PlatformStats::try_from(&report(json)).unwrap();
        assert_eq!(stats.as_array(), [10.0, 0.0, 5.0, 15.0]);
    }

    #[test]
    fn test_unknown_platforms_are_ignored() {
        let json = r#"{"table": [[], [[[["freebsd"], [3]]]], [[[3]]]]}"#;
        let stats = PlatformStats::try_from(&report(json)).unwrap();
        assert_eq!(stats.as_array(), [0.0, 0.0, 0.0, 3.0]);
    }

    #[test]
    fn test_missing_section() {
        let json = r#"{"table": [[], [[[["linux"], [1]]]]]}"#;
        let err = PlatformStats::try_from(&report(json)).unwrap_err();
        assert_eq!(err, TrendError::MissingSection(2));
    }

    #[test]
    fn test_wrong_value_type() {
        let json = r#"{"table": [[], [[[["linux"], ["many"]]]], [[[1]]]]}"#;
        let err = PlatformStats::try_from(&report(json)).unwrap_err();
        assert_eq!(
            err,
            TrendError::UnexpectedValue {
                path: "table[1][0][0][1][0]".to_string(),
                expected: "a number",
            }
        );
    }

    #[test]
    fn test_platform_name_not_a_list() {
        let json = r#"{"table": [[], [[["linux", [1]]]], [[[1]]]]}"#;
        let err = PlatformStats::try_from(&report(json)).unwrap_err();
        assert!(matches!(err, TrendError::UnexpectedValue { expected: "a list", .. }));
    }

    #[test]
    fn test_missing_total_value() {
        let json = r#"{"table": [[], [], [[[]]]]}"#;
        let err = report(json).total().unwrap_err();
        assert_eq!(err, TrendError::MissingValue("table[2][0][0][0]".to_string()));
    }

    #[test]
    fn test_non_table_body_fails_to_decode() {
        assert!(serde_json::from_str::<TrendReport>(r#"{"table": {"rows": 1}}"#).is_err());
    }
}
