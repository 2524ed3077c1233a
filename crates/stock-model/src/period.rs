//! Report period (`YYYY-MM`) derived from the input filename.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// Year and month as written in report filenames, e.g. `2025年7月`.
static PERIOD_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d{4})年(\d{1,2})月").expect("Invalid period regex"));

/// Year-month identifier of one report, formatted `YYYY-MM`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Period(String);

impl Period {
    /// Extract the period from a filename such as `2025年7月份成品仓库报表.xls`.
    ///
    /// The month is zero-padded to two digits.
    pub fn from_filename(name: &str) -> Result<Self> {
        let captures = PERIOD_REGEX
            .captures(name)
            .ok_or_else(|| ModelError::InvalidPeriod {
                name: name.to_string(),
            })?;
        let year = &captures[1];
        let month = &captures[2];
        Ok(Self(format!("{year}-{month:0>2}")))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_single_digit_month() {
        let period = Period::from_filename("2025年7月份成品仓库报表.xls").unwrap();
        assert_eq!(period.as_str(), "2025-07");
    }

    #[test]
    fn keeps_two_digit_month() {
        let period = Period::from_filename("2025年07月份成品仓库报表.xlsx").unwrap();
        assert_eq!(period.as_str(), "2025-07");
        let period = Period::from_filename("2024年12月份成品仓库报表.xlsx").unwrap();
        assert_eq!(period.to_string(), "2024-12");
    }

    #[test]
    fn rejects_names_without_period() {
        let err = Period::from_filename("report.xlsx").unwrap_err();
        assert_eq!(err.to_string(), "cannot parse period from 'report.xlsx'");
    }
}
