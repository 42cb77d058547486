//! Catalog statistics

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Aggregate counts over the whole catalog
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StatsResponse {
    pub total_articles: i64,
    pub total_principles: i64,
    pub total_procedures: i64,
    pub total_math_models: i64,
    /// `"1970s" -> count`; decades without articles are absent
    pub articles_by_decade: BTreeMap<String, i64>,
    /// `category -> count`; uncategorized principles are absent
    pub principles_by_category: BTreeMap<String, i64>,
}

/// Decade bucket label: `floor(year / 10) * 10` followed by `s`.
/// Computed in `i64` so years near `i32::MIN` cannot overflow.
pub fn decade_label(year: i32) -> String {
    format!("{}s", i64::from(year).div_euclid(10) * 10)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decade_labels() {
        assert_eq!(decade_label(1938), "1930s");
        assert_eq!(decade_label(1970), "1970s");
        assert_eq!(decade_label(1975), "1970s");
        assert_eq!(decade_label(2000), "2000s");
        assert_eq!(decade_label(-5), "-10s");
    }

    #[test]
    fn extreme_years_do_not_overflow() {
        assert_eq!(decade_label(i32::MIN), "-2147483650s");
        assert_eq!(decade_label(i32::MAX), "2147483640s");
    }
}
