use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Calendar month, ordered chronologically
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct YearMonth {
    pub year: i32,
    /// 1..=12
    pub month: u32,
}

impl YearMonth {
    /// `None` unless `month` is in 1..=12
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { year, month })
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Following month, December rolls over into January
    pub fn next(self) -> Self {
        if self.month >= 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    pub fn first_day(self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02}", self.year, self.month)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_rolls_over_december() {
        let dec = YearMonth::new(2018, 12).unwrap();
        assert_eq!(dec.next(), YearMonth::new(2019, 1).unwrap());
        assert_eq!(YearMonth::new(2018, 7).unwrap().next(), YearMonth::new(2018, 8).unwrap());
    }

    #[test]
    fn test_invalid_month_rejected() {
        assert!(YearMonth::new(2018, 0).is_none());
        assert!(YearMonth::new(2018, 13).is_none());
    }

    #[test]
    fn test_ordering_is_chronological() {
        let mut months = vec![
            YearMonth::new(2019, 1).unwrap(),
            YearMonth::new(2018, 11).unwrap(),
            YearMonth::new(2018, 2).unwrap(),
        ];
        months.sort();
        assert_eq!(months[0].to_string(), "2018-02");
        assert_eq!(months[2].to_string(), "2019-01");
    }
}
