use serde::{Deserialize, Serialize};

use crate::period::YearMonth;

/// Summary of one group, bounded by its first and last message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryRecord {
    pub start_timestamp: i64,
    pub stop_timestamp: i64,
    pub summary: String,
}

/// Second-order summary of every group summary in a month
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthSummaryRecord {
    pub year: i32,
    pub month: u32,
    pub summary: String,
}

/// Per-month persistence artifact.
///
/// The month is stored alongside the records so the file name never has to be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthSummaryFile {
    pub year: i32,
    pub month: u32,
    pub records: Vec<SummaryRecord>,
}

impl MonthSummaryFile {
    pub fn new(period: YearMonth, records: Vec<SummaryRecord>) -> Self {
        Self {
            year: period.year,
            month: period.month,
            records,
        }
    }

    pub fn period(&self) -> YearMonth {
        YearMonth {
            year: self.year,
            month: self.month,
        }
    }

    pub fn summaries(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.summary.as_str()).collect()
    }
}
