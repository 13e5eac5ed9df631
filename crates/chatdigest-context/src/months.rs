use chatdigest_types::{ChatMessage, YearMonth};
use chrono::NaiveDate;

use crate::error::{ContextError, Result};

/// Months to summarize: from the month after the first message's month through
/// the last message's month
pub fn plan_months(messages: &[ChatMessage]) -> Result<Vec<YearMonth>> {
    let (first, last) = match (messages.first(), messages.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return Err(ContextError::NoMessages),
    };

    let first_date = first.date().ok_or(ContextError::InvalidTimestamp(first.timestamp))?;
    let last_date = last.date().ok_or(ContextError::InvalidTimestamp(last.timestamp))?;

    let end = YearMonth::from_date(last_date).next();
    let mut period = YearMonth::from_date(first_date).next();
    let mut months = Vec::new();
    while period < end {
        months.push(period);
        period = period.next();
    }

    Ok(months)
}

/// First day of `period` and first day of the following month
pub fn month_window(period: YearMonth) -> Result<(NaiveDate, NaiveDate)> {
    let start = period.first_day().ok_or(ContextError::InvalidPeriod(period))?;
    let next = period.next();
    let end = next.first_day().ok_or(ContextError::InvalidPeriod(next))?;
    Ok((start, end))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(date: &str) -> ChatMessage {
        let ts = NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
            .and_utc()
            .timestamp();
        ChatMessage::new(ts, "x")
    }

    #[test]
    fn test_first_month_is_skipped_and_last_included() {
        let months = plan_months(&[at("2018-06-15"), at("2018-09-02")]).unwrap();
        let labels: Vec<String> = months.iter().map(|m| m.to_string()).collect();
        assert_eq!(labels, vec!["2018-07", "2018-08", "2018-09"]);
    }

    #[test]
    fn test_plan_crosses_year_boundary() {
        let months = plan_months(&[at("2018-11-20"), at("2019-02-01")]).unwrap();
        let labels: Vec<String> = months.iter().map(|m| m.to_string()).collect();
        assert_eq!(labels, vec!["2018-12", "2019-01", "2019-02"]);
    }

    #[test]
    fn test_single_month_plans_nothing() {
        assert!(plan_months(&[at("2018-07-01"), at("2018-07-30")]).unwrap().is_empty());
    }

    #[test]
    fn test_empty_input_is_an_error() {
        assert!(matches!(plan_months(&[]), Err(ContextError::NoMessages)));
    }

    #[test]
    fn test_december_window() {
        let (start, end) = month_window(YearMonth::new(2018, 12).unwrap()).unwrap();
        assert_eq!(start, NaiveDate::from_ymd_opt(2018, 12, 1).unwrap());
        assert_eq!(end, NaiveDate::from_ymd_opt(2019, 1, 1).unwrap());
    }
}
