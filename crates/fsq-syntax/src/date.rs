use chrono::{Datelike, NaiveDate};

/// Parses a query date literal against a reference date.
///
/// Accepted forms, digits only:
/// - `MMDD` (4 digits) — the reference date's year is assumed;
/// - `[Y..YY]YYMMDD` (5 to 8 digits) — explicit year, so the full
///   `YYYYMMDD` form works and short years like `000101` resolve to
///   year 0.
///
/// Calendar validity is checked (month 13 or February 30 fail).
pub fn parse_query_date(text: &str, reference: NaiveDate) -> Option<NaiveDate> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let (year, month_day) = match text.len() {
        4 => (reference.year(), text),
        5..=8 => {
            let split = text.len() - 4;
            let year = text[..split].parse::<i32>().ok()?;
            (year, &text[split..])
        }
        _ => return None,
    };

    let month = month_day[..2].parse::<u32>().ok()?;
    let day = month_day[2..].parse::<u32>().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}
