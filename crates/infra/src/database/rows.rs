//! Row-mapping helpers shared by the SQLite repositories.
//!
//! Dates are stored as `YYYY-MM-DD` TEXT columns and parsed explicitly;
//! the mapping between entities and rows is hand-written rather than
//! derived.

use chrono::NaiveDate;
use rusqlite::types::Type;
use rusqlite::Row;

pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

fn parse_date(idx: usize, value: &str) -> rusqlite::Result<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}

/// Read a non-null TEXT date column from a row.
pub(crate) fn date_column(row: &Row<'_>, idx: usize) -> rusqlite::Result<NaiveDate> {
    let raw: String = row.get(idx)?;
    parse_date(idx, &raw)
}

/// Read a nullable TEXT date column from a row.
pub(crate) fn opt_date_column(row: &Row<'_>, idx: usize) -> rusqlite::Result<Option<NaiveDate>> {
    let raw: Option<String> = row.get(idx)?;
    raw.map(|value| parse_date(idx, &value)).transpose()
}

/// Format a date for storage.
pub(crate) fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_date_uses_iso_dashes() {
        let date = NaiveDate::from_ymd_opt(1995, 9, 4).expect("valid test date");
        assert_eq!(format_date(date), "1995-09-04");
    }
}
