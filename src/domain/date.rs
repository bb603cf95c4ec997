use chrono::NaiveDate;
use thiserror::Error;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a strict `YYYY-MM-DD` date.
///
/// chrono alone accepts single-digit months and days, so the shape is
/// checked first: four-digit year, two-digit month and day.
pub fn parse_date(input: &str) -> Result<NaiveDate, ParseDateError> {
    let input = input.trim();
    let bytes = input.as_bytes();

    let well_formed = bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());
    if !well_formed {
        return Err(ParseDateError::InvalidFormat(input.to_string()));
    }

    NaiveDate::parse_from_str(input, DATE_FORMAT)
        .map_err(|_| ParseDateError::InvalidDate(input.to_string()))
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseDateError {
    #[error("date '{0}' must be in YYYY-MM-DD format")]
    InvalidFormat(String),

    #[error("'{0}' is not a valid calendar date")]
    InvalidDate(String),
}
