use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Invalid pack size: {0}")]
    PackSize(String),

    #[error("Invalid amount: {0}")]
    Amount(String),
}

/// Parses a comma-separated list of pack sizes. Entries are trimmed and empty
/// entries skipped, so `"250, 500,,1000,"` yields three sizes.
///
/// Sign is not checked here; the optimizer rejects non-positive sizes.
pub fn parse_pack_sizes(input: &str) -> Result<Vec<i64>, ParseError> {
    input
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            entry
                .parse::<i64>()
                .map_err(|_| ParseError::PackSize(entry.to_owned()))
        })
        .collect()
}

pub fn parse_amount(input: &str) -> Result<i64, ParseError> {
    input
        .trim()
        .parse::<i64>()
        .map_err(|_| ParseError::Amount(input.to_owned()))
}
