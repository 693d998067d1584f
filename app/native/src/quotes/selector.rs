//! Deterministic quote-of-the-day selection.

use chrono::{Datelike, Local, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{Quote, QuoteError};

/// Returns the local calendar date.
#[must_use]
pub fn today() -> NaiveDate { Local::now().date_naive() }

/// Derives the RNG seed for a date from its ISO-8601 basic form (`YYYYMMDD`).
///
/// 2026-10-19 maps to `20_261_019`.
#[must_use]
pub fn day_seed(date: NaiveDate) -> u64 {
    u64::from(date.year().unsigned_abs()) * 10_000
        + u64::from(date.month()) * 100
        + u64::from(date.day())
}

/// Picks the quote for `date`.
///
/// The same collection and date always yield the same quote.
///
/// # Errors
///
/// Returns `EmptyCollection` if there is nothing to choose from.
pub fn select_quote_of_day(quotes: &[Quote], date: NaiveDate) -> Result<&Quote, QuoteError> {
    if quotes.is_empty() {
        return Err(QuoteError::EmptyCollection);
    }

    let mut rng = StdRng::seed_from_u64(day_seed(date));
    let index = rng.random_range(0..quotes.len());

    tracing::debug!(%date, index, total = quotes.len(), "quotes: selected quote of the day");
    Ok(&quotes[index])
}
