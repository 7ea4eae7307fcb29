//! Request DTOs and validation for the availability form.

use chrono::NaiveDate;
use serde::Deserialize;

/// Raw availability form as submitted by the browser.
#[derive(Debug, Deserialize)]
pub struct AvailabilityForm {
    pub checkin: String,
    pub checkout: String,
}

/// Validation failures for a stay request.
///
/// Request-scoped and user-facing; never retried (the calculation is
/// deterministic) and never touches catalog state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QuoteError {
    #[error("\"{0}\" is not a valid date (expected YYYY-MM-DD)")]
    UnparsableDate(String),

    #[error("check-out must be after check-in")]
    InvalidRange,
}

/// A validated stay: check-out strictly after check-in.
///
/// Nights run from the check-in date through the night before check-out
/// (closed-open range); the check-out day itself is never billed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StayRequest {
    checkin: NaiveDate,
    checkout: NaiveDate,
}

impl StayRequest {
    pub fn new(checkin: NaiveDate, checkout: NaiveDate) -> Result<Self, QuoteError> {
        if checkout <= checkin {
            return Err(QuoteError::InvalidRange);
        }
        Ok(Self { checkin, checkout })
    }

    /// Parse and validate the submitted form.
    pub fn parse(form: &AvailabilityForm) -> Result<Self, QuoteError> {
        let checkin = parse_date(&form.checkin)?;
        let checkout = parse_date(&form.checkout)?;
        Self::new(checkin, checkout)
    }

    pub fn checkin(&self) -> NaiveDate {
        self.checkin
    }

    pub fn checkout(&self) -> NaiveDate {
        self.checkout
    }

    /// Whole nights in the stay; at least 1 by construction.
    pub fn total_nights(&self) -> i64 {
        (self.checkout - self.checkin).num_days()
    }

    /// The billed nights, check-in date inclusive, check-out date exclusive.
    pub fn nights(&self) -> impl Iterator<Item = NaiveDate> {
        self.checkin.iter_days().take(self.total_nights() as usize)
    }
}

fn parse_date(raw: &str) -> Result<NaiveDate, QuoteError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| QuoteError::UnparsableDate(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(checkin: &str, checkout: &str) -> AvailabilityForm {
        AvailabilityForm {
            checkin: checkin.to_string(),
            checkout: checkout.to_string(),
        }
    }

    #[test]
    fn test_parse_valid_range() {
        let stay = StayRequest::parse(&form("2026-01-02", "2026-01-05")).unwrap();
        assert_eq!(stay.total_nights(), 3);
        assert_eq!(
            stay.checkin(),
            NaiveDate::from_ymd_opt(2026, 1, 2).unwrap()
        );
    }

    #[test]
    fn test_checkout_equal_to_checkin_rejected() {
        let err = StayRequest::parse(&form("2026-01-02", "2026-01-02")).unwrap_err();
        assert_eq!(err, QuoteError::InvalidRange);
    }

    #[test]
    fn test_checkout_before_checkin_rejected() {
        let err = StayRequest::parse(&form("2026-01-05", "2026-01-02")).unwrap_err();
        assert_eq!(err, QuoteError::InvalidRange);
    }

    #[test]
    fn test_garbage_date_rejected() {
        let err = StayRequest::parse(&form("not-a-date", "2026-01-02")).unwrap_err();
        assert!(matches!(err, QuoteError::UnparsableDate(_)));
    }

    #[test]
    fn test_non_iso_format_rejected() {
        let err = StayRequest::parse(&form("01/02/2026", "01/05/2026")).unwrap_err();
        assert!(matches!(err, QuoteError::UnparsableDate(_)));
    }

    #[test]
    fn test_surrounding_whitespace_tolerated() {
        let stay = StayRequest::parse(&form(" 2026-01-02 ", "2026-01-03")).unwrap();
        assert_eq!(stay.total_nights(), 1);
    }

    #[test]
    fn test_nights_exclude_checkout_day() {
        let stay = StayRequest::parse(&form("2026-01-02", "2026-01-05")).unwrap();
        let nights: Vec<_> = stay.nights().collect();
        assert_eq!(nights.len(), 3);
        assert_eq!(nights[0], NaiveDate::from_ymd_opt(2026, 1, 2).unwrap());
        assert_eq!(nights[2], NaiveDate::from_ymd_opt(2026, 1, 4).unwrap());
    }
}
