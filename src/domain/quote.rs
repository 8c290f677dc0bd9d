//! Priced breakdown for a rental.
//!
//! This module defines the [`Quote`] value the widget displays: subtotal,
//! service fee, and total for the selected date range. Quotes are immutable
//! values, replaced wholesale whenever the booking API returns a fresh one.

use serde::{Deserialize, Serialize};

use crate::domain::pricing;

/// A priced breakdown as returned by the booking API.
///
/// `total_amount` is expected to equal `rent_amount + fee`, but the widget
/// does not re-derive it: all three fields are displayed exactly as received.
/// The wire format uses camelCase keys (`rentAmount`, `fee`, `totalAmount`)
/// on both the quote and rent endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    /// Base rental amount for the selected range.
    pub rent_amount: f64,
    /// Service fee on top of the rental amount.
    pub fee: f64,
    /// Amount the rider pays in total.
    pub total_amount: f64,
}

impl Quote {
    /// Locally derived placeholder quote for a single day at `rate_by_day`.
    ///
    /// Computed synchronously with no network round trip so the form never
    /// renders with empty pricing. The service fee uses the local estimate
    /// from [`pricing::service_fee`]; the server-computed quote replaces this
    /// as soon as the first refresh resolves.
    #[must_use]
    pub fn estimate(rate_by_day: f64) -> Self {
        let fee = pricing::service_fee(rate_by_day);
        Self {
            rent_amount: rate_by_day,
            fee,
            total_amount: rate_by_day + fee,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn estimate_adds_fee_on_top_of_rate() {
        let quote = Quote::estimate(100.0);
        assert_eq!(quote.rent_amount, 100.0);
        assert_eq!(quote.fee, 15.0);
        assert_eq!(quote.total_amount, 115.0);
    }

    #[test]
    fn deserializes_camel_case_wire_format() {
        let quote: Quote =
            serde_json::from_str(r#"{"rentAmount":130,"fee":19.5,"totalAmount":149.5}"#)
                .expect("valid quote body");
        assert_eq!(quote.rent_amount, 130.0);
        assert_eq!(quote.fee, 19.5);
        assert_eq!(quote.total_amount, 149.5);
    }
}
