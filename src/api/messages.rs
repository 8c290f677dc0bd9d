//! Wire payloads and request context for the booking API.
//!
//! This module defines the request bodies for the two booking endpoints, the
//! structured error body the rent endpoint returns on rejection, and the
//! [`RequestTag`] used to route `WebRequestResult` events back to the right
//! handling path.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// `errorType` value the rent endpoint uses to signal a booking conflict.
///
/// Any other value (or the absence of a structured body) maps to the generic
/// server-error path.
pub const UNAVAILABLE_BIKE_ERROR: &str = "UnavailableBikeError";

/// Context key naming the endpoint a request was sent to.
const CTX_ENDPOINT: &str = "endpoint";
/// Context key carrying the quote generation token.
const CTX_TOKEN: &str = "token";

const ENDPOINT_AMOUNT: &str = "amount";
const ENDPOINT_RENT: &str = "rent";

/// Body for `POST /bikes/amount`.
///
/// Dates serialize as `YYYY-MM-DD` through chrono's serde support.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AmountRequest {
    pub bike_id: u64,
    pub date_from: NaiveDate,
    pub date_to: NaiveDate,
}

/// Body for `POST /bikes/rent`.
///
/// Built fresh on every submission from the current date range and the
/// configured identifiers; never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RentRequest {
    pub bike_id: u64,
    pub user_id: u64,
    pub date_from: NaiveDate,
    pub date_to: NaiveDate,
}

/// Structured error body returned by the rent endpoint on rejection.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiErrorBody {
    pub error_type: String,
    #[serde(default)]
    pub message: String,
}

/// Identifies which request a `WebRequestResult` resolves.
///
/// Serialized into the context map attached to `web_request` and recovered
/// from the copy Zellij hands back with the result event. Quote refreshes
/// carry the generation token of the date-range state that issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestTag {
    /// A quote refresh for generation `token`.
    Amount { token: u64 },
    /// A rental submission.
    Rent,
}

impl RequestTag {
    /// Encodes the tag as a `web_request` context map.
    #[must_use]
    pub fn to_context(self) -> BTreeMap<String, String> {
        let mut context = BTreeMap::new();
        match self {
            Self::Amount { token } => {
                context.insert(CTX_ENDPOINT.to_string(), ENDPOINT_AMOUNT.to_string());
                context.insert(CTX_TOKEN.to_string(), token.to_string());
            }
            Self::Rent => {
                context.insert(CTX_ENDPOINT.to_string(), ENDPOINT_RENT.to_string());
            }
        }
        context
    }

    /// Recovers a tag from a result event's context map.
    ///
    /// Returns `None` for contexts this plugin did not produce (missing or
    /// unknown endpoint, amount context without a parseable token), letting
    /// the caller ignore the event.
    #[must_use]
    pub fn from_context(context: &BTreeMap<String, String>) -> Option<Self> {
        match context.get(CTX_ENDPOINT).map(String::as_str) {
            Some(ENDPOINT_AMOUNT) => {
                let token = context.get(CTX_TOKEN)?.parse().ok()?;
                Some(Self::Amount { token })
            }
            Some(ENDPOINT_RENT) => Some(Self::Rent),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amount_request_serializes_camel_case_iso_dates() {
        let request = AmountRequest {
            bike_id: 7,
            date_from: NaiveDate::from_ymd_opt(2024, 6, 10).unwrap(),
            date_to: NaiveDate::from_ymd_opt(2024, 6, 12).unwrap(),
        };
        let body = serde_json::to_string(&request).unwrap();
        assert_eq!(
            body,
            r#"{"bikeId":7,"dateFrom":"2024-06-10","dateTo":"2024-06-12"}"#
        );
    }

    #[test]
    fn rent_request_includes_user_id() {
        let request = RentRequest {
            bike_id: 7,
            user_id: 42,
            date_from: NaiveDate::from_ymd_opt(2024, 6, 10).unwrap(),
            date_to: NaiveDate::from_ymd_opt(2024, 6, 10).unwrap(),
        };
        let body = serde_json::to_string(&request).unwrap();
        assert_eq!(
            body,
            r#"{"bikeId":7,"userId":42,"dateFrom":"2024-06-10","dateTo":"2024-06-10"}"#
        );
    }

    #[test]
    fn request_tag_round_trips_through_context() {
        let tag = RequestTag::Amount { token: 5 };
        assert_eq!(RequestTag::from_context(&tag.to_context()), Some(tag));

        let tag = RequestTag::Rent;
        assert_eq!(RequestTag::from_context(&tag.to_context()), Some(tag));
    }

    #[test]
    fn foreign_context_is_ignored() {
        assert_eq!(RequestTag::from_context(&BTreeMap::new()), None);

        let mut context = BTreeMap::new();
        context.insert("endpoint".to_string(), "unknown".to_string());
        assert_eq!(RequestTag::from_context(&context), None);
    }

    #[test]
    fn error_body_message_is_optional() {
        let body: ApiErrorBody =
            serde_json::from_str(r#"{"errorType":"UnavailableBikeError"}"#).unwrap();
        assert_eq!(body.error_type, UNAVAILABLE_BIKE_ERROR);
        assert_eq!(body.message, "");
    }
}
