//! Request issuing and response interpretation for the booking API.
//!
//! Outbound: serializes a payload, attaches the [`RequestTag`] context, and
//! hands the call to Zellij's `web_request`, which performs it off the plugin
//! thread. Inbound: turns the raw `WebRequestResult` parts back into a typed
//! [`ApiResponse`] for the event handler, folding every rent failure shape
//! into the two-valued error taxonomy on the way.

use std::collections::BTreeMap;

use zellij_tile::prelude::HttpVerb;
use zellij_tile::shim::web_request;

use crate::api::messages::{
    AmountRequest, ApiErrorBody, RentRequest, RequestTag, UNAVAILABLE_BIKE_ERROR,
};
use crate::domain::{ErrorKind, Quote};

/// Path of the quote endpoint, relative to the configured API base URL.
const AMOUNT_PATH: &str = "/bikes/amount";
/// Path of the rent endpoint, relative to the configured API base URL.
const RENT_PATH: &str = "/bikes/rent";

/// A booking API response, typed and classified.
///
/// Produced by [`interpret_response`] from the raw result event. Quote
/// responses keep the generation token they were issued with so the handler
/// can discard stale ones; rent failures arrive pre-classified into the
/// user-facing [`ErrorKind`].
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse {
    /// A quote refresh resolved successfully.
    AmountLoaded { token: u64, quote: Quote },
    /// A quote refresh failed; the previous quote stays on screen.
    AmountFailed { token: u64, message: String },
    /// The rental was accepted; carries the final priced breakdown.
    RentConfirmed { quote: Quote },
    /// The rental was rejected or the request failed.
    RentRejected { kind: ErrorKind, message: String },
}

/// Issues a quote refresh for the given date range generation.
///
/// Non-blocking: the call returns immediately and the response arrives later
/// as a `WebRequestResult` event carrying the same tag. A payload that fails
/// to serialize is logged and dropped; the previous quote stays displayed.
pub fn request_amount(api_url: &str, request: &AmountRequest, token: u64) {
    post(api_url, AMOUNT_PATH, request, RequestTag::Amount { token });
}

/// Submits a rental request.
///
/// Non-blocking, same delivery path as [`request_amount`]. There is no
/// client-side timeout or cancellation: the caller waits for resolution or
/// rejection.
pub fn submit_rent(api_url: &str, request: &RentRequest) {
    post(api_url, RENT_PATH, request, RequestTag::Rent);
}

fn post<T: serde::Serialize>(api_url: &str, path: &str, payload: &T, tag: RequestTag) {
    let body = match serde_json::to_vec(payload) {
        Ok(body) => body,
        Err(e) => {
            tracing::debug!(error = %e, path = %path, "failed to serialize request payload");
            return;
        }
    };

    let url = endpoint_url(api_url, path);
    let mut headers = BTreeMap::new();
    headers.insert("Content-Type".to_string(), "application/json".to_string());

    tracing::debug!(url = %url, tag = ?tag, "issuing web request");
    web_request(url, HttpVerb::Post, headers, body, tag.to_context());
}

/// Joins the configured base URL with an endpoint path.
fn endpoint_url(api_url: &str, path: &str) -> String {
    format!("{}{path}", api_url.trim_end_matches('/'))
}

/// Interprets a `WebRequestResult` event into a typed [`ApiResponse`].
///
/// Returns `None` when the context does not identify a request this plugin
/// issued. A status of 0 (transport failure, no HTTP exchange happened) and
/// any non-2xx status are both treated as failures; for the rent endpoint
/// the error body decides between the two user-facing error kinds, with
/// everything unrecognized collapsing to [`ErrorKind::ServerError`].
#[must_use]
pub fn interpret_response(
    status: u16,
    body: &[u8],
    context: &BTreeMap<String, String>,
) -> Option<ApiResponse> {
    let tag = RequestTag::from_context(context)?;
    let _span = tracing::debug_span!("interpret_response", status = status, tag = ?tag).entered();

    let succeeded = (200..300).contains(&status);

    let response = match tag {
        RequestTag::Amount { token } => {
            if succeeded {
                match serde_json::from_slice::<Quote>(body) {
                    Ok(quote) => ApiResponse::AmountLoaded { token, quote },
                    Err(e) => ApiResponse::AmountFailed {
                        token,
                        message: format!("malformed quote body: {e}"),
                    },
                }
            } else {
                ApiResponse::AmountFailed {
                    token,
                    message: format!("quote request failed with status {status}"),
                }
            }
        }
        RequestTag::Rent => {
            if succeeded {
                match serde_json::from_slice::<Quote>(body) {
                    Ok(quote) => ApiResponse::RentConfirmed { quote },
                    Err(e) => ApiResponse::RentRejected {
                        kind: ErrorKind::ServerError,
                        message: format!("malformed rent body: {e}"),
                    },
                }
            } else {
                classify_rent_failure(status, body)
            }
        }
    };

    Some(response)
}

/// Maps a failed rent response onto the two-valued error taxonomy.
///
/// Only a structured body whose `errorType` identifies a booking conflict
/// becomes [`ErrorKind::BikeUnavailable`]; every other failure shape
/// (network error, unrecognized error type, no parseable body) becomes
/// [`ErrorKind::ServerError`].
fn classify_rent_failure(status: u16, body: &[u8]) -> ApiResponse {
    match serde_json::from_slice::<ApiErrorBody>(body) {
        Ok(error) if error.error_type == UNAVAILABLE_BIKE_ERROR => ApiResponse::RentRejected {
            kind: ErrorKind::BikeUnavailable,
            message: error.message,
        },
        Ok(error) => {
            tracing::debug!(error_type = %error.error_type, "unrecognized rent error type");
            ApiResponse::RentRejected {
                kind: ErrorKind::ServerError,
                message: error.message,
            }
        }
        Err(_) => ApiResponse::RentRejected {
            kind: ErrorKind::ServerError,
            message: format!("rent request failed with status {status}"),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const QUOTE_BODY: &[u8] = br#"{"rentAmount":130,"fee":19.5,"totalAmount":149.5}"#;

    #[test]
    fn amount_success_carries_token_and_quote() {
        let context = RequestTag::Amount { token: 3 }.to_context();
        let response = interpret_response(200, QUOTE_BODY, &context).unwrap();
        assert_eq!(
            response,
            ApiResponse::AmountLoaded {
                token: 3,
                quote: Quote {
                    rent_amount: 130.0,
                    fee: 19.5,
                    total_amount: 149.5,
                },
            }
        );
    }

    #[test]
    fn amount_failure_keeps_token() {
        let context = RequestTag::Amount { token: 9 }.to_context();
        match interpret_response(500, b"", &context).unwrap() {
            ApiResponse::AmountFailed { token, .. } => assert_eq!(token, 9),
            other => panic!("expected AmountFailed, got {other:?}"),
        }
    }

    #[test]
    fn rent_success_confirms_with_quote() {
        let context = RequestTag::Rent.to_context();
        match interpret_response(200, QUOTE_BODY, &context).unwrap() {
            ApiResponse::RentConfirmed { quote } => assert_eq!(quote.total_amount, 149.5),
            other => panic!("expected RentConfirmed, got {other:?}"),
        }
    }

    #[test]
    fn unavailable_error_type_maps_to_bike_unavailable() {
        let context = RequestTag::Rent.to_context();
        let body = br#"{"errorType":"UnavailableBikeError","message":"booked"}"#;
        match interpret_response(409, body, &context).unwrap() {
            ApiResponse::RentRejected { kind, .. } => {
                assert_eq!(kind, ErrorKind::BikeUnavailable);
            }
            other => panic!("expected RentRejected, got {other:?}"),
        }
    }

    #[test]
    fn other_error_types_map_to_server_error() {
        let context = RequestTag::Rent.to_context();
        let body = br#"{"errorType":"ValidationError","message":"bad dates"}"#;
        match interpret_response(400, body, &context).unwrap() {
            ApiResponse::RentRejected { kind, .. } => assert_eq!(kind, ErrorKind::ServerError),
            other => panic!("expected RentRejected, got {other:?}"),
        }
    }

    #[test]
    fn transport_failure_maps_to_server_error() {
        let context = RequestTag::Rent.to_context();
        match interpret_response(0, b"", &context).unwrap() {
            ApiResponse::RentRejected { kind, .. } => assert_eq!(kind, ErrorKind::ServerError),
            other => panic!("expected RentRejected, got {other:?}"),
        }
    }

    #[test]
    fn malformed_success_body_on_rent_maps_to_server_error() {
        let context = RequestTag::Rent.to_context();
        match interpret_response(200, b"not json", &context).unwrap() {
            ApiResponse::RentRejected { kind, .. } => assert_eq!(kind, ErrorKind::ServerError),
            other => panic!("expected RentRejected, got {other:?}"),
        }
    }

    #[test]
    fn unrelated_results_are_ignored() {
        assert_eq!(interpret_response(200, QUOTE_BODY, &BTreeMap::new()), None);
    }

    #[test]
    fn endpoint_url_joins_without_duplicate_slash() {
        assert_eq!(
            endpoint_url("http://localhost:3000/", AMOUNT_PATH),
            "http://localhost:3000/bikes/amount"
        );
        assert_eq!(
            endpoint_url("http://localhost:3000", RENT_PATH),
            "http://localhost:3000/bikes/rent"
        );
    }
}
