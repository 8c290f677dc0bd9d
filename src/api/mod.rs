//! Booking API boundary.
//!
//! This module owns all communication with the external booking service. HTTP
//! requests are issued through Zellij's non-blocking `web_request` host call
//! and resolve later as `WebRequestResult` events on the plugin thread, so
//! the UI never blocks on the network.
//!
//! Each outgoing request carries a small context map that travels with it and
//! comes back attached to the result event. The context identifies which
//! endpoint the response belongs to and, for quote refreshes, which
//! generation of the date range issued it; overlapping refreshes are
//! disambiguated by that token rather than by network arrival order.
//!
//! # Organization
//!
//! - [`messages`]: Wire payloads and the request context tag
//! - [`client`]: Request issuing and response interpretation

pub mod client;
pub mod messages;

pub use client::{interpret_response, ApiResponse};
pub use messages::{AmountRequest, RentRequest, RequestTag};
