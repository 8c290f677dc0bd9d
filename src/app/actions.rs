//! Actions representing side effects to be executed by the plugin runtime.
//!
//! This module defines the [`Action`] type, which represents imperative
//! commands produced by the event handler after processing user input or
//! booking API responses. Actions bridge pure state transformations and
//! effectful operations like issuing network requests or hiding the pane.
//!
//! The event handler returns a `Vec<Action>` after processing each event,
//! allowing multiple side effects to be queued atomically. The plugin runtime
//! executes these actions in sequence.

use crate::api::{AmountRequest, RentRequest};

/// Commands representing side effects to be executed by the plugin runtime.
///
/// Actions are produced by the event handler and executed by the plugin shim.
/// They represent the boundary between pure state transformations and
/// effectful operations at the network and pane-management layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Closes the focused floating pane, hiding the plugin UI.
    CloseFocus,

    /// Issues a quote refresh for the current date range.
    ///
    /// The token identifies the date-range generation that produced this
    /// request; responses carrying an older token are discarded on arrival.
    FetchQuote {
        /// Payload for the quote endpoint.
        request: AmountRequest,
        /// Generation token to attach to the request context.
        token: u64,
    },

    /// Submits the rental request for the current date range.
    SubmitRent {
        /// Payload for the rent endpoint.
        request: RentRequest,
    },
}
