//! Domain layer for the Velobook plugin.
//!
//! This module contains the core booking types and business rules, independent
//! of Zellij-specific APIs or rendering concerns: the rental date range with
//! its ordering invariant, the priced quote, the submission outcome state, and
//! the local service-fee estimate.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`bike`]: The bike being offered for rent
//! - [`rental`]: Date range, submission outcome, and error taxonomy
//! - [`quote`]: Priced breakdown for a date range
//! - [`pricing`]: Local service-fee estimate

pub mod bike;
pub mod error;
pub mod pricing;
pub mod quote;
pub mod rental;

pub use bike::Bike;
pub use error::{Result, VelobookError};
pub use quote::Quote;
pub use rental::{DateRange, ErrorKind, SubmitOutcome};
