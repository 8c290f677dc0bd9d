//! Local service-fee estimate.
//!
//! The booking API is the authority on pricing; this module only mirrors its
//! fee schedule closely enough to seed the form before the first quote fetch
//! resolves. It is a pure function of the base amount and performs no I/O.

/// Service-fee rate applied on top of the base rental amount.
const SERVICE_FEE_RATE: f64 = 0.15;

/// Estimates the service fee for a base rental amount.
///
/// Matches the fee schedule the booking API currently applies (a flat
/// percentage of the base amount). Used only for the pre-fetch placeholder
/// quote; every server response carries its own authoritative fee.
#[must_use]
pub fn service_fee(base_amount: f64) -> f64 {
    base_amount * SERVICE_FEE_RATE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fee_is_a_flat_percentage() {
        assert_eq!(service_fee(100.0), 15.0);
        assert_eq!(service_fee(0.0), 0.0);
        assert_eq!(service_fee(40.0), 6.0);
    }
}
