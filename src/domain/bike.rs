//! The bike on offer.
//!
//! This module defines the [`Bike`] type describing the single bike the pane
//! is booking. In the hosting product this data comes from the bike detail
//! page; here it is injected through the plugin configuration and used for
//! the header and the post-booking confirmation view.

use serde::{Deserialize, Serialize};

/// The bike being offered for rent.
///
/// Identity plus the display metadata shown in the confirmation view. The
/// `id` is the identifier the booking API expects in request payloads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bike {
    /// Identifier of the bike in the booking API.
    pub id: u64,
    /// Display name, e.g. "Aluminum racer".
    pub name: String,
    /// Bike category label, e.g. "Road" or "City".
    pub kind: String,
    /// URL of the bike's primary image.
    ///
    /// A terminal pane cannot render the image itself; the confirmation view
    /// shows the URL as a reference line. Empty when not configured.
    pub image_url: String,
}

impl Bike {
    /// Creates a bike from its display metadata.
    #[must_use]
    pub fn new(id: u64, name: String, kind: String, image_url: String) -> Self {
        Self {
            id,
            name,
            kind,
            image_url,
        }
    }
}
