//! Share certificates.

use serde::{Deserialize, Serialize};

use crate::core::{HotelName, PlayerId};

/// Shares of one hotel held by one owner.
///
/// A hotel keeps at most one certificate per owner; further grants add to
/// `count`. When the hotel is dissolved its certificates are voided (count
/// zero) but kept as a record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Certificate {
    hotel: HotelName,
    owner: PlayerId,
    count: u32,
}

impl Certificate {
    #[must_use]
    pub const fn new(hotel: HotelName, owner: PlayerId, count: u32) -> Self {
        Self { hotel, owner, count }
    }

    #[must_use]
    pub const fn hotel(&self) -> HotelName {
        self.hotel
    }

    #[must_use]
    pub const fn owner(&self) -> PlayerId {
        self.owner
    }

    #[must_use]
    pub const fn count(&self) -> u32 {
        self.count
    }

    /// True for a hotel and owner pair.
    #[must_use]
    pub fn is_for(&self, hotel: HotelName, owner: PlayerId) -> bool {
        self.hotel == hotel && self.owner == owner
    }

    pub(crate) fn add(&mut self, count: u32) {
        self.count += count;
    }

    pub(crate) fn void(&mut self) {
        self.count = 0;
    }
}
