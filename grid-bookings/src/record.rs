//! Booking record type.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{BookingError, BookingResult};

/// A single confirmed stay reservation.
///
/// Records receive a generated v4 UUID at construction and are immutable
/// from then on; the store never rewrites them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRecord {
    id: Uuid,
    guest_name: String,
    hotel_name: String,
    num_nights: u32,
}

impl BookingRecord {
    /// Creates a record after validating the booking fields.
    ///
    /// # Errors
    ///
    /// Returns [`BookingError::InvalidRecord`] when a name is empty or the
    /// stay length is zero.
    pub fn new(
        guest_name: impl Into<String>,
        hotel_name: impl Into<String>,
        num_nights: u32,
    ) -> BookingResult<Self> {
        let guest_name = guest_name.into();
        if guest_name.trim().is_empty() {
            return Err(BookingError::InvalidRecord("guest name must not be empty"));
        }

        let hotel_name = hotel_name.into();
        if hotel_name.trim().is_empty() {
            return Err(BookingError::InvalidRecord("hotel name must not be empty"));
        }

        if num_nights == 0 {
            return Err(BookingError::InvalidRecord(
                "number of nights must be at least one",
            ));
        }

        Ok(Self {
            id: Uuid::new_v4(),
            guest_name,
            hotel_name,
            num_nights,
        })
    }

    /// Returns the unique booking identifier.
    #[must_use]
    pub const fn id(&self) -> Uuid {
        self.id
    }

    /// Returns the guest name.
    #[must_use]
    pub fn guest_name(&self) -> &str {
        &self.guest_name
    }

    /// Returns the hotel name.
    #[must_use]
    pub fn hotel_name(&self) -> &str {
        &self.hotel_name
    }

    /// Returns the number of nights booked.
    #[must_use]
    pub const fn num_nights(&self) -> u32 {
        self.num_nights
    }
}
