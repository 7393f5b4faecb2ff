// Booking validation and pricing pipeline
use chrono::NaiveDate;
use thiserror::Error;
use tracing::debug;

use crate::cache::{CacheConfig, CacheStatsReport};
use crate::domain::{BookingItem, BookingRequest, BookingStatus, Catalog, ValidatedBooking};
use crate::quote::Quoter;

// Request-scoped rejection reasons. Every variant carries enough context to
// render an actionable message for the client; none is fatal to the process.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationFailure {
    #[error("room type '{room_type_id}' not found for hotel '{hotel_id}'")]
    RoomNotFound {
        hotel_id: String,
        room_type_id: String,
    },

    #[error("rate '{rate_id}' not found for room type '{room_type_id}'")]
    RateNotFound {
        rate_id: String,
        room_type_id: String,
    },

    #[error("check-out {checkout} must be after check-in {checkin}")]
    InvalidDateRange {
        checkin: NaiveDate,
        checkout: NaiveDate,
    },

    #[error("{guests} guests exceed capacity {capacity} of room type '{room_type_id}'")]
    CapacityExceeded {
        room_type_id: String,
        guests: u32,
        capacity: u32,
    },

    #[error("claimed total {claimed} does not match computed total {computed}")]
    TotalMismatch { claimed: i64, computed: i64 },
}

impl ValidationFailure {
    pub fn code(&self) -> &'static str {
        match self {
            Self::RoomNotFound { .. } => "RoomNotFound",
            Self::RateNotFound { .. } => "RateNotFound",
            Self::InvalidDateRange { .. } => "InvalidDateRange",
            Self::CapacityExceeded { .. } => "CapacityExceeded",
            Self::TotalMismatch { .. } => "TotalMismatch",
        }
    }
}

// Validates a proposed booking against the reference catalog and prices it.
// Deterministic for identical inputs and never mutates them; the only
// interior state is the price cache, whose hits equal fresh computation.
pub struct BookingValidator {
    quoter: Quoter,
}

impl BookingValidator {
    pub fn new() -> Self {
        Self::with_cache_config(CacheConfig::default())
    }

    pub fn with_cache_config(config: CacheConfig) -> Self {
        Self {
            quoter: Quoter::new(config),
        }
    }

    pub fn validate(
        &self,
        catalog: &Catalog,
        request: &BookingRequest,
    ) -> Result<ValidatedBooking, ValidationFailure> {
        match self.run(catalog, request) {
            Ok(booking) => {
                debug!(booking = %booking.id, total = booking.total, "booking confirmed");
                Ok(booking)
            }
            Err(failure) => {
                debug!(request = %request.id, code = failure.code(), %failure, "booking rejected");
                Err(failure)
            }
        }
    }

    // Items are checked and priced in request order; the first rule an item
    // breaks decides the reported failure. A request with any invalid item
    // is rejected as a whole.
    fn run(
        &self,
        catalog: &Catalog,
        request: &BookingRequest,
    ) -> Result<ValidatedBooking, ValidationFailure> {
        let mut total = 0i64;
        for item in &request.items {
            check_item(catalog, item)?;
            total += self.quoter.price_item(catalog, item)?;
        }

        // Guards against a tampered client-side total: reported, never
        // silently corrected
        if let Some(claimed) = request.claimed_total {
            if claimed != total {
                return Err(ValidationFailure::TotalMismatch {
                    claimed,
                    computed: total,
                });
            }
        }

        Ok(ValidatedBooking {
            id: request.id.clone(),
            guest_id: request.guest_id.clone(),
            items: request.items.clone(),
            total,
            status: BookingStatus::Confirmed,
        })
    }

    pub fn cache_stats(&self) -> CacheStatsReport {
        self.quoter.cache_stats()
    }
}

impl Default for BookingValidator {
    fn default() -> Self {
        Self::new()
    }
}

// Ordered per-item rules; the order fixes which failure gets reported when
// several would apply.
fn check_item(catalog: &Catalog, item: &BookingItem) -> Result<(), ValidationFailure> {
    let room = catalog
        .room_type(&item.room_type_id)
        .filter(|room| room.hotel_id == item.hotel_id)
        .ok_or_else(|| ValidationFailure::RoomNotFound {
            hotel_id: item.hotel_id.clone(),
            room_type_id: item.room_type_id.clone(),
        })?;

    catalog
        .rate(&item.rate_id)
        .filter(|rate| {
            rate.room_type_id == item.room_type_id && rate.covers(item.checkin, item.checkout)
        })
        .ok_or_else(|| ValidationFailure::RateNotFound {
            rate_id: item.rate_id.clone(),
            room_type_id: item.room_type_id.clone(),
        })?;

    if item.checkout <= item.checkin {
        return Err(ValidationFailure::InvalidDateRange {
            checkin: item.checkin,
            checkout: item.checkout,
        });
    }

    if item.guests > room.capacity {
        return Err(ValidationFailure::CapacityExceeded {
            room_type_id: room.id.clone(),
            guests: item.guests,
            capacity: room.capacity,
        });
    }

    Ok(())
}
