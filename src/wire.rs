// JSON boundary: dynamic payloads in, typed domain structures out.
// Routing itself lives in the HTTP layer; this module is what it calls.
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{BookingItem, BookingRequest, BookingStatus, ValidatedBooking};
use crate::validate::ValidationFailure;

#[derive(Debug, Error)]
pub enum WireError {
    #[error("invalid date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

// Incoming payload shapes: dates arrive as strings and are parsed during
// conversion so malformed input is rejected at the boundary.
#[derive(Debug, Deserialize)]
pub struct BookingItemDto {
    pub id: String,
    pub hotel_id: String,
    pub room_type_id: String,
    pub rate_id: String,
    pub checkin: String,
    pub checkout: String,
    pub guests: u32,
}

#[derive(Debug, Deserialize)]
pub struct BookingRequestDto {
    pub id: String,
    pub guest_id: String,
    #[serde(default)]
    pub items: Vec<BookingItemDto>,
    #[serde(default)]
    pub total: Option<i64>,
}

fn parse_date(value: &str) -> Result<NaiveDate, WireError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| WireError::InvalidDate(value.to_owned()))
}

impl TryFrom<BookingItemDto> for BookingItem {
    type Error = WireError;

    fn try_from(dto: BookingItemDto) -> Result<Self, Self::Error> {
        Ok(Self {
            checkin: parse_date(&dto.checkin)?,
            checkout: parse_date(&dto.checkout)?,
            id: dto.id,
            hotel_id: dto.hotel_id,
            room_type_id: dto.room_type_id,
            rate_id: dto.rate_id,
            guests: dto.guests,
        })
    }
}

impl TryFrom<BookingRequestDto> for BookingRequest {
    type Error = WireError;

    fn try_from(dto: BookingRequestDto) -> Result<Self, Self::Error> {
        let items = dto
            .items
            .into_iter()
            .map(BookingItem::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            id: dto.id,
            guest_id: dto.guest_id,
            items,
            claimed_total: dto.total,
        })
    }
}

pub fn parse_booking_request(json: &str) -> Result<BookingRequest, WireError> {
    let dto: BookingRequestDto = serde_json::from_str(json)?;
    dto.try_into()
}

// Condensed booking echoed back to the client on success
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookingSummary {
    pub id: String,
    pub guest_id: String,
    pub total: i64,
    pub status: BookingStatus,
}

// Serializes as {"valid": true, "booking": {...}} or
// {"valid": false, "error": "..."}
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ValidationResponse {
    Confirmed { valid: bool, booking: BookingSummary },
    Rejected { valid: bool, error: String },
}

impl From<Result<ValidatedBooking, ValidationFailure>> for ValidationResponse {
    fn from(result: Result<ValidatedBooking, ValidationFailure>) -> Self {
        match result {
            Ok(booking) => Self::Confirmed {
                valid: true,
                booking: BookingSummary {
                    id: booking.id,
                    guest_id: booking.guest_id,
                    total: booking.total,
                    status: booking.status,
                },
            },
            Err(failure) => Self::Rejected {
                valid: false,
                error: failure.to_string(),
            },
        }
    }
}
