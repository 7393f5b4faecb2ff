// Domain entities and the read-only reference catalog
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Hotel {
    pub id: String,
    pub name: String,
    pub stars: u8,
    pub city: String,
    pub features: Vec<String>,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RoomType {
    pub id: String,
    pub hotel_id: String,
    pub name: String,
    pub capacity: u32,
    pub base_price: i64,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Rate {
    pub id: String,
    pub room_type_id: String,
    pub title: String,
    pub nightly_price: i64,
    pub refundable: bool,
    #[serde(default)]
    pub valid_from: Option<NaiveDate>,
    #[serde(default)]
    pub valid_until: Option<NaiveDate>,
}

impl Rate {
    // A rate with no window applies to any stay; otherwise the whole stay
    // must fall inside [valid_from, valid_until]. Date ordering is checked
    // separately, so a degenerate range inside the window still passes here.
    pub fn covers(&self, checkin: NaiveDate, checkout: NaiveDate) -> bool {
        let from_ok = self.valid_from.map_or(true, |from| checkin >= from);
        let until_ok = self.valid_until.map_or(true, |until| checkout <= until);
        from_ok && until_ok
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct BookingItem {
    pub id: String,
    pub hotel_id: String,
    pub room_type_id: String,
    pub rate_id: String,
    pub checkin: NaiveDate,
    pub checkout: NaiveDate,
    pub guests: u32,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct BookingRequest {
    pub id: String,
    pub guest_id: String,
    pub items: Vec<BookingItem>,
    pub claimed_total: Option<i64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Confirmed,
}

// Produced only by a successful validation; carries the computed total,
// never the client-claimed one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidatedBooking {
    pub id: String,
    pub guest_id: String,
    pub items: Vec<BookingItem>,
    pub total: i64,
    pub status: BookingStatus,
}

// Reference dataset handed to the validator. Built once from an external
// data source, read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    hotels: HashMap<String, Hotel>,
    room_types: HashMap<String, RoomType>,
    rates: HashMap<String, Rate>,
}

impl Catalog {
    pub fn new(hotels: Vec<Hotel>, room_types: Vec<RoomType>, rates: Vec<Rate>) -> Self {
        Self {
            hotels: hotels.into_iter().map(|h| (h.id.clone(), h)).collect(),
            room_types: room_types.into_iter().map(|r| (r.id.clone(), r)).collect(),
            rates: rates.into_iter().map(|r| (r.id.clone(), r)).collect(),
        }
    }

    pub fn hotel(&self, id: &str) -> Option<&Hotel> {
        self.hotels.get(id)
    }

    pub fn room_type(&self, id: &str) -> Option<&RoomType> {
        self.room_types.get(id)
    }

    pub fn rate(&self, id: &str) -> Option<&Rate> {
        self.rates.get(id)
    }

    pub fn hotels(&self) -> impl Iterator<Item = &Hotel> {
        self.hotels.values()
    }

    pub fn room_types_of<'a>(&'a self, hotel_id: &'a str) -> impl Iterator<Item = &'a RoomType> {
        self.room_types
            .values()
            .filter(move |room| room.hotel_id == hotel_id)
    }

    pub fn rates_of<'a>(&'a self, room_type_id: &'a str) -> impl Iterator<Item = &'a Rate> {
        self.rates
            .values()
            .filter(move |rate| rate.room_type_id == room_type_id)
    }
}
