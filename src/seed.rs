// Small in-memory catalog for tests, examples, and benchmarks. A real
// deployment builds the catalog from an external data source instead.
use chrono::NaiveDate;

use crate::domain::{Catalog, Hotel, Rate, RoomType};

pub fn demo_catalog() -> Catalog {
    let hotels = vec![
        hotel("hotel_1", "Grand Plaza Hotel", 5, "New York", &["wifi", "pool", "spa", "gym"]),
        hotel("hotel_2", "Seaside Resort", 4, "Miami", &["beach", "pool", "restaurant", "spa"]),
        hotel("hotel_3", "Mountain Lodge", 3, "Denver", &["wifi", "restaurant", "parking"]),
    ];

    let room_types = vec![
        room("room_1", "hotel_1", "Deluxe King", 2, 200),
        room("room_2", "hotel_1", "Executive Suite", 3, 320),
        room("room_3", "hotel_1", "Family Room", 4, 260),
        room("room_6", "hotel_2", "Ocean View Room", 2, 150),
        room("room_7", "hotel_2", "Beachfront Suite", 3, 280),
        room("room_8", "hotel_3", "Standard Twin", 2, 90),
    ];

    let rates = vec![
        rate("rate_1", "room_1", "Standard Rate", 200, true, None),
        rate("rate_2", "room_1", "Non-refundable", 180, false, None),
        rate(
            "rate_3",
            "room_6",
            "Summer Special",
            150,
            true,
            Some((date(2024, 6, 1), date(2024, 8, 31))),
        ),
        rate("rate_4", "room_2", "Standard Rate", 320, true, None),
        rate("rate_5", "room_8", "Standard Rate", 90, true, None),
        rate("rate_6", "room_7", "Half Board", 280, true, None),
    ];

    Catalog::new(hotels, room_types, rates)
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid seed date")
}

fn hotel(id: &str, name: &str, stars: u8, city: &str, features: &[&str]) -> Hotel {
    Hotel {
        id: id.to_string(),
        name: name.to_string(),
        stars,
        city: city.to_string(),
        features: features.iter().map(|f| f.to_string()).collect(),
        description: String::new(),
    }
}

fn room(id: &str, hotel_id: &str, name: &str, capacity: u32, base_price: i64) -> RoomType {
    RoomType {
        id: id.to_string(),
        hotel_id: hotel_id.to_string(),
        name: name.to_string(),
        capacity,
        base_price,
    }
}

fn rate(
    id: &str,
    room_type_id: &str,
    title: &str,
    nightly_price: i64,
    refundable: bool,
    window: Option<(NaiveDate, NaiveDate)>,
) -> Rate {
    let (valid_from, valid_until) = match window {
        Some((from, until)) => (Some(from), Some(until)),
        None => (None, None),
    };
    Rate {
        id: id.to_string(),
        room_type_id: room_type_id.to_string(),
        title: title.to_string(),
        nightly_price,
        refundable,
        valid_from,
        valid_until,
    }
}
