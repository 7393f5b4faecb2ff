// Catalog search: hotel-level filtering and the bookable-offer join
use crate::domain::{Catalog, Hotel, Rate, RoomType};

// Every criterion is optional; an empty filter matches everything
#[derive(Debug, Clone, Default)]
pub struct SearchFilters {
    pub city: Option<String>,
    pub guests: Option<u32>,
    pub min_price: Option<i64>,
    pub max_price: Option<i64>,
    pub features: Vec<String>,
    pub stars: Vec<u8>,
    pub refundable_only: bool,
}

// One bookable combination surfaced by a search
#[derive(Debug, Clone)]
pub struct Offer<'a> {
    pub hotel: &'a Hotel,
    pub room_type: &'a RoomType,
    pub rate: &'a Rate,
}

impl Offer<'_> {
    pub fn nightly_price(&self) -> i64 {
        self.rate.nightly_price
    }
}

pub fn filter_hotels<'a>(catalog: &'a Catalog, filters: &SearchFilters) -> Vec<&'a Hotel> {
    let mut matched = Vec::new();

    for hotel in catalog.hotels() {
        if !filters
            .city
            .as_ref()
            .map_or(true, |city| hotel.city.eq_ignore_ascii_case(city))
        {
            continue;
        }

        if !filters.stars.is_empty() && !filters.stars.contains(&hotel.stars) {
            continue;
        }

        if !filters
            .features
            .iter()
            .all(|feature| hotel.features.contains(feature))
        {
            continue;
        }

        matched.push(hotel);
    }

    matched.sort_by(|a, b| a.id.cmp(&b.id));
    matched
}

pub fn search_offers<'a>(catalog: &'a Catalog, filters: &SearchFilters) -> Vec<Offer<'a>> {
    let mut offers = Vec::new();

    for hotel in filter_hotels(catalog, filters) {
        for room_type in catalog.room_types_of(&hotel.id) {
            if !filters
                .guests
                .map_or(true, |guests| room_type.capacity >= guests)
            {
                continue;
            }

            for rate in catalog.rates_of(&room_type.id) {
                if filters.refundable_only && !rate.refundable {
                    continue;
                }

                if !filters.min_price.map_or(true, |min| rate.nightly_price >= min) {
                    continue;
                }

                if !filters.max_price.map_or(true, |max| rate.nightly_price <= max) {
                    continue;
                }

                offers.push(Offer {
                    hotel,
                    room_type,
                    rate,
                });
            }
        }
    }

    // Cheapest first; ids break ties so results are stable across runs
    offers.sort_by(|a, b| {
        a.rate
            .nightly_price
            .cmp(&b.rate.nightly_price)
            .then_with(|| a.hotel.id.cmp(&b.hotel.id))
            .then_with(|| a.room_type.id.cmp(&b.room_type.id))
            .then_with(|| a.rate.id.cmp(&b.rate.id))
    });
    offers
}
