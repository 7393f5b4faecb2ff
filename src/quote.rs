// Stay pricing and the memoized quoter in front of it
use chrono::NaiveDate;
use serde::Serialize;

use crate::cache::{CacheConfig, CacheStatsReport, LruCache};
use crate::domain::{BookingItem, Catalog};
use crate::validate::ValidationFailure;

pub const CURRENCY: &str = "USD";

const OCCUPANCY_TAX_RATE: f64 = 0.10;
const CITY_TAX_RATE: f64 = 0.05;
const EARLY_BOOKING_DISCOUNT: f64 = 0.05;
const EARLY_BOOKING_MIN_LEAD_DAYS: i64 = 30;
const LONG_STAY_DISCOUNT: f64 = 0.10;
const LONG_STAY_MIN_NIGHTS: i64 = 7;

// Whole-day stay length, never less than one billable night
pub fn nights(checkin: NaiveDate, checkout: NaiveDate) -> i64 {
    (checkout - checkin).num_days().max(1)
}

pub fn stay_price(nightly_price: i64, checkin: NaiveDate, checkout: NaiveDate) -> i64 {
    nightly_price * nights(checkin, checkout)
}

// Memoization key: the exact pricing-lookup tuple
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PriceKey {
    pub hotel_id: String,
    pub room_type_id: String,
    pub rate_id: String,
    pub checkin: NaiveDate,
    pub checkout: NaiveDate,
    pub guests: u32,
}

impl PriceKey {
    pub fn from_item(item: &BookingItem) -> Self {
        Self {
            hotel_id: item.hotel_id.clone(),
            room_type_id: item.room_type_id.clone(),
            rate_id: item.rate_id.clone(),
            checkin: item.checkin,
            checkout: item.checkout,
            guests: item.guests,
        }
    }
}

pub type PriceCache = LruCache<PriceKey, i64>;

// Prices booking items, remembering results per key. Pricing is a pure
// function of (rate, dates), so a hit is always identical to recomputation.
pub struct Quoter {
    cache: PriceCache,
}

impl Quoter {
    pub fn new(config: CacheConfig) -> Self {
        Self {
            cache: PriceCache::new(config),
        }
    }

    pub fn price_item(
        &self,
        catalog: &Catalog,
        item: &BookingItem,
    ) -> Result<i64, ValidationFailure> {
        let key = PriceKey::from_item(item);
        if let Some(price) = self.cache.get(&key) {
            return Ok(price);
        }

        let rate = catalog
            .rate(&item.rate_id)
            .filter(|rate| rate.room_type_id == item.room_type_id)
            .ok_or_else(|| ValidationFailure::RateNotFound {
                rate_id: item.rate_id.clone(),
                room_type_id: item.room_type_id.clone(),
            })?;

        let price = stay_price(rate.nightly_price, item.checkin, item.checkout);
        self.cache.insert(key, price);
        Ok(price)
    }

    pub fn cache_stats(&self) -> CacheStatsReport {
        self.cache.stats()
    }
}

impl Default for Quoter {
    fn default() -> Self {
        Self::new(CacheConfig::default())
    }
}

// Customer-facing quote with taxes and discounts applied on top of the
// base stay price. `today` is passed in so the calculation stays pure.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Quote {
    pub hotel_id: String,
    pub room_type_id: String,
    pub rate_id: String,
    pub checkin: NaiveDate,
    pub checkout: NaiveDate,
    pub guests: u32,
    pub nights: i64,
    pub base_total: i64,
    pub occupancy_tax: f64,
    pub city_tax: f64,
    pub total_with_tax: f64,
    pub early_booking_discount: Option<f64>,
    pub long_stay_discount: Option<f64>,
    pub final_total: f64,
    pub currency: String,
}

pub fn quote_stay(
    catalog: &Catalog,
    item: &BookingItem,
    today: NaiveDate,
) -> Result<Quote, ValidationFailure> {
    let rate = catalog
        .rate(&item.rate_id)
        .filter(|rate| rate.room_type_id == item.room_type_id)
        .ok_or_else(|| ValidationFailure::RateNotFound {
            rate_id: item.rate_id.clone(),
            room_type_id: item.room_type_id.clone(),
        })?;

    let stay_nights = nights(item.checkin, item.checkout);
    let base_total = rate.nightly_price * stay_nights;

    let occupancy_tax = base_total as f64 * OCCUPANCY_TAX_RATE;
    let city_tax = base_total as f64 * CITY_TAX_RATE;
    let total_with_tax = base_total as f64 + occupancy_tax + city_tax;

    let mut final_total = total_with_tax;
    let early_booking_discount =
        if (item.checkin - today).num_days() > EARLY_BOOKING_MIN_LEAD_DAYS {
            final_total *= 1.0 - EARLY_BOOKING_DISCOUNT;
            Some(EARLY_BOOKING_DISCOUNT)
        } else {
            None
        };
    let long_stay_discount = if stay_nights > LONG_STAY_MIN_NIGHTS {
        final_total *= 1.0 - LONG_STAY_DISCOUNT;
        Some(LONG_STAY_DISCOUNT)
    } else {
        None
    };

    Ok(Quote {
        hotel_id: item.hotel_id.clone(),
        room_type_id: item.room_type_id.clone(),
        rate_id: item.rate_id.clone(),
        checkin: item.checkin,
        checkout: item.checkout,
        guests: item.guests,
        nights: stay_nights,
        base_total,
        occupancy_tax,
        city_tax,
        total_with_tax,
        early_booking_discount,
        long_stay_discount,
        final_total: round_cents(final_total),
        currency: CURRENCY.to_string(),
    })
}

fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}
