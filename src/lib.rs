// Hotel booking core: validation, pricing, and memoized quoting

pub mod cache;
pub mod domain;
pub mod quote;
pub mod search;
pub mod seed;
pub mod validate;
pub mod wire;

// Re-export key types for convenience
pub use cache::{CacheConfig, CacheStatsReport, LruCache};
pub use domain::{
    BookingItem, BookingRequest, BookingStatus, Catalog, Hotel, Rate, RoomType, ValidatedBooking,
};
pub use quote::{quote_stay, PriceKey, Quote, Quoter};
pub use search::{filter_hotels, search_offers, Offer, SearchFilters};
pub use validate::{BookingValidator, ValidationFailure};
pub use wire::{parse_booking_request, ValidationResponse, WireError};
