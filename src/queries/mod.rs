//! Query modules for the price paid SDK.
//!
//! Each module provides a query struct that borrows the SDK's collaborators
//! (the [`Geocoder`](crate::geocoder::Geocoder) and the
//! [`LandRegistry`](crate::registry::LandRegistry) client) and exposes
//! methods returning `Result<T>` with typed summary payloads.

pub mod prices;

pub use prices::PriceQuery;
